use std::ffi::OsString;

pub use clap::Parser;
use clap::ValueEnum;

/// Widget picked with `--only`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WidgetSelection {
    Activity,
    NowPlaying,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Config file path
    /// Optional. Overrides LIVEWIDGET_CONFIG_PATH and the default location.
    #[clap(short = 'c', long, help = "config file path")]
    config: Option<String>,

    /// Activity calendar user
    #[clap(short = 'u', long, help = "activity calendar username")]
    username: Option<String>,

    /// Number of trailing days shown by the activity calendar
    #[clap(short = 'w', long, help = "days shown in the activity calendar")]
    window: Option<usize>,

    /// Origin serving the now-playing endpoint
    #[clap(short = 'o', long, help = "origin serving /api/spotify")]
    origin: Option<String>,

    /// Refresh interval in seconds; 0 fetches once and exits
    #[clap(short = 'r', long = "refresh-secs", help = "refresh interval in seconds")]
    refresh_secs: Option<u64>,

    /// Mount a single widget
    #[clap(long, value_enum, help = "show only one widget")]
    only: Option<WidgetSelection>,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CommandLineArgs {
    config: Option<String>,
    username: Option<String>,
    window: Option<usize>,
    origin: Option<String>,
    refresh_secs: Option<u64>,
    only: Option<WidgetSelection>,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            config: args.config,
            username: args.username,
            window: args.window,
            origin: args.origin,
            refresh_secs: args.refresh_secs,
            only: args.only,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn config(&self) -> Option<&String> {
        self.config.as_ref()
    }

    pub fn username(&self) -> Option<&String> {
        self.username.as_ref()
    }

    pub fn window(&self) -> Option<usize> {
        self.window
    }

    pub fn origin(&self) -> Option<&String> {
        self.origin.as_ref()
    }

    pub fn refresh_secs(&self) -> Option<u64> {
        self.refresh_secs
    }

    pub fn only(&self) -> Option<WidgetSelection> {
        self.only
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
