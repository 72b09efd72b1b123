//! # View Layer
//!
//! Turns widget views into styled lines and paints them to a terminal.
//! Building lines is pure; only [`TerminalRenderer`] performs I/O.

use crate::widgets::view_models::{CalendarView, NowPlayingView, WidgetView};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};

/// Glyph per intensity level, 0 (no activity) to 4
const LEVEL_GLYPHS: [&str; 5] = ["·", "░", "▒", "▓", "█"];

/// Calendar theme endpoints (empty day, busiest day)
const LEVEL_COLOR_LOW: (u8, u8, u8) = (0x31, 0x32, 0x44);
const LEVEL_COLOR_HIGH: (u8, u8, u8) = (0xcb, 0xa6, 0xf7);

const WEEKDAY_LABELS: [&str; 7] = ["   ", "Mon", "   ", "Wed", "   ", "Fri", "   "];

/// Semantic colour of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Accent,
    Muted,
    Error,
    Level(u8),
}

impl Tone {
    fn color(&self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Accent => Some(Color::Magenta),
            Tone::Muted => Some(Color::DarkGrey),
            Tone::Error => Some(Color::Red),
            Tone::Level(level) => Some(level_color(*level)),
        }
    }
}

fn level_color(level: u8) -> Color {
    let level = u16::from(level.min(4));
    let mix = |low: u8, high: u8| -> u8 {
        let (low, high) = (u16::from(low), u16::from(high));
        let value = if high >= low {
            low + (high - low) * level / 4
        } else {
            low - (low - high) * level / 4
        };
        u8::try_from(value).unwrap_or(u8::MAX)
    };
    Color::Rgb {
        r: mix(LEVEL_COLOR_LOW.0, LEVEL_COLOR_HIGH.0),
        g: mix(LEVEL_COLOR_LOW.1, LEVEL_COLOR_HIGH.1),
        b: mix(LEVEL_COLOR_LOW.2, LEVEL_COLOR_HIGH.2),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One terminal row made of styled spans
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self::new(vec![Span::new(text, tone)])
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Text of the line without styling
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Everything painted in one pass; `None` for widgets that are not mounted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardFrame {
    pub activity: Option<WidgetView<CalendarView>>,
    pub now_playing: Option<WidgetView<NowPlayingView>>,
}

impl DashboardFrame {
    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::new();
        if let Some(view) = &self.activity {
            lines.push(Line::styled("Activity", Tone::Accent));
            lines.extend(calendar_lines(view));
        }
        if let Some(view) = &self.now_playing {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::styled("Spotify", Tone::Accent));
            lines.extend(now_playing_lines(view));
        }
        lines
    }

    /// Frame as plain text, one line per row
    pub fn plain_text(&self) -> String {
        self.lines()
            .iter()
            .map(Line::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn loading_line() -> Line {
    Line::styled("◌ Loading...", Tone::Muted)
}

fn error_line(message: &str) -> Line {
    Line::styled(format!("❌ {message}"), Tone::Error)
}

/// Lines for the activity widget
pub fn calendar_lines(view: &WidgetView<CalendarView>) -> Vec<Line> {
    let calendar = match view {
        WidgetView::Loading => return vec![loading_line()],
        WidgetView::Error { message } => return vec![error_line(message)],
        WidgetView::Content(calendar) => calendar,
    };

    if calendar.weeks().is_empty() {
        return vec![Line::styled("No activity yet", Tone::Muted)];
    }

    // every week column is two cells wide
    let mut header = String::from("    ");
    for (column, label) in calendar.month_labels() {
        let target = 4 + column * 2;
        if header.chars().count() < target {
            header.push_str(&" ".repeat(target - header.chars().count()));
        }
        if header.chars().count() == target {
            header.push_str(label);
        }
    }

    let mut lines = vec![Line::styled(header.trim_end().to_string(), Tone::Muted)];
    for (row, weekday) in WEEKDAY_LABELS.iter().enumerate() {
        let mut spans = vec![Span::new(format!("{weekday} "), Tone::Muted)];
        for week in calendar.weeks() {
            match week[row] {
                Some(level) => {
                    let glyph = LEVEL_GLYPHS[usize::from(level.min(4))];
                    spans.push(Span::new(format!("{glyph} "), Tone::Level(level)));
                }
                None => spans.push(Span::new("  ", Tone::Plain)),
            }
        }
        lines.push(Line::new(spans));
    }
    lines
}

/// Lines for the now-playing widget
pub fn now_playing_lines(view: &WidgetView<NowPlayingView>) -> Vec<Line> {
    match view {
        WidgetView::Loading => vec![loading_line()],
        WidgetView::Error { message } => vec![error_line(message)],
        WidgetView::Content(NowPlayingView::Idle) => {
            vec![Line::styled("♫ Not Playing", Tone::Plain)]
        }
        WidgetView::Content(NowPlayingView::Playing {
            title,
            artist,
            album,
            art_src,
            song_url,
        }) => vec![
            Line::styled("〰 Now playing...", Tone::Accent),
            Line::styled(title.clone(), Tone::Plain),
            Line::new(vec![
                Span::new("♥ ", Tone::Accent),
                Span::new(artist.clone(), Tone::Plain),
            ]),
            Line::styled(format!("Album: {album}"), Tone::Muted),
            Line::styled(format!("Art:   {art_src}"), Tone::Muted),
            Line::styled(format!("Link:  {song_url}"), Tone::Muted),
        ],
    }
}

/// Trait for painting dashboard frames
pub trait WidgetRenderer {
    /// Prepare the output before the first frame
    fn initialize(&mut self) -> Result<()>;

    /// Paint a complete frame
    fn render_frame(&mut self, frame: &DashboardFrame) -> Result<()>;

    /// Restore the output on exit
    fn cleanup(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Clear and repaint in place (interactive terminal)
    Redraw,
    /// Print each frame below the previous one (pipes, logs)
    Append,
}

/// Crossterm-based renderer writing to any `Write`
pub struct TerminalRenderer<W: Write> {
    out: W,
    mode: RenderMode,
    frames_painted: usize,
}

impl TerminalRenderer<io::Stdout> {
    /// Renderer on stdout, redrawing in place when stdout is a terminal
    pub fn stdout() -> Self {
        let out = io::stdout();
        let mode = if out.is_terminal() {
            RenderMode::Redraw
        } else {
            RenderMode::Append
        };
        Self::new(out, mode)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, mode: RenderMode) -> Self {
        Self {
            out,
            mode,
            frames_painted: 0,
        }
    }

    pub fn frames_painted(&self) -> usize {
        self.frames_painted
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint_line(&mut self, line: &Line) -> Result<()> {
        for span in line.spans() {
            match span.tone.color() {
                Some(color) => queue!(
                    self.out,
                    SetForegroundColor(color),
                    Print(&span.text),
                    ResetColor
                )?,
                None => queue!(self.out, Print(&span.text))?,
            }
        }
        queue!(self.out, Print("\n"))?;
        Ok(())
    }
}

impl<W: Write> WidgetRenderer for TerminalRenderer<W> {
    fn initialize(&mut self) -> Result<()> {
        if self.mode == RenderMode::Redraw {
            queue!(self.out, Hide, Clear(ClearType::All))?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn render_frame(&mut self, frame: &DashboardFrame) -> Result<()> {
        match self.mode {
            RenderMode::Redraw => queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?,
            RenderMode::Append if self.frames_painted > 0 => queue!(self.out, Print("\n"))?,
            RenderMode::Append => {}
        }
        for line in frame.lines() {
            self.paint_line(&line)?;
        }
        self.out.flush()?;
        self.frames_painted += 1;
        tracing::trace!("Painted frame #{}", self.frames_painted);
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.mode == RenderMode::Redraw {
            queue!(self.out, Show)?;
            self.out.flush()?;
        }
        Ok(())
    }
}
