//! # View Models
//!
//! Pure, synchronous transforms from raw payloads to display-ready shapes.
//! Nothing here performs I/O or mutates its input.

pub mod calendar_view;
pub mod now_playing_view;
pub mod transform;
pub mod widget_view;

pub use calendar_view::{CalendarView, WeekColumn};
pub use now_playing_view::NowPlayingView;
pub use transform::{image_proxy_url, select_recent_window, DEFAULT_WINDOW_DAYS, IMAGE_PROXY_PATH};
pub use widget_view::WidgetView;
