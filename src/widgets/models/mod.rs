//! # Models
//!
//! Widget payloads and the asynchronous state container that holds them.

pub mod calendar;
pub mod cell;
pub mod fetch_state;
pub mod now_playing;

pub use calendar::{CalendarPayload, DailyActivity, MAX_INTENSITY_LEVEL};
pub use cell::{AsyncDataCell, CellSnapshot, RefreshPolicy, StateHandler};
pub use fetch_state::{FetchPhase, FetchState};
pub use now_playing::{NowPlayingPayload, Track};
