//! # Widgets
//!
//! Live external data widgets built on one asynchronous state cell.
//! Each widget owns a cell, the cell owns the in-flight request, and the
//! controller repaints whenever a cell publishes a transition.

pub mod controllers;
pub mod events;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;
pub mod widget;

// Re-export core types
pub use controllers::AppController;
pub use events::*;
pub use services::*;
pub use view_models::*;
pub use views::*;

// Re-export specific items from models to avoid conflicts
pub use models::{
    AsyncDataCell, CalendarPayload, CellSnapshot, DailyActivity, FetchPhase, FetchState,
    NowPlayingPayload, RefreshPolicy, StateHandler, Track,
};
pub use widget::{
    ActivityPresenter, ActivityWidget, NowPlayingPresenter, NowPlayingWidget, Widget,
    WidgetPresenter,
};
