//! # Services Layer
//!
//! Network access for widgets. Services own the HTTP client and turn each
//! remote endpoint into a typed [`DataSource`].

pub mod http;
pub mod sources;

pub use http::{DataSource, FetchError, HttpFetcher, JsonResponse, SourceDescriptor, TransportKind};
pub use sources::{ActivitySource, NowPlayingSource};
