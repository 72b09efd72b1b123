//! # Widget Data Sources
//!
//! Concrete [`DataSource`] implementations for the two widgets.

use super::http::{DataSource, FetchError, HttpFetcher, SourceDescriptor};
use crate::widgets::models::{CalendarPayload, NowPlayingPayload};
use async_trait::async_trait;

/// Contribution calendar for one user over the last year
#[derive(Debug, Clone)]
pub struct ActivitySource {
    fetcher: HttpFetcher,
    descriptor: SourceDescriptor,
}

impl ActivitySource {
    pub fn new(fetcher: HttpFetcher, host: &str, username: &str) -> Self {
        Self {
            fetcher,
            descriptor: Self::descriptor_for(host, username),
        }
    }

    /// `{host}/v4/{username}?y=last`
    pub fn descriptor_for(host: &str, username: &str) -> SourceDescriptor {
        SourceDescriptor::new(format!(
            "{}/v4/{}?y=last",
            host.trim_end_matches('/'),
            username
        ))
    }
}

#[async_trait]
impl DataSource<CalendarPayload> for ActivitySource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn fetch(&self) -> Result<CalendarPayload, FetchError> {
        let payload: CalendarPayload = self
            .fetcher
            .get_json(&self.descriptor)
            .await
            .map_err(|e| {
                e.map_application_message(|message| {
                    format!("Error fetching GitHub activity: {message}")
                })
            })?;
        payload.validate().map_err(FetchError::malformed)?;
        tracing::debug!(
            "Activity payload holds {} days",
            payload.contributions.len()
        );
        Ok(payload)
    }
}

/// Same-origin "currently playing" endpoint
#[derive(Debug, Clone)]
pub struct NowPlayingSource {
    fetcher: HttpFetcher,
    descriptor: SourceDescriptor,
}

impl NowPlayingSource {
    pub fn new(fetcher: HttpFetcher, origin: &str, path: &str) -> Self {
        Self {
            fetcher,
            descriptor: SourceDescriptor::new(format!(
                "{}{}",
                origin.trim_end_matches('/'),
                path
            )),
        }
    }
}

#[async_trait]
impl DataSource<NowPlayingPayload> for NowPlayingSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn fetch(&self) -> Result<NowPlayingPayload, FetchError> {
        let response = match self.fetcher.get(&self.descriptor).await {
            Err(error) if error.is_malformed_body() => {
                tracing::debug!("Now-playing body unreadable ({}), treating as idle", error);
                return Ok(NowPlayingPayload::NotPlaying);
            }
            other => other?,
        };

        if !response.status.is_success() {
            tracing::warn!(
                "{} answered {}, reading body as now-playing anyway",
                self.descriptor,
                response.status.as_u16()
            );
        }

        // anything without a decodable object reads as not playing, whatever the status
        let payload = response
            .body
            .and_then(|body| serde_json::from_value(body).ok())
            .unwrap_or_default();
        Ok(payload)
    }
}
