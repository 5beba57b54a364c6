//! Music catalogue search contracts and no-op adapter.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`MusicSearchService`].
pub type SearchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One track result from the catalogue search.
pub struct TrackHit {
    /// Track display name.
    pub track_name: String,
    /// Artist display name.
    pub artist_name: String,
    /// Streamable preview URL when the catalogue exposes one.
    pub preview_url: Option<String>,
    /// Cover artwork URL when the catalogue exposes one.
    pub artwork_url: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Search failures surfaced to the music widget.
pub enum SearchError {
    /// The catalogue request could not be completed.
    #[error("search request failed: {0}")]
    Request(String),
    /// The catalogue response could not be decoded.
    #[error("search response could not be decoded: {0}")]
    Decode(String),
}

/// Host service for music catalogue lookups.
///
/// The widget issues lookups behind a debounce; the network transport is an
/// embedding concern and never part of the desktop core.
pub trait MusicSearchService {
    /// Searches the catalogue for `term`, returning at most `limit` hits.
    fn search<'a>(
        &'a self,
        term: &'a str,
        limit: usize,
    ) -> SearchFuture<'a, Result<Vec<TrackHit>, SearchError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op search service for targets without a catalogue transport.
pub struct NoopMusicSearchService;

impl MusicSearchService for NoopMusicSearchService {
    fn search<'a>(
        &'a self,
        _term: &'a str,
        _limit: usize,
    ) -> SearchFuture<'a, Result<Vec<TrackHit>, SearchError>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_service_returns_no_hits() {
        let service = NoopMusicSearchService;
        let hits = futures::executor::block_on(service.search("daft punk", 5))
            .expect("noop search never fails");
        assert!(hits.is_empty());
    }
}
