//! Typed host-boundary contracts shared by the desktop runtime.
//!
//! This crate is the seam between the in-memory desktop state machines and
//! whatever the page actually runs on: wall-clock time (notification ids,
//! RNG seeds) and the music catalogue search service. Concrete network
//! adapters live with the embedding application; the runtime only sees the
//! traits defined here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod search;
pub mod time;

pub use search::{MusicSearchService, NoopMusicSearchService, SearchError, SearchFuture, TrackHit};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
