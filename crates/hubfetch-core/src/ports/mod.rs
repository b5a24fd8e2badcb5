//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core uses to talk to the outside world.
//! Implementations live in adapter crates (`hubfetch-hf`).

mod fetch;

pub use fetch::{ArtifactFetcherPort, FetchError, FetchResult};

#[cfg(any(test, feature = "test-utils"))]
pub use fetch::MockArtifactFetcherPort;
