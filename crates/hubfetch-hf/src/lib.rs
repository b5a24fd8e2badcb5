#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::HubFetcher;

// Configuration
pub use config::{DEFAULT_ENDPOINT, HubClientConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
