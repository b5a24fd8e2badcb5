//! Path utilities for the Hub cache directory.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Environment lookups are injectable so resolution is testable without
//!   mutating the process environment
//! - OS-specific logic is kept private in `platform`

mod cache;
mod error;
mod platform;

pub use cache::{
    CacheDirResolution, CacheDirSource, DEFAULT_CACHE_DIR_RELATIVE, ENV_HF_HOME, ENV_HF_HUB_CACHE,
    default_cache_dir, resolve_cache_dir, resolve_cache_dir_with,
};
pub use error::PathError;
