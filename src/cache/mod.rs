//! Cache module for storing headline API responses
//!
//! This module provides the cache store that holds fetched articles per
//! category in memory and mirrors the full store to a JSON file on every
//! update. A missing or corrupt file at startup degrades to an empty store,
//! never a fatal error.

mod store;

pub use store::{CacheEntry, CacheStore};
