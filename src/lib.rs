//! Newsdesk - news aggregation backend
//!
//! Polls a third-party headline API per category, caches results to a JSON
//! file, and serves the cached data (plus static HTML pages) over HTTP.

pub mod cache;
pub mod cli;
pub mod config;
pub mod news;
pub mod refresh;
pub mod server;
