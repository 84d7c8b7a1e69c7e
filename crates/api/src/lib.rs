//! HTTP API for the mosaic media-grid CMS.
//!
//! Exposed as a library so integration tests can build the exact router
//! and middleware stack the binary serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
