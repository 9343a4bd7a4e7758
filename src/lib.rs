//! App icon server - serves uploaded app icons from an S3-compatible object store
//!
//! Icons are looked up per organization and project, their content type is
//! sniffed from magic bytes, and store failures are mapped to 404 or 500.

pub mod api;
pub mod app;
pub mod error;
pub mod mime;
pub mod models;
pub mod retrieval;
pub mod store;

pub use error::{Error, Result};
