//! Remote configuration API surface.

pub mod client;

pub use client::{Document, FetchError, HttpRemoteApi, RemoteApi};

/// Top-level path segment of the telephony API. Every resource path
/// starts with it, and it is stripped when deriving destination files.
pub const API_PREFIX: &str = "/telephony";
