//! Local filesystem persistence.

pub mod store;

pub use store::ArtifactStore;
