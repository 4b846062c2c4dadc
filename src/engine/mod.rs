//! Traversal engine: interprets schemas against the live remote tree.

pub mod group;
pub mod walker;

pub use group::GroupBackup;
pub use walker::Walker;
