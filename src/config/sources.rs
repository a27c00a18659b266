//! Configuration sources: the document layer and the environment overlay.

pub mod document;
pub mod environment;
