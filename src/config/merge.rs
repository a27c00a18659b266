//! Layer merging, decoding and post-decode fixes.

mod merge_policy;
mod post_process;
mod service;

pub use service::MergeService;
