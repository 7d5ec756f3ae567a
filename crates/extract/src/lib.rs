//! # AutoDoc Extract
//!
//! Bounded context artifacts derived from an ingested entry tree.
//!
//! ## Artifacts
//!
//! ```text
//! Entry forest (immutable snapshot)
//!     │
//!     ├──> flatten_tree        depth-capped structure listing
//!     │
//!     ├──> locate_manifest     dependency-manifest excerpt
//!     │
//!     └──> collect_key_snippets  heuristically filtered code excerpts
//! ```
//!
//! All three reducers are pure, never perform I/O, and enforce their caps
//! by silent truncation. An absent manifest or an empty bundle is a normal
//! result, not an error.

mod listing;
mod manifest;
mod snippets;

pub use listing::{flatten_tree, DEFAULT_TREE_DEPTH};
pub use manifest::{locate_manifest, NO_MANIFEST_SENTINEL};
pub use snippets::{
    collect_key_snippets, collect_key_snippets_with, HeuristicClassifier, SnippetClassifier,
    DEFAULT_SNIPPET_CAP,
};
