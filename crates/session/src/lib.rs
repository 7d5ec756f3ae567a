//! # AutoDoc Session
//!
//! Single-owner workspace state for the "open directory" workflow.
//!
//! ## Responsibilities
//!
//! ```text
//! open directory action
//!     │
//!     ├──> DirectoryIngester (one logical scan at a time)
//!     │      └─ stale completions detected by ticket and discarded
//!     │
//!     ├──> Current tree (immutable snapshot behind a watch channel,
//!     │    replaced atomically, never patched)
//!     │
//!     ├──> Context artifacts (tree listing, manifest, snippets + title)
//!     │
//!     └──> README export (sanitized filename, UTF-8 write)
//! ```

mod error;
mod export;
mod session;

pub use autodoc_engine::ProjectContext;
pub use error::{Result, SessionError};
pub use export::{export_markdown, readme_filename};
pub use session::ProjectSession;
