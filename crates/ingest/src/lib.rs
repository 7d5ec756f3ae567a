//! # AutoDoc Ingest
//!
//! Fault-tolerant directory ingestion into an immutable entry tree.
//!
//! ## Pipeline
//!
//! ```text
//! DirectoryHandle (injected)
//!     │
//!     ├──> Ignore filter (build artifacts, lockfiles, dotfiles)
//!     │
//!     ├──> Binary skip (image/audio/video type hints)
//!     │
//!     └──> Entry tree
//!            ├─ Files: text capped at 100k chars
//!            └─ Directories: ordered children, depth-bounded
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use autodoc_ingest::{DirectoryIngester, FsDirectoryHandle, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let root = FsDirectoryHandle::open("/path/to/project")?;
//!     let tree = DirectoryIngester::new().ingest(&root).await;
//!
//!     println!("{} top-level entries", tree.len());
//!     Ok(())
//! }
//! ```

mod entry;
mod error;
mod fs;
mod handle;
mod ingester;

pub use entry::{Entry, EntryKind};
pub use error::{IngestError, Result};
pub use fs::FsDirectoryHandle;
pub use handle::{DirEntry, DirectoryHandle, EntryHandle, FileHandle};
pub use ingester::{DirectoryIngester, IngestOptions, MAX_FILE_CHARS};
