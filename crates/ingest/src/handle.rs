use crate::error::Result;
use async_trait::async_trait;

/// Read access to one file behind the injected directory capability.
#[async_trait]
pub trait FileHandle: Send + Sync {
    /// MIME-like hint (e.g. `image/png`). `None` when the adapter has no
    /// guess; such files are treated as text.
    fn type_hint(&self) -> Option<String>;

    async fn read_text(&self) -> Result<String>;
}

/// Ordered enumeration of one directory behind the injected capability.
///
/// The concrete access mechanism (local filesystem, browser handle, test
/// fixture) is the adapter's business; the ingester only relies on the
/// enumeration order being stable between scans of the same layout.
#[async_trait]
pub trait DirectoryHandle: Send + Sync {
    /// Child entries in the handle's canonical order.
    async fn entries(&self) -> Result<Vec<DirEntry>>;
}

pub enum EntryHandle {
    File(Box<dyn FileHandle>),
    Directory(Box<dyn DirectoryHandle>),
}

pub struct DirEntry {
    pub name: String,
    pub handle: EntryHandle,
}

impl DirEntry {
    #[must_use]
    pub fn file(name: impl Into<String>, handle: Box<dyn FileHandle>) -> Self {
        Self {
            name: name.into(),
            handle: EntryHandle::File(handle),
        }
    }

    #[must_use]
    pub fn directory(name: impl Into<String>, handle: Box<dyn DirectoryHandle>) -> Self {
        Self {
            name: name.into(),
            handle: EntryHandle::Directory(handle),
        }
    }
}
