use serde::{Deserialize, Serialize};

/// One file-system item in an ingested snapshot.
///
/// Snapshots are immutable: a new "open directory" action replaces the
/// whole tree, it never patches nodes in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    /// Ancestor names joined with `/`; unique across the snapshot.
    pub path: String,
    /// Captured text, files only. Absent for binary-skipped or unreadable
    /// files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Ordered children, directories only. May be empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Entry>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

impl Entry {
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<String>, content: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            path: path.into(),
            content,
            children: None,
        }
    }

    #[must_use]
    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<Entry>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            path: path.into(),
            content: None,
            children: Some(children),
        }
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Find an entry by its unique path anywhere in the forest.
    #[must_use]
    pub fn find_by_path<'a>(forest: &'a [Entry], path: &str) -> Option<&'a Entry> {
        for entry in forest {
            if entry.path == path {
                return Some(entry);
            }
            if let Some(children) = &entry.children {
                if let Some(found) = Self::find_by_path(children, path) {
                    return Some(found);
                }
            }
        }
        None
    }
}
