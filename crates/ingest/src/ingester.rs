use crate::entry::{Entry, EntryKind};
use crate::handle::{DirectoryHandle, EntryHandle};
use std::future::Future;
use std::pin::Pin;

/// Names skipped outright: build artifacts, lockfiles, version-control
/// metadata.
const IGNORED_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    "package-lock.json",
    "yarn.lock",
    ".DS_Store",
];

/// Type-hint prefixes of non-text categories that contribute no entry.
const BINARY_HINT_PREFIXES: &[&str] = &["image", "audio", "video"];

/// Captured text per file never exceeds this many characters.
pub const MAX_FILE_CHARS: usize = 100_000;

const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Recursion ceiling. Directories at the ceiling keep an empty child
    /// list; guards against symlink cycles in the underlying tree.
    pub max_depth: usize,
    /// Per-file content cap, in characters. Truncation is silent.
    pub max_file_chars: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_file_chars: MAX_FILE_CHARS,
        }
    }
}

/// Reads an abstract directory handle into an immutable [`Entry`] tree.
///
/// The scan itself never fails: unreadable files keep their entry with no
/// content, unenumerable directories keep an empty child list, and both
/// are logged and skipped.
pub struct DirectoryIngester {
    options: IngestOptions,
}

impl Default for DirectoryIngester {
    fn default() -> Self {
        Self::new()
    }
}

type BoxedScan<'a> = Pin<Box<dyn Future<Output = Vec<Entry>> + Send + 'a>>;

impl DirectoryIngester {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(IngestOptions::default())
    }

    #[must_use]
    pub fn with_options(options: IngestOptions) -> Self {
        Self { options }
    }

    /// Depth-first, order-preserving scan of `root`.
    ///
    /// Child order in the result matches the handle's enumeration order,
    /// so two scans of the same layout yield an identical tree shape.
    pub async fn ingest(&self, root: &dyn DirectoryHandle) -> Vec<Entry> {
        self.read_directory(root, String::new(), 0).await
    }

    fn read_directory<'a>(
        &'a self,
        dir: &'a dyn DirectoryHandle,
        path: String,
        depth: usize,
    ) -> BoxedScan<'a> {
        Box::pin(async move {
            let mut entries = Vec::new();

            if depth >= self.options.max_depth {
                log::warn!(
                    "Depth ceiling {} reached at {}; pruning subtree",
                    self.options.max_depth,
                    display_path(&path)
                );
                return entries;
            }

            let children = match dir.entries().await {
                Ok(children) => children,
                Err(err) => {
                    log::warn!("Failed to enumerate {}: {err}", display_path(&path));
                    return entries;
                }
            };

            for child in children {
                if is_ignored(&child.name) {
                    continue;
                }

                let child_path = format!("{path}/{}", child.name);

                match child.handle {
                    EntryHandle::File(file) => {
                        if is_binary_hint(file.type_hint().as_deref()) {
                            continue;
                        }
                        let content = match file.read_text().await {
                            Ok(text) => Some(truncate_chars(text, self.options.max_file_chars)),
                            Err(err) => {
                                log::warn!("Failed to read {child_path}: {err}");
                                None
                            }
                        };
                        entries.push(Entry {
                            name: child.name,
                            kind: EntryKind::File,
                            path: child_path,
                            content,
                            children: None,
                        });
                    }
                    EntryHandle::Directory(sub) => {
                        let nested = self
                            .read_directory(sub.as_ref(), child_path.clone(), depth + 1)
                            .await;
                        entries.push(Entry {
                            name: child.name,
                            kind: EntryKind::Directory,
                            path: child_path,
                            content: None,
                            children: Some(nested),
                        });
                    }
                }
            }

            entries
        })
    }
}

fn is_ignored(name: &str) -> bool {
    IGNORED_NAMES.contains(&name) || name.starts_with('.')
}

fn is_binary_hint(hint: Option<&str>) -> bool {
    hint.is_some_and(|hint| {
        BINARY_HINT_PREFIXES
            .iter()
            .any(|prefix| hint.starts_with(prefix))
    })
}

/// Truncate to at most `cap` characters on a char boundary.
fn truncate_chars(mut text: String, cap: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(cap) {
        text.truncate(idx);
    }
    text
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}
