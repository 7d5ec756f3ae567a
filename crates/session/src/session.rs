use autodoc_engine::ProjectContext;
use autodoc_extract::{
    collect_key_snippets, flatten_tree, locate_manifest, DEFAULT_SNIPPET_CAP, DEFAULT_TREE_DEPTH,
};
use autodoc_ingest::{DirectoryHandle, DirectoryIngester, Entry, IngestOptions};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Owner of the current entry-tree snapshot.
///
/// Each "open directory" action takes a monotonically increasing ticket;
/// a completed scan is applied only while its ticket is still the latest,
/// so an older scan resolving late can never clobber a newer one. The
/// snapshot is replaced atomically through a watch channel and observed
/// immutably by every consumer.
pub struct ProjectSession {
    ingester: DirectoryIngester,
    tree_tx: watch::Sender<Arc<Vec<Entry>>>,
    ticket: AtomicU64,
}

impl Default for ProjectSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(IngestOptions::default())
    }

    #[must_use]
    pub fn with_options(options: IngestOptions) -> Self {
        let (tree_tx, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            ingester: DirectoryIngester::with_options(options),
            tree_tx,
            ticket: AtomicU64::new(0),
        }
    }

    /// Subscribe to snapshot replacements.
    #[must_use]
    pub fn tree(&self) -> watch::Receiver<Arc<Vec<Entry>>> {
        self.tree_tx.subscribe()
    }

    #[must_use]
    pub fn current_tree(&self) -> Arc<Vec<Entry>> {
        self.tree_tx.borrow().clone()
    }

    /// Scan `root` and publish the resulting snapshot.
    ///
    /// Returns `false` when the result was discarded because a newer open
    /// was initiated while this one was still scanning.
    pub async fn open_directory(&self, root: &dyn DirectoryHandle) -> bool {
        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let tree = self.ingester.ingest(root).await;

        let mut fresh = Some(tree);
        let applied = self.tree_tx.send_if_modified(|current| {
            // Checked under the channel lock so a newer publish cannot
            // interleave between the check and the replacement.
            if self.ticket.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *current = Arc::new(fresh.take().unwrap_or_default());
            true
        });

        if !applied {
            log::info!("Discarding stale scan result (ticket {ticket})");
        }
        applied
    }

    /// Derive the three generation artifacts from the current snapshot.
    #[must_use]
    pub fn project_context(&self, title: &str) -> ProjectContext {
        let snapshot = self.current_tree();
        ProjectContext {
            tree: flatten_tree(&snapshot, DEFAULT_TREE_DEPTH),
            dependencies: locate_manifest(&snapshot),
            snippets: collect_key_snippets(&snapshot, DEFAULT_SNIPPET_CAP),
            title: title.to_string(),
        }
    }
}
