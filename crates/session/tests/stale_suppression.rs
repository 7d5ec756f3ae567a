//! Tests for snapshot ownership and stale-scan suppression.

use async_trait::async_trait;
use autodoc_ingest::{DirEntry, DirectoryHandle, FileHandle, Result as IngestResult};
use autodoc_session::{export_markdown, ProjectSession};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tokio::sync::Notify;

struct MockFile {
    text: String,
}

#[async_trait]
impl FileHandle for MockFile {
    fn type_hint(&self) -> Option<String> {
        None
    }

    async fn read_text(&self) -> IngestResult<String> {
        Ok(self.text.clone())
    }
}

/// One marker file; `entries` blocks until released when a gate is set.
struct MockDir {
    file_name: String,
    gate: Option<Arc<Notify>>,
}

impl MockDir {
    fn immediate(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            gate: None,
        }
    }

    fn gated(file_name: &str, gate: Arc<Notify>) -> Self {
        Self {
            file_name: file_name.to_string(),
            gate: Some(gate),
        }
    }
}

#[async_trait]
impl DirectoryHandle for MockDir {
    async fn entries(&self) -> IngestResult<Vec<DirEntry>> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Ok(vec![DirEntry::file(
            self.file_name.clone(),
            Box::new(MockFile {
                text: "content".to_string(),
            }),
        )])
    }
}

#[tokio::test]
async fn open_publishes_snapshot() {
    let session = ProjectSession::new();

    let applied = session.open_directory(&MockDir::immediate("a.ts")).await;

    assert!(applied);
    let tree = session.current_tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].name, "a.ts");
}

#[tokio::test]
async fn stale_scan_never_replaces_newer_result() {
    let session = Arc::new(ProjectSession::new());
    let gate = Arc::new(Notify::new());

    // Scan A blocks inside the handle until released.
    let scan_a = {
        let session = session.clone();
        let gate = gate.clone();
        tokio::spawn(async move {
            session
                .open_directory(&MockDir::gated("from_a.ts", gate))
                .await
        })
    };
    tokio::task::yield_now().await;

    // Scan B is initiated second and completes first.
    let applied_b = session.open_directory(&MockDir::immediate("from_b.ts")).await;
    assert!(applied_b);

    // Let A resolve late; its result must be discarded.
    gate.notify_one();
    let applied_a = scan_a.await.unwrap();
    assert!(!applied_a);

    let tree = session.current_tree();
    assert_eq!(tree[0].name, "from_b.ts");
}

#[tokio::test]
async fn watchers_see_replacements() {
    let session = ProjectSession::new();
    let mut tree_rx = session.tree();

    assert!(tree_rx.borrow().is_empty());

    session.open_directory(&MockDir::immediate("a.ts")).await;

    assert!(tree_rx.has_changed().unwrap());
    assert_eq!(tree_rx.borrow_and_update()[0].name, "a.ts");
}

#[tokio::test]
async fn project_context_carries_all_artifacts() {
    let session = ProjectSession::new();
    session
        .open_directory(&MockDir::immediate("UserModel.ts"))
        .await;

    let context = session.project_context("Demo Project");

    assert_eq!(context.title, "Demo Project");
    assert_eq!(context.tree, "- UserModel.ts (file)\n");
    assert_eq!(context.dependencies, "No dependency file found.");
    assert!(context.snippets.contains("--- File: UserModel.ts ---"));
}

#[tokio::test]
async fn export_writes_sanitized_readme() {
    let tmp = tempfile::tempdir().unwrap();

    let path = export_markdown(tmp.path(), "My Cool App!", "# Docs\n")
        .await
        .unwrap();

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("My_Cool_App__README.md")
    );
    assert_eq!(std::fs::read_to_string(path).unwrap(), "# Docs\n");
}
