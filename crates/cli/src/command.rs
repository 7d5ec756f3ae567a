use anyhow::{Context as AnyhowContext, Result};
use autodoc_extract::flatten_tree;
use autodoc_graph::{build_graph, layout, LayoutConfig};
use autodoc_ingest::FsDirectoryHandle;
use autodoc_session::ProjectSession;
use std::path::Path;

async fn scan_into_session(path: &Path) -> Result<ProjectSession> {
    let root = FsDirectoryHandle::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let session = ProjectSession::new();
    session.open_directory(&root).await;
    log::debug!("Scanned {}", path.display());
    Ok(session)
}

fn title_for(path: &Path, title: Option<String>) -> String {
    title.unwrap_or_else(|| {
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or_else(|| "Project Documentation".to_string(), str::to_string)
    })
}

pub async fn scan(path: &Path, depth: usize, json: bool) -> Result<()> {
    let session = scan_into_session(path).await?;
    let tree = session.current_tree();

    if json {
        println!("{}", serde_json::to_string_pretty(tree.as_ref())?);
    } else {
        print!("{}", flatten_tree(&tree, depth));
    }
    Ok(())
}

pub async fn context(path: &Path, title: Option<String>, json: bool) -> Result<()> {
    let session = scan_into_session(path).await?;
    let context = session.project_context(&title_for(path, title));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "title": context.title,
                "tree": context.tree,
                "dependencies": context.dependencies,
                "snippets": context.snippets,
            }))?
        );
    } else {
        println!("--- FILE STRUCTURE ---");
        println!("{}", context.tree);
        println!("--- DEPENDENCIES ---");
        println!("{}", context.dependencies);
        println!();
        println!("--- CODE SNIPPETS ---");
        println!("{}", context.snippets);
    }
    Ok(())
}

pub async fn graph(path: &Path) -> Result<()> {
    let session = scan_into_session(path).await?;
    let tree = session.current_tree();

    let graph = build_graph(&tree);
    let (nodes, edges) = graph.elements();
    let positions = layout(&graph, &LayoutConfig::default());

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "nodes": nodes,
            "edges": edges,
            "positions": positions,
        }))?
    );
    Ok(())
}
