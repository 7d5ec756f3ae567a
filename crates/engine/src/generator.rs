use crate::error::Result;
use async_trait::async_trait;

/// Load-progress text reported by an engine while it prepares.
pub type ProgressSink = tokio::sync::mpsc::UnboundedSender<String>;

/// The injected text-generation collaborator.
///
/// Implementations may take arbitrarily long and may fail; the runtime
/// owns the status bookkeeping and failure mapping around them.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Prepare the engine, reporting human-readable progress through
    /// `progress`.
    async fn load(&self, progress: ProgressSink) -> Result<()>;

    /// Produce markdown for one assembled request.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// The three bounded artifacts plus the caller-supplied project title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub tree: String,
    pub dependencies: String,
    pub snippets: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    /// Whole-project README from the extracted context artifacts.
    ProjectReadme(ProjectContext),
    /// README section for a single file's captured text.
    FileDocs { filename: String, code: String },
}
