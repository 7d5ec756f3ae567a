use crate::generator::{GenerationRequest, ProjectContext, TextGenerator};
use crate::status::EngineStatus;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tokio::sync::{mpsc, watch, Mutex as TokioMutex};

/// Fallback markdown when a project README request fails.
pub const PROJECT_FALLBACK_MARKDOWN: &str = "# Error\nFailed to generate project docs.";

/// Fallback markdown when a single-file request fails.
pub const FILE_FALLBACK_MARKDOWN: &str = "# Error\nFailed.";

/// Leading "Here is ...:" filler some engines prepend to README output.
static CONVERSATIONAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Here is.*?:\n").unwrap());

/// Bracketed stage tag at the front of engine load-progress lines.
static PROGRESS_STAGE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());

/// Single owner of the engine status state machine.
///
/// Requests are serialized through an internal gate; status and
/// load-progress text are published over watch channels for the rendering
/// layer. Engine faults never escape: failed requests resolve to a fixed
/// fallback markdown string.
pub struct EngineRuntime {
    generator: Arc<dyn TextGenerator>,
    status_tx: watch::Sender<EngineStatus>,
    progress_tx: watch::Sender<String>,
    gate: TokioMutex<()>,
}

impl EngineRuntime {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let (status_tx, _) = watch::channel(EngineStatus::Idle);
        let (progress_tx, _) = watch::channel(String::new());
        Self {
            generator,
            status_tx,
            progress_tx,
            gate: TokioMutex::new(()),
        }
    }

    #[must_use]
    pub fn status(&self) -> watch::Receiver<EngineStatus> {
        self.status_tx.subscribe()
    }

    #[must_use]
    pub fn current_status(&self) -> EngineStatus {
        *self.status_tx.borrow()
    }

    /// Load-progress text, already stripped of its bracketed stage tag.
    #[must_use]
    pub fn progress(&self) -> watch::Receiver<String> {
        self.progress_tx.subscribe()
    }

    pub async fn generate_project_readme(&self, context: ProjectContext) -> String {
        self.generate(GenerationRequest::ProjectReadme(context)).await
    }

    pub async fn generate_file_docs(
        &self,
        filename: impl Into<String>,
        code: impl Into<String>,
    ) -> String {
        self.generate(GenerationRequest::FileDocs {
            filename: filename.into(),
            code: code.into(),
        })
        .await
    }

    /// Run one request through the state machine. Always returns markdown;
    /// a load or generation failure resolves to the request's fallback.
    pub async fn generate(&self, request: GenerationRequest) -> String {
        let _guard = self.gate.lock().await;

        if !self.ensure_loaded().await {
            return fallback_markdown(&request).to_string();
        }

        self.set_status(EngineStatus::Generating);
        let result = self.generator.generate(&request).await;
        self.set_status(EngineStatus::Ready);

        match result {
            Ok(output) => clean_output(&request, output),
            Err(err) => {
                log::warn!("Generation failed: {err}");
                fallback_markdown(&request).to_string()
            }
        }
    }

    /// idle→loading→ready; a load failure returns to idle.
    ///
    /// Callers hold the gate, so the first use loads and later uses see
    /// `Ready` immediately.
    async fn ensure_loaded(&self) -> bool {
        if self.current_status() != EngineStatus::Idle {
            return true;
        }

        self.set_status(EngineStatus::Loading);

        let (progress_in, mut progress_out) = mpsc::unbounded_channel::<String>();
        let progress_tx = self.progress_tx.clone();
        let forwarder = tokio::spawn(async move {
            while let Some(line) = progress_out.recv().await {
                let cleaned = PROGRESS_STAGE_TAG.replace(&line, "").trim().to_string();
                progress_tx.send_replace(cleaned);
            }
        });

        let loaded = self.generator.load(progress_in).await;
        let _ = forwarder.await;

        match loaded {
            Ok(()) => {
                self.set_status(EngineStatus::Ready);
                true
            }
            Err(err) => {
                log::warn!("Engine load failed: {err}");
                self.set_status(EngineStatus::Idle);
                false
            }
        }
    }

    fn set_status(&self, status: EngineStatus) {
        // send_replace updates the value even with no subscribers.
        self.status_tx.send_replace(status);
    }
}

fn fallback_markdown(request: &GenerationRequest) -> &'static str {
    match request {
        GenerationRequest::ProjectReadme(_) => PROJECT_FALLBACK_MARKDOWN,
        GenerationRequest::FileDocs { .. } => FILE_FALLBACK_MARKDOWN,
    }
}

/// README output loses any leading conversational filler and surrounding
/// whitespace; single-file output is passed through untouched.
fn clean_output(request: &GenerationRequest, output: String) -> String {
    match request {
        GenerationRequest::ProjectReadme(_) => CONVERSATIONAL_PREFIX
            .replace(&output, "")
            .trim()
            .to_string(),
        GenerationRequest::FileDocs { .. } => output,
    }
}
