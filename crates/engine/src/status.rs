use serde::Serialize;

/// Engine lifecycle, owned solely by [`crate::EngineRuntime`].
///
/// Transitions: idle→loading on first use, loading→ready on success,
/// loading→idle on load failure, ready→generating on a request,
/// generating→ready on completion or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Idle,
    Loading,
    Ready,
    Generating,
}

impl EngineStatus {
    /// Whether the engine is occupied and a new request should wait.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, EngineStatus::Loading | EngineStatus::Generating)
    }
}
