//! Application state for the API server.

use std::sync::Arc;

use scenario_core::{ScenarioAnalyzer, WorkerConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The classification engine.
    pub analyzer: Arc<ScenarioAnalyzer>,
}

impl AppState {
    /// Creates state around an existing analyzer.
    pub fn new(analyzer: ScenarioAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }

    /// Creates state with the rule classifier only (no worker).
    pub fn rules_only() -> Self {
        Self::new(ScenarioAnalyzer::rules_only())
    }

    /// Creates state with an external worker as the preferred classifier.
    pub fn with_worker(config: WorkerConfig) -> Self {
        Self::new(ScenarioAnalyzer::with_worker(config))
    }
}
