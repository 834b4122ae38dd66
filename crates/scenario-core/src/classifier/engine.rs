//! Classification orchestrator.
//!
//! Tries the preferred (external) classifier and absorbs every one of its
//! failure modes into the rule fallback. The caller always gets a verdict
//! for non-empty input.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use super::{ClassificationResult, ExternalClassifier, RuleClassifier, WorkerConfig, WorkerFailure};

/// Errors surfaced by [`ScenarioAnalyzer::analyze`].
///
/// Empty input is the only condition the engine reports outward; every
/// preferred-path failure is absorbed into the fallback instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("scenario content is empty")]
    EmptyContent,
}

/// A classifier that may produce the authoritative verdict.
///
/// Two implementations exist: the process-backed [`ExternalClassifier`]
/// and the in-process [`RuleClassifier`]. The orchestrator composes them;
/// nothing is hard-wired to a particular worker script.
#[async_trait]
pub trait ScenarioClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<ClassificationResult, WorkerFailure>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

#[async_trait]
impl ScenarioClassifier for ExternalClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult, WorkerFailure> {
        self.invoke(text).await
    }

    fn name(&self) -> &'static str {
        "external"
    }
}

#[async_trait]
impl ScenarioClassifier for RuleClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult, WorkerFailure> {
        Ok(RuleClassifier::classify(self, text))
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}

/// The classification façade.
///
/// Holds an optional preferred classifier and the always-available rule
/// fallback. Fallback is one-shot and final per request; the preferred
/// path is never retried.
pub struct ScenarioAnalyzer {
    preferred: Option<Box<dyn ScenarioClassifier>>,
    fallback: RuleClassifier,
}

impl ScenarioAnalyzer {
    /// Creates an analyzer with an explicit preferred classifier.
    pub fn new(preferred: Option<Box<dyn ScenarioClassifier>>) -> Self {
        Self {
            preferred,
            fallback: RuleClassifier::new(),
        }
    }

    /// Creates an analyzer that only uses the rule classifier.
    pub fn rules_only() -> Self {
        Self::new(None)
    }

    /// Creates an analyzer backed by an external worker process.
    pub fn with_worker(config: WorkerConfig) -> Self {
        Self::new(Some(Box::new(ExternalClassifier::new(config))))
    }

    /// Returns true if a preferred classifier is configured.
    pub fn has_preferred(&self) -> bool {
        self.preferred.is_some()
    }

    /// Classifies the scenario text.
    ///
    /// Rejects empty input; otherwise always produces a verdict. A
    /// preferred-path failure is logged and absorbed: the rule classifier
    /// answers instead, and the two paths never run concurrently.
    pub async fn analyze(&self, text: &str) -> Result<ClassificationResult, AnalyzeError> {
        if text.is_empty() {
            return Err(AnalyzeError::EmptyContent);
        }

        if let Some(preferred) = &self.preferred {
            match preferred.classify(text).await {
                Ok(result) => {
                    debug!(classifier = preferred.name(), rating = %result.rating, "classification done");
                    return Ok(result);
                }
                Err(failure) => {
                    warn!(
                        classifier = preferred.name(),
                        %failure,
                        "preferred classifier failed, using rule fallback"
                    );
                }
            }
        }

        let result = self.fallback.classify(text);
        debug!(classifier = "rules", rating = %result.rating, "classification done");
        Ok(result)
    }
}
