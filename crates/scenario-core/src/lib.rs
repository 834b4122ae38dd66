//! Scenario Core - age-rating classification engine.
//!
//! This crate decides which classifier produces the authoritative verdict
//! for a scenario text: an external worker process when it is available
//! and well-behaved, or the deterministic keyword rule engine otherwise.

pub mod classifier;

pub use classifier::{
    AnalyzeError, Category, ClassificationResult, ExternalClassifier, Issue, Rating,
    RuleClassifier, Scene, ScenarioAnalyzer, ScenarioClassifier, SeverityTier, WorkerConfig,
    WorkerFailure,
};
