//! Scenario content classification.
//!
//! This module rates narrative text for age appropriateness and tags it
//! with content-warning categories.

mod category;
mod engine;
mod result;
mod rules;
mod worker;

pub use category::{Category, Rating, SeverityTier};
pub use engine::{AnalyzeError, ScenarioAnalyzer, ScenarioClassifier};
pub use result::{ClassificationResult, Issue, Scene};
pub use rules::RuleClassifier;
pub use worker::{ExternalClassifier, WorkerConfig, WorkerFailure};
