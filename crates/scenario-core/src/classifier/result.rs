//! The verdict model shared by every classifier path.

use serde::{Deserialize, Serialize};

use super::{Category, Rating, SeverityTier};

/// One flagged fragment of the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// 1-based line number of the fragment.
    pub line: u32,
    /// Excerpt of the flagged text.
    pub text: String,
    /// The category this fragment was flagged under.
    pub category: Category,
    /// Severity of the issue.
    pub severity: SeverityTier,
}

/// One analyzable unit of the input.
///
/// The rule fallback always produces a single scene spanning the whole
/// input; the external worker may emit extra per-scene fields, which are
/// ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_id: u32,
    /// Scene text, possibly truncated for storage and display.
    pub content: String,
    /// Flagged fragments in detection order.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// The classification verdict for one analysis request.
///
/// Constructed exactly once per request by whichever classifier path won,
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Age-appropriateness rating.
    pub rating: Rating,
    /// Detected categories in detection order, without duplicates.
    pub categories: Vec<Category>,
    /// Human-readable summary.
    pub comment: String,
    /// Analyzed scenes in order.
    pub scenes: Vec<Scene>,
}

impl ClassificationResult {
    /// Checks the rating/categories invariant: the rating must equal the
    /// one derived from the highest severity tier present.
    pub fn is_consistent(&self) -> bool {
        self.rating == Rating::for_categories(&self.categories)
    }

    /// Returns all issues across all scenes, in order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.scenes.iter().flat_map(|s| s.issues.iter())
    }

    /// Counts issues flagged under the given category.
    pub fn issue_count(&self, category: Category) -> usize {
        self.issues().filter(|i| i.category == category).count()
    }
}
