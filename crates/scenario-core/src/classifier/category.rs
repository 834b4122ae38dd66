//! Content-warning categories and age ratings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content-warning categories a scenario can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Depictions of violence.
    Violence,
    /// Profanity or obscene language.
    Profanity,
    /// Dangerous situations (chases, weapons, threats).
    Danger,
    /// Graphic or gory content.
    Gore,
    /// Sexual content.
    SexualContent,
    /// Suicide or self-harm.
    Suicide,
    /// Cruelty towards children.
    ChildAbuse,
    /// Criminal activity.
    Crime,
    /// Stressful situations.
    Stress,
    /// Mild conflict (arguments, quarrels).
    MildConflict,
    /// Mild emotional scenes.
    MildEmotion,
    /// Mild injuries.
    MildInjury,
}

impl Category {
    /// Returns all available categories.
    pub fn all() -> &'static [Category] {
        &[
            Category::Violence,
            Category::Profanity,
            Category::Danger,
            Category::Gore,
            Category::SexualContent,
            Category::Suicide,
            Category::ChildAbuse,
            Category::Crime,
            Category::Stress,
            Category::MildConflict,
            Category::MildEmotion,
            Category::MildInjury,
        ]
    }

    /// Returns the static severity tier of this category.
    ///
    /// The tier is a fixed property of the category, independent of where
    /// or how often the category was detected.
    pub fn severity_tier(&self) -> SeverityTier {
        match self {
            Category::Violence
            | Category::Profanity
            | Category::Gore
            | Category::SexualContent
            | Category::Suicide
            | Category::ChildAbuse => SeverityTier::High,
            Category::Danger | Category::Crime | Category::Stress => SeverityTier::Medium,
            Category::MildConflict | Category::MildEmotion | Category::MildInjury => {
                SeverityTier::Low
            }
        }
    }

    /// Returns the stable snake_case identifier, as used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Violence => "violence",
            Category::Profanity => "profanity",
            Category::Danger => "danger",
            Category::Gore => "gore",
            Category::SexualContent => "sexual_content",
            Category::Suicide => "suicide",
            Category::ChildAbuse => "child_abuse",
            Category::Crime => "crime",
            Category::Stress => "stress",
            Category::MildConflict => "mild_conflict",
            Category::MildEmotion => "mild_emotion",
            Category::MildInjury => "mild_injury",
        }
    }

    /// Returns the human-readable (Russian) name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Violence => "Насилие",
            Category::Profanity => "Ненормативная лексика",
            Category::Danger => "Опасные ситуации",
            Category::Gore => "Жестокость",
            Category::SexualContent => "Сексуальный контент",
            Category::Suicide => "Суицид",
            Category::ChildAbuse => "Жестокость к детям",
            Category::Crime => "Преступления",
            Category::Stress => "Стресс",
            Category::MildConflict => "Лёгкий конфликт",
            Category::MildEmotion => "Лёгкие эмоции",
            Category::MildInjury => "Лёгкие травмы",
        }
    }
}

/// Severity tier of a category or a flagged issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
}

/// Age-appropriateness rating, ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "0+")]
    ZeroPlus,
    #[serde(rename = "6+")]
    SixPlus,
    #[serde(rename = "12+")]
    TwelvePlus,
    #[serde(rename = "16+")]
    SixteenPlus,
    #[serde(rename = "18+")]
    EighteenPlus,
}

impl Rating {
    /// Derives the rating implied by a set of categories.
    ///
    /// The rating is a denormalized projection of the highest severity
    /// tier present: High maps to 18+, Medium to 16+, Low to 12+, and an
    /// empty set to OK.
    pub fn for_categories(categories: &[Category]) -> Rating {
        match categories.iter().map(|c| c.severity_tier()).max() {
            Some(SeverityTier::High) => Rating::EighteenPlus,
            Some(SeverityTier::Medium) => Rating::SixteenPlus,
            Some(SeverityTier::Low) => Rating::TwelvePlus,
            None => Rating::Ok,
        }
    }

    /// Returns the severity assigned to issues generated under this rating.
    pub fn issue_severity(&self) -> SeverityTier {
        match self {
            Rating::EighteenPlus => SeverityTier::High,
            Rating::SixteenPlus | Rating::TwelvePlus => SeverityTier::Medium,
            _ => SeverityTier::Low,
        }
    }

    /// Returns the display label for this rating.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Ok => "OK",
            Rating::ZeroPlus => "0+",
            Rating::SixPlus => "6+",
            Rating::TwelvePlus => "12+",
            Rating::SixteenPlus => "16+",
            Rating::EighteenPlus => "18+",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
