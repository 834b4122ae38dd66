//! Deterministic keyword rule classifier (the fallback path).
//!
//! A pure function of the input text: fixed keyword sets, fixed priority
//! order, no I/O. Guaranteed to produce a verdict whenever the external
//! worker cannot.

use super::{Category, ClassificationResult, Issue, Rating, Scene};

/// Comment used when no rule fires.
const SAFE_COMMENT: &str = "Содержимое безопасно для всех возрастов";

const PROFANITY_WORDS: &[&str] = &[
    "блядь", "блять", "сука", "хуй", "пизда", "ебать", "ебал", "нахуй",
];
const PROFANITY_COMMENT: &str = "Обнаружена ненормативная лексика";

const VIOLENCE_WORDS: &[&str] = &["убийство", "убить", "кровь", "труп", "избиение", "пытки"];
const VIOLENCE_COMMENT: &str = "Обнаружены сцены насилия";

const DANGER_WORDS: &[&str] = &["погоня", "преследование", "оружие", "угроза"];
const DANGER_COMMENT: &str = "Присутствуют опасные ситуации";

const CONFLICT_WORDS: &[&str] = &["спор", "ссора", "конфликт", "обида"];
const CONFLICT_COMMENT: &str = "Присутствуют лёгкие конфликтные ситуации";

/// Maximum scene content length kept in the verdict, in characters.
const SCENE_CONTENT_LIMIT: usize = 200;

/// Maximum issue excerpt length when the input has no line break.
const EXCERPT_LIMIT: usize = 100;

/// Keyword-priority rule classifier.
#[derive(Debug, Clone, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies the text with the fixed rule-priority algorithm.
    ///
    /// Rules run in a fixed order that encodes severity precedence:
    /// profanity, violence (both 18+), then danger (16+) and mild
    /// conflict (12+), the last two only while the rating is still OK.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let lower = text.to_lowercase();

        let mut rating = Rating::Ok;
        let mut categories: Vec<Category> = Vec::new();
        let mut comment = SAFE_COMMENT;

        if contains_any(&lower, PROFANITY_WORDS) {
            rating = Rating::EighteenPlus;
            categories.push(Category::Profanity);
            comment = PROFANITY_COMMENT;
        }

        if contains_any(&lower, VIOLENCE_WORDS) {
            // If violence is the first 18+ trigger, lower-tier categories
            // are discarded before the escalation. Kept literal even
            // though nothing can precede it under the current order.
            if rating != Rating::EighteenPlus {
                rating = Rating::EighteenPlus;
                categories.clear();
            }
            categories.push(Category::Violence);
            comment = VIOLENCE_COMMENT;
        }

        if contains_any(&lower, DANGER_WORDS) && rating == Rating::Ok {
            rating = Rating::SixteenPlus;
            categories.push(Category::Danger);
            comment = DANGER_COMMENT;
        }

        if contains_any(&lower, CONFLICT_WORDS) && rating == Rating::Ok {
            rating = Rating::TwelvePlus;
            categories.push(Category::MildConflict);
            comment = CONFLICT_COMMENT;
        }

        let severity = rating.issue_severity();
        let excerpt = issue_excerpt(text);
        let issues: Vec<Issue> = categories
            .iter()
            .map(|&category| Issue {
                line: 1,
                text: excerpt.to_string(),
                category,
                severity,
            })
            .collect();

        // No scene segmentation here: the whole input is one scene.
        let scene = Scene {
            scene_id: 1,
            content: scene_content(text),
            issues,
        };

        ClassificationResult {
            rating,
            categories,
            comment: comment.to_string(),
            scenes: vec![scene],
        }
    }
}

fn contains_any(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|w| haystack.contains(w))
}

/// First line of the input, or its first 100 characters when there is no
/// line break (or the first line is empty).
fn issue_excerpt(text: &str) -> &str {
    match text.split_once('\n') {
        Some((first, _)) if !first.is_empty() => first,
        _ => truncate_chars(text, EXCERPT_LIMIT),
    }
}

/// Scene content truncated to 200 characters with a trailing ellipsis.
fn scene_content(text: &str) -> String {
    let truncated = truncate_chars(text, SCENE_CONTENT_LIMIT);
    if truncated.len() < text.len() {
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

/// Truncates on a character boundary; the inputs are mostly Cyrillic, so
/// byte slicing is not an option.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::SeverityTier;

    fn classifier() -> RuleClassifier {
        RuleClassifier::new()
    }

    #[test]
    fn clean_text_is_ok() {
        let result = classifier().classify("Тихий вечер в деревне. Герои пьют чай.");
        assert_eq!(result.rating, Rating::Ok);
        assert!(result.categories.is_empty());
        assert_eq!(result.comment, SAFE_COMMENT);
        assert!(result.scenes[0].issues.is_empty());
    }

    #[test]
    fn violence_alone_is_adult() {
        let result = classifier().classify("Он решил убить дракона.");
        assert_eq!(result.rating, Rating::EighteenPlus);
        assert_eq!(result.categories, vec![Category::Violence]);
        assert_eq!(result.comment, VIOLENCE_COMMENT);
    }

    #[test]
    fn profanity_alone_is_adult() {
        let result = classifier().classify("Вот сука, опять дождь.");
        assert_eq!(result.rating, Rating::EighteenPlus);
        assert_eq!(result.categories, vec![Category::Profanity]);
        assert_eq!(result.comment, PROFANITY_COMMENT);
    }

    #[test]
    fn profanity_then_violence_keeps_both() {
        // Profanity escalated to 18+ first, so the violence rule appends
        // without clearing.
        let result = classifier().classify("Сука! Я готов убить его.");
        assert_eq!(result.rating, Rating::EighteenPlus);
        assert_eq!(
            result.categories,
            vec![Category::Profanity, Category::Violence]
        );
        assert_eq!(result.comment, VIOLENCE_COMMENT);
    }

    #[test]
    fn danger_alone_is_sixteen_plus() {
        let result = classifier().classify("Начинается погоня по крышам.");
        assert_eq!(result.rating, Rating::SixteenPlus);
        assert_eq!(result.categories, vec![Category::Danger]);
        assert_eq!(result.comment, DANGER_COMMENT);
    }

    #[test]
    fn conflict_alone_is_twelve_plus() {
        let result = classifier().classify("Между ними вспыхнула ссора.");
        assert_eq!(result.rating, Rating::TwelvePlus);
        assert_eq!(result.categories, vec![Category::MildConflict]);
        assert_eq!(result.comment, CONFLICT_COMMENT);
    }

    #[test]
    fn danger_suppressed_by_adult_rating() {
        // Danger and conflict only fire while the rating is still OK.
        let result = classifier().classify("Погоня, и он кричит: убить!");
        assert_eq!(result.rating, Rating::EighteenPlus);
        assert_eq!(result.categories, vec![Category::Violence]);
    }

    #[test]
    fn danger_wins_over_conflict() {
        let result = classifier().classify("Ссора, затем преследование.");
        assert_eq!(result.rating, Rating::SixteenPlus);
        assert_eq!(result.categories, vec![Category::Danger]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = classifier().classify("ПОГОНЯ ПО НОЧНОМУ ГОРОДУ");
        assert_eq!(result.rating, Rating::SixteenPlus);
    }

    #[test]
    fn classification_is_pure() {
        let text = "Сука! Погоня и ссора.";
        let a = classifier().classify(text);
        let b = classifier().classify(text);
        assert_eq!(a, b);
    }

    #[test]
    fn one_issue_per_category() {
        let result = classifier().classify("Сука, я убить его готов.");
        let issues = &result.scenes[0].issues;
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].category, Category::Profanity);
        assert_eq!(issues[1].category, Category::Violence);
        for issue in issues {
            assert_eq!(issue.line, 1);
            assert_eq!(issue.severity, SeverityTier::High);
        }
    }

    #[test]
    fn issue_severity_tracks_final_rating() {
        let result = classifier().classify("Очередная ссора соседей.");
        assert_eq!(result.scenes[0].issues[0].severity, SeverityTier::Medium);
    }

    #[test]
    fn issue_excerpt_is_first_line() {
        let result = classifier().classify("Погоня началась.\nВторая строка.");
        assert_eq!(result.scenes[0].issues[0].text, "Погоня началась.");
    }

    #[test]
    fn excerpt_without_line_break_is_capped_at_100_chars() {
        let text = "погоня ".repeat(40); // one long line, no break
        let result = classifier().classify(&text);
        let excerpt = &result.scenes[0].issues[0].text;
        assert_eq!(excerpt.chars().count(), 100);
        assert!(text.starts_with(excerpt.as_str()));
    }

    #[test]
    fn scene_content_truncated_with_ellipsis() {
        let text = "убить ".repeat(50);
        let result = classifier().classify(&text);
        let content = &result.scenes[0].content;
        assert!(content.ends_with("..."));
        assert_eq!(content.chars().count(), 203);
    }

    #[test]
    fn short_scene_content_kept_verbatim() {
        let text = "Короткая ссора.";
        let result = classifier().classify(text);
        assert_eq!(result.scenes[0].content, text);
    }

    #[test]
    fn result_is_always_consistent() {
        for text in [
            "ничего особенного",
            "ссора",
            "погоня",
            "убить",
            "сука и убить",
        ] {
            assert!(classifier().classify(text).is_consistent(), "{text}");
        }
    }

    #[test]
    fn single_scene_always_emitted() {
        let result = classifier().classify("Сцена первая.\n\nСцена вторая.");
        assert_eq!(result.scenes.len(), 1);
        assert_eq!(result.scenes[0].scene_id, 1);
    }
}
