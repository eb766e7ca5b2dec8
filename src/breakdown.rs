//! Category and difficulty breakdowns over a snapshot.
//!
//! Both breakdowns are pure functions of the snapshot and the selected
//! category. Grouping compares raw category strings; decoding is applied to
//! the label only.

use crate::entities::decode_entities;
use crate::filter::ALL_CATEGORIES;
use crate::models::{Question, Snapshot};

/// Fixed difficulty levels, in chart order. Matching is case-sensitive.
pub const DIFFICULTY_LEVELS: [&str; 3] = ["easy", "medium", "hard"];

/// Number of questions in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Decoded category label
    pub label: String,
    pub count: usize,
}

/// Number of questions at one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyCount {
    pub level: &'static str,
    pub count: usize,
}

/// Distinct raw category values, in first-seen order
pub fn distinct_categories(questions: &[Question]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for question in questions {
        if !seen.contains(&question.category.as_str()) {
            seen.push(&question.category);
        }
    }
    seen
}

/// Count questions per distinct raw category, labelled with decoded text.
pub fn category_breakdown(snapshot: &Snapshot) -> Vec<CategoryCount> {
    let questions = snapshot.questions();
    distinct_categories(questions)
        .into_iter()
        .map(|category| CategoryCount {
            label: decode_entities(category),
            count: questions.iter().filter(|q| q.category == category).count(),
        })
        .collect()
}

/// Questions the difficulty breakdown considers under `selected`.
pub fn filtered_questions<'a>(
    snapshot: &'a Snapshot,
    selected: &'a str,
) -> impl Iterator<Item = &'a Question> + 'a {
    snapshot
        .questions()
        .iter()
        .filter(move |q| selected == ALL_CATEGORIES || q.category == selected)
}

/// Count questions per difficulty level within the filtered working set.
/// Always returns one entry per level in `DIFFICULTY_LEVELS`.
pub fn difficulty_breakdown(snapshot: &Snapshot, selected: &str) -> Vec<DifficultyCount> {
    let mut counts = DIFFICULTY_LEVELS.map(|level| DifficultyCount { level, count: 0 });

    for question in filtered_questions(snapshot, selected) {
        if let Some(entry) = counts.iter_mut().find(|c| c.level == question.difficulty) {
            entry.count += 1;
        }
    }

    counts.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_snapshot() -> Snapshot {
        Snapshot::new(vec![
            Question::new("Music", "easy"),
            Question::new("Music", "hard"),
            Question::new("Art &amp; Design", "easy"),
        ])
    }

    fn category(label: &str, count: usize) -> CategoryCount {
        CategoryCount {
            label: label.to_string(),
            count,
        }
    }

    fn levels(counts: &[DifficultyCount]) -> Vec<(&str, usize)> {
        counts.iter().map(|c| (c.level, c.count)).collect()
    }

    #[test]
    fn test_category_breakdown_scenario() {
        let snapshot = scenario_snapshot();
        assert_eq!(
            category_breakdown(&snapshot),
            vec![category("Music", 2), category("Art & Design", 1)]
        );
    }

    #[test]
    fn test_difficulty_breakdown_all() {
        let snapshot = scenario_snapshot();
        assert_eq!(
            levels(&difficulty_breakdown(&snapshot, "All")),
            vec![("easy", 2), ("medium", 0), ("hard", 1)]
        );
    }

    #[test]
    fn test_difficulty_breakdown_filtered() {
        let snapshot = scenario_snapshot();
        assert_eq!(
            levels(&difficulty_breakdown(&snapshot, "Music")),
            vec![("easy", 1), ("medium", 0), ("hard", 1)]
        );
    }

    #[test]
    fn test_difficulty_filter_compares_raw_category() {
        let snapshot = scenario_snapshot();
        // The decoded label does not match the raw value.
        assert_eq!(
            levels(&difficulty_breakdown(&snapshot, "Art & Design")),
            vec![("easy", 0), ("medium", 0), ("hard", 0)]
        );
        assert_eq!(
            levels(&difficulty_breakdown(&snapshot, "Art &amp; Design")),
            vec![("easy", 1), ("medium", 0), ("hard", 0)]
        );
    }

    #[test]
    fn test_difficulty_breakdown_always_three_levels() {
        for snapshot in [Snapshot::default(), scenario_snapshot()] {
            for selected in ["All", "Music", "No Such Category"] {
                let counts = difficulty_breakdown(&snapshot, selected);
                let order: Vec<&str> = counts.iter().map(|c| c.level).collect();
                assert_eq!(order, vec!["easy", "medium", "hard"]);
            }
        }
    }

    #[test]
    fn test_difficulty_matching_is_case_sensitive() {
        let snapshot = Snapshot::new(vec![
            Question::new("Music", "Easy"),
            Question::new("Music", "easy"),
            Question::new("Music", ""),
        ]);
        assert_eq!(
            levels(&difficulty_breakdown(&snapshot, "All")),
            vec![("easy", 1), ("medium", 0), ("hard", 0)]
        );
    }

    #[test]
    fn test_category_counts_sum_to_snapshot_length() {
        let snapshot = Snapshot::new(vec![
            Question::new("Music", "easy"),
            Question::new("History", "medium"),
            Question::new("Music", "hard"),
            Question::new("Science: Computers", "hard"),
            Question::new("History", "easy"),
            Question::new("", "easy"),
        ]);
        let total: usize = category_breakdown(&snapshot).iter().map(|c| c.count).sum();
        assert_eq!(total, snapshot.len());
    }

    #[test]
    fn test_difficulty_counts_sum_to_working_set() {
        let snapshot = Snapshot::new(vec![
            Question::new("Music", "easy"),
            Question::new("History", "medium"),
            Question::new("Music", "hard"),
            Question::new("Music", "medium"),
            Question::new("History", "easy"),
        ]);
        for selected in ["All", "Music", "History", "Sports"] {
            let total: usize = difficulty_breakdown(&snapshot, selected)
                .iter()
                .map(|c| c.count)
                .sum();
            assert_eq!(total, filtered_questions(&snapshot, selected).count());
        }
        assert_eq!(filtered_questions(&snapshot, "All").count(), 5);
        assert_eq!(filtered_questions(&snapshot, "Music").count(), 3);
    }

    #[test]
    fn test_selection_does_not_change_category_breakdown() {
        let snapshot = scenario_snapshot();
        let before = category_breakdown(&snapshot);
        let _ = difficulty_breakdown(&snapshot, "Music");
        assert_eq!(category_breakdown(&snapshot), before);
    }

    #[test]
    fn test_breakdowns_are_idempotent() {
        let snapshot = scenario_snapshot();
        assert_eq!(category_breakdown(&snapshot), category_breakdown(&snapshot));
        assert_eq!(
            difficulty_breakdown(&snapshot, "Music"),
            difficulty_breakdown(&snapshot, "Music")
        );
    }

    #[test]
    fn test_equivalent_encodings_stay_separate() {
        let snapshot = Snapshot::new(vec![
            Question::new("Art &amp; Design", "easy"),
            Question::new("Art &#38; Design", "easy"),
        ]);
        assert_eq!(
            category_breakdown(&snapshot),
            vec![category("Art & Design", 1), category("Art & Design", 1)]
        );
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let snapshot = Snapshot::new(vec![
            Question::new("B", "easy"),
            Question::new("A", "easy"),
            Question::new("B", "hard"),
            Question::new("C", "easy"),
        ]);
        assert_eq!(distinct_categories(snapshot.questions()), vec!["B", "A", "C"]);
    }
}
