// src/planner/tasks.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::time::extract_times;

/// Everything from the first word-boundary digit to the end of the fragment.
static DIGIT_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d.*$").unwrap());

/// A derived, unvalidated label plus raw time-window strings. Lives for one
/// request only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub title: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Split free-form text into tasks on `.` `,` `;` boundaries.
///
/// Fragments without a time expression are treated as non-task prose and
/// dropped. Only the first two times are kept as the window; any further
/// matches in the same fragment are discarded.
pub fn build_tasks(raw_text: &str) -> Vec<Task> {
    raw_text
        .split(['.', ',', ';'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .filter_map(|fragment| {
            let mut times = extract_times(fragment).into_iter();
            let start = times.next()?;
            let end = times.next();

            let title = derive_title(fragment);
            Some(Task {
                title,
                start: Some(start),
                end,
            })
        })
        .collect()
}

/// Display title: the fragment with its digit tail deleted, first character
/// upper-cased. Falls back to "Task" when nothing is left.
fn derive_title(fragment: &str) -> String {
    let stripped = DIGIT_TAIL.replace(fragment, "");
    let title = capitalize_first(stripped.trim());
    if title.is_empty() {
        "Task".to_string()
    } else {
        title
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prose_without_digits_yields_no_tasks() {
        assert!(build_tasks("had coffee and read the news").is_empty());
        assert!(build_tasks("").is_empty());
    }

    #[test]
    fn two_sentences_become_two_tasks_in_source_order() {
        let tasks = build_tasks("Lunch at 12 to 1, Call mom at 3");
        assert_eq!(
            tasks,
            vec![
                Task {
                    title: "Lunch at".to_string(),
                    start: Some("12 ".to_string()),
                    end: Some("1".to_string()),
                },
                Task {
                    title: "Call mom at".to_string(),
                    start: Some("3".to_string()),
                    end: None,
                },
            ]
        );
    }

    #[test]
    fn lone_time_has_no_end() {
        let tasks = build_tasks("gym at 6");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].start.as_deref(), Some("6"));
        assert_eq!(tasks[0].end, None);
    }

    #[test]
    fn extra_times_beyond_two_are_dropped() {
        let tasks = build_tasks("standup 9 10 11");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].start.as_deref(), Some("9 "));
        assert_eq!(tasks[0].end.as_deref(), Some("10 "));
    }

    #[test]
    fn bare_time_fragment_gets_default_title() {
        let tasks = build_tasks("9 to 10");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Task");
    }

    #[test]
    fn title_keeps_original_casing_after_first_char() {
        let tasks = build_tasks("review PR backlog at 4");
        assert_eq!(tasks[0].title, "Review PR backlog at");
    }

    #[test]
    fn sentence_fragments_split_on_all_three_separators() {
        let tasks = build_tasks("gym at 6. lunch at 12; dinner at 7");
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Gym at", "Lunch at", "Dinner at"]);
    }
}
