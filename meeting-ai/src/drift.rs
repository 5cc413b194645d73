//! Agenda drift detection by keyword overlap.

/// Report whether the discussion in `text` has drifted away from `goal`.
///
/// The goal is split on whitespace into lower-case keywords, each matched as a
/// substring of the lower-cased text. Drift is reported when at most half of
/// the keywords are found. An empty goal has no keywords and never drifts.
pub fn detect_drift(text: &str, goal: &str) -> bool {
    let goal = goal.to_lowercase();
    let keywords: Vec<&str> = goal.split_whitespace().collect();
    if keywords.is_empty() {
        return false;
    }

    let text = text.to_lowercase();
    let matched = keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count();

    // Exactly half counts as drift: 1 of 2 or 2 of 4 keywords matched.
    matched * 2 <= keywords.len()
}
