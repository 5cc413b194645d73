//! Meeting efficiency scoring.

use crate::types::meeting::Goal;

/// Upper bound of the efficiency score.
pub const MAX_SCORE: f64 = 1000.0;

/// Points awarded when every goal is completed.
const COMPLETION_WEIGHT: f64 = 600.0;

/// Points awarded per decision made.
const DECISION_WEIGHT: f64 = 100.0;

/// Score a meeting from the share of completed goals and the number of decisions.
///
/// The result is always finite and within `[0, MAX_SCORE]`, and never decreases
/// when more goals are completed or more decisions are made. With no goals the
/// completion part contributes nothing.
pub fn efficiency_score(goals: &[Goal], decision_count: usize) -> f64 {
    let total = goals.len();
    let completion = if total > 0 {
        let completed = goals.iter().filter(|goal| goal.is_completed()).count();
        (completed as f64 / total as f64) * COMPLETION_WEIGHT
    } else {
        0.0
    };
    let decisions = decision_count as f64 * DECISION_WEIGHT;

    (completion + decisions).min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals(completed: usize, open: usize) -> Vec<Goal> {
        let done = (0..completed).map(|_| Goal {
            completed: Some(true),
            ..Goal::default()
        });
        let open = (0..open).map(|_| Goal::default());
        done.chain(open).collect()
    }

    #[test]
    fn test_empty_meeting_scores_zero() {
        assert_eq!(efficiency_score(&[], 0), 0.0);
    }

    #[test]
    fn test_score_saturates_at_max() {
        assert_eq!(efficiency_score(&goals(1, 0), 5), 1000.0);
        assert_eq!(efficiency_score(&[], 50), 1000.0);
    }

    #[test]
    fn test_completion_ratio() {
        assert_eq!(efficiency_score(&goals(1, 1), 0), 300.0);
        assert_eq!(efficiency_score(&goals(2, 0), 0), 600.0);
        assert_eq!(efficiency_score(&goals(0, 3), 0), 0.0);
    }

    #[test]
    fn test_decisions_without_goals() {
        assert_eq!(efficiency_score(&[], 3), 300.0);
    }

    #[test]
    fn test_score_is_monotonic_and_bounded() {
        for total in 0..6 {
            for completed in 0..=total {
                for decisions in 0..12 {
                    let score = efficiency_score(&goals(completed, total - completed), decisions);
                    assert!((0.0..=MAX_SCORE).contains(&score));

                    let more_decisions =
                        efficiency_score(&goals(completed, total - completed), decisions + 1);
                    assert!(more_decisions >= score);

                    if completed < total {
                        let more_done =
                            efficiency_score(&goals(completed + 1, total - completed - 1), decisions);
                        assert!(more_done >= score);
                    }
                }
            }
        }
    }
}
