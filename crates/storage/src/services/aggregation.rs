use uuid::Uuid;

use crate::models::Score;

/// Combined result of all judges' scores for one performance. Derived on
/// every read, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResult {
    pub performance_id: Uuid,
    pub total_score: f64,
    pub average_score: f64,
    pub judge_count: u32,
    pub percentage: f64,
}

/// Combine all judges' scores for one performance. Returns `None` when no
/// usable score remains, so unscored performances never reach ranking.
///
/// Criterion ranges are validated upstream; a score carrying a negative or
/// NaN criterion is excluded here rather than propagated, with a warning.
/// Withdrawn performances must be filtered out by the caller before this
/// point.
pub fn aggregate(performance_id: Uuid, scores: &[Score]) -> Option<AggregatedResult> {
    let judge_totals: Vec<f64> = scores
        .iter()
        .filter(|score| {
            if score.criteria().iter().any(|c| c.is_nan() || *c < 0.0) {
                tracing::warn!(
                    judge_id = %score.judge_id,
                    performance_id = %performance_id,
                    "excluding score with negative or NaN criterion"
                );
                return false;
            }
            true
        })
        .map(Score::judge_total)
        .collect();

    if judge_totals.is_empty() {
        return None;
    }

    let judge_count = judge_totals.len() as u32;
    let total_score: f64 = judge_totals.iter().sum();
    let average_score = total_score / judge_count as f64;
    let max_possible = judge_count as f64 * 100.0;
    let percentage = if max_possible > 0.0 {
        (total_score / max_possible) * 100.0
    } else {
        0.0
    };

    Some(AggregatedResult {
        performance_id,
        total_score,
        average_score,
        judge_count,
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(judge_id: Uuid, performance_id: Uuid, criteria: [f64; 5]) -> Score {
        Score {
            judge_id,
            performance_id,
            technical: criteria[0],
            musical: criteria[1],
            performance: criteria[2],
            styling: criteria[3],
            overall_impression: criteria[4],
            comments: None,
            submitted_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn no_scores_yields_no_result() {
        assert_eq!(aggregate(Uuid::new_v4(), &[]), None);
    }

    #[test]
    fn two_judges_at_80_and_90_give_85_percent() {
        let performance_id = Uuid::new_v4();
        let scores = vec![
            score(Uuid::new_v4(), performance_id, [16.0, 16.0, 16.0, 16.0, 16.0]),
            score(Uuid::new_v4(), performance_id, [18.0, 18.0, 18.0, 18.0, 18.0]),
        ];

        let result = aggregate(performance_id, &scores).unwrap();
        assert_eq!(result.total_score, 170.0);
        assert_eq!(result.average_score, 85.0);
        assert_eq!(result.judge_count, 2);
        assert_eq!(result.percentage, 85.0);
    }

    #[test]
    fn nan_criterion_excludes_the_whole_score() {
        let performance_id = Uuid::new_v4();
        let scores = vec![
            score(Uuid::new_v4(), performance_id, [15.0, 15.0, f64::NAN, 15.0, 15.0]),
            score(Uuid::new_v4(), performance_id, [10.0, 10.0, 10.0, 10.0, 10.0]),
        ];

        let result = aggregate(performance_id, &scores).unwrap();
        assert_eq!(result.judge_count, 1);
        assert_eq!(result.total_score, 50.0);
    }

    #[test]
    fn negative_criterion_excludes_the_whole_score() {
        let performance_id = Uuid::new_v4();
        let scores = vec![score(
            Uuid::new_v4(),
            performance_id,
            [-1.0, 15.0, 15.0, 15.0, 15.0],
        )];

        assert_eq!(aggregate(performance_id, &scores), None);
    }
}
