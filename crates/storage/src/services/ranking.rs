use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::dto::ranking::{PartitionField, RankingEntry};
use crate::models::{Performance, Score};
use crate::services::aggregation;
use crate::services::medals;

/// One performance as fetched for ranking: its row, the roster's display
/// names in roster order, and every score submitted for it.
#[derive(Debug, Clone)]
pub struct RankingCandidate {
    pub performance: Performance,
    pub participant_names: Vec<String>,
    pub scores: Vec<Score>,
}

/// Name shown on a ranking row. Group, duet and trio entries are named by
/// their dancers, so the joined participant names take precedence; the
/// recorded contestant name is only a fallback for rosters with no
/// resolvable names.
pub fn resolve_contestant_name(participant_names: &[String], recorded: Option<&str>) -> String {
    if participant_names.is_empty() {
        recorded.unwrap_or_default().to_string()
    } else {
        participant_names.join(", ")
    }
}

/// Turn fetched candidates into an ordered, ranked, medal-annotated list.
///
/// Withdrawn performances and performances without a usable score are
/// dropped before anything else. With no partition fields the whole set is
/// ranked as one list; otherwise candidates are bucketed by the composite
/// key of the requested fields and ranks restart at 1 inside each bucket.
pub fn rank_candidates(
    candidates: Vec<RankingCandidate>,
    partition_by: &[PartitionField],
) -> Vec<RankingEntry> {
    let mut rows: Vec<RankingEntry> = Vec::new();
    for candidate in candidates {
        if candidate.performance.withdrawn {
            continue;
        }
        let Some(result) =
            aggregation::aggregate(candidate.performance.performance_id, &candidate.scores)
        else {
            continue;
        };

        let performance = candidate.performance;
        rows.push(RankingEntry {
            rank: 0,
            performance_id: performance.performance_id,
            event_id: performance.event_id,
            contestant_name: resolve_contestant_name(
                &candidate.participant_names,
                performance.contestant_name.as_deref(),
            ),
            title: performance.title,
            age_category: performance.age_category,
            performance_type: performance.performance_type,
            dance_style: performance.dance_style,
            region: performance.region,
            item_number: performance.item_number,
            total_score: result.total_score,
            average_score: result.average_score,
            judge_count: result.judge_count as i64,
            percentage: result.percentage,
            medal: medals::classify(result.percentage).label().to_string(),
        });
    }

    if partition_by.is_empty() {
        assign_dense_ranks(&mut rows);
        return rows;
    }

    let mut buckets: BTreeMap<Vec<String>, Vec<RankingEntry>> = BTreeMap::new();
    for row in rows {
        buckets
            .entry(partition_key(&row, partition_by))
            .or_default()
            .push(row);
    }

    let mut ranked = Vec::new();
    for (_, mut bucket) in buckets {
        assign_dense_ranks(&mut bucket);
        ranked.extend(bucket);
    }
    ranked
}

fn partition_key(row: &RankingEntry, partition_by: &[PartitionField]) -> Vec<String> {
    partition_by
        .iter()
        .map(|field| match field {
            PartitionField::Region => row.region.clone(),
            PartitionField::AgeCategory => row.age_category.clone(),
            PartitionField::PerformanceType => row.performance_type.clone(),
            PartitionField::DanceStyle => row.dance_style.clone(),
        })
        .collect()
}

/// Sort descending by total score and assign dense ranks: tied totals
/// share a rank, the next distinct total takes the previous rank plus one.
fn assign_dense_ranks(rows: &mut [RankingEntry]) {
    rows.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });

    let mut rank = 0;
    let mut previous = f64::INFINITY;
    for row in rows {
        if row.total_score < previous {
            rank += 1;
            previous = row.total_score;
        }
        row.rank = rank;
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn performance(total_hint: &str) -> Performance {
        Performance {
            performance_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            title: total_hint.to_string(),
            choreographer: None,
            age_category: "junior".to_string(),
            performance_type: "solo".to_string(),
            dance_style: "jazz".to_string(),
            mastery_level: "water".to_string(),
            region: "national".to_string(),
            contestant_name: None,
            item_number: None,
            withdrawn: false,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn score_with_total(performance_id: Uuid, judge_total: f64) -> Score {
        let criterion = judge_total / 5.0;
        Score {
            judge_id: Uuid::new_v4(),
            performance_id,
            technical: criterion,
            musical: criterion,
            performance: criterion,
            styling: criterion,
            overall_impression: criterion,
            comments: None,
            submitted_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn candidate(title: &str, judge_totals: &[f64]) -> RankingCandidate {
        let performance = performance(title);
        let scores = judge_totals
            .iter()
            .map(|total| score_with_total(performance.performance_id, *total))
            .collect();
        RankingCandidate {
            performance,
            participant_names: vec![title.to_string()],
            scores,
        }
    }

    #[test]
    fn ties_share_a_rank_and_the_next_score_takes_the_following_rank() {
        let candidates = vec![
            candidate("first-a", &[100.0]),
            candidate("first-b", &[100.0]),
            candidate("second", &[90.0]),
        ];

        let ranked = rank_candidates(candidates, &[]);
        let ranks: Vec<i64> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 1, 2]);
    }

    #[test]
    fn unscored_performances_never_appear() {
        let candidates = vec![candidate("scored", &[80.0]), candidate("unscored", &[])];
        let ranked = rank_candidates(candidates, &[]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title, "scored");
    }

    #[test]
    fn withdrawn_performances_are_excluded_even_with_scores() {
        let mut withdrawn = candidate("withdrawn", &[95.0]);
        withdrawn.performance.withdrawn = true;
        let candidates = vec![candidate("kept", &[80.0]), withdrawn];

        let ranked = rank_candidates(candidates, &[]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title, "kept");
    }

    #[test]
    fn ranking_is_idempotent_for_stable_input() {
        let candidates = vec![
            candidate("a", &[88.0, 92.0]),
            candidate("b", &[90.0]),
            candidate("c", &[90.0]),
        ];

        let first = rank_candidates(candidates.clone(), &[]);
        let second = rank_candidates(candidates, &[]);

        let ordering = |rows: &[RankingEntry]| {
            rows.iter()
                .map(|r| (r.performance_id, r.rank))
                .collect::<Vec<_>>()
        };
        assert_eq!(ordering(&first), ordering(&second));
    }

    #[test]
    fn partitioned_ranks_restart_per_bucket() {
        let mut junior_low = candidate("junior-low", &[70.0]);
        junior_low.performance.age_category = "junior".to_string();
        let mut junior_high = candidate("junior-high", &[90.0]);
        junior_high.performance.age_category = "junior".to_string();
        let mut senior = candidate("senior", &[60.0]);
        senior.performance.age_category = "senior".to_string();

        let ranked = rank_candidates(
            vec![junior_low, junior_high, senior],
            &[PartitionField::AgeCategory],
        );

        let by_title: std::collections::HashMap<&str, i64> = ranked
            .iter()
            .map(|r| (r.title.as_str(), r.rank))
            .collect();
        assert_eq!(by_title["junior-high"], 1);
        assert_eq!(by_title["junior-low"], 2);
        assert_eq!(by_title["senior"], 1);
    }

    #[test]
    fn medal_comes_from_the_percentage() {
        let ranked = rank_candidates(vec![candidate("a", &[80.0, 90.0])], &[]);
        assert_eq!(ranked[0].percentage, 85.0);
        assert_eq!(ranked[0].medal, "Legend");
    }

    #[test]
    fn participant_names_take_precedence_over_recorded_name() {
        let names = vec!["Mira Voss".to_string(), "Jonas Brandt".to_string()];
        assert_eq!(
            resolve_contestant_name(&names, Some("Studio Aurora")),
            "Mira Voss, Jonas Brandt"
        );
        assert_eq!(resolve_contestant_name(&[], Some("Studio Aurora")), "Studio Aurora");
        assert_eq!(resolve_contestant_name(&[], None), "");
    }
}
