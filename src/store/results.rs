//! Results aggregation over a snapshot of the candidate table.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::model::{Candidate, CandidateResult, PositionResult};

/// Group candidates by position and rank each group.
///
/// Positions appear in the order their first candidate was created. Within a
/// position, candidates are ordered by descending tally; ties keep creation
/// order. Expects `candidates` in creation order, as the registry lists them.
pub fn aggregate(candidates: &[Candidate]) -> Vec<PositionResult> {
    let mut groups: Vec<(&str, Vec<&Candidate>)> = Vec::new();
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    for candidate in candidates {
        let position = candidate.position.as_str();
        let i = *group_index.entry(position).or_insert_with(|| {
            groups.push((position, Vec::new()));
            groups.len() - 1
        });
        groups[i].1.push(candidate);
    }

    groups
        .into_iter()
        .map(|(position, mut members)| {
            // Stable, so equal tallies stay in creation order.
            members.sort_by_key(|c| Reverse(c.vote_count()));
            let total_votes = members.iter().map(|c| c.vote_count()).sum();
            let candidates = members
                .iter()
                .map(|c| CandidateResult {
                    candidate_id: c.id,
                    name: c.name.clone(),
                    party: c.party.clone(),
                    vote_count: c.vote_count(),
                    percentage: percentage(c.vote_count(), total_votes),
                })
                .collect::<Vec<_>>();
            PositionResult {
                position: position.to_string(),
                total_votes,
                candidate_count: candidates.len(),
                candidates,
            }
        })
        .collect()
}

/// `votes` as a percentage of `total`, rounded to one decimal place; zero if `total` is zero.
pub fn percentage(votes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (votes as f64 * 1000.0 / total as f64).round() / 10.0
}
