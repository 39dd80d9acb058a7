use serde::{Deserialize, Serialize};

use super::CandidateId;

/// One candidate's share of the votes for their position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub candidate_id: CandidateId,
    pub name: String,
    pub party: Option<String>,
    pub vote_count: u64,
    /// Share of the position's votes, rounded to one decimal place. Zero when the position has no votes.
    pub percentage: f64,
}

/// Ranked results for everyone standing for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    pub position: String,
    pub total_votes: u64,
    pub candidate_count: usize,
    /// Most votes first; equal tallies keep candidate creation order.
    pub candidates: Vec<CandidateResult>,
}
