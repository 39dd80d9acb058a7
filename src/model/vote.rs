use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

use super::{is_blank, null_as_empty, CandidateId};

/// A request to cast one vote.
///
/// Browser forms submit the candidate ID as a string, so both `"3"` and `3` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub voter_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub candidate_id: String,
}

impl VoteRequest {
    pub fn new(voter_id: impl Into<String>, candidate_id: CandidateId) -> Self {
        Self {
            voter_id: voter_id.into(),
            candidate_id: candidate_id.to_string(),
        }
    }

    /// Reject requests missing either identifier, before anything is looked up.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.voter_id) || is_blank(&self.candidate_id) {
            return Err(Error::validation("Voter ID and candidate ID are required"));
        }
        Ok(())
    }

    pub fn voter_id(&self) -> &str {
        self.voter_id.trim()
    }

    /// The requested candidate, if the ID is well formed. A malformed ID cannot name
    /// any candidate, so callers treat `None` as "candidate not found".
    pub fn candidate_id(&self) -> Option<CandidateId> {
        self.candidate_id.trim().parse().ok()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => n.to_string(),
        Some(Raw::Text(s)) => s,
        None => String::new(),
    })
}

/// Confirmation of a successfully cast vote.
///
/// `vote_count` is the candidate's tally immediately after this vote; later
/// votes may already have moved it on by the time the receipt is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub voter_id: String,
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub position: String,
    pub vote_count: u64,
    pub voted_at: DateTime<Utc>,
}
