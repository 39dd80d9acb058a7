use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{is_blank, non_blank, null_as_empty};

/// Server-assigned candidate identifier. Allocated sequentially from 1 and never reused.
pub type CandidateId = u32;

/// Core candidate data, as submitted by an administrator.
///
/// Missing or null text fields deserialise as empty so that they are rejected by
/// [`CandidateCore::validated`] rather than by the JSON parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCore {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A candidate that has not been stored yet.
pub type NewCandidate = CandidateCore;

impl CandidateCore {
    /// Check the required fields and normalise whitespace.
    /// Blank optional fields become `None`.
    pub fn validated(self) -> Result<Self> {
        if is_blank(&self.name) || is_blank(&self.position) {
            return Err(Error::validation("Name and position are required"));
        }
        Ok(Self {
            name: self.name.trim().to_string(),
            party: non_blank(self.party),
            position: self.position.trim().to_string(),
            description: non_blank(self.description),
        })
    }
}

/// A stored candidate, with its ID and running tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    #[serde(flatten)]
    pub candidate: CandidateCore,
    vote_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Candidate {
    /// A freshly created candidate with no votes.
    pub fn new(id: CandidateId, candidate: CandidateCore, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            candidate,
            vote_count: 0,
            created_at,
        }
    }

    pub fn vote_count(&self) -> u64 {
        self.vote_count
    }

    /// Add one vote to the tally, returning the new tally.
    pub(crate) fn record_vote(&mut self) -> u64 {
        self.vote_count += 1;
        self.vote_count
    }
}

impl Deref for Candidate {
    type Target = CandidateCore;

    fn deref(&self) -> &Self::Target {
        &self.candidate
    }
}
