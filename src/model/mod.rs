//! Serialisable election types.
//!
//! Everything here is plain data. Invariants that span more than one record
//! (one vote per voter, tally conservation) are enforced by [`crate::store`].

use serde::{Deserialize, Deserializer};

pub mod api;
pub mod audit;
pub mod candidate;
pub mod results;
pub mod vote;
pub mod voter;

pub use audit::{AuditAction, AuditLogEntry};
pub use candidate::{Candidate, CandidateCore, CandidateId, NewCandidate};
pub use results::{CandidateResult, PositionResult};
pub use vote::{VoteReceipt, VoteRequest};
pub use voter::{NewVoter, Voter, VoterCore};

/// True iff the field is empty or only whitespace.
pub(crate) fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

/// Read a required text field, taking `null` as empty so that validation reports it.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trim an optional field, treating blank text as absent.
pub(crate) fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
