use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::model::{AuditAction, VoteReceipt, VoteRequest};

use super::{AuditLog, CandidateRegistry, VoterRegistry};

/// The one place votes are counted.
///
/// A ledger borrows the registries and the audit log mutably for its whole
/// lifetime, so holding one *is* the critical section: nothing else can read
/// `has_voted` or a tally between the check and the update.
pub struct VoteLedger<'a> {
    candidates: &'a mut CandidateRegistry,
    voters: &'a mut VoterRegistry,
    audit: &'a mut AuditLog,
}

impl<'a> VoteLedger<'a> {
    pub fn new(
        candidates: &'a mut CandidateRegistry,
        voters: &'a mut VoterRegistry,
        audit: &'a mut AuditLog,
    ) -> Self {
        Self {
            candidates,
            voters,
            audit,
        }
    }

    /// Cast one vote.
    ///
    /// Checks, in order: both IDs present, voter exists, voter has not voted,
    /// candidate exists. Only if all pass is the voter marked, the tally incremented
    /// and a `CAST_VOTE` entry written. A failed check changes nothing.
    pub fn cast(self, request: &VoteRequest, at: DateTime<Utc>) -> Result<VoteReceipt> {
        request.validate()?;
        let voter_id = request.voter_id();

        let voter = self
            .voters
            .get_mut(voter_id)
            .ok_or_else(|| Error::not_found("Voter"))?;
        // A repeat attempt is refused whatever it names, even a missing candidate.
        if voter.has_voted() {
            return Err(already_voted());
        }
        let candidate = request
            .candidate_id()
            .and_then(|id| self.candidates.get_mut(id))
            .ok_or_else(|| Error::not_found("Candidate"))?;

        voter.mark_voted(at);
        let vote_count = candidate.record_vote();

        self.audit.record(
            at,
            AuditAction::CastVote,
            format!(
                "Voter {} voted for candidate {}: {} ({})",
                voter_id, candidate.id, candidate.name, candidate.position
            ),
        );

        Ok(VoteReceipt {
            voter_id: voter_id.to_string(),
            candidate_id: candidate.id,
            candidate_name: candidate.name.clone(),
            position: candidate.position.clone(),
            vote_count,
            voted_at: at,
        })
    }
}

fn already_voted() -> Error {
    Error::AlreadyVoted("Voter has already cast their vote".to_string())
}
