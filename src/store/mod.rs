//! The election's authoritative state.
//!
//! [`ElectionStore`] owns the candidate registry, the voter registry and the
//! audit log behind a single reader-writer lock:
//!
//! - Every mutation takes the write lock, validates, mutates and appends its
//!   audit entry before releasing it. A domain change and its audit entry are
//!   therefore one transaction; readers never see one without the other.
//! - Reads take the read lock only long enough to clone what they need.
//!   Results are aggregated from that snapshot after the lock is released.
//!
//! A poisoned lock means a writer panicked part-way through; the store then
//! refuses all further work with [`Error::Persistence`].

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use log::{error, info};

use crate::error::{Error, Result};
use crate::model::{
    AuditAction, AuditLogEntry, Candidate, CandidateId, NewCandidate, NewVoter, PositionResult,
    VoteReceipt, VoteRequest, Voter,
};

mod audit;
mod candidates;
mod ledger;
mod results;
mod voters;

pub use audit::AuditLog;
pub use candidates::CandidateRegistry;
pub use ledger::VoteLedger;
pub use results::{aggregate, percentage};
pub use voters::VoterRegistry;

#[derive(Debug, Default)]
struct Tables {
    candidates: CandidateRegistry,
    voters: VoterRegistry,
    audit: AuditLog,
}

/// Single owner of all election state. Share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct ElectionStore {
    tables: RwLock<Tables>,
}

impl ElectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the store for use. Idempotent: existing state is never erased.
    pub fn setup(&self) -> Result<()> {
        let mut tables = self.write()?;
        tables.audit.record(
            Utc::now(),
            AuditAction::Setup,
            "All voting tables created successfully",
        );
        info!(
            "Election store set up ({} candidates, {} voters)",
            tables.candidates.len(),
            tables.voters.len()
        );
        Ok(())
    }

    /// Validate and store a new candidate.
    pub fn add_candidate(&self, candidate: NewCandidate) -> Result<Candidate> {
        let candidate = candidate.validated()?;
        let mut tables = self.write()?;
        let now = Utc::now();
        let details = format!(
            "Added candidate: {} for position: {}",
            candidate.name, candidate.position
        );
        let candidate = tables.candidates.add(candidate, now).clone();
        tables.audit.record(now, AuditAction::AddCandidate, details);
        info!(
            "Added candidate {} '{}' for '{}'",
            candidate.id, candidate.name, candidate.position
        );
        Ok(candidate)
    }

    /// Every candidate, in creation order.
    pub fn candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.read()?.candidates.list().to_vec())
    }

    pub fn candidate(&self, id: CandidateId) -> Result<Candidate> {
        self.read()?
            .candidates
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found("Candidate"))
    }

    /// Validate and register a new voter. Voter IDs and emails must be unused.
    pub fn register_voter(&self, voter: NewVoter) -> Result<Voter> {
        let voter = voter.validated()?;
        let mut tables = self.write()?;
        let now = Utc::now();
        let details = format!(
            "Registered voter: {} with ID: {}",
            voter.name, voter.voter_id
        );
        let voter = tables.voters.register(voter, now)?.clone();
        tables.audit.record(now, AuditAction::RegisterVoter, details);
        info!("Registered voter {}", voter.voter_id);
        Ok(voter)
    }

    pub fn voter(&self, voter_id: &str) -> Result<Voter> {
        self.read()?
            .voters
            .get(voter_id)
            .cloned()
            .ok_or_else(|| Error::not_found("Voter"))
    }

    /// Cast a vote; see [`VoteLedger::cast`].
    pub fn cast_vote(&self, request: &VoteRequest) -> Result<VoteReceipt> {
        let mut guard = self.write()?;
        let Tables {
            candidates,
            voters,
            audit,
        } = &mut *guard;
        let receipt = VoteLedger::new(candidates, voters, audit).cast(request, Utc::now())?;
        info!(
            "Voter {} voted for candidate {}",
            receipt.voter_id, receipt.candidate_id
        );
        Ok(receipt)
    }

    /// Results per position, aggregated from a snapshot taken at the start of the call.
    /// Votes cast while aggregating are not reflected.
    pub fn results(&self) -> Result<Vec<PositionResult>> {
        let snapshot = self.candidates()?;
        Ok(aggregate(&snapshot))
    }

    /// The most recent `limit` audit entries, oldest first. Zero means all of them.
    pub fn audit_log(&self, limit: usize) -> Result<Vec<AuditLogEntry>> {
        Ok(self.read()?.audit.latest(limit).to_vec())
    }

    /// Number of voters who have voted, alongside the sum of all tallies, read atomically.
    /// The two are always equal.
    pub fn turnout(&self) -> Result<(usize, u64)> {
        let tables = self.read()?;
        Ok((tables.voters.voted_count(), tables.candidates.total_votes()))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> Error {
    error!("Election store lock is poisoned, refusing to touch election state");
    Error::Persistence("election store lock poisoned".to_string())
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use crate::model::{CandidateCore, VoterCore};

    use super::*;

    impl ElectionStore {
        /// Two candidates for President (IDs 1 and 2), one for Treasurer (ID 3),
        /// and voters `v1`, `v2`, `v3`.
        pub fn seed_example(&self) {
            self.add_candidate(CandidateCore::example_with_party("A", "Blue", "President"))
                .unwrap();
            self.add_candidate(CandidateCore::example_with_party("B", "Red", "President"))
                .unwrap();
            self.add_candidate(CandidateCore::example("C", "Treasurer"))
                .unwrap();
            for (voter_id, name) in [("v1", "Alice"), ("v2", "Bob"), ("v3", "Carol")] {
                self.register_voter(VoterCore::example(voter_id, name))
                    .unwrap();
            }
        }
    }
}
