//! The operation set the admin console talks to.
//!
//! Every method returns a [`Reply`]: domain errors are caught here, logged and
//! turned into `{status: "error", message}`. Nothing below this layer knows
//! about the wire format.

use std::sync::Arc;

use log::{error, warn};

use crate::error::{Error, Result};
use crate::logging::RequestId;
use crate::model::{
    api::{Data, Empty, Reply, Results},
    AuditLogEntry, Candidate, NewCandidate, NewVoter, VoteReceipt, VoteRequest, Voter,
};
use crate::store::ElectionStore;

pub struct Coordinator {
    store: Arc<ElectionStore>,
    audit_log_limit: usize,
}

impl Coordinator {
    pub fn new(store: Arc<ElectionStore>, audit_log_limit: usize) -> Self {
        Self {
            store,
            audit_log_limit,
        }
    }

    pub fn store(&self) -> &ElectionStore {
        &self.store
    }

    pub fn setup_database(&self, id: &RequestId) -> Reply<Empty> {
        respond(id, "setup", self.store.setup(), |()| {
            Reply::success("Voting database setup completed!", Empty::default())
        })
    }

    pub fn add_candidate(&self, id: &RequestId, candidate: NewCandidate) -> Reply<Data<Candidate>> {
        let result = self.store.add_candidate(candidate);
        respond(id, "add candidate", result, |candidate| {
            Reply::success("Candidate added successfully!", Data { data: candidate })
        })
    }

    pub fn register_voter(&self, id: &RequestId, voter: NewVoter) -> Reply<Data<Voter>> {
        respond(id, "register voter", self.store.register_voter(voter), |voter| {
            Reply::success("Voter registered successfully!", Data { data: voter })
        })
    }

    pub fn cast_vote(&self, id: &RequestId, request: &VoteRequest) -> Reply<Data<VoteReceipt>> {
        respond(id, "cast vote", self.store.cast_vote(request), |receipt| {
            Reply::success("Vote cast successfully!", Data { data: receipt })
        })
    }

    pub fn candidates(&self, id: &RequestId) -> Reply<Data<Vec<Candidate>>> {
        respond(id, "list candidates", self.store.candidates(), |candidates| {
            let message = format!("Retrieved {} candidates", candidates.len());
            Reply::success(message, Data { data: candidates })
        })
    }

    pub fn results(&self, id: &RequestId) -> Reply<Results> {
        respond(id, "compute results", self.store.results(), |results| {
            Reply::success("Election results retrieved", Results { results })
        })
    }

    /// The latest audit entries, oldest first. `limit` overrides the configured
    /// default; zero means everything.
    pub fn audit_logs(
        &self,
        id: &RequestId,
        limit: Option<usize>,
    ) -> Reply<Data<Vec<AuditLogEntry>>> {
        let limit = limit.unwrap_or(self.audit_log_limit);
        respond(id, "list audit logs", self.store.audit_log(limit), |entries| {
            let message = format!("Retrieved {} audit log entries", entries.len());
            Reply::success(message, Data { data: entries })
        })
    }
}

/// Build the reply for `result`, logging any failure against `operation` and the request.
fn respond<T, P>(
    id: &RequestId,
    operation: &str,
    result: Result<T>,
    success: impl FnOnce(T) -> Reply<P>,
) -> Reply<P> {
    match result {
        Ok(value) => success(value),
        Err(err @ Error::Persistence(_)) => {
            error!("req{id} failed to {operation}: {err}");
            Reply::error(&err)
        }
        Err(err) => {
            warn!("req{id} rejected {operation}: {err}");
            Reply::error(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::http::Status;

    use crate::model::{CandidateCore, VoterCore};

    use super::*;

    fn coordinator() -> Coordinator {
        // Rejections are logged, so make them visible when a test fails.
        log4rs_test_utils::test_logging::init_logging_once_for(["election_backend"], None, None);
        Coordinator::new(Arc::new(ElectionStore::new()), 50)
    }

    #[test]
    fn add_candidate_returns_stored_record() {
        let coordinator = coordinator();
        let id = RequestId::next();
        let reply = coordinator.add_candidate(&id, CandidateCore::example("A", "President"));
        assert!(reply.is_success());
        assert_eq!(reply.message(), "Candidate added successfully!");
        let candidate = reply.into_payload().unwrap().data;
        assert_eq!(candidate.id, 1);
        assert_eq!(candidate.vote_count(), 0);
    }

    #[test]
    fn domain_errors_become_error_replies() {
        let coordinator = coordinator();
        let id = RequestId::next();
        coordinator.store().seed_example();

        let reply = coordinator.register_voter(&id, VoterCore::example("v1", "Alice"));
        assert!(!reply.is_success());
        assert_eq!(reply.status(), Status::Conflict);
        assert_eq!(reply.message(), "Voter ID or email already exists");

        let reply = coordinator.cast_vote(&id, &VoteRequest::new("v9", 1));
        assert_eq!(reply.status(), Status::NotFound);
        assert_eq!(reply.message(), "Voter not found");

        let reply = coordinator.add_candidate(&id, CandidateCore::example("A", " "));
        assert_eq!(reply.status(), Status::BadRequest);
        assert_eq!(reply.message(), "Name and position are required");
    }

    #[test]
    fn audit_limit_defaults_to_config() {
        let coordinator = Coordinator::new(Arc::new(ElectionStore::new()), 2);
        let id = RequestId::next();
        coordinator.store().seed_example();

        let reply = coordinator.audit_logs(&id, None);
        let entries = reply.into_payload().unwrap().data;
        assert_eq!(entries.len(), 2);
        // The latest two, oldest first.
        assert_eq!(entries[0].details, "Registered voter: Bob with ID: v2");
        assert_eq!(entries[1].details, "Registered voter: Carol with ID: v3");

        let reply = coordinator.audit_logs(&id, Some(0));
        assert_eq!(reply.into_payload().unwrap().data.len(), 6);
    }

    #[test]
    fn results_follow_votes() {
        let coordinator = coordinator();
        let id = RequestId::next();
        coordinator.store().seed_example();
        assert!(coordinator.cast_vote(&id, &VoteRequest::new("v1", 2)).is_success());

        let results = coordinator.results(&id).into_payload().unwrap().results;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].candidates[0].name, "B");
        assert_eq!(results[0].candidates[0].percentage, 100.0);
        assert_eq!(results[1].position, "Treasurer");
        assert_eq!(results[1].total_votes, 0);
    }
}
