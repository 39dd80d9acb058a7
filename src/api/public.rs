use rocket::{Route, State};

use crate::coordinator::Coordinator;
use crate::logging::RequestId;
use crate::model::{
    api::{Data, Reply, Results},
    AuditLogEntry, Candidate,
};

pub fn routes() -> Vec<Route> {
    routes![get_candidates, get_results, get_audit_logs]
}

#[get("/get-candidates")]
fn get_candidates(
    id: &RequestId,
    coordinator: &State<Coordinator>,
) -> Reply<Data<Vec<Candidate>>> {
    coordinator.candidates(id)
}

#[get("/get-results")]
fn get_results(id: &RequestId, coordinator: &State<Coordinator>) -> Reply<Results> {
    coordinator.results(id)
}

/// Most recent audit entries, oldest first. Without `limit`, the configured default applies.
#[get("/get-audit-logs?<limit>")]
fn get_audit_logs(
    limit: Option<usize>,
    id: &RequestId,
    coordinator: &State<Coordinator>,
) -> Reply<Data<Vec<AuditLogEntry>>> {
    coordinator.audit_logs(id, limit)
}
