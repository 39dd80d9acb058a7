use rocket::{serde::json::Json, Route, State};

use crate::coordinator::Coordinator;
use crate::logging::RequestId;
use crate::model::{
    api::{Data, Empty, Reply},
    Candidate, NewCandidate, NewVoter, Voter,
};

pub fn routes() -> Vec<Route> {
    routes![setup_database, add_candidate, register_voter]
}

#[post("/setup-database")]
fn setup_database(id: &RequestId, coordinator: &State<Coordinator>) -> Reply<Empty> {
    coordinator.setup_database(id)
}

#[post("/add-candidate", data = "<candidate>", format = "json")]
fn add_candidate(
    candidate: Json<NewCandidate>,
    id: &RequestId,
    coordinator: &State<Coordinator>,
) -> Reply<Data<Candidate>> {
    coordinator.add_candidate(id, candidate.into_inner())
}

#[post("/register-voter", data = "<voter>", format = "json")]
fn register_voter(
    voter: Json<NewVoter>,
    id: &RequestId,
    coordinator: &State<Coordinator>,
) -> Reply<Data<Voter>> {
    coordinator.register_voter(id, voter.into_inner())
}
