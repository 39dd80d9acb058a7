use rocket::{serde::json::Json, Route, State};

use crate::coordinator::Coordinator;
use crate::logging::RequestId;
use crate::model::{
    api::{Data, Reply},
    VoteReceipt, VoteRequest,
};

pub fn routes() -> Vec<Route> {
    routes![cast_vote]
}

#[post("/cast-vote", data = "<request>", format = "json")]
fn cast_vote(
    request: Json<VoteRequest>,
    id: &RequestId,
    coordinator: &State<Coordinator>,
) -> Reply<Data<VoteReceipt>> {
    coordinator.cast_vote(id, &request)
}
