#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use std::sync::Arc;

use rocket::{Build, Rocket};

use crate::config::{ConfigFairing, ElectionFairing};
use crate::logging::LoggerFairing;
use crate::store::ElectionStore;

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

pub use config::Config;

/// Build a server around a fresh, empty election.
pub fn build() -> Rocket<Build> {
    rocket_for_store(Arc::new(ElectionStore::new()))
}

/// Build a server around the given election store.
pub fn rocket_for_store(store: Arc<ElectionStore>) -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .register("/", api::catchers())
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(ElectionFairing::new(store))
}
