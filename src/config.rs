use std::sync::Arc;

use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::{coordinator::Coordinator, store::ElectionStore};

/// Default for [`Config::audit_log_limit`], matching the page the admin console shows.
pub const DEFAULT_AUDIT_LOG_LIMIT: usize = 50;

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_audit_log_limit")]
    audit_log_limit: usize,
}

fn default_audit_log_limit() -> usize {
    DEFAULT_AUDIT_LOG_LIMIT
}

impl Config {
    /// How many of the most recent audit entries to return when the caller
    /// does not ask for a specific number. Zero means all of them.
    pub fn audit_log_limit(&self) -> usize {
        self.audit_log_limit
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audit_log_limit: DEFAULT_AUDIT_LOG_LIMIT,
        }
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that wraps the election store in a [`Coordinator`] and places it
/// into managed state. Must be attached after [`ConfigFairing`].
pub struct ElectionFairing {
    store: Arc<ElectionStore>,
}

impl ElectionFairing {
    pub fn new(store: Arc<ElectionStore>) -> Self {
        Self { store }
    }
}

#[rocket::async_trait]
impl Fairing for ElectionFairing {
    fn info(&self) -> Info {
        Info {
            name: "Election store",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let audit_log_limit = match rocket.state::<Config>() {
            Some(config) => config.audit_log_limit(),
            None => {
                error!("Election store needs the application config, attach `ConfigFairing` first");
                return Err(rocket);
            }
        };

        let coordinator = Coordinator::new(self.store.clone(), audit_log_limit);
        info!("Election store online (audit log limit {audit_log_limit})");
        Ok(rocket.manage(coordinator))
    }
}
