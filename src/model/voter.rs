use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{is_blank, null_as_empty};

/// Core voter data, as submitted at registration. The `voter_id` is chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterCore {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub voter_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// A voter that has not been registered yet.
pub type NewVoter = VoterCore;

impl VoterCore {
    /// Check that every field is present and trim surrounding whitespace.
    pub fn validated(self) -> Result<Self> {
        if is_blank(&self.voter_id) || is_blank(&self.name) || is_blank(&self.email) {
            return Err(Error::validation("All fields are required"));
        }
        Ok(Self {
            voter_id: self.voter_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }

    /// The key under which the email must be unique. Addresses differing only in case collide.
    pub fn email_key(&self) -> String {
        self.email.to_lowercase()
    }
}

/// A registered voter and whether they have voted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    #[serde(flatten)]
    pub voter: VoterCore,
    has_voted: bool,
    voted_at: Option<DateTime<Utc>>,
    pub registered_at: DateTime<Utc>,
}

impl Voter {
    pub fn new(voter: VoterCore, registered_at: DateTime<Utc>) -> Self {
        Self {
            voter,
            has_voted: false,
            voted_at: None,
            registered_at,
        }
    }

    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    pub fn voted_at(&self) -> Option<DateTime<Utc>> {
        self.voted_at
    }

    /// Flip the voter to "has voted". This only ever happens once: returns false,
    /// leaving the voter unchanged, if they had already voted.
    pub(crate) fn mark_voted(&mut self, at: DateTime<Utc>) -> bool {
        if self.has_voted {
            return false;
        }
        self.has_voted = true;
        self.voted_at = Some(at);
        true
    }
}

impl Deref for Voter {
    type Target = VoterCore;

    fn deref(&self) -> &Self::Target {
        &self.voter
    }
}
