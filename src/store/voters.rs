use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::model::{NewVoter, Voter};

/// Registered voters, keyed by their caller-chosen ID. Emails are unique too.
#[derive(Debug, Default)]
pub struct VoterRegistry {
    voters: HashMap<String, Voter>,
    emails: HashSet<String>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already-validated voter.
    ///
    /// Fails without touching the registry if the voter ID or email is taken.
    pub fn register(&mut self, voter: NewVoter, at: DateTime<Utc>) -> Result<&Voter> {
        let email_key = voter.email_key();
        if self.voters.contains_key(&voter.voter_id) || self.emails.contains(&email_key) {
            return Err(Error::DuplicateVoter(
                "Voter ID or email already exists".to_string(),
            ));
        }
        self.emails.insert(email_key);
        let voter_id = voter.voter_id.clone();
        let voter = self
            .voters
            .entry(voter_id)
            .or_insert_with(|| Voter::new(voter, at));
        Ok(&*voter)
    }

    pub fn get(&self, voter_id: &str) -> Option<&Voter> {
        self.voters.get(voter_id)
    }

    pub(super) fn get_mut(&mut self, voter_id: &str) -> Option<&mut Voter> {
        self.voters.get_mut(voter_id)
    }

    /// How many voters have cast their vote.
    pub fn voted_count(&self) -> usize {
        self.voters.values().filter(|v| v.has_voted()).count()
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::VoterCore;

    use super::*;

    #[test]
    fn register_and_get() {
        let mut registry = VoterRegistry::new();
        let voter = registry
            .register(VoterCore::example("v1", "Alice"), Utc::now())
            .unwrap();
        assert_eq!(voter.name, "Alice");
        assert!(!voter.has_voted());

        assert_eq!(registry.get("v1").map(|v| v.name.as_str()), Some("Alice"));
        assert!(registry.get("v2").is_none());
    }

    #[test]
    fn duplicate_id_is_rejected_without_mutation() {
        let mut registry = VoterRegistry::new();
        registry
            .register(VoterCore::example("v1", "Alice"), Utc::now())
            .unwrap();

        let mut again = VoterCore::example("v1", "Mallory");
        again.email = "mallory@example.com".to_string();
        let err = registry.register(again, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::DuplicateVoter(_)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("v1").unwrap().name, "Alice");
        // The rejected email was not reserved.
        let mut fresh = VoterCore::example("v2", "Mallory");
        fresh.email = "mallory@example.com".to_string();
        assert!(registry.register(fresh, Utc::now()).is_ok());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut registry = VoterRegistry::new();
        registry
            .register(VoterCore::example("v1", "Alice"), Utc::now())
            .unwrap();

        let mut clash = VoterCore::example("v2", "Bob");
        clash.email = "V1@EXAMPLE.COM".to_string();
        let err = registry.register(clash, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::DuplicateVoter(_)));
        assert!(registry.get("v2").is_none());
    }
}
