use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kinds of action that leave an audit entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Setup,
    AddCandidate,
    RegisterVoter,
    CastVote,
}

impl Display for AuditAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Setup => "SETUP",
            Self::AddCandidate => "ADD_CANDIDATE",
            Self::RegisterVoter => "REGISTER_VOTER",
            Self::CastVote => "CAST_VOTE",
        };
        f.write_str(name)
    }
}

/// One immutable line of the audit trail.
///
/// Entries are ordered by `timestamp`; `id` is the insertion sequence number
/// and breaks ties between equal timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::*;

    #[test]
    fn action_names_match_display() {
        for action in [
            AuditAction::Setup,
            AuditAction::AddCandidate,
            AuditAction::RegisterVoter,
            AuditAction::CastVote,
        ] {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, action.to_string());
        }
    }
}
