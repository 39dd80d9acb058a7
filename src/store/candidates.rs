use chrono::{DateTime, Utc};

use crate::model::{Candidate, CandidateId, NewCandidate};

/// All candidates, in creation order.
///
/// IDs are allocated sequentially from 1 and candidates are never removed, so
/// the candidate with ID `n` always lives at index `n - 1`.
#[derive(Debug, Default)]
pub struct CandidateRegistry {
    candidates: Vec<Candidate>,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-validated candidate with a fresh ID and a zero tally.
    pub fn add(&mut self, candidate: NewCandidate, at: DateTime<Utc>) -> &Candidate {
        let id = self.next_id();
        self.candidates.push(Candidate::new(id, candidate, at));
        &self.candidates[self.candidates.len() - 1]
    }

    /// Every candidate, oldest first.
    pub fn list(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        Self::index(id).and_then(|i| self.candidates.get(i))
    }

    pub(super) fn get_mut(&mut self, id: CandidateId) -> Option<&mut Candidate> {
        Self::index(id).and_then(move |i| self.candidates.get_mut(i))
    }

    /// Sum of every candidate's tally.
    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(Candidate::vote_count).sum()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn next_id(&self) -> CandidateId {
        self.candidates.len() as CandidateId + 1
    }

    fn index(id: CandidateId) -> Option<usize> {
        id.checked_sub(1).map(|i| i as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::CandidateCore;

    use super::*;

    #[test]
    fn ids_follow_creation_order() {
        let mut registry = CandidateRegistry::new();
        let a = registry
            .add(CandidateCore::example("A", "President"), Utc::now())
            .id;
        let b = registry
            .add(CandidateCore::example("B", "Treasurer"), Utc::now())
            .id;
        assert_eq!((a, b), (1, 2));

        let names = registry.list().iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B"]);
        assert!(registry.list().iter().all(|c| c.vote_count() == 0));
    }

    #[test]
    fn lookup_by_id() {
        let mut registry = CandidateRegistry::new();
        registry.add(CandidateCore::example("A", "President"), Utc::now());

        assert_eq!(registry.get(1).map(|c| c.name.as_str()), Some("A"));
        assert!(registry.get(0).is_none());
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn total_votes_sums_tallies() {
        let mut registry = CandidateRegistry::new();
        registry.add(CandidateCore::example("A", "President"), Utc::now());
        registry.add(CandidateCore::example("B", "President"), Utc::now());
        registry.get_mut(1).unwrap().record_vote();
        registry.get_mut(1).unwrap().record_vote();
        registry.get_mut(2).unwrap().record_vote();
        assert_eq!(registry.total_votes(), 3);
    }
}
