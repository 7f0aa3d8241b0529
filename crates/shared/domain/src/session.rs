//! Per-session state carried between requests.

use serde::{Deserialize, Serialize};

/// State kept for one session. Loaded before a request and saved after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub num_visits: u64,
}

impl SessionState {
    /// Count a visit, returning the updated state.
    pub fn visited(self) -> Self {
        Self {
            num_visits: self.num_visits.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visited_increments() {
        let state = SessionState::default().visited().visited();
        assert_eq!(state.num_visits, 2);
    }
}
