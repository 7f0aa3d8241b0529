//! Driver-car assignment outcome.

use serde::{Deserialize, Serialize};

/// Membership of a driver in a car's driver set after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Assignment {
    Assigned,
    Unassigned,
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Assignment::Assigned => f.write_str("assigned"),
            Assignment::Unassigned => f.write_str("unassigned"),
        }
    }
}
