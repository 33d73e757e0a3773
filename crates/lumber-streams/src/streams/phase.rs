//! Caller-side run phase: which log sources to poll for a run.
//!
//! The engine holds no lifecycle state; the poller owns a phase per run and
//! advances it from what the entry points return. Completion is surfaced
//! only by the live query's cursor collapsing to `None`; temp exhaustion is
//! an empty merge after completion; archived exhaustion is a `None` cursor
//! with no manifest growth across polls.

use serde::{Deserialize, Serialize};

/// Where a run's logs currently live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunLogPhase {
    /// Workload running: poll the temp merger and the live feed.
    Live,
    /// Completion detected: keep draining temp buffers while they hold data.
    Draining,
    /// Fully rotated into durable storage: poll archived chunks only.
    Archived,
}

impl RunLogPhase {
    /// Applies one poll round's observations.
    pub fn advance(self, completion_detected: bool, temp_exhausted: bool) -> Self {
        match self {
            RunLogPhase::Live if completion_detected && temp_exhausted => RunLogPhase::Archived,
            RunLogPhase::Live if completion_detected => RunLogPhase::Draining,
            RunLogPhase::Live => RunLogPhase::Live,
            RunLogPhase::Draining if temp_exhausted => RunLogPhase::Archived,
            RunLogPhase::Draining => RunLogPhase::Draining,
            RunLogPhase::Archived => RunLogPhase::Archived,
        }
    }

    /// Whether this phase polls the live feed.
    pub fn polls_live(self) -> bool {
        self == RunLogPhase::Live
    }

    /// Whether this phase polls the temp merger.
    pub fn polls_temp(self) -> bool {
        matches!(self, RunLogPhase::Live | RunLogPhase::Draining)
    }

    /// Whether this phase polls archived chunks.
    pub fn polls_archived(self) -> bool {
        self == RunLogPhase::Archived
    }
}
