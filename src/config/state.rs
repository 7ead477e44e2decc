// Application state module
// Immutable state shared across connections

use crate::api::agents::{self, AgentRecord};

use super::types::Config;

/// Application state
///
/// Built once at startup and shared behind an `Arc`. Nothing in here changes
/// after boot, so handlers read it without locks.
pub struct AppState {
    pub config: Config,
    /// Built-in agent catalog served by the agents endpoint
    pub agents: Vec<AgentRecord>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            agents: agents::builtin_agents(),
            config,
        }
    }
}
