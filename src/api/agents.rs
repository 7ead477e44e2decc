// Trading agent catalog module
// The built-in agents the platform ships with

use serde::Serialize;

/// A trading agent as reported by the agents endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub status: String,
    pub active: bool,
    pub wallets: AgentWallets,
    pub metrics: AgentMetrics,
}

/// Wallet addresses an agent operates with
#[derive(Debug, Clone, Serialize)]
pub struct AgentWallets {
    pub trading: String,
    pub profit: String,
    pub fee: String,
    pub stealth: Vec<String>,
}

/// Aggregate execution metrics for an agent
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMetrics {
    pub total_executions: u64,
    pub success_rate: f64,
    pub total_profit: f64,
    pub last_execution: String,
}

impl AgentRecord {
    /// Copy of the record with `lastExecution` set to the given instant
    ///
    /// Catalog entries carry no execution time of their own; the serialized
    /// form reports the moment the request was answered.
    pub fn stamped(&self, timestamp: &str) -> Self {
        let mut record = self.clone();
        record.metrics.last_execution = timestamp.to_string();
        record
    }
}

/// The agent catalog served by the agents endpoint
pub fn builtin_agents() -> Vec<AgentRecord> {
    vec![
        AgentRecord {
            id: "hyperion-1".to_string(),
            name: "Hyperion Flash Arbitrage".to_string(),
            agent_type: "hyperion".to_string(),
            status: "idle".to_string(),
            active: true,
            wallets: AgentWallets {
                trading: "HN7cABqLq46Es1jh92dQQisAq662SmxELLLsHHe5tHE2".to_string(),
                profit: "2xNwwA8DmH5AsLhBjevvkPzTnpvH6Zz4pQ7bvQD9rtkf".to_string(),
                fee: "4z1PvJnKZcnLSJYGRNdZn7eYAUkKRiUJJW6Kcmt2hiEX".to_string(),
                stealth: vec!["3Y7T8oBSHUb81uetPjjzSBdGe6RN2rTZ3NEN1xQ6mVi4".to_string()],
            },
            metrics: AgentMetrics {
                total_executions: 157,
                success_rate: 0.92,
                total_profit: 23.45,
                last_execution: String::new(),
            },
        },
        AgentRecord {
            id: "quantum-omega-1".to_string(),
            name: "Quantum Omega Sniper".to_string(),
            agent_type: "quantum_omega".to_string(),
            status: "idle".to_string(),
            active: true,
            wallets: AgentWallets {
                trading: "5FHwkrdxD5oNU3DwPWbxLQkd5Za4rQXQDkxMZvHzLkSr".to_string(),
                profit: "7XvgVxyh5cQeb9PdiUJZBbyYAqNz8JfwbFGPn6HvhNxW".to_string(),
                fee: "3WPBgP3Mcv2XTf6Sq8QNLegzVMhGp4w1mYhRK5o3bzJ7".to_string(),
                stealth: vec![
                    "3Y7T8oBSHUb81uetPjjzSBdGe6RN2rTZ3NEN1xQ6mVi4".to_string(),
                    "9Y7T8oBSHUb81uetPjjzSBdGe6RN2rTZ3NEN1xQ6mVqW".to_string(),
                ],
            },
            metrics: AgentMetrics {
                total_executions: 82,
                success_rate: 0.88,
                total_profit: 14.76,
                last_execution: String::new(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let agents = builtin_agents();
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].id, "hyperion-1");
        assert_eq!(agents[0].wallets.stealth.len(), 1);
        assert_eq!(agents[1].id, "quantum-omega-1");
        assert_eq!(agents[1].wallets.stealth.len(), 2);
        for agent in &agents {
            assert!(agent.active);
            assert!(agent.metrics.success_rate > 0.0 && agent.metrics.success_rate <= 1.0);
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let agents = builtin_agents();
        let json = serde_json::to_value(&agents[0]).unwrap();
        assert_eq!(json["type"], "hyperion");
        assert_eq!(json["metrics"]["totalExecutions"], 157);
        assert_eq!(json["metrics"]["successRate"], 0.92);
        assert_eq!(json["metrics"]["totalProfit"], 23.45);
        assert!(json["metrics"]["lastExecution"].is_string());
        assert_eq!(
            json["wallets"]["trading"],
            "HN7cABqLq46Es1jh92dQQisAq662SmxELLLsHHe5tHE2"
        );
    }

    #[test]
    fn test_stamped_sets_last_execution() {
        let agents = builtin_agents();
        let stamped = agents[0].stamped("2025-01-01T00:00:00.000Z");
        assert_eq!(stamped.metrics.last_execution, "2025-01-01T00:00:00.000Z");
        // The catalog entry itself stays untouched
        assert!(agents[0].metrics.last_execution.is_empty());
    }
}
