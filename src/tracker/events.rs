//! Inbound mining samples

use serde::{Deserialize, Serialize};

/// Which miner a sample comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareClass {
    Cpu,
    Gpu,
}

impl HardwareClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            HardwareClass::Cpu => "cpu",
            HardwareClass::Gpu => "gpu",
        }
    }
}

/// One sample from the mining backend.
///
/// Encoded as JSON with a `type` tag, one event per line in a feed:
///
/// ```text
/// {"type":"mining_status","hardware":"cpu","is_mining":true,"hash_rate":1200.0}
/// {"type":"pool_stats","hardware":"gpu","accepted_shares":42}
/// {"type":"performance_mode","enabled":true}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MiningEvent {
    /// Miner status poll
    MiningStatus {
        hardware: HardwareClass,
        is_mining: bool,
        #[serde(default)]
        hash_rate: f64,
        /// Cumulative earnings estimate in micro-units
        #[serde(default, skip_serializing_if = "Option::is_none")]
        estimated_earnings: Option<f64>,
    },

    /// Pool statistics poll
    PoolStats {
        hardware: HardwareClass,
        /// Cumulative accepted shares as reported by the pool
        accepted_shares: u64,
    },

    /// Performance mode toggled in settings
    PerformanceMode { enabled: bool },
}
