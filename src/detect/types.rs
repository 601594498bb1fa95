//! Core types for detection results.

use serde::{Deserialize, Serialize};

/// Severity levels for findings, ordered LOW < MEDIUM < HIGH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// Stable identifiers for the anti-pattern categories.
///
/// Downstream consumers (the energy scorer in particular) key on these
/// strings, so the serialized form is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternId {
    #[serde(rename = "inefficient_sort")]
    InefficientSort,
    #[serde(rename = "excessive_alloc")]
    ExcessiveAlloc,
    #[serde(rename = "memory_leak")]
    MemoryLeak,
    #[serde(rename = "network_waste")]
    NetworkWaste,
    #[serde(rename = "polling_pattern")]
    PollingPattern,
    #[serde(rename = "duplicate_network_call")]
    DuplicateNetworkCall,
}

impl PatternId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternId::InefficientSort => "inefficient_sort",
            PatternId::ExcessiveAlloc => "excessive_alloc",
            PatternId::MemoryLeak => "memory_leak",
            PatternId::NetworkWaste => "network_waste",
            PatternId::PollingPattern => "polling_pattern",
            PatternId::DuplicateNetworkCall => "duplicate_network_call",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inefficient_sort" => Some(PatternId::InefficientSort),
            "excessive_alloc" => Some(PatternId::ExcessiveAlloc),
            "memory_leak" => Some(PatternId::MemoryLeak),
            "network_waste" => Some(PatternId::NetworkWaste),
            "polling_pattern" => Some(PatternId::PollingPattern),
            "duplicate_network_call" => Some(PatternId::DuplicateNetworkCall),
            _ => None,
        }
    }
}

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single detected anti-pattern occurrence.
///
/// Created only by detectors, never mutated afterwards, and carries no
/// back-reference to the source text. Line numbers are 1-indexed and
/// inclusive, with `line_end >= line_start >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub pattern_id: PatternId,
    pub name: String,
    pub severity: Severity,
    pub line_start: usize,
    pub line_end: usize,
    pub description: String,
    pub suggestion: String,
    /// Advisory relative energy cost of the flagged code (>= 0).
    pub estimated_energy_cost: f64,
    /// Advisory relative energy saved by the suggested fix (>= 0).
    pub estimated_energy_saved: f64,
}
