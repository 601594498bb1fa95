//! Energy anti-pattern detectors.
//!
//! Each detector is a stateless component mapping `(code, language)` to
//! an ordered list of findings for one anti-pattern category. Detectors
//! never fail: malformed source, unmatched braces, or an unsupported
//! language tag all degrade to fewer (or zero) findings, never to an
//! error. A linter must not crash a caller's pipeline on adversarial
//! input.

mod block;
mod matchers;
mod memory;
mod network;
mod sorting;
mod types;

pub use block::extract_body;
pub use memory::MemoryDetector;
pub use network::NetworkDetector;
pub use sorting::SortingDetector;
pub use types::{Finding, PatternId, Severity};

/// Capability shared by all detectors.
///
/// Implementations hold no per-call mutable state, so a single instance
/// is safe to use concurrently across inputs.
pub trait Detector: Send + Sync {
    /// The detector's primary pattern identifier. Individual findings
    /// may carry sibling identifiers (the memory detector reports both
    /// `excessive_alloc` and `memory_leak`).
    fn pattern_id(&self) -> PatternId;

    /// Scan `code` under the given language tag. Unknown or unsupported
    /// tags yield an empty list; that is normal operation, not an error.
    fn detect(&self, code: &str, language: &str) -> Vec<Finding>;
}
