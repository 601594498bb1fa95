//! Wattcheck - energy anti-pattern linter.
//!
//! Wattcheck scans source files in several languages and flags idioms
//! known to waste CPU, NIC, and memory energy: O(n²) sorting nests,
//! heap allocation inside loops, leak-shaped allocation imbalance,
//! network calls inside loops, busy-polling, and duplicate fetches of
//! the same endpoint.
//!
//! Detection is structural, not syntactic: loops and their bodies are
//! located with brace-depth counting (C, C++, JavaScript, TypeScript)
//! or indentation tracking (Python) plus per-language regex tables. No
//! AST is built, so the engine tolerates malformed and partial code and
//! never raises an error for any input.
//!
//! # Architecture
//!
//! - `language`: language tags and block-delimiting families
//! - `detect`: the block extractor, lexical matchers, and the three
//!   detectors (sorting, memory, network)
//! - `engine`: ordered detector registry with a pure `analyze` call
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: file walking and the `wattcheck` command
//!
//! # Example
//!
//! ```
//! use wattcheck::AnalysisEngine;
//!
//! let engine = AnalysisEngine::with_default_detectors();
//! let findings = engine.analyze("while (true) { poll(); }", "cpp");
//! assert!(findings.is_empty());
//! ```

pub mod cli;
pub mod detect;
pub mod engine;
pub mod language;
pub mod report;

pub use detect::{
    Detector, Finding, MemoryDetector, NetworkDetector, PatternId, Severity, SortingDetector,
};
pub use engine::AnalysisEngine;
pub use language::{BlockStyle, Language};
pub use report::FileReport;
