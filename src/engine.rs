//! Analysis engine: an ordered registry of detectors.
//!
//! The engine is built once at startup (registration is append-only)
//! and is thereafter read-only, so a single instance can serve
//! concurrent `analyze` calls on separate inputs without locking.

use crate::detect::{Detector, Finding, MemoryDetector, NetworkDetector, SortingDetector};

/// Runs every registered detector over the same input and concatenates
/// their findings in registration order.
pub struct AnalysisEngine {
    detectors: Vec<Box<dyn Detector>>,
}

impl AnalysisEngine {
    /// Create an engine with no detectors registered.
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// Create an engine with the standard detector set: sorting, memory,
    /// network, in that order.
    pub fn with_default_detectors() -> Self {
        let mut engine = Self::new();
        engine.register(Box::new(SortingDetector));
        engine.register(Box::new(MemoryDetector));
        engine.register(Box::new(NetworkDetector));
        engine
    }

    /// Append a detector. Registration order determines output order
    /// only; it does not affect what is detected.
    pub fn register(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Run every detector on `(code, language)` and concatenate their
    /// outputs in registration order. No cross-detector deduplication:
    /// two detectors may flag overlapping lines under different
    /// pattern identifiers.
    pub fn analyze(&self, code: &str, language: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for detector in &self.detectors {
            findings.extend(detector.detect(code, language));
        }
        findings
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{MemoryDetector, NetworkDetector, PatternId, SortingDetector};

    const BUBBLE_SORT: &str = r#"
void sort(int arr[], int n) {
    for (int i = 0; i < n; i++) {
        for (int j = 0; j < n; j++) {
            int temp = arr[i];
            arr[i] = arr[j];
            arr[j] = temp;
        }
    }
}
"#;

    #[test]
    fn test_empty_engine_finds_nothing() {
        let engine = AnalysisEngine::new();
        assert_eq!(engine.detector_count(), 0);
        assert!(engine.analyze(BUBBLE_SORT, "cpp").is_empty());
    }

    #[test]
    fn test_default_detectors_registered_in_order() {
        let engine = AnalysisEngine::with_default_detectors();
        assert_eq!(engine.detector_count(), 3);
    }

    #[test]
    fn test_analyze_concatenates_in_registration_order() {
        let mut engine = AnalysisEngine::new();
        engine.register(Box::new(NetworkDetector));
        engine.register(Box::new(SortingDetector));

        let code = "while (true) {\n    curl_easy_perform(curl);\n    sleep(5);\n}\n";
        let findings = engine.analyze(code, "cpp");
        // Network findings come first because that detector registered first.
        assert!(!findings.is_empty());
        assert!(matches!(
            findings[0].pattern_id,
            PatternId::NetworkWaste | PatternId::PollingPattern
        ));
    }

    #[test]
    fn test_analyze_length_equals_sum_of_detectors() {
        let engine = AnalysisEngine::with_default_detectors();
        let code = r#"
for (int i = 0; i < n; i++) {
    int* buf = new int[64];
    curl_easy_perform(curl);
}
"#;
        let combined = engine.analyze(code, "cpp").len();
        let separate = SortingDetector.detect(code, "cpp").len()
            + MemoryDetector.detect(code, "cpp").len()
            + NetworkDetector.detect(code, "cpp").len();
        assert_eq!(combined, separate);
    }

    #[test]
    fn test_unsupported_language_yields_empty() {
        let engine = AnalysisEngine::with_default_detectors();
        assert!(engine.analyze(BUBBLE_SORT, "rust").is_empty());
        assert!(engine.analyze(BUBBLE_SORT, "").is_empty());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let engine = AnalysisEngine::with_default_detectors();
        let first = engine.analyze(BUBBLE_SORT, "cpp");
        let second = engine.analyze(BUBBLE_SORT, "cpp");
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_empty_input_is_fine() {
        let engine = AnalysisEngine::with_default_detectors();
        assert!(engine.analyze("", "cpp").is_empty());
        assert!(engine.analyze("\n\n\n", "python").is_empty());
    }
}
