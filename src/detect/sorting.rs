//! Detection of O(n²) sorting and iteration patterns.
//!
//! A nested loop whose inner span contains an element-swap idiom is
//! classified as a hand-rolled quadratic sort (bubble/selection). A
//! nested loop without a swap but with a collection-size reference is
//! still flagged as a quadratic iteration, at lower severity. Each
//! top-level loop nest produces at most one finding: the scan cursor
//! jumps past a classified loop's body instead of re-entering it.

use crate::language::Language;

use super::block::extract_body;
use super::matchers;
use super::{Detector, Finding, PatternId, Severity};

/// Flags quadratic sort/iteration nests in C, C++, and Python.
pub struct SortingDetector;

impl Detector for SortingDetector {
    fn pattern_id(&self) -> PatternId {
        PatternId::InefficientSort
    }

    fn detect(&self, code: &str, language: &str) -> Vec<Finding> {
        let Some(lang) = Language::parse(language) else {
            return Vec::new();
        };
        if !matches!(lang, Language::Cpp | Language::C | Language::Python) {
            return Vec::new();
        }
        let lines: Vec<&str> = code.lines().collect();
        detect_nested_loops(&lines, lang)
    }
}

fn detect_nested_loops(lines: &[&str], language: Language) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !matchers::is_loop_header(lines[i]) {
            i += 1;
            continue;
        }

        let (body_start, body_end) = extract_body(lines, i, language);
        let inner = (body_start..body_end).find(|&j| matchers::is_loop_header(lines[j]));
        let Some(inner) = inner else {
            // Single loop, nothing quadratic here.
            i += 1;
            continue;
        };

        let has_swap = (inner..body_end).any(|j| matchers::swap_idiom().is_match(lines[j]));
        if has_swap {
            findings.push(Finding {
                pattern_id: PatternId::InefficientSort,
                name: "O(n²) Bubble Sort Pattern".to_string(),
                severity: Severity::High,
                line_start: i + 1,
                line_end: body_end.max(i + 1),
                description: "Nested loop with element swapping detected. This is \
                              characteristic of O(n²) sorting algorithms like bubble \
                              sort or selection sort."
                    .to_string(),
                suggestion: "Replace with the standard library sort (std::sort, \
                             sorted()), which uses O(n log n) introsort. This reduces \
                             CPU cycles by ~100x for large inputs."
                    .to_string(),
                estimated_energy_cost: 85.0,
                estimated_energy_saved: 60.0,
            });
        } else {
            let has_size_ref =
                (i..body_end).any(|j| matchers::size_reference().is_match(lines[j]));
            if has_size_ref {
                findings.push(Finding {
                    pattern_id: PatternId::InefficientSort,
                    name: "O(n²) Nested Loop Iteration".to_string(),
                    severity: Severity::Medium,
                    line_start: i + 1,
                    line_end: body_end.max(i + 1),
                    description: "Nested loops iterating over collection size detected. \
                                  This results in O(n²) time complexity."
                        .to_string(),
                    suggestion: "Consider using a more efficient algorithm, hash map \
                                 lookup, or standard library algorithms to reduce to \
                                 O(n) or O(n log n)."
                        .to_string(),
                    estimated_energy_cost: 70.0,
                    estimated_energy_saved: 45.0,
                });
            }
        }

        // Never re-enter a classified nest.
        i = body_end.max(i + 1);
    }

    findings
}
