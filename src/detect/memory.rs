//! Detection of allocation churn and leak-shaped imbalance (C/C++).
//!
//! Two independent passes over the same lines:
//!
//! 1. Alloc-in-loop: any `new`/`malloc`/`calloc`/`realloc` inside a
//!    loop body is flagged once per loop, listing the offending lines.
//! 2. Leak balance: a whole-file count of allocations vs deallocations,
//!    skipping comment lines. More allocations than deallocations is
//!    reported as a potential leak. This is a balance check, not a
//!    pairing analysis, so allocations freed in another function will
//!    over-report; the imprecision is accepted.

use crate::language::Language;

use super::block::extract_body;
use super::matchers;
use super::{Detector, Finding, PatternId, Severity};

/// Flags heap allocation inside loops and unbalanced alloc/free counts.
pub struct MemoryDetector;

impl Detector for MemoryDetector {
    fn pattern_id(&self) -> PatternId {
        PatternId::ExcessiveAlloc
    }

    fn detect(&self, code: &str, language: &str) -> Vec<Finding> {
        let Some(lang) = Language::parse(language) else {
            return Vec::new();
        };
        if !matches!(lang, Language::Cpp | Language::C) {
            return Vec::new();
        }
        let lines: Vec<&str> = code.lines().collect();
        let mut findings = detect_alloc_in_loops(&lines, lang);
        findings.extend(detect_leak_imbalance(&lines));
        findings
    }
}

fn detect_alloc_in_loops(lines: &[&str], language: Language) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !matchers::is_loop_header(lines[i]) {
            i += 1;
            continue;
        }

        let (body_start, body_end) = extract_body(lines, i, language);
        let alloc_lines: Vec<usize> = (body_start..body_end)
            .filter(|&j| matchers::allocation().is_match(lines[j]))
            .map(|j| j + 1)
            .collect();

        if !alloc_lines.is_empty() {
            let listed = alloc_lines
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            findings.push(Finding {
                pattern_id: PatternId::ExcessiveAlloc,
                name: "Heap Allocation Inside Loop".to_string(),
                severity: Severity::High,
                line_start: i + 1,
                line_end: body_end.max(i + 1),
                description: format!(
                    "Memory allocation (new/malloc) detected inside loop body at \
                     line(s) {}. This causes repeated heap allocations which are \
                     expensive.",
                    listed
                ),
                suggestion: "Pre-allocate memory before the loop or use stack \
                             allocation. Consider std::vector::reserve() or \
                             allocating a buffer once and reusing it across \
                             iterations."
                    .to_string(),
                estimated_energy_cost: 75.0,
                estimated_energy_saved: 50.0,
            });
        }

        i = body_end.max(i + 1);
    }

    findings
}

fn detect_leak_imbalance(lines: &[&str]) -> Vec<Finding> {
    let mut alloc_count = 0usize;
    let mut dealloc_count = 0usize;
    let mut first_alloc_line = None;

    for (i, line) in lines.iter().enumerate() {
        if matchers::is_comment_line(line) {
            continue;
        }
        if matchers::leak_allocation().is_match(line) {
            alloc_count += 1;
            if first_alloc_line.is_none() {
                first_alloc_line = Some(i + 1);
            }
        }
        if matchers::deallocation().is_match(line) {
            dealloc_count += 1;
        }
    }

    let Some(first_alloc_line) = first_alloc_line else {
        return Vec::new();
    };
    if alloc_count <= dealloc_count {
        return Vec::new();
    }

    vec![Finding {
        pattern_id: PatternId::MemoryLeak,
        name: "Potential Memory Leak".to_string(),
        severity: Severity::Medium,
        line_start: first_alloc_line,
        line_end: lines.len().max(first_alloc_line),
        description: format!(
            "Found {} allocation(s) but only {} deallocation(s). Memory may be \
             leaking.",
            alloc_count, dealloc_count
        ),
        suggestion: "Use smart pointers (std::unique_ptr, std::shared_ptr) instead \
                     of raw new/delete for automatic memory management. This also \
                     reduces energy waste from memory pressure and potential swap \
                     usage."
            .to_string(),
        estimated_energy_cost: 50.0,
        estimated_energy_saved: 30.0,
    }]
}
