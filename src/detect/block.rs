//! Loop body extraction without parsing.
//!
//! Given the line index of a loop header, finds the half-open line range
//! of the loop body using brace-depth counting (C, C++, JavaScript,
//! TypeScript) or indentation tracking (Python). No AST is built; this
//! is a purely lexical walk and it never fails. Malformed input
//! (unmatched braces, truncated files, headers past end-of-file)
//! degrades to the smallest sensible range, possibly empty.

use crate::language::{BlockStyle, Language};

/// Returns `(body_start, body_end)` for the loop whose header is at
/// `header` in `lines`. `body_end` is exclusive, and
/// `body_start <= body_end <= lines.len()` always holds.
pub fn extract_body(lines: &[&str], header: usize, language: Language) -> (usize, usize) {
    if header >= lines.len() {
        return (lines.len(), lines.len());
    }
    match language.block_style() {
        BlockStyle::Braces => extract_braced_body(lines, header),
        BlockStyle::Indentation => extract_indented_body(lines, header),
    }
}

fn brace_delta(line: &str) -> i32 {
    let opens = line.matches('{').count() as i32;
    let closes = line.matches('}').count() as i32;
    opens - closes
}

fn extract_braced_body(lines: &[&str], header: usize) -> (usize, usize) {
    // Walk forward until cumulative depth goes positive. When the header
    // has no inline `{`, this adopts the next line that opens a block,
    // which can mis-attribute an unrelated block on adversarial
    // formatting; that limitation is documented and kept.
    let mut depth = 0i32;
    let mut j = header;
    while j < lines.len() {
        depth += brace_delta(lines[j]);
        if depth > 0 {
            j += 1;
            break;
        }
        j += 1;
    }
    let body_start = j;

    // A brace-less loop never goes positive: empty body at end-of-scan.
    while j < lines.len() && depth > 0 {
        depth += brace_delta(lines[j]);
        if depth <= 0 {
            j += 1;
            break;
        }
        j += 1;
    }
    (body_start.min(j), j)
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn extract_indented_body(lines: &[&str], header: usize) -> (usize, usize) {
    // Without a block-opening `:` the header can only govern a single
    // statement; treat the next line as the whole body.
    if !lines[header].contains(':') {
        let start = header + 1;
        return (start.min(lines.len()), (start + 1).min(lines.len()));
    }

    let mut body_start = header + 1;
    while body_start < lines.len() && lines[body_start].trim().is_empty() {
        body_start += 1;
    }
    if body_start >= lines.len() {
        return (lines.len(), lines.len());
    }

    let body_indent = indent_of(lines[body_start]);
    let mut j = body_start;
    while j < lines.len() {
        let line = lines[j];
        if line.trim().is_empty() {
            j += 1;
            continue;
        }
        if indent_of(line) < body_indent {
            break;
        }
        j += 1;
    }
    (body_start, j)
}
