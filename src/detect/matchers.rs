//! Per-language lexical matchers.
//!
//! Every pattern is a process-wide regex compiled once and reused; the
//! tables are read-only after initialization so concurrent use needs no
//! synchronization. Matching is strictly line-local: no regex carries
//! state across lines.
//!
//! These are classifiers, not correctness checks. The swap matcher, for
//! example, flags `temp =` assignments and element-to-element array
//! stores because they *look* like a sort's inner exchange, which is
//! exactly the level of certainty a heuristic linter trades in.

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::language::Language;

lazy_static! {
    /// C-style `for (`/`while (` headers plus Python's `for x in`.
    static ref LOOP_HEADER: Regex =
        Regex::new(r"\b(for|while)\s*[\(\{]|\bfor\s+\w+\s+in\s").unwrap();

    /// `while (true)` in its C/Python/JS spellings. A tight read-loop
    /// with a real condition is not infinite for polling purposes.
    static ref INFINITE_WHILE: Regex =
        Regex::new(r"\bwhile\s*\(?\s*(true|True|TRUE|1)\s*\)?").unwrap();

    /// C-style `for (;;)`.
    static ref FOREVER_FOR: Regex = Regex::new(r"\bfor\s*\(\s*;\s*;\s*\)").unwrap();

    /// Heap allocation sites (C/C++ only).
    static ref ALLOCATION: Regex =
        Regex::new(r"\b(new\s+\w+|malloc\s*\(|calloc\s*\(|realloc\s*\()").unwrap();

    /// Allocation sites counted by the leak balance. `realloc` resizes
    /// an existing block, so it is excluded here but counted as churn
    /// by the in-loop pass above.
    static ref LEAK_ALLOCATION: Regex =
        Regex::new(r"\b(new\s+\w+|malloc\s*\(|calloc\s*\()").unwrap();

    /// Deallocation sites (C/C++ only).
    static ref DEALLOCATION: Regex =
        Regex::new(r"\b(delete\s*\[?\]?\s*\w+|free\s*\()").unwrap();

    /// Element-exchange idioms that mark a hand-rolled sort.
    static ref SWAP_IDIOM: Regex = Regex::new(
        r"(?i)(std::swap|swap\s*\(|temp\s*=|tmp\s*=|\]\s*=\s*\w+\[.*\]\s*;)"
    )
    .unwrap();

    /// Collection-size references corroborating an O(n²) nest.
    static ref SIZE_REFERENCE: Regex =
        Regex::new(r"(\.size\(\)|\.length\(\)|\bn\b|\blen\b|\bsize\b)").unwrap();

    // Sleep/delay calls per language family.
    static ref SLEEP_CPP: Regex = Regex::new(
        r"\b(sleep\s*\(|usleep\s*\(|nanosleep\s*\(|Sleep\s*\(|std::this_thread::sleep_for)"
    )
    .unwrap();
    static ref SLEEP_C: Regex =
        Regex::new(r"\b(sleep\s*\(|usleep\s*\(|nanosleep\s*\(|Sleep\s*\()").unwrap();
    static ref SLEEP_PYTHON: Regex =
        Regex::new(r"\b(time\.sleep\s*\(|asyncio\.sleep\s*\(|sleep\s*\()").unwrap();
    static ref SLEEP_JS: Regex =
        Regex::new(r"\b(setTimeout\s*\(|setInterval\s*\(|await\s+.*sleep\s*\()").unwrap();

    // Network client call sites per language family.
    static ref NETWORK_CPP: Regex = Regex::new(
        r"\b(curl_easy_perform|send\s*\(|recv\s*\(|sendto\s*\(|recvfrom\s*\(|boost::beast|http::async_read|http::async_write|httplib::Client|cpr::(Get|Post|Put|Delete|Patch))"
    )
    .unwrap();
    static ref NETWORK_C: Regex = Regex::new(
        r"\b(curl_easy_perform|send\s*\(|recv\s*\(|sendto\s*\(|recvfrom\s*\()"
    )
    .unwrap();
    static ref NETWORK_PYTHON: Regex = Regex::new(
        r"\b(requests\.(get|post|put|delete|patch|head|options)\s*\(|httpx\.(get|post|put|delete|patch|head|options|request)\s*\(|urllib\.request\.urlopen\s*\(|aiohttp\.ClientSession|session\.(get|post|put|delete|patch)\s*\(|urlopen\s*\()"
    )
    .unwrap();
    static ref NETWORK_JS: Regex = Regex::new(
        r#"\b(fetch\s*\(|axios\.(get|post|put|delete|patch|request)\s*\(|XMLHttpRequest|\.open\s*\(\s*['"](GET|POST|PUT|DELETE)|http\.request\s*\(|https\.request\s*\()"#
    )
    .unwrap();
}

/// Network calls carrying a literal URL argument, for duplicate-call
/// grouping. The `regex` crate has no backreferences, so single- and
/// double-quoted literals are separate capture groups.
static URL_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:(?:requests|httpx|axios)\.(?:get|post|put|delete|patch)\s*\(|fetch\s*\(|curl_easy_setopt\s*\([^,]+,\s*CURLOPT_URL\s*,)\s*(?:"(https?://[^"]+)"|'(https?://[^']+)')"#,
    )
    .unwrap()
});

pub fn is_loop_header(line: &str) -> bool {
    LOOP_HEADER.is_match(line)
}

pub fn is_infinite_loop_header(line: &str) -> bool {
    INFINITE_WHILE.is_match(line) || FOREVER_FOR.is_match(line)
}

pub fn allocation() -> &'static Regex {
    &ALLOCATION
}

pub fn leak_allocation() -> &'static Regex {
    &LEAK_ALLOCATION
}

pub fn deallocation() -> &'static Regex {
    &DEALLOCATION
}

pub fn swap_idiom() -> &'static Regex {
    &SWAP_IDIOM
}

pub fn size_reference() -> &'static Regex {
    &SIZE_REFERENCE
}

pub fn sleep_call(language: Language) -> &'static Regex {
    match language {
        Language::Cpp => &SLEEP_CPP,
        Language::C => &SLEEP_C,
        Language::Python => &SLEEP_PYTHON,
        Language::JavaScript | Language::TypeScript => &SLEEP_JS,
    }
}

pub fn network_call(language: Language) -> &'static Regex {
    match language {
        Language::Cpp => &NETWORK_CPP,
        Language::C => &NETWORK_C,
        Language::Python => &NETWORK_PYTHON,
        Language::JavaScript | Language::TypeScript => &NETWORK_JS,
    }
}

/// Extract the literal URL argument of a network call, if the line is
/// one of the recognized library forms.
pub fn url_argument(line: &str) -> Option<&str> {
    URL_CALL
        .captures(line)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
}

/// Best-effort comment detection: the trimmed line starts with a line
/// comment or block-comment opener. Used by passes that count matches
/// and would otherwise inflate on commented-out code.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('#')
}
