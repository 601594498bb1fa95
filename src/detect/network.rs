//! Detection of wasteful network idioms.
//!
//! Three independent passes sharing the per-language matchers:
//!
//! 1. Network-in-loop: any client call inside a loop body, flagged once
//!    per loop with the offending lines.
//! 2. Polling: an infinite loop (`while (true)`, `while True:`,
//!    `for (;;)`) whose body contains both a sleep and a network call.
//!    A tight read-loop with network I/O but no sleep is not polling.
//! 3. Duplicate calls: file-wide grouping of literal URL arguments; the
//!    same URL fetched at two or more distinct lines is flagged once
//!    per URL, in first-seen order. Different literals are never
//!    merged, even when semantically equivalent.

use std::collections::HashMap;

use crate::language::Language;

use super::block::extract_body;
use super::matchers;
use super::{Detector, Finding, PatternId, Severity};

/// Flags network calls in loops, busy-polling, and duplicate fetches
/// across C, C++, Python, JavaScript, and TypeScript.
pub struct NetworkDetector;

impl Detector for NetworkDetector {
    fn pattern_id(&self) -> PatternId {
        PatternId::NetworkWaste
    }

    fn detect(&self, code: &str, language: &str) -> Vec<Finding> {
        let Some(lang) = Language::parse(language) else {
            return Vec::new();
        };
        let lines: Vec<&str> = code.lines().collect();
        let mut findings = detect_network_in_loops(&lines, lang);
        findings.extend(detect_polling(&lines, lang));
        findings.extend(detect_duplicate_calls(&lines));
        findings
    }
}

fn detect_network_in_loops(lines: &[&str], language: Language) -> Vec<Finding> {
    let mut findings = Vec::new();
    let net_re = matchers::network_call(language);

    let mut i = 0;
    while i < lines.len() {
        if !matchers::is_loop_header(lines[i]) {
            i += 1;
            continue;
        }

        let (body_start, body_end) = extract_body(lines, i, language);
        let call_lines: Vec<usize> = (body_start..body_end)
            .filter(|&j| net_re.is_match(lines[j]))
            .map(|j| j + 1)
            .collect();

        if !call_lines.is_empty() {
            let listed = call_lines
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            findings.push(Finding {
                pattern_id: PatternId::NetworkWaste,
                name: "Network Call Inside Loop".to_string(),
                severity: Severity::High,
                line_start: i + 1,
                line_end: body_end.max(i + 1),
                description: format!(
                    "Network/HTTP call detected inside loop body at line(s) {}. \
                     Each iteration incurs network latency and energy overhead \
                     from NIC wake-ups and TCP handshakes.",
                    listed
                ),
                suggestion: "Batch requests into a single call where possible. Use \
                             bulk/batch API endpoints, or collect parameters and \
                             make one request after the loop. This reduces network \
                             round-trips and radio/NIC energy consumption."
                    .to_string(),
                estimated_energy_cost: 90.0,
                estimated_energy_saved: 65.0,
            });
        }

        i = body_end.max(i + 1);
    }

    findings
}

fn detect_polling(lines: &[&str], language: Language) -> Vec<Finding> {
    let mut findings = Vec::new();
    let net_re = matchers::network_call(language);
    let sleep_re = matchers::sleep_call(language);

    let mut i = 0;
    while i < lines.len() {
        if !matchers::is_infinite_loop_header(lines[i]) {
            i += 1;
            continue;
        }

        let (body_start, body_end) = extract_body(lines, i, language);
        let has_sleep = (body_start..body_end).any(|j| sleep_re.is_match(lines[j]));
        let has_net = (body_start..body_end).any(|j| net_re.is_match(lines[j]));

        if has_sleep && has_net {
            findings.push(Finding {
                pattern_id: PatternId::PollingPattern,
                name: "Polling Instead of Event-Driven".to_string(),
                severity: Severity::High,
                line_start: i + 1,
                line_end: body_end.max(i + 1),
                description: "Infinite loop with sleep + network call detected. This \
                              polling pattern keeps the CPU and NIC active even when \
                              no new data is available, wasting energy."
                    .to_string(),
                suggestion: "Replace polling with an event-driven approach: use \
                             WebSockets, server-sent events (SSE), OS-level \
                             select/epoll/kqueue, or message queues (MQTT, AMQP). \
                             This lets the CPU sleep until data arrives, reducing \
                             energy consumption by 60-90%."
                    .to_string(),
                estimated_energy_cost: 95.0,
                estimated_energy_saved: 70.0,
            });
        }

        i = body_end.max(i + 1);
    }

    findings
}

fn detect_duplicate_calls(lines: &[&str]) -> Vec<Finding> {
    let mut seen: HashMap<&str, Vec<usize>> = HashMap::new();
    // HashMap iteration order is unspecified; findings follow first-seen
    // URL order.
    let mut order: Vec<&str> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if matchers::is_comment_line(line) {
            continue;
        }
        if let Some(url) = matchers::url_argument(line) {
            let entry = seen.entry(url).or_default();
            if entry.is_empty() {
                order.push(url);
            }
            entry.push(i + 1);
        }
    }

    let mut findings = Vec::new();
    for url in order {
        let call_lines = &seen[url];
        if call_lines.len() < 2 {
            continue;
        }
        let listed = call_lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        findings.push(Finding {
            pattern_id: PatternId::DuplicateNetworkCall,
            name: "Duplicate Network Calls".to_string(),
            severity: Severity::Medium,
            line_start: call_lines[0],
            line_end: call_lines[call_lines.len() - 1],
            description: format!(
                "The same endpoint '{}' is called {} times at lines {}. Redundant \
                 network calls waste energy on repeated TCP connections and data \
                 transfer.",
                url,
                call_lines.len(),
                listed
            ),
            suggestion: "Cache the response and reuse it, or restructure to call \
                         the endpoint once. Consider using an HTTP cache layer or \
                         memoization for identical requests."
                .to_string(),
            estimated_energy_cost: 60.0,
            estimated_energy_saved: 40.0,
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Detector;

    fn detect(code: &str, language: &str) -> Vec<Finding> {
        NetworkDetector.detect(code, language)
    }

    fn of_kind(findings: &[Finding], id: PatternId) -> Vec<Finding> {
        findings
            .iter()
            .filter(|f| f.pattern_id == id)
            .cloned()
            .collect()
    }

    #[test]
    fn test_curl_in_for_loop_cpp() {
        let code = r#"
#include <curl/curl.h>
int main() {
    for (int i = 0; i < 100; i++) {
        curl_easy_perform(curl);
    }
    return 0;
}
"#;
        let findings = detect(code, "cpp");
        let in_loop = of_kind(&findings, PatternId::NetworkWaste);
        assert_eq!(in_loop.len(), 1);
        assert_eq!(in_loop[0].name, "Network Call Inside Loop");
        assert_eq!(in_loop[0].severity, Severity::High);
    }

    #[test]
    fn test_requests_in_for_loop_python() {
        let code = "\nimport requests\nfor url in urls:\n    response = requests.get(url)\n    data.append(response.json())\n";
        let findings = detect(code, "python");
        let in_loop = of_kind(&findings, PatternId::NetworkWaste);
        assert_eq!(in_loop.len(), 1);
        assert!(in_loop[0].description.contains("line(s) 4"));
    }

    #[test]
    fn test_fetch_in_loop_javascript() {
        let code = r#"
for (let i = 0; i < items.length; i++) {
    const res = fetch(items[i].url);
    results.push(res);
}
"#;
        let findings = detect(code, "javascript");
        assert_eq!(of_kind(&findings, PatternId::NetworkWaste).len(), 1);
    }

    #[test]
    fn test_network_outside_loop_is_clean() {
        let code = "\nimport requests\nresponse = requests.get(url)\nfor item in response.json():\n    process(item)\n";
        let findings = detect(code, "python");
        assert!(of_kind(&findings, PatternId::NetworkWaste).is_empty());
    }

    #[test]
    fn test_polling_loop_python() {
        let code = "\nimport requests, time\nwhile True:\n    response = requests.get(\"https://api.example.com/status\")\n    if response.json()[\"done\"]:\n        break\n    time.sleep(5)\n";
        let findings = detect(code, "python");
        let polling = of_kind(&findings, PatternId::PollingPattern);
        assert_eq!(polling.len(), 1);
        assert_eq!(polling[0].severity, Severity::High);
    }

    #[test]
    fn test_polling_loop_javascript() {
        let code = r#"
while (true) {
    const status = await fetch(endpoint);
    setTimeout(check, 5000);
}
"#;
        let findings = detect(code, "javascript");
        assert_eq!(of_kind(&findings, PatternId::PollingPattern).len(), 1);
    }

    #[test]
    fn test_read_loop_without_sleep_is_not_polling() {
        let code = r#"
while (1) {
    int got = recv(sockfd, buf, sizeof(buf), 0);
    if (got <= 0) break;
}
"#;
        let findings = detect(code, "c");
        assert!(of_kind(&findings, PatternId::PollingPattern).is_empty());
    }

    #[test]
    fn test_bounded_loop_with_sleep_is_not_polling() {
        let code = "\nfor attempt in range(3):\n    r = requests.get(url)\n    time.sleep(1)\n";
        let findings = detect(code, "python");
        assert!(of_kind(&findings, PatternId::PollingPattern).is_empty());
    }

    #[test]
    fn test_duplicate_urls() {
        let code = r#"
import requests
a = requests.get("https://api.example.com/users")
process(a)
b = requests.get("https://api.example.com/users")
"#;
        let findings = detect(code, "python");
        let dups = of_kind(&findings, PatternId::DuplicateNetworkCall);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].severity, Severity::Medium);
        assert!(dups[0].description.contains("2 times"));
        assert!(dups[0]
            .description
            .contains("https://api.example.com/users"));
        assert_eq!(dups[0].line_start, 3);
        assert_eq!(dups[0].line_end, 5);
    }

    #[test]
    fn test_different_urls_are_not_merged() {
        let code = r#"
a = requests.get("https://api.example.com/users")
b = requests.get("https://api.example.com/orders")
"#;
        let findings = detect(code, "python");
        assert!(of_kind(&findings, PatternId::DuplicateNetworkCall).is_empty());
    }

    #[test]
    fn test_commented_duplicate_is_not_counted() {
        let code = r#"
a = requests.get("https://api.example.com/users")
# b = requests.get("https://api.example.com/users")
"#;
        let findings = detect(code, "python");
        assert!(of_kind(&findings, PatternId::DuplicateNetworkCall).is_empty());
    }

    #[test]
    fn test_duplicates_reported_in_first_seen_order() {
        let code = r#"
fetch("https://api.example.com/b");
fetch("https://api.example.com/a");
fetch("https://api.example.com/b");
fetch("https://api.example.com/a");
"#;
        let findings = detect(code, "javascript");
        let dups = of_kind(&findings, PatternId::DuplicateNetworkCall);
        assert_eq!(dups.len(), 2);
        assert!(dups[0].description.contains("/b'"));
        assert!(dups[1].description.contains("/a'"));
    }

    #[test]
    fn test_unsupported_language_is_empty() {
        let code = "while (true) {\n    curl_easy_perform(curl);\n    sleep(5);\n}\n";
        assert!(detect(code, "rust").is_empty());
        assert!(detect(code, "go").is_empty());
    }
}
