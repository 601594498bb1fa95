//! Language tags and block-delimiting families.
//!
//! The engine accepts language tags as plain strings at its boundary
//! (the closed set `cpp`, `c`, `python`, `javascript`, `typescript`) and
//! parses them into a `Language` enum internally so detector branching
//! stays exhaustive. Unknown tags are not an error: detectors return an
//! empty finding list for them.

use serde::{Deserialize, Serialize};

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    C,
    Python,
    JavaScript,
    TypeScript,
}

/// How a language delimits blocks. Drives the block extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Braces,
    Indentation,
}

impl Language {
    /// Parse a language tag. Returns `None` for anything outside the
    /// closed set; callers treat that as "no findings", not an error.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "cpp" => Some(Language::Cpp),
            "c" => Some(Language::C),
            "python" => Some(Language::Python),
            "javascript" => Some(Language::JavaScript),
            "typescript" => Some(Language::TypeScript),
            _ => None,
        }
    }

    /// Infer a language from a file extension (without the dot).
    ///
    /// `h` maps to C and `hpp`/`hh` to C++; both families share the
    /// same matchers so the distinction only matters for C++-only
    /// patterns like `new`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some(Language::Cpp),
            "c" | "h" => Some(Language::C),
            "py" => Some(Language::Python),
            "js" | "jsx" | "mjs" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// Block-delimiting family for the block extractor.
    pub fn block_style(&self) -> BlockStyle {
        match self {
            Language::Python => BlockStyle::Indentation,
            _ => BlockStyle::Braces,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Language::parse("cpp"), Some(Language::Cpp));
        assert_eq!(Language::parse("c"), Some(Language::C));
        assert_eq!(Language::parse("python"), Some(Language::Python));
        assert_eq!(Language::parse("javascript"), Some(Language::JavaScript));
        assert_eq!(Language::parse("typescript"), Some(Language::TypeScript));
    }

    #[test]
    fn test_parse_unknown_tag() {
        assert_eq!(Language::parse("rust"), None);
        assert_eq!(Language::parse(""), None);
        assert_eq!(Language::parse("CPP"), None);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("cc"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("h"), Some(Language::C));
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("tsx"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("go"), None);
    }

    #[test]
    fn test_block_style() {
        assert_eq!(Language::Python.block_style(), BlockStyle::Indentation);
        assert_eq!(Language::Cpp.block_style(), BlockStyle::Braces);
        assert_eq!(Language::JavaScript.block_style(), BlockStyle::Braces);
    }
}
