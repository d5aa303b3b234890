//! Java-style name patterns for selecting packages and classes.
//!
//! `*` matches word characters within one name segment, `**` also crosses `.`
//! boundaries. Everything else matches literally. A pattern must match the
//! whole name.

use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One compiled name pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    pattern: String,
    regex: Regex,
}

impl NamePattern {
    pub fn compile(pattern: &str) -> Result<Self, ConfigError> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern is empty".to_string(),
            });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern contains whitespace".to_string(),
            });
        }

        let regex = Regex::new(&to_regex(trimmed)).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern: trimmed.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

// `**` must be consumed before `*`.
fn to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' {
            if chars.peek() == Some(&'*') {
                chars.next();
                out.push_str(r"[\w.]*");
            } else {
                out.push_str(r"\w*");
            }
        } else {
            out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4])));
        }
    }
    out.push('$');
    out
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for NamePattern {}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFilter {
    #[serde(default, rename = "include")]
    includes: Vec<String>,
    #[serde(default, rename = "exclude")]
    excludes: Vec<String>,
}

/// Include/exclude filter over names.
///
/// A name passes when it matches any include (or there are none) and matches
/// no exclude.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFilter", into = "RawFilter")]
pub struct NamePatternFilter {
    includes: Vec<NamePattern>,
    excludes: Vec<NamePattern>,
}

impl NamePatternFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add include patterns. Duplicates are ignored.
    pub fn include<I, S>(&mut self, patterns: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in compile_all(patterns)? {
            push_unique(&mut self.includes, pattern);
        }
        Ok(self)
    }

    /// Add exclude patterns. Duplicates are ignored.
    pub fn exclude<I, S>(&mut self, patterns: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in compile_all(patterns)? {
            push_unique(&mut self.excludes, pattern);
        }
        Ok(self)
    }

    /// Replace all include patterns.
    pub fn set_includes<I, S>(&mut self, patterns: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = compile_all(patterns)?;
        self.includes.clear();
        for pattern in compiled {
            push_unique(&mut self.includes, pattern);
        }
        Ok(self)
    }

    /// Replace all exclude patterns.
    pub fn set_excludes<I, S>(&mut self, patterns: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = compile_all(patterns)?;
        self.excludes.clear();
        for pattern in compiled {
            push_unique(&mut self.excludes, pattern);
        }
        Ok(self)
    }

    pub fn matches(&self, name: &str) -> bool {
        (self.includes.is_empty() || self.includes.iter().any(|p| p.matches(name)))
            && !self.excludes.iter().any(|p| p.matches(name))
    }

    /// True when the filter accepts every name.
    pub fn is_unrestricted(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.includes.iter().map(NamePattern::as_str)
    }

    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.excludes.iter().map(NamePattern::as_str)
    }
}

fn compile_all<I, S>(patterns: I) -> Result<Vec<NamePattern>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| NamePattern::compile(p.as_ref()))
        .collect()
}

fn push_unique(patterns: &mut Vec<NamePattern>, pattern: NamePattern) {
    if !patterns.contains(&pattern) {
        patterns.push(pattern);
    }
}

impl TryFrom<RawFilter> for NamePatternFilter {
    type Error = ConfigError;

    fn try_from(raw: RawFilter) -> Result<Self, Self::Error> {
        let mut filter = NamePatternFilter::new();
        filter.include(raw.includes)?.exclude(raw.excludes)?;
        Ok(filter)
    }
}

impl From<NamePatternFilter> for RawFilter {
    fn from(filter: NamePatternFilter) -> Self {
        RawFilter {
            includes: filter.includes().map(str::to_string).collect(),
            excludes: filter.excludes().map(str::to_string).collect(),
        }
    }
}
