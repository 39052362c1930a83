//! Indexed directory name patterns
//!
//! Expands names like `fold_{:02}` into `fold_01`, `fold_02`, ...
//! Accepts the placeholder spellings `{}`, `{:N}`, `{:0N}` and `{:0=N}`.
//!
//! # Examples
//!
//! ```
//! use classdir::util::name_pattern::NamePattern;
//!
//! let pattern = NamePattern::parse("fold_{:02}").unwrap();
//! assert_eq!(pattern.format(1), "fold_01");
//! assert_eq!(pattern.format(12), "fold_12");
//!
//! let pattern = NamePattern::parse("split{}").unwrap();
//! assert_eq!(pattern.format(3), "split3");
//! ```

use crate::error::{LayoutError, LayoutResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Regex for a single index placeholder
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(?::(?P<zero>0=?)?(?P<width>\d+))?\}").expect("Invalid regex pattern")
});

/// A directory name with one index placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    raw: String,
    prefix: String,
    suffix: String,
    /// Minimum width of the index (0 means no padding)
    width: usize,
    /// Pad with zeros instead of spaces
    zero_pad: bool,
}

impl NamePattern {
    /// Parses a pattern. Exactly one placeholder is required.
    pub fn parse(raw: &str) -> LayoutResult<Self> {
        let mut matches = PLACEHOLDER.captures_iter(raw);
        let captures = matches.next().ok_or_else(|| {
            LayoutError::invalid(format!("name pattern {:?} has no index placeholder", raw))
        })?;
        if matches.next().is_some() {
            return Err(LayoutError::invalid(format!(
                "name pattern {:?} has more than one index placeholder",
                raw
            )));
        }

        let Some(whole) = captures.get(0) else {
            return Err(LayoutError::invalid(format!("malformed name pattern {:?}", raw)));
        };
        let width = match captures.name("width") {
            Some(w) => w.as_str().parse().map_err(|_| {
                LayoutError::invalid(format!("name pattern {:?} has an invalid width", raw))
            })?,
            None => 0,
        };

        Ok(Self {
            raw: raw.to_string(),
            prefix: raw[..whole.start()].to_string(),
            suffix: raw[whole.end()..].to_string(),
            width,
            zero_pad: captures.name("zero").is_some(),
        })
    }

    /// `prefix` followed by a zero-padded index, e.g. `fold_{:02}`
    pub fn zero_padded(prefix: &str, width: usize) -> Self {
        Self {
            raw: format!("{}{{:0{}}}", prefix, width),
            prefix: prefix.to_string(),
            suffix: String::new(),
            width,
            zero_pad: true,
        }
    }

    /// Expands the pattern for `index`
    pub fn format(&self, index: usize) -> String {
        let number = if self.zero_pad {
            format!("{:0>width$}", index, width = self.width)
        } else {
            format!("{:>width$}", index, width = self.width)
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for NamePattern {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for NamePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for NamePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padded() {
        let pattern = NamePattern::parse("fold_{:02}").unwrap();
        assert_eq!(pattern.format(1), "fold_01");
        assert_eq!(pattern.format(10), "fold_10");
        assert_eq!(pattern.format(123), "fold_123");
    }

    #[test]
    fn test_explicit_fill_alignment() {
        let pattern = NamePattern::parse("train_{:0=3}").unwrap();
        assert_eq!(pattern.format(7), "train_007");
    }

    #[test]
    fn test_plain_placeholder() {
        let pattern = NamePattern::parse("validation{}").unwrap();
        assert_eq!(pattern.format(4), "validation4");
    }

    #[test]
    fn test_space_padded() {
        let pattern = NamePattern::parse("[{:3}]").unwrap();
        assert_eq!(pattern.format(5), "[  5]");
    }

    #[test]
    fn test_suffix_is_kept() {
        let pattern = NamePattern::parse("{:02}_fold").unwrap();
        assert_eq!(pattern.format(2), "02_fold");
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let err = NamePattern::parse("fold").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_two_placeholders_rejected() {
        assert!(NamePattern::parse("fold_{}_{}").is_err());
    }

    #[test]
    fn test_zero_padded_matches_parsed() {
        assert_eq!(
            NamePattern::zero_padded("fold_", 2),
            NamePattern::parse("fold_{:02}").unwrap()
        );
    }

    #[test]
    fn test_display_and_from_str() {
        let pattern: NamePattern = "fold_{:02}".parse().unwrap();
        assert_eq!(pattern.to_string(), "fold_{:02}");
        assert_eq!(pattern.as_str(), "fold_{:02}");
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let pattern = NamePattern::parse("fold_{:02}").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"fold_{:02}\"");
        assert!(serde_json::from_str::<NamePattern>("\"nope\"").is_err());
    }
}
