//! Display ordering for the expense list

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the expense list is ordered for display
///
/// Sorting never touches the stored order; it only shapes a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Insertion order, newest first
    #[default]
    Default,
    /// Cheapest first
    Asc,
    /// Most expensive first
    Desc,
}

impl SortMode {
    /// All modes in selector order
    pub const ALL: [SortMode; 3] = [SortMode::Default, SortMode::Asc, SortMode::Desc];

    /// Label shown in the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Sort by price",
            Self::Asc => "Low to High",
            Self::Desc => "High to Low",
        }
    }

    /// The next mode in selector order, wrapping around
    pub fn cycle(&self) -> Self {
        match self {
            Self::Default => Self::Asc,
            Self::Asc => Self::Desc,
            Self::Desc => Self::Default,
        }
    }

    /// Keyword used in scripts and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort keyword is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortModeParseError(pub String);

impl fmt::Display for SortModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort mode '{}' (expected default, asc or desc)",
            self.0
        )
    }
}

impl std::error::Error for SortModeParseError {}

impl FromStr for SortMode {
    type Err = SortModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "asc" | "low-high" => Ok(Self::Asc),
            "desc" | "high-low" => Ok(Self::Desc),
            other => Err(SortModeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("asc".parse::<SortMode>().unwrap(), SortMode::Asc);
        assert_eq!(" DESC ".parse::<SortMode>().unwrap(), SortMode::Desc);
        assert_eq!("default".parse::<SortMode>().unwrap(), SortMode::Default);
        assert!("sideways".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_cycle_visits_every_mode() {
        let mut mode = SortMode::default();
        for expected in SortMode::ALL.iter().cycle().skip(1).take(3) {
            mode = mode.cycle();
            assert_eq!(mode, *expected);
        }
        assert_eq!(mode, SortMode::Default);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&SortMode::Asc).unwrap(), "\"asc\"");
        let mode: SortMode = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(mode, SortMode::Desc);
    }
}
