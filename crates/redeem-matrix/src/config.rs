use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Matrix norms understood by [`Matrix::norm`](crate::Matrix::norm).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NormKind {
    /// Maximum absolute column sum.
    #[default]
    One,
    /// Maximum absolute row sum.
    Infinity,
    /// Square root of the sum of squared entries.
    Frobenius,
}

impl FromStr for NormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "one" | "l1" => Ok(NormKind::One),
            "inf" | "infinity" | "max" => Ok(NormKind::Infinity),
            "fro" | "frobenius" => Ok(NormKind::Frobenius),
            _ => Err(format!(
                "Unknown norm: {}. Expected one of `1`, `inf` or `fro`",
                s
            )),
        }
    }
}

/// Formatting used by the diagnostic dump.
///
/// The default reproduces the classic `%lf\t` layout: six decimals, every
/// value followed by a tab, one row per line.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub precision: usize,
    pub separator: String,
    /// Emit the separator after the last value of a row as well.
    pub trailing_separator: bool,
}

impl PrintOptions {
    pub fn new(precision: usize, separator: &str, trailing_separator: bool) -> Self {
        Self {
            precision,
            separator: separator.to_string(),
            trailing_separator,
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 6,
            separator: "\t".to_string(),
            trailing_separator: true,
        }
    }
}
