//! Execution settings.

use std::str::FromStr;

/// What an `Input` instruction stores when the input stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofBehavior {
    /// Store 0.
    #[default]
    Zero,
    /// Leave the cell as it was.
    Unchanged,
    /// Store 255 (C's `EOF` truncated to a byte).
    AllOnes,
}

impl FromStr for EofBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" | "0" => Ok(EofBehavior::Zero),
            "unchanged" => Ok(EofBehavior::Unchanged),
            "255" | "-1" | "all-ones" => Ok(EofBehavior::AllOnes),
            other => Err(format!(
                "Unknown EOF behavior '{}' (expected zero, unchanged or 255)",
                other
            )),
        }
    }
}

/// VM configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VmConfig {
    pub eof: EofBehavior,
    /// Abort with `StepLimitExceeded` after this many instructions. `None` runs unbounded.
    pub max_steps: Option<u64>,
}

impl VmConfig {
    pub fn with_eof(mut self, eof: EofBehavior) -> Self {
        self.eof = eof;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VmConfig::default();
        assert_eq!(config.eof, EofBehavior::Zero);
        assert_eq!(config.max_steps, None);
    }

    #[test]
    fn test_parse_eof_behavior() {
        assert_eq!("zero".parse::<EofBehavior>(), Ok(EofBehavior::Zero));
        assert_eq!("unchanged".parse::<EofBehavior>(), Ok(EofBehavior::Unchanged));
        assert_eq!("255".parse::<EofBehavior>(), Ok(EofBehavior::AllOnes));
        assert!("sometimes".parse::<EofBehavior>().is_err());
    }

    #[test]
    fn test_builders() {
        let config = VmConfig::default()
            .with_eof(EofBehavior::Unchanged)
            .with_max_steps(10);
        assert_eq!(config.eof, EofBehavior::Unchanged);
        assert_eq!(config.max_steps, Some(10));
    }
}
