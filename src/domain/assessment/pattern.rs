//! Pattern - the clinical classification label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The closed set of cycle patterns an assessment can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Regular,
    Irregular,
    Heavy,
    Pain,
    Developing,
}

impl Pattern {
    pub fn all() -> &'static [Pattern] {
        &[
            Pattern::Regular,
            Pattern::Irregular,
            Pattern::Heavy,
            Pattern::Pain,
            Pattern::Developing,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Regular => "regular",
            Pattern::Irregular => "irregular",
            Pattern::Heavy => "heavy",
            Pattern::Pain => "pain",
            Pattern::Developing => "developing",
        }
    }

    /// Heading shown on the results screen.
    pub fn display_name(&self) -> &'static str {
        match self {
            Pattern::Regular => "Regular Menstrual Cycles",
            Pattern::Irregular => "Irregular Menstrual Cycles",
            Pattern::Heavy => "Heavy or Prolonged Menstrual Flow",
            Pattern::Pain => "Menstrual Pain (Dysmenorrhea)",
            Pattern::Developing => "Developing Menstrual Pattern",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Pattern::all().iter().map(|p| p.as_str()).collect();
                ValidationError::not_in_set("pattern", s, &allowed)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_label() {
        for pattern in Pattern::all() {
            assert_eq!(pattern.as_str().parse::<Pattern>().unwrap(), *pattern);
        }
    }

    #[test]
    fn rejects_unknown_label() {
        assert!("chaotic".parse::<Pattern>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Pattern::Developing).unwrap(), "\"developing\"");
    }
}
