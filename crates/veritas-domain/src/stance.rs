//! Stance module - how a reference claim relates to a task claim

use std::fmt;

/// Categorical judgment of a reference claim against a task claim
///
/// The set is closed. Unrecognised labels are rejected at parse time rather
/// than carried through the scoring math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stance {
    /// The reference claim backs the task claim
    Support,

    /// The reference claim contradicts the task claim
    Refute,

    /// The reference claim qualifies the task claim without settling it
    Nuance,

    /// The reference claim is related but says too little to count
    Insufficient,
}

impl Stance {
    /// All stances, in declaration order
    pub const ALL: [Stance; 4] = [
        Stance::Support,
        Stance::Refute,
        Stance::Nuance,
        Stance::Insufficient,
    ];

    /// Get the stance label as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Support => "support",
            Stance::Refute => "refute",
            Stance::Nuance => "nuance",
            Stance::Insufficient => "insufficient",
        }
    }

    /// Parse a stance label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "support" => Some(Stance::Support),
            "refute" => Some(Stance::Refute),
            "nuance" => Some(Stance::Nuance),
            "insufficient" => Some(Stance::Insufficient),
            _ => None,
        }
    }

    /// Whether this stance carries directional weight (support or refute)
    pub fn is_directional(&self) -> bool {
        matches!(self, Stance::Support | Stance::Refute)
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid stance: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        for stance in Stance::ALL {
            assert_eq!(Stance::parse(stance.as_str()), Some(stance));
        }
        assert_eq!(Stance::parse(" Refute "), Some(Stance::Refute));
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert_eq!(Stance::parse("maybe"), None);
        assert!("contradicts".parse::<Stance>().is_err());
    }

    #[test]
    fn test_directional() {
        assert!(Stance::Support.is_directional());
        assert!(Stance::Refute.is_directional());
        assert!(!Stance::Nuance.is_directional());
        assert!(!Stance::Insufficient.is_directional());
    }
}
