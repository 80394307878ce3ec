//! Result types for password strength evaluation.

use std::fmt;

/// The five independent checks run against a password.
///
/// Flags are recomputed from scratch on every evaluation; the score is always
/// derived by counting them, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecks {
    /// At least 8 characters.
    pub length: bool,
    /// At least one ASCII uppercase letter.
    pub uppercase: bool,
    /// At least one ASCII lowercase letter.
    pub lowercase: bool,
    /// At least one ASCII digit.
    pub number: bool,
    /// At least one character from the special set.
    pub special: bool,
}

impl PasswordChecks {
    /// Number of checks that passed, in `0..=5`.
    pub fn score(&self) -> u8 {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count() as u8
    }

    /// Each requirement paired with whether it was met, in display order.
    pub fn requirements(&self) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", self.length),
            ("Contains uppercase letter", self.uppercase),
            ("Contains lowercase letter", self.lowercase),
            ("Contains number", self.number),
            ("Contains special character", self.special),
        ]
    }
}

/// Outcome of a password strength evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub checks: PasswordChecks,
}

impl PasswordEvaluation {
    /// Number of checks that passed, in `0..=5`.
    pub fn score(&self) -> u8 {
        self.checks.score()
    }

    /// Strength label for the current score.
    pub fn strength(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score())
    }

    /// Descriptions of the requirements the password did not meet.
    pub fn missing(&self) -> Vec<&'static str> {
        self.checks
            .requirements()
            .into_iter()
            .filter(|&(_, passed)| !passed)
            .map(|(label, _)| label)
            .collect()
    }
}

/// Discrete strength band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Maps a score to its band: 0-2 Weak, 3 Fair, 4 Good, 5 Strong.
    ///
    /// Scores above 5 cannot be produced by the evaluator and saturate
    /// to `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3 => StrengthLabel::Fair,
            4 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_true_flags() {
        let checks = PasswordChecks {
            length: true,
            uppercase: false,
            lowercase: true,
            number: false,
            special: true,
        };
        assert_eq!(checks.score(), 3);
        assert_eq!(PasswordChecks::default().score(), 0);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(1), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Fair);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Good);
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::Strong);
    }

    #[test]
    fn test_label_monotonic_in_score() {
        let labels: Vec<_> = (0..=5).map(StrengthLabel::from_score).collect();
        assert!(labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
        assert_eq!(StrengthLabel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_missing_lists_unmet_requirements() {
        let checks = PasswordChecks {
            length: true,
            uppercase: true,
            lowercase: true,
            number: false,
            special: false,
        };
        let evaluation = PasswordEvaluation { checks };
        assert_eq!(
            evaluation.missing(),
            vec!["Contains number", "Contains special character"]
        );
    }

    #[test]
    fn test_missing_empty_when_all_met() {
        let checks = PasswordChecks {
            length: true,
            uppercase: true,
            lowercase: true,
            number: true,
            special: true,
        };
        let evaluation = PasswordEvaluation { checks };
        assert!(evaluation.missing().is_empty());
        assert_eq!(evaluation.strength(), StrengthLabel::Strong);
    }
}
