use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::GradeThresholds;

/// Letter grade of a composite governance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Step function over the default thresholds: `>=90 A, >=80 B, >=70 C,
    /// >=60 D`, else F.
    pub fn from_score(score: f64) -> Self {
        GradeThresholds::default().grade(score)
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl GradeThresholds {
    pub fn grade(&self, score: f64) -> Grade {
        if score >= self.a {
            Grade::A
        } else if score >= self.b {
            Grade::B
        } else if score >= self.c {
            Grade::C
        } else if score >= self.d {
            Grade::D
        } else {
            Grade::F
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.0), Grade::B);
        assert_eq!(Grade::from_score(80.0), Grade::B);
        assert_eq!(Grade::from_score(79.0), Grade::C);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(59.0), Grade::F);
        assert_eq!(Grade::from_score(0.0), Grade::F);
        assert_eq!(Grade::from_score(100.0), Grade::A);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = GradeThresholds {
            a: 85.0,
            b: 75.0,
            c: 65.0,
            d: 55.0,
        };
        assert_eq!(thresholds.grade(86.0), Grade::A);
        assert_eq!(thresholds.grade(56.0), Grade::D);
    }

    #[test]
    fn test_display() {
        assert_eq!(Grade::B.to_string(), "B");
        assert_eq!(serde_json::to_string(&Grade::F).unwrap(), "\"F\"");
    }
}
