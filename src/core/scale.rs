//! Punjab University grading scale
//!
//! A fixed ten-band table mapping percentage marks to a letter grade and a
//! grade-point value on the 4.00 scale. The table is immutable for the
//! lifetime of the process; bands are contiguous and exhaustive, so every
//! numeric input maps to exactly one band.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grades on the Punjab University scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Letter {
    /// 85 and above
    A,
    /// 80-84
    #[serde(rename = "A-")]
    AMinus,
    /// 75-79
    #[serde(rename = "B+")]
    BPlus,
    /// 70-74
    B,
    /// 65-69
    #[serde(rename = "B-")]
    BMinus,
    /// 61-64
    #[serde(rename = "C+")]
    CPlus,
    /// 58-60
    C,
    /// 55-57
    #[serde(rename = "C-")]
    CMinus,
    /// 50-54
    D,
    /// below 50
    F,
}

impl Letter {
    /// All ten letters, in descending band order
    pub const ALL: [Self; 10] = [
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::D,
        Self::F,
    ];

    /// The display form of the letter (e.g., "A-", "B+")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            _ => Err(format!("Unknown letter grade: '{s}'")),
        }
    }
}

/// One band of the grading scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    /// Inclusive lower bound in percent; `None` for the unbounded bottom band
    pub lower_bound: Option<f64>,
    /// Letter grade for the band
    pub letter: Letter,
    /// Grade points for the band, in [0.00, 4.00]
    pub points: f64,
}

/// The fixed grading scale, ordered by strictly descending lower bound
pub static GRADE_SCALE: [GradeBand; 10] = [
    GradeBand {
        lower_bound: Some(85.0),
        letter: Letter::A,
        points: 4.00,
    },
    GradeBand {
        lower_bound: Some(80.0),
        letter: Letter::AMinus,
        points: 3.70,
    },
    GradeBand {
        lower_bound: Some(75.0),
        letter: Letter::BPlus,
        points: 3.30,
    },
    GradeBand {
        lower_bound: Some(70.0),
        letter: Letter::B,
        points: 3.00,
    },
    GradeBand {
        lower_bound: Some(65.0),
        letter: Letter::BMinus,
        points: 2.70,
    },
    GradeBand {
        lower_bound: Some(61.0),
        letter: Letter::CPlus,
        points: 2.30,
    },
    GradeBand {
        lower_bound: Some(58.0),
        letter: Letter::C,
        points: 2.00,
    },
    GradeBand {
        lower_bound: Some(55.0),
        letter: Letter::CMinus,
        points: 1.70,
    },
    GradeBand {
        lower_bound: Some(50.0),
        letter: Letter::D,
        points: 1.00,
    },
    GradeBand {
        lower_bound: None,
        letter: Letter::F,
        points: 0.00,
    },
];

/// Look up the band for a percentage mark.
///
/// Scans bands from the highest threshold downward and returns the first
/// band whose lower bound is at or below the mark. Total over the reals:
/// negative and NaN inputs are treated as 0 and resolve to F.
#[must_use]
pub fn lookup(percentage: f64) -> &'static GradeBand {
    let marks = if percentage.is_nan() { 0.0 } else { percentage };
    GRADE_SCALE
        .iter()
        .find(|band| band.lower_bound.is_none_or(|bound| marks >= bound))
        .unwrap_or(&GRADE_SCALE[GRADE_SCALE.len() - 1])
}

/// The scale entry for a letter grade.
#[must_use]
pub fn band(letter: Letter) -> &'static GradeBand {
    GRADE_SCALE
        .iter()
        .find(|entry| entry.letter == letter)
        .unwrap_or(&GRADE_SCALE[GRADE_SCALE.len() - 1])
}

/// The unique band carrying exactly these grade points, if any.
///
/// Used to resolve a letter from freshly computed points; well defined
/// because no two bands share a points value.
#[must_use]
pub fn band_for_points(points: f64) -> Option<&'static GradeBand> {
    GRADE_SCALE
        .iter()
        .find(|entry| (entry.points - points).abs() < f64::EPSILON)
}

/// A representative interior mark for a letter grade.
///
/// Not the band boundary and not a true inverse of [`lookup`]; used to
/// synthesize a display mark when the user picks a letter directly. Feeding
/// the result back through [`lookup`] reproduces the same letter for every
/// band.
#[must_use]
pub const fn reverse_lookup(letter: Letter) -> f64 {
    match letter {
        Letter::A => 90.0,
        Letter::AMinus => 82.0,
        Letter::BPlus => 77.0,
        Letter::B => 72.0,
        Letter::BMinus => 67.0,
        Letter::CPlus => 62.0,
        Letter::C => 59.0,
        Letter::CMinus => 56.0,
        Letter::D => 52.0,
        Letter::F => 0.0,
    }
}

/// Human-readable marks range for the band at `index` (e.g., "85 & Above",
/// "80-84", "Below 50"), as shown in the reference grading table.
#[must_use]
pub fn range_label(index: usize) -> String {
    let Some(entry) = GRADE_SCALE.get(index) else {
        return String::new();
    };

    entry.lower_bound.map_or_else(
        || {
            let floor = index
                .checked_sub(1)
                .and_then(|i| GRADE_SCALE.get(i))
                .and_then(|higher| higher.lower_bound)
                .unwrap_or(0.0);
            format!("Below {floor:.0}")
        },
        |bound| {
            if index == 0 {
                format!("{bound:.0} & Above")
            } else {
                let upper = GRADE_SCALE
                    .get(index - 1)
                    .and_then(|higher| higher.lower_bound)
                    .unwrap_or(100.0);
                format!("{bound:.0}-{:.0}", upper - 1.0)
            }
        },
    )
}
