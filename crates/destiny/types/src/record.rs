//! Interaction records, scores and polarity bands
//!
//! A record never stores its polarity. Polarity is always re-derived from the
//! score through the fixed band table in [`Polarity::for_score`].

use crate::locale::{Locale, LocalizedText};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score of a single correlation cell, always within `1..=10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Lowest valid score
    pub const MIN: u8 = 1;

    /// Highest valid score
    pub const MAX: u8 = 10;

    /// Scores at or above this feed the strength pool
    pub const STRENGTH_FLOOR: u8 = 7;

    /// Scores at or below this feed the caution pool
    pub const CAUTION_CEILING: u8 = 4;

    /// Create a score, rejecting values outside `1..=10`
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn polarity(self) -> Polarity {
        Polarity::for_score(self)
    }

    pub fn is_strength(self) -> bool {
        self.0 >= Self::STRENGTH_FLOOR
    }

    pub fn is_caution(self) -> bool {
        self.0 <= Self::CAUTION_CEILING
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Favorability band of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// 9-10
    Extreme,

    /// 7-8
    Amplify,

    /// 5-6
    Balance,

    /// 3-4
    Clash,

    /// 1-2
    Conflict,
}

impl Polarity {
    /// Bands from most to least favorable
    pub const ALL: [Polarity; 5] = [
        Polarity::Extreme,
        Polarity::Amplify,
        Polarity::Balance,
        Polarity::Clash,
        Polarity::Conflict,
    ];

    /// Derive the band for a score
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            9..=10 => Polarity::Extreme,
            7..=8 => Polarity::Amplify,
            5..=6 => Polarity::Balance,
            3..=4 => Polarity::Clash,
            _ => Polarity::Conflict,
        }
    }

    /// Inclusive score range covered by the band
    pub fn score_range(self) -> (u8, u8) {
        match self {
            Polarity::Extreme => (9, 10),
            Polarity::Amplify => (7, 8),
            Polarity::Balance => (5, 6),
            Polarity::Clash => (3, 4),
            Polarity::Conflict => (1, 2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Extreme => "extreme",
            Polarity::Amplify => "amplify",
            Polarity::Balance => "balance",
            Polarity::Clash => "clash",
            Polarity::Conflict => "conflict",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Polarity::Extreme, Locale::Ko) => "극대",
            (Polarity::Amplify, Locale::Ko) => "증폭",
            (Polarity::Balance, Locale::Ko) => "균형",
            (Polarity::Clash, Locale::Ko) => "충돌",
            (Polarity::Conflict, Locale::Ko) => "갈등",
            (Polarity::Extreme, Locale::En) => "Extreme",
            (Polarity::Amplify, Locale::En) => "Amplify",
            (Polarity::Balance, Locale::En) => "Balance",
            (Polarity::Clash, Locale::En) => "Clash",
            (Polarity::Conflict, Locale::En) => "Conflict",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of a single catalog cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    pub keyword: LocalizedText,
    pub score: Score,
}

impl InteractionRecord {
    pub fn new(keyword: LocalizedText, score: Score) -> Self {
        Self { keyword, score }
    }

    pub fn polarity(&self) -> Polarity {
        self.score.polarity()
    }
}
