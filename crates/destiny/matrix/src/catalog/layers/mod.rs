//! Generators for the ten standard layers

pub(super) mod cycle_transit;
pub(super) mod element_body;
pub(super) mod element_core;
pub(super) mod favorable_point;
pub(super) mod marker_planet;
pub(super) mod pattern_house;
pub(super) mod pillar_sign;
pub(super) mod relation_aspect;
pub(super) mod role_planet;
pub(super) mod stage_house;

use crate::normalize;
use destiny_types::{Locale, TraitCategory};

/// Life area of each house, 1 through 12, as (ko, en)
pub(super) const HOUSE_DOMAINS: [(&str, &str); 12] = [
    ("자아", "self"),
    ("재물", "resources"),
    ("학습", "learning"),
    ("가정", "home"),
    ("창조", "creativity"),
    ("일상 업무", "daily work"),
    ("관계", "partnership"),
    ("공유와 변화", "shared depths"),
    ("탐구", "horizons"),
    ("직업", "career"),
    ("공동체", "community"),
    ("내면", "seclusion"),
];

/// Life area of each planet in vocabulary order, as (ko, en)
pub(super) const PLANET_DOMAINS: [(&str, &str); 10] = [
    ("자아", "identity"),
    ("감정", "emotions"),
    ("소통", "communication"),
    ("애정", "love"),
    ("행동", "action"),
    ("성장", "growth"),
    ("인내", "discipline"),
    ("변화", "change"),
    ("이상", "dreams"),
    ("변혁", "transformation"),
];

/// Canonical tokens of a vocabulary, in vocabulary order
pub(super) fn tokens(category: TraitCategory) -> impl Iterator<Item = &'static str> {
    normalize::terms(category).iter().map(|term| term.canonical)
}

/// (ko, en) labels of a canonical token, falling back to the token itself
pub(super) fn labels(category: TraitCategory, token: &str) -> (String, String) {
    let ko = normalize::label(category, token, Locale::Ko).unwrap_or(token);
    let en = normalize::label(category, token, Locale::En).unwrap_or(token);
    (ko.to_string(), en.to_string())
}

/// Canonical token of house `number` (1-based)
pub(super) fn house_token(number: usize) -> &'static str {
    normalize::terms(TraitCategory::House)
        .get(number.saturating_sub(1))
        .map(|term| term.canonical)
        .unwrap_or("")
}

pub(super) fn is_angular(house: usize) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

pub(super) fn is_cadent(house: usize) -> bool {
    matches!(house, 3 | 6 | 9 | 12)
}

/// Clamp a derived score into the valid range
pub(super) fn clamp_score(raw: i32) -> u8 {
    raw.clamp(1, 10) as u8
}
