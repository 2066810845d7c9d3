//! Five-phase cycles and zodiac classification
//!
//! Used only while the catalog is generated; request handling never consults
//! these rules directly.

/// Chronology element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// How one element stands toward another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseRelation {
    Same,
    /// The first element feeds the second
    Generates,
    /// The second element feeds the first
    GeneratedBy,
    /// The first element restrains the second
    Controls,
    /// The second element restrains the first
    ControlledBy,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    /// Next element in the generating cycle
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// Element restrained in the controlling cycle
    pub fn controls(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    pub fn relation_to(self, other: Element) -> PhaseRelation {
        if self == other {
            PhaseRelation::Same
        } else if self.generates() == other {
            PhaseRelation::Generates
        } else if other.generates() == self {
            PhaseRelation::GeneratedBy
        } else if self.controls() == other {
            PhaseRelation::Controls
        } else {
            PhaseRelation::ControlledBy
        }
    }
}

/// Tropical element of a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WesternElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl WesternElement {
    pub const ALL: [WesternElement; 4] = [
        WesternElement::Fire,
        WesternElement::Earth,
        WesternElement::Air,
        WesternElement::Water,
    ];

    pub fn token(self) -> &'static str {
        match self {
            WesternElement::Fire => "fire",
            WesternElement::Earth => "earth",
            WesternElement::Air => "air",
            WesternElement::Water => "water",
        }
    }

    /// Chronology element standing in for this tropical element
    pub fn counterpart(self) -> Element {
        match self {
            WesternElement::Fire => Element::Fire,
            WesternElement::Earth => Element::Earth,
            WesternElement::Air => Element::Wood,
            WesternElement::Water => Element::Water,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Zodiac sign token with its element and modality, in zodiac order
pub const SIGNS: [(&str, WesternElement, Modality); 12] = [
    ("aries", WesternElement::Fire, Modality::Cardinal),
    ("taurus", WesternElement::Earth, Modality::Fixed),
    ("gemini", WesternElement::Air, Modality::Mutable),
    ("cancer", WesternElement::Water, Modality::Cardinal),
    ("leo", WesternElement::Fire, Modality::Fixed),
    ("virgo", WesternElement::Earth, Modality::Mutable),
    ("libra", WesternElement::Air, Modality::Cardinal),
    ("scorpio", WesternElement::Water, Modality::Fixed),
    ("sagittarius", WesternElement::Fire, Modality::Mutable),
    ("capricorn", WesternElement::Earth, Modality::Cardinal),
    ("aquarius", WesternElement::Air, Modality::Fixed),
    ("pisces", WesternElement::Water, Modality::Mutable),
];
