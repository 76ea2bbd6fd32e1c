//! Zodiac reference data.
//!
//! # Responsibility
//! - Define the twelve signs in their fixed wheel order.
//! - Attach element, modality, ruling planet and glyph to every sign.
//!
//! # Invariants
//! - `Sign::ALL[i].index() == i` for every position on the wheel.
//! - The profile table is static and never mutated.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of signs on the zodiac wheel.
pub const SIGN_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Traditional/modern ruling bodies used by the zodiac table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Static attributes of one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignProfile {
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub ruler: Planet,
}

const fn profile(
    name: &'static str,
    symbol: &'static str,
    element: Element,
    modality: Modality,
    ruler: Planet,
) -> SignProfile {
    SignProfile {
        name,
        symbol,
        element,
        modality,
        ruler,
    }
}

static SIGN_PROFILES: [SignProfile; SIGN_COUNT] = [
    profile("Aries", "♈", Element::Fire, Modality::Cardinal, Planet::Mars),
    profile("Taurus", "♉", Element::Earth, Modality::Fixed, Planet::Venus),
    profile("Gemini", "♊", Element::Air, Modality::Mutable, Planet::Mercury),
    profile("Cancer", "♋", Element::Water, Modality::Cardinal, Planet::Moon),
    profile("Leo", "♌", Element::Fire, Modality::Fixed, Planet::Sun),
    profile("Virgo", "♍", Element::Earth, Modality::Mutable, Planet::Mercury),
    profile("Libra", "♎", Element::Air, Modality::Cardinal, Planet::Venus),
    profile("Scorpio", "♏", Element::Water, Modality::Fixed, Planet::Pluto),
    profile("Sagittarius", "♐", Element::Fire, Modality::Mutable, Planet::Jupiter),
    profile("Capricorn", "♑", Element::Earth, Modality::Cardinal, Planet::Saturn),
    profile("Aquarius", "♒", Element::Air, Modality::Fixed, Planet::Uranus),
    profile("Pisces", "♓", Element::Water, Modality::Mutable, Planet::Neptune),
];

impl Sign {
    /// All signs in wheel order, starting at Aries.
    pub const ALL: [Sign; SIGN_COUNT] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Zero-based position on the wheel.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn profile(self) -> &'static SignProfile {
        &SIGN_PROFILES[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    pub fn symbol(self) -> &'static str {
        self.profile().symbol
    }

    pub fn element(self) -> Element {
        self.profile().element
    }

    pub fn modality(self) -> Modality {
        self.profile().modality
    }

    pub fn ruler(self) -> Planet {
        self.profile().ruler
    }

    /// Circular distance on the wheel: `min(|i - j|, 12 - |i - j|)`.
    pub fn aspect_distance(self, other: Sign) -> usize {
        let direct = self.index().abs_diff(other.index());
        direct.min(SIGN_COUNT - direct)
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = SignParseError;

    /// Parses an English sign name, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(SignParseError::Empty);
        }
        Sign::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| SignParseError::Unknown(normalized.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignParseError {
    Empty,
    Unknown(String),
}

impl Display for SignParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "zodiac sign must not be empty"),
            Self::Unknown(value) => write!(f, "unknown zodiac sign: {value}"),
        }
    }
}

impl Error for SignParseError {}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        };
        f.write_str(name)
    }
}

impl Display for Modality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        };
        f.write_str(name)
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, Modality, Planet, Sign, SignParseError};

    #[test]
    fn wheel_order_matches_indices() {
        for (position, sign) in Sign::ALL.into_iter().enumerate() {
            assert_eq!(sign.index(), position);
        }
    }

    #[test]
    fn profiles_carry_reference_attributes() {
        assert_eq!(Sign::Aries.element(), Element::Fire);
        assert_eq!(Sign::Aries.modality(), Modality::Cardinal);
        assert_eq!(Sign::Aries.ruler(), Planet::Mars);
        assert_eq!(Sign::Scorpio.ruler(), Planet::Pluto);
        assert_eq!(Sign::Pisces.symbol(), "♓");
        assert_eq!(Sign::Virgo.ruler(), Sign::Gemini.ruler());
    }

    #[test]
    fn each_element_has_three_signs_and_each_modality_four() {
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let count = Sign::ALL.iter().filter(|s| s.element() == element).count();
            assert_eq!(count, 3, "{element}");
        }
        for modality in [Modality::Cardinal, Modality::Fixed, Modality::Mutable] {
            let count = Sign::ALL.iter().filter(|s| s.modality() == modality).count();
            assert_eq!(count, 4, "{modality}");
        }
    }

    #[test]
    fn aspect_distance_wraps_around_the_wheel() {
        assert_eq!(Sign::Aries.aspect_distance(Sign::Aries), 0);
        assert_eq!(Sign::Aries.aspect_distance(Sign::Pisces), 1);
        assert_eq!(Sign::Aries.aspect_distance(Sign::Sagittarius), 4);
        assert_eq!(Sign::Aries.aspect_distance(Sign::Libra), 6);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("leo".parse::<Sign>(), Ok(Sign::Leo));
        assert_eq!(" SAGITTARIUS ".parse::<Sign>(), Ok(Sign::Sagittarius));
        assert_eq!("".parse::<Sign>(), Err(SignParseError::Empty));
        assert_eq!(
            "Ophiuchus".parse::<Sign>(),
            Err(SignParseError::Unknown("Ophiuchus".to_string()))
        );
    }
}
