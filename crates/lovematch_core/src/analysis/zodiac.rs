//! Zodiac pair commentary.

use crate::analysis::HeadlineTier;
use crate::model::sign::{Element, Sign};
use crate::scoring::aggregate;
use crate::scoring::zodiac::zodiac_breakdown;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Classic relationship between two positions on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectPattern {
    TwinSouls,
    OppositeAttraction,
    HarmonicTrine,
    SupportiveSextile,
    UniqueDynamic,
}

impl AspectPattern {
    /// Classifies by the plain difference of wheel positions. The wheel seam
    /// is not bridged: Aquarius and Aries are ten apart, not two.
    pub fn between(first: Sign, second: Sign) -> Self {
        match first.index().abs_diff(second.index()) {
            0 => Self::TwinSouls,
            6 => Self::OppositeAttraction,
            4 => Self::HarmonicTrine,
            2 => Self::SupportiveSextile,
            _ => Self::UniqueDynamic,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::TwinSouls => "Twin Souls - perfect understanding",
            Self::OppositeAttraction => "Opposite Attraction - magnetic pull",
            Self::HarmonicTrine => "Harmonic Trine - effortless flow",
            Self::SupportiveSextile => "Supportive Sextile - natural friendship",
            Self::UniqueDynamic => "Unique Dynamic - special connection",
        }
    }
}

impl Display for AspectPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacAnalysis {
    pub score: u8,
    /// e.g. `♈ Aries + ♌ Leo`
    pub sign_pair: String,
    pub element_match: String,
    pub modality_match: String,
    pub planetary_message: String,
    pub classic_pattern: AspectPattern,
    pub overall_message: &'static str,
}

pub fn analyze_zodiac(first: Sign, second: Sign) -> ZodiacAnalysis {
    let score = aggregate(&zodiac_breakdown(first, second).values());
    ZodiacAnalysis {
        score,
        sign_pair: sign_pair_label(first, second),
        element_match: element_commentary(first.element(), second.element()),
        modality_match: modality_commentary(first, second),
        planetary_message: planetary_commentary(first, second),
        classic_pattern: AspectPattern::between(first, second),
        overall_message: zodiac_headline(score),
    }
}

pub fn sign_pair_label(first: Sign, second: Sign) -> String {
    format!(
        "{} {} + {} {}",
        first.symbol(),
        first.name(),
        second.symbol(),
        second.name()
    )
}

fn element_commentary(first: Element, second: Element) -> String {
    if first == second {
        return format!("Both {first} signs - natural harmony and understanding!");
    }
    let airy = |e: Element| matches!(e, Element::Fire | Element::Air);
    let tail = if airy(first) && airy(second) {
        "energetic and inspiring!"
    } else if !airy(first) && !airy(second) {
        "grounding and nurturing!"
    } else {
        "complementary energies create balance!"
    };
    format!("{first} meets {second} - {tail}")
}

fn modality_commentary(first: Sign, second: Sign) -> String {
    let (a, b) = (first.modality(), second.modality());
    if a == b {
        format!("Both {a} signs - shared approach to life!")
    } else {
        format!("{a} energy meets {b} style - different but compatible!")
    }
}

fn planetary_commentary(first: Sign, second: Sign) -> String {
    let (a, b) = (first.ruler(), second.ruler());
    let tail = if a == b {
        "cosmic twins with shared planetary energy!"
    } else {
        "unique planetary influences create dynamic attraction!"
    };
    format!("Ruled by {a} and {b} - {tail}")
}

pub fn zodiac_headline(score: u8) -> &'static str {
    match HeadlineTier::from_score(score) {
        HeadlineTier::Exceptional => {
            "Written in the stars! Celestial soulmates with cosmic harmony ✨"
        }
        HeadlineTier::Great => "Stellar connection! The stars align beautifully for you ⭐",
        HeadlineTier::Good => "Cosmic chemistry! Great astrological compatibility 🌟",
        HeadlineTier::Fair => "Starlit romance! Good zodiac harmony with potential 💫",
        HeadlineTier::Unusual => "Unique constellation! Different energies can create magic 🔮",
    }
}
