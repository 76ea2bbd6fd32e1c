//! Zodiac-domain metrics.
//!
//! # Responsibility
//! - Score two signs on sign, element, modality, ruler and wheel aspect.
//!
//! # Invariants
//! - Every lookup is symmetric: `(a, b)` and `(b, a)` score the same.
//! - Every metric is a whole number in `55..=95`.

use crate::model::result::{Breakdown, MetricName};
use crate::model::sign::{Element, Modality, Planet, Sign};

/// Trines, sextiles and classic cross-element matches.
const HIGHLY_COMPATIBLE_SIGNS: &[(Sign, Sign)] = &[
    (Sign::Aries, Sign::Leo),
    (Sign::Aries, Sign::Sagittarius),
    (Sign::Aries, Sign::Gemini),
    (Sign::Aries, Sign::Aquarius),
    (Sign::Taurus, Sign::Virgo),
    (Sign::Taurus, Sign::Capricorn),
    (Sign::Taurus, Sign::Cancer),
    (Sign::Taurus, Sign::Pisces),
    (Sign::Gemini, Sign::Libra),
    (Sign::Gemini, Sign::Aquarius),
    (Sign::Gemini, Sign::Leo),
    (Sign::Cancer, Sign::Scorpio),
    (Sign::Cancer, Sign::Pisces),
    (Sign::Cancer, Sign::Virgo),
    (Sign::Leo, Sign::Sagittarius),
    (Sign::Leo, Sign::Libra),
    (Sign::Virgo, Sign::Capricorn),
    (Sign::Virgo, Sign::Scorpio),
    (Sign::Libra, Sign::Aquarius),
    (Sign::Libra, Sign::Sagittarius),
    (Sign::Scorpio, Sign::Pisces),
    (Sign::Scorpio, Sign::Capricorn),
    (Sign::Sagittarius, Sign::Aquarius),
    (Sign::Capricorn, Sign::Pisces),
];

/// Square aspects: challenging but workable.
const CHALLENGING_SIGNS: &[(Sign, Sign)] = &[
    (Sign::Aries, Sign::Cancer),
    (Sign::Aries, Sign::Capricorn),
    (Sign::Taurus, Sign::Leo),
    (Sign::Taurus, Sign::Aquarius),
    (Sign::Gemini, Sign::Virgo),
    (Sign::Gemini, Sign::Pisces),
    (Sign::Cancer, Sign::Libra),
    (Sign::Leo, Sign::Scorpio),
    (Sign::Virgo, Sign::Sagittarius),
    (Sign::Libra, Sign::Capricorn),
    (Sign::Scorpio, Sign::Aquarius),
    (Sign::Sagittarius, Sign::Pisces),
];

const COMPATIBLE_ELEMENTS: &[(Element, Element)] =
    &[(Element::Fire, Element::Air), (Element::Earth, Element::Water)];

const COMPLEMENTARY_MODALITIES: &[(Modality, Modality)] = &[
    (Modality::Cardinal, Modality::Mutable),
    (Modality::Fixed, Modality::Cardinal),
];

const HARMONIOUS_PLANETS: &[(Planet, Planet)] = &[
    (Planet::Venus, Planet::Jupiter),
    (Planet::Sun, Planet::Jupiter),
    (Planet::Moon, Planet::Venus),
    (Planet::Mercury, Planet::Venus),
    (Planet::Mars, Planet::Jupiter),
    (Planet::Sun, Planet::Mars),
];

const CHALLENGING_PLANETS: &[(Planet, Planet)] = &[
    (Planet::Mars, Planet::Saturn),
    (Planet::Sun, Planet::Saturn),
    (Planet::Moon, Planet::Saturn),
    (Planet::Mars, Planet::Pluto),
    (Planet::Saturn, Planet::Uranus),
];

/// Computes all five zodiac metrics.
pub fn zodiac_breakdown(first: Sign, second: Sign) -> Breakdown {
    Breakdown::from_iter([
        (MetricName::SignHarmony, sign_harmony(first, second)),
        (MetricName::ElementalBalance, elemental_balance(first, second)),
        (MetricName::ModalityMatch, modality_match(first, second)),
        (MetricName::PlanetarySync, planetary_sync(first, second)),
        (MetricName::CosmicAspect, cosmic_aspect(first, second)),
    ])
}

pub fn sign_harmony(first: Sign, second: Sign) -> f64 {
    if first == second {
        95.0
    } else if contains_pair(HIGHLY_COMPATIBLE_SIGNS, first, second) {
        85.0
    } else if contains_pair(CHALLENGING_SIGNS, first, second) {
        55.0
    } else {
        70.0
    }
}

pub fn elemental_balance(first: Sign, second: Sign) -> f64 {
    let (a, b) = (first.element(), second.element());
    if a == b {
        90.0
    } else if contains_pair(COMPATIBLE_ELEMENTS, a, b) {
        80.0
    } else {
        60.0
    }
}

pub fn modality_match(first: Sign, second: Sign) -> f64 {
    let (a, b) = (first.modality(), second.modality());
    if a == b {
        85.0
    } else if contains_pair(COMPLEMENTARY_MODALITIES, a, b) {
        75.0
    } else {
        // Fixed with Mutable.
        65.0
    }
}

pub fn planetary_sync(first: Sign, second: Sign) -> f64 {
    let (a, b) = (first.ruler(), second.ruler());
    if a == b {
        95.0
    } else if contains_pair(HARMONIOUS_PLANETS, a, b) {
        80.0
    } else if contains_pair(CHALLENGING_PLANETS, a, b) {
        55.0
    } else {
        70.0
    }
}

/// Scores the circular wheel distance between the signs.
pub fn cosmic_aspect(first: Sign, second: Sign) -> f64 {
    match first.aspect_distance(second) {
        0 => 95.0, // conjunction
        4 => 90.0, // trine
        2 => 85.0, // sextile
        6 => 75.0, // opposition
        3 => 65.0, // square
        _ => 70.0,
    }
}

fn contains_pair<T: PartialEq + Copy>(pairs: &[(T, T)], first: T, second: T) -> bool {
    pairs
        .iter()
        .any(|&(a, b)| (a == first && b == second) || (a == second && b == first))
}

#[cfg(test)]
mod tests {
    use super::{
        cosmic_aspect, elemental_balance, modality_match, planetary_sync, sign_harmony,
        zodiac_breakdown, CHALLENGING_SIGNS, HIGHLY_COMPATIBLE_SIGNS,
    };
    use crate::model::result::MetricName;
    use crate::model::sign::Sign;

    #[test]
    fn aries_leo_reference_values() {
        let breakdown = zodiac_breakdown(Sign::Aries, Sign::Leo);
        assert_eq!(breakdown.get(MetricName::SignHarmony), Some(85.0));
        assert_eq!(breakdown.get(MetricName::ElementalBalance), Some(90.0));
        assert_eq!(breakdown.get(MetricName::ModalityMatch), Some(75.0));
        assert_eq!(breakdown.get(MetricName::PlanetarySync), Some(80.0));
        assert_eq!(breakdown.get(MetricName::CosmicAspect), Some(90.0));
    }

    #[test]
    fn identical_signs_score_top_values() {
        for sign in Sign::ALL {
            assert_eq!(sign_harmony(sign, sign), 95.0, "{sign}");
            assert_eq!(elemental_balance(sign, sign), 90.0);
            assert_eq!(modality_match(sign, sign), 85.0);
            assert_eq!(planetary_sync(sign, sign), 95.0);
            assert_eq!(cosmic_aspect(sign, sign), 95.0);
        }
    }

    #[test]
    fn every_metric_is_symmetric() {
        for a in Sign::ALL {
            for b in Sign::ALL {
                assert_eq!(zodiac_breakdown(a, b), zodiac_breakdown(b, a), "{a}/{b}");
            }
        }
    }

    #[test]
    fn pair_tables_have_four_partners_and_two_squares_per_sign() {
        for sign in Sign::ALL {
            let partners = HIGHLY_COMPATIBLE_SIGNS
                .iter()
                .filter(|(a, b)| *a == sign || *b == sign)
                .count();
            assert_eq!(partners, 4, "{sign}");
            let squares = CHALLENGING_SIGNS
                .iter()
                .filter(|(a, b)| *a == sign || *b == sign)
                .count();
            assert_eq!(squares, 2, "{sign}");
        }
    }

    #[test]
    fn squares_and_neutral_pairs() {
        assert_eq!(sign_harmony(Sign::Aries, Sign::Cancer), 55.0);
        assert_eq!(sign_harmony(Sign::Aries, Sign::Taurus), 70.0);
        // Mars and Saturn
        assert_eq!(planetary_sync(Sign::Aries, Sign::Capricorn), 55.0);
        // Virgo and Gemini share Mercury.
        assert_eq!(planetary_sync(Sign::Virgo, Sign::Gemini), 95.0);
        // Leo (Fixed) and Pisces (Mutable)
        assert_eq!(modality_match(Sign::Leo, Sign::Pisces), 65.0);
        assert_eq!(elemental_balance(Sign::Taurus, Sign::Leo), 60.0);
        assert_eq!(cosmic_aspect(Sign::Aries, Sign::Libra), 75.0);
        assert_eq!(cosmic_aspect(Sign::Aries, Sign::Taurus), 70.0);
    }
}
