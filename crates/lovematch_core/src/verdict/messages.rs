//! Verdict pools and message selection.
//!
//! Each band owns a fixed pool of five messages. Selection is the only
//! randomized step in the engine and always draws from a caller-provided
//! generator.

use crate::model::result::Band;
use crate::verdict::overrides::OverrideEntry;
use rand::Rng;
use serde::Serialize;

/// One entry of a band pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandMessage {
    pub message: &'static str,
    pub emoji: &'static str,
    pub share_text: &'static str,
}

const fn message(
    message: &'static str,
    emoji: &'static str,
    share_text: &'static str,
) -> BandMessage {
    BandMessage {
        message,
        emoji,
        share_text,
    }
}

/// Human-readable verdict attached to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub band: Band,
    pub message: &'static str,
    pub emoji: &'static str,
    pub share_text: &'static str,
}

impl Verdict {
    /// Verdict carried by a curated override pair.
    pub fn from_override(entry: &OverrideEntry) -> Self {
        Self {
            band: Band::from_score(entry.score),
            message: entry.message,
            emoji: entry.emoji,
            share_text: entry.share_text,
        }
    }
}

const SOULMATES_POOL: &[BandMessage] = &[
    message(
        "Soulmates — you two were written in the stars! 🌠❤️",
        "🌠",
        "We're soulmates! ✨",
    ),
    message(
        "Perfect match! Your love story is one for the ages! 💖✨",
        "💖",
        "Perfect love match! 💕",
    ),
    message(
        "True love at its finest — you complete each other! 💕🔥",
        "💕",
        "We complete each other! 💖",
    ),
    message(
        "Legendary love! You're destined to be together forever! 👑💫",
        "👑",
        "Legendary love story! 💫",
    ),
    message(
        "Ultimate power couple! Your love conquers all! 💪❤️",
        "💪",
        "Power couple vibes! 💪❤️",
    ),
];

const STRONG_POOL: &[BandMessage] = &[
    message(
        "True love alert — you're a match made in heaven! ✨💕",
        "✨",
        "Match made in heaven! 💕",
    ),
    message(
        "Amazing connection! Your hearts beat as one! 💓🎵",
        "💓",
        "Our hearts beat as one! 💓",
    ),
    message(
        "Beautiful love story in the making! 🌹💖",
        "🌹",
        "Beautiful love story! 🌹",
    ),
    message(
        "Incredible chemistry! The sparks are flying! ⚡💘",
        "⚡",
        "Incredible chemistry! ⚡💘",
    ),
    message(
        "Love goals! You inspire others with your connection! 🎯💝",
        "🎯",
        "Relationship goals! 💝",
    ),
];

const PROMISING_POOL: &[BandMessage] = &[
    message(
        "A solid connection — let's see where it goes! 🌷💫",
        "🌷",
        "Solid connection! 🌷",
    ),
    message(
        "Good potential! Love might be blooming! 🌸🌱",
        "🌸",
        "Love is blooming! 🌸",
    ),
    message(
        "Sweet compatibility! There's definitely something here! 🍯💕",
        "🍯",
        "Sweet compatibility! 🍯",
    ),
    message(
        "Promising match! Time will tell your story! ⏰💖",
        "⏰",
        "Promising match! ⏰💖",
    ),
    message(
        "Cute connection! The foundation is there! 🏗️💕",
        "🏗️",
        "Cute connection! 💕",
    ),
];

const UNCERTAIN_POOL: &[BandMessage] = &[
    message(
        "A little spark, but will the flame grow? 🔥🤞",
        "🔥",
        "Little spark detected! 🔥",
    ),
    message(
        "Some potential, but work is needed! 🛠️💕",
        "🛠️",
        "Some potential there! 💕",
    ),
    message(
        "Mixed signals — communication is key! 📱💭",
        "📱",
        "Mixed signals! 📱💭",
    ),
    message(
        "Friendship vibes strong — maybe love will follow! 👫❓",
        "👫",
        "Strong friendship vibes! 👫",
    ),
    message(
        "Slow burn romance? Sometimes the best love takes time! ⏳🔥",
        "⏳",
        "Slow burn romance! ⏳🔥",
    ),
];

const MISMATCH_POOL: &[BandMessage] = &[
    message(
        "Opposites may attract… but sometimes they don't. ⚡💔",
        "⚡",
        "Opposites attract? ⚡",
    ),
    message(
        "Better as friends? Sometimes that's even better! 🤝💙",
        "🤝",
        "Better as friends! 🤝",
    ),
    message(
        "Not quite a match, but hey — there are plenty of fish! 🐠🌊",
        "🐠",
        "Plenty of fish! 🐠",
    ),
    message(
        "Different wavelengths, but that's okay! 📻🎵",
        "📻",
        "Different wavelengths! 📻",
    ),
    message(
        "Not meant to be, but you're both amazing! ⭐🌟",
        "⭐",
        "Both amazing individually! ⭐",
    ),
];
/// Message pool for `band`; never empty.
pub fn pool(band: Band) -> &'static [BandMessage] {
    match band {
        Band::Soulmates => SOULMATES_POOL,
        Band::Strong => STRONG_POOL,
        Band::Promising => PROMISING_POOL,
        Band::Uncertain => UNCERTAIN_POOL,
        Band::Mismatch => MISMATCH_POOL,
    }
}

/// Picks a verdict for `score` uniformly from its band's pool.
pub fn select_message<R: Rng + ?Sized>(score: u8, rng: &mut R) -> Verdict {
    let band = Band::from_score(score);
    let candidates = pool(band);
    let picked = candidates[rng.gen_range(0..candidates.len())];
    Verdict {
        band,
        message: picked.message,
        emoji: picked.emoji,
        share_text: picked.share_text,
    }
}
