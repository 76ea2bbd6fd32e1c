//! Curated override pairs.
//!
//! # Responsibility
//! - Hold the fixed-score pairs that short-circuit name scoring.
//! - Look pairs up in both argument orders.
//!
//! # Invariants
//! - Every key is already canonical (`canonicalize(key) == key`).
//! - Keys are unique; the table is never mutated after startup.
//! - Forward order (`first + second`) wins over reverse order.

use crate::text::canonical::{CanonicalText, PairKey};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One curated pair with its fixed verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideEntry {
    /// Canonical concatenation of both names.
    pub key: &'static str,
    pub score: u8,
    pub message: &'static str,
    pub emoji: &'static str,
    pub share_text: &'static str,
}

const fn entry(
    key: &'static str,
    score: u8,
    message: &'static str,
    emoji: &'static str,
    share_text: &'static str,
) -> OverrideEntry {
    OverrideEntry {
        key,
        score,
        message,
        emoji,
        share_text,
    }
}

/// All override pairs.
pub static OVERRIDES: &[OverrideEntry] = &[
    entry(
        "taylorswifttraviskelce",
        98,
        "A love story in the making! 🏈🎤❤️",
        "🏈",
        "Love story in the making! 🏈🎤",
    ),
    entry(
        "willsmithjadapinkettsmith",
        9,
        "Toxic entanglement detected. 🚩💔",
        "🚩",
        "Entanglement detected! 🚩",
    ),
    entry(
        "blakelivelyryanreynolds",
        99,
        "Hollywood power couple energy! ✨💑",
        "✨",
        "Hollywood power couple! ✨💑",
    ),
    entry(
        "johnnydeppamberheard",
        5,
        "A legal battle is not a love story. ⚖️💔",
        "⚖️",
        "Legal battle ≠ love story ⚖️",
    ),
    entry(
        "barackobamamichelleobama",
        100,
        "Presidential-level love detected. 🇺🇸💖",
        "🇺🇸",
        "Presidential love! 🇺🇸💖",
    ),
    entry(
        "tomhollandzendaya",
        95,
        "Swinging through life together perfectly. 🕸️💞",
        "🕸️",
        "Swinging through life together! 🕸️",
    ),
    entry(
        "jayzbeyonce",
        97,
        "Love on top — forever. 🎶👑",
        "👑",
        "Love on top! 🎶👑",
    ),
    entry(
        "jayzbeyoncé",
        97,
        "Love on top — forever. 🎶👑",
        "👑",
        "Love on top! 🎶👑",
    ),
    entry(
        "cristianoronaldogeorginarodriguez",
        92,
        "A champion couple on and off the field. ⚽🏆",
        "⚽",
        "Champion couple! ⚽🏆",
    ),
    entry(
        "cristianoronaldogeorginarodríguez",
        92,
        "A champion couple on and off the field. ⚽🏆",
        "⚽",
        "Champion couple! ⚽🏆",
    ),
    entry(
        "harrystylesoliviawilde",
        61,
        "Style meets cinema — but will it last? 🎥🎤",
        "🎥",
        "Style meets cinema! 🎥🎤",
    ),
    entry(
        "willsmithmargotrobbie",
        75,
        "Chemistry detected... on set? 🎬😉",
        "🎬",
        "On-set chemistry! 🎬😉",
    ),
    entry(
        "kanyewestkimkardashian",
        8,
        "Fame and ego — a tough combo. 💔",
        "💔",
        "Fame and ego combo 💔",
    ),
    entry(
        "bradpittangelinajolie",
        15,
        "Once upon a time... but no more. 📽️💔",
        "📽️",
        "Once upon a time... 📽️💔",
    ),
    entry(
        "elonmuskgrimes",
        20,
        "SpaceX didn't launch this love. 🛸💥",
        "🛸",
        "SpaceX launch failed! 🛸💥",
    ),
    entry(
        "shakiragerardpique",
        10,
        "A breakup that shook the charts! 🎶⚽💔",
        "🎶",
        "Shook the charts! 🎶⚽💔",
    ),
    entry(
        "shakiragerardpiqué",
        10,
        "A breakup that shook the charts! 🎶⚽💔",
        "🎶",
        "Shook the charts! 🎶⚽💔",
    ),
    entry(
        "mrbeastpewdiepie",
        100,
        "Billion-view bromance detected. 💸🎮",
        "💸",
        "Billion-view bromance! 💸🎮",
    ),
    entry(
        "spongebobpatrick",
        100,
        "Best friend goals, now with romance?! ⭐💕",
        "⭐",
        "Best friend goals! ⭐💕",
    ),
    entry(
        "elonmuskmarkzuckerberg",
        0,
        "Ready to fight in the octagon… not in love. 🥊💔",
        "🥊",
        "Octagon ready! 🥊💔",
    ),
    entry(
        "batmanjoker",
        0,
        "This relationship would be... chaotic. 🃏🦇💥",
        "🃏",
        "Chaotic relationship! 🃏🦇",
    ),
    entry(
        "shrekfiona",
        99,
        "A fairy tale match — layers included. 🧅💚",
        "🧅",
        "Fairy tale match! 🧅💚",
    ),
    entry(
        "rossgellerrachelgreen",
        100,
        "They were on a break... but soulmates. 📺❤️",
        "📺",
        "Were on a break! 📺❤️",
    ),
    entry(
        "marioprincesspeach",
        98,
        "Your princess is in THIS castle. 🍄👑❤️",
        "🍄",
        "Princess found! 🍄👑",
    ),
    entry(
        "jackrose",
        85,
        "A timeless love — but hold on to that door. 🚢💙",
        "🚢",
        "Timeless love! 🚢💙",
    ),
    entry(
        "jonsnowdaenerystargaryen",
        64,
        "Fire and ice — a complicated match. ❄️🔥",
        "❄️",
        "Fire and ice! ❄️🔥",
    ),
    entry(
        "katnisseverdeenpeetamellark",
        88,
        "May the odds be ever in your favor. 🏹❤️",
        "🏹",
        "Odds in your favor! 🏹❤️",
    ),
    entry(
        "tonystarkpepperpotts",
        100,
        "I love you 3000. 🚀❤️",
        "🚀",
        "Love you 3000! 🚀❤️",
    ),
    entry(
        "hansoloprincessleia",
        95,
        "I know. ✨🚀❤️",
        "🚀",
        "I know. ✨🚀❤️",
    ),
    entry(
        "homersimpsonmargesimpson",
        98,
        "Mmm... love. 🍩💛",
        "🍩",
        "Mmm... love! 🍩💛",
    ),
    entry(
        "saltbaesteak",
        100,
        "A match made in the kitchen. 🧂🥩❤️",
        "🧂",
        "Kitchen match! 🧂🥩",
    ),
    entry(
        "linkzelda",
        97,
        "It's dangerous to go alone — take love! 🗡️❤️",
        "🗡️",
        "Dangerous to go alone! 🗡️❤️",
    ),
    entry(
        "masterchiefcortana",
        80,
        "Love in a virtual space. 💾💙",
        "💾",
        "Virtual love! 💾💙",
    ),
    entry(
        "kratosatreus",
        100,
        "Father-son bond — stronger than any love. 🪓❤️",
        "🪓",
        "Father-son bond! 🪓❤️",
    ),
    entry(
        "elliedina",
        90,
        "Love in a broken world. 🎮❤️",
        "🎮",
        "Love in broken world! 🎮❤️",
    ),
    entry(
        "jokerharleyquinn",
        25,
        "Twisted, toxic, and unforgettable. 🃏💋💔",
        "🃏",
        "Twisted and toxic! 🃏💋",
    ),
    entry(
        "gokuvegeta",
        69,
        "Rivals... or more? 💪🔥❤️",
        "💪",
        "Rivals or more? 💪🔥",
    ),
    entry(
        "ashketchummisty",
        70,
        "Gotta catch... feelings! 🎮❤️",
        "🎮",
        "Gotta catch feelings! 🎮❤️",
    ),
    entry(
        "sherlockholmesdrwatson",
        100,
        "A perfectly logical partnership. 🕵️‍♂️❤️",
        "🕵️",
        "Logical partnership! 🕵️‍♂️❤️",
    ),
    entry(
        "loganpaulksi",
        10,
        "Business partners, not lovers. 🤑👊",
        "🤑",
        "Business partners! 🤑👊",
    ),
    entry(
        "andrewtatergretathunberg",
        0,
        "Oil and water. 🌍🚫",
        "🌍",
        "Oil and water! 🌍🚫",
    ),
    entry(
        "saltbaegordonramsay",
        15,
        "Battle of the chefs — not of hearts. 🍳🔥💔",
        "🍳",
        "Chef battle! 🍳🔥",
    ),
    entry(
        "bigshaqthetingoesskrrra",
        69,
        "The only number that matters here. 🔥🎵😉",
        "🔥",
        "The number that matters! 🔥🎵",
    ),
    entry(
        "dogecheems",
        100,
        "Such love. Much wow. 🐶💖",
        "🐶",
        "Such love. Much wow! 🐶💖",
    ),
    entry(
        "rickastleynevergonnagiveyouup",
        100,
        "Never gonna give you up... obviously. 🎶💘",
        "🎶",
        "Never gonna give you up! 🎶💘",
    ),
    entry(
        "grumpycatnyancat",
        50,
        "Grumpy, but maybe interested. 🐱🌈",
        "🐱",
        "Grumpy but interested! 🐱🌈",
    ),
    entry(
        "therockkevinhart",
        100,
        "The perfect comedic duo. 💪😂❤️",
        "💪",
        "Perfect comedic duo! 💪😂",
    ),
    entry(
        "shaggyvelma",
        95,
        "Jinkies! It's true love! 🕵️❤️",
        "🕵️",
        "Jinkies! True love! 🕵️❤️",
    ),
    entry(
        "marioluigi",
        100,
        "Brothers before all. 🍄❤️",
        "🍄",
        "Brothers before all! 🍄❤️",
    ),
    entry(
        "phineasferb",
        100,
        "Best invention yet: love. 🔧❤️",
        "🔧",
        "Best invention: love! 🔧❤️",
    ),
    entry(
        "voldemortharrypotter",
        5,
        "Can't love if you split your soul. 🧙💔",
        "🧙",
        "Split soul, no love! 🧙💔",
    ),
    entry(
        "dumbledoregrindelwald",
        60,
        "A love turned tragic. 🧙‍♂️💔",
        "🧙‍♂️",
        "Love turned tragic! 🧙‍♂️💔",
    ),
    entry(
        "gandalfsaruman",
        5,
        "White and grey don't mix well here. 🧙‍♂️💔",
        "🧙‍♂️",
        "White and grey don't mix! 🧙‍♂️",
    ),
    entry(
        "frodosam",
        100,
        "Friendship forged in fire. 🧙‍♂️❤️",
        "🧙‍♂️",
        "Friendship forged in fire! 🧙‍♂️❤️",
    ),
    entry(
        "geraltyennefer",
        97,
        "A magic-fueled love. 🧙‍♀️❤️",
        "🧙‍♀️",
        "Magic-fueled love! 🧙‍♀️❤️",
    ),
    entry(
        "wandamaximoffvision",
        95,
        "Love beyond reality. 💫❤️",
        "💫",
        "Love beyond reality! 💫❤️",
    ),
    entry(
        "lokithor",
        50,
        "Sibling rivalry — with love? ⚡❤️",
        "⚡",
        "Sibling rivalry with love! ⚡",
    ),
    entry(
        "drakerihanna",
        85,
        "Hit after hit after hit... of love. 🎤❤️",
        "🎤",
        "Hit after hit of love! 🎤❤️",
    ),
    entry(
        "cardiboffset",
        75,
        "Money moves... and heart moves. 💰❤️",
        "💰",
        "Money and heart moves! 💰❤️",
    ),
    entry(
        "btsjungkooklisablackpink",
        95,
        "K-pop's ultimate ship. 🎤❤️",
        "🎤",
        "K-pop ultimate ship! 🎤❤️",
    ),
    entry(
        "oliviarodrigojoshuabassett",
        20,
        "Drivers license... revoked? 🚗💔",
        "🚗",
        "Drivers license revoked! 🚗💔",
    ),
    entry(
        "dualipajackharlow",
        70,
        "New rules, new love? 🎤❤️",
        "🎤",
        "New rules, new love! 🎤❤️",
    ),
    entry(
        "shawnmendescamilacabello",
        80,
        "Señorita vibes. 🎶❤️",
        "🎶",
        "Señorita vibes! 🎶❤️",
    ),
    entry(
        "mrbeastchandler",
        100,
        "A bromance worth billions. 💸❤️",
        "💸",
        "Billion-dollar bromance! 💸❤️",
    ),
    entry(
        "loganpauljakepaul",
        99,
        "Brotherly love — sometimes too much. 🥊❤️",
        "🥊",
        "Too much brotherly love! 🥊❤️",
    ),
    entry(
        "dreamgeorgenotfound",
        95,
        "Minecraft hearts all the way. ⛏️❤️",
        "⛏️",
        "Minecraft hearts! ⛏️❤️",
    ),
    entry(
        "charlidameliollilhuddy",
        60,
        "TikTok love fades fast. 🎵💔",
        "🎵",
        "TikTok love fades! 🎵💔",
    ),
    entry(
        "pokimanexqc",
        55,
        "Gaming chemistry, but complicated. 🎮❤️",
        "🎮",
        "Gaming chemistry! 🎮❤️",
    ),
    entry(
        "ninjatfue",
        10,
        "Rivalry, not romance. 🎮💔",
        "🎮",
        "Rivalry, not romance! 🎮💔",
    ),
    entry(
        "valkyraeeludwig",
        85,
        "Content kings and queens. 👑❤️",
        "👑",
        "Content royalty! 👑❤️",
    ),
    entry(
        "hasanabiaoc",
        80,
        "Progressive power couple? 💥❤️",
        "💥",
        "Progressive power couple! 💥❤️",
    ),
    entry(
        "khabylamesilence",
        100,
        "The perfect match — no words needed. 🤫❤️",
        "🤫",
        "No words needed! 🤫❤️",
    ),
    entry(
        "jamescharlestatiwestbrook",
        10,
        "Beauty community drama, not love. 💄💔",
        "💄",
        "Beauty drama, not love! 💄💔",
    ),
    // Alternate spellings.
    entry(
        "blakeryan",
        99,
        "Hollywood power couple energy! ✨💑",
        "✨",
        "Hollywood power couple! ✨💑",
    ),
    entry(
        "rossrachel",
        100,
        "They were on a break... but soulmates. 📺❤️",
        "📺",
        "Were on a break! 📺❤️",
    ),
    entry(
        "watsonsherlock",
        100,
        "A perfectly logical partnership. 🕵️‍♂️❤️",
        "🕵️",
        "Logical partnership! 🕵️‍♂️❤️",
    ),
    entry(
        "johnwatsonsherlockholmes",
        100,
        "A perfectly logical partnership. 🕵️‍♂️❤️",
        "🕵️",
        "Logical partnership! 🕵️‍♂️❤️",
    ),
    entry(
        "harryvoldemort",
        5,
        "Can't love if you split your soul. 🧙💔",
        "🧙",
        "Split soul, no love! 🧙💔",
    ),
    entry(
        "hermioneron",
        95,
        "Intelligence meets loyalty — perfect match! 📚❤️",
        "📚",
        "Intelligence meets loyalty! 📚❤️",
    ),
    entry(
        "batmansuperman",
        75,
        "World's finest duo — fighting crime and hearts! 🦸‍♂️💫",
        "🦸‍♂️",
        "World's finest duo! 🦸‍♂️💫",
    ),
    entry(
        "spidermandeadpool",
        80,
        "Web-slinging meets wise-cracking! 🕷️💬",
        "🕷️",
        "Web-slinging meets wise-cracking! 🕷️",
    ),
];

static OVERRIDE_INDEX: Lazy<HashMap<&'static str, &'static OverrideEntry>> =
    Lazy::new(|| OVERRIDES.iter().map(|entry| (entry.key, entry)).collect());

/// Looks up `first + second`, then `second + first`.
pub fn match_override(
    first: &CanonicalText,
    second: &CanonicalText,
) -> Option<&'static OverrideEntry> {
    lookup(&PairKey::new(first, second)).or_else(|| lookup(&PairKey::new(second, first)))
}

/// Exact lookup of one ordered key.
pub fn lookup(key: &PairKey) -> Option<&'static OverrideEntry> {
    OVERRIDE_INDEX.get(key.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::{match_override, OVERRIDES, OVERRIDE_INDEX};
    use crate::text::canonical::canonicalize;

    #[test]
    fn keys_are_canonical_and_unique() {
        for entry in OVERRIDES {
            assert_eq!(canonicalize(entry.key).as_str(), entry.key);
            assert!(entry.score <= 100, "{}", entry.key);
        }
        assert_eq!(OVERRIDE_INDEX.len(), OVERRIDES.len());
    }

    #[test]
    fn matches_in_both_orders() {
        let shrek = canonicalize("Shrek");
        let fiona = canonicalize("Fiona");
        let forward = match_override(&shrek, &fiona).expect("forward hit");
        let reverse = match_override(&fiona, &shrek).expect("reverse hit");
        assert_eq!(forward.score, 99);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn accented_spelling_has_an_alias() {
        let entry = match_override(&canonicalize("Jay-Z"), &canonicalize("Beyoncé"))
            .expect("accented alias");
        assert_eq!(entry.score, 97);
        let plain = match_override(&canonicalize("jayz"), &canonicalize("beyonce"))
            .expect("plain key");
        assert_eq!(plain.message, entry.message);
    }

    #[test]
    fn accented_keys_share_the_plain_verdict() {
        for (accented, plain) in [
            ("jayzbeyoncé", "jayzbeyonce"),
            ("cristianoronaldogeorginarodríguez", "cristianoronaldogeorginarodriguez"),
            ("shakiragerardpiqué", "shakiragerardpique"),
        ] {
            let alias = OVERRIDE_INDEX.get(accented).expect("accented key");
            let base = OVERRIDE_INDEX.get(plain).expect("plain key");
            assert_eq!((alias.score, alias.message), (base.score, base.message));
        }
    }

    #[test]
    fn unknown_pairs_miss() {
        assert!(match_override(&canonicalize("Alice"), &canonicalize("Bob")).is_none());
    }

    #[test]
    fn multi_word_names_collapse_into_one_key() {
        let entry = match_override(
            &canonicalize("Barack Obama"),
            &canonicalize("Michelle Obama"),
        )
        .expect("multi-word hit");
        assert_eq!(entry.score, 100);
    }
}
