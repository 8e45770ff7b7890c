//! Stitch Glossary
//!
//! US crochet abbreviations with their UK equivalents. The same abbreviation
//! can mean different stitches in the two conventions: US "sc" is UK "dc",
//! and US "dc" is UK "tr". UK fields are `None` where both use the same term.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StitchError;
use crate::search::{normalize_query, Searchable};

/// Skill tier of a stitch. Ordered `Basic < Intermediate < Advanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Basic,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = StitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "beginner" => Ok(Difficulty::Basic),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => {
                let tiers: Vec<String> = Difficulty::ALL
                    .iter()
                    .map(|d| d.display_name().to_lowercase())
                    .collect();
                Err(StitchError::invalid_input(
                    "tier",
                    format!("'{}' is not a tier (expected {})", s.trim(), tiers.join(", ")),
                ))
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One glossary entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlossaryTerm {
    /// US abbreviation, unique within the table
    pub abbreviation: &'static str,
    /// US name
    pub full_name: &'static str,
    /// UK name, if it differs
    pub uk_name: Option<&'static str>,
    /// UK abbreviation, if it differs
    pub uk_abbreviation: Option<&'static str>,
    pub description: &'static str,
    pub tier: Difficulty,
}

impl Searchable for GlossaryTerm {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.abbreviation, self.full_name, self.description];
        fields.extend(self.uk_name);
        fields.extend(self.uk_abbreviation);
        fields
    }
}

/// The glossary, in display order.
pub static GLOSSARY: &[GlossaryTerm] = &[
    GlossaryTerm {
        abbreviation: "ch",
        full_name: "chain",
        uk_name: None,
        uk_abbreviation: None,
        description: "Yarn over and pull through the loop on the hook. The foundation of most projects.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "sl st",
        full_name: "slip stitch",
        uk_name: None,
        uk_abbreviation: Some("ss"),
        description: "Insert hook, yarn over and pull through both the stitch and the loop on the hook. Used to join rounds.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "sc",
        full_name: "single crochet",
        uk_name: Some("double crochet"),
        uk_abbreviation: Some("dc"),
        description: "Insert hook, pull up a loop, yarn over and pull through both loops. A short, dense stitch.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "hdc",
        full_name: "half double crochet",
        uk_name: Some("half treble crochet"),
        uk_abbreviation: Some("htr"),
        description: "Yarn over, insert hook, pull up a loop, then yarn over and pull through all three loops.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "dc",
        full_name: "double crochet",
        uk_name: Some("treble crochet"),
        uk_abbreviation: Some("tr"),
        description: "Yarn over, insert hook, pull up a loop, then work off two loops at a time twice.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "tr",
        full_name: "treble crochet",
        uk_name: Some("double treble crochet"),
        uk_abbreviation: Some("dtr"),
        description: "Yarn over twice before inserting the hook, then work off two loops at a time three times.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "dtr",
        full_name: "double treble crochet",
        uk_name: Some("triple treble crochet"),
        uk_abbreviation: Some("trtr"),
        description: "Yarn over three times before inserting the hook. A very tall, open stitch.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "sc2tog",
        full_name: "single crochet two together",
        uk_name: Some("double crochet two together"),
        uk_abbreviation: Some("dc2tog"),
        description: "Pull up a loop in each of the next two stitches, then pull through all three loops. Decreases by one.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "dc2tog",
        full_name: "double crochet two together",
        uk_name: Some("treble two together"),
        uk_abbreviation: Some("tr2tog"),
        description: "Work a partial stitch in each of the next two stitches and finish them together. Decreases by one.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "inc",
        full_name: "increase",
        uk_name: None,
        uk_abbreviation: None,
        description: "Work two stitches into the same stitch.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "dec",
        full_name: "decrease",
        uk_name: None,
        uk_abbreviation: None,
        description: "Combine two stitches into one.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "BLO",
        full_name: "back loop only",
        uk_name: None,
        uk_abbreviation: None,
        description: "Work into the back loop of the stitch only, leaving a visible ridge.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "FLO",
        full_name: "front loop only",
        uk_name: None,
        uk_abbreviation: None,
        description: "Work into the front loop of the stitch only.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "MR",
        full_name: "magic ring",
        uk_name: None,
        uk_abbreviation: None,
        description: "An adjustable loop that is pulled closed after the first round. Common in amigurumi.",
        tier: Difficulty::Basic,
    },
    GlossaryTerm {
        abbreviation: "BPdc",
        full_name: "back post double crochet",
        uk_name: Some("back post treble"),
        uk_abbreviation: Some("BPtr"),
        description: "Work a double crochet around the post of the stitch from the back. Creates ribbing.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "FPdc",
        full_name: "front post double crochet",
        uk_name: Some("front post treble"),
        uk_abbreviation: Some("FPtr"),
        description: "Work a double crochet around the post of the stitch from the front. Raises the stitch.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "sh",
        full_name: "shell",
        uk_name: None,
        uk_abbreviation: None,
        description: "Several tall stitches worked into the same stitch to fan out.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "cl",
        full_name: "cluster",
        uk_name: None,
        uk_abbreviation: None,
        description: "Several partial stitches finished together at the top.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "puff",
        full_name: "puff stitch",
        uk_name: None,
        uk_abbreviation: None,
        description: "Several loops pulled up in the same stitch and closed together for a soft, raised bump.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "rsc",
        full_name: "reverse single crochet",
        uk_name: Some("crab stitch"),
        uk_abbreviation: None,
        description: "Single crochet worked from left to right for a corded edge.",
        tier: Difficulty::Intermediate,
    },
    GlossaryTerm {
        abbreviation: "pc",
        full_name: "popcorn stitch",
        uk_name: None,
        uk_abbreviation: None,
        description: "A group of complete stitches in one stitch, folded closed with the hook to pop forward.",
        tier: Difficulty::Advanced,
    },
    GlossaryTerm {
        abbreviation: "Tss",
        full_name: "Tunisian simple stitch",
        uk_name: None,
        uk_abbreviation: None,
        description: "Worked on a long hook with a forward pass that picks up loops and a return pass that works them off.",
        tier: Difficulty::Advanced,
    },
    GlossaryTerm {
        abbreviation: "croc",
        full_name: "crocodile stitch",
        uk_name: None,
        uk_abbreviation: None,
        description: "Scales made by working tall stitches around the posts of a base row.",
        tier: Difficulty::Advanced,
    },
];

/// Look up a term by abbreviation. Exact matches win over case-insensitive ones.
pub fn find_term(abbreviation: &str) -> Option<&'static GlossaryTerm> {
    let abbreviation = abbreviation.trim();
    GLOSSARY
        .iter()
        .find(|t| t.abbreviation == abbreviation)
        .or_else(|| {
            GLOSSARY
                .iter()
                .find(|t| t.abbreviation.eq_ignore_ascii_case(abbreviation))
        })
}

/// Search the glossary.
///
/// Matches `query` as a case-insensitive substring of any text field, then
/// keeps only `tier` if one is given. Results are in table order.
///
/// # Example
///
/// ```rust
/// use stitch_core::tables::{search_glossary, Difficulty};
///
/// let advanced = search_glossary("", Some(Difficulty::Advanced));
/// assert!(advanced.iter().all(|t| t.tier == Difficulty::Advanced));
/// ```
pub fn search_glossary(query: &str, tier: Option<Difficulty>) -> Vec<&'static GlossaryTerm> {
    let needle = normalize_query(query);
    GLOSSARY
        .iter()
        .filter(|term| match tier {
            Some(tier) => term.tier == tier,
            None => true,
        })
        .filter(|term| match &needle {
            Some(needle) => term.matches_lowercase(needle),
            None => true,
        })
        .collect()
}
