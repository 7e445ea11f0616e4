//! Chained trace sections
//!
//! A rendered exception with previous exceptions prints one `Stack trace:` block per
//! exception, each closed by a `#N {main}` line. A section is the run of raw matches
//! up to and including such a terminator; matches after the last terminator form a
//! final, unterminated section.
//!
//! [SectionPolicy] decides which sections reach the mapper. The default keeps only
//! the first one.

use super::matching::RawFrame;
use serde::{Deserialize, Serialize};

/// Which trace sections to extract frames from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionPolicy {
    /// Only the first section; the rest of the text is never scanned
    #[default]
    First,
    /// Only the last section
    Last,
    /// Every section, in source order
    All,
}

/// Group raw matches into sections, each ending at its terminator.
pub fn split_sections<'t>(
    matches: impl IntoIterator<Item = RawFrame<'t>>,
) -> Vec<Vec<RawFrame<'t>>> {
    let mut sections = Vec::new();
    let mut current = Vec::new();
    for raw in matches {
        let closes = raw.is_terminator();
        current.push(raw);
        if closes {
            sections.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

/// Apply `policy` to a stream of raw matches, keeping terminators in place.
pub fn select_sections<'t>(
    matches: impl IntoIterator<Item = RawFrame<'t>>,
    policy: SectionPolicy,
) -> Vec<RawFrame<'t>> {
    match policy {
        SectionPolicy::First => {
            let mut selected = Vec::new();
            for raw in matches {
                let closes = raw.is_terminator();
                selected.push(raw);
                if closes {
                    break;
                }
            }
            selected
        }
        SectionPolicy::Last => split_sections(matches).pop().unwrap_or_default(),
        SectionPolicy::All => matches.into_iter().collect(),
    }
}
