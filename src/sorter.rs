//! Optional reordering of each session against an external name list.

use std::collections::HashMap;

use crate::session::Session;

/// Build the name-to-rank table from reference text, one name per line.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. The first
/// occurrence of a repeated name wins; blank lines are skipped.
pub fn reference_ranks(reference: &str) -> HashMap<String, i32> {
    let mut ranks = HashMap::new();
    for (i, line) in reference.lines().enumerate() {
        let name = normalize(line);
        if name.is_empty() {
            continue;
        }
        ranks.entry(name).or_insert(i as i32);
    }
    ranks
}

/// Stably reorder every session's sets by ascending reference rank.
///
/// Names absent from the table rank as -1 and end up in front, keeping
/// their original relative order. Only the order inside each session
/// changes; set contents and session order never do.
pub fn sort_sessions(sessions: &mut [Session], ranks: &HashMap<String, i32>) {
    for session in sessions {
        session
            .sets
            .sort_by_key(|set| ranks.get(&normalize(&set.name)).copied().unwrap_or(-1));
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
