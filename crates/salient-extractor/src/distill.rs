//! Distillation - dropping phrases subsumed by longer phrases
//!
//! A phrase is subsumed by another when its words appear as a contiguous run
//! of the other's words ("New York" in "New York City", but not "art" in
//! "party"). A subsumed phrase is dropped unless it is strictly more frequent
//! than the phrase containing it, in which case it evidently stands on its
//! own.
//!
//! Every comparison is made against the input table, so one call is a single
//! pass: removing a phrase never exposes a new comparison, and the outcome
//! does not depend on the order keys are visited in.

use salient_domain::FrequencyTable;
use std::collections::HashSet;
use tracing::debug;

/// Remove every phrase contained in a longer phrase that is at least as frequent
///
/// Surviving entries keep their counts and their relative order.
///
/// # Examples
///
/// ```
/// use salient_domain::FrequencyTable;
/// use salient_extractor::distill;
///
/// let table: FrequencyTable = [("New York", 3), ("New York City", 5), ("York", 1)]
///     .into_iter()
///     .collect();
///
/// let distilled = distill(&table);
/// assert_eq!(distilled.iter().collect::<Vec<_>>(), vec![("New York City", 5)]);
/// ```
pub fn distill(table: &FrequencyTable) -> FrequencyTable {
    let mut subsumed: HashSet<String> = HashSet::new();

    // Rather than test every pair of keys, enumerate the proper contiguous
    // word runs of each key and look them up.
    for (longer, longer_count) in table.iter() {
        let words: Vec<&str> = longer.split(' ').collect();
        for len in 1..words.len() {
            for run in words.windows(len) {
                let shorter = run.join(" ");
                if subsumed.contains(&shorter) {
                    continue;
                }
                if let Some(shorter_count) = table.get(&shorter) {
                    if shorter_count <= longer_count {
                        subsumed.insert(shorter);
                    }
                }
            }
        }
    }

    let mut distilled = table.clone();
    distilled.retain(|key, _| !subsumed.contains(key));

    debug!(
        "Distilled {} phrases to {} ({} subsumed)",
        table.len(),
        distilled.len(),
        subsumed.len()
    );

    distilled
}

/// Whether the words of `shorter` form a contiguous run inside `longer`
///
/// Keys are single-space joined, so this matches on word boundaries only.
/// A key never contains itself.
pub fn is_contained(shorter: &str, longer: &str) -> bool {
    if shorter == longer {
        return false;
    }
    let needle: Vec<&str> = shorter.split(' ').collect();
    let haystack: Vec<&str> = longer.split(' ').collect();
    needle.len() < haystack.len() && haystack.windows(needle.len()).any(|w| w == needle.as_slice())
}
