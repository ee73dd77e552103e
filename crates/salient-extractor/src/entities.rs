//! Entity scoring by mention frequency

use salient_domain::{EntityLabel, EntityMention, FrequencyTable};
use std::collections::HashSet;
use tracing::debug;

/// Count mentions per trimmed entity text, skipping excluded labels
///
/// Labels are not part of the key: the same text seen under two different
/// non-excluded labels accumulates into one count. Mentions whose text is
/// empty after trimming are dropped.
pub fn score_entities(
    mentions: &[EntityMention],
    exclude_labels: &HashSet<EntityLabel>,
) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let mut excluded = 0usize;
    let mut blank = 0usize;

    for mention in mentions {
        if exclude_labels.contains(&mention.label) {
            excluded += 1;
            continue;
        }
        let text = mention.trimmed();
        if text.is_empty() {
            blank += 1;
            continue;
        }
        table.increment(text);
    }

    debug!(
        "Scored {} mentions into {} entities ({} excluded by label, {} blank)",
        mentions.len(),
        table.len(),
        excluded,
        blank
    );

    table
}
