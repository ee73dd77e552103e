//! N-gram counting with boundary stoplisting

use crate::document::Document;
use crate::normalize::render;
use crate::range::GramRange;
use salient_domain::traits::LinguisticAnalyzer;
use salient_domain::{FrequencyTable, StopList};
use tracing::debug;

/// Count every qualifying n-gram window for each length in `range`
///
/// Windows come from the analyzer's `ngrams`, through the document cache.
/// Their tokens are rendered to display form before use. A window qualifies when
/// neither its first nor its last token is in `stoplist`; interior tokens are
/// never checked. Qualifying windows are joined with single spaces and every
/// length accumulates into the same table. Lengths are visited in ascending
/// order, which fixes the first-seen order used to break ranking ties.
///
/// The sum of counts in the result equals the number of qualifying windows.
pub fn count_ngrams<A: LinguisticAnalyzer>(
    document: &Document<A>,
    range: &GramRange,
    stoplist: &StopList,
) -> FrequencyTable {
    let mut table = FrequencyTable::new();

    for n in range.iter() {
        let mut qualifying = 0usize;
        let grams = document.ngrams(n);
        for window in grams.iter() {
            let rendered: Vec<String> = window
                .iter()
                .map(|token| render(token).into_string())
                .collect();

            let (Some(first), Some(last)) = (rendered.first(), rendered.last()) else {
                continue;
            };
            if stoplist.contains(first) || stoplist.contains(last) {
                continue;
            }

            table.increment(rendered.join(" "));
            qualifying += 1;
        }
        debug!("{}-grams: {} qualifying windows", n, qualifying);
    }

    table
}
