//! Gram-length ranges

use crate::error::ExtractorError;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::str::FromStr;

/// Longest gram length accepted
pub const MAX_GRAM_LENGTH: usize = 64;

/// Non-empty set of positive gram lengths, iterated in ascending order
///
/// Every length lies in `1..=MAX_GRAM_LENGTH`.
///
/// # Examples
///
/// ```
/// use salient_extractor::GramRange;
///
/// let range: GramRange = "2-4".parse().unwrap();
/// assert_eq!(range.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
///
/// assert!(GramRange::new([]).is_err());
/// assert!(GramRange::new([0, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GramRange {
    lengths: BTreeSet<usize>,
}

impl GramRange {
    /// Build a range from explicit lengths; duplicates collapse
    pub fn new(lengths: impl IntoIterator<Item = usize>) -> Result<Self, ExtractorError> {
        let lengths: BTreeSet<usize> = lengths.into_iter().collect();
        if lengths.is_empty() {
            return Err(ExtractorError::InvalidArgument(
                "gram range must not be empty".to_string(),
            ));
        }
        if lengths.contains(&0) {
            return Err(ExtractorError::InvalidArgument(
                "gram lengths must be positive".to_string(),
            ));
        }
        if let Some(&longest) = lengths.last().filter(|&&n| n > MAX_GRAM_LENGTH) {
            return Err(too_long(longest));
        }
        Ok(Self { lengths })
    }

    /// Every length from `min` to `max` inclusive
    pub fn span(min: usize, max: usize) -> Result<Self, ExtractorError> {
        if min > max {
            return Err(ExtractorError::InvalidArgument(format!(
                "gram range {}-{} is empty",
                min, max
            )));
        }
        if max > MAX_GRAM_LENGTH {
            return Err(too_long(max));
        }
        Self::new(min..=max)
    }

    /// Lengths in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.lengths.iter().copied()
    }

    /// Shortest length
    pub fn min(&self) -> usize {
        self.lengths.first().copied().unwrap_or_default()
    }

    /// Longest length
    pub fn max(&self) -> usize {
        self.lengths.last().copied().unwrap_or_default()
    }

    /// Number of distinct lengths
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Whether the range has no lengths
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

fn too_long(length: usize) -> ExtractorError {
    ExtractorError::InvalidArgument(format!(
        "gram length {} exceeds the maximum of {}",
        length, MAX_GRAM_LENGTH
    ))
}

impl TryFrom<Range<usize>> for GramRange {
    type Error = ExtractorError;

    fn try_from(range: Range<usize>) -> Result<Self, Self::Error> {
        if range.end > MAX_GRAM_LENGTH + 1 {
            return Err(too_long(range.end - 1));
        }
        Self::new(range)
    }
}

impl TryFrom<RangeInclusive<usize>> for GramRange {
    type Error = ExtractorError;

    fn try_from(range: RangeInclusive<usize>) -> Result<Self, Self::Error> {
        if *range.end() > MAX_GRAM_LENGTH {
            return Err(too_long(*range.end()));
        }
        Self::new(range)
    }
}

impl TryFrom<&[usize]> for GramRange {
    type Error = ExtractorError;

    fn try_from(lengths: &[usize]) -> Result<Self, Self::Error> {
        Self::new(lengths.iter().copied())
    }
}

/// Parses `"2,3"`, `"2-4"` (inclusive) or a single `"3"`
impl FromStr for GramRange {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim().parse::<usize>().map_err(|_| {
                ExtractorError::InvalidArgument(format!("invalid gram length: '{}'", part.trim()))
            })
        };

        if let Some((min, max)) = s.split_once('-') {
            return Self::span(parse(min)?, parse(max)?);
        }

        let lengths = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(lengths)
    }
}

impl fmt::Display for GramRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.lengths.iter().map(|n| n.to_string()).collect();
        f.write_str(&parts.join(","))
    }
}
