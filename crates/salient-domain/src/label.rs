//! Label module - the vocabulary of named-entity categories

use std::fmt;

/// Category attached to an entity mention by the analyzer
///
/// The fixed vocabulary mirrors the OntoNotes label set used by most
/// statistical recognizers. Labels outside the vocabulary are carried as
/// [`EntityLabel::Other`] so that callers can still name them in an
/// exclusion set; they simply never match a mention unless an analyzer
/// emits the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// People, including fictional
    Person,
    /// Nationalities, religious or political groups
    Norp,
    /// Buildings, airports, highways, bridges
    Facility,
    /// Companies, agencies, institutions
    Org,
    /// Countries, cities, states
    Gpe,
    /// Non-GPE locations, mountain ranges, bodies of water
    Loc,
    /// Objects, vehicles, foods (not services)
    Product,
    /// Named hurricanes, battles, wars, sports events
    Event,
    /// Titles of books, songs
    WorkOfArt,
    /// Named documents made into laws
    Law,
    /// Any named language
    Language,
    /// Absolute or relative dates or periods
    Date,
    /// Times smaller than a day
    Time,
    /// Percentage, including "%"
    Percent,
    /// Monetary values, including unit
    Money,
    /// Measurements, as of weight or distance
    Quantity,
    /// "first", "second", etc.
    Ordinal,
    /// Numerals that do not fall under another type
    Cardinal,
    /// A label outside the known vocabulary (stored upper-cased)
    Other(String),
}

impl EntityLabel {
    /// Every label in the known vocabulary
    pub const KNOWN: [EntityLabel; 18] = [
        EntityLabel::Person,
        EntityLabel::Norp,
        EntityLabel::Facility,
        EntityLabel::Org,
        EntityLabel::Gpe,
        EntityLabel::Loc,
        EntityLabel::Product,
        EntityLabel::Event,
        EntityLabel::WorkOfArt,
        EntityLabel::Law,
        EntityLabel::Language,
        EntityLabel::Date,
        EntityLabel::Time,
        EntityLabel::Percent,
        EntityLabel::Money,
        EntityLabel::Quantity,
        EntityLabel::Ordinal,
        EntityLabel::Cardinal,
    ];

    /// Get the canonical label name
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Facility => "FACILITY",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Event => "EVENT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Law => "LAW",
            EntityLabel::Language => "LANGUAGE",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Other(name) => name,
        }
    }

    /// Parse a label name, case-insensitively
    ///
    /// Never fails: unrecognized names become [`EntityLabel::Other`].
    /// `FAC` and `ORGANIZATION`/`LOCATION` are accepted as aliases.
    ///
    /// # Examples
    ///
    /// ```
    /// use salient_domain::EntityLabel;
    ///
    /// assert_eq!(EntityLabel::parse("gpe"), EntityLabel::Gpe);
    /// assert_eq!(EntityLabel::parse("work-of-art"), EntityLabel::WorkOfArt);
    /// assert!(!EntityLabel::parse("SPECIES").is_known());
    /// ```
    pub fn parse(s: &str) -> Self {
        let upper = s.trim().to_uppercase().replace('-', "_");
        match upper.as_str() {
            "PERSON" => EntityLabel::Person,
            "NORP" => EntityLabel::Norp,
            "FACILITY" | "FAC" => EntityLabel::Facility,
            "ORG" | "ORGANIZATION" => EntityLabel::Org,
            "GPE" => EntityLabel::Gpe,
            "LOC" | "LOCATION" => EntityLabel::Loc,
            "PRODUCT" => EntityLabel::Product,
            "EVENT" => EntityLabel::Event,
            "WORK_OF_ART" => EntityLabel::WorkOfArt,
            "LAW" => EntityLabel::Law,
            "LANGUAGE" => EntityLabel::Language,
            "DATE" => EntityLabel::Date,
            "TIME" => EntityLabel::Time,
            "PERCENT" => EntityLabel::Percent,
            "MONEY" => EntityLabel::Money,
            "QUANTITY" => EntityLabel::Quantity,
            "ORDINAL" => EntityLabel::Ordinal,
            "CARDINAL" => EntityLabel::Cardinal,
            _ => EntityLabel::Other(upper),
        }
    }

    /// Whether the label belongs to the fixed vocabulary
    pub fn is_known(&self) -> bool {
        !matches!(self, EntityLabel::Other(_))
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip_through_names() {
        for label in EntityLabel::KNOWN.iter() {
            assert_eq!(&EntityLabel::parse(label.as_str()), label);
            assert!(label.is_known());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(EntityLabel::parse("person"), EntityLabel::Person);
        assert_eq!(EntityLabel::parse(" Org "), EntityLabel::Org);
        assert_eq!(EntityLabel::parse("fac"), EntityLabel::Facility);
    }

    #[test]
    fn test_unknown_label_is_preserved_upper_cased() {
        let label = EntityLabel::parse("species");
        assert_eq!(label, EntityLabel::Other("SPECIES".to_string()));
        assert_eq!(label.to_string(), "SPECIES");
        assert!(!label.is_known());
    }
}
