//! Static Russian vocabulary for time expressions.
//!
//! Words are stored in normalized form: lower-case, `ё` written as `е`,
//! single spaces between the parts of compound numerals.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Hour words and the hour (0–23) they denote.
///
/// Ordinal genitive forms ("третьего", "седьмого") name the hour *in
/// progress*, as in "половина третьего" (half-way into the third hour,
/// 02:30). They therefore map to one less than their ordinal value.
const HOUR_WORD_ENTRIES: &[(&str, u8)] = &[
    // Nominative cardinals
    ("ноль", 0),
    ("нуль", 0),
    ("полночь", 0),
    ("час", 1),
    ("один", 1),
    ("два", 2),
    ("три", 3),
    ("четыре", 4),
    ("пять", 5),
    ("шесть", 6),
    ("семь", 7),
    ("восемь", 8),
    ("девять", 9),
    ("десять", 10),
    ("одиннадцать", 11),
    ("двенадцать", 12),
    ("полдень", 12),
    ("тринадцать", 13),
    ("четырнадцать", 14),
    ("пятнадцать", 15),
    ("шестнадцать", 16),
    ("семнадцать", 17),
    ("восемнадцать", 18),
    ("девятнадцать", 19),
    ("двадцать", 20),
    ("двадцать один", 21),
    ("двадцать два", 22),
    ("двадцать три", 23),
    // Genitive cardinals ("около двух", "к семи")
    ("часа", 1),
    ("одного", 1),
    ("двух", 2),
    ("трех", 3),
    ("четырех", 4),
    ("пяти", 5),
    ("шести", 6),
    ("семи", 7),
    ("восьми", 8),
    ("девяти", 9),
    ("десяти", 10),
    ("одиннадцати", 11),
    ("двенадцати", 12),
    ("тринадцати", 13),
    ("четырнадцати", 14),
    ("пятнадцати", 15),
    ("шестнадцати", 16),
    ("семнадцати", 17),
    ("восемнадцати", 18),
    ("девятнадцати", 19),
    ("двадцати", 20),
    ("двадцати одного", 21),
    ("двадцати двух", 22),
    ("двадцати трех", 23),
    // Ordinal genitives: the hour in progress
    ("первого", 0),
    ("второго", 1),
    ("третьего", 2),
    ("четвертого", 3),
    ("пятого", 4),
    ("шестого", 5),
    ("седьмого", 6),
    ("восьмого", 7),
    ("девятого", 8),
    ("десятого", 9),
    ("одиннадцатого", 10),
    ("двенадцатого", 11),
    ("тринадцатого", 12),
    ("четырнадцатого", 13),
    ("пятнадцатого", 14),
    ("шестнадцатого", 15),
    ("семнадцатого", 16),
    ("восемнадцатого", 17),
    ("девятнадцатого", 18),
    ("двадцатого", 19),
    ("двадцать первого", 20),
    ("двадцать второго", 21),
    ("двадцать третьего", 22),
    ("двадцать четвертого", 23),
];

/// Fractional-hour idioms and their minute offset into the named hour.
///
/// Every spelling variant is a literal synonym; there is no fuzzy matching.
const FRACTION_ENTRIES: &[(&str, u16)] = &[
    ("половина", 30),
    ("половине", 30),
    ("половину", 30),
    ("полвина", 30),
    ("пол", 30),
    ("четверть", 15),
    ("три четверти", 45),
];

static STANDARD_HOURS: Lazy<HourWordTable> = Lazy::new(|| HourWordTable::new(HOUR_WORD_ENTRIES));

static STANDARD_FRACTIONS: Lazy<FractionalHourTable> =
    Lazy::new(|| FractionalHourTable::new(FRACTION_ENTRIES));

/// Read-only mapping from Russian hour words to an hour of the day.
#[derive(Debug, Clone)]
pub struct HourWordTable {
    words: HashMap<&'static str, u8>,
}

impl HourWordTable {
    /// Build a table from `(word, hour)` pairs.
    ///
    /// Pairs with an hour above 23 are ignored.
    #[must_use]
    pub fn new(entries: &[(&'static str, u8)]) -> Self {
        let words = entries
            .iter()
            .filter(|(_, hour)| *hour <= 23)
            .map(|&(word, hour)| (word, hour))
            .collect();
        Self { words }
    }

    /// The built-in table shared by every parser.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_HOURS
    }

    /// Resolve a normalized word (or compound numeral) to its hour.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<u8> {
        self.words.get(word).copied()
    }

    /// Number of known word forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Read-only mapping from fractional-hour idioms to a minute offset.
#[derive(Debug, Clone)]
pub struct FractionalHourTable {
    // Longest idiom first, so "половина" wins over its prefix "пол".
    idioms: Vec<(&'static str, u16)>,
}

impl FractionalHourTable {
    /// Build a table from `(idiom, minutes)` pairs.
    #[must_use]
    pub fn new(entries: &[(&'static str, u16)]) -> Self {
        let mut idioms = entries.to_vec();
        idioms.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        Self { idioms }
    }

    /// The built-in table shared by every parser.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_FRACTIONS
    }

    /// Offset for an exact idiom.
    #[must_use]
    pub fn offset(&self, idiom: &str) -> Option<u16> {
        self.idioms
            .iter()
            .find(|(known, _)| *known == idiom)
            .map(|&(_, minutes)| minutes)
    }

    /// Split a leading idiom off `text`.
    ///
    /// Returns the offset and the remainder with any separating spaces or
    /// hyphens removed. The remainder may be empty.
    #[must_use]
    pub fn split_leading<'t>(&self, text: &'t str) -> Option<(u16, &'t str)> {
        self.idioms.iter().find_map(|&(idiom, minutes)| {
            text.strip_prefix(idiom)
                .map(|rest| (minutes, rest.trim_start_matches([' ', '-'])))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_table_covers_every_hour() {
        let table = HourWordTable::standard();
        for hour in 0..=23u8 {
            assert!(
                HOUR_WORD_ENTRIES
                    .iter()
                    .any(|(word, h)| *h == hour && table.lookup(word) == Some(hour)),
                "no word for hour {hour}"
            );
        }
    }

    #[test]
    fn test_hour_table_compounds() {
        let table = HourWordTable::standard();
        assert_eq!(table.lookup("двадцать один"), Some(21));
        assert_eq!(table.lookup("двадцать два"), Some(22));
        assert_eq!(table.lookup("двадцать три"), Some(23));
        assert_eq!(table.lookup("двадцать"), Some(20));
    }

    #[test]
    fn test_ordinals_name_hour_in_progress() {
        let table = HourWordTable::standard();
        assert_eq!(table.lookup("третьего"), Some(2));
        assert_eq!(table.lookup("седьмого"), Some(6));
        assert_eq!(table.lookup("первого"), Some(0));
        assert_eq!(table.lookup("двадцать четвертого"), Some(23));
    }

    #[test]
    fn test_hour_table_rejects_out_of_range_entries() {
        let table = HourWordTable::new(&[("семь", 7), ("сто", 100)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("сто"), None);
    }

    #[test]
    fn test_fraction_offsets() {
        let table = FractionalHourTable::standard();
        assert_eq!(table.offset("половина"), Some(30));
        assert_eq!(table.offset("полвина"), Some(30));
        assert_eq!(table.offset("пол"), Some(30));
        assert_eq!(table.offset("четверть"), Some(15));
        assert_eq!(table.offset("три четверти"), Some(45));
        assert_eq!(table.offset("треть"), None);
    }

    #[test]
    fn test_split_prefers_longest_idiom() {
        let table = FractionalHourTable::standard();
        assert_eq!(table.split_leading("половина третьего"), Some((30, "третьего")));
        assert_eq!(table.split_leading("полтретьего"), Some((30, "третьего")));
        assert_eq!(table.split_leading("пол-третьего"), Some((30, "третьего")));
        assert_eq!(table.split_leading("три четверти восьмого"), Some((45, "восьмого")));
        assert_eq!(table.split_leading("семь"), None);
    }
}
