//! Inventions and discoveries game

use crate::records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
use crate::theme::CelebrationTheme;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "invention", label: "Invention" },
    ColumnSpec { key: "inventor", label: "Inventor" },
    ColumnSpec { key: "year", label: "Year" },
];

const FILTERS: &[FilterFacet] = &[FilterFacet {
    key: "field",
    label: "Field",
    values: &["Communications", "Medicine", "Engineering", "Science"],
}];

const RECORDS: &[MatchRecord] = &[
    MatchRecord {
        id: RecordId(1),
        facets: &["Telephone", "Alexander Graham Bell", "1876"],
        tags: &[("field", "Communications")],
    },
    MatchRecord {
        id: RecordId(2),
        facets: &["Television", "John Logie Baird", "1926"],
        tags: &[("field", "Communications")],
    },
    MatchRecord {
        id: RecordId(3),
        facets: &["Penicillin", "Sir Alexander Fleming", "1928"],
        tags: &[("field", "Medicine")],
    },
    MatchRecord {
        id: RecordId(4),
        facets: &["Radar", "Sir Robert Watson-Watt", "1935"],
        tags: &[("field", "Engineering")],
    },
    MatchRecord {
        id: RecordId(5),
        facets: &["Universal computing machine", "Alan Turing", "1936"],
        tags: &[("field", "Science")],
    },
    MatchRecord {
        id: RecordId(6),
        facets: &["Jet engine", "Sir Frank Whittle", "1937"],
        tags: &[("field", "Engineering")],
    },
    MatchRecord {
        id: RecordId(7),
        facets: &["Structure of DNA", "Crick, Watson and Franklin", "1953"],
        tags: &[("field", "Science")],
    },
    MatchRecord {
        id: RecordId(8),
        facets: &["Hovercraft", "Sir Christopher Cockerell", "1956"],
        tags: &[("field", "Engineering")],
    },
    MatchRecord {
        id: RecordId(9),
        facets: &["Cash-dispensing machine", "James Goodfellow", "1966"],
        tags: &[("field", "Engineering")],
    },
    MatchRecord {
        id: RecordId(10),
        facets: &["IVF therapy", "Edwards and Steptoe", "1978"],
        tags: &[("field", "Medicine")],
    },
    MatchRecord {
        id: RecordId(11),
        facets: &["World Wide Web", "Sir Tim Berners-Lee", "1989"],
        tags: &[("field", "Communications")],
    },
    MatchRecord {
        id: RecordId(12),
        facets: &["Cloning of Dolly the sheep", "Sir Ian Wilmut's team", "1996"],
        tags: &[("field", "Science")],
    },
];

pub static GAME: GameSpec = GameSpec {
    key: "inventions",
    title: "Inventions and Discoveries",
    theme: CelebrationTheme::Scientific,
    columns: COLUMNS,
    filters: FILTERS,
    records: RECORDS,
};
