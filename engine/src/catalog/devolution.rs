//! Devolved institutions game

use crate::records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
use crate::theme::CelebrationTheme;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "institution", label: "Institution" },
    ColumnSpec { key: "seat", label: "Seat" },
    ColumnSpec { key: "established", label: "Established" },
];

const FILTERS: &[FilterFacet] = &[FilterFacet {
    key: "nation",
    label: "Nation",
    values: &[
        "United Kingdom",
        "England",
        "Scotland",
        "Wales",
        "Northern Ireland",
    ],
}];

const RECORDS: &[MatchRecord] = &[
    MatchRecord {
        id: RecordId(1),
        facets: &["UK Parliament", "Palace of Westminster", "1707"],
        tags: &[("nation", "United Kingdom")],
    },
    MatchRecord {
        id: RecordId(2),
        facets: &["House of Lords", "Palace of Westminster", "Medieval origin"],
        tags: &[("nation", "United Kingdom")],
    },
    MatchRecord {
        id: RecordId(3),
        facets: &["Scottish Parliament", "Holyrood, Edinburgh", "1999"],
        tags: &[("nation", "Scotland")],
    },
    MatchRecord {
        id: RecordId(4),
        facets: &["Senedd Cymru", "Cardiff Bay", "1999"],
        tags: &[("nation", "Wales")],
    },
    MatchRecord {
        id: RecordId(5),
        facets: &["Northern Ireland Assembly", "Stormont, Belfast", "1998"],
        tags: &[("nation", "Northern Ireland")],
    },
    MatchRecord {
        id: RecordId(6),
        facets: &["Greater London Assembly", "City Hall, London", "2000"],
        tags: &[("nation", "England")],
    },
    MatchRecord {
        id: RecordId(7),
        facets: &["Tynwald", "Douglas, Isle of Man", "Oldest continuous parliament"],
        tags: &[("nation", "United Kingdom")],
    },
    MatchRecord {
        id: RecordId(8),
        facets: &["States of Jersey", "St Helier, Jersey", "Crown dependency assembly"],
        tags: &[("nation", "United Kingdom")],
    },
];

pub static GAME: GameSpec = GameSpec {
    key: "devolution",
    title: "Parliaments and Assemblies",
    theme: CelebrationTheme::Constitutional,
    columns: COLUMNS,
    filters: FILTERS,
    records: RECORDS,
};
