//! Famous places game

use crate::records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
use crate::theme::CelebrationTheme;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "landmark", label: "Landmark" },
    ColumnSpec { key: "location", label: "Location" },
];

const FILTERS: &[FilterFacet] = &[
    FilterFacet {
        key: "nation",
        label: "Nation",
        values: &["England", "Scotland", "Wales", "Northern Ireland"],
    },
    FilterFacet {
        key: "kind",
        label: "Kind",
        values: &["Monument", "Castle", "Natural"],
    },
];

const RECORDS: &[MatchRecord] = &[
    MatchRecord {
        id: RecordId(1),
        facets: &["Big Ben", "Houses of Parliament, London"],
        tags: &[("nation", "England"), ("kind", "Monument")],
    },
    MatchRecord {
        id: RecordId(2),
        facets: &["Stonehenge", "Salisbury Plain, Wiltshire"],
        tags: &[("nation", "England"), ("kind", "Monument")],
    },
    MatchRecord {
        id: RecordId(3),
        facets: &["White Cliffs of Dover", "Kent coast"],
        tags: &[("nation", "England"), ("kind", "Natural")],
    },
    MatchRecord {
        id: RecordId(4),
        facets: &["Lake District", "Cumbria"],
        tags: &[("nation", "England"), ("kind", "Natural")],
    },
    MatchRecord {
        id: RecordId(5),
        facets: &["Hadrian's Wall", "Northern England"],
        tags: &[("nation", "England"), ("kind", "Monument")],
    },
    MatchRecord {
        id: RecordId(6),
        facets: &["Eden Project", "Cornwall"],
        tags: &[("nation", "England"), ("kind", "Monument")],
    },
    MatchRecord {
        id: RecordId(7),
        facets: &["Edinburgh Castle", "Castle Rock, Edinburgh"],
        tags: &[("nation", "Scotland"), ("kind", "Castle")],
    },
    MatchRecord {
        id: RecordId(8),
        facets: &["Loch Lomond", "The Trossachs, Scotland"],
        tags: &[("nation", "Scotland"), ("kind", "Natural")],
    },
    MatchRecord {
        id: RecordId(9),
        facets: &["Snowdonia", "Gwynedd, North Wales"],
        tags: &[("nation", "Wales"), ("kind", "Natural")],
    },
    MatchRecord {
        id: RecordId(10),
        facets: &["Conwy Castle", "Conwy, North Wales"],
        tags: &[("nation", "Wales"), ("kind", "Castle")],
    },
    MatchRecord {
        id: RecordId(11),
        facets: &["Giant's Causeway", "County Antrim coast"],
        tags: &[("nation", "Northern Ireland"), ("kind", "Natural")],
    },
    MatchRecord {
        id: RecordId(12),
        facets: &["Carrickfergus Castle", "County Antrim"],
        tags: &[("nation", "Northern Ireland"), ("kind", "Castle")],
    },
];

pub static GAME: GameSpec = GameSpec {
    key: "places",
    title: "Famous Places",
    theme: CelebrationTheme::Geographic,
    columns: COLUMNS,
    filters: FILTERS,
    records: RECORDS,
};
