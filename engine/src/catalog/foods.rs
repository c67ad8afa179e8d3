//! Traditional foods game - the two-column variant

use crate::records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
use crate::theme::CelebrationTheme;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "dish", label: "Dish" },
    ColumnSpec { key: "description", label: "Description" },
];

const FILTERS: &[FilterFacet] = &[FilterFacet {
    key: "nation",
    label: "Nation",
    values: &["England", "Scotland", "Wales", "Northern Ireland"],
}];

const RECORDS: &[MatchRecord] = &[
    MatchRecord {
        id: RecordId(1),
        facets: &["Roast beef", "Served with Yorkshire pudding on Sundays"],
        tags: &[("nation", "England")],
    },
    MatchRecord {
        id: RecordId(2),
        facets: &["Fish and chips", "Battered fish with fried potatoes"],
        tags: &[("nation", "England")],
    },
    MatchRecord {
        id: RecordId(3),
        facets: &["Haggis", "Sheep offal cooked with oatmeal in a casing"],
        tags: &[("nation", "Scotland")],
    },
    MatchRecord {
        id: RecordId(4),
        facets: &["Shortbread", "Buttery biscuit traditionally served at Hogmanay"],
        tags: &[("nation", "Scotland")],
    },
    MatchRecord {
        id: RecordId(5),
        facets: &["Welsh cakes", "Griddle cakes with dried fruit and spices"],
        tags: &[("nation", "Wales")],
    },
    MatchRecord {
        id: RecordId(6),
        facets: &["Cawl", "Slow-cooked lamb and leek broth"],
        tags: &[("nation", "Wales")],
    },
    MatchRecord {
        id: RecordId(7),
        facets: &["Laverbread", "Seaweed delicacy eaten at breakfast"],
        tags: &[("nation", "Wales")],
    },
    MatchRecord {
        id: RecordId(8),
        facets: &["Ulster fry", "Fried breakfast with soda and potato bread"],
        tags: &[("nation", "Northern Ireland")],
    },
    MatchRecord {
        id: RecordId(9),
        facets: &["Irish stew", "Lamb stewed with potatoes and onions"],
        tags: &[("nation", "Northern Ireland")],
    },
    MatchRecord {
        id: RecordId(10),
        facets: &["Cream tea", "Scones with jam and clotted cream"],
        tags: &[("nation", "England")],
    },
];

pub static GAME: GameSpec = GameSpec {
    key: "foods",
    title: "Traditional Foods",
    theme: CelebrationTheme::Culinary,
    columns: COLUMNS,
    filters: FILTERS,
    records: RECORDS,
};
