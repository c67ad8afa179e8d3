//! Prime ministers game - match a PM to their period in office and legacy

use crate::records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
use crate::theme::CelebrationTheme;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "name", label: "Prime Minister" },
    ColumnSpec { key: "period", label: "In Office" },
    ColumnSpec { key: "legacy", label: "Known For" },
];

const FILTERS: &[FilterFacet] = &[
    FilterFacet {
        key: "party",
        label: "Party",
        values: &["Whig", "Tory", "Conservative", "Liberal", "Labour"],
    },
    FilterFacet {
        key: "century",
        label: "Century",
        values: &["18th", "19th", "20th"],
    },
];

const RECORDS: &[MatchRecord] = &[
    MatchRecord {
        id: RecordId(1),
        facets: &["Sir Robert Walpole", "1721-1742", "The first Prime Minister"],
        tags: &[("party", "Whig"), ("century", "18th")],
    },
    MatchRecord {
        id: RecordId(2),
        facets: &["William Pitt the Younger", "1783-1801", "Youngest ever Prime Minister"],
        tags: &[("party", "Tory"), ("century", "18th")],
    },
    MatchRecord {
        id: RecordId(3),
        facets: &["Sir Robert Peel", "1841-1846", "Founded the modern police"],
        tags: &[("party", "Conservative"), ("century", "19th")],
    },
    MatchRecord {
        id: RecordId(4),
        facets: &["Benjamin Disraeli", "1874-1880", "One-nation conservatism"],
        tags: &[("party", "Conservative"), ("century", "19th")],
    },
    MatchRecord {
        id: RecordId(5),
        facets: &["William Gladstone", "1868-1894", "Four separate terms in office"],
        tags: &[("party", "Liberal"), ("century", "19th")],
    },
    MatchRecord {
        id: RecordId(6),
        facets: &["David Lloyd George", "1916-1922", "Led Britain through WWI"],
        tags: &[("party", "Liberal"), ("century", "20th")],
    },
    MatchRecord {
        id: RecordId(7),
        facets: &["Sir Winston Churchill", "1940-1945", "Led Britain through WWII"],
        tags: &[("party", "Conservative"), ("century", "20th")],
    },
    MatchRecord {
        id: RecordId(8),
        facets: &["Clement Attlee", "1945-1951", "Founded the welfare state"],
        tags: &[("party", "Labour"), ("century", "20th")],
    },
    MatchRecord {
        id: RecordId(9),
        facets: &["Harold Wilson", "1964-1970", "The Open University"],
        tags: &[("party", "Labour"), ("century", "20th")],
    },
    MatchRecord {
        id: RecordId(10),
        facets: &["Edward Heath", "1970-1974", "Took Britain into the EEC"],
        tags: &[("party", "Conservative"), ("century", "20th")],
    },
    MatchRecord {
        id: RecordId(11),
        facets: &["Margaret Thatcher", "1979-1990", "The first woman Prime Minister"],
        tags: &[("party", "Conservative"), ("century", "20th")],
    },
    MatchRecord {
        id: RecordId(12),
        facets: &["Tony Blair", "1997-2007", "Devolution and the Good Friday Agreement"],
        tags: &[("party", "Labour"), ("century", "20th")],
    },
];

pub static GAME: GameSpec = GameSpec {
    key: "prime-ministers",
    title: "Prime Ministers",
    theme: CelebrationTheme::Political,
    columns: COLUMNS,
    filters: FILTERS,
    records: RECORDS,
};
