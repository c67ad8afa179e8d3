//! Legislation game - match an act to its year and what it did

use crate::records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
use crate::theme::CelebrationTheme;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "act", label: "Act" },
    ColumnSpec { key: "year", label: "Year" },
    ColumnSpec { key: "effect", label: "What It Did" },
];

const FILTERS: &[FilterFacet] = &[
    FilterFacet {
        key: "century",
        label: "Century",
        values: &["13th", "17th", "18th", "19th", "20th"],
    },
    FilterFacet {
        key: "domain",
        label: "Domain",
        values: &["Constitutional", "Social", "Electoral"],
    },
];

const RECORDS: &[MatchRecord] = &[
    MatchRecord {
        id: RecordId(1),
        facets: &["Magna Carta", "1215", "Limited the power of the king"],
        tags: &[("century", "13th"), ("domain", "Constitutional")],
    },
    MatchRecord {
        id: RecordId(2),
        facets: &["Habeas Corpus Act", "1679", "Banned unlawful imprisonment"],
        tags: &[("century", "17th"), ("domain", "Constitutional")],
    },
    MatchRecord {
        id: RecordId(3),
        facets: &["Bill of Rights", "1689", "Confirmed the rights of Parliament"],
        tags: &[("century", "17th"), ("domain", "Constitutional")],
    },
    MatchRecord {
        id: RecordId(4),
        facets: &["Act of Union", "1707", "Joined England and Scotland"],
        tags: &[("century", "18th"), ("domain", "Constitutional")],
    },
    MatchRecord {
        id: RecordId(5),
        facets: &["Act of Union with Ireland", "1800", "Created the United Kingdom"],
        tags: &[("century", "19th"), ("domain", "Constitutional")],
    },
    MatchRecord {
        id: RecordId(6),
        facets: &["Great Reform Act", "1832", "Widened the franchise to more men"],
        tags: &[("century", "19th"), ("domain", "Electoral")],
    },
    MatchRecord {
        id: RecordId(7),
        facets: &["Abolition of Slavery Act", "1833", "Ended slavery in the Empire"],
        tags: &[("century", "19th"), ("domain", "Social")],
    },
    MatchRecord {
        id: RecordId(8),
        facets: &[
            "Representation of the People Act",
            "1918",
            "Gave some women the vote",
        ],
        tags: &[("century", "20th"), ("domain", "Electoral")],
    },
    MatchRecord {
        id: RecordId(9),
        facets: &["Equal Franchise Act", "1928", "Equal voting age for women"],
        tags: &[("century", "20th"), ("domain", "Electoral")],
    },
    MatchRecord {
        id: RecordId(10),
        facets: &["Education Act", "1944", "Free secondary education for all"],
        tags: &[("century", "20th"), ("domain", "Social")],
    },
    MatchRecord {
        id: RecordId(11),
        facets: &["National Health Service Act", "1946", "Founded the NHS"],
        tags: &[("century", "20th"), ("domain", "Social")],
    },
    MatchRecord {
        id: RecordId(12),
        facets: &["Life Peerages Act", "1958", "Created non-hereditary peers"],
        tags: &[("century", "20th"), ("domain", "Constitutional")],
    },
    MatchRecord {
        id: RecordId(13),
        facets: &["Equal Pay Act", "1970", "Equal pay for men and women"],
        tags: &[("century", "20th"), ("domain", "Social")],
    },
    MatchRecord {
        id: RecordId(14),
        facets: &["Human Rights Act", "1998", "Put the ECHR into UK law"],
        tags: &[("century", "20th"), ("domain", "Constitutional")],
    },
    MatchRecord {
        id: RecordId(15),
        facets: &["Scotland Act", "1998", "Created the Scottish Parliament"],
        tags: &[("century", "20th"), ("domain", "Constitutional")],
    },
];

pub static GAME: GameSpec = GameSpec {
    key: "legislation",
    title: "Landmark Legislation",
    theme: CelebrationTheme::Legislative,
    columns: COLUMNS,
    filters: FILTERS,
    records: RECORDS,
};
