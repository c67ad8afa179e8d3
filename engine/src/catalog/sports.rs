//! Sporting greats game

use crate::records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
use crate::theme::CelebrationTheme;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "athlete", label: "Athlete" },
    ColumnSpec { key: "sport", label: "Sport" },
    ColumnSpec { key: "achievement", label: "Achievement" },
];

const FILTERS: &[FilterFacet] = &[FilterFacet {
    key: "era",
    label: "Era",
    values: &["Twentieth Century", "Twenty-First Century"],
}];

const RECORDS: &[MatchRecord] = &[
    MatchRecord {
        id: RecordId(1),
        facets: &["Sir Roger Bannister", "Athletics", "First four-minute mile, 1954"],
        tags: &[("era", "Twentieth Century")],
    },
    MatchRecord {
        id: RecordId(2),
        facets: &["Sir Jackie Stewart", "Motor racing", "Three Formula 1 world titles"],
        tags: &[("era", "Twentieth Century")],
    },
    MatchRecord {
        id: RecordId(3),
        facets: &["Bobby Moore", "Football", "Captained the 1966 World Cup winners"],
        tags: &[("era", "Twentieth Century")],
    },
    MatchRecord {
        id: RecordId(4),
        facets: &["Sir Ian Botham", "Cricket", "England all-round records"],
        tags: &[("era", "Twentieth Century")],
    },
    MatchRecord {
        id: RecordId(5),
        facets: &["Sir Steve Redgrave", "Rowing", "Gold at five consecutive Olympics"],
        tags: &[("era", "Twentieth Century")],
    },
    MatchRecord {
        id: RecordId(6),
        facets: &[
            "Baroness Tanni Grey-Thompson",
            "Paralympic athletics",
            "Eleven Paralympic golds",
        ],
        tags: &[("era", "Twentieth Century")],
    },
    MatchRecord {
        id: RecordId(7),
        facets: &["Dame Kelly Holmes", "Athletics", "Double gold at Athens 2004"],
        tags: &[("era", "Twenty-First Century")],
    },
    MatchRecord {
        id: RecordId(8),
        facets: &["Sir Chris Hoy", "Cycling", "Six Olympic track golds"],
        tags: &[("era", "Twenty-First Century")],
    },
    MatchRecord {
        id: RecordId(9),
        facets: &["Dame Ellen MacArthur", "Sailing", "Fastest solo circumnavigation, 2005"],
        tags: &[("era", "Twenty-First Century")],
    },
    MatchRecord {
        id: RecordId(10),
        facets: &["Sir Andy Murray", "Tennis", "Ended the 77-year Wimbledon wait"],
        tags: &[("era", "Twenty-First Century")],
    },
    MatchRecord {
        id: RecordId(11),
        facets: &["Sir Mo Farah", "Athletics", "Double-double distance golds"],
        tags: &[("era", "Twenty-First Century")],
    },
    MatchRecord {
        id: RecordId(12),
        facets: &["Sir Bradley Wiggins", "Cycling", "First British Tour de France win"],
        tags: &[("era", "Twenty-First Century")],
    },
];

pub static GAME: GameSpec = GameSpec {
    key: "sports",
    title: "Sporting Greats",
    theme: CelebrationTheme::Sporting,
    columns: COLUMNS,
    filters: FILTERS,
    records: RECORDS,
};
