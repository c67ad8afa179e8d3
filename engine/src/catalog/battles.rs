//! Battles game - match a battle to its year and a key figure

use crate::records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
use crate::theme::CelebrationTheme;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "battle", label: "Battle" },
    ColumnSpec { key: "year", label: "Year" },
    ColumnSpec { key: "figure", label: "Key Figure" },
];

const FILTERS: &[FilterFacet] = &[
    FilterFacet {
        key: "era",
        label: "Era",
        values: &[
            "Medieval",
            "Early Modern",
            "Georgian",
            "Victorian",
            "Twentieth Century",
        ],
    },
    FilterFacet {
        key: "theatre",
        label: "Theatre",
        values: &["Land", "Naval", "Air"],
    },
];

const RECORDS: &[MatchRecord] = &[
    MatchRecord {
        id: RecordId(1),
        facets: &["Battle of Hastings", "1066", "William the Conqueror"],
        tags: &[("era", "Medieval"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(2),
        facets: &["Battle of Bannockburn", "1314", "Robert the Bruce"],
        tags: &[("era", "Medieval"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(3),
        facets: &["Battle of Agincourt", "1415", "Henry V"],
        tags: &[("era", "Medieval"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(4),
        facets: &["Battle of Bosworth Field", "1485", "Henry Tudor"],
        tags: &[("era", "Medieval"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(5),
        facets: &["Battle of Flodden", "1513", "James IV of Scotland"],
        tags: &[("era", "Early Modern"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(6),
        facets: &["Defeat of the Spanish Armada", "1588", "Sir Francis Drake"],
        tags: &[("era", "Early Modern"), ("theatre", "Naval")],
    },
    MatchRecord {
        id: RecordId(7),
        facets: &["Battle of Naseby", "1645", "Oliver Cromwell"],
        tags: &[("era", "Early Modern"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(8),
        facets: &["Battle of the Boyne", "1690", "William of Orange"],
        tags: &[("era", "Early Modern"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(9),
        facets: &["Battle of Culloden", "1746", "Bonnie Prince Charlie"],
        tags: &[("era", "Early Modern"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(10),
        facets: &["Battle of Trafalgar", "1805", "Admiral Nelson"],
        tags: &[("era", "Georgian"), ("theatre", "Naval")],
    },
    MatchRecord {
        id: RecordId(11),
        facets: &["Battle of Waterloo", "1815", "Duke of Wellington"],
        tags: &[("era", "Georgian"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(12),
        facets: &["Battle of Balaclava", "1854", "Lord Cardigan"],
        tags: &[("era", "Victorian"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(13),
        facets: &["Defence of Rorke's Drift", "1879", "Lieutenant Chard"],
        tags: &[("era", "Victorian"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(14),
        facets: &["Battle of the Somme", "1916", "Sir Douglas Haig"],
        tags: &[("era", "Twentieth Century"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(15),
        facets: &["Battle of Jutland", "1916", "Admiral Jellicoe"],
        tags: &[("era", "Twentieth Century"), ("theatre", "Naval")],
    },
    MatchRecord {
        id: RecordId(16),
        facets: &["Battle of Passchendaele", "1917", "Field Marshal Haig"],
        tags: &[("era", "Twentieth Century"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(17),
        facets: &["Battle of Britain", "1940", "RAF Fighter Command"],
        tags: &[("era", "Twentieth Century"), ("theatre", "Air")],
    },
    MatchRecord {
        id: RecordId(18),
        facets: &["Battle of El Alamein", "1942", "General Montgomery"],
        tags: &[("era", "Twentieth Century"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(19),
        facets: &["D-Day Normandy Landings", "1944", "General Eisenhower"],
        tags: &[("era", "Twentieth Century"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(20),
        facets: &["Battle of Monte Cassino", "1944", "General Alexander"],
        tags: &[("era", "Twentieth Century"), ("theatre", "Land")],
    },
    MatchRecord {
        id: RecordId(21),
        facets: &["Battle of Goose Green", "1982", "Colonel 'H' Jones"],
        tags: &[("era", "Twentieth Century"), ("theatre", "Land")],
    },
];

pub static GAME: GameSpec = GameSpec {
    key: "battles",
    title: "Great British Battles",
    theme: CelebrationTheme::Military,
    columns: COLUMNS,
    filters: FILTERS,
    records: RECORDS,
};
