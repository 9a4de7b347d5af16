use indexmap::IndexMap;
use serde::Serialize;

use crate::model::ledger::{Ledger, LogEntry};
use crate::report::UnitTotals;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EntryJson {
    pub quantity: f64,
    pub unit: String,
}

#[derive(Serialize)]
pub struct LedgerJson {
    pub location: String,
    pub item: String,
    pub logs: Vec<EntryJson>,
    pub undone: Vec<EntryJson>,
}

#[derive(Serialize)]
pub struct ItemRowJson {
    pub name: String,
    pub section: String,
    /// Per-location unit totals, empty maps omitted
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub totals: IndexMap<String, UnitTotals>,
}

#[derive(Serialize)]
pub struct ReportJson {
    pub date: String,
    pub supplier: String,
    /// Item name -> unit totals, catalog order
    pub items: IndexMap<String, UnitTotals>,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn entry_to_json(entry: &LogEntry) -> EntryJson {
    EntryJson {
        quantity: entry.quantity,
        unit: entry.unit.clone(),
    }
}

pub fn ledger_to_json(location: &str, item: &str, ledger: &Ledger) -> LedgerJson {
    LedgerJson {
        location: location.to_string(),
        item: item.to_string(),
        logs: ledger.logs.iter().map(entry_to_json).collect(),
        undone: ledger.undone.iter().map(entry_to_json).collect(),
    }
}
