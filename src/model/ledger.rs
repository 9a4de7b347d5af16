use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::config::AppConfig;

/// Upper bound for a single logged quantity
pub const MAX_QUANTITY: f64 = 10_000.0;

/// One accepted inventory count. Immutable after creation; only ever moved
/// between a ledger's `logs` and `undone` stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub quantity: f64,
    pub unit: String,
}

/// Per-(location, item) log/undone stack pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Accepted entries, oldest first
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    /// Undone entries, most recently undone last
    #[serde(default)]
    pub undone: Vec<LogEntry>,
}

impl Ledger {
    /// Append a new entry. A fresh edit discards any redo history.
    pub fn append(&mut self, quantity: f64, unit: &str) {
        self.logs.push(LogEntry {
            quantity,
            unit: unit.to_string(),
        });
        self.undone.clear();
    }

    /// Move the most recent log onto the undone stack. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.logs.pop() {
            Some(entry) => {
                self.undone.push(entry);
                true
            }
            None => false,
        }
    }

    /// Re-append the most recently undone entry. Returns false when there is
    /// nothing to redo. Redo appends at the end of `logs`, single-step LIFO.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(entry) => {
                self.logs.push(entry);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty() && self.undone.is_empty()
    }
}

/// The full persisted state: location id -> item name -> ledger.
/// IndexMap keeps iteration deterministic in config order after reconcile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub locations: IndexMap<String, IndexMap<String, Ledger>>,
}

impl Snapshot {
    /// Blank snapshot: every configured (location, item) gets an empty ledger
    pub fn blank(config: &AppConfig) -> Self {
        let mut locations = IndexMap::new();
        for loc in &config.locations {
            let mut items = IndexMap::new();
            for item in config.catalog_items() {
                items.insert(item.to_string(), Ledger::default());
            }
            locations.insert(loc.id.clone(), items);
        }
        Snapshot { locations }
    }

    /// Align a loaded snapshot with the live catalog: stored items no longer
    /// in the catalog are dropped, catalog items missing from storage start
    /// blank, and the location set is forced to the configured one.
    pub fn reconcile(self, config: &AppConfig) -> Self {
        let mut reconciled = Snapshot::blank(config);
        for (loc_id, items) in self.locations {
            let Some(live) = reconciled.locations.get_mut(&loc_id) else {
                continue;
            };
            for (name, ledger) in items {
                if let Some(slot) = live.get_mut(&name) {
                    *slot = ledger;
                }
            }
        }
        reconciled
    }

    pub fn ledger(&self, location: &str, item: &str) -> Option<&Ledger> {
        self.locations.get(location)?.get(item)
    }

    pub fn ledger_mut(&mut self, location: &str, item: &str) -> Option<&mut Ledger> {
        self.locations.get_mut(location)?.get_mut(item)
    }

    /// Append an already-validated quantity. Unknown (location, item) pairs
    /// are a no-op; reconcile guarantees configured pairs exist.
    pub fn append(&mut self, location: &str, item: &str, quantity: f64, unit: &str) -> bool {
        match self.ledger_mut(location, item) {
            Some(ledger) => {
                ledger.append(quantity, unit);
                true
            }
            None => false,
        }
    }

    pub fn undo(&mut self, location: &str, item: &str) -> bool {
        self.ledger_mut(location, item)
            .is_some_and(|ledger| ledger.undo())
    }

    pub fn redo(&mut self, location: &str, item: &str) -> bool {
        self.ledger_mut(location, item)
            .is_some_and(|ledger| ledger.redo())
    }

    /// Reset every ledger in every location. Irreversible; callers gate this
    /// behind an explicit confirmation.
    pub fn clear_all(&mut self) {
        for items in self.locations.values_mut() {
            for ledger in items.values_mut() {
                *ledger = Ledger::default();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locations
            .values()
            .all(|items| items.values().all(Ledger::is_empty))
    }
}

/// Parse an operator-typed quantity. None for anything that is not a finite
/// positive number within range; callers treat that as a silent no-op.
pub fn parse_quantity(input: &str) -> Option<f64> {
    let qty: f64 = input.trim().parse().ok()?;
    if qty.is_finite() && qty > 0.0 && qty <= MAX_QUANTITY {
        Some(qty)
    } else {
        None
    }
}
