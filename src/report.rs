//! Consolidated supplier-order report: all logged quantities across every
//! location, grouped per item by unit, emitted in catalog order.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::model::config::AppConfig;
use crate::model::ledger::{Ledger, Snapshot};

/// Per-item totals: unit -> summed quantity, units in first-seen order
pub type UnitTotals = IndexMap<String, f64>;

/// Sum every log entry across all locations into item -> unit -> total.
/// Location-agnostic on purpose: the output is one consolidated order.
pub fn aggregate(snapshot: &Snapshot) -> IndexMap<String, UnitTotals> {
    let mut combined: IndexMap<String, UnitTotals> = IndexMap::new();
    for items in snapshot.locations.values() {
        for (name, ledger) in items {
            for log in &ledger.logs {
                let totals = combined.entry(name.clone()).or_default();
                *totals.entry(log.unit.clone()).or_insert(0.0) += log.quantity;
            }
        }
    }
    combined
}

/// Format totals as `3 case + 1.5 lbs`, preserving unit insertion order
pub fn format_totals(totals: &UnitTotals) -> String {
    totals
        .iter()
        .map(|(unit, qty)| format!("{} {}", qty, unit))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Summary string for one ledger's accepted logs, shown in grid cells.
/// Empty string when nothing is logged.
pub fn summarize_ledger(ledger: &Ledger) -> String {
    let mut totals = UnitTotals::new();
    for log in &ledger.logs {
        *totals.entry(log.unit.clone()).or_insert(0.0) += log.quantity;
    }
    format_totals(&totals)
}

/// Generate the order text for the given date. Items with nothing logged in
/// either location are omitted; everything else prints in catalog order.
pub fn generate(snapshot: &Snapshot, config: &AppConfig, date: NaiveDate) -> String {
    let combined = aggregate(snapshot);
    let mut output = format!(
        "Inventory {}\n\n{}:\n",
        date.format("%-m/%-d/%Y"),
        config.supplier
    );
    for item in config.catalog_items() {
        if let Some(totals) = combined.get(item) {
            output.push_str(&format!("{}:  {}\n", item, format_totals(totals)));
        }
    }
    output
}

/// Generate the report for today's date
pub fn generate_today(snapshot: &Snapshot, config: &AppConfig) -> String {
    generate(snapshot, config, chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    #[test]
    fn same_item_and_unit_sums_across_locations() {
        let config = AppConfig::default();
        let mut snapshot = Snapshot::blank(&config);
        snapshot.append("foodtruck", "Tomatoes", 3.0, "case");
        snapshot.append("cr", "Tomatoes", 2.0, "case");

        let text = generate(&snapshot, &config, date());
        assert!(text.contains("Tomatoes:  5 case\n"), "got:\n{text}");
    }

    #[test]
    fn units_print_in_first_seen_order_not_sorted() {
        let config = AppConfig::default();
        let mut snapshot = Snapshot::blank(&config);
        snapshot.append("foodtruck", "Lettuce", 1.0, "lbs");
        snapshot.append("foodtruck", "Lettuce", 2.0, "qts");

        let text = generate(&snapshot, &config, date());
        assert!(text.contains("Lettuce:  1 lbs + 2 qts\n"), "got:\n{text}");
    }

    #[test]
    fn items_without_logs_are_omitted() {
        let config = AppConfig::default();
        let mut snapshot = Snapshot::blank(&config);
        snapshot.append("cr", "Limes", 4.0, "lbs");
        // undone-only ledgers count as empty
        snapshot.append("cr", "Avos", 1.0, "case");
        snapshot.undo("cr", "Avos");

        let text = generate(&snapshot, &config, date());
        assert!(text.contains("Limes:"));
        assert!(!text.contains("Avos:"));
        assert!(!text.contains("Tomatoes:"));
    }

    #[test]
    fn lines_follow_catalog_order_not_log_order() {
        let config = AppConfig::default();
        let mut snapshot = Snapshot::blank(&config);
        // logged in reverse catalog order
        snapshot.append("foodtruck", "Jalps", 1.0, "lbs");
        snapshot.append("foodtruck", "Tomatoes", 1.0, "case");
        snapshot.append("foodtruck", "Chorizo", 1.0, "case");

        let text = generate(&snapshot, &config, date());
        let chorizo = text.find("Chorizo:").unwrap();
        let tomatoes = text.find("Tomatoes:").unwrap();
        let jalps = text.find("Jalps:").unwrap();
        assert!(chorizo < tomatoes && tomatoes < jalps);
    }

    #[test]
    fn header_has_supplier_and_date() {
        let config = AppConfig::default();
        let snapshot = Snapshot::blank(&config);
        let text = generate(&snapshot, &config, date());
        assert_eq!(text, "Inventory 8/26/2026\n\nUS Foods:\n");
    }

    #[test]
    fn aggregation_is_commutative_across_locations() {
        let config = AppConfig::default();
        let mut forward = Snapshot::blank(&config);
        forward.append("foodtruck", "Peppers", 3.0, "lbs");
        forward.append("cr", "Peppers", 4.5, "lbs");

        let mut reversed = Snapshot::blank(&config);
        reversed.append("cr", "Peppers", 4.5, "lbs");
        reversed.append("foodtruck", "Peppers", 3.0, "lbs");

        let a = aggregate(&forward);
        let b = aggregate(&reversed);
        assert_eq!(a.get("Peppers").unwrap().get("lbs"), Some(&7.5));
        assert_eq!(a.get("Peppers"), b.get("Peppers"));
    }

    #[test]
    fn fractional_quantities_keep_their_decimals() {
        let config = AppConfig::default();
        let mut snapshot = Snapshot::blank(&config);
        snapshot.append("foodtruck", "Cilantro", 1.5, "lbs");
        snapshot.append("cr", "Cilantro", 1.25, "lbs");

        let text = generate(&snapshot, &config, date());
        assert!(text.contains("Cilantro:  2.75 lbs\n"), "got:\n{text}");
    }

    #[test]
    fn clear_all_produces_a_report_with_no_item_lines() {
        let config = AppConfig::default();
        let mut snapshot = Snapshot::blank(&config);
        snapshot.append("foodtruck", "Buns", 2.0, "packs");
        snapshot.append("cr", "Limes", 1.0, "lbs");
        snapshot.clear_all();

        let text = generate(&snapshot, &config, date());
        assert_eq!(text, "Inventory 8/26/2026\n\nUS Foods:\n");
    }

    #[test]
    fn summarize_ledger_is_per_location() {
        let config = AppConfig::default();
        let mut snapshot = Snapshot::blank(&config);
        snapshot.append("foodtruck", "Tomatoes", 3.0, "case");
        snapshot.append("foodtruck", "Tomatoes", 1.0, "case");
        snapshot.append("foodtruck", "Tomatoes", 2.0, "lbs");
        snapshot.append("cr", "Tomatoes", 9.0, "case");

        let ledger = snapshot.ledger("foodtruck", "Tomatoes").unwrap();
        assert_eq!(summarize_ledger(ledger), "4 case + 2 lbs");
        assert_eq!(summarize_ledger(snapshot.ledger("cr", "Limes").unwrap()), "");
    }
}
