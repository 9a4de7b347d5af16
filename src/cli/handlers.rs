use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::store_io;
use crate::model::config::AppConfig;
use crate::model::ledger::{self, Snapshot};
use crate::report;
use crate::util::clipboard;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let command = match cli.command {
        Some(cmd) => cmd,
        // No subcommand launches the TUI; main handles that before us
        None => return Ok(()),
    };

    let config = config_io::read_config(&data_dir)?;
    let snapshot = store_io::load_snapshot(&data_dir, &config);

    match command {
        Commands::Log(args) => cmd_log(&data_dir, &config, snapshot, args, json),
        Commands::Undo(args) => cmd_undo_redo(&data_dir, &config, snapshot, args, json, true),
        Commands::Redo(args) => cmd_undo_redo(&data_dir, &config, snapshot, args, json, false),
        Commands::Items => cmd_items(&config, &snapshot, json),
        Commands::Report(args) => cmd_report(&config, &snapshot, args, json),
        Commands::Clear(args) => cmd_clear(&data_dir, &config, snapshot, args, json),
    }
}

fn resolve_data_dir(flag: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match flag {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e).into()),
        None => Ok(std::env::current_dir()?),
    }
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn resolve_location<'a>(
    config: &'a AppConfig,
    flag: Option<&'a str>,
) -> Result<&'a str, Box<dyn std::error::Error>> {
    let location = match flag {
        Some(id) => id,
        None => config
            .default_location()
            .ok_or("no locations configured in tally.toml")?,
    };
    if !config.contains_location(location) {
        let known: Vec<&str> = config.locations.iter().map(|l| l.id.as_str()).collect();
        return Err(format!(
            "unknown location '{}' (configured: {})",
            location,
            known.join(", ")
        )
        .into());
    }
    Ok(location)
}

fn check_item(config: &AppConfig, item: &str) -> Result<(), Box<dyn std::error::Error>> {
    if config.contains_item(item) {
        Ok(())
    } else {
        Err(format!("unknown item '{}' (see `tally items`)", item).into())
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_log(
    data_dir: &Path,
    config: &AppConfig,
    mut snapshot: Snapshot,
    args: LogArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let location = resolve_location(config, args.location.as_deref())?.to_string();
    check_item(config, &args.item)?;
    if !config.contains_unit(&args.unit) {
        return Err(format!(
            "unknown unit '{}' (configured: {})",
            args.unit,
            config.units.join(", ")
        )
        .into());
    }
    let quantity = ledger::parse_quantity(&args.quantity).ok_or_else(|| {
        format!(
            "invalid quantity '{}' (expected a number in (0, {}])",
            args.quantity,
            ledger::MAX_QUANTITY
        )
    })?;

    snapshot.append(&location, &args.item, quantity, &args.unit);
    store_io::write_snapshot(data_dir, &snapshot)?;

    if json {
        let ledger = snapshot
            .ledger(&location, &args.item)
            .ok_or("ledger missing after append")?;
        let output = ledger_to_json(&location, &args.item, ledger);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "logged {} {} of {} at {}",
            quantity,
            args.unit,
            args.item,
            config.location_name(&location)
        );
    }
    Ok(())
}

fn cmd_undo_redo(
    data_dir: &Path,
    config: &AppConfig,
    mut snapshot: Snapshot,
    args: ItemArgs,
    json: bool,
    is_undo: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let location = resolve_location(config, args.location.as_deref())?.to_string();
    check_item(config, &args.item)?;

    let changed = if is_undo {
        snapshot.undo(&location, &args.item)
    } else {
        snapshot.redo(&location, &args.item)
    };
    if changed {
        store_io::write_snapshot(data_dir, &snapshot)?;
    }

    let ledger = snapshot
        .ledger(&location, &args.item)
        .ok_or("ledger missing")?;

    if json {
        let output = ledger_to_json(&location, &args.item, ledger);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let verb = if is_undo { "undid" } else { "redid" };
    if changed {
        // the moved entry sits on top of the receiving stack
        let entry = if is_undo {
            ledger.undone.last()
        } else {
            ledger.logs.last()
        };
        if let Some(entry) = entry {
            println!(
                "{} {} {} of {} at {}",
                verb,
                entry.quantity,
                entry.unit,
                args.item,
                config.location_name(&location)
            );
        }
    } else {
        println!(
            "nothing to {} for {} at {}",
            if is_undo { "undo" } else { "redo" },
            args.item,
            config.location_name(&location)
        );
    }
    Ok(())
}

fn cmd_items(
    config: &AppConfig,
    snapshot: &Snapshot,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let mut rows = Vec::new();
        for section in &config.sections {
            for item in &section.items {
                let mut totals: IndexMap<String, report::UnitTotals> = IndexMap::new();
                for loc in &config.locations {
                    if let Some(ledger) = snapshot.ledger(&loc.id, item) {
                        let mut units = report::UnitTotals::new();
                        for log in &ledger.logs {
                            *units.entry(log.unit.clone()).or_insert(0.0) += log.quantity;
                        }
                        if !units.is_empty() {
                            totals.insert(loc.id.clone(), units);
                        }
                    }
                }
                rows.push(ItemRowJson {
                    name: item.clone(),
                    section: section.title.clone(),
                    totals,
                });
            }
        }
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for section in &config.sections {
        println!("{}", section.title);
        for item in &section.items {
            let mut summaries = Vec::new();
            for loc in &config.locations {
                if let Some(ledger) = snapshot.ledger(&loc.id, item) {
                    let summary = report::summarize_ledger(ledger);
                    if !summary.is_empty() {
                        summaries.push(format!("{}: {}", loc.name, summary));
                    }
                }
            }
            if summaries.is_empty() {
                println!("  {}", item);
            } else {
                println!("  {}  [{}]", item, summaries.join(" | "));
            }
        }
    }
    Ok(())
}

fn cmd_report(
    config: &AppConfig,
    snapshot: &Snapshot,
    args: ReportArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = report::generate_today(snapshot, config);

    if json {
        let combined = report::aggregate(snapshot);
        let mut items = IndexMap::new();
        for item in config.catalog_items() {
            if let Some(totals) = combined.get(item) {
                items.insert(item.to_string(), totals.clone());
            }
        }
        let output = ReportJson {
            date: chrono::Local::now()
                .date_naive()
                .format("%-m/%-d/%Y")
                .to_string(),
            supplier: config.supplier.clone(),
            items,
            text: text.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", text);
    }

    if args.copy {
        match clipboard::copy_to_clipboard(&text) {
            Ok(backend) => eprintln!("copied to clipboard ({})", backend),
            Err(e) => eprintln!("clipboard copy failed: {}", e),
        }
    }
    Ok(())
}

fn cmd_clear(
    data_dir: &Path,
    config: &AppConfig,
    mut snapshot: Snapshot,
    args: ClearArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.force && !confirm_on_stdin("Clear ALL inventory? [y/N] ")? {
        println!("aborted");
        return Ok(());
    }

    snapshot.clear_all();
    store_io::write_snapshot(data_dir, &snapshot)?;

    if json {
        println!("{}", serde_json::json!({ "cleared": true }));
    } else {
        let items = config.catalog_items().count();
        println!(
            "cleared {} ledgers across {} locations",
            items * config.locations.len(),
            config.locations.len()
        );
    }
    Ok(())
}

/// Blocking y/N prompt on stdin. Anything but y/yes declines.
fn confirm_on_stdin(prompt: &str) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
