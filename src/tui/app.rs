use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::{config_io, store_io};
use crate::model::config::AppConfig;
use crate::model::ledger::{self, Snapshot};
use crate::report;
use crate::util::clipboard;

use super::input;
use super::render;
use super::theme::Theme;

/// How long an armed first tap waits for the confirming second tap
pub const SELECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Current interaction mode. The tap machine: Navigate is idle, a first tap
/// arms Selected with a deadline, a second tap on the same item within the
/// deadline opens the editor. Never persisted; the app starts in Navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Selected { item: String, deadline: Instant },
    Edit,
    Confirm(ConfirmAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll,
}

/// Transient editor draft, discarded on save or cancel
#[derive(Debug, Clone)]
pub struct EditState {
    pub item: String,
    pub location: String,
    pub draft_qty: String,
    /// Index into config.units
    pub unit_idx: usize,
}

/// A row in the flattened grid
#[derive(Debug, Clone)]
pub enum GridRow {
    Section(String),
    /// Item name plus its index into the tappable item list
    Item { name: String, index: usize },
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub snapshot: Snapshot,
    pub data_dir: PathBuf,
    pub theme: Theme,
    pub mode: Mode,
    /// Index into config.locations (the active tab)
    pub location_idx: usize,
    /// Cursor into the tappable item list (catalog order)
    pub cursor: usize,
    pub scroll_offset: usize,
    pub edit: Option<EditState>,
    /// Generated order text; the report panel shows while this is Some
    pub report_text: Option<String>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Catalog item names in tap order, fixed for the session
    items: Vec<String>,
}

impl App {
    pub fn new(config: AppConfig, snapshot: Snapshot, data_dir: PathBuf) -> Self {
        let theme = Theme::from_config(&config.ui);
        let items: Vec<String> = config.catalog_items().map(str::to_string).collect();
        App {
            config,
            snapshot,
            data_dir,
            theme,
            mode: Mode::Navigate,
            location_idx: 0,
            cursor: 0,
            scroll_offset: 0,
            edit: None,
            report_text: None,
            status_message: None,
            should_quit: false,
            items,
        }
    }

    pub fn current_location(&self) -> &str {
        self.config
            .locations
            .get(self.location_idx)
            .map(|l| l.id.as_str())
            .unwrap_or("")
    }

    pub fn current_item(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Grid rows in display order: section titles interleaved with items
    pub fn build_grid_rows(&self) -> Vec<GridRow> {
        let mut rows = Vec::new();
        let mut index = 0;
        for section in &self.config.sections {
            rows.push(GridRow::Section(section.title.clone()));
            for item in &section.items {
                rows.push(GridRow::Item {
                    name: item.clone(),
                    index,
                });
                index += 1;
            }
        }
        rows
    }

    // -----------------------------------------------------------------------
    // Tap state machine

    /// A tap on the item under the cursor. First tap arms the selection;
    /// a second tap on the same item before the deadline opens the editor.
    /// Tapping a different item re-arms and moves the deadline.
    pub fn on_tap(&mut self, now: Instant) {
        let Some(item) = self.current_item().map(str::to_string) else {
            return;
        };
        match &self.mode {
            Mode::Selected {
                item: armed,
                deadline,
            } if *armed == item && now < *deadline => self.open_editor(item),
            _ => {
                self.mode = Mode::Selected {
                    item,
                    deadline: now + SELECT_TIMEOUT,
                };
            }
        }
    }

    /// Event-loop tick: an armed selection past its deadline falls back to
    /// Navigate. Other modes ignore the clock.
    pub fn tick(&mut self, now: Instant) {
        if let Mode::Selected { deadline, .. } = &self.mode
            && now >= *deadline
        {
            self.mode = Mode::Navigate;
        }
    }

    fn open_editor(&mut self, item: String) {
        self.edit = Some(EditState {
            item,
            location: self.current_location().to_string(),
            draft_qty: String::new(),
            unit_idx: 0,
        });
        self.mode = Mode::Edit;
    }

    // -----------------------------------------------------------------------
    // Editor actions

    /// Save the draft. An unparsable quantity is a silent no-op and the
    /// editor stays open.
    pub fn save_edit(&mut self) {
        let Some(edit) = &self.edit else { return };
        let Some(quantity) = ledger::parse_quantity(&edit.draft_qty) else {
            return;
        };
        let unit = self
            .config
            .units
            .get(edit.unit_idx)
            .cloned()
            .unwrap_or_else(|| self.config.default_unit().to_string());
        let (item, location) = (edit.item.clone(), edit.location.clone());

        self.snapshot.append(&location, &item, quantity, &unit);
        self.persist();
        self.status_message = Some(format!("logged {} {} of {}", quantity, unit, item));
        self.edit = None;
        self.mode = Mode::Navigate;
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.mode = Mode::Navigate;
    }

    /// Undo against the committed ledger; the draft fields are untouched
    pub fn edit_undo(&mut self) {
        let Some(edit) = &self.edit else { return };
        let (item, location) = (edit.item.clone(), edit.location.clone());
        if self.snapshot.undo(&location, &item) {
            self.persist();
            self.status_message = Some(format!("undid last entry for {}", item));
        }
    }

    pub fn edit_redo(&mut self) {
        let Some(edit) = &self.edit else { return };
        let (item, location) = (edit.item.clone(), edit.location.clone());
        if self.snapshot.redo(&location, &item) {
            self.persist();
            self.status_message = Some(format!("redid entry for {}", item));
        }
    }

    // -----------------------------------------------------------------------
    // Top-level actions

    pub fn switch_location(&mut self, idx: usize) {
        if idx < self.config.locations.len() {
            self.location_idx = idx;
            self.scroll_offset = 0;
            self.mode = Mode::Navigate;
        }
    }

    pub fn generate_report(&mut self) {
        self.report_text = Some(report::generate_today(&self.snapshot, &self.config));
        self.status_message = Some("Done! Output ready.".to_string());
    }

    pub fn copy_report(&mut self) {
        let Some(text) = self.report_text.clone() else {
            return;
        };
        match clipboard::copy_to_clipboard(&text) {
            Ok(_) => self.status_message = Some("Copied!".to_string()),
            Err(e) => self.status_message = Some(format!("copy failed: {}", e)),
        }
    }

    pub fn request_clear_all(&mut self) {
        self.mode = Mode::Confirm(ConfirmAction::ClearAll);
    }

    pub fn confirm_clear_all(&mut self) {
        self.snapshot.clear_all();
        self.persist();
        self.report_text = None;
        self.status_message = Some("cleared all inventory".to_string());
        self.mode = Mode::Navigate;
    }

    /// Fire-and-forget durable save; the in-memory snapshot stays
    /// authoritative for the session.
    pub fn persist(&self) {
        let _ = store_io::write_snapshot(&self.data_dir, &self.snapshot);
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir: PathBuf = match data_dir {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir()?,
    };
    let config = config_io::read_config(&data_dir)?;
    let snapshot = store_io::load_snapshot(&data_dir, &config);
    let mut app = App::new(config, snapshot, data_dir);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Final durable save before exit
    app.persist();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Expire the armed-selection deadline
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_app(dir: &Path) -> App {
        let config = AppConfig::default();
        let snapshot = Snapshot::blank(&config);
        App::new(config, snapshot, dir.to_path_buf())
    }

    fn tap_twice(app: &mut App, now: Instant) {
        app.on_tap(now);
        app.on_tap(now + Duration::from_millis(100));
    }

    #[test]
    fn double_tap_opens_editor() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        let now = Instant::now();

        app.on_tap(now);
        assert!(matches!(app.mode, Mode::Selected { .. }));

        app.on_tap(now + Duration::from_millis(500));
        assert_eq!(app.mode, Mode::Edit);
        let edit = app.edit.as_ref().unwrap();
        assert_eq!(edit.item, "Chorizo");
        assert_eq!(edit.location, "foodtruck");
        assert_eq!(edit.draft_qty, "");
        assert_eq!(edit.unit_idx, 0);
    }

    #[test]
    fn armed_selection_expires_on_tick() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        let now = Instant::now();

        app.on_tap(now);
        app.tick(now + Duration::from_millis(1999));
        assert!(matches!(app.mode, Mode::Selected { .. }));

        app.tick(now + SELECT_TIMEOUT);
        assert_eq!(app.mode, Mode::Navigate);

        // a tap after expiry arms again instead of opening the editor
        app.on_tap(now + Duration::from_secs(3));
        assert!(matches!(app.mode, Mode::Selected { .. }));
    }

    #[test]
    fn tapping_a_different_item_rearms() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        let now = Instant::now();

        app.on_tap(now);
        app.cursor = 1;
        app.on_tap(now + Duration::from_millis(500));

        match &app.mode {
            Mode::Selected { item, deadline } => {
                assert_eq!(item, "Hot Dogs");
                // deadline moved with the second tap
                assert_eq!(*deadline, now + Duration::from_millis(500) + SELECT_TIMEOUT);
            }
            other => panic!("expected Selected, got {:?}", other),
        }
    }

    #[test]
    fn save_with_unparsable_draft_keeps_editor_open() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        tap_twice(&mut app, Instant::now());

        app.edit.as_mut().unwrap().draft_qty = "not a number".to_string();
        app.save_edit();
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.edit.is_some());
        assert!(app.snapshot.ledger("foodtruck", "Chorizo").unwrap().logs.is_empty());
    }

    #[test]
    fn save_appends_and_returns_to_navigate() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        tap_twice(&mut app, Instant::now());

        {
            let edit = app.edit.as_mut().unwrap();
            edit.draft_qty = "2.5".to_string();
            edit.unit_idx = 3; // lbs
        }
        app.save_edit();

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit.is_none());
        let ledger = app.snapshot.ledger("foodtruck", "Chorizo").unwrap();
        assert_eq!(ledger.logs.len(), 1);
        assert_eq!(ledger.logs[0].quantity, 2.5);
        assert_eq!(ledger.logs[0].unit, "lbs");
        // durable mirror written
        assert!(dir.path().join(store_io::STORE_FILE).exists());
    }

    #[test]
    fn edit_undo_redo_leave_draft_untouched() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        app.snapshot.append("foodtruck", "Chorizo", 3.0, "case");

        tap_twice(&mut app, Instant::now());
        app.edit.as_mut().unwrap().draft_qty = "9".to_string();

        app.edit_undo();
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.edit.as_ref().unwrap().draft_qty, "9");
        assert!(app.snapshot.ledger("foodtruck", "Chorizo").unwrap().logs.is_empty());

        app.edit_redo();
        assert_eq!(
            app.snapshot.ledger("foodtruck", "Chorizo").unwrap().logs.len(),
            1
        );
        assert_eq!(app.edit.as_ref().unwrap().draft_qty, "9");
    }

    #[test]
    fn cancel_discards_draft_without_mutation() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        tap_twice(&mut app, Instant::now());
        app.edit.as_mut().unwrap().draft_qty = "7".to_string();

        app.cancel_edit();
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit.is_none());
        assert!(app.snapshot.is_empty());
    }

    #[test]
    fn editor_targets_the_active_location() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        app.switch_location(1);
        tap_twice(&mut app, Instant::now());

        app.edit.as_mut().unwrap().draft_qty = "4".to_string();
        app.save_edit();
        assert_eq!(app.snapshot.ledger("cr", "Chorizo").unwrap().logs.len(), 1);
        assert!(app.snapshot.ledger("foodtruck", "Chorizo").unwrap().logs.is_empty());
    }

    #[test]
    fn clear_all_requires_confirmation_then_empties_everything() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(dir.path());
        app.snapshot.append("foodtruck", "Tomatoes", 3.0, "case");
        app.snapshot.append("cr", "Limes", 1.0, "lbs");
        app.generate_report();

        app.request_clear_all();
        assert_eq!(app.mode, Mode::Confirm(ConfirmAction::ClearAll));
        // snapshot untouched until confirmed
        assert!(!app.snapshot.is_empty());

        app.confirm_clear_all();
        assert!(app.snapshot.is_empty());
        assert!(app.report_text.is_none());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn grid_rows_interleave_sections_and_items() {
        let dir = TempDir::new().unwrap();
        let app = test_app(dir.path());
        let rows = app.build_grid_rows();
        assert!(matches!(&rows[0], GridRow::Section(t) if t == "Meat & Breads"));
        assert!(matches!(&rows[1], GridRow::Item { name, index } if name == "Chorizo" && *index == 0));
        let items = rows
            .iter()
            .filter(|r| matches!(r, GridRow::Item { .. }))
            .count();
        assert_eq!(items, app.item_count());
    }
}
