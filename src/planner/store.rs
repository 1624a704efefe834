// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plan state and its mutation API.
//!
//! [`PlanStore`] owns both plans, the active tab, the current selection and
//! the undo/redo history. Every committed edit records a by-value snapshot
//! of the whole plan, so undoing an edit on one tab never touches the other.
//! Operations that need a selection quietly do nothing without one: the UI
//! calls them speculatively.

use super::generator::{self, BanquetGridParams, SeatGridParams};
use super::history::{History, HistorySnapshot, SnapshotKind};
use crate::models::guest::{Guest, Loose};
use crate::models::plan::{Area, PlanState, Point, Seat, Tab, TabLayout, Table, TableShape};
use crate::util::geometry;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Editable table size fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableDimension {
    Width,
    Height,
    /// Sets both width and height.
    Diameter,
    Seats,
}

impl FromStr for TableDimension {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "width" => Ok(TableDimension::Width),
            "height" => Ok(TableDimension::Height),
            "diameter" => Ok(TableDimension::Diameter),
            "seats" => Ok(TableDimension::Seats),
            other => anyhow::bail!("Unknown table dimension: {}", other),
        }
    }
}

/// Caller-supplied fields for a new table; missing fields use the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDraft {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub shape: Option<TableShape>,
    pub seats: Option<u32>,
}

impl TableDraft {
    pub fn at(point: Point) -> Self {
        Self {
            x: Some(point.x),
            y: Some(point.y),
            ..Self::default()
        }
    }
}

pub struct PlanStore {
    state: PlanState,
    tab: Tab,
    selected_table: Option<u64>,
    selected_seat: Option<u32>,
    history: History,
    last_id: u64,
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new(History::default())
    }
}

impl PlanStore {
    /// Create an empty plan and record it as the history baseline.
    pub fn new(history: History) -> Self {
        Self::with_state(PlanState::default(), history)
    }

    pub fn with_state(state: PlanState, mut history: History) -> Self {
        history.clear();
        let mut store = Self {
            state,
            tab: Tab::default(),
            selected_table: None,
            selected_seat: None,
            history,
            last_id: 0,
        };
        store.record(SnapshotKind::Initial);
        store
    }

    // ── Views ──────────────────────────────────────────────────

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch the visible plan. Data of both tabs is left untouched.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            log::info!("Switched to {} plan", tab.label());
            self.tab = tab;
            self.clear_selection();
        }
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    pub fn layout(&self) -> &TabLayout {
        self.state.layout(self.tab)
    }

    fn layout_mut(&mut self) -> &mut TabLayout {
        self.state.layout_mut(self.tab)
    }

    pub fn areas(&self) -> &[Area] {
        &self.layout().areas
    }

    pub fn tables(&self) -> &[Table] {
        &self.layout().tables
    }

    pub fn seats(&self) -> &[Seat] {
        &self.layout().seats
    }

    #[cfg(test)]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Load a whole plan (document import). History restarts from it.
    pub fn replace_state(&mut self, state: PlanState) {
        self.state = state;
        self.clear_selection();
        self.history.clear();
        self.record(SnapshotKind::Initial);
        log::info!(
            "Loaded plan: {} ceremony seats, {} banquet tables",
            self.state.ceremony.seats.len(),
            self.state.banquet.tables.len()
        );
    }

    fn record(&mut self, kind: SnapshotKind) {
        self.history
            .push(HistorySnapshot::new(kind, self.tab, self.state.clone()));
    }

    // ── Generators ─────────────────────────────────────────────

    /// Replace all ceremony seats with a fresh grid.
    pub fn generate_seat_grid(&mut self, params: &SeatGridParams) -> usize {
        let seats = generator::generate_seat_grid(params);
        let count = seats.len();
        self.state.ceremony.seats = seats;
        self.selected_seat = None;
        self.record(SnapshotKind::Ceremony);
        log::info!("Generated ceremony grid with {} seats", count);
        count
    }

    /// Replace all banquet tables with a fresh grid.
    pub fn generate_banquet_layout(&mut self, params: &BanquetGridParams) -> usize {
        let tables = generator::generate_banquet_layout(params);
        let count = tables.len();
        self.state.banquet.tables = tables;
        if self.tab == Tab::Banquet {
            self.selected_table = None;
        }
        self.record(SnapshotKind::Banquet);
        log::info!("Generated banquet layout with {} tables", count);
        count
    }

    // ── Selection ──────────────────────────────────────────────

    /// Select a table of the active tab. Unknown ids clear the selection.
    pub fn select_table(&mut self, id: u64) -> Option<&Table> {
        let found = self.tables().iter().any(|t| t.id == id);
        self.selected_table = found.then_some(id);
        self.selected_seat = None;
        self.selected_table()
    }

    pub fn selected_table(&self) -> Option<&Table> {
        let id = self.selected_table?;
        self.tables().iter().find(|t| t.id == id)
    }

    fn selected_table_mut(&mut self) -> Option<&mut Table> {
        let id = self.selected_table?;
        self.layout_mut().tables.iter_mut().find(|t| t.id == id)
    }

    pub fn select_seat(&mut self, id: u32) -> Option<&Seat> {
        let found = self.seats().iter().any(|s| s.id == id);
        self.selected_seat = found.then_some(id);
        self.selected_table = None;
        self.selected_seat()
    }

    pub fn selected_seat(&self) -> Option<&Seat> {
        let id = self.selected_seat?;
        self.seats().iter().find(|s| s.id == id)
    }

    pub fn clear_selection(&mut self) {
        self.selected_table = None;
        self.selected_seat = None;
    }

    // ── Tables ─────────────────────────────────────────────────

    /// Set a size field of the selected table from form text.
    ///
    /// The value is read as an integer (leading digits). No selection, an
    /// unreadable value or a non-positive size leaves everything unchanged.
    pub fn change_table_dimension(&mut self, field: TableDimension, value: &str) -> bool {
        let Some(parsed) = Loose::Text(value.to_string()).as_int() else {
            log::warn!("Ignoring non-numeric {:?} value {:?}", field, value);
            return false;
        };
        let minimum = if field == TableDimension::Seats { 0 } else { 1 };
        if parsed < minimum {
            log::warn!("Ignoring out-of-range {:?} value {}", field, parsed);
            return false;
        }

        let Some(table) = self.selected_table_mut() else {
            log::debug!("No table selected, ignoring {:?} change", field);
            return false;
        };
        let size = parsed as f64;
        let unchanged = match field {
            TableDimension::Width => table.width == size,
            TableDimension::Height => table.height == size,
            TableDimension::Diameter => table.width == size && table.height == size,
            TableDimension::Seats => i64::from(table.seats) == parsed,
        };
        if unchanged {
            log::debug!("{:?} of {} already {}", field, table.name, parsed);
            return false;
        }
        match field {
            TableDimension::Width => table.width = size,
            TableDimension::Height => table.height = size,
            TableDimension::Diameter => {
                table.width = size;
                table.height = size;
            }
            TableDimension::Seats => table.seats = parsed.min(i64::from(u32::MAX)) as u32,
        }
        log::info!("Set {:?} of {} to {}", field, table.name, parsed);
        self.record(SnapshotKind::TableEdit);
        true
    }

    /// Flip the selected table between rectangle and circle.
    pub fn toggle_table_shape(&mut self) -> bool {
        let Some(table) = self.selected_table_mut() else {
            return false;
        };
        table.shape = table.shape.toggled();
        log::info!("{} is now {:?}", table.name, table.shape);
        self.record(SnapshotKind::TableEdit);
        true
    }

    /// Add a table built from `draft` over the default template.
    ///
    /// The id is unique across both tabs and never collides with the small
    /// ids handed out by the banquet generator.
    pub fn add_table(&mut self, draft: TableDraft) -> Table {
        let id = self.next_id();
        let default_name = format!("Mesa {}", self.tables().len() + 1);

        let mut table = Table::new(
            id,
            draft.name.unwrap_or(default_name),
            draft.x.unwrap_or(100.0),
            draft.y.unwrap_or(100.0),
            draft.seats.unwrap_or(Table::DEFAULT_SEATS),
        );
        if let Some(width) = draft.width {
            table.width = width;
        }
        if let Some(height) = draft.height {
            table.height = height;
        }
        if let Some(shape) = draft.shape {
            table.shape = shape;
        }

        self.layout_mut().tables.push(table.clone());
        self.record(SnapshotKind::TableAdd);
        log::info!("Added {} at ({:.0}, {:.0})", table.name, table.x, table.y);
        table
    }

    pub fn remove_table(&mut self, id: u64) -> bool {
        let tables = &mut self.layout_mut().tables;
        let before = tables.len();
        tables.retain(|t| t.id != id);
        if tables.len() == before {
            return false;
        }
        if self.selected_table == Some(id) {
            self.selected_table = None;
        }
        self.record(SnapshotKind::TableRemove);
        log::info!("Removed table {}", id);
        true
    }

    /// Commit a table drag.
    pub fn move_table(&mut self, id: u64, x: f64, y: f64) -> bool {
        let Some(table) = self.layout_mut().tables.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        table.x = x;
        table.y = y;
        self.record(SnapshotKind::TableMove);
        true
    }

    /// Topmost table of the active tab under `point`.
    pub fn table_at(&self, point: Point) -> Option<u64> {
        self.tables().iter().rev().find(|t| t.contains(point)).map(|t| t.id)
    }

    /// Time-based id above every area and table id on either tab.
    fn next_id(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let existing = [&self.state.ceremony, &self.state.banquet]
            .into_iter()
            .flat_map(|layout| {
                let areas = layout.areas.iter().map(|a| a.id);
                areas.chain(layout.tables.iter().map(|t| t.id))
            })
            .max()
            .unwrap_or(0);
        let id = now.max(self.last_id + 1).max(existing + 1);
        self.last_id = id;
        id
    }

    // ── Areas ──────────────────────────────────────────────────

    /// Add a finished drawing to the active tab. The drawing tool stays active.
    pub fn add_area(&mut self, points: Vec<Point>) -> Area {
        let area = Area {
            id: self.next_id(),
            points,
            tab: self.tab,
        };
        self.layout_mut().areas.push(area.clone());
        self.record(SnapshotKind::AreaAdd);
        log::info!("Added area with {} points, total: {}", area.vertex_count(), self.areas().len());
        area
    }

    pub fn remove_area(&mut self, id: u64) -> bool {
        let areas = &mut self.layout_mut().areas;
        let before = areas.len();
        areas.retain(|a| a.id != id);
        if areas.len() == before {
            return false;
        }
        self.record(SnapshotKind::AreaRemove);
        log::info!("Erased area {}", id);
        true
    }

    /// Topmost area of the active tab containing `point`.
    pub fn area_at(&self, point: Point) -> Option<u64> {
        self.areas()
            .iter()
            .rev()
            .find(|a| geometry::point_in_polygon(point, &a.points))
            .map(|a| a.id)
    }

    pub fn move_area_vertex(&mut self, id: u64, index: usize, point: Point) -> bool {
        let moved = self
            .layout_mut()
            .areas
            .iter_mut()
            .find(|a| a.id == id)
            .is_some_and(|a| a.update_vertex(index, point));
        if moved {
            self.record(SnapshotKind::AreaEdit);
        }
        moved
    }

    /// Set the length of edge `index` by moving its end vertex along the edge.
    pub fn set_area_edge_length(&mut self, id: u64, index: usize, length: f64) -> bool {
        if !(length.is_finite() && length > 0.0) {
            log::warn!("Ignoring edge length {}", length);
            return false;
        }
        let Some(area) = self.layout_mut().areas.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        let n = area.points.len();
        if n < 2 || index >= n {
            return false;
        }
        let (start, end) = (area.points[index], area.points[(index + 1) % n]);
        area.update_vertex((index + 1) % n, geometry::point_at_distance(start, end, length));
        self.record(SnapshotKind::AreaEdit);
        true
    }

    // ── Seats ──────────────────────────────────────────────────

    pub fn toggle_seat(&mut self, id: u32) -> bool {
        let Some(seat) = self.layout_mut().seats.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        seat.enabled = !seat.enabled;
        log::info!("Seat {} {}", id, if seat.enabled { "enabled" } else { "disabled" });
        self.record(SnapshotKind::SeatToggle);
        true
    }

    /// Put a guest on (or clear) a seat. Disabled seats cannot take a guest.
    pub fn assign_seat_guest(&mut self, id: u32, guest: Option<&Guest>) -> bool {
        let Some(seat) = self.layout_mut().seats.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        if guest.is_some() && !seat.enabled {
            log::warn!("Seat {} is disabled", id);
            return false;
        }
        seat.guest_id = guest.map(|g| g.id.clone());
        seat.guest_name = guest.map(|g| g.name.clone());
        self.record(SnapshotKind::SeatAssign);
        true
    }

    /// Nearest seat of the active tab within `radius` cm of `point`.
    pub fn seat_at(&self, point: Point, radius: f64) -> Option<u32> {
        self.seats()
            .iter()
            .map(|s| (s.id, geometry::distance(Point::new(s.x, s.y), point)))
            .filter(|&(_, d)| d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    // ── History ────────────────────────────────────────────────

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        log::info!("Undo {}", snapshot.kind.as_str());
        self.state = snapshot.state.clone();
        self.drop_stale_selection();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        log::info!("Redo {}", snapshot.kind.as_str());
        self.state = snapshot.state.clone();
        self.drop_stale_selection();
        true
    }

    fn drop_stale_selection(&mut self) {
        if self.selected_table().is_none() {
            self.selected_table = None;
        }
        if self.selected_seat().is_none() {
            self.selected_seat = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::resolver;

    fn square() -> Vec<Point> {
        geometry::rectangle_points(Point::new(0.0, 0.0), Point::new(100.0, 100.0))
    }

    #[test]
    fn test_add_table_uses_defaults() {
        let mut store = PlanStore::default();
        let first = store.add_table(TableDraft::default());
        let second = store.add_table(TableDraft {
            seats: Some(10),
            shape: Some(TableShape::Circle),
            ..TableDraft::at(Point::new(300.0, 200.0))
        });

        assert_eq!((first.x, first.y), (100.0, 100.0));
        assert_eq!((first.width, first.height), (80.0, 60.0));
        assert_eq!(first.seats, 8);
        assert_eq!(first.name, "Mesa 1");
        assert!(first.enabled);
        assert!(second.id > first.id);
        assert_eq!(second.name, "Mesa 2");
        assert_eq!(second.shape, TableShape::Circle);
        assert_eq!(store.history().current().unwrap().kind, SnapshotKind::TableAdd);
    }

    #[test]
    fn test_table_ids_are_unique_across_tabs() {
        let mut store = PlanStore::default();
        let ceremony = store.add_table(TableDraft::default());
        store.set_tab(Tab::Banquet);
        store.generate_banquet_layout(&BanquetGridParams::default());
        let added = store.add_table(TableDraft::default());

        let banquet_ids: Vec<u64> = store.tables().iter().map(|t| t.id).collect();
        assert!(!banquet_ids.contains(&ceremony.id));
        assert_eq!(banquet_ids.iter().filter(|&&id| id == added.id).count(), 1);

        let roster = vec![Guest::new("g1", "Ana").with_table_id(store.tables()[0].id)];
        let total: u32 = [&store.state().ceremony, &store.state().banquet]
            .iter()
            .flat_map(|layout| layout.tables.iter())
            .map(|t| resolver::occupant_count(t, &roster))
            .sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_unchanged_dimension_records_nothing() {
        let mut store = PlanStore::default();
        let table = store.add_table(TableDraft::default());
        store.select_table(table.id);
        let history_len = store.history().len();

        assert!(!store.change_table_dimension(TableDimension::Width, "80"));
        assert!(!store.change_table_dimension(TableDimension::Seats, "8"));
        assert_eq!(store.history().len(), history_len);

        assert!(store.change_table_dimension(TableDimension::Diameter, "80"));
        assert!(!store.change_table_dimension(TableDimension::Diameter, "80"));
        assert_eq!(store.history().len(), history_len + 1);
    }

    #[test]
    fn test_seat_at_picks_nearest() {
        let mut store = PlanStore::default();
        store.generate_seat_grid(&SeatGridParams {
            rows: 1,
            cols: 2,
            gap: 10.0,
            start_x: 0.0,
            start_y: 0.0,
            aisle_after: 5,
        });

        assert_eq!(store.seat_at(Point::new(8.0, 0.0), 20.0), Some(2));
        assert_eq!(store.seat_at(Point::new(2.0, 0.0), 20.0), Some(1));
        assert_eq!(store.seat_at(Point::new(50.0, 0.0), 20.0), None);
    }

    #[test]
    fn test_shape_toggle_twice_restores() {
        let mut store = PlanStore::default();
        let table = store.add_table(TableDraft::default());
        store.select_table(table.id);

        assert!(store.toggle_table_shape());
        assert_eq!(store.selected_table().unwrap().shape, TableShape::Circle);
        assert!(store.toggle_table_shape());
        assert_eq!(store.selected_table().unwrap().shape, TableShape::Rectangle);
    }

    #[test]
    fn test_dimension_change_without_selection_is_noop() {
        let mut store = PlanStore::default();
        store.add_table(TableDraft::default());
        let before = store.state().clone();
        let history_len = store.history().len();

        assert!(!store.change_table_dimension("width".parse().unwrap(), "999"));
        assert!(!store.toggle_table_shape());
        assert_eq!(store.state(), &before);
        assert_eq!(store.history().len(), history_len);
    }

    #[test]
    fn test_dimension_change_updates_selection_and_collection() {
        let mut store = PlanStore::default();
        let table = store.add_table(TableDraft::default());
        store.select_table(table.id);

        assert!(store.change_table_dimension(TableDimension::Width, "120"));
        assert!(store.change_table_dimension(TableDimension::Seats, " 10 "));
        assert!(!store.change_table_dimension(TableDimension::Height, "abc"));
        assert!(!store.change_table_dimension(TableDimension::Height, "0"));

        assert_eq!(store.selected_table().unwrap().width, 120.0);
        assert_eq!(store.tables()[0].width, 120.0);
        assert_eq!(store.tables()[0].seats, 10);
        assert_eq!(store.tables()[0].height, 60.0);

        assert!(store.change_table_dimension(TableDimension::Diameter, "90"));
        assert_eq!((store.tables()[0].width, store.tables()[0].height), (90.0, 90.0));
    }

    #[test]
    fn test_unknown_dimension_name_fails_to_parse() {
        assert!("depth".parse::<TableDimension>().is_err());
        assert_eq!("diameter".parse::<TableDimension>().unwrap(), TableDimension::Diameter);
    }

    #[test]
    fn test_select_unknown_table_clears_selection() {
        let mut store = PlanStore::default();
        let table = store.add_table(TableDraft::default());
        assert!(store.select_table(table.id).is_some());
        assert!(store.select_table(42).is_none());
        assert!(store.selected_table().is_none());
    }

    #[test]
    fn test_tabs_are_isolated() {
        let mut store = PlanStore::default();
        store.set_tab(Tab::Banquet);
        store.generate_banquet_layout(&BanquetGridParams::default());
        let banquet = store.state().banquet.clone();

        store.generate_seat_grid(&SeatGridParams::default());
        assert_eq!(store.state().banquet, banquet);
        assert!(store.seats().is_empty());

        let ceremony = store.state().ceremony.clone();
        store.generate_banquet_layout(&BanquetGridParams {
            rows: 1,
            ..BanquetGridParams::default()
        });
        assert_eq!(store.state().ceremony, ceremony);

        store.set_tab(Tab::Ceremony);
        assert_eq!(store.seats().len(), 120);
        assert!(store.tables().is_empty());
    }

    #[test]
    fn test_areas_belong_to_active_tab() {
        let mut store = PlanStore::default();
        let area = store.add_area(square());
        assert_eq!(area.tab, Tab::Ceremony);

        store.set_tab(Tab::Banquet);
        assert!(store.areas().is_empty());
        let second = store.add_area(square());
        assert!(second.id > area.id);

        assert_eq!(store.area_at(Point::new(50.0, 50.0)), Some(second.id));
        assert!(store.remove_area(second.id));
        assert!(!store.remove_area(second.id));
        assert_eq!(store.state().ceremony.areas.len(), 1);
    }

    #[test]
    fn test_edge_length_moves_end_vertex() {
        let mut store = PlanStore::default();
        let area = store.add_area(square());

        assert!(store.set_area_edge_length(area.id, 0, 250.0));
        assert_eq!(store.areas()[0].points[1], Point::new(250.0, 0.0));
        assert!(!store.set_area_edge_length(area.id, 9, 10.0));
        assert!(!store.set_area_edge_length(area.id, 0, -1.0));

        assert!(store.move_area_vertex(area.id, 2, Point::new(10.0, 10.0)));
        assert_eq!(store.areas()[0].points[2], Point::new(10.0, 10.0));
    }

    #[test]
    fn test_undo_redo_restores_plan() {
        let mut store = PlanStore::default();
        store.add_area(square());
        let table = store.add_table(TableDraft::default());
        store.select_table(table.id);

        assert!(store.undo());
        assert!(store.tables().is_empty());
        assert_eq!(store.areas().len(), 1);
        assert!(store.selected_table().is_none());

        assert!(store.undo());
        assert!(store.areas().is_empty());
        assert!(!store.undo());

        assert!(store.redo());
        assert!(store.redo());
        assert_eq!(store.tables().len(), 1);
        assert!(!store.redo());
    }

    #[test]
    fn test_undo_across_tabs_keeps_other_tab() {
        let mut store = PlanStore::default();
        store.generate_seat_grid(&SeatGridParams::default());
        store.set_tab(Tab::Banquet);
        store.generate_banquet_layout(&BanquetGridParams::default());

        assert!(store.undo());
        assert!(store.tables().is_empty());
        assert_eq!(store.state().ceremony.seats.len(), 120);
    }

    #[test]
    fn test_seat_toggle_and_assignment() {
        let mut store = PlanStore::default();
        store.generate_seat_grid(&SeatGridParams {
            rows: 1,
            cols: 2,
            ..SeatGridParams::default()
        });
        let guest = Guest::new("g1", "Ana");

        assert!(store.assign_seat_guest(1, Some(&guest)));
        assert_eq!(store.seats()[0].guest_name.as_deref(), Some("Ana"));

        assert!(store.toggle_seat(2));
        assert!(!store.seats()[1].enabled);
        assert!(!store.assign_seat_guest(2, Some(&guest)));
        assert!(!store.toggle_seat(99));

        assert_eq!(store.seat_at(Point::new(101.0, 80.0), 10.0), Some(1));
    }

    #[test]
    fn test_replace_state_resets_history() {
        let mut store = PlanStore::default();
        store.add_table(TableDraft::default());

        let mut state = PlanState::default();
        state.banquet.tables = generator::generate_banquet_layout(&BanquetGridParams::default());
        store.replace_state(state);

        assert_eq!(store.history().len(), 1);
        assert!(!store.can_undo());
        assert_eq!(store.state().banquet.tables.len(), 6);
    }
}
