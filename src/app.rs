// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It turns canvas pointer events into plan edits
//! according to the active tool, and coordinates the plan store, the
//! guest roster and hall persistence.

use crate::config::AppConfig;
use crate::io::persistence::{self, FileHallStore, HallLoader, HallStore, MemoryHallStore};
use crate::io::serialization;
use crate::models::{
    document::{HallSize, PlanDocument},
    guest::Guest,
    plan::{Point, Tab},
};
use crate::planner::{
    history::History,
    resolver,
    store::{PlanStore, TableDraft},
};
use crate::ui::{canvas, properties, toolbar};
use crate::util::geometry;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Pick radius around seats and area vertices, in centimetres.
const PICK_RADIUS: f64 = 20.0;
/// Freehand samples closer than this are dropped.
const FREEHAND_STEP: f64 = 5.0;

/// Current drawing tool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Freehand,
    Line,
    Rectangle,
    Table,
    Erase,
}

/// Pointer gesture in progress on the canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Freehand or line drawing not yet turned into an area.
    Drawing(Vec<Point>),
    Rectangle { start: Point, end: Point },
    /// `grab` is the pointer offset from the table centre.
    MovingTable { id: u64, grab: Point, position: Point },
    MovingVertex { area_id: u64, index: usize, position: Point },
}

/// Main application state.
pub struct SeatPlanApp {
    config: AppConfig,

    /// Currently selected drawing tool
    current_tool: Tool,

    store: PlanStore,

    /// Guest roster (owned by the guest list, edited here only for table assignment)
    roster: Vec<Guest>,

    hall: HallSize,
    hall_store: Option<Arc<dyn HallStore>>,
    hall_loader: Option<HallLoader>,
    hall_pending: bool,

    gesture: Gesture,

    /// Area picked with the select tool (edge editing)
    selected_area: Option<u64>,

    form: properties::PropertiesForm,

    /// Last message for the status bar
    status: Option<String>,
}

impl SeatPlanApp {
    /// Create the editor and schedule the hall load for the configured event.
    pub fn new(config: AppConfig) -> Self {
        let hall_store: Option<Arc<dyn HallStore>> = config.event_id.as_ref().map(|_| {
            match &config.data_dir {
                Some(dir) => Arc::new(FileHallStore::new(dir.clone())) as Arc<dyn HallStore>,
                None => Arc::new(MemoryHallStore::default()) as Arc<dyn HallStore>,
            }
        });

        let hall_loader = match (&hall_store, &config.event_id) {
            (Some(store), Some(event_id)) => {
                let loader = HallLoader::new(
                    Arc::clone(store),
                    Duration::from_millis(config.load_debounce_ms),
                );
                loader.request(event_id);
                Some(loader)
            }
            _ => {
                log::info!("No event configured, using default hall");
                None
            }
        };

        let hall = config.default_hall;
        Self {
            current_tool: Tool::Select,
            store: PlanStore::new(History::new(config.history_limit)),
            roster: Vec::new(),
            hall,
            hall_pending: hall_loader.is_some(),
            hall_store,
            hall_loader,
            gesture: Gesture::Idle,
            selected_area: None,
            form: properties::PropertiesForm::new(hall, config.seat_grid, config.banquet_grid),
            status: None,
            config,
        }
    }

    fn report_error(&mut self, message: String) {
        log::error!("{}", message);
        self.status = Some(message);
    }

    fn poll_hall_loader(&mut self) {
        let Some(outcome) = self.hall_loader.as_ref().and_then(HallLoader::poll) else {
            return;
        };
        self.hall_pending = false;
        self.hall = outcome.hall_or(self.config.default_hall);
        self.form.hall = self.hall;
        if let persistence::HallLoad::Failed(e) = outcome {
            self.status = Some(format!("Hall not loaded ({}), using default size", e));
        }
    }

    fn reload_hall(&mut self) {
        if let (Some(loader), Some(event_id)) = (&self.hall_loader, &self.config.event_id) {
            loader.request(event_id);
            self.hall_pending = true;
        }
    }

    fn save_hall(&mut self) {
        match (&self.hall_store, &self.config.event_id) {
            (Some(store), Some(event_id)) => {
                // Fire and forget; the worker logs failures.
                let _ = persistence::save_hall_in_background(Arc::clone(store), event_id.clone(), self.hall);
                self.status = Some(format!("Saving hall {}x{}", self.hall.width, self.hall.height));
            }
            _ => self.status = Some("No event configured, hall size not saved".to_string()),
        }
    }

    fn set_hall(&mut self, size: HallSize) -> bool {
        if !size.is_usable() {
            log::warn!("Ignoring hall size {}x{}", size.width, size.height);
            return false;
        }
        self.hall = size;
        true
    }

    fn set_tab(&mut self, tab: Tab) {
        self.store.set_tab(tab);
        self.selected_area = None;
        self.gesture = Gesture::Idle;
    }

    fn set_tool(&mut self, tool: Tool) {
        if self.current_tool != tool {
            self.current_tool = tool;
            self.gesture = Gesture::Idle;
        }
    }

    /// Turn an in-progress freehand or line drawing into an area.
    fn finish_drawing(&mut self) {
        if let Gesture::Drawing(points) = std::mem::take(&mut self.gesture) {
            let points = geometry::thin_path(&points, FREEHAND_STEP);
            if points.len() >= 2 {
                self.store.add_area(points);
            } else {
                log::debug!("Discarded drawing with {} points", points.len());
            }
        }
    }

    fn cancel_gesture(&mut self) {
        self.gesture = Gesture::Idle;
    }

    fn undo(&mut self) {
        if self.store.undo() {
            self.drop_stale_area_selection();
        }
    }

    fn redo(&mut self) {
        if self.store.redo() {
            self.drop_stale_area_selection();
        }
    }

    fn drop_stale_area_selection(&mut self) {
        if let Some(id) = self.selected_area {
            if !self.store.areas().iter().any(|a| a.id == id) {
                self.selected_area = None;
            }
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.store.selected_table().map(|t| t.id) {
            self.store.remove_table(id);
        } else if let Some(id) = self.selected_area.take() {
            self.store.remove_area(id);
        }
    }

    fn vertex_at(&self, point: Point) -> Option<(u64, usize)> {
        self.store.areas().iter().rev().find_map(|area| {
            area.points
                .iter()
                .position(|v| geometry::distance(*v, point) <= PICK_RADIUS)
                .map(|index| (area.id, index))
        })
    }

    /// Select whatever lies under `point`: seat, then table, then area.
    fn select_at(&mut self, point: Point) {
        self.selected_area = None;
        if let Some(id) = self.store.seat_at(point, PICK_RADIUS) {
            self.store.select_seat(id);
        } else if let Some(id) = self.store.table_at(point) {
            self.store.select_table(id);
        } else if let Some(id) = self.store.area_at(point) {
            self.store.clear_selection();
            self.selected_area = Some(id);
        } else {
            self.store.clear_selection();
        }
    }

    fn handle_canvas_action(&mut self, action: canvas::CanvasAction) {
        use canvas::CanvasAction;

        match (self.current_tool, action) {
            (_, CanvasAction::None) => {}

            (Tool::Select, CanvasAction::Click(p)) => self.select_at(p),
            (Tool::Select, CanvasAction::DragStart(p)) => {
                if let Some(table) = self.store.table_at(p).and_then(|id| self.store.select_table(id)) {
                    self.gesture = Gesture::MovingTable {
                        id: table.id,
                        grab: Point::new(p.x - table.x, p.y - table.y),
                        position: Point::new(table.x, table.y),
                    };
                } else if let Some((area_id, index)) = self.vertex_at(p) {
                    self.selected_area = Some(area_id);
                    self.gesture = Gesture::MovingVertex { area_id, index, position: p };
                }
            }
            (Tool::Select, CanvasAction::Drag(p)) => match &mut self.gesture {
                Gesture::MovingTable { grab, position, .. } => {
                    *position = Point::new(p.x - grab.x, p.y - grab.y);
                }
                Gesture::MovingVertex { position, .. } => *position = p,
                _ => {}
            },
            (Tool::Select, CanvasAction::DragEnd) => match std::mem::take(&mut self.gesture) {
                Gesture::MovingTable { id, position, .. } => {
                    self.store.move_table(id, position.x, position.y);
                }
                Gesture::MovingVertex { area_id, index, position } => {
                    self.store.move_area_vertex(area_id, index, position);
                }
                _ => {}
            },

            (Tool::Freehand, CanvasAction::DragStart(p)) => self.gesture = Gesture::Drawing(vec![p]),
            (Tool::Freehand, CanvasAction::Drag(p)) => {
                if let Gesture::Drawing(points) = &mut self.gesture {
                    points.push(p);
                }
            }
            (Tool::Freehand, CanvasAction::DragEnd) => self.finish_drawing(),

            (Tool::Line, CanvasAction::Click(p)) => match &mut self.gesture {
                Gesture::Drawing(points) => points.push(p),
                _ => self.gesture = Gesture::Drawing(vec![p]),
            },
            (Tool::Line, CanvasAction::DoubleClick(_)) => self.finish_drawing(),

            (Tool::Rectangle, CanvasAction::DragStart(p)) => {
                self.gesture = Gesture::Rectangle { start: p, end: p };
            }
            (Tool::Rectangle, CanvasAction::Drag(p)) => {
                if let Gesture::Rectangle { end, .. } = &mut self.gesture {
                    *end = p;
                }
            }
            (Tool::Rectangle, CanvasAction::DragEnd) => {
                if let Gesture::Rectangle { start, end } = std::mem::take(&mut self.gesture) {
                    if (end.x - start.x).abs() > 1.0 && (end.y - start.y).abs() > 1.0 {
                        self.store.add_area(geometry::rectangle_points(start, end));
                    }
                }
            }

            (Tool::Table, CanvasAction::Click(p)) => {
                let table = self.store.add_table(TableDraft::at(p));
                self.store.select_table(table.id);
            }

            (Tool::Erase, CanvasAction::Click(p)) => {
                if let Some(id) = self.store.area_at(p) {
                    self.store.remove_area(id);
                    if self.selected_area == Some(id) {
                        self.selected_area = None;
                    }
                }
            }

            _ => {}
        }
    }

    fn handle_properties_action(&mut self, action: properties::PropertiesAction) {
        use properties::PropertiesAction;

        match action {
            PropertiesAction::None => {}
            PropertiesAction::GenerateSeatGrid(params) => {
                self.store.generate_seat_grid(&params.clamped());
            }
            PropertiesAction::GenerateBanquet(params) => {
                self.store.generate_banquet_layout(&params.clamped());
            }
            PropertiesAction::ChangeDimension(field, value) => {
                self.store.change_table_dimension(field, &value);
            }
            PropertiesAction::ToggleShape => {
                self.store.toggle_table_shape();
            }
            PropertiesAction::RemoveTable(id) => {
                self.store.remove_table(id);
            }
            PropertiesAction::AssignGuest { guest_id, table_id } => {
                if let Some(table) = self.store.tables().iter().find(|t| t.id == table_id) {
                    resolver::assign_guest_to_table(&mut self.roster, &guest_id, table);
                }
            }
            PropertiesAction::UnassignGuest(guest_id) => {
                resolver::unassign_guest(&mut self.roster, &guest_id);
            }
            PropertiesAction::ToggleSeat(id) => {
                self.store.toggle_seat(id);
            }
            PropertiesAction::AssignSeat { seat_id, guest_id } => {
                let guest = guest_id.and_then(|id| self.roster.iter().find(|g| g.id == id));
                self.store.assign_seat_guest(seat_id, guest);
            }
            PropertiesAction::SetHall(size) => {
                self.set_hall(size);
            }
            PropertiesAction::SaveHall(size) => {
                if self.set_hall(size) {
                    self.save_hall();
                }
            }
            PropertiesAction::SetEdgeLength { area_id, index, length } => {
                self.store.set_area_edge_length(area_id, index, length);
            }
            PropertiesAction::RemoveArea(id) => {
                self.store.remove_area(id);
                self.selected_area = None;
            }
        }
    }

    /// Export the plan and hall to a file.
    fn export_plan(&mut self, path: PathBuf) {
        let document = PlanDocument::new(self.config.event_id.clone(), self.hall, self.store.state().clone());
        match serialization::export_document(&document, &path) {
            Ok(()) => {
                log::info!("Exported plan to {}", path.display());
                self.status = Some(format!("Saved {}", path.display()));
            }
            Err(e) => self.report_error(format!("Failed to export plan: {:#}", e)),
        }
    }

    fn import_plan(&mut self, path: PathBuf) {
        match serialization::import_document(&path) {
            Ok(document) => {
                if document.hall.is_usable() {
                    self.hall = document.hall;
                    self.form.hall = document.hall;
                }
                self.store.replace_state(document.plan);
                self.selected_area = None;
                self.gesture = Gesture::Idle;
                self.status = Some(format!("Opened {}", path.display()));
            }
            Err(e) => self.report_error(format!("Failed to import plan: {:#}", e)),
        }
    }

    fn import_roster(&mut self, path: PathBuf) {
        match serialization::import_guests(&path) {
            Ok(roster) => {
                log::info!("Loaded {} guests from {}", roster.len(), path.display());
                self.status = Some(format!("{} guests loaded", roster.len()));
                self.roster = roster;
            }
            Err(e) => self.report_error(format!("Failed to load guests: {:#}", e)),
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.current_tool == Tool::Line && matches!(self.gesture, Gesture::Drawing(_)) {
                // Finish line on Escape
                self.finish_drawing();
            } else {
                self.cancel_gesture();
                self.store.clear_selection();
                self.selected_area = None;
            }
        }

        // Only process if no text field is focused (to avoid deleting while editing values)
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace)) {
            self.delete_selected();
        }

        // Handle undo (Ctrl+Z)
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift) {
            self.undo();
        }

        // Handle redo (Ctrl+Shift+Z or Ctrl+Y)
        if ctx.input(|i| {
            (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
                || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        }) {
            self.redo();
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Plan...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Plan", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.import_plan(path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Save Plan", |ui| {
                        if ui.button("Save as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("plan.yaml")
                                .save_file()
                            {
                                self.export_plan(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Save as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("plan.json")
                                .save_file()
                            {
                                self.export_plan(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Load Guest List...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Guests", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.import_roster(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_event = self.config.event_id.is_some();
                    if ui.add_enabled(has_event, egui::Button::new("Reload Hall Size")).clicked() {
                        self.reload_hall();
                        ui.close_menu();
                    }
                    if ui.add_enabled(has_event, egui::Button::new("Save Hall Size")).clicked() {
                        self.save_hall();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.add_enabled(self.store.can_undo(), egui::Button::new("Undo (Ctrl+Z)")).clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    if ui.add_enabled(self.store.can_redo(), egui::Button::new("Redo (Ctrl+Shift+Z)")).clicked() {
                        self.redo();
                        ui.close_menu();
                    }

                    ui.separator();

                    let has_selection = self.store.selected_table().is_some() || self.selected_area.is_some();
                    if ui.add_enabled(has_selection, egui::Button::new("Delete Selected")).clicked() {
                        self.delete_selected();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    for tab in [Tab::Ceremony, Tab::Banquet] {
                        if ui.selectable_label(self.store.tab() == tab, tab.label()).clicked() {
                            self.set_tab(tab);
                            ui.close_menu();
                        }
                    }
                });
            });
        });
    }
}

impl eframe::App for SeatPlanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_hall_loader();
        if self.hall_pending {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.menu_bar(ctx);

        // Toolbar
        let mut tool = self.current_tool;
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, &mut tool, self.store.tab()))
            .inner;
        self.set_tool(tool);
        if let toolbar::ToolbarAction::SwitchTab(tab) = toolbar_action {
            self.set_tab(tab);
        }

        // Properties panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(280.0)
            .show(ctx, |ui| {
                let view = properties::PropertiesView {
                    store: &self.store,
                    roster: &self.roster,
                    selected_area: self.selected_area,
                    can_save_hall: self.hall_store.is_some(),
                };
                properties::show(ui, &view, &mut self.form)
            })
            .inner;
        self.handle_properties_action(properties_action);

        self.handle_keyboard(ctx);

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let view = canvas::CanvasView {
                    store: &self.store,
                    roster: &self.roster,
                    hall: self.hall,
                    tool: self.current_tool,
                    gesture: &self.gesture,
                    selected_area: self.selected_area,
                    loading: self.hall_pending,
                    status: self.status.as_deref(),
                };
                canvas::show(ui, &view)
            })
            .inner;
        self.handle_canvas_action(canvas_action);
    }
}
