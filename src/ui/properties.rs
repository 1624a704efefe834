// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plan properties panel.
//!
//! This module provides the side panel for the hall size, the grid
//! generators, the selected table, seat or area, and the guest list.
//! It never edits the plan directly; edits come back as actions.

use crate::models::document::HallSize;
use crate::models::guest::Guest;
use crate::models::plan::{Area, Seat, Table, TableShape};
use crate::planner::generator::{BanquetGridParams, SeatGridParams};
use crate::planner::resolver::{self, LabelSource};
use crate::planner::store::{PlanStore, TableDimension};
use crate::util::geometry;

/// Result of properties panel interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertiesAction {
    None,
    GenerateSeatGrid(SeatGridParams),
    GenerateBanquet(BanquetGridParams),
    ChangeDimension(TableDimension, String),
    ToggleShape,
    RemoveTable(u64),
    AssignGuest { guest_id: String, table_id: u64 },
    UnassignGuest(String),
    ToggleSeat(u32),
    AssignSeat { seat_id: u32, guest_id: Option<String> },
    SetHall(HallSize),
    /// Apply and persist the hall size.
    SaveHall(HallSize),
    SetEdgeLength { area_id: u64, index: usize, length: f64 },
    RemoveArea(u64),
}

pub struct PropertiesView<'a> {
    pub store: &'a PlanStore,
    pub roster: &'a [Guest],
    pub selected_area: Option<u64>,
    pub can_save_hall: bool,
}

/// Editable form state that outlives a frame.
pub struct PropertiesForm {
    pub hall: HallSize,
    pub seat_grid: SeatGridParams,
    pub banquet_grid: BanquetGridParams,
    /// Table the text fields were last filled from
    synced_table: Option<Table>,
    width: String,
    height: String,
    seats: String,
    guest_choice: Option<String>,
    seat_guest_choice: Option<String>,
    edge_index: usize,
    edge_length: String,
}

impl PropertiesForm {
    pub fn new(hall: HallSize, seat_grid: SeatGridParams, banquet_grid: BanquetGridParams) -> Self {
        Self {
            hall,
            seat_grid,
            banquet_grid,
            synced_table: None,
            width: String::new(),
            height: String::new(),
            seats: String::new(),
            guest_choice: None,
            seat_guest_choice: None,
            edge_index: 0,
            edge_length: String::new(),
        }
    }

    /// Refill the text fields whenever the selected table changed underneath them.
    fn sync_table(&mut self, table: &Table) {
        if self.synced_table.as_ref() == Some(table) {
            return;
        }
        self.width = format!("{}", table.width);
        self.height = format!("{}", table.height);
        self.seats = table.seats.to_string();
        if self.synced_table.as_ref().map(|t| t.id) != Some(table.id) {
            self.guest_choice = None;
        }
        self.synced_table = Some(table.clone());
    }
}

/// Display the properties panel.
pub fn show(ui: &mut egui::Ui, view: &PropertiesView, form: &mut PropertiesForm) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Properties");
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        hall_section(ui, view, form, &mut action);
        ui.separator();
        generator_section(ui, form, &mut action);
        ui.separator();

        if let Some(table) = view.store.selected_table() {
            table_section(ui, table, view, form, &mut action);
        } else if let Some(seat) = view.store.selected_seat() {
            seat_section(ui, seat, view.roster, form, &mut action);
        } else if let Some(area) = view
            .selected_area
            .and_then(|id| view.store.areas().iter().find(|a| a.id == id))
        {
            area_section(ui, area, form, &mut action);
        } else {
            form.synced_table = None;
            ui.label(egui::RichText::new("Nothing selected").weak());
        }

        ui.separator();
        guest_section(ui, view);
    });

    action
}

fn hall_section(ui: &mut egui::Ui, view: &PropertiesView, form: &mut PropertiesForm, action: &mut PropertiesAction) {
    ui.label(egui::RichText::new("Hall").strong());
    egui::Grid::new("hall_grid").num_columns(2).show(ui, |ui| {
        ui.label("Width");
        ui.add(egui::DragValue::new(&mut form.hall.width).speed(10.0).range(100.0..=100_000.0).suffix(" cm"));
        ui.end_row();
        ui.label("Height");
        ui.add(egui::DragValue::new(&mut form.hall.height).speed(10.0).range(100.0..=100_000.0).suffix(" cm"));
        ui.end_row();
    });
    ui.horizontal(|ui| {
        if ui.button("Apply").clicked() {
            *action = PropertiesAction::SetHall(form.hall);
        }
        let save = ui
            .add_enabled(view.can_save_hall, egui::Button::new("Save"))
            .on_disabled_hover_text("No event configured");
        if save.clicked() {
            *action = PropertiesAction::SaveHall(form.hall);
        }
    });
}

fn generator_section(ui: &mut egui::Ui, form: &mut PropertiesForm, action: &mut PropertiesAction) {
    ui.collapsing("Ceremony seat grid", |ui| {
        let grid = &mut form.seat_grid;
        egui::Grid::new("seat_grid").num_columns(2).show(ui, |ui| {
            ui.label("Rows");
            ui.add(egui::DragValue::new(&mut grid.rows).range(1..=100));
            ui.end_row();
            ui.label("Columns");
            ui.add(egui::DragValue::new(&mut grid.cols).range(1..=100));
            ui.end_row();
            ui.label("Spacing");
            ui.add(egui::DragValue::new(&mut grid.gap).range(1.0..=1000.0).suffix(" cm"));
            ui.end_row();
            ui.label("Start");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut grid.start_x).prefix("x "));
                ui.add(egui::DragValue::new(&mut grid.start_y).prefix("y "));
            });
            ui.end_row();
            ui.label("Aisle after column");
            ui.add(egui::DragValue::new(&mut grid.aisle_after).range(-1..=100));
            ui.end_row();
        });
        if ui.button("Generate seats").clicked() {
            *action = PropertiesAction::GenerateSeatGrid(*grid);
        }
    });

    ui.collapsing("Banquet table grid", |ui| {
        let grid = &mut form.banquet_grid;
        egui::Grid::new("banquet_grid").num_columns(2).show(ui, |ui| {
            ui.label("Rows");
            ui.add(egui::DragValue::new(&mut grid.rows).range(1..=50));
            ui.end_row();
            ui.label("Columns");
            ui.add(egui::DragValue::new(&mut grid.cols).range(1..=50));
            ui.end_row();
            ui.label("Seats per table");
            ui.add(egui::DragValue::new(&mut grid.seats).range(1..=40));
            ui.end_row();
            ui.label("Spacing");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut grid.gap_x).range(1.0..=2000.0).prefix("x "));
                ui.add(egui::DragValue::new(&mut grid.gap_y).range(1.0..=2000.0).prefix("y "));
            });
            ui.end_row();
            ui.label("Start");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut grid.start_x).prefix("x "));
                ui.add(egui::DragValue::new(&mut grid.start_y).prefix("y "));
            });
            ui.end_row();
        });
        if ui.button("Generate tables").clicked() {
            *action = PropertiesAction::GenerateBanquet(*grid);
        }
    });
}

fn dimension_field(
    ui: &mut egui::Ui,
    label: &str,
    buffer: &mut String,
    field: TableDimension,
    action: &mut PropertiesAction,
) {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(70.0));
    if response.lost_focus() {
        *action = PropertiesAction::ChangeDimension(field, buffer.clone());
    }
    ui.end_row();
}

fn table_section(
    ui: &mut egui::Ui,
    table: &Table,
    view: &PropertiesView,
    form: &mut PropertiesForm,
    action: &mut PropertiesAction,
) {
    form.sync_table(table);
    let occupancy = resolver::resolve_table(table, view.roster);

    ui.label(egui::RichText::new(&table.name).strong());
    egui::Grid::new("table_grid").num_columns(2).show(ui, |ui| {
        match table.shape {
            TableShape::Rectangle => {
                dimension_field(ui, "Width", &mut form.width, TableDimension::Width, action);
                dimension_field(ui, "Height", &mut form.height, TableDimension::Height, action);
            }
            TableShape::Circle => {
                dimension_field(ui, "Diameter", &mut form.width, TableDimension::Diameter, action);
            }
        }
        dimension_field(ui, "Seats", &mut form.seats, TableDimension::Seats, action);
    });

    ui.horizontal(|ui| {
        let label = match table.shape {
            TableShape::Rectangle => "Make round",
            TableShape::Circle => "Make rectangular",
        };
        if ui.button(label).clicked() {
            *action = PropertiesAction::ToggleShape;
        }
        if ui.button("Delete table").clicked() {
            *action = PropertiesAction::RemoveTable(table.id);
        }
    });

    let occupied = format!("{} of {} seats taken", occupancy.count, table.seats);
    if occupancy.is_over_capacity(table) {
        ui.colored_label(egui::Color32::from_rgb(200, 60, 60), occupied);
    } else {
        ui.label(occupied);
    }

    for label in &occupancy.labels {
        ui.horizontal(|ui| {
            ui.label(label.text());
            match (&label.source, &label.guest_id) {
                (LabelSource::Roster, Some(id)) => {
                    if ui.small_button("✕").on_hover_text("Remove from table").clicked() {
                        *action = PropertiesAction::UnassignGuest(id.clone());
                    }
                }
                _ => {
                    ui.label(egui::RichText::new("(table list)").weak());
                }
            }
        });
    }

    let free = resolver::unassigned_guests(view.roster, view.store.tables());
    if free.is_empty() {
        return;
    }
    ui.horizontal(|ui| {
        let selected_text = form
            .guest_choice
            .as_ref()
            .and_then(|id| free.iter().find(|g| &g.id == id))
            .map(|g| g.display_name())
            .unwrap_or_else(|| "Choose guest".to_string());
        egui::ComboBox::from_id_source("table_guest")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for guest in &free {
                    ui.selectable_value(&mut form.guest_choice, Some(guest.id.clone()), guest.display_name());
                }
            });
        if ui.add_enabled(form.guest_choice.is_some(), egui::Button::new("Assign")).clicked() {
            if let Some(guest_id) = form.guest_choice.take() {
                *action = PropertiesAction::AssignGuest {
                    guest_id,
                    table_id: table.id,
                };
            }
        }
    });
}

fn seat_section(
    ui: &mut egui::Ui,
    seat: &Seat,
    roster: &[Guest],
    form: &mut PropertiesForm,
    action: &mut PropertiesAction,
) {
    form.synced_table = None;
    ui.label(egui::RichText::new(format!("Seat {}", seat.id)).strong());
    ui.label(format!("Position ({:.0}, {:.0}) cm", seat.x, seat.y));

    let toggle = if seat.enabled { "Disable seat" } else { "Enable seat" };
    if ui.button(toggle).clicked() {
        *action = PropertiesAction::ToggleSeat(seat.id);
    }

    match &seat.guest_name {
        Some(name) => {
            ui.horizontal(|ui| {
                ui.label(format!("Guest: {}", name));
                if ui.small_button("Clear").clicked() {
                    *action = PropertiesAction::AssignSeat {
                        seat_id: seat.id,
                        guest_id: None,
                    };
                }
            });
        }
        None => {
            ui.label(egui::RichText::new("No guest").weak());
        }
    }

    if !seat.enabled || roster.is_empty() {
        return;
    }
    ui.horizontal(|ui| {
        let selected_text = form
            .seat_guest_choice
            .as_ref()
            .and_then(|id| roster.iter().find(|g| &g.id == id))
            .map(|g| g.name.clone())
            .unwrap_or_else(|| "Choose guest".to_string());
        egui::ComboBox::from_id_source("seat_guest")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for guest in roster {
                    ui.selectable_value(&mut form.seat_guest_choice, Some(guest.id.clone()), guest.name.as_str());
                }
            });
        if ui.add_enabled(form.seat_guest_choice.is_some(), egui::Button::new("Assign")).clicked() {
            *action = PropertiesAction::AssignSeat {
                seat_id: seat.id,
                guest_id: form.seat_guest_choice.take(),
            };
        }
    });
}

fn area_section(ui: &mut egui::Ui, area: &Area, form: &mut PropertiesForm, action: &mut PropertiesAction) {
    form.synced_table = None;
    ui.label(egui::RichText::new(format!("Area ({} corners)", area.vertex_count())).strong());

    let n = area.points.len();
    if n >= 2 {
        form.edge_index = form.edge_index.min(n - 1);
        let current = geometry::distance(area.points[form.edge_index], area.points[(form.edge_index + 1) % n]);

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("area_edge")
                .selected_text(format!("Side {}", form.edge_index + 1))
                .show_ui(ui, |ui| {
                    for index in 0..n {
                        ui.selectable_value(&mut form.edge_index, index, format!("Side {}", index + 1));
                    }
                });
            ui.label(format!("{:.0} cm", current));
        });
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut form.edge_length).desired_width(70.0).hint_text("length"));
            if ui.button("Set length").clicked() {
                match form.edge_length.trim().parse::<f64>() {
                    Ok(length) => {
                        *action = PropertiesAction::SetEdgeLength {
                            area_id: area.id,
                            index: form.edge_index,
                            length,
                        };
                    }
                    Err(_) => log::warn!("Ignoring edge length {:?}", form.edge_length),
                }
            }
        });
    }

    if ui.button("Erase area").clicked() {
        *action = PropertiesAction::RemoveArea(area.id);
    }
}

fn guest_section(ui: &mut egui::Ui, view: &PropertiesView) {
    let free = resolver::unassigned_guests(view.roster, view.store.tables());
    let title = format!("Guests ({}, {} without table)", view.roster.len(), free.len());
    ui.collapsing(title, |ui| {
        if view.roster.is_empty() {
            ui.label(egui::RichText::new("File → Load Guest List...").weak());
            return;
        }
        let seated: u32 = view
            .store
            .tables()
            .iter()
            .map(|t| resolver::occupant_count(t, view.roster))
            .sum();
        ui.label(format!("{} people seated at tables", seated));
        for guest in free {
            ui.label(guest.display_name());
        }
    });
}
