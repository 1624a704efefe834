// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the hall floor plan.
//!
//! This module draws the hall, areas, tables with their guest markers and
//! ceremony seats, and reports pointer events in plan centimetres. What an
//! event means depends on the active tool and is decided by the app.

use crate::app::{Gesture, Tool};
use crate::models::document::HallSize;
use crate::models::guest::Guest;
use crate::models::plan::{Area, Point, Seat, Table, TableShape};
use crate::planner::resolver;
use crate::planner::store::PlanStore;
use crate::util::geometry::{self, PlanTransform};
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};

/// Seat chair radius in centimetres.
const SEAT_RADIUS: f64 = 15.0;
/// Guest marker distance from a table edge, in centimetres.
const MARKER_OFFSET: f64 = 12.0;
const LABEL_OFFSET: f64 = 30.0;

/// Pointer event on the plan, in plan coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    None,
    Click(Point),
    DoubleClick(Point),
    DragStart(Point),
    Drag(Point),
    DragEnd,
}

/// Everything the canvas needs to draw one frame.
pub struct CanvasView<'a> {
    pub store: &'a PlanStore,
    pub roster: &'a [Guest],
    pub hall: HallSize,
    pub tool: Tool,
    pub gesture: &'a Gesture,
    pub selected_area: Option<u64>,
    pub loading: bool,
    pub status: Option<&'a str>,
}

/// Display the main canvas area and handle mouse interactions.
pub fn show(ui: &mut egui::Ui, view: &CanvasView) -> CanvasAction {
    let mut action = CanvasAction::None;

    let status_height = 24.0;
    let available = ui.available_size() - egui::vec2(0.0, status_height);
    let (response, painter) = ui.allocate_painter(available.max(egui::vec2(1.0, 1.0)), egui::Sense::click_and_drag());
    let canvas_rect = response.rect;

    // Set background color
    painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(40));

    let transform = PlanTransform::fit(
        view.hall,
        canvas_rect.min.x,
        canvas_rect.min.y,
        canvas_rect.width(),
        canvas_rect.height(),
        20.0,
    );
    let to_screen = |p: Point| {
        let (x, y) = transform.to_screen(p);
        egui::pos2(x, y)
    };

    draw_hall(&painter, view.hall, &transform);

    for area in view.store.areas() {
        let moving = match view.gesture {
            Gesture::MovingVertex { area_id, index, position } if *area_id == area.id => Some((*index, *position)),
            _ => None,
        };
        let selected = view.selected_area == Some(area.id);
        draw_area(&painter, area, &transform, selected, moving, view.tool == Tool::Select);
    }

    let selected_table = view.store.selected_table().map(|t| t.id);
    for table in view.store.tables() {
        let position = match view.gesture {
            Gesture::MovingTable { id, position, .. } if *id == table.id => *position,
            _ => Point::new(table.x, table.y),
        };
        draw_table(&painter, table, position, view.roster, &transform, selected_table == Some(table.id));
    }

    let selected_seat = view.store.selected_seat().map(|s| s.id);
    for seat in view.store.seats() {
        draw_seat(&painter, seat, &transform, selected_seat == Some(seat.id));
    }

    // Draw in-progress gesture
    match view.gesture {
        Gesture::Drawing(points) if !points.is_empty() => {
            let screen: Vec<Pos2> = points.iter().map(|p| to_screen(*p)).collect();
            painter.add(egui::Shape::line(screen.clone(), Stroke::new(2.0, Color32::LIGHT_BLUE)));
            for point in screen {
                painter.circle_filled(point, 3.0, Color32::WHITE);
            }
        }
        Gesture::Rectangle { start, end } => {
            let rect = Rect::from_two_pos(to_screen(*start), to_screen(*end));
            painter.rect_stroke(rect, 0.0, Stroke::new(2.0, Color32::LIGHT_BLUE));
        }
        _ => {}
    }

    if view.loading {
        painter.text(
            canvas_rect.left_top() + egui::vec2(10.0, 10.0),
            Align2::LEFT_TOP,
            "Loading hall size...",
            FontId::proportional(14.0),
            Color32::from_gray(200),
        );
    }

    // Pointer events, most specific first.
    let pointer = response.interact_pointer_pos().map(|pos| transform.to_plan(pos.x, pos.y));
    if let Some(p) = pointer {
        if response.double_clicked() {
            action = CanvasAction::DoubleClick(p);
        } else if response.clicked() {
            action = CanvasAction::Click(p);
        } else if response.drag_started() {
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .map(|pos| transform.to_plan(pos.x, pos.y))
                .unwrap_or(p);
            action = CanvasAction::DragStart(origin);
        } else if response.dragged() {
            action = CanvasAction::Drag(p);
        }
    }
    if response.drag_stopped() {
        action = CanvasAction::DragEnd;
    }

    // Display current tool info at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("Current tool: {:?}", view.tool));
        ui.separator();
        ui.label(format!("{} plan", view.store.tab().label()));
        ui.separator();
        ui.label(format!("Hall {:.0} x {:.0} cm", view.hall.width, view.hall.height));
        if let Some(pos) = response.hover_pos() {
            let p = transform.to_plan(pos.x, pos.y);
            ui.separator();
            ui.label(format!("({:.0}, {:.0})", p.x, p.y));
        }
        if let Some(status) = view.status {
            ui.separator();
            ui.label(egui::RichText::new(status).weak());
        }
    });

    action
}

fn draw_hall(painter: &egui::Painter, hall: HallSize, transform: &PlanTransform) {
    let (x0, y0) = transform.to_screen(Point::new(0.0, 0.0));
    let (x1, y1) = transform.to_screen(Point::new(hall.width, hall.height));
    let rect = Rect::from_min_max(egui::pos2(x0, y0), egui::pos2(x1, y1));
    painter.rect_filled(rect, 0.0, Color32::from_gray(235));

    // Metre grid
    let grid = Stroke::new(1.0, Color32::from_gray(215));
    let mut x = 100.0;
    while x < hall.width {
        let (sx, _) = transform.to_screen(Point::new(x, 0.0));
        painter.line_segment([egui::pos2(sx, y0), egui::pos2(sx, y1)], grid);
        x += 100.0;
    }
    let mut y = 100.0;
    while y < hall.height {
        let (_, sy) = transform.to_screen(Point::new(0.0, y));
        painter.line_segment([egui::pos2(x0, sy), egui::pos2(x1, sy)], grid);
        y += 100.0;
    }

    painter.rect_stroke(rect, 0.0, Stroke::new(2.0, Color32::from_gray(120)));
}

/// Draw an area on the canvas.
fn draw_area(
    painter: &egui::Painter,
    area: &Area,
    transform: &PlanTransform,
    selected: bool,
    moving: Option<(usize, Point)>,
    show_vertices: bool,
) {
    if area.points.is_empty() {
        return;
    }

    let screen_points: Vec<Pos2> = area
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let p = match moving {
                Some((index, position)) if index == i => position,
                _ => *p,
            };
            let (x, y) = transform.to_screen(p);
            egui::pos2(x, y)
        })
        .collect();

    let color = if selected {
        Color32::from_rgb(30, 110, 220)
    } else {
        Color32::from_rgb(150, 110, 60)
    };
    painter.add(egui::Shape::closed_line(screen_points.clone(), Stroke::new(2.0, color)));

    if show_vertices || selected {
        for point in &screen_points {
            painter.circle_filled(*point, 4.0, color);
            painter.circle_stroke(*point, 4.0, Stroke::new(1.0, Color32::BLACK));
        }
    }
}

fn draw_table(
    painter: &egui::Painter,
    table: &Table,
    position: Point,
    roster: &[Guest],
    transform: &PlanTransform,
    selected: bool,
) {
    let mut placed = table.clone();
    placed.x = position.x;
    placed.y = position.y;

    let occupancy = resolver::resolve_table(&placed, roster);
    let fill = if !placed.enabled {
        Color32::from_gray(160)
    } else if occupancy.is_over_capacity(&placed) {
        Color32::from_rgb(240, 170, 170)
    } else if occupancy.count > 0 && occupancy.count == placed.seats {
        Color32::from_rgb(180, 225, 180)
    } else {
        Color32::WHITE
    };
    let stroke = if selected {
        Stroke::new(3.0, Color32::from_rgb(30, 110, 220))
    } else {
        Stroke::new(1.5, Color32::from_gray(60))
    };

    let (cx, cy) = transform.to_screen(position);
    let center = egui::pos2(cx, cy);
    match placed.shape {
        TableShape::Circle => {
            let radius = transform.length_to_screen(placed.diameter() / 2.0);
            painter.circle_filled(center, radius, fill);
            painter.circle_stroke(center, radius, stroke);
        }
        TableShape::Rectangle => {
            let size = egui::vec2(
                transform.length_to_screen(placed.width),
                transform.length_to_screen(placed.height),
            );
            let rect = Rect::from_center_size(center, size);
            painter.rect_filled(rect, 2.0, fill);
            painter.rect_stroke(rect, 2.0, stroke);
        }
    }

    painter.text(
        center - egui::vec2(0.0, 6.0),
        Align2::CENTER_CENTER,
        &placed.name,
        FontId::proportional(12.0),
        Color32::BLACK,
    );
    painter.text(
        center + egui::vec2(0.0, 8.0),
        Align2::CENTER_CENTER,
        format!("{}/{}", occupancy.count, placed.seats),
        FontId::proportional(10.0),
        Color32::from_gray(70),
    );

    let markers = geometry::seat_marker_positions(&placed, occupancy.labels.len(), MARKER_OFFSET);
    let label_spots = geometry::seat_marker_positions(&placed, occupancy.labels.len(), LABEL_OFFSET);
    for ((marker, spot), label) in markers.iter().zip(&label_spots).zip(&occupancy.labels) {
        let (mx, my) = transform.to_screen(*marker);
        painter.circle_filled(egui::pos2(mx, my), 4.0, Color32::from_rgb(60, 150, 90));

        let (lx, ly) = transform.to_screen(*spot);
        painter.text(
            egui::pos2(lx, ly),
            Align2::CENTER_CENTER,
            label.text(),
            FontId::proportional(9.0),
            Color32::from_gray(30),
        );
    }
}

fn draw_seat(painter: &egui::Painter, seat: &Seat, transform: &PlanTransform, selected: bool) {
    let (x, y) = transform.to_screen(Point::new(seat.x, seat.y));
    let center = egui::pos2(x, y);
    let radius = transform.length_to_screen(SEAT_RADIUS).max(2.0);

    let fill = if !seat.enabled {
        Color32::from_gray(110)
    } else if seat.is_assigned() {
        Color32::from_rgb(120, 200, 140)
    } else {
        Color32::WHITE
    };
    painter.circle_filled(center, radius, fill);
    let stroke = if selected {
        Stroke::new(2.5, Color32::from_rgb(30, 110, 220))
    } else {
        Stroke::new(1.0, Color32::from_gray(60))
    };
    painter.circle_stroke(center, radius, stroke);

    if !seat.enabled {
        let d = radius * 0.6;
        let cross = Stroke::new(1.5, Color32::from_gray(230));
        painter.line_segment([center + egui::vec2(-d, -d), center + egui::vec2(d, d)], cross);
        painter.line_segment([center + egui::vec2(-d, d), center + egui::vec2(d, -d)], cross);
    }
}
