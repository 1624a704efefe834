// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Floor plan data structures.
//!
//! This module defines the spatial entities placed on a hall floor plan:
//! free-drawn areas, tables and ceremony seats, grouped per plan tab.
//! All coordinates are in centimetres.

use super::guest::Loose;
use serde::{Deserialize, Serialize};

/// A 2D point in plan centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which plan a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Ceremony,
    Banquet,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Ceremony => "Ceremony",
            Tab::Banquet => "Banquet",
        }
    }
}

/// A free-drawn polygon (obstacle or decoration) on the floor plan.
///
/// Point order defines the polygon boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: u64,
    pub points: Vec<Point>,
    pub tab: Tab,
}

impl Area {
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Move a single vertex. Out-of-range indices are ignored.
    pub fn update_vertex(&mut self, index: usize, point: Point) -> bool {
        match self.points.get_mut(index) {
            Some(vertex) => {
                *vertex = point;
                true
            }
            None => false,
        }
    }
}

/// A single ceremony chair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub enabled: bool,
    #[serde(default)]
    pub guest_id: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
}

impl Seat {
    pub fn is_assigned(&self) -> bool {
        self.guest_id.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    #[default]
    Rectangle,
    Circle,
}

impl TableShape {
    pub fn toggled(self) -> Self {
        match self {
            TableShape::Rectangle => TableShape::Circle,
            TableShape::Circle => TableShape::Rectangle,
        }
    }
}

/// A guest embedded directly in a banquet table record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedGuest {
    #[serde(default)]
    pub id: Option<Loose>,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "companions")]
    pub companion: Option<Loose>,
}

impl AssignedGuest {
    /// Identifier as a comparable key; blank ids count as missing.
    pub fn key(&self) -> Option<String> {
        self.id.as_ref().map(Loose::as_key).filter(|k| !k.is_empty())
    }
}

/// A table on either plan.
///
/// `x`/`y` is the table centre. Circular tables use `width` as diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: u64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shape: TableShape,
    pub seats: u32,
    pub enabled: bool,
    #[serde(default)]
    pub guest_id: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub assigned_guests: Vec<AssignedGuest>,
}

impl Table {
    pub const DEFAULT_WIDTH: f64 = 80.0;
    pub const DEFAULT_HEIGHT: f64 = 60.0;
    pub const DEFAULT_SEATS: u32 = 8;

    /// Create an enabled, unassigned rectangular table with default footprint.
    pub fn new(id: u64, name: String, x: f64, y: f64, seats: u32) -> Self {
        Self {
            id,
            name,
            x,
            y,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            shape: TableShape::Rectangle,
            seats,
            enabled: true,
            guest_id: None,
            guest_name: None,
            assigned_guests: Vec::new(),
        }
    }

    pub fn diameter(&self) -> f64 {
        self.width
    }

    pub fn contains(&self, point: Point) -> bool {
        match self.shape {
            TableShape::Circle => {
                let r = self.diameter() / 2.0;
                let (dx, dy) = (point.x - self.x, point.y - self.y);
                dx * dx + dy * dy <= r * r
            }
            TableShape::Rectangle => {
                (point.x - self.x).abs() <= self.width / 2.0
                    && (point.y - self.y).abs() <= self.height / 2.0
            }
        }
    }
}

/// Areas, tables and seats of one tab.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TabLayout {
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

/// Both plans. Ceremony and banquet never share entities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanState {
    #[serde(default)]
    pub ceremony: TabLayout,
    #[serde(default)]
    pub banquet: TabLayout,
}

impl PlanState {
    pub fn layout(&self, tab: Tab) -> &TabLayout {
        match tab {
            Tab::Ceremony => &self.ceremony,
            Tab::Banquet => &self.banquet,
        }
    }

    pub fn layout_mut(&mut self, tab: Tab) -> &mut TabLayout {
        match tab {
            Tab::Ceremony => &mut self.ceremony,
            Tab::Banquet => &mut self.banquet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains_uses_diameter() {
        let mut table = Table::new(1, "Mesa 1".into(), 100.0, 100.0, 8);
        table.shape = TableShape::Circle;
        table.width = 100.0;
        table.height = 20.0;

        assert!(table.contains(Point::new(100.0, 145.0)));
        assert!(!table.contains(Point::new(140.0, 140.0)));
    }

    #[test]
    fn test_table_deserializes_camel_case_fields() {
        let json = r#"{
            "id": 5, "name": "Mesa 5", "x": 10, "y": 20, "width": 80, "height": 60,
            "shape": "circle", "seats": 10, "enabled": true,
            "assignedGuests": [{"id": "g1", "name": "Ana", "companions": "2"}]
        }"#;
        let table: Table = serde_json::from_str(json).unwrap();

        assert_eq!(table.shape, TableShape::Circle);
        assert_eq!(table.guest_id, None);
        assert_eq!(table.assigned_guests.len(), 1);
        assert_eq!(table.assigned_guests[0].key().as_deref(), Some("g1"));
    }
}
