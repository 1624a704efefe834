// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the mapping between plan centimetres and screen
//! pixels, seat marker placement around tables, and the small polygon
//! helpers used by the drawing tools.

use crate::models::document::HallSize;
use crate::models::plan::{Point, Table, TableShape};
use std::f64::consts::PI;

/// Mapping between plan centimetres and screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTransform {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Pixels per centimetre.
    pub scale: f32,
}

impl PlanTransform {
    /// Fit the hall into a screen rectangle, centred, keeping the aspect ratio.
    pub fn fit(hall: HallSize, min_x: f32, min_y: f32, width: f32, height: f32, margin: f32) -> Self {
        let hall = if hall.is_usable() { hall } else { HallSize::DEFAULT };
        let usable_w = (width - 2.0 * margin).max(1.0);
        let usable_h = (height - 2.0 * margin).max(1.0);
        let scale = (usable_w / hall.width as f32).min(usable_h / hall.height as f32);

        let display_w = hall.width as f32 * scale;
        let display_h = hall.height as f32 * scale;
        Self {
            origin_x: min_x + (width - display_w) / 2.0,
            origin_y: min_y + (height - display_h) / 2.0,
            scale,
        }
    }

    /// Convert plan coordinates to screen pixels.
    pub fn to_screen(&self, point: Point) -> (f32, f32) {
        (
            self.origin_x + point.x as f32 * self.scale,
            self.origin_y + point.y as f32 * self.scale,
        )
    }

    /// Convert screen pixels to plan coordinates.
    pub fn to_plan(&self, pixel_x: f32, pixel_y: f32) -> Point {
        Point {
            x: f64::from((pixel_x - self.origin_x) / self.scale),
            y: f64::from((pixel_y - self.origin_y) / self.scale),
        }
    }

    pub fn length_to_screen(&self, centimetres: f64) -> f32 {
        centimetres as f32 * self.scale
    }
}

/// Positions of `count` seat markers around a table, `offset` cm outside its edge.
///
/// Circular tables spread markers evenly starting at twelve o'clock.
/// Rectangular tables put the larger half along the top edge and the rest
/// along the bottom, evenly spaced across the width.
pub fn seat_marker_positions(table: &Table, count: usize, offset: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    match table.shape {
        TableShape::Circle => {
            let radius = table.diameter() / 2.0 + offset;
            (0..count)
                .map(|i| {
                    let angle = -PI / 2.0 + 2.0 * PI * i as f64 / count as f64;
                    Point::new(table.x + radius * angle.cos(), table.y + radius * angle.sin())
                })
                .collect()
        }
        TableShape::Rectangle => {
            let top = count.div_ceil(2);
            let bottom = count - top;
            let left = table.x - table.width / 2.0;
            let top_y = table.y - table.height / 2.0 - offset;
            let bottom_y = table.y + table.height / 2.0 + offset;

            let row = |n: usize, y: f64| {
                (0..n).map(move |i| Point::new(left + table.width * (i + 1) as f64 / (n + 1) as f64, y))
            };
            row(top, top_y).chain(row(bottom, bottom_y)).collect()
        }
    }
}

/// Corners of the axis-aligned rectangle spanned by two drag points.
pub fn rectangle_points(a: Point, b: Point) -> Vec<Point> {
    vec![
        Point::new(a.x, a.y),
        Point::new(b.x, a.y),
        Point::new(b.x, b.y),
        Point::new(a.x, b.y),
    ]
}

pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Point `length` away from `from` in the direction of `toward`.
///
/// A degenerate direction falls back to the positive x axis.
pub fn point_at_distance(from: Point, toward: Point, length: f64) -> Point {
    let d = distance(from, toward);
    if d <= f64::EPSILON {
        return Point::new(from.x + length, from.y);
    }
    Point::new(
        from.x + (toward.x - from.x) / d * length,
        from.y + (toward.y - from.y) / d * length,
    )
}

/// Even-odd ray casting test.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Drop freehand samples closer than `min_step` to the previously kept one.
pub fn thin_path(points: &[Point], min_step: f64) -> Vec<Point> {
    let mut kept: Vec<Point> = Vec::with_capacity(points.len());
    for &point in points {
        match kept.last() {
            Some(&last) if distance(last, point) < min_step => {}
            _ => kept.push(point),
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_plan_roundtrip() {
        let transform = PlanTransform::fit(HallSize::DEFAULT, 10.0, 20.0, 960.0, 540.0, 0.0);
        let point = Point::new(900.0, 600.0);

        let (sx, sy) = transform.to_screen(point);
        let back = transform.to_plan(sx, sy);

        assert!((back.x - point.x).abs() < 0.01);
        assert!((back.y - point.y).abs() < 0.01);
    }

    #[test]
    fn test_fit_corners() {
        // 1800x1200 into 900x600: half scale, no letterboxing.
        let transform = PlanTransform::fit(HallSize::DEFAULT, 0.0, 0.0, 900.0, 600.0, 0.0);
        assert_eq!(transform.scale, 0.5);

        assert_eq!(transform.to_screen(Point::new(0.0, 0.0)), (0.0, 0.0));
        assert_eq!(transform.to_screen(Point::new(1800.0, 1200.0)), (900.0, 600.0));
    }

    #[test]
    fn test_rectangle_markers_split_top_bottom() {
        let table = Table::new(1, "Mesa 1".into(), 100.0, 100.0, 8);
        let markers = seat_marker_positions(&table, 5, 10.0);

        assert_eq!(markers.len(), 5);
        let top = markers.iter().filter(|p| p.y < table.y).count();
        let bottom = markers.iter().filter(|p| p.y > table.y).count();
        assert_eq!((top, bottom), (3, 2));
        assert_eq!(markers[0].y, 100.0 - 30.0 - 10.0);
        assert!(markers.iter().all(|p| (p.x - table.x).abs() < table.width / 2.0));
    }

    #[test]
    fn test_circle_markers_evenly_spaced() {
        let mut table = Table::new(1, "Mesa 1".into(), 0.0, 0.0, 8);
        table.shape = TableShape::Circle;
        table.width = 100.0;

        let markers = seat_marker_positions(&table, 4, 0.0);
        assert!((markers[0].x).abs() < 1e-9 && (markers[0].y + 50.0).abs() < 1e-9);
        assert!((markers[1].x - 50.0).abs() < 1e-9 && markers[1].y.abs() < 1e-9);
        for marker in &markers {
            assert!((distance(*marker, Point::new(0.0, 0.0)) - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_point_in_polygon() {
        let square = rectangle_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(point_in_polygon(Point::new(5.0, 5.0), &square));
        assert!(!point_in_polygon(Point::new(15.0, 5.0), &square));
        assert!(!point_in_polygon(Point::new(5.0, 5.0), &square[..2]));
    }

    #[test]
    fn test_point_at_distance_keeps_direction() {
        let p = point_at_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 10.0);
        assert!((p.x - 6.0).abs() < 1e-9 && (p.y - 8.0).abs() < 1e-9);

        let degenerate = point_at_distance(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 2.0);
        assert_eq!(degenerate, Point::new(3.0, 1.0));
    }

    #[test]
    fn test_thin_path() {
        let points = [Point::new(0.0, 0.0), Point::new(0.5, 0.0), Point::new(2.0, 0.0)];
        assert_eq!(thin_path(&points, 1.0).len(), 2);
    }
}
