// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Grid layout generators.
//!
//! Both generators are pure: they return a complete replacement collection
//! and leave committing it (and recording history) to the caller. They do
//! not validate their input beyond tolerating empty grids; form-level
//! clamping lives in the `clamped` helpers.

use crate::models::plan::{Seat, Table};
use serde::{Deserialize, Serialize};

/// Parameters for the ceremony chair grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeatGridParams {
    pub rows: i32,
    pub cols: i32,
    pub gap: f64,
    pub start_x: f64,
    pub start_y: f64,
    /// Column index after which one extra `gap` of aisle is inserted.
    pub aisle_after: i32,
}

impl Default for SeatGridParams {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 12,
            gap: 40.0,
            start_x: 100.0,
            start_y: 80.0,
            aisle_after: 5,
        }
    }
}

impl SeatGridParams {
    /// Form-boundary validation: at least one row/column and a positive gap.
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.max(1),
            cols: self.cols.max(1),
            gap: if self.gap > 0.0 { self.gap } else { 1.0 },
            ..self
        }
    }
}

/// Parameters for the banquet table grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BanquetGridParams {
    pub rows: i32,
    pub cols: i32,
    /// Capacity of every generated table.
    pub seats: u32,
    pub gap_x: f64,
    pub gap_y: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl Default for BanquetGridParams {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 3,
            seats: 8,
            gap_x: 140.0,
            gap_y: 160.0,
            start_x: 120.0,
            start_y: 160.0,
        }
    }
}

impl BanquetGridParams {
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.max(1),
            cols: self.cols.max(1),
            seats: self.seats.max(1),
            gap_x: if self.gap_x > 0.0 { self.gap_x } else { 1.0 },
            gap_y: if self.gap_y > 0.0 { self.gap_y } else { 1.0 },
            ..self
        }
    }
}

/// Lay out `rows * cols` ceremony chairs in row-major order with ids from 1.
pub fn generate_seat_grid(params: &SeatGridParams) -> Vec<Seat> {
    if params.rows <= 0 || params.cols <= 0 {
        return Vec::new();
    }

    let mut seats = Vec::with_capacity(params.rows.saturating_mul(params.cols) as usize);
    let mut next_id = 1;
    for row in 0..params.rows {
        for col in 0..params.cols {
            let aisle = if col > params.aisle_after { params.gap } else { 0.0 };
            seats.push(Seat {
                id: next_id,
                x: params.start_x + f64::from(col) * params.gap + aisle,
                y: params.start_y + f64::from(row) * params.gap,
                enabled: true,
                guest_id: None,
                guest_name: None,
            });
            next_id += 1;
        }
    }
    seats
}

/// Lay out `rows * cols` rectangular tables named `Mesa {id}`.
pub fn generate_banquet_layout(params: &BanquetGridParams) -> Vec<Table> {
    if params.rows <= 0 || params.cols <= 0 {
        return Vec::new();
    }

    let mut tables = Vec::with_capacity(params.rows.saturating_mul(params.cols) as usize);
    let mut next_id = 1u64;
    for row in 0..params.rows {
        for col in 0..params.cols {
            tables.push(Table::new(
                next_id,
                format!("Mesa {}", next_id),
                params.start_x + f64::from(col) * params.gap_x,
                params.start_y + f64::from(row) * params.gap_y,
                params.seats,
            ));
            next_id += 1;
        }
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::TableShape;
    use proptest::prelude::*;

    #[test]
    fn test_seat_grid_inserts_aisle() {
        let seats = generate_seat_grid(&SeatGridParams {
            rows: 1,
            cols: 4,
            gap: 10.0,
            start_x: 0.0,
            start_y: 0.0,
            aisle_after: 1,
        });

        let xs: Vec<f64> = seats.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![0.0, 10.0, 30.0, 40.0]);
    }

    #[test]
    fn test_empty_grids_do_not_panic() {
        let seats = generate_seat_grid(&SeatGridParams {
            rows: 0,
            ..SeatGridParams::default()
        });
        assert!(seats.is_empty());

        let tables = generate_banquet_layout(&BanquetGridParams {
            cols: -3,
            ..BanquetGridParams::default()
        });
        assert!(tables.is_empty());
    }

    #[test]
    fn test_banquet_layout_counts_and_first_table() {
        let tables = generate_banquet_layout(&BanquetGridParams {
            rows: 2,
            cols: 3,
            seats: 8,
            gap_x: 140.0,
            gap_y: 160.0,
            start_x: 120.0,
            start_y: 160.0,
        });

        assert_eq!(tables.len(), 6);
        let first = &tables[0];
        assert_eq!(first.id, 1);
        assert_eq!((first.x, first.y), (120.0, 160.0));
        assert_eq!(first.seats, 8);
        assert!(first.enabled);
        assert_eq!(first.shape, TableShape::Rectangle);
        assert_eq!(first.name, "Mesa 1");

        // Row-major: the fourth table starts the second row.
        assert_eq!((tables[3].x, tables[3].y), (120.0, 320.0));
        assert_eq!(tables[5].name, "Mesa 6");
    }

    #[test]
    fn test_clamped_params_are_generatable() {
        let params = SeatGridParams {
            rows: -1,
            cols: 0,
            gap: 0.0,
            ..SeatGridParams::default()
        }
        .clamped();
        assert_eq!(generate_seat_grid(&params).len(), 1);
    }

    proptest! {
        #[test]
        fn prop_seat_grid_is_deterministic(
            rows in 0i32..12,
            cols in 0i32..12,
            gap in 1.0f64..100.0,
            start_x in -500.0f64..500.0,
            start_y in -500.0f64..500.0,
            aisle_after in -2i32..14,
        ) {
            let params = SeatGridParams { rows, cols, gap, start_x, start_y, aisle_after };
            let seats = generate_seat_grid(&params);

            prop_assert_eq!(seats.len(), (rows * cols) as usize);
            prop_assert_eq!(&seats, &generate_seat_grid(&params));
            for (i, seat) in seats.iter().enumerate() {
                let (r, c) = (i as i32 / cols, i as i32 % cols);
                let aisle = if c > aisle_after { gap } else { 0.0 };
                prop_assert_eq!(seat.id as usize, i + 1);
                prop_assert!(seat.enabled);
                prop_assert!(seat.guest_id.is_none());
                prop_assert_eq!(seat.x, start_x + f64::from(c) * gap + aisle);
                prop_assert_eq!(seat.y, start_y + f64::from(r) * gap);
            }
        }
    }
}
