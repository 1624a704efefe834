// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plan document state.
//!
//! This module holds the hall dimensions and the exported layout document
//! that bundles both plans for a single event.

use super::plan::PlanState;
use serde::{Deserialize, Serialize};

/// Hall floor size in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HallSize {
    pub width: f64,
    pub height: f64,
}

impl HallSize {
    pub const DEFAULT: HallSize = HallSize {
        width: 1800.0,
        height: 1200.0,
    };

    #[cfg(test)]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject sizes that cannot be drawn (zero, negative or non-finite).
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for HallSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete layout document for serialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default)]
    pub hall: HallSize,
    #[serde(default)]
    pub plan: PlanState,
}

impl PlanDocument {
    pub fn new(event_id: Option<String>, hall: HallSize, plan: PlanState) -> Self {
        Self {
            event_id,
            hall,
            plan,
        }
    }
}
