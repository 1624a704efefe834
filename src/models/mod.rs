// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for floor plans, guests and plan documents.

pub mod document;
pub mod guest;
pub mod plan;
