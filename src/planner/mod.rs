// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Seating plan engine: grid generators, plan store, history and guest resolution.

pub mod generator;
pub mod history;
pub mod resolver;
pub mod store;
