// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for plan documents, guest lists and hall persistence.

pub mod persistence;
pub mod serialization;
