// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plan document and guest roster serialization.
//!
//! This module handles exporting and importing layout documents and
//! reading guest rosters in YAML and JSON formats. The format is picked
//! from the file extension.

use crate::models::{document::PlanDocument, guest::Guest};
use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            other => bail!("Unsupported file extension: {:?}", other),
        }
    }
}

fn write_as<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let text = match Format::from_path(path)? {
        Format::Yaml => serde_yaml::to_string(value)?,
        Format::Json => serde_json::to_string_pretty(value)?,
    };
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn read_as<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = match format {
        Format::Yaml => serde_yaml::from_str(&text)?,
        Format::Json => serde_json::from_str(&text)?,
    };
    Ok(value)
}

/// Export a layout document as YAML or JSON.
pub fn export_document(document: &PlanDocument, path: &Path) -> Result<()> {
    write_as(document, path)
}

/// Import a layout document from YAML or JSON.
pub fn import_document(path: &Path) -> Result<PlanDocument> {
    read_as(path).with_context(|| format!("Invalid plan document {}", path.display()))
}

/// Read a guest roster (a list of guest records).
pub fn import_guests(path: &Path) -> Result<Vec<Guest>> {
    read_as(path).with_context(|| format!("Invalid guest list {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::HallSize;
    use crate::models::plan::PlanState;
    use crate::planner::generator::{generate_banquet_layout, BanquetGridParams};

    fn sample_document() -> PlanDocument {
        let mut plan = PlanState::default();
        plan.banquet.tables = generate_banquet_layout(&BanquetGridParams::default());
        PlanDocument::new(Some("boda-2026".into()), HallSize::new(2000.0, 1500.0), plan)
    }

    #[test]
    fn test_document_survives_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let document = sample_document();

        for name in ["plan.yaml", "plan.json"] {
            let path = dir.path().join(name);
            export_document(&document, &path).unwrap();
            assert_eq!(import_document(&path).unwrap(), document);
        }
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.txt");
        assert!(export_document(&sample_document(), &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_import_yaml_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guests.yml");
        std::fs::write(
            &path,
            "- id: g1\n  name: Ana\n  tableId: 3\n  companion: 1\n- id: 2\n  name: Luis\n",
        )
        .unwrap();

        let roster = import_guests(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].id, "2");
        assert!(roster[1].table_id.is_none());
    }
}
