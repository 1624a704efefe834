// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Guest roster records.
//!
//! The roster is owned by the guest list, not by the floor plan. Records
//! come from several generations of data, so table references and
//! companion counts may arrive as numbers or as strings.

use serde::{Deserialize, Deserializer, Serialize};

/// A scalar that may have been stored as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Loose {
    /// String form used for identifier comparisons (`5`, `5.0` and `"5"` agree).
    pub fn as_key(&self) -> String {
        match self {
            Loose::Int(n) => n.to_string(),
            Loose::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
            Loose::Float(f) => f.to_string(),
            Loose::Text(s) => s.trim().to_string(),
        }
    }

    /// Integer reading with leading-digit semantics: `"2 kids"` is 2, `"abc"` is `None`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Loose::Int(n) => Some(*n),
            Loose::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Loose::Float(_) => None,
            Loose::Text(s) => {
                let s = s.trim();
                let (sign, digits) = match s.strip_prefix('-') {
                    Some(rest) => (-1, rest),
                    None => (1, s.strip_prefix('+').unwrap_or(s)),
                };
                let end = digits
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(digits.len());
                digits[..end].parse::<i64>().ok().map(|n| sign * n)
            }
        }
    }
}

fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Loose::deserialize(deserializer)?.as_key())
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    #[serde(deserialize_with = "loose_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "tableId", default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<Loose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Loose>,
    #[serde(default, alias = "companions", skip_serializing_if = "Option::is_none")]
    pub companion: Option<Loose>,
}

impl Guest {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            table_id: None,
            table: None,
            companion: None,
        }
    }

    #[cfg(test)]
    pub fn with_table_id(mut self, table_id: u64) -> Self {
        self.table_id = Some(Loose::Int(table_id as i64));
        self
    }

    #[cfg(test)]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(Loose::Text(table.into()));
        self
    }

    #[cfg(test)]
    pub fn with_companions(mut self, companions: i64) -> Self {
        self.companion = Some(Loose::Int(companions));
        self
    }

    /// Display name with companion suffix, e.g. `"Ana +2"`.
    pub fn display_name(&self) -> String {
        match crate::planner::resolver::companion_count(self.companion.as_ref()) {
            0 => self.name.clone(),
            n => format!("{} +{}", self.name, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_int_parsing() {
        assert_eq!(Loose::Text("2".into()).as_int(), Some(2));
        assert_eq!(Loose::Text(" 3 kids".into()).as_int(), Some(3));
        assert_eq!(Loose::Text("abc".into()).as_int(), None);
        assert_eq!(Loose::Text("".into()).as_int(), None);
        assert_eq!(Loose::Float(1.9).as_int(), Some(1));
        assert_eq!(Loose::Text("-1".into()).as_int(), Some(-1));
    }

    #[test]
    fn test_loose_keys_agree_across_representations() {
        assert_eq!(Loose::Int(5).as_key(), "5");
        assert_eq!(Loose::Float(5.0).as_key(), "5");
        assert_eq!(Loose::Text("5".into()).as_key(), "5");
    }

    #[test]
    fn test_guest_accepts_legacy_fields() {
        let json = r#"[
            {"id": 7, "name": "Luis", "table": "Mesa 2", "companions": "1"},
            {"id": "g2", "name": "Marta", "tableId": 5, "companion": 2}
        ]"#;
        let roster: Vec<Guest> = serde_json::from_str(json).unwrap();

        assert_eq!(roster[0].id, "7");
        assert_eq!(roster[0].table, Some(Loose::Text("Mesa 2".into())));
        assert_eq!(roster[0].companion, Some(Loose::Text("1".into())));
        assert_eq!(roster[1].table_id, Some(Loose::Int(5)));
        assert_eq!(roster[1].display_name(), "Marta +2");
    }
}
