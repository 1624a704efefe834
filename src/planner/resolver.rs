// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Guest-to-table resolution.
//!
//! A table's occupants can be recorded in three places: the global roster
//! (`tableId`, or the legacy `table` field holding an id or a table name),
//! the table's embedded `assignedGuests` list, and the single `guestId` of
//! older ceremony-style records. Counts take the first non-empty source in
//! that order; labels merge roster and embedded entries without repeating
//! an id.

use crate::models::guest::{Guest, Loose};
use crate::models::plan::Table;
use std::collections::HashSet;

/// Where a roster entry says its guest sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRef {
    /// `tableId` set; matched against table ids only.
    ById(String),
    /// Only the legacy `table` field set; matched against id or name.
    Legacy(String),
    Unassigned,
}

impl TableRef {
    pub fn of(guest: &Guest) -> Self {
        let key = |value: &Option<Loose>| value.as_ref().map(Loose::as_key).filter(|k| !k.is_empty());
        if let Some(id) = key(&guest.table_id) {
            TableRef::ById(id)
        } else if let Some(table) = key(&guest.table) {
            TableRef::Legacy(table)
        } else {
            TableRef::Unassigned
        }
    }

    pub fn matches(&self, table: &Table) -> bool {
        match self {
            TableRef::ById(id) => *id == table.id.to_string(),
            TableRef::Legacy(value) => *value == table.id.to_string() || *value == table.name,
            TableRef::Unassigned => false,
        }
    }
}

/// Companion count of a record; unparseable or negative values count as 0.
pub fn companion_count(raw: Option<&Loose>) -> u32 {
    raw.and_then(Loose::as_int)
        .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    Roster,
    Embedded,
}

/// One name drawn next to a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLabel {
    pub guest_id: Option<String>,
    pub name: String,
    pub companions: u32,
    pub source: LabelSource,
}

impl SeatLabel {
    pub fn text(&self) -> String {
        match self.companions {
            0 => self.name.clone(),
            n => format!("{} +{}", self.name, n),
        }
    }
}

/// Derived occupancy for one table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableOccupancy {
    /// People (guests plus companions) at the table.
    pub count: u32,
    pub labels: Vec<SeatLabel>,
}

impl TableOccupancy {
    pub fn is_over_capacity(&self, table: &Table) -> bool {
        self.count > table.seats
    }
}

/// Roster entries seated at `table`, in roster order.
pub fn roster_matches<'a>(table: &Table, roster: &'a [Guest]) -> Vec<&'a Guest> {
    roster
        .iter()
        .filter(|guest| TableRef::of(guest).matches(table))
        .collect()
}

/// Head count for `table`: roster, then embedded list, then legacy `guestId`.
pub fn occupant_count(table: &Table, roster: &[Guest]) -> u32 {
    let from_roster: u32 = roster_matches(table, roster)
        .iter()
        .map(|guest| 1 + companion_count(guest.companion.as_ref()))
        .sum();
    if from_roster > 0 {
        return from_roster;
    }

    if !table.assigned_guests.is_empty() {
        return table
            .assigned_guests
            .iter()
            .map(|guest| 1 + companion_count(guest.companion.as_ref()))
            .sum();
    }

    if table.guest_id.is_some() {
        1
    } else {
        0
    }
}

/// Names to draw around `table`: roster matches, then embedded guests not already listed.
pub fn seat_labels(table: &Table, roster: &[Guest]) -> Vec<SeatLabel> {
    let matches = roster_matches(table, roster);
    let seen: HashSet<&str> = matches.iter().map(|guest| guest.id.as_str()).collect();

    let mut labels: Vec<SeatLabel> = matches
        .iter()
        .map(|guest| SeatLabel {
            guest_id: Some(guest.id.clone()),
            name: guest.name.clone(),
            companions: companion_count(guest.companion.as_ref()),
            source: LabelSource::Roster,
        })
        .collect();

    for embedded in &table.assigned_guests {
        let key = embedded.key();
        if key.as_deref().is_some_and(|id| seen.contains(id)) {
            continue;
        }
        labels.push(SeatLabel {
            guest_id: key,
            name: embedded.name.clone(),
            companions: companion_count(embedded.companion.as_ref()),
            source: LabelSource::Embedded,
        });
    }
    labels
}

pub fn resolve_table(table: &Table, roster: &[Guest]) -> TableOccupancy {
    TableOccupancy {
        count: occupant_count(table, roster),
        labels: seat_labels(table, roster),
    }
}

/// Roster entries not seated at any of `tables`.
pub fn unassigned_guests<'a>(roster: &'a [Guest], tables: &[Table]) -> Vec<&'a Guest> {
    roster
        .iter()
        .filter(|guest| {
            let reference = TableRef::of(guest);
            !tables.iter().any(|table| reference.matches(table))
        })
        .collect()
}

/// Point a roster entry at `table`. Returns `false` if the guest is unknown.
pub fn assign_guest_to_table(roster: &mut [Guest], guest_id: &str, table: &Table) -> bool {
    match roster.iter_mut().find(|guest| guest.id == guest_id) {
        Some(guest) => {
            guest.table_id = Some(Loose::Int(table.id as i64));
            guest.table = None;
            log::info!("Assigned guest {} to {}", guest.name, table.name);
            true
        }
        None => {
            log::warn!("Cannot assign unknown guest {}", guest_id);
            false
        }
    }
}

pub fn unassign_guest(roster: &mut [Guest], guest_id: &str) -> bool {
    match roster.iter_mut().find(|guest| guest.id == guest_id) {
        Some(guest) => {
            guest.table_id = None;
            guest.table = None;
            log::info!("Unassigned guest {}", guest.name);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::AssignedGuest;

    fn table(id: u64) -> Table {
        Table::new(id, format!("Mesa {}", id), 0.0, 0.0, 8)
    }

    fn embedded(id: Option<&str>, name: &str, companion: Option<i64>) -> AssignedGuest {
        AssignedGuest {
            id: id.map(|s| Loose::Text(s.to_string())),
            name: name.to_string(),
            companion: companion.map(Loose::Int),
        }
    }

    #[test]
    fn test_roster_count_includes_companions() {
        let roster = vec![Guest::new("g1", "Ana").with_table_id(5).with_companions(2)];
        let mut t = table(5);
        assert_eq!(occupant_count(&t, &roster), 3);

        // The same guest embedded in the table adds nothing.
        t.assigned_guests.push(embedded(Some("g1"), "Ana", Some(2)));
        let occupancy = resolve_table(&t, &roster);
        assert_eq!(occupancy.count, 3);
        assert_eq!(occupancy.labels.len(), 1);
        assert_eq!(occupancy.labels[0].text(), "Ana +2");
    }

    #[test]
    fn test_embedded_guests_used_without_roster_matches() {
        let mut t = table(9);
        t.assigned_guests = vec![embedded(Some("g1"), "A", None), embedded(Some("g2"), "B", Some(1))];

        assert_eq!(occupant_count(&t, &[]), 3);
    }

    #[test]
    fn test_legacy_guest_id_counts_one() {
        let mut t = table(2);
        t.guest_id = Some("g7".into());
        assert_eq!(occupant_count(&t, &[]), 1);
        assert_eq!(occupant_count(&table(2), &[]), 0);
    }

    #[test]
    fn test_roster_wins_over_legacy_guest_id() {
        let roster = vec![Guest::new("g1", "Ana").with_table_id(2)];
        let mut t = table(2);
        t.guest_id = Some("g7".into());
        assert_eq!(occupant_count(&t, &roster), 1);
    }

    #[test]
    fn test_legacy_table_field_matches_name_or_id() {
        let roster = vec![
            Guest::new("g1", "Ana").with_table("Mesa 3"),
            Guest::new("g2", "Luis").with_table("3"),
            Guest::new("g3", "Eva").with_table("Mesa 4"),
        ];
        assert_eq!(occupant_count(&table(3), &roster), 2);
    }

    #[test]
    fn test_table_id_takes_precedence_over_legacy_field() {
        let mut guest = Guest::new("g1", "Ana").with_table_id(1);
        guest.table = Some(Loose::Text("Mesa 2".into()));
        let roster = vec![guest];

        assert_eq!(occupant_count(&table(1), &roster), 1);
        assert_eq!(occupant_count(&table(2), &roster), 0);
    }

    #[test]
    fn test_malformed_companions_parse_to_zero() {
        let mut guest = Guest::new("g1", "Ana").with_table_id(1);
        guest.companion = Some(Loose::Text("lots".into()));
        assert_eq!(occupant_count(&table(1), &[guest]), 1);
        assert_eq!(companion_count(Some(&Loose::Int(-4))), 0);
        assert_eq!(companion_count(None), 0);
    }

    #[test]
    fn test_labels_keep_embedded_entries_without_id() {
        let roster = vec![Guest::new("g1", "Ana").with_table_id(4)];
        let mut t = table(4);
        t.assigned_guests = vec![
            embedded(Some("g1"), "Ana", None),
            embedded(None, "Plus one", None),
            embedded(Some("g5"), "Berta", None),
        ];

        let names: Vec<String> = seat_labels(&t, &roster).into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Ana", "Plus one", "Berta"]);
    }

    #[test]
    fn test_assign_and_unassign_roster_entry() {
        let mut roster = vec![Guest::new("g1", "Ana").with_table("Mesa 1"), Guest::new("g2", "Luis")];
        let tables = vec![table(1), table(2)];

        assert!(assign_guest_to_table(&mut roster, "g2", &tables[1]));
        assert!(!assign_guest_to_table(&mut roster, "missing", &tables[1]));
        assert_eq!(occupant_count(&tables[1], &roster), 1);
        assert!(unassigned_guests(&roster, &tables).is_empty());

        assert!(unassign_guest(&mut roster, "g1"));
        let free: Vec<&str> = unassigned_guests(&roster, &tables).iter().map(|g| g.id.as_str()).collect();
        assert_eq!(free, vec!["g1"]);
    }
}
