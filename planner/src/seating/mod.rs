//! SeatingPlanner - guest-to-seat assignment model
//!
//! Owns the tables and guests of one seating-planner screen and keeps the
//! seating consistent:
//! - a seat `(table, n)` holds at most one guest
//! - a guest has a seat number exactly when it has a table
//! - seat numbers lie in `1..=seat_count` of their table
//!
//! # Assignment Flow
//!
//! ```text
//! check_assignment(guest, table, seat)      (query, no mutation)
//!     ├─ unknown guest / table   → Err(UnknownGuest / UnknownTable)
//!     ├─ seat out of range       → Err(InvalidSeat)
//!     ├─ held by another guest   → Err(SeatOccupied)
//!     ├─ seated elsewhere        → Ok(CrossTable { from_table_name, .. })
//!     └─ otherwise               → Ok(Ready | AlreadySeated)
//!
//! caller confirms a CrossTable move, then:
//! assign_guest_to_seat(guest, table, seat)  (re-checks, then applies)
//! ```
//!
//! All operations are synchronous and local; persisting the result is the
//! caller's job.

mod error;
pub use error::*;

use crate::config::PlannerConfig;
use serde::Serialize;
use shared::models::{
    Guest, Occupancy, Position, SeatingSnapshot, Table, TableCreate, TableUpdate,
};
use shared::validation::{MAX_NAME_LEN, validate_required_text};
use std::collections::HashSet;

/// Outcome of the risk query that precedes an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssignmentCheck {
    /// Seat is free and the guest is unseated or already at this table
    Ready,
    /// Guest already holds exactly this seat
    AlreadySeated,
    /// Guest sits at another table; the caller should confirm the move
    CrossTable {
        from_table_id: String,
        from_table_name: String,
    },
}

impl AssignmentCheck {
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::CrossTable { .. })
    }
}

/// Applied assignment
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Guest after the move
    pub guest: Guest,
    /// `(table_id, seat)` held before the move
    pub previous: Option<(String, u32)>,
}

/// In-memory seating model for one planner screen
#[derive(Debug, Clone)]
pub struct SeatingPlanner {
    config: PlannerConfig,
    tables: Vec<Table>,
    guests: Vec<Guest>,
    /// Next auto-layout grid slot
    next_slot: usize,
}

impl Default for SeatingPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl SeatingPlanner {
    /// Create an empty planner
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            tables: Vec::new(),
            guests: Vec::new(),
            next_slot: 0,
        }
    }

    /// Seed a planner from externally fetched data
    ///
    /// Rejects data that breaks the seating invariants instead of repairing it.
    pub fn from_snapshot(config: PlannerConfig, snapshot: SeatingSnapshot) -> SeatingResult<Self> {
        validate_collections(&snapshot.tables, &snapshot.guests)?;
        tracing::debug!(
            tables = snapshot.tables.len(),
            guests = snapshot.guests.len(),
            "Seating planner seeded"
        );
        Ok(Self {
            config,
            next_slot: snapshot.tables.len(),
            tables: snapshot.tables,
            guests: snapshot.guests,
        })
    }

    /// Current collections, for writing back to the API
    pub fn snapshot(&self) -> SeatingSnapshot {
        SeatingSnapshot {
            tables: self.tables.clone(),
            guests: self.guests.clone(),
        }
    }

    /// Re-check every seating invariant
    pub fn verify(&self) -> SeatingResult<()> {
        validate_collections(&self.tables, &self.guests)
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn table(&self, table_id: &str) -> SeatingResult<&Table> {
        self.tables
            .iter()
            .find(|t| t.id == table_id)
            .ok_or_else(|| SeatingError::UnknownTable(table_id.to_string()))
    }

    pub fn guest(&self, guest_id: &str) -> SeatingResult<&Guest> {
        self.guests
            .iter()
            .find(|g| g.id == guest_id)
            .ok_or_else(|| SeatingError::UnknownGuest(guest_id.to_string()))
    }

    fn table_index(&self, table_id: &str) -> SeatingResult<usize> {
        self.tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| SeatingError::UnknownTable(table_id.to_string()))
    }

    fn guest_index(&self, guest_id: &str) -> SeatingResult<usize> {
        self.guests
            .iter()
            .position(|g| g.id == guest_id)
            .ok_or_else(|| SeatingError::UnknownGuest(guest_id.to_string()))
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// Add a table; omitted seat count and position come from the config
    pub fn add_table(&mut self, create: TableCreate) -> SeatingResult<Table> {
        let name = normalize_name(&create.name, "table name")?;
        let seat_count = create
            .seat_count
            .unwrap_or_else(|| self.config.default_seats(create.shape));
        if seat_count == 0 {
            return Err(SeatingError::InvalidSeatCount(seat_count));
        }

        let position = create
            .position
            .unwrap_or_else(|| self.config.layout_position(self.next_slot));
        self.next_slot += 1;

        let table = Table {
            id: new_id(),
            name,
            shape: create.shape,
            seat_count,
            position,
        };
        tracing::debug!(table_id = %table.id, seat_count, shape = ?table.shape, "Table added");
        self.tables.push(table.clone());
        Ok(table)
    }

    /// Rename, reshape or resize a table
    ///
    /// Shrinking below a seat that is still held is rejected.
    pub fn update_table(&mut self, table_id: &str, update: TableUpdate) -> SeatingResult<Table> {
        let idx = self.table_index(table_id)?;

        let name = match &update.name {
            Some(name) => Some(normalize_name(name, "table name")?),
            None => None,
        };

        if let Some(seat_count) = update.seat_count {
            if seat_count == 0 {
                return Err(SeatingError::InvalidSeatCount(seat_count));
            }
            let highest = self
                .guests
                .iter()
                .filter(|g| g.table_id.as_deref() == Some(table_id))
                .filter_map(|g| g.seat_position)
                .max();
            if let Some(seat) = highest
                && seat > seat_count
            {
                tracing::warn!(table_id, seat, seat_count, "Resize rejected: seat still held");
                return Err(SeatingError::InvalidSeat {
                    table_id: table_id.to_string(),
                    seat,
                    seat_count,
                });
            }
        }

        let table = &mut self.tables[idx];
        if let Some(name) = name {
            table.name = name;
        }
        if let Some(shape) = update.shape {
            table.shape = shape;
        }
        if let Some(seat_count) = update.seat_count {
            table.seat_count = seat_count;
        }
        tracing::debug!(table_id, "Table updated");
        Ok(table.clone())
    }

    /// Move a table on the canvas
    pub fn move_table(&mut self, table_id: &str, position: Position) -> SeatingResult<()> {
        let idx = self.table_index(table_id)?;
        self.tables[idx].position = position;
        Ok(())
    }

    /// Delete an empty table
    ///
    /// Tables with seated guests are rejected; call [`Self::clear_table`] first.
    pub fn delete_table(&mut self, table_id: &str) -> SeatingResult<Table> {
        let idx = self.table_index(table_id)?;
        let seated = self.occupancy(table_id)?.seated;
        if seated > 0 {
            tracing::warn!(table_id, seated, "Delete rejected: table has seated guests");
            return Err(SeatingError::TableHasGuests {
                table_id: table_id.to_string(),
                seated,
            });
        }
        let table = self.tables.remove(idx);
        tracing::info!(table_id, name = %table.name, "Table deleted");
        Ok(table)
    }

    /// Unseat every guest at a table, returning their ids in seat order
    pub fn clear_table(&mut self, table_id: &str) -> SeatingResult<Vec<String>> {
        self.table_index(table_id)?;

        let mut cleared: Vec<(u32, String)> = Vec::new();
        for guest in self
            .guests
            .iter_mut()
            .filter(|g| g.table_id.as_deref() == Some(table_id))
        {
            cleared.push((guest.seat_position.unwrap_or_default(), guest.id.clone()));
            guest.table_id = None;
            guest.seat_position = None;
        }
        cleared.sort();

        tracing::info!(table_id, cleared = cleared.len(), "Table cleared");
        Ok(cleared.into_iter().map(|(_, id)| id).collect())
    }

    // ========================================================================
    // Guests
    // ========================================================================

    /// Add one unseated guest
    pub fn add_guest(&mut self, name: &str) -> SeatingResult<Guest> {
        let name = normalize_name(name, "guest name")?;
        Ok(self.push_guest(name, None))
    }

    /// Add a guest and a synthesized plus-one linked back to them
    pub fn add_guest_with_plus_one(&mut self, name: &str) -> SeatingResult<[Guest; 2]> {
        let name = normalize_name(name, "guest name")?;
        let plus_one_name = normalize_name(&self.config.plus_one_name(&name), "guest name")?;

        let primary = self.push_guest(name, None);
        let plus_one = self.push_guest(plus_one_name, Some(primary.id.clone()));
        Ok([primary, plus_one])
    }

    /// Add several unseated guests at once
    ///
    /// All names are validated before anything is added.
    pub fn add_guest_group<I, S>(&mut self, names: I) -> SeatingResult<Vec<Guest>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| normalize_name(n.as_ref(), "guest name"))
            .collect::<SeatingResult<Vec<_>>>()?;

        if names.len() > self.config.max_group_size {
            return Err(SeatingError::GroupTooLarge {
                size: names.len(),
                max: self.config.max_group_size,
            });
        }

        Ok(names
            .into_iter()
            .map(|name| self.push_guest(name, None))
            .collect())
    }

    fn push_guest(&mut self, name: String, linked_guest_id: Option<String>) -> Guest {
        let mut guest = Guest::new(new_id(), name);
        guest.linked_guest_id = linked_guest_id;
        tracing::debug!(guest_id = %guest.id, linked = ?guest.linked_guest_id, "Guest added");
        self.guests.push(guest.clone());
        guest
    }

    /// Remove a guest regardless of seating
    ///
    /// Plus-ones pointing at the removed guest keep existing, unlinked.
    pub fn delete_guest(&mut self, guest_id: &str) -> SeatingResult<Guest> {
        let idx = self.guest_index(guest_id)?;
        let guest = self.guests.remove(idx);
        for linked in self
            .guests
            .iter_mut()
            .filter(|g| g.linked_guest_id.as_deref() == Some(guest_id))
        {
            linked.linked_guest_id = None;
        }
        tracing::info!(guest_id, seated = guest.is_seated(), "Guest deleted");
        Ok(guest)
    }

    /// Guests whose plus-one link points at `guest_id`
    pub fn linked_guests(&self, guest_id: &str) -> SeatingResult<Vec<&Guest>> {
        self.guest_index(guest_id)?;
        Ok(self
            .guests
            .iter()
            .filter(|g| g.linked_guest_id.as_deref() == Some(guest_id))
            .collect())
    }

    // ========================================================================
    // Assignment
    // ========================================================================

    /// Whether the guest sits at a table other than `target_table_id`
    pub fn is_seated_elsewhere(&self, guest_id: &str, target_table_id: &str) -> bool {
        self.guest(guest_id)
            .ok()
            .and_then(|g| g.table_id.as_deref())
            .is_some_and(|current| current != target_table_id)
    }

    /// Whether any guest holds `(table_id, seat)`
    pub fn is_seat_occupied(&self, table_id: &str, seat: u32) -> bool {
        self.seat_occupant(table_id, seat).is_some()
    }

    /// Guest holding `(table_id, seat)`, if any
    pub fn seat_occupant(&self, table_id: &str, seat: u32) -> Option<&Guest> {
        self.guests.iter().find(|g| g.seat() == Some((table_id, seat)))
    }

    /// Validate an assignment without applying it
    pub fn check_assignment(
        &self,
        guest_id: &str,
        table_id: &str,
        seat: u32,
    ) -> SeatingResult<AssignmentCheck> {
        let guest = self.guest(guest_id)?;
        let table = self.table(table_id)?;

        if !table.has_seat(seat) {
            return Err(SeatingError::InvalidSeat {
                table_id: table_id.to_string(),
                seat,
                seat_count: table.seat_count,
            });
        }

        if guest.seat() == Some((table_id, seat)) {
            return Ok(AssignmentCheck::AlreadySeated);
        }

        if let Some(occupant) = self.seat_occupant(table_id, seat) {
            return Err(SeatingError::SeatOccupied {
                table_id: table_id.to_string(),
                seat,
                occupant_id: occupant.id.clone(),
                occupant_name: occupant.name.clone(),
            });
        }

        match guest.table_id.as_deref() {
            Some(current) if current != table_id => {
                let from_table_name = self
                    .table(current)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|_| current.to_string());
                Ok(AssignmentCheck::CrossTable {
                    from_table_id: current.to_string(),
                    from_table_name,
                })
            }
            _ => Ok(AssignmentCheck::Ready),
        }
    }

    /// Seat a guest, moving them if they are seated elsewhere
    ///
    /// The seat must be in range and free (or already held by this guest).
    /// Cross-table moves are applied; confirming them is up to the caller,
    /// see [`Self::check_assignment`].
    pub fn assign_guest_to_seat(
        &mut self,
        guest_id: &str,
        table_id: &str,
        seat: u32,
    ) -> SeatingResult<Assignment> {
        let check = match self.check_assignment(guest_id, table_id, seat) {
            Ok(check) => check,
            Err(e) => {
                tracing::warn!(guest_id, table_id, seat, error = %e, "Seat assignment rejected");
                return Err(e);
            }
        };

        let idx = self.guest_index(guest_id)?;
        let guest = &mut self.guests[idx];
        let previous = guest.seat().map(|(t, s)| (t.to_string(), s));

        if check == AssignmentCheck::AlreadySeated {
            return Ok(Assignment {
                guest: guest.clone(),
                previous,
            });
        }

        guest.table_id = Some(table_id.to_string());
        guest.seat_position = Some(seat);

        match &check {
            AssignmentCheck::CrossTable { from_table_id, .. } => {
                tracing::info!(guest_id, from = %from_table_id, to = table_id, seat, "Guest moved across tables");
            }
            _ => tracing::debug!(guest_id, table_id, seat, "Guest seated"),
        }

        Ok(Assignment {
            guest: guest.clone(),
            previous,
        })
    }

    /// Exchange the seating of two guests (either may be unseated)
    pub fn swap_guests(&mut self, first_id: &str, second_id: &str) -> SeatingResult<()> {
        let a = self.guest_index(first_id)?;
        let b = self.guest_index(second_id)?;
        if a == b {
            return Ok(());
        }

        let (table_a, seat_a) = (self.guests[a].table_id.take(), self.guests[a].seat_position.take());
        let (table_b, seat_b) = (self.guests[b].table_id.take(), self.guests[b].seat_position.take());

        self.guests[a].table_id = table_b;
        self.guests[a].seat_position = seat_b;
        self.guests[b].table_id = table_a;
        self.guests[b].seat_position = seat_a;

        tracing::debug!(first = first_id, second = second_id, "Guests swapped");
        Ok(())
    }

    /// Clear a guest's seat; unseating an unseated guest is a no-op
    pub fn unseat_guest(&mut self, guest_id: &str) -> SeatingResult<Guest> {
        let idx = self.guest_index(guest_id)?;
        let guest = &mut self.guests[idx];
        if guest.is_seated() {
            tracing::debug!(guest_id, table_id = ?guest.table_id, "Guest unseated");
        }
        guest.table_id = None;
        guest.seat_position = None;
        Ok(guest.clone())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Guests at a table, ordered by seat number
    pub fn guests_at_table(&self, table_id: &str) -> SeatingResult<Vec<&Guest>> {
        self.table_index(table_id)?;
        let mut seated: Vec<&Guest> = self
            .guests
            .iter()
            .filter(|g| g.table_id.as_deref() == Some(table_id))
            .collect();
        seated.sort_by_key(|g| g.seat_position);
        Ok(seated)
    }

    pub fn unseated_guests(&self) -> Vec<&Guest> {
        self.guests.iter().filter(|g| !g.is_seated()).collect()
    }

    pub fn occupancy(&self, table_id: &str) -> SeatingResult<Occupancy> {
        let table = self.table(table_id)?;
        let seated = self
            .guests
            .iter()
            .filter(|g| g.is_seated_at(table))
            .count() as u32;
        Ok(Occupancy {
            seated,
            capacity: table.seat_count,
        })
    }

    /// Lowest free seat number at a table
    pub fn first_free_seat(&self, table_id: &str) -> SeatingResult<Option<u32>> {
        let table = self.table(table_id)?;
        let taken: HashSet<u32> = self
            .guests
            .iter()
            .filter(|g| g.is_seated_at(table))
            .filter_map(|g| g.seat_position)
            .collect();
        Ok((1..=table.seat_count).find(|seat| !taken.contains(seat)))
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn normalize_name(name: &str, field: &str) -> SeatingResult<String> {
    let name = name.trim();
    validate_required_text(name, field, MAX_NAME_LEN)?;
    Ok(name.to_string())
}

/// Check id uniqueness, table references and the seat invariants
fn validate_collections(tables: &[Table], guests: &[Guest]) -> SeatingResult<()> {
    let mut table_ids = HashSet::new();
    for table in tables {
        if !table_ids.insert(table.id.as_str()) {
            return Err(SeatingError::InvalidData(format!(
                "duplicate table id {}",
                table.id
            )));
        }
        if table.seat_count == 0 {
            return Err(SeatingError::InvalidData(format!(
                "table {} has no seats",
                table.id
            )));
        }
    }

    let mut guest_ids = HashSet::new();
    let mut seats = HashSet::new();
    for guest in guests {
        if !guest_ids.insert(guest.id.as_str()) {
            return Err(SeatingError::InvalidData(format!(
                "duplicate guest id {}",
                guest.id
            )));
        }

        match (&guest.table_id, guest.seat_position) {
            (None, None) => {}
            (Some(table_id), Some(seat)) => {
                let table = tables.iter().find(|t| &t.id == table_id).ok_or_else(|| {
                    SeatingError::InvalidData(format!(
                        "guest {} references missing table {}",
                        guest.id, table_id
                    ))
                })?;
                if !table.has_seat(seat) {
                    return Err(SeatingError::InvalidData(format!(
                        "guest {} holds seat {} outside 1..={} at table {}",
                        guest.id, seat, table.seat_count, table_id
                    )));
                }
                if !seats.insert((table_id.as_str(), seat)) {
                    return Err(SeatingError::InvalidData(format!(
                        "seat {} at table {} is held twice",
                        seat, table_id
                    )));
                }
            }
            _ => {
                return Err(SeatingError::InvalidData(format!(
                    "guest {} has a table without a seat or a seat without a table",
                    guest.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
