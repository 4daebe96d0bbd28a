//! Seating Table Model

use serde::{Deserialize, Serialize};

/// Table shape as drawn on the seating canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    #[default]
    Circle,
    Square,
    Rectangle,
}

/// Layout coordinate on the seating canvas (rendering only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Seating table entity
///
/// Seats are numbered `1..=seat_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    pub shape: TableShape,
    pub seat_count: u32,
    pub position: Position,
}

impl Table {
    /// Whether `seat` is a valid seat number for this table
    pub fn has_seat(&self, seat: u32) -> bool {
        (1..=self.seat_count).contains(&seat)
    }
}

/// Create table payload
///
/// Omitted seat count and position are filled in from the planner config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub name: String,
    #[serde(default)]
    pub shape: TableShape,
    pub seat_count: Option<u32>,
    pub position: Option<Position>,
}

impl TableCreate {
    pub fn new(name: impl Into<String>, shape: TableShape) -> Self {
        Self {
            name: name.into(),
            shape,
            ..Default::default()
        }
    }

    pub fn with_seats(mut self, seat_count: u32) -> Self {
        self.seat_count = Some(seat_count);
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Update table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    pub name: Option<String>,
    pub shape: Option<TableShape>,
    pub seat_count: Option<u32>,
}

/// Seated / capacity counters for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub seated: u32,
    pub capacity: u32,
}

impl Occupancy {
    pub fn is_full(&self) -> bool {
        self.seated >= self.capacity
    }

    pub fn free(&self) -> u32 {
        self.capacity.saturating_sub(self.seated)
    }
}
