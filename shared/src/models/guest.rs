//! Guest Model

use serde::{Deserialize, Serialize};

use super::table::Table;

/// Guest entity
///
/// `table_id` and `seat_position` are either both set or both empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub seat_position: Option<u32>,
    /// Inviting guest for a plus-one (back-reference, not ownership)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_guest_id: Option<String>,
}

impl Guest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            table_id: None,
            seat_position: None,
            linked_guest_id: None,
        }
    }

    pub fn is_seated(&self) -> bool {
        self.table_id.is_some()
    }

    /// Current `(table_id, seat)` pair, if seated
    pub fn seat(&self) -> Option<(&str, u32)> {
        match (&self.table_id, self.seat_position) {
            (Some(table_id), Some(seat)) => Some((table_id.as_str(), seat)),
            _ => None,
        }
    }

    pub fn is_seated_at(&self, table: &Table) -> bool {
        self.table_id.as_deref() == Some(table.id.as_str())
    }
}

/// Seating collections as exchanged with the wedding API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatingSnapshot {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub guests: Vec<Guest>,
}
