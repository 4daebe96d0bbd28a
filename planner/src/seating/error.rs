use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Seating planner errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeatingError {
    #[error("Table not found: {0}")]
    UnknownTable(String),

    #[error("Guest not found: {0}")]
    UnknownGuest(String),

    #[error("Seat {seat} is outside 1..={seat_count} at table {table_id}")]
    InvalidSeat {
        table_id: String,
        seat: u32,
        seat_count: u32,
    },

    #[error("Seat {seat} at table {table_id} is occupied by {occupant_name}")]
    SeatOccupied {
        table_id: String,
        seat: u32,
        occupant_id: String,
        occupant_name: String,
    },

    #[error("Table {table_id} still has {seated} seated guest(s)")]
    TableHasGuests { table_id: String, seated: u32 },

    #[error("Seat count must be at least 1, got {0}")]
    InvalidSeatCount(u32),

    #[error("Guest group of {size} exceeds the limit of {max}")]
    GroupTooLarge { size: usize, max: usize },

    #[error("Invalid seating data: {0}")]
    InvalidData(String),

    #[error("{0}")]
    Validation(AppError),
}

impl From<AppError> for SeatingError {
    fn from(err: AppError) -> Self {
        SeatingError::Validation(err)
    }
}

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        let message = err.to_string();
        match err {
            SeatingError::UnknownTable(id) => {
                AppError::with_message(ErrorCode::TableNotFound, message).with_detail("table_id", id)
            }
            SeatingError::UnknownGuest(id) => {
                AppError::with_message(ErrorCode::GuestNotFound, message).with_detail("guest_id", id)
            }
            SeatingError::InvalidSeat {
                table_id,
                seat,
                seat_count,
            } => AppError::with_message(ErrorCode::InvalidSeat, message)
                .with_detail("table_id", table_id)
                .with_detail("seat", seat)
                .with_detail("seat_count", seat_count),
            SeatingError::SeatOccupied {
                table_id,
                seat,
                occupant_id,
                occupant_name,
            } => AppError::with_message(ErrorCode::SeatOccupied, message)
                .with_detail("table_id", table_id)
                .with_detail("seat", seat)
                .with_detail("occupant_id", occupant_id)
                .with_detail("occupant_name", occupant_name),
            SeatingError::TableHasGuests { table_id, seated } => {
                AppError::with_message(ErrorCode::TableHasGuests, message)
                    .with_detail("table_id", table_id)
                    .with_detail("seated", seated)
            }
            SeatingError::InvalidSeatCount(count) => {
                AppError::with_message(ErrorCode::InvalidSeatCount, message)
                    .with_detail("seat_count", count)
            }
            SeatingError::GroupTooLarge { size, max } => {
                AppError::with_message(ErrorCode::GuestGroupTooLarge, message)
                    .with_detail("size", size)
                    .with_detail("max", max)
            }
            SeatingError::InvalidData(_) => {
                AppError::with_message(ErrorCode::InvalidSeatingData, message)
            }
            SeatingError::Validation(err) => err,
        }
    }
}

pub type SeatingResult<T> = Result<T, SeatingError>;
