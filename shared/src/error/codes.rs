//! Unified error codes for the Vow planner
//!
//! This module defines all error codes shared by the planner, the API client
//! and the dashboard frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 6xxx: Website builder errors
//! - 7xxx: Seating errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the frontend can match
/// on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 6xxx: Website ====================
    /// Website section not found
    SectionNotFound = 6001,
    /// Pending edits would be overwritten
    UnsavedChanges = 6002,
    /// Website save call failed
    SaveFailed = 6003,

    // ==================== 7xxx: Seating ====================
    /// Table not found
    TableNotFound = 7001,
    /// Seat number outside the table's range
    InvalidSeat = 7002,
    /// Seat is held by another guest
    SeatOccupied = 7003,
    /// Table still has seated guests
    TableHasGuests = 7004,
    /// Seat count must be positive
    InvalidSeatCount = 7005,
    /// Guest not found
    GuestNotFound = 7101,
    /// Guest group exceeds the configured size
    GuestGroupTooLarge = 7102,
    /// Externally supplied seating data violates invariants
    InvalidSeatingData = 7201,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Website
            ErrorCode::SectionNotFound => "Website section not found",
            ErrorCode::UnsavedChanges => "There are unsaved changes",
            ErrorCode::SaveFailed => "Saving website changes failed",

            // Seating
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::InvalidSeat => "Seat is outside the table's range",
            ErrorCode::SeatOccupied => "Seat is already occupied",
            ErrorCode::TableHasGuests => "Table has seated guests",
            ErrorCode::InvalidSeatCount => "Seat count must be at least 1",
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::GuestGroupTooLarge => "Guest group is too large",
            ErrorCode::InvalidSeatingData => "Seating data is inconsistent",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Website
            6001 => Ok(ErrorCode::SectionNotFound),
            6002 => Ok(ErrorCode::UnsavedChanges),
            6003 => Ok(ErrorCode::SaveFailed),

            // Seating
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::InvalidSeat),
            7003 => Ok(ErrorCode::SeatOccupied),
            7004 => Ok(ErrorCode::TableHasGuests),
            7005 => Ok(ErrorCode::InvalidSeatCount),
            7101 => Ok(ErrorCode::GuestNotFound),
            7102 => Ok(ErrorCode::GuestGroupTooLarge),
            7201 => Ok(ErrorCode::InvalidSeatingData),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
