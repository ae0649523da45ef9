//! Error types for ticket purchases.

use thiserror::Error;

/// Result type alias for purchase operations.
pub type Result<T> = std::result::Result<T, PurchaseError>;

/// Reasons a purchase request is rejected before any collaborator is called.
///
/// All of these are terminal for the request as submitted: retrying the
/// same request produces the same rejection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchase {
    /// Account identifier missing or below 1.
    #[error("Invalid account id")]
    InvalidAccount,

    /// No ticket lines were submitted.
    #[error("Invalid ticket type request, at least one ticket request is required")]
    InvalidTicketTypeRequest,

    /// No adult line with a positive quantity.
    #[error("No adult purchaser has been found")]
    AdultPurchaserNotPresent,

    /// More tickets requested than a single purchase allows.
    #[error("You can buy up to {limit} tickets at a time")]
    ExceedTicketLimit {
        /// Tickets requested, infants included
        requested: u64,
        /// Ceiling that was exceeded
        limit: u32,
    },
}

impl InvalidPurchase {
    /// Stable label for logs and metrics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAccount => "invalid_account",
            Self::InvalidTicketTypeRequest => "invalid_ticket_type_request",
            Self::AdultPurchaserNotPresent => "adult_purchaser_not_present",
            Self::ExceedTicketLimit { .. } => "exceed_ticket_limit",
        }
    }
}

/// Failures raised by a payment collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment was declined by the processor
    #[error("Payment declined: {reason}")]
    Declined {
        /// Decline reason
        reason: String,
    },

    /// Account cannot cover the amount
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Processor could not be reached
    #[error("Payment service unavailable")]
    Unavailable,

    /// Anything else the processor reports
    #[error("Payment error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Failures raised by a seat reservation collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// Not enough seats left to satisfy the request
    #[error("Not enough seats available for {requested} tickets")]
    NoSeatsAvailable {
        /// Seats that were asked for
        requested: u64,
    },

    /// Reservation service could not be reached
    #[error("Seat reservation service unavailable")]
    Unavailable,

    /// Anything else the reservation service reports
    #[error("Seat reservation error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Everything `purchase_tickets` can fail with.
///
/// Collaborator failures are carried unchanged: `Display` and `source`
/// are those of the wrapped error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// Request rejected by validation
    #[error(transparent)]
    Invalid(#[from] InvalidPurchase),

    /// Payment collaborator failed
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Reservation collaborator failed (payment already taken)
    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

impl PurchaseError {
    /// Returns the validation reason, if this is a rejection
    #[must_use]
    pub const fn as_invalid(&self) -> Option<&InvalidPurchase> {
        match self {
            Self::Invalid(reason) => Some(reason),
            Self::Payment(_) | Self::Reservation(_) => None,
        }
    }

    /// Whether the request was rejected before any collaborator ran
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}
