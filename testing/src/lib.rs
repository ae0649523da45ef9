//! # Ticket Service Testing
//!
//! Testing utilities for the ticket service.
//!
//! This crate provides:
//! - Recording payment and reservation doubles that share a [`CallLog`]
//! - Configurable collaborator failures
//! - proptest strategies for categories and line items
//! - Helpers to build a validator over the doubles
//!
//! ## Example
//!
//! ```
//! use ticket_service_core::{TicketCategory, TicketLineItem, TicketService};
//! use ticket_service_testing::{test_validator, Call};
//!
//! # tokio_test::block_on(async {
//! let (service, log) = test_validator();
//! let items = [TicketLineItem::new(TicketCategory::Adult, 2)];
//!
//! service.purchase_tickets(Some(7), &items).await.unwrap();
//!
//! assert_eq!(log.calls(), vec![Call::payment(7, 40), Call::reservation(7, 2)]);
//! # });
//! ```

pub mod mocks;
pub mod properties;

/// Test helpers and utilities.
pub mod helpers {
    use crate::mocks::{CallLog, RecordingPaymentService, RecordingSeatReservationService};
    use ticket_service_core::PurchaseValidator;

    /// Validator wired to recording doubles that never fail.
    pub type TestValidator =
        PurchaseValidator<RecordingPaymentService, RecordingSeatReservationService>;

    /// Build a validator over recording doubles, plus the log they write to.
    #[must_use]
    pub fn test_validator() -> (TestValidator, CallLog) {
        let log = CallLog::new();
        let service = PurchaseValidator::new(
            RecordingPaymentService::new(log.clone()),
            RecordingSeatReservationService::new(log.clone()),
        );
        (service, log)
    }

    /// Route `tracing` output through the test harness.
    ///
    /// Safe to call from every test; only the first call installs a subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "ticket_service_core=debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::{TestValidator, init_test_tracing, test_validator};
pub use mocks::{Call, CallLog, RecordingPaymentService, RecordingSeatReservationService};
