//! Logging collaborators for local runs.
//!
//! Both services accept every call and log it. In production these would be
//! replaced with the real payment processor and seat booking integrations.

use std::future::Future;
use std::time::Duration;
use ticket_service_core::{
    AccountId, PaymentError, PaymentService, ReservationError, SeatReservationService,
};

/// Payment service that always succeeds.
#[derive(Clone, Debug, Default)]
pub struct LoggingPaymentService {
    latency: Duration,
}

impl LoggingPaymentService {
    /// Creates a payment service that waits `latency` before answering
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl PaymentService for LoggingPaymentService {
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: u64,
    ) -> impl Future<Output = Result<(), PaymentError>> + Send {
        let latency = self.latency;
        async move {
            // Simulate network delay
            tokio::time::sleep(latency).await;

            tracing::info!(%account_id, amount, "Payment processed");
            Ok(())
        }
    }
}

/// Seat reservation service that always succeeds.
#[derive(Clone, Debug, Default)]
pub struct LoggingSeatReservationService {
    latency: Duration,
}

impl LoggingSeatReservationService {
    /// Creates a reservation service that waits `latency` before answering
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seats: u64,
    ) -> impl Future<Output = Result<(), ReservationError>> + Send {
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;

            tracing::info!(%account_id, seats, "Seats reserved");
            Ok(())
        }
    }
}
