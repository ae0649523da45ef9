//! Recording collaborator doubles
//!
//! Both doubles append to the same [`CallLog`], so a test can check what
//! was called, with which arguments, and in which order:
//! - [`RecordingPaymentService`]: records `make_payment`, optionally fails
//! - [`RecordingSeatReservationService`]: records `reserve_seat`, optionally fails

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Panics only on a poisoned lock

use std::future::Future;
use std::sync::{Arc, Mutex};
use ticket_service_core::{
    AccountId, PaymentError, PaymentService, ReservationError, SeatReservationService,
};

/// One collaborator call, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// `make_payment(account_id, amount)`
    Payment {
        /// Account charged
        account_id: u64,
        /// Amount charged
        amount: u64,
    },
    /// `reserve_seat(account_id, seats)`
    Reservation {
        /// Account booked for
        account_id: u64,
        /// Seats requested
        seats: u64,
    },
}

impl Call {
    /// Shorthand for an expected payment call
    #[must_use]
    pub const fn payment(account_id: u64, amount: u64) -> Self {
        Self::Payment { account_id, amount }
    }

    /// Shorthand for an expected reservation call
    #[must_use]
    pub const fn reservation(account_id: u64, seats: u64) -> Self {
        Self::Reservation { account_id, seats }
    }
}

/// Shared, ordered record of collaborator calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether no collaborator has been called
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// Payment calls only
    #[must_use]
    pub fn payments(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Payment { .. }))
            .collect()
    }

    /// Reservation calls only
    #[must_use]
    pub fn reservations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Reservation { .. }))
            .collect()
    }

    /// Forget every recorded call (for test isolation)
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Payment double that records each call.
#[derive(Clone, Debug, Default)]
pub struct RecordingPaymentService {
    log: CallLog,
    failure: Option<PaymentError>,
}

impl RecordingPaymentService {
    /// Create a payment double that succeeds and writes to `log`
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    /// Fail every call with `error` (the call is still recorded)
    #[must_use]
    pub fn failing_with(mut self, error: PaymentError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Log this double writes to
    #[must_use]
    pub const fn log(&self) -> &CallLog {
        &self.log
    }
}

impl PaymentService for RecordingPaymentService {
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: u64,
    ) -> impl Future<Output = Result<(), PaymentError>> + Send {
        self.log.push(Call::payment(account_id.get(), amount));
        let outcome = self.failure.clone().map_or(Ok(()), Err);
        async move { outcome }
    }
}

/// Reservation double that records each call.
#[derive(Clone, Debug, Default)]
pub struct RecordingSeatReservationService {
    log: CallLog,
    failure: Option<ReservationError>,
}

impl RecordingSeatReservationService {
    /// Create a reservation double that succeeds and writes to `log`
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    /// Fail every call with `error` (the call is still recorded)
    #[must_use]
    pub fn failing_with(mut self, error: ReservationError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Log this double writes to
    #[must_use]
    pub const fn log(&self) -> &CallLog {
        &self.log
    }
}

impl SeatReservationService for RecordingSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seats: u64,
    ) -> impl Future<Output = Result<(), ReservationError>> + Send {
        self.log.push(Call::reservation(account_id.get(), seats));
        let outcome = self.failure.clone().map_or(Ok(()), Err);
        async move { outcome }
    }
}
