//! Collaborator traits.
//!
//! The purchase service only knows these two capabilities. Concrete
//! payment processors and seat booking systems live outside this crate;
//! tests use the doubles in `ticket-service-testing`.

use crate::error::{PaymentError, ReservationError};
use crate::types::AccountId;
use std::future::Future;
use std::sync::Arc;

/// Payment processor.
///
/// Implementations must be safe to call from several purchases at once.
pub trait PaymentService: Send + Sync {
    /// Charge `amount` whole currency units to the account.
    ///
    /// # Errors
    ///
    /// Returns error if the processor refuses or cannot be reached. The
    /// purchase service passes it to its caller unchanged.
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: u64,
    ) -> impl Future<Output = Result<(), PaymentError>> + Send;
}

/// Seat booking system.
///
/// Implementations must be safe to call from several purchases at once.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seats` seats for the account.
    ///
    /// # Errors
    ///
    /// Returns error if the seats cannot be allocated. No payment refund
    /// is attempted by the caller.
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seats: u64,
    ) -> impl Future<Output = Result<(), ReservationError>> + Send;
}

impl<T: PaymentService> PaymentService for Arc<T> {
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: u64,
    ) -> impl Future<Output = Result<(), PaymentError>> + Send {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationService> SeatReservationService for Arc<T> {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seats: u64,
    ) -> impl Future<Output = Result<(), ReservationError>> + Send {
        (**self).reserve_seat(account_id, seats)
    }
}
