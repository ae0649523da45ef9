//! The ticket purchase service.
//!
//! [`PurchaseValidator`] runs the rules in [`crate::rules`], prices the
//! purchase, then calls the payment and reservation collaborators in that
//! order. Nothing is called unless every rule passes, and nothing is
//! retried or compensated when a collaborator fails.

use crate::error::{PurchaseError, Result};
use crate::providers::{PaymentService, SeatReservationService};
use crate::rules;
use crate::types::{PurchaseReceipt, PurchaseRequest, PurchaseTotals, TicketLineItem};
use std::future::Future;

/// Entry point for buying tickets.
pub trait TicketService: Send + Sync {
    /// Validate the request, take payment, then reserve seats.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::Invalid`] if a rule rejects the request; no
    ///   collaborator has been called
    /// - [`PurchaseError::Payment`] if payment failed; no seats were reserved
    /// - [`PurchaseError::Reservation`] if reservation failed; payment stands
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        line_items: &[TicketLineItem],
    ) -> impl Future<Output = Result<PurchaseReceipt>> + Send;

    /// Same as [`TicketService::purchase_tickets`] for a deserialized request.
    ///
    /// # Errors
    ///
    /// See [`TicketService::purchase_tickets`].
    fn purchase(
        &self,
        request: &PurchaseRequest,
    ) -> impl Future<Output = Result<PurchaseReceipt>> + Send {
        self.purchase_tickets(request.account_id, &request.line_items)
    }
}

/// Stateless [`TicketService`] over a payment and a reservation collaborator.
#[derive(Clone, Debug)]
pub struct PurchaseValidator<P, R> {
    payments: P,
    reservations: R,
}

impl<P, R> PurchaseValidator<P, R>
where
    P: PaymentService,
    R: SeatReservationService,
{
    /// Creates a validator that charges through `payments` and books through `reservations`
    #[must_use]
    pub const fn new(payments: P, reservations: R) -> Self {
        Self {
            payments,
            reservations,
        }
    }

    /// Payment collaborator
    #[must_use]
    pub const fn payments(&self) -> &P {
        &self.payments
    }

    /// Reservation collaborator
    #[must_use]
    pub const fn reservations(&self) -> &R {
        &self.reservations
    }

    async fn run(
        &self,
        account_id: Option<i64>,
        line_items: &[TicketLineItem],
    ) -> Result<PurchaseReceipt> {
        let purchase = rules::validate(account_id, line_items)?;
        let account_id = purchase.account_id();
        let totals = PurchaseTotals::for_purchase(&purchase);

        self.payments
            .make_payment(account_id, totals.total_price)
            .await?;
        tracing::debug!(%account_id, amount = totals.total_price, "Payment taken");

        self.reservations
            .reserve_seat(account_id, totals.total_seats)
            .await?;
        tracing::debug!(%account_id, seats = totals.total_seats, "Seats reserved");

        Ok(PurchaseReceipt {
            account_id,
            totals,
            ticket_count: purchase.ticket_count(),
        })
    }
}

impl<P, R> TicketService for PurchaseValidator<P, R>
where
    P: PaymentService,
    R: SeatReservationService,
{
    #[tracing::instrument(skip(self, line_items), fields(lines = line_items.len()))]
    async fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        line_items: &[TicketLineItem],
    ) -> Result<PurchaseReceipt> {
        let outcome = self.run(account_id, line_items).await;

        match &outcome {
            Ok(receipt) => {
                tracing::info!(
                    total_price = receipt.totals.total_price,
                    total_seats = receipt.totals.total_seats,
                    ticket_count = receipt.ticket_count,
                    "Tickets purchased"
                );
            }
            Err(PurchaseError::Invalid(reason)) => {
                tracing::warn!(reason = reason.kind(), error = %reason, "Purchase rejected");
            }
            Err(error) => {
                tracing::error!(error = %error, "Purchase failed in collaborator");
            }
        }
        crate::metrics::record_purchase_outcome(&outcome);

        outcome
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{InvalidPurchase, PaymentError, ReservationError};
    use crate::types::AccountId;
    use crate::types::TicketCategory::{Adult, Child, Infant};
    use std::sync::{Arc, Mutex};

    /// Minimal doubles; the full recording doubles live in the testing crate.
    #[derive(Clone, Default)]
    struct Ledger(Arc<Mutex<Vec<String>>>);

    impl Ledger {
        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    #[derive(Clone, Default)]
    struct StubPayments {
        ledger: Ledger,
        fail: Option<PaymentError>,
    }

    impl PaymentService for StubPayments {
        async fn make_payment(
            &self,
            account_id: AccountId,
            amount: u64,
        ) -> std::result::Result<(), PaymentError> {
            self.ledger.0.lock().unwrap().push(format!("pay {account_id} {amount}"));
            self.fail.clone().map_or(Ok(()), Err)
        }
    }

    #[derive(Clone, Default)]
    struct StubReservations {
        ledger: Ledger,
        fail: Option<ReservationError>,
    }

    impl SeatReservationService for StubReservations {
        async fn reserve_seat(
            &self,
            account_id: AccountId,
            seats: u64,
        ) -> std::result::Result<(), ReservationError> {
            self.ledger.0.lock().unwrap().push(format!("reserve {account_id} {seats}"));
            self.fail.clone().map_or(Ok(()), Err)
        }
    }

    fn validator(ledger: &Ledger) -> PurchaseValidator<StubPayments, StubReservations> {
        PurchaseValidator::new(
            StubPayments {
                ledger: ledger.clone(),
                fail: None,
            },
            StubReservations {
                ledger: ledger.clone(),
                fail: None,
            },
        )
    }

    #[tokio::test]
    async fn test_pays_then_reserves() {
        let ledger = Ledger::default();
        let service = validator(&ledger);
        let items = [
            TicketLineItem::new(Adult, 10),
            TicketLineItem::new(Child, 5),
            TicketLineItem::new(Infant, 5),
        ];

        let receipt = service.purchase_tickets(Some(50), &items).await.unwrap();

        assert_eq!(ledger.entries(), vec!["pay 50 250", "reserve 50 15"]);
        assert_eq!(receipt.totals.total_price, 250);
        assert_eq!(receipt.totals.total_seats, 15);
        assert_eq!(receipt.ticket_count, 20);
    }

    #[tokio::test]
    async fn test_rejection_makes_no_calls() {
        let ledger = Ledger::default();
        let service = validator(&ledger);

        let result = service
            .purchase_tickets(Some(12345), &[TicketLineItem::new(Child, 2)])
            .await;

        assert_eq!(
            result,
            Err(PurchaseError::Invalid(InvalidPurchase::AdultPurchaserNotPresent))
        );
        assert!(ledger.entries().is_empty());
    }

    #[tokio::test]
    async fn test_payment_failure_skips_reservation() {
        let ledger = Ledger::default();
        let mut service = validator(&ledger);
        service.payments.fail = Some(PaymentError::InsufficientFunds);

        let result = service
            .purchase_tickets(Some(1), &[TicketLineItem::new(Adult, 1)])
            .await;

        assert_eq!(result, Err(PurchaseError::Payment(PaymentError::InsufficientFunds)));
        assert_eq!(ledger.entries(), vec!["pay 1 20"]);
    }

    #[tokio::test]
    async fn test_reservation_failure_keeps_payment() {
        let ledger = Ledger::default();
        let mut service = validator(&ledger);
        service.reservations.fail = Some(ReservationError::Unavailable);

        let result = service
            .purchase_tickets(Some(1), &[TicketLineItem::new(Adult, 2)])
            .await;

        assert_eq!(result, Err(PurchaseError::Reservation(ReservationError::Unavailable)));
        assert_eq!(ledger.entries(), vec!["pay 1 40", "reserve 1 2"]);
    }

    #[tokio::test]
    async fn test_purchase_from_request() {
        let ledger = Ledger::default();
        let service = validator(&ledger);
        let request = PurchaseRequest::new(Some(9), vec![TicketLineItem::new(Adult, 1)]);

        let receipt = service.purchase(&request).await.unwrap();

        assert_eq!(receipt.account_id.get(), 9);
        assert_eq!(ledger.entries(), vec!["pay 9 20", "reserve 9 1"]);
    }

    #[test]
    fn test_outcomes_reach_the_metrics_recorder() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let ledger = Ledger::default();
        let service = validator(&ledger);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                service
                    .purchase_tickets(Some(50), &[TicketLineItem::new(Adult, 2)])
                    .await
                    .unwrap();
                let rejected = service
                    .purchase_tickets(Some(50), &[TicketLineItem::new(Child, 2)])
                    .await;
                assert!(rejected.is_err());
            });
        });

        let output = handle.render();
        assert!(output.contains(r#"ticket_purchases_total{outcome="completed"} 1"#));
        assert!(output.contains(r#"ticket_purchases_total{outcome="rejected"} 1"#));
        assert!(output.contains("ticket_purchase_revenue_total 40"));
        assert!(output.contains("ticket_purchase_seats_reserved_total 2"));
    }
}
