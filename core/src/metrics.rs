//! Purchase metrics.
//!
//! Recorded through the `metrics` facade, so nothing is collected until
//! the host application installs a recorder.
//!
//! # Exported Metrics
//!
//! - `ticket_purchases_total{outcome}` - purchases by outcome
//!   (`completed`, `rejected`, `payment_failed`, `reservation_failed`)
//! - `ticket_purchase_rejections_total{reason}` - rejections by validation rule
//! - `ticket_purchase_revenue_total` - amount charged on completed purchases
//! - `ticket_purchase_seats_reserved_total` - seats reserved on completed purchases

use crate::error::{InvalidPurchase, PurchaseError, Result};
use crate::types::{PurchaseReceipt, PurchaseTotals};
use metrics::describe_counter;

/// Register metric descriptions. Call once at startup, after installing a recorder.
pub fn register_purchase_metrics() {
    describe_counter!(
        "ticket_purchases_total",
        "Total purchase attempts by outcome (completed, rejected, payment_failed, reservation_failed)"
    );
    describe_counter!(
        "ticket_purchase_rejections_total",
        "Purchase requests rejected by validation, by reason"
    );
    describe_counter!(
        "ticket_purchase_revenue_total",
        "Total amount charged for completed purchases"
    );
    describe_counter!(
        "ticket_purchase_seats_reserved_total",
        "Total seats reserved for completed purchases"
    );

    tracing::debug!("Purchase metrics registered");
}

/// Record the outcome of one purchase attempt.
pub fn record_purchase_outcome(outcome: &Result<PurchaseReceipt>) {
    match outcome {
        Ok(receipt) => record_purchase_completed(receipt.totals),
        Err(PurchaseError::Invalid(reason)) => record_purchase_rejected(*reason),
        Err(PurchaseError::Payment(_)) => {
            metrics::counter!("ticket_purchases_total", "outcome" => "payment_failed").increment(1);
        }
        Err(PurchaseError::Reservation(_)) => {
            metrics::counter!("ticket_purchases_total", "outcome" => "reservation_failed")
                .increment(1);
        }
    }
}

fn record_purchase_completed(totals: PurchaseTotals) {
    metrics::counter!("ticket_purchases_total", "outcome" => "completed").increment(1);
    metrics::counter!("ticket_purchase_revenue_total").increment(totals.total_price);
    metrics::counter!("ticket_purchase_seats_reserved_total").increment(totals.total_seats);
}

fn record_purchase_rejected(reason: InvalidPurchase) {
    metrics::counter!("ticket_purchases_total", "outcome" => "rejected").increment(1);
    metrics::counter!("ticket_purchase_rejections_total", "reason" => reason.kind()).increment(1);
}
