//! # Ticket Purchase
//!
//! Runs a single purchase request through the ticket service against
//! logging collaborators.
//!
//! The request is JSON:
//!
//! ```text
//! {
//!   "account_id": 50,
//!   "line_items": [
//!     { "category": "ADULT", "quantity": 10 },
//!     { "category": "CHILD", "quantity": 5 },
//!     { "category": "INFANT", "quantity": 5 }
//!   ]
//! }
//! ```

pub mod config;
pub mod services;

use anyhow::Context;
use config::Config;
use services::{LoggingPaymentService, LoggingSeatReservationService};
use std::fs::File;
use std::io::{self, BufReader, Read};
use ticket_service_core::{PurchaseReceipt, PurchaseRequest, PurchaseValidator, Result};

/// Validator used by the binary.
pub type DemoValidator = PurchaseValidator<LoggingPaymentService, LoggingSeatReservationService>;

/// Build the validator over logging collaborators.
#[must_use]
pub const fn build_service(config: &Config) -> DemoValidator {
    PurchaseValidator::new(
        LoggingPaymentService::new(config.simulated_latency),
        LoggingSeatReservationService::new(config.simulated_latency),
    )
}

/// Parse a purchase request from JSON.
///
/// # Errors
///
/// Returns error if the input is not a valid request document.
pub fn parse_request<R: Read>(reader: R) -> serde_json::Result<PurchaseRequest> {
    serde_json::from_reader(reader)
}

/// Read the request from the configured file, or stdin when none is set.
///
/// # Errors
///
/// Returns error if the file cannot be opened or the JSON is malformed.
pub fn read_request(config: &Config) -> anyhow::Result<PurchaseRequest> {
    match &config.request_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open request file {}", path.display()))?;
            parse_request(BufReader::new(file))
                .with_context(|| format!("Invalid purchase request in {}", path.display()))
        }
        None => parse_request(io::stdin().lock()).context("Invalid purchase request on stdin"),
    }
}

/// Human-readable summary of a purchase outcome.
#[must_use]
pub fn describe_outcome(outcome: &Result<PurchaseReceipt>) -> String {
    match outcome {
        Ok(receipt) => format!(
            "Purchase complete for account {}: {} tickets, charged {}, {} seats reserved",
            receipt.account_id,
            receipt.ticket_count,
            receipt.totals.total_price,
            receipt.totals.total_seats
        ),
        Err(error) if error.is_rejection() => format!("Purchase rejected: {error}"),
        Err(error) => format!("Purchase failed: {error}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ticket_service_core::{InvalidPurchase, PaymentError, PurchaseError, TicketService};

    #[test]
    fn test_parse_request() {
        let json = br#"{ "account_id": 12345, "line_items": [ { "category": "CHILD", "quantity": 2 } ] }"#;
        let request = parse_request(&json[..]).unwrap();

        assert_eq!(request.account_id, Some(12345));
        assert_eq!(request.line_items.len(), 1);
    }

    #[test]
    fn test_parse_request_rejects_unknown_category() {
        let json = br#"{ "account_id": 1, "line_items": [ { "category": "SENIOR", "quantity": 1 } ] }"#;
        assert!(parse_request(&json[..]).is_err());
    }

    #[tokio::test]
    async fn test_family_request_end_to_end() {
        let json = br#"{ "account_id": 50, "line_items": [
            { "category": "ADULT", "quantity": 10 },
            { "category": "CHILD", "quantity": 5 },
            { "category": "INFANT", "quantity": 5 }
        ] }"#;
        let request = parse_request(&json[..]).unwrap();
        let service = build_service(&Config::default());

        let outcome = service.purchase(&request).await;

        assert_eq!(
            describe_outcome(&outcome),
            "Purchase complete for account 50: 20 tickets, charged 250, 15 seats reserved"
        );
    }

    #[test]
    fn test_describe_failures() {
        let rejected: Result<PurchaseReceipt> =
            Err(PurchaseError::Invalid(InvalidPurchase::InvalidAccount));
        assert_eq!(describe_outcome(&rejected), "Purchase rejected: Invalid account id");

        let failed: Result<PurchaseReceipt> = Err(PurchaseError::Payment(PaymentError::Unavailable));
        assert_eq!(describe_outcome(&failed), "Purchase failed: Payment service unavailable");
    }
}
