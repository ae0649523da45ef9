//! Purchase validation rules.
//!
//! The rules run in a fixed order and the first failure wins:
//!
//! ```text
//! 1. check_account        -> AccountId
//! 2. check_request_shape  -> LineItems (non-empty)
//! 3. check_adult_present  (needs LineItems)
//! 4. check_ticket_limit   (needs LineItems) -> ticket count
//! ```
//!
//! Rules 3 and 4 only accept the [`LineItems`] view produced by rule 2, so
//! they cannot be reached with an empty request.

use crate::error::InvalidPurchase;
use crate::pricing;
use crate::types::{AccountId, TicketCategory, TicketLineItem};

/// Most tickets a single purchase may contain, infants included.
pub const MAXIMUM_TICKETS: u32 = 20;

/// Non-empty view over a request's line items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineItems<'a>(&'a [TicketLineItem]);

impl<'a> LineItems<'a> {
    /// Underlying lines, in request order
    #[must_use]
    pub const fn as_slice(&self) -> &'a [TicketLineItem] {
        self.0
    }
}

/// A request that passed every rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedPurchase<'a> {
    account_id: AccountId,
    line_items: LineItems<'a>,
    ticket_count: u64,
}

impl<'a> ValidatedPurchase<'a> {
    /// Account to charge
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Lines being purchased
    #[must_use]
    pub const fn line_items(&self) -> &'a [TicketLineItem] {
        self.line_items.as_slice()
    }

    /// Total tickets, infants included (never above [`MAXIMUM_TICKETS`])
    #[must_use]
    pub const fn ticket_count(&self) -> u64 {
        self.ticket_count
    }
}

/// Rule 1: the account id must be present and at least 1.
///
/// # Errors
///
/// [`InvalidPurchase::InvalidAccount`] when absent or below 1.
pub fn check_account(account_id: Option<i64>) -> Result<AccountId, InvalidPurchase> {
    account_id
        .ok_or(InvalidPurchase::InvalidAccount)
        .and_then(AccountId::try_from)
}

/// Rule 2: at least one line item must be submitted.
///
/// # Errors
///
/// [`InvalidPurchase::InvalidTicketTypeRequest`] when `items` is empty.
pub const fn check_request_shape(
    items: &[TicketLineItem],
) -> Result<LineItems<'_>, InvalidPurchase> {
    if items.is_empty() {
        Err(InvalidPurchase::InvalidTicketTypeRequest)
    } else {
        Ok(LineItems(items))
    }
}

/// Rule 3: some adult line must have a positive quantity.
///
/// # Errors
///
/// [`InvalidPurchase::AdultPurchaserNotPresent`] otherwise.
pub fn check_adult_present(items: LineItems<'_>) -> Result<(), InvalidPurchase> {
    let adult_present = items
        .as_slice()
        .iter()
        .any(|item| item.category() == TicketCategory::Adult && item.quantity() > 0);

    if adult_present {
        Ok(())
    } else {
        Err(InvalidPurchase::AdultPurchaserNotPresent)
    }
}

/// Rule 4: the total across every line, infants included, must not
/// exceed [`MAXIMUM_TICKETS`]. Returns that total.
///
/// # Errors
///
/// [`InvalidPurchase::ExceedTicketLimit`] when the total is above the ceiling.
pub fn check_ticket_limit(items: LineItems<'_>) -> Result<u64, InvalidPurchase> {
    let requested = pricing::total_tickets(items.as_slice());

    if requested > u64::from(MAXIMUM_TICKETS) {
        Err(InvalidPurchase::ExceedTicketLimit {
            requested,
            limit: MAXIMUM_TICKETS,
        })
    } else {
        Ok(requested)
    }
}

/// Runs every rule in order, stopping at the first failure.
///
/// # Errors
///
/// The [`InvalidPurchase`] of the first rule that fails.
pub fn validate(
    account_id: Option<i64>,
    items: &[TicketLineItem],
) -> Result<ValidatedPurchase<'_>, InvalidPurchase> {
    let account_id = check_account(account_id)?;
    let line_items = check_request_shape(items)?;
    check_adult_present(line_items)?;
    let ticket_count = check_ticket_limit(line_items)?;

    tracing::debug!(
        account_id = %account_id,
        lines = items.len(),
        ticket_count,
        "Purchase request passed validation"
    );

    Ok(ValidatedPurchase {
        account_id,
        line_items,
        ticket_count,
    })
}
