//! Price and seat computation.
//!
//! Infants count toward the ticket ceiling but never toward the amount
//! charged or the seats reserved.

use crate::rules::ValidatedPurchase;
use crate::types::{PurchaseTotals, TicketLineItem};

/// Every ticket on every line, infants included.
#[must_use]
pub fn total_tickets(items: &[TicketLineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}

/// Amount to charge: `quantity * price` over seated categories.
#[must_use]
pub fn total_price(items: &[TicketLineItem]) -> u64 {
    seated(items)
        .map(|item| u64::from(item.quantity()) * u64::from(item.category().price()))
        .sum()
}

/// Seats to reserve: quantities over seated categories.
#[must_use]
pub fn total_seats(items: &[TicketLineItem]) -> u64 {
    seated(items).map(|item| u64::from(item.quantity())).sum()
}

fn seated(items: &[TicketLineItem]) -> impl Iterator<Item = &TicketLineItem> {
    items.iter().filter(|item| item.category().occupies_seat())
}

impl PurchaseTotals {
    /// Computes both totals for a set of line items
    #[must_use]
    pub fn from_items(items: &[TicketLineItem]) -> Self {
        Self {
            total_price: total_price(items),
            total_seats: total_seats(items),
        }
    }

    /// Computes both totals for a purchase that passed every rule
    #[must_use]
    pub fn for_purchase(purchase: &ValidatedPurchase<'_>) -> Self {
        Self::from_items(purchase.line_items())
    }
}
