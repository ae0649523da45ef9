//! Domain types for ticket purchases.
//!
//! Everything here is a value object: built once per purchase attempt,
//! never mutated, and discarded when the attempt finishes.

use crate::error::InvalidPurchase;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Ticket categories
// ============================================================================

/// Ticket category with a fixed unit price.
///
/// Prices are whole currency units and are resolved at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    /// Adult ticket (20)
    Adult,
    /// Child ticket (10)
    Child,
    /// Infant ticket (free, sits on an adult's lap)
    Infant,
}

impl TicketCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Unit price of one ticket of this category
    #[must_use]
    pub const fn price(self) -> u32 {
        match self {
            Self::Adult => 20,
            Self::Child => 10,
            Self::Infant => 0,
        }
    }

    /// Whether a ticket of this category needs its own seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "ADULT"),
            Self::Child => write!(f, "CHILD"),
            Self::Infant => write!(f, "INFANT"),
        }
    }
}

// ============================================================================
// Line items
// ============================================================================

/// One line of a purchase request: a category and how many tickets of it.
///
/// Zero quantities are allowed; they contribute nothing to any total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketLineItem {
    category: TicketCategory,
    quantity: u32,
}

impl TicketLineItem {
    /// Creates a new line item
    #[must_use]
    pub const fn new(category: TicketCategory, quantity: u32) -> Self {
        Self { category, quantity }
    }

    /// Ticket category of this line
    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// Number of tickets on this line
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

// ============================================================================
// Accounts
// ============================================================================

/// Validated account identifier (always >= 1).
///
/// Well-formedness only: nothing here says the account exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct AccountId(u64);

impl AccountId {
    /// Returns the raw identifier
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidPurchase;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .filter(|id| *id >= 1)
            .map(Self)
            .ok_or(InvalidPurchase::InvalidAccount)
    }
}

impl From<AccountId> for u64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Requests and results
// ============================================================================

/// A purchase request as it arrives from a caller.
///
/// Nothing is validated at construction; `account_id` may be absent and
/// `line_items` may be empty. The service pipeline decides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Account placing the order, `None` when the caller sent none
    #[serde(default)]
    pub account_id: Option<i64>,
    /// Ordered ticket lines
    #[serde(default)]
    pub line_items: Vec<TicketLineItem>,
}

impl PurchaseRequest {
    /// Creates a request for the given account and lines
    #[must_use]
    pub const fn new(account_id: Option<i64>, line_items: Vec<TicketLineItem>) -> Self {
        Self {
            account_id,
            line_items,
        }
    }
}

/// Amount to charge and seats to reserve for a validated purchase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    /// Sum of `quantity * price` over seated categories
    pub total_price: u64,
    /// Sum of quantities over seated categories
    pub total_seats: u64,
}

/// Outcome of a completed purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Account that was charged
    pub account_id: AccountId,
    /// Amount charged and seats reserved
    pub totals: PurchaseTotals,
    /// Every ticket issued, infants included
    pub ticket_count: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_prices() {
        assert_eq!(TicketCategory::Adult.price(), 20);
        assert_eq!(TicketCategory::Child.price(), 10);
        assert_eq!(TicketCategory::Infant.price(), 0);
    }

    #[test]
    fn test_only_infants_ride_on_laps() {
        let seated: Vec<_> = TicketCategory::ALL
            .into_iter()
            .filter(|c| c.occupies_seat())
            .collect();
        assert_eq!(seated, vec![TicketCategory::Adult, TicketCategory::Child]);
    }

    #[test]
    fn test_account_id_bounds() {
        assert_eq!(AccountId::try_from(1).unwrap().get(), 1);
        assert_eq!(AccountId::try_from(0), Err(InvalidPurchase::InvalidAccount));
        assert_eq!(AccountId::try_from(-7), Err(InvalidPurchase::InvalidAccount));
        assert_eq!(
            AccountId::try_from(i64::MAX).unwrap().get(),
            u64::try_from(i64::MAX).unwrap()
        );
    }

    #[test]
    fn test_request_json_shape() {
        let json = r#"{
            "account_id": 50,
            "line_items": [
                { "category": "ADULT", "quantity": 10 },
                { "category": "INFANT", "quantity": 5 }
            ]
        }"#;
        let request: PurchaseRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.account_id, Some(50));
        assert_eq!(
            request.line_items,
            vec![
                TicketLineItem::new(TicketCategory::Adult, 10),
                TicketLineItem::new(TicketCategory::Infant, 5),
            ]
        );
    }

    #[test]
    fn test_request_json_missing_fields() {
        let request: PurchaseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, PurchaseRequest::default());

        let request: PurchaseRequest =
            serde_json::from_str(r#"{ "account_id": null, "line_items": [] }"#).unwrap();
        assert!(request.account_id.is_none());
    }

    #[test]
    fn test_account_id_rejects_non_positive_json() {
        assert!(serde_json::from_str::<AccountId>("0").is_err());
        assert_eq!(serde_json::from_str::<AccountId>("42").unwrap().get(), 42);
        assert_eq!(serde_json::to_string(&AccountId::try_from(42).unwrap()).unwrap(), "42");
    }
}
