//! # Ticket Service Core
//!
//! Validation and pricing for ticket purchases, in front of a payment
//! processor and a seat reservation system.
//!
//! A purchase is an account id plus a list of `(category, quantity)` lines.
//! It goes through four ordered rules (see [`rules`]), gets priced (see
//! [`pricing`]), and only then reaches the collaborators:
//!
//! ```text
//! purchase_tickets(account, lines)
//!   ├─ 1. account present and >= 1        else InvalidAccount
//!   ├─ 2. at least one line               else InvalidTicketTypeRequest
//!   ├─ 3. an adult line with quantity > 0 else AdultPurchaserNotPresent
//!   ├─ 4. total tickets <= 20             else ExceedTicketLimit
//!   ├─ PaymentService::make_payment(account, price)
//!   └─ SeatReservationService::reserve_seat(account, seats)
//! ```
//!
//! Prices: adult 20, child 10, infant 0. Infants count toward the 20-ticket
//! ceiling but are neither charged nor seated.
//!
//! ## Example
//!
//! ```ignore
//! use ticket_service_core::{PurchaseValidator, TicketService, TicketLineItem, TicketCategory};
//!
//! let service = PurchaseValidator::new(payments, reservations);
//! let receipt = service
//!     .purchase_tickets(Some(50), &[
//!         TicketLineItem::new(TicketCategory::Adult, 10),
//!         TicketLineItem::new(TicketCategory::Child, 5),
//!         TicketLineItem::new(TicketCategory::Infant, 5),
//!     ])
//!     .await?;
//!
//! assert_eq!(receipt.totals.total_price, 250);
//! assert_eq!(receipt.totals.total_seats, 15);
//! ```

pub mod error;
pub mod metrics;
pub mod pricing;
pub mod providers;
pub mod rules;
pub mod service;
pub mod types;

pub use error::{InvalidPurchase, PaymentError, PurchaseError, ReservationError, Result};
pub use providers::{PaymentService, SeatReservationService};
pub use rules::{MAXIMUM_TICKETS, ValidatedPurchase};
pub use service::{PurchaseValidator, TicketService};
pub use types::{
    AccountId, PurchaseReceipt, PurchaseRequest, PurchaseTotals, TicketCategory, TicketLineItem,
};
