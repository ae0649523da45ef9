//! proptest strategies for purchase requests.

use proptest::collection::vec;
use proptest::prelude::*;
use ticket_service_core::{MAXIMUM_TICKETS, TicketCategory, TicketLineItem};

/// Any ticket category.
pub fn arb_category() -> impl Strategy<Value = TicketCategory> {
    prop::sample::select(TicketCategory::ALL.to_vec())
}

/// A child or infant category, never an adult.
pub fn arb_non_adult_category() -> impl Strategy<Value = TicketCategory> {
    prop::sample::select(vec![TicketCategory::Child, TicketCategory::Infant])
}

/// A single line with a quantity in `0..=max_quantity`.
pub fn arb_line_item(max_quantity: u32) -> impl Strategy<Value = TicketLineItem> {
    (arb_category(), 0..=max_quantity)
        .prop_map(|(category, quantity)| TicketLineItem::new(category, quantity))
}

/// Between 1 and `max_lines` lines of any category.
pub fn arb_line_items(
    max_lines: usize,
    max_quantity: u32,
) -> impl Strategy<Value = Vec<TicketLineItem>> {
    vec(arb_line_item(max_quantity), 1..=max_lines.max(1))
}

/// Requests with no adult line carrying a positive quantity.
///
/// Zero-quantity adult lines are mixed in on purpose.
pub fn arb_adultless_line_items(max_lines: usize) -> impl Strategy<Value = Vec<TicketLineItem>> {
    let line = prop_oneof![
        (arb_non_adult_category(), 0u32..50)
            .prop_map(|(category, quantity)| TicketLineItem::new(category, quantity)),
        Just(TicketLineItem::new(TicketCategory::Adult, 0)),
    ];
    vec(line, 1..=max_lines.max(1))
}

/// Requests that pass every rule: one positive adult line first, then
/// more lines, with the total kept within the ceiling.
pub fn arb_valid_line_items() -> impl Strategy<Value = Vec<TicketLineItem>> {
    (1..=MAXIMUM_TICKETS, vec((arb_category(), 0u32..=5), 0..6)).prop_map(
        |(adults, extra)| {
            let mut remaining = MAXIMUM_TICKETS - adults;
            let mut items = vec![TicketLineItem::new(TicketCategory::Adult, adults)];
            for (category, quantity) in extra {
                let quantity = quantity.min(remaining);
                remaining -= quantity;
                items.push(TicketLineItem::new(category, quantity));
            }
            items
        },
    )
}
