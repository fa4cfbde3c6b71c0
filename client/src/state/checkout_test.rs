use super::*;

// =============================================================
// Step machine
// =============================================================

#[test]
fn next_walks_shipping_payment_review() {
    let mut state = CheckoutState::default();
    assert_eq!(state.step, CheckoutStep::Shipping);
    assert_eq!(state.next(), Advance::Step(CheckoutStep::Payment));
    assert_eq!(state.next(), Advance::Step(CheckoutStep::Review));
    assert!(!state.is_complete());
}

#[test]
fn next_on_review_places_order() {
    let mut state = CheckoutState { step: CheckoutStep::Review, ..CheckoutState::default() };
    let Advance::Placed(order) = state.next() else {
        panic!("expected order");
    };
    assert_eq!(order.len(), 8);
    assert!(order.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    assert!(state.is_complete());
    assert_eq!(state.order_number.as_deref(), Some(order.as_str()));
}

#[test]
fn next_after_completion_keeps_order_number() {
    let mut state = CheckoutState { step: CheckoutStep::Review, ..CheckoutState::default() };
    let first = state.next();
    assert_eq!(state.next(), first);
}

#[test]
fn prev_is_noop_on_first_step() {
    let mut state = CheckoutState::default();
    state.prev();
    assert_eq!(state.step, CheckoutStep::Shipping);
    state.next();
    state.next();
    state.prev();
    assert_eq!(state.step, CheckoutStep::Payment);
}

#[test]
fn reached_lights_current_and_earlier_steps() {
    let state = CheckoutState { step: CheckoutStep::Payment, ..CheckoutState::default() };
    let lit: Vec<bool> = CheckoutStep::ALL.iter().map(|s| state.reached(*s)).collect();
    assert_eq!(lit, vec![true, true, false]);
}

// =============================================================
// Totals
// =============================================================

#[test]
fn summary_adds_eight_percent_tax() {
    let summary = OrderSummary::for_subtotal(Money::from_dollars(250));
    assert_eq!(summary.shipping, Money::ZERO);
    assert_eq!(summary.tax, Money::from_dollars(20));
    assert_eq!(summary.total, Money::from_dollars(270));
}

#[test]
fn summary_rounds_tax_to_the_cent() {
    // 8% of $189.00 is $15.12
    let summary = OrderSummary::for_subtotal(Money::from_dollars(189));
    assert_eq!(summary.tax.to_string(), "$15.12");
    assert_eq!(summary.total.to_string(), "$204.12");
}

// =============================================================
// Payment display
// =============================================================

#[test]
fn masked_card_shows_last_four() {
    let payment = PaymentInfo { card_number: "5555 4444 3333 1234".to_owned(), ..PaymentInfo::default() };
    assert_eq!(payment.masked_card(), "•••• •••• •••• 1234");
}

#[test]
fn masked_card_defaults_when_empty() {
    assert_eq!(PaymentInfo::default().masked_card(), "•••• •••• •••• 4242");
}

#[test]
fn masked_card_short_number_shows_what_exists() {
    let payment = PaymentInfo { card_number: "12".to_owned(), ..PaymentInfo::default() };
    assert_eq!(payment.masked_card(), "•••• •••• •••• 12");
}

#[test]
fn order_number_is_deterministic_for_seed() {
    assert_eq!(order_number_from(0), "00000000");
    assert_eq!(order_number_from(35), "Z0000000");
    assert_eq!(order_number_from(36), "01000000");
}
