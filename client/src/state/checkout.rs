//! Simulated checkout flow: step machine, form data, and order totals.
//!
//! Nothing is charged or validated. Completing the review step produces an
//! order number and the page clears the cart.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::util::money::Money;

/// Sales tax applied to the subtotal, in basis points (8%).
pub const TAX_RATE_BPS: u64 = 800;
/// Shown in the review step when no card number was typed.
pub const FALLBACK_CARD_LAST4: &str = "4242";

const ORDER_NUMBER_LEN: usize = 8;
const ORDER_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Checkout wizard steps, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Review,
}

impl CheckoutStep {
    pub const ALL: [Self; 3] = [Self::Shipping, Self::Payment, Self::Review];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Shipping => Some(Self::Payment),
            Self::Payment => Some(Self::Review),
            Self::Review => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            Self::Shipping => None,
            Self::Payment => Some(Self::Shipping),
            Self::Review => Some(Self::Payment),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentInfo {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub name_on_card: String,
}

impl PaymentInfo {
    /// Card number as shown on the review step: `•••• •••• •••• 1234`.
    #[must_use]
    pub fn masked_card(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        let last4: String = if digits.is_empty() {
            FALLBACK_CARD_LAST4.to_owned()
        } else {
            digits[digits.len().saturating_sub(4)..].iter().collect()
        };
        format!("•••• •••• •••• {last4}")
    }
}

/// What the shopper pays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Money,
    /// Always free.
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    #[must_use]
    pub fn for_subtotal(subtotal: Money) -> Self {
        let tax = subtotal.basis_points(TAX_RATE_BPS);
        Self { subtotal, shipping: Money::ZERO, tax, total: subtotal + tax }
    }
}

/// Result of pressing the primary checkout button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step.
    Step(CheckoutStep),
    /// The review step was confirmed. The caller clears the cart.
    Placed(String),
}

/// Page-local state for the checkout wizard.
#[derive(Clone, Debug, Default)]
pub struct CheckoutState {
    pub step: CheckoutStep,
    pub shipping: ShippingInfo,
    pub payment: PaymentInfo,
    /// Set once the order is placed.
    pub order_number: Option<String>,
}

impl CheckoutState {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.order_number.is_some()
    }

    /// Advance one step, or place the order from the review step.
    pub fn next(&mut self) -> Advance {
        if let Some(order) = &self.order_number {
            return Advance::Placed(order.clone());
        }
        if let Some(step) = self.step.next() {
            self.step = step;
            return Advance::Step(step);
        }
        let order = order_number_from(uuid::Uuid::new_v4().as_u128());
        self.order_number = Some(order.clone());
        Advance::Placed(order)
    }

    /// Go back one step. No-op on the first step.
    pub fn prev(&mut self) {
        if let Some(step) = self.step.prev() {
            self.step = step;
        }
    }

    /// Whether the step indicator for `step` is lit.
    #[must_use]
    pub fn reached(&self, step: CheckoutStep) -> bool {
        self.step >= step
    }
}

/// Eight uppercase base-36 characters taken from `seed`.
#[must_use]
pub fn order_number_from(mut seed: u128) -> String {
    let mut out = String::with_capacity(ORDER_NUMBER_LEN);
    for _ in 0..ORDER_NUMBER_LEN {
        let idx = usize::try_from(seed % 36).unwrap_or_default();
        out.push(char::from(ORDER_ALPHABET[idx]));
        seed /= 36;
    }
    out
}
