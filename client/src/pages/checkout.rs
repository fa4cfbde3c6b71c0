//! Three-step simulated checkout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::Navbar;
use crate::state::cart::CartState;
use crate::state::checkout::{Advance, CheckoutState, CheckoutStep, OrderSummary, PaymentInfo, ShippingInfo};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let checkout = RwSignal::new(CheckoutState::default());

    // Memos so typing into the form does not rebuild it.
    let placed = Memo::new(move |_| checkout.with(|c| c.order_number.clone()));
    let empty = Memo::new(move |_| cart.with(CartState::is_empty));

    let body = move || {
        if let Some(order) = placed.get() {
            return view! { <OrderConfirmed order/> }.into_any();
        }
        if empty.get() {
            return view! { <EmptyCart/> }.into_any();
        }
        view! { <CheckoutForm checkout/> }.into_any()
    };

    view! {
        <Navbar/>
        <main class="checkout">{body}</main>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="checkout__card checkout__card--center">
            <h1>"Your cart is empty"</h1>
            <p>"Add some items to proceed to checkout"</p>
            <A href="/" attr:class="btn btn--primary">"Continue Shopping"</A>
        </div>
    }
}

#[component]
fn OrderConfirmed(order: String) -> impl IntoView {
    view! {
        <div class="checkout__card checkout__card--center">
            <div class="checkout__check">"✓"</div>
            <h1>"Order Confirmed!"</h1>
            <p>"Thank you for your purchase. Your order has been placed successfully."</p>
            <p class="checkout__order">"Order #: " {order}</p>
            <A href="/" attr:class="btn btn--primary">"Continue Shopping"</A>
        </div>
    }
}

#[component]
fn CheckoutForm(checkout: RwSignal<CheckoutState>) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let step = Memo::new(move |_| checkout.with(|c| c.step));
    let summary = move || OrderSummary::for_subtotal(cart.with(CartState::total_price));

    let on_next = move |_| {
        let mut advance = None;
        checkout.update(|c| advance = Some(c.next()));
        if let Some(Advance::Placed(order)) = advance {
            leptos::logging::log!("order {order} placed");
            cart.update(CartState::clear_cart);
        }
    };

    view! {
        <ol class="checkout__steps">
            {CheckoutStep::ALL
                .iter()
                .map(|&s| {
                    view! {
                        <li
                            class="checkout__step"
                            class:is-reached=move || checkout.with(|c| c.reached(s))
                            class:is-current=move || step.get() == s
                        >
                            {s.label()}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
        <div class="checkout__layout">
            <section class="checkout__card">
                {move || match step.get() {
                    CheckoutStep::Shipping => view! { <ShippingForm checkout/> }.into_any(),
                    CheckoutStep::Payment => view! { <PaymentForm checkout/> }.into_any(),
                    CheckoutStep::Review => view! { <ReviewPanel checkout/> }.into_any(),
                }}
                <div class="checkout__nav">
                    <button
                        class="btn"
                        disabled=move || step.get() == CheckoutStep::Shipping
                        on:click=move |_| checkout.update(CheckoutState::prev)
                    >
                        "Back"
                    </button>
                    <button class="btn btn--primary" on:click=on_next>
                        {move || if step.get() == CheckoutStep::Review { "Place Order" } else { "Continue" }}
                    </button>
                </div>
            </section>
            <aside class="checkout__card checkout__summary">
                <h3>"Order Summary"</h3>
                <ul class="checkout__lines">
                    {move || {
                        cart.with(|c| {
                            c.items
                                .iter()
                                .map(|line| {
                                    view! {
                                        <li>
                                            <span>{format!("{} × {}", line.product.name, line.quantity)}</span>
                                            <span>{line.line_total().to_string()}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ul>
                <dl>
                    <div><dt>"Subtotal"</dt><dd>{move || summary().subtotal.to_string()}</dd></div>
                    <div><dt>"Shipping"</dt><dd class="checkout__free">"Free"</dd></div>
                    <div><dt>"Tax"</dt><dd>{move || summary().tax.to_string()}</dd></div>
                    <div class="checkout__total"><dt>"Total"</dt><dd>{move || summary().total.to_string()}</dd></div>
                </dl>
            </aside>
        </div>
    }
}

/// Text input bound to one field of the checkout state.
#[component]
fn Field(
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}

fn shipping_field(
    checkout: RwSignal<CheckoutState>,
    get: fn(&ShippingInfo) -> &String,
    set: fn(&mut ShippingInfo) -> &mut String,
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || checkout.with(|c| get(&c.shipping).clone())),
        Callback::new(move |v: String| checkout.update(|c| *set(&mut c.shipping) = v)),
    )
}

fn payment_field(
    checkout: RwSignal<CheckoutState>,
    get: fn(&PaymentInfo) -> &String,
    set: fn(&mut PaymentInfo) -> &mut String,
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || checkout.with(|c| get(&c.payment).clone())),
        Callback::new(move |v: String| checkout.update(|c| *set(&mut c.payment) = v)),
    )
}

#[component]
fn ShippingForm(checkout: RwSignal<CheckoutState>) -> impl IntoView {
    let (first, set_first) = shipping_field(checkout, |s| &s.first_name, |s| &mut s.first_name);
    let (last, set_last) = shipping_field(checkout, |s| &s.last_name, |s| &mut s.last_name);
    let (email, set_email) = shipping_field(checkout, |s| &s.email, |s| &mut s.email);
    let (address, set_address) = shipping_field(checkout, |s| &s.address, |s| &mut s.address);
    let (city, set_city) = shipping_field(checkout, |s| &s.city, |s| &mut s.city);
    let (postal, set_postal) = shipping_field(checkout, |s| &s.postal_code, |s| &mut s.postal_code);
    let (country, set_country) = shipping_field(checkout, |s| &s.country, |s| &mut s.country);

    view! {
        <h2>"Shipping Information"</h2>
        <div class="checkout__grid">
            <Field label="First Name" placeholder="John" value=first on_change=set_first/>
            <Field label="Last Name" placeholder="Doe" value=last on_change=set_last/>
            <Field label="Email" placeholder="john@example.com" input_type="email" value=email on_change=set_email/>
            <Field label="Address" placeholder="123 Street Name" value=address on_change=set_address/>
            <Field label="City" placeholder="New York" value=city on_change=set_city/>
            <Field label="Postal Code" placeholder="10001" value=postal on_change=set_postal/>
            <Field label="Country" placeholder="United States" value=country on_change=set_country/>
        </div>
    }
}

#[component]
fn PaymentForm(checkout: RwSignal<CheckoutState>) -> impl IntoView {
    let (card, set_card) = payment_field(checkout, |p| &p.card_number, |p| &mut p.card_number);
    let (expiry, set_expiry) = payment_field(checkout, |p| &p.expiry, |p| &mut p.expiry);
    let (cvc, set_cvc) = payment_field(checkout, |p| &p.cvc, |p| &mut p.cvc);
    let (name, set_name) = payment_field(checkout, |p| &p.name_on_card, |p| &mut p.name_on_card);

    view! {
        <h2>"Payment Details"</h2>
        <div class="checkout__grid">
            <Field label="Card Number" placeholder="4242 4242 4242 4242" value=card on_change=set_card/>
            <Field label="Expiry Date" placeholder="MM/YY" value=expiry on_change=set_expiry/>
            <Field label="CVC" placeholder="123" value=cvc on_change=set_cvc/>
            <Field label="Name on Card" placeholder="John Doe" value=name on_change=set_name/>
        </div>
        <p class="checkout__note">"This is a demo checkout. No payment will be processed."</p>
    }
}

#[component]
fn ReviewPanel(checkout: RwSignal<CheckoutState>) -> impl IntoView {
    let (shipping, payment) = checkout.with_untracked(|c| (c.shipping.clone(), c.payment.clone()));

    view! {
        <h2>"Review Your Order"</h2>
        <div class="checkout__review">
            <h3>"Shipping To"</h3>
            <p>
                {format!("{} {}", shipping.first_name, shipping.last_name)}
                <br/>
                {shipping.address}
                <br/>
                {format!("{}, {}", shipping.city, shipping.postal_code)}
            </p>
        </div>
        <div class="checkout__review">
            <h3>"Payment Method"</h3>
            <p>{payment.masked_card()}</p>
        </div>
    }
}
