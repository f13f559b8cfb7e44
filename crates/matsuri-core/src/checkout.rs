//! # Checkout
//!
//! Converts the current cart into a permanent [`Order`].
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Workflow                                 │
//! │                                                                         │
//! │  Operator picks a payment method in the tender view                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build_order(cart, method, received) ← THIS MODULE                      │
//! │       │                                                                 │
//! │       ├── cart empty? ──────────────► Err(EmptyCart)                   │
//! │       │                                                                 │
//! │       ├── cash, no amount keyed? ───► Err(ReceivedAmountRequired)      │
//! │       │                                                                 │
//! │       ├── cash, received < subtotal ► Err(InsufficientPayment)         │
//! │       │                                                                 │
//! │       └── OK ───────────────────────► Order { change, snapshot, ... }  │
//! │                                                                         │
//! │  On success the Store appends the order to the ledger and clears       │
//! │  the cart; on failure the cart is untouched and the operator retries.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is a pure function: it reads the cart, it never mutates it, and it
//! performs no I/O. Appending to the ledger, clearing the cart, and
//! flushing persistence are the caller's job (see `matsuri-store`).

use chrono::Local;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Order, PaymentMethod};

/// Builds an [`Order`] from the current cart.
///
/// ## Guards
/// - the cart must not be empty (no zero-item orders)
/// - for [`PaymentMethod::Cash`] a `received` amount is required and must
///   cover the subtotal; a shortfall is a hard rejection, never a
///   negative `change` in the ledger
/// - for non-cash methods `received` is ignored and the stored
///   `received_amount`/`change` are `None` (external payment confirmation
///   is a manual human attestation; no sufficiency check applies)
///
/// ## Returns
/// The completed order, with `change` populated for cash so the caller
/// can display it to the operator.
pub fn build_order(
    cart: &Cart,
    payment_method: PaymentMethod,
    received: Option<Money>,
) -> CoreResult<Order> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let subtotal = cart.subtotal();

    let (received_amount, change) = match payment_method {
        PaymentMethod::Cash => {
            let received = received.ok_or(CoreError::ReceivedAmountRequired)?;
            let change = received - subtotal;
            if change.is_negative() {
                return Err(CoreError::InsufficientPayment { subtotal, received });
            }
            (Some(received), Some(change))
        }
        PaymentMethod::PayPay | PaymentMethod::OtherElectronic => (None, None),
    };

    Ok(Order {
        id: Uuid::new_v4().to_string(),
        items: cart.items().to_vec(),
        subtotal,
        payment_method,
        received_amount,
        change,
        created_at: Local::now(),
    })
}
