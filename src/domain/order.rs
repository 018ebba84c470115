use std::fmt::{self, Write};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::cart::Cart;
use super::customer::CustomerInfo;
use super::errors::OrderError;

pub const DEFAULT_STORE_HEADER: &str = "Pesanan Baru dari Dapur Mama";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "6281312357574";

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Characters `encodeURIComponent` leaves alone; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The human-readable order text handed to WhatsApp. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage(String);

impl OrderMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deep link that opens a WhatsApp chat prefilled with the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLink(String);

impl OrderLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedOrder {
    pub message: OrderMessage,
    pub link: OrderLink,
}

/// Turns a cart and the customer's details into an outbound WhatsApp order.
///
/// The handoff is one-way: the composer only builds the link, and nothing
/// records whether the message was ever sent.
#[derive(Debug, Clone)]
pub struct OrderComposer {
    store_header: String,
    whatsapp_number: String,
}

impl Default for OrderComposer {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_HEADER, DEFAULT_WHATSAPP_NUMBER)
    }
}

impl OrderComposer {
    pub fn new(store_header: impl Into<String>, whatsapp_number: impl Into<String>) -> Self {
        Self {
            store_header: store_header.into(),
            whatsapp_number: whatsapp_number.into(),
        }
    }

    /// Checks customer details first, then the cart; no message on failure.
    pub fn compose(
        &self,
        cart: &Cart,
        customer: &CustomerInfo,
    ) -> Result<OrderMessage, OrderError> {
        if !customer.is_complete() {
            return Err(OrderError::IncompleteCustomerInfo);
        }
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            text,
            "*{}*\n\n*Nama:* {}\n*Alamat:* {}\n\n*Pesanan:*\n",
            self.store_header, customer.name, customer.address
        );
        let lines: Vec<String> = cart
            .lines()
            .iter()
            .map(|l| format!("{}x {} - Rp {}", l.quantity, l.name, l.subtotal()))
            .collect();
        text.push_str(&lines.join("\n"));
        let _ = write!(text, "\n\n*Total:* Rp {}", cart.total_price());

        Ok(OrderMessage(text))
    }

    pub fn link(&self, message: &OrderMessage) -> OrderLink {
        OrderLink(format!(
            "{WHATSAPP_BASE}{}?text={}",
            self.whatsapp_number,
            utf8_percent_encode(message.as_str(), URI_COMPONENT)
        ))
    }

    pub fn prepare(
        &self,
        cart: &Cart,
        customer: &CustomerInfo,
    ) -> Result<ComposedOrder, OrderError> {
        let message = self.compose(cart, customer)?;
        let link = self.link(&message);
        Ok(ComposedOrder { message, link })
    }
}
