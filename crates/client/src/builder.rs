//! Order builder.
//!
//! Accumulates line items in a pending buffer and submits them together with
//! the customer fields as one order. The buffer is append-only and is cleared
//! only after the server accepts the order; a rejected or failed submission
//! leaves every field in place for another attempt.

use order_desk_core::input::{coerce_price, coerce_quantity};
use order_desk_core::{CustomerDetails, LineItem, Order, Session};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::api::ApiClient;
use crate::error::SubmitError;

/// The item input fields of the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub product_name: String,
    pub quantity: i64,
    pub price: Decimal,
}

impl ItemDraft {
    /// Whether every field holds its reset value (`""`, 0, 0).
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.product_name.is_empty() && self.quantity == 0 && self.price.is_zero()
    }
}

/// Form state and pending buffer for the order under construction.
#[derive(Debug, Default)]
pub struct OrderBuilder {
    customer: CustomerDetails,
    draft: ItemDraft,
    pending: Vec<LineItem>,
}

impl OrderBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer.customer_name = name.into();
    }

    pub fn set_customer_email(&mut self, email: impl Into<String>) {
        self.customer.customer_email = email.into();
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.draft.product_name = name.into();
    }

    pub const fn set_quantity(&mut self, quantity: i64) {
        self.draft.quantity = quantity;
    }

    pub const fn set_price(&mut self, price: Decimal) {
        self.draft.price = price;
    }

    /// Set the quantity from raw text, coercing like a number input.
    pub fn set_quantity_input(&mut self, input: &str) {
        self.draft.quantity = coerce_quantity(input);
    }

    /// Set the price from raw text, coercing like a number input.
    pub fn set_price_input(&mut self, input: &str) {
        self.draft.price = coerce_price(input);
    }

    #[must_use]
    pub const fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    #[must_use]
    pub const fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    /// Items added since the last successful submission.
    #[must_use]
    pub fn pending_items(&self) -> &[LineItem] {
        &self.pending
    }

    /// Append the drafted item to the pending buffer and reset the draft.
    ///
    /// Nothing is validated: an empty name or a zero or negative quantity or
    /// price is added as-is.
    pub fn add_item(&mut self) -> LineItem {
        let draft = std::mem::take(&mut self.draft);
        let item = LineItem::new(draft.product_name, draft.quantity, draft.price);
        debug!(product = %item.product_name, quantity = item.quantity, "Item added");

        self.pending.push(item.clone());
        item
    }

    /// The order the current form would submit.
    #[must_use]
    pub fn order(&self) -> Order {
        Order::new(self.customer.clone(), self.pending.clone())
    }

    /// Submit the current order on behalf of `session`.
    ///
    /// On success the customer fields and pending buffer are cleared and the
    /// submitted order is returned. The item draft is left alone.
    ///
    /// # Errors
    ///
    /// - `SubmitError::Rejected` if the server refuses the order
    /// - `SubmitError::Transport` if the request fails
    #[instrument(skip_all, fields(items = self.pending.len()))]
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        session: &Session,
    ) -> Result<Order, SubmitError> {
        if self.customer.is_empty() {
            warn!("Submitting order without customer details");
        }
        let order = self.order();
        api.create_order(session, &order).await?;

        self.customer = CustomerDetails::default();
        self.pending.clear();
        info!(customer = %order.customer_name, "Order submitted");

        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn add(builder: &mut OrderBuilder, name: &str, quantity: i64, price: Decimal) -> LineItem {
        builder.set_product_name(name);
        builder.set_quantity(quantity);
        builder.set_price(price);
        builder.add_item()
    }

    #[test]
    fn test_add_item_appends_and_resets_draft() {
        let mut builder = OrderBuilder::new();
        let price = Decimal::from_str("9.99").unwrap();

        let item = add(&mut builder, "Widget", 3, price);

        assert_eq!(item, LineItem::new("Widget", 3, price));
        assert_eq!(builder.pending_items(), &[item]);
        assert!(builder.draft().is_reset());
    }

    #[test]
    fn test_add_item_keeps_insertion_order() {
        let mut builder = OrderBuilder::new();
        add(&mut builder, "A", 1, Decimal::ONE);
        add(&mut builder, "B", 2, Decimal::from(2));

        let names: Vec<_> = builder
            .pending_items()
            .iter()
            .map(|item| item.product_name.as_str())
            .collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_add_item_accepts_unvalidated_values() {
        let mut builder = OrderBuilder::new();
        builder.add_item();
        add(&mut builder, "Refund", -1, Decimal::NEGATIVE_ONE);

        assert_eq!(builder.pending_items().len(), 2);
        assert_eq!(
            builder.pending_items().first(),
            Some(&LineItem::new("", 0, Decimal::ZERO))
        );
        assert_eq!(builder.pending_items().last().unwrap().quantity, -1);
    }

    #[test]
    fn test_text_inputs_are_coerced() {
        let mut builder = OrderBuilder::new();
        builder.set_product_name("Widget");
        builder.set_quantity_input("3 boxes");
        builder.set_price_input("9.99");

        assert_eq!(builder.draft().quantity, 3);
        assert_eq!(builder.draft().price, Decimal::from_str("9.99").unwrap());
    }

    #[test]
    fn test_order_snapshot() {
        let mut builder = OrderBuilder::new();
        builder.set_customer_name("Ada");
        builder.set_customer_email("ada@example.com");
        add(&mut builder, "Bolt", 2, Decimal::ONE);

        let order = builder.order();
        assert_eq!(order.customer_name, "Ada");
        assert_eq!(order.customer_email, "ada@example.com");
        assert_eq!(order.items.len(), 1);
        // Snapshot does not drain the buffer.
        assert_eq!(builder.pending_items().len(), 1);
    }
}
