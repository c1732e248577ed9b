//! Orders and customer details.

use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Customer fields of the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    /// Customer display name, free-form.
    pub customer_name: String,
    /// Customer email, not validated.
    pub customer_email: String,
}

impl CustomerDetails {
    /// Create customer details.
    #[must_use]
    pub fn new(customer_name: impl Into<String>, customer_email: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
        }
    }

    /// Whether both fields are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_empty() && self.customer_email.is_empty()
    }
}

/// An order as submitted to `POST /orders`.
///
/// The same value is recorded in the local order history once the server
/// accepts it. Orders are never re-fetched, so the history can diverge from
/// what the server holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Customer name at submission time.
    pub customer_name: String,
    /// Customer email at submission time.
    pub customer_email: String,
    /// Line items in the order they were added.
    pub items: Vec<LineItem>,
}

impl Order {
    /// Build an order from the customer fields and the pending items.
    #[must_use]
    pub fn new(customer: CustomerDetails, items: Vec<LineItem>) -> Self {
        Self {
            customer_name: customer.customer_name,
            customer_email: customer.customer_email,
            items,
        }
    }

    /// Total number of units across all items.
    #[must_use]
    pub fn unit_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
