//! Order line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::{coerce_price, coerce_quantity};

use super::price::Price;

/// Errors that can occur when parsing a [`LineItem`] from `NAME:QTY:PRICE`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineItemSpecError {
    /// The input does not have three `:`-separated parts.
    #[error("line item must look like NAME:QTY:PRICE, got {0:?}")]
    MissingField(String),
}

/// A single product line of an order.
///
/// Line items are immutable once added to the pending buffer. No constraint
/// is enforced on any field: empty names and zero or negative quantities and
/// prices are all accepted.
///
/// On the wire the unit price is a JSON number named `price`:
///
/// ```json
/// {"productName": "Widget", "quantity": 3, "price": 9.99}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product name, free-form.
    pub product_name: String,
    /// Number of units.
    pub quantity: i64,
    /// Price of one unit.
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub fn new(product_name: impl Into<String>, quantity: i64, unit_price: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Unit price for display.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::new(self.unit_price)
    }
}

impl std::fmt::Display for LineItem {
    /// Formats as `Widget - Qty: 3, Price: $9.99`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Qty: {}, Price: {}",
            self.product_name,
            self.quantity,
            self.price()
        )
    }
}

impl std::str::FromStr for LineItem {
    type Err = LineItemSpecError;

    /// Parse `NAME:QTY:PRICE`.
    ///
    /// The name may itself contain `:`; quantity and price are taken from the
    /// last two fields and coerced like form input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(price), Some(quantity), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(LineItemSpecError::MissingField(s.to_owned()));
        };

        Ok(Self::new(
            name,
            coerce_quantity(quantity),
            coerce_price(price),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn widget() -> LineItem {
        LineItem::new("Widget", 3, Decimal::from_str("9.99").unwrap())
    }

    #[test]
    fn test_serializes_wire_shape() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"productName": "Widget", "quantity": 3, "price": 9.99})
        );
    }

    #[test]
    fn test_deserializes_numeric_price() {
        let item: LineItem =
            serde_json::from_str(r#"{"productName":"Widget","quantity":3,"price":9.99}"#).unwrap();
        assert_eq!(item, widget());
    }

    #[test]
    fn test_display() {
        assert_eq!(widget().to_string(), "Widget - Qty: 3, Price: $9.99");
    }

    #[test]
    fn test_parse_name_qty_price() {
        let item: LineItem = "Widget:3:9.99".parse().unwrap();
        assert_eq!(item, widget());
    }

    #[test]
    fn test_parse_name_with_colon() {
        let item: LineItem = "Cable 2:1m:1:4".parse().unwrap();
        assert_eq!(item.product_name, "Cable 2:1m");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, Decimal::from(4));
    }

    #[test]
    fn test_parse_coerces_numbers() {
        let item: LineItem = ":x:".parse().unwrap();
        assert_eq!(item, LineItem::new("", 0, Decimal::ZERO));
    }

    #[test]
    fn test_parse_missing_field() {
        assert!(matches!(
            "Widget:3".parse::<LineItem>(),
            Err(LineItemSpecError::MissingField(_))
        ));
    }
}
