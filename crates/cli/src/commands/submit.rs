//! One-shot order submission.
//!
//! Logs in, fills the order form, adds every item given on the command line
//! and submits the order, then prints the order table. Any failure ends the
//! command with a non-zero exit status.
//!
//! # Usage
//!
//! ```bash
//! ORDER_DESK_PASSWORD=x order-desk submit -e a@b.com -n Ada -m ada@example.com \
//!     --item Widget:3:9.99
//! ```

use std::io::Write as _;

use order_desk_client::{ClientConfig, OrderDesk};
use order_desk_core::LineItem;

use crate::error::CliError;
use crate::view;

/// Everything needed to place one order.
pub struct SubmitRequest {
    pub email: String,
    pub password: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<LineItem>,
}

/// Log in and submit the requested order.
///
/// # Errors
///
/// Returns `CliError` if login or submission fails.
pub async fn run(config: &ClientConfig, request: SubmitRequest) -> Result<(), CliError> {
    let mut desk = OrderDesk::new(config)?;

    desk.set_email(request.email);
    desk.set_password(request.password);
    desk.login().await?;
    tracing::info!("Logged in");

    fill_order(&mut desk, request.customer_name, request.customer_email, request.items);

    let order = desk.submit_order().await?;
    tracing::info!(
        customer = %order.customer_name,
        items = order.items.len(),
        units = order.unit_count(),
        "Order created"
    );

    let mut table = String::new();
    view::render_orders(&mut table, desk.orders())?;
    std::io::stdout().write_all(table.as_bytes())?;

    Ok(())
}

/// Fill the order form and pending buffer through the desk's setters.
fn fill_order(
    desk: &mut OrderDesk,
    customer_name: String,
    customer_email: String,
    items: Vec<LineItem>,
) {
    desk.set_customer_name(customer_name);
    desk.set_customer_email(customer_email);

    for item in items {
        desk.set_product_name(item.product_name);
        desk.set_quantity(item.quantity);
        desk.set_price(item.unit_price);
        desk.add_item();
    }
}
