//! Text rendering of the order desk.
//!
//! The layout follows the order-entry page: a heading, then either the login
//! form or the order form with its pending items and the order table, then
//! any visible notifications.

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use order_desk_client::OrderDesk;
use order_desk_core::{Notification, NotificationStatus, Order};

pub const HEADING: &str = "Order Management System";

const COLUMNS: [&str; 3] = ["Customer Name", "Customer Email", "Items"];

/// Render the whole view as of `now`.
pub fn render(out: &mut impl Write, desk: &OrderDesk, now: DateTime<Utc>) -> fmt::Result {
    writeln!(out, "{HEADING}")?;
    writeln!(out, "{}", "=".repeat(HEADING.len()))?;
    writeln!(out)?;

    if desk.is_authenticated() {
        render_order_form(out, desk)?;
        writeln!(out)?;
        render_orders(out, desk.orders())?;
    } else {
        render_login_form(out, desk)?;
    }

    render_notifications(out, desk.notifications(now))
}

pub fn render_login_form(out: &mut impl Write, desk: &OrderDesk) -> fmt::Result {
    writeln!(out, "Login")?;
    writeln!(out, "  Email:    {}", desk.email())?;
    writeln!(out, "  Password: ****")
}

pub fn render_order_form(out: &mut impl Write, desk: &OrderDesk) -> fmt::Result {
    let customer = desk.customer();
    let draft = desk.item_draft();

    writeln!(out, "Create Order")?;
    writeln!(out, "  Customer Name:  {}", customer.customer_name)?;
    writeln!(out, "  Customer Email: {}", customer.customer_email)?;
    writeln!(out)?;
    writeln!(out, "  Items")?;
    writeln!(out, "    Product Name: {}", draft.product_name)?;
    writeln!(out, "    Quantity:     {}", draft.quantity)?;
    writeln!(out, "    Price:        {}", draft.price)?;

    if desk.pending_items().is_empty() {
        return Ok(());
    }
    writeln!(out, "    Pending:")?;
    for (n, item) in desk.pending_items().iter().enumerate() {
        writeln!(out, "      {}. {item}", n + 1)?;
    }
    Ok(())
}

/// Render submitted orders as a table, one row per order and one line per item.
pub fn render_orders(out: &mut impl Write, orders: &[Order]) -> fmt::Result {
    writeln!(out, "Orders")?;
    if orders.is_empty() {
        return writeln!(out, "  (none)");
    }

    let name_width = orders
        .iter()
        .map(|o| o.customer_name.chars().count())
        .chain(std::iter::once(COLUMNS[0].len()))
        .max()
        .unwrap_or_default();
    let email_width = orders
        .iter()
        .map(|o| o.customer_email.chars().count())
        .chain(std::iter::once(COLUMNS[1].len()))
        .max()
        .unwrap_or_default();

    let [name_col, email_col, items_col] = COLUMNS;
    writeln!(
        out,
        "  {name_col:<name_width$} | {email_col:<email_width$} | {items_col}"
    )?;
    writeln!(
        out,
        "  {}-+-{}-+-{}",
        "-".repeat(name_width),
        "-".repeat(email_width),
        "-".repeat(items_col.len())
    )?;

    for order in orders {
        let mut items = order.items.iter().map(ToString::to_string);
        let first = items.next().unwrap_or_default();
        writeln!(
            out,
            "  {:<name_width$} | {:<email_width$} | {first}",
            order.customer_name, order.customer_email
        )?;
        for item in items {
            writeln!(out, "  {:<name_width$} | {:<email_width$} | {item}", "", "")?;
        }
    }
    Ok(())
}

pub fn render_notifications<'a>(
    out: &mut impl Write,
    notifications: impl Iterator<Item = &'a Notification>,
) -> fmt::Result {
    for notification in notifications {
        let marker = match notification.status {
            NotificationStatus::Success => "+",
            NotificationStatus::Error => "!",
        };
        writeln!(out, "{marker} {}", notification.title)?;
        if let Some(description) = &notification.description {
            writeln!(out, "  {description}")?;
        }
    }
    Ok(())
}
