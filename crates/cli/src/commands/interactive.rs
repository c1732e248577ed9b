//! Interactive prompt.
//!
//! Reads commands from stdin line by line and drives an [`OrderDesk`]. While
//! anonymous only the login commands are accepted; once logged in the order
//! commands take over, the way the order page swaps its login form for the
//! order form.
//!
//! # Usage
//!
//! ```bash
//! order-desk interactive --surface-transport-failures
//! ```

use std::fmt::Write as _;
use std::io::Write as _;
use std::ops::ControlFlow;

use chrono::Utc;
use order_desk_client::{AuthError, ClientConfig, OrderDesk};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::CliError;
use crate::repl::{Command, HELP};
use crate::view;

const PROMPT: &str = "> ";

/// Run the prompt until `quit` or end of input.
///
/// # Errors
///
/// Returns `CliError` if configuration is invalid or the terminal fails.
pub async fn run(config: &ClientConfig) -> Result<(), CliError> {
    let mut desk = OrderDesk::new(config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    tracing::info!(api_url = %config.api_url, "Starting interactive session");

    let mut screen = String::new();
    view::render(&mut screen, &desk, Utc::now())?;
    writeln!(screen, "Type `help` for commands.")?;
    stdout.write_all(screen.as_bytes())?;

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(stdout)?;
            break;
        };

        let mut out = String::new();
        let flow = match Command::parse(&line) {
            Ok(Some(command)) => execute(&mut desk, command, &mut out).await?,
            Ok(None) => ControlFlow::Continue(()),
            Err(e) => {
                writeln!(out, "{e}")?;
                ControlFlow::Continue(())
            }
        };
        stdout.write_all(out.as_bytes())?;

        desk.prune_notifications(Utc::now());
        if flow.is_break() {
            break;
        }
    }

    tracing::info!(orders = desk.orders().len(), "Interactive session ended");
    Ok(())
}

/// Apply one command to the desk, writing feedback to `out`.
///
/// Notifications raised by the command are written after its feedback;
/// earlier ones are shown again only by `show`.
///
/// # Errors
///
/// Returns `fmt::Error` only if writing to `out` fails.
pub async fn execute(
    desk: &mut OrderDesk,
    command: Command,
    out: &mut String,
) -> Result<ControlFlow<()>, std::fmt::Error> {
    if desk.is_authenticated() && command.is_login_command() {
        writeln!(out, "Already logged in.")?;
        return Ok(ControlFlow::Continue(()));
    }
    if !desk.is_authenticated() && command.is_order_command() {
        writeln!(out, "Log in first to create orders.")?;
        return Ok(ControlFlow::Continue(()));
    }

    tracing::debug!(command = %command, "Executing command");
    let was_authenticated = desk.is_authenticated();
    let raised_before = desk.notification_log().len();

    match command {
        Command::Email(email) => desk.set_email(email),
        Command::Password(password) => desk.set_password(password),
        Command::Login => {
            if let Err(e) = desk.login().await {
                tracing::debug!(error = %e, "Login did not complete");
            }
        }
        Command::CustomerName(name) => desk.set_customer_name(name),
        Command::CustomerEmail(email) => desk.set_customer_email(email),
        Command::Product(name) => desk.set_product_name(name),
        Command::Quantity(input) => {
            desk.set_quantity_input(&input);
            writeln!(out, "Quantity: {}", desk.item_draft().quantity)?;
        }
        Command::Price(input) => {
            desk.set_price_input(&input);
            writeln!(out, "Price: {}", desk.item_draft().price)?;
        }
        Command::Add => {
            if desk.item_draft().is_reset() {
                writeln!(out, "Item fields are empty; adding a blank item.")?;
            }
            let item = desk.add_item();
            writeln!(out, "Added {item} ({} pending)", desk.pending_items().len())?;
        }
        Command::Submit => {
            if let Err(e) = desk.submit_order().await {
                tracing::debug!(error = %e, "Submission did not complete");
            }
        }
        Command::Orders => view::render_orders(out, desk.orders())?,
        Command::Logout => match desk.logout() {
            Ok(()) => writeln!(out, "Logged out.")?,
            Err(AuthError::LogoutDisabled) => writeln!(out, "Logout is disabled.")?,
            Err(e) => writeln!(out, "{e}")?,
        },
        Command::Show => {
            view::render(out, desk, Utc::now())?;
            return Ok(ControlFlow::Continue(()));
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(ControlFlow::Break(())),
    }

    if !was_authenticated && desk.is_authenticated() {
        view::render_order_form(out, desk)?;
    }
    let raised = desk.notification_log().get(raised_before..).unwrap_or_default();
    view::render_notifications(out, raised.iter())?;

    Ok(ControlFlow::Continue(()))
}
