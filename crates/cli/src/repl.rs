//! Prompt command parsing.
//!
//! Each line typed at the prompt is one command word optionally followed by
//! a value. Values keep their inner whitespace, so `product Blue Widget`
//! sets the product name to `Blue Widget`.

use std::fmt;

use thiserror::Error;

/// A parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Email(String),
    Password(String),
    Login,
    CustomerName(String),
    CustomerEmail(String),
    Product(String),
    Quantity(String),
    Price(String),
    Add,
    Submit,
    Orders,
    Logout,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    #[error("`{0}` takes no value")]
    UnexpectedValue(&'static str),
}

impl Command {
    /// Parse one prompt line. Blank lines yield `Ok(None)`.
    ///
    /// Field commands accept a missing value and set the field to empty,
    /// matching a cleared input box.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for an unknown command word or a value given to a
    /// command that takes none.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, value) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));
        let value = value.to_owned();

        let command = match word.to_ascii_lowercase().as_str() {
            "email" => Self::Email(value),
            "password" => Self::Password(value),
            "customer-name" | "name" => Self::CustomerName(value),
            "customer-email" => Self::CustomerEmail(value),
            "product" => Self::Product(value),
            "quantity" | "qty" => Self::Quantity(value),
            "price" => Self::Price(value),
            other => {
                let bare = match other {
                    "login" => Self::Login,
                    "add" => Self::Add,
                    "submit" => Self::Submit,
                    "orders" => Self::Orders,
                    "logout" => Self::Logout,
                    "show" => Self::Show,
                    "help" | "?" => Self::Help,
                    "quit" | "exit" => Self::Quit,
                    _ => return Err(ParseError::Unknown(word.to_owned())),
                };
                if !value.is_empty() {
                    return Err(ParseError::UnexpectedValue(bare.name()));
                }
                bare
            }
        };

        Ok(Some(command))
    }

    /// The command word as typed at the prompt.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Password(_) => "password",
            Self::Login => "login",
            Self::CustomerName(_) => "customer-name",
            Self::CustomerEmail(_) => "customer-email",
            Self::Product(_) => "product",
            Self::Quantity(_) => "quantity",
            Self::Price(_) => "price",
            Self::Add => "add",
            Self::Submit => "submit",
            Self::Orders => "orders",
            Self::Logout => "logout",
            Self::Show => "show",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// Whether the command belongs to the login view.
    #[must_use]
    pub const fn is_login_command(&self) -> bool {
        matches!(self, Self::Email(_) | Self::Password(_) | Self::Login)
    }

    /// Whether the command belongs to the order view.
    #[must_use]
    pub const fn is_order_command(&self) -> bool {
        matches!(
            self,
            Self::CustomerName(_)
                | Self::CustomerEmail(_)
                | Self::Product(_)
                | Self::Quantity(_)
                | Self::Price(_)
                | Self::Add
                | Self::Submit
                | Self::Orders
                | Self::Logout
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Never echo the password back.
            Self::Password(_) => write!(f, "password ****"),
            Self::Email(v)
            | Self::CustomerName(v)
            | Self::CustomerEmail(v)
            | Self::Product(v)
            | Self::Quantity(v)
            | Self::Price(v) => write!(f, "{} {v}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Help text for the prompt.
pub const HELP: &str = "\
Login view:
  email <address>          set the login email
  password <secret>        set the login password
  login                    log in with the email and password

Order view:
  customer-name <name>     set the customer name
  customer-email <email>   set the customer email
  product <name>           set the product name of the next item
  quantity <n>             set the quantity of the next item
  price <amount>           set the unit price of the next item
  add                      add the item to the order
  submit                   submit the order
  orders                   list submitted orders
  logout                   end the session, when allowed

Anywhere:
  show                     redraw the current view
  help                     show this help
  quit                     leave";

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_commands() {
        assert_eq!(
            Command::parse("email a@b.com").unwrap(),
            Some(Command::Email("a@b.com".into()))
        );
        assert_eq!(
            Command::parse("  product   Blue Widget  ").unwrap(),
            Some(Command::Product("Blue Widget".into()))
        );
        assert_eq!(
            Command::parse("qty 3").unwrap(),
            Some(Command::Quantity("3".into()))
        );
    }

    #[test]
    fn test_parse_field_without_value_clears() {
        assert_eq!(
            Command::parse("customer-name").unwrap(),
            Some(Command::CustomerName(String::new()))
        );
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Command::parse("LOGIN").unwrap(), Some(Command::Login));
        assert_eq!(Command::parse("add").unwrap(), Some(Command::Add));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("?").unwrap(), Some(Command::Help));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("frobnicate now"),
            Err(ParseError::Unknown("frobnicate".into()))
        );
        assert_eq!(
            Command::parse("submit please"),
            Err(ParseError::UnexpectedValue("submit"))
        );
    }

    #[test]
    fn test_display_hides_password() {
        let command = Command::parse("password hunter2").unwrap().unwrap();
        assert_eq!(command.to_string(), "password ****");
        assert!(!format!("{command}").contains("hunter2"));
    }

    #[test]
    fn test_view_membership() {
        assert!(Command::Login.is_login_command());
        assert!(!Command::Login.is_order_command());
        assert!(Command::Submit.is_order_command());
        assert!(!Command::Show.is_login_command());
        assert!(!Command::Show.is_order_command());
    }
}
