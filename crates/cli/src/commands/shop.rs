//! `pop-shop shop` - interactive shopping shell.
//!
//! Reads one command per line and applies exactly one cart operation per
//! command, re-rendering the cart badge afterwards.
//!
//! ```text
//! list              show the catalog
//! add <id>          add one unit of a product
//! inc <id>          one more unit of a product in the cart
//! dec <id>          one fewer unit (removes the product at the last unit)
//! set <id> <qty>    set the quantity (at least 1)
//! cart              show the order summary
//! checkout          place the order and empty the cart
//! help              show this list
//! quit              leave the shop
//! ```

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use thiserror::Error;
use tracing::warn;

use pop_shop_core::{ProductId, Quantity};
use pop_shop_storefront::input::parse_quantity_input;
use pop_shop_storefront::{CartChange, ShopSession, StorefrontConfig, StorefrontError};

use crate::render;

const HELP: &str = "\
Commands:
  list              show the catalog
  add <id>          add one unit of a product
  inc <id>          one more unit of a product in the cart
  dec <id>          one fewer unit (removes the product at the last unit)
  set <id> <qty>    set the quantity (at least 1)
  cart              show the order summary
  checkout          place the order and empty the cart
  help              show this list
  quit              leave the shop";

/// Errors parsing a shell line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a valid quantity")]
    InvalidQuantity(String),
}

/// A parsed shell command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Add(ProductId),
    Inc(ProductId),
    Dec(ProductId),
    Set(ProductId, i64),
    Cart,
    Checkout,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing what was wrong with the line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let id_arg = |usage: &'static str| -> Result<ProductId, CommandError> {
            match args.as_slice() {
                [id] => ProductId::parse(id).map_err(|_| CommandError::Usage(usage)),
                _ => Err(CommandError::Usage(usage)),
            }
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "add" => Self::Add(id_arg("add <id>")?),
            "inc" | "+" => Self::Inc(id_arg("inc <id>")?),
            "dec" | "-" => Self::Dec(id_arg("dec <id>")?),
            "set" => match args.as_slice() {
                [id, qty] => {
                    let id = ProductId::parse(id).map_err(|_| CommandError::Usage("set <id> <qty>"))?;
                    let qty = parse_quantity_input(qty)
                        .ok_or_else(|| CommandError::InvalidQuantity((*qty).to_string()))?;
                    Self::Set(id, qty)
                }
                _ => return Err(CommandError::Usage("set <id> <qty>")),
            },
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Interactive shell bound to one session.
pub struct Shell<'a, R, W> {
    session: &'a mut ShopSession,
    config: &'a StorefrontConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub const fn new(
        session: &'a mut ShopSession,
        config: &'a StorefrontConfig,
        input: R,
        output: W,
    ) -> Self {
        Self {
            session,
            config,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        render::header(&mut self.output, &self.config.store_name, 0)?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if self.execute(command)?.is_break() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(input = %line.trim(), "Rejected shell input");
                    writeln!(self.output, "{e}")?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")
    }

    /// Apply one command. `Break` means the shell should stop reading.
    fn execute(&mut self, command: Command) -> io::Result<ControlFlow<()>> {
        match command {
            Command::List => render::catalog(&mut self.output, self.session.catalog())?,
            Command::Add(id) => match self.session.add_to_cart(&id) {
                Ok(change) => self.report(&id, change)?,
                Err(e) => writeln!(self.output, "{e}")?,
            },
            Command::Inc(id) => {
                let change = self.session.increment(&id);
                self.report(&id, change)?;
            }
            Command::Dec(id) => {
                if self.session.cart().quantity_of(&id) == Some(Quantity::ONE)
                    && self.config.confirm_removal
                    && !self.confirm_removal(&id)?
                {
                    let name = self.product_name(&id);
                    writeln!(self.output, "Kept {name}.")?;
                    return Ok(ControlFlow::Continue(()));
                }
                let change = self.session.decrement_or_remove(&id);
                self.report(&id, change)?;
            }
            Command::Set(id, qty) => {
                let change = self.session.set_quantity(&id, qty);
                self.report(&id, change)?;
            }
            Command::Cart => render::cart(&mut self.output, &self.session.snapshot())?,
            Command::Checkout => match self.session.checkout() {
                Ok(receipt) => render::receipt(&mut self.output, &receipt)?,
                Err(StorefrontError::Checkout(e)) => writeln!(self.output, "{e}")?,
                Err(e) => writeln!(self.output, "Checkout failed: {e}")?,
            },
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn report(&mut self, id: &ProductId, change: CartChange) -> io::Result<()> {
        let name = self.product_name(id);
        match change {
            CartChange::Added => writeln!(self.output, "Added {name}.")?,
            CartChange::Incremented(q) | CartChange::Decremented(q) | CartChange::QuantitySet(q) => {
                writeln!(self.output, "{name} x {q}")?;
            }
            CartChange::Removed | CartChange::Cleared => writeln!(self.output, "Removed {name}.")?,
            CartChange::Unchanged => writeln!(self.output, "{name} is not in your cart.")?,
        }
        render::header(
            &mut self.output,
            &self.config.store_name,
            self.session.cart().item_count(),
        )
    }

    fn confirm_removal(&mut self, id: &ProductId) -> io::Result<bool> {
        let name = self.product_name(id);
        write!(self.output, "Remove {name} from your cart? [y/N] ")?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn product_name(&self, id: &ProductId) -> String {
        self.session
            .catalog()
            .get(id)
            .map_or_else(|| id.to_string(), |product| product.name.clone())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pop_shop_core::Price;

    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn run_script(session: &mut ShopSession, config: &StorefrontConfig, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(session, config, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  ").unwrap(), None);
        assert_eq!(Command::parse("add 8").unwrap(), Some(Command::Add(id("8"))));
        assert_eq!(Command::parse("+ 8").unwrap(), Some(Command::Inc(id("8"))));
        assert_eq!(Command::parse("DEC 8").unwrap(), Some(Command::Dec(id("8"))));
        assert_eq!(
            Command::parse("set 1 3pcs").unwrap(),
            Some(Command::Set(id("1"), 3))
        );
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("buy 1"),
            Err(CommandError::Unknown("buy".to_string()))
        );
        assert_eq!(Command::parse("add"), Err(CommandError::Usage("add <id>")));
        assert_eq!(
            Command::parse("set 1 zero"),
            Err(CommandError::InvalidQuantity("zero".to_string()))
        );
        assert_eq!(
            Command::parse("set 1 0"),
            Err(CommandError::InvalidQuantity("0".to_string()))
        );
    }

    #[test]
    fn test_add_and_badge() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig::default();
        let out = run_script(&mut session, &config, "add 1\nadd 1\nadd 8\n");

        assert!(out.contains("Added Pop! Anduin Wrynn."));
        assert!(out.contains("Pop! Anduin Wrynn x 2"));
        assert!(out.contains("Cart (3)"));
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(session.snapshot().total_price, Price::from_cents(8497).unwrap());
    }

    #[test]
    fn test_unknown_product() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig::default();
        let out = run_script(&mut session, &config, "add 42\n");
        assert!(out.contains("Unknown product: 42"));
    }

    #[test]
    fn test_dec_last_unit_declined() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig::default();
        let out = run_script(&mut session, &config, "add 7\ndec 7\nn\n");

        assert!(out.contains("Remove Pop! Sylvanas Windrunner from your cart? [y/N]"));
        assert!(out.contains("Kept Pop! Sylvanas Windrunner."));
        assert!(session.cart().contains(&id("7")));
    }

    #[test]
    fn test_dec_last_unit_confirmed() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig::default();
        let out = run_script(&mut session, &config, "add 7\ndec 7\ny\n");

        assert!(out.contains("Removed Pop! Sylvanas Windrunner."));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_dec_without_confirmation() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig {
            confirm_removal: false,
            ..StorefrontConfig::default()
        };
        let out = run_script(&mut session, &config, "add 7\ndec 7\n");

        assert!(!out.contains("[y/N]"));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_dec_above_one_never_prompts() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig::default();
        let out = run_script(&mut session, &config, "add 8\nset 8 3\ndec 8\n");

        assert!(!out.contains("[y/N]"));
        assert_eq!(session.cart().quantity_of(&id("8")).unwrap().get(), 2);
    }

    #[test]
    fn test_checkout_flow() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig::default();
        let out = run_script(&mut session, &config, "checkout\nadd 1\ncheckout\ncart\n");

        assert!(out.contains("cannot check out an empty cart"));
        assert!(out.contains("Checkout successful"));
        assert!(out.contains("Grand Total: $14.99"));
        assert!(out.contains("Your cart is empty."));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig::default();
        run_script(&mut session, &config, "quit\nadd 1\n");
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_execute_breaks_only_on_quit() {
        let mut session = ShopSession::default();
        let config = StorefrontConfig::default();
        let mut output = Vec::new();
        let mut shell = Shell::new(&mut session, &config, io::empty(), &mut output);

        assert!(shell.execute(Command::Add(id("1"))).unwrap().is_continue());
        assert!(shell.execute(Command::Help).unwrap().is_continue());
        assert!(shell.execute(Command::Quit).unwrap().is_break());
        drop(shell);

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Added Pop! Anduin Wrynn."));
        assert!(!out.contains("Goodbye!"));
    }
}
