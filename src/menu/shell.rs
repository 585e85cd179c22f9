//! Interactive shell
//!
//! Reads menu choices from any `BufRead` and writes to any `Write`, so the
//! same loop drives stdin/stdout and scripted tests.

use std::io::{BufRead, Write};

use crate::error::{InventoryError, Result};
use crate::inventory::{Inventory, LoadReport, LoadStatus};
use crate::record::Shoe;

use super::MenuChoice;

/// Whether the loop keeps going after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    /// Input ended while waiting for an answer
    InputClosed,
}

/// Menu loop over an inventory
pub struct Shell<'a, R, W> {
    inventory: &'a mut Inventory,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(inventory: &'a mut Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Run until the user picks Exit or input ends
    ///
    /// Operation errors are reported and the menu is shown again; only a
    /// failure to read from or write to the terminal is returned.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let line = match self.prompt("Choose an option (1-8): ")? {
                Some(line) => line,
                None => return self.leave(Flow::InputClosed),
            };

            let choice = match MenuChoice::from_input(&line) {
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "Invalid selection. Please choose 1-8.")?;
                    continue;
                }
            };

            tracing::trace!("Menu choice: {:?}", choice);

            match self.dispatch(choice)? {
                Flow::Continue => {}
                flow => return self.leave(flow),
            }
        }
    }

    /// Print the farewell on every way out of the loop
    fn leave(&mut self, flow: Flow) -> Result<()> {
        if flow == Flow::InputClosed {
            tracing::debug!("Input closed, leaving menu");
            writeln!(self.output)?;
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Route a choice to its handler
    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Load => self.load(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::Capture => self.capture(),
            MenuChoice::Restock => self.restock(),
            MenuChoice::Search => self.search(),
            MenuChoice::ValuePerItem => self.value_per_item(),
            MenuChoice::HighestQuantity => self.highest_quantity(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    fn load(&mut self) -> Result<Flow> {
        match self.inventory.load() {
            Ok(load_report) => self.print_load_report(&load_report)?,
            Err(e) => report(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> Result<Flow> {
        let currency = &self.inventory.config().currency_symbol;
        match self.inventory.list() {
            Ok(shoes) => {
                writeln!(self.output)?;
                writeln!(self.output, "--- INVENTORY ---")?;
                writeln!(self.output, "Country | Code | Product | Cost | Quantity")?;
                writeln!(self.output, "{}", "-".repeat(60))?;
                for shoe in shoes {
                    writeln!(self.output, "{}", shoe.display_with(currency))?;
                }
            }
            Err(e) => report(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn capture(&mut self) -> Result<Flow> {
        let mut fields = Vec::with_capacity(5);
        for label in [
            "Country: ",
            "Code: ",
            "Product: ",
            "Cost (e.g. 1299.99): ",
            "Quantity (integer): ",
        ] {
            match self.prompt(label)? {
                Some(value) => fields.push(value),
                None => return Ok(Flow::InputClosed),
            }
        }

        let outcome = Shoe::parse(&fields[0], &fields[1], &fields[2], &fields[3], &fields[4])
            .and_then(|shoe| self.inventory.capture(shoe).map(|_| ()));

        match outcome {
            Ok(()) => writeln!(self.output, "Shoe captured successfully.")?,
            Err(e) => {
                tracing::warn!("Capture rejected: {}", e);
                report(&mut self.output, &e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn restock(&mut self) -> Result<Flow> {
        let currency = &self.inventory.config().currency_symbol;
        match self.inventory.lowest() {
            Ok(lowest) => {
                writeln!(self.output)?;
                writeln!(self.output, "Lowest stock item:")?;
                writeln!(self.output, "{}", lowest.display_with(currency))?;
            }
            Err(e) => {
                report(&mut self.output, &e)?;
                return Ok(Flow::Continue);
            }
        }

        let input = match self.prompt("How many units would you like to add? (0 to cancel): ")? {
            Some(input) => input,
            None => return Ok(Flow::InputClosed),
        };

        let outcome = parse_restock_amount(&input).and_then(|amount| {
            self.inventory
                .restock_lowest(amount)
                .map(|shoe| (shoe.product().to_string(), shoe.quantity()))
        });

        match outcome {
            Ok((product, quantity)) => {
                writeln!(self.output, "Updated quantity for {}: {}", product, quantity)?
            }
            Err(e) => report(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        if let Err(e) = self.inventory.ensure_loaded() {
            report(&mut self.output, &e)?;
            return Ok(Flow::Continue);
        }

        let code = match self.prompt("Enter shoe code to search: ")? {
            Some(code) => code,
            None => return Ok(Flow::InputClosed),
        };

        let currency = &self.inventory.config().currency_symbol;
        match self.inventory.find_by_code(&code) {
            Ok(shoe) => {
                writeln!(self.output)?;
                writeln!(self.output, "Shoe found:")?;
                writeln!(self.output, "{}", shoe.display_with(currency))?;
            }
            Err(e) => report(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn value_per_item(&mut self) -> Result<Flow> {
        let currency = &self.inventory.config().currency_symbol;
        match self.inventory.value_per_item() {
            Ok(values) => {
                writeln!(self.output)?;
                writeln!(self.output, "--- TOTAL VALUE PER ITEM ---")?;
                for item in values {
                    writeln!(
                        self.output,
                        "{} ({}) -> {}{:.2}",
                        item.product, item.code, currency, item.value
                    )?;
                }
            }
            Err(e) => report(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn highest_quantity(&mut self) -> Result<Flow> {
        match self.inventory.highest_quantity() {
            Ok(shoe) => {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "Product on SALE: {} ({}) - Stock: {}",
                    shoe.product(),
                    shoe.code(),
                    shoe.quantity()
                )?;
            }
            Err(e) => report(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Terminal I/O
    // =========================================================================

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== SHOE INVENTORY MENU ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_load_report(&mut self, report: &LoadReport) -> Result<()> {
        let path = self.inventory.path().display().to_string();
        match report.status {
            LoadStatus::Created => {
                writeln!(self.output, "{} not found. Created a new one.", path)?;
            }
            LoadStatus::EmptyFile => {
                writeln!(self.output, "Warning: {} is empty.", path)?;
            }
            LoadStatus::Loaded => {
                for skipped in &report.skipped {
                    writeln!(
                        self.output,
                        "Skipping line {}: {} ({})",
                        skipped.line_number, skipped.line, skipped.reason
                    )?;
                }
                if report.loaded == 0 {
                    writeln!(self.output, "Warning: {} contains no records.", path)?;
                }
                writeln!(self.output, "Loaded {} shoe records.", report.loaded)?;
            }
        }
        Ok(())
    }
}

/// Render an operation error for the user
fn report<W: Write>(output: &mut W, error: &InventoryError) -> Result<()> {
    match error {
        InventoryError::EmptyInventory => writeln!(
            output,
            "No data loaded. Use option [1] to load inventory first."
        )?,
        InventoryError::NotFound(_) => writeln!(output, "No shoe found with that code.")?,
        InventoryError::RestockCancelled => writeln!(output, "Restock cancelled.")?,
        InventoryError::NegativeRestock(_) => {
            writeln!(output, "Quantity to add cannot be negative.")?
        }
        InventoryError::InvalidNumber { field: "amount", .. } => {
            writeln!(output, "Please enter a valid integer.")?
        }
        InventoryError::InvalidNumber { .. } | InventoryError::UnsupportedComma { .. } => {
            writeln!(output, "Invalid input: {}", error)?
        }
        other => writeln!(output, "Error: {}", other)?,
    }
    Ok(())
}

/// Parse the number of units to add during a restock
///
/// - empty or `0` → `RestockCancelled`
/// - negative → `NegativeRestock`
/// - anything else that is not a `u32` → `InvalidNumber`
pub fn parse_restock_amount(input: &str) -> Result<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InventoryError::RestockCancelled);
    }

    let invalid = || InventoryError::InvalidNumber {
        field: "amount",
        value: input.to_string(),
    };

    let amount: i64 = input.parse().map_err(|_| invalid())?;
    if amount < 0 {
        return Err(InventoryError::NegativeRestock(amount));
    }
    if amount == 0 {
        return Err(InventoryError::RestockCancelled);
    }
    u32::try_from(amount).map_err(|_| invalid())
}
