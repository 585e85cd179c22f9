//! Menu Module
//!
//! Interactive front end: prints the numbered menu, reads one choice per
//! line, dispatches to the inventory and renders the outcome.
//!
//! ## Menu
//! ```text
//! 1. Read data from file
//! 2. View all shoes
//! 3. Capture new shoe
//! 4. Restock lowest-quantity shoe
//! 5. Search shoe by code
//! 6. Show total value per item
//! 7. Show product on sale (highest quantity)
//! 8. Exit
//! ```
//!
//! The loop has a single "awaiting choice" state; every operation returns
//! to it, errors included. Only Exit or end of input leaves the loop.

mod choice;
mod shell;

pub use choice::MenuChoice;
pub use shell::{parse_restock_amount, Shell};
