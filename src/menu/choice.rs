//! Menu choice definitions

/// Numbered menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Load = 1,
    ViewAll = 2,
    Capture = 3,
    Restock = 4,
    Search = 5,
    ValuePerItem = 6,
    HighestQuantity = 7,
    Exit = 8,
}

impl MenuChoice {
    /// All options in display order
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Load,
        MenuChoice::ViewAll,
        MenuChoice::Capture,
        MenuChoice::Restock,
        MenuChoice::Search,
        MenuChoice::ValuePerItem,
        MenuChoice::HighestQuantity,
        MenuChoice::Exit,
    ];

    /// Parse a line typed by the user ("1" through "8", surrounding
    /// whitespace ignored)
    pub fn from_input(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.iter().copied().find(|choice| *choice as u8 == number)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Text shown next to the number in the menu
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Load => "Read data from file",
            MenuChoice::ViewAll => "View all shoes",
            MenuChoice::Capture => "Capture new shoe",
            MenuChoice::Restock => "Restock lowest-quantity shoe",
            MenuChoice::Search => "Search shoe by code",
            MenuChoice::ValuePerItem => "Show total value per item",
            MenuChoice::HighestQuantity => "Show product on sale (highest quantity)",
            MenuChoice::Exit => "Exit",
        }
    }
}
