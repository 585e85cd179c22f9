//! Record codec
//!
//! Maps shoes to and from `csv` records.
//!
//! ## Record Format
//! ```text
//! country,code,product,cost,quantity
//! ```
//! - Each field is trimmed on decode
//! - Cost is written with the shortest round-trip `f64` rendering
//!   (`59.99`, `10`), not rounded for display

use csv::StringRecord;

use crate::error::{InventoryError, Result};
use crate::record::Shoe;

/// Literal header line (without line terminator)
pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";

/// Header as individual fields, for the record writer
pub const HEADER_FIELDS: [&str; 5] = ["Country", "Code", "Product", "Cost", "Quantity"];

/// Number of fields in every record
const FIELD_COUNT: usize = 5;

/// Encode a shoe as the five record fields
pub fn encode_record(shoe: &Shoe) -> [String; 5] {
    [
        shoe.country().to_string(),
        shoe.code().to_string(),
        shoe.product().to_string(),
        shoe.cost().to_string(),
        shoe.quantity().to_string(),
    ]
}

/// Decode a record read from the backing file
///
/// Errors:
/// - `MalformedLine` if the record does not have exactly 5 fields
/// - `InvalidNumber` if cost or quantity does not parse
pub fn decode_record(record: &StringRecord) -> Result<Shoe> {
    if record.len() != FIELD_COUNT {
        return Err(InventoryError::MalformedLine {
            found: record.len(),
        });
    }
    Shoe::parse(&record[0], &record[1], &record[2], &record[3], &record[4])
}

/// Join a record back into its line form, for reporting skipped lines
pub fn render_record(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
