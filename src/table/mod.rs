mod assembly;
mod csv;
mod types;

pub use assembly::assemble_table;
pub use csv::{escape_csv_field, table_to_csv};
pub use types::{Column, LocatorTable, OutputRow, NO_LOCATOR_DESCRIPTION};
