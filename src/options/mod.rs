mod colors;
mod extract_options;

pub use colors::{ColorFilter, LocatorColor};
pub use extract_options::ExtractOptions;
