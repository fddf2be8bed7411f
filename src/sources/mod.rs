mod edl_source;
pub mod extractor;
mod http_edl_source;

pub use edl_source::{EdlSource, LocalEdlSource};
pub use extractor::{extract_local_locators, extract_locators_generic, extract_remote_locators};
pub use http_edl_source::HttpEdlSource;
