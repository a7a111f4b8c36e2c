pub mod formatting;
pub mod url;
