pub mod parser;
pub mod protocol;
