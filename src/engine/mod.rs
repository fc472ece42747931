pub mod config;
pub mod error;
pub mod token;
pub mod tokenizer;

pub use config::ScanConfig;
pub use error::ScanError;
pub use token::Token;
pub use tokenizer::{is_delimiter, tokenize, Tokenizer};
