pub mod reader;
pub mod tokenizer;

pub use reader::{LineReader, ReadOutcome, MAX_LINE_LEN};
pub use tokenizer::{strip_background, tokenize, MAX_ARGS};
