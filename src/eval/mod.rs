pub mod dispatcher;
pub mod readline;
mod tokenizer;

pub use dispatcher::Dispatcher;
pub use readline::{LineEditor, LineSource, PlainReader};
