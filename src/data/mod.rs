mod builtin;
mod loader;

pub use builtin::net_worth_question;
pub use loader::{LoadError, load_question_from_json, parse_question};
