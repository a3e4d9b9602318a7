//! Parsing and comparison of `docker run` command lines.
//!
//! A raw line is split into tokens by [`split_command`], turned into a
//! [`RunCommand`] by [`parse`], and two parsed commands are compared with
//! [`judge`], which reports the first field where the candidate differs from
//! the reference.

pub mod error;
pub mod flags;
pub mod judge;
pub mod models;
pub mod parser;
pub mod tokenizer;
pub mod validate;

mod builder;
mod report;

pub use error::{ParseError, Result};
pub use flags::{Flag, Switch, Valued};
pub use judge::{judge, Mismatch};
pub use models::RunCommand;
pub use parser::{parse, parse_tokens};
pub use tokenizer::split_command;
