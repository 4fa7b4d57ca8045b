pub mod banner;
pub mod config;
pub mod consts;
pub mod error;
pub mod fetch;
pub mod flatten;
pub mod repl;
pub mod responder;
pub mod session;
pub mod spinner;

pub use error::{Error, Result};
