pub mod af3;
pub mod cli;
pub mod complexes;
pub mod error;
pub mod fastx;
pub mod logging;
pub mod quickstart;
mod text;
pub mod writer;

pub use error::{Error, Result};
