mod error;
mod generation;
mod generator;
mod question;

pub use error::*;
pub use generation::*;
pub use generator::*;
pub use question::*;
