pub mod error;
pub mod outcome;

pub use error::{Result, SuiteError};
pub use outcome::Outcome;
