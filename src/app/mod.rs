pub mod error;

pub use error::{HltbError, Result};
