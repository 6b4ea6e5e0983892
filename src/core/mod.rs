pub mod error;

pub use error::{BattleError, Result};
