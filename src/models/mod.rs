pub mod error;
pub mod features;
pub mod transaction;

pub use error::*;
pub use features::*;
pub use transaction::*;
