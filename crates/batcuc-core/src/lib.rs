pub mod combinations;
pub mod error;
pub mod stars;
pub mod types;

pub use error::*;
pub use types::*;
