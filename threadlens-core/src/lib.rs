pub mod error;
pub mod error_utils;
pub mod export;
pub mod progress;
pub mod types;

pub use error::*;
pub use error_utils::*;
pub use export::*;
pub use progress::*;
pub use types::*;
