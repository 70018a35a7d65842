pub mod errors;
pub mod filter;
pub mod pagination;

pub use errors::*;
pub use filter::*;
pub use pagination::*;
