pub mod bump;
pub mod initialize;

pub use bump::*;
pub use initialize::*;
