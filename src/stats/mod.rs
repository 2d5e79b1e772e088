pub mod parse;
pub mod compute;

pub use parse::*;
pub use compute::*;
