pub mod order;
pub mod response;

pub use order::*;
pub use response::*;
