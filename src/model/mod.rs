pub mod album;
pub mod sales;

pub use album::*;
pub use sales::*;
