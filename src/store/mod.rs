pub mod memory;
pub mod sales_source;
pub mod traits;

pub use memory::*;
pub use sales_source::*;
pub use traits::*;
