pub mod chart;
pub mod query;
pub mod validate;

pub use chart::{prepare, prepare_with_layout, ChartLayout, ChartModel};
pub use query::*;
pub use validate::*;
