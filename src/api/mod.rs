pub mod dispatch;
pub mod handlers;
pub mod routes;

pub use dispatch::*;
pub use handlers::*;
pub use routes::*;
