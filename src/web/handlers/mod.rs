pub mod portfolio_handlers;
pub mod resume_handlers;
pub mod system_handlers;

pub use portfolio_handlers::*;
pub use resume_handlers::*;
pub use system_handlers::*;
