//! Request handlers.

mod bugs;
mod system;


pub use bugs::*;
pub use system::*;
