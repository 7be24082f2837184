//! Command tree registration, dispatch and listing
//!
//! The tree is built once at startup, then handed by reference to
//! [`execute`] and to the printers. Nothing here is global.

pub mod command;
pub mod context;
pub mod dispatch;
pub mod printer;

// Re-export main types
pub use command::*;
pub use context::*;
pub use dispatch::*;
pub use printer::*;
