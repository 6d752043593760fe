//! Interactive menu interface
//!
//! The session owns the store and reads menu choices from any `BufRead`,
//! writing to any `Write`, so it runs the same on a terminal and in tests.

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::MenuChoice;
pub use session::{Session, SessionState};
