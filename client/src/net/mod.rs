//! Browser halves of the console's storage and HTTP seams.

pub mod session;
pub mod transport;
