//! MongoDB module
//!
//! Contains the store seam, the driver-backed client, blocking dispatch,
//! JSON conversion and the string-returning facade used by the tools.

pub mod client;
pub mod facade;
pub mod json;
pub mod worker;
