//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for the exchange, pacing and event reporting
//! - **Use Cases**: Plan execution and the end-to-end strategy flow

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
