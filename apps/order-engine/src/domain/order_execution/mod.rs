//! Order Execution Bounded Context
//!
//! Describes a single exchange order request and the rules tying its
//! order type to the price fields it must (and must not) carry.

pub mod order_request;
pub mod value_objects;

pub use order_request::OrderRequest;
pub use value_objects::{OrderSide, OrderType, TimeInForce};
