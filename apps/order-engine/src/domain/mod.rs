//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic (validation, plan compilation)
//!
//! # Bounded Contexts
//!
//! - [`order_execution`]: Order requests and their type/field invariants
//! - [`execution_tactics`]: Strategy intents and their compilation into execution plans
//! - [`shared`]: Symbols and validation errors shared by both

pub mod execution_tactics;
pub mod order_execution;
pub mod shared;
