//! # Application Layer (Service Layer)
//!
//! This layer orchestrates the business logic use cases.
//!
//! ## Purpose
//! It acts as the "API" for the domain. It does not contain complex business rules (that belongs in `domain`),
//! but rather:
//! 1. Receives a request from the caller.
//! 2. Validates inputs.
//! 3. Calls the appropriate Domain entities or Outbound Ports.
//! 4. Returns results to the caller.
//!
//! ## Contents
//! * **[`services`]**: Grouped by feature/context.

pub mod services;
