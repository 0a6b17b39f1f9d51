//! # Adapters Layer (Infrastructure)
//!
//! This layer contains the concrete implementations of the [`crate::ports`].
//! It interacts directly with the outside world (OS processes).
//!
//! ## Rules
//! * Adapters **MUST** depend on `ports` and `domain`.
//! * Adapters **MUST NOT** depend on `application` logic directly (circular dependency).

pub mod outbound;
