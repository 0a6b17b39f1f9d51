//! # Domain Layer (Core)
//!
//! The heart of the application. Contains the business logic and models.
//!
//! ## Characteristics
//! * **Pure Rust**: No external dependencies (no IO, no system calls).
//! * **Stability**: Changes here should be rare and driven by business requirements, not technology changes.
//! * **Independence**: Does not know about Ports, Adapters, or the Application layer.
//!
//! ## Contents
//! * **[`models`]**: The value objects of the system (physical addresses, OS kinds).
//! * **[`arp_table`]**: Matching logic over raw ARP command output.

pub mod arp_table;
pub mod models;
