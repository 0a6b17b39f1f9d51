//! # Domain Models
//!
//! This module contains the core data structures and types that represent the
//! business domain of the application.
//!
//! ## Value Objects
//! * [`address::Separator`]: The separator styles a physical address can be written with.
//! * [`os::OsKind`]: The OS families whose ARP dialects are understood.
//!
//! ## Design Principles
//! * **Rich Models**: Models contain the logic for validation, parsing, and data manipulation.
//! * **Immutability**: All values here are immutable after construction.
//! * **Portability**: Models are used across all layers (Ports, Adapters, Application).

pub mod address;
pub mod os;
