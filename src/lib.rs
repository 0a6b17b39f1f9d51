//! # Arpscout Codebase
//!
//! `arpscout` answers one question: *is this physical (MAC) address currently
//! visible on the local network segment, and if so, under which IPv4 address?*
//! It does so by querying the operating system's ARP cache through the `arp`
//! command and scanning its textual output. The crate is designed with
//! **Hexagonal Architecture**.
//!
//! ## Architecture Overview
//! The codebase is organized into layers to separate concerns and ensure maintainability:
//!
//! * **[`domain`]**: The core business logic and models. Pure Rust, no external IO dependencies.
//!     * *Center of the Hexagon*.
//! * **[`application`]**: Application services and use cases. Orchestrates the Domain and Ports.
//!     * *Application Layer*.
//! * **[`ports`]**: Traits defining interactions between the Application and the outside world.
//!     * *Boundaries of the Hexagon*.
//! * **[`adapters`]**: Concrete implementations of Ports (OS process execution).
//!     * *Outside the Hexagon*.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::services::lookup::LookupService;
pub use domain::arp_table::ScanError;
pub use domain::models::address::{self, Separator};
pub use domain::models::os::OsKind;
pub use ports::outbound::command_runner::CommandRunner;
