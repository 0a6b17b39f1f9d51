//! # Application Services
//!
//! This module contains the "Use Cases" of the application.
//!
//! ## Role in Hexagonal Architecture
//! Application Services sit at the center of the hexagon (along with the Domain).
//! They are the entry points for all business logic operations.
//!
//! * **Orchestration**: They coordinate the interaction between the Domain layer (pure logic) and the Ports (infrastructure).
//! * **Agnostic**: They do not know *how* underlying actions are performed (e.g., how a subprocess is spawned), only *that* they are performed via Ports.
//!
//! ## Available Services
//! * [`lookup::LookupService`]: Resolves a physical address to an IPv4 address via the ARP cache.

pub mod lookup;
