use tracing::{debug, warn};

use crate::domain::arp_table::{self, ScanError};
use crate::domain::models::address;
use crate::domain::models::os::OsKind;
use crate::ports::outbound::command_runner::CommandRunner;

/// Resolves physical addresses to IPv4 addresses by querying the local ARP cache.
///
/// The host-identifier string and the command runner are fixed at
/// construction; every call to [`find_on_network`](Self::find_on_network) is
/// stateless and independent.
pub struct LookupService {
    runner: Box<dyn CommandRunner>,
    host_id: String,
}

impl LookupService {
    /// Builds a service for the running host, classified from
    /// [`std::env::consts::OS`].
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self::with_host_id(runner, std::env::consts::OS)
    }

    /// Builds a service with an explicit host-identifier string (e.g.
    /// `"FreeBSD"`, `"Linux x86_64"`).
    pub fn with_host_id(runner: Box<dyn CommandRunner>, host_id: impl Into<String>) -> Self {
        Self {
            runner,
            host_id: host_id.into(),
        }
    }

    /// Checks whether `physical_address` is visible on the local network
    /// segment.
    ///
    /// * `Ok(Some(ip))` — the address appears in the ARP cache under `ip`.
    /// * `Ok(None)` — the address is malformed, or not in the cache, or the
    ///   ARP command could not be run.
    /// * `Err(ScanError::MalformedArpLine)` — the address appeared in the
    ///   cache but no IPv4 token could be extracted from its line.
    pub fn find_on_network(&self, physical_address: &str) -> Result<Option<String>, ScanError> {
        if !address::is_valid(physical_address) {
            debug!("rejecting malformed physical address {physical_address:?}");
            return Ok(None);
        }

        let os = OsKind::classify(&self.host_id);
        let command = os.arp_command();
        debug!("querying ARP cache via `{command}` ({os:?})");

        // An unreachable or absent arp tool degrades to "not found".
        let lines = match self.runner.run(command) {
            Ok(lines) => lines,
            Err(err) => {
                warn!("`{command}` failed, treating ARP cache as empty: {err:#}");
                Vec::new()
            }
        };

        arp_table::find_ip(&lines, physical_address)
    }
}
