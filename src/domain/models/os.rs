//! # OS Kind Model
//!
//! Classifies a host-identifier string into an OS family and maps each family
//! to the ARP command whose output dialect it produces. Adding support for a
//! new OS family is a data change here, not a new code path.

/// The OS families whose ARP table dialect the crate understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsKind {
    Windows,
    UnixLike,
    Bsd,
}

impl OsKind {
    /// Classifies a host-identifier string (e.g. `"Linux x86_64"`, `"FreeBSD"`,
    /// `"windows"`) into an [`OsKind`].
    ///
    /// Matching is a case-insensitive substring check. Unrecognized identifiers
    /// fall back to [`OsKind::UnixLike`], the most generic dialect.
    pub fn classify(host_id: &str) -> Self {
        let host_id = host_id.to_uppercase();
        if host_id.contains("WIN") {
            OsKind::Windows
        } else if host_id.contains("BSD") {
            OsKind::Bsd
        } else {
            OsKind::UnixLike
        }
    }

    /// The shell command that dumps the ARP table on this OS family.
    pub fn arp_command(&self) -> &'static str {
        match self {
            OsKind::Windows => "arp -a",
            OsKind::UnixLike => "arp -n",
            OsKind::Bsd => "arp -a",
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
