//! # ARP Table Matching
//!
//! Scans raw ARP command output for a physical address and extracts the IPv4
//! address listed on the same line.
//!
//! The matching is dialect-agnostic: lines are treated as opaque text and
//! searched for the address in all three separator styles, so Windows
//! (`192.168.5.1  01-12-3b-44-53-d6  dynamic`), Linux
//! (`192.168.5.1  ether  01:12:3b:44:53:d6  C  eth0`) and BSD
//! (`? (192.168.5.1) at 01:12:3b:44:53:d6 on em0 permanent`) output are all
//! handled by the same code.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::models::address::{self, Separator};

static IPV4_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Four dot-separated runs of 1-3 digits. Octets are deliberately not
/// range-checked; the ARP tools only ever print real addresses.
fn ipv4_pattern() -> &'static Regex {
    IPV4_PATTERN.get_or_init(|| {
        Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("IPv4 pattern is valid")
    })
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("physical address matched in ARP output, but no IP address is associated with it: {line:?}")]
    MalformedArpLine { line: String },
}

/// Finds the IPv4 address associated with `physical_address` in `lines`.
///
/// The first line containing the address (case-insensitive, in any separator
/// style) wins and scanning stops. Three-way outcome:
/// * `Ok(Some(ip))` — a line matched and carried an IPv4 token.
/// * `Ok(None)` — no line matched, or `physical_address` is not well-formed.
/// * `Err(ScanError::MalformedArpLine)` — a line matched but carried no IPv4
///   token; the ARP tool produced output we do not understand.
pub fn find_ip(lines: &[String], physical_address: &str) -> Result<Option<String>, ScanError> {
    if !address::is_valid(physical_address) {
        return Ok(None);
    }

    let variants = [
        address::normalize(physical_address, Separator::Colon).to_lowercase(),
        address::normalize(physical_address, Separator::Dash).to_lowercase(),
        address::normalize(physical_address, Separator::None).to_lowercase(),
    ];

    for line in lines {
        let haystack = line.to_lowercase();
        if !variants.iter().any(|variant| haystack.contains(variant)) {
            continue;
        }

        return match ipv4_pattern().find(line) {
            Some(ip) => Ok(Some(ip.as_str().to_string())),
            None => Err(ScanError::MalformedArpLine { line: line.clone() }),
        };
    }

    Ok(None)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
