//! End-to-end tests for [`LookupService`] against scripted ARP output.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use arpscout::{CommandRunner, LookupService, ScanError};

/// Plays back canned ARP output (or a failure) and counts invocations.
struct ScriptedRunner {
    lines: Vec<String>,
    fail: bool,
    calls: Arc<AtomicUsize>,
    expected_command: Option<&'static str>,
}

impl ScriptedRunner {
    fn with_output(raw: &[&str]) -> Self {
        Self {
            lines: raw.iter().map(|l| l.to_string()).collect(),
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
            expected_command: None,
        }
    }

    fn failing() -> Self {
        Self {
            lines: Vec::new(),
            fail: true,
            calls: Arc::new(AtomicUsize::new(0)),
            expected_command: None,
        }
    }

    fn expecting(mut self, command: &'static str) -> Self {
        self.expected_command = Some(command);
        self
    }

    fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str) -> anyhow::Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(expected) = self.expected_command {
            assert_eq!(command, expected, "unexpected ARP command");
        }
        if self.fail {
            anyhow::bail!("arp: command not found");
        }
        Ok(self.lines.clone())
    }
}

const LINUX_ARP_OUTPUT: &[&str] = &[
    "Address                  HWtype  HWaddress           Flags Mask            Iface",
    "172.16.0.3              ether   a0:4b:c2:de:93:23   C                     eth0",
    "172.16.0.1              ether   01:12:3b:44:53:d6   C                     eth0",
];

#[test]
fn resolves_address_on_linux_host() {
    let runner = ScriptedRunner::with_output(LINUX_ARP_OUTPUT).expecting("arp -n");
    let service = LookupService::with_host_id(Box::new(runner), "Linux x86_64");

    let found = service.find_on_network("A0-4B-C2-DE-93-23").unwrap();
    assert_eq!(found, Some("172.16.0.3".to_string()));
}

#[test]
fn reports_absent_address_as_not_found() {
    let runner = ScriptedRunner::with_output(LINUX_ARP_OUTPUT);
    let service = LookupService::with_host_id(Box::new(runner), "Linux x86_64");

    let found = service.find_on_network("11-22-33-44-55-66").unwrap();
    assert_eq!(found, None);
}

#[test]
fn resolves_address_on_bsd_host() {
    let runner = ScriptedRunner::with_output(&[
        "? (172.16.0.1) at 01:12:3b:44:53:d6 on epair0 permanent",
    ])
    .expecting("arp -a");
    let service = LookupService::with_host_id(Box::new(runner), "FreeBSD");

    let found = service.find_on_network("01:12:3b:44:53:d6").unwrap();
    assert_eq!(found, Some("172.16.0.1".to_string()));
}

#[test]
fn resolves_address_on_windows_host() {
    let runner = ScriptedRunner::with_output(&[
        "  Internet Address      Physical Address      Type",
        "  192.168.5.1           01-12-3b-44-53-d6     dynamic",
        "  192.168.5.3           a0-4b-c2-de-93-23     dynamic",
    ])
    .expecting("arp -a");
    let service = LookupService::with_host_id(Box::new(runner), "Windows NT");

    let found = service.find_on_network("a04bc2de9323").unwrap();
    assert_eq!(found, Some("192.168.5.3".to_string()));
}

#[test]
fn malformed_address_never_invokes_the_runner() {
    let runner = ScriptedRunner::with_output(LINUX_ARP_OUTPUT);
    let calls = runner.call_counter();
    let service = LookupService::with_host_id(Box::new(runner), "Linux x86_64");

    let found = service.find_on_network("zz:zz:zz:zz:zz:zz").unwrap();
    assert_eq!(found, None);
    assert_eq!(calls.load(Ordering::SeqCst), 0, "runner must not be invoked");
}

#[test]
fn runner_failure_degrades_to_not_found() {
    let runner = ScriptedRunner::failing();
    let calls = runner.call_counter();
    let service = LookupService::with_host_id(Box::new(runner), "Linux x86_64");

    let found = service.find_on_network("a0:4b:c2:de:93:23").unwrap();
    assert_eq!(found, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn matched_line_without_ip_surfaces_as_error() {
    let runner = ScriptedRunner::with_output(&[
        "eth0: a0:4b:c2:de:93:23 incomplete",
    ]);
    let service = LookupService::with_host_id(Box::new(runner), "Linux x86_64");

    let result = service.find_on_network("a0:4b:c2:de:93:23");
    assert!(matches!(result, Err(ScanError::MalformedArpLine { .. })));
}
