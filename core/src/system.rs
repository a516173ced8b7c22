//! # System MAC Discovery
//!
//! Probes the local machine for a hardware address by parsing the output
//! of the platform's interface-listing utility. Failures are enumerated
//! rather than swallowed so tests and diagnostics can tell a missing
//! command from an interface list with nothing usable in it; callers show
//! them all as a single "could not determine" outcome.

use std::process::Command;

use thiserror::Error;
use tracing::debug;

use macviz_common::mac;
use macviz_common::mac::MacAddress;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// The interface-listing utility could not be executed.
    #[error("'{command}' could not be run")]
    CommandUnavailable { command: &'static str },
    /// The utility ran but listed no interface with a MAC-shaped address.
    #[error("no interface with a MAC address found")]
    NoInterface,
    /// An interface advertised an address token that failed validation.
    #[error("malformed MAC token: '{token}'")]
    MalformedToken { token: String },
}

/// Discovers a MAC address of this machine.
pub fn discover_system_mac() -> Result<MacAddress, DiscoveryError> {
    #[cfg(windows)]
    {
        let output = run_command("getmac", &[])?;
        parse_getmac_output(&output)
    }
    #[cfg(not(windows))]
    {
        match run_command("ifconfig", &[]) {
            Ok(output) => parse_ifconfig_output(&output),
            Err(err) => {
                // Modern distributions often ship iproute2 only.
                debug!("ifconfig probe failed ({err}), falling back to ip link");
                let output = run_command("ip", &["link"])?;
                parse_ip_link_output(&output)
            }
        }
    }
}

fn run_command(command: &'static str, args: &[&str]) -> Result<String, DiscoveryError> {
    let output = Command::new(command)
        .args(args)
        .output()
        .map_err(|_| DiscoveryError::CommandUnavailable { command })?;

    if !output.status.success() {
        return Err(DiscoveryError::CommandUnavailable { command });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parses `ifconfig` output: interface blocks separated by blank lines,
/// the address following an `ether` token. Linux appends `(Ethernet)` to
/// the same line, so the token after `ether` is the reliable one.
#[cfg_attr(windows, allow(dead_code))]
fn parse_ifconfig_output(output: &str) -> Result<MacAddress, DiscoveryError> {
    let mut rejected: Option<String> = None;

    for block in output.split("\n\n") {
        for line in block.lines() {
            let mut tokens = line.split_whitespace();
            while let Some(token) = tokens.next() {
                if !token.eq_ignore_ascii_case("ether") {
                    continue;
                }
                if let Some(candidate) = tokens.next() {
                    if let Some(mac) = try_token(candidate, &mut rejected) {
                        return Ok(mac);
                    }
                }
                break;
            }
        }
    }

    Err(no_match(rejected))
}

/// Parses `ip link` output: the address follows a `link/ether` token.
#[cfg_attr(windows, allow(dead_code))]
fn parse_ip_link_output(output: &str) -> Result<MacAddress, DiscoveryError> {
    let mut rejected: Option<String> = None;

    for line in output.lines() {
        let mut tokens = line.split_whitespace();
        while let Some(token) = tokens.next() {
            if token != "link/ether" {
                continue;
            }
            if let Some(candidate) = tokens.next() {
                if let Some(mac) = try_token(candidate, &mut rejected) {
                    return Ok(mac);
                }
            }
            break;
        }
    }

    Err(no_match(rejected))
}

/// Parses `getmac` output: one adapter per line with the dash-separated
/// address in the first column. Header, separator and media-disconnected
/// rows have no dash in that column; the transport column always contains
/// `\Device\`, so only the first token is screened.
#[cfg_attr(not(windows), allow(dead_code))]
fn parse_getmac_output(output: &str) -> Result<MacAddress, DiscoveryError> {
    let mut rejected: Option<String> = None;

    for line in output.lines() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if !token.contains('-') {
            continue;
        }
        if let Some(mac) = try_token(token, &mut rejected) {
            return Ok(mac);
        }
    }

    Err(no_match(rejected))
}

fn try_token(token: &str, rejected: &mut Option<String>) -> Option<MacAddress> {
    if mac::is_valid(token) {
        MacAddress::parse(token).ok()
    } else {
        rejected.get_or_insert_with(|| token.to_string());
        None
    }
}

fn no_match(rejected: Option<String>) -> DiscoveryError {
    match rejected {
        Some(token) => DiscoveryError::MalformedToken { token },
        None => DiscoveryError::NoInterface,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IFCONFIG_OUTPUT: &str = "\
lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536
        inet 127.0.0.1  netmask 255.0.0.0
        loop  txqueuelen 1000  (Local Loopback)

eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 192.168.1.23  netmask 255.255.255.0
        ether 00:1a:2b:3c:4d:5e  txqueuelen 1000  (Ethernet)
";

    const IP_LINK_OUTPUT: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP
    link/ether 02:42:ac:11:00:02 brd ff:ff:ff:ff:ff:ff
";

    const GETMAC_OUTPUT: &str = "\
Physical Address    Transport Name
=================== ==========================================================
00-1A-2B-3C-4D-5E   \\Device\\Tcpip_{A1B2C3D4}
N/A                 Media disconnected
";

    #[test]
    fn test_parse_ifconfig_finds_ether_line() {
        let mac = parse_ifconfig_output(IFCONFIG_OUTPUT).unwrap();
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn test_parse_ifconfig_without_ether_line() {
        let output = "lo: flags=73<UP,LOOPBACK,RUNNING>\n    inet 127.0.0.1\n";
        assert_eq!(parse_ifconfig_output(output), Err(DiscoveryError::NoInterface));
    }

    #[test]
    fn test_parse_ifconfig_malformed_token() {
        let output = "eth0: flags=4163<UP>\n        ether zz:zz:zz:zz:zz:zz\n";
        assert_eq!(
            parse_ifconfig_output(output),
            Err(DiscoveryError::MalformedToken {
                token: "zz:zz:zz:zz:zz:zz".to_string()
            })
        );
    }

    #[test]
    fn test_parse_ip_link_finds_ether_address() {
        let mac = parse_ip_link_output(IP_LINK_OUTPUT).unwrap();
        assert_eq!(mac.to_string(), "02:42:AC:11:00:02");
    }

    #[test]
    fn test_parse_getmac_skips_header_and_disconnected() {
        let mac = parse_getmac_output(GETMAC_OUTPUT).unwrap();
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn test_parse_getmac_empty() {
        assert_eq!(parse_getmac_output(""), Err(DiscoveryError::NoInterface));
    }

    #[test]
    fn test_parse_getmac_device_transport_column_is_not_a_skip_reason() {
        // Real rows carry \Device\Tcpip_{...} in the transport column;
        // that must not disqualify the line.
        let output = "00-1A-2B-3C-4D-5E   \\Device\\Tcpip_{A1B2C3D4}\n";
        let mac = parse_getmac_output(output).unwrap();
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn test_parse_getmac_header_rows_only() {
        let output = "\
Physical Address    Transport Name
=================== ==========================================================
";
        assert_eq!(parse_getmac_output(output), Err(DiscoveryError::NoInterface));
    }
}
