//! # MAC Address Model
//!
//! Parsing, validation and normalization of hardware addresses.
//!
//! Three textual shapes are accepted:
//! * Six 2-digit hex groups separated by `:` or `-` (e.g., `00:1A:2B:3C:4D:5E`).
//! * Three 4-digit hex groups separated by `.` (Cisco notation, e.g., `001A.2B3C.4D5E`).
//! * A bare 12-digit hex string (e.g., `001A2B3C4D5E`).
//!
//! Everything normalizes to the canonical uppercase colon form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacParseError {
    /// The input does not match any of the three accepted shapes.
    #[error("invalid MAC address: '{0}'")]
    InvalidFormat(String),
}

/// A hardware address: six ordered octets.
///
/// Canonical text form is `XX:XX:XX:XX:XX:XX`, uppercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Validates `raw` and builds the canonical address.
    pub fn parse(raw: &str) -> Result<Self, MacParseError> {
        if !is_valid(raw) {
            return Err(MacParseError::InvalidFormat(raw.to_string()));
        }

        let digits: Vec<u8> = raw
            .chars()
            .filter(char::is_ascii_hexdigit)
            .map(|c| c.to_digit(16).unwrap_or(0) as u8)
            .collect();

        let mut octets = [0u8; 6];
        for (i, pair) in digits.chunks_exact(2).enumerate() {
            octets[i] = (pair[0] << 4) | pair[1];
        }

        Ok(Self(octets))
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// The organizationally unique identifier: the first three octets.
    pub fn oui(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Unicast iff the least-significant bit of the first octet is clear.
    pub fn is_unicast(&self) -> bool {
        self.0[0] & 0b0000_0001 == 0
    }

    /// Globally administered iff bit 1 of the first octet is clear.
    pub fn is_universal(&self) -> bool {
        self.0[0] & 0b0000_0010 == 0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Checks whether `raw` matches one of the accepted shapes.
///
/// A single separator style is required for the whole address; mixing
/// `:` and `-` between groups is rejected.
pub fn is_valid(raw: &str) -> bool {
    is_pair_grouped(raw, ':') || is_pair_grouped(raw, '-') || is_dot_grouped(raw) || is_bare(raw)
}

/// Normalizes an already-validated address to `XX:XX:XX:XX:XX:XX`.
///
/// Strips every non-hex character, regroups into 2-digit octets and
/// uppercases. Grouping is unspecified for unvalidated input; call
/// [`is_valid`] (or use [`MacAddress::parse`]) first.
pub fn normalize(raw: &str) -> String {
    let clean: String = raw
        .chars()
        .filter(char::is_ascii_hexdigit)
        .collect::<String>()
        .to_uppercase();

    clean
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect::<Vec<String>>()
        .join(":")
}

fn is_pair_grouped(raw: &str, sep: char) -> bool {
    let groups: Vec<&str> = raw.split(sep).collect();
    groups.len() == 6 && groups.iter().all(|g| is_hex_group(g, 2))
}

fn is_dot_grouped(raw: &str) -> bool {
    let groups: Vec<&str> = raw.split('.').collect();
    groups.len() == 3 && groups.iter().all(|g| is_hex_group(g, 4))
}

fn is_bare(raw: &str) -> bool {
    is_hex_group(raw, 12)
}

fn is_hex_group(group: &str, len: usize) -> bool {
    group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_accepted_shapes() {
        // Colon pairs
        assert!(is_valid("00:1A:2B:3C:4D:5E"));
        // Dash pairs
        assert!(is_valid("00-1a-2b-3c-4d-5e"));
        // Cisco dot notation
        assert!(is_valid("001A.2B3C.4D5E"));
        // Bare hex
        assert!(is_valid("001a2b3c4d5e"));
    }

    #[test]
    fn test_is_valid_rejections() {
        // Too few groups
        assert!(!is_valid("00:1A:2B:3C:4D"));
        // Too many digits in a group
        assert!(!is_valid("000:1A:2B:3C:4D:5E"));
        // Invalid hex character
        assert!(!is_valid("0G:1A:2B:3C:4D:5E"));
        // Mixed separator styles
        assert!(!is_valid("00:1A-2B:3C:4D:5E"));
        // Wrong bare length
        assert!(!is_valid("001a2b3c4d5"));
        assert!(!is_valid("001a2b3c4d5e0"));
        // Empty
        assert!(!is_valid(""));
    }

    #[test]
    fn test_normalize_is_canonical_across_shapes() {
        let expected = "00:1A:2B:3C:4D:5E";
        assert_eq!(normalize("00:1A:2B:3C:4D:5E"), expected);
        assert_eq!(normalize("00-1a-2b-3c-4d-5e"), expected);
        assert_eq!(normalize("001A.2B3C.4D5E"), expected);
        assert_eq!(normalize("001a2b3c4d5e"), expected);
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let mac = MacAddress::parse("0a1a2b3c4d5e").unwrap();
        assert_eq!(mac.to_string(), "0A:1A:2B:3C:4D:5E");
        assert_eq!(mac.octets(), [0x0A, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);
        assert_eq!(mac.oui(), [0x0A, 0x1A, 0x2B]);

        assert!(MacAddress::parse("not-a-mac").is_err());
    }

    #[test]
    fn test_first_octet_flags() {
        // Low two bits of the first octet drive both flags.
        let unicast_global = MacAddress::parse("00:00:00:00:00:01").unwrap();
        assert!(unicast_global.is_unicast() && unicast_global.is_universal());

        let multicast_global = MacAddress::parse("01:00:00:00:00:00").unwrap();
        assert!(!multicast_global.is_unicast() && multicast_global.is_universal());

        let unicast_local = MacAddress::parse("02:00:00:00:00:00").unwrap();
        assert!(unicast_local.is_unicast() && !unicast_local.is_universal());

        let multicast_local = MacAddress::parse("03:00:00:00:00:00").unwrap();
        assert!(!multicast_local.is_unicast() && !multicast_local.is_universal());
    }
}
