//! Semantic primitives shared across TLV payloads, §4.B.

use crate::enums::{ClockAccuracy, NetworkProtocol};
use std::fmt;

/// Owned growable byte vector with lexicographic ordering and the various
/// textual forms (IP, MAC/EUI) the management protocol stuffs into a
/// `PortAddress` or a physical-address field.
///
/// Comparison is by length first, then lexicographically — two buffers of
/// different length never compare equal even when one is a prefix of the
/// other.
#[derive(Debug, Clone, Default, Eq)]
pub struct Binary(Vec<u8>);

impl Binary {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Parse a dotted IPv4 (`a.b.c.d`) or colon-separated IPv6 address into
    /// its network-order bytes.
    pub fn from_ip_string(s: &str) -> Option<Self> {
        if let Ok(v4) = s.parse::<std::net::Ipv4Addr>() {
            return Some(Self(v4.octets().to_vec()));
        }
        if let Ok(v6) = s.parse::<std::net::Ipv6Addr>() {
            return Some(Self(v6.octets().to_vec()));
        }
        None
    }

    pub fn to_ip_string(&self) -> Option<String> {
        match self.0.len() {
            4 => {
                let o = &self.0;
                Some(format!("{}.{}.{}.{}", o[0], o[1], o[2], o[3]))
            }
            16 => {
                let mut groups = [0u16; 8];
                for (i, g) in groups.iter_mut().enumerate() {
                    *g = u16::from_be_bytes([self.0[2 * i], self.0[2 * i + 1]]);
                }
                Some(
                    groups
                        .iter()
                        .map(|g| format!("{:x}", g))
                        .collect::<Vec<_>>()
                        .join(":"),
                )
            }
            _ => None,
        }
    }

    /// Parse a colon/dash/dot separated hex identifier (MAC/EUI-48, EUI-64).
    pub fn from_id_string(s: &str) -> Option<Self> {
        let cleaned: String = s.chars().filter(|c| *c != ':' && *c != '-' && *c != '.').collect();
        if !cleaned.len().is_multiple_of(2) {
            return None;
        }
        let mut out = Vec::with_capacity(cleaned.len() / 2);
        let bytes = cleaned.as_bytes();
        for chunk in bytes.chunks(2) {
            let byte_str = std::str::from_utf8(chunk).ok()?;
            out.push(u8::from_str_radix(byte_str, 16).ok()?);
        }
        Some(Self(out))
    }

    pub fn to_id_string(&self) -> String {
        self.0
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Widen an EUI-48 (6 byte) identifier to EUI-64 by inserting `ff fe` at
    /// offset 3.
    pub fn eui48_to_eui64(&self) -> Option<Self> {
        if self.0.len() != 6 {
            return None;
        }
        let mut out = Vec::with_capacity(8);
        out.extend_from_slice(&self.0[..3]);
        out.push(0xff);
        out.push(0xfe);
        out.extend_from_slice(&self.0[3..]);
        Some(Self(out))
    }
}

impl PartialEq for Binary {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0 == other.0
    }
}

impl PartialOrd for Binary {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Binary {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl From<Vec<u8>> for Binary {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_id_string())
    }
}

/// Length-prefixed PTP text, `u8` length then up to 255 raw bytes (no null
/// terminator; any byte value is legal).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PtpText(Vec<u8>);

impl PtpText {
    pub fn new(bytes: Vec<u8>) -> Result<Self, &'static str> {
        if bytes.len() > u8::MAX as usize {
            return Err("PtpText exceeds 255 bytes");
        }
        Ok(Self(bytes))
    }

    pub fn from_text(s: &str) -> Result<Self, &'static str> {
        Self::new(s.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// On-wire size including the 1-byte length prefix.
    pub fn size(&self) -> usize {
        1 + self.0.len()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl fmt::Display for PtpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

/// `{ secs: u48, nanos: u32 }`, normalized so `nanos < 1_000_000_000` after
/// any arithmetic operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub secs: u64,
    pub nanos: u32,
}

const NANOS_PER_SEC: u32 = 1_000_000_000;

impl Timestamp {
    pub fn new(secs: u64, nanos: u32) -> Self {
        let mut t = Self { secs, nanos };
        t.normalize();
        t
    }

    fn normalize(&mut self) {
        if self.nanos >= NANOS_PER_SEC {
            self.secs += (self.nanos / NANOS_PER_SEC) as u64;
            self.nanos %= NANOS_PER_SEC;
        }
    }

    pub fn from_seconds_f64(seconds: f64) -> Self {
        let secs = seconds.trunc() as u64;
        let nanos = ((seconds.fract()) * NANOS_PER_SEC as f64).round() as u32;
        Self::new(secs, nanos)
    }

    pub fn to_seconds_f64(self) -> f64 {
        self.secs as f64 + self.nanos as f64 / NANOS_PER_SEC as f64
    }

    pub fn from_secs_micros(secs: u64, micros: u32) -> Self {
        Self::new(secs, micros * 1_000)
    }

    pub fn to_secs_micros(self) -> (u64, u32) {
        (self.secs, self.nanos / 1_000)
    }

    pub fn checked_add(self, other: Timestamp) -> Timestamp {
        Self::new(self.secs + other.secs, self.nanos + other.nanos)
    }

    pub fn checked_sub(self, other: Timestamp) -> Timestamp {
        let total_self = self.secs as i128 * NANOS_PER_SEC as i128 + self.nanos as i128;
        let total_other = other.secs as i128 * NANOS_PER_SEC as i128 + other.nanos as i128;
        let mut diff = total_self - total_other;
        if diff < 0 {
            diff = 0;
        }
        let secs = (diff / NANOS_PER_SEC as i128) as u64;
        let nanos = (diff % NANOS_PER_SEC as i128) as u32;
        Self::new(secs, nanos)
    }
}

/// `{ scaledNanoseconds: i64 }`, the PTP fixed-point interval representation
/// (16 fractional bits).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeInterval {
    pub scaled_nanoseconds: i64,
}

impl TimeInterval {
    pub fn get_interval(self) -> f64 {
        self.scaled_nanoseconds as f64 / 65536.0
    }

    pub fn get_interval_int(self) -> i64 {
        self.scaled_nanoseconds >> 16
    }
}

/// 8-byte clock identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockIdentity(pub [u8; 8]);

impl ClockIdentity {
    pub const ALL_CLOCKS: ClockIdentity = ClockIdentity([0xff; 8]);

    pub fn size() -> usize {
        8
    }
}

impl fmt::Display for ClockIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}.{:02x}{:02x}.{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5], self.0[6], self.0[7]
        )
    }
}

/// `{ clockIdentity, portNumber }`, sorts by clock identity then port
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PortIdentity {
    pub clock_identity: ClockIdentity,
    pub port_number: u16,
}

impl PortIdentity {
    pub const ALL_PORTS: u16 = 0xffff;

    pub fn all_clocks() -> Self {
        Self {
            clock_identity: ClockIdentity::ALL_CLOCKS,
            port_number: Self::ALL_PORTS,
        }
    }

    pub fn size() -> usize {
        10
    }
}

/// `{ networkProtocol, addressLength, addressField }`, self-sizing: the
/// length field is derived from the address bytes, never stored
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortAddress {
    pub network_protocol: NetworkProtocol,
    pub address: Binary,
}

impl PortAddress {
    /// On-wire size: 2 (protocol) + 2 (length) + address bytes.
    pub fn size(&self) -> usize {
        4 + self.address.len()
    }
}

impl PartialOrd for PortAddress {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PortAddress {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.network_protocol as u16)
            .cmp(&(other.network_protocol as u16))
            .then_with(|| self.address.cmp(&other.address))
    }
}

/// `{ clockClass, clockAccuracy, offsetScaledLogVariance }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockQuality {
    pub clock_class: u8,
    pub clock_accuracy: ClockAccuracy,
    pub offset_scaled_log_variance: u16,
}

impl ClockQuality {
    pub fn size() -> usize {
        4
    }
}
