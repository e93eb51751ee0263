//! Wire-level types for the PTP (IEEE 1588) management protocol.
//!
//! This crate carries no codec logic — it defines the shapes that
//! `ptpmgmt-codec` reads and writes: the semantic primitives (§4.B), the
//! management-id / TLV-type / action enumerations (§3), the TLV registry
//! (§4.C), and the per-management-id payload shapes (`TlvPayload`).

pub mod enums;
pub mod payload;
pub mod primitives;
pub mod registry;
pub mod session;

pub use enums::*;
pub use payload::TlvPayload;
pub use primitives::{
    Binary, ClockIdentity, ClockQuality, PortAddress, PortIdentity, PtpText, TimeInterval,
    Timestamp,
};
pub use registry::{CodecKind, RegistryEntry, ALL_CLOCKS_IDENTITY, ALL_PORTS, REGISTRY};
pub use session::{ReceiveAuthPolicy, MsgParams};
