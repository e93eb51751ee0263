//! Error taxonomy, §7. Every codec-originating failure maps to exactly one
//! variant; propagation stops at the first failure (no partial state is
//! exposed).

use ptpmgmt_types::ManagementId;
use thiserror::Error;

/// The outcome of a `Message::parse` call that doesn't map to a decoded
/// management TLV directly — `Msg`/`Sig`/`Smpte` carry their own payload
/// already stashed on the `Message`, the rest are straightforward failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolError {
    #[error("management-error-status TLV received: id={err_id} management_id={management_id:?}")]
    Msg { err_id: u16, management_id: ManagementId },

    #[error("signaling message parsed, {tlv_count} TLV(s)")]
    Sig { tlv_count: usize },

    #[error("SMPTE organization-extension command parsed")]
    Smpte,

    #[error("management id {code:#06x} is not registered, or not allowed for the attempted action")]
    InvalidId { code: u16 },

    #[error("TLV type {tlv_type:#06x} is not valid at this position")]
    InvalidTlv { tlv_type: u16 },

    #[error("build payload id {payload_id:?} does not match declared id {declared_id:?}")]
    MismatchTlv {
        declared_id: ManagementId,
        payload_id: ManagementId,
    },

    #[error("{field} length field {declared} disagrees with encoded content length {actual}")]
    SizeMismatch {
        field: &'static str,
        declared: usize,
        actual: usize,
    },

    #[error("buffer underrun: needed {needed} bytes, {available} available")]
    TooSmall { needed: usize, available: usize },

    #[error("total length {len} is odd after padding")]
    SizeOdd { len: usize },

    #[error("value {value} is out of the encodable range for {context}")]
    Value { context: &'static str, value: i64 },

    #[error("header mismatch: {reason}")]
    Header { reason: &'static str },

    #[error("reply action {action:?} is inconsistent with the declared permissions for {id:?}")]
    Action {
        id: ManagementId,
        action: ptpmgmt_types::Action,
    },

    #[error("management id {id:?} has no implemented codec (registry size = -1)")]
    Unsupport { id: ManagementId },

    #[error("allocation failure")]
    Mem,

    #[error("authentication TLV verification failed")]
    Auth,

    #[error("authentication TLV expected but not present")]
    AuthNone,

    #[error("authentication TLV ICV does not match")]
    AuthWrong,

    #[error("no key available for spp={spp} key_id={key_id}")]
    AuthNoKey { spp: u8, key_id: u32 },
}

pub type ParseResult<T> = Result<T, ProtocolError>;
pub type ParseError = ProtocolError;
