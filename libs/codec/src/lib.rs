//! Byte-exact wire codec for PTP management and signaling messages.

pub mod auth;
pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod signaling;
pub mod strings;
pub mod tlv_codec;

pub use cursor::ByteCursor;
pub use envelope::Message;
pub use error::{ParseError, ProtocolError};
