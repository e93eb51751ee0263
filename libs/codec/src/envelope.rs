//! Message envelope, §4.E: the 34-byte PTP header plus the 10-byte target
//! port identity and, for management messages, the 10-byte management-TLV
//! prefix. `Message` is the long-lived object a caller builds and parses
//! through.

use byteorder::{BigEndian, ByteOrder};

use ptpmgmt_types::{payload, registry, Action, ClockIdentity, ManagementId, MessageType, MsgParams, PortIdentity, TlvPayload, TlvType};

use crate::auth::{self, SaStore};
use crate::cursor::ByteCursor;
use crate::error::ProtocolError;
use crate::signaling::{self, DecodedSignalingTlv};
use crate::tlv_codec;

const HEADER_LEN: usize = 44;
const MANAGEMENT_PREFIX_LEN: usize = 10;
const MANAGEMENT_DATA_OFFSET: usize = HEADER_LEN + MANAGEMENT_PREFIX_LEN;
const MAJOR_VERSION: u8 = 2;
const CONTROL_FIELD_MANAGEMENT: u8 = 0x04;
const LOG_MESSAGE_INTERVAL: u8 = 0x7f;

fn write_port_identity(buf: &mut [u8], id: &PortIdentity) {
    buf[0..8].copy_from_slice(&id.clock_identity.0);
    BigEndian::write_u16(&mut buf[8..10], id.port_number);
}

fn read_port_identity(buf: &[u8]) -> PortIdentity {
    let mut clock_identity = ClockIdentity::default();
    clock_identity.0.copy_from_slice(&buf[0..8]);
    PortIdentity {
        clock_identity,
        port_number: BigEndian::read_u16(&buf[8..10]),
    }
}

/// Long-lived build/parse state for one PTP management conversation. A
/// `Message` is not shareable across threads — create one per thread.
pub struct Message {
    pub params: MsgParams,
    pub sequence_id: u16,
    pending_action: Action,
    pending_id: ManagementId,
    pending_payload: Option<TlvPayload>,
    /// The action and id of the last successfully parsed management reply.
    pub last_action: Option<Action>,
    pub last_id: Option<ManagementId>,
    pub last_payload: Option<TlvPayload>,
    pub signaling_tlvs: Vec<DecodedSignalingTlv>,
}

impl Message {
    pub fn new(params: MsgParams) -> Self {
        Self {
            params,
            sequence_id: 0,
            pending_action: Action::Get,
            pending_id: ManagementId::NullPtpManagement,
            pending_payload: None,
            last_action: None,
            last_id: None,
            last_payload: None,
            signaling_tlvs: Vec::new(),
        }
    }

    /// Sets the action/id/payload to build next. A `NullPtpManagement`-sized
    /// (empty-body) id silently drops any supplied payload rather than
    /// rejecting the call (§9).
    pub fn set_action(&mut self, action: Action, id: ManagementId, payload: Option<TlvPayload>) -> Result<(), ProtocolError> {
        if !matches!(action, Action::Get | Action::Set | Action::Command) {
            return Err(ProtocolError::Action { id, action });
        }
        if !registry::is_allowed(id, action) {
            return Err(ProtocolError::InvalidId { code: registry::entry(id).wire_code });
        }
        let entry = registry::entry(id);
        let payload = if entry.codec_kind == registry::CodecKind::Empty {
            None
        } else if let Some(p) = payload {
            if p.management_id() != id {
                return Err(ProtocolError::MismatchTlv {
                    declared_id: id,
                    payload_id: p.management_id(),
                });
            }
            Some(p)
        } else {
            None
        };
        self.pending_action = action;
        self.pending_id = id;
        self.pending_payload = payload;
        Ok(())
    }

    /// Drops the borrowed send payload and demotes the pending action to
    /// `GET` so a stale payload can never be serialized (§3 Lifecycle, §9).
    pub fn clear_data(&mut self) {
        self.pending_payload = None;
        self.pending_action = Action::Get;
    }

    fn write_header(&self, buf: &mut [u8], action: Action, total_len: usize, tlv_type: TlvType, mgmt_len_field: u16, mgmt_code: u16) {
        buf[0] = (self.params.transport_specific << 4) | (MessageType::Management as u8 & 0x0f);
        buf[1] = (self.params.minor_version << 4) | MAJOR_VERSION;
        BigEndian::write_u16(&mut buf[2..4], total_len as u16);
        buf[4] = self.params.domain_number;
        buf[5] = 0; // minor_sdo_id
        buf[6] = if self.params.is_unicast { 0x04 } else { 0 };
        buf[7] = 0;
        // bytes 8-15 correction_field, 16-19 message_type_specific: left zero.
        write_port_identity(&mut buf[20..30], &self.params.self_port_identity);
        BigEndian::write_u16(&mut buf[30..32], self.sequence_id);
        buf[32] = CONTROL_FIELD_MANAGEMENT;
        buf[33] = LOG_MESSAGE_INTERVAL;
        write_port_identity(&mut buf[34..44], &self.params.target_port_identity);
        buf[44] = self.params.boundary_hops;
        buf[45] = self.params.boundary_hops;
        buf[46] = action as u8 & 0x0f;
        buf[47] = 0;
        BigEndian::write_u16(&mut buf[48..50], tlv_type as u16);
        BigEndian::write_u16(&mut buf[50..52], mgmt_len_field);
        BigEndian::write_u16(&mut buf[52..54], mgmt_code);
    }

    /// Builds the pending action/id/payload into a fresh frame (§4.E Build
    /// pipeline). Returns the frame bytes, even-length and with
    /// `message_length` already filled in.
    pub fn build(&mut self) -> Result<Vec<u8>, ProtocolError> {
        let entry = registry::entry(self.pending_id);

        let mut data = Vec::new();
        if self.pending_action == Action::Get {
            if !self.params.use_zero_get && entry.is_fixed() {
                // GET without use_zero_get pads the declared size with zeros
                // (older IEEE behavior, §6).
                data = vec![0u8; entry.size as usize];
            }
        } else if entry.codec_kind != registry::CodecKind::Empty {
            let mut payload = self
                .pending_payload
                .clone()
                .ok_or(ProtocolError::Header { reason: "SET/COMMAND requires a non-empty payload" })?;
            let mut scratch = vec![0u8; 2048];
            {
                let mut c = ByteCursor::for_build(&mut scratch);
                tlv_codec::codec(&mut c, &mut payload)?;
                let used = c.position();
                data = scratch[..used].to_vec();
            }
        }

        if data.len() % 2 != 0 {
            data.push(0);
        }

        let mgmt_len_field = (2 + data.len()) as u16;
        let total_len = MANAGEMENT_DATA_OFFSET + data.len();
        let mut buf = vec![0u8; total_len];
        self.write_header(&mut buf, self.pending_action, total_len, TlvType::Management, mgmt_len_field, self.pending_id.into());
        buf[MANAGEMENT_DATA_OFFSET..].copy_from_slice(&data);
        Ok(buf)
    }

    /// Builds, then appends a trailing authentication TLV and fixes up
    /// `message_length` (§4.G). Requires `minor_version >= 1` (§6).
    pub fn build_with_auth(&mut self, sa: &dyn SaStore, spp: u8, key_id: u32) -> Result<Vec<u8>, ProtocolError> {
        if self.params.minor_version < 1 {
            return Err(ProtocolError::Header { reason: "authentication requires minor_version >= 1" });
        }
        let mut frame = self.build()?;
        auth::append_auth_tlv(&mut frame, sa, spp, key_id)?;
        let total_len = frame.len() as u16;
        BigEndian::write_u16(&mut frame[2..4], total_len);
        Ok(frame)
    }

    fn parse_management(&mut self, buf: &mut [u8]) -> Result<(), ProtocolError> {
        if buf.len() < MANAGEMENT_DATA_OFFSET {
            return Err(ProtocolError::TooSmall { needed: MANAGEMENT_DATA_OFFSET, available: buf.len() });
        }
        let action = Action::try_from(buf[46] & 0x0f).map_err(|_| ProtocolError::Header { reason: "invalid action field" })?;
        let tlv_type_code = BigEndian::read_u16(&buf[48..50]);
        let length_field = BigEndian::read_u16(&buf[50..52]) as usize;
        let mgmt_code = BigEndian::read_u16(&buf[52..54]);

        let is_smpte = self.params.receive_smpte_org && tlv_type_code == TlvType::OrganizationExtension as u16;
        match action {
            Action::Response | Action::Acknowledge => {}
            Action::Command if is_smpte => {}
            _ => {
                let id = ManagementId::try_from(mgmt_code).unwrap_or(ManagementId::NullPtpManagement);
                return Err(ProtocolError::Action { id, action });
            }
        }

        if tlv_type_code == TlvType::ManagementErrorStatus as u16 {
            let management_id = ManagementId::try_from(mgmt_code).ok();
            if buf.len() < MANAGEMENT_DATA_OFFSET + 2 {
                return Err(ProtocolError::TooSmall { needed: 2, available: buf.len() - MANAGEMENT_DATA_OFFSET });
            }
            let err_id = BigEndian::read_u16(&buf[MANAGEMENT_DATA_OFFSET..MANAGEMENT_DATA_OFFSET + 2]);
            self.last_id = management_id;
            self.last_action = Some(action);
            self.last_payload = None;
            return Err(ProtocolError::Msg {
                err_id,
                management_id: management_id.unwrap_or(ManagementId::NullPtpManagement),
            });
        }

        if is_smpte {
            self.last_id = ManagementId::try_from(mgmt_code).ok();
            self.last_action = Some(action);
            self.last_payload = None;
            return Err(ProtocolError::Smpte);
        }

        if tlv_type_code != TlvType::Management as u16 {
            return Err(ProtocolError::InvalidTlv { tlv_type: tlv_type_code });
        }

        let id = ManagementId::try_from(mgmt_code).map_err(|_| ProtocolError::InvalidId { code: mgmt_code })?;
        if !registry::is_valid(id, &self.params) {
            return Err(ProtocolError::InvalidId { code: mgmt_code });
        }
        if !registry::check_reply(id, action) {
            return Err(ProtocolError::Action { id, action });
        }

        let entry = registry::entry(id);
        if entry.is_unsupported() {
            return Err(ProtocolError::Unsupport { id });
        }

        let data_len = length_field.checked_sub(2).ok_or(ProtocolError::TooSmall { needed: 2, available: length_field })?;
        if entry.codec_kind != registry::CodecKind::Empty && data_len > 0 && data_len % 2 != 0 {
            return Err(ProtocolError::TooSmall { needed: data_len + 1, available: data_len });
        }
        if buf.len() < MANAGEMENT_DATA_OFFSET + data_len {
            return Err(ProtocolError::TooSmall { needed: data_len, available: buf.len() - MANAGEMENT_DATA_OFFSET });
        }

        let payload = if data_len == 0 {
            None
        } else {
            let mut p = payload::TlvPayload::blank_for(id);
            let slice = &mut buf[MANAGEMENT_DATA_OFFSET..MANAGEMENT_DATA_OFFSET + data_len];
            let mut c = ByteCursor::for_parse(slice);
            tlv_codec::codec(&mut c, &mut p)?;
            Some(p)
        };

        self.last_id = Some(id);
        self.last_action = Some(action);
        self.last_payload = payload;
        Ok(())
    }

    fn parse_signaling_message(&mut self, buf: &mut [u8]) -> Result<(), ProtocolError> {
        let tlvs = signaling::walk(&mut buf[HEADER_LEN..], &self.params, None)?;
        let tlv_count = tlvs.len();
        self.signaling_tlvs = tlvs;
        Err(ProtocolError::Sig { tlv_count })
    }

    /// Parses `buf` as one PTP message (§4.E Parse pipeline). `Ok(())` is
    /// returned only for an ordinary management reply; `Msg`, `Sig`, and
    /// `Smpte` are returned as `Err` to signal "look at the fields this call
    /// populated on `self`", mirroring the source's result-code design.
    pub fn parse(&mut self, buf: &mut [u8]) -> Result<(), ProtocolError> {
        if buf.len() < HEADER_LEN {
            tracing::warn!("message too small: need {} bytes, got {}", HEADER_LEN, buf.len());
            return Err(ProtocolError::TooSmall { needed: HEADER_LEN, available: buf.len() });
        }
        let message_type = MessageType::try_from(buf[0] & 0x0f).map_err(|_| ProtocolError::Header { reason: "unknown message type" })?;
        let major_version = buf[1] & 0x0f;
        if major_version != MAJOR_VERSION {
            tracing::warn!("major version mismatch: got {}, expected {}", major_version, MAJOR_VERSION);
            return Err(ProtocolError::Header { reason: "major version mismatch" });
        }
        if buf[33] != LOG_MESSAGE_INTERVAL {
            tracing::warn!("log_message_interval mismatch: got {:#04x}", buf[33]);
            return Err(ProtocolError::Header { reason: "log_message_interval mismatch" });
        }
        tracing::debug!(?message_type, sequence_id = BigEndian::read_u16(&buf[30..32]), "parsing message");

        self.params.transport_specific = buf[0] >> 4;
        self.params.minor_version = buf[1] >> 4;
        self.params.domain_number = buf[4];
        self.params.is_unicast = buf[6] & 0x04 != 0;
        self.sequence_id = BigEndian::read_u16(&buf[30..32]);
        self.params.self_port_identity = read_port_identity(&buf[20..30]);
        self.params.target_port_identity = read_port_identity(&buf[34..44]);

        match message_type {
            MessageType::Management => self.parse_management(buf),
            MessageType::Signaling if self.params.receive_signaling => self.parse_signaling_message(buf),
            _ => Err(ProtocolError::Header { reason: "message type not accepted" }),
        }
    }

    /// Parses, then verifies a trailing authentication TLV against `body`
    /// (everything before the TLV). `spp`/`key_id`/`flags`/`icv` are the
    /// fields already decoded by the caller from the trailing bytes.
    pub fn verify_auth(&self, body: &[u8], spp: u8, flags: u8, key_id: u32, icv: &[u8], sa: &dyn SaStore) -> Result<(), ProtocolError> {
        auth::verify_auth_tlv(body, spp, flags, key_id, icv, sa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptpmgmt_types::payload::U8Field;

    fn hex_to_bytes(hex: &str) -> Vec<u8> {
        hex.split_whitespace().map(|b| u8::from_str_radix(b, 16).unwrap()).collect()
    }

    #[test]
    fn set_priority1_matches_seed_frame() {
        let mut msg = Message::new(MsgParams::default());
        msg.params.is_unicast = true;
        msg.sequence_id = 137;
        msg.set_action(Action::Set, ManagementId::Priority1, Some(TlvPayload::Priority1(U8Field { value: 0x7f }))).unwrap();

        let frame = msg.build().unwrap();
        let expected = hex_to_bytes(
            "0d 02 00 38 00 00 04 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 89 \
             04 7f ff ff ff ff ff ff ff ff ff ff 01 01 01 00 00 01 00 04 20 05 7f 00",
        );
        assert_eq!(frame, expected);
        assert_eq!(frame.len(), 56);
    }

    #[test]
    fn parse_reply_round_trips_set_priority1() {
        let mut build_msg = Message::new(MsgParams::default());
        build_msg.sequence_id = 1;
        build_msg
            .set_action(Action::Set, ManagementId::Priority1, Some(TlvPayload::Priority1(U8Field { value: 0x7f })))
            .unwrap();
        let mut frame = build_msg.build().unwrap();
        frame[46] = (frame[46] & 0xf0) | (Action::Response as u8 & 0x0f);

        let mut parse_msg = Message::new(MsgParams::default());
        parse_msg.parse(&mut frame).unwrap();
        assert_eq!(parse_msg.last_id, Some(ManagementId::Priority1));
        assert_eq!(parse_msg.last_payload, Some(TlvPayload::Priority1(U8Field { value: 0x7f })));
    }

    #[test]
    fn build_rejects_action_not_allowed_for_id() {
        let mut msg = Message::new(MsgParams::default());
        let err = msg.set_action(Action::Set, ManagementId::ClockDescription, None);
        assert!(matches!(err, Err(ProtocolError::InvalidId { .. })));
    }

    #[test]
    fn get_without_zero_get_pads_declared_size() {
        let params = MsgParams {
            use_zero_get: false,
            ..MsgParams::default()
        };
        let mut msg = Message::new(params);
        msg.set_action(Action::Get, ManagementId::Priority1, None).unwrap();

        let frame = msg.build().unwrap();
        // dataField is the entry's fixed size (2 bytes), zero-filled.
        assert_eq!(&frame[MANAGEMENT_DATA_OFFSET..], &[0u8, 0]);
        assert_eq!(frame.len(), MANAGEMENT_DATA_OFFSET + 2);
    }

    #[test]
    fn get_with_zero_get_sends_empty_data_field() {
        let mut msg = Message::new(MsgParams::default());
        msg.set_action(Action::Get, ManagementId::Priority1, None).unwrap();

        let frame = msg.build().unwrap();
        assert_eq!(frame.len(), MANAGEMENT_DATA_OFFSET);
    }

    #[test]
    fn clear_data_demotes_to_get() {
        let mut msg = Message::new(MsgParams::default());
        msg.set_action(Action::Command, ManagementId::Initialize, Some(TlvPayload::Initialize(ptpmgmt_types::payload::Initialize { initialization_key: 1 })))
            .unwrap();
        msg.clear_data();
        assert_eq!(msg.pending_action, Action::Get);
        assert!(msg.pending_payload.is_none());
    }
}
