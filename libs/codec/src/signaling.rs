//! Signaling TLV walker, §4.F: iterates a sequence of TLVs starting at the
//! fixed offset 44 until fewer than 4 bytes remain, filtering by the
//! session's allow-set.

use byteorder::{BigEndian, ByteOrder};

use ptpmgmt_types::{Binary, ClockIdentity, ManagementId, MsgParams, PortAddress, PtpText, TlvPayload, TlvType};

use crate::cursor::ByteCursor;
use crate::error::ProtocolError;
use crate::tlv_codec;

/// One signaling TLV, decoded to the depth described in §4.F. Types with no
/// dedicated shape here (`ENHANCED_ACCURACY_METRICS`, `L1_SYNC`,
/// `PORT_COMMUNICATION_AVAILABILITY`, the three `SLAVE_*` event-timestamp
/// TLVs, and the vendor `SLAVE_DELAY_TIMING_DATA_NP`) are carried as their
/// raw bytes rather than a dedicated struct.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedSignalingTlv {
    Management {
        id: ManagementId,
        payload: Option<TlvPayload>,
    },
    ManagementErrorStatus {
        err_id: u16,
        management_id: Option<ManagementId>,
        display: PtpText,
    },
    OrganizationExtension {
        organization_id: [u8; 3],
        organization_sub_type: [u8; 3],
        data: Binary,
    },
    PathTrace {
        path_sequence: Vec<ClockIdentity>,
    },
    AlternateTimeOffsetIndicator {
        key_field: u8,
        current_offset: i32,
        jump_seconds: i32,
        time_of_next_jump: u32,
        display_name: PtpText,
    },
    ProtocolAddress(PortAddress),
    CumulativeRateRatio {
        scaled_rate_offset: i32,
    },
    EnhancedAccuracyMetrics(Binary),
    L1Sync(Binary),
    PortCommunicationAvailability(Binary),
    SlaveRxSyncTimingData(Binary),
    SlaveRxSyncComputedData(Binary),
    SlaveTxEventTimestamps(Binary),
    SlaveDelayTimingDataNp(Binary),
}

fn decode_one(tlv_type: TlvType, body: &mut [u8], params: &MsgParams) -> Result<DecodedSignalingTlv, ProtocolError> {
    match tlv_type {
        TlvType::Management => {
            if body.len() < 2 {
                return Err(ProtocolError::TooSmall { needed: 2, available: body.len() });
            }
            let code = BigEndian::read_u16(&body[0..2]);
            let id = ManagementId::try_from(code).map_err(|_| ProtocolError::InvalidId { code })?;
            let data = &mut body[2..];
            let payload = if data.is_empty() {
                None
            } else {
                let mut p = TlvPayload::blank_for(id);
                let mut c = ByteCursor::for_parse(data);
                tlv_codec::codec(&mut c, &mut p)?;
                Some(p)
            };
            Ok(DecodedSignalingTlv::Management { id, payload })
        }
        TlvType::ManagementErrorStatus => {
            if body.len() < 4 {
                return Err(ProtocolError::TooSmall { needed: 4, available: body.len() });
            }
            let code = BigEndian::read_u16(&body[0..2]);
            let management_id = ManagementId::try_from(code).ok();
            let err_id = BigEndian::read_u16(&body[2..4]);
            let display = if body.len() > 4 {
                let mut c = ByteCursor::for_parse(&mut body[4..]);
                let mut bytes = Vec::new();
                c.ptp_text(&mut bytes)?;
                PtpText::new(bytes).unwrap_or_default()
            } else {
                PtpText::default()
            };
            Ok(DecodedSignalingTlv::ManagementErrorStatus { err_id, management_id, display })
        }
        TlvType::OrganizationExtension | TlvType::OrganizationExtensionPropagate | TlvType::OrganizationExtensionDoNotPropagate => {
            if body.len() < 6 {
                return Err(ProtocolError::TooSmall { needed: 6, available: body.len() });
            }
            let mut organization_id = [0u8; 3];
            organization_id.copy_from_slice(&body[0..3]);
            let mut organization_sub_type = [0u8; 3];
            organization_sub_type.copy_from_slice(&body[3..6]);
            Ok(DecodedSignalingTlv::OrganizationExtension {
                organization_id,
                organization_sub_type,
                data: Binary::new(body[6..].to_vec()),
            })
        }
        TlvType::PathTrace => {
            let mut path_sequence = Vec::new();
            let mut c = ByteCursor::for_parse(body);
            while c.remaining() >= ClockIdentity::size() {
                let mut id = ClockIdentity::default();
                let mut bytes = id.0.to_vec();
                c.bytes(&mut bytes, ClockIdentity::size())?;
                id.0.copy_from_slice(&bytes);
                path_sequence.push(id);
            }
            Ok(DecodedSignalingTlv::PathTrace { path_sequence })
        }
        TlvType::AlternateTimeOffsetIndicator => {
            if body.len() < 13 {
                return Err(ProtocolError::TooSmall { needed: 13, available: body.len() });
            }
            let key_field = body[0];
            let current_offset = BigEndian::read_i32(&body[1..5]);
            let jump_seconds = BigEndian::read_i32(&body[5..9]);
            let time_of_next_jump = BigEndian::read_u32(&body[9..13]);
            let display_name = if body.len() > 13 {
                let mut c = ByteCursor::for_parse(&mut body[13..]);
                let mut bytes = Vec::new();
                c.ptp_text(&mut bytes)?;
                PtpText::new(bytes).unwrap_or_default()
            } else {
                PtpText::default()
            };
            Ok(DecodedSignalingTlv::AlternateTimeOffsetIndicator {
                key_field,
                current_offset,
                jump_seconds,
                time_of_next_jump,
                display_name,
            })
        }
        TlvType::ProtocolAddress => {
            let mut c = ByteCursor::for_parse(body);
            let mut protocol = 1u16;
            c.u16(&mut protocol)?;
            let network_protocol = ptpmgmt_types::NetworkProtocol::try_from(protocol).map_err(|_| ProtocolError::Value {
                context: "network_protocol",
                value: protocol as i64,
            })?;
            let mut len = 0u16;
            c.u16(&mut len)?;
            let mut address = vec![0u8; len as usize];
            c.bytes(&mut address, len as usize)?;
            Ok(DecodedSignalingTlv::ProtocolAddress(PortAddress {
                network_protocol,
                address: Binary::new(address),
            }))
        }
        TlvType::CumulativeRateRatio => {
            if body.len() < 4 {
                return Err(ProtocolError::TooSmall { needed: 4, available: body.len() });
            }
            Ok(DecodedSignalingTlv::CumulativeRateRatio {
                scaled_rate_offset: BigEndian::read_i32(&body[0..4]),
            })
        }
        TlvType::EnhancedAccuracyMetrics => Ok(DecodedSignalingTlv::EnhancedAccuracyMetrics(Binary::new(body.to_vec()))),
        TlvType::L1Sync => Ok(DecodedSignalingTlv::L1Sync(Binary::new(body.to_vec()))),
        TlvType::PortCommunicationAvailability => Ok(DecodedSignalingTlv::PortCommunicationAvailability(Binary::new(body.to_vec()))),
        TlvType::SlaveRxSyncTimingData => Ok(DecodedSignalingTlv::SlaveRxSyncTimingData(Binary::new(body.to_vec()))),
        TlvType::SlaveRxSyncComputedData => Ok(DecodedSignalingTlv::SlaveRxSyncComputedData(Binary::new(body.to_vec()))),
        TlvType::SlaveTxEventTimestamps => Ok(DecodedSignalingTlv::SlaveTxEventTimestamps(Binary::new(body.to_vec()))),
        TlvType::SlaveDelayTimingDataNp if params.use_vendor => Ok(DecodedSignalingTlv::SlaveDelayTimingDataNp(Binary::new(body.to_vec()))),
        _ => Err(ProtocolError::InvalidTlv { tlv_type: 0 }),
    }
}

/// Walks `buf` as a sequence of signaling TLVs. Stops cleanly once fewer
/// than 4 bytes remain; an `Authentication` TLV type ends the walk
/// immediately (it belongs to §4.G, not the signaling sequence). `callback`,
/// when given, is invoked after each successfully decoded TLV and the walk
/// stops early the first time it returns `true`.
pub fn walk(
    buf: &mut [u8],
    params: &MsgParams,
    mut callback: Option<&mut dyn FnMut(TlvType, &DecodedSignalingTlv) -> bool>,
) -> Result<Vec<DecodedSignalingTlv>, ProtocolError> {
    let mut out = Vec::new();
    let mut offset = 0usize;

    while buf.len() - offset >= 4 {
        let tlv_type_code = BigEndian::read_u16(&buf[offset..offset + 2]);
        let length = BigEndian::read_u16(&buf[offset + 2..offset + 4]) as usize;
        let remaining_after_header = buf.len() - offset - 4;
        if length > remaining_after_header {
            return Err(ProtocolError::TooSmall {
                needed: length,
                available: remaining_after_header,
            });
        }

        if tlv_type_code == crate::auth::AUTHENTICATION_TLV_TYPE {
            break;
        }

        let body_start = offset + 4;
        let body_end = body_start + length;

        let Ok(tlv_type) = TlvType::try_from(tlv_type_code) else {
            offset = body_end;
            continue;
        };

        if params.filter_signaling && !params.is_sig_tlv(tlv_type) {
            offset = body_end;
            continue;
        }

        match decode_one(tlv_type, &mut buf[body_start..body_end], params) {
            Ok(decoded) => {
                let stop = callback.as_deref_mut().map(|cb| cb(tlv_type, &decoded)).unwrap_or(false);
                out.push(decoded);
                if stop {
                    break;
                }
            }
            Err(_) => {
                // Decode failures for a single TLV do not abort the rest of
                // the walk; the TLV is simply skipped.
            }
        }

        offset = body_end;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptpmgmt_types::MsgParams;

    fn tlv_header(tlv_type: u16, body: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(&tlv_type.to_be_bytes());
        v.extend_from_slice(&(body.len() as u16).to_be_bytes());
        v.extend_from_slice(body);
        v
    }

    #[test]
    fn filter_keeps_only_allowed_type() {
        let mut buf = Vec::new();
        buf.extend(tlv_header(TlvType::OrganizationExtension as u16, &[1, 2, 3, 4, 5, 6]));
        buf.extend(tlv_header(TlvType::Management as u16, &[0x20, 0x05, 0x7f, 0x00]));
        buf.extend(tlv_header(TlvType::PathTrace as u16, &[0u8; 8]));

        let mut params = MsgParams {
            filter_signaling: true,
            ..MsgParams::default()
        };
        params.allow_sig_tlv(TlvType::Management);

        let decoded = walk(&mut buf, &params, None).unwrap();
        assert_eq!(decoded.len(), 1);
        assert!(matches!(decoded[0], DecodedSignalingTlv::Management { id: ManagementId::Priority1, .. }));
    }

    #[test]
    fn walk_stops_before_authentication_tlv() {
        let mut buf = Vec::new();
        buf.extend(tlv_header(TlvType::PathTrace as u16, &[0u8; 8]));
        buf.extend(tlv_header(crate::auth::AUTHENTICATION_TLV_TYPE, &[9, 9, 9, 9]));

        let params = MsgParams::default();
        let decoded = walk(&mut buf, &params, None).unwrap();
        assert_eq!(decoded.len(), 1);
    }
}
