//! Property-based coverage for the invariants in the testable-properties
//! catalog: fixed-size TLV round-trips, the even-length build invariant,
//! 48-bit packing limits, and the SET action/registry cross-check.

use proptest::prelude::*;

use ptpmgmt_types::payload::{DefaultDataSet, PortStatsNp, U8Field};
use ptpmgmt_types::{Action, ClockAccuracy, ClockIdentity, ClockQuality, ManagementId, PortIdentity, TlvPayload};

use ptpmgmt_codec::cursor::ByteCursor;
use ptpmgmt_codec::envelope::Message;
use ptpmgmt_codec::error::ProtocolError;
use ptpmgmt_codec::tlv_codec;

fn round_trip(mut payload: TlvPayload) -> TlvPayload {
    let mut buf = vec![0u8; 512];
    let len = {
        let mut c = ByteCursor::for_build(&mut buf);
        tlv_codec::codec(&mut c, &mut payload).unwrap();
        c.position()
    };
    let mut parsed = payload.clone();
    {
        let mut c = ByteCursor::for_parse(&mut buf[..len]);
        tlv_codec::codec(&mut c, &mut parsed).unwrap();
    }
    parsed
}

proptest! {
    #[test]
    fn priority1_round_trips(value in any::<u8>()) {
        let payload = TlvPayload::Priority1(U8Field { value });
        prop_assert_eq!(round_trip(payload.clone()), payload);
    }

    #[test]
    fn default_data_set_round_trips(
        two_step_flag in any::<bool>(),
        slave_only in any::<bool>(),
        number_ports in any::<u16>(),
        priority1 in any::<u8>(),
        priority2 in any::<u8>(),
        clock_identity_bytes in any::<[u8; 8]>(),
        domain_number in any::<u8>(),
    ) {
        let payload = TlvPayload::DefaultDataSet(DefaultDataSet {
            two_step_flag,
            slave_only,
            number_ports,
            priority1,
            clock_quality: ClockQuality {
                clock_class: 0,
                clock_accuracy: ClockAccuracy::Unknown,
                offset_scaled_log_variance: 0,
            },
            priority2,
            clock_identity: ClockIdentity(clock_identity_bytes),
            domain_number,
        });
        prop_assert_eq!(round_trip(payload.clone()), payload);
    }

    /// The 32 `PortStatsNp` counters round-trip through their documented
    /// little-endian encoding regardless of value.
    #[test]
    fn port_stats_np_round_trips(rx in any::<[u64; 16]>(), tx in any::<[u64; 16]>()) {
        let payload = TlvPayload::PortStatsNp(PortStatsNp {
            port_identity: PortIdentity { clock_identity: ClockIdentity([9; 8]), port_number: 3 },
            rx_msg_type: rx,
            tx_msg_type: tx,
        });
        prop_assert_eq!(round_trip(payload.clone()), payload);
    }

    /// Any built frame has an even total length, and `message_length`
    /// matches the frame's actual byte count.
    #[test]
    fn built_frame_is_even_length(value in any::<u8>(), sequence_id in any::<u16>()) {
        let mut msg = Message::new(ptpmgmt_types::MsgParams::default());
        msg.sequence_id = sequence_id;
        msg.set_action(Action::Set, ManagementId::Priority1, Some(TlvPayload::Priority1(U8Field { value }))).unwrap();
        let frame = msg.build().unwrap();
        prop_assert_eq!(frame.len() % 2, 0);
        let declared = u16::from_be_bytes([frame[2], frame[3]]) as usize;
        prop_assert_eq!(declared, frame.len());
    }

    /// `u48` build rejects any value at or above 2^48, and round-trips
    /// every value below it.
    #[test]
    fn u48_packing_limit(v in 0u64..(1u64 << 48)) {
        let mut buf = [0u8; 6];
        {
            let mut c = ByteCursor::for_build(&mut buf);
            let mut value = v;
            c.u48(&mut value).unwrap();
        }
        let mut out = 0u64;
        let mut c = ByteCursor::for_parse(&mut buf);
        c.u48(&mut out).unwrap();
        prop_assert_eq!(out, v);
    }
}

#[test]
fn u48_packing_rejects_overflow() {
    let mut buf = [0u8; 6];
    let mut c = ByteCursor::for_build(&mut buf);
    let mut value = 1u64 << 48;
    assert!(matches!(c.u48(&mut value), Err(ProtocolError::Value { .. })));
}

/// `ClockDescription` is not SET-able (registry scope is read-only), so
/// building it with SET must fail with `InvalidId`.
#[test]
fn set_action_rejects_disallowed_id() {
    let mut msg = Message::new(ptpmgmt_types::MsgParams::default());
    let err = msg.set_action(Action::Set, ManagementId::ClockDescription, None);
    assert!(matches!(err, Err(ProtocolError::InvalidId { .. })));
}
