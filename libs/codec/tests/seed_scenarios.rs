//! Concrete seed scenarios from the management-message byte layout and TLV
//! catalog, exercised directly against the TLV codec rather than a full
//! built frame where the scenario concerns a single TLV's internal shape.

use ptpmgmt_types::payload::{AcceptableMaster, AcceptableMasterTable, FaultLog, FaultRecord, FlagByte, GrandmasterClusterTable, PathTraceList, PortStatsNp, SubscribeEventsNp};
use ptpmgmt_types::{
    Binary, ClockIdentity, FaultSeverity, NetworkProtocol, PortAddress, PortIdentity, PtpText, Timestamp, TlvPayload,
};

use ptpmgmt_codec::error::ProtocolError;

fn try_build_payload_sized(payload: &mut TlvPayload, buf_size: usize) -> Result<(), ProtocolError> {
    let mut buf = vec![0u8; buf_size];
    let mut c = ByteCursor::for_build(&mut buf);
    tlv_codec::codec(&mut c, payload)
}

use ptpmgmt_codec::cursor::ByteCursor;
use ptpmgmt_codec::tlv_codec;

fn build_payload(payload: &mut TlvPayload) -> Vec<u8> {
    let mut buf = vec![0u8; 512];
    let mut c = ByteCursor::for_build(&mut buf);
    tlv_codec::codec(&mut c, payload).unwrap();
    let len = c.position();
    buf.truncate(len);
    buf
}

fn parse_payload(buf: &mut [u8], payload: &mut TlvPayload) {
    let mut c = ByteCursor::for_parse(buf);
    tlv_codec::codec(&mut c, payload).unwrap();
}

/// Two fault records with lengths 50 and 55: 2 (count) + 50 + 55 = 107
/// bytes, one short of an even TLV dataField — the caller's even-length pad
/// supplies the 108th byte.
#[test]
fn fault_log_two_records_round_trips() {
    let record0 = FaultRecord {
        length: 0,
        fault_time: Timestamp {
            secs: 9,
            nanos: 709_000,
        },
        severity: FaultSeverity::Notice,
        name: PtpText::new(b"abcd".to_vec()).unwrap(),
        value: PtpText::new(b"0123456789".to_vec()).unwrap(),
        description: PtpText::new(vec![b'x'; 20]).unwrap(),
    };
    assert_eq!(record0.computed_length(), 50);

    let record1 = FaultRecord {
        length: 0,
        fault_time: Timestamp { secs: 20, nanos: 0 },
        severity: FaultSeverity::Warning,
        name: PtpText::new(b"abcd".to_vec()).unwrap(),
        value: PtpText::new(vec![b'y'; 15]).unwrap(),
        description: PtpText::new(vec![b'z'; 20]).unwrap(),
    };
    assert_eq!(record1.computed_length(), 55);

    let mut built = TlvPayload::FaultLog(FaultLog {
        records: vec![record0, record1],
    });
    let mut bytes = build_payload(&mut built);
    assert_eq!(bytes.len(), 107);
    bytes.push(0); // caller-supplied even-length pad, as for the outer frame

    let mut parsed = TlvPayload::FaultLog(FaultLog { records: Vec::new() });
    parse_payload(&mut bytes[..107], &mut parsed);
    let TlvPayload::FaultLog(log) = &parsed else { panic!("wrong variant") };
    assert_eq!(log.records.len(), 2);
    assert!((log.records[0].fault_time.secs as f64 + log.records[0].fault_time.nanos as f64 / 1e9 - 9.000709).abs() < 1e-6);
    assert_eq!(log.records[1].severity, FaultSeverity::Warning);

    let re_encoded = build_payload(&mut parsed);
    assert_eq!(re_encoded, bytes[..107]);
}

/// Only `tx[STAT_PDELAY_REQ]` is non-zero, at 63346 — its 8-byte
/// little-endian encoding starts 16 bytes after the port identity (the 16
/// preceding rx counters), so bytes 16 and 17 of that run are `72 f7`.
#[test]
fn port_stats_np_tx_counter_is_little_endian() {
    let mut payload = TlvPayload::PortStatsNp(PortStatsNp {
        port_identity: PortIdentity {
            clock_identity: ClockIdentity([1, 2, 3, 4, 5, 6, 7, 8]),
            port_number: 1,
        },
        rx_msg_type: [0; 16],
        tx_msg_type: {
            let mut tx = [0u64; 16];
            tx[ptpmgmt_types::payload::STAT_PDELAY_REQ] = 63346;
            tx
        },
    });
    let bytes = build_payload(&mut payload);

    let counters_start = PortIdentity::size() + 16 * 8;
    assert_eq!(&bytes[counters_start + 16..counters_start + 18], &[0x72, 0xf7]);

    let mut parsed = TlvPayload::PortStatsNp(PortStatsNp {
        port_identity: PortIdentity::default(),
        rx_msg_type: [0; 16],
        tx_msg_type: [0; 16],
    });
    let mut round = bytes.clone();
    parse_payload(&mut round, &mut parsed);
    assert_eq!(parsed, payload);
}

/// `NOTIFY_PORT_STATE | NOTIFY_TIME_SYNC | NOTIFY_PARENT_DATA_SET |
/// NOTIFY_CMLDS` set bits 0-3 of the bitmap's first byte.
#[test]
fn subscribe_events_np_bitmap_build() {
    let mut np = SubscribeEventsNp {
        duration: 0x1234,
        bitmask: [0; 64],
    };
    np.set_event(ptpmgmt_types::payload::NOTIFY_PORT_STATE);
    np.set_event(ptpmgmt_types::payload::NOTIFY_TIME_SYNC);
    np.set_event(ptpmgmt_types::payload::NOTIFY_PARENT_DATA_SET);
    np.set_event(ptpmgmt_types::payload::NOTIFY_CMLDS);

    let mut payload = TlvPayload::SubscribeEventsNp(np);
    let bytes = build_payload(&mut payload);
    assert_eq!(bytes[0..2], [0x12, 0x34]);
    assert_eq!(bytes[2], 0x0f);
}

/// 16 bytes of list payload decode to two `ClockIdentity` entries; 17 bytes
/// still decode the same two entries and leave the trailing byte unconsumed
/// (the countless-list parse stops once fewer than 8 bytes remain).
#[test]
fn path_trace_list_countless_parse() {
    let ids = [ClockIdentity([1; 8]), ClockIdentity([2; 8])];
    let mut bytes = Vec::new();
    for id in &ids {
        bytes.extend_from_slice(&id.0);
    }
    assert_eq!(bytes.len(), 16);

    let mut parsed = TlvPayload::PathTraceList(PathTraceList { path_sequence: Vec::new() });
    let mut buf = bytes.clone();
    parse_payload(&mut buf, &mut parsed);
    let TlvPayload::PathTraceList(list) = &parsed else { panic!("wrong variant") };
    assert_eq!(list.path_sequence, ids);

    let mut odd = bytes.clone();
    odd.push(0xff);
    assert_eq!(odd.len(), 17);
    let mut parsed_odd = TlvPayload::PathTraceList(PathTraceList { path_sequence: Vec::new() });
    parse_payload(&mut odd, &mut parsed_odd);
    let TlvPayload::PathTraceList(list_odd) = &parsed_odd else { panic!("wrong variant") };
    assert_eq!(list_odd.path_sequence, ids);
}

/// Same shape as `UnicastMasterTable` but with a `u8` table size: the
/// leading `log_query_interval` byte must not be confused with the size
/// field that follows it.
#[test]
fn grandmaster_cluster_table_keeps_log_query_interval_separate_from_size() {
    let mut payload = TlvPayload::GrandmasterClusterTable(GrandmasterClusterTable {
        log_query_interval: -5,
        actual_table_size: 0,
        list: vec![PortAddress {
            network_protocol: NetworkProtocol::UdpIpV4,
            address: Binary::new(vec![192, 168, 1, 1]),
        }],
    });
    let bytes = build_payload(&mut payload);
    assert_eq!(bytes[0] as i8, -5);
    assert_eq!(bytes[1], 1);

    let mut parsed = TlvPayload::GrandmasterClusterTable(GrandmasterClusterTable {
        log_query_interval: 0,
        actual_table_size: 0,
        list: Vec::new(),
    });
    let mut round = bytes.clone();
    parse_payload(&mut round, &mut parsed);
    let TlvPayload::GrandmasterClusterTable(table) = &parsed else { panic!("wrong variant") };
    assert_eq!(table.log_query_interval, -5);
    assert_eq!(table.actual_table_size, 1);
    assert_eq!(table.list.len(), 1);
}

/// `SlaveOnly`'s single-bit flag must encode only that bit, not "any bit
/// set" — an unrelated high bit must not turn the wire flag on.
#[test]
fn slave_only_flag_ignores_unrelated_bits() {
    let mut payload = TlvPayload::SlaveOnly(FlagByte { flags: 0x02 });
    let bytes = build_payload(&mut payload);
    assert_eq!(bytes[0], 0);

    let mut payload_set = TlvPayload::SlaveOnly(FlagByte { flags: 0x01 });
    let bytes_set = build_payload(&mut payload_set);
    assert_eq!(bytes_set[0], 0x01);
}

/// A `PortAddress` longer than the wire's `u16` length field must be
/// rejected up front rather than silently truncated into a mismatched copy.
#[test]
fn port_address_over_u16_max_is_rejected() {
    let mut payload = TlvPayload::GrandmasterClusterTable(GrandmasterClusterTable {
        log_query_interval: 0,
        actual_table_size: 0,
        list: vec![PortAddress {
            network_protocol: NetworkProtocol::UdpIpV4,
            address: Binary::new(vec![0u8; u16::MAX as usize + 1]),
        }],
    });
    let err = try_build_payload_sized(&mut payload, 80_000);
    assert!(matches!(err, Err(ProtocolError::Value { .. })));
}

/// An `AcceptableMasterTable` list longer than `i16::MAX` must be rejected
/// rather than silently wrapping the wire size field negative.
#[test]
fn acceptable_master_table_over_i16_max_is_rejected() {
    let mut payload = TlvPayload::AcceptableMasterTable(AcceptableMasterTable {
        actual_table_size: 0,
        list: vec![
            AcceptableMaster {
                acceptable_port_identity: PortIdentity::default(),
                alternate_priority1: 0,
            };
            i16::MAX as usize + 1
        ],
    });
    let err = try_build_payload_sized(&mut payload, 500_000);
    assert!(matches!(err, Err(ProtocolError::Value { .. })));
}
