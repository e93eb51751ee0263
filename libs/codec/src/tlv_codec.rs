//! TLV codec, §4.D: one bidirectional routine per management id. Each match
//! arm walks its payload's fields in wire order using the same `ByteCursor`
//! whether building or parsing — the direction only changes whether a field
//! is read from or written to the buffer.

use ptpmgmt_types::payload::{AcceptableMaster, FaultRecord};
use ptpmgmt_types::*;

use crate::cursor::ByteCursor;
use crate::error::ProtocolError;

fn flag_byte(c: &mut ByteCursor, flags: &mut u8, mask: u8) -> Result<(), ProtocolError> {
    let mut wire = if c.is_build() { *flags & mask } else { 0 };
    c.u8(&mut wire)?;
    if !c.is_build() {
        *flags = wire & mask;
    }
    let mut reserved = 0u8;
    c.u8(&mut reserved)?;
    Ok(())
}

fn reserved_u8(c: &mut ByteCursor) -> Result<(), ProtocolError> {
    let mut r = 0u8;
    c.u8(&mut r)
}

fn clock_identity(c: &mut ByteCursor, id: &mut ClockIdentity) -> Result<(), ProtocolError> {
    let mut bytes = id.0.to_vec();
    c.bytes(&mut bytes, 8)?;
    if !c.is_build() {
        id.0.copy_from_slice(&bytes);
    }
    Ok(())
}

fn port_identity(c: &mut ByteCursor, pid: &mut PortIdentity) -> Result<(), ProtocolError> {
    clock_identity(c, &mut pid.clock_identity)?;
    c.u16(&mut pid.port_number)
}

fn time_interval(c: &mut ByteCursor, t: &mut TimeInterval) -> Result<(), ProtocolError> {
    c.i64(&mut t.scaled_nanoseconds)
}

fn timestamp(c: &mut ByteCursor, t: &mut Timestamp) -> Result<(), ProtocolError> {
    c.u48(&mut t.secs)?;
    c.u32(&mut t.nanos)
}

fn clock_quality(c: &mut ByteCursor, q: &mut ClockQuality) -> Result<(), ProtocolError> {
    c.u8(&mut q.clock_class)?;
    let mut acc = q.clock_accuracy as u8;
    c.u8(&mut acc)?;
    if !c.is_build() {
        q.clock_accuracy = ClockAccuracy::try_from(acc).map_err(|_| ProtocolError::Value {
            context: "clock_accuracy",
            value: acc as i64,
        })?;
    }
    c.u16(&mut q.offset_scaled_log_variance)
}

fn ptp_text(c: &mut ByteCursor, text: &mut PtpText) -> Result<(), ProtocolError> {
    let mut bytes = text.as_bytes().to_vec();
    c.ptp_text(&mut bytes)?;
    if !c.is_build() {
        *text = PtpText::new(bytes).map_err(|_| ProtocolError::Value {
            context: "ptp_text",
            value: 0,
        })?;
    }
    Ok(())
}

fn port_address(c: &mut ByteCursor, addr: &mut PortAddress) -> Result<(), ProtocolError> {
    let mut proto = addr.network_protocol as u16;
    c.u16(&mut proto)?;
    if !c.is_build() {
        addr.network_protocol = NetworkProtocol::try_from(proto).map_err(|_| ProtocolError::Value {
            context: "network_protocol",
            value: proto as i64,
        })?;
    }
    if c.is_build() && addr.address.len() > u16::MAX as usize {
        return Err(ProtocolError::Value { context: "port_address length", value: addr.address.len() as i64 });
    }
    let mut len = addr.address.len() as u16;
    c.u16(&mut len)?;
    let mut bytes = addr.address.as_slice().to_vec();
    c.bytes(&mut bytes, len as usize)?;
    if !c.is_build() {
        addr.address = Binary::new(bytes);
    }
    Ok(())
}

fn acceptable_master(c: &mut ByteCursor, m: &mut AcceptableMaster) -> Result<(), ProtocolError> {
    port_identity(c, &mut m.acceptable_port_identity)?;
    c.u8(&mut m.alternate_priority1)
}

/// Dispatches a build or parse of `payload`'s fields through `cursor`. The
/// caller is responsible for constructing a blank payload of the correct
/// variant before calling this in parse mode (the dispatch façade, §4.H,
/// does this from the registry's `ManagementId`).
pub fn codec(cursor: &mut ByteCursor, payload: &mut TlvPayload) -> Result<(), ProtocolError> {
    match payload {
        TlvPayload::Empty => Ok(()),

        TlvPayload::ClockDescription(d) => {
            cursor.u16(&mut d.clock_type)?;
            ptp_text(cursor, &mut d.physical_layer_protocol)?;
            let mut addr_len = d.physical_address.len() as u16;
            cursor.u16(&mut addr_len)?;
            let mut addr_bytes = d.physical_address.as_slice().to_vec();
            cursor.bytes(&mut addr_bytes, addr_len as usize)?;
            if !cursor.is_build() {
                d.physical_address = Binary::new(addr_bytes);
            }
            port_address(cursor, &mut d.protocol_address)?;
            let mut manuf = d.manufacturer_identity.to_vec();
            cursor.bytes(&mut manuf, 3)?;
            if !cursor.is_build() {
                d.manufacturer_identity.copy_from_slice(&manuf);
            }
            ptp_text(cursor, &mut d.product_description)?;
            ptp_text(cursor, &mut d.revision_data)?;
            ptp_text(cursor, &mut d.user_description)?;
            let mut profile = d.profile_identity.to_vec();
            cursor.bytes(&mut profile, 6)?;
            if !cursor.is_build() {
                d.profile_identity.copy_from_slice(&profile);
            }
            Ok(())
        }

        TlvPayload::UserDescription(d) => ptp_text(cursor, &mut d.user_description),

        TlvPayload::Initialize(d) => cursor.u16(&mut d.initialization_key),

        TlvPayload::FaultLog(d) => {
            let mut count = d.records.len() as u16;
            cursor.u16(&mut count)?;
            if !cursor.is_build() {
                d.records = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    d.records.push(FaultRecord {
                        length: 0,
                        fault_time: Timestamp::default(),
                        severity: FaultSeverity::Info,
                        name: PtpText::default(),
                        value: PtpText::default(),
                        description: PtpText::default(),
                    });
                }
            }
            for r in d.records.iter_mut() {
                let mut length = r.computed_length();
                cursor.u16(&mut length)?;
                timestamp(cursor, &mut r.fault_time)?;
                let mut sev = r.severity as u8;
                cursor.u8(&mut sev)?;
                if !cursor.is_build() {
                    r.severity = FaultSeverity::try_from(sev).map_err(|_| ProtocolError::Value {
                        context: "fault_severity",
                        value: sev as i64,
                    })?;
                }
                ptp_text(cursor, &mut r.name)?;
                ptp_text(cursor, &mut r.value)?;
                ptp_text(cursor, &mut r.description)?;
                if !cursor.is_build() {
                    r.length = length;
                    if r.length != r.computed_length() {
                        return Err(ProtocolError::SizeMismatch {
                            field: "FaultRecord.length",
                            declared: r.length as usize,
                            actual: r.computed_length() as usize,
                        });
                    }
                }
            }
            Ok(())
        }

        TlvPayload::DefaultDataSet(d) => {
            let mut flags = (d.two_step_flag as u8) | ((d.slave_only as u8) << 1);
            cursor.u8(&mut flags)?;
            if !cursor.is_build() {
                d.two_step_flag = flags & 1 != 0;
                d.slave_only = flags & 2 != 0;
            }
            reserved_u8(cursor)?;
            cursor.u16(&mut d.number_ports)?;
            cursor.u8(&mut d.priority1)?;
            clock_quality(cursor, &mut d.clock_quality)?;
            cursor.u8(&mut d.priority2)?;
            clock_identity(cursor, &mut d.clock_identity)?;
            cursor.u8(&mut d.domain_number)?;
            reserved_u8(cursor)
        }

        TlvPayload::CurrentDataSet(d) => {
            cursor.u16(&mut d.steps_removed)?;
            time_interval(cursor, &mut d.offset_from_master)?;
            time_interval(cursor, &mut d.mean_path_delay)
        }

        TlvPayload::ParentDataSet(d) => {
            port_identity(cursor, &mut d.parent_port_identity)?;
            cursor.u8(&mut d.parent_stats)?;
            reserved_u8(cursor)?;
            cursor.u16(&mut d.observed_parent_offset_scaled_log_variance)?;
            cursor.i32(&mut d.observed_parent_clock_phase_change_rate)?;
            cursor.u8(&mut d.grandmaster_priority1)?;
            clock_quality(cursor, &mut d.grandmaster_clock_quality)?;
            cursor.u8(&mut d.grandmaster_priority2)?;
            clock_identity(cursor, &mut d.grandmaster_identity)
        }

        TlvPayload::TimePropertiesDataSet(d) => {
            cursor.i16(&mut d.current_utc_offset)?;
            cursor.u8(&mut d.flags)?;
            let mut ts = d.time_source as u8;
            cursor.u8(&mut ts)?;
            if !cursor.is_build() {
                d.time_source = TimeSource::try_from(ts).map_err(|_| ProtocolError::Value {
                    context: "time_source",
                    value: ts as i64,
                })?;
            }
            Ok(())
        }

        TlvPayload::PortDataSet(d) => {
            port_identity(cursor, &mut d.port_identity)?;
            let mut state = d.port_state as u8;
            cursor.u8(&mut state)?;
            if !cursor.is_build() {
                d.port_state = PortState::try_from(state).map_err(|_| ProtocolError::Value {
                    context: "port_state",
                    value: state as i64,
                })?;
            }
            cursor.i8(&mut d.log_min_delay_req_interval)?;
            time_interval(cursor, &mut d.peer_mean_path_delay)?;
            cursor.i8(&mut d.log_announce_interval)?;
            cursor.u8(&mut d.announce_receipt_timeout)?;
            cursor.i8(&mut d.log_sync_interval)?;
            let mut dm = d.delay_mechanism as u8;
            cursor.u8(&mut dm)?;
            if !cursor.is_build() {
                d.delay_mechanism = DelayMechanism::try_from(dm).map_err(|_| ProtocolError::Value {
                    context: "delay_mechanism",
                    value: dm as i64,
                })?;
            }
            cursor.i8(&mut d.log_min_pdelay_req_interval)?;
            cursor.u8(&mut d.version_number)
        }

        TlvPayload::Priority1(d) | TlvPayload::Priority2(d) | TlvPayload::Domain(d) | TlvPayload::AnnounceReceiptTimeout(d) | TlvPayload::PrimaryDomain(d) | TlvPayload::VersionNumber(d) => {
            cursor.u8(&mut d.value)?;
            reserved_u8(cursor)
        }

        TlvPayload::SlaveOnly(d) => flag_byte(cursor, &mut d.flags, 1),

        TlvPayload::LogAnnounceInterval(d) | TlvPayload::LogSyncInterval(d) | TlvPayload::LogMinPdelayReqInterval(d) => {
            cursor.i8(&mut d.value)?;
            reserved_u8(cursor)
        }

        TlvPayload::Time(d) => timestamp(cursor, &mut d.origin_timestamp),

        TlvPayload::ClockAccuracy(d) => {
            let mut acc = d.clock_accuracy as u8;
            cursor.u8(&mut acc)?;
            if !cursor.is_build() {
                d.clock_accuracy = ClockAccuracy::try_from(acc).map_err(|_| ProtocolError::Value {
                    context: "clock_accuracy",
                    value: acc as i64,
                })?;
            }
            reserved_u8(cursor)
        }

        TlvPayload::UtcProperties(d) => {
            cursor.i16(&mut d.current_utc_offset)?;
            cursor.u8(&mut d.flags)?;
            reserved_u8(cursor)
        }

        TlvPayload::TraceabilityProperties(d)
        | TlvPayload::TimescaleProperties(d)
        | TlvPayload::UnicastNegotiationEnable(d)
        | TlvPayload::PathTraceEnable(d)
        | TlvPayload::AcceptableMasterTableEnabled(d)
        | TlvPayload::ExternalPortConfigurationEnabled(d)
        | TlvPayload::MasterOnly(d)
        | TlvPayload::HoldoverUpgradeEnable(d)
        | TlvPayload::ExtPortConfigPortDataSet(d)
        | TlvPayload::SynchronizationUncertainNp(d) => flag_byte(cursor, &mut d.flags, 0xff),

        TlvPayload::PathTraceList(d) => {
            if cursor.is_build() {
                for id in d.path_sequence.iter_mut() {
                    clock_identity(cursor, id)?;
                }
            } else {
                d.path_sequence.clear();
                while cursor.remaining() >= ClockIdentity::size() {
                    let mut id = ClockIdentity::default();
                    clock_identity(cursor, &mut id)?;
                    d.path_sequence.push(id);
                }
            }
            Ok(())
        }

        TlvPayload::GrandmasterClusterTable(d) => {
            cursor.i8(&mut d.log_query_interval)?;
            let mut size = d.list.len() as u8;
            cursor.u8(&mut size)?;
            if !cursor.is_build() {
                d.actual_table_size = size;
                d.list = Vec::with_capacity(size as usize);
                for _ in 0..size {
                    d.list.push(PortAddress {
                        network_protocol: NetworkProtocol::UdpIpV4,
                        address: Binary::default(),
                    });
                }
            } else {
                d.actual_table_size = size;
            }
            for addr in d.list.iter_mut() {
                port_address(cursor, addr)?;
            }
            Ok(())
        }

        TlvPayload::UnicastMasterTable(d) => {
            cursor.i8(&mut d.log_query_interval)?;
            let mut size = d.list.len() as u16;
            cursor.u16(&mut size)?;
            if !cursor.is_build() {
                d.actual_table_size = size;
                d.list = Vec::with_capacity(size as usize);
                for _ in 0..size {
                    d.list.push(PortAddress {
                        network_protocol: NetworkProtocol::UdpIpV4,
                        address: Binary::default(),
                    });
                }
            } else {
                d.actual_table_size = size;
            }
            for addr in d.list.iter_mut() {
                port_address(cursor, addr)?;
            }
            Ok(())
        }

        TlvPayload::UnicastMasterMaxTableSize(d) | TlvPayload::AcceptableMasterMaxTableSize(d) => {
            cursor.u16(&mut d.value)
        }

        TlvPayload::AcceptableMasterTable(d) => {
            if cursor.is_build() && d.list.len() > i16::MAX as usize {
                return Err(ProtocolError::Value { context: "acceptable_master_table length", value: d.list.len() as i64 });
            }
            let mut size = d.list.len() as i16;
            cursor.i16(&mut size)?;
            if !cursor.is_build() {
                d.actual_table_size = size;
                d.list = vec![
                    AcceptableMaster {
                        acceptable_port_identity: PortIdentity::default(),
                        alternate_priority1: 0,
                    };
                    size.max(0) as usize
                ];
            } else {
                d.actual_table_size = size;
            }
            for m in d.list.iter_mut() {
                acceptable_master(cursor, m)?;
            }
            Ok(())
        }

        TlvPayload::AlternateMaster(d) => {
            cursor.u8(&mut d.flags)?;
            cursor.i8(&mut d.log_alternate_multicast_sync_interval)?;
            cursor.u8(&mut d.number_of_alternate_masters)?;
            reserved_u8(cursor)
        }

        TlvPayload::AlternateTimeOffsetEnable(d) => {
            cursor.u8(&mut d.key_field)?;
            cursor.u8(&mut d.flags)
        }

        TlvPayload::AlternateTimeOffsetName(d) => {
            cursor.u8(&mut d.key_field)?;
            ptp_text(cursor, &mut d.display_name)
        }

        TlvPayload::AlternateTimeOffsetMaxKey(d) => {
            cursor.u8(&mut d.max_key)?;
            reserved_u8(cursor)
        }

        TlvPayload::AlternateTimeOffsetProperties(d) => {
            cursor.u8(&mut d.key_field)?;
            reserved_u8(cursor)?;
            reserved_u8(cursor)?;
            reserved_u8(cursor)?;
            cursor.i32(&mut d.current_offset)?;
            cursor.i32(&mut d.jump_seconds)?;
            cursor.u32(&mut d.time_of_next_jump)
        }

        TlvPayload::TransparentClockDefaultDataSet(d) => {
            clock_identity(cursor, &mut d.clock_identity)?;
            cursor.u16(&mut d.number_ports)?;
            let mut dm = d.delay_mechanism as u8;
            cursor.u8(&mut dm)?;
            if !cursor.is_build() {
                d.delay_mechanism = DelayMechanism::try_from(dm).map_err(|_| ProtocolError::Value {
                    context: "delay_mechanism",
                    value: dm as i64,
                })?;
            }
            cursor.u8(&mut d.primary_domain)
        }

        TlvPayload::TransparentClockPortDataSet(d) => {
            port_identity(cursor, &mut d.port_identity)?;
            cursor.i8(&mut d.log_min_pdelay_req_interval)?;
            reserved_u8(cursor)?;
            time_interval(cursor, &mut d.peer_mean_path_delay)
        }

        TlvPayload::DelayMechanism(d) => {
            let mut dm = d.delay_mechanism as u8;
            cursor.u8(&mut dm)?;
            if !cursor.is_build() {
                d.delay_mechanism = DelayMechanism::try_from(dm).map_err(|_| ProtocolError::Value {
                    context: "delay_mechanism",
                    value: dm as i64,
                })?;
            }
            reserved_u8(cursor)
        }

        TlvPayload::TimeStatusNp(d) => {
            cursor.i64(&mut d.master_offset)?;
            cursor.i64(&mut d.ingress_time)?;
            cursor.i32(&mut d.cumulative_scaled_rate_offset)?;
            cursor.i32(&mut d.scaled_last_gm_phase_change)?;
            cursor.u16(&mut d.gm_time_base_indicator)?;
            let mut last_gm = d.last_gm_phase_change.to_vec();
            cursor.bytes(&mut last_gm, 12)?;
            if !cursor.is_build() {
                d.last_gm_phase_change.copy_from_slice(&last_gm);
            }
            cursor.i32(&mut d.gm_present)?;
            clock_identity(cursor, &mut d.gm_identity)
        }

        TlvPayload::GrandmasterSettingsNp(d) => {
            clock_quality(cursor, &mut d.clock_quality)?;
            cursor.i16(&mut d.utc_offset)?;
            cursor.u8(&mut d.time_flags)?;
            let mut ts = d.time_source as u8;
            cursor.u8(&mut ts)?;
            if !cursor.is_build() {
                d.time_source = TimeSource::try_from(ts).map_err(|_| ProtocolError::Value {
                    context: "time_source",
                    value: ts as i64,
                })?;
            }
            Ok(())
        }

        TlvPayload::PortDataSetNp(d) => {
            cursor.u32(&mut d.neighbor_prop_delay_thresh)?;
            cursor.i32(&mut d.as_capable)
        }

        TlvPayload::SubscribeEventsNp(d) => {
            cursor.u16(&mut d.duration)?;
            let mut bitmask = d.bitmask.to_vec();
            cursor.bytes(&mut bitmask, 64)?;
            if !cursor.is_build() {
                d.bitmask.copy_from_slice(&bitmask);
            }
            Ok(())
        }

        TlvPayload::PortPropertiesNp(d) => {
            port_identity(cursor, &mut d.port_identity)?;
            let mut state = d.port_state as u8;
            cursor.u8(&mut state)?;
            if !cursor.is_build() {
                d.port_state = PortState::try_from(state).map_err(|_| ProtocolError::Value {
                    context: "port_state",
                    value: state as i64,
                })?;
            }
            cursor.u8(&mut d.timestamping)?;
            ptp_text(cursor, &mut d.interface)
        }

        TlvPayload::PortStatsNp(d) => {
            port_identity(cursor, &mut d.port_identity)?;
            for counter in d.rx_msg_type.iter_mut() {
                cursor.u64_le(counter)?;
            }
            for counter in d.tx_msg_type.iter_mut() {
                cursor.u64_le(counter)?;
            }
            Ok(())
        }
    }
}
