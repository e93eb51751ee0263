//! Per-management-id payload shapes, §3/§4.D. One variant of `TlvPayload`
//! per registered `ManagementId` whose `codec_kind` is not `Empty`.

use crate::enums::{ClockAccuracy, DelayMechanism, FaultSeverity, ManagementId, PortState, TimeSource};
use crate::primitives::{Binary, ClockIdentity, ClockQuality, PortAddress, PortIdentity, PtpText, TimeInterval, Timestamp};

#[derive(Debug, Clone, PartialEq)]
pub struct ClockDescription {
    pub clock_type: u16,
    pub physical_layer_protocol: PtpText,
    pub physical_address: Binary,
    pub protocol_address: PortAddress,
    pub manufacturer_identity: [u8; 3],
    pub product_description: PtpText,
    pub revision_data: PtpText,
    pub user_description: PtpText,
    pub profile_identity: [u8; 6],
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserDescription {
    pub user_description: PtpText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Initialize {
    pub initialization_key: u16,
}

/// Invariant: `length == 3 + 10 + name.size() + value.size() + description.size()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultRecord {
    pub length: u16,
    pub fault_time: Timestamp,
    pub severity: FaultSeverity,
    pub name: PtpText,
    pub value: PtpText,
    pub description: PtpText,
}

impl FaultRecord {
    pub fn computed_length(&self) -> u16 {
        (3 + 10 + self.name.size() + self.value.size() + self.description.size()) as u16
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaultLog {
    pub records: Vec<FaultRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultDataSet {
    pub two_step_flag: bool,
    pub slave_only: bool,
    pub number_ports: u16,
    pub priority1: u8,
    pub clock_quality: ClockQuality,
    pub priority2: u8,
    pub clock_identity: ClockIdentity,
    pub domain_number: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentDataSet {
    pub steps_removed: u16,
    pub offset_from_master: TimeInterval,
    pub mean_path_delay: TimeInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentDataSet {
    pub parent_port_identity: PortIdentity,
    pub parent_stats: u8,
    pub observed_parent_offset_scaled_log_variance: u16,
    pub observed_parent_clock_phase_change_rate: i32,
    pub grandmaster_priority1: u8,
    pub grandmaster_clock_quality: ClockQuality,
    pub grandmaster_priority2: u8,
    pub grandmaster_identity: ClockIdentity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePropertiesDataSet {
    pub current_utc_offset: i16,
    pub flags: u8,
    pub time_source: TimeSource,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortDataSet {
    pub port_identity: PortIdentity,
    pub port_state: PortState,
    pub log_min_delay_req_interval: i8,
    pub peer_mean_path_delay: TimeInterval,
    pub log_announce_interval: i8,
    pub announce_receipt_timeout: u8,
    pub log_sync_interval: i8,
    pub delay_mechanism: DelayMechanism,
    pub log_min_pdelay_req_interval: i8,
    pub version_number: u8,
}

/// A "flag-only" TLV: a single payload byte holding one or more documented
/// bit positions, plus a reserved pad byte, §4.D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagByte {
    pub flags: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U8Field {
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I8Field {
    pub value: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U16Field {
    pub value: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePayload {
    pub origin_timestamp: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockAccuracyPayload {
    pub clock_accuracy: ClockAccuracy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcProperties {
    pub current_utc_offset: i16,
    pub flags: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathTraceList {
    pub path_sequence: Vec<ClockIdentity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrandmasterClusterTable {
    pub log_query_interval: i8,
    pub actual_table_size: u8,
    pub list: Vec<PortAddress>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnicastMasterTable {
    pub log_query_interval: i8,
    pub actual_table_size: u16,
    pub list: Vec<PortAddress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptableMaster {
    pub acceptable_port_identity: PortIdentity,
    pub alternate_priority1: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcceptableMasterTable {
    pub actual_table_size: i16,
    pub list: Vec<AcceptableMaster>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateMaster {
    pub flags: u8,
    pub log_alternate_multicast_sync_interval: i8,
    pub number_of_alternate_masters: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateTimeOffsetEnable {
    pub key_field: u8,
    pub flags: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlternateTimeOffsetName {
    pub key_field: u8,
    pub display_name: PtpText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateTimeOffsetMaxKey {
    pub max_key: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateTimeOffsetProperties {
    pub key_field: u8,
    pub current_offset: i32,
    pub jump_seconds: i32,
    pub time_of_next_jump: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransparentClockDefaultDataSet {
    pub clock_identity: ClockIdentity,
    pub number_ports: u16,
    pub delay_mechanism: DelayMechanism,
    pub primary_domain: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransparentClockPortDataSet {
    pub port_identity: PortIdentity,
    pub log_min_pdelay_req_interval: i8,
    pub peer_mean_path_delay: TimeInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayMechanismPayload {
    pub delay_mechanism: DelayMechanism,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStatusNp {
    pub master_offset: i64,
    pub ingress_time: i64,
    pub cumulative_scaled_rate_offset: i32,
    pub scaled_last_gm_phase_change: i32,
    pub gm_time_base_indicator: u16,
    pub last_gm_phase_change: [u8; 12],
    pub gm_present: i32,
    pub gm_identity: ClockIdentity,
}

impl TimeStatusNp {
    pub fn gm_present_bool(self) -> bool {
        self.gm_present != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrandmasterSettingsNp {
    pub clock_quality: ClockQuality,
    pub utc_offset: i16,
    pub time_flags: u8,
    pub time_source: TimeSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortDataSetNp {
    pub neighbor_prop_delay_thresh: u32,
    pub as_capable: i32,
}

/// `{ duration, bitmask[64] }`; `idx = 8*byte + bit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscribeEventsNp {
    pub duration: u16,
    pub bitmask: [u8; 64],
}

pub const NOTIFY_PORT_STATE: usize = 0;
pub const NOTIFY_TIME_SYNC: usize = 1;
pub const NOTIFY_PARENT_DATA_SET: usize = 2;
pub const NOTIFY_CMLDS: usize = 3;

impl SubscribeEventsNp {
    pub fn set_event(&mut self, idx: usize) {
        self.bitmask[idx / 8] |= 1 << (idx % 8);
    }

    pub fn clear_event(&mut self, idx: usize) {
        self.bitmask[idx / 8] &= !(1 << (idx % 8));
    }

    pub fn get_event(&self, idx: usize) -> bool {
        self.bitmask[idx / 8] & (1 << (idx % 8)) != 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortPropertiesNp {
    pub port_identity: PortIdentity,
    pub port_state: PortState,
    pub timestamping: u8,
    pub interface: PtpText,
}

pub const STAT_SYNC: usize = 0;
pub const STAT_DELAY_REQ: usize = 1;
pub const STAT_PDELAY_REQ: usize = 2;
pub const STAT_PDELAY_RESP: usize = 3;
pub const STAT_FOLLOW_UP: usize = 4;
pub const STAT_DELAY_RESP: usize = 5;
pub const STAT_PDELAY_RESP_FOLLOW_UP: usize = 6;
pub const STAT_ANNOUNCE: usize = 7;
pub const STAT_SIGNALING: usize = 8;
pub const STAT_MANAGEMENT: usize = 13;

/// The 32 counters here are little-endian while the rest of the envelope is
/// big-endian. Do not "fix" this — it is the deployed wire behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortStatsNp {
    pub port_identity: PortIdentity,
    pub rx_msg_type: [u64; 16],
    pub tx_msg_type: [u64; 16],
}

/// One variant per registered management id that carries a body. Empty-body
/// ids (`NullPtpManagement`, `SaveInNonVolatileStorage`,
/// `ResetNonVolatileStorage`, `FaultLogReset`, `EnablePort`, `DisablePort`)
/// have no payload and are represented by `TlvPayload::Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum TlvPayload {
    Empty,
    ClockDescription(ClockDescription),
    UserDescription(UserDescription),
    Initialize(Initialize),
    FaultLog(FaultLog),
    DefaultDataSet(DefaultDataSet),
    CurrentDataSet(CurrentDataSet),
    ParentDataSet(ParentDataSet),
    TimePropertiesDataSet(TimePropertiesDataSet),
    PortDataSet(PortDataSet),
    Priority1(U8Field),
    Priority2(U8Field),
    Domain(U8Field),
    SlaveOnly(FlagByte),
    LogAnnounceInterval(I8Field),
    AnnounceReceiptTimeout(U8Field),
    LogSyncInterval(I8Field),
    VersionNumber(U8Field),
    Time(TimePayload),
    ClockAccuracy(ClockAccuracyPayload),
    UtcProperties(UtcProperties),
    TraceabilityProperties(FlagByte),
    TimescaleProperties(FlagByte),
    UnicastNegotiationEnable(FlagByte),
    PathTraceList(PathTraceList),
    PathTraceEnable(FlagByte),
    GrandmasterClusterTable(GrandmasterClusterTable),
    UnicastMasterTable(UnicastMasterTable),
    UnicastMasterMaxTableSize(U16Field),
    AcceptableMasterTable(AcceptableMasterTable),
    AcceptableMasterTableEnabled(FlagByte),
    AcceptableMasterMaxTableSize(U16Field),
    AlternateMaster(AlternateMaster),
    AlternateTimeOffsetEnable(AlternateTimeOffsetEnable),
    AlternateTimeOffsetName(AlternateTimeOffsetName),
    AlternateTimeOffsetMaxKey(AlternateTimeOffsetMaxKey),
    AlternateTimeOffsetProperties(AlternateTimeOffsetProperties),
    ExternalPortConfigurationEnabled(FlagByte),
    MasterOnly(FlagByte),
    HoldoverUpgradeEnable(FlagByte),
    ExtPortConfigPortDataSet(FlagByte),
    TransparentClockDefaultDataSet(TransparentClockDefaultDataSet),
    TransparentClockPortDataSet(TransparentClockPortDataSet),
    PrimaryDomain(U8Field),
    DelayMechanism(DelayMechanismPayload),
    LogMinPdelayReqInterval(I8Field),
    TimeStatusNp(TimeStatusNp),
    GrandmasterSettingsNp(GrandmasterSettingsNp),
    PortDataSetNp(PortDataSetNp),
    SubscribeEventsNp(SubscribeEventsNp),
    PortPropertiesNp(PortPropertiesNp),
    PortStatsNp(PortStatsNp),
    SynchronizationUncertainNp(FlagByte),
}

impl TlvPayload {
    /// A zero-valued payload of the shape `id` carries, for the parse side
    /// of the dispatch façade (§4.H) to fill in field by field.
    pub fn blank_for(id: ManagementId) -> TlvPayload {
        use ManagementId as M;
        match id {
            M::NullPtpManagement | M::SaveInNonVolatileStorage | M::ResetNonVolatileStorage | M::FaultLogReset | M::EnablePort | M::DisablePort => {
                TlvPayload::Empty
            }
            M::ClockDescription => TlvPayload::ClockDescription(ClockDescription {
                clock_type: 0,
                physical_layer_protocol: PtpText::default(),
                physical_address: Binary::default(),
                protocol_address: PortAddress {
                    network_protocol: crate::enums::NetworkProtocol::UdpIpV4,
                    address: Binary::default(),
                },
                manufacturer_identity: [0; 3],
                product_description: PtpText::default(),
                revision_data: PtpText::default(),
                user_description: PtpText::default(),
                profile_identity: [0; 6],
            }),
            M::UserDescription => TlvPayload::UserDescription(UserDescription { user_description: PtpText::default() }),
            M::Initialize => TlvPayload::Initialize(Initialize { initialization_key: 0 }),
            M::FaultLog => TlvPayload::FaultLog(FaultLog { records: Vec::new() }),
            M::DefaultDataSet => TlvPayload::DefaultDataSet(DefaultDataSet {
                two_step_flag: false,
                slave_only: false,
                number_ports: 0,
                priority1: 0,
                clock_quality: ClockQuality { clock_class: 0, clock_accuracy: ClockAccuracy::Unknown, offset_scaled_log_variance: 0 },
                priority2: 0,
                clock_identity: ClockIdentity::default(),
                domain_number: 0,
            }),
            M::CurrentDataSet => TlvPayload::CurrentDataSet(CurrentDataSet {
                steps_removed: 0,
                offset_from_master: TimeInterval::default(),
                mean_path_delay: TimeInterval::default(),
            }),
            M::ParentDataSet => TlvPayload::ParentDataSet(ParentDataSet {
                parent_port_identity: PortIdentity::default(),
                parent_stats: 0,
                observed_parent_offset_scaled_log_variance: 0,
                observed_parent_clock_phase_change_rate: 0,
                grandmaster_priority1: 0,
                grandmaster_clock_quality: ClockQuality { clock_class: 0, clock_accuracy: ClockAccuracy::Unknown, offset_scaled_log_variance: 0 },
                grandmaster_priority2: 0,
                grandmaster_identity: ClockIdentity::default(),
            }),
            M::TimePropertiesDataSet => TlvPayload::TimePropertiesDataSet(TimePropertiesDataSet {
                current_utc_offset: 0,
                flags: 0,
                time_source: TimeSource::InternalOscillator,
            }),
            M::PortDataSet => TlvPayload::PortDataSet(PortDataSet {
                port_identity: PortIdentity::default(),
                port_state: PortState::Initializing,
                log_min_delay_req_interval: 0,
                peer_mean_path_delay: TimeInterval::default(),
                log_announce_interval: 0,
                announce_receipt_timeout: 0,
                log_sync_interval: 0,
                delay_mechanism: DelayMechanism::E2E,
                log_min_pdelay_req_interval: 0,
                version_number: 2,
            }),
            M::Priority1 => TlvPayload::Priority1(U8Field::default()),
            M::Priority2 => TlvPayload::Priority2(U8Field::default()),
            M::Domain => TlvPayload::Domain(U8Field::default()),
            M::SlaveOnly => TlvPayload::SlaveOnly(FlagByte::default()),
            M::LogAnnounceInterval => TlvPayload::LogAnnounceInterval(I8Field::default()),
            M::AnnounceReceiptTimeout => TlvPayload::AnnounceReceiptTimeout(U8Field::default()),
            M::LogSyncInterval => TlvPayload::LogSyncInterval(I8Field::default()),
            M::VersionNumber => TlvPayload::VersionNumber(U8Field::default()),
            M::Time => TlvPayload::Time(TimePayload { origin_timestamp: Timestamp::default() }),
            M::ClockAccuracy => TlvPayload::ClockAccuracy(ClockAccuracyPayload { clock_accuracy: ClockAccuracy::Unknown }),
            M::UtcProperties => TlvPayload::UtcProperties(UtcProperties { current_utc_offset: 0, flags: 0 }),
            M::TraceabilityProperties => TlvPayload::TraceabilityProperties(FlagByte::default()),
            M::TimescaleProperties => TlvPayload::TimescaleProperties(FlagByte::default()),
            M::UnicastNegotiationEnable => TlvPayload::UnicastNegotiationEnable(FlagByte::default()),
            M::PathTraceList => TlvPayload::PathTraceList(PathTraceList { path_sequence: Vec::new() }),
            M::PathTraceEnable => TlvPayload::PathTraceEnable(FlagByte::default()),
            M::GrandmasterClusterTable => TlvPayload::GrandmasterClusterTable(GrandmasterClusterTable { log_query_interval: 0, actual_table_size: 0, list: Vec::new() }),
            M::UnicastMasterTable => TlvPayload::UnicastMasterTable(UnicastMasterTable { log_query_interval: 0, actual_table_size: 0, list: Vec::new() }),
            M::UnicastMasterMaxTableSize => TlvPayload::UnicastMasterMaxTableSize(U16Field::default()),
            M::AcceptableMasterTable => TlvPayload::AcceptableMasterTable(AcceptableMasterTable { actual_table_size: 0, list: Vec::new() }),
            M::AcceptableMasterTableEnabled => TlvPayload::AcceptableMasterTableEnabled(FlagByte::default()),
            M::AcceptableMasterMaxTableSize => TlvPayload::AcceptableMasterMaxTableSize(U16Field::default()),
            M::AlternateMaster => TlvPayload::AlternateMaster(AlternateMaster {
                flags: 0,
                log_alternate_multicast_sync_interval: 0,
                number_of_alternate_masters: 0,
            }),
            M::AlternateTimeOffsetEnable => TlvPayload::AlternateTimeOffsetEnable(AlternateTimeOffsetEnable { key_field: 0, flags: 0 }),
            M::AlternateTimeOffsetName => TlvPayload::AlternateTimeOffsetName(AlternateTimeOffsetName { key_field: 0, display_name: PtpText::default() }),
            M::AlternateTimeOffsetMaxKey => TlvPayload::AlternateTimeOffsetMaxKey(AlternateTimeOffsetMaxKey { max_key: 0 }),
            M::AlternateTimeOffsetProperties => TlvPayload::AlternateTimeOffsetProperties(AlternateTimeOffsetProperties {
                key_field: 0,
                current_offset: 0,
                jump_seconds: 0,
                time_of_next_jump: 0,
            }),
            M::ExternalPortConfigurationEnabled => TlvPayload::ExternalPortConfigurationEnabled(FlagByte::default()),
            M::MasterOnly => TlvPayload::MasterOnly(FlagByte::default()),
            M::HoldoverUpgradeEnable => TlvPayload::HoldoverUpgradeEnable(FlagByte::default()),
            M::ExtPortConfigPortDataSet => TlvPayload::ExtPortConfigPortDataSet(FlagByte::default()),
            M::TransparentClockDefaultDataSet => TlvPayload::TransparentClockDefaultDataSet(TransparentClockDefaultDataSet {
                clock_identity: ClockIdentity::default(),
                number_ports: 0,
                delay_mechanism: DelayMechanism::E2E,
                primary_domain: 0,
            }),
            M::TransparentClockPortDataSet => TlvPayload::TransparentClockPortDataSet(TransparentClockPortDataSet {
                port_identity: PortIdentity::default(),
                log_min_pdelay_req_interval: 0,
                peer_mean_path_delay: TimeInterval::default(),
            }),
            M::PrimaryDomain => TlvPayload::PrimaryDomain(U8Field::default()),
            M::DelayMechanism => TlvPayload::DelayMechanism(DelayMechanismPayload { delay_mechanism: DelayMechanism::E2E }),
            M::LogMinPdelayReqInterval => TlvPayload::LogMinPdelayReqInterval(I8Field::default()),
            M::TimeStatusNp => TlvPayload::TimeStatusNp(TimeStatusNp {
                master_offset: 0,
                ingress_time: 0,
                cumulative_scaled_rate_offset: 0,
                scaled_last_gm_phase_change: 0,
                gm_time_base_indicator: 0,
                last_gm_phase_change: [0; 12],
                gm_present: 0,
                gm_identity: ClockIdentity::default(),
            }),
            M::GrandmasterSettingsNp => TlvPayload::GrandmasterSettingsNp(GrandmasterSettingsNp {
                clock_quality: ClockQuality { clock_class: 0, clock_accuracy: ClockAccuracy::Unknown, offset_scaled_log_variance: 0 },
                utc_offset: 0,
                time_flags: 0,
                time_source: TimeSource::InternalOscillator,
            }),
            M::PortDataSetNp => TlvPayload::PortDataSetNp(PortDataSetNp { neighbor_prop_delay_thresh: 0, as_capable: 0 }),
            M::SubscribeEventsNp => TlvPayload::SubscribeEventsNp(SubscribeEventsNp { duration: 0, bitmask: [0; 64] }),
            M::PortPropertiesNp => TlvPayload::PortPropertiesNp(PortPropertiesNp {
                port_identity: PortIdentity::default(),
                port_state: PortState::Initializing,
                timestamping: 0,
                interface: PtpText::default(),
            }),
            M::PortStatsNp => TlvPayload::PortStatsNp(PortStatsNp {
                port_identity: PortIdentity::default(),
                rx_msg_type: [0; 16],
                tx_msg_type: [0; 16],
            }),
            M::SynchronizationUncertainNp => TlvPayload::SynchronizationUncertainNp(FlagByte::default()),
        }
    }

    /// The management id this payload's dynamic shape corresponds to, used
    /// by the envelope to reject a build whose payload doesn't match the
    /// declared id (`MismatchTlv`).
    pub fn management_id(&self) -> ManagementId {
        use ManagementId as M;
        match self {
            TlvPayload::Empty => M::NullPtpManagement,
            TlvPayload::ClockDescription(_) => M::ClockDescription,
            TlvPayload::UserDescription(_) => M::UserDescription,
            TlvPayload::Initialize(_) => M::Initialize,
            TlvPayload::FaultLog(_) => M::FaultLog,
            TlvPayload::DefaultDataSet(_) => M::DefaultDataSet,
            TlvPayload::CurrentDataSet(_) => M::CurrentDataSet,
            TlvPayload::ParentDataSet(_) => M::ParentDataSet,
            TlvPayload::TimePropertiesDataSet(_) => M::TimePropertiesDataSet,
            TlvPayload::PortDataSet(_) => M::PortDataSet,
            TlvPayload::Priority1(_) => M::Priority1,
            TlvPayload::Priority2(_) => M::Priority2,
            TlvPayload::Domain(_) => M::Domain,
            TlvPayload::SlaveOnly(_) => M::SlaveOnly,
            TlvPayload::LogAnnounceInterval(_) => M::LogAnnounceInterval,
            TlvPayload::AnnounceReceiptTimeout(_) => M::AnnounceReceiptTimeout,
            TlvPayload::LogSyncInterval(_) => M::LogSyncInterval,
            TlvPayload::VersionNumber(_) => M::VersionNumber,
            TlvPayload::Time(_) => M::Time,
            TlvPayload::ClockAccuracy(_) => M::ClockAccuracy,
            TlvPayload::UtcProperties(_) => M::UtcProperties,
            TlvPayload::TraceabilityProperties(_) => M::TraceabilityProperties,
            TlvPayload::TimescaleProperties(_) => M::TimescaleProperties,
            TlvPayload::UnicastNegotiationEnable(_) => M::UnicastNegotiationEnable,
            TlvPayload::PathTraceList(_) => M::PathTraceList,
            TlvPayload::PathTraceEnable(_) => M::PathTraceEnable,
            TlvPayload::GrandmasterClusterTable(_) => M::GrandmasterClusterTable,
            TlvPayload::UnicastMasterTable(_) => M::UnicastMasterTable,
            TlvPayload::UnicastMasterMaxTableSize(_) => M::UnicastMasterMaxTableSize,
            TlvPayload::AcceptableMasterTable(_) => M::AcceptableMasterTable,
            TlvPayload::AcceptableMasterTableEnabled(_) => M::AcceptableMasterTableEnabled,
            TlvPayload::AcceptableMasterMaxTableSize(_) => M::AcceptableMasterMaxTableSize,
            TlvPayload::AlternateMaster(_) => M::AlternateMaster,
            TlvPayload::AlternateTimeOffsetEnable(_) => M::AlternateTimeOffsetEnable,
            TlvPayload::AlternateTimeOffsetName(_) => M::AlternateTimeOffsetName,
            TlvPayload::AlternateTimeOffsetMaxKey(_) => M::AlternateTimeOffsetMaxKey,
            TlvPayload::AlternateTimeOffsetProperties(_) => M::AlternateTimeOffsetProperties,
            TlvPayload::ExternalPortConfigurationEnabled(_) => M::ExternalPortConfigurationEnabled,
            TlvPayload::MasterOnly(_) => M::MasterOnly,
            TlvPayload::HoldoverUpgradeEnable(_) => M::HoldoverUpgradeEnable,
            TlvPayload::ExtPortConfigPortDataSet(_) => M::ExtPortConfigPortDataSet,
            TlvPayload::TransparentClockDefaultDataSet(_) => M::TransparentClockDefaultDataSet,
            TlvPayload::TransparentClockPortDataSet(_) => M::TransparentClockPortDataSet,
            TlvPayload::PrimaryDomain(_) => M::PrimaryDomain,
            TlvPayload::DelayMechanism(_) => M::DelayMechanism,
            TlvPayload::LogMinPdelayReqInterval(_) => M::LogMinPdelayReqInterval,
            TlvPayload::TimeStatusNp(_) => M::TimeStatusNp,
            TlvPayload::GrandmasterSettingsNp(_) => M::GrandmasterSettingsNp,
            TlvPayload::PortDataSetNp(_) => M::PortDataSetNp,
            TlvPayload::SubscribeEventsNp(_) => M::SubscribeEventsNp,
            TlvPayload::PortPropertiesNp(_) => M::PortPropertiesNp,
            TlvPayload::PortStatsNp(_) => M::PortStatsNp,
            TlvPayload::SynchronizationUncertainNp(_) => M::SynchronizationUncertainNp,
        }
    }
}
