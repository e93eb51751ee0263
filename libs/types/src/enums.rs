//! Wire-coded enumerations: management ids, TLV types, actions, and the
//! smaller datum enums referenced from payload fields.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// PTP message type, low nibble of header byte 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum MessageType {
    Sync = 0x0,
    DelayReq = 0x1,
    PDelayReq = 0x2,
    PDelayResp = 0x3,
    FollowUp = 0x8,
    DelayResp = 0x9,
    PDelayRespFollowUp = 0xa,
    Announce = 0xb,
    Signaling = 0xc,
    Management = 0xd,
}

/// Send/receive action field, §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Action {
    Get = 0,
    Set = 1,
    Response = 2,
    Command = 3,
    Acknowledge = 4,
}

/// Wire identifier of a signaling TLV envelope, §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum TlvType {
    Management = 0x0001,
    ManagementErrorStatus = 0x0002,
    OrganizationExtension = 0x0003,
    RequestUnicastTransmission = 0x0004,
    GrantUnicastTransmission = 0x0005,
    CancelUnicastTransmission = 0x0006,
    AcknowledgeCancelUnicastTransmission = 0x0007,
    PathTrace = 0x0008,
    AlternateTimeOffsetIndicator = 0x0009,
    OrganizationExtensionPropagate = 0x4000,
    EnhancedAccuracyMetrics = 0x4001,
    OrganizationExtensionDoNotPropagate = 0x8000,
    L1Sync = 0x8001,
    PortCommunicationAvailability = 0x8002,
    ProtocolAddress = 0x8003,
    SlaveRxSyncTimingData = 0x8004,
    SlaveRxSyncComputedData = 0x8005,
    SlaveTxEventTimestamps = 0x8006,
    CumulativeRateRatio = 0x8007,
    TlvPad = 0x8008,
    Authentication = 0x8009,
    SlaveDelayTimingDataNp = 0x7f00,
}

/// Scope of a registered management datum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Port,
    Clock,
}

/// `clockAccuracy_e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ClockAccuracy {
    Within25ns = 0x20,
    Within100ns = 0x21,
    Within250ns = 0x22,
    Within1us = 0x23,
    Within2_5us = 0x24,
    Within10us = 0x25,
    Within25us = 0x26,
    Within100us = 0x27,
    Within250us = 0x28,
    Within1ms = 0x29,
    Within2_5ms = 0x2a,
    Within10ms = 0x2b,
    Within25ms = 0x2c,
    Within100ms = 0x2d,
    Within250ms = 0x2e,
    Within1s = 0x2f,
    Within10s = 0x30,
    WithinOrOver10s = 0x31,
    Unknown = 0xfe,
}

/// `faultRecord_e` fault severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum FaultSeverity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

/// `timeSource_e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum TimeSource {
    AtomicClock = 0x10,
    Gnss = 0x20,
    TerrestrialRadio = 0x30,
    SerialTimeCode = 0x39,
    Ptp = 0x40,
    Ntp = 0x50,
    HandSet = 0x60,
    Other = 0x90,
    InternalOscillator = 0xa0,
}

/// `portState_e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PortState {
    Initializing = 1,
    Faulty = 2,
    Disabled = 3,
    Listening = 4,
    PreTimeTransmitter = 5,
    TimeTransmitter = 6,
    Passive = 7,
    Uncalibrated = 8,
    TimeReceiver = 9,
}

/// `networkProtocol_e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum NetworkProtocol {
    UdpIpV4 = 1,
    UdpIpV6 = 2,
    Ieee8023 = 3,
    DeviceNet = 4,
    ControlNet = 5,
    Profinet = 6,
}

/// `delayMechanism_e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum DelayMechanism {
    E2E = 1,
    P2P = 2,
    NoMechanism = 0xfe,
    CommonP2p = 3,
    Special = 4,
}

/// `managementErrorId_e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum ManagementErrorId {
    ResponseTooBig = 1,
    NoSuchId = 2,
    WrongLength = 3,
    WrongValue = 4,
    NotSetable = 5,
    NotSupported = 6,
    GeneralError = 0xfffe,
}

/// Bitmask kind describing which clock-type bits a `clockType_e` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockType(pub u16);

impl ClockType {
    pub const ORDINARY_CLOCK: u16 = 1 << 15;
    pub const BOUNDARY_CLOCK: u16 = 1 << 14;
    pub const P2P_TRANSPARENT_CLOCK: u16 = 1 << 13;
    pub const E2E_TRANSPARENT_CLOCK: u16 = 1 << 12;
    pub const MANAGEMENT_NODE: u16 = 1 << 11;
    pub const CLASS_A: u16 = 1 << 7;
    pub const CLASS_B: u16 = 1 << 6;
    pub const CLASS_C: u16 = 1 << 5;
    pub const DEFAULT: u16 = 1 << 0;
}

macro_rules! management_id {
    ($( $variant:ident = $code:expr ),+ $(,)?) => {
        /// Identifies one TLV payload shape, §3. ~65 entries, one per row of
        /// the TLV registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
        #[repr(u16)]
        pub enum ManagementId {
            $( $variant = $code, )+
        }

        impl ManagementId {
            pub const ALL: &'static [ManagementId] = &[ $( ManagementId::$variant, )+ ];

            pub fn name(self) -> &'static str {
                match self {
                    $( ManagementId::$variant => stringify!($variant), )+
                }
            }
        }
    };
}

management_id! {
    NullPtpManagement = 0x0000,
    ClockDescription = 0x0001,
    UserDescription = 0x0002,
    SaveInNonVolatileStorage = 0x0003,
    ResetNonVolatileStorage = 0x0004,
    Initialize = 0x0005,
    FaultLog = 0x0006,
    FaultLogReset = 0x0007,
    DefaultDataSet = 0x2000,
    CurrentDataSet = 0x2001,
    ParentDataSet = 0x2002,
    TimePropertiesDataSet = 0x2003,
    PortDataSet = 0x2004,
    Priority1 = 0x2005,
    Priority2 = 0x2006,
    Domain = 0x2007,
    SlaveOnly = 0x2008,
    LogAnnounceInterval = 0x2009,
    AnnounceReceiptTimeout = 0x200a,
    LogSyncInterval = 0x200b,
    VersionNumber = 0x200c,
    EnablePort = 0x200d,
    DisablePort = 0x200e,
    Time = 0x200f,
    ClockAccuracy = 0x2010,
    UtcProperties = 0x2011,
    TraceabilityProperties = 0x2012,
    TimescaleProperties = 0x2013,
    UnicastNegotiationEnable = 0x2014,
    PathTraceList = 0x2015,
    PathTraceEnable = 0x2016,
    GrandmasterClusterTable = 0x2017,
    UnicastMasterTable = 0x2018,
    UnicastMasterMaxTableSize = 0x2019,
    AcceptableMasterTable = 0x201a,
    AcceptableMasterTableEnabled = 0x201b,
    AcceptableMasterMaxTableSize = 0x201c,
    AlternateMaster = 0x201d,
    AlternateTimeOffsetEnable = 0x201e,
    AlternateTimeOffsetName = 0x201f,
    AlternateTimeOffsetMaxKey = 0x2020,
    AlternateTimeOffsetProperties = 0x2021,
    TransparentClockDefaultDataSet = 0x4000,
    TransparentClockPortDataSet = 0x4001,
    PrimaryDomain = 0x4002,
    ExternalPortConfigurationEnabled = 0x3000,
    MasterOnly = 0x3001,
    HoldoverUpgradeEnable = 0x3002,
    ExtPortConfigPortDataSet = 0x3003,
    DelayMechanism = 0x6000,
    LogMinPdelayReqInterval = 0x6001,
    TimeStatusNp = 0xc000,
    GrandmasterSettingsNp = 0xc001,
    PortDataSetNp = 0xc002,
    SubscribeEventsNp = 0xc003,
    PortPropertiesNp = 0xc004,
    PortStatsNp = 0xc005,
    SynchronizationUncertainNp = 0xc006,
}

impl ManagementId {
    pub const FIRST: ManagementId = ManagementId::NullPtpManagement;
    pub const LAST: ManagementId = ManagementId::SynchronizationUncertainNp;

    /// Vendor-specific ids live in the `0xc000-0xdfff` range, gated by the
    /// session's `use_vendor` flag.
    pub fn is_vendor_specific(self) -> bool {
        let code: u16 = self.into();
        (0xc000..=0xdfff).contains(&code)
    }
}
