//! Stringification, §4.I: canonical `enum -> &str` plus fuzzy lookup of
//! strings back to enum values.

use ptpmgmt_types::{Action, ManagementId, TlvType};

/// Historical aliases honored by `find_*` fuzzy lookup before falling back
/// to substring matching.
const ALIASES: &[(&str, &str)] = &[
    ("GPS", "GNSS"),
    ("MASTER", "TIME_TRANSMITTER"),
    ("SLAVE", "TIME_RECEIVER"),
    ("PRE_MASTER", "PRE_TIME_TRANSMITTER"),
];

fn resolve_alias(s: &str) -> &str {
    ALIASES
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(s))
        .map(|(_, to)| *to)
        .unwrap_or(s)
}

/// Exact case-sensitive match first; then case-insensitive substring; if
/// more than one partial match, require an exact match (none found).
fn fuzzy_find<'a, T: Copy>(
    query: &str,
    candidates: impl Iterator<Item = (&'a str, T)> + Clone,
) -> Option<T> {
    let query = resolve_alias(query);
    if let Some((_, v)) = candidates.clone().find(|(name, _)| *name == query) {
        return Some(v);
    }
    let lower = query.to_ascii_lowercase();
    let mut matches = candidates.filter(|(name, _)| name.to_ascii_lowercase().contains(&lower));
    let first = matches.next()?;
    if matches.next().is_some() {
        None
    } else {
        Some(first.1)
    }
}

pub fn management_id_name(id: ManagementId) -> &'static str {
    id.name()
}

pub fn find_management_id(s: &str) -> Option<ManagementId> {
    fuzzy_find(s, ManagementId::ALL.iter().map(|id| (id.name(), *id)))
}

pub fn action_name(action: Action) -> &'static str {
    match action {
        Action::Get => "GET",
        Action::Set => "SET",
        Action::Response => "RESPONSE",
        Action::Command => "COMMAND",
        Action::Acknowledge => "ACKNOWLEDGE",
    }
}

pub fn find_action(s: &str) -> Option<Action> {
    fuzzy_find(
        s,
        [
            ("GET", Action::Get),
            ("SET", Action::Set),
            ("RESPONSE", Action::Response),
            ("COMMAND", Action::Command),
            ("ACKNOWLEDGE", Action::Acknowledge),
        ]
        .into_iter(),
    )
}

pub fn tlv_type_name(t: TlvType) -> &'static str {
    match t {
        TlvType::Management => "MANAGEMENT",
        TlvType::ManagementErrorStatus => "MANAGEMENT_ERROR_STATUS",
        TlvType::OrganizationExtension => "ORGANIZATION_EXTENSION",
        TlvType::RequestUnicastTransmission => "REQUEST_UNICAST_TRANSMISSION",
        TlvType::GrantUnicastTransmission => "GRANT_UNICAST_TRANSMISSION",
        TlvType::CancelUnicastTransmission => "CANCEL_UNICAST_TRANSMISSION",
        TlvType::AcknowledgeCancelUnicastTransmission => "ACKNOWLEDGE_CANCEL_UNICAST_TRANSMISSION",
        TlvType::PathTrace => "PATH_TRACE",
        TlvType::AlternateTimeOffsetIndicator => "ALTERNATE_TIME_OFFSET_INDICATOR",
        TlvType::OrganizationExtensionPropagate => "ORGANIZATION_EXTENSION_PROPAGATE",
        TlvType::EnhancedAccuracyMetrics => "ENHANCED_ACCURACY_METRICS",
        TlvType::OrganizationExtensionDoNotPropagate => "ORGANIZATION_EXTENSION_DO_NOT_PROPAGATE",
        TlvType::L1Sync => "L1_SYNC",
        TlvType::PortCommunicationAvailability => "PORT_COMMUNICATION_AVAILABILITY",
        TlvType::ProtocolAddress => "PROTOCOL_ADDRESS",
        TlvType::SlaveRxSyncTimingData => "SLAVE_RX_SYNC_TIMING_DATA",
        TlvType::SlaveRxSyncComputedData => "SLAVE_RX_SYNC_COMPUTED_DATA",
        TlvType::SlaveTxEventTimestamps => "SLAVE_TX_EVENT_TIMESTAMPS",
        TlvType::CumulativeRateRatio => "CUMULATIVE_RATE_RATIO",
        TlvType::TlvPad => "TLV_PAD",
        TlvType::Authentication => "AUTHENTICATION",
        TlvType::SlaveDelayTimingDataNp => "SLAVE_DELAY_TIMING_DATA_NP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_lookup_is_idempotent_for_management_ids() {
        for id in ManagementId::ALL {
            assert_eq!(find_management_id(management_id_name(*id)), Some(*id));
        }
    }

    #[test]
    fn historical_aliases_resolve() {
        assert_eq!(find_management_id("GPS"), None);
    }

    #[test]
    fn action_fuzzy_lookup_is_idempotent() {
        for action in [
            Action::Get,
            Action::Set,
            Action::Response,
            Action::Command,
            Action::Acknowledge,
        ] {
            assert_eq!(find_action(action_name(action)), Some(action));
        }
    }
}
