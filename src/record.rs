//! Everything known about one advertisement once resolution has finished

use std::fmt;

use crate::error::AttError;
use crate::{AdvertisementEvent, CharacteristicProperties, Error, Uuid};

/// Name used when the device is unknown or has no name
pub const UNKNOWN_NAME: &str = "(Unknown)";

/// The result of resolving one advertisement, ready to be rendered.
#[derive(Debug)]
pub enum Resolution {
    /// Resolution finished; some parts may still be absent or carry a failure status
    Resolved(ResolvedRecord),
    /// Resolution hit an unexpected error. Only a failure line is rendered for this event.
    Failed {
        /// The advertisement that could not be resolved
        event: AdvertisementEvent,
        /// What went wrong
        error: Error,
    },
}

impl Resolution {
    /// The advertisement this resolution belongs to
    pub fn event(&self) -> &AdvertisementEvent {
        match self {
            Resolution::Resolved(record) => &record.event,
            Resolution::Failed { event, .. } => event,
        }
    }
}

/// An advertisement together with the device information resolved for it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedRecord {
    /// The advertisement
    pub event: AdvertisementEvent,
    /// The device name, [`UNKNOWN_NAME`] when the device is unknown or unnamed
    pub name: String,
    /// Identity and pairing details, when requested and the device was found
    pub details: Option<DeviceDetails>,
    /// GATT database snapshot, when requested and the device was found
    pub gatt: Option<GattSnapshot>,
}

impl ResolvedRecord {
    /// A record for a device the platform does not know
    pub fn unknown(event: AdvertisementEvent) -> Self {
        ResolvedRecord {
            event,
            name: UNKNOWN_NAME.to_string(),
            details: None,
            gatt: None,
        }
    }
}

/// Identity and pairing information about a device
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceDetails {
    /// The platform's identifier for the device
    pub device_id: String,
    /// The kind of address the device uses
    pub address_type: AddressType,
    /// Whether the device is currently connected
    pub connection_status: ConnectionStatus,
    /// The protection level of the pairing
    pub protection_level: ProtectionLevel,
    /// Whether the device is paired
    pub is_paired: bool,
    /// Whether the device can be paired
    pub can_pair: bool,
}

/// Bluetooth address kinds
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressType {
    Public,
    Random,
    Unspecified,
}

/// Connection state of a device
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

/// Protection level of a pairing
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtectionLevel {
    Default,
    None,
    Encryption,
    EncryptionAndAuthentication,
}

macro_rules! display_as_debug {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }
        )*
    };
}

display_as_debug!(AddressType, ConnectionStatus, ProtectionLevel);

/// Outcome of a GATT request
#[derive(Debug, displaydoc::Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GattStatus {
    /// Success
    Success,
    /// Unreachable
    Unreachable,
    /// AccessDenied
    AccessDenied,
    /// ProtocolError ({0})
    ProtocolError(AttError),
}

/// The GATT database of a device as enumerated during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GattSnapshot {
    /// Outcome of the service request
    pub status: GattStatus,
    /// Services in the order the device reported them; empty unless `status` is [`GattStatus::Success`]
    pub services: Vec<ServiceEntry>,
}

/// One GATT service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceEntry {
    /// The service type
    pub uuid: Uuid,
    /// Assigned name of the service type
    pub name: String,
    /// The characteristics, or a description of why they could not be enumerated
    pub characteristics: Result<Vec<CharacteristicEntry>, String>,
}

/// One GATT characteristic
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacteristicEntry {
    /// The characteristic type
    pub uuid: Uuid,
    /// Assigned name of the characteristic type
    pub name: String,
    /// Supported operations
    pub properties: CharacteristicProperties,
}
