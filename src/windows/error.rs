use windows::Devices::Bluetooth::GenericAttributeProfile::GattCommunicationStatus;
use windows::Foundation::IReference;

use crate::error::{AttError, ErrorKind};
use crate::record::GattStatus;
use crate::Result;

/// Platform specific error type
pub type OsError = windows::core::Error;

impl From<OsError> for crate::Error {
    fn from(err: OsError) -> Self {
        crate::Error::new(ErrorKind::Other, Some(Box::new(err)), String::new())
    }
}

/// Translates the outcome of a GATT request into a [`GattStatus`]
pub(super) fn gatt_status(
    status: GattCommunicationStatus,
    protocol_error: windows::core::Result<IReference<u8>>,
) -> Result<GattStatus> {
    Ok(match status {
        GattCommunicationStatus::Success => GattStatus::Success,
        GattCommunicationStatus::AccessDenied => GattStatus::AccessDenied,
        GattCommunicationStatus::Unreachable => GattStatus::Unreachable,
        GattCommunicationStatus::ProtocolError => GattStatus::ProtocolError(AttError::from(protocol_error?.Value()?)),
        _ => GattStatus::Unreachable,
    })
}

pub(super) fn check_communication_status(
    status: GattCommunicationStatus,
    protocol_error: windows::core::Result<IReference<u8>>,
    message: &str,
) -> Result<()> {
    use crate::Error;
    match gatt_status(status, protocol_error)? {
        GattStatus::Success => Ok(()),
        GattStatus::AccessDenied => Err(Error::new(ErrorKind::NotAuthorized, None, message)),
        GattStatus::Unreachable => Err(Error::new(ErrorKind::ConnectionFailed, None, message)),
        GattStatus::ProtocolError(code) => Err(Error::new(ErrorKind::Protocol(code), None, message)),
    }
}
