//! Blescan errors

use num_enum::TryFromPrimitive;

/// The error type for scanning and resolution
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    message: String,
}

impl Error {
    /// Creates an error of the given `kind`, optionally wrapping the platform error that caused it.
    pub fn new(
        kind: ErrorKind,
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
        message: impl Into<String>,
    ) -> Self {
        Error {
            kind,
            source,
            message: message.into(),
        }
    }

    /// Returns the corresponding [ErrorKind] for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message for this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.message.is_empty(), &self.source) {
            (true, None) => write!(f, "{}", &self.kind),
            (false, None) => write!(f, "{}: {}", &self.kind, &self.message),
            (true, Some(err)) => write!(f, "{}: {}", &self.kind, err),
            (false, Some(err)) => write!(f, "{}: {} ({})", &self.kind, &self.message, err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|x| {
            let x: &(dyn std::error::Error + 'static) = &**x;
            x
        })
    }
}

/// A list of general categories of error.
#[non_exhaustive]
#[derive(Debug, displaydoc::Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// the Bluetooth adapter is not available
    AdapterUnavailable,
    /// the scan session is already running
    AlreadyScanning,
    /// the scan session has ended
    SessionEnded,
    /// connection failed
    ConnectionFailed,
    /// the Bluetooth device isn't connected
    NotConnected,
    /// the Bluetooth operation is unsupported
    NotSupported,
    /// permission denied
    NotAuthorized,
    /// not found
    NotFound,
    /// protocol error: {0}
    Protocol(AttError),
    /// an internal error has occured
    Internal,
    /// error
    Other,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind,
            source: None,
            message: String::new(),
        }
    }
}

/// Bluetooth Attribute Protocol error codes. See the Bluetooth Core Specification, Vol 3, Part F, §3.4.1.1
#[repr(u8)]
#[derive(Debug, displaydoc::Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttErrorCode {
    /// success
    Success = 0x00,
    /// invalid handle
    InvalidHandle = 0x01,
    /// read not permitted
    ReadNotPermitted = 0x02,
    /// write not permitted
    WriteNotPermitted = 0x03,
    /// invalid PDU
    InvalidPdu = 0x04,
    /// insufficient authentication
    InsufficientAuthentication = 0x05,
    /// request not supported
    RequestNotSupported = 0x06,
    /// invalid offset
    InvalidOffset = 0x07,
    /// insufficient authorization
    InsufficientAuthorization = 0x08,
    /// prepare queue full
    PrepareQueueFull = 0x09,
    /// attribute not found
    AttributeNotFound = 0x0a,
    /// attribute not long
    AttributeNotLong = 0x0b,
    /// insufficient encryption key size
    InsufficientEncryptionKeySize = 0x0c,
    /// invalid attribute value length
    InvalidAttributeValueLength = 0x0d,
    /// unlikely error
    UnlikelyError = 0x0e,
    /// insufficient encryption
    InsufficientEncryption = 0x0f,
    /// unsupported group type
    UnsupportedGroupType = 0x10,
    /// insufficient resources
    InsufficientResources = 0x11,
    /// database out of sync
    DatabaseOutOfSync = 0x12,
    /// value not allowed
    ValueNotAllowed = 0x13,
    /// write request rejected
    WriteRequestRejected = 0xfc,
    /// CCCD improperly configured
    CccdImproperlyConfigured = 0xfd,
    /// procedure already in progress
    ProcedureAlreadyInProgress = 0xfe,
    /// out of range
    OutOfRange = 0xff,
}

/// Bluetooth Attribute Protocol error. See the Bluetooth Core Specification, Vol 3, Part F, §3.4.1.1
#[derive(Debug, displaydoc::Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttError {
    /// {0}
    Known(AttErrorCode),
    /// application specific error: {0}
    Application(u8),
    /// unknown error: {0}
    Reserved(u8),
}

impl From<u8> for AttError {
    fn from(number: u8) -> Self {
        match AttErrorCode::try_from(number) {
            Ok(code) => AttError::Known(code),
            Err(_) => {
                if (0x80..0xa0).contains(&number) {
                    AttError::Application(number)
                } else {
                    AttError::Reserved(number)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn att_error_from_code() {
        assert_eq!(AttError::from(0x05), AttError::Known(AttErrorCode::InsufficientAuthentication));
        assert_eq!(AttError::from(0x85), AttError::Application(0x85));
        assert_eq!(AttError::from(0x30), AttError::Reserved(0x30));
        assert_eq!(AttError::from(0x0a).to_string(), "attribute not found");
    }

    #[test]
    fn display_includes_message_and_source() {
        let err = Error::new(ErrorKind::NotFound, None, "looking up device");
        assert_eq!(err.to_string(), "not found: looking up device");

        let err: Error = ErrorKind::Protocol(AttError::from(0x02)).into();
        assert_eq!(err.to_string(), "protocol error: read not permitted");
    }
}
