use crate::error::ErrorKind;

impl From<bluer::Error> for crate::Error {
    fn from(err: bluer::Error) -> Self {
        crate::Error::new(kind_from_bluer(&err), Some(Box::new(err)), String::new())
    }
}

pub(super) fn kind_from_bluer(err: &bluer::Error) -> ErrorKind {
    match err.kind {
        bluer::ErrorKind::ConnectionAttemptFailed => ErrorKind::ConnectionFailed,
        bluer::ErrorKind::NotAuthorized => ErrorKind::NotAuthorized,
        bluer::ErrorKind::NotPermitted => ErrorKind::NotAuthorized,
        bluer::ErrorKind::NotReady => ErrorKind::AdapterUnavailable,
        bluer::ErrorKind::NotAvailable => ErrorKind::AdapterUnavailable,
        bluer::ErrorKind::NotSupported => ErrorKind::NotSupported,
        bluer::ErrorKind::NotFound => ErrorKind::NotFound,
        bluer::ErrorKind::DoesNotExist => ErrorKind::NotFound,
        bluer::ErrorKind::InvalidArguments
        | bluer::ErrorKind::InvalidLength
        | bluer::ErrorKind::InvalidOffset
        | bluer::ErrorKind::InvalidAddress(_)
        | bluer::ErrorKind::InvalidName(_) => ErrorKind::Internal,
        _ => ErrorKind::Other,
    }
}
