use std::future::Future;

use async_trait::async_trait;
use bluer::{DeviceEvent, DeviceProperty};
use futures_lite::StreamExt;
use tracing::debug;

use crate::error::ErrorKind;
use crate::platform::{CharacteristicInfo, GattServices, PlatformDevice, PlatformService};
use crate::record::{AddressType, ConnectionStatus, DeviceDetails, GattStatus, ProtectionLevel};
use crate::{Error, Result, Uuid};

/// A Bluetooth LE device known to BlueZ
#[derive(Debug, Clone)]
pub struct Device {
    inner: bluer::Device,
}

impl Device {
    pub(super) fn new(inner: bluer::Device) -> Self {
        Device { inner }
    }

    /// Waits until BlueZ has finished resolving the device's GATT database.
    async fn services_resolved(&self) -> Result<()> {
        // Subscribe before checking so the change cannot be missed.
        let events = self.inner.events().await?;
        futures_lite::pin!(events);
        if self.inner.is_services_resolved().await? {
            return Ok(());
        }

        while let Some(event) = events.next().await {
            match event {
                DeviceEvent::PropertyChanged(DeviceProperty::ServicesResolved(true)) => return Ok(()),
                DeviceEvent::PropertyChanged(DeviceProperty::Connected(false)) => {
                    return Err(ErrorKind::NotConnected.into())
                }
                _ => {}
            }
        }

        Err(Error::new(ErrorKind::Internal, None, "device event stream closed unexpectedly"))
    }

    /// Reads every primary service and its characteristics while connected.
    async fn read_services(&self) -> Result<Vec<Service>> {
        self.services_resolved().await?;

        let mut services = Vec::new();
        for service in self.inner.services().await? {
            if !service.primary().await.unwrap_or(true) {
                continue;
            }
            let uuid = service.uuid().await?;
            let characteristics = read_characteristics(&service).await;
            services.push(Service { uuid, characteristics });
        }
        Ok(services)
    }
}

#[async_trait]
impl PlatformDevice for Device {
    type Service = Service;

    async fn name(&self) -> Result<Option<String>> {
        self.inner.name().await.map_err(Into::into)
    }

    async fn details(&self) -> Result<DeviceDetails> {
        let address_type = match self.inner.address_type().await? {
            bluer::AddressType::LePublic => AddressType::Public,
            bluer::AddressType::LeRandom => AddressType::Random,
            _ => AddressType::Unspecified,
        };
        let connection_status = if self.inner.is_connected().await? {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        };
        let is_paired = self.inner.is_paired().await?;

        Ok(DeviceDetails {
            device_id: format!("{}/{}", self.inner.adapter_name(), self.inner.address()),
            address_type,
            connection_status,
            protection_level: if is_paired {
                ProtectionLevel::Encryption
            } else {
                ProtectionLevel::None
            },
            is_paired,
            can_pair: !is_paired,
        })
    }

    async fn gatt_services(&self) -> Result<GattServices<Service>> {
        let was_connected = self.inner.is_connected().await?;
        // Armed before connecting, so a cancelled connection attempt is torn down too.
        let disconnect = (!was_connected).then(|| CleanupOnDrop::new(disconnect_from(self.inner.clone())));
        if !was_connected {
            if let Err(err) = self.inner.connect().await {
                debug!("connecting to {} failed: {}", self.inner.address(), err);
                return Ok(GattServices::failed(GattStatus::Unreachable));
            }
        }

        let res = self.read_services().await;

        if let Some(disconnect) = disconnect {
            disconnect.run().await;
        }

        match res {
            Ok(services) => Ok(GattServices {
                status: GattStatus::Success,
                services,
            }),
            Err(err) => match err.kind() {
                ErrorKind::NotAuthorized => Ok(GattServices::failed(GattStatus::AccessDenied)),
                ErrorKind::NotConnected | ErrorKind::ConnectionFailed => {
                    Ok(GattServices::failed(GattStatus::Unreachable))
                }
                _ => Err(err),
            },
        }
    }
}

async fn disconnect_from(device: bluer::Device) {
    if let Err(err) = device.disconnect().await {
        debug!("disconnecting from {} failed: {}", device.address(), err);
    }
}

/// Holds a cleanup future that must run even if the owning future is dropped.
///
/// [`CleanupOnDrop::run`] awaits it in place. Dropped unrun, it is spawned onto the current runtime instead.
struct CleanupOnDrop<F: Future<Output = ()> + Send + 'static> {
    cleanup: Option<F>,
}

impl<F: Future<Output = ()> + Send + 'static> CleanupOnDrop<F> {
    fn new(cleanup: F) -> Self {
        CleanupOnDrop { cleanup: Some(cleanup) }
    }

    async fn run(mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup.await;
        }
    }
}

impl<F: Future<Output = ()> + Send + 'static> Drop for CleanupOnDrop<F> {
    fn drop(&mut self) {
        let Some(cleanup) = self.cleanup.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(cleanup);
            }
            Err(_) => debug!("no runtime left to run cleanup on"),
        }
    }
}

async fn read_characteristics(service: &bluer::gatt::remote::Service) -> Result<Vec<CharacteristicInfo>, bluer::Error> {
    let mut res = Vec::new();
    for characteristic in service.characteristics().await? {
        res.push(CharacteristicInfo {
            uuid: characteristic.uuid().await?,
            properties: characteristic.flags().await?.into(),
        });
    }
    Ok(res)
}

/// A primary GATT service, read while the device was connected
#[derive(Debug, Clone)]
pub struct Service {
    uuid: Uuid,
    characteristics: Result<Vec<CharacteristicInfo>, bluer::Error>,
}

#[async_trait]
impl PlatformService for Service {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    async fn characteristics(&self) -> Result<Vec<CharacteristicInfo>> {
        self.characteristics.clone().map_err(Into::into)
    }
}

impl From<bluer::gatt::CharacteristicFlags> for crate::CharacteristicProperties {
    fn from(flags: bluer::gatt::CharacteristicFlags) -> Self {
        crate::CharacteristicProperties {
            broadcast: flags.broadcast,
            read: flags.read,
            write_without_response: flags.write_without_response,
            write: flags.write,
            notify: flags.notify,
            indicate: flags.indicate,
            authenticated_signed_writes: flags.authenticated_signed_writes,
            extended_properties: flags.extended_properties,
            reliable_write: flags.reliable_write,
            writable_auxiliaries: flags.writable_auxiliaries,
        }
    }
}
