use async_trait::async_trait;
use tracing::debug;
use windows::Devices::Bluetooth::GenericAttributeProfile::GattDeviceService;
use windows::Devices::Bluetooth::{BluetoothAddressType, BluetoothConnectionStatus, BluetoothLEDevice};
use windows::Devices::Enumeration::DevicePairingProtectionLevel;

use super::error::{check_communication_status, gatt_status};
use crate::platform::{CharacteristicInfo, GattServices, PlatformDevice, PlatformService};
use crate::record::{AddressType, ConnectionStatus, DeviceDetails, GattStatus, ProtectionLevel};
use crate::{CharacteristicProperties, Result, Uuid};

/// A Bluetooth LE device
#[derive(Debug, Clone)]
pub struct Device {
    inner: BluetoothLEDevice,
}

impl Device {
    pub(super) fn new(inner: BluetoothLEDevice) -> Self {
        Device { inner }
    }
}

#[async_trait]
impl PlatformDevice for Device {
    type Service = Service;

    async fn name(&self) -> Result<Option<String>> {
        let name = self.inner.Name()?.to_string_lossy();
        Ok((!name.is_empty()).then_some(name))
    }

    async fn details(&self) -> Result<DeviceDetails> {
        let address_type = match self.inner.BluetoothAddressType()? {
            BluetoothAddressType::Public => AddressType::Public,
            BluetoothAddressType::Random => AddressType::Random,
            _ => AddressType::Unspecified,
        };
        let connection_status = match self.inner.ConnectionStatus()? {
            BluetoothConnectionStatus::Connected => ConnectionStatus::Connected,
            _ => ConnectionStatus::Disconnected,
        };

        let pairing = self.inner.DeviceInformation()?.Pairing()?;
        let protection_level = match pairing.ProtectionLevel()? {
            DevicePairingProtectionLevel::None => ProtectionLevel::None,
            DevicePairingProtectionLevel::Encryption => ProtectionLevel::Encryption,
            DevicePairingProtectionLevel::EncryptionAndAuthentication => ProtectionLevel::EncryptionAndAuthentication,
            _ => ProtectionLevel::Default,
        };

        Ok(DeviceDetails {
            device_id: self.inner.DeviceId()?.to_string_lossy(),
            address_type,
            connection_status,
            protection_level,
            is_paired: pairing.IsPaired()?,
            can_pair: pairing.CanPair()?,
        })
    }

    async fn gatt_services(&self) -> Result<GattServices<Service>> {
        let res = self.inner.GetGattServicesAsync()?.await?;
        let status = gatt_status(res.Status()?, res.ProtocolError())?;
        if status != GattStatus::Success {
            debug!("GetGattServicesAsync returned {}", status);
            return Ok(GattServices::failed(status));
        }

        let services = res
            .Services()?
            .into_iter()
            .map(Service::new)
            .collect::<Result<_>>()?;

        Ok(GattServices { status, services })
    }
}

/// A Bluetooth GATT service
#[derive(Debug, Clone)]
pub struct Service {
    inner: GattDeviceService,
    uuid: Uuid,
}

impl Service {
    fn new(inner: GattDeviceService) -> Result<Self> {
        let uuid = Uuid::from_u128(inner.Uuid()?.to_u128());
        Ok(Service { inner, uuid })
    }
}

#[async_trait]
impl PlatformService for Service {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    async fn characteristics(&self) -> Result<Vec<CharacteristicInfo>> {
        let res = self.inner.GetCharacteristicsAsync()?.await?;
        check_communication_status(res.Status()?, res.ProtocolError(), "discovering characteristics")?;

        let mut characteristics = Vec::new();
        for characteristic in res.Characteristics()? {
            characteristics.push(CharacteristicInfo {
                uuid: Uuid::from_u128(characteristic.Uuid()?.to_u128()),
                properties: CharacteristicProperties::from_bits(characteristic.CharacteristicProperties()?.0),
            });
        }
        Ok(characteristics)
    }
}
