use async_trait::async_trait;
use bluer::{AdapterEvent, DiscoveryFilter, DiscoveryTransport, Session};
use chrono::Local;
use futures_lite::StreamExt;
use tracing::{debug, trace};

use super::device::Device;
use super::{address_from_u64, address_to_u64};
use crate::error::ErrorKind;
use crate::platform::{EventStream, Platform};
use crate::{AdvertisementEvent, DataSection, Error, ManufacturerData, Result, ScanMode};

/// The system's Bluetooth stack, reached through BlueZ
#[derive(Debug, Clone)]
pub struct SystemPlatform {
    _session: Session,
    adapter: bluer::Adapter,
}

impl SystemPlatform {
    /// Connects to BlueZ and selects the default adapter.
    ///
    /// Fails with [`ErrorKind::AdapterUnavailable`] if there is no adapter or it is powered off.
    pub async fn new() -> Result<Self> {
        let session = Session::new().await?;
        let adapter = session
            .default_adapter()
            .await
            .map_err(|err| Error::new(ErrorKind::AdapterUnavailable, Some(Box::new(err)), "no default adapter"))?;

        if !adapter.is_powered().await? {
            return Err(Error::new(
                ErrorKind::AdapterUnavailable,
                None,
                format!("adapter {} is powered off", adapter.name()),
            ));
        }

        Ok(SystemPlatform {
            _session: session,
            adapter,
        })
    }
}

#[async_trait]
impl Platform for SystemPlatform {
    type Device = Device;

    async fn start_watching(&self, mode: ScanMode) -> Result<EventStream> {
        if mode == ScanMode::Passive {
            debug!("BlueZ discovery is always active");
        }

        let mut filter = DiscoveryFilter::default();
        filter.transport = DiscoveryTransport::Le;
        filter.duplicate_data = true;
        self.adapter.set_discovery_filter(filter).await?;

        let adapter = self.adapter.clone();
        let events = self.adapter.discover_devices_with_changes().await?;
        let stream = events
            .then(move |event| {
                let adapter = adapter.clone();
                async move {
                    match event {
                        AdapterEvent::DeviceAdded(addr) => advertisement(&adapter, addr).await,
                        _ => None,
                    }
                }
            })
            .filter_map(|event| event);

        Ok(Box::pin(stream))
    }

    async fn lookup_device(&self, address: u64) -> Result<Option<Device>> {
        let addr = address_from_u64(address);
        if !self.adapter.device_addresses().await?.contains(&addr) {
            return Ok(None);
        }
        Ok(Some(Device::new(self.adapter.device(addr)?)))
    }
}

/// Reads the advertisement state BlueZ holds for `addr`.
///
/// BlueZ reports a device without an RSSI when it was only restored from its cache, which is not a received
/// advertisement.
async fn advertisement(adapter: &bluer::Adapter, addr: bluer::Address) -> Option<AdvertisementEvent> {
    let device = adapter.device(addr).ok()?;
    let Some(rssi) = device.rssi().await.ok().flatten() else {
        trace!("ignoring {} without RSSI", addr);
        return None;
    };

    let mut manufacturer_data: Vec<ManufacturerData> = device
        .manufacturer_data()
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|(company_id, data)| ManufacturerData { company_id, data })
        .collect();
    manufacturer_data.sort();

    let mut data_sections: Vec<DataSection> = device
        .advertising_data()
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|(data_type, data)| DataSection { data_type, data })
        .collect();
    data_sections.sort();

    Some(AdvertisementEvent {
        address: address_to_u64(addr),
        timestamp: Local::now(),
        rssi,
        manufacturer_data,
        data_sections,
    })
}
