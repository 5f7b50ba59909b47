//! Turning a bare address into device information

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::hex::format_address;
use crate::platform::{GattServices, Platform, PlatformDevice, PlatformService};
use crate::record::{
    CharacteristicEntry, DeviceDetails, GattSnapshot, GattStatus, Resolution, ResolvedRecord, ServiceEntry,
    UNKNOWN_NAME,
};
use crate::render::DisplayOptions;
use crate::{btuuid, AdvertisementEvent, Result};

/// A device found by [`DeviceInfoResolver::resolve_identity`]
#[derive(Debug, Clone)]
pub struct DeviceIdentity<D> {
    /// The device name, [`UNKNOWN_NAME`] when the device has none
    pub name: String,
    /// The platform's handle to the device
    pub device: D,
}

/// Fetches identity and GATT information for advertisement senders.
///
/// The resolver holds no mutable state, so any number of resolutions may run concurrently.
#[derive(Debug)]
pub struct DeviceInfoResolver<P> {
    platform: Arc<P>,
}

impl<P: Platform> DeviceInfoResolver<P> {
    /// Creates a resolver backed by `platform`
    pub fn new(platform: Arc<P>) -> Self {
        DeviceInfoResolver { platform }
    }

    /// The platform this resolver queries
    pub fn platform(&self) -> &Arc<P> {
        &self.platform
    }

    /// Looks up the device with the given address.
    ///
    /// An unknown device is not an error: it resolves to `Ok(None)`.
    pub async fn resolve_identity(&self, address: u64) -> Result<Option<DeviceIdentity<P::Device>>> {
        let Some(device) = self.platform.lookup_device(address).await? else {
            trace!("device {} not found", format_address(address));
            return Ok(None);
        };

        let name = device
            .name()
            .await?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        Ok(Some(DeviceIdentity { name, device }))
    }

    /// Enumerates the GATT services of a resolved device and the characteristics of each service.
    ///
    /// A non-success status from the service request is captured in the snapshot. A failure to enumerate the
    /// characteristics of one service is captured in that service's entry and does not affect the others.
    pub async fn resolve_gatt(&self, identity: &DeviceIdentity<P::Device>) -> Result<GattSnapshot> {
        let GattServices { status, services } = identity.device.gatt_services().await?;
        if status != GattStatus::Success {
            debug!("GATT service request for {} failed: {}", identity.name, status);
            return Ok(GattSnapshot {
                status,
                services: Vec::new(),
            });
        }

        let mut entries = Vec::with_capacity(services.len());
        for service in &services {
            let uuid = service.uuid();
            let characteristics = match service.characteristics().await {
                Ok(characteristics) => Ok(characteristics
                    .into_iter()
                    .map(|c| CharacteristicEntry {
                        uuid: c.uuid,
                        name: btuuid::characteristic_display_name(&c.uuid).to_string(),
                        properties: c.properties,
                    })
                    .collect()),
                Err(err) => {
                    debug!("enumerating characteristics of service {} failed: {}", uuid, err);
                    Err(err.to_string())
                }
            };

            entries.push(ServiceEntry {
                uuid,
                name: btuuid::service_display_name(&uuid).to_string(),
                characteristics,
            });
        }

        Ok(GattSnapshot {
            status,
            services: entries,
        })
    }

    /// Resolves everything `display` asks for about the sender of `event`.
    ///
    /// Never fails: any error is logged and turned into [`Resolution::Failed`] for this event alone.
    pub async fn resolve(&self, event: AdvertisementEvent, display: &DisplayOptions) -> Resolution {
        match self.try_resolve(event.address, display).await {
            Ok(None) => Resolution::Resolved(ResolvedRecord::unknown(event)),
            Ok(Some((name, details, gatt))) => Resolution::Resolved(ResolvedRecord {
                event,
                name,
                details,
                gatt,
            }),
            Err(error) => {
                warn!("failed to resolve {}: {}", format_address(event.address), error);
                Resolution::Failed { event, error }
            }
        }
    }

    async fn try_resolve(
        &self,
        address: u64,
        display: &DisplayOptions,
    ) -> Result<Option<(String, Option<DeviceDetails>, Option<GattSnapshot>)>> {
        let Some(identity) = self.resolve_identity(address).await? else {
            return Ok(None);
        };

        let details = if display.info {
            Some(identity.device.details().await?)
        } else {
            None
        };

        let gatt = if display.gatt {
            Some(self.resolve_gatt(&identity).await?)
        } else {
            None
        };

        Ok(Some((identity.name, details, gatt)))
    }
}
