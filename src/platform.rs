//! The operating system's Bluetooth stack, as seen by the scan pipeline
//!
//! Blescan never talks to a radio itself. Everything it needs from the platform is expressed by the traits in this
//! module, implemented by [`SystemPlatform`][crate::SystemPlatform] for the real Bluetooth stack and by in-memory
//! doubles in tests.

use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;

use crate::record::{DeviceDetails, GattStatus};
use crate::{AdvertisementEvent, CharacteristicProperties, Result, ScanMode, Uuid};

/// A stream of received advertisements. Dropping the stream stops the underlying scan.
pub type EventStream = Pin<Box<dyn Stream<Item = AdvertisementEvent> + Send + 'static>>;

/// Entry point into a Bluetooth stack
#[async_trait]
pub trait Platform: Send + Sync + 'static {
    /// The device handle returned by [`Platform::lookup_device`]
    type Device: PlatformDevice;

    /// Starts watching for advertisements in the given `mode`.
    ///
    /// An error here means scanning could not begin at all (no adapter, radio switched off, permission denied).
    async fn start_watching(&self, mode: ScanMode) -> Result<EventStream>;

    /// Looks up the device with the given 48-bit `address`.
    ///
    /// Returns `Ok(None)` when the platform does not know the device.
    async fn lookup_device(&self, address: u64) -> Result<Option<Self::Device>>;
}

/// A device known to the platform
#[async_trait]
pub trait PlatformDevice: Send + Sync + 'static {
    /// The GATT service handle returned by [`PlatformDevice::gatt_services`]
    type Service: PlatformService;

    /// The device's name, if it has a non-empty one
    async fn name(&self) -> Result<Option<String>>;

    /// Identity and pairing information
    async fn details(&self) -> Result<DeviceDetails>;

    /// Requests the device's primary GATT services, connecting to it if necessary.
    ///
    /// A failed GATT exchange is reported through [`GattServices::status`] rather than as an error.
    async fn gatt_services(&self) -> Result<GattServices<Self::Service>>;
}

/// The answer to a GATT service request
#[derive(Debug, Clone)]
pub struct GattServices<S> {
    /// Outcome of the request
    pub status: GattStatus,
    /// The services found; empty unless `status` is [`GattStatus::Success`]
    pub services: Vec<S>,
}

impl<S> GattServices<S> {
    /// A request that failed with `status`
    pub fn failed(status: GattStatus) -> Self {
        GattServices {
            status,
            services: Vec::new(),
        }
    }
}

/// A remote GATT service
#[async_trait]
pub trait PlatformService: Send + Sync + 'static {
    /// The [`Uuid`] identifying the type of this service
    fn uuid(&self) -> Uuid;

    /// Enumerates the characteristics of this service
    async fn characteristics(&self) -> Result<Vec<CharacteristicInfo>>;
}

/// What the platform reports about one characteristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacteristicInfo {
    /// The [`Uuid`] identifying the type of this characteristic
    pub uuid: Uuid,
    /// The operations the characteristic supports
    pub properties: CharacteristicProperties,
}
