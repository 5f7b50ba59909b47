#![allow(unused)]

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use blescan::error::ErrorKind;
use blescan::platform::{CharacteristicInfo, EventStream, GattServices, PlatformDevice, PlatformService};
use blescan::record::{AddressType, ConnectionStatus, ProtectionLevel};
use blescan::{
    AdvertisementEvent, CharacteristicProperties, DeviceDetails, Error, GattStatus, ManufacturerData, Platform,
    Result, ScanMode, Uuid,
};
use chrono::Local;
use tokio::sync::mpsc;

pub fn event(address: u64, rssi: i16) -> AdvertisementEvent {
    AdvertisementEvent {
        address,
        timestamp: Local::now(),
        rssi,
        manufacturer_data: vec![ManufacturerData {
            company_id: 0x004C,
            data: vec![0x02, 0x15],
        }],
        data_sections: Vec::new(),
    }
}

pub fn details(address: u64) -> DeviceDetails {
    DeviceDetails {
        device_id: format!("mock/{address:012X}"),
        address_type: AddressType::Random,
        connection_status: ConnectionStatus::Disconnected,
        protection_level: ProtectionLevel::None,
        is_paired: false,
        can_pair: true,
    }
}

/// An in-memory output that can be inspected while the pipeline holds a handle to it
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MockService {
    pub uuid: Uuid,
    pub characteristics: std::result::Result<Vec<CharacteristicInfo>, ErrorKind>,
}

impl MockService {
    pub fn new(uuid: Uuid, characteristics: &[(Uuid, u32)]) -> Self {
        MockService {
            uuid,
            characteristics: Ok(characteristics
                .iter()
                .map(|&(uuid, bits)| CharacteristicInfo {
                    uuid,
                    properties: CharacteristicProperties::from_bits(bits),
                })
                .collect()),
        }
    }

    pub fn failing(uuid: Uuid, kind: ErrorKind) -> Self {
        MockService {
            uuid,
            characteristics: Err(kind),
        }
    }
}

#[async_trait]
impl PlatformService for MockService {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    async fn characteristics(&self) -> Result<Vec<CharacteristicInfo>> {
        self.characteristics
            .clone()
            .map_err(|kind| Error::new(kind, None, "enumerating characteristics"))
    }
}

#[derive(Debug, Clone)]
pub struct MockDevice {
    pub name: Option<String>,
    pub details: std::result::Result<DeviceDetails, ErrorKind>,
    pub status: GattStatus,
    pub services: Vec<MockService>,
    /// How long each query takes to answer
    pub delay: Duration,
}

impl MockDevice {
    pub fn new(address: u64, name: &str) -> Self {
        MockDevice {
            name: Some(name.to_string()),
            details: Ok(details(address)),
            status: GattStatus::Success,
            services: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_services(mut self, services: Vec<MockService>) -> Self {
        self.services = services;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn answer(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl PlatformDevice for MockDevice {
    type Service = MockService;

    async fn name(&self) -> Result<Option<String>> {
        self.answer().await;
        Ok(self.name.clone())
    }

    async fn details(&self) -> Result<DeviceDetails> {
        self.answer().await;
        self.details
            .clone()
            .map_err(|kind| Error::new(kind, None, "reading device details"))
    }

    async fn gatt_services(&self) -> Result<GattServices<MockService>> {
        self.answer().await;
        if self.status != GattStatus::Success {
            return Ok(GattServices::failed(self.status));
        }
        Ok(GattServices {
            status: self.status,
            services: self.services.clone(),
        })
    }
}

/// What a lookup of one address answers
#[derive(Debug, Clone)]
pub enum Lookup {
    Found(MockDevice),
    Fails(ErrorKind),
}

/// A platform whose advertisements are fed by the test through an [`EventSender`]
#[derive(Debug, Default)]
pub struct MockPlatform {
    events: Mutex<Option<mpsc::UnboundedReceiver<AdvertisementEvent>>>,
    lookups: HashMap<u64, Lookup>,
    start_error: Option<ErrorKind>,
    pub watch_calls: AtomicUsize,
    pub lookup_calls: AtomicUsize,
}

pub type EventSender = mpsc::UnboundedSender<AdvertisementEvent>;

impl MockPlatform {
    pub fn new() -> (Self, EventSender) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let platform = MockPlatform {
            events: Mutex::new(Some(receiver)),
            ..Default::default()
        };
        (platform, sender)
    }

    pub fn with_device(mut self, address: u64, device: MockDevice) -> Self {
        self.lookups.insert(address, Lookup::Found(device));
        self
    }

    pub fn with_failing_lookup(mut self, address: u64, kind: ErrorKind) -> Self {
        self.lookups.insert(address, Lookup::Fails(kind));
        self
    }

    pub fn with_start_error(mut self, kind: ErrorKind) -> Self {
        self.start_error = Some(kind);
        self
    }
}

#[async_trait]
impl Platform for MockPlatform {
    type Device = MockDevice;

    async fn start_watching(&self, _mode: ScanMode) -> Result<EventStream> {
        self.watch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = self.start_error {
            return Err(Error::new(kind, None, "starting watcher"));
        }

        let receiver = self
            .events
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| Error::new(ErrorKind::Internal, None, "watcher already started"))?;

        Ok(Box::pin(futures_lite::stream::unfold(receiver, |mut receiver| async move {
            receiver.recv().await.map(|event| (event, receiver))
        })))
    }

    async fn lookup_device(&self, address: u64) -> Result<Option<MockDevice>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        match self.lookups.get(&address) {
            None => Ok(None),
            Some(Lookup::Found(device)) => Ok(Some(device.clone())),
            Some(Lookup::Fails(kind)) => Err(Error::new(*kind, None, "looking up device")),
        }
    }
}
