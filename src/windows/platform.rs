use async_trait::async_trait;
use chrono::{Local, TimeZone};
use futures_lite::StreamExt;
use tracing::{error, trace, warn};
use windows::Devices::Bluetooth::Advertisement::{
    BluetoothLEAdvertisementReceivedEventArgs, BluetoothLEAdvertisementWatcher,
    BluetoothLEAdvertisementWatcherStoppedEventArgs, BluetoothLEScanningMode,
};
use windows::Devices::Bluetooth::{BluetoothAdapter, BluetoothLEDevice};
use windows::Devices::Radios::RadioState;
use windows::Foundation::TypedEventHandler;

use super::device::Device;
use super::read_buffer;
use crate::error::ErrorKind;
use crate::platform::{EventStream, Platform};
use crate::{AdvertisementEvent, DataSection, Error, ManufacturerData, Result, ScanMode};

/// 100ns intervals between 1601-01-01 and 1970-01-01
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

/// The system's Bluetooth stack, reached through WinRT
#[derive(Debug, Clone)]
pub struct SystemPlatform {
    _adapter: BluetoothAdapter,
}

impl SystemPlatform {
    /// Opens the default Bluetooth adapter.
    ///
    /// Fails with [`ErrorKind::AdapterUnavailable`] if there is no adapter, it has no LE support, or its radio is off.
    pub async fn new() -> Result<Self> {
        let adapter = BluetoothAdapter::GetDefaultAsync()?
            .await
            .map_err(|err| Error::new(ErrorKind::AdapterUnavailable, Some(Box::new(err)), "no default adapter"))?;

        if !adapter.IsLowEnergySupported()? {
            return Err(Error::new(
                ErrorKind::AdapterUnavailable,
                None,
                "adapter does not support Bluetooth LE",
            ));
        }

        let radio = adapter.GetRadioAsync()?.await?;
        if radio.State()? != RadioState::On {
            return Err(Error::new(ErrorKind::AdapterUnavailable, None, "Bluetooth radio is off"));
        }

        Ok(SystemPlatform { _adapter: adapter })
    }
}

#[async_trait]
impl Platform for SystemPlatform {
    type Device = Device;

    async fn start_watching(&self, mode: ScanMode) -> Result<EventStream> {
        let watcher = BluetoothLEAdvertisementWatcher::new()?;
        watcher.SetScanningMode(match mode {
            ScanMode::Passive => BluetoothLEScanningMode::Passive,
            ScanMode::Active => BluetoothLEScanningMode::Active,
        })?;

        let (sender, receiver) = futures_channel::mpsc::unbounded();
        let stopped = sender.clone();

        watcher.Received(&TypedEventHandler::new(
            move |_watcher, event_args: &Option<BluetoothLEAdvertisementReceivedEventArgs>| {
                if let Some(event_args) = event_args {
                    match advertisement(event_args) {
                        Ok(event) => {
                            let _ = sender.unbounded_send(event);
                        }
                        Err(err) => warn!("error extracting data from advertisement: {:?}", err),
                    }
                }
                Ok(())
            },
        ))?;

        watcher.Stopped(&TypedEventHandler::new(
            move |_watcher, event_args: &Option<BluetoothLEAdvertisementWatcherStoppedEventArgs>| {
                if let Some(event_args) = event_args {
                    trace!("advertisement watcher stopped: {:?}", event_args.Error());
                }
                stopped.close_channel();
                Ok(())
            },
        ))?;

        watcher.Start()?;
        let guard = StopOnDrop(watcher);

        Ok(Box::pin(receiver.map(move |event| {
            let _guard = &guard;
            event
        })))
    }

    async fn lookup_device(&self, address: u64) -> Result<Option<Device>> {
        match BluetoothLEDevice::FromBluetoothAddressAsync(address)?.await {
            Ok(device) => Ok(Some(Device::new(device))),
            // A null device comes back as an error carrying a success code
            Err(err) if err.code().is_ok() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Stops the watcher once the event stream holding it is dropped
struct StopOnDrop(BluetoothLEAdvertisementWatcher);

impl Drop for StopOnDrop {
    fn drop(&mut self) {
        if let Err(err) = self.0.Stop() {
            error!("error stopping scan: {:?}", err);
        }
    }
}

fn advertisement(event_args: &BluetoothLEAdvertisementReceivedEventArgs) -> windows::core::Result<AdvertisementEvent> {
    let ticks = event_args.Timestamp()?.UniversalTime;
    let timestamp = Local
        .timestamp_millis_opt((ticks - UNIX_EPOCH_TICKS) / 10_000)
        .single()
        .unwrap_or_else(Local::now);

    let adv = event_args.Advertisement()?;

    let manufacturer_data = adv
        .ManufacturerData()?
        .into_iter()
        .map(|x| {
            Ok(ManufacturerData {
                company_id: x.CompanyId()?,
                data: read_buffer(&x.Data()?)?,
            })
        })
        .collect::<windows::core::Result<_>>()?;

    let data_sections = adv
        .DataSections()?
        .into_iter()
        .map(|x| {
            Ok(DataSection {
                data_type: x.DataType()?,
                data: read_buffer(&x.Data()?)?,
            })
        })
        .collect::<windows::core::Result<_>>()?;

    Ok(AdvertisementEvent {
        address: event_args.BluetoothAddress()?,
        timestamp,
        rssi: event_args.RawSignalStrengthInDBm()?,
        manufacturer_data,
        data_sections,
    })
}
