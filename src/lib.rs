#![warn(missing_docs)]

//! Blescan watches for Bluetooth Low Energy [advertisements] and prints what each one carries: when it was seen, who
//! sent it, how strong the signal was, and, on request, the sender's identity, its GATT services, and the raw
//! manufacturer data and data sections from the packet.
//!
//! [advertisements]: https://www.bluetooth.com/specifications/specs/
//!
//! # Usage
//!
//! ```rust,no_run
//!# use std::io;
//!# use blescan::{DisplayOptions, ScanMode, ScanOptions, ScanPipeline};
//!# #[cfg(any(target_os = "linux", target_os = "windows"))]
//!# #[tokio::main]
//!# async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!let platform = blescan::SystemPlatform::new().await?;
//!let options = ScanOptions {
//!    mode: ScanMode::Passive,
//!    once: true,
//!    display: DisplayOptions { manufacturer: true, ..Default::default() },
//!    color: false,
//!};
//!let mut pipeline = ScanPipeline::new(platform, io::stdout(), options);
//!pipeline.start().await?;
//!tokio::signal::ctrl_c().await?;
//!pipeline.stop().await;
//!#
//!#    Ok(())
//!# }
//!# #[cfg(not(any(target_os = "linux", target_os = "windows")))]
//!# fn main() {}
//! ```
//!
//! # Overview
//!
//! Every advertisement delivered by the platform flows through the same stages:
//!
//! - [Deduplication][AddressDeduplicator], only when [`ScanOptions::once`] is set. Repeated addresses are dropped
//!   before any other work happens.
//! - [Resolution][DeviceInfoResolver], which looks the sender up through the [`Platform`] and optionally connects to
//!   enumerate its GATT database. Resolution of different events runs concurrently.
//! - [Rendering][ReportRenderer], which writes the whole report for one event in a single locked write so reports
//!   from concurrent events never interleave.
//!
//! The [`ScanPipeline`] owns all three and drives them from the platform's advertisement stream.
//!
//! # Platform specifics
//!
//! The platform is reached through the [`Platform`] trait. Two implementations are provided as [`SystemPlatform`]:
//!
//! - Linux, through BlueZ. BlueZ does not expose raw advertisement packets; each property change reported for a
//!   device during discovery is treated as one advertisement. BlueZ discovery is always active, so
//!   [`ScanMode::Passive`] is accepted but behaves like [`ScanMode::Active`].
//! - Windows, through the WinRT advertisement watcher, which reports every received packet.
//!
//! CoreBluetooth never exposes device addresses to applications, so MacOS and iOS are not supported.
//!
//! # Feature flags
//!
//! The `serde` feature is available to enable serializing/deserializing advertisements and resolved records.

pub mod btuuid;
pub mod cli;
pub mod dedup;
pub mod error;
pub mod hex;
pub mod pipeline;
pub mod platform;
pub mod record;
pub mod render;
pub mod resolver;

#[cfg(target_os = "linux")]
mod bluer;
#[cfg(target_os = "windows")]
mod windows;

use chrono::{DateTime, Local};

pub use dedup::AddressDeduplicator;
pub use error::Error;
pub use pipeline::{ScanOptions, ScanPipeline, SessionState};
pub use platform::{Platform, PlatformDevice, PlatformService};
pub use record::{DeviceDetails, GattSnapshot, GattStatus, Resolution, ResolvedRecord};
pub use render::{DisplayOptions, ReportRenderer};
pub use resolver::DeviceInfoResolver;
#[cfg(any(target_os = "linux", target_os = "windows"))]
pub use sys::platform::SystemPlatform;
pub use uuid::Uuid;

#[cfg(target_os = "linux")]
use crate::bluer as sys;
#[cfg(target_os = "windows")]
use crate::windows as sys;

/// Convenience alias for a result with [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// How the radio listens for advertisements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanMode {
    /// Only listen; never send scan requests
    #[default]
    Passive,
    /// Send scan requests so that scan responses are received as well
    Active,
}

/// One advertisement packet as received from the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvertisementEvent {
    /// The 48-bit Bluetooth address of the sender, stored in the low bits
    pub address: u64,
    /// When the packet was received
    pub timestamp: DateTime<Local>,
    /// The signal strength in dBm of the received packet
    pub rssi: i16,
    /// Manufacturer specific data blocks (CSS §A.1.4), in the order the platform delivered them
    pub manufacturer_data: Vec<ManufacturerData>,
    /// Every advertising data structure in the packet, in the order the platform delivered them
    pub data_sections: Vec<DataSection>,
}

/// Manufacturer specific data included in Bluetooth advertisements. See the Bluetooth Core Specification Supplement
/// §A.1.4 for details.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManufacturerData {
    /// Company identifier (defined [here](https://www.bluetooth.com/specifications/assigned-numbers/company-identifiers/))
    pub company_id: u16,
    /// Manufacturer specific data
    pub data: Vec<u8>,
}

/// A single advertising data structure (Core Specification Vol 3, Part C, §11).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSection {
    /// The AD type (defined [here](https://www.bluetooth.com/specifications/assigned-numbers/))
    pub data_type: u8,
    /// The AD data, without the length and type octets
    pub data: Vec<u8>,
}

/// GATT characteristic properties as defined in the Bluetooth Core Specification, Vol 3, Part G, §3.3.1.1.
/// Extended properties are also included as defined in §3.3.3.1.
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacteristicProperties {
    pub broadcast: bool,
    pub read: bool,
    pub write_without_response: bool,
    pub write: bool,
    pub notify: bool,
    pub indicate: bool,
    pub authenticated_signed_writes: bool,
    pub extended_properties: bool,
    pub reliable_write: bool,
    pub writable_auxiliaries: bool,
}

impl CharacteristicProperties {
    /// Raw transmutation from [`u32`].
    ///
    /// Extended properties are in the upper bits.
    pub fn from_bits(bits: u32) -> Self {
        CharacteristicProperties {
            broadcast: (bits & (1 << 0)) != 0,
            read: (bits & (1 << 1)) != 0,
            write_without_response: (bits & (1 << 2)) != 0,
            write: (bits & (1 << 3)) != 0,
            notify: (bits & (1 << 4)) != 0,
            indicate: (bits & (1 << 5)) != 0,
            authenticated_signed_writes: (bits & (1 << 6)) != 0,
            extended_properties: (bits & (1 << 7)) != 0,
            reliable_write: (bits & (1 << 8)) != 0,
            writable_auxiliaries: (bits & (1 << 9)) != 0,
        }
    }

    fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (self.broadcast, "Broadcast"),
            (self.read, "Read"),
            (self.write_without_response, "WriteWithoutResponse"),
            (self.write, "Write"),
            (self.notify, "Notify"),
            (self.indicate, "Indicate"),
            (self.authenticated_signed_writes, "AuthenticatedSignedWrites"),
            (self.extended_properties, "ExtendedProperties"),
            (self.reliable_write, "ReliableWrites"),
            (self.writable_auxiliaries, "WritableAuxiliaries"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}

/// Lists the set properties separated by `", "`, or `None` when no property is set.
impl std::fmt::Display for CharacteristicProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.names().peekable();
        if names.peek().is_none() {
            return f.write_str("None");
        }

        for (i, name) in names.enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
