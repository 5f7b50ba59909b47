//! Writing reports to the terminal

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use colored::{ColoredString, Colorize};
use tracing::debug;

use crate::hex::{format_address, format_bytes};
use crate::record::{DeviceDetails, GattSnapshot, GattStatus, Resolution, ResolvedRecord};
use crate::AdvertisementEvent;

/// Printed instead of a report when resolution failed
pub const FAILURE_LINE: &str = "(failed to get information)";

/// Printed in place of the characteristics of a service that could not be enumerated
pub const CHARACTERISTICS_FAILED_LINE: &str = "(characteristic enumeration failed)";

/// Which optional blocks a report contains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DisplayOptions {
    /// Device identity and pairing details
    pub info: bool,
    /// GATT services and characteristics
    pub gatt: bool,
    /// Manufacturer data blocks
    pub manufacturer: bool,
    /// Raw advertising data sections
    pub section: bool,
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Plain,
    Timestamp,
    Address,
    Label,
    Name,
    FriendlyName,
    Flags,
    Failure,
    Hex,
}

impl Style {
    fn apply(self, text: &str) -> ColoredString {
        match self {
            Style::Plain => text.normal(),
            Style::Timestamp => text.bright_cyan(),
            Style::Address => text.cyan(),
            Style::Label => text.bright_yellow(),
            Style::Name => text.bright_magenta(),
            Style::FriendlyName => text.bright_blue(),
            Style::Flags => text.bright_green(),
            Style::Failure => text.bright_red(),
            Style::Hex => text.green(),
        }
    }
}

/// A report being composed. All styling is resolved into `text` before anything is written.
struct Report {
    text: String,
    color: bool,
}

impl Report {
    fn push(&mut self, style: Style, text: &str) -> &mut Self {
        if self.color {
            self.text.push_str(&style.apply(text).to_string());
        } else {
            self.text.push_str(text);
        }
        self
    }

    fn plain(&mut self, text: &str) -> &mut Self {
        self.push(Style::Plain, text)
    }

    fn end_line(&mut self) {
        self.text.push('\n');
    }

    fn line(&mut self, style: Style, text: &str) {
        self.push(style, text).end_line();
    }

    fn field(&mut self, label: &str, value: impl std::fmt::Display) {
        self.push(Style::Label, label).plain(&format!(" {value}")).end_line();
    }

    fn hex_rows(&mut self, data: &[u8]) {
        self.line(Style::Label, "Data:");
        for row in format_bytes(data) {
            self.line(Style::Hex, &row);
        }
    }
}

/// Serializes reports onto a shared output.
///
/// Each report is composed in full and then written with a single locked write, so reports rendered from different
/// tasks at the same time never interleave.
#[derive(Debug)]
pub struct ReportRenderer<W> {
    out: Mutex<W>,
    display: DisplayOptions,
    color: bool,
}

impl<W: Write> ReportRenderer<W> {
    /// Creates a renderer writing to `out`. Reports are colored with ANSI escapes when `color` is set.
    pub fn new(out: W, display: DisplayOptions, color: bool) -> Self {
        ReportRenderer {
            out: Mutex::new(out),
            display,
            color,
        }
    }

    /// The blocks this renderer includes
    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Writes the report for `resolution`.
    ///
    /// Write errors, such as a closed stdout, are logged and otherwise ignored.
    pub fn render(&self, resolution: &Resolution) {
        let text = self.compose(resolution);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            debug!("dropping report: {}", err);
        }
    }

    /// Composes the report for `resolution` without writing it.
    pub fn compose(&self, resolution: &Resolution) -> String {
        let mut report = Report {
            text: String::new(),
            color: self.color,
        };

        match resolution {
            Resolution::Resolved(record) => self.compose_record(&mut report, record),
            Resolution::Failed { .. } => report.line(Style::Failure, FAILURE_LINE),
        }

        report.text
    }

    /// Consumes the renderer, returning the output
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn compose_record(&self, report: &mut Report, record: &ResolvedRecord) {
        let event = &record.event;
        report
            .push(Style::Timestamp, &event.timestamp.format("%H:%M:%S%.3f").to_string())
            .plain(" [")
            .push(Style::Address, &format_address(event.address))
            .plain("] ")
            .push(Style::Label, "RSSI:")
            .plain(&event.rssi.to_string())
            .plain(" ")
            .line(Style::Name, &record.name);

        if self.display.info {
            if let Some(details) = &record.details {
                compose_details(report, details);
            }
        }

        if self.display.gatt {
            if let Some(gatt) = &record.gatt {
                compose_gatt(report, gatt);
            }
        }

        if self.display.manufacturer {
            compose_manufacturer_data(report, event);
        }

        if self.display.section {
            compose_data_sections(report, event);
        }
    }
}

fn compose_details(report: &mut Report, details: &DeviceDetails) {
    report.field("DeviceId:", &details.device_id);
    report.field("AddressType:", details.address_type);
    report.field("ConnectionStatus:", details.connection_status);
    report.field("ProtectionLevel:", details.protection_level);
    report.field("IsPaired:", details.is_paired);
    report.field("CanPair:", details.can_pair);
}

fn compose_gatt(report: &mut Report, gatt: &GattSnapshot) {
    if gatt.status != GattStatus::Success {
        report
            .push(Style::Label, "GattServices:")
            .line(Style::Failure, &format!(" {}", gatt.status));
        return;
    }

    report.line(Style::Label, "GattServices:");
    for service in &gatt.services {
        report
            .plain(&format!("  {}    ", service.uuid))
            .line(Style::FriendlyName, &service.name);

        match &service.characteristics {
            Ok(characteristics) => {
                for characteristic in characteristics {
                    report
                        .plain(&format!("    {}    ", characteristic.uuid))
                        .push(Style::FriendlyName, &characteristic.name)
                        .plain(" [")
                        .push(Style::Flags, &characteristic.properties.to_string())
                        .plain("]")
                        .end_line();
                }
            }
            Err(_) => report.line(Style::Failure, &format!("    {CHARACTERISTICS_FAILED_LINE}")),
        }
    }
}

fn compose_manufacturer_data(report: &mut Report, event: &AdvertisementEvent) {
    for block in &event.manufacturer_data {
        report.field("CompanyId:", format_args!("0x{:04X}", block.company_id));
        report.hex_rows(&block.data);
    }
}

fn compose_data_sections(report: &mut Report, event: &AdvertisementEvent) {
    for section in &event.data_sections {
        report.field("DataType:", format_args!("0x{:02X}", section.data_type));
        report.hex_rows(&section.data);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};

    use super::*;
    use crate::error::{AttError, ErrorKind};
    use crate::record::{AddressType, CharacteristicEntry, ConnectionStatus, ProtectionLevel, ServiceEntry};
    use crate::{btuuid, CharacteristicProperties, DataSection, Error, ManufacturerData};

    fn event() -> AdvertisementEvent {
        AdvertisementEvent {
            address: 0xAABBCCDDEEFF,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_milli_opt(3, 4, 5, 678)
                .unwrap()
                .and_local_timezone(Local)
                .unwrap(),
            rssi: -67,
            manufacturer_data: vec![ManufacturerData {
                company_id: 0x004C,
                data: (0..17).collect(),
            }],
            data_sections: vec![DataSection {
                data_type: 0x01,
                data: vec![0x06],
            }],
        }
    }

    fn record() -> ResolvedRecord {
        ResolvedRecord {
            event: event(),
            name: "Thermometer".to_string(),
            details: Some(DeviceDetails {
                device_id: "BluetoothLE#BluetoothLE00:11:22:33:44:55-aa:bb:cc:dd:ee:ff".to_string(),
                address_type: AddressType::Public,
                connection_status: ConnectionStatus::Disconnected,
                protection_level: ProtectionLevel::None,
                is_paired: false,
                can_pair: true,
            }),
            gatt: Some(GattSnapshot {
                status: GattStatus::Success,
                services: vec![
                    ServiceEntry {
                        uuid: btuuid::bluetooth_uuid_from_u16(0x1800),
                        name: "Generic Access".to_string(),
                        characteristics: Err("not connected".to_string()),
                    },
                    ServiceEntry {
                        uuid: btuuid::bluetooth_uuid_from_u16(0x180F),
                        name: "Battery".to_string(),
                        characteristics: Ok(vec![CharacteristicEntry {
                            uuid: btuuid::bluetooth_uuid_from_u16(0x2A19),
                            name: "Battery Level".to_string(),
                            properties: CharacteristicProperties::from_bits(0b1_0010),
                        }]),
                    },
                ],
            }),
        }
    }

    fn all() -> DisplayOptions {
        DisplayOptions {
            info: true,
            gatt: true,
            manufacturer: true,
            section: true,
        }
    }

    #[test]
    fn header_only() {
        let renderer = ReportRenderer::new(Vec::new(), DisplayOptions::default(), false);
        let text = renderer.compose(&Resolution::Resolved(record()));
        assert_eq!(text, "03:04:05.678 [AA:BB:CC:DD:EE:FF] RSSI:-67 Thermometer\n");
    }

    #[test]
    fn full_report() {
        let renderer = ReportRenderer::new(Vec::new(), all(), false);
        let text = renderer.compose(&Resolution::Resolved(record()));
        let expected = "\
03:04:05.678 [AA:BB:CC:DD:EE:FF] RSSI:-67 Thermometer
DeviceId: BluetoothLE#BluetoothLE00:11:22:33:44:55-aa:bb:cc:dd:ee:ff
AddressType: Public
ConnectionStatus: Disconnected
ProtectionLevel: None
IsPaired: false
CanPair: true
GattServices:
  00001800-0000-1000-8000-00805f9b34fb    Generic Access
    (characteristic enumeration failed)
  0000180f-0000-1000-8000-00805f9b34fb    Battery
    00002a19-0000-1000-8000-00805f9b34fb    Battery Level [Read, Notify]
CompanyId: 0x004C
Data:
 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F
 10
DataType: 0x01
Data:
 06
";
        assert_eq!(text, expected);
    }

    #[test]
    fn gatt_failure_status() {
        let mut record = record();
        record.gatt = Some(GattSnapshot {
            status: GattStatus::ProtocolError(AttError::from(0x05)),
            services: Vec::new(),
        });
        let renderer = ReportRenderer::new(
            Vec::new(),
            DisplayOptions {
                gatt: true,
                ..Default::default()
            },
            false,
        );
        let text = renderer.compose(&Resolution::Resolved(record));
        assert!(text.ends_with("GattServices: ProtocolError (insufficient authentication)\n"));
        assert!(!text.contains("Generic Access"));
    }

    #[test]
    fn absent_blocks_are_skipped() {
        let mut record = record();
        record.details = None;
        record.gatt = None;
        record.event.manufacturer_data.clear();
        let renderer = ReportRenderer::new(Vec::new(), all(), false);
        let text = renderer.compose(&Resolution::Resolved(record));
        assert!(!text.contains("DeviceId:"));
        assert!(!text.contains("GattServices:"));
        assert!(!text.contains("CompanyId:"));
        assert!(text.contains("DataType: 0x01\n"));
    }

    #[test]
    fn failure_line() {
        let renderer = ReportRenderer::new(Vec::new(), all(), false);
        let resolution = Resolution::Failed {
            event: event(),
            error: Error::from(ErrorKind::Internal),
        };
        renderer.render(&resolution);
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "(failed to get information)\n");
    }

    /// Refuses every write, remembering how many bytes each attempt offered
    #[derive(Default)]
    struct ClosedOutput {
        attempts: Vec<usize>,
    }

    impl Write for ClosedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.attempts.push(buf.len());
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn closed_output_is_ignored() {
        let renderer = ReportRenderer::new(ClosedOutput::default(), all(), false);
        let resolution = Resolution::Resolved(record());
        let len = renderer.compose(&resolution).len();

        renderer.render(&resolution);
        renderer.render(&resolution);

        // one attempt per report, each offering the whole report
        assert_eq!(renderer.into_inner().attempts, vec![len, len]);
    }

    #[test]
    fn color_keeps_content() {
        colored::control::set_override(true);
        let renderer = ReportRenderer::new(Vec::new(), all(), true);
        let text = renderer.compose(&Resolution::Resolved(record()));
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("AA:BB:CC:DD:EE:FF"));
        assert!(text.contains("Battery Level"));
    }
}
