mod common;

use std::sync::Arc;

use blescan::btuuid::{bluetooth_uuid_from_u16, UNKNOWN_CHARACTERISTIC, UNKNOWN_SERVICE};
use blescan::error::{AttError, AttErrorCode, ErrorKind};
use blescan::record::UNKNOWN_NAME;
use blescan::{DeviceInfoResolver, DisplayOptions, GattStatus, Resolution, ResolvedRecord, Uuid};
use common::{event, MockDevice, MockPlatform, MockService};

const SENSOR: u64 = 0x001122334455;

fn resolver(device: MockDevice) -> DeviceInfoResolver<MockPlatform> {
    let (platform, _events) = MockPlatform::new();
    DeviceInfoResolver::new(Arc::new(platform.with_device(SENSOR, device)))
}

#[tokio::test]
async fn identity() {
    let resolver = resolver(MockDevice::new(SENSOR, "Thermometer"));

    let identity = resolver.resolve_identity(SENSOR).await.unwrap().unwrap();
    assert_eq!(identity.name, "Thermometer");

    assert!(resolver.resolve_identity(0x1).await.unwrap().is_none());
}

#[tokio::test]
async fn empty_name_is_unknown() {
    let resolver = resolver(MockDevice::new(SENSOR, ""));
    let identity = resolver.resolve_identity(SENSOR).await.unwrap().unwrap();
    assert_eq!(identity.name, UNKNOWN_NAME);
}

#[tokio::test]
async fn gatt_status_failure_has_no_services() {
    let status = GattStatus::ProtocolError(AttError::Known(AttErrorCode::InsufficientAuthentication));
    let mut device = MockDevice::new(SENSOR, "Locked").with_services(vec![MockService::new(
        bluetooth_uuid_from_u16(0x180F),
        &[],
    )]);
    device.status = status;
    let resolver = resolver(device);

    let identity = resolver.resolve_identity(SENSOR).await.unwrap().unwrap();
    let snapshot = resolver.resolve_gatt(&identity).await.unwrap();
    assert_eq!(snapshot.status, status);
    assert!(snapshot.services.is_empty());
}

#[tokio::test]
async fn failing_service_does_not_hide_siblings() {
    let device = MockDevice::new(SENSOR, "Sensor").with_services(vec![
        MockService::failing(bluetooth_uuid_from_u16(0x1800), ErrorKind::NotAuthorized),
        MockService::new(
            bluetooth_uuid_from_u16(0x180F),
            &[(bluetooth_uuid_from_u16(0x2A19), 0b1_0010)],
        ),
        MockService::new(Uuid::from_u128(0x1234), &[(Uuid::from_u128(0x5678), 0)]),
    ]);
    let resolver = resolver(device);

    let identity = resolver.resolve_identity(SENSOR).await.unwrap().unwrap();
    let snapshot = resolver.resolve_gatt(&identity).await.unwrap();
    assert_eq!(snapshot.status, GattStatus::Success);
    assert_eq!(snapshot.services.len(), 3);

    let generic_access = &snapshot.services[0];
    assert_eq!(generic_access.name, "Generic Access");
    assert!(generic_access.characteristics.is_err());

    let battery = &snapshot.services[1];
    assert_eq!(battery.name, "Battery");
    let characteristics = battery.characteristics.as_ref().unwrap();
    assert_eq!(characteristics.len(), 1);
    assert_eq!(characteristics[0].name, "Battery Level");
    assert_eq!(characteristics[0].properties.to_string(), "Read, Notify");

    let vendor = &snapshot.services[2];
    assert_eq!(vendor.name, UNKNOWN_SERVICE);
    assert_eq!(vendor.characteristics.as_ref().unwrap()[0].name, UNKNOWN_CHARACTERISTIC);
}

#[tokio::test]
async fn resolve_only_gathers_requested_blocks() {
    let device = MockDevice::new(SENSOR, "Sensor").with_services(vec![MockService::new(
        bluetooth_uuid_from_u16(0x180F),
        &[],
    )]);
    let resolver = resolver(device);

    let Resolution::Resolved(record) = resolver.resolve(event(SENSOR, -30), &DisplayOptions::default()).await else {
        panic!("resolution failed");
    };
    assert_eq!(record.name, "Sensor");
    assert!(record.details.is_none());
    assert!(record.gatt.is_none());

    let display = DisplayOptions {
        info: true,
        gatt: true,
        ..Default::default()
    };
    let Resolution::Resolved(record) = resolver.resolve(event(SENSOR, -30), &display).await else {
        panic!("resolution failed");
    };
    assert_eq!(record.details.unwrap().device_id, "mock/001122334455");
    assert_eq!(record.gatt.unwrap().services.len(), 1);
}

#[tokio::test]
async fn unknown_device_resolves_to_bare_record() {
    let resolver = resolver(MockDevice::new(SENSOR, "Sensor"));
    let display = DisplayOptions {
        info: true,
        gatt: true,
        ..Default::default()
    };

    let advertisement = event(0x1, -70);
    let Resolution::Resolved(record) = resolver.resolve(advertisement.clone(), &display).await else {
        panic!("resolution failed");
    };
    assert_eq!(record.name, UNKNOWN_NAME);
    assert_eq!(record, ResolvedRecord::unknown(advertisement));
}

#[tokio::test]
async fn lookup_failure_becomes_failed_resolution() {
    let (platform, _events) = MockPlatform::new();
    let resolver = DeviceInfoResolver::new(Arc::new(platform.with_failing_lookup(SENSOR, ErrorKind::Internal)));

    let resolution = resolver.resolve(event(SENSOR, -30), &DisplayOptions::default()).await;
    assert_eq!(resolution.event().address, SENSOR);
    match resolution {
        Resolution::Failed { error, .. } => assert_eq!(error.kind(), ErrorKind::Internal),
        Resolution::Resolved(record) => panic!("unexpected record {record:?}"),
    }
}
