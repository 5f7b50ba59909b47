use std::io;
use std::sync::Arc;

use blescan::platform::{EventStream, GattServices};
use blescan::resolver::DeviceIdentity;
use blescan::*;
use futures_lite::StreamExt;

fn assert_send<T: Send>(t: T) -> T {
    t
}

async fn check_platform_apis<P: Platform>(platform: &P) -> Result<Option<P::Device>> {
    let events: Result<EventStream> = assert_send(platform.start_watching(ScanMode::Active)).await;
    let _event: Option<AdvertisementEvent> = assert_send(events?.next()).await;

    assert_send(platform.lookup_device(0xAABBCCDDEEFF)).await
}

async fn check_device_apis<D: PlatformDevice>(device: &D) -> Result<()> {
    let _name: Result<Option<String>> = assert_send(device.name()).await;
    let _details: Result<DeviceDetails> = assert_send(device.details()).await;
    let services: GattServices<D::Service> = assert_send(device.gatt_services()).await?;

    for service in services.services {
        let _uuid: Uuid = service.uuid();
        let _characteristics = assert_send(service.characteristics()).await?;
    }

    Ok(())
}

async fn check_resolver_apis<P: Platform>(resolver: &DeviceInfoResolver<P>, event: AdvertisementEvent) -> Result<()> {
    let identity: Option<DeviceIdentity<P::Device>> = assert_send(resolver.resolve_identity(event.address)).await?;
    if let Some(identity) = identity {
        let _snapshot: GattSnapshot = assert_send(resolver.resolve_gatt(&identity)).await?;
    }

    let _resolution: Resolution = assert_send(resolver.resolve(event, &DisplayOptions::default())).await;
    Ok(())
}

#[allow(unused)]
async fn check_pipeline_apis<P: Platform>(platform: P) -> Result<()> {
    let mut pipeline = ScanPipeline::new(platform, io::stdout(), ScanOptions::default());
    let _state: SessionState = pipeline.state();

    assert_send(pipeline.start()).await?;
    assert_send(pipeline.wait()).await;
    assert_send(pipeline.stop()).await;

    Ok(())
}

#[allow(unused)]
async fn check_apis<P: Platform>(platform: P, event: AdvertisementEvent) -> Result<()> {
    if let Some(device) = check_platform_apis(&platform).await? {
        check_device_apis(&device).await?;
    }

    let resolver = DeviceInfoResolver::new(Arc::new(platform));
    check_resolver_apis(&resolver, event).await?;

    Ok(())
}

#[cfg(any(target_os = "linux", target_os = "windows"))]
#[allow(unused)]
async fn check_system_platform() -> Result<()> {
    let platform: SystemPlatform = assert_send(SystemPlatform::new()).await?;
    check_pipeline_apis(platform).await
}
