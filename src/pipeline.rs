//! The scan session: platform events in, reports out

use std::io::Write;
use std::sync::Arc;

use futures_lite::StreamExt;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tracing::{debug, error, trace};

use crate::error::ErrorKind;
use crate::hex::format_address;
use crate::platform::{EventStream, Platform};
use crate::render::{DisplayOptions, ReportRenderer};
use crate::resolver::DeviceInfoResolver;
use crate::{AddressDeduplicator, AdvertisementEvent, Result, ScanMode};

/// Configuration of a scan session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    /// How the radio listens
    pub mode: ScanMode,
    /// Report each address only the first time it is seen
    pub once: bool,
    /// Which optional blocks reports contain
    pub display: DisplayOptions,
    /// Color reports with ANSI escapes
    pub color: bool,
}

/// Lifecycle of a [`ScanPipeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Created but not started
    Idle,
    /// Receiving advertisements
    Scanning,
    /// Finished; a stopped pipeline cannot be restarted
    Stopped,
}

/// Drives one scan session.
///
/// Every advertisement received while scanning is handled by its own task: once-mode filtering happens as soon as
/// the event arrives, then the sender is resolved and the report rendered. Resolution of different events runs
/// concurrently; only the final write of each report is serialized.
pub struct ScanPipeline<P: Platform, W> {
    shared: Arc<Shared<P, W>>,
    mode: ScanMode,
    state: SessionState,
    dispatcher: Option<Dispatcher>,
}

struct Shared<P, W> {
    resolver: DeviceInfoResolver<P>,
    renderer: ReportRenderer<W>,
    dedup: Option<AddressDeduplicator>,
}

struct Dispatcher {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl<P: Platform, W: Write + Send + 'static> ScanPipeline<P, W> {
    /// Creates an idle pipeline that will write reports to `output`
    pub fn new(platform: P, output: W, options: ScanOptions) -> Self {
        Self::with_platform(Arc::new(platform), output, options)
    }

    /// Like [`ScanPipeline::new`], for a platform shared with other users
    pub fn with_platform(platform: Arc<P>, output: W, options: ScanOptions) -> Self {
        ScanPipeline {
            shared: Arc::new(Shared {
                resolver: DeviceInfoResolver::new(platform),
                renderer: ReportRenderer::new(output, options.display, options.color),
                dedup: options.once.then(AddressDeduplicator::new),
            }),
            mode: options.mode,
            state: SessionState::Idle,
            dispatcher: None,
        }
    }

    /// The current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The addresses admitted so far, when running in once mode
    pub fn deduplicator(&self) -> Option<&AddressDeduplicator> {
        self.shared.dedup.as_ref()
    }

    /// Subscribes to advertisements and starts handling them in the background.
    ///
    /// This is the only fallible step of a session: if the platform cannot start scanning the error is returned and
    /// the pipeline stays idle.
    pub async fn start(&mut self) -> Result<()> {
        match self.state {
            SessionState::Idle => {}
            SessionState::Scanning => return Err(ErrorKind::AlreadyScanning.into()),
            SessionState::Stopped => return Err(ErrorKind::SessionEnded.into()),
        }

        debug!("starting {:?} scan", self.mode);
        let events = self.shared.resolver.platform().start_watching(self.mode).await?;

        let (shutdown, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(dispatch(self.shared.clone(), events, shutdown_rx));
        self.dispatcher = Some(Dispatcher { shutdown, task });
        self.state = SessionState::Scanning;
        Ok(())
    }

    /// Ends the session: unsubscribes from the platform and abandons events still being resolved.
    pub async fn stop(&mut self) {
        if let Some(Dispatcher { shutdown, task }) = self.dispatcher.take() {
            let _ = shutdown.send(());
            if let Err(err) = task.await {
                log_join_error(err);
            }
            debug!("scan stopped");
        }
        self.state = SessionState::Stopped;
    }

    /// Waits for the platform to end the advertisement stream and for every event received until then to be
    /// rendered.
    pub async fn wait(&mut self) {
        if let Some(Dispatcher { shutdown, task }) = self.dispatcher.take() {
            if let Err(err) = task.await {
                log_join_error(err);
            }
            drop(shutdown);
            debug!("scan finished");
        }
        self.state = SessionState::Stopped;
    }
}

impl<P: Platform, W> Drop for ScanPipeline<P, W> {
    fn drop(&mut self) {
        if let Some(dispatcher) = self.dispatcher.take() {
            dispatcher.task.abort();
        }
    }
}

impl<P: Platform, W: Write> Shared<P, W> {
    fn admit(&self, event: &AdvertisementEvent) -> bool {
        self.dedup.as_ref().map_or(true, |dedup| dedup.try_admit(event.address))
    }

    async fn handle(&self, event: AdvertisementEvent) {
        let resolution = self.resolver.resolve(event, self.renderer.display()).await;
        self.renderer.render(&resolution);
    }
}

async fn dispatch<P, W>(shared: Arc<Shared<P, W>>, mut events: EventStream, mut shutdown: oneshot::Receiver<()>)
where
    P: Platform,
    W: Write + Send + 'static,
{
    let mut tasks = JoinSet::new();

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tasks.abort_all();
                return;
            }
            event = events.next() => match event {
                Some(event) => {
                    if !shared.admit(&event) {
                        trace!("skipping repeated address {}", format_address(event.address));
                        continue;
                    }
                    let shared = shared.clone();
                    tasks.spawn(async move { shared.handle(event).await });
                }
                None => break,
            },
            Some(res) = tasks.join_next(), if !tasks.is_empty() => {
                if let Err(err) = res {
                    log_join_error(err);
                }
            }
        }
    }

    debug!("advertisement stream ended, {} events in flight", tasks.len());
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tasks.abort_all();
                return;
            }
            res = tasks.join_next() => match res {
                Some(Err(err)) => log_join_error(err),
                Some(Ok(())) => {}
                None => return,
            },
        }
    }
}

fn log_join_error(err: JoinError) {
    if err.is_panic() {
        error!("event handler panicked: {}", err);
    }
}
