use std::process::ExitCode;

use clap::Parser;
use tracing::metadata::LevelFilter;

use blescan::cli::Cli;

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();
}

#[cfg(any(target_os = "linux", target_os = "windows"))]
#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match scan::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn main() -> ExitCode {
    init_tracing();
    let _ = Cli::parse();
    tracing::error!("this platform does not expose advertiser addresses; only Linux and Windows are supported");
    ExitCode::FAILURE
}

#[cfg(any(target_os = "linux", target_os = "windows"))]
mod scan {
    use std::error::Error;
    use std::io::{self, BufRead, IsTerminal};

    use blescan::cli::Cli;
    use blescan::{ScanPipeline, SystemPlatform};
    use tokio::sync::oneshot;
    use tracing::{debug, info};

    pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
        let options = cli.scan_options(io::stdout().is_terminal());
        colored::control::set_override(options.color);
        #[cfg(target_os = "windows")]
        if options.color {
            let _ = colored::control::set_virtual_terminal(true);
        }

        let platform = SystemPlatform::new().await?;
        let mut pipeline = ScanPipeline::new(platform, io::stdout(), options);
        pipeline.start().await?;
        info!("scan started");

        tokio::select! {
            _ = enter_pressed() => debug!("input received"),
            res = tokio::signal::ctrl_c() => res?,
        }

        pipeline.stop().await;
        info!("scan stopped");
        Ok(())
    }

    /// Completes when a line or end of input arrives on stdin.
    ///
    /// The read runs on its own thread so a pending read never holds up shutdown of the runtime.
    async fn enter_pressed() {
        let (tx, rx) = oneshot::channel();
        std::thread::spawn(move || {
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
            let _ = tx.send(());
        });
        let _ = rx.await;
    }
}
