//! Command line interface of the `blescan` binary

use clap::{Parser, ValueEnum};

use crate::pipeline::ScanOptions;
use crate::render::DisplayOptions;
use crate::ScanMode;

/// Watch for Bluetooth LE advertisements and print them as they arrive.
///
/// Press Enter or Ctrl-C to stop.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "blescan", author, version, about)]
pub struct Cli {
    /// Scan actively, requesting scan responses from advertisers
    #[arg(short, long)]
    pub active: bool,

    /// Print each address only the first time it is seen
    #[arg(short, long)]
    pub once: bool,

    /// Print device identity and pairing details
    #[arg(short, long)]
    pub info: bool,

    /// Connect and print GATT services and characteristics
    #[arg(short, long)]
    pub gatt: bool,

    /// Print manufacturer data
    #[arg(short, long)]
    pub manufacturer: bool,

    /// Print raw advertising data sections
    #[arg(short, long)]
    pub section: bool,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// When output is colored
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// Whether to color, given whether the output is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl Cli {
    /// The session options selected by these flags
    pub fn scan_options(&self, is_terminal: bool) -> ScanOptions {
        ScanOptions {
            mode: if self.active { ScanMode::Active } else { ScanMode::Passive },
            once: self.once,
            display: DisplayOptions {
                info: self.info,
                gatt: self.gatt,
                manufacturer: self.manufacturer,
                section: self.section,
            },
            color: self.color.enabled(is_terminal),
        }
    }
}
