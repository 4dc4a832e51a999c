use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vibrator_core::{NotifierPolicy, SequenceTable};

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Vibrate for the given number of milliseconds.
    On {
        /// Duration in milliseconds; values below 1 stop the motor
        #[arg(allow_negative_numbers = true)]
        duration_ms: i32,

        /// Wait for the completion notification before exiting
        #[arg(short, long)]
        wait: bool,
    },
    /// Stop any ongoing vibration.
    Off,
    /// Print the capability bitmask.
    Capabilities,
    /// Print the effective settings as JSON.
    ShowConfig,
}

/// Drive an LED-class vibrator through its sysfs control nodes.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Settings file (JSON); built-in layout when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Resolve node paths below this directory instead of `/`
    #[arg(long)]
    pub sysfs_root: Option<PathBuf>,

    /// Override the click waveform table (`standard` or `alternate`)
    #[arg(long)]
    pub table: Option<SequenceTable>,

    /// Cancel pending notifiers on every new request
    #[arg(long)]
    pub cancel_pending: bool,

    /// Print the node writes instead of performing them
    #[arg(long)]
    pub dry_run: bool,

    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Notifier policy requested on the command line, if any.
    pub(crate) fn notifier_policy(&self) -> Option<NotifierPolicy> {
        self.cancel_pending.then_some(NotifierPolicy::CancelPending)
    }
}
