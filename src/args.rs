//! Command line arguments.

use clap::Parser;

/// Terminal front desk for the Acosta Family Clinic.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "kiosko", version, about)]
pub struct Args {
    /// Interface language for this session (en|es); overrides the saved
    /// preference without changing it.
    #[arg(long)]
    pub lang: Option<String>,

    /// Screen to open at startup (home|about|services|gallery|contact|providers).
    #[arg(long)]
    pub screen: Option<String>,

    /// Skip entrance animations and carousel autoplay.
    #[arg(long)]
    pub reduced_motion: bool,

    /// Render fully but never call the form relay; submissions succeed
    /// locally.
    #[arg(long)]
    pub dry_run: bool,
}
