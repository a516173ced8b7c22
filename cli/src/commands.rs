pub mod analyze;
pub mod interactive;
pub mod system;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use macviz_common::mac::MacAddress;

#[derive(Parser)]
#[command(name = "macviz")]
#[command(about = "Analyze MAC addresses and render their recognition automata.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress decorative output (repeat for less)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Skip the OUI vendor lookup
    #[arg(long, global = true)]
    pub no_vendor: bool,

    /// Directory diagrams are written into
    #[arg(short, long, default_value = ".", global = true)]
    pub out: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one MAC address and render its automaton diagram
    #[command(alias = "a")]
    Analyze { mac: MacAddress },
    /// Discover this machine's MAC address and analyze it
    #[command(alias = "s")]
    System,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
