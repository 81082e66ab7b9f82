//! CLI argument definitions for armoury
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "armoury")]
#[command(about = "Animated Armoury weapon rebalancer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the rebalanced stat block for one weapon type and material
    #[command(visible_alias = "s")]
    Stats {
        /// Animated weapon type (claw, rapier, katana, whip, pike,
        /// quarterstaff, halberd)
        weapon_type: String,

        /// Material name, e.g. steel, orcish, stalhrim
        material: String,

        /// Use the WACCF damage table for this invocation
        #[arg(long)]
        waccf: bool,

        /// Print the stat block as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect weapon type and material for every weapon in a plugin dump
    #[command(visible_alias = "c")]
    Classify {
        /// Path to a YAML plugin dump
        input: PathBuf,

        /// Use the WACCF material rules for this invocation
        #[arg(long)]
        waccf: bool,
    },

    /// Rebalance all recognized weapons in a plugin dump
    #[command(visible_alias = "r")]
    Rebalance {
        /// Path to a YAML plugin dump
        input: PathBuf,

        /// Write a YAML patch report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use the WACCF tables for this invocation
        #[arg(long)]
        waccf: bool,
    },

    /// Configure default settings
    Configure {
        /// Enable or disable WACCF compatibility by default
        #[arg(long)]
        waccf: Option<bool>,

        /// Add a plugin to the included set
        #[arg(long)]
        add_plugin: Option<String>,

        /// Remove a plugin from the included set
        #[arg(long)]
        remove_plugin: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
