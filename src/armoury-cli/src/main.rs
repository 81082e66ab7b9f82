mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            weapon_type,
            material,
            waccf,
            json,
        } => {
            let config = Config::load()?;
            commands::stats::handle(
                &weapon_type,
                &material,
                waccf || config.include_waccf,
                json,
            )?;
        }

        Commands::Classify { input, waccf } => {
            let config = Config::load()?;
            commands::classify::handle(&input, waccf || config.include_waccf)?;
        }

        Commands::Rebalance {
            input,
            output,
            waccf,
        } => {
            let config = Config::load()?;
            commands::rebalance::handle(
                &input,
                output.as_deref(),
                waccf || config.include_waccf,
                &config,
            )?;
        }

        Commands::Configure {
            waccf,
            add_plugin,
            remove_plugin,
            show,
        } => {
            commands::configure::handle(waccf, add_plugin, remove_plugin, show)?;
        }
    }

    Ok(())
}
