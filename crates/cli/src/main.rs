#![cfg_attr(test, allow(unused_crate_dependencies))]

use args::Command;
use clap::crate_version;

mod args;
mod config;
mod generate;
mod peer;
mod telemetry;

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();

    telemetry::init(&args)?;

    let crate_version = crate_version!();
    tracing::info!("schema-bridge {crate_version}");

    match &args.command {
        Command::Generate(generate) => generate::run(generate),
    }
}
