// src/main.rs
use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use segfreq::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    segfreq::run(args)
}
