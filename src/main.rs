mod cli;

use std::{env, io};

use anyhow::Context;
use estimator::{EstimatorConfig, Predictor};
use log::info;

use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let mut config = EstimatorConfig::from_env()?;
    if args.until.is_some() {
        config = config.with_until(args.until);
    }

    let predictor = Predictor::load(&config)
        .with_context(|| format!("cannot load model {}", config.model_path().display()))?;
    info!("reading profiles from stdin");

    cli::run(
        &predictor,
        io::stdin().lock(),
        io::stdout().lock(),
        config.until(),
        args.format,
    )?;

    info!("wrapping up");
    Ok(())
}
