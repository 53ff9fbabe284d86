//! TD(0) command - online state-value estimation

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        args::WalkArgs,
        commands::{report, run_estimators},
    },
    value_table::ValueTable,
};

#[derive(Parser, Debug)]
#[command(about = "Runs TD(0) on the random walk")]
pub struct Td0Args {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Alpha (learning rate) for the TD target. Default: 0.05
    #[arg(long, short = 'a')]
    pub alpha: Option<f64>,
}

/// Run TD(0) and print the final table.
pub fn execute(args: Td0Args) -> Result<ValueTable> {
    let config = args.walk.to_config(args.alpha, None)?;
    let mut td0 = config.estimation_params().td0(config.resolved_n_states())?;

    let result = run_estimators(&config, &args.walk, &mut [&mut td0])?;
    report(&config, &result, &[&td0])?;

    Ok(td0.into_values())
}
