//! Monte Carlo command - episode-batched state-value estimation

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        args::{VisitArgs, WalkArgs},
        commands::{report, run_estimators},
    },
    value_table::ValueTable,
};

#[derive(Parser, Debug)]
#[command(about = "Runs Monte Carlo state-value estimation on the random walk")]
pub struct McArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    #[command(flatten)]
    pub visit: VisitArgs,
}

/// Run Monte Carlo and print the final table.
pub fn execute(args: McArgs) -> Result<ValueTable> {
    let config = args.walk.to_config(None, Some(&args.visit))?;
    let mut mc = config
        .estimation_params()
        .monte_carlo(config.resolved_n_states())?;

    let result = run_estimators(&config, &args.walk, &mut [&mut mc])?;
    report(&config, &result, &[&mc])?;

    Ok(mc.into_values())
}
