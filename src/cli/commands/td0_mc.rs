//! TD(0) + Monte Carlo command - both estimators on the same episodes
//!
//! Shows the difference between the two methods: TD(0) learns during the
//! episode, Monte Carlo only after it ends, yet both see identical data.

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
#[command(about = "Runs TD(0) and Monte Carlo side by side on the random walk")]
pub struct Td0McArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Alpha (learning rate) for the TD target. Default: 0.05
    #[arg(long, short = 'a')]
    pub alpha: Option<f64>,

    #[command(flatten)]
    pub visit: VisitArgs,
}

/// Run both estimators and print the final tables as `(td0, mc)`.
pub fn execute(args: Td0McArgs) -> Result<(ValueTable, ValueTable)> {
    let config = args.walk.to_config(args.alpha, Some(&args.visit))?;
    let params = config.estimation_params();
    let n_states = config.resolved_n_states();
    let mut td0 = params.td0(n_states)?;
    let mut mc = params.monte_carlo(n_states)?;

    let result = run_estimators(&config, &args.walk, &mut [&mut td0, &mut mc])?;
    report(&config, &result, &[&td0, &mc])?;

    Ok((td0.into_values(), mc.into_values()))
}
