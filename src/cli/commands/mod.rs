//! Estimation commands
//!
//! Each command builds the environment, policy and estimators from a
//! [`RunConfig`], runs the episodes through a [`TrainingPipeline`], and
//! prints the learned tables.

pub mod mc;
pub mod td0;
pub mod td0_mc;

use anyhow::{Context, Result};

use crate::{
    cli::{args::WalkArgs, output},
    config::RunConfig,
    pipeline::{
        JsonlObserver, ProgressObserver, TrainingConfig, TrainingPipeline, TrainingResult,
    },
    policies::UniformRandomPolicy,
    ports::{Environment, ValueEstimator},
    render::TextRenderer,
    value_table::ValueTable,
    walk::{TimeLimit, WalkingEnv},
};

/// Environment described by `config`, wrapped in a step limit when one applies.
pub(crate) fn build_env(config: &RunConfig) -> Result<Box<dyn Environment>> {
    let env = WalkingEnv::new(config.resolved_n_states())?;
    Ok(match config.resolved_max_steps() {
        Some(max_steps) => Box::new(TimeLimit::new(env, max_steps)),
        None => Box::new(env),
    })
}

pub(crate) fn build_policy(config: &RunConfig) -> UniformRandomPolicy {
    match config.seed {
        Some(seed) => UniformRandomPolicy::new().with_seed(seed),
        None => UniformRandomPolicy::new(),
    }
}

/// Run the episode loop for `estimators` according to `config`.
pub(crate) fn run_estimators(
    config: &RunConfig,
    args: &WalkArgs,
    estimators: &mut [&mut dyn ValueEstimator],
) -> Result<TrainingResult> {
    let mut env = build_env(config)?;
    let mut policy = build_policy(config);

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        num_episodes: config.episodes,
    });
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.episode_log {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("failed to open episode log {}", path.display()))?;
        pipeline = pipeline.with_observer(Box::new(observer));
    }
    if config.render {
        pipeline = pipeline.with_render_hook(Box::new(TextRenderer::stdout()));
    }

    let result = pipeline
        .run(env.as_mut(), &mut policy, estimators)
        .context("estimation run failed")?;
    Ok(result)
}

/// Print the run statistics and the learned tables.
pub(crate) fn report(
    config: &RunConfig,
    result: &TrainingResult,
    estimators: &[&dyn ValueEstimator],
) -> Result<()> {
    let n_states = config.resolved_n_states();
    let title = match config.n_states {
        Some(_) => format!("Random walk with {n_states} states"),
        None => config.preset.to_string(),
    };
    output::print_section(&title);
    output::print_training_result(result);
    println!();

    let label_width = estimators
        .iter()
        .map(|e| e.name().len() + 1)
        .max()
        .unwrap_or(0);
    for estimator in estimators {
        output::print_values(estimator.name(), estimator.values(), label_width);
    }

    // With γ = 1 the true values of the uniform walk are known in closed form
    if config.gamma == 1.0 {
        let truth = ValueTable::uniform_random_walk(n_states)?;
        println!();
        for estimator in estimators {
            let rms = estimator.values().rms_error(&truth)?;
            output::print_kv(&format!("RMS error {}", estimator.name()), &format!("{rms:.4}"));
        }
    }
    Ok(())
}
