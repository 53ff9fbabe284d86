//! Episode driver - runs one episode end to end

use crate::{
    Result,
    pipeline::Trajectory,
    ports::{Environment, Policy, RenderFrame, RenderHook, ValueEstimator, ValueSnapshot},
    types::State,
};

/// Run one episode of `env` under `policy`.
///
/// The environment is reset first. After every step each estimator's
/// `on_step` runs before the next action is chosen; once the episode has
/// terminated (or been truncated by a wrapper) each estimator sees the full
/// trajectory. When `render` is given it is called after the reset and
/// after every step with the estimators' current tables.
///
/// # Errors
///
/// Fails with [`crate::Error::ValueTableSizeMismatch`] if an estimator's
/// table does not cover the environment, and propagates errors from the
/// environment, the estimators and the render hook.
pub fn run_episode<E, P>(
    env: &mut E,
    policy: &mut P,
    estimators: &mut [&mut dyn ValueEstimator],
    mut render: Option<&mut (dyn RenderHook + '_)>,
) -> Result<Trajectory>
where
    E: Environment + ?Sized,
    P: Policy + ?Sized,
{
    let n_states = env.n_states();
    for estimator in estimators.iter() {
        estimator.values().ensure_len(n_states)?;
    }

    let (mut state, _info) = env.reset();
    for estimator in estimators.iter_mut() {
        estimator.on_reset(state)?;
    }
    render_frame(render.as_deref_mut(), n_states, state, estimators)?;

    let mut trajectory = Trajectory::new(state);
    loop {
        let action = policy.select_action(state);
        let step = env.step(action.index())?;

        for estimator in estimators.iter_mut() {
            estimator.on_step(state, &step)?;
        }
        trajectory.record(action, &step);
        state = step.state;

        render_frame(render.as_deref_mut(), n_states, state, estimators)?;

        if step.is_done() {
            break;
        }
    }

    for estimator in estimators.iter_mut() {
        estimator.on_episode_end(&trajectory)?;
    }

    Ok(trajectory)
}

/// Run one episode without learning or rendering.
pub fn collect_episode<E, P>(env: &mut E, policy: &mut P) -> Result<Trajectory>
where
    E: Environment + ?Sized,
    P: Policy + ?Sized,
{
    run_episode(env, policy, &mut [], None)
}

fn render_frame<'h>(
    render: Option<&mut (dyn RenderHook + 'h)>,
    n_states: usize,
    state: State,
    estimators: &[&mut dyn ValueEstimator],
) -> Result<()> {
    let Some(hook) = render else {
        return Ok(());
    };
    let snapshots: Vec<ValueSnapshot<'_>> = estimators
        .iter()
        .map(|estimator| ValueSnapshot {
            label: estimator.name(),
            values: estimator.values().as_slice(),
        })
        .collect();
    hook.render(&RenderFrame {
        n_states,
        state,
        snapshots: &snapshots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        policies::ConstantPolicy,
        types::Action,
        walk::{TimeLimit, WalkingEnv},
    };

    fn frame_hook<F: FnMut(&RenderFrame<'_>)>(f: F) -> F {
        f
    }

    #[test]
    fn test_always_right_episode() {
        let mut env = WalkingEnv::new(7).unwrap();
        let mut policy = ConstantPolicy::new(Action::Right);
        let trajectory = collect_episode(&mut env, &mut policy).unwrap();

        assert_eq!(trajectory.states(), &[3, 4, 5, 6]);
        assert_eq!(trajectory.rewards(), &[0.0, 0.0, 1.0]);
        assert!(trajectory.terminated());
        assert!(!trajectory.truncated());
    }

    #[test]
    fn test_render_called_after_reset_and_each_step() {
        let mut env = WalkingEnv::new(7).unwrap();
        let mut policy = ConstantPolicy::new(Action::Left);
        let mut positions = Vec::new();
        let mut hook = frame_hook(|frame| positions.push(frame.state));

        run_episode(&mut env, &mut policy, &mut [], Some(&mut hook)).unwrap();

        assert_eq!(positions, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_truncated_episode_stops() {
        let env = WalkingEnv::new(7).unwrap();
        let mut env = TimeLimit::new(env, 4);
        let mut flip = false;
        let mut policy = |_state: State| {
            flip = !flip;
            if flip { Action::Left } else { Action::Right }
        };

        let trajectory = collect_episode(&mut env, &mut policy).unwrap();
        assert_eq!(trajectory.len(), 4);
        assert!(trajectory.truncated());
        assert!(!trajectory.terminated());
        assert_eq!(trajectory.final_state(), 3);
    }
}
