//! Convergence and bookkeeping tests for the Monte Carlo and TD(0) estimators

mod common;

use common::{assert_close, assert_terminals_zero, seeded_walk};
use walking::{
    Action, State, ValueTable, VisitCounting,
    estimators::{
        EstimationParams, MonteCarloEstimator, Td0Estimator, VisitRule, estimate_mc,
        estimate_td0, estimate_td0_mc,
    },
    pipeline::run_episode,
    policies::{ConstantPolicy, UniformRandomPolicy},
    ports::ValueEstimator,
    walk::{TimeLimit, WalkingEnv},
};

/// Values of the uniform random walk for any γ, by value iteration.
fn discounted_truth(n_states: usize, gamma: f64) -> ValueTable {
    let mut values = vec![0.0; n_states];
    for _ in 0..10_000 {
        let mut next = values.clone();
        for s in 1..n_states - 1 {
            let reward_right = if s + 1 == n_states - 1 { 1.0 } else { 0.0 };
            next[s] = 0.5 * gamma * values[s - 1] + 0.5 * (reward_right + gamma * values[s + 1]);
        }
        values = next;
    }
    ValueTable::from_values(values).unwrap()
}

/// Replays a fixed sequence of moves.
fn scripted(moves: Vec<Action>) -> impl FnMut(State) -> Action {
    let mut moves = moves.into_iter();
    move |_state| moves.next().unwrap_or(Action::Right)
}

#[test]
fn test_monte_carlo_converges_to_true_values() {
    let (mut env, mut policy) = seeded_walk(7, 2024);
    let params = EstimationParams::default().with_episodes(5000);

    let values = estimate_mc(&mut env, &mut policy, &params, None).unwrap();

    assert_terminals_zero(&values);
    assert_close(&values, &ValueTable::uniform_random_walk(7).unwrap(), 0.05);
}

#[test]
fn test_td0_converges_to_true_values() {
    let (mut env, mut policy) = seeded_walk(7, 2024);
    let params = EstimationParams::default()
        .with_episodes(6000)
        .with_alpha(0.01);

    let values = estimate_td0(&mut env, &mut policy, &params, None).unwrap();

    assert_terminals_zero(&values);
    assert_close(&values, &ValueTable::uniform_random_walk(7).unwrap(), 0.05);
}

#[test]
fn test_both_estimators_agree_on_shared_episodes() {
    let (mut env, mut policy) = seeded_walk(9, 7);
    let params = EstimationParams::default()
        .with_episodes(6000)
        .with_alpha(0.01);

    let (td0, mc) = estimate_td0_mc(&mut env, &mut policy, &params, None).unwrap();
    let truth = ValueTable::uniform_random_walk(9).unwrap();

    assert_terminals_zero(&td0);
    assert_terminals_zero(&mc);
    assert_close(&td0, &truth, 0.05);
    assert_close(&mc, &truth, 0.05);
    assert!(td0.rms_error(&truth).unwrap() < 0.04);
    assert!(mc.rms_error(&truth).unwrap() < 0.04);
}

#[test]
fn test_discounted_estimates_match_value_iteration() {
    let gamma = 0.9;
    let (mut env, mut policy) = seeded_walk(7, 99);
    let params = EstimationParams::default()
        .with_episodes(6000)
        .with_gamma(gamma)
        .with_alpha(0.01);

    let (td0, mc) = estimate_td0_mc(&mut env, &mut policy, &params, None).unwrap();
    let truth = discounted_truth(7, gamma);

    assert_close(&td0, &truth, 0.05);
    assert_close(&mc, &truth, 0.05);
}

#[test]
fn test_zero_episodes_return_prior() {
    let (mut env, mut policy) = seeded_walk(11, 1);
    let params = EstimationParams::default().with_episodes(0);

    let prior = ValueTable::new(11).unwrap();
    assert_eq!(estimate_mc(&mut env, &mut policy, &params, None).unwrap(), prior);
    assert_eq!(estimate_td0(&mut env, &mut policy, &params, None).unwrap(), prior);
}

#[test]
fn test_always_right_gives_monte_carlo_value_one() {
    let mut env = WalkingEnv::new(9).unwrap();
    let mut policy = ConstantPolicy::new(Action::Right);
    let params = EstimationParams::default().with_episodes(1);

    let values = estimate_mc(&mut env, &mut policy, &params, None).unwrap();
    assert_eq!(
        values.as_slice(),
        &[0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0]
    );
}

#[test]
fn test_always_left_gives_monte_carlo_value_zero() {
    let mut env = WalkingEnv::new(7).unwrap();
    let mut policy = ConstantPolicy::new(Action::Left);
    let params = EstimationParams::default().with_episodes(3);

    let values = estimate_mc(&mut env, &mut policy, &params, None).unwrap();
    assert_eq!(values.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.0]);
}

#[test]
fn test_visit_rules_differ_on_revisits() {
    // 3 -> 4 -> 3 -> 4 -> 5 -> 6, γ = 0.5
    // returns by step, last to first: 1, 0.5, 0.25, 0.125, 0.0625
    let moves = vec![
        Action::Right,
        Action::Left,
        Action::Right,
        Action::Right,
        Action::Right,
    ];

    let mut every = MonteCarloEstimator::new(7, 0.5).unwrap();
    let mut env = WalkingEnv::new(7).unwrap();
    run_episode(&mut env, &mut scripted(moves.clone()), &mut [&mut every], None).unwrap();
    let values = every.values().as_slice();
    assert_eq!(values[5], 1.0);
    assert!((values[4] - 0.3125).abs() < 1e-12);
    assert!((values[3] - 0.15625).abs() < 1e-12);

    let mut first = MonteCarloEstimator::new(7, 0.5)
        .unwrap()
        .with_visit_rule(VisitRule::FirstOccurrence);
    run_episode(&mut env, &mut scripted(moves), &mut [&mut first], None).unwrap();
    let values = first.values().as_slice();
    assert_eq!(values[5], 1.0);
    assert!((values[4] - 0.125).abs() < 1e-12);
    assert!((values[3] - 0.0625).abs() < 1e-12);
}

#[test]
fn test_seeded_counting_slows_first_update() {
    let mut env = WalkingEnv::new(7).unwrap();
    let mut policy = ConstantPolicy::new(Action::Right);
    let params = EstimationParams::default()
        .with_episodes(1)
        .with_visit_counting(VisitCounting::SeededWithResetBump);

    let values = estimate_mc(&mut env, &mut policy, &params, None).unwrap();
    let slice = values.as_slice();
    assert!((slice[3] - (0.5 + 0.5 / 3.0)).abs() < 1e-12);
    assert!((slice[4] - 0.75).abs() < 1e-12);
    assert!((slice[5] - 0.75).abs() < 1e-12);
}

#[test]
fn test_truncated_episode_only_updates_td0() {
    let env = WalkingEnv::new(7).unwrap();
    let mut env = TimeLimit::new(env, 2);
    let mut mc = MonteCarloEstimator::new(7, 1.0).unwrap();
    let mut td0 = Td0Estimator::new(7, 1.0, 0.5).unwrap();

    let trajectory = run_episode(
        &mut env,
        &mut scripted(vec![Action::Right, Action::Right]),
        &mut [&mut td0, &mut mc],
        None,
    )
    .unwrap();

    assert!(trajectory.truncated());
    assert_eq!(trajectory.states(), &[3, 4, 5]);
    // no return is known for the cut episode
    assert_eq!(mc.values(), &ValueTable::new(7).unwrap());
    assert_eq!(mc.visits().as_slice(), &[0; 7]);
    // TD(0) bootstraps from V(5) = 0.5 on the cut transition
    assert_eq!(td0.values().as_slice()[4], 0.5);
}

#[test]
fn test_monte_carlo_unbiased_under_tight_step_limit() {
    // always RIGHT from 3 needs three steps; a limit of one cuts every episode
    let mut env = TimeLimit::new(WalkingEnv::new(7).unwrap(), 1);
    let mut policy = ConstantPolicy::new(Action::Right);
    let params = EstimationParams::default().with_episodes(20);

    let values = estimate_mc(&mut env, &mut policy, &params, None).unwrap();
    assert_eq!(values, ValueTable::new(7).unwrap());

    // once the limit allows the exit, every visited state learns its value of 1
    let mut env = TimeLimit::new(WalkingEnv::new(7).unwrap(), 3);
    let values = estimate_mc(&mut env, &mut policy, &params, None).unwrap();
    assert_eq!(values.as_slice(), &[0.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0]);
}

#[test]
fn test_estimators_reject_mismatched_environment() {
    let mut env = WalkingEnv::new(9).unwrap();
    let mut policy = UniformRandomPolicy::new().with_seed(3);
    let mut td0 = Td0Estimator::new(7, 1.0, 0.1).unwrap();

    let err = run_episode(&mut env, &mut policy, &mut [&mut td0], None).unwrap_err();
    assert!(matches!(
        err,
        walking::Error::ValueTableSizeMismatch {
            expected: 9,
            got: 7
        }
    ));
}
