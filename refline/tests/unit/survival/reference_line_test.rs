use super::*;
use crate::algorithms::nsga2::rank_solutions;
use crate::helpers::algorithms::create_das_dennis;
use crate::helpers::models::{create_population, create_sphere_objectives, get_original_indices};
use crate::helpers::utils::create_test_random;
use crate::helpers::utils::random::ExhaustedRandom;
use crate::utils::{DefaultRandom, ReplayRandom};
use rayon::prelude::*;
use std::sync::{Arc, Mutex};

fn create_survival() -> ReferenceLineSurvival {
    ReferenceLineSurvivalBuilder::default()
        .with_reference_directions(vec![vec![1., 0.], vec![0.5, 0.5], vec![0., 1.]])
        .build()
        .unwrap()
}

fn create_single_front_candidates() -> Population {
    create_population(vec![vec![0., 1.], vec![1., 0.], vec![0.3, 0.8], vec![0.8, 0.3]])
}

#[test]
fn can_split_fronts() {
    let fronts = vec![vec![0, 1], vec![2, 3, 4], vec![5]];

    assert_eq!(split_fronts(fronts.clone(), 1), (vec![], vec![0, 1]));
    assert_eq!(split_fronts(fronts.clone(), 3), (vec![0, 1], vec![2, 3, 4]));
    assert_eq!(split_fronts(fronts.clone(), 5), (vec![0, 1, 2, 3, 4], vec![5]));
    assert_eq!(split_fronts(fronts.clone(), 6), (vec![0, 1, 2, 3, 4, 5], vec![]));
    assert_eq!(split_fronts(fronts, usize::MAX), (vec![0, 1, 2, 3, 4, 5], vec![]));
}

#[test]
fn can_accept_whole_fronts_without_draws() {
    let candidates = create_population(vec![vec![0., 1.], vec![1., 0.], vec![0.5, 0.5], vec![1., 1.]]);
    let random = ReplayRandom::new(vec![]);
    let mut survival = create_survival();

    let outcome = survival.select(&candidates, 3, &random).unwrap();

    assert_eq!(outcome.indices, vec![0, 1, 2]);
    assert!(!outcome.is_underfilled());
    assert_eq!(random.consumed(), 0);
    // the dominated candidate still takes part in normalization as the last front
    assert_eq!(survival.ideal_point(), Some(&[0., 0.][..]));
    assert_eq!(survival.extreme_points(), Some(&[vec![1., 0.], vec![0., 1.]][..]));
    assert_eq!(survival.intercepts(), Some(&[1., 1.][..]));
}

parameterized_test! {can_fill_last_front_by_niching, (draws, expected), {
    let candidates = create_single_front_candidates();
    let random = ReplayRandom::new(draws);
    let mut survival = create_survival();

    let outcome = survival.select(&candidates, 2, &random).unwrap();

    assert_eq!(outcome.indices, expected);
    assert_eq!(get_original_indices(&outcome.survivors), expected);
    assert_eq!(random.remaining(), 0);
}}

can_fill_last_front_by_niching! {
    case01_upper_niche_first: (vec![1, 0], vec![0, 1]),
    case02_lower_niche_first: (vec![0, 0], vec![1, 0]),
}

#[test]
fn can_associate_candidates_after_selection() {
    let candidates = create_single_front_candidates();
    let mut survival = create_survival();

    assert!(survival.associate(&candidates).is_none());

    survival.select(&candidates, 2, &ReplayRandom::new(vec![1, 0])).unwrap();
    let association = survival.associate(&candidates).unwrap();

    assert_eq!(association.niches, vec![2, 0, 2, 0]);
    assert_eq!(association.distances[0], 0.);
    assert_eq!(association.distances[1], 0.);
    assert!((association.distances[2] - 0.3).abs() < 1E-12);
}

#[test]
fn can_return_all_candidates_when_there_are_not_enough() {
    let candidates = create_single_front_candidates();
    let random = ReplayRandom::new(vec![]);
    let mut survival = create_survival();

    let outcome = survival.select(&candidates, 10, &random).unwrap();

    assert_eq!(outcome.indices, vec![0, 1, 2, 3]);
    assert_eq!(outcome.shortage, 6);
    assert!(outcome.is_underfilled());
    assert_eq!(random.consumed(), 0);
    assert!(survival.intercepts().is_some());
}

#[test]
fn can_return_all_candidates_when_target_size_is_huge() {
    let candidates = create_single_front_candidates();
    let random = ReplayRandom::new(vec![]);
    let mut survival = create_survival();

    let outcome = survival.select(&candidates, usize::MAX, &random).unwrap();

    assert_eq!(outcome.survivors.size(), candidates.size());
    assert_eq!(outcome.indices, vec![0, 1, 2, 3]);
    assert_eq!(outcome.shortage, usize::MAX - 4);
    assert_eq!(random.consumed(), 0);
}

#[test]
fn can_handle_empty_candidates() {
    let mut survival = create_survival();

    let outcome = survival.select(&Population::default(), 5, &ExhaustedRandom).unwrap();

    assert!(outcome.survivors.is_empty());
    assert_eq!(outcome.shortage, 5);
    assert!(survival.ideal_point().is_none());
}

#[test]
fn can_select_nothing() {
    let candidates = create_single_front_candidates();
    let mut survival = create_survival();

    let outcome = survival.select(&candidates, 0, &ExhaustedRandom).unwrap();

    assert!(outcome.indices.is_empty());
    assert!(!outcome.is_underfilled());
}

#[test]
fn can_keep_state_when_random_is_exhausted() {
    let candidates = create_single_front_candidates();
    let mut survival = create_survival();

    let result = survival.select(&candidates, 2, &ReplayRandom::new(vec![1]));

    assert!(matches!(result, Err(SelectionError::RandomSourceExhausted { choices: 1 })));
    assert!(survival.ideal_point().is_none());
    assert!(survival.intercepts().is_none());
}

#[test]
fn can_reject_invalid_candidates() {
    let mut survival = create_survival();

    let wrong_dimension = create_population(vec![vec![0., 1.], vec![1., 0., 0.]]);
    let non_finite = create_population(vec![vec![0., 1.], vec![Float::NAN, 0.]]);

    assert!(matches!(
        survival.select(&wrong_dimension, 1, &create_test_random()),
        Err(SelectionError::InvalidDimension { index: 1, expected: 2, actual: 3 })
    ));
    assert!(matches!(
        survival.select(&non_finite, 1, &create_test_random()),
        Err(SelectionError::NonFiniteObjective { index: 1, axis: 0 })
    ));
}

#[test]
fn can_observe_population() {
    let mut survival = create_survival();

    survival.observe(&create_population(vec![vec![2., 3.]])).unwrap();
    assert_eq!(survival.ideal_point(), Some(&[2., 3.][..]));

    survival.observe(&create_population(vec![vec![1., 4.]])).unwrap();
    assert_eq!(survival.ideal_point(), Some(&[1., 3.][..]));

    survival.observe(&Population::default()).unwrap();
    assert_eq!(survival.ideal_point(), Some(&[1., 3.][..]));

    assert!(survival.observe(&create_population(vec![vec![1.]])).is_err());
}

#[test]
fn can_use_initial_ideal_point() {
    let mut survival = ReferenceLineSurvivalBuilder::default()
        .with_reference_directions(vec![vec![1., 0.], vec![0., 1.]])
        .with_ideal_point(vec![-1., -1.])
        .build()
        .unwrap();

    survival.select(&create_single_front_candidates(), 4, &create_test_random()).unwrap();

    assert_eq!(survival.ideal_point(), Some(&[-1., -1.][..]));
}

#[test]
fn can_send_summary_to_logger() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger = {
        let messages = messages.clone();
        Arc::new(move |message: &str| messages.lock().unwrap().push(message.to_string()))
    };

    let mut survival = ReferenceLineSurvivalBuilder::default()
        .with_reference_directions(vec![vec![1., 0.], vec![0.5, 0.5], vec![0., 1.]])
        .with_logger(logger)
        .build()
        .unwrap();

    survival.select(&create_single_front_candidates(), 2, &ReplayRandom::new(vec![1, 0])).unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("selected 2 of 4 candidates (1 fronts), 2 by niching"));
}

parameterized_test! {can_reject_invalid_configuration, builder, {
    assert!(matches!(builder.build(), Err(SelectionError::InvalidConfiguration(_))));
}}

can_reject_invalid_configuration! {
    case01_no_directions: ReferenceLineSurvivalBuilder::default(),
    case02_empty_directions: ReferenceLineSurvivalBuilder::default().with_reference_directions(vec![]),
    case03_small_asf_weight: ReferenceLineSurvivalBuilder::default()
        .with_reference_directions(vec![vec![1., 0.]])
        .with_asf_weight(1.),
    case04_ideal_dimension: ReferenceLineSurvivalBuilder::default()
        .with_reference_directions(vec![vec![1., 0.]])
        .with_ideal_point(vec![0.]),
    case05_ideal_non_finite: ReferenceLineSurvivalBuilder::default()
        .with_reference_directions(vec![vec![1., 0.]])
        .with_ideal_point(vec![0., Float::NAN]),
}

#[test]
fn can_select_exact_amount_respecting_ranks() {
    let directions = create_das_dennis(3, 12);
    let candidates = create_population(create_sphere_objectives(120, 7));
    let mut survival = ReferenceLineSurvival::new(ReferenceDirections::new(directions).unwrap());

    let outcome = survival.select(&candidates, 60, &create_test_random()).unwrap();

    let mut indices = outcome.indices.clone();
    indices.sort_unstable();
    indices.dedup();
    assert_eq!(indices.len(), 60);
    assert!(indices.iter().all(|&idx| idx < candidates.size()));

    let ranks = rank_solutions(candidates.as_slice());
    let worst_survivor = outcome.indices.iter().map(|&idx| ranks[idx]).max().unwrap();
    let best_rejected =
        (0..candidates.size()).filter(|idx| !indices.contains(idx)).map(|idx| ranks[idx]).min().unwrap();
    assert!(worst_survivor <= best_rejected);

    let survivor_ranks = outcome.indices.iter().map(|&idx| ranks[idx]).collect::<Vec<_>>();
    assert!(survivor_ranks.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn can_repeat_selection_with_same_seed() {
    let run = |seed: u64| {
        let candidates = create_population(create_sphere_objectives(90, seed));
        let mut survival = ReferenceLineSurvival::new(ReferenceDirections::new(create_das_dennis(3, 12)).unwrap());

        survival.select(&candidates, 45, &DefaultRandom::new_repeatable(seed)).unwrap().indices
    };

    assert_eq!(run(3), run(3));
}

#[test]
fn can_use_independent_selectors_concurrently() {
    let run = |seed: u64| {
        let candidates = create_population(create_sphere_objectives(90, seed));
        let mut survival = ReferenceLineSurvival::new(ReferenceDirections::new(create_das_dennis(3, 12)).unwrap());

        survival.select(&candidates, 45, &DefaultRandom::new_repeatable(seed)).unwrap().indices
    };

    let sequential = (0..8_u64).map(run).collect::<Vec<_>>();
    let parallel = (0..8_u64).into_par_iter().map(run).collect::<Vec<_>>();

    assert_eq!(sequential, parallel);
}
