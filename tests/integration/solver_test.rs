use khs::generator::{GeneratorConfig, generate};
use khs::instance::{Element, Instance};
use khs::parser::{format_instance, parse_instance};
use khs::reduction::reduce;
use khs::search::{Heuristic, SearchConfig, SearchOutcome, Solver, run_search, selector_for};
use khs::validation::{check_solution, is_hitting_set};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use test_log::test;

fn solve(heuristic: Heuristic, seed: u64, instance: &Instance) -> Option<Vec<Element>> {
    Solver::new(selector_for(heuristic, Some(seed))).solve(instance, instance.budget())
}

/// Smallest hitting set size by enumerating every subset of the universe
fn brute_force_minimum(instance: &Instance) -> usize {
    let n = instance.universe_size();
    let mut best = n as usize;
    for mask in 0u32..(1 << n) {
        let size = mask.count_ones() as usize;
        if size >= best {
            continue;
        }
        let candidate: Vec<Element> = (1..=n).filter(|e| mask & (1 << (e - 1)) != 0).collect();
        if is_hitting_set(&candidate, instance) {
            best = size;
        }
    }
    best
}

fn random_instance(rng: &mut ChaCha8Rng) -> Instance {
    let n = rng.random_range(3..=8u32);
    let m = rng.random_range(1..=7usize);
    let lists: Vec<Vec<Element>> = (0..m)
        .map(|_| {
            let size = rng.random_range(1..=3usize);
            (0..size).map(|_| rng.random_range(1..=n)).collect()
        })
        .collect();
    Instance::from_lists(n, lists, 0).unwrap()
}

#[test]
fn test_scenario_shared_element() {
    let instance = Instance::from_lists(3, vec![vec![1, 2], vec![2, 3]], 1).unwrap();
    for h in Heuristic::EXHAUSTIVE {
        assert_eq!(solve(h, 1, &instance), Some(vec![2]), "{}", h);
    }
}

#[test]
fn test_scenario_disjoint_pair() {
    let instance = Instance::from_lists(3, vec![vec![1, 2], vec![3]], 1).unwrap();
    for h in Heuristic::EXHAUSTIVE {
        assert_eq!(solve(h, 1, &instance), None, "{}", h);
    }
}

#[test]
fn test_scenario_five_singletons_budget_four() {
    let lists: Vec<Vec<Element>> = (1..=5).map(|e| vec![e]).collect();
    let instance = Instance::from_lists(5, lists, 4).unwrap();
    for h in Heuristic::EXHAUSTIVE {
        assert_eq!(solve(h, 1, &instance), None, "{}", h);
    }
    let instance = instance.with_budget(5);
    for h in Heuristic::EXHAUSTIVE {
        let solution = solve(h, 1, &instance).unwrap();
        assert_eq!(solution.len(), 5);
    }
}

#[test]
fn test_scenario_empty_collection() {
    for k in [0, 1, 7] {
        let instance = Instance::from_lists(4, vec![], k).unwrap();
        for h in Heuristic::EXHAUSTIVE {
            assert_eq!(solve(h, 3, &instance), Some(vec![]));
        }
    }
}

#[test]
fn test_sound_and_complete_against_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for round in 0..150 {
        let base = random_instance(&mut rng);
        let minimum = brute_force_minimum(&base) as u32;

        for h in Heuristic::EXHAUSTIVE {
            for seed in [round, round + 1000] {
                let at_min = base.with_budget(minimum);
                let solution = solve(h, seed, &at_min).unwrap_or_else(|| {
                    panic!("{} missed a solution of size {} in\n{}", h, minimum, base)
                });
                let check = check_solution(&solution, &at_min, minimum);
                assert!(check.is_valid(), "{}: {} for {:?}", h, check, solution);

                if minimum > 0 {
                    let below = base.with_budget(minimum - 1);
                    assert_eq!(solve(h, seed, &below), None, "{} beat the minimum", h);
                }
            }
        }
    }
}

#[test]
fn test_reduce_is_idempotent_on_random_instances() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for _ in 0..50 {
        let instance = random_instance(&mut rng);
        for e in instance.universe() {
            let once = reduce(&instance, e);
            assert_eq!(reduce(&once, e), once);
            assert!(once.subsets().iter().all(|s| !s.contains(e)));
        }
    }
}

#[test]
fn test_generated_instance_solves_within_planted_budget() {
    let generated = generate(
        &GeneratorConfig::default()
            .with_universe_size(40)
            .with_subset_count(120)
            .with_subset_size(3, 5)
            .with_planted_size(5)
            .with_seed(123),
    )
    .unwrap();

    // The file format must carry the instance unchanged
    let instance = parse_instance(&format_instance(&generated.instance)).unwrap();
    assert_eq!(instance, generated.instance);

    for h in Heuristic::EXHAUSTIVE {
        let config = SearchConfig::default().with_heuristic(h).with_seed(8);
        let result = run_search(&instance, &config);
        let solution = result.solution().expect("planted set fits the budget");
        assert!(check_solution(solution, &instance, 5).is_valid());
        assert_eq!(result.budget, 5);
    }
}

#[test]
fn test_legacy_greedy_is_sound_when_it_answers() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for _ in 0..150 {
        let base = random_instance(&mut rng);
        let minimum = brute_force_minimum(&base) as u32;
        let instance = base.with_budget(minimum);

        let mut solver = Solver::new(selector_for(Heuristic::GreedyCritical, None));
        let result = solver.search(&instance, &SearchConfig::default());
        match &result.outcome {
            SearchOutcome::Found(solution) => {
                assert!(check_solution(solution, &instance, minimum).is_valid())
            }
            SearchOutcome::NoSolution => {}
            SearchOutcome::TimedOut => unreachable!("no timeout configured"),
        }
        // A single child per node: one path of at most k+1 nodes
        assert!(result.statistics.nodes_visited <= u64::from(minimum) + 1);
    }
}
