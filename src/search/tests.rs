use std::collections::{HashMap, HashSet};

use crate::config::{OperatorSet, SearchConfig};
use crate::numeric::MagnitudeBand;
use crate::search::engine::next_progress_mark;
use crate::search::{
    CandidateGenerator, ClosedStore, ExpressionNode, Frontier, Insertion, InvariantViolation,
    Operator, SearchEngine, SearchError, SearchOutcome, SearchStatus,
};

fn node(value: i64, term_count: usize) -> ExpressionNode<i64> {
    ExpressionNode {
        value,
        left: value,
        right: value,
        term_count,
        op: Some(Operator::Add),
    }
}

fn summary(candidates: &[ExpressionNode<i64>]) -> HashSet<(i64, Operator, usize)> {
    candidates
        .iter()
        .filter_map(|c| c.op.map(|op| (c.value, op, c.term_count)))
        .collect()
}

#[test]
fn test_leaf_node() {
    let leaf = ExpressionNode::leaf(5_i64);
    assert_eq!(leaf.value, 5);
    assert_eq!(leaf.term_count, 1);
    assert_eq!(leaf.op, None);
    assert!(leaf.is_leaf());
}

#[test]
fn test_seeds_enter_frontier_as_leaves() {
    let config = SearchConfig::new(vec![5_i64, 7], 100);
    let engine = SearchEngine::new(config);
    assert!(engine.is_ok());
    if let Ok(engine) = engine {
        assert_eq!(
            engine.state().frontier().get(5),
            Some(&ExpressionNode::leaf(5))
        );
        assert_eq!(engine.state().frontier().live_count(), 2);
        assert!(engine.state().closed().is_empty());
        assert_eq!(engine.status(), SearchStatus::Running);
    }
}

#[test]
fn test_generate_distinct_integers() {
    let generator = CandidateGenerator::default();
    let a = ExpressionNode::leaf(3_i64);
    let b = ExpressionNode::leaf(4_i64);
    let produced = summary(&generator.candidates(&a, &b));

    assert!(produced.contains(&(7, Operator::Add, 2)));
    assert!(produced.contains(&(-1, Operator::Sub, 2)));
    assert!(produced.contains(&(12, Operator::Mul, 2)));
    // swapped operands for the non-commutative operators
    assert!(produced.contains(&(1, Operator::Sub, 2)));
    assert!(produced.iter().all(|(_, op, _)| *op != Operator::Div));
    assert_eq!(produced.len(), 4);
}

#[test]
fn test_generate_records_operands() {
    let generator = CandidateGenerator::default();
    let a = node(12, 2);
    let b = ExpressionNode::leaf(4_i64);
    let candidates = generator.candidates(&a, &b);

    let div = candidates.iter().find(|c| c.op == Some(Operator::Div));
    assert_eq!(
        div,
        Some(&ExpressionNode {
            value: 3,
            left: 12,
            right: 4,
            term_count: 3,
            op: Some(Operator::Div),
        })
    );
    let swapped_sub = candidates
        .iter()
        .find(|c| c.op == Some(Operator::Sub) && c.left == 4);
    assert_eq!(swapped_sub.map(|c| c.value), Some(-8));
}

#[test]
fn test_generate_self_combination() {
    let generator = CandidateGenerator::default();
    let a = ExpressionNode::leaf(4_i64);
    let produced = summary(&generator.candidates(&a, &a));

    let expected: HashSet<_> = [
        (1, Operator::Div, 2),
        (0, Operator::Sub, 2),
        (16, Operator::Mul, 2),
        (8, Operator::Add, 2),
    ]
    .into_iter()
    .collect();
    assert_eq!(produced, expected);
}

#[test]
fn test_generate_zero_divisor() {
    let generator = CandidateGenerator::default();
    let zero = ExpressionNode::leaf(0_i64);
    let five = ExpressionNode::leaf(5_i64);
    let produced = summary(&generator.candidates(&five, &zero));
    // 0 / 5 is exact, 5 / 0 is not produced
    assert!(produced.contains(&(0, Operator::Div, 2)));
    assert_eq!(
        produced
            .iter()
            .filter(|(_, op, _)| *op == Operator::Div)
            .count(),
        1
    );
}

#[test]
fn test_generate_real_division() {
    let generator = CandidateGenerator::default();
    let a = ExpressionNode::leaf(1.0_f64);
    let b = ExpressionNode::leaf(4.0_f64);
    let quotients: Vec<f64> = generator
        .candidates(&a, &b)
        .iter()
        .filter(|c| c.op == Some(Operator::Div))
        .map(|c| c.value)
        .collect();
    assert_eq!(quotients, vec![0.25, 4.0]);
}

#[test]
fn test_generate_respects_operator_set() {
    let generator = CandidateGenerator::new(OperatorSet::from_ops(&[Operator::Mul]));
    let a = ExpressionNode::leaf(3_i64);
    let b = ExpressionNode::leaf(4_i64);
    let produced = summary(&generator.candidates(&a, &b));
    assert_eq!(produced, [(12, Operator::Mul, 2)].into_iter().collect());
}

#[test]
fn test_frontier_insert_or_improve() {
    let mut frontier = Frontier::new();
    assert_eq!(frontier.insert_or_improve(node(10, 5)), Ok(Insertion::Added));
    assert_eq!(frontier.insert_or_improve(node(10, 5)), Ok(Insertion::Ignored));
    assert_eq!(frontier.insert_or_improve(node(10, 7)), Ok(Insertion::Ignored));
    assert_eq!(frontier.get(10).map(|n| n.term_count), Some(5));

    assert_eq!(frontier.insert_or_improve(node(10, 3)), Ok(Insertion::Improved));
    assert_eq!(frontier.get(10).map(|n| n.term_count), Some(3));
    assert_eq!(frontier.live_count(), 1);
    assert_eq!(frontier.stale_count(), 1);
    assert_eq!(frontier.size(), 2);
}

#[test]
fn test_frontier_insert_is_idempotent() {
    let mut once = Frontier::new();
    let mut twice = Frontier::new();
    assert!(once.insert_or_improve(node(9, 2)).is_ok());
    assert!(twice.insert_or_improve(node(9, 2)).is_ok());
    assert!(twice.insert_or_improve(node(9, 2)).is_ok());

    assert_eq!(once.live_count(), twice.live_count());
    assert_eq!(once.size(), twice.size());
    assert_eq!(once.extract_min(), twice.extract_min());
}

#[test]
fn test_frontier_extract_min_skips_stale() {
    let mut frontier = Frontier::new();
    for candidate in [node(10, 5), node(20, 3), node(30, 4), node(10, 2)] {
        assert!(frontier.insert_or_improve(candidate).is_ok());
    }

    let order: Vec<_> = (0..3)
        .filter_map(|_| frontier.extract_min().ok())
        .map(|n| (n.value, n.term_count))
        .collect();
    assert_eq!(order, vec![(10, 2), (20, 3), (30, 4)]);
    assert!(frontier.is_empty());
    assert_eq!(frontier.stale_count(), 1);
    assert_eq!(frontier.level(), 4);
}

#[test]
fn test_frontier_equal_costs_come_out_in_insertion_order() {
    let mut frontier = Frontier::new();
    for value in [5, 3, 9] {
        assert!(frontier.insert_or_improve(node(value, 2)).is_ok());
    }
    let order: Vec<_> = (0..3)
        .filter_map(|_| frontier.extract_min().ok())
        .map(|n| n.value)
        .collect();
    assert_eq!(order, vec![5, 3, 9]);
}

#[test]
fn test_frontier_empty_extract_is_an_error() {
    let mut frontier = Frontier::<i64>::new();
    assert_eq!(frontier.extract_min(), Err(InvariantViolation::EmptyFrontier));
}

#[test]
fn test_frontier_rejects_cost_at_or_below_drained_level() {
    let mut frontier = Frontier::new();
    assert!(frontier.insert_or_improve(node(1, 2)).is_ok());
    assert!(frontier.extract_min().is_ok());

    assert!(matches!(
        frontier.insert_or_improve(node(2, 2)),
        Err(InvariantViolation::MonotonicFront {
            cost: 2,
            level: 2,
            ..
        })
    ));
    assert!(matches!(
        frontier.insert_or_improve(node(2, 0)),
        Err(InvariantViolation::ZeroCost { .. })
    ));
    assert_eq!(frontier.insert_or_improve(node(2, 3)), Ok(Insertion::Added));
}

#[test]
fn test_frontier_eviction_keeps_goal() {
    let mut frontier = Frontier::new();
    for candidate in [node(1, 2), node(2, 5), node(3, 6), node(99, 5)] {
        assert!(frontier.insert_or_improve(candidate).is_ok());
    }
    assert_eq!(frontier.evict_at_or_above(5, 99), 2);
    assert!(frontier.contains(1));
    assert!(frontier.contains(99));
    assert!(!frontier.contains(2));
    assert_eq!(frontier.stale_count(), 2);

    let drained: Vec<_> = (0..2)
        .filter_map(|_| frontier.extract_min().ok())
        .map(|n| n.value)
        .collect();
    assert_eq!(drained, vec![1, 99]);
    assert!(frontier.is_empty());
}

#[test]
fn test_closed_store() {
    let mut closed = ClosedStore::new();
    assert!(closed.insert(ExpressionNode::leaf(4_i64)).is_ok());
    assert!(closed.insert(node(8, 2)).is_ok());
    assert!(closed.insert(node(16, 3)).is_ok());

    assert!(closed.contains(8));
    assert!(!closed.contains(9));
    assert_eq!(closed.get(16).map(|n| n.term_count), Some(3));
    assert_eq!(closed.len(), 3);

    assert!(matches!(
        closed.insert(node(8, 4)),
        Err(InvariantViolation::AlreadySettled { .. })
    ));
    assert!(matches!(
        closed.insert(node(32, 2)),
        Err(InvariantViolation::SettleOrder { .. })
    ));

    let cheap: Vec<_> = closed.cheaper_than(3).iter().map(|n| n.value).collect();
    assert_eq!(cheap, vec![4, 8]);
    assert!(closed.cheaper_than(1).is_empty());
    assert_eq!(closed.cheaper_than(usize::MAX).len(), 3);
}

#[test]
fn test_two_thousand_eighteen_from_42_and_777() {
    let config = SearchConfig::new(vec![42_i64, 777], 2018)
        .with_band(MagnitudeBand::below(1_000_000));
    let outcome = SearchEngine::new(config).and_then(|mut engine| engine.run());
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.term_count(), Some(9));
        let solution = outcome.solution();
        assert!(solution.is_some());
        if let Some(solution) = solution {
            assert_eq!(solution.expression.evaluate(), Ok(2018));
            assert_eq!(solution.expression.term_count(), 9);
            let leaves = solution
                .infix
                .split(|c: char| !c.is_ascii_digit())
                .filter(|s| !s.is_empty())
                .count();
            assert_eq!(leaves, 9);
            assert!(solution.stats.closed > 0);
        }
    }
}

#[test]
fn test_unreachable_with_multiplication_and_division_only() {
    let config = SearchConfig::new(vec![2_i64], 3)
        .with_band(MagnitudeBand::below(1_000_000))
        .with_operators(OperatorSet::from_ops(&[Operator::Mul, Operator::Div]));
    let outcome = SearchEngine::new(config).and_then(|mut engine| engine.run());
    assert!(matches!(
        outcome,
        Ok(SearchOutcome::Unreachable { goal: 3, .. })
    ));
    if let Ok(outcome) = outcome {
        // 1 and the powers of two below the band edge
        assert_eq!(outcome.stats().closed, 20);
        assert_eq!(outcome.stats().open, 0);
    }
}

#[test]
fn test_term_limit_makes_goal_unreachable() {
    let config = SearchConfig::new(vec![42_i64, 777], 2018)
        .with_band(MagnitudeBand::below(1_000_000))
        .with_term_limit(4);
    let outcome = SearchEngine::new(config).and_then(|mut engine| engine.run());
    assert!(matches!(outcome, Ok(SearchOutcome::Unreachable { .. })));
}

#[test]
fn test_goal_among_seeds() {
    let config = SearchConfig::new(vec![3_i64, 7], 7);
    let outcome = SearchEngine::new(config).and_then(|mut engine| engine.run());
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.term_count(), Some(1));
        assert_eq!(outcome.solution().map(|s| s.infix.as_str()), Some("7"));
    }
}

#[test]
fn test_small_goal() {
    let config = SearchConfig::new(vec![3_i64, 4], 19).with_band(MagnitudeBand::below(1000));
    let outcome = SearchEngine::new(config).and_then(|mut engine| engine.run());
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        // 4 * 4 + 3
        assert_eq!(outcome.term_count(), Some(3));
        if let Some(solution) = outcome.solution() {
            assert_eq!(solution.expression.evaluate(), Ok(19));
        }
    }
}

#[test]
fn test_real_goal_matched_within_tolerance() {
    let config = SearchConfig::new(vec![0.1_f64, 0.2], 0.3)
        .with_band(MagnitudeBand::between(1e-6, 1e6))
        .with_tolerance(1e-9);
    let engine = SearchEngine::new(config);
    assert!(engine.is_ok());
    if let Ok(mut engine) = engine {
        let outcome = engine.run();
        assert!(outcome.is_ok());
        if let Ok(outcome) = outcome {
            assert_eq!(outcome.term_count(), Some(2));
            if let Some(solution) = outcome.solution() {
                assert_eq!(solution.goal, 0.3);
                let value = solution.expression.evaluate().unwrap_or(f64::NAN);
                assert!((value - 0.3).abs() < 1e-9);
            }
        }
        let stored = engine.state().lookup_best_known(0.3);
        assert_eq!(stored.map(|n| n.value), Some(0.3));
        assert_eq!(stored.map(|n| n.term_count), Some(2));
    }
}

#[test]
fn test_step_state_machine() {
    let config = SearchConfig::new(vec![3_i64, 4], 19).with_band(MagnitudeBand::below(1000));
    let engine = SearchEngine::new(config);
    assert!(engine.is_ok());
    if let Ok(mut engine) = engine {
        assert_eq!(
            engine.outcome().err(),
            Some(SearchError::Invariant(InvariantViolation::StillRunning))
        );

        assert_eq!(engine.step(), Ok(SearchStatus::Running));
        assert_eq!(engine.state().closed().len(), 1);

        let mut steps = 1;
        while engine.step() == Ok(SearchStatus::Running) {
            steps += 1;
        }
        assert_eq!(engine.status(), SearchStatus::Succeeded);
        assert_eq!(engine.state().stats().expansions, steps + 1);
        // finished engines stay put
        assert_eq!(engine.step(), Ok(SearchStatus::Succeeded));
        assert_eq!(engine.state().stats().expansions, steps + 1);
        assert!(engine.outcome().is_ok_and(|o| o.is_success()));
    }
}

#[test]
fn test_invalid_config_rejected_before_search() {
    let config = SearchConfig::<i64>::new(vec![], 10);
    assert!(matches!(
        SearchEngine::new(config),
        Err(SearchError::Config(_))
    ));
}

/// Minimum term count of every value reachable inside `band`, level by level
fn exhaustive_costs(
    seeds: &[i64],
    band: MagnitudeBand<i64>,
    max_terms: usize,
) -> HashMap<i64, usize> {
    let mut levels: Vec<Vec<i64>> = vec![Vec::new(), seeds.to_vec()];
    let mut best: HashMap<i64, usize> = seeds.iter().map(|&s| (s, 1)).collect();
    for k in 2..=max_terms {
        let mut level = HashSet::new();
        for i in 1..k {
            let (Some(lefts), Some(rights)) = (levels.get(i), levels.get(k - i)) else {
                continue;
            };
            for &a in lefts {
                for &b in rights {
                    for op in Operator::ALL {
                        if let Some(v) = op.apply(a, b)
                            && band.contains(v)
                        {
                            level.insert(v);
                        }
                    }
                }
            }
        }
        for &v in &level {
            best.entry(v).or_insert(k);
        }
        levels.push(level.into_iter().collect());
    }
    best
}

#[test]
fn test_settled_costs_are_minimal() {
    let band = MagnitudeBand::below(60);
    // goal outside the band: the search exhausts every reachable value
    let config = SearchConfig::new(vec![3_i64, 5], 1000).with_band(band);
    let engine = SearchEngine::new(config);
    assert!(engine.is_ok());
    if let Ok(mut engine) = engine {
        assert!(matches!(engine.run(), Ok(SearchOutcome::Unreachable { .. })));
        let deepest = engine
            .state()
            .closed()
            .iter()
            .map(|n| n.term_count)
            .max()
            .unwrap_or(0);
        let expected = exhaustive_costs(&[3, 5], band, deepest);

        assert_eq!(engine.state().closed().len(), expected.len());
        for settled in engine.state().closed().iter() {
            assert_eq!(
                expected.get(&settled.value),
                Some(&settled.term_count),
                "value {}",
                settled.value
            );
        }
    }
}

#[test]
fn test_progress_marks_always_advance() {
    assert_eq!(next_progress_mark(1), 2);
    assert_eq!(next_progress_mark(2), 3);
    assert_eq!(next_progress_mark(100), 150);
    assert_eq!(next_progress_mark(usize::MAX), usize::MAX);

    let mut mark = 1;
    for _ in 0..10 {
        let next = next_progress_mark(mark);
        assert!(next > mark);
        mark = next;
    }
}

#[test]
fn test_generator_reports_its_operators() {
    let operators = OperatorSet::from_ops(&[Operator::Mul, Operator::Div]);
    let generator = CandidateGenerator::new(operators);
    assert_eq!(generator.operators(), operators);
    assert!(!generator.operators().contains(Operator::Add));

    let config = SearchConfig::new(vec![2_i64], 8).with_operators(operators);
    let engine = SearchEngine::new(config);
    assert!(engine.is_ok());
}
