//! Property-based tests for the network entity.
//!
//! Drives random operation scripts through a seeded network and checks the
//! link invariants, degree bookkeeping, and value ordering after every step.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::{NetworkBuilder, SeededRandom, test_utils::suite_proptest_config};

use super::Network;

/// One mutation applied to the network under test.
#[derive(Clone, Debug, Arbitrary)]
enum NetworkOp {
    #[weight(6)]
    AddLink(#[strategy(0_usize..24)] usize, #[strategy(0_usize..24)] usize),
    #[weight(2)]
    RandomConnect(#[strategy(0.0_f64..6.0)] f64),
    #[weight(1)]
    Resize(#[strategy(0_usize..20)] usize),
    #[weight(1)]
    SetValues(#[strategy(proptest::collection::vec(-10.0_f64..10.0, 0..24))] Vec<f64>),
}

fn apply(network: &mut Network<SeededRandom>, op: &NetworkOp) -> Result<(), TestCaseError> {
    match op {
        NetworkOp::AddLink(a, b) => {
            let size = network.size();
            let existed = *a < size && *b < size && network.links.contains(*a, *b);
            let before = network.link_count();
            let added = network.add_link(*a, *b);
            let expected = a != b && *a < size && *b < size && !existed;
            prop_assert_eq!(added, expected);
            prop_assert_eq!(network.link_count(), before + usize::from(added));
        }
        NetworkOp::RandomConnect(mean) => {
            let created = network
                .random_connect(*mean)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert_eq!(created, network.link_count());
        }
        NetworkOp::Resize(size) => {
            network
                .resize(*size)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert_eq!(network.size(), *size);
        }
        NetworkOp::SetValues(values) => {
            let size = network.size();
            let before = network.values().to_vec();
            prop_assert_eq!(network.set_values(values), size);
            let shared = size.min(values.len());
            prop_assert_eq!(&network.values()[..shared], &values[..shared]);
            prop_assert_eq!(&network.values()[shared..], &before[shared..]);
        }
    }
    Ok(())
}

fn check_structure(network: &Network<SeededRandom>) -> Result<(), TestCaseError> {
    network
        .invariants()
        .check_all()
        .map_err(|violation| TestCaseError::fail(violation.to_string()))?;

    let mut degree_sum = 0;
    for node in 0..network.size() {
        let neighbours = network
            .neighbors(node)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let degree = network
            .degree(node)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(neighbours.len(), degree);
        prop_assert!(!neighbours.contains(&node));
        for neighbour in neighbours {
            let back = network
                .neighbors(neighbour)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert!(back.contains(&node));
        }
        degree_sum += degree;
    }
    prop_assert_eq!(degree_sum, network.link_count() * 2);

    let sorted = network.sorted_values();
    prop_assert_eq!(sorted.len(), network.size());
    prop_assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
    let mut expected = network.values().to_vec();
    expected.sort_by(|left, right| right.total_cmp(left));
    prop_assert_eq!(sorted, expected);
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn operation_scripts_preserve_structure(
        seed in any::<u64>(),
        initial in 0_usize..20,
        ops in proptest::collection::vec(any::<NetworkOp>(), 1..32),
    ) {
        let mut network = NetworkBuilder::new().with_seed(seed).build();
        network
            .resize(initial)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        for op in &ops {
            apply(&mut network, op)?;
            check_structure(&network)?;
        }
    }

    #[test]
    fn random_connect_stays_within_simple_graph_bound(
        seed in any::<u64>(),
        size in 0_usize..64,
        mean in 0.0_f64..8.0,
    ) {
        let mut network = NetworkBuilder::new().with_seed(seed).build();
        network
            .resize(size)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let created = network
            .random_connect(mean)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(created <= size.saturating_sub(1) * size / 2);
        check_structure(&network)?;
    }
}
