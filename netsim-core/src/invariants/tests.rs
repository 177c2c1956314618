use rstest::rstest;

use super::*;

fn linked_table(edges: &[(usize, usize)], node_count: usize) -> LinkTable {
    let mut table = LinkTable::default();
    for (a, b) in edges {
        table.try_insert(*a, *b, node_count).expect("valid edge");
    }
    table
}

#[test]
fn check_all_succeeds_for_valid_links() {
    let table = linked_table(&[(0, 1), (1, 2), (2, 3), (3, 0)], 4);
    NetworkInvariantChecker::new(&table, 4)
        .check_all()
        .expect("links valid");
}

#[test]
fn check_all_succeeds_for_empty_links() {
    let table = LinkTable::default();
    NetworkInvariantChecker::new(&table, 0)
        .check_all()
        .expect("no links is valid");
}

#[test]
fn symmetry_reports_one_sided_entry() {
    let mut table = linked_table(&[(0, 1)], 3);
    table.insert_directed_unchecked(2, 0);

    let err = NetworkInvariantChecker::new(&table, 3)
        .symmetry()
        .expect_err("one-sided entry must fail");
    assert_eq!(
        err,
        NetworkInvariantViolation::MissingBacklink {
            origin: 2,
            target: 0
        }
    );
}

#[test]
fn no_self_loops_reports_looped_node() {
    let mut table = LinkTable::default();
    table.insert_directed_unchecked(1, 1);

    let err = NetworkInvariantChecker::new(&table, 2)
        .no_self_loops()
        .expect_err("self loop must fail");
    assert_eq!(err, NetworkInvariantViolation::SelfLoop { node: 1 });
}

#[rstest]
#[case::shrunk_below_target(3, 2)]
#[case::shrunk_to_zero(3, 0)]
fn in_range_reports_dangling_link(#[case] built_with: usize, #[case] checked_with: usize) {
    let table = linked_table(&[(0, 2)], built_with);
    let err = NetworkInvariantChecker::new(&table, checked_with)
        .in_range()
        .expect_err("dangling link must fail");
    assert!(matches!(
        err,
        NetworkInvariantViolation::OutOfRange { node_count, .. } if node_count == checked_with
    ));
}

#[test]
fn collect_all_reports_multiple_violations() {
    let mut table = LinkTable::default();
    table.insert_directed_unchecked(0, 0);
    table.insert_directed_unchecked(0, 5);

    let violations = NetworkInvariantChecker::new(&table, 2).collect_all();

    assert!(violations.contains(&NetworkInvariantViolation::SelfLoop { node: 0 }));
    assert!(violations.contains(&NetworkInvariantViolation::OutOfRange {
        origin: 0,
        target: 5,
        node_count: 2,
    }));
    assert!(violations.contains(&NetworkInvariantViolation::MissingBacklink {
        origin: 0,
        target: 5,
    }));
}

#[test]
fn check_many_stops_at_first_failure() {
    let mut table = LinkTable::default();
    table.insert_directed_unchecked(0, 0);
    table.insert_directed_unchecked(1, 7);

    let err = NetworkInvariantChecker::new(&table, 2)
        .check_many([NetworkInvariant::NoSelfLoops, NetworkInvariant::InRange])
        .expect_err("must fail");
    assert_eq!(err, NetworkInvariantViolation::SelfLoop { node: 0 });
}
