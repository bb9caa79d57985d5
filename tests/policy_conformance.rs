//! Cross-policy conformance tests
//!
//! Hand-run expectations for the classic five-block scenario plus the edge
//! cases every policy must agree on.

use fitsim::{run_policy, FitPolicy, NextFit, Placement, PolicyKind, Scenario};

fn run_classroom(kind: PolicyKind) -> fitsim::RunOutcome {
    let scenario = Scenario::classroom_example();
    run_policy(kind, &scenario.block_sizes, &scenario.request_sizes)
}

#[test]
fn test_first_fit_classroom_mapping() {
    let outcome = run_classroom(PolicyKind::FirstFit);
    assert_eq!(
        outcome.placements,
        vec![
            Placement::Block(1),
            Placement::Block(4),
            Placement::Block(0),
            Placement::Unallocated,
        ]
    );
    assert_eq!(outcome.residuals, vec![88, 286, 100, 300, 185]);
}

#[test]
fn test_next_fit_classroom_mapping() {
    let outcome = run_classroom(PolicyKind::NextFit);
    assert_eq!(
        outcome.placements,
        vec![
            Placement::Block(1),
            Placement::Block(4),
            Placement::Block(4),
            Placement::Unallocated,
        ]
    );
    assert_eq!(outcome.residuals, vec![200, 286, 100, 300, 73]);
}

#[test]
fn test_best_fit_classroom_mapping() {
    let outcome = run_classroom(PolicyKind::BestFit);
    assert_eq!(
        outcome.placements,
        vec![
            Placement::Block(3),
            Placement::Block(1),
            Placement::Block(0),
            Placement::Block(4),
        ]
    );
    assert_eq!(outcome.residuals, vec![88, 85, 100, 86, 175]);
}

#[test]
fn test_worst_fit_classroom_mapping() {
    let outcome = run_classroom(PolicyKind::WorstFit);
    assert_eq!(
        outcome.placements,
        vec![
            Placement::Block(4),
            Placement::Block(1),
            Placement::Block(4),
            Placement::Unallocated,
        ]
    );
    assert_eq!(outcome.residuals, vec![200, 85, 100, 300, 274]);
}

#[test]
fn test_equal_space_ties_resolve_to_lowest_id() {
    for kind in [PolicyKind::BestFit, PolicyKind::WorstFit] {
        let outcome = run_policy(kind, &[300, 300], &[250]);
        assert_eq!(
            outcome.placements,
            vec![Placement::Block(0)],
            "{}",
            kind.name()
        );
    }
}

#[test]
fn test_next_fit_resumes_at_cursor_not_block_zero() {
    // After placing in block 1, next fit keeps a 50-unit request there even
    // though block 0 could hold it; first fit on the same inputs goes back
    // to block 0.
    let mut policy = NextFit::new(&[100, 200]);
    assert_eq!(policy.place(150), Placement::Block(1));
    assert_eq!(policy.place(50), Placement::Block(1));

    let first = run_policy(PolicyKind::FirstFit, &[100, 200], &[150, 50]);
    assert_eq!(first.placements[1], Placement::Block(0));
}

#[test]
fn test_oversized_request_is_unallocated_everywhere() {
    for kind in PolicyKind::ALL {
        let outcome = run_policy(kind, &[200, 500, 100], &[900]);
        assert_eq!(
            outcome.placements,
            vec![Placement::Unallocated],
            "{}",
            kind.name()
        );
        // a failed request must not disturb any residual
        assert_eq!(outcome.residuals, vec![200, 500, 100], "{}", kind.name());
    }
}

#[test]
fn test_no_requests_yields_empty_mapping() {
    for kind in PolicyKind::ALL {
        let outcome = run_policy(kind, &[100, 200], &[]);
        assert!(outcome.placements.is_empty(), "{}", kind.name());
        assert_eq!(outcome.residuals, vec![100, 200], "{}", kind.name());
    }
}

#[test]
fn test_no_blocks_leaves_everything_unallocated() {
    for kind in PolicyKind::ALL {
        let outcome = run_policy(kind, &[], &[10, 20]);
        assert_eq!(
            outcome.placements,
            vec![Placement::Unallocated, Placement::Unallocated],
            "{}",
            kind.name()
        );
        assert!(outcome.residuals.is_empty(), "{}", kind.name());
    }
}

#[test]
fn test_output_length_matches_request_count() {
    let scenario = Scenario::classroom_example();
    for kind in PolicyKind::ALL {
        let outcome = run_policy(kind, &scenario.block_sizes, &scenario.request_sizes);
        assert_eq!(outcome.placements.len(), scenario.request_sizes.len());
        assert_eq!(outcome.residuals.len(), scenario.block_sizes.len());
    }
}
