//! Predictor Orchestration Tests.
//!
//! Verifies the token lifecycle state machine across all five operations:
//! lookup issues a token and speculatively advances history, update either
//! trains the table (resolved) or rewinds history (squashed), and squash
//! restores the prediction-time snapshot. Includes the concrete scenarios
//! from the design walkthrough (1024-entry table, 10-bit history, 2-bit
//! counters).

use nandshare_core::{DirectionPredictor, NandSharePredictor, PredictorConfig};

// ══════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════

/// The walkthrough configuration: N=1024, H=10, C=2.
fn walkthrough_config(num_threads: usize) -> PredictorConfig {
    PredictorConfig {
        table_size: 1024,
        history_bits: 10,
        counter_bits: 2,
        num_threads,
    }
}

fn predictor(num_threads: usize) -> NandSharePredictor {
    match NandSharePredictor::new(&walkthrough_config(num_threads)) {
        Ok(bp) => bp,
        Err(e) => panic!("walkthrough config must be valid: {e}"),
    }
}

/// Forces a thread's history to a known value by resolving squashed
/// branches: each squashed update rewinds to the token snapshot and folds
/// in the chosen outcome, so the register becomes `(h << 1) | outcome`.
fn force_history(bp: &mut NandSharePredictor, tid: usize, outcomes: &[bool]) {
    for &outcome in outcomes {
        let (_, token) = bp.lookup(tid, 0x4000_0000);
        bp.update(tid, 0x4000_0000, outcome, token, true);
    }
}

// ══════════════════════════════════════════════════════════
// 1. Lookup / update walkthrough
// ══════════════════════════════════════════════════════════

/// The full walkthrough: with all-zero history and a fresh table, the first
/// lookup hits slot 1023 (counter 0, predict not-taken), history stays zero
/// (shift-in of the not-taken prediction), and each resolved-taken update
/// bumps the same counter, crossing the threshold at 2.
#[test]
fn walkthrough_lookup_train_flip() {
    let mut bp = predictor(1);
    let addr = 0x1000;

    let (p1, t1) = bp.lookup(0, addr);
    assert!(!p1, "counter 0 must predict not-taken");
    assert_eq!(t1.history(), 0, "token snapshots the prediction-time history");
    assert_eq!(bp.current_history(0), 0, "shifting in a 0 keeps history 0");
    bp.update(0, addr, true, t1, false);

    let (p2, t2) = bp.lookup(0, addr);
    assert!(!p2, "counter 1 is still below the threshold of 2");
    bp.update(0, addr, true, t2, false);

    let (p3, _t3) = bp.lookup(0, addr);
    assert!(p3, "counter 2 crosses the threshold");
}

/// Round-trip: a correct prediction leaves history exactly where a fresh
/// shift-in of that outcome from the pre-lookup state would put it.
#[test]
fn correct_prediction_round_trip() {
    let mut bp = predictor(1);
    force_history(&mut bp, 0, &[true, false, true]);
    let pre = bp.current_history(0);

    let (prediction, token) = bp.lookup(0, 0x2040);
    bp.update(0, 0x2040, prediction, token, false);

    let expected = ((pre << 1) | u64::from(prediction)) & 0b11_1111_1111;
    assert_eq!(
        bp.current_history(0),
        expected,
        "speculative and confirmed paths must agree when the prediction held"
    );
}

/// Training always uses the prediction-time history: a token resolved late
/// still trains the slot its snapshot selects, observable from another
/// thread whose live history equals that snapshot.
#[test]
fn update_trains_with_token_history() {
    let mut bp = predictor(2);
    let addr = 0xFFC;

    // Thread 0: two lookup/resolve rounds at history 0. The not-taken
    // prediction shifts a 0 back in, so history stays 0 for both rounds and
    // both trainings land in the slot for (addr, 0).
    for _ in 0..2 {
        let (prediction, token) = bp.lookup(0, addr);
        assert!(!prediction);
        bp.update(0, addr, true, token, false);
    }

    // Thread 1 still has history 0 and reads the shared table.
    let (prediction, _token) = bp.lookup(1, addr);
    assert!(prediction, "shared slot trained to taken via thread 0's tokens");
}

/// A squashed resolution must not touch the table.
#[test]
fn squashed_update_leaves_table_untrained() {
    let mut bp = predictor(1);
    let addr = 0x1000;

    for _ in 0..4 {
        let (_, token) = bp.lookup(0, addr);
        bp.update(0, addr, true, token, true);
    }
    force_history(&mut bp, 0, &[false; 10]);

    let (prediction, _token) = bp.lookup(0, addr);
    assert!(!prediction, "no squashed update may have trained the slot");
}

/// A squashed resolution rewinds history to the snapshot and folds in the
/// real outcome, discarding younger speculative bits.
#[test]
fn squashed_update_rewinds_history() {
    let mut bp = predictor(1);
    force_history(&mut bp, 0, &[true, true]);

    let (_, token) = bp.lookup(0, 0x1000);
    let snapshot = token.history();
    assert_eq!(snapshot, 0b11);

    // Younger speculative work past the mispredicted branch.
    let _ = bp.uncond_branch(0, 0x2000);
    let _ = bp.uncond_branch(0, 0x3000);

    bp.update(0, 0x1000, true, token, true);
    assert_eq!(
        bp.current_history(0),
        0b111,
        "history is the snapshot shifted with the real outcome"
    );
}

// ══════════════════════════════════════════════════════════
// 2. Unconditional branches
// ══════════════════════════════════════════════════════════

/// Unconditional jumps skip the table but fold a taken outcome into history
/// and issue a normal token.
#[test]
fn uncond_branch_advances_history_taken() {
    let mut bp = predictor(1);

    let token = bp.uncond_branch(0, 0x1000);
    assert!(token.prediction(), "unconditional branches are always taken");
    assert_eq!(token.history(), 0);
    assert_eq!(bp.current_history(0), 0b1);

    let token = bp.uncond_branch(0, 0x1004);
    assert_eq!(token.history(), 0b1);
    assert_eq!(bp.current_history(0), 0b11);
}

// ══════════════════════════════════════════════════════════
// 3. Target-buffer-miss hook
// ══════════════════════════════════════════════════════════

/// The BTB-miss hook clears only the newest history bit: no shift-in, upper
/// bits untouched.
#[test]
fn btb_update_clears_only_newest_bit() {
    let mut bp = predictor(1);
    force_history(&mut bp, 0, &[true, false, true]);
    assert_eq!(bp.current_history(0), 0b101);

    let token = bp.btb_update(0, 0x1000);
    assert!(!token.prediction());
    assert_eq!(token.history(), 0b101, "snapshot taken before the clear");
    assert_eq!(bp.current_history(0), 0b100, "bit 0 cleared, no shift");
}

// ══════════════════════════════════════════════════════════
// 4. Squash
// ══════════════════════════════════════════════════════════

/// Squash restores the exact prediction-time history, discarding the
/// speculative bit. Concrete scenario: history 0b10_1010_1010 (682).
#[test]
fn squash_restores_snapshot_exactly() {
    let mut bp = predictor(1);
    force_history(
        &mut bp,
        0,
        &[true, false, true, false, true, false, true, false, true, false],
    );
    assert_eq!(bp.current_history(0), 682);

    let (_, token) = bp.lookup(0, 0x1000);
    bp.squash(0, Some(token));
    assert_eq!(
        bp.current_history(0),
        682,
        "squash must discard the speculative bit and restore 682"
    );
}

/// Squash with no token is the documented no-op.
#[test]
fn squash_without_token_is_noop() {
    let mut bp = predictor(1);
    force_history(&mut bp, 0, &[true, true, false]);
    let before = bp.current_history(0);

    bp.squash(0, None);
    assert_eq!(bp.current_history(0), before);
    assert_eq!(bp.stats().squashes, 0, "a no-op squash consumes nothing");
}

// ══════════════════════════════════════════════════════════
// 5. Statistics
// ══════════════════════════════════════════════════════════

/// Counters track each operation, and mispredictions count disagreements on
/// the non-squashed path only.
#[test]
fn stats_track_token_lifecycle() {
    let mut bp = predictor(1);

    let (p1, t1) = bp.lookup(0, 0x1000);
    bp.update(0, 0x1000, !p1, t1, false); // resolved, mispredicted

    let (p2, t2) = bp.lookup(0, 0x1000);
    bp.update(0, 0x1000, p2, t2, false); // resolved, correct

    let (_, t3) = bp.lookup(0, 0x1000);
    bp.update(0, 0x1000, true, t3, true); // squashed resolution

    let t4 = bp.uncond_branch(0, 0x2000);
    bp.squash(0, Some(t4));

    let t5 = bp.btb_update(0, 0x3000);
    bp.squash(0, Some(t5));

    let stats = bp.stats();
    assert_eq!(stats.lookups, 3);
    assert_eq!(stats.uncond_branches, 1);
    assert_eq!(stats.btb_updates, 1);
    assert_eq!(stats.updates, 2);
    assert_eq!(stats.squashed_updates, 1);
    assert_eq!(stats.squashes, 2);
    assert_eq!(stats.mispredictions, 1);
    assert!((stats.mispredict_rate() - 0.5).abs() < f64::EPSILON);
}

// ══════════════════════════════════════════════════════════
// 6. Construction and bounds
// ══════════════════════════════════════════════════════════

/// Construction surfaces the validated table size.
#[test]
fn construction_reports_table_size() {
    let bp = predictor(1);
    assert_eq!(bp.table_size(), 1024);
}

/// Invalid configurations never construct a predictor.
#[test]
fn invalid_config_rejected_at_construction() {
    let config = PredictorConfig {
        table_size: 1000,
        ..walkthrough_config(1)
    };
    assert!(
        NandSharePredictor::new(&config).is_err(),
        "a 1000-entry table has no valid index mask"
    );
}

/// Out-of-range thread ids fail fast on every operation.
#[test]
#[should_panic(expected = "thread id 3 out of range")]
fn out_of_range_thread_id_rejected() {
    let mut bp = predictor(2);
    let _ = bp.lookup(3, 0x1000);
}
