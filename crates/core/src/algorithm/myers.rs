//! Myers O(ND) diff algorithm
//!
//! Implements the greedy diagonal search from Myers' "An O(ND) Difference
//! Algorithm and Its Variations" (1986), keeping one furthest-reaching
//! snapshot per edit distance so the shortest edit script can be rebuilt by
//! walking the trace backwards. Time is O((n+m)*D) and trace memory is
//! O(D*(n+m)), where D is the edit distance.

use crate::algorithm::DiffAlgorithm;
use crate::diff::EditOp;
use crate::tokenizers::Token;

/// Myers O(ND) diff algorithm
pub struct MyersAlgorithm;

impl MyersAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MyersAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffAlgorithm for MyersAlgorithm {
    fn compute(&self, original: &[Token], revised: &[Token]) -> Vec<EditOp> {
        if original.is_empty() && revised.is_empty() {
            return Vec::new();
        }

        if original.is_empty() {
            // All insertions
            return revised.iter().cloned().map(EditOp::added).collect();
        }

        if revised.is_empty() {
            // All deletions
            return original.iter().cloned().map(EditOp::removed).collect();
        }

        let (distance, trace) = shortest_edit(original, revised);
        backtrack(original, revised, &trace, distance)
    }
}

/// Furthest-reaching `x` per diagonal `k`, stored densely for
/// `k` in `[-max, max]` at index `k + max`
#[derive(Clone)]
struct DiagonalRow {
    offset: isize,
    xs: Vec<usize>,
}

impl DiagonalRow {
    fn new(max: usize) -> Self {
        Self {
            offset: max as isize,
            xs: vec![0; 2 * max + 1],
        }
    }

    fn get(&self, k: isize) -> usize {
        self.xs[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, x: usize) {
        self.xs[(k + self.offset) as usize] = x;
    }
}

/// Decide whether the path ending on diagonal `k` at distance `d` extends
/// the `k + 1` neighbor (a downward move: insertion) rather than `k - 1`
/// (a rightward move: deletion), given the furthest-reaching values of
/// distance `d - 1`.
///
/// Shared by the forward search and the backtracker so the reconstructed
/// path is always one the search actually took.
fn extends_down(row: &DiagonalRow, k: isize, d: isize) -> bool {
    k == -d || (k != d && row.get(k - 1) < row.get(k + 1))
}

/// Forward pass: find the edit distance and collect one furthest-reaching
/// snapshot per distance.
///
/// Callers must hand in two non-empty sequences.
fn shortest_edit(a: &[Token], b: &[Token]) -> (usize, Vec<DiagonalRow>) {
    let n = a.len();
    let m = b.len();
    let max = n + m;

    let mut v = DiagonalRow::new(max);
    let mut trace = Vec::new();

    for d in 0..=(max as isize) {
        let mut k = -d;
        while k <= d {
            let mut x = if extends_down(&v, k, d) {
                v.get(k + 1)
            } else {
                v.get(k - 1) + 1
            };
            let mut y = (x as isize - k) as usize;

            // Snake: advance along the diagonal while tokens match
            while x < n && y < m && a[x] == b[y] {
                x += 1;
                y += 1;
            }

            v.set(k, x);

            if x >= n && y >= m {
                trace.push(v.clone());
                return (d as usize, trace);
            }

            k += 2;
        }

        trace.push(v.clone());
    }

    unreachable!("the edit distance is bounded by the total token count")
}

/// Backward pass: rebuild the elementary edit script from the trace.
fn backtrack(a: &[Token], b: &[Token], trace: &[DiagonalRow], distance: usize) -> Vec<EditOp> {
    let mut ops = Vec::new();
    let mut x = a.len();
    let mut y = b.len();

    for d in (1..=distance).rev() {
        let row = &trace[d - 1];
        let k = x as isize - y as isize;
        let d = d as isize;

        let prev_k = if extends_down(row, k, d) { k + 1 } else { k - 1 };
        let prev_x = row.get(prev_k);
        let prev_y = (prev_x as isize - prev_k) as usize;

        // Replay the snake that followed the edit, back to front
        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            ops.push(EditOp::unchanged(a[x].clone()));
        }

        if x > prev_x {
            // Rightward move: a token of the original was deleted
            x -= 1;
            ops.push(EditOp::removed(a[x].clone()));
        } else {
            // Downward move: a token of the revision was inserted
            y -= 1;
            ops.push(EditOp::added(b[y].clone()));
        }
    }

    // Whatever remains is the d = 0 prefix snake of matching tokens
    while x > 0 && y > 0 {
        x -= 1;
        y -= 1;
        ops.push(EditOp::unchanged(a[x].clone()));
    }

    ops.reverse();
    ops
}
