//! The bilinear map joining the three groups.

use ark_bn254::Bn254;
use ark_ec::pairing::Pairing;

use crate::{G1, G2, Gt};

/// Computes the optimal Ate pairing `e(p, q)`.
///
/// The map is bilinear, `e(a·P, b·Q) = (a·b)·e(P, Q)` in additive [`Gt`]
/// notation, and non-degenerate. The Miller loop and final exponentiation
/// run in the arithmetic backend; the returned element is fully reduced,
/// so mathematically equal results marshal to identical bytes.
pub fn pairing(p: &G1, q: &G2) -> Gt {
    Gt(Bn254::pairing(p.0, q.0))
}
