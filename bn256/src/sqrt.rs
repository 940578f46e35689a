//! Modular square roots in the base field via Cipolla's algorithm.
//!
//! Decompressing a curve point means solving `y² = x³ + b` for `y`, a
//! square-root problem modulo the field characteristic `p`. Cipolla's
//! method is used because it works for any odd prime, not only the
//! `p ≡ 3 (mod 4)` class that admits the single-exponentiation shortcut:
//! pick `a` with `a² − n` a non-residue, then compute `(a + ω)^((p+1)/2)`
//! in the quadratic extension `Fq[ω]`, `ω² = a² − n`. The ω-component of
//! the result cancels and the base component squares to `n`.
//!
//! The non-residue search is variable-time in `n`; see the crate-level
//! note on timing channels.

use ark_bn254::Fq;
use ark_ff::{BigInt, BigInteger, Field, One, PrimeField, Zero};

use crate::error::Error;

/// Cap on the search for a quadratic non-residue. Half of all nonzero
/// field elements are non-residues, so hitting the cap is not expected to
/// happen; it exists so that the search is provably not an infinite loop.
const NONRESIDUE_SEARCH_CAP: u32 = 512;

/// An element `x + y·ω` of `Fq[ω]` for some fixed non-square `ω²`.
#[derive(Clone, Copy)]
struct Ext {
    x: Fq,
    y: Fq,
}

fn ext_mul(a: Ext, b: Ext, w2: Fq) -> Ext {
    Ext {
        x: a.x * b.x + a.y * b.y * w2,
        y: a.x * b.y + a.y * b.x,
    }
}

/// Returns both square roots of `n`, or `None` when `n` is a quadratic
/// non-residue. The two roots are negatives of each other; `sqrt(0)`
/// yields the double root `(0, 0)`.
pub(crate) fn sqrt(n: Fq) -> Result<Option<(Fq, Fq)>, Error> {
    if n.is_zero() {
        return Ok(Some((Fq::zero(), Fq::zero())));
    }
    if !n.legendre().is_qr() {
        return Ok(None);
    }

    // Find `a` such that a² − n is a non-residue; it defines the extension.
    let mut a = Fq::zero();
    let mut w2 = None;
    for _ in 0..NONRESIDUE_SEARCH_CAP {
        let candidate = a.square() - n;
        if candidate.legendre().is_qnr() {
            w2 = Some(candidate);
            break;
        }
        a += Fq::one();
    }
    let Some(w2) = w2 else {
        return Err(Error::NonResidueSearchExhausted);
    };

    // (a + ω)^((p+1)/2) by square-and-multiply, most significant bit
    // first. The exponent is (p−1)/2 + 1, which cannot overflow the
    // 256-bit limb representation of the 254-bit modulus.
    let mut exp = Fq::MODULUS_MINUS_ONE_DIV_TWO;
    let carry = exp.add_with_carry(&BigInt::from(1u64));
    debug_assert!(!carry);
    let base = Ext { x: a, y: Fq::one() };
    let mut acc = base;
    for i in (0..exp.num_bits() - 1).rev() {
        acc = ext_mul(acc, acc, w2);
        if exp.get_bit(i as usize) {
            acc = ext_mul(acc, base, w2);
        }
    }
    // The ω-component vanishes for this exponent; that is the point of the
    // construction.
    debug_assert!(acc.y.is_zero());
    Ok(Some((acc.x, -acc.x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::{test_rng, UniformRand};

    const ITERATIONS: usize = 50;

    #[test]
    fn roots_of_random_squares() {
        let mut rng = test_rng();
        for _ in 0..ITERATIONS {
            let r = Fq::rand(&mut rng);
            let n = r.square();
            let (r1, r2) = sqrt(n).unwrap().expect("a square has a root");
            assert_eq!(r1.square(), n);
            assert_eq!(r2.square(), n);
            assert_eq!(r1 + r2, Fq::zero());
            assert!(r1 == r || r2 == r);
        }
    }

    #[test]
    fn non_residues_have_no_root() {
        let mut rng = test_rng();
        let mut seen = 0;
        while seen < ITERATIONS {
            let n = Fq::rand(&mut rng);
            if n.legendre().is_qnr() {
                assert!(sqrt(n).unwrap().is_none());
                seen += 1;
            }
        }
    }

    #[test]
    fn zero_is_its_own_root() {
        assert!(matches!(
            sqrt(Fq::zero()),
            Ok(Some((a, b))) if a.is_zero() && b.is_zero()
        ));
    }

    #[test]
    fn small_squares() {
        for k in 1u64..=16 {
            let n = Fq::from(k * k);
            let (r1, _) = sqrt(n).unwrap().expect("k² is a square");
            assert_eq!(r1.square(), n);
        }
    }
}
