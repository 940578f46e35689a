//! The group G1: points of order `r` on `y² = x³ + 3` over the base field.

use ark_bn254::{g1, Fq, G1Affine, G1Projective};
use ark_ec::short_weierstrass::SWCurveConfig;
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_ff::{BigInteger, Field, PrimeField, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ark_std::rand::{CryptoRng, Rng, RngCore};
use num_bigint::BigUint;

use crate::encoding::{
    read_fq, write_fq, FQ_LEN, G1_COMPRESSED_LEN, G1_LEN, TAG_EVEN_Y, TAG_IDENTITY, TAG_ODD_Y,
};
use crate::error::Error;
use crate::sqrt::sqrt;

/// A point in G1. Construct one through [`G1::generator`], [`G1::random`],
/// the codec entry points, or the group operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct G1(pub(crate) G1Projective);

impl G1 {
    /// The canonical generator, the point `(1, 2)`.
    pub fn generator() -> Self {
        G1(G1Projective::generator())
    }

    /// The identity element (the point at infinity).
    pub fn identity() -> Self {
        G1(G1Projective::zero())
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    /// Draws a uniform scalar `k` in `[0, order)` from `rng` and returns
    /// it together with `k·G`. Fails only when the entropy source itself
    /// fails.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(BigUint, Self), Error> {
        let k = crate::random_scalar(rng)?;
        let point = Self::scalar_base_mult(&k);
        Ok((k, point))
    }

    /// Multiplies the generator by `k`. Any non-negative magnitude is
    /// accepted; the double-and-add walk wraps values at or above the
    /// group order.
    pub fn scalar_base_mult(k: &BigUint) -> Self {
        Self::generator().scalar_mult(k)
    }

    /// Multiplies this point by `k`, under the same scalar contract as
    /// [`G1::scalar_base_mult`].
    pub fn scalar_mult(&self, k: &BigUint) -> Self {
        G1(self.0.mul_bigint(k.to_u64_digits()))
    }

    /// Canonical encoding: `x ‖ y`, each 32 bytes big-endian; the identity
    /// is all zeros.
    pub fn marshal(&self) -> [u8; G1_LEN] {
        let mut out = [0u8; G1_LEN];
        let affine = self.0.into_affine();
        let Some((x, y)) = affine.xy() else {
            return out;
        };
        write_fq(&mut out[..FQ_LEN], &x);
        write_fq(&mut out[FQ_LEN..], &y);
        out
    }

    /// Decodes an encoding produced by [`G1::marshal`]. The input must be
    /// exactly [`G1_LEN`] bytes, fully reduced, and on the curve.
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G1_LEN {
            return Err(Error::MalformedInput);
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let x = read_fq(&bytes[..FQ_LEN])?;
        let y = read_fq(&bytes[FQ_LEN..])?;
        Self::from_coordinates(x, y)
    }

    /// Compressed encoding: one tag byte carrying the parity of `y` (or
    /// marking the identity), then `x` big-endian.
    pub fn compress(&self) -> [u8; G1_COMPRESSED_LEN] {
        let mut out = [0u8; G1_COMPRESSED_LEN];
        let affine = self.0.into_affine();
        let Some((x, y)) = affine.xy() else {
            out[0] = TAG_IDENTITY;
            return out;
        };
        out[0] = if y.into_bigint().is_odd() {
            TAG_ODD_Y
        } else {
            TAG_EVEN_Y
        };
        write_fq(&mut out[1..], &x);
        out
    }

    /// Reconstructs a point from [`G1::compress`] output, solving
    /// `y² = x³ + 3` for the suppressed coordinate and picking the root
    /// whose parity matches the tag.
    pub fn decompress(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G1_COMPRESSED_LEN {
            return Err(Error::MalformedInput);
        }
        let want_odd = match bytes[0] {
            TAG_IDENTITY => {
                if bytes[1..].iter().any(|&b| b != 0) {
                    return Err(Error::NonCanonicalEncoding);
                }
                return Ok(Self::identity());
            }
            TAG_EVEN_Y => false,
            TAG_ODD_Y => true,
            _ => return Err(Error::MalformedInput),
        };
        let x = read_fq(&bytes[1..])?;
        // An x whose right-hand side has no square root names no curve
        // point at all; that is invalid input, not an internal failure.
        let rhs = x.square() * x + g1::Config::COEFF_B;
        let Some((root, root_neg)) = sqrt(rhs)? else {
            return Err(Error::PointNotOnCurve);
        };
        let y = if root.into_bigint().is_odd() == want_odd {
            root
        } else {
            root_neg
        };
        // Both roots share a parity only when y = 0; the other parity is
        // then unsatisfiable.
        if y.into_bigint().is_odd() != want_odd {
            return Err(Error::PointNotOnCurve);
        }
        Self::from_coordinates(x, y)
    }

    /// Validates affine coordinates and wraps them. The base curve has
    /// cofactor one, so an on-curve point is already in the prime-order
    /// group.
    fn from_coordinates(x: Fq, y: Fq) -> Result<Self, Error> {
        let point = G1Affine::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(Error::PointNotOnCurve);
        }
        Ok(G1(point.into()))
    }
}

impl Add for G1 {
    type Output = G1;

    fn add(self, other: G1) -> G1 {
        G1(self.0 + other.0)
    }
}

impl AddAssign for G1 {
    fn add_assign(&mut self, other: G1) {
        self.0 += other.0;
    }
}

impl Sub for G1 {
    type Output = G1;

    fn sub(self, other: G1) -> G1 {
        G1(self.0 - other.0)
    }
}

impl SubAssign for G1 {
    fn sub_assign(&mut self, other: G1) {
        self.0 -= other.0;
    }
}

impl Neg for G1 {
    type Output = G1;

    fn neg(self) -> G1 {
        G1(-self.0)
    }
}

impl UniformRand for G1 {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        G1(G1Projective::rand(rng))
    }
}
