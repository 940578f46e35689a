//! The group G2: the order-`r` subgroup of the sextic twist over `Fq2`.

use ark_bn254::{Fq2, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_ff::{UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ark_std::rand::{CryptoRng, Rng, RngCore};
use num_bigint::BigUint;

use crate::encoding::{read_fq2, write_fq2, FQ_LEN, G2_LEN};
use crate::error::Error;

/// A point in G2. Unlike the base curve, the twist has a large cofactor,
/// so deserialization checks subgroup membership as well as the curve
/// equation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct G2(pub(crate) G2Projective);

impl G2 {
    /// The canonical generator of the prime-order subgroup.
    pub fn generator() -> Self {
        G2(G2Projective::generator())
    }

    /// The identity element (the point at infinity).
    pub fn identity() -> Self {
        G2(G2Projective::zero())
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    /// Draws a uniform scalar `k` in `[0, order)` from `rng` and returns
    /// it together with `k·H`. Fails only when the entropy source itself
    /// fails.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(BigUint, Self), Error> {
        let k = crate::random_scalar(rng)?;
        let point = Self::scalar_base_mult(&k);
        Ok((k, point))
    }

    /// Multiplies the generator by `k`; any non-negative magnitude wraps
    /// at the group order.
    pub fn scalar_base_mult(k: &BigUint) -> Self {
        Self::generator().scalar_mult(k)
    }

    /// Multiplies this point by `k`, under the same scalar contract as
    /// [`G2::scalar_base_mult`].
    pub fn scalar_mult(&self, k: &BigUint) -> Self {
        G2(self.0.mul_bigint(k.to_u64_digits()))
    }

    /// Canonical encoding: `x ‖ y` with each `Fq2` coordinate written
    /// imaginary coefficient first; the identity is all zeros.
    pub fn marshal(&self) -> [u8; G2_LEN] {
        let mut out = [0u8; G2_LEN];
        let affine = self.0.into_affine();
        let Some((x, y)) = affine.xy() else {
            return out;
        };
        write_fq2(&mut out[..2 * FQ_LEN], &x);
        write_fq2(&mut out[2 * FQ_LEN..], &y);
        out
    }

    /// Decodes an encoding produced by [`G2::marshal`], rejecting points
    /// off the twist or outside the prime-order subgroup.
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G2_LEN {
            return Err(Error::MalformedInput);
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let x = read_fq2(&bytes[..2 * FQ_LEN])?;
        let y = read_fq2(&bytes[2 * FQ_LEN..])?;
        Self::from_coordinates(x, y)
    }

    fn from_coordinates(x: Fq2, y: Fq2) -> Result<Self, Error> {
        let point = G2Affine::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(Error::PointNotOnCurve);
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(Error::NotInSubgroup);
        }
        Ok(G2(point.into()))
    }
}

impl Add for G2 {
    type Output = G2;

    fn add(self, other: G2) -> G2 {
        G2(self.0 + other.0)
    }
}

impl AddAssign for G2 {
    fn add_assign(&mut self, other: G2) {
        self.0 += other.0;
    }
}

impl Sub for G2 {
    type Output = G2;

    fn sub(self, other: G2) -> G2 {
        G2(self.0 - other.0)
    }
}

impl SubAssign for G2 {
    fn sub_assign(&mut self, other: G2) {
        self.0 -= other.0;
    }
}

impl Neg for G2 {
    type Output = G2;

    fn neg(self) -> G2 {
        G2(-self.0)
    }
}

impl UniformRand for G2 {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        G2(G2Projective::rand(rng))
    }
}
