//! The target group Gt: an order-`r` subgroup of the multiplicative group
//! of the degree-12 extension field.
//!
//! Following the backend, the group is written additively: [`Gt`]
//! addition is multiplication in `Fq12`, and [`Gt::scalar_mult`] is
//! exponentiation. The additive identity is the field's one.

use ark_bn254::{Bn254, Fq12, Fq2, Fq6};
use ark_ec::pairing::PairingOutput;
use ark_ec::PrimeGroup;
use ark_ff::{PrimeField, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ark_std::rand::{CryptoRng, Rng, RngCore};
use num_bigint::BigUint;

use crate::encoding::{read_fq2, write_fq2, FQ_LEN, GT_LEN};
use crate::error::Error;

/// An element of the pairing's codomain.
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Gt(pub(crate) PairingOutput<Bn254>);

impl Gt {
    /// The canonical generator: the pairing of the G1 and G2 generators.
    pub fn generator() -> Self {
        Gt(PairingOutput::generator())
    }

    /// The identity element.
    pub fn identity() -> Self {
        Gt(PairingOutput::zero())
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    /// Draws a uniform scalar `k` in `[0, order)` from `rng` and returns
    /// it together with the generator multiplied by `k`. Fails only when
    /// the entropy source itself fails.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(BigUint, Self), Error> {
        let k = crate::random_scalar(rng)?;
        let element = Self::scalar_base_mult(&k);
        Ok((k, element))
    }

    /// Multiplies the generator by `k` (exponentiation in `Fq12`); any
    /// non-negative magnitude wraps at the group order.
    pub fn scalar_base_mult(k: &BigUint) -> Self {
        Self::generator().scalar_mult(k)
    }

    /// Multiplies this element by `k`, under the same scalar contract as
    /// [`Gt::scalar_base_mult`].
    pub fn scalar_mult(&self, k: &BigUint) -> Self {
        Gt(self.0.mul_bigint(k.to_u64_digits()))
    }

    /// Canonical encoding: the twelve base-field coefficients, highest
    /// tower coordinate first and imaginary part first within each pair,
    /// each 32 bytes big-endian.
    pub fn marshal(&self) -> [u8; GT_LEN] {
        let mut out = [0u8; GT_LEN];
        let f = &self.0 .0;
        let coefficients = [f.c1.c2, f.c1.c1, f.c1.c0, f.c0.c2, f.c0.c1, f.c0.c0];
        for (chunk, c) in out.chunks_exact_mut(2 * FQ_LEN).zip(coefficients) {
            write_fq2(chunk, &c);
        }
        out
    }

    /// Decodes an encoding produced by [`Gt::marshal`]. Coordinates must
    /// be fully reduced; no further structural validation is applied,
    /// matching the backend's canonical format.
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != GT_LEN {
            return Err(Error::MalformedInput);
        }
        let mut coefficients = [Fq2::zero(); 6];
        for (chunk, c) in bytes.chunks_exact(2 * FQ_LEN).zip(coefficients.iter_mut()) {
            *c = read_fq2(chunk)?;
        }
        let [a, b, c, d, e, f] = coefficients;
        let value = Fq12::new(Fq6::new(f, e, d), Fq6::new(c, b, a));
        Ok(Gt(PairingOutput(value)))
    }
}

impl Add for Gt {
    type Output = Gt;

    fn add(self, other: Gt) -> Gt {
        Gt(self.0 + other.0)
    }
}

impl AddAssign for Gt {
    fn add_assign(&mut self, other: Gt) {
        self.0 += other.0;
    }
}

impl Sub for Gt {
    type Output = Gt;

    fn sub(self, other: Gt) -> Gt {
        Gt(self.0 - other.0)
    }
}

impl SubAssign for Gt {
    fn sub_assign(&mut self, other: Gt) {
        self.0 -= other.0;
    }
}

impl Neg for Gt {
    type Output = Gt;

    fn neg(self) -> Gt {
        Gt(-self.0)
    }
}

impl UniformRand for Gt {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let k = ark_bn254::Fr::rand(rng);
        Gt(PairingOutput::generator().mul_bigint(k.into_bigint()))
    }
}
