//! Bilinear groups over a 256-bit Barreto–Naehrig curve.
//!
//! The crate exposes three prime-order groups and the optimal Ate pairing
//! joining them: [`G1`] over the base curve `y² = x³ + 3`, [`G2`] over the
//! sextic twist, and [`Gt`] inside the degree-12 extension field. Field and
//! curve arithmetic, the Miller loop, and the final exponentiation are
//! provided by the arkworks backend (`ark-bn254`); this crate layers the
//! group API, canonical fixed-width serialization, and compressed G1 points
//! on top of it.
//!
//! # Serialization
//!
//! Elements marshal to fixed-width big-endian byte strings: 64 bytes for
//! G1 (`x ‖ y`), 128 bytes for G2, and 384 bytes for Gt. The G1 and G2
//! identities encode as all zeros; the Gt identity is the extension
//! field's one and marshals accordingly. These match the alt_bn128
//! interchange format, so encodings are exchangeable with other
//! implementations of the same curve.
//!
//! A G1 point additionally compresses to 33 bytes: one tag byte carrying
//! the parity of `y`, then `x`. Decompression recovers the suppressed
//! coordinate by solving `y² = x³ + 3` with Cipolla's square-root
//! algorithm.
//!
//! Scalar inputs are arbitrary-magnitude non-negative integers
//! ([`num_bigint::BigUint`]); values at or above the group [`order`] wrap
//! around, since every generator has that order.
//!
//! All operations are pure value transformations over immutable inputs and
//! are safe to call concurrently. None of them is constant-time; do not
//! feed secret scalars to this crate where timing channels matter.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![deny(unsafe_code)]

mod encoding;
mod error;
mod g1;
mod g2;
mod gt;
mod pairing;
mod sqrt;


pub use encoding::{G1_COMPRESSED_LEN, G1_LEN, G2_LEN, GT_LEN};
pub use error::Error;
pub use g1::G1;
pub use g2::G2;
pub use gt::Gt;
pub use pairing::pairing;

use ark_bn254::Fr;
use ark_ff::PrimeField;
use ark_std::rand::{CryptoRng, RngCore};
use num_bigint::BigUint;

/// The order of [`G1`], [`G2`], and [`Gt`], a 254-bit prime.
pub fn order() -> BigUint {
    Fr::MODULUS.into()
}

/// Draws a uniform scalar in `[0, order)` by rejection sampling. The top
/// byte is masked to the modulus bit length, so fewer than two draws are
/// needed on average. An entropy failure aborts the call; it is never
/// retried here.
pub(crate) fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<BigUint, Error> {
    let order = order();
    let excess = (encoding::SCALAR_LEN * 8) as u32 - Fr::MODULUS_BIT_SIZE;
    let mut buf = [0u8; encoding::SCALAR_LEN];
    loop {
        rng.try_fill_bytes(&mut buf).map_err(Error::EntropySource)?;
        buf[0] &= 0xff >> excess;
        let k = BigUint::from_bytes_be(&buf);
        if k < order {
            return Ok(k);
        }
    }
}
