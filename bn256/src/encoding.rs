//! Fixed-width big-endian field-element codecs shared by the group types.
//!
//! Every coordinate travels as a 32-byte zero-padded big-endian integer,
//! and quadratic-extension elements place the imaginary coefficient first,
//! matching the established alt_bn128 interchange format. The backend
//! serializes little-endian, so bytes are reversed at the boundary.

use ark_bn254::{Fq, Fq2};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::error::Error;

/// Width in bytes of one base-field coordinate on the wire.
pub(crate) const FQ_LEN: usize = 32;
/// Width in bytes of a big-endian scalar drawn by the sampling helpers.
pub(crate) const SCALAR_LEN: usize = 32;

/// Length of a canonical G1 encoding: `x ‖ y`.
pub const G1_LEN: usize = 2 * FQ_LEN;
/// Length of a canonical G2 encoding: two twist-field coordinates.
pub const G2_LEN: usize = 4 * FQ_LEN;
/// Length of a canonical Gt encoding: twelve base-field coefficients.
pub const GT_LEN: usize = 12 * FQ_LEN;
/// Length of a compressed G1 encoding: one tag byte, then `x`.
pub const G1_COMPRESSED_LEN: usize = 1 + FQ_LEN;

/// Compressed tag for the identity; the trailing bytes must be zero.
pub(crate) const TAG_IDENTITY: u8 = 0x00;
/// Compressed tag for a point whose suppressed y-coordinate is even.
pub(crate) const TAG_EVEN_Y: u8 = 0x02;
/// Compressed tag for a point whose suppressed y-coordinate is odd.
pub(crate) const TAG_ODD_Y: u8 = 0x03;

pub(crate) fn write_fq(out: &mut [u8], e: &Fq) {
    debug_assert_eq!(out.len(), FQ_LEN);
    let mut bytes = [0u8; FQ_LEN];
    e.serialize_uncompressed(&mut bytes[..])
        .expect("a field element always fits its fixed-width buffer");
    bytes.reverse();
    out.copy_from_slice(&bytes);
}

/// Reads a canonical coordinate. The backend rejects any value at or
/// above the modulus, which is exactly the non-canonical-encoding case.
pub(crate) fn read_fq(input: &[u8]) -> Result<Fq, Error> {
    debug_assert_eq!(input.len(), FQ_LEN);
    let mut bytes = [0u8; FQ_LEN];
    bytes.copy_from_slice(input);
    bytes.reverse();
    Fq::deserialize_uncompressed(&bytes[..]).map_err(|_| Error::NonCanonicalEncoding)
}

pub(crate) fn write_fq2(out: &mut [u8], e: &Fq2) {
    write_fq(&mut out[..FQ_LEN], &e.c1);
    write_fq(&mut out[FQ_LEN..], &e.c0);
}

pub(crate) fn read_fq2(input: &[u8]) -> Result<Fq2, Error> {
    let c1 = read_fq(&input[..FQ_LEN])?;
    let c0 = read_fq(&input[FQ_LEN..])?;
    Ok(Fq2::new(c0, c1))
}
