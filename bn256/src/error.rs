use core::fmt;

/// An error arising while decoding, sampling, or decompressing group
/// elements.
///
/// Every failure is terminal for the call that produced it: nothing is
/// retried internally, and no partially validated element is ever
/// returned.
#[derive(Debug)]
pub enum Error {
    /// The input had the wrong byte length, or an unknown tag byte.
    MalformedInput,
    /// The coordinates do not satisfy the curve equation, or (during
    /// decompression) the x-coordinate admits no y of the requested
    /// parity.
    PointNotOnCurve,
    /// The point lies on the twist curve but outside the prime-order
    /// subgroup.
    NotInSubgroup,
    /// A coordinate was not reduced modulo the field modulus, or an
    /// identity encoding carried nonzero padding.
    NonCanonicalEncoding,
    /// The injected randomness source failed; the underlying error is
    /// propagated verbatim.
    EntropySource(ark_std::rand::Error),
    /// The search for a quadratic non-residue exceeded its safety cap.
    /// Residues and non-residues are equidistributed, so this is
    /// unreachable in practice.
    NonResidueSearchExhausted,
}

impl ark_std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::MalformedInput => write!(f, "input is of the wrong length or carries an unknown tag"),
            Error::PointNotOnCurve => write!(f, "coordinates do not name a point on the curve"),
            Error::NotInSubgroup => write!(f, "point is not in the prime-order subgroup"),
            Error::NonCanonicalEncoding => {
                write!(f, "encoding is not the canonical representative")
            }
            Error::EntropySource(e) => write!(f, "entropy source failure: {}", e),
            Error::NonResidueSearchExhausted => {
                write!(f, "could not find a quadratic non-residue")
            }
        }
    }
}
