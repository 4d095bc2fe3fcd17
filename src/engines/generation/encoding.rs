use super::genome::{Chromosome, EncodedVector};
use crate::types::RawFeatureVector;

/// One-hot encode a feature vector: each flag becomes `(1, 0)` when set and
/// `(0, 1)` when clear, and the label is appended unchanged.
pub fn encode(raw: &RawFeatureVector) -> EncodedVector {
    let mut bits = Vec::with_capacity(2 * raw.flags.len() + 1);
    for &flag in &raw.flags {
        bits.push(flag);
        bits.push(!flag);
    }
    bits.push(raw.label);
    Chromosome::new(bits)
}

pub fn encode_all(raw: &[RawFeatureVector]) -> Vec<EncodedVector> {
    raw.iter().map(encode).collect()
}

/// Inverse of [`encode`]; `None` if any pair is not one-hot
pub fn decode(encoded: &EncodedVector) -> Option<RawFeatureVector> {
    if encoded.is_empty() || encoded.len() % 2 == 0 {
        return None;
    }
    let flags = encoded
        .segments()
        .map(|(first, second)| (first != second).then_some(first))
        .collect::<Option<Vec<_>>>()?;
    Some(RawFeatureVector::new(flags, encoded.label()))
}
