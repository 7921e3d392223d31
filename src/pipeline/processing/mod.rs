// Pipeline processing: address normalization and per-row transformation

pub mod normalize;
pub mod transform;
