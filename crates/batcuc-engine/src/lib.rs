//! Numerology analysis engine. Pure and synchronous: each entry point maps
//! a digit string to its reading without I/O or global state.
//!
//! The pipeline for a phone number runs normalization, pair segmentation,
//! star mapping, combination scanning, energy scoring and context weighting.
//! Identity-number tails use a shorter pipeline over the last six digits.

pub mod analyzer;
pub mod combinations;
pub mod compat;
pub mod context;
pub mod mapper;
pub mod normalize;
pub mod scoring;
pub mod segment;

pub use analyzer::{analyze_phone, analyze_six_digit, PhoneAnalysis, SixDigitAnalysis};
pub use compat::{analyze_compatibility, Compatibility, Purpose};
pub use context::{UserContext, WeightedAnalysis};
