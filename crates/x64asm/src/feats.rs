//! CPU feature bits used for instruction matching.
//!
//! Every encoding spec records the features it requires; the matcher skips
//! encodings whose required features are not all enabled in the active mask.

/// A bitmask of CPU features.
pub type Feature = u32;

/// Base x86-64 instruction set; required features of encodings that work on
/// every 64-bit CPU.
pub const X64_IMPLICIT: Feature = 0;
pub const FPU: Feature = 1 << 1;
pub const MMX: Feature = 1 << 2;
pub const TDNOW: Feature = 1 << 3;
pub const SSE: Feature = 1 << 4;
pub const SSE2: Feature = 1 << 5;
pub const SSE3: Feature = 1 << 6;
pub const VMX: Feature = 1 << 7;
pub const SSSE3: Feature = 1 << 8;
pub const SSE4A: Feature = 1 << 9;
pub const SSE41: Feature = 1 << 10;
pub const SSE42: Feature = 1 << 11;
pub const SSE5: Feature = 1 << 12;
pub const AVX: Feature = 1 << 13;
pub const AVX2: Feature = 1 << 14;
pub const FMA: Feature = 1 << 15;
pub const BMI1: Feature = 1 << 16;
pub const BMI2: Feature = 1 << 17;
pub const TBM: Feature = 1 << 18;
pub const RTM: Feature = 1 << 19;
pub const INVPCID: Feature = 1 << 20;
pub const MPX: Feature = 1 << 21;
pub const SHA: Feature = 1 << 22;
pub const PREFETCHWT1: Feature = 1 << 23;
pub const CYRIX: Feature = 1 << 24;
pub const AMD: Feature = 1 << 25;

/// Every feature enabled; the default mask for new assemblers and matchers.
pub const ALL_FEATURES: Feature = 0xffff_ffff;
