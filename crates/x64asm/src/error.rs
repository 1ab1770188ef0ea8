//! Error types for instruction encoding and finalization.

use alloc::string::String;
use core::fmt;

use crate::assembler::Prefix;

/// Error produced while encoding an instruction or finalizing label
/// references.
///
/// Encoding errors are sticky on the [`Assembler`](crate::Assembler): the
/// first error is stored and every subsequent encoding call short-circuits
/// with it until [`reset`](crate::Assembler::reset) is called.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsmError {
    /// No encoding in the static table matches the mnemonic, operands, and
    /// enabled CPU features.
    NoMatch,

    /// More than one memory operand was supplied for a single instruction.
    MultipleMemory,

    /// The memory operand violates an x86-64 addressing constraint.
    BadAddressing {
        /// Description of the constraint that was violated.
        detail: String,
    },

    /// Operand widths conflict with each other or with the chosen encoding.
    BadSize {
        /// Description of the width conflict.
        detail: String,
    },

    /// Internal inconsistency between the encoding spec and the operands.
    BadFormat {
        /// Description of the inconsistency.
        detail: String,
    },

    /// A user-supplied LOCK/REP/REPE/REPNE prefix is not permitted by the
    /// chosen encoding.
    PrefixNotAllowed {
        /// The rejected prefix.
        prefix: Prefix,
        /// The instruction mnemonic the prefix was applied to.
        mnemonic: String,
    },

    /// A finalized relative displacement does not fit the declared width of
    /// its slot.
    DisplacementOutOfRange {
        /// Width of the displacement slot in bytes (1, 2, or 4).
        width: u8,
    },
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmError::NoMatch => {
                write!(
                    f,
                    "no encoding matches the operands under the enabled CPU features"
                )
            }
            AsmError::MultipleMemory => {
                write!(f, "multiple memory operands are not supported")
            }
            AsmError::BadAddressing { detail } => {
                write!(f, "unencodable memory operand: {}", detail)
            }
            AsmError::BadSize { detail } => {
                write!(f, "operand size mismatch: {}", detail)
            }
            AsmError::BadFormat { detail } => {
                write!(f, "inconsistent encoding data: {}", detail)
            }
            AsmError::PrefixNotAllowed { prefix, mnemonic } => {
                write!(f, "{} prefix is not allowed with {}", prefix, mnemonic)
            }
            AsmError::DisplacementOutOfRange { width } => {
                write!(
                    f,
                    "relative label offset exceeds range for {}-bit displacement",
                    u32::from(*width) * 8
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AsmError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn no_match_display() {
        assert_eq!(
            format!("{}", AsmError::NoMatch),
            "no encoding matches the operands under the enabled CPU features"
        );
    }

    #[test]
    fn bad_addressing_display() {
        let err = AsmError::BadAddressing {
            detail: "RSP cannot be used as index".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "unencodable memory operand: RSP cannot be used as index"
        );
    }

    #[test]
    fn prefix_not_allowed_display() {
        let err = AsmError::PrefixNotAllowed {
            prefix: Prefix::Lock,
            mnemonic: "MOV".to_string(),
        };
        assert_eq!(format!("{}", err), "LOCK prefix is not allowed with MOV");
    }

    #[test]
    fn displacement_out_of_range_display() {
        let err = AsmError::DisplacementOutOfRange { width: 1 };
        assert_eq!(
            format!("{}", err),
            "relative label offset exceeds range for 8-bit displacement"
        );
    }
}
