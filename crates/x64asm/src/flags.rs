//! Encoding-spec flag bits.
//!
//! Each entry in the encoding table carries a `u32` of these flags. They
//! select the prefix scheme (legacy/VEX/XOP), automatic operand sizing,
//! mandatory prefixes, permitted user prefixes, and alternate operand-role
//! assignments.

/// Default encoding; no special handling.
pub const DEFAULT: u32 = 0;
/// The instruction requires a VEX prefix.
pub const VEX_OP: u32 = 1 << 1;
/// The instruction requires an XOP prefix.
pub const XOP_OP: u32 = 1 << 2;
/// The final opcode byte is emitted in the immediate position (3DNow! style).
pub const IMM_OP: u32 = 1 << 3;

// The four AUTO_* flags are mutually exclusive.

/// 16-bit -> operand-size prefix, 32-bit -> nothing, 64-bit -> REX.W/VEX.W.
pub const AUTO_SIZE: u32 = 1 << 4;
/// 16-bit -> operand-size prefix, 64-bit -> nothing (default size is 64-bit).
pub const AUTO_NO32: u32 = 1 << 5;
/// 16-bit -> illegal, 32-bit -> nothing, 64-bit -> REX.W/VEX.W.
pub const AUTO_REXW: u32 = 1 << 6;
/// 128-bit -> nothing, 256-bit -> VEX.L.
pub const AUTO_VEXL: u32 = 1 << 7;
/// Implies the operand-size prefix.
pub const WORD_SIZE: u32 = 1 << 8;
/// Implies REX.W/VEX.W/XOP.W.
pub const WITH_REXW: u32 = 1 << 9;
/// Implies VEX.L/XOP.L.
pub const WITH_VEXL: u32 = 1 << 10;
/// Operands with unknown sizes cannot be assumed to match.
pub const EXACT_SIZE: u32 = 1 << 11;

/// Mandatory 0x66 prefix (same byte as the operand-size prefix).
pub const PREF_66: u32 = 1 << 12;
/// Mandatory 0x67 prefix (same byte as the address-size prefix).
pub const PREF_67: u32 = 1 << 13;
/// Mandatory 0xF0 prefix (same byte as LOCK).
pub const PREF_F0: u32 = 1 << 14;
/// Mandatory 0xF2 prefix (same byte as REPNE).
pub const PREF_F2: u32 = 1 << 15;
/// Mandatory 0xF3 prefix (same byte as REP).
pub const PREF_F3: u32 = 1 << 16;

/// A user LOCK prefix is valid with this encoding.
pub const LOCK: u32 = 1 << 17;
/// A user REP prefix is valid with this encoding.
pub const REP: u32 = 1 << 18;
/// A user REPE/REPNE prefix is valid with this encoding.
pub const REPE: u32 = 1 << 19;

/// A register argument is merged into the last opcode byte.
pub const SHORT_ARG: u32 = 1 << 20;
/// Alternate operand-role assignment (memory-first forms).
pub const ENC_MR: u32 = 1 << 21;
/// Alternate operand-role assignment (vvvv-first forms).
pub const ENC_VM: u32 = 1 << 22;
/// Special MIB encoding: the SIB byte carries an immediate and two registers.
pub const ENC_MIB: u32 = 1 << 23;
/// Available in protected mode but not in long mode.
pub const X86_ONLY: u32 = 1 << 24;

#[inline]
pub(crate) fn has_flag(flags: u32, flag: u32) -> bool {
    flags & flag != 0
}
