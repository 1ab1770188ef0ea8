//! # x64asm — Pure Rust x86-64 Instruction Encoder
//!
//! `x64asm` encodes x86-64 machine instructions into a byte buffer from a
//! symbolic mnemonic and typed operands — registers, memory references,
//! immediates, relative displacements, and label references.
//!
//! ## Quick Start
//!
//! ```rust
//! use x64asm::mnemonics::{ADD, MOV, RET};
//! use x64asm::reg::{RAX, RBX};
//! use x64asm::{Assembler, Imm, Mem};
//!
//! let mut asm = Assembler::with_capacity(256);
//! asm.rm(MOV, RAX, Mem::base(RBX).disp8(8))?;
//! asm.ri(ADD, RAX, Imm::I8(1))?;
//! asm.inst(RET, &[])?;
//! asm.finalize()?;
//! assert_eq!(asm.code()[..4], [0x48, 0x8B, 0x43, 0x08]);
//! # Ok::<(), x64asm::AsmError>(())
//! ```
//!
//! ## Features
//!
//! - **Pure Rust** — no C/C++ FFI, no system assembler at runtime.
//! - **Table-driven** — 1,300+ mnemonics and 2,200+ encodings, matched
//!   against the operands and the enabled CPU feature mask.
//! - **Labels & relocations** — forward references are patched by a final
//!   [`finalize`](Assembler::finalize) pass.
//! - **`no_std` + `alloc`** — embeddable in JIT runtimes and kernels.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Pedantic lint policy ─────────────────────────────────────────────────
// An instruction encoder intentionally performs many narrowing /
// sign-changing casts between integer widths and uses dense hex literals
// without separators (0x0F38, 0xFFD0).  The lints below are expected and
// acceptable in this context.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::unreadable_literal,
    clippy::match_same_arms,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::uninlined_format_args,
    clippy::doc_markdown,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::missing_errors_doc
)]

extern crate alloc;

/// Assembler façade: buffer, labels, relocations, sticky error.
pub mod assembler;
/// Growable byte sink with little-endian writes and NOP padding.
pub mod buffer;
/// Condition codes and the Jcc/SETcc/CMOVcc mnemonic families.
pub mod cond;
pub(crate) mod emit;
/// Error types.
pub mod error;
pub(crate) mod extract;
/// CPU feature bits for instruction matching.
pub mod feats;
/// Encoding-spec flag bits.
pub mod flags;
/// Instruction mnemonics and encoding-spec records.
pub mod inst;
/// Mnemonic lookup by name.
pub mod lookup;
/// Encoding search and the standalone [`InstMatcher`].
pub mod matcher;
/// Operand model: registers, memory, immediates, displacements, labels.
pub mod operand;
/// Register families, the packed register type, and register constants.
pub mod reg;
pub(crate) mod resize;
pub(crate) mod sanitize;
mod table;

/// Instruction-mnemonic constants (`MOV`, `ADD`, `VSHUFPD`, ...).
pub use table::mnemonics;

// Re-exports
pub use assembler::{Assembler, Prefix};
pub use buffer::CodeBuffer;
pub use cond::ConditionCode;
pub use error::AsmError;
pub use feats::Feature;
pub use inst::Inst;
pub use lookup::lookup_inst;
pub use matcher::InstMatcher;
pub use operand::{Disp, Imm, Label, Mem, Operand};
pub use reg::{Reg, RegFamily};
