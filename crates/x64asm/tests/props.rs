//! Property-based tests using proptest.
//!
//! These verify encoder invariants across randomly generated operand
//! combinations, complementing the targeted byte-exact tests.

use proptest::prelude::*;

use x64asm::mnemonics::{ADD, JMP, MOV, SUB, XOR};
use x64asm::reg::*;
use x64asm::{Assembler, Disp, Imm, Inst, Mem, Operand, Reg};

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_gpr64() -> impl Strategy<Value = Reg> {
    prop::sample::select(vec![
        RAX, RCX, RDX, RBX, RSP, RBP, RSI, RDI, R8, R9, R10, R11, R12, R13, R14, R15,
    ])
}

/// Index registers exclude RSP, which the sanitizer cannot always place.
fn arb_index64() -> impl Strategy<Value = Reg> {
    prop::sample::select(vec![
        RAX, RCX, RDX, RBX, RBP, RSI, RDI, R8, R9, R10, R11, R13, R14, R15,
    ])
}

fn arb_scale() -> impl Strategy<Value = u8> {
    prop::sample::select(vec![1u8, 2, 4, 8])
}

fn arb_mem() -> impl Strategy<Value = Mem> {
    (
        prop::option::of(arb_gpr64()),
        prop::option::of(arb_index64()),
        arb_scale(),
        prop::option::of(any::<i8>()),
    )
        .prop_map(|(base, index, scale, disp)| {
            let mut mem = Mem::default();
            if let Some(b) = base {
                mem = Mem::base(b);
            }
            if let Some(i) = index {
                mem = mem.index(i, scale);
            }
            if let Some(d) = disp {
                mem = mem.disp8(d);
            }
            mem
        })
}

fn arb_alu() -> impl Strategy<Value = Inst> {
    prop::sample::select(vec![ADD, SUB, XOR, MOV])
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    /// Encoding is deterministic: the same operands produce the same bytes.
    #[test]
    fn deterministic(inst in arb_alu(), dst in arb_gpr64(), src in arb_gpr64()) {
        let mut a = Assembler::with_capacity(32);
        a.rr(inst, dst, src).unwrap();
        let first = a.code().to_vec();
        a.reset(None);
        a.rr(inst, dst, src).unwrap();
        prop_assert_eq!(a.code(), &first[..]);
    }

    /// Any register-register ALU form fits the 15-byte instruction limit.
    #[test]
    fn reg_reg_length_bounds(inst in arb_alu(), dst in arb_gpr64(), src in arb_gpr64()) {
        let mut a = Assembler::with_capacity(32);
        a.rr(inst, dst, src).unwrap();
        prop_assert!(!a.code().is_empty() && a.code().len() <= 15);
    }

    /// Loads through arbitrary legal memory operands encode and stay within
    /// the instruction-length limit.
    #[test]
    fn mem_operands_encode(dst in arb_gpr64(), mem in arb_mem()) {
        let mut a = Assembler::with_capacity(32);
        a.rm(MOV, dst, mem).unwrap();
        prop_assert!(!a.code().is_empty() && a.code().len() <= 15);
    }

    /// Encoding a memory operand twice gives identical bytes: the
    /// sanitizer's canonicalization is stable.
    #[test]
    fn mem_encoding_is_stable(dst in arb_gpr64(), mem in arb_mem()) {
        let mut a = Assembler::with_capacity(32);
        a.rm(MOV, dst, mem).unwrap();
        let first = a.code().to_vec();
        a.reset(None);
        a.rm(MOV, dst, mem).unwrap();
        prop_assert_eq!(a.code(), &first[..]);
    }

    /// Immediates survive the widening pass: the encoded tail bytes decode
    /// back to the original value.
    #[test]
    fn imm32_roundtrip(value in any::<i32>()) {
        let mut a = Assembler::with_capacity(32);
        a.ri(MOV, EAX, Imm::I32(value)).unwrap();
        let code = a.code();
        let tail = i32::from_le_bytes(code[code.len() - 4..].try_into().unwrap());
        prop_assert_eq!(tail, value);
    }

    /// The finalized displacement always equals
    /// `target - (slot_offset + width) + extra`.
    #[test]
    fn finalize_formula(padding in 0u8..100, extra in -64i32..64) {
        let mut a = Assembler::with_capacity(1024);
        let label = a.new_label();
        a.nop(padding);
        a.inst(JMP, &[Disp::from(label).into()]).unwrap();
        let slot = a.pc() as i64 - 4;
        a.inst(MOV, &[RAX.into(), Mem::rip().disp(label.disp32(extra)).into()]).unwrap();
        let slot2 = a.pc() as i64 - 4;
        a.finalize().unwrap();

        let code = a.code();
        let patched = i32::from_le_bytes(code[slot as usize..slot as usize + 4].try_into().unwrap());
        prop_assert_eq!(i64::from(patched), 0 - (slot + 4));
        let patched2 = i32::from_le_bytes(code[slot2 as usize..slot2 as usize + 4].try_into().unwrap());
        prop_assert_eq!(i64::from(patched2), 0 - (slot2 + 4) + i64::from(extra));
    }

    /// NOP padding always emits exactly the requested number of bytes.
    #[test]
    fn nop_padding_exact(len in 1u8..64) {
        let mut a = Assembler::with_capacity(128);
        a.nop(len);
        prop_assert_eq!(a.code().len(), usize::from(len));
    }

    /// `align_pc` always lands on the requested boundary.
    #[test]
    fn align_pc_lands_on_boundary(pre in 0u8..48, pow in 1u32..6) {
        let pow2 = 1u8 << pow;
        let mut a = Assembler::with_capacity(256);
        a.nop(pre);
        a.align_pc(pow2);
        prop_assert_eq!(a.pc() % u32::from(pow2), 0);
    }
}

/// Encoding failures never leave the assembler unable to reset.
#[test]
fn reset_clears_any_error() {
    let mut a = Assembler::with_capacity(32);
    let bad: &[Operand] = &[Operand::Reg(RAX), Operand::Reg(AX)];
    assert!(a.inst(ADD, bad).is_err());
    a.reset(None);
    a.rr(ADD, RAX, RBX).unwrap();
    assert_eq!(a.code(), [0x48, 0x01, 0xD8]);
}
