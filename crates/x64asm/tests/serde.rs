//! Serde round-trip tests for the plain-data public types.

#![cfg(feature = "serde")]

use x64asm::reg::{AH, CR8, RAX, RBP, RCX, RIP, ST3, XMM0, YMM15};
use x64asm::{AsmError, Disp, Imm, Mem, Operand, Prefix, Reg, RegFamily};

/// Helper: serialize to JSON, deserialize back, assert equality.
fn round_trip<T>(val: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + core::fmt::Debug,
{
    let json = serde_json::to_string(val).expect("serialize");
    let back: T = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(val, &back, "round-trip mismatch for JSON: {json}");
}

#[test]
fn serde_registers() {
    for r in [RAX, AH, XMM0, YMM15, ST3, CR8, RIP] {
        round_trip(&r);
    }
}

#[test]
fn serde_reg_family() {
    for f in [
        RegFamily::Legacy,
        RegFamily::HighByte,
        RegFamily::Xmm,
        RegFamily::Segment,
    ] {
        round_trip(&f);
    }
}

#[test]
fn serde_immediates() {
    round_trip(&Imm::I8(-1));
    round_trip(&Imm::I16(0x1234));
    round_trip(&Imm::I32(-5));
    round_trip(&Imm::I64(i64::MAX));
}

#[test]
fn serde_displacements() {
    round_trip(&Disp::Rel8(-4));
    round_trip(&Disp::Rel32(0x1000));
    round_trip(&Disp::Label(3));
    round_trip(&Disp::Label8(7));
    round_trip(&Disp::LabelDisp {
        label: 2,
        disp: -16,
        width: 4,
    });
}

#[test]
fn serde_memory_operand() {
    let mem = Mem::base(RBP).index(RCX, 8).disp32(-16).size(8);
    round_trip(&mem);
    round_trip(&Mem::default());
}

#[test]
fn serde_operands() {
    round_trip(&Operand::Reg(RAX));
    round_trip(&Operand::Imm(Imm::I32(42)));
    round_trip(&Operand::Mem(Mem::base(RBP)));
    round_trip(&Operand::Disp(Disp::Label(0)));
}

#[test]
fn serde_prefix() {
    for p in [Prefix::Lock, Prefix::Rep, Prefix::Repe, Prefix::Repne] {
        round_trip(&p);
    }
}

#[test]
fn serde_errors() {
    round_trip(&AsmError::NoMatch);
    round_trip(&AsmError::MultipleMemory);
    round_trip(&AsmError::BadAddressing {
        detail: "RSP cannot be used as index".into(),
    });
    round_trip(&AsmError::PrefixNotAllowed {
        prefix: Prefix::Lock,
        mnemonic: "MOV".into(),
    });
    round_trip(&AsmError::DisplacementOutOfRange { width: 1 });
}

#[test]
fn serde_reg_preserves_packed_fields() {
    let json = serde_json::to_string(&RAX).unwrap();
    let back: Reg = serde_json::from_str(&json).unwrap();
    assert_eq!(back.family(), RegFamily::Legacy);
    assert_eq!(back.num(), 0);
    assert_eq!(back.width(), 8);
}
