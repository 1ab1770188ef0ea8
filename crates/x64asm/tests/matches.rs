//! Standalone matcher tests: first-match, enumeration, and accessors.

use x64asm::feats::{ALL_FEATURES, AVX, SSE2};
use x64asm::mnemonics::{ADD, JMP, MOV, MOVDQA, PUSH, VSHUFPD};
use x64asm::reg::{AL, RAX, RBX, XMM0, XMM1, XMM3};
use x64asm::{AsmError, Assembler, Imm, InstMatcher, Mem};

#[test]
fn all_matches_counts() {
    let mut m = InstMatcher::new();

    let found = m.all_matches(ADD, &[RAX.into(), RBX.into()]).unwrap();
    assert_eq!(found.len(), 2); // r*r*, r*v*

    let found = m.all_matches(ADD, &[RAX.into(), Imm::I32(1).into()]).unwrap();
    assert_eq!(found.len(), 2); // A*i*, r*i*

    let found = m.all_matches(ADD, &[AL.into(), Imm::I8(1).into()]).unwrap();
    assert_eq!(found.len(), 2); // Abib, rbib

    let found = m
        .all_matches(ADD, &[RAX.into(), Mem::base(RBX).into()])
        .unwrap();
    assert_eq!(found.len(), 1); // r*v*
}

#[test]
fn all_matches_propagates_operand_errors() {
    let mut m = InstMatcher::new();
    let err = m
        .all_matches(MOV, &[Mem::base(RAX).into(), Mem::base(RBX).into()])
        .unwrap_err();
    assert_eq!(err, AsmError::MultipleMemory);
}

#[test]
fn all_matches_indices_are_increasing_and_resumable() {
    let mut m = InstMatcher::new();
    let found = m.all_matches(PUSH, &[RAX.into()]).unwrap();
    let indices: Vec<usize> = found.iter().map(|f| f.encoding_index().unwrap()).collect();
    for w in indices.windows(2) {
        assert!(w[0] < w[1]);
    }
}

#[test]
fn match_exposes_encoding_details() {
    let mut m = InstMatcher::new();
    m.match_inst(MOV, &[RAX.into(), Imm::I64(1).into()]).unwrap();
    assert_eq!(m.opcode(), &[0xB8]);
    assert!(m.has_opcode_reg_arg());
    assert_eq!(m.operand_size(), Some(8));
    assert_eq!(m.addr_size(), Some(8));
    assert!(!m.is_vex());
    assert!(!m.is_xop());
    assert!(!m.has_opcode_in_immediate());
}

#[test]
fn match_reports_required_features() {
    let mut m = InstMatcher::new();
    m.match_inst(
        MOVDQA,
        &[XMM0.into(), Mem::base(RBX).size(16).into()],
    )
    .unwrap();
    assert_eq!(m.inst_features(), SSE2);

    let ops = [
        XMM0.into(),
        XMM1.into(),
        XMM3.into(),
        Imm::I8(1).into(),
    ];
    m.match_inst(VSHUFPD, &ops).unwrap();
    assert!(m.is_vex());
    assert_eq!(m.inst_features(), AVX);
}

#[test]
fn disabled_features_hide_encodings() {
    let mut m = InstMatcher::new();
    let ops = [
        XMM0.into(),
        XMM1.into(),
        XMM3.into(),
        Imm::I8(1).into(),
    ];
    m.set_features(ALL_FEATURES & !AVX);
    assert_eq!(m.match_inst(VSHUFPD, &ops), Err(AsmError::NoMatch));
    m.enable_feature(AVX);
    m.match_inst(VSHUFPD, &ops).unwrap();
    m.disable_feature(AVX);
    assert_eq!(m.match_inst(VSHUFPD, &ops), Err(AsmError::NoMatch));
}

#[test]
fn matched_state_encodes_without_rematching() {
    let mut m = InstMatcher::new();
    m.match_inst(ADD, &[RAX.into(), RBX.into()]).unwrap();

    let mut asm = Assembler::with_capacity(64);
    asm.inst_from(&m).unwrap();
    assert_eq!(asm.code(), [0x48, 0x01, 0xD8]);

    // The matcher state is reusable.
    asm.reset(None);
    asm.inst_from(&m).unwrap();
    assert_eq!(asm.code(), [0x48, 0x01, 0xD8]);

    // And refreshable.
    m.match_inst(ADD, &[RBX.into(), RAX.into()]).unwrap();
    asm.reset(None);
    asm.inst_from(&m).unwrap();
    assert_eq!(asm.code(), [0x48, 0x01, 0xC3]);
}

#[test]
fn unmatched_matcher_cannot_be_encoded() {
    let m = InstMatcher::new();
    let mut asm = Assembler::with_capacity(16);
    assert!(matches!(
        asm.inst_from(&m),
        Err(AsmError::BadFormat { .. })
    ));
}

#[test]
fn offset_slots_distinguish_widths() {
    let mut m = InstMatcher::new();
    let found = m
        .all_matches(JMP, &[x64asm::Disp::Rel8(4).into()])
        .unwrap();
    // The rel8 form, the rel32 form (widened), and nothing else.
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].opcode(), &[0xEB]);
    assert_eq!(found[1].opcode(), &[0xE9]);
}
