//! Label and relocation tests.
//!
//! Hard-coded byte sequences are verified against independent assemblers;
//! the finalize pass must patch each displacement slot with
//! `target_pc - (slot_offset + width) + extra_disp`.

use x64asm::mnemonics::{ADD, JMP, LEA, MOV};
use x64asm::reg::{RAX, RBX};
use x64asm::{AsmError, Assembler, Imm, Mem};

fn asm() -> Assembler {
    Assembler::with_capacity(256)
}

#[test]
fn rel8_backward_references() {
    let mut a = asm();
    let label = a.new_label();
    a.rr(MOV, RAX, RBX).unwrap();
    a.ri(ADD, RAX, Imm::I8(5)).unwrap();
    let label2 = a.new_label();
    a.ri(ADD, RBX, Imm::I8(1)).unwrap();
    a.inst(JMP, &[label.rel8().into()]).unwrap();
    let label3 = a.new_label();
    a.ri(ADD, RBX, Imm::I8(1)).unwrap();
    a.inst(JMP, &[label2.rel8().into()]).unwrap();
    a.inst(JMP, &[label3.rel8().into()]).unwrap();
    a.finalize().unwrap();
    assert_eq!(
        a.code(),
        [
            0x48, 0x89, 0xD8, 0x48, 0x83, 0xC0, 0x05, 0x48, 0x83, 0xC3, 0x01, 0xEB, 0xF3, 0x48,
            0x83, 0xC3, 0x01, 0xEB, 0xF4, 0xEB, 0xF8
        ]
    );
}

#[test]
fn rel32_reference() {
    let mut a = asm();
    let label = a.new_label();
    a.rr(MOV, RAX, RBX).unwrap();
    a.ri(ADD, RAX, Imm::I8(5)).unwrap();
    let _ = a.new_label();
    a.ri(ADD, RBX, Imm::I8(1)).unwrap();
    a.inst(JMP, &[label.rel32().into()]).unwrap();
    a.finalize().unwrap();
    assert_eq!(
        a.code(),
        [
            0x48, 0x89, 0xD8, 0x48, 0x83, 0xC0, 0x05, 0x48, 0x83, 0xC3, 0x01, 0xE9, 0xF0, 0xFF,
            0xFF, 0xFF
        ]
    );
}

#[test]
fn bare_label_defaults_to_rel32() {
    let mut a = asm();
    let label = a.new_label();
    a.rr(MOV, RAX, RBX).unwrap();
    a.ri(ADD, RAX, Imm::I8(5)).unwrap();
    let _ = a.new_label();
    a.ri(ADD, RBX, Imm::I8(1)).unwrap();
    a.inst(JMP, &[label.into()]).unwrap();
    a.finalize().unwrap();
    assert_eq!(
        a.code(),
        [
            0x48, 0x89, 0xD8, 0x48, 0x83, 0xC0, 0x05, 0x48, 0x83, 0xC3, 0x01, 0xE9, 0xF0, 0xFF,
            0xFF, 0xFF
        ]
    );
}

#[test]
fn label_with_extra_disp8() {
    let mut a = asm();
    let label = a.new_label();
    a.rr(MOV, RAX, RBX).unwrap();
    a.ri(ADD, RAX, Imm::I8(5)).unwrap();
    let middle = a.pc();
    a.ri(ADD, RBX, Imm::I8(1)).unwrap();
    // Jump into the middle of the block.
    a.inst(JMP, &[label.disp8(middle as i8).into()]).unwrap();
    a.finalize().unwrap();
    assert_eq!(
        a.code(),
        [0x48, 0x89, 0xD8, 0x48, 0x83, 0xC0, 0x05, 0x48, 0x83, 0xC3, 0x01, 0xEB, 0xFA]
    );
}

#[test]
fn label_with_extra_disp32() {
    let mut a = asm();
    let label = a.new_label();
    a.rr(MOV, RAX, RBX).unwrap();
    a.ri(ADD, RAX, Imm::I8(5)).unwrap();
    let middle = a.pc();
    a.ri(ADD, RBX, Imm::I8(1)).unwrap();
    a.inst(JMP, &[label.disp32(middle as i32).into()]).unwrap();
    a.finalize().unwrap();
    assert_eq!(
        a.code(),
        [
            0x48, 0x89, 0xD8, 0x48, 0x83, 0xC0, 0x05, 0x48, 0x83, 0xC3, 0x01, 0xE9, 0xF7, 0xFF,
            0xFF, 0xFF
        ]
    );
}

#[test]
fn rip_relative_label_reference() {
    let mut a = asm();
    let label = a.new_label();
    a.rr(MOV, RAX, RBX).unwrap();
    let middle = a.pc();
    a.rr(MOV, RBX, RAX).unwrap();
    a.inst(
        LEA,
        &[
            RAX.into(),
            Mem::rip().disp(label.disp32(middle as i32)).into(),
        ],
    )
    .unwrap();
    a.finalize().unwrap();
    assert_eq!(
        a.code(),
        [0x48, 0x89, 0xD8, 0x48, 0x89, 0xC3, 0x48, 0x8D, 0x05, 0xF6, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn memory_disp_label_reference() {
    let mut a = asm();
    let label = a.new_label();
    a.rr(MOV, RAX, RBX).unwrap();
    // [rbx + label] with a 32-bit slot.
    a.inst(MOV, &[RAX.into(), Mem::base(RBX).disp(label.rel32()).into()])
        .unwrap();
    a.finalize().unwrap();
    // Slot starts at offset 6; the patched value is 0 - (6 + 4) = -10.
    assert_eq!(
        a.code(),
        [0x48, 0x89, 0xD8, 0x48, 0x8B, 0x83, 0xF6, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn forward_reference_is_patched() {
    let mut a = asm();
    let target = a.new_label();
    a.inst(JMP, &[target.rel32().into()]).unwrap();
    a.rr(MOV, RAX, RBX).unwrap();
    a.set_label(target);
    a.rr(MOV, RBX, RAX).unwrap();
    a.finalize().unwrap();
    // jmp(5) + mov(3) = 8; the jump lands past the first mov.
    assert_eq!(
        a.code(),
        [0xE9, 0x03, 0x00, 0x00, 0x00, 0x48, 0x89, 0xD8, 0x48, 0x89, 0xC3]
    );
}

#[test]
fn patched_slot_matches_the_delta_formula() {
    let mut a = asm();
    let label = a.new_label();
    for _ in 0..3 {
        a.rr(MOV, RAX, RBX).unwrap();
    }
    a.inst(JMP, &[label.rel32().into()]).unwrap();
    a.finalize().unwrap();

    let code = a.code();
    let slot_offset = code.len() - 4;
    let patched = i32::from_le_bytes(code[slot_offset..].try_into().unwrap());
    let expected = a.get_label_pc(label) as i64 - (slot_offset as i64 + 4);
    assert_eq!(i64::from(patched), expected);
}

#[test]
fn out_of_range_rel8_fails_finalize() {
    let mut a = asm();
    let label = a.new_label();
    for _ in 0..64 {
        a.rr(MOV, RAX, RBX).unwrap();
    }
    a.inst(JMP, &[label.rel8().into()]).unwrap();
    assert_eq!(
        a.finalize(),
        Err(AsmError::DisplacementOutOfRange { width: 1 })
    );
    // The error is sticky.
    assert_eq!(a.rr(MOV, RAX, RBX), Err(AsmError::DisplacementOutOfRange { width: 1 }));
}

#[test]
fn finalize_after_retargeting_labels() {
    let mut a = asm();
    let label = a.new_label();
    a.inst(JMP, &[label.rel32().into()]).unwrap();
    a.rr(MOV, RAX, RBX).unwrap();
    a.finalize().unwrap();
    assert_eq!(&a.code()[1..5], [0xFB, 0xFF, 0xFF, 0xFF]);

    a.set_label_pc(label, 8);
    a.finalize().unwrap();
    assert_eq!(&a.code()[1..5], [0x03, 0x00, 0x00, 0x00]);
}

#[test]
fn labels_are_assigned_monotonic_ids() {
    let mut a = asm();
    let l0 = a.new_label();
    a.rr(MOV, RAX, RBX).unwrap();
    let l1 = a.new_label();
    assert_eq!(l0.id(), 0);
    assert_eq!(l1.id(), 1);
    assert_eq!(a.get_label_pc(l0), 0);
    assert_eq!(a.get_label_pc(l1), 3);
}
