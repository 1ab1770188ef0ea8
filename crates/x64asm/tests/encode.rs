//! Cross-validation tests: encode with x64asm, decode with iced-x86.
//!
//! Every encoding is checked byte-for-byte and then decoded with iced-x86 to
//! confirm the bytes form exactly one well-formed instruction with the
//! expected mnemonic. This provides gold-standard validation against an
//! independent, battle-tested x86-64 decoder.

use iced_x86::{Decoder, DecoderOptions, Formatter, IntelFormatter, Mnemonic as Iced};

use x64asm::mnemonics::*;
use x64asm::reg::*;
use x64asm::{Assembler, Disp, Imm, Inst, Mem, Operand};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn encode(inst: Inst, operands: &[Operand]) -> Vec<u8> {
    let mut asm = Assembler::with_capacity(64);
    asm.inst(inst, operands)
        .unwrap_or_else(|e| panic!("failed to encode {}: {}", inst.name(), e));
    asm.code().to_vec()
}

/// Decode one instruction with iced-x86, asserting every emitted byte is
/// consumed.
fn decode_one(bytes: &[u8]) -> (Iced, String) {
    let mut decoder = Decoder::with_ip(64, bytes, 0, DecoderOptions::NONE);
    let instr = decoder.decode();
    assert_ne!(
        instr.mnemonic(),
        Iced::INVALID,
        "iced-x86 decoded INVALID for {:02X?}",
        bytes
    );
    assert_eq!(
        instr.len(),
        bytes.len(),
        "iced-x86 consumed {} of {} bytes for {:02X?}",
        instr.len(),
        bytes.len(),
        bytes
    );
    let mut formatter = IntelFormatter::new();
    let mut output = String::new();
    formatter.format(&instr, &mut output);
    (instr.mnemonic(), output)
}

/// Encode, compare the exact bytes, then decode and compare the mnemonic.
fn check(inst: Inst, operands: &[Operand], expect: &[u8], mnemonic: Iced) {
    let bytes = encode(inst, operands);
    assert_eq!(
        bytes,
        expect,
        "byte mismatch for {} {:02X?}",
        inst.name(),
        bytes
    );
    let (decoded, formatted) = decode_one(&bytes);
    assert_eq!(
        decoded, mnemonic,
        "{} decoded as `{}`",
        inst.name(),
        formatted
    );
}

// ─── Data movement ────────────────────────────────────────────────────────────

#[test]
fn xv_mov_reg_imm() {
    check(MOV, &[AL.into(), Imm::I8(1).into()], &[0xB0, 0x01], Iced::Mov);
    check(MOV, &[AH.into(), Imm::I8(1).into()], &[0xB4, 0x01], Iced::Mov);
    check(
        MOV,
        &[AX.into(), Imm::I16(1).into()],
        &[0x66, 0xC7, 0xC0, 0x01, 0x00],
        Iced::Mov,
    );
    check(
        MOV,
        &[EAX.into(), Imm::I32(0x7fff_ffff).into()],
        &[0xC7, 0xC0, 0xFF, 0xFF, 0xFF, 0x7F],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Imm::I64(0x7fff_ffff_ffff_ffff).into()],
        &[0x48, 0xB8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F],
        Iced::Mov,
    );
}

#[test]
fn xv_mov_reg_reg() {
    check(MOV, &[RAX.into(), R13.into()], &[0x4C, 0x89, 0xE8], Iced::Mov);
    check(MOV, &[RAX.into(), RBX.into()], &[0x48, 0x89, 0xD8], Iced::Mov);
}

#[test]
fn xv_mov_memory() {
    check(
        MOV,
        &[RAX.into(), Mem::base(RBX).into()],
        &[0x48, 0x8B, 0x03],
        Iced::Mov,
    );
    check(
        MOV,
        &[Mem::base(RAX).into(), RBX.into()],
        &[0x48, 0x89, 0x18],
        Iced::Mov,
    );
    check(
        MOV,
        &[Mem::base(R13).into(), RBX.into()],
        &[0x49, 0x89, 0x5D, 0x00],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Mem::base(RBX).index(R15, 1).into()],
        &[0x4A, 0x8B, 0x04, 0x3B],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Mem::base(RBX).index(R15, 2).disp8(8).into()],
        &[0x4A, 0x8B, 0x44, 0x7B, 0x08],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Mem::base(RBX).index(RCX, 2).disp32(8).into()],
        &[0x48, 0x8B, 0x84, 0x4B, 0x08, 0x00, 0x00, 0x00],
        Iced::Mov,
    );
}

#[test]
fn xv_mov_32bit_addressing() {
    // A 32-bit base takes the 0x67 address-size prefix.
    check(
        MOV,
        &[RAX.into(), Mem::base(EBX).into()],
        &[0x67, 0x48, 0x8B, 0x03],
        Iced::Mov,
    );
}

#[test]
fn xv_movzx_movsx() {
    check(
        MOVZX,
        &[RAX.into(), Mem::base(RBX).size(1).into()],
        &[0x48, 0x0F, 0xB6, 0x03],
        Iced::Movzx,
    );
    check(
        MOVZX,
        &[RAX.into(), Mem::base(RBX).size(2).into()],
        &[0x48, 0x0F, 0xB7, 0x03],
        Iced::Movzx,
    );
    check(
        MOVSX,
        &[RAX.into(), Mem::base(RBX).size(1).into()],
        &[0x48, 0x0F, 0xBE, 0x03],
        Iced::Movsx,
    );
    check(
        MOVSXD,
        &[RAX.into(), Mem::base(RBX).size(4).into()],
        &[0x48, 0x63, 0x03],
        Iced::Movsxd,
    );
}

#[test]
fn xv_lea() {
    check(
        LEA,
        &[RAX.into(), Mem::base(RBX).index(R15, 2).disp8(8).into()],
        &[0x4A, 0x8D, 0x44, 0x7B, 0x08],
        Iced::Lea,
    );
    check(
        LEA,
        &[RAX.into(), Mem::rip().disp8(16).into()],
        &[0x48, 0x8D, 0x05, 0x10, 0x00, 0x00, 0x00],
        Iced::Lea,
    );
}

#[test]
fn xv_push_pop() {
    check(PUSH, &[RAX.into()], &[0x50], Iced::Push);
    check(PUSH, &[R9.into()], &[0x41, 0x51], Iced::Push);
    check(POP, &[RAX.into()], &[0x58], Iced::Pop);
    check(POP, &[R9.into()], &[0x41, 0x59], Iced::Pop);
    check(PUSH, &[Imm::I8(1).into()], &[0x6A, 0x01], Iced::Push);
}

// ─── ALU ──────────────────────────────────────────────────────────────────────

#[test]
fn xv_alu_reg_reg() {
    check(ADD, &[RAX.into(), RBX.into()], &[0x48, 0x01, 0xD8], Iced::Add);
    check(SUB, &[RAX.into(), RBX.into()], &[0x48, 0x29, 0xD8], Iced::Sub);
    check(AND, &[RAX.into(), RBX.into()], &[0x48, 0x21, 0xD8], Iced::And);
    check(OR, &[RAX.into(), RBX.into()], &[0x48, 0x09, 0xD8], Iced::Or);
    check(XOR, &[RAX.into(), RBX.into()], &[0x48, 0x31, 0xD8], Iced::Xor);
    check(CMP, &[RAX.into(), RBX.into()], &[0x48, 0x39, 0xD8], Iced::Cmp);
    check(ADC, &[RAX.into(), RBX.into()], &[0x48, 0x11, 0xD8], Iced::Adc);
    check(SBB, &[RAX.into(), RBX.into()], &[0x48, 0x19, 0xD8], Iced::Sbb);
}

#[test]
fn xv_alu_imm() {
    check(
        ADD,
        &[RAX.into(), Imm::I8(1).into()],
        &[0x48, 0x83, 0xC0, 0x01],
        Iced::Add,
    );
    check(
        ADD,
        &[RAX.into(), Imm::I32(0x1000).into()],
        &[0x48, 0x05, 0x00, 0x10, 0x00, 0x00],
        Iced::Add,
    );
    check(
        ADD,
        &[Mem::base(RAX).into(), Imm::I8(1).into()],
        &[0x48, 0x83, 0x00, 0x01],
        Iced::Add,
    );
    check(ADD, &[AL.into(), Imm::I8(1).into()], &[0x04, 0x01], Iced::Add);
}

#[test]
fn xv_alu_memory() {
    check(
        ADD,
        &[RAX.into(), Mem::base(RBX).into()],
        &[0x48, 0x03, 0x03],
        Iced::Add,
    );
    check(
        CMP,
        &[Mem::base(RBX).into(), RAX.into()],
        &[0x48, 0x39, 0x03],
        Iced::Cmp,
    );
}

#[test]
fn xv_test() {
    check(
        TEST,
        &[RAX.into(), Imm::I32(1).into()],
        &[0x48, 0xA9, 0x01, 0x00, 0x00, 0x00],
        Iced::Test,
    );
    check(TEST, &[RAX.into(), RBX.into()], &[0x48, 0x85, 0xD8], Iced::Test);
}

#[test]
fn xv_unary() {
    check(NOT, &[RAX.into()], &[0x48, 0xF7, 0xD0], Iced::Not);
    check(NEG, &[RAX.into()], &[0x48, 0xF7, 0xD8], Iced::Neg);
    check(MUL, &[RBX.into()], &[0x48, 0xF7, 0xE3], Iced::Mul);
    check(DIV, &[RBX.into()], &[0x48, 0xF7, 0xF3], Iced::Div);
    check(IDIV, &[RBX.into()], &[0x48, 0xF7, 0xFB], Iced::Idiv);
    check(INC, &[RAX.into()], &[0x48, 0xFF, 0xC0], Iced::Inc);
    check(DEC, &[RAX.into()], &[0x48, 0xFF, 0xC8], Iced::Dec);
}

#[test]
fn xv_imul() {
    check(IMUL, &[RBX.into()], &[0x48, 0xF7, 0xEB], Iced::Imul);
    check(
        IMUL,
        &[RAX.into(), RBX.into()],
        &[0x48, 0x0F, 0xAF, 0xC3],
        Iced::Imul,
    );
    check(
        IMUL,
        &[RAX.into(), RBX.into(), Imm::I8(5).into()],
        &[0x48, 0x6B, 0xC3, 0x05],
        Iced::Imul,
    );
}

#[test]
fn xv_shifts() {
    check(
        SHL,
        &[RAX.into(), Imm::I8(3).into()],
        &[0x48, 0xC1, 0xE0, 0x03],
        Iced::Shl,
    );
    check(
        SHR,
        &[RAX.into(), Imm::I8(3).into()],
        &[0x48, 0xC1, 0xE8, 0x03],
        Iced::Shr,
    );
    check(
        SAR,
        &[RAX.into(), Imm::I8(3).into()],
        &[0x48, 0xC1, 0xF8, 0x03],
        Iced::Sar,
    );
    check(SHL, &[RAX.into(), CL.into()], &[0x48, 0xD3, 0xE0], Iced::Shl);
    check(
        ROL,
        &[RAX.into(), Imm::I8(1).into()],
        &[0x48, 0xC1, 0xC0, 0x01],
        Iced::Rol,
    );
}

#[test]
fn xv_bit_ops() {
    check(BT, &[RAX.into(), RBX.into()], &[0x48, 0x0F, 0xA3, 0xD8], Iced::Bt);
    check(
        BSF,
        &[RAX.into(), RBX.into()],
        &[0x48, 0x0F, 0xBC, 0xC3],
        Iced::Bsf,
    );
    check(
        POPCNT,
        &[RAX.into(), RBX.into()],
        &[0xF3, 0x48, 0x0F, 0xB8, 0xC3],
        Iced::Popcnt,
    );
}

// ─── Control flow ─────────────────────────────────────────────────────────────

#[test]
fn xv_jumps() {
    check(JMP, &[Disp::Rel8(4).into()], &[0xEB, 0x04], Iced::Jmp);
    check(
        JMP,
        &[Disp::Rel32(0x100).into()],
        &[0xE9, 0x00, 0x01, 0x00, 0x00],
        Iced::Jmp,
    );
    check(JMP, &[Mem::base(RAX).into()], &[0xFF, 0x20], Iced::Jmp);
    check(
        CALL,
        &[Disp::Rel32(0x10).into()],
        &[0xE8, 0x10, 0x00, 0x00, 0x00],
        Iced::Call,
    );
    check(CALL, &[RAX.into()], &[0xFF, 0xD0], Iced::Call);
}

#[test]
fn xv_conditional_jumps() {
    check(JZ, &[Disp::Rel8(4).into()], &[0x74, 0x04], Iced::Je);
    check(JNZ, &[Disp::Rel8(-4).into()], &[0x75, 0xFC], Iced::Jne);
    check(
        JZ,
        &[Disp::Rel32(0x8000).into()],
        &[0x0F, 0x84, 0x00, 0x80, 0x00, 0x00],
        Iced::Je,
    );
    check(JB, &[Disp::Rel8(4).into()], &[0x72, 0x04], Iced::Jb);
    check(JNLE, &[Disp::Rel8(4).into()], &[0x7F, 0x04], Iced::Jg);
}

#[test]
fn xv_setcc_cmovcc() {
    check(SETZ, &[AL.into()], &[0x0F, 0x94, 0xC0], Iced::Sete);
    check(SETNBE, &[AL.into()], &[0x0F, 0x97, 0xC0], Iced::Seta);
    check(
        CMOVZ,
        &[RAX.into(), RBX.into()],
        &[0x48, 0x0F, 0x44, 0xC3],
        Iced::Cmove,
    );
}

#[test]
fn xv_ret_int() {
    check(RET, &[], &[0xC3], Iced::Ret);
    check(RET, &[Imm::I16(8).into()], &[0xC2, 0x08, 0x00], Iced::Ret);
    check(INT, &[Imm::I8(3).into()], &[0xCD, 0x03], Iced::Int);
}

// ─── SSE / MMX ────────────────────────────────────────────────────────────────

#[test]
fn xv_sse_moves() {
    check(
        MOVDQA,
        &[XMM0.into(), Mem::base(RDI).size(16).into()],
        &[0x66, 0x0F, 0x6F, 0x07],
        Iced::Movdqa,
    );
    check(
        MOVDQA,
        &[Mem::base(RDI).size(16).into(), XMM0.into()],
        &[0x66, 0x0F, 0x7F, 0x07],
        Iced::Movdqa,
    );
    check(
        MOVDQU,
        &[XMM0.into(), Mem::base(RDI).size(16).into()],
        &[0xF3, 0x0F, 0x6F, 0x07],
        Iced::Movdqu,
    );
    check(
        MOVSS,
        &[XMM0.into(), XMM1.into()],
        &[0xF3, 0x0F, 0x10, 0xC1],
        Iced::Movss,
    );
    check(
        MOVSD,
        &[XMM0.into(), XMM1.into()],
        &[0xF2, 0x0F, 0x10, 0xC1],
        Iced::Movsd,
    );
}

#[test]
fn xv_sse_arith() {
    check(
        PXOR,
        &[XMM1.into(), XMM2.into()],
        &[0x66, 0x0F, 0xEF, 0xCA],
        Iced::Pxor,
    );
    check(
        ADDPS,
        &[XMM0.into(), XMM1.into()],
        &[0x0F, 0x58, 0xC1],
        Iced::Addps,
    );
    check(
        ADDSD,
        &[XMM0.into(), XMM1.into()],
        &[0xF2, 0x0F, 0x58, 0xC1],
        Iced::Addsd,
    );
}

#[test]
fn xv_mmx() {
    check(PXOR, &[MM1.into(), MM2.into()], &[0x0F, 0xEF, 0xCA], Iced::Pxor);
    check(
        MOVQ,
        &[MM0.into(), RAX.into()],
        &[0x48, 0x0F, 0x6E, 0xC0],
        Iced::Movq,
    );
    check(MOVQ, &[MM1.into(), MM2.into()], &[0x0F, 0x6F, 0xCA], Iced::Movq);
}

// ─── x87 ──────────────────────────────────────────────────────────────────────

#[test]
fn xv_x87() {
    check(FLD, &[ST1.into()], &[0xD9, 0xC1], Iced::Fld);
    check(
        FLD,
        &[Mem::base(RAX).size(8).into()],
        &[0xDD, 0x00],
        Iced::Fld,
    );
    check(FADD, &[ST0.into(), ST1.into()], &[0xD8, 0xC1], Iced::Fadd);
}

// ─── AVX / VEX ────────────────────────────────────────────────────────────────

#[test]
fn xv_vex_three_operand() {
    check(
        VADDPS,
        &[XMM0.into(), XMM1.into(), XMM2.into()],
        &[0xC5, 0xF0, 0x58, 0xC2],
        Iced::Vaddps,
    );
    check(
        VADDPS,
        &[YMM0.into(), YMM1.into(), YMM2.into()],
        &[0xC5, 0xF4, 0x58, 0xC2],
        Iced::Vaddps,
    );
}

#[test]
fn xv_vex_extended_regs_use_three_byte_form() {
    check(
        VADDPS,
        &[XMM0.into(), XMM1.into(), XMM9.into()],
        &[0xC4, 0xC1, 0x70, 0x58, 0xC1],
        Iced::Vaddps,
    );
}

#[test]
fn xv_vshufpd_imm() {
    check(
        VSHUFPD,
        &[
            XMM0.into(),
            XMM1.into(),
            Mem::base(RBX).size(16).into(),
            Imm::I8(2).into(),
        ],
        &[0xC5, 0xF1, 0xC6, 0x03, 0x02],
        Iced::Vshufpd,
    );
}

#[test]
fn xv_vsib_gather() {
    check(
        VGATHERDPS,
        &[
            XMM0.into(),
            Mem::base(RDX).index(XMM1, 1).into(),
            XMM2.into(),
        ],
        &[0xC4, 0xE2, 0x69, 0x92, 0x44, 0x0A, 0x00],
        Iced::Vgatherdps,
    );
    check(
        VGATHERQPS,
        &[
            XMM0.into(),
            Mem::base(RDX).index(XMM1, 4).disp8(64).into(),
            XMM2.into(),
        ],
        &[0xC4, 0xE2, 0x69, 0x93, 0x44, 0x8A, 0x40],
        Iced::Vgatherqps,
    );
}

// ─── Prefixes ─────────────────────────────────────────────────────────────────

#[test]
fn xv_lock_prefix() {
    let mut asm = Assembler::with_capacity(16);
    asm.lock(ADD, &[Mem::base(RDI).into(), RAX.into()]).unwrap();
    assert_eq!(asm.code(), [0xF0, 0x48, 0x01, 0x07]);
    let mut decoder = Decoder::with_ip(64, asm.code(), 0, DecoderOptions::NONE);
    let instr = decoder.decode();
    assert_eq!(instr.mnemonic(), Iced::Add);
    assert!(instr.has_lock_prefix());
}

#[test]
fn xv_rep_prefixes() {
    let mut asm = Assembler::with_capacity(16);
    asm.rep(STOSQ, &[]).unwrap();
    let mut decoder = Decoder::with_ip(64, asm.code(), 0, DecoderOptions::NONE);
    let instr = decoder.decode();
    assert_eq!(instr.mnemonic(), Iced::Stosq);
    assert!(instr.has_rep_prefix());

    asm.reset(None);
    asm.repne(SCASQ, &[]).unwrap();
    let mut decoder = Decoder::with_ip(64, asm.code(), 0, DecoderOptions::NONE);
    let instr = decoder.decode();
    assert_eq!(instr.mnemonic(), Iced::Scasq);
    assert!(instr.has_repne_prefix());
}

// ─── Special memory forms ─────────────────────────────────────────────────────

#[test]
fn xv_special_bases() {
    check(
        MOV,
        &[RAX.into(), Mem::base(RBP).into()],
        &[0x48, 0x8B, 0x45, 0x00],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Mem::base(R13).into()],
        &[0x49, 0x8B, 0x45, 0x00],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Mem::base(RSP).into()],
        &[0x48, 0x8B, 0x04, 0x24],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Mem::base(R12).into()],
        &[0x49, 0x8B, 0x04, 0x24],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Mem::absolute(0x10).into()],
        &[0x48, 0x8B, 0x04, 0x25, 0x10, 0x00, 0x00, 0x00],
        Iced::Mov,
    );
    check(
        MOV,
        &[RAX.into(), Mem::default().index(RCX, 4).into()],
        &[0x48, 0x8B, 0x04, 0x8D, 0x00, 0x00, 0x00, 0x00],
        Iced::Mov,
    );
}

#[test]
fn xv_fixed_encoding_instructions() {
    check(CPUID, &[], &[0x0F, 0xA2], Iced::Cpuid);
    check(SYSCALL, &[], &[0x0F, 0x05], Iced::Syscall);
    check(CQO, &[], &[0x48, 0x99], Iced::Cqo);
    check(UD2, &[], &[0x0F, 0x0B], Iced::Ud2);
    check(PAUSE, &[], &[0xF3, 0x90], Iced::Pause);
    check(VZEROUPPER, &[], &[0xC5, 0xF8, 0x77], Iced::Vzeroupper);
}

#[test]
fn xv_nop_padding_decodes_as_nops() {
    let mut asm = Assembler::with_capacity(64);
    asm.rr(MOV, RAX, RBX).unwrap();
    asm.align_pc(16);
    assert_eq!(asm.code().len(), 16);

    let mut decoder = Decoder::with_ip(64, asm.code(), 0, DecoderOptions::NONE);
    let first = decoder.decode();
    assert_eq!(first.mnemonic(), Iced::Mov);
    let mut offset = first.len();
    while offset < 16 {
        let instr = decoder.decode();
        assert_eq!(instr.mnemonic(), Iced::Nop, "at offset {}", offset);
        offset += instr.len();
    }
}
