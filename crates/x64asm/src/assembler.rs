//! The assembler: buffer, labels, relocations, feature mask, and the
//! per-instruction encoding pipeline.

use alloc::vec::Vec;
use core::fmt;

use crate::buffer::CodeBuffer;
use crate::emit;
use crate::error::AsmError;
use crate::feats::{Feature, ALL_FEATURES};
use crate::inst::Inst;
use crate::matcher::{InstMatcher, MatchState};
use crate::operand::{Imm, Label, Mem, Operand};
use crate::reg::Reg;

/// A user-supplied legacy prefix.
///
/// The chosen encoding must permit the prefix, otherwise the instruction is
/// rejected with [`AsmError::PrefixNotAllowed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prefix {
    /// `LOCK` (0xF0).
    Lock,
    /// `REP` (0xF3).
    Rep,
    /// `REPE`/`REPZ` (0xF3).
    Repe,
    /// `REPNE`/`REPNZ` (0xF2).
    Repne,
}

impl Prefix {
    pub(crate) fn byte(self) -> u8 {
        match self {
            Prefix::Lock => 0xF0,
            Prefix::Rep | Prefix::Repe => 0xF3,
            Prefix::Repne => 0xF2,
        }
    }

    pub(crate) fn permission(self) -> u32 {
        match self {
            Prefix::Lock => crate::flags::LOCK,
            Prefix::Rep => crate::flags::REP | crate::flags::REPE,
            Prefix::Repe | Prefix::Repne => crate::flags::REPE,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefix::Lock => write!(f, "LOCK"),
            Prefix::Rep => write!(f, "REP"),
            Prefix::Repe => write!(f, "REPE"),
            Prefix::Repne => write!(f, "REPNE"),
        }
    }
}

/// An unresolved displacement slot, patched during
/// [`finalize`](Assembler::finalize).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Reloc {
    /// Absolute buffer offset of the displacement slot.
    pub loc: u32,
    /// Additional displacement added to the patched offset.
    pub disp: i32,
    /// Target label id.
    pub label: u16,
    /// Slot width in bytes (1, 2, or 4).
    pub width: u8,
}

/// An x86-64 instruction encoder.
///
/// Encodes instructions into a byte buffer. Forward label references are
/// supported through a relocation table; [`finalize`](Assembler::finalize)
/// must be called to patch them once all labels have their final offsets.
///
/// The first encoding error is sticky: every subsequent encoding call
/// returns it until [`reset`](Assembler::reset) is called.
///
/// # Examples
///
/// ```
/// use x64asm::mnemonics::{ADD, MOV, RET};
/// use x64asm::reg::{RAX, RBX};
/// use x64asm::{Assembler, Imm};
///
/// let mut asm = Assembler::with_capacity(64);
/// asm.inst(MOV, &[RAX.into(), Imm::I32(40).into()])?;
/// asm.ri(ADD, RAX, Imm::I8(2))?;
/// asm.inst(RET, &[])?;
/// asm.finalize()?;
/// assert!(!asm.code().is_empty());
/// # Ok::<(), x64asm::AsmError>(())
/// ```
#[derive(Debug)]
pub struct Assembler {
    buf: CodeBuffer,
    labels: Vec<Label>,
    relocs: Vec<Reloc>,
    feats: Feature,
    err: Option<AsmError>,
}

impl Assembler {
    /// Create an assembler emitting into `buf`. The buffer grows on demand
    /// if the encoded output exceeds its length.
    ///
    /// All CPU features are enabled by default for instruction matching.
    #[must_use]
    pub fn new(buf: Vec<u8>) -> Assembler {
        Assembler {
            buf: CodeBuffer::new(buf),
            labels: Vec::new(),
            relocs: Vec::new(),
            feats: ALL_FEATURES,
            err: None,
        }
    }

    /// Create an assembler with a fresh buffer of the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Assembler {
        Assembler::new(alloc::vec![0; capacity])
    }

    /// Reset the assembler for a new set of instructions: clears labels,
    /// relocations, the sticky error, and the PC. The feature mask is
    /// preserved. If `buf` is supplied it replaces the current buffer,
    /// otherwise the existing buffer is reset in place.
    pub fn reset(&mut self, buf: Option<Vec<u8>>) {
        match buf {
            Some(b) => self.buf = CodeBuffer::new(b),
            None => self.buf.reset(),
        }
        self.labels.clear();
        self.relocs.clear();
        self.err = None;
    }

    /// The current CPU feature mask used for instruction matching.
    #[must_use]
    pub fn features(&self) -> Feature {
        self.feats
    }

    /// Replace the CPU feature mask. Already-encoded bytes are unaffected.
    pub fn set_features(&mut self, feats: Feature) {
        self.feats = feats;
    }

    /// Enable a CPU feature for instruction matching.
    pub fn enable_feature(&mut self, feat: Feature) {
        self.feats |= feat;
    }

    /// Disable a CPU feature for instruction matching.
    pub fn disable_feature(&mut self, feat: Feature) {
        self.feats &= !feat;
    }

    /// The current program counter: the number of bytes written so far.
    #[must_use]
    pub fn pc(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Move the program counter, growing the buffer if needed.
    pub fn set_pc(&mut self, pc: u32) {
        self.buf.set_pos(pc as usize);
    }

    /// Align the program counter to a power-of-two boundary, padding with
    /// multi-byte NOPs. An already-aligned PC emits nothing.
    pub fn align_pc(&mut self, pow2: u8) {
        let mask = u32::from(pow2) - 1;
        let pad = (u32::from(pow2) - (self.pc() & mask)) & mask;
        if pad > 0 {
            self.buf.nop(pad as u8);
        }
    }

    /// Emit `length` bytes of multi-byte NOP padding.
    pub fn nop(&mut self, length: u8) {
        self.buf.nop(length);
    }

    /// The first error since the last reset, if any.
    #[must_use]
    pub fn err(&self) -> Option<&AsmError> {
        self.err.as_ref()
    }

    /// The encoded bytes written so far. May be called repeatedly; does not
    /// affect the buffer.
    #[must_use]
    pub fn code(&self) -> &[u8] {
        self.buf.bytes()
    }

    /// Encode an instruction with the given operands.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::NoMatch`] when no encoding in the static table is
    /// compatible with the operands under the enabled CPU features, or the
    /// sanitizer/sizer/emitter error describing the problem. The error is
    /// also stored as the assembler's sticky error.
    pub fn inst(&mut self, inst: Inst, operands: &[Operand]) -> Result<(), AsmError> {
        self.encode(inst, operands, None)
    }

    /// Encode an instruction with a user-supplied legacy prefix.
    ///
    /// # Errors
    ///
    /// As [`inst`](Assembler::inst); additionally returns
    /// [`AsmError::PrefixNotAllowed`] if the chosen encoding does not permit
    /// the prefix.
    pub fn with_prefix(
        &mut self,
        prefix: Prefix,
        inst: Inst,
        operands: &[Operand],
    ) -> Result<(), AsmError> {
        self.encode(inst, operands, Some(prefix))
    }

    /// Encode with a `LOCK` prefix.
    ///
    /// # Errors
    ///
    /// See [`with_prefix`](Assembler::with_prefix).
    pub fn lock(&mut self, inst: Inst, operands: &[Operand]) -> Result<(), AsmError> {
        self.with_prefix(Prefix::Lock, inst, operands)
    }

    /// Encode with a `REP` prefix.
    ///
    /// # Errors
    ///
    /// See [`with_prefix`](Assembler::with_prefix).
    pub fn rep(&mut self, inst: Inst, operands: &[Operand]) -> Result<(), AsmError> {
        self.with_prefix(Prefix::Rep, inst, operands)
    }

    /// Encode with a `REPE` prefix.
    ///
    /// # Errors
    ///
    /// See [`with_prefix`](Assembler::with_prefix).
    pub fn repe(&mut self, inst: Inst, operands: &[Operand]) -> Result<(), AsmError> {
        self.with_prefix(Prefix::Repe, inst, operands)
    }

    /// Encode with a `REPNE` prefix.
    ///
    /// # Errors
    ///
    /// See [`with_prefix`](Assembler::with_prefix).
    pub fn repne(&mut self, inst: Inst, operands: &[Operand]) -> Result<(), AsmError> {
        self.with_prefix(Prefix::Repne, inst, operands)
    }

    /// Encode an instruction from a previously matched
    /// [`InstMatcher`](crate::InstMatcher) state, without re-matching.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::BadFormat`] if the matcher holds no successful
    /// match, or the emitter error.
    pub fn inst_from(&mut self, matcher: &InstMatcher) -> Result<(), AsmError> {
        self.check_err()?;
        let Some(state) = matcher.state.as_ref() else {
            let err = AsmError::BadFormat {
                detail: alloc::string::String::from("matcher holds no matched instruction"),
            };
            self.err = Some(err.clone());
            return Err(err);
        };
        self.run_emit(state, None)
    }

    // ── Shape-specialized shortcuts ──────────────────────────────────────

    /// Encode `inst dst, src` with two register operands.
    ///
    /// # Errors
    ///
    /// See [`inst`](Assembler::inst).
    pub fn rr(&mut self, inst: Inst, dst: Reg, src: Reg) -> Result<(), AsmError> {
        self.inst(inst, &[dst.into(), src.into()])
    }

    /// Encode `inst dst, src, imm` with two registers and an immediate.
    ///
    /// # Errors
    ///
    /// See [`inst`](Assembler::inst).
    pub fn rri(&mut self, inst: Inst, dst: Reg, src: Reg, imm: Imm) -> Result<(), AsmError> {
        self.inst(inst, &[dst.into(), src.into(), imm.into()])
    }

    /// Encode `inst dst, src` with a register destination and memory source.
    ///
    /// # Errors
    ///
    /// See [`inst`](Assembler::inst).
    pub fn rm(&mut self, inst: Inst, dst: Reg, src: Mem) -> Result<(), AsmError> {
        self.inst(inst, &[dst.into(), src.into()])
    }

    /// Encode `inst dst, src` with a memory destination and register source.
    ///
    /// # Errors
    ///
    /// See [`inst`](Assembler::inst).
    pub fn mr(&mut self, inst: Inst, dst: Mem, src: Reg) -> Result<(), AsmError> {
        self.inst(inst, &[dst.into(), src.into()])
    }

    /// Encode `inst dst, src, imm` with a register destination, memory
    /// source, and immediate.
    ///
    /// # Errors
    ///
    /// See [`inst`](Assembler::inst).
    pub fn rmi(&mut self, inst: Inst, dst: Reg, src: Mem, imm: Imm) -> Result<(), AsmError> {
        self.inst(inst, &[dst.into(), src.into(), imm.into()])
    }

    /// Encode `inst dst, src, imm` with a memory destination, register
    /// source, and immediate.
    ///
    /// # Errors
    ///
    /// See [`inst`](Assembler::inst).
    pub fn mri(&mut self, inst: Inst, dst: Mem, src: Reg, imm: Imm) -> Result<(), AsmError> {
        self.inst(inst, &[dst.into(), src.into(), imm.into()])
    }

    /// Encode `inst dst, imm` with a register destination and immediate.
    ///
    /// # Errors
    ///
    /// See [`inst`](Assembler::inst).
    pub fn ri(&mut self, inst: Inst, dst: Reg, imm: Imm) -> Result<(), AsmError> {
        self.inst(inst, &[dst.into(), imm.into()])
    }

    /// Encode `inst dst, imm` with a memory destination and immediate.
    ///
    /// # Errors
    ///
    /// See [`inst`](Assembler::inst).
    pub fn mi(&mut self, inst: Inst, dst: Mem, imm: Imm) -> Result<(), AsmError> {
        self.inst(inst, &[dst.into(), imm.into()])
    }

    // ── Labels and relocations ───────────────────────────────────────────

    /// Create a new label at the current PC. Retarget it with
    /// [`set_label`](Assembler::set_label) or
    /// [`set_label_pc`](Assembler::set_label_pc) before finalizing.
    pub fn new_label(&mut self) -> Label {
        let label = Label {
            id: self.labels.len() as u16,
            pc: self.pc(),
        };
        self.labels.push(label);
        label
    }

    /// Point the label at the current PC.
    ///
    /// # Panics
    ///
    /// Panics if the label does not belong to this assembler.
    pub fn set_label(&mut self, label: Label) {
        self.labels[usize::from(label.id)].pc = self.pc();
    }

    /// Point the label at the given PC. [`finalize`](Assembler::finalize)
    /// must run again after labels move; it only needs to run once per batch
    /// of updates.
    ///
    /// # Panics
    ///
    /// Panics if the label does not belong to this assembler.
    pub fn set_label_pc(&mut self, label: Label, pc: u32) {
        self.labels[usize::from(label.id)].pc = pc;
    }

    /// The PC currently assigned to the label.
    ///
    /// # Panics
    ///
    /// Panics if the label does not belong to this assembler.
    #[must_use]
    pub fn get_label_pc(&self, label: Label) -> u32 {
        self.labels[usize::from(label.id)].pc
    }

    /// Patch every recorded label reference with the signed delta to its
    /// target (plus any per-reference additional displacement).
    ///
    /// Finalize may run again after labels are retargeted; each run patches
    /// every slot from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::DisplacementOutOfRange`] for the first patched
    /// value that does not fit its slot width, and stops there.
    pub fn finalize(&mut self) -> Result<(), AsmError> {
        self.check_err()?;
        for r in &self.relocs {
            let target = self.labels[usize::from(r.label)].pc;
            let delta = i64::from(r.loc) + i64::from(r.width) - i64::from(target);
            let disp = -delta + i64::from(r.disp);
            let loc = r.loc as usize;
            match r.width {
                1 => {
                    if i8::try_from(disp).is_err() {
                        self.err = Some(AsmError::DisplacementOutOfRange { width: 1 });
                    } else {
                        self.buf.write_at(loc, &(disp as i8).to_le_bytes());
                    }
                }
                2 => {
                    if i16::try_from(disp).is_err() {
                        self.err = Some(AsmError::DisplacementOutOfRange { width: 2 });
                    } else {
                        self.buf.write_at(loc, &(disp as i16).to_le_bytes());
                    }
                }
                _ => {
                    if i32::try_from(disp).is_err() {
                        self.err = Some(AsmError::DisplacementOutOfRange { width: 4 });
                    } else {
                        self.buf.write_at(loc, &(disp as i32).to_le_bytes());
                    }
                }
            }
            if let Some(err) = &self.err {
                return Err(err.clone());
            }
        }
        Ok(())
    }

    // ── Raw writes ───────────────────────────────────────────────────────

    /// Write raw bytes to the buffer.
    pub fn raw(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Write a raw byte to the buffer.
    pub fn raw_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    /// Write a raw 16-bit integer, little-endian.
    pub fn raw16(&mut self, v: i16) {
        self.buf.write_i16(v);
    }

    /// Write a raw 32-bit integer, little-endian.
    pub fn raw32(&mut self, v: i32) {
        self.buf.write_i32(v);
    }

    /// Write a raw 64-bit integer, little-endian.
    pub fn raw64(&mut self, v: i64) {
        self.buf.write_i64(v);
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn check_err(&self) -> Result<(), AsmError> {
        match &self.err {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn encode(
        &mut self,
        inst: Inst,
        operands: &[Operand],
        prefix: Option<Prefix>,
    ) -> Result<(), AsmError> {
        self.check_err()?;
        let state: Result<MatchState, AsmError> = (|| {
            let mut state = MatchState::prepare(inst, operands)?;
            state.match_and_size(self.feats, 0)?;
            Ok(state)
        })();
        match state {
            Ok(state) => self.run_emit(&state, prefix),
            Err(e) => {
                self.err = Some(e.clone());
                Err(e)
            }
        }
    }

    fn run_emit(&mut self, state: &MatchState, prefix: Option<Prefix>) -> Result<(), AsmError> {
        let result = emit::emit_inst(&mut self.buf, &mut self.relocs, state, prefix);
        if let Err(e) = &result {
            self.err = Some(e.clone());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feats::AVX;
    use crate::mnemonics::*;
    use crate::operand::Disp;
    use crate::reg::*;

    fn asm() -> Assembler {
        Assembler::with_capacity(256)
    }

    fn encode(inst: Inst, operands: &[Operand]) -> Vec<u8> {
        let mut a = asm();
        a.inst(inst, operands).expect("encode");
        a.code().to_vec()
    }

    #[test]
    fn mov_al_imm8() {
        assert_eq!(encode(MOV, &[AL.into(), Imm::I8(1).into()]), [0xB0, 0x01]);
    }

    #[test]
    fn mov_ah_imm8() {
        assert_eq!(encode(MOV, &[AH.into(), Imm::I8(1).into()]), [0xB4, 0x01]);
    }

    #[test]
    fn mov_rax_imm64() {
        assert_eq!(
            encode(MOV, &[RAX.into(), Imm::I64(0x7fff_ffff_ffff_ffff).into()]),
            [0x48, 0xB8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]
        );
    }

    #[test]
    fn add_rax_rbx() {
        assert_eq!(encode(ADD, &[RAX.into(), RBX.into()]), [0x48, 0x01, 0xD8]);
    }

    #[test]
    fn mov_scaled_index_disp8() {
        let mem = Mem::base(RBX).index(R15, 2).disp8(8);
        assert_eq!(
            encode(MOV, &[RAX.into(), mem.into()]),
            [0x4A, 0x8B, 0x44, 0x7B, 0x08]
        );
    }

    #[test]
    fn vshufpd_two_byte_vex() {
        let ops = [
            XMM0.into(),
            XMM1.into(),
            Mem::base(RBX).size(16).into(),
            Imm::I8(2).into(),
        ];
        assert_eq!(encode(VSHUFPD, &ops), [0xC5, 0xF1, 0xC6, 0x03, 0x02]);
    }

    #[test]
    fn vgatherdps_vsib() {
        let ops = [
            XMM0.into(),
            Mem::base(RDX).index(XMM1, 1).into(),
            XMM2.into(),
        ];
        assert_eq!(
            encode(VGATHERDPS, &ops),
            [0xC4, 0xE2, 0x69, 0x92, 0x44, 0x0A, 0x00]
        );
    }

    #[test]
    fn vgatherqps_vsib_scaled_disp() {
        let ops = [
            XMM0.into(),
            Mem::base(RDX).index(XMM1, 4).disp8(64).into(),
            XMM2.into(),
        ];
        assert_eq!(
            encode(VGATHERQPS, &ops),
            [0xC4, 0xE2, 0x69, 0x93, 0x44, 0x8A, 0x40]
        );
    }

    #[test]
    fn lea_rip_relative() {
        let mem = Mem::rip().disp8(16);
        assert_eq!(
            encode(LEA, &[RAX.into(), mem.into()]),
            [0x48, 0x8D, 0x05, 0x10, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn rbp_and_r13_bases_synthesize_disp8() {
        assert_eq!(
            encode(MOV, &[RAX.into(), Mem::base(RBP).into()]),
            [0x48, 0x8B, 0x45, 0x00]
        );
        assert_eq!(
            encode(MOV, &[RAX.into(), Mem::base(R13).into()]),
            [0x49, 0x8B, 0x45, 0x00]
        );
    }

    #[test]
    fn rsp_and_r12_bases_escape_into_sib() {
        assert_eq!(
            encode(MOV, &[RAX.into(), Mem::base(RSP).into()]),
            [0x48, 0x8B, 0x04, 0x24]
        );
        assert_eq!(
            encode(MOV, &[RAX.into(), Mem::base(R12).into()]),
            [0x49, 0x8B, 0x04, 0x24]
        );
    }

    #[test]
    fn absolute_displacement_alone() {
        assert_eq!(
            encode(MOV, &[RAX.into(), Mem::absolute(0x10).into()]),
            [0x48, 0x8B, 0x04, 0x25, 0x10, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn index_without_base_forces_dword_disp() {
        let mem = Mem::default().index(RCX, 4);
        assert_eq!(
            encode(MOV, &[RAX.into(), mem.into()]),
            [0x48, 0x8B, 0x04, 0x8D, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn scale_two_without_base_becomes_base_plus_index() {
        let mem = Mem::default().index(RCX, 2);
        assert_eq!(
            encode(MOV, &[RAX.into(), mem.into()]),
            [0x48, 0x8B, 0x04, 0x09]
        );
    }

    #[test]
    fn lock_prefix() {
        let mut a = asm();
        a.lock(ADD, &[Mem::base(RDI).into(), RAX.into()]).unwrap();
        assert_eq!(a.code(), [0xF0, 0x48, 0x01, 0x07]);
    }

    #[test]
    fn lock_rejected_without_permission() {
        let mut a = asm();
        let err = a.lock(MOV, &[RAX.into(), RBX.into()]).unwrap_err();
        assert!(matches!(err, AsmError::PrefixNotAllowed { .. }));
    }

    #[test]
    fn rep_and_repne_string_ops() {
        let mut a = asm();
        a.rep(STOSQ, &[]).unwrap();
        assert_eq!(a.code(), [0xF3, 0x48, 0xAB]);

        a.reset(None);
        a.rep(SCASQ, &[]).unwrap();
        assert_eq!(a.code(), [0xF3, 0x48, 0xAF]);

        a.reset(None);
        a.repne(SCASQ, &[]).unwrap();
        assert_eq!(a.code(), [0xF2, 0x48, 0xAF]);
    }

    #[test]
    fn vex_requires_avx_feature() {
        let mut a = asm();
        let ops = [
            XMM0.into(),
            XMM1.into(),
            XMM3.into(),
            Imm::I8(1).into(),
        ];
        a.inst(VSHUFPD, &ops).unwrap();
        a.reset(None);
        a.disable_feature(AVX);
        assert_eq!(a.inst(VSHUFPD, &ops), Err(AsmError::NoMatch));
    }

    #[test]
    fn errors_are_sticky_until_reset() {
        let mut a = asm();
        assert_eq!(a.inst(VSHUFPD, &[RAX.into()]), Err(AsmError::NoMatch));
        // A perfectly valid instruction now short-circuits.
        assert_eq!(a.rr(ADD, RAX, RBX), Err(AsmError::NoMatch));
        assert_eq!(a.err(), Some(&AsmError::NoMatch));
        a.reset(None);
        a.rr(ADD, RAX, RBX).unwrap();
    }

    #[test]
    fn short_rel8_label_loop() {
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
                0x48, 0x89, 0xD8, 0x48, 0x83, 0xC0, 0x05, 0x48, 0x83, 0xC3, 0x01, 0xEB, 0xF3,
                0x48, 0x83, 0xC3, 0x01, 0xEB, 0xF4, 0xEB, 0xF8
            ]
        );
    }

    #[test]
    fn rel32_and_default_label_width() {
        let references: [fn(Label) -> Disp; 2] = [|l| l.rel32(), Disp::from];
        for reference in references {
            let mut a = asm();
            let label = a.new_label();
            a.rr(MOV, RAX, RBX).unwrap();
            a.ri(ADD, RAX, Imm::I8(5)).unwrap();
            let _ = a.new_label();
            a.ri(ADD, RBX, Imm::I8(1)).unwrap();
            a.inst(JMP, &[reference(label).into()]).unwrap();
            a.finalize().unwrap();
            assert_eq!(
                a.code(),
                [
                    0x48, 0x89, 0xD8, 0x48, 0x83, 0xC0, 0x05, 0x48, 0x83, 0xC3, 0x01, 0xE9,
                    0xF0, 0xFF, 0xFF, 0xFF
                ]
            );
        }
    }

    #[test]
    fn label_with_additional_displacement() {
        let mut a = asm();
        let label = a.new_label();
        a.rr(MOV, RAX, RBX).unwrap();
        a.ri(ADD, RAX, Imm::I8(5)).unwrap();
        let middle = a.pc();
        a.ri(ADD, RBX, Imm::I8(1)).unwrap();
        a.inst(JMP, &[label.disp8(middle as i8).into()]).unwrap();
        a.finalize().unwrap();
        assert_eq!(
            a.code(),
            [0x48, 0x89, 0xD8, 0x48, 0x83, 0xC0, 0x05, 0x48, 0x83, 0xC3, 0x01, 0xEB, 0xFA]
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
            &[RAX.into(), Mem::rip().disp(label.disp32(middle as i32)).into()],
        )
        .unwrap();
        a.finalize().unwrap();
        assert_eq!(
            a.code(),
            [
                0x48, 0x89, 0xD8, 0x48, 0x89, 0xC3, 0x48, 0x8D, 0x05, 0xF6, 0xFF, 0xFF, 0xFF
            ]
        );
    }

    #[test]
    fn rel8_out_of_range_is_reported() {
        let mut a = asm();
        let label = a.new_label();
        for _ in 0..50 {
            a.rr(MOV, RAX, RBX).unwrap();
        }
        a.inst(JMP, &[label.rel8().into()]).unwrap();
        assert_eq!(
            a.finalize(),
            Err(AsmError::DisplacementOutOfRange { width: 1 })
        );
    }

    #[test]
    fn finalize_is_repeatable_after_retargeting() {
        let mut a = asm();
        let label = a.new_label();
        a.inst(JMP, &[label.rel32().into()]).unwrap();
        a.finalize().unwrap();
        let first = a.code().to_vec();

        a.set_label_pc(label, a.pc());
        a.finalize().unwrap();
        assert_ne!(a.code(), &first[..]);

        a.set_label_pc(label, 0);
        a.finalize().unwrap();
        assert_eq!(a.code(), &first[..]);
    }

    #[test]
    fn finalized_jmp_delta_matches_definition() {
        let mut a = asm();
        a.rr(MOV, RAX, RBX).unwrap();
        let target = a.new_label();
        a.rr(MOV, RBX, RAX).unwrap();
        let jmp_pc = a.pc();
        a.inst(JMP, &[target.rel32().into()]).unwrap();
        a.finalize().unwrap();
        let code = a.code();
        let disp = i32::from_le_bytes(code[code.len() - 4..].try_into().unwrap());
        assert_eq!(disp, a.get_label_pc(target) as i32 - (jmp_pc as i32 + 5));
    }

    #[test]
    fn encode_from_matcher_state() {
        let mut m = InstMatcher::new();
        m.match_inst(ADD, &[RAX.into(), RBX.into()]).unwrap();
        let mut a = asm();
        a.inst_from(&m).unwrap();
        a.inst_from(&m).unwrap();
        assert_eq!(a.code(), [0x48, 0x01, 0xD8, 0x48, 0x01, 0xD8]);
    }

    #[test]
    fn align_pc_pads_with_nops() {
        let mut a = asm();
        a.rr(MOV, RAX, RBX).unwrap();
        a.align_pc(16);
        assert_eq!(a.code().len(), 16);
        a.align_pc(16);
        assert_eq!(a.code().len(), 16);
    }

    #[test]
    fn raw_writes() {
        let mut a = asm();
        a.raw(&[1, 2]);
        a.raw_byte(3);
        a.raw16(-1);
        a.raw32(7);
        a.raw64(-8);
        assert_eq!(a.code().len(), 2 + 1 + 2 + 4 + 8);
    }

    #[test]
    fn basic_instruction_selection() {
        assert_eq!(encode(PUSH, &[RAX.into()]), [0x50]);
        assert_eq!(encode(PUSH, &[R9.into()]), [0x41, 0x51]);
        assert_eq!(encode(POP, &[RAX.into()]), [0x58]);
        assert_eq!(encode(NEG, &[RAX.into()]), [0x48, 0xF7, 0xD8]);
        assert_eq!(encode(RET, &[]), [0xC3]);
        assert_eq!(
            encode(JMP, &[Mem::base(RAX).into()]),
            [0xFF, 0x20] // AUTO_NO32: no REX.W for the natural 64-bit form
        );
        assert_eq!(
            encode(MOVZX, &[RAX.into(), Mem::base(RBX).size(1).into()]),
            [0x48, 0x0F, 0xB6, 0x03]
        );
    }

    #[test]
    fn mov_ax_imm8_widens() {
        assert_eq!(
            encode(MOV, &[AX.into(), Imm::I8(1).into()]),
            [0x66, 0xC7, 0xC0, 0x01, 0x00]
        );
    }

    #[test]
    fn set_pc_moves_the_cursor() {
        let mut a = asm();
        a.rr(MOV, RAX, RBX).unwrap();
        assert_eq!(a.pc(), 3);
        a.set_pc(8);
        a.rr(MOV, RAX, RBX).unwrap();
        assert_eq!(a.pc(), 11);
    }
}
