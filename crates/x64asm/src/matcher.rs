//! Encoding search: find an encoding spec whose argument pattern and
//! required CPU features are compatible with the concrete operands.

use alloc::vec::Vec;

use crate::error::AsmError;
use crate::feats::{Feature, ALL_FEATURES};
use crate::inst::{Enc, Inst};
use crate::operand::{Mem, Operand};
use crate::reg::{Reg, RegFamily, CR8, ST0};
use crate::{extract, resize, sanitize};

/// A fixed-capacity operand list. Instructions take at most 4 operands.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Args {
    buf: [Option<Operand>; 4],
    len: usize,
}

impl Args {
    pub(crate) fn push(&mut self, op: Operand) {
        self.buf[self.len] = Some(op);
        self.len += 1;
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> &Operand {
        self.buf[i].as_ref().expect("operand index in range")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, i: usize) -> &mut Operand {
        self.buf[i].as_mut().expect("operand index in range")
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Operand> {
        self.buf[..self.len].iter().map(|o| o.as_ref().expect("in range"))
    }
}

/// Operands assigned to their encoding roles.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Extracted {
    /// ModR/M.reg operand.
    pub r: Option<Operand>,
    /// ModR/M.rm operand (register or memory).
    pub m: Option<Operand>,
    /// VEX.vvvv operand.
    pub v: Option<Operand>,
    /// Register encoded in an immediate byte.
    pub i: Option<Operand>,
    /// Immediates and displacements, in pattern order.
    pub imms: Args,
}

/// Per-instruction scratch state threaded through sanitization, matching,
/// resizing, role extraction, and emission.
#[derive(Debug, Clone)]
pub(crate) struct MatchState {
    pub inst: Inst,
    pub args: Args,
    /// Position of the memory operand within `args`, if any.
    pub mem_offset: Option<usize>,
    pub enc: Enc,
    /// Global index of the matched encoding within the encoding table.
    pub enc_idx: usize,
    pub ext: Extracted,
    /// Effective address size in bytes (4 or 8 after a successful match).
    pub addr_size: u8,
    /// Resolved operation size; `None` when no operand carries a size.
    pub op_size: Option<u8>,
}

impl MatchState {
    /// Gather operands, locating and checking the (single) memory operand.
    pub(crate) fn prepare(inst: Inst, operands: &[Operand]) -> Result<MatchState, AsmError> {
        let mut args = Args::default();
        let mut mem_offset = None;
        for (i, op) in operands.iter().enumerate() {
            if let Operand::Mem(_) = op {
                if mem_offset.is_some() {
                    return Err(AsmError::MultipleMemory);
                }
                mem_offset = Some(i);
            }
            args.push(*op);
        }
        Ok(MatchState {
            inst,
            args,
            mem_offset,
            enc: Enc {
                op: [0; 4],
                flags: 0,
                feats: 0,
                mne: 0,
                regoplen: 1 << 4 | 0xf,
                argp: 0,
            },
            enc_idx: 0,
            ext: Extracted::default(),
            addr_size: 8,
            op_size: None,
        })
    }

    /// The memory operand, if one is present.
    pub(crate) fn mem_mut(&mut self) -> Option<&mut Mem> {
        match self.mem_offset.map(|i| self.args.get_mut(i)) {
            Some(Operand::Mem(m)) => Some(m),
            _ => None,
        }
    }

    /// Run sanitization, encoding search (starting at `start` within the
    /// mnemonic's block), argument resizing, and role extraction.
    pub(crate) fn match_and_size(&mut self, feats: Feature, start: usize) -> Result<(), AsmError> {
        let addr_size = sanitize::sanitize_mem_arg(self)?;
        let addr_size = if addr_size < 0 { 8 } else { addr_size as u8 };
        if addr_size != 4 && addr_size != 8 {
            return Err(AsmError::BadAddressing {
                detail: alloc::format!(
                    "{}-bit addressing is not encodable in 64-bit mode",
                    u32::from(addr_size) * 8
                ),
            });
        }
        self.addr_size = addr_size;

        let (enc_idx, enc) = scan(self.inst, &self.args, feats, start).ok_or(AsmError::NoMatch)?;
        self.enc = enc;
        self.enc_idx = enc_idx;

        self.op_size = resize::resize_args(self)?;
        extract::extract_args(self);
        Ok(())
    }
}

#[inline]
pub(crate) fn pattern_len(p: &[u8; 8]) -> usize {
    p.iter().position(|&b| b == 0).unwrap_or(8)
}

/// Scan the mnemonic's encodings for the first spec at index >= `start`
/// whose argument pattern and feature requirements admit the operands.
/// Returns the global encoding index and the spec.
pub(crate) fn scan(inst: Inst, args: &Args, feats: Feature, start: usize) -> Option<(usize, Enc)> {
    let base = usize::from(inst.offset());

    'search: for (ei, e) in inst.encs().iter().enumerate().skip(start) {
        // All required features must be enabled.
        if e.feats & feats != e.feats {
            continue;
        }
        let p = e.format();
        if pattern_len(p) / 2 != args.len() {
            continue;
        }

        for (ai, arg) in args.iter().enumerate() {
            let (t, sz) = (p[ai * 2], p[ai * 2 + 1]);
            let mut argsz = arg.width();

            match t {
                b'i' => {
                    if !matches!(arg, Operand::Imm(_)) {
                        continue 'search;
                    }
                }
                b'o' => {
                    if !matches!(arg, Operand::Disp(_)) {
                        continue 'search;
                    }
                }
                b'W' => {
                    if *arg != Operand::Reg(CR8) {
                        continue 'search;
                    }
                }
                b'X' => {
                    if *arg != Operand::Reg(ST0) {
                        continue 'search;
                    }
                }
                b'r' | b'v' => match arg {
                    Operand::Reg(r)
                        if matches!(r.family(), RegFamily::Legacy | RegFamily::HighByte) => {}
                    Operand::Mem(m) if t == b'v' && !m.has_vsib_index() => {}
                    _ => continue 'search,
                },
                b'x' | b'u' => match arg {
                    Operand::Reg(r) if r.family() == RegFamily::Mmx => {}
                    Operand::Mem(m) if t == b'u' && !m.has_vsib_index() => {}
                    _ => continue 'search,
                },
                b'y' | b'w' => match arg {
                    Operand::Reg(r) if r.is_vector() => {}
                    Operand::Mem(m) if t == b'w' && !m.has_vsib_index() => {}
                    _ => continue 'search,
                },
                b'm' => match arg {
                    Operand::Mem(m) if !m.has_vsib_index() => {}
                    _ => continue 'search,
                },
                b'f' => match arg {
                    Operand::Reg(r) if r.family() == RegFamily::Fp => {}
                    _ => continue 'search,
                },
                b's' => match arg {
                    Operand::Reg(r) if r.family() == RegFamily::Segment => {}
                    _ => continue 'search,
                },
                b'c' => match arg {
                    Operand::Reg(r) if r.family() == RegFamily::Control => {}
                    _ => continue 'search,
                },
                b'd' => match arg {
                    Operand::Reg(r) if r.family() == RegFamily::Debug => {}
                    _ => continue 'search,
                },
                // Bound registers are not currently handled.
                b'b' => continue 'search,
                b'k' | b'l' => match arg {
                    Operand::Mem(m)
                        if m.index.is_some_and(Reg::is_vector)
                            || m.base.is_some_and(Reg::is_vector) =>
                    {
                        argsz = m.index.map_or(0, Reg::width);
                    }
                    _ => continue 'search,
                },
                b'A'..=b'P' => match arg {
                    Operand::Reg(r)
                        if r.family() == RegFamily::Legacy && r.num() == t - b'A' => {}
                    _ => continue 'search,
                },
                b'Q'..=b'V' => match arg {
                    Operand::Reg(r)
                        if r.family() == RegFamily::Segment && r.num() == t - b'Q' => {}
                    _ => continue 'search,
                },
                _ => continue 'search,
            }

            // A memory operand with no known width matches any size letter;
            // EXACT_SIZE encodings refuse the inference.
            if argsz == 0 && matches!(arg, Operand::Mem(_)) {
                if e.flags & crate::flags::EXACT_SIZE != 0 {
                    continue 'search;
                }
                continue;
            }

            // Immediates and displacements narrower than the slot are
            // admitted and widened later; all other classes match exactly.
            let int_pos = matches!(t, b'i' | b'o');
            let size_ok = match sz {
                b'b' => {
                    if int_pos {
                        argsz <= 1
                    } else {
                        argsz == 1
                    }
                }
                b'w' => {
                    if int_pos {
                        argsz <= 2
                    } else {
                        argsz == 2
                    }
                }
                b'd' => {
                    if int_pos {
                        argsz <= 4
                    } else {
                        argsz == 4
                    }
                }
                b'q' => {
                    if int_pos {
                        argsz <= 8
                    } else {
                        argsz == 8
                    }
                }
                b'f' => argsz == 6,
                b'p' => argsz == 10,
                b'o' => argsz == 16,
                b'h' => argsz == 32,
                b'0' => match t {
                    // 64-bit immediates reach only explicit `q` slots.
                    b'i' | b'o' => argsz <= 4,
                    b'k' | b'l' | b'y' | b'w' => argsz == 16 || argsz == 32,
                    b'm' => true,
                    b'r' | b'v' | b'A'..=b'P' => matches!(argsz, 2 | 4 | 8),
                    _ => false,
                },
                b'1' => t == b'm',
                _ => false,
            };
            if !size_ok {
                continue 'search;
            }
        }

        debug_assert_eq!(usize::from(e.local_offset()), ei);
        debug_assert_eq!(e.inst_id(), inst.id());
        return Some((base + ei, *e));
    }

    None
}

/// Standalone encoding matcher.
///
/// Finds valid encodings for an instruction and operands without emitting
/// any bytes, sharing only the immutable encoding table with other matchers.
/// The assembler can encode directly from a successful match via
/// [`Assembler::inst_from`](crate::Assembler::inst_from).
///
/// # Examples
///
/// ```
/// use x64asm::{mnemonics::ADD, reg::{RAX, RBX}, InstMatcher};
///
/// let mut m = InstMatcher::new();
/// m.match_inst(ADD, &[RAX.into(), RBX.into()])?;
/// assert_eq!(m.operand_size(), Some(8));
/// # Ok::<(), x64asm::AsmError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InstMatcher {
    feats: Feature,
    pub(crate) state: Option<MatchState>,
}

impl InstMatcher {
    /// Create a matcher with all CPU features enabled.
    #[must_use]
    pub fn new() -> InstMatcher {
        InstMatcher {
            feats: ALL_FEATURES,
            state: None,
        }
    }

    /// The current CPU feature mask used for matching.
    #[must_use]
    pub fn features(&self) -> Feature {
        self.feats
    }

    /// Replace the CPU feature mask.
    pub fn set_features(&mut self, feats: Feature) {
        self.feats = feats;
    }

    /// Enable a CPU feature.
    pub fn enable_feature(&mut self, feat: Feature) {
        self.feats |= feat;
    }

    /// Disable a CPU feature.
    pub fn disable_feature(&mut self, feat: Feature) {
        self.feats &= !feat;
    }

    /// Find the first encoding for `inst` compatible with the operands.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::NoMatch`] if no encoding is compatible, or the
    /// sanitizer/resizer error for unencodable operands.
    pub fn match_inst(&mut self, inst: Inst, operands: &[Operand]) -> Result<(), AsmError> {
        self.match_from(inst, operands, 0)
    }

    fn match_from(
        &mut self,
        inst: Inst,
        operands: &[Operand],
        start: usize,
    ) -> Result<(), AsmError> {
        self.state = None;
        let mut state = MatchState::prepare(inst, operands)?;
        state.match_and_size(self.feats, start)?;
        self.state = Some(state);
        Ok(())
    }

    /// Find every valid encoding for `inst` with the operands, in table
    /// order. Returns a matcher snapshot per encoding.
    ///
    /// # Errors
    ///
    /// Returns the error for an operand list that cannot be matched at all
    /// (e.g. [`AsmError::MultipleMemory`]), or [`AsmError::NoMatch`] when no
    /// encoding is compatible.
    pub fn all_matches(
        &mut self,
        inst: Inst,
        operands: &[Operand],
    ) -> Result<Vec<InstMatcher>, AsmError> {
        let mut matches = Vec::new();
        let base = usize::from(inst.offset());
        let count = usize::from(inst.count());
        let prepared = MatchState::prepare(inst, operands)?;
        let mut offset = 0;
        while offset < count {
            // Per-offset match failures just move the scan forward.
            let mut state = prepared.clone();
            match state.match_and_size(self.feats, offset) {
                Ok(()) => {
                    let local = state.enc_idx - base;
                    self.state = Some(state);
                    matches.push(self.clone());
                    offset = local + 1;
                }
                Err(_) => offset += 1,
            }
        }
        self.state = None;
        if matches.is_empty() {
            return Err(AsmError::NoMatch);
        }
        Ok(matches)
    }

    /// Global index of the matched encoding within the encoding table.
    #[must_use]
    pub fn encoding_index(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.enc_idx)
    }

    /// CPU features required by the matched encoding.
    #[must_use]
    pub fn inst_features(&self) -> Feature {
        self.state.as_ref().map_or(0, |s| s.enc.feats)
    }

    /// Effective address size of the matched instruction, in bytes.
    #[must_use]
    pub fn addr_size(&self) -> Option<u8> {
        self.state.as_ref().map(|s| s.addr_size)
    }

    /// Resolved operand size of the matched instruction, in bytes, if any
    /// operand carried one.
    #[must_use]
    pub fn operand_size(&self) -> Option<u8> {
        self.state.as_ref().and_then(|s| s.op_size)
    }

    /// Opcode bytes of the matched encoding.
    #[must_use]
    pub fn opcode(&self) -> &[u8] {
        self.state.as_ref().map_or(&[], |s| s.enc.opcode())
    }

    /// Whether a register operand is merged into the last opcode byte.
    #[must_use]
    pub fn has_opcode_reg_arg(&self) -> bool {
        self.flag(crate::flags::SHORT_ARG)
    }

    /// Whether the matched encoding uses a VEX prefix.
    #[must_use]
    pub fn is_vex(&self) -> bool {
        self.flag(crate::flags::VEX_OP)
    }

    /// Whether the matched encoding uses an XOP prefix.
    #[must_use]
    pub fn is_xop(&self) -> bool {
        self.flag(crate::flags::XOP_OP)
    }

    /// Whether the final opcode byte is emitted in the immediate position.
    #[must_use]
    pub fn has_opcode_in_immediate(&self) -> bool {
        self.flag(crate::flags::IMM_OP)
    }

    fn flag(&self, flag: u32) -> bool {
        self.state.as_ref().is_some_and(|s| s.enc.flags & flag != 0)
    }
}

impl Default for InstMatcher {
    fn default() -> InstMatcher {
        InstMatcher::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feats::AVX;
    use crate::mnemonics::{ADD, MOV, VSHUFPD};
    use crate::operand::{Disp, Imm};
    use crate::reg::{AL, RAX, RBX, XMM0, XMM1, XMM3};

    #[test]
    fn first_match_wins() {
        let mut m = InstMatcher::new();
        m.match_inst(ADD, &[RAX.into(), RBX.into()]).unwrap();
        assert_eq!(m.addr_size(), Some(8));
        assert_eq!(m.operand_size(), Some(8));
        assert!(!m.is_vex());
    }

    #[test]
    fn enumeration_finds_all_encodings() {
        let mut m = InstMatcher::new();
        let found = m.all_matches(ADD, &[RAX.into(), RBX.into()]).unwrap();
        assert_eq!(found.len(), 2); // r*r* and r*v*

        let found = m.all_matches(ADD, &[AL.into(), Imm::I8(1).into()]).unwrap();
        assert_eq!(found.len(), 2); // Abib and rbib

        let found = m
            .all_matches(ADD, &[RAX.into(), Imm::I32(1).into()])
            .unwrap();
        assert_eq!(found.len(), 2); // A*i* and r*i*

        let found = m
            .all_matches(ADD, &[RAX.into(), Mem::base(RBX).into()])
            .unwrap();
        assert_eq!(found.len(), 1); // r*v*
    }

    #[test]
    fn enumeration_matches_restarted_scans() {
        let mut m = InstMatcher::new();
        let found = m.all_matches(MOV, &[RAX.into(), RBX.into()]).unwrap();
        let mut indices = Vec::new();
        let state = MatchState::prepare(MOV, &[RAX.into(), RBX.into()]).unwrap();
        let mut start = 0;
        while let Some((idx, _)) = scan(MOV, &state.args, ALL_FEATURES, start) {
            indices.push(idx);
            start = idx - usize::from(MOV.offset()) + 1;
        }
        let from_all: Vec<usize> = found.iter().map(|m| m.encoding_index().unwrap()).collect();
        assert_eq!(from_all, indices);
    }

    #[test]
    fn feature_mask_is_honored() {
        let mut m = InstMatcher::new();
        let ops = [
            Operand::Reg(XMM0),
            Operand::Reg(XMM1),
            Operand::Reg(XMM3),
            Operand::Imm(Imm::I8(1)),
        ];
        m.match_inst(VSHUFPD, &ops).unwrap();
        assert!(m.is_vex());
        m.disable_feature(AVX);
        assert_eq!(m.match_inst(VSHUFPD, &ops), Err(AsmError::NoMatch));
    }

    #[test]
    fn imm64_requires_explicit_q_slot() {
        let mut m = InstMatcher::new();
        // MOV has an rqiq form.
        m.match_inst(MOV, &[RAX.into(), Imm::I64(i64::MAX).into()])
            .unwrap();
        assert!(m.has_opcode_reg_arg());
        // ADD does not.
        assert_eq!(
            m.match_inst(ADD, &[RAX.into(), Imm::I64(i64::MAX).into()]),
            Err(AsmError::NoMatch)
        );
    }

    #[test]
    fn multiple_memory_operands_are_rejected() {
        let mut m = InstMatcher::new();
        let ops = [Mem::base(RAX).into(), Mem::base(RBX).into()];
        assert_eq!(m.match_inst(MOV, &ops), Err(AsmError::MultipleMemory));
        // Enumeration reports the same error instead of scanning the block.
        assert_eq!(
            m.all_matches(MOV, &ops).unwrap_err(),
            AsmError::MultipleMemory
        );
    }

    #[test]
    fn label_references_match_offset_slots() {
        let mut m = InstMatcher::new();
        m.match_inst(
            crate::mnemonics::JMP,
            &[Operand::Disp(Disp::Label8(0))],
        )
        .unwrap();
        assert_eq!(m.opcode(), &[0xEB]);
        m.match_inst(crate::mnemonics::JMP, &[Operand::Disp(Disp::Label(0))])
            .unwrap();
        assert_eq!(m.opcode(), &[0xE9]);
    }
}
