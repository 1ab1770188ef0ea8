//! Role extraction: assign each operand to its encoding role.
//!
//! A memory or register-or-memory operand goes into ModR/M.rm. A segment,
//! control, or debug register always occupies ModR/M.reg. Otherwise the
//! default operand order is:
//!
//! - no encoding flag: `m`, `rm`, `rvm`, `rvim`
//! - `ENC_MR`:         `mr`, `rmv`, `rvmi`
//! - `ENC_VM`:         `vm`, `mvr`
//!
//! The memory operand's position selects the same permutations where a flag
//! is not set. Fixed-register pattern letters are implied by the opcode and
//! occupy no role; immediates and displacements are queued in pattern order
//! for the emitter's tail.

use crate::flags::{has_flag, ENC_MR, ENC_VM};
use crate::matcher::{Extracted, MatchState};
use crate::operand::Operand;

pub(crate) fn extract_args(state: &mut MatchState) {
    let p = state.enc.format();
    let flags = state.enc.flags;
    let mut ext = Extracted::default();
    let mut regs: [Option<Operand>; 4] = [None; 4];
    let mut regc = 0;
    let mut mem_arg: Option<usize> = None;
    let mut reg_arg: Option<usize> = None;

    for (ai, arg) in state.args.iter().enumerate() {
        match p[ai * 2] {
            b'm' | b'u' | b'v' | b'w' | b'k' | b'l' => {
                debug_assert!(mem_arg.is_none(), "multiple memory roles in pattern");
                mem_arg = Some(regc);
                regs[regc] = Some(*arg);
                regc += 1;
            }
            b'f' | b'x' | b'r' | b'y' | b'b' => {
                regs[regc] = Some(*arg);
                regc += 1;
            }
            b'c' | b'd' | b's' => {
                debug_assert!(reg_arg.is_none(), "multiple reg-only roles in pattern");
                reg_arg = Some(regc);
                regs[regc] = Some(*arg);
                regc += 1;
            }
            b'i' | b'o' => ext.imms.push(*arg),
            // Fixed registers are implied by the opcode.
            _ => {}
        }
    }

    if let Some(ra) = reg_arg {
        if ra == 0 {
            ext.r = regs[0];
            ext.m = regs[1];
        } else {
            ext.m = regs[0];
            ext.r = regs[1];
        }
        state.ext = ext;
        return;
    }

    match regc {
        0 => {}
        1 => ext.m = regs[0],
        2 => {
            if has_flag(flags, ENC_MR) || mem_arg == Some(0) {
                ext.m = regs[0];
                ext.r = regs[1];
            } else if has_flag(flags, ENC_VM) {
                ext.v = regs[0];
                ext.m = regs[1];
            } else {
                ext.r = regs[0];
                ext.m = regs[1];
            }
        }
        3 => {
            if mem_arg == Some(1) {
                ext.r = regs[0];
                ext.m = regs[1];
                ext.v = regs[2];
            } else if has_flag(flags, ENC_VM) || mem_arg == Some(0) {
                ext.m = regs[0];
                ext.v = regs[1];
                ext.r = regs[2];
            } else {
                ext.r = regs[0];
                ext.v = regs[1];
                ext.m = regs[2];
            }
        }
        _ => {
            if mem_arg == Some(2) {
                ext.r = regs[0];
                ext.v = regs[1];
                ext.m = regs[2];
                ext.i = regs[3];
            } else {
                ext.r = regs[0];
                ext.v = regs[1];
                ext.i = regs[2];
                ext.m = regs[3];
            }
        }
    }

    state.ext = ext;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feats::ALL_FEATURES;
    use crate::mnemonics::{ADD, MOV, VGATHERDPS, VSHUFPD};
    use crate::operand::{Imm, Mem};
    use crate::reg::{RAX, RBX, RDX, XMM0, XMM1, XMM2};

    fn extracted(inst: crate::inst::Inst, ops: &[Operand]) -> Extracted {
        let mut st = MatchState::prepare(inst, ops).unwrap();
        st.match_and_size(ALL_FEATURES, 0).unwrap();
        st.ext
    }

    #[test]
    fn two_registers_use_mr_order() {
        // ADD r, r selects the 0x01 ENC_MR form: rm first, reg second.
        let ext = extracted(ADD, &[RAX.into(), RBX.into()]);
        assert_eq!(ext.m, Some(Operand::Reg(RAX)));
        assert_eq!(ext.r, Some(Operand::Reg(RBX)));
        assert_eq!(ext.v, None);
    }

    #[test]
    fn memory_position_selects_rm() {
        let ext = extracted(MOV, &[Mem::base(RAX).into(), RBX.into()]);
        assert!(matches!(ext.m, Some(Operand::Mem(_))));
        assert_eq!(ext.r, Some(Operand::Reg(RBX)));
    }

    #[test]
    fn three_registers_use_reg_vvvv_rm() {
        let ext = extracted(
            VSHUFPD,
            &[
                XMM0.into(),
                XMM1.into(),
                Mem::base(RBX).size(16).into(),
                Imm::I8(2).into(),
            ],
        );
        assert_eq!(ext.r, Some(Operand::Reg(XMM0)));
        assert_eq!(ext.v, Some(Operand::Reg(XMM1)));
        assert!(matches!(ext.m, Some(Operand::Mem(_))));
        assert_eq!(ext.imms.len(), 1);
    }

    #[test]
    fn memory_in_middle_permutes_to_reg_rm_vvvv() {
        let ext = extracted(
            VGATHERDPS,
            &[
                XMM0.into(),
                Mem::base(RDX).index(XMM1, 1).into(),
                XMM2.into(),
            ],
        );
        assert_eq!(ext.r, Some(Operand::Reg(XMM0)));
        assert!(matches!(ext.m, Some(Operand::Mem(_))));
        assert_eq!(ext.v, Some(Operand::Reg(XMM2)));
    }

    #[test]
    fn immediates_queue_in_pattern_order() {
        let ext = extracted(ADD, &[RAX.into(), Imm::I8(7).into()]);
        assert_eq!(ext.imms.len(), 1);
        assert_eq!(*ext.imms.get(0), Operand::Imm(Imm::I8(7)));
    }
}
