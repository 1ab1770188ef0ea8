//! Argument resizing: pin unknown operand widths against the matched
//! pattern and convert immediates and displacements to their slot widths.

use alloc::string::ToString;

use crate::error::AsmError;
use crate::matcher::{pattern_len, MatchState};
use crate::operand::Operand;
use crate::table::mnemonics::{MOVSX, MOVSXD, MOVZX};

fn bad_size(detail: &str) -> AsmError {
    AsmError::BadSize {
        detail: detail.to_string(),
    }
}

/// Reconcile operand widths with the matched pattern. Returns the resolved
/// operation size, or `None` when no register or memory operand carries one.
pub(crate) fn resize_args(state: &mut MatchState) -> Result<Option<u8>, AsmError> {
    // A VSIB memory operand takes its width from the vector index.
    if let Some(mem) = state.mem_mut() {
        if let Some(index) = mem.index {
            if index.is_vector() {
                mem.size = index.width();
            }
        }
    }

    // Widening and narrowing loads take their operation size from the
    // register operand alone.
    let widening = state.inst == MOVZX || state.inst == MOVSX || state.inst == MOVSXD;

    let mut has_arg = false;
    let mut op_size: Option<u8> = None;
    let mut imm_size: Option<u8> = None;
    for arg in state.args.iter() {
        let (sized, width) = match arg {
            Operand::Reg(r) => (true, Some(r.width())),
            // A width of 0 supplies no concrete size; the operation size
            // comes from the other operands.
            Operand::Mem(m) => (
                true,
                if widening || m.size == 0 {
                    None
                } else {
                    Some(m.size)
                },
            ),
            Operand::Imm(imm) => (false, Some(imm.width())),
            Operand::Disp(disp) => (false, Some(disp.width())),
        };
        let Some(width) = width else { continue };
        if sized {
            has_arg = true;
            if op_size.is_some_and(|s| s != width) {
                return Err(bad_size("conflicting operand sizes"));
            }
            op_size = Some(width);
        } else {
            if imm_size.is_some_and(|s| s != width) {
                return Err(bad_size("conflicting immediate sizes"));
            }
            imm_size = Some(width);
        }
    }

    if let Some(op) = op_size {
        // Wildcard immediates cap at 32 bits; 64-bit immediates only exist
        // in explicit `q` slots.
        let ref_imm = op.min(4);
        if imm_size.is_some_and(|s| s > ref_imm) {
            return Err(bad_size("immediate size exceeds the operation size"));
        }
        imm_size = Some(ref_imm);
    } else if has_arg {
        return Err(bad_size("unknown operand size"));
    }

    // Convert each immediate and displacement to its slot width.
    let p = *state.enc.format();
    let plen = pattern_len(&p);
    for ai in 0..plen / 2 {
        let (t, sz) = (p[ai * 2], p[ai * 2 + 1]);
        let size = if sz == b'b' {
            1
        } else if sz == b'w' {
            2
        } else if t == b'k' || sz == b'd' {
            4
        } else if t == b'l' || sz == b'q' {
            8
        } else if sz == b'f' {
            6
        } else if sz == b'p' {
            10
        } else if sz == b'o' {
            16
        } else if sz == b'h' {
            32
        } else if sz == b'0' && t == b'i' {
            imm_size.unwrap_or(0)
        } else if sz == b'0' {
            op_size.unwrap_or(0)
        } else if sz == b'1' {
            1 // placeholder
        } else {
            return Err(AsmError::BadFormat {
                detail: "unexpected arg-pattern combination".to_string(),
            });
        };

        match state.args.get_mut(ai) {
            Operand::Imm(imm) => {
                let cur = *imm;
                if matches!(size, 1 | 2 | 4 | 8) && cur.width() != size {
                    *imm = cur.resized(size);
                }
            }
            Operand::Disp(disp) => {
                let cur = *disp;
                if cur.width() != size {
                    *disp = cur
                        .resized(size)
                        .ok_or_else(|| bad_size("unexpected 64-bit displacement"))?;
                }
            }
            _ => {}
        }
    }

    Ok(op_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feats::ALL_FEATURES;
    use crate::mnemonics::{ADD, ENTER, JMP, MOV, MOVZX};
    use crate::operand::{Disp, Imm, Mem};
    use crate::reg::{AX, RAX, RBX};

    fn sized(
        inst: crate::inst::Inst,
        ops: &[Operand],
    ) -> Result<(MatchState, Option<u8>), AsmError> {
        let mut st = MatchState::prepare(inst, ops)?;
        st.match_and_size(ALL_FEATURES, 0)?;
        Ok((st.clone(), st.op_size))
    }

    #[test]
    fn op_size_from_registers() {
        let (_, op) = sized(ADD, &[RAX.into(), RBX.into()]).unwrap();
        assert_eq!(op, Some(8));
    }

    #[test]
    fn immediates_widen_to_their_slot() {
        // MOV AX, imm8 matches a wildcard-immediate form; the immediate is
        // widened to the 16-bit operation size.
        let (st, op) = sized(MOV, &[AX.into(), Imm::I8(1).into()]).unwrap();
        assert_eq!(op, Some(2));
        assert_eq!(*st.args.get(1), Operand::Imm(Imm::I16(1)));
    }

    #[test]
    fn wildcard_immediates_cap_at_32_bits() {
        let (st, op) = sized(ADD, &[RAX.into(), Imm::I32(0x1000).into()]).unwrap();
        assert_eq!(op, Some(8));
        assert_eq!(*st.args.get(1), Operand::Imm(Imm::I32(0x1000)));
    }

    #[test]
    fn conflicting_register_sizes_are_rejected() {
        assert!(matches!(
            sized(ADD, &[RAX.into(), AX.into()]),
            Err(AsmError::BadSize { .. })
        ));
    }

    #[test]
    fn widening_loads_take_register_width() {
        let (_, op) = sized(MOVZX, &[RAX.into(), Mem::base(RBX).size(1).into()]).unwrap();
        assert_eq!(op, Some(8));
    }

    #[test]
    fn displacements_resize() {
        let (st, _) = sized(JMP, &[Operand::Disp(Disp::Rel8(4))]).unwrap();
        assert_eq!(*st.args.get(0), Operand::Disp(Disp::Rel8(4)));

        let (st, _) = sized(JMP, &[Operand::Disp(Disp::Rel16(300))]).unwrap();
        assert_eq!(*st.args.get(0), Operand::Disp(Disp::Rel32(300)));
    }

    #[test]
    fn fixed_slots_resize_two_immediates() {
        let ops = [
            Operand::Imm(Imm::I8(16)),
            Operand::Imm(Imm::I8(0)),
        ];
        let (st, _) = sized(ENTER, &ops).unwrap();
        assert_eq!(*st.args.get(0), Operand::Imm(Imm::I16(16)));
        assert_eq!(*st.args.get(1), Operand::Imm(Imm::I8(0)));
    }
}
