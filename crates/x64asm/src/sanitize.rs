//! Memory-operand legalization.
//!
//! Validates that a base/index/scale/displacement combination is encodable,
//! rewrites it into the canonical form the emitter expects, and derives the
//! effective address size. Never emits bytes.

use alloc::format;

use crate::error::AsmError;
use crate::matcher::MatchState;
use crate::operand::{Disp, Mem};
use crate::reg::{Reg, RegFamily, AX, BP, BX, CX, DI, DX, ESP, RSP, SI, SP};

fn bad(detail: alloc::string::String) -> AsmError {
    AsmError::BadAddressing { detail }
}

/// Sanitize the instruction's memory operand (if present), fix up its
/// displacement, and return the effective address size in bytes, or -1 when
/// the size cannot be determined (pure displacement, or VSIB without base).
pub(crate) fn sanitize_mem_arg(state: &mut MatchState) -> Result<i8, AsmError> {
    let Some(mem) = state.mem_mut() else {
        return Ok(-1);
    };
    let addr_size = sanitize_mem(mem)?;

    let rip_relative = mem.base.is_some_and(|r| r.family() == RegFamily::Rip)
        || mem.index.is_some_and(|r| r.family() == RegFamily::Rip);
    if rip_relative {
        // RIP-relative displacements are always emitted as signed 32-bit
        // values; widen narrower ones, preserving label references.
        match mem.disp {
            None => mem.disp = Some(Disp::Rel32(0)),
            Some(d) if d.width() != 4 => {
                mem.disp = Some(d.resized(4).expect("widening to 4 bytes"));
            }
            _ => {}
        }
    } else if let Some(d) = mem.disp {
        let width = d.width();
        if addr_size == 2 {
            if width != 1 && width != 2 {
                return Err(bad(
                    "only 8/16-bit displacements are allowed with 16-bit addressing".into(),
                ));
            }
        } else if width != 1 && width != 4 {
            return Err(bad(
                "only 8/32-bit displacements are allowed with 64-bit addressing".into(),
            ));
        }
    }
    Ok(addr_size)
}

/// Validate the base/index combination, canonicalize it, and return the
/// effective address size (-1 when indeterminate).
fn sanitize_mem(mem: &mut Mem) -> Result<i8, AsmError> {
    if mem.scale == 0 {
        mem.scale = 1;
    }

    // Discover the addressing size, family, and mode. The size can be 16,
    // 32, or 64-bit; the mode legacy, RIP-relative, or VSIB.
    let size;
    let family;
    let mut vsib_mode = false;
    match (mem.base, mem.index) {
        (None, None) => return Ok(-1),
        (Some(b), None) => {
            size = b.width();
            family = b.family();
        }
        (None, Some(i)) => {
            size = i.width();
            family = i.family();
        }
        (Some(b), Some(i)) => {
            if b.family() == i.family() {
                if b.width() != i.width() {
                    return Err(bad(format!(
                        "differing base/index register sizes: {}/{}",
                        b.width(),
                        i.width()
                    )));
                }
                size = b.width();
                family = b.family();
            } else if b.is_vector() {
                vsib_mode = true;
                size = i.width();
                family = i.family();
            } else if i.is_vector() {
                vsib_mode = true;
                size = b.width();
                family = b.family();
            } else {
                return Err(bad(
                    "base/index register combination is not supported".into(),
                ));
            }
        }
    }

    if mem.size == 0 {
        mem.size = size;
    }

    // Filter out combinations that are impossible to encode.
    match family {
        RegFamily::Rip => {
            if mem.base.is_some() && mem.index.is_some() {
                return Err(bad(
                    "base and index registers are not supported for RIP-relative addressing"
                        .into(),
                ));
            }
        }
        RegFamily::Legacy => match size {
            4 | 8 => {}
            2 => {
                if vsib_mode {
                    return Err(bad("16-bit addressing is not supported with VSIB".into()));
                }
            }
            _ => {
                return Err(bad(format!(
                    "unsupported address size for general-purpose register: {}",
                    size
                )))
            }
        },
        RegFamily::Xmm | RegFamily::Ymm => {
            if mem.base.is_some() && mem.index.is_some() {
                return Err(bad(
                    "base and index registers cannot both be vector registers".into(),
                ));
            }
        }
        _ => {
            return Err(bad(format!(
                "unsupported register family for addressing: {:?}",
                family
            )))
        }
    }

    if family == RegFamily::Rip {
        if mem.scale != 1 {
            return Err(bad(
                "scale is not supported for RIP-relative addressing".into(),
            ));
        }
        if mem.index.is_some() {
            mem.base = mem.index.take();
        }
        return Ok(size as i8);
    }

    // Vector register without a general-purpose base: canonicalize the
    // vector into the index slot. The address size stays indeterminate.
    if family == RegFamily::Xmm || family == RegFamily::Ymm {
        if mem.index.is_none() {
            mem.index = mem.base.take();
            mem.scale = 1;
        }
        check_scale(mem.scale)?;
        return Ok(-1);
    }

    // VSIB with a general-purpose register: the GPR must end up as base.
    if vsib_mode {
        if mem.base.is_some_and(Reg::is_vector) {
            if mem.scale == 1 {
                core::mem::swap(&mut mem.base, &mut mem.index);
            } else {
                return Err(bad(
                    "VSIB addressing requires a general-purpose base register".into(),
                ));
            }
        }
        check_scale(mem.scale)?;
        return Ok(size as i8);
    }

    // 16-bit legacy addressing: the legal base/index pairs collapse into a
    // composite ModR/M.rm value, carried here as a virtual base register.
    if size == 2 {
        if mem.index.is_some() && mem.scale != 1 {
            return Err(bad(
                "16-bit addressing does not support a scaled index".into(),
            ));
        }
        if mem.base.is_none() {
            mem.base = mem.index.take();
        }
        let bn = mem.base.map(Reg::num);
        let inx = mem.index.map(Reg::num);
        let composite = match (bn, inx) {
            (Some(3), Some(6)) | (Some(6), Some(3)) => Some(0), // BX+SI
            (Some(3), Some(7)) | (Some(7), Some(3)) => Some(1), // BX+DI
            (Some(5), Some(6)) | (Some(6), Some(5)) => Some(2), // BP+SI
            (Some(5), Some(7)) | (Some(7), Some(5)) => Some(3), // BP+DI
            (Some(6), None) => Some(4),                         // SI
            (Some(7), None) => Some(5),                         // DI
            (Some(5), None) => Some(6),                         // BP
            (Some(3), None) => Some(7),                         // BX
            _ => None,
        };
        let Some(rm) = composite else {
            return Err(bad(
                "base/index register combination is not encodable with 16-bit addressing".into(),
            ));
        };
        mem.base = Some([AX, CX, DX, BX, SP, BP, SI, DI][rm]);
        mem.index = None;
        return Ok(2);
    }

    // Normal 32/64-bit addressing.

    // A scaled index without a base can shed one multiplication step:
    // [r*2] becomes [r+r*1], [r*3] becomes [r+r*2], and so on.
    if mem.base.is_none() && mem.index.is_some() && matches!(mem.scale, 2 | 3 | 5 | 9) {
        mem.base = mem.index;
        mem.scale -= 1;
    }
    check_scale(mem.scale)?;

    // RSP cannot be encoded in the SIB index field. Swap it into the base
    // when the swap preserves the address; the canonical SIB-escape form
    // (RSP/R12 base with an injected RSP index) is left untouched.
    if let Some(i) = mem.index {
        if i.family() == RegFamily::Legacy && i.num() == RSP.num() {
            let base_sp_slot = mem
                .base
                .is_some_and(|b| b.family() == RegFamily::Legacy && matches!(b.num(), 4 | 12));
            if base_sp_slot && mem.scale == 1 {
                // already canonical
            } else if mem.scale == 1 {
                mem.index = mem.base;
                mem.base = Some(i);
            } else {
                return Err(bad("RSP cannot be used as index".into()));
            }
        }
    }

    // RSP or R12 as base with no index: inject an RSP index to force the
    // SIB escape (an RSP index encodes "no index").
    if mem.index.is_none() {
        if let Some(b) = mem.base {
            if b.family() == RegFamily::Legacy && (b.num() == 4 || b.num() == 12) {
                mem.scale = 1;
                mem.index = Some(match size {
                    2 => SP,
                    4 => ESP,
                    _ => RSP,
                });
            }
        }
    }

    // An RBP or R13 base with no displacement needs a synthesized zero
    // disp8, which the emitter handles.
    Ok(size as i8)
}

fn check_scale(scale: u8) -> Result<(), AsmError> {
    if matches!(scale, 1 | 2 | 4 | 8) {
        Ok(())
    } else {
        Err(bad(format!("scale must be 1, 2, 4, or 8: {}", scale)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::{EAX, R12, R13, RAX, RBP, RBX, RCX, RDX, RIP, XMM1, YMM2};

    fn sanitized(mut mem: Mem) -> (Mem, i8) {
        let size = sanitize_mem(&mut mem).expect("sanitize");
        (mem, size)
    }

    #[test]
    fn plain_base() {
        let (m, size) = sanitized(Mem::base(RBX));
        assert_eq!(size, 8);
        assert_eq!(m.base, Some(RBX));
        assert_eq!(m.index, None);
        assert_eq!(m.size, 8);
    }

    #[test]
    fn base_and_index() {
        let (m, size) = sanitized(Mem::base(RBX).index(RCX, 2));
        assert_eq!(size, 8);
        assert_eq!(m.base, Some(RBX));
        assert_eq!(m.index, Some(RCX));
        assert_eq!(m.scale, 2);
    }

    #[test]
    fn mixed_widths_are_rejected() {
        let mut m = Mem::base(RBX).index(EAX, 1);
        assert!(sanitize_mem(&mut m).is_err());
    }

    #[test]
    fn scale_zero_defaults_to_one() {
        let (m, _) = sanitized(Mem::base(RBX).index(RCX, 0));
        assert_eq!(m.scale, 1);
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let mut m = Mem::base(RBX).index(RCX, 3);
        assert!(sanitize_mem(&mut m).is_err());
    }

    #[test]
    fn scaled_index_without_base_is_optimized() {
        let (m, _) = sanitized(Mem::default().index(RCX, 2));
        assert_eq!(m.base, Some(RCX));
        assert_eq!(m.index, Some(RCX));
        assert_eq!(m.scale, 1);

        let (m, _) = sanitized(Mem::default().index(RCX, 3));
        assert_eq!(m.base, Some(RCX));
        assert_eq!(m.scale, 2);

        // Power-of-two scales keep the RBP-escape form.
        let (m, _) = sanitized(Mem::default().index(RCX, 4));
        assert_eq!(m.base, None);
        assert_eq!(m.scale, 4);
    }

    #[test]
    fn rsp_index_swaps_into_base() {
        let (m, _) = sanitized(Mem::base(RAX).index(RSP, 1));
        assert_eq!(m.base, Some(RSP));
        assert_eq!(m.index, Some(RAX));

        let mut m = Mem::base(RAX).index(RSP, 2);
        assert!(sanitize_mem(&mut m).is_err());
    }

    #[test]
    fn rsp_and_r12_bases_get_sib_escape() {
        let (m, _) = sanitized(Mem::base(RSP));
        assert_eq!(m.base, Some(RSP));
        assert_eq!(m.index, Some(RSP));

        let (m, _) = sanitized(Mem::base(R12));
        assert_eq!(m.base, Some(R12));
        assert_eq!(m.index, Some(RSP));
    }

    #[test]
    fn sanitize_is_idempotent_on_canonical_forms() {
        for mem in [
            Mem::base(RBX),
            Mem::base(RBX).index(RCX, 2).disp8(8),
            Mem::base(RSP),
            Mem::base(R12),
            Mem::base(RBP),
            Mem::base(R13),
            Mem::absolute(16),
            Mem::base(RDX).index(XMM1, 4),
        ] {
            let (once, _) = sanitized(mem);
            let (twice, _) = sanitized(once);
            assert_eq!(once, twice, "{:?}", mem);
        }
    }

    #[test]
    fn vector_only_moves_to_index() {
        let (m, size) = sanitized(Mem::base(XMM1));
        assert_eq!(size, -1);
        assert_eq!(m.base, None);
        assert_eq!(m.index, Some(XMM1));
        assert_eq!(m.scale, 1);
    }

    #[test]
    fn vsib_swaps_vector_into_index() {
        let (m, size) = sanitized(Mem::base(XMM1).index(RAX, 1));
        assert_eq!(size, 8);
        assert_eq!(m.base, Some(RAX));
        assert_eq!(m.index, Some(XMM1));

        let mut m = Mem::base(YMM2).index(RAX, 4);
        assert!(sanitize_mem(&mut m).is_err());
    }

    #[test]
    fn two_vector_registers_are_rejected() {
        let mut m = Mem::base(XMM1).index(YMM2, 1);
        assert!(sanitize_mem(&mut m).is_err());
        let mut m = Mem::base(XMM1).index(XMM1, 1);
        assert!(sanitize_mem(&mut m).is_err());
    }

    #[test]
    fn rip_relative() {
        let (m, size) = sanitized(Mem::rip());
        assert_eq!(size, 8);
        assert_eq!(m.base, Some(RIP));

        let mut m = Mem::rip().index(RAX, 1);
        assert!(sanitize_mem(&mut m).is_err());
    }
}
