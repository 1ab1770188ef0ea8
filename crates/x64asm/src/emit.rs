//! Binary emission: prefixes, REX/VEX/XOP, opcode, ModR/M, SIB,
//! displacement, and immediates.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::assembler::{Prefix, Reloc};
use crate::buffer::CodeBuffer;
use crate::error::AsmError;
use crate::flags::*;
use crate::matcher::{Extracted, MatchState};
use crate::operand::{Disp, Imm, Mem, Operand};
use crate::reg::{Reg, RegFamily};

const MOD_DIRECT: u8 = 3;
const MOD_NODISP: u8 = 0;
const MOD_DISP8: u8 = 1;
const MOD_DISP32: u8 = 2;

// ModR/M and SIB share the 2-3-3 bit layout.
#[inline]
fn msib(buf: &mut CodeBuffer, top: u8, mid: u8, low: u8) {
    buf.push(top << 6 | (mid & 7) << 3 | (low & 7));
}

#[inline]
fn scale_shift(scale: u8) -> u8 {
    scale.trailing_zeros() as u8
}

/// Emit the matched instruction into `buf`, appending relocation records
/// for unresolved label references.
///
/// On error the buffer may contain a partial instruction; the caller either
/// treats the error as terminal or restores a saved position.
pub(crate) fn emit_inst(
    buf: &mut CodeBuffer,
    relocs: &mut Vec<Reloc>,
    state: &MatchState,
    prefix: Option<Prefix>,
) -> Result<(), AsmError> {
    let enc = state.enc;
    let flags = enc.flags;
    let mut ext = state.ext;
    let mut op = enc.opcode();

    // 1. User prefix, validated against the encoding's permission flags.
    if let Some(pfx) = prefix {
        if flags & pfx.permission() == 0 {
            return Err(AsmError::PrefixNotAllowed {
                prefix: pfx,
                mnemonic: state.inst.name().to_string(),
            });
        }
        buf.push(pfx.byte());
    }

    // 2. Size prefix derivation.
    let mut pref_size = false;
    let mut rex_w = false;
    let mut vex_l = false;

    const AUTO_MASK: u32 = AUTO_SIZE | AUTO_NO32 | AUTO_REXW | AUTO_VEXL;
    let auto = flags & AUTO_MASK;
    if auto != 0 {
        let Some(op_size) = state.op_size else {
            return Err(AsmError::BadSize {
                detail: "unknown operand size".to_string(),
            });
        };
        match auto {
            AUTO_NO32 => match op_size {
                2 => pref_size = true,
                8 => {}
                _ => {
                    return Err(AsmError::BadSize {
                        detail: alloc::format!(
                            "unsupported operation size for a 64-bit instruction: {}",
                            op_size
                        ),
                    })
                }
            },
            AUTO_REXW => match op_size {
                8 => rex_w = true,
                4 => {}
                _ => {
                    return Err(AsmError::BadSize {
                        detail: "16-bit operands are not supported here".to_string(),
                    })
                }
            },
            AUTO_VEXL => match op_size {
                32 => vex_l = true,
                16 => {}
                _ => {
                    return Err(AsmError::BadSize {
                        detail: alloc::format!("bad vector operation size: {}", op_size),
                    })
                }
            },
            AUTO_SIZE => match op_size {
                2 => pref_size = true,
                8 => rex_w = true,
                4 => {}
                _ => {
                    return Err(AsmError::BadSize {
                        detail: alloc::format!("bad operation size: {}", op_size),
                    })
                }
            },
            // The auto-size selectors are mutually exclusive; a combination
            // is a table bug.
            _ => {
                return Err(AsmError::BadFormat {
                    detail: "conflicting auto-size flags".to_string(),
                })
            }
        }
    }

    pref_size = pref_size || has_flag(flags, WORD_SIZE) || has_flag(flags, PREF_66);
    rex_w = rex_w || has_flag(flags, WITH_REXW);
    vex_l = vex_l || has_flag(flags, WITH_VEXL);
    let pref_addr = state.addr_size == 4 || has_flag(flags, PREF_67);

    let prefix_mod: Option<u8> = if has_flag(flags, PREF_F0) {
        Some(0xF0)
    } else if has_flag(flags, PREF_F2) {
        Some(0xF2)
    } else if has_flag(flags, PREF_F3) {
        Some(0xF3)
    } else {
        None
    };

    let need_rex = check_rex(state, rex_w)?;

    // The last opcode byte of IMM_OP encodings trails the displacement.
    let mut imm_op = None;
    if has_flag(flags, IMM_OP) {
        let (last, rest) = op.split_last().expect("opcode present");
        imm_op = Some(*last);
        op = rest;
    }

    if pref_addr {
        buf.push(0x67);
    }

    if has_flag(flags, VEX_OP) || has_flag(flags, XOP_OP) {
        let pp: u8 = if pref_size {
            1
        } else if prefix_mod == Some(0xF3) {
            2
        } else if prefix_mod == Some(0xF2) {
            3
        } else {
            0
        };
        // The map-select field is stored in the first opcode byte.
        let map_sel = op[0];
        op = &op[1..];
        emit_vex_xop(buf, &ext, flags, map_sel, pp, rex_w, vex_l);
    } else {
        if let Some(pm) = prefix_mod {
            buf.push(pm);
        }
        if pref_size {
            buf.push(0x66);
        }
        if need_rex {
            emit_rex(buf, &ext, rex_w);
        }
    }

    // 3. Opcode; SHORT_ARG encodings fold the rm register into the last
    // opcode byte in place of a ModR/M byte.
    if has_flag(flags, SHORT_ARG) {
        let (last, rest) = op.split_last().expect("opcode present");
        buf.extend_from_slice(rest);
        let rm = ext.m.take();
        let Some(Operand::Reg(r)) = rm else {
            return Err(AsmError::BadFormat {
                detail: "short-form encoding without a register operand".to_string(),
            });
        };
        buf.push(last + (r.num() & 7));
    } else {
        buf.extend_from_slice(op);
    }

    // 4. ModR/M, SIB, and displacement.
    match ext.m {
        Some(Operand::Reg(rm)) => {
            let reg_num = role_reg_num(&ext, enc.reg());
            msib(buf, MOD_DIRECT, reg_num, rm.num());
        }
        Some(Operand::Mem(m)) => {
            let reg_num = role_reg_num(&ext, enc.reg());
            emit_mem(buf, relocs, &m, reg_num, state.addr_size);
        }
        _ => {}
    }

    // 5. Deferred opcode byte.
    if let Some(b) = imm_op {
        buf.push(b);
    }

    // 6. Register-in-immediate: high nibble is the register number, low
    // nibble is fused from the first pending immediate.
    let mut imms_from = 0;
    if let Some(Operand::Reg(ireg)) = ext.i {
        let mut b = ireg.num() << 4;
        if !ext.imms.is_empty() {
            let &Operand::Imm(Imm::I8(v)) = ext.imms.get(0) else {
                return Err(AsmError::BadFormat {
                    detail: "register-in-immediate requires a leading 8-bit immediate"
                        .to_string(),
                });
            };
            b |= (v as u8) & 0xf;
            imms_from = 1;
        }
        buf.push(b);
    }

    // 7. Immediates and relative/label displacements, in pattern order.
    for i in imms_from..ext.imms.len() {
        match *ext.imms.get(i) {
            Operand::Imm(imm) => match imm {
                Imm::I8(v) => buf.write_i8(v),
                Imm::I16(v) => buf.write_i16(v),
                Imm::I32(v) => buf.write_i32(v),
                Imm::I64(v) => buf.write_i64(v),
            },
            Operand::Disp(d) if d.is_rel() => match d.width() {
                1 => buf.write_i8(d.value() as i8),
                2 => buf.write_i16(d.value() as i16),
                _ => buf.write_i32(d.value()),
            },
            Operand::Disp(d) => {
                // Label reference: zero placeholder now, patch at finalize.
                let width = d.width();
                match width {
                    1 => buf.write_i8(0),
                    2 => buf.write_i16(0),
                    4 => buf.write_i32(0),
                    _ => {
                        return Err(AsmError::BadSize {
                            detail: "label displacements wider than 32 bits are not supported"
                                .to_string(),
                        })
                    }
                }
                push_reloc(relocs, buf, d, width);
            }
            _ => {
                return Err(AsmError::BadFormat {
                    detail: "unexpected operand in the immediate queue".to_string(),
                })
            }
        }
    }

    Ok(())
}

fn role_reg_num(ext: &Extracted, enc_reg: Option<u8>) -> u8 {
    match ext.r {
        Some(Operand::Reg(r)) => r.num(),
        _ => enc_reg.unwrap_or(0),
    }
}

fn push_reloc(relocs: &mut Vec<Reloc>, buf: &CodeBuffer, d: Disp, width: u8) {
    if let Some(label) = d.label_id() {
        relocs.push(Reloc {
            loc: (buf.len() - usize::from(width)) as u32,
            disp: d.value(),
            label,
            width,
        });
    }
}

/// Scan the operands for REX requirements: extended registers and width-1
/// SPL/BPL/SIL/DIL force a REX prefix; high-byte registers forbid one.
fn check_rex(state: &MatchState, rex_w: bool) -> Result<bool, AsmError> {
    let p = state.enc.format();
    let mut requires_rex = rex_w;
    let mut requires_no_rex = false;

    for (ai, arg) in state.args.iter().enumerate() {
        let t = p[ai * 2];
        if !t.is_ascii_lowercase() {
            continue;
        }
        match arg {
            Operand::Reg(r) => {
                if r.family() == RegFamily::HighByte {
                    requires_no_rex = true;
                } else if r.is_extended() || (r.width() == 1 && matches!(r.num(), 4..=7)) {
                    requires_rex = true;
                }
            }
            Operand::Mem(m) => {
                requires_rex = requires_rex
                    || m.base.is_some_and(Reg::is_extended)
                    || m.index.is_some_and(Reg::is_extended);
            }
            _ => {}
        }
    }

    if requires_rex && requires_no_rex {
        return Err(AsmError::BadSize {
            detail: "a high-byte register cannot be combined with extended registers or a \
                     64-bit operand size"
                .to_string(),
        });
    }
    Ok(requires_rex)
}

fn emit_rex(buf: &mut CodeBuffer, ext: &Extracted, rex_w: bool) {
    let mut reg_n = 0u8;
    let mut index_n = 0u8;
    let mut base_n = 0u8;

    if let Some(Operand::Reg(r)) = ext.r {
        reg_n = r.num();
    }
    match ext.m {
        Some(Operand::Reg(r)) => base_n = r.num(),
        Some(Operand::Mem(m)) => {
            base_n = m.base.map_or(0, Reg::num);
            index_n = m.index.map_or(0, Reg::num);
        }
        _ => {}
    }

    let w = u8::from(rex_w);
    buf.push(0x40 | w << 3 | (reg_n & 8) >> 1 | (index_n & 8) >> 2 | (base_n & 8) >> 3);
}

fn emit_vex_xop(
    buf: &mut CodeBuffer,
    ext: &Extracted,
    flags: u32,
    map_sel: u8,
    pp: u8,
    rex_w: bool,
    vex_l: bool,
) {
    let mut reg_n = 0u8;
    let mut index_n = 0u8;
    let mut base_n = 0u8;
    let mut vvvv_n = 0u8;

    if let Some(Operand::Reg(r)) = ext.r {
        reg_n = r.num();
    }
    match ext.m {
        Some(Operand::Reg(r)) => base_n = r.num(),
        Some(Operand::Mem(m)) => {
            base_n = m.base.map_or(0, Reg::num);
            index_n = m.index.map_or(0, Reg::num);
        }
        _ => {}
    }
    if let Some(Operand::Reg(r)) = ext.v {
        vvvv_n = r.num();
    }

    let b1 = (map_sel & 0x1f) | (!reg_n & 8) << 4 | (!index_n & 8) << 3 | (!base_n & 8) << 2;
    let b2 = (pp & 3) | u8::from(rex_w) << 7 | (!vvvv_n & 0xf) << 3 | u8::from(vex_l) << 2;

    // Collapse to the two-byte VEX form when X, B, and W are all default.
    if has_flag(flags, VEX_OP) && b1 & 0x7f == 0x61 && b2 & 0x80 == 0 {
        buf.push2(0xC5, (b1 & 0x80) | (b2 & 0x7f));
        return;
    }

    buf.push(if has_flag(flags, VEX_OP) { 0xC4 } else { 0x8F });
    buf.push2(b1, b2);
}

/// Indirect ModR/M (+SIB) addressing for a sanitized memory operand.
fn emit_mem(buf: &mut CodeBuffer, relocs: &mut Vec<Reloc>, m: &Mem, reg_num: u8, addr_size: u8) {
    let mode_vsib = m.has_vsib_index();
    let mode_16 = addr_size == 2;
    let mode_rip = m.base.is_some_and(|b| b.family() == RegFamily::Rip);
    let rbp_base = m
        .base
        .is_some_and(|b| b.family() == RegFamily::Legacy && matches!(b.num(), 5 | 13));

    if mode_vsib {
        // A SIB byte is always required; a missing base becomes the RBP
        // escape with a mandatory dword displacement.
        let (base_n, mode) = match m.base {
            Some(b) => {
                if m.disp.is_some_and(|d| d.width() != 1) {
                    (b.num(), MOD_DISP32)
                } else {
                    (b.num(), MOD_DISP8)
                }
            }
            None => (5, MOD_NODISP),
        };
        msib(buf, mode, reg_num, 4);
        msib(buf, scale_shift(m.scale), m.index.map_or(0, Reg::num), base_n);

        match m.disp {
            Some(d) if mode == MOD_DISP8 => buf.write_i8(d.value() as i8),
            Some(d) => buf.write_i32(d.value()),
            // A base without a requested displacement still encodes disp8=0.
            None if mode == MOD_DISP8 => buf.write_i8(0),
            None => buf.write_i32(0),
        }
    } else if mode_16 {
        // The base/index combination was folded into the base register.
        let mode = match m.disp {
            Some(d) if d.width() == 1 => MOD_DISP8,
            Some(_) => MOD_DISP32,
            None if rbp_base => MOD_DISP8,
            None => MOD_NODISP,
        };
        msib(buf, mode, reg_num, m.base.map_or(0, Reg::num));
        match m.disp {
            Some(d) if mode == MOD_DISP8 => buf.write_i8(d.value() as i8),
            Some(d) => buf.write_i16(d.value() as i16),
            None if mode == MOD_DISP8 => buf.write_i8(0),
            None => {}
        }
    } else if mode_rip {
        msib(buf, MOD_NODISP, reg_num, 5);
        match m.disp {
            Some(d) => {
                buf.write_i32(d.value());
                push_reloc(relocs, buf, d, 4);
            }
            None => buf.write_i32(0),
        }
    } else {
        let no_base = m.base.is_none();
        let mode = if rbp_base && m.disp.is_none() {
            // An RBP-slot base cannot be encoded without a displacement.
            MOD_DISP8
        } else if m.disp.is_none() || no_base {
            // No-disp mode; a missing base still requires a dword
            // displacement after the SIB byte.
            MOD_NODISP
        } else if m.disp.is_some_and(|d| d.width() == 1) {
            MOD_DISP8
        } else {
            MOD_DISP32
        };

        if let Some(index) = m.index {
            // An index escapes into the SIB byte; RBP stands in when there
            // is no base.
            let base_n = m.base.map_or(5, Reg::num);
            msib(buf, mode, reg_num, 4);
            msib(buf, scale_shift(m.scale), index.num(), base_n);
        } else if let Some(base) = m.base {
            msib(buf, mode, reg_num, base.num());
        } else {
            msib(buf, mode, reg_num, 4);
            msib(buf, 0, 4, 5);
        }

        match m.disp {
            Some(d) => {
                let width = if mode == MOD_DISP8 {
                    buf.write_i8(d.value() as i8);
                    1
                } else {
                    buf.write_i32(d.value());
                    4
                };
                push_reloc(relocs, buf, d, width);
            }
            None if no_base => buf.write_i32(0),
            None if mode == MOD_DISP8 => buf.write_i8(0),
            None => {}
        }
    }
}
