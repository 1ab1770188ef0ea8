//! Instruction operands: registers, memory references, immediates, relative
//! displacements, and label references.

use crate::reg::Reg;

/// An immediate operand, 1 to 8 bytes wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Imm {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
}

impl Imm {
    /// Width of the immediate in bytes.
    #[inline]
    #[must_use]
    pub fn width(self) -> u8 {
        match self {
            Imm::I8(_) => 1,
            Imm::I16(_) => 2,
            Imm::I32(_) => 4,
            Imm::I64(_) => 8,
        }
    }

    /// The immediate value, sign-extended to 64 bits.
    #[inline]
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Imm::I8(v) => i64::from(v),
            Imm::I16(v) => i64::from(v),
            Imm::I32(v) => i64::from(v),
            Imm::I64(v) => v,
        }
    }

    /// Re-cast to the given width, preserving the signed value where it
    /// fits and truncating where it does not. Callers are responsible for
    /// ensuring narrowed values fit.
    #[must_use]
    pub(crate) fn resized(self, width: u8) -> Imm {
        let v = self.value();
        match width {
            1 => Imm::I8(v as i8),
            2 => Imm::I16(v as i16),
            4 => Imm::I32(v as i32),
            _ => Imm::I64(v),
        }
    }
}

/// A relative displacement or label reference.
///
/// `Rel*` variants are resolved displacements from the current instruction
/// pointer. `Label*` variants are patched during
/// [`finalize`](crate::Assembler::finalize): a bare [`Disp::Label`] defaults
/// to a 4-byte slot, `Label8`/`Label16`/`Label32` force a slot width, and
/// [`Disp::LabelDisp`] adds a constant bias to the patched offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disp {
    Rel8(i8),
    Rel16(i16),
    Rel32(i32),
    /// Label reference with an unspecified (4-byte) displacement slot.
    Label(u16),
    /// Label reference patched into an 8-bit slot.
    Label8(u16),
    /// Label reference patched into a 16-bit slot.
    Label16(u16),
    /// Label reference patched into a 32-bit slot.
    Label32(u16),
    /// Label reference with an additional displacement added when patching.
    LabelDisp { label: u16, disp: i32, width: u8 },
}

impl Disp {
    /// Width of the displacement slot in bytes.
    #[inline]
    #[must_use]
    pub fn width(self) -> u8 {
        match self {
            Disp::Rel8(_) | Disp::Label8(_) => 1,
            Disp::Rel16(_) | Disp::Label16(_) => 2,
            Disp::Rel32(_) | Disp::Label(_) | Disp::Label32(_) => 4,
            Disp::LabelDisp { width, .. } => width,
        }
    }

    /// The resolved displacement for `Rel*` variants, or the additional
    /// displacement carried by a label reference (0 for bare labels).
    #[inline]
    #[must_use]
    pub fn value(self) -> i32 {
        match self {
            Disp::Rel8(v) => i32::from(v),
            Disp::Rel16(v) => i32::from(v),
            Disp::Rel32(v) => v,
            Disp::LabelDisp { disp, .. } => disp,
            _ => 0,
        }
    }

    /// The referenced label id, if this is a label reference.
    #[inline]
    #[must_use]
    pub fn label_id(self) -> Option<u16> {
        match self {
            Disp::Label(id) | Disp::Label8(id) | Disp::Label16(id) | Disp::Label32(id) => Some(id),
            Disp::LabelDisp { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Whether this is a resolved (non-label) relative displacement.
    #[inline]
    #[must_use]
    pub fn is_rel(self) -> bool {
        matches!(self, Disp::Rel8(_) | Disp::Rel16(_) | Disp::Rel32(_))
    }

    /// Re-cast to the given slot width. Widths above 4 bytes are not
    /// representable and return `None`.
    #[must_use]
    pub(crate) fn resized(self, width: u8) -> Option<Disp> {
        if width > 4 {
            return None;
        }
        Some(match self {
            Disp::Rel8(_) | Disp::Rel16(_) | Disp::Rel32(_) => {
                let v = self.value();
                match width {
                    1 => Disp::Rel8(v as i8),
                    2 => Disp::Rel16(v as i16),
                    _ => Disp::Rel32(v),
                }
            }
            Disp::LabelDisp { label, disp, .. } => Disp::LabelDisp { label, disp, width },
            _ => {
                let id = self.label_id().unwrap_or(0);
                match width {
                    1 => Disp::Label8(id),
                    2 => Disp::Label16(id),
                    _ => Disp::Label32(id),
                }
            }
        })
    }
}

impl From<i8> for Disp {
    fn from(v: i8) -> Disp {
        Disp::Rel8(v)
    }
}

impl From<i16> for Disp {
    fn from(v: i16) -> Disp {
        Disp::Rel16(v)
    }
}

impl From<i32> for Disp {
    fn from(v: i32) -> Disp {
        Disp::Rel32(v)
    }
}

impl From<Label> for Disp {
    fn from(l: Label) -> Disp {
        Disp::Label(l.id)
    }
}

/// A memory-reference operand.
///
/// `base` (or `index`) may be [`RIP`](crate::reg::RIP) for RIP-relative
/// addressing; an XMM/YMM `index` selects VSIB addressing. A zero `size`
/// means the operand width is inferred from the addressing registers or the
/// matched encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mem {
    pub base: Option<Reg>,
    pub index: Option<Reg>,
    pub scale: u8,
    pub disp: Option<Disp>,
    /// Effective memory-operand width in bytes; 0 when inferred.
    pub size: u8,
}

impl Mem {
    /// A memory reference with the given base register: `[base]`.
    #[must_use]
    pub fn base(base: Reg) -> Mem {
        Mem {
            base: Some(base),
            ..Mem::default()
        }
    }

    /// A RIP-relative memory reference: `[rip]`.
    #[must_use]
    pub fn rip() -> Mem {
        Mem::base(crate::reg::RIP)
    }

    /// An absolute-displacement reference with neither base nor index.
    #[must_use]
    pub fn absolute(disp: i32) -> Mem {
        Mem {
            disp: Some(Disp::Rel32(disp)),
            ..Mem::default()
        }
    }

    /// Add an index register with the given scale (1, 2, 4, or 8).
    #[must_use]
    pub fn index(mut self, index: Reg, scale: u8) -> Mem {
        self.index = Some(index);
        self.scale = scale;
        self
    }

    /// Set the displacement.
    #[must_use]
    pub fn disp(mut self, disp: impl Into<Disp>) -> Mem {
        self.disp = Some(disp.into());
        self
    }

    /// Set an 8-bit displacement.
    #[must_use]
    pub fn disp8(self, v: i8) -> Mem {
        self.disp(Disp::Rel8(v))
    }

    /// Set a 32-bit displacement.
    #[must_use]
    pub fn disp32(self, v: i32) -> Mem {
        self.disp(Disp::Rel32(v))
    }

    /// Set the explicit operand width in bytes (for widening/narrowing
    /// mnemonics such as byte or word loads into wider registers).
    #[must_use]
    pub fn size(mut self, bytes: u8) -> Mem {
        self.size = bytes;
        self
    }

    /// Whether the index register selects VSIB addressing.
    #[inline]
    #[must_use]
    pub(crate) fn has_vsib_index(&self) -> bool {
        self.index.is_some_and(Reg::is_vector)
    }
}

/// A label created by [`Assembler::new_label`](crate::Assembler::new_label).
///
/// Labels are owned by the assembler and referenced by id; dropping the
/// assembler invalidates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub(crate) id: u16,
    pub(crate) pc: u32,
}

impl Label {
    /// The unique identifier for the label.
    #[inline]
    #[must_use]
    pub fn id(self) -> u16 {
        self.id
    }

    /// The program counter recorded when the label was created.
    #[inline]
    #[must_use]
    pub fn pc(self) -> u32 {
        self.pc
    }

    /// Reference the label as an 8-bit relative displacement.
    #[must_use]
    pub fn rel8(self) -> Disp {
        Disp::Label8(self.id)
    }

    /// Reference the label as a 16-bit relative displacement.
    #[must_use]
    pub fn rel16(self) -> Disp {
        Disp::Label16(self.id)
    }

    /// Reference the label as a 32-bit relative displacement.
    #[must_use]
    pub fn rel32(self) -> Disp {
        Disp::Label32(self.id)
    }

    /// Reference the label with an additional 8-bit displacement bias.
    #[must_use]
    pub fn disp8(self, disp: i8) -> Disp {
        Disp::LabelDisp {
            label: self.id,
            disp: i32::from(disp),
            width: 1,
        }
    }

    /// Reference the label with an additional 16-bit displacement bias.
    #[must_use]
    pub fn disp16(self, disp: i16) -> Disp {
        Disp::LabelDisp {
            label: self.id,
            disp: i32::from(disp),
            width: 2,
        }
    }

    /// Reference the label with an additional 32-bit displacement bias.
    #[must_use]
    pub fn disp32(self, disp: i32) -> Disp {
        Disp::LabelDisp {
            label: self.id,
            disp,
            width: 4,
        }
    }
}

/// An instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    Reg(Reg),
    Mem(Mem),
    Imm(Imm),
    Disp(Disp),
}

impl Operand {
    /// Width of the operand in bytes; 0 means unspecified/inferred.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u8 {
        match self {
            Operand::Reg(r) => r.width(),
            Operand::Mem(m) => m.size,
            Operand::Imm(imm) => imm.width(),
            Operand::Disp(disp) => disp.width(),
        }
    }
}

impl From<Reg> for Operand {
    fn from(r: Reg) -> Operand {
        Operand::Reg(r)
    }
}

impl From<Mem> for Operand {
    fn from(m: Mem) -> Operand {
        Operand::Mem(m)
    }
}

impl From<Imm> for Operand {
    fn from(imm: Imm) -> Operand {
        Operand::Imm(imm)
    }
}

impl From<Disp> for Operand {
    fn from(disp: Disp) -> Operand {
        Operand::Disp(disp)
    }
}

impl From<Label> for Operand {
    fn from(l: Label) -> Operand {
        Operand::Disp(Disp::Label(l.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::{RBX, RIP, XMM1};

    #[test]
    fn imm_widths_and_values() {
        assert_eq!(Imm::I8(-1).width(), 1);
        assert_eq!(Imm::I8(-1).value(), -1);
        assert_eq!(Imm::I64(i64::MAX).width(), 8);
        assert_eq!(Imm::I16(0x1234).value(), 0x1234);
    }

    #[test]
    fn imm_resize_preserves_value() {
        assert_eq!(Imm::I8(5).resized(4), Imm::I32(5));
        assert_eq!(Imm::I8(-2).resized(8), Imm::I64(-2));
        assert_eq!(Imm::I64(7).resized(1), Imm::I8(7));
    }

    #[test]
    fn disp_widths() {
        assert_eq!(Disp::Rel8(4).width(), 1);
        assert_eq!(Disp::Label(3).width(), 4);
        assert_eq!(Disp::Label16(3).width(), 2);
        assert_eq!(
            Disp::LabelDisp {
                label: 0,
                disp: 12,
                width: 1
            }
            .width(),
            1
        );
    }

    #[test]
    fn disp_resize() {
        assert_eq!(Disp::Rel8(4).resized(4), Some(Disp::Rel32(4)));
        assert_eq!(Disp::Label(3).resized(1), Some(Disp::Label8(3)));
        assert_eq!(Disp::Rel8(4).resized(8), None);
        assert_eq!(
            Disp::LabelDisp {
                label: 2,
                disp: 8,
                width: 1
            }
            .resized(4),
            Some(Disp::LabelDisp {
                label: 2,
                disp: 8,
                width: 4
            })
        );
    }

    #[test]
    fn mem_builders() {
        let m = Mem::base(RBX).index(XMM1, 4).disp8(8).size(16);
        assert_eq!(m.base, Some(RBX));
        assert_eq!(m.index, Some(XMM1));
        assert_eq!(m.scale, 4);
        assert_eq!(m.disp, Some(Disp::Rel8(8)));
        assert_eq!(m.size, 16);
        assert!(m.has_vsib_index());
        assert_eq!(Mem::rip().base, Some(RIP));
    }

    #[test]
    fn label_references() {
        let l = Label { id: 7, pc: 40 };
        assert_eq!(l.rel8(), Disp::Label8(7));
        assert_eq!(
            l.disp32(16),
            Disp::LabelDisp {
                label: 7,
                disp: 16,
                width: 4
            }
        );
        assert_eq!(Operand::from(l), Operand::Disp(Disp::Label(7)));
    }

    #[test]
    fn operand_widths() {
        assert_eq!(Operand::from(RBX).width(), 8);
        assert_eq!(Operand::from(Imm::I32(1)).width(), 4);
        assert_eq!(Operand::from(Mem::base(RBX)).width(), 0);
    }
}
