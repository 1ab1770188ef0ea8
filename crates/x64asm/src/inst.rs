//! Instruction mnemonics and encoding-spec records.

use crate::feats::Feature;
use crate::table;

/// An instruction mnemonic.
///
/// The packed value locates the mnemonic's encodings within the static
/// encoding table:
///
/// - bits `0..12` — offset of the first encoding
/// - bits `16..21` — number of encodings
/// - bits `21..32` — unique mnemonic id (1-based; 0 is invalid)
///
/// All mnemonic constants live in [`mnemonics`](crate::mnemonics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inst(u32);

impl Inst {
    pub(crate) const fn from_parts(id: u32, count: u32, offset: u32) -> Inst {
        Inst(id << 21 | count << 16 | offset)
    }

    /// The unique numeric identifier for the mnemonic. This is an arbitrary
    /// value; 0 denotes an invalid instruction.
    #[inline]
    #[must_use]
    pub fn id(self) -> u16 {
        (self.0 >> 21) as u16
    }

    #[inline]
    pub(crate) fn offset(self) -> u16 {
        (self.0 & 0xfff) as u16
    }

    #[inline]
    pub(crate) fn count(self) -> u8 {
        ((self.0 >> 16) & 0x1f) as u8
    }

    /// The name of the mnemonic, in uppercase.
    #[must_use]
    pub fn name(self) -> &'static str {
        let id = self.id();
        if id == 0 {
            return "";
        }
        let idx = usize::from(id - 1);
        let start = usize::from(table::mnemonics::INST_NAME_OFFSETS[idx]);
        let end = if idx + 1 < table::mnemonics::MNEMONIC_COUNT {
            usize::from(table::mnemonics::INST_NAME_OFFSETS[idx + 1])
        } else {
            table::mnemonics::INST_NAMES.len()
        };
        &table::mnemonics::INST_NAMES[start..end]
    }

    /// The mnemonic's contiguous slice of the encoding table.
    #[inline]
    pub(crate) fn encs(self) -> &'static [Enc] {
        let off = usize::from(self.offset());
        &table::ENCODINGS[off..off + usize::from(self.count())]
    }
}

/// A single instruction-encoding spec, 16 bytes:
///
/// - `op` — up to 4 opcode bytes
/// - `flags` — encoding flags (see [`flags`](crate::flags))
/// - `feats` — required CPU features
/// - `mne` — bits `0..11`: owning mnemonic id; bits `11..16`: offset of this
///   spec within the mnemonic's block
/// - `regoplen` — low nibble: fixed ModR/M.reg extension (0xF = none); high
///   nibble: opcode byte count (1-4)
/// - `argp` — index into the argument-pattern table
#[derive(Debug, Clone, Copy)]
pub(crate) struct Enc {
    pub op: [u8; 4],
    pub flags: u32,
    pub feats: Feature,
    pub mne: u16,
    pub regoplen: u8,
    pub argp: u8,
}

impl Enc {
    /// The fixed ModR/M.reg extension, if this encoding has one.
    #[inline]
    pub fn reg(self) -> Option<u8> {
        let r = self.regoplen & 0xf;
        if r == 0xf {
            None
        } else {
            Some(r)
        }
    }

    #[inline]
    pub fn oplen(self) -> usize {
        usize::from(self.regoplen >> 4)
    }

    #[inline]
    pub fn inst_id(self) -> u16 {
        self.mne & 0x7ff
    }

    #[inline]
    pub fn local_offset(self) -> u8 {
        (self.mne >> 11) as u8
    }

    /// The 8-byte argument-pattern format for this encoding.
    #[inline]
    pub fn format(self) -> &'static [u8; 8] {
        &table::ARGP_FORMATS[usize::from(self.argp)]
    }

    /// The opcode bytes.
    #[inline]
    pub fn opcode(&self) -> &[u8] {
        &self.op[..self.oplen()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonics::{ADC, MOV, VZEROUPPER};

    #[test]
    fn names_resolve() {
        assert_eq!(ADC.name(), "ADC");
        assert_eq!(MOV.name(), "MOV");
        assert_eq!(VZEROUPPER.name(), "VZEROUPPER");
    }

    #[test]
    fn enc_record_is_16_bytes() {
        assert_eq!(core::mem::size_of::<Enc>(), 16);
    }

    #[test]
    fn encodings_are_contiguous() {
        assert!(MOV.count() > 0);
        for (i, e) in MOV.encs().iter().enumerate() {
            assert_eq!(e.inst_id(), MOV.id());
            assert_eq!(usize::from(e.local_offset()), i);
        }
    }
}
