//! Static instruction tables.
//!
//! The tables are generated from a source table of mnemonic specifications;
//! only their runtime shape is relied upon here:
//!
//! - every mnemonic's encodings occupy a contiguous slice of [`ENCODINGS`],
//!   addressed by the mnemonic's `(offset, count)`;
//! - encoding specs are 16 bytes each, and the whole table (specs, mnemonic
//!   handles, packed names, name offsets, pattern formats) stays under 64 KiB
//!   so 16-bit offsets suffice;
//! - argument patterns are 8-byte null-padded strings of at most 4
//!   `(type, size)` pairs.

mod encodings;
pub mod mnemonics;

pub(crate) use encodings::{ARGP_FORMATS, ENCODINGS};

#[cfg(test)]
mod tests {
    use super::mnemonics::{INSTS_BY_NAME, INST_NAMES, INST_NAME_OFFSETS, MNEMONIC_COUNT};
    use super::{ARGP_FORMATS, ENCODINGS};
    use crate::inst::Enc;

    #[test]
    fn static_data_fits_16_bit_offsets() {
        // Specs, one Inst + one u16 name offset per mnemonic, the packed
        // name string, and one 8-byte format + 1-byte id per pattern.
        let size = ENCODINGS.len() * core::mem::size_of::<Enc>()
            + MNEMONIC_COUNT * (4 + 2)
            + INST_NAMES.len()
            + ARGP_FORMATS.len() * (8 + 1);
        assert!(size <= 0xffff, "static table size {} exceeds u16", size);
    }

    #[test]
    fn mnemonic_refs_reconstruct() {
        for inst in INSTS_BY_NAME {
            for (i, e) in inst.encs().iter().enumerate() {
                assert_eq!(e.inst_id(), inst.id(), "{}", inst.name());
                assert_eq!(usize::from(e.local_offset()), i, "{}", inst.name());
            }
        }
    }

    #[test]
    fn name_offsets_are_monotonic() {
        for w in INST_NAME_OFFSETS.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert_eq!(INST_NAME_OFFSETS.len(), MNEMONIC_COUNT);
    }

    #[test]
    fn lookup_index_is_sorted_by_name() {
        for w in INSTS_BY_NAME.windows(2) {
            assert!(w[0].name() < w[1].name());
        }
    }

    #[test]
    fn patterns_have_at_most_four_pairs() {
        for f in &ARGP_FORMATS {
            let len = f.iter().position(|&b| b == 0).unwrap_or(8);
            assert!(len % 2 == 0, "odd pattern {:?}", f);
            assert!(len <= 8);
        }
    }

    #[test]
    fn opcode_lengths_are_valid() {
        for e in &ENCODINGS {
            assert!((1..=4).contains(&e.oplen()));
        }
    }
}
