//! Mnemonic lookup by name.

use crate::inst::Inst;
use crate::table::mnemonics::INSTS_BY_NAME;

const MAX_MNEMONIC_LEN: usize = 16;

/// Look up the [`Inst`] for a mnemonic name, case-insensitively.
///
/// # Examples
///
/// ```
/// use x64asm::{lookup_inst, mnemonics::MOV};
///
/// assert_eq!(lookup_inst("mov"), Some(MOV));
/// assert_eq!(lookup_inst("MOV"), Some(MOV));
/// assert_eq!(lookup_inst("not-an-op"), None);
/// ```
#[must_use]
pub fn lookup_inst(name: &str) -> Option<Inst> {
    if name.is_empty() || name.len() > MAX_MNEMONIC_LEN {
        return None;
    }
    let mut upper = [0u8; MAX_MNEMONIC_LEN];
    for (i, b) in name.bytes().enumerate() {
        upper[i] = b.to_ascii_uppercase();
    }
    let upper = core::str::from_utf8(&upper[..name.len()]).ok()?;

    INSTS_BY_NAME
        .binary_search_by(|inst| inst.name().cmp(upper))
        .ok()
        .map(|i| INSTS_BY_NAME[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::mnemonics::{ADD, MOV, VSHUFPD};

    #[test]
    fn finds_mnemonics_in_any_case() {
        assert_eq!(lookup_inst("add"), Some(ADD));
        assert_eq!(lookup_inst("Add"), Some(ADD));
        assert_eq!(lookup_inst("vshufpd"), Some(VSHUFPD));
        assert_eq!(lookup_inst("MOV"), Some(MOV));
    }

    #[test]
    fn rejects_unknown_and_oversized_names() {
        assert_eq!(lookup_inst(""), None);
        assert_eq!(lookup_inst("definitely-not-a-mnemonic"), None);
        assert_eq!(lookup_inst("mo"), None);
    }

    #[test]
    fn every_table_entry_is_found() {
        for inst in INSTS_BY_NAME {
            assert_eq!(lookup_inst(inst.name()), Some(inst), "{}", inst.name());
        }
    }
}
