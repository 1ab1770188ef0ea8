// This file is @generated from the x86-64 instruction spec table. Do not edit by hand.
//! The static instruction-encoding table and argument-pattern formats.

#![allow(clippy::identity_op)]

use crate::feats::*;
use crate::flags::*;
use crate::inst::Enc;

/// Argument-pattern format strings, 8-byte null-padded,
/// indexed by the `argp` field of an encoding spec.
pub(crate) static ARGP_FORMATS: [[u8; 8]; 246] = [
    *b"\0\0\0\0\0\0\0\0",
    *b"Aw\0\0\0\0\0\0",
    *b"Uw\0\0\0\0\0\0",
    *b"Vw\0\0\0\0\0\0",
    *b"fp\0\0\0\0\0\0",
    *b"ib\0\0\0\0\0\0",
    *b"id\0\0\0\0\0\0",
    *b"iw\0\0\0\0\0\0",
    *b"m1\0\0\0\0\0\0",
    *b"m0\0\0\0\0\0\0",
    *b"mb\0\0\0\0\0\0",
    *b"md\0\0\0\0\0\0",
    *b"mo\0\0\0\0\0\0",
    *b"mp\0\0\0\0\0\0",
    *b"mq\0\0\0\0\0\0",
    *b"mw\0\0\0\0\0\0",
    *b"ob\0\0\0\0\0\0",
    *b"od\0\0\0\0\0\0",
    *b"r0\0\0\0\0\0\0",
    *b"rb\0\0\0\0\0\0",
    *b"rd\0\0\0\0\0\0",
    *b"rq\0\0\0\0\0\0",
    *b"rw\0\0\0\0\0\0",
    *b"v0\0\0\0\0\0\0",
    *b"vb\0\0\0\0\0\0",
    *b"vd\0\0\0\0\0\0",
    *b"A0i0\0\0\0\0",
    *b"A0r0\0\0\0\0",
    *b"AbCw\0\0\0\0",
    *b"Abib\0\0\0\0",
    *b"Abiq\0\0\0\0",
    *b"AdBd\0\0\0\0",
    *b"AdCw\0\0\0\0",
    *b"Adib\0\0\0\0",
    *b"Adiq\0\0\0\0",
    *b"AqBd\0\0\0\0",
    *b"Aqiq\0\0\0\0",
    *b"AwCw\0\0\0\0",
    *b"Awib\0\0\0\0",
    *b"Awiq\0\0\0\0",
    *b"CwAb\0\0\0\0",
    *b"CwAd\0\0\0\0",
    *b"CwAw\0\0\0\0",
    *b"Wdrd\0\0\0\0",
    *b"Wqrq\0\0\0\0",
    *b"Xpfp\0\0\0\0",
    *b"bobo\0\0\0\0",
    *b"bom1\0\0\0\0",
    *b"borq\0\0\0\0",
    *b"cdrd\0\0\0\0",
    *b"cqrq\0\0\0\0",
    *b"ddrd\0\0\0\0",
    *b"dqrq\0\0\0\0",
    *b"fpXp\0\0\0\0",
    *b"ibAb\0\0\0\0",
    *b"ibAd\0\0\0\0",
    *b"ibAw\0\0\0\0",
    *b"iqAb\0\0\0\0",
    *b"iqAd\0\0\0\0",
    *b"iqAq\0\0\0\0",
    *b"iqAw\0\0\0\0",
    *b"iwib\0\0\0\0",
    *b"m1bo\0\0\0\0",
    *b"m1yo\0\0\0\0",
    *b"m0i0\0\0\0\0",
    *b"m0ib\0\0\0\0",
    *b"m0r0\0\0\0\0",
    *b"m0y0\0\0\0\0",
    *b"mbib\0\0\0\0",
    *b"mbrb\0\0\0\0",
    *b"mdrd\0\0\0\0",
    *b"mdyo\0\0\0\0",
    *b"mhyh\0\0\0\0",
    *b"moyo\0\0\0\0",
    *b"mpsw\0\0\0\0",
    *b"mqrq\0\0\0\0",
    *b"mqxq\0\0\0\0",
    *b"mqyo\0\0\0\0",
    *b"mwsw\0\0\0\0",
    *b"r0A0\0\0\0\0",
    *b"r0i0\0\0\0\0",
    *b"r0ib\0\0\0\0",
    *b"r0m1\0\0\0\0",
    *b"r0m0\0\0\0\0",
    *b"r0md\0\0\0\0",
    *b"r0mq\0\0\0\0",
    *b"r0mw\0\0\0\0",
    *b"r0r0\0\0\0\0",
    *b"r0sw\0\0\0\0",
    *b"r0v0\0\0\0\0",
    *b"r0vb\0\0\0\0",
    *b"r0vw\0\0\0\0",
    *b"r0y0\0\0\0\0",
    *b"r0yo\0\0\0\0",
    *b"rbib\0\0\0\0",
    *b"rbmb\0\0\0\0",
    *b"rbrb\0\0\0\0",
    *b"rbvb\0\0\0\0",
    *b"rdWd\0\0\0\0",
    *b"rdcd\0\0\0\0",
    *b"rddd\0\0\0\0",
    *b"rdid\0\0\0\0",
    *b"rdmd\0\0\0\0",
    *b"rdmq\0\0\0\0",
    *b"rdvw\0\0\0\0",
    *b"rdxq\0\0\0\0",
    *b"rdyo\0\0\0\0",
    *b"rqWq\0\0\0\0",
    *b"rqcq\0\0\0\0",
    *b"rqdq\0\0\0\0",
    *b"rqiq\0\0\0\0",
    *b"rqmd\0\0\0\0",
    *b"rqmo\0\0\0\0",
    *b"rqmq\0\0\0\0",
    *b"rqvd\0\0\0\0",
    *b"rqvq\0\0\0\0",
    *b"rqyo\0\0\0\0",
    *b"rwiw\0\0\0\0",
    *b"rwmb\0\0\0\0",
    *b"swmp\0\0\0\0",
    *b"swmw\0\0\0\0",
    *b"swrw\0\0\0\0",
    *b"uqxq\0\0\0\0",
    *b"v0Bb\0\0\0\0",
    *b"v0i0\0\0\0\0",
    *b"v0ib\0\0\0\0",
    *b"v0r0\0\0\0\0",
    *b"vbBb\0\0\0\0",
    *b"vbib\0\0\0\0",
    *b"vbrb\0\0\0\0",
    *b"vdxq\0\0\0\0",
    *b"vdyo\0\0\0\0",
    *b"vqrq\0\0\0\0",
    *b"vqxq\0\0\0\0",
    *b"vqyo\0\0\0\0",
    *b"whyh\0\0\0\0",
    *b"woyo\0\0\0\0",
    *b"xqib\0\0\0\0",
    *b"xqmq\0\0\0\0",
    *b"xquq\0\0\0\0",
    *b"xqvd\0\0\0\0",
    *b"xqvq\0\0\0\0",
    *b"xqwo\0\0\0\0",
    *b"xqxq\0\0\0\0",
    *b"xqyo\0\0\0\0",
    *b"y0m0\0\0\0\0",
    *b"y0mb\0\0\0\0",
    *b"y0md\0\0\0\0",
    *b"y0mw\0\0\0\0",
    *b"y0w0\0\0\0\0",
    *b"y0wo\0\0\0\0",
    *b"y0yo\0\0\0\0",
    *b"yhmh\0\0\0\0",
    *b"yhmo\0\0\0\0",
    *b"yhmq\0\0\0\0",
    *b"yhwh\0\0\0\0",
    *b"yhyo\0\0\0\0",
    *b"yoib\0\0\0\0",
    *b"yom1\0\0\0\0",
    *b"yom0\0\0\0\0",
    *b"yomd\0\0\0\0",
    *b"yomo\0\0\0\0",
    *b"yomq\0\0\0\0",
    *b"yomw\0\0\0\0",
    *b"youq\0\0\0\0",
    *b"yovd\0\0\0\0",
    *b"yovq\0\0\0\0",
    *b"yowo\0\0\0\0",
    *b"yoxq\0\0\0\0",
    *b"yoy0\0\0\0\0",
    *b"yoyo\0\0\0\0",
    *b"A0BdCd\0\0",
    *b"AqBdCd\0\0",
    *b"m0y0y0\0\0",
    *b"mbyoib\0\0",
    *b"mqyoib\0\0",
    *b"mwyoib\0\0",
    *b"r0r0v0\0\0",
    *b"r0v0i0\0\0",
    *b"r0v0ib\0\0",
    *b"r0v0id\0\0",
    *b"r0v0r0\0\0",
    *b"rdxqib\0\0",
    *b"rdyoib\0\0",
    *b"rqyoib\0\0",
    *b"v0r0Bb\0\0",
    *b"v0r0ib\0\0",
    *b"vdyoib\0\0",
    *b"vqyoib\0\0",
    *b"woy0ib\0\0",
    *b"woyhib\0\0",
    *b"xqm1ib\0\0",
    *b"xqrdib\0\0",
    *b"xquqib\0\0",
    *b"xqvwib\0\0",
    *b"y0k0y0\0\0",
    *b"y0l0y0\0\0",
    *b"y0loy0\0\0",
    *b"y0w0ib\0\0",
    *b"y0y0ib\0\0",
    *b"y0y0m0\0\0",
    *b"y0y0w0\0\0",
    *b"y0y0wo\0\0",
    *b"yhwhib\0\0",
    *b"yhyhwh\0\0",
    *b"yoibib\0\0",
    *b"yok0yo\0\0",
    *b"yom1ib\0\0",
    *b"yomdib\0\0",
    *b"yomqib\0\0",
    *b"yomwib\0\0",
    *b"yordib\0\0",
    *b"yorwib\0\0",
    *b"yovbib\0\0",
    *b"yovdib\0\0",
    *b"yovqib\0\0",
    *b"yowoib\0\0",
    *b"yowoyo\0\0",
    *b"yoyoib\0\0",
    *b"yoyomd\0\0",
    *b"yoyomq\0\0",
    *b"yoyov0\0\0",
    *b"yoyowo\0\0",
    *b"yoyoyo\0\0",
    *b"y0y0w0ib",
    *b"y0y0w0y0",
    *b"y0y0y0w0",
    *b"yhyhwhib",
    *b"yhyhwoib",
    *b"yoyoibib",
    *b"yoyomdib",
    *b"yoyomdyo",
    *b"yoyomqib",
    *b"yoyomqyo",
    *b"yoyordib",
    *b"yoyovbib",
    *b"yoyovdib",
    *b"yoyovqib",
    *b"yoyovwib",
    *b"yoyowoib",
    *b"yoyowoyo",
    *b"yoyoyoib",
    *b"yoyoyomd",
    *b"yoyoyomq",
    *b"yoyoyowo",
    *b"yoyoyoyo",
];

const fn e(op: [u8; 4], flags: u32, feats: Feature, mne: u16, regoplen: u8, argp: u8) -> Enc {
    Enc { op, flags, feats, mne, regoplen, argp }
}

/// Every instruction encoding, grouped contiguously per mnemonic.
pub(crate) static ENCODINGS: [Enc; 2291] = [
    e([0x14, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 1, 1 << 4 | 15, 29), // adc "Abib"
    e([0x80, 0x00, 0x00, 0x00], LOCK, 0, 1 << 11 | 1, 1 << 4 | 2, 68), // adc "mbib"
    e([0x10, 0x00, 0x00, 0x00], LOCK | ENC_MR, 0, 2 << 11 | 1, 1 << 4 | 15, 69), // adc "mbrb"
    e([0x80, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 1, 1 << 4 | 2, 94), // adc "rbib"
    e([0x10, 0x00, 0x00, 0x00], ENC_MR, 0, 4 << 11 | 1, 1 << 4 | 15, 96), // adc "rbrb"
    e([0x12, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 1, 1 << 4 | 15, 97), // adc "rbvb"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 6 << 11 | 1, 1 << 4 | 2, 81), // adc "r0ib"
    e([0x15, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 1, 1 << 4 | 15, 26), // adc "A0i0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 8 << 11 | 1, 1 << 4 | 2, 64), // adc "m0i0"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 9 << 11 | 1, 1 << 4 | 2, 65), // adc "m0ib"
    e([0x11, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 10 << 11 | 1, 1 << 4 | 15, 66), // adc "m0r0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 11 << 11 | 1, 1 << 4 | 2, 80), // adc "r0i0"
    e([0x11, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 12 << 11 | 1, 1 << 4 | 15, 87), // adc "r0r0"
    e([0x13, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 13 << 11 | 1, 1 << 4 | 15, 89), // adc "r0v0"
    e([0x0F, 0x38, 0xF6, 0x00], WITH_REXW | PREF_66, 0, 0 << 11 | 2, 3 << 4 | 15, 115), // adcx "rqvq"
    e([0x04, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 3, 1 << 4 | 15, 29), // add "Abib"
    e([0x80, 0x00, 0x00, 0x00], LOCK, 0, 1 << 11 | 3, 1 << 4 | 0, 68), // add "mbib"
    e([0x00, 0x00, 0x00, 0x00], LOCK | ENC_MR, 0, 2 << 11 | 3, 1 << 4 | 15, 69), // add "mbrb"
    e([0x80, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 3, 1 << 4 | 0, 94), // add "rbib"
    e([0x00, 0x00, 0x00, 0x00], ENC_MR, 0, 4 << 11 | 3, 1 << 4 | 15, 96), // add "rbrb"
    e([0x02, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 3, 1 << 4 | 15, 97), // add "rbvb"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 6 << 11 | 3, 1 << 4 | 0, 81), // add "r0ib"
    e([0x05, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 3, 1 << 4 | 15, 26), // add "A0i0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 8 << 11 | 3, 1 << 4 | 0, 64), // add "m0i0"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 9 << 11 | 3, 1 << 4 | 0, 65), // add "m0ib"
    e([0x01, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 10 << 11 | 3, 1 << 4 | 15, 66), // add "m0r0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 11 << 11 | 3, 1 << 4 | 0, 80), // add "r0i0"
    e([0x01, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 12 << 11 | 3, 1 << 4 | 15, 87), // add "r0r0"
    e([0x03, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 13 << 11 | 3, 1 << 4 | 15, 89), // add "r0v0"
    e([0x0F, 0x58, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 4, 2 << 4 | 15, 162), // addsd "yomq"
    e([0x0F, 0x58, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 4, 2 << 4 | 15, 170), // addsd "yoyo"
    e([0x0F, 0x58, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 5, 2 << 4 | 15, 160), // addss "yomd"
    e([0x0F, 0x58, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 5, 2 << 4 | 15, 170), // addss "yoyo"
    e([0x0F, 0x38, 0xF6, 0x00], WITH_REXW | PREF_F3, 0, 0 << 11 | 6, 3 << 4 | 15, 115), // adox "rqvq"
    e([0x24, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 7, 1 << 4 | 15, 29), // and "Abib"
    e([0x80, 0x00, 0x00, 0x00], LOCK, 0, 1 << 11 | 7, 1 << 4 | 4, 68), // and "mbib"
    e([0x20, 0x00, 0x00, 0x00], LOCK | ENC_MR, 0, 2 << 11 | 7, 1 << 4 | 15, 69), // and "mbrb"
    e([0x80, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 7, 1 << 4 | 4, 94), // and "rbib"
    e([0x20, 0x00, 0x00, 0x00], ENC_MR, 0, 4 << 11 | 7, 1 << 4 | 15, 96), // and "rbrb"
    e([0x22, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 7, 1 << 4 | 15, 97), // and "rbvb"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 6 << 11 | 7, 1 << 4 | 4, 81), // and "r0ib"
    e([0x25, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 7, 1 << 4 | 15, 26), // and "A0i0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 8 << 11 | 7, 1 << 4 | 4, 64), // and "m0i0"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 9 << 11 | 7, 1 << 4 | 4, 65), // and "m0ib"
    e([0x21, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 10 << 11 | 7, 1 << 4 | 15, 66), // and "m0r0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 11 << 11 | 7, 1 << 4 | 4, 80), // and "r0i0"
    e([0x21, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 12 << 11 | 7, 1 << 4 | 15, 87), // and "r0r0"
    e([0x23, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 13 << 11 | 7, 1 << 4 | 15, 89), // and "r0v0"
    e([0x02, 0xF2, 0x00, 0x00], VEX_OP | AUTO_REXW, BMI1, 0 << 11 | 8, 2 << 4 | 15, 177), // andn "r0r0v0"
    e([0x10, 0x10, 0x00, 0x00], XOP_OP | AUTO_REXW, TBM, 0 << 11 | 9, 2 << 4 | 15, 180), // bextr "r0v0id"
    e([0x02, 0xF7, 0x00, 0x00], VEX_OP | AUTO_REXW | ENC_MR, BMI1, 1 << 11 | 9, 2 << 4 | 15, 181), // bextr "r0v0r0"
    e([0x09, 0x01, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 10, 2 << 4 | 1, 89), // blcfill "r0v0"
    e([0x09, 0x02, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 11, 2 << 4 | 6, 89), // blci "r0v0"
    e([0x09, 0x01, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 12, 2 << 4 | 5, 89), // blcic "r0v0"
    e([0x09, 0x02, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 13, 2 << 4 | 1, 89), // blcmsk "r0v0"
    e([0x09, 0x01, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 14, 2 << 4 | 3, 89), // blcs "r0v0"
    e([0x09, 0x01, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 15, 2 << 4 | 2, 89), // blsfill "r0v0"
    e([0x02, 0xF3, 0x00, 0x00], VEX_OP | AUTO_REXW | ENC_VM, BMI1, 0 << 11 | 16, 2 << 4 | 3, 89), // blsi "r0v0"
    e([0x09, 0x01, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 17, 2 << 4 | 6, 89), // blsic "r0v0"
    e([0x02, 0xF3, 0x00, 0x00], VEX_OP | AUTO_REXW | ENC_VM, BMI1, 0 << 11 | 18, 2 << 4 | 2, 89), // blsmsk "r0v0"
    e([0x02, 0xF3, 0x00, 0x00], VEX_OP | AUTO_REXW | ENC_VM, BMI1, 0 << 11 | 19, 2 << 4 | 1, 89), // blsr "r0v0"
    e([0x0F, 0x1A, 0x00, 0x00], PREF_F3, MPX, 0 << 11 | 20, 2 << 4 | 15, 47), // bndcl "bom1"
    e([0x0F, 0x1A, 0x00, 0x00], PREF_F3, MPX, 1 << 11 | 20, 2 << 4 | 15, 48), // bndcl "borq"
    e([0x0F, 0x1B, 0x00, 0x00], PREF_F2, MPX, 0 << 11 | 21, 2 << 4 | 15, 47), // bndcn "bom1"
    e([0x0F, 0x1B, 0x00, 0x00], PREF_F2, MPX, 1 << 11 | 21, 2 << 4 | 15, 48), // bndcn "borq"
    e([0x0F, 0x1A, 0x00, 0x00], PREF_F2, MPX, 0 << 11 | 22, 2 << 4 | 15, 47), // bndcu "bom1"
    e([0x0F, 0x1A, 0x00, 0x00], PREF_F2, MPX, 1 << 11 | 22, 2 << 4 | 15, 48), // bndcu "borq"
    e([0x0F, 0x1A, 0x00, 0x00], ENC_MIB, MPX, 0 << 11 | 23, 2 << 4 | 15, 47), // bndldx "bom1"
    e([0x0F, 0x1B, 0x00, 0x00], PREF_F3 | ENC_MIB, MPX, 0 << 11 | 24, 2 << 4 | 15, 47), // bndmk "bom1"
    e([0x0F, 0x1A, 0x00, 0x00], PREF_66, MPX, 0 << 11 | 25, 2 << 4 | 15, 46), // bndmov "bobo"
    e([0x0F, 0x1B, 0x00, 0x00], PREF_66 | ENC_MR, MPX, 1 << 11 | 25, 2 << 4 | 15, 46), // bndmov "bobo"
    e([0x0F, 0x1A, 0x00, 0x00], PREF_66, MPX, 2 << 11 | 25, 2 << 4 | 15, 47), // bndmov "bom1"
    e([0x0F, 0x1B, 0x00, 0x00], PREF_66 | ENC_MR, MPX, 3 << 11 | 25, 2 << 4 | 15, 62), // bndmov "m1bo"
    e([0x0F, 0x1B, 0x00, 0x00], ENC_MR | ENC_MIB, MPX, 0 << 11 | 26, 2 << 4 | 15, 62), // bndstx "m1bo"
    e([0x0F, 0xBC, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 27, 2 << 4 | 15, 89), // bsf "r0v0"
    e([0x0F, 0xBD, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 28, 2 << 4 | 15, 89), // bsr "r0v0"
    e([0x0F, 0xC8, 0x00, 0x00], AUTO_REXW | SHORT_ARG, 0, 0 << 11 | 29, 2 << 4 | 15, 18), // bswap "r0"
    e([0x0F, 0xBA, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 30, 2 << 4 | 4, 125), // bt "v0ib"
    e([0x0F, 0xA3, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 1 << 11 | 30, 2 << 4 | 15, 126), // bt "v0r0"
    e([0x0F, 0xBA, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 0 << 11 | 31, 2 << 4 | 7, 81), // btc "r0ib"
    e([0x0F, 0xBA, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 1 << 11 | 31, 2 << 4 | 7, 65), // btc "m0ib"
    e([0x0F, 0xBB, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 2 << 11 | 31, 2 << 4 | 15, 66), // btc "m0r0"
    e([0x0F, 0xBB, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 3 << 11 | 31, 2 << 4 | 15, 87), // btc "r0r0"
    e([0x0F, 0xBA, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 0 << 11 | 32, 2 << 4 | 6, 81), // btr "r0ib"
    e([0x0F, 0xBA, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 1 << 11 | 32, 2 << 4 | 6, 65), // btr "m0ib"
    e([0x0F, 0xB3, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 2 << 11 | 32, 2 << 4 | 15, 66), // btr "m0r0"
    e([0x0F, 0xB3, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 3 << 11 | 32, 2 << 4 | 15, 87), // btr "r0r0"
    e([0x0F, 0xBA, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 0 << 11 | 33, 2 << 4 | 5, 81), // bts "r0ib"
    e([0x0F, 0xBA, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 1 << 11 | 33, 2 << 4 | 5, 65), // bts "m0ib"
    e([0x0F, 0xAB, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 2 << 11 | 33, 2 << 4 | 15, 66), // bts "m0r0"
    e([0x0F, 0xAB, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 3 << 11 | 33, 2 << 4 | 15, 87), // bts "r0r0"
    e([0x02, 0xF5, 0x00, 0x00], VEX_OP | AUTO_REXW | ENC_MR, BMI2, 0 << 11 | 34, 2 << 4 | 15, 181), // bzhi "r0v0r0"
    e([0xE8, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 35, 1 << 4 | 15, 17), // call "od"
    e([0xFF, 0x00, 0x00, 0x00], AUTO_NO32, 0, 1 << 11 | 35, 1 << 4 | 2, 23), // call "v0"
    e([0x98, 0x00, 0x00, 0x00], WORD_SIZE, 0, 0 << 11 | 36, 1 << 4 | 15, 0), // cbw ""
    e([0x99, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 37, 1 << 4 | 15, 0), // cdq ""
    e([0x98, 0x00, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 38, 1 << 4 | 15, 0), // cdqe ""
    e([0x0F, 0x01, 0xCA, 0x00], 0, 0, 0 << 11 | 39, 3 << 4 | 15, 0), // clac ""
    e([0xF8, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 40, 1 << 4 | 15, 0), // clc ""
    e([0xFC, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 41, 1 << 4 | 15, 0), // cld ""
    e([0x0F, 0xAE, 0x00, 0x00], 0, SSE2, 0 << 11 | 42, 2 << 4 | 7, 10), // clflush "mb"
    e([0x0F, 0x01, 0xDD, 0x00], 0, VMX | AMD, 0 << 11 | 43, 3 << 4 | 15, 0), // clgi ""
    e([0xFA, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 44, 1 << 4 | 15, 0), // cli ""
    e([0x0F, 0x06, 0x00, 0x00], 0, 0, 0 << 11 | 45, 2 << 4 | 15, 0), // clts ""
    e([0x0F, 0x01, 0xFC, 0x00], 0, AMD, 0 << 11 | 46, 3 << 4 | 15, 0), // clzero ""
    e([0xF5, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 47, 1 << 4 | 15, 0), // cmc ""
    e([0x0F, 0x47, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 48, 2 << 4 | 15, 89), // cmova "r0v0"
    e([0x0F, 0x43, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 49, 2 << 4 | 15, 89), // cmovae "r0v0"
    e([0x0F, 0x42, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 50, 2 << 4 | 15, 89), // cmovb "r0v0"
    e([0x0F, 0x46, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 51, 2 << 4 | 15, 89), // cmovbe "r0v0"
    e([0x0F, 0x42, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 52, 2 << 4 | 15, 89), // cmovc "r0v0"
    e([0x0F, 0x44, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 53, 2 << 4 | 15, 89), // cmove "r0v0"
    e([0x0F, 0x4F, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 54, 2 << 4 | 15, 89), // cmovg "r0v0"
    e([0x0F, 0x4D, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 55, 2 << 4 | 15, 89), // cmovge "r0v0"
    e([0x0F, 0x4C, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 56, 2 << 4 | 15, 89), // cmovl "r0v0"
    e([0x0F, 0x4E, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 57, 2 << 4 | 15, 89), // cmovle "r0v0"
    e([0x0F, 0x46, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 58, 2 << 4 | 15, 89), // cmovna "r0v0"
    e([0x0F, 0x42, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 59, 2 << 4 | 15, 89), // cmovnae "r0v0"
    e([0x0F, 0x43, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 60, 2 << 4 | 15, 89), // cmovnb "r0v0"
    e([0x0F, 0x47, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 61, 2 << 4 | 15, 89), // cmovnbe "r0v0"
    e([0x0F, 0x43, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 62, 2 << 4 | 15, 89), // cmovnc "r0v0"
    e([0x0F, 0x45, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 63, 2 << 4 | 15, 89), // cmovne "r0v0"
    e([0x0F, 0x4E, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 64, 2 << 4 | 15, 89), // cmovng "r0v0"
    e([0x0F, 0x4C, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 65, 2 << 4 | 15, 89), // cmovnge "r0v0"
    e([0x0F, 0x4D, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 66, 2 << 4 | 15, 89), // cmovnl "r0v0"
    e([0x0F, 0x4F, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 67, 2 << 4 | 15, 89), // cmovnle "r0v0"
    e([0x0F, 0x41, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 68, 2 << 4 | 15, 89), // cmovno "r0v0"
    e([0x0F, 0x4B, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 69, 2 << 4 | 15, 89), // cmovnp "r0v0"
    e([0x0F, 0x49, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 70, 2 << 4 | 15, 89), // cmovns "r0v0"
    e([0x0F, 0x45, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 71, 2 << 4 | 15, 89), // cmovnz "r0v0"
    e([0x0F, 0x40, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 72, 2 << 4 | 15, 89), // cmovo "r0v0"
    e([0x0F, 0x4A, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 73, 2 << 4 | 15, 89), // cmovp "r0v0"
    e([0x0F, 0x4A, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 74, 2 << 4 | 15, 89), // cmovpe "r0v0"
    e([0x0F, 0x4B, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 75, 2 << 4 | 15, 89), // cmovpo "r0v0"
    e([0x0F, 0x48, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 76, 2 << 4 | 15, 89), // cmovs "r0v0"
    e([0x0F, 0x44, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 77, 2 << 4 | 15, 89), // cmovz "r0v0"
    e([0x3C, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 78, 1 << 4 | 15, 29), // cmp "Abib"
    e([0x3A, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 78, 1 << 4 | 15, 97), // cmp "rbvb"
    e([0x80, 0x00, 0x00, 0x00], 0, 0, 2 << 11 | 78, 1 << 4 | 7, 128), // cmp "vbib"
    e([0x38, 0x00, 0x00, 0x00], ENC_MR, 0, 3 << 11 | 78, 1 << 4 | 15, 129), // cmp "vbrb"
    e([0x3D, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 4 << 11 | 78, 1 << 4 | 15, 26), // cmp "A0i0"
    e([0x3B, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 5 << 11 | 78, 1 << 4 | 15, 89), // cmp "r0v0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 6 << 11 | 78, 1 << 4 | 7, 124), // cmp "v0i0"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 78, 1 << 4 | 7, 125), // cmp "v0ib"
    e([0x39, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 8 << 11 | 78, 1 << 4 | 15, 126), // cmp "v0r0"
    e([0x0F, 0xC2, 0x00, 0x00], IMM_OP | PREF_F2, SSE2, 0 << 11 | 79, 3 << 4 | 15, 162), // cmpeqsd "yomq"
    e([0x0F, 0xC2, 0x00, 0x00], IMM_OP | PREF_F2, SSE2, 1 << 11 | 79, 3 << 4 | 15, 170), // cmpeqsd "yoyo"
    e([0x0F, 0xC2, 0x00, 0x00], IMM_OP | PREF_F3, SSE, 0 << 11 | 80, 3 << 4 | 15, 160), // cmpeqss "yomd"
    e([0x0F, 0xC2, 0x00, 0x00], IMM_OP | PREF_F3, SSE, 1 << 11 | 80, 3 << 4 | 15, 170), // cmpeqss "yoyo"
    e([0x0F, 0xC2, 0x02, 0x00], IMM_OP | PREF_F2, SSE2, 0 << 11 | 81, 3 << 4 | 15, 162), // cmplesd "yomq"
    e([0x0F, 0xC2, 0x02, 0x00], IMM_OP | PREF_F2, SSE2, 1 << 11 | 81, 3 << 4 | 15, 170), // cmplesd "yoyo"
    e([0x0F, 0xC2, 0x02, 0x00], IMM_OP | PREF_F3, SSE, 0 << 11 | 82, 3 << 4 | 15, 160), // cmpless "yomd"
    e([0x0F, 0xC2, 0x02, 0x00], IMM_OP | PREF_F3, SSE, 1 << 11 | 82, 3 << 4 | 15, 170), // cmpless "yoyo"
    e([0x0F, 0xC2, 0x01, 0x00], IMM_OP | PREF_F2, SSE2, 0 << 11 | 83, 3 << 4 | 15, 162), // cmpltsd "yomq"
    e([0x0F, 0xC2, 0x01, 0x00], IMM_OP | PREF_F2, SSE2, 1 << 11 | 83, 3 << 4 | 15, 170), // cmpltsd "yoyo"
    e([0x0F, 0xC2, 0x01, 0x00], IMM_OP | PREF_F3, SSE, 0 << 11 | 84, 3 << 4 | 15, 160), // cmpltss "yomd"
    e([0x0F, 0xC2, 0x01, 0x00], IMM_OP | PREF_F3, SSE, 1 << 11 | 84, 3 << 4 | 15, 170), // cmpltss "yoyo"
    e([0x0F, 0xC2, 0x04, 0x00], IMM_OP | PREF_F2, SSE2, 0 << 11 | 85, 3 << 4 | 15, 162), // cmpneqsd "yomq"
    e([0x0F, 0xC2, 0x04, 0x00], IMM_OP | PREF_F2, SSE2, 1 << 11 | 85, 3 << 4 | 15, 170), // cmpneqsd "yoyo"
    e([0x0F, 0xC2, 0x04, 0x00], IMM_OP | PREF_F3, SSE, 0 << 11 | 86, 3 << 4 | 15, 160), // cmpneqss "yomd"
    e([0x0F, 0xC2, 0x04, 0x00], IMM_OP | PREF_F3, SSE, 1 << 11 | 86, 3 << 4 | 15, 170), // cmpneqss "yoyo"
    e([0x0F, 0xC2, 0x06, 0x00], IMM_OP | PREF_F2, SSE2, 0 << 11 | 87, 3 << 4 | 15, 162), // cmpnlesd "yomq"
    e([0x0F, 0xC2, 0x06, 0x00], IMM_OP | PREF_F2, SSE2, 1 << 11 | 87, 3 << 4 | 15, 170), // cmpnlesd "yoyo"
    e([0x0F, 0xC2, 0x06, 0x00], IMM_OP | PREF_F3, SSE, 0 << 11 | 88, 3 << 4 | 15, 160), // cmpnless "yomd"
    e([0x0F, 0xC2, 0x06, 0x00], IMM_OP | PREF_F3, SSE, 1 << 11 | 88, 3 << 4 | 15, 170), // cmpnless "yoyo"
    e([0x0F, 0xC2, 0x05, 0x00], IMM_OP | PREF_F2, SSE2, 0 << 11 | 89, 3 << 4 | 15, 162), // cmpnltsd "yomq"
    e([0x0F, 0xC2, 0x05, 0x00], IMM_OP | PREF_F2, SSE2, 1 << 11 | 89, 3 << 4 | 15, 170), // cmpnltsd "yoyo"
    e([0x0F, 0xC2, 0x05, 0x00], IMM_OP | PREF_F3, SSE, 0 << 11 | 90, 3 << 4 | 15, 160), // cmpnltss "yomd"
    e([0x0F, 0xC2, 0x05, 0x00], IMM_OP | PREF_F3, SSE, 1 << 11 | 90, 3 << 4 | 15, 170), // cmpnltss "yoyo"
    e([0x0F, 0xC2, 0x07, 0x00], IMM_OP | PREF_F2, SSE2, 0 << 11 | 91, 3 << 4 | 15, 162), // cmpordsd "yomq"
    e([0x0F, 0xC2, 0x07, 0x00], IMM_OP | PREF_F2, SSE2, 1 << 11 | 91, 3 << 4 | 15, 170), // cmpordsd "yoyo"
    e([0x0F, 0xC2, 0x07, 0x00], IMM_OP | PREF_F3, SSE, 0 << 11 | 92, 3 << 4 | 15, 160), // cmpordss "yomd"
    e([0x0F, 0xC2, 0x07, 0x00], IMM_OP | PREF_F3, SSE, 1 << 11 | 92, 3 << 4 | 15, 170), // cmpordss "yoyo"
    e([0xA6, 0x00, 0x00, 0x00], REPE, 0, 0 << 11 | 93, 1 << 4 | 15, 0), // cmpsb ""
    e([0xA7, 0x00, 0x00, 0x00], REPE, 0, 0 << 11 | 94, 1 << 4 | 15, 0), // cmpsd ""
    e([0x0F, 0xC2, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 94, 2 << 4 | 15, 216), // cmpsd "yowoib"
    e([0xA7, 0x00, 0x00, 0x00], WITH_REXW | REPE, 0, 0 << 11 | 95, 1 << 4 | 15, 0), // cmpsq ""
    e([0x0F, 0xC2, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 96, 2 << 4 | 15, 207), // cmpss "yom1ib"
    e([0x0F, 0xC2, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 96, 2 << 4 | 15, 218), // cmpss "yoyoib"
    e([0xA7, 0x00, 0x00, 0x00], WORD_SIZE | REPE, 0, 0 << 11 | 97, 1 << 4 | 15, 0), // cmpsw ""
    e([0x0F, 0xC2, 0x03, 0x00], IMM_OP | PREF_F2, SSE2, 0 << 11 | 98, 3 << 4 | 15, 162), // cmpunordsd "yomq"
    e([0x0F, 0xC2, 0x03, 0x00], IMM_OP | PREF_F2, SSE2, 1 << 11 | 98, 3 << 4 | 15, 170), // cmpunordsd "yoyo"
    e([0x0F, 0xC2, 0x03, 0x00], IMM_OP | PREF_F3, SSE, 0 << 11 | 99, 3 << 4 | 15, 160), // cmpunordss "yomd"
    e([0x0F, 0xC2, 0x03, 0x00], IMM_OP | PREF_F3, SSE, 1 << 11 | 99, 3 << 4 | 15, 170), // cmpunordss "yoyo"
    e([0x0F, 0xB0, 0x00, 0x00], LOCK | ENC_MR, 0, 0 << 11 | 100, 2 << 4 | 15, 69), // cmpxchg "mbrb"
    e([0x0F, 0xB0, 0x00, 0x00], ENC_MR, 0, 1 << 11 | 100, 2 << 4 | 15, 96), // cmpxchg "rbrb"
    e([0x0F, 0xB1, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 2 << 11 | 100, 2 << 4 | 15, 66), // cmpxchg "m0r0"
    e([0x0F, 0xB1, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 3 << 11 | 100, 2 << 4 | 15, 87), // cmpxchg "r0r0"
    e([0x0F, 0xC7, 0x00, 0x00], WITH_REXW | LOCK, 0, 0 << 11 | 101, 2 << 4 | 1, 12), // cmpxchg16b "mo"
    e([0x0F, 0xC7, 0x00, 0x00], LOCK, 0, 0 << 11 | 102, 2 << 4 | 1, 14), // cmpxchg8b "mq"
    e([0x0F, 0x2F, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 103, 2 << 4 | 15, 162), // comisd "yomq"
    e([0x0F, 0x2F, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 103, 2 << 4 | 15, 170), // comisd "yoyo"
    e([0x0F, 0x2F, 0x00, 0x00], 0, SSE, 0 << 11 | 104, 2 << 4 | 15, 160), // comiss "yomd"
    e([0x0F, 0x2F, 0x00, 0x00], 0, SSE, 1 << 11 | 104, 2 << 4 | 15, 170), // comiss "yoyo"
    e([0x0F, 0xA2, 0x00, 0x00], 0, 0, 0 << 11 | 105, 2 << 4 | 15, 0), // cpuid ""
    e([0x99, 0x00, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 106, 1 << 4 | 15, 0), // cqo ""
    e([0x0F, 0x38, 0xF0, 0x00], AUTO_REXW | EXACT_SIZE | PREF_F2, 0, 0 << 11 | 107, 3 << 4 | 15, 90), // crc32 "r0vb"
    e([0x0F, 0x38, 0xF1, 0x00], WORD_SIZE | EXACT_SIZE | PREF_F2, 0, 1 << 11 | 107, 3 << 4 | 15, 104), // crc32 "rdvw"
    e([0x0F, 0x38, 0xF1, 0x00], AUTO_REXW | EXACT_SIZE | PREF_F2, 0, 2 << 11 | 107, 3 << 4 | 15, 89), // crc32 "r0v0"
    e([0x0F, 0xE6, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 108, 2 << 4 | 15, 167), // cvtpd2dq "yowo"
    e([0x0F, 0x2D, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 109, 2 << 4 | 15, 142), // cvtpd2pi "xqwo"
    e([0x0F, 0x5B, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 110, 2 << 4 | 15, 167), // cvtps2dq "yowo"
    e([0x0F, 0x2D, 0x00, 0x00], 0, MMX | SSE, 0 << 11 | 111, 2 << 4 | 15, 138), // cvtps2pi "xqmq"
    e([0x0F, 0x2D, 0x00, 0x00], 0, MMX | SSE, 1 << 11 | 111, 2 << 4 | 15, 144), // cvtps2pi "xqyo"
    e([0x0F, 0x2D, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 112, 2 << 4 | 15, 103), // cvtsd2si "rdmq"
    e([0x0F, 0x2D, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 112, 2 << 4 | 15, 106), // cvtsd2si "rdyo"
    e([0x0F, 0x2D, 0x00, 0x00], WITH_REXW | PREF_F2, SSE2, 2 << 11 | 112, 2 << 4 | 15, 113), // cvtsd2si "rqmq"
    e([0x0F, 0x2D, 0x00, 0x00], WITH_REXW | PREF_F2, SSE2, 3 << 11 | 112, 2 << 4 | 15, 116), // cvtsd2si "rqyo"
    e([0x0F, 0x5A, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 113, 2 << 4 | 15, 162), // cvtsd2ss "yomq"
    e([0x0F, 0x5A, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 113, 2 << 4 | 15, 170), // cvtsd2ss "yoyo"
    e([0x0F, 0x2A, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 114, 2 << 4 | 15, 165), // cvtsi2sd "yovd"
    e([0x0F, 0x2A, 0x00, 0x00], WITH_REXW | PREF_F2, SSE2, 1 << 11 | 114, 2 << 4 | 15, 166), // cvtsi2sd "yovq"
    e([0x0F, 0x2A, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 115, 2 << 4 | 15, 165), // cvtsi2ss "yovd"
    e([0x0F, 0x2A, 0x00, 0x00], WITH_REXW | PREF_F3, SSE, 1 << 11 | 115, 2 << 4 | 15, 166), // cvtsi2ss "yovq"
    e([0x0F, 0x5A, 0x00, 0x00], PREF_F3, SSE2, 0 << 11 | 116, 2 << 4 | 15, 160), // cvtss2sd "yomd"
    e([0x0F, 0x5A, 0x00, 0x00], PREF_F3, SSE2, 1 << 11 | 116, 2 << 4 | 15, 170), // cvtss2sd "yoyo"
    e([0x0F, 0x2D, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 117, 2 << 4 | 15, 102), // cvtss2si "rdmd"
    e([0x0F, 0x2D, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 117, 2 << 4 | 15, 106), // cvtss2si "rdyo"
    e([0x0F, 0x2D, 0x00, 0x00], WITH_REXW | PREF_F3, SSE, 2 << 11 | 117, 2 << 4 | 15, 111), // cvtss2si "rqmd"
    e([0x0F, 0x2D, 0x00, 0x00], WITH_REXW | PREF_F3, SSE, 3 << 11 | 117, 2 << 4 | 15, 116), // cvtss2si "rqyo"
    e([0x0F, 0xE6, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 118, 2 << 4 | 15, 167), // cvttpd2dq "yowo"
    e([0x0F, 0x2C, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 119, 2 << 4 | 15, 142), // cvttpd2pi "xqwo"
    e([0x0F, 0x5B, 0x00, 0x00], PREF_F3, SSE2, 0 << 11 | 120, 2 << 4 | 15, 167), // cvttps2dq "yowo"
    e([0x0F, 0x2C, 0x00, 0x00], 0, MMX | SSE, 0 << 11 | 121, 2 << 4 | 15, 138), // cvttps2pi "xqmq"
    e([0x0F, 0x2C, 0x00, 0x00], 0, MMX | SSE, 1 << 11 | 121, 2 << 4 | 15, 144), // cvttps2pi "xqyo"
    e([0x0F, 0x2C, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 122, 2 << 4 | 15, 103), // cvttsd2si "rdmq"
    e([0x0F, 0x2C, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 122, 2 << 4 | 15, 106), // cvttsd2si "rdyo"
    e([0x0F, 0x2C, 0x00, 0x00], WITH_REXW | PREF_F2, SSE2, 2 << 11 | 122, 2 << 4 | 15, 113), // cvttsd2si "rqmq"
    e([0x0F, 0x2C, 0x00, 0x00], WITH_REXW | PREF_F2, SSE2, 3 << 11 | 122, 2 << 4 | 15, 116), // cvttsd2si "rqyo"
    e([0x0F, 0x2C, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 123, 2 << 4 | 15, 102), // cvttss2si "rdmd"
    e([0x0F, 0x2C, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 123, 2 << 4 | 15, 106), // cvttss2si "rdyo"
    e([0x0F, 0x2C, 0x00, 0x00], WITH_REXW | PREF_F3, SSE, 2 << 11 | 123, 2 << 4 | 15, 111), // cvttss2si "rqmd"
    e([0x0F, 0x2C, 0x00, 0x00], WITH_REXW | PREF_F3, SSE, 3 << 11 | 123, 2 << 4 | 15, 116), // cvttss2si "rqyo"
    e([0x99, 0x00, 0x00, 0x00], WORD_SIZE, 0, 0 << 11 | 124, 1 << 4 | 15, 0), // cwd ""
    e([0x98, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 125, 1 << 4 | 15, 0), // cwde ""
    e([0xFE, 0x00, 0x00, 0x00], LOCK, 0, 0 << 11 | 126, 1 << 4 | 1, 10), // dec "mb"
    e([0xFE, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 126, 1 << 4 | 1, 19), // dec "rb"
    e([0xFF, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 2 << 11 | 126, 1 << 4 | 1, 9), // dec "m0"
    e([0xFF, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 126, 1 << 4 | 1, 18), // dec "r0"
    e([0xF6, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 127, 1 << 4 | 6, 24), // div "vb"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 127, 1 << 4 | 6, 23), // div "v0"
    e([0x0F, 0x5E, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 128, 2 << 4 | 15, 162), // divsd "yomq"
    e([0x0F, 0x5E, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 128, 2 << 4 | 15, 170), // divsd "yoyo"
    e([0x0F, 0x5E, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 129, 2 << 4 | 15, 160), // divss "yomd"
    e([0x0F, 0x5E, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 129, 2 << 4 | 15, 170), // divss "yoyo"
    e([0x0F, 0x39, 0x00, 0x00], 0, CYRIX, 0 << 11 | 130, 2 << 4 | 15, 0), // dmint ""
    e([0x0F, 0x77, 0x00, 0x00], 0, MMX, 0 << 11 | 131, 2 << 4 | 15, 0), // emms ""
    e([0xC8, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 132, 1 << 4 | 15, 61), // enter "iwib"
    e([0x0F, 0x78, 0x00, 0x00], PREF_66, SSE4A | AMD, 0 << 11 | 133, 2 << 4 | 0, 205), // extrq "yoibib"
    e([0x0F, 0x79, 0x00, 0x00], PREF_66, SSE4A | AMD, 1 << 11 | 133, 2 << 4 | 15, 170), // extrq "yoyo"
    e([0x0F, 0x37, 0x00, 0x00], 0, 0, 0 << 11 | 134, 2 << 4 | 15, 0), // getsec ""
    e([0xF4, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 135, 1 << 4 | 15, 0), // hlt ""
    e([0xF1, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 136, 1 << 4 | 15, 0), // icebp ""
    e([0xF6, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 137, 1 << 4 | 7, 24), // idiv "vb"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 137, 1 << 4 | 7, 23), // idiv "v0"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 138, 1 << 4 | 5, 23), // imul "v0"
    e([0xF6, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 138, 1 << 4 | 5, 24), // imul "vb"
    e([0x0F, 0xAF, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 138, 2 << 4 | 15, 89), // imul "r0v0"
    e([0x6B, 0x00, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 3 << 11 | 138, 1 << 4 | 15, 179), // imul "r0v0ib"
    e([0x69, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 4 << 11 | 138, 1 << 4 | 15, 178), // imul "r0v0i0"
    e([0xE4, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 139, 1 << 4 | 15, 29), // in "Abib"
    e([0xE5, 0x00, 0x00, 0x00], WORD_SIZE, 0, 1 << 11 | 139, 1 << 4 | 15, 38), // in "Awib"
    e([0xE5, 0x00, 0x00, 0x00], 0, 0, 2 << 11 | 139, 1 << 4 | 15, 33), // in "Adib"
    e([0xEC, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 139, 1 << 4 | 15, 28), // in "AbCw"
    e([0xED, 0x00, 0x00, 0x00], WORD_SIZE, 0, 4 << 11 | 139, 1 << 4 | 15, 37), // in "AwCw"
    e([0xED, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 139, 1 << 4 | 15, 32), // in "AdCw"
    e([0xFE, 0x00, 0x00, 0x00], LOCK, 0, 0 << 11 | 140, 1 << 4 | 0, 10), // inc "mb"
    e([0xFE, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 140, 1 << 4 | 0, 19), // inc "rb"
    e([0xFF, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 2 << 11 | 140, 1 << 4 | 0, 9), // inc "m0"
    e([0xFF, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 140, 1 << 4 | 0, 18), // inc "r0"
    e([0x6C, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 141, 1 << 4 | 15, 0), // insb ""
    e([0x6D, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 142, 1 << 4 | 15, 0), // insd ""
    e([0x0F, 0x79, 0x00, 0x00], PREF_F2, SSE4A | AMD, 0 << 11 | 143, 2 << 4 | 15, 170), // insertq "yoyo"
    e([0x0F, 0x78, 0x00, 0x00], PREF_F2, SSE4A | AMD, 1 << 11 | 143, 2 << 4 | 15, 229), // insertq "yoyoibib"
    e([0x6D, 0x00, 0x00, 0x00], WORD_SIZE | REP, 0, 0 << 11 | 144, 1 << 4 | 15, 0), // insw ""
    e([0xCD, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 145, 1 << 4 | 15, 5), // int "ib"
    e([0xF1, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 146, 1 << 4 | 15, 0), // int01 ""
    e([0xCC, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 147, 1 << 4 | 15, 0), // int03 ""
    e([0xF1, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 148, 1 << 4 | 15, 0), // int1 ""
    e([0xCC, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 149, 1 << 4 | 15, 0), // int3 ""
    e([0x0F, 0x08, 0x00, 0x00], 0, 0, 0 << 11 | 150, 2 << 4 | 15, 0), // invd ""
    e([0x0F, 0x38, 0x80, 0x00], PREF_66, VMX, 0 << 11 | 151, 3 << 4 | 15, 112), // invept "rqmo"
    e([0x0F, 0x01, 0x00, 0x00], 0, 0, 0 << 11 | 152, 2 << 4 | 7, 8), // invlpg "m1"
    e([0x0F, 0x01, 0xDF, 0x00], 0, AMD, 0 << 11 | 153, 3 << 4 | 15, 0), // invlpga ""
    e([0x0F, 0x01, 0xDF, 0x00], 0, AMD, 1 << 11 | 153, 3 << 4 | 15, 35), // invlpga "AqBd"
    e([0x0F, 0x38, 0x81, 0x00], PREF_66, VMX, 0 << 11 | 154, 3 << 4 | 15, 112), // invvpid "rqmo"
    e([0xCF, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 155, 1 << 4 | 15, 0), // iret ""
    e([0xCF, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 156, 1 << 4 | 15, 0), // iretd ""
    e([0xCF, 0x00, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 157, 1 << 4 | 15, 0), // iretq ""
    e([0xCF, 0x00, 0x00, 0x00], WORD_SIZE, 0, 0 << 11 | 158, 1 << 4 | 15, 0), // iretw ""
    e([0x77, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 159, 1 << 4 | 15, 16), // ja "ob"
    e([0x0F, 0x87, 0x00, 0x00], 0, 0, 1 << 11 | 159, 2 << 4 | 15, 17), // ja "od"
    e([0x73, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 160, 1 << 4 | 15, 16), // jae "ob"
    e([0x0F, 0x83, 0x00, 0x00], 0, 0, 1 << 11 | 160, 2 << 4 | 15, 17), // jae "od"
    e([0x72, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 161, 1 << 4 | 15, 16), // jb "ob"
    e([0x0F, 0x82, 0x00, 0x00], 0, 0, 1 << 11 | 161, 2 << 4 | 15, 17), // jb "od"
    e([0x76, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 162, 1 << 4 | 15, 16), // jbe "ob"
    e([0x0F, 0x86, 0x00, 0x00], 0, 0, 1 << 11 | 162, 2 << 4 | 15, 17), // jbe "od"
    e([0x72, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 163, 1 << 4 | 15, 16), // jc "ob"
    e([0x0F, 0x82, 0x00, 0x00], 0, 0, 1 << 11 | 163, 2 << 4 | 15, 17), // jc "od"
    e([0x74, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 164, 1 << 4 | 15, 16), // je "ob"
    e([0x0F, 0x84, 0x00, 0x00], 0, 0, 1 << 11 | 164, 2 << 4 | 15, 17), // je "od"
    e([0xE3, 0x00, 0x00, 0x00], PREF_67, 0, 0 << 11 | 165, 1 << 4 | 15, 16), // jecxz "ob"
    e([0x7F, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 166, 1 << 4 | 15, 16), // jg "ob"
    e([0x0F, 0x8F, 0x00, 0x00], 0, 0, 1 << 11 | 166, 2 << 4 | 15, 17), // jg "od"
    e([0x7D, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 167, 1 << 4 | 15, 16), // jge "ob"
    e([0x0F, 0x8D, 0x00, 0x00], 0, 0, 1 << 11 | 167, 2 << 4 | 15, 17), // jge "od"
    e([0x7C, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 168, 1 << 4 | 15, 16), // jl "ob"
    e([0x0F, 0x8C, 0x00, 0x00], 0, 0, 1 << 11 | 168, 2 << 4 | 15, 17), // jl "od"
    e([0x7E, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 169, 1 << 4 | 15, 16), // jle "ob"
    e([0x0F, 0x8E, 0x00, 0x00], 0, 0, 1 << 11 | 169, 2 << 4 | 15, 17), // jle "od"
    e([0xEB, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 170, 1 << 4 | 15, 16), // jmp "ob"
    e([0xE9, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 170, 1 << 4 | 15, 17), // jmp "od"
    e([0xFF, 0x00, 0x00, 0x00], AUTO_NO32, 0, 2 << 11 | 170, 1 << 4 | 4, 23), // jmp "v0"
    e([0x76, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 171, 1 << 4 | 15, 16), // jna "ob"
    e([0x0F, 0x86, 0x00, 0x00], 0, 0, 1 << 11 | 171, 2 << 4 | 15, 17), // jna "od"
    e([0x72, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 172, 1 << 4 | 15, 16), // jnae "ob"
    e([0x0F, 0x82, 0x00, 0x00], 0, 0, 1 << 11 | 172, 2 << 4 | 15, 17), // jnae "od"
    e([0x73, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 173, 1 << 4 | 15, 16), // jnb "ob"
    e([0x0F, 0x83, 0x00, 0x00], 0, 0, 1 << 11 | 173, 2 << 4 | 15, 17), // jnb "od"
    e([0x77, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 174, 1 << 4 | 15, 16), // jnbe "ob"
    e([0x0F, 0x87, 0x00, 0x00], 0, 0, 1 << 11 | 174, 2 << 4 | 15, 17), // jnbe "od"
    e([0x73, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 175, 1 << 4 | 15, 16), // jnc "ob"
    e([0x0F, 0x83, 0x00, 0x00], 0, 0, 1 << 11 | 175, 2 << 4 | 15, 17), // jnc "od"
    e([0x75, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 176, 1 << 4 | 15, 16), // jne "ob"
    e([0x0F, 0x85, 0x00, 0x00], 0, 0, 1 << 11 | 176, 2 << 4 | 15, 17), // jne "od"
    e([0x7E, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 177, 1 << 4 | 15, 16), // jng "ob"
    e([0x0F, 0x8E, 0x00, 0x00], 0, 0, 1 << 11 | 177, 2 << 4 | 15, 17), // jng "od"
    e([0x7C, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 178, 1 << 4 | 15, 16), // jnge "ob"
    e([0x0F, 0x8C, 0x00, 0x00], 0, 0, 1 << 11 | 178, 2 << 4 | 15, 17), // jnge "od"
    e([0x7D, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 179, 1 << 4 | 15, 16), // jnl "ob"
    e([0x0F, 0x8D, 0x00, 0x00], 0, 0, 1 << 11 | 179, 2 << 4 | 15, 17), // jnl "od"
    e([0x7F, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 180, 1 << 4 | 15, 16), // jnle "ob"
    e([0x0F, 0x8F, 0x00, 0x00], 0, 0, 1 << 11 | 180, 2 << 4 | 15, 17), // jnle "od"
    e([0x71, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 181, 1 << 4 | 15, 16), // jno "ob"
    e([0x0F, 0x81, 0x00, 0x00], 0, 0, 1 << 11 | 181, 2 << 4 | 15, 17), // jno "od"
    e([0x7B, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 182, 1 << 4 | 15, 16), // jnp "ob"
    e([0x0F, 0x8B, 0x00, 0x00], 0, 0, 1 << 11 | 182, 2 << 4 | 15, 17), // jnp "od"
    e([0x79, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 183, 1 << 4 | 15, 16), // jns "ob"
    e([0x0F, 0x89, 0x00, 0x00], 0, 0, 1 << 11 | 183, 2 << 4 | 15, 17), // jns "od"
    e([0x75, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 184, 1 << 4 | 15, 16), // jnz "ob"
    e([0x0F, 0x85, 0x00, 0x00], 0, 0, 1 << 11 | 184, 2 << 4 | 15, 17), // jnz "od"
    e([0x70, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 185, 1 << 4 | 15, 16), // jo "ob"
    e([0x0F, 0x80, 0x00, 0x00], 0, 0, 1 << 11 | 185, 2 << 4 | 15, 17), // jo "od"
    e([0x7A, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 186, 1 << 4 | 15, 16), // jp "ob"
    e([0x0F, 0x8A, 0x00, 0x00], 0, 0, 1 << 11 | 186, 2 << 4 | 15, 17), // jp "od"
    e([0x7A, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 187, 1 << 4 | 15, 16), // jpe "ob"
    e([0x0F, 0x8A, 0x00, 0x00], 0, 0, 1 << 11 | 187, 2 << 4 | 15, 17), // jpe "od"
    e([0x7B, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 188, 1 << 4 | 15, 16), // jpo "ob"
    e([0x0F, 0x8B, 0x00, 0x00], 0, 0, 1 << 11 | 188, 2 << 4 | 15, 17), // jpo "od"
    e([0xE3, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 189, 1 << 4 | 15, 16), // jrcxz "ob"
    e([0x78, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 190, 1 << 4 | 15, 16), // js "ob"
    e([0x0F, 0x88, 0x00, 0x00], 0, 0, 1 << 11 | 190, 2 << 4 | 15, 17), // js "od"
    e([0x74, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 0 << 11 | 191, 1 << 4 | 15, 16), // jz "ob"
    e([0x0F, 0x84, 0x00, 0x00], 0, 0, 1 << 11 | 191, 2 << 4 | 15, 17), // jz "od"
    e([0x9F, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 192, 1 << 4 | 15, 0), // lahf ""
    e([0x0F, 0x02, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 193, 2 << 4 | 15, 86), // lar "r0mw"
    e([0x0F, 0x02, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 193, 2 << 4 | 15, 87), // lar "r0r0"
    e([0x0F, 0xF0, 0x00, 0x00], PREF_F2, SSE3, 0 << 11 | 194, 2 << 4 | 15, 161), // lddqu "yomo"
    e([0x0F, 0xAE, 0x00, 0x00], 0, SSE, 0 << 11 | 195, 2 << 4 | 2, 11), // ldmxcsr "md"
    e([0x8D, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 196, 1 << 4 | 15, 82), // lea "r0m1"
    e([0xC9, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 197, 1 << 4 | 15, 0), // leave ""
    e([0x0F, 0xAE, 0xE8, 0x00], 0, AMD, 0 << 11 | 198, 3 << 4 | 15, 0), // lfence ""
    e([0x0F, 0xB4, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 199, 2 << 4 | 15, 82), // lfs "r0m1"
    e([0x0F, 0x01, 0x00, 0x00], 0, 0, 0 << 11 | 200, 2 << 4 | 2, 8), // lgdt "m1"
    e([0x0F, 0xB5, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 201, 2 << 4 | 15, 82), // lgs "r0m1"
    e([0x0F, 0x01, 0x00, 0x00], 0, 0, 0 << 11 | 202, 2 << 4 | 3, 8), // lidt "m1"
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 203, 2 << 4 | 2, 8), // lldt "m1"
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 203, 2 << 4 | 2, 22), // lldt "rw"
    e([0x09, 0x12, 0x00, 0x00], XOP_OP | AUTO_REXW, AMD, 0 << 11 | 204, 2 << 4 | 0, 18), // llwpcb "r0"
    e([0x0F, 0x01, 0x00, 0x00], 0, 0, 0 << 11 | 205, 2 << 4 | 6, 8), // lmsw "m1"
    e([0x0F, 0x01, 0x00, 0x00], 0, 0, 1 << 11 | 205, 2 << 4 | 6, 22), // lmsw "rw"
    e([0xAC, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 206, 1 << 4 | 15, 0), // lodsb ""
    e([0xAD, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 207, 1 << 4 | 15, 0), // lodsd ""
    e([0xAD, 0x00, 0x00, 0x00], WITH_REXW | REP, 0, 0 << 11 | 208, 1 << 4 | 15, 0), // lodsq ""
    e([0xAD, 0x00, 0x00, 0x00], WORD_SIZE | REP, 0, 0 << 11 | 209, 1 << 4 | 15, 0), // lodsw ""
    e([0xE2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 210, 1 << 4 | 15, 16), // loop "ob"
    e([0xE1, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 211, 1 << 4 | 15, 16), // loope "ob"
    e([0xE0, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 212, 1 << 4 | 15, 16), // loopne "ob"
    e([0xE0, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 213, 1 << 4 | 15, 16), // loopnz "ob"
    e([0xE1, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 214, 1 << 4 | 15, 16), // loopz "ob"
    e([0x0F, 0x03, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 215, 2 << 4 | 15, 86), // lsl "r0mw"
    e([0x0F, 0x03, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 215, 2 << 4 | 15, 87), // lsl "r0r0"
    e([0x0F, 0xB2, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 216, 2 << 4 | 15, 82), // lss "r0m1"
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 217, 2 << 4 | 3, 8), // ltr "m1"
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 217, 2 << 4 | 3, 22), // ltr "rw"
    e([0x10, 0x12, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, AMD, 0 << 11 | 218, 2 << 4 | 0, 180), // lwpins "r0v0id"
    e([0x10, 0x12, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, AMD, 0 << 11 | 219, 2 << 4 | 1, 180), // lwpval "r0v0id"
    e([0x0F, 0xBD, 0x00, 0x00], AUTO_SIZE | PREF_F3, AMD, 0 << 11 | 220, 2 << 4 | 15, 89), // lzcnt "r0v0"
    e([0x0F, 0xF7, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 221, 2 << 4 | 15, 170), // maskmovdqu "yoyo"
    e([0x0F, 0xF7, 0x00, 0x00], 0, MMX, 0 << 11 | 222, 2 << 4 | 15, 143), // maskmovq "xqxq"
    e([0x0F, 0x5F, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 223, 2 << 4 | 15, 162), // maxsd "yomq"
    e([0x0F, 0x5F, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 223, 2 << 4 | 15, 170), // maxsd "yoyo"
    e([0x0F, 0x5F, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 224, 2 << 4 | 15, 160), // maxss "yomd"
    e([0x0F, 0x5F, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 224, 2 << 4 | 15, 170), // maxss "yoyo"
    e([0x0F, 0xAE, 0xF0, 0x00], 0, AMD, 0 << 11 | 225, 3 << 4 | 15, 0), // mfence ""
    e([0x0F, 0x5D, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 226, 2 << 4 | 15, 162), // minsd "yomq"
    e([0x0F, 0x5D, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 226, 2 << 4 | 15, 170), // minsd "yoyo"
    e([0x0F, 0x5D, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 227, 2 << 4 | 15, 160), // minss "yomd"
    e([0x0F, 0x5D, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 227, 2 << 4 | 15, 170), // minss "yoyo"
    e([0x0F, 0x01, 0xC8, 0x00], 0, 0, 0 << 11 | 228, 3 << 4 | 15, 0), // monitor ""
    e([0x0F, 0x01, 0xC8, 0x00], 0, 0, 1 << 11 | 228, 3 << 4 | 15, 172), // monitor "AqBdCd"
    e([0x0F, 0x01, 0xFA, 0x00], 0, AMD, 0 << 11 | 229, 3 << 4 | 15, 0), // monitorx ""
    e([0x0F, 0x01, 0xFA, 0x00], 0, AMD, 1 << 11 | 229, 3 << 4 | 15, 171), // monitorx "A0BdCd"
    e([0x0F, 0xA6, 0xC0, 0x00], PREF_F3, CYRIX, 0 << 11 | 230, 3 << 4 | 15, 0), // montmul ""
    e([0x89, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 0 << 11 | 231, 1 << 4 | 15, 126), // mov "v0r0"
    e([0x88, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 231, 1 << 4 | 15, 129), // mov "vbrb"
    e([0x8B, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 231, 1 << 4 | 15, 89), // mov "r0v0"
    e([0x8A, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 231, 1 << 4 | 15, 97), // mov "rbvb"
    e([0x8C, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 4 << 11 | 231, 1 << 4 | 15, 88), // mov "r0sw"
    e([0x8C, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 231, 1 << 4 | 15, 78), // mov "mwsw"
    e([0x8C, 0x00, 0x00, 0x00], 0, 0, 6 << 11 | 231, 1 << 4 | 15, 120), // mov "swmw"
    e([0x8C, 0x00, 0x00, 0x00], 0, 0, 7 << 11 | 231, 1 << 4 | 15, 121), // mov "swrw"
    e([0xB0, 0x00, 0x00, 0x00], SHORT_ARG, 0, 8 << 11 | 231, 1 << 4 | 15, 94), // mov "rbib"
    e([0xB8, 0x00, 0x00, 0x00], WORD_SIZE | SHORT_ARG, 0, 9 << 11 | 231, 1 << 4 | 15, 117), // mov "rwiw"
    e([0xB8, 0x00, 0x00, 0x00], SHORT_ARG, 0, 10 << 11 | 231, 1 << 4 | 15, 101), // mov "rdid"
    e([0xC7, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 11 << 11 | 231, 1 << 4 | 0, 124), // mov "v0i0"
    e([0xC6, 0x00, 0x00, 0x00], 0, 0, 12 << 11 | 231, 1 << 4 | 0, 128), // mov "vbib"
    e([0xB8, 0x00, 0x00, 0x00], WITH_REXW | SHORT_ARG, 0, 13 << 11 | 231, 1 << 4 | 15, 110), // mov "rqiq"
    e([0x0F, 0x22, 0x00, 0x00], 0, 0, 14 << 11 | 231, 2 << 4 | 15, 49), // mov "cdrd"
    e([0x0F, 0x22, 0x00, 0x00], 0, 0, 15 << 11 | 231, 2 << 4 | 15, 50), // mov "cqrq"
    e([0x0F, 0x20, 0x00, 0x00], 0, 0, 16 << 11 | 231, 2 << 4 | 15, 99), // mov "rdcd"
    e([0x0F, 0x20, 0x00, 0x00], 0, 0, 17 << 11 | 231, 2 << 4 | 15, 108), // mov "rqcq"
    e([0x0F, 0x22, 0x00, 0x00], PREF_F0, 0, 18 << 11 | 231, 2 << 4 | 0, 43), // mov "Wdrd"
    e([0x0F, 0x22, 0x00, 0x00], PREF_F0, 0, 19 << 11 | 231, 2 << 4 | 0, 44), // mov "Wqrq"
    e([0x0F, 0x22, 0x00, 0x00], PREF_F0, 0, 20 << 11 | 231, 2 << 4 | 0, 98), // mov "rdWd"
    e([0x0F, 0x22, 0x00, 0x00], PREF_F0, 0, 21 << 11 | 231, 2 << 4 | 0, 107), // mov "rqWq"
    e([0x0F, 0x23, 0x00, 0x00], 0, 0, 22 << 11 | 231, 2 << 4 | 15, 51), // mov "ddrd"
    e([0x0F, 0x23, 0x00, 0x00], 0, 0, 23 << 11 | 231, 2 << 4 | 15, 52), // mov "dqrq"
    e([0x0F, 0x21, 0x00, 0x00], 0, 0, 24 << 11 | 231, 2 << 4 | 15, 100), // mov "rddd"
    e([0x0F, 0x21, 0x00, 0x00], 0, 0, 25 << 11 | 231, 2 << 4 | 15, 109), // mov "rqdq"
    e([0xA0, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 232, 1 << 4 | 15, 30), // movabs "Abiq"
    e([0xA1, 0x00, 0x00, 0x00], WORD_SIZE, 0, 1 << 11 | 232, 1 << 4 | 15, 39), // movabs "Awiq"
    e([0xA1, 0x00, 0x00, 0x00], 0, 0, 2 << 11 | 232, 1 << 4 | 15, 34), // movabs "Adiq"
    e([0xA1, 0x00, 0x00, 0x00], WITH_REXW, 0, 3 << 11 | 232, 1 << 4 | 15, 36), // movabs "Aqiq"
    e([0xA2, 0x00, 0x00, 0x00], 0, 0, 4 << 11 | 232, 1 << 4 | 15, 57), // movabs "iqAb"
    e([0xA3, 0x00, 0x00, 0x00], WORD_SIZE, 0, 5 << 11 | 232, 1 << 4 | 15, 60), // movabs "iqAw"
    e([0xA3, 0x00, 0x00, 0x00], 0, 0, 6 << 11 | 232, 1 << 4 | 15, 58), // movabs "iqAd"
    e([0xA3, 0x00, 0x00, 0x00], WITH_REXW, 0, 7 << 11 | 232, 1 << 4 | 15, 59), // movabs "iqAq"
    e([0x0F, 0x29, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 233, 2 << 4 | 15, 73), // movapd "moyo"
    e([0x0F, 0x28, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 233, 2 << 4 | 15, 161), // movapd "yomo"
    e([0x0F, 0x28, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 233, 2 << 4 | 15, 170), // movapd "yoyo"
    e([0x0F, 0x29, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 3 << 11 | 233, 2 << 4 | 15, 170), // movapd "yoyo"
    e([0x0F, 0x28, 0x00, 0x00], 0, SSE, 0 << 11 | 234, 2 << 4 | 15, 167), // movaps "yowo"
    e([0x0F, 0x29, 0x00, 0x00], ENC_MR, SSE, 1 << 11 | 234, 2 << 4 | 15, 136), // movaps "woyo"
    e([0x0F, 0x38, 0xF1, 0x00], AUTO_SIZE | ENC_MR, 0, 0 << 11 | 235, 3 << 4 | 15, 66), // movbe "m0r0"
    e([0x0F, 0x38, 0xF0, 0x00], AUTO_SIZE, 0, 1 << 11 | 235, 3 << 4 | 15, 83), // movbe "r0m0"
    e([0x0F, 0x7E, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 236, 2 << 4 | 15, 71), // movd "mdyo"
    e([0x0F, 0x6E, 0x00, 0x00], 0, MMX, 1 << 11 | 236, 2 << 4 | 15, 140), // movd "xqvd"
    e([0x0F, 0x6E, 0x00, 0x00], WITH_REXW, MMX, 2 << 11 | 236, 2 << 4 | 15, 141), // movd "xqvq"
    e([0x0F, 0x6E, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 236, 2 << 4 | 15, 160), // movd "yomd"
    e([0x0F, 0x6E, 0x00, 0x00], PREF_66, SSE2, 4 << 11 | 236, 2 << 4 | 15, 165), // movd "yovd"
    e([0x0F, 0x7E, 0x00, 0x00], ENC_MR, MMX, 5 << 11 | 236, 2 << 4 | 15, 130), // movd "vdxq"
    e([0x0F, 0x7E, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 6 << 11 | 236, 2 << 4 | 15, 131), // movd "vdyo"
    e([0x0F, 0x7E, 0x00, 0x00], WITH_REXW | ENC_MR, MMX, 7 << 11 | 236, 2 << 4 | 15, 133), // movd "vqxq"
    e([0x0F, 0x12, 0x00, 0x00], PREF_F2, SSE3, 0 << 11 | 237, 2 << 4 | 15, 162), // movddup "yomq"
    e([0x0F, 0x12, 0x00, 0x00], PREF_F2, SSE3, 1 << 11 | 237, 2 << 4 | 15, 170), // movddup "yoyo"
    e([0x0F, 0xD6, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 238, 2 << 4 | 15, 144), // movdq2q "xqyo"
    e([0x0F, 0x7F, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 239, 2 << 4 | 15, 73), // movdqa "moyo"
    e([0x0F, 0x6F, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 239, 2 << 4 | 15, 161), // movdqa "yomo"
    e([0x0F, 0x6F, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 239, 2 << 4 | 15, 170), // movdqa "yoyo"
    e([0x0F, 0x7F, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 3 << 11 | 239, 2 << 4 | 15, 170), // movdqa "yoyo"
    e([0x0F, 0x7F, 0x00, 0x00], PREF_F3 | ENC_MR, SSE2, 0 << 11 | 240, 2 << 4 | 15, 73), // movdqu "moyo"
    e([0x0F, 0x6F, 0x00, 0x00], PREF_F3, SSE2, 1 << 11 | 240, 2 << 4 | 15, 161), // movdqu "yomo"
    e([0x0F, 0x6F, 0x00, 0x00], PREF_F3, SSE2, 2 << 11 | 240, 2 << 4 | 15, 170), // movdqu "yoyo"
    e([0x0F, 0x7F, 0x00, 0x00], PREF_F3 | ENC_MR, SSE2, 3 << 11 | 240, 2 << 4 | 15, 170), // movdqu "yoyo"
    e([0x0F, 0x12, 0x00, 0x00], 0, SSE, 0 << 11 | 241, 2 << 4 | 15, 170), // movhlps "yoyo"
    e([0x0F, 0x17, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 242, 2 << 4 | 15, 63), // movhpd "m1yo"
    e([0x0F, 0x16, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 242, 2 << 4 | 15, 158), // movhpd "yom1"
    e([0x0F, 0x17, 0x00, 0x00], ENC_MR, SSE, 0 << 11 | 243, 2 << 4 | 15, 77), // movhps "mqyo"
    e([0x0F, 0x16, 0x00, 0x00], 0, SSE, 1 << 11 | 243, 2 << 4 | 15, 162), // movhps "yomq"
    e([0x0F, 0x16, 0x00, 0x00], 0, SSE, 0 << 11 | 244, 2 << 4 | 15, 170), // movlhps "yoyo"
    e([0x0F, 0x13, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 245, 2 << 4 | 15, 77), // movlpd "mqyo"
    e([0x0F, 0x12, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 245, 2 << 4 | 15, 162), // movlpd "yomq"
    e([0x0F, 0x13, 0x00, 0x00], ENC_MR, SSE, 0 << 11 | 246, 2 << 4 | 15, 77), // movlps "mqyo"
    e([0x0F, 0x12, 0x00, 0x00], 0, SSE, 1 << 11 | 246, 2 << 4 | 15, 162), // movlps "yomq"
    e([0x0F, 0x50, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 247, 2 << 4 | 15, 106), // movmskpd "rdyo"
    e([0x0F, 0x50, 0x00, 0x00], WITH_REXW | PREF_66, SSE2, 1 << 11 | 247, 2 << 4 | 15, 116), // movmskpd "rqyo"
    e([0x0F, 0x50, 0x00, 0x00], 0, SSE, 0 << 11 | 248, 2 << 4 | 15, 106), // movmskps "rdyo"
    e([0x0F, 0x50, 0x00, 0x00], WITH_REXW, SSE, 1 << 11 | 248, 2 << 4 | 15, 116), // movmskps "rqyo"
    e([0x0F, 0xE7, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 249, 2 << 4 | 15, 73), // movntdq "moyo"
    e([0x0F, 0x38, 0x2A, 0x00], PREF_66, SSE41, 0 << 11 | 250, 3 << 4 | 15, 161), // movntdqa "yomo"
    e([0x0F, 0xC3, 0x00, 0x00], ENC_MR, 0, 0 << 11 | 251, 2 << 4 | 15, 70), // movnti "mdrd"
    e([0x0F, 0xC3, 0x00, 0x00], WITH_REXW | ENC_MR, 0, 1 << 11 | 251, 2 << 4 | 15, 75), // movnti "mqrq"
    e([0x0F, 0x2B, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 252, 2 << 4 | 15, 73), // movntpd "moyo"
    e([0x0F, 0x2B, 0x00, 0x00], ENC_MR, SSE, 0 << 11 | 253, 2 << 4 | 15, 73), // movntps "moyo"
    e([0x0F, 0xE7, 0x00, 0x00], ENC_MR, MMX, 0 << 11 | 254, 2 << 4 | 15, 76), // movntq "mqxq"
    e([0x0F, 0x2B, 0x00, 0x00], PREF_F2 | ENC_MR, SSE4A | AMD, 0 << 11 | 255, 2 << 4 | 15, 77), // movntsd "mqyo"
    e([0x0F, 0x2B, 0x00, 0x00], PREF_F3 | ENC_MR, SSE4A | AMD, 0 << 11 | 256, 2 << 4 | 15, 71), // movntss "mdyo"
    e([0x0F, 0xD6, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 257, 2 << 4 | 15, 77), // movq "mqyo"
    e([0x0F, 0x6F, 0x00, 0x00], 0, MMX, 1 << 11 | 257, 2 << 4 | 15, 139), // movq "xquq"
    e([0x0F, 0x6E, 0x00, 0x00], WITH_REXW, MMX, 2 << 11 | 257, 2 << 4 | 15, 141), // movq "xqvq"
    e([0x0F, 0x7E, 0x00, 0x00], PREF_F3, SSE2, 3 << 11 | 257, 2 << 4 | 15, 162), // movq "yomq"
    e([0x0F, 0x6E, 0x00, 0x00], WITH_REXW | PREF_66, SSE2, 4 << 11 | 257, 2 << 4 | 15, 166), // movq "yovq"
    e([0x0F, 0x7E, 0x00, 0x00], PREF_F3, SSE2, 5 << 11 | 257, 2 << 4 | 15, 170), // movq "yoyo"
    e([0x0F, 0xD6, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 6 << 11 | 257, 2 << 4 | 15, 170), // movq "yoyo"
    e([0x0F, 0x7F, 0x00, 0x00], ENC_MR, MMX, 7 << 11 | 257, 2 << 4 | 15, 122), // movq "uqxq"
    e([0x0F, 0x7E, 0x00, 0x00], WITH_REXW | ENC_MR, MMX, 8 << 11 | 257, 2 << 4 | 15, 133), // movq "vqxq"
    e([0x0F, 0x7E, 0x00, 0x00], WITH_REXW | PREF_66 | ENC_MR, SSE2, 9 << 11 | 257, 2 << 4 | 15, 134), // movq "vqyo"
    e([0x0F, 0xD6, 0x00, 0x00], PREF_F3, SSE2, 0 << 11 | 258, 2 << 4 | 15, 168), // movq2dq "yoxq"
    e([0xA4, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 259, 1 << 4 | 15, 0), // movsb ""
    e([0xA5, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 260, 1 << 4 | 15, 0), // movsd ""
    e([0x0F, 0x11, 0x00, 0x00], PREF_F2 | ENC_MR, SSE2, 1 << 11 | 260, 2 << 4 | 15, 77), // movsd "mqyo"
    e([0x0F, 0x10, 0x00, 0x00], PREF_F2, SSE2, 2 << 11 | 260, 2 << 4 | 15, 162), // movsd "yomq"
    e([0x0F, 0x10, 0x00, 0x00], PREF_F2, SSE2, 3 << 11 | 260, 2 << 4 | 15, 170), // movsd "yoyo"
    e([0x0F, 0x11, 0x00, 0x00], PREF_F2 | ENC_MR, SSE2, 4 << 11 | 260, 2 << 4 | 15, 170), // movsd "yoyo"
    e([0x0F, 0x16, 0x00, 0x00], PREF_F3, SSE3, 0 << 11 | 261, 2 << 4 | 15, 162), // movshdup "yomq"
    e([0x0F, 0x16, 0x00, 0x00], PREF_F3, SSE3, 1 << 11 | 261, 2 << 4 | 15, 170), // movshdup "yoyo"
    e([0x0F, 0x12, 0x00, 0x00], PREF_F3, SSE3, 0 << 11 | 262, 2 << 4 | 15, 162), // movsldup "yomq"
    e([0x0F, 0x12, 0x00, 0x00], PREF_F3, SSE3, 1 << 11 | 262, 2 << 4 | 15, 170), // movsldup "yoyo"
    e([0xA5, 0x00, 0x00, 0x00], WITH_REXW | REP, 0, 0 << 11 | 263, 1 << 4 | 15, 0), // movsq ""
    e([0x0F, 0x11, 0x00, 0x00], PREF_F3 | ENC_MR, SSE, 0 << 11 | 264, 2 << 4 | 15, 71), // movss "mdyo"
    e([0x0F, 0x10, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 264, 2 << 4 | 15, 160), // movss "yomd"
    e([0x0F, 0x10, 0x00, 0x00], PREF_F3, SSE, 2 << 11 | 264, 2 << 4 | 15, 170), // movss "yoyo"
    e([0xA5, 0x00, 0x00, 0x00], WORD_SIZE | REP, 0, 0 << 11 | 265, 1 << 4 | 15, 0), // movsw ""
    e([0x63, 0x00, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 266, 1 << 4 | 15, 114), // movsx "rqvd"
    e([0x0F, 0xBE, 0x00, 0x00], WORD_SIZE, 0, 1 << 11 | 266, 2 << 4 | 15, 118), // movsx "rwmb"
    e([0x0F, 0xBE, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 266, 2 << 4 | 15, 90), // movsx "r0vb"
    e([0x0F, 0xBF, 0x00, 0x00], AUTO_REXW | EXACT_SIZE, 0, 3 << 11 | 266, 2 << 4 | 15, 91), // movsx "r0vw"
    e([0x63, 0x00, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 267, 1 << 4 | 15, 114), // movsxd "rqvd"
    e([0x0F, 0x11, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 0 << 11 | 268, 2 << 4 | 15, 73), // movupd "moyo"
    e([0x0F, 0x10, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 268, 2 << 4 | 15, 161), // movupd "yomo"
    e([0x0F, 0x10, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 268, 2 << 4 | 15, 170), // movupd "yoyo"
    e([0x0F, 0x11, 0x00, 0x00], PREF_66 | ENC_MR, SSE2, 3 << 11 | 268, 2 << 4 | 15, 170), // movupd "yoyo"
    e([0x0F, 0x10, 0x00, 0x00], 0, SSE, 0 << 11 | 269, 2 << 4 | 15, 167), // movups "yowo"
    e([0x0F, 0x11, 0x00, 0x00], ENC_MR, SSE, 1 << 11 | 269, 2 << 4 | 15, 136), // movups "woyo"
    e([0x0F, 0xB6, 0x00, 0x00], WORD_SIZE, 0, 0 << 11 | 270, 2 << 4 | 15, 118), // movzx "rwmb"
    e([0x0F, 0xB6, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 270, 2 << 4 | 15, 90), // movzx "r0vb"
    e([0x0F, 0xB7, 0x00, 0x00], AUTO_REXW | EXACT_SIZE, 0, 2 << 11 | 270, 2 << 4 | 15, 91), // movzx "r0vw"
    e([0x0F, 0x3A, 0x42, 0x00], PREF_66, SSE41, 0 << 11 | 271, 3 << 4 | 15, 209), // mpsadbw "yomqib"
    e([0x0F, 0x3A, 0x42, 0x00], PREF_66, SSE41, 1 << 11 | 271, 3 << 4 | 15, 218), // mpsadbw "yoyoib"
    e([0xF6, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 272, 1 << 4 | 4, 24), // mul "vb"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 272, 1 << 4 | 4, 23), // mul "v0"
    e([0x0F, 0x59, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 273, 2 << 4 | 15, 162), // mulsd "yomq"
    e([0x0F, 0x59, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 273, 2 << 4 | 15, 170), // mulsd "yoyo"
    e([0x0F, 0x59, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 274, 2 << 4 | 15, 160), // mulss "yomd"
    e([0x0F, 0x59, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 274, 2 << 4 | 15, 170), // mulss "yoyo"
    e([0x02, 0xF6, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2, BMI2, 0 << 11 | 275, 2 << 4 | 15, 177), // mulx "r0r0v0"
    e([0x0F, 0x01, 0xC9, 0x00], 0, 0, 0 << 11 | 276, 3 << 4 | 15, 0), // mwait ""
    e([0x0F, 0x01, 0xC9, 0x00], 0, 0, 1 << 11 | 276, 3 << 4 | 15, 31), // mwait "AdBd"
    e([0x0F, 0x01, 0xFB, 0x00], 0, AMD, 0 << 11 | 277, 3 << 4 | 15, 0), // mwaitx ""
    e([0x0F, 0x01, 0xFB, 0x00], 0, AMD, 1 << 11 | 277, 3 << 4 | 15, 31), // mwaitx "AdBd"
    e([0xF6, 0x00, 0x00, 0x00], LOCK, 0, 0 << 11 | 278, 1 << 4 | 3, 10), // neg "mb"
    e([0xF6, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 278, 1 << 4 | 3, 19), // neg "rb"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 2 << 11 | 278, 1 << 4 | 3, 9), // neg "m0"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 278, 1 << 4 | 3, 18), // neg "r0"
    e([0x90, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 279, 1 << 4 | 15, 0), // nop ""
    e([0x0F, 0x1F, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 279, 2 << 4 | 0, 23), // nop "v0"
    e([0xF6, 0x00, 0x00, 0x00], LOCK, 0, 0 << 11 | 280, 1 << 4 | 2, 10), // not "mb"
    e([0xF6, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 280, 1 << 4 | 2, 19), // not "rb"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 2 << 11 | 280, 1 << 4 | 2, 9), // not "m0"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 280, 1 << 4 | 2, 18), // not "r0"
    e([0x0C, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 281, 1 << 4 | 15, 29), // or "Abib"
    e([0x80, 0x00, 0x00, 0x00], LOCK, 0, 1 << 11 | 281, 1 << 4 | 1, 68), // or "mbib"
    e([0x08, 0x00, 0x00, 0x00], LOCK | ENC_MR, 0, 2 << 11 | 281, 1 << 4 | 15, 69), // or "mbrb"
    e([0x80, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 281, 1 << 4 | 1, 94), // or "rbib"
    e([0x08, 0x00, 0x00, 0x00], ENC_MR, 0, 4 << 11 | 281, 1 << 4 | 15, 96), // or "rbrb"
    e([0x0A, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 281, 1 << 4 | 15, 97), // or "rbvb"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 6 << 11 | 281, 1 << 4 | 1, 81), // or "r0ib"
    e([0x0D, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 281, 1 << 4 | 15, 26), // or "A0i0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 8 << 11 | 281, 1 << 4 | 1, 64), // or "m0i0"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 9 << 11 | 281, 1 << 4 | 1, 65), // or "m0ib"
    e([0x09, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 10 << 11 | 281, 1 << 4 | 15, 66), // or "m0r0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 11 << 11 | 281, 1 << 4 | 1, 80), // or "r0i0"
    e([0x09, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 12 << 11 | 281, 1 << 4 | 15, 87), // or "r0r0"
    e([0x0B, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 13 << 11 | 281, 1 << 4 | 15, 89), // or "r0v0"
    e([0xE6, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 282, 1 << 4 | 15, 54), // out "ibAb"
    e([0xE7, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 282, 1 << 4 | 15, 56), // out "ibAw"
    e([0xE7, 0x00, 0x00, 0x00], 0, 0, 2 << 11 | 282, 1 << 4 | 15, 55), // out "ibAd"
    e([0xEE, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 282, 1 << 4 | 15, 40), // out "CwAb"
    e([0xEF, 0x00, 0x00, 0x00], WORD_SIZE, 0, 4 << 11 | 282, 1 << 4 | 15, 42), // out "CwAw"
    e([0xEF, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 282, 1 << 4 | 15, 41), // out "CwAd"
    e([0x6E, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 283, 1 << 4 | 15, 0), // outsb ""
    e([0x6F, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 284, 1 << 4 | 15, 0), // outsd ""
    e([0x6F, 0x00, 0x00, 0x00], WORD_SIZE | REP, 0, 0 << 11 | 285, 1 << 4 | 15, 0), // outsw ""
    e([0x90, 0x00, 0x00, 0x00], PREF_F3, 0, 0 << 11 | 286, 1 << 4 | 15, 0), // pause ""
    e([0x0F, 0xA1, 0x00, 0x00], 0, 0, 0 << 11 | 287, 2 << 4 | 15, 2), // pop "Uw"
    e([0x0F, 0xA9, 0x00, 0x00], 0, 0, 1 << 11 | 287, 2 << 4 | 15, 3), // pop "Vw"
    e([0x58, 0x00, 0x00, 0x00], AUTO_NO32 | SHORT_ARG, 0, 2 << 11 | 287, 1 << 4 | 15, 18), // pop "r0"
    e([0x8F, 0x00, 0x00, 0x00], AUTO_NO32, 0, 3 << 11 | 287, 1 << 4 | 0, 23), // pop "v0"
    e([0x0F, 0xB8, 0x00, 0x00], AUTO_SIZE | PREF_F3, 0, 0 << 11 | 288, 2 << 4 | 15, 89), // popcnt "r0v0"
    e([0x9D, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 289, 1 << 4 | 15, 0), // popf ""
    e([0x9D, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 290, 1 << 4 | 15, 0), // popfq ""
    e([0x9D, 0x00, 0x00, 0x00], WORD_SIZE, 0, 0 << 11 | 291, 1 << 4 | 15, 0), // popfw ""
    e([0x0F, 0x0D, 0x00, 0x00], 0, TDNOW, 0 << 11 | 292, 2 << 4 | 0, 14), // prefetch "mq"
    e([0x0F, 0x18, 0x00, 0x00], 0, 0, 0 << 11 | 293, 2 << 4 | 0, 10), // prefetchnta "mb"
    e([0x0F, 0x18, 0x00, 0x00], 0, 0, 0 << 11 | 294, 2 << 4 | 1, 10), // prefetcht0 "mb"
    e([0x0F, 0x18, 0x00, 0x00], 0, 0, 0 << 11 | 295, 2 << 4 | 2, 10), // prefetcht1 "mb"
    e([0x0F, 0x18, 0x00, 0x00], 0, 0, 0 << 11 | 296, 2 << 4 | 3, 10), // prefetcht2 "mb"
    e([0x0F, 0x0D, 0x00, 0x00], 0, TDNOW, 0 << 11 | 297, 2 << 4 | 1, 14), // prefetchw "mq"
    e([0x0F, 0xA0, 0x00, 0x00], 0, 0, 0 << 11 | 298, 2 << 4 | 15, 2), // push "Uw"
    e([0x0F, 0xA8, 0x00, 0x00], 0, 0, 1 << 11 | 298, 2 << 4 | 15, 3), // push "Vw"
    e([0x6A, 0x00, 0x00, 0x00], EXACT_SIZE, 0, 2 << 11 | 298, 1 << 4 | 15, 5), // push "ib"
    e([0x68, 0x00, 0x00, 0x00], WORD_SIZE | EXACT_SIZE, 0, 3 << 11 | 298, 1 << 4 | 15, 7), // push "iw"
    e([0x68, 0x00, 0x00, 0x00], 0, 0, 4 << 11 | 298, 1 << 4 | 15, 6), // push "id"
    e([0x50, 0x00, 0x00, 0x00], AUTO_NO32 | SHORT_ARG, 0, 5 << 11 | 298, 1 << 4 | 15, 18), // push "r0"
    e([0xFF, 0x00, 0x00, 0x00], AUTO_NO32, 0, 6 << 11 | 298, 1 << 4 | 6, 23), // push "v0"
    e([0x9C, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 299, 1 << 4 | 15, 0), // pushf ""
    e([0x9C, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 300, 1 << 4 | 15, 0), // pushfq ""
    e([0x9C, 0x00, 0x00, 0x00], WORD_SIZE, 0, 0 << 11 | 301, 1 << 4 | 15, 0), // pushfw ""
    e([0xD2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 302, 1 << 4 | 2, 127), // rcl "vbBb"
    e([0xC0, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 302, 1 << 4 | 2, 128), // rcl "vbib"
    e([0xD3, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 302, 1 << 4 | 2, 123), // rcl "v0Bb"
    e([0xC1, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 302, 1 << 4 | 2, 125), // rcl "v0ib"
    e([0x0F, 0x53, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 303, 2 << 4 | 15, 160), // rcpss "yomd"
    e([0x0F, 0x53, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 303, 2 << 4 | 15, 170), // rcpss "yoyo"
    e([0xD2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 304, 1 << 4 | 3, 127), // rcr "vbBb"
    e([0xC0, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 304, 1 << 4 | 3, 128), // rcr "vbib"
    e([0xD3, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 304, 1 << 4 | 3, 123), // rcr "v0Bb"
    e([0xC1, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 304, 1 << 4 | 3, 125), // rcr "v0ib"
    e([0x0F, 0xAE, 0x00, 0x00], PREF_F3, 0, 0 << 11 | 305, 2 << 4 | 0, 20), // rdfsbase "rd"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW | PREF_F3, 0, 1 << 11 | 305, 2 << 4 | 0, 21), // rdfsbase "rq"
    e([0x0F, 0xAE, 0x00, 0x00], PREF_F3, 0, 0 << 11 | 306, 2 << 4 | 1, 20), // rdgsbase "rd"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW | PREF_F3, 0, 1 << 11 | 306, 2 << 4 | 1, 21), // rdgsbase "rq"
    e([0x0F, 0x3A, 0x00, 0x00], 0, CYRIX, 0 << 11 | 307, 2 << 4 | 15, 0), // rdm ""
    e([0x0F, 0x32, 0x00, 0x00], 0, 0, 0 << 11 | 308, 2 << 4 | 15, 0), // rdmsr ""
    e([0x0F, 0xC7, 0x00, 0x00], PREF_F3, 0, 0 << 11 | 309, 2 << 4 | 7, 21), // rdpid "rq"
    e([0x0F, 0x01, 0xEE, 0x00], 0, 0, 0 << 11 | 310, 3 << 4 | 15, 0), // rdpkru ""
    e([0x0F, 0x33, 0x00, 0x00], 0, 0, 0 << 11 | 311, 2 << 4 | 15, 0), // rdpmc ""
    e([0x0F, 0xC7, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 312, 2 << 4 | 6, 21), // rdrand "rq"
    e([0x0F, 0xC7, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 313, 2 << 4 | 7, 21), // rdseed "rq"
    e([0x0F, 0x36, 0x00, 0x00], 0, CYRIX, 0 << 11 | 314, 2 << 4 | 0, 25), // rdshr "vd"
    e([0x0F, 0x31, 0x00, 0x00], 0, 0, 0 << 11 | 315, 2 << 4 | 15, 0), // rdtsc ""
    e([0x0F, 0x01, 0xF9, 0x00], 0, 0, 0 << 11 | 316, 3 << 4 | 15, 0), // rdtscp ""
    e([0xC3, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 317, 1 << 4 | 15, 0), // ret ""
    e([0xC2, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 317, 1 << 4 | 15, 7), // ret "iw"
    e([0xCB, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 318, 1 << 4 | 15, 0), // retf ""
    e([0xCA, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 318, 1 << 4 | 15, 7), // retf "iw"
    e([0xC3, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 319, 1 << 4 | 15, 0), // retn ""
    e([0xC2, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 319, 1 << 4 | 15, 7), // retn "iw"
    e([0xD2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 320, 1 << 4 | 0, 127), // rol "vbBb"
    e([0xC0, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 320, 1 << 4 | 0, 128), // rol "vbib"
    e([0xD3, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 320, 1 << 4 | 0, 123), // rol "v0Bb"
    e([0xC1, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 320, 1 << 4 | 0, 125), // rol "v0ib"
    e([0xD2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 321, 1 << 4 | 1, 127), // ror "vbBb"
    e([0xC0, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 321, 1 << 4 | 1, 128), // ror "vbib"
    e([0xD3, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 321, 1 << 4 | 1, 123), // ror "v0Bb"
    e([0xC1, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 321, 1 << 4 | 1, 125), // ror "v0ib"
    e([0x03, 0xF0, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2, BMI2, 0 << 11 | 322, 2 << 4 | 15, 179), // rorx "r0v0ib"
    e([0x0F, 0x3A, 0x0B, 0x00], PREF_66, SSE41, 0 << 11 | 323, 3 << 4 | 15, 209), // roundsd "yomqib"
    e([0x0F, 0x3A, 0x0B, 0x00], PREF_66, SSE41, 1 << 11 | 323, 3 << 4 | 15, 218), // roundsd "yoyoib"
    e([0x0F, 0x3A, 0x0A, 0x00], PREF_66, SSE41, 0 << 11 | 324, 3 << 4 | 15, 209), // roundss "yomqib"
    e([0x0F, 0x3A, 0x0A, 0x00], PREF_66, SSE41, 1 << 11 | 324, 3 << 4 | 15, 218), // roundss "yoyoib"
    e([0x0F, 0x79, 0x00, 0x00], EXACT_SIZE, CYRIX, 0 << 11 | 325, 2 << 4 | 15, 119), // rsdc "swmp"
    e([0x0F, 0x7B, 0x00, 0x00], EXACT_SIZE, CYRIX, 0 << 11 | 326, 2 << 4 | 0, 13), // rsldt "mp"
    e([0x0F, 0xAA, 0x00, 0x00], 0, 0, 0 << 11 | 327, 2 << 4 | 15, 0), // rsm ""
    e([0x0F, 0x52, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 328, 2 << 4 | 15, 160), // rsqrtss "yomd"
    e([0x0F, 0x52, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 328, 2 << 4 | 15, 170), // rsqrtss "yoyo"
    e([0x0F, 0x7D, 0x00, 0x00], EXACT_SIZE, CYRIX, 0 << 11 | 329, 2 << 4 | 0, 13), // rsts "mp"
    e([0x9E, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 330, 1 << 4 | 15, 0), // sahf ""
    e([0xD2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 331, 1 << 4 | 4, 127), // sal "vbBb"
    e([0xC0, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 331, 1 << 4 | 4, 128), // sal "vbib"
    e([0xD3, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 331, 1 << 4 | 4, 123), // sal "v0Bb"
    e([0xC1, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 331, 1 << 4 | 4, 125), // sal "v0ib"
    e([0xD2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 332, 1 << 4 | 7, 127), // sar "vbBb"
    e([0xC0, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 332, 1 << 4 | 7, 128), // sar "vbib"
    e([0xD3, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 332, 1 << 4 | 7, 123), // sar "v0Bb"
    e([0xC1, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 332, 1 << 4 | 7, 125), // sar "v0ib"
    e([0x02, 0xF7, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F3 | ENC_MR, BMI2, 0 << 11 | 333, 2 << 4 | 15, 181), // sarx "r0v0r0"
    e([0x1C, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 334, 1 << 4 | 15, 29), // sbb "Abib"
    e([0x80, 0x00, 0x00, 0x00], LOCK, 0, 1 << 11 | 334, 1 << 4 | 3, 68), // sbb "mbib"
    e([0x18, 0x00, 0x00, 0x00], LOCK | ENC_MR, 0, 2 << 11 | 334, 1 << 4 | 15, 69), // sbb "mbrb"
    e([0x80, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 334, 1 << 4 | 3, 94), // sbb "rbib"
    e([0x18, 0x00, 0x00, 0x00], ENC_MR, 0, 4 << 11 | 334, 1 << 4 | 15, 96), // sbb "rbrb"
    e([0x1A, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 334, 1 << 4 | 15, 97), // sbb "rbvb"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 6 << 11 | 334, 1 << 4 | 3, 81), // sbb "r0ib"
    e([0x1D, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 334, 1 << 4 | 15, 26), // sbb "A0i0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 8 << 11 | 334, 1 << 4 | 3, 64), // sbb "m0i0"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 9 << 11 | 334, 1 << 4 | 3, 65), // sbb "m0ib"
    e([0x19, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 10 << 11 | 334, 1 << 4 | 15, 66), // sbb "m0r0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 11 << 11 | 334, 1 << 4 | 3, 80), // sbb "r0i0"
    e([0x19, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 12 << 11 | 334, 1 << 4 | 15, 87), // sbb "r0r0"
    e([0x1B, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 13 << 11 | 334, 1 << 4 | 15, 89), // sbb "r0v0"
    e([0xAE, 0x00, 0x00, 0x00], REPE, 0, 0 << 11 | 335, 1 << 4 | 15, 0), // scasb ""
    e([0xAF, 0x00, 0x00, 0x00], REPE, 0, 0 << 11 | 336, 1 << 4 | 15, 0), // scasd ""
    e([0xAF, 0x00, 0x00, 0x00], WITH_REXW | REPE, 0, 0 << 11 | 337, 1 << 4 | 15, 0), // scasq ""
    e([0xAF, 0x00, 0x00, 0x00], WORD_SIZE | REPE, 0, 0 << 11 | 338, 1 << 4 | 15, 0), // scasw ""
    e([0x0F, 0x97, 0x00, 0x00], 0, 0, 0 << 11 | 339, 2 << 4 | 0, 24), // seta "vb"
    e([0x0F, 0x93, 0x00, 0x00], 0, 0, 0 << 11 | 340, 2 << 4 | 0, 24), // setae "vb"
    e([0x0F, 0x92, 0x00, 0x00], 0, 0, 0 << 11 | 341, 2 << 4 | 0, 24), // setb "vb"
    e([0x0F, 0x96, 0x00, 0x00], 0, 0, 0 << 11 | 342, 2 << 4 | 0, 24), // setbe "vb"
    e([0x0F, 0x92, 0x00, 0x00], 0, 0, 0 << 11 | 343, 2 << 4 | 0, 24), // setc "vb"
    e([0x0F, 0x94, 0x00, 0x00], 0, 0, 0 << 11 | 344, 2 << 4 | 0, 24), // sete "vb"
    e([0x0F, 0x9F, 0x00, 0x00], 0, 0, 0 << 11 | 345, 2 << 4 | 0, 24), // setg "vb"
    e([0x0F, 0x9D, 0x00, 0x00], 0, 0, 0 << 11 | 346, 2 << 4 | 0, 24), // setge "vb"
    e([0x0F, 0x9C, 0x00, 0x00], 0, 0, 0 << 11 | 347, 2 << 4 | 0, 24), // setl "vb"
    e([0x0F, 0x9E, 0x00, 0x00], 0, 0, 0 << 11 | 348, 2 << 4 | 0, 24), // setle "vb"
    e([0x0F, 0x96, 0x00, 0x00], 0, 0, 0 << 11 | 349, 2 << 4 | 0, 24), // setna "vb"
    e([0x0F, 0x92, 0x00, 0x00], 0, 0, 0 << 11 | 350, 2 << 4 | 0, 24), // setnae "vb"
    e([0x0F, 0x93, 0x00, 0x00], 0, 0, 0 << 11 | 351, 2 << 4 | 0, 24), // setnb "vb"
    e([0x0F, 0x97, 0x00, 0x00], 0, 0, 0 << 11 | 352, 2 << 4 | 0, 24), // setnbe "vb"
    e([0x0F, 0x93, 0x00, 0x00], 0, 0, 0 << 11 | 353, 2 << 4 | 0, 24), // setnc "vb"
    e([0x0F, 0x95, 0x00, 0x00], 0, 0, 0 << 11 | 354, 2 << 4 | 0, 24), // setne "vb"
    e([0x0F, 0x9E, 0x00, 0x00], 0, 0, 0 << 11 | 355, 2 << 4 | 0, 24), // setng "vb"
    e([0x0F, 0x9C, 0x00, 0x00], 0, 0, 0 << 11 | 356, 2 << 4 | 0, 24), // setnge "vb"
    e([0x0F, 0x9D, 0x00, 0x00], 0, 0, 0 << 11 | 357, 2 << 4 | 0, 24), // setnl "vb"
    e([0x0F, 0x9F, 0x00, 0x00], 0, 0, 0 << 11 | 358, 2 << 4 | 0, 24), // setnle "vb"
    e([0x0F, 0x91, 0x00, 0x00], 0, 0, 0 << 11 | 359, 2 << 4 | 0, 24), // setno "vb"
    e([0x0F, 0x9B, 0x00, 0x00], 0, 0, 0 << 11 | 360, 2 << 4 | 0, 24), // setnp "vb"
    e([0x0F, 0x99, 0x00, 0x00], 0, 0, 0 << 11 | 361, 2 << 4 | 0, 24), // setns "vb"
    e([0x0F, 0x95, 0x00, 0x00], 0, 0, 0 << 11 | 362, 2 << 4 | 0, 24), // setnz "vb"
    e([0x0F, 0x90, 0x00, 0x00], 0, 0, 0 << 11 | 363, 2 << 4 | 0, 24), // seto "vb"
    e([0x0F, 0x9A, 0x00, 0x00], 0, 0, 0 << 11 | 364, 2 << 4 | 0, 24), // setp "vb"
    e([0x0F, 0x9A, 0x00, 0x00], 0, 0, 0 << 11 | 365, 2 << 4 | 0, 24), // setpe "vb"
    e([0x0F, 0x9B, 0x00, 0x00], 0, 0, 0 << 11 | 366, 2 << 4 | 0, 24), // setpo "vb"
    e([0x0F, 0x98, 0x00, 0x00], 0, 0, 0 << 11 | 367, 2 << 4 | 0, 24), // sets "vb"
    e([0x0F, 0x94, 0x00, 0x00], 0, 0, 0 << 11 | 368, 2 << 4 | 0, 24), // setz "vb"
    e([0x0F, 0xAE, 0xF8, 0x00], 0, AMD, 0 << 11 | 369, 3 << 4 | 15, 0), // sfence ""
    e([0x0F, 0x01, 0x00, 0x00], 0, 0, 0 << 11 | 370, 2 << 4 | 0, 8), // sgdt "m1"
    e([0xD2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 371, 1 << 4 | 4, 127), // shl "vbBb"
    e([0xC0, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 371, 1 << 4 | 4, 128), // shl "vbib"
    e([0xD3, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 371, 1 << 4 | 4, 123), // shl "v0Bb"
    e([0xC1, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 371, 1 << 4 | 4, 125), // shl "v0ib"
    e([0x0F, 0xA5, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 0 << 11 | 372, 2 << 4 | 15, 185), // shld "v0r0Bb"
    e([0x0F, 0xA4, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 1 << 11 | 372, 2 << 4 | 15, 186), // shld "v0r0ib"
    e([0x02, 0xF7, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_66 | ENC_MR, BMI2, 0 << 11 | 373, 2 << 4 | 15, 181), // shlx "r0v0r0"
    e([0xD2, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 374, 1 << 4 | 5, 127), // shr "vbBb"
    e([0xC0, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 374, 1 << 4 | 5, 128), // shr "vbib"
    e([0xD3, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 2 << 11 | 374, 1 << 4 | 5, 123), // shr "v0Bb"
    e([0xC1, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 3 << 11 | 374, 1 << 4 | 5, 125), // shr "v0ib"
    e([0x0F, 0xAD, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 0 << 11 | 375, 2 << 4 | 15, 185), // shrd "v0r0Bb"
    e([0x0F, 0xAC, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 1 << 11 | 375, 2 << 4 | 15, 186), // shrd "v0r0ib"
    e([0x02, 0xF7, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2 | ENC_MR, BMI2, 0 << 11 | 376, 2 << 4 | 15, 181), // shrx "r0v0r0"
    e([0x0F, 0x01, 0x00, 0x00], 0, 0, 0 << 11 | 377, 2 << 4 | 1, 8), // sidt "m1"
    e([0x0F, 0x01, 0xDE, 0x00], 0, 0, 0 << 11 | 378, 3 << 4 | 15, 0), // skinit ""
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 379, 2 << 4 | 0, 8), // sldt "m1"
    e([0x0F, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 379, 2 << 4 | 0, 18), // sldt "r0"
    e([0x09, 0x12, 0x00, 0x00], XOP_OP | AUTO_REXW, AMD, 0 << 11 | 380, 2 << 4 | 1, 18), // slwpcb "r0"
    e([0x0F, 0x38, 0x00, 0x00], 0, CYRIX, 0 << 11 | 381, 2 << 4 | 15, 0), // smint ""
    e([0x0F, 0x01, 0x00, 0x00], 0, 0, 0 << 11 | 382, 2 << 4 | 4, 8), // smsw "m1"
    e([0x0F, 0x01, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 382, 2 << 4 | 4, 18), // smsw "r0"
    e([0x0F, 0x51, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 383, 2 << 4 | 15, 162), // sqrtsd "yomq"
    e([0x0F, 0x51, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 383, 2 << 4 | 15, 170), // sqrtsd "yoyo"
    e([0x0F, 0x51, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 384, 2 << 4 | 15, 160), // sqrtss "yomd"
    e([0x0F, 0x51, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 384, 2 << 4 | 15, 170), // sqrtss "yoyo"
    e([0x0F, 0x01, 0xCB, 0x00], 0, 0, 0 << 11 | 385, 3 << 4 | 15, 0), // stac ""
    e([0xF9, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 386, 1 << 4 | 15, 0), // stc ""
    e([0xFD, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 387, 1 << 4 | 15, 0), // std ""
    e([0x0F, 0x01, 0xDC, 0x00], 0, VMX | AMD, 0 << 11 | 388, 3 << 4 | 15, 0), // stgi ""
    e([0xFB, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 389, 1 << 4 | 15, 0), // sti ""
    e([0x0F, 0xAE, 0x00, 0x00], 0, SSE, 0 << 11 | 390, 2 << 4 | 3, 11), // stmxcsr "md"
    e([0xAA, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 391, 1 << 4 | 15, 0), // stosb ""
    e([0xAB, 0x00, 0x00, 0x00], REP, 0, 0 << 11 | 392, 1 << 4 | 15, 0), // stosd ""
    e([0xAB, 0x00, 0x00, 0x00], WITH_REXW | REP, 0, 0 << 11 | 393, 1 << 4 | 15, 0), // stosq ""
    e([0xAB, 0x00, 0x00, 0x00], WORD_SIZE | REP, 0, 0 << 11 | 394, 1 << 4 | 15, 0), // stosw ""
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 395, 2 << 4 | 1, 8), // str "m1"
    e([0x0F, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 1 << 11 | 395, 2 << 4 | 1, 18), // str "r0"
    e([0x2C, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 396, 1 << 4 | 15, 29), // sub "Abib"
    e([0x80, 0x00, 0x00, 0x00], LOCK, 0, 1 << 11 | 396, 1 << 4 | 5, 68), // sub "mbib"
    e([0x28, 0x00, 0x00, 0x00], LOCK | ENC_MR, 0, 2 << 11 | 396, 1 << 4 | 15, 69), // sub "mbrb"
    e([0x80, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 396, 1 << 4 | 5, 94), // sub "rbib"
    e([0x28, 0x00, 0x00, 0x00], ENC_MR, 0, 4 << 11 | 396, 1 << 4 | 15, 96), // sub "rbrb"
    e([0x2A, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 396, 1 << 4 | 15, 97), // sub "rbvb"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 6 << 11 | 396, 1 << 4 | 5, 81), // sub "r0ib"
    e([0x2D, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 396, 1 << 4 | 15, 26), // sub "A0i0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 8 << 11 | 396, 1 << 4 | 5, 64), // sub "m0i0"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 9 << 11 | 396, 1 << 4 | 5, 65), // sub "m0ib"
    e([0x29, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 10 << 11 | 396, 1 << 4 | 15, 66), // sub "m0r0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 11 << 11 | 396, 1 << 4 | 5, 80), // sub "r0i0"
    e([0x29, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 12 << 11 | 396, 1 << 4 | 15, 87), // sub "r0r0"
    e([0x2B, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 13 << 11 | 396, 1 << 4 | 15, 89), // sub "r0v0"
    e([0x0F, 0x5C, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 397, 2 << 4 | 15, 162), // subsd "yomq"
    e([0x0F, 0x5C, 0x00, 0x00], PREF_F2, SSE2, 1 << 11 | 397, 2 << 4 | 15, 170), // subsd "yoyo"
    e([0x0F, 0x5C, 0x00, 0x00], PREF_F3, SSE, 0 << 11 | 398, 2 << 4 | 15, 160), // subss "yomd"
    e([0x0F, 0x5C, 0x00, 0x00], PREF_F3, SSE, 1 << 11 | 398, 2 << 4 | 15, 170), // subss "yoyo"
    e([0x0F, 0x78, 0x00, 0x00], EXACT_SIZE | ENC_MR, CYRIX, 0 << 11 | 399, 2 << 4 | 15, 74), // svdc "mpsw"
    e([0x0F, 0x7A, 0x00, 0x00], EXACT_SIZE, CYRIX, 0 << 11 | 400, 2 << 4 | 0, 13), // svldt "mp"
    e([0x0F, 0x7C, 0x00, 0x00], EXACT_SIZE, CYRIX, 0 << 11 | 401, 2 << 4 | 0, 13), // svts "mp"
    e([0x0F, 0x01, 0xF8, 0x00], 0, 0, 0 << 11 | 402, 3 << 4 | 15, 0), // swapgs ""
    e([0x0F, 0x05, 0x00, 0x00], 0, AMD, 0 << 11 | 403, 2 << 4 | 15, 0), // syscall ""
    e([0x0F, 0x07, 0x00, 0x00], 0, AMD, 0 << 11 | 404, 2 << 4 | 15, 0), // sysret ""
    e([0x09, 0x01, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 405, 2 << 4 | 7, 89), // t1mskc "r0v0"
    e([0xA8, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 406, 1 << 4 | 15, 29), // test "Abib"
    e([0x84, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 406, 1 << 4 | 15, 95), // test "rbmb"
    e([0xF6, 0x00, 0x00, 0x00], 0, 0, 2 << 11 | 406, 1 << 4 | 0, 128), // test "vbib"
    e([0x84, 0x00, 0x00, 0x00], ENC_MR, 0, 3 << 11 | 406, 1 << 4 | 15, 129), // test "vbrb"
    e([0xA9, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 4 << 11 | 406, 1 << 4 | 15, 26), // test "A0i0"
    e([0x85, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 5 << 11 | 406, 1 << 4 | 15, 83), // test "r0m0"
    e([0xF7, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 6 << 11 | 406, 1 << 4 | 0, 124), // test "v0i0"
    e([0x85, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 7 << 11 | 406, 1 << 4 | 15, 126), // test "v0r0"
    e([0x0F, 0xBC, 0x00, 0x00], AUTO_SIZE | PREF_F3, BMI1, 0 << 11 | 407, 2 << 4 | 15, 89), // tzcnt "r0v0"
    e([0x09, 0x01, 0x00, 0x00], XOP_OP | AUTO_REXW | ENC_VM, TBM, 0 << 11 | 408, 2 << 4 | 4, 89), // tzmsk "r0v0"
    e([0x0F, 0x2E, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 409, 2 << 4 | 15, 162), // ucomisd "yomq"
    e([0x0F, 0x2E, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 409, 2 << 4 | 15, 170), // ucomisd "yoyo"
    e([0x0F, 0x2E, 0x00, 0x00], 0, SSE, 0 << 11 | 410, 2 << 4 | 15, 160), // ucomiss "yomd"
    e([0x0F, 0x2E, 0x00, 0x00], 0, SSE, 1 << 11 | 410, 2 << 4 | 15, 170), // ucomiss "yoyo"
    e([0x0F, 0x0B, 0x00, 0x00], 0, 0, 0 << 11 | 411, 2 << 4 | 15, 0), // ud2 ""
    e([0x0F, 0x0B, 0x00, 0x00], 0, 0, 0 << 11 | 412, 2 << 4 | 15, 0), // ud2a ""
    e([0x0F, 0x09, 0x00, 0x00], 0, 0, 0 << 11 | 413, 2 << 4 | 15, 0), // wbinvd ""
    e([0x0F, 0xAE, 0x00, 0x00], PREF_F3, 0, 0 << 11 | 414, 2 << 4 | 2, 20), // wrfsbase "rd"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW | PREF_F3, 0, 1 << 11 | 414, 2 << 4 | 2, 21), // wrfsbase "rq"
    e([0x0F, 0xAE, 0x00, 0x00], PREF_F3, 0, 0 << 11 | 415, 2 << 4 | 3, 20), // wrgsbase "rd"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW | PREF_F3, 0, 1 << 11 | 415, 2 << 4 | 3, 21), // wrgsbase "rq"
    e([0x0F, 0x30, 0x00, 0x00], 0, 0, 0 << 11 | 416, 2 << 4 | 15, 0), // wrmsr ""
    e([0x0F, 0x01, 0xEF, 0x00], 0, 0, 0 << 11 | 417, 3 << 4 | 15, 0), // wrpkru ""
    e([0x0F, 0x37, 0x00, 0x00], 0, CYRIX, 0 << 11 | 418, 2 << 4 | 0, 25), // wrshr "vd"
    e([0x34, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 419, 1 << 4 | 15, 29), // xor "Abib"
    e([0x80, 0x00, 0x00, 0x00], LOCK, 0, 1 << 11 | 419, 1 << 4 | 6, 68), // xor "mbib"
    e([0x30, 0x00, 0x00, 0x00], LOCK | ENC_MR, 0, 2 << 11 | 419, 1 << 4 | 15, 69), // xor "mbrb"
    e([0x80, 0x00, 0x00, 0x00], 0, 0, 3 << 11 | 419, 1 << 4 | 6, 94), // xor "rbib"
    e([0x30, 0x00, 0x00, 0x00], ENC_MR, 0, 4 << 11 | 419, 1 << 4 | 15, 96), // xor "rbrb"
    e([0x32, 0x00, 0x00, 0x00], 0, 0, 5 << 11 | 419, 1 << 4 | 15, 97), // xor "rbvb"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | EXACT_SIZE, 0, 6 << 11 | 419, 1 << 4 | 6, 81), // xor "r0ib"
    e([0x35, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 419, 1 << 4 | 15, 26), // xor "A0i0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 8 << 11 | 419, 1 << 4 | 6, 64), // xor "m0i0"
    e([0x83, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK, 0, 9 << 11 | 419, 1 << 4 | 6, 65), // xor "m0ib"
    e([0x31, 0x00, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 10 << 11 | 419, 1 << 4 | 15, 66), // xor "m0r0"
    e([0x81, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 11 << 11 | 419, 1 << 4 | 6, 80), // xor "r0i0"
    e([0x31, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 12 << 11 | 419, 1 << 4 | 15, 87), // xor "r0r0"
    e([0x33, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 13 << 11 | 419, 1 << 4 | 15, 89), // xor "r0v0"
    e([0x0F, 0x38, 0xDE, 0x00], PREF_66, SSE, 0 << 11 | 420, 3 << 4 | 15, 167), // aesdec "yowo"
    e([0x0F, 0x38, 0xDF, 0x00], PREF_66, SSE, 0 << 11 | 421, 3 << 4 | 15, 167), // aesdeclast "yowo"
    e([0x0F, 0x38, 0xDC, 0x00], PREF_66, SSE, 0 << 11 | 422, 3 << 4 | 15, 167), // aesenc "yowo"
    e([0x0F, 0x38, 0xDD, 0x00], PREF_66, SSE, 0 << 11 | 423, 3 << 4 | 15, 167), // aesenclast "yowo"
    e([0x0F, 0x38, 0xDB, 0x00], PREF_66, SSE, 0 << 11 | 424, 3 << 4 | 15, 167), // aesimc "yowo"
    e([0x0F, 0x3A, 0xDF, 0x00], PREF_66, SSE, 0 << 11 | 425, 3 << 4 | 15, 216), // aeskeygenassist "yowoib"
    e([0x0F, 0x38, 0xC9, 0x00], 0, SHA, 0 << 11 | 426, 3 << 4 | 15, 167), // sha1msg1 "yowo"
    e([0x0F, 0x38, 0xCA, 0x00], 0, SHA, 0 << 11 | 427, 3 << 4 | 15, 167), // sha1msg2 "yowo"
    e([0x0F, 0x38, 0xC8, 0x00], 0, SHA, 0 << 11 | 428, 3 << 4 | 15, 167), // sha1nexte "yowo"
    e([0x0F, 0x3A, 0xCC, 0x00], 0, SHA, 0 << 11 | 429, 3 << 4 | 15, 216), // sha1rnds4 "yowoib"
    e([0x0F, 0x38, 0xCC, 0x00], 0, SHA, 0 << 11 | 430, 3 << 4 | 15, 167), // sha256msg1 "yowo"
    e([0x0F, 0x38, 0xCD, 0x00], 0, SHA, 0 << 11 | 431, 3 << 4 | 15, 167), // sha256msg2 "yowo"
    e([0x0F, 0x38, 0xCB, 0x00], 0, SHA, 0 << 11 | 432, 3 << 4 | 15, 167), // sha256rnds2 "yowo"
    e([0xC6, 0xF8, 0x00, 0x00], 0, RTM, 0 << 11 | 433, 2 << 4 | 15, 5), // xabort "ib"
    e([0x0F, 0xC0, 0x00, 0x00], LOCK | ENC_MR, 0, 0 << 11 | 434, 2 << 4 | 15, 69), // xadd "mbrb"
    e([0x0F, 0xC0, 0x00, 0x00], ENC_MR, 0, 1 << 11 | 434, 2 << 4 | 15, 96), // xadd "rbrb"
    e([0x0F, 0xC1, 0x00, 0x00], AUTO_SIZE | LOCK | ENC_MR, 0, 2 << 11 | 434, 2 << 4 | 15, 66), // xadd "m0r0"
    e([0x0F, 0xC1, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 3 << 11 | 434, 2 << 4 | 15, 87), // xadd "r0r0"
    e([0xC7, 0xF8, 0x00, 0x00], 0, RTM, 0 << 11 | 435, 2 << 4 | 15, 17), // xbegin "od"
    e([0x86, 0x00, 0x00, 0x00], LOCK | ENC_MR, 0, 0 << 11 | 436, 1 << 4 | 15, 69), // xchg "mbrb"
    e([0x86, 0x00, 0x00, 0x00], LOCK, 0, 1 << 11 | 436, 1 << 4 | 15, 95), // xchg "rbmb"
    e([0x86, 0x00, 0x00, 0x00], 0, 0, 2 << 11 | 436, 1 << 4 | 15, 96), // xchg "rbrb"
    e([0x86, 0x00, 0x00, 0x00], ENC_MR, 0, 3 << 11 | 436, 1 << 4 | 15, 96), // xchg "rbrb"
    e([0x90, 0x00, 0x00, 0x00], AUTO_SIZE | SHORT_ARG, 0, 4 << 11 | 436, 1 << 4 | 15, 27), // xchg "A0r0"
    e([0x87, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 5 << 11 | 436, 1 << 4 | 15, 66), // xchg "m0r0"
    e([0x90, 0x00, 0x00, 0x00], AUTO_SIZE | SHORT_ARG, 0, 6 << 11 | 436, 1 << 4 | 15, 79), // xchg "r0A0"
    e([0x87, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 7 << 11 | 436, 1 << 4 | 15, 83), // xchg "r0m0"
    e([0x87, 0x00, 0x00, 0x00], AUTO_SIZE, 0, 8 << 11 | 436, 1 << 4 | 15, 87), // xchg "r0r0"
    e([0x87, 0x00, 0x00, 0x00], AUTO_SIZE | ENC_MR, 0, 9 << 11 | 436, 1 << 4 | 15, 87), // xchg "r0r0"
    e([0x0F, 0xA7, 0xD0, 0x00], PREF_F3, CYRIX, 0 << 11 | 437, 3 << 4 | 15, 0), // xcryptcbc ""
    e([0x0F, 0xA7, 0xE0, 0x00], PREF_F3, CYRIX, 0 << 11 | 438, 3 << 4 | 15, 0), // xcryptcfb ""
    e([0x0F, 0xA7, 0xD8, 0x00], PREF_F3, CYRIX, 0 << 11 | 439, 3 << 4 | 15, 0), // xcryptctr ""
    e([0x0F, 0xA7, 0xC8, 0x00], PREF_F3, CYRIX, 0 << 11 | 440, 3 << 4 | 15, 0), // xcryptecb ""
    e([0x0F, 0xA7, 0xE8, 0x00], PREF_F3, CYRIX, 0 << 11 | 441, 3 << 4 | 15, 0), // xcryptofb ""
    e([0x0F, 0x01, 0xD5, 0x00], 0, RTM, 0 << 11 | 442, 3 << 4 | 15, 0), // xend ""
    e([0x0F, 0x01, 0xD0, 0x00], 0, 0, 0 << 11 | 443, 3 << 4 | 15, 0), // xgetbv ""
    e([0xD7, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 444, 1 << 4 | 15, 0), // xlat ""
    e([0xD7, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 445, 1 << 4 | 15, 0), // xlatb ""
    e([0x0F, 0xAE, 0x00, 0x00], 0, 0, 0 << 11 | 446, 2 << 4 | 5, 8), // xrstor "m1"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 447, 2 << 4 | 5, 8), // xrstor64 "m1"
    e([0x0F, 0xC7, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 448, 2 << 4 | 3, 8), // xrstors64 "m1"
    e([0x0F, 0xAE, 0x00, 0x00], 0, 0, 0 << 11 | 449, 2 << 4 | 4, 8), // xsave "m1"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 450, 2 << 4 | 4, 8), // xsave64 "m1"
    e([0x0F, 0xC7, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 451, 2 << 4 | 4, 8), // xsavec64 "m1"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 452, 2 << 4 | 6, 8), // xsaveopt64 "m1"
    e([0x0F, 0xC7, 0x00, 0x00], WITH_REXW, 0, 0 << 11 | 453, 2 << 4 | 5, 8), // xsaves64 "m1"
    e([0x0F, 0x01, 0xD1, 0x00], 0, 0, 0 << 11 | 454, 3 << 4 | 15, 0), // xsetbv ""
    e([0x0F, 0xA6, 0xC8, 0x00], PREF_F3, CYRIX, 0 << 11 | 455, 3 << 4 | 15, 0), // xsha1 ""
    e([0x0F, 0xA6, 0xD0, 0x00], PREF_F3, CYRIX, 0 << 11 | 456, 3 << 4 | 15, 0), // xsha256 ""
    e([0x0F, 0xA7, 0xC0, 0x00], 0, CYRIX, 0 << 11 | 457, 3 << 4 | 15, 0), // xstore ""
    e([0x0F, 0x01, 0xD6, 0x00], 0, RTM, 0 << 11 | 458, 3 << 4 | 15, 0), // xtest ""
    e([0xD9, 0xF0, 0x00, 0x00], 0, FPU, 0 << 11 | 459, 2 << 4 | 15, 0), // f2xm1 ""
    e([0xD9, 0xE1, 0x00, 0x00], 0, FPU, 0 << 11 | 460, 2 << 4 | 15, 0), // fabs ""
    e([0xDE, 0xC1, 0x00, 0x00], 0, FPU, 0 << 11 | 461, 2 << 4 | 15, 0), // fadd ""
    e([0xD8, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 461, 2 << 4 | 15, 45), // fadd "Xpfp"
    e([0xD8, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 461, 2 << 4 | 15, 4), // fadd "fp"
    e([0xDC, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 3 << 11 | 461, 2 << 4 | 15, 53), // fadd "fpXp"
    e([0xDC, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 4 << 11 | 461, 2 << 4 | 15, 53), // fadd "fpXp"
    e([0xD8, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 5 << 11 | 461, 1 << 4 | 0, 11), // fadd "md"
    e([0xDC, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 6 << 11 | 461, 1 << 4 | 0, 14), // fadd "mq"
    e([0xDE, 0xC1, 0x00, 0x00], 0, FPU, 0 << 11 | 462, 2 << 4 | 15, 0), // faddp ""
    e([0xDE, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 462, 2 << 4 | 15, 4), // faddp "fp"
    e([0xDE, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 462, 2 << 4 | 15, 53), // faddp "fpXp"
    e([0xDF, 0x00, 0x00, 0x00], 0, FPU, 0 << 11 | 463, 1 << 4 | 4, 8), // fbld "m1"
    e([0xDF, 0x00, 0x00, 0x00], 0, FPU, 0 << 11 | 464, 1 << 4 | 6, 8), // fbstp "m1"
    e([0xD9, 0xE0, 0x00, 0x00], 0, FPU, 0 << 11 | 465, 2 << 4 | 15, 0), // fchs ""
    e([0x9B, 0xDB, 0xE2, 0x00], 0, FPU, 0 << 11 | 466, 3 << 4 | 15, 0), // fclex ""
    e([0xDA, 0xC1, 0x00, 0x00], 0, FPU, 0 << 11 | 467, 2 << 4 | 15, 0), // fcmovb ""
    e([0xDA, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 467, 2 << 4 | 15, 45), // fcmovb "Xpfp"
    e([0xDA, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 467, 2 << 4 | 15, 4), // fcmovb "fp"
    e([0xDA, 0xD1, 0x00, 0x00], 0, FPU, 0 << 11 | 468, 2 << 4 | 15, 0), // fcmovbe ""
    e([0xDA, 0xD0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 468, 2 << 4 | 15, 45), // fcmovbe "Xpfp"
    e([0xDA, 0xD0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 468, 2 << 4 | 15, 4), // fcmovbe "fp"
    e([0xDA, 0xC9, 0x00, 0x00], 0, FPU, 0 << 11 | 469, 2 << 4 | 15, 0), // fcmove ""
    e([0xDA, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 469, 2 << 4 | 15, 45), // fcmove "Xpfp"
    e([0xDA, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 469, 2 << 4 | 15, 4), // fcmove "fp"
    e([0xDB, 0xC1, 0x00, 0x00], 0, FPU, 0 << 11 | 470, 2 << 4 | 15, 0), // fcmovnb ""
    e([0xDB, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 470, 2 << 4 | 15, 45), // fcmovnb "Xpfp"
    e([0xDB, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 470, 2 << 4 | 15, 4), // fcmovnb "fp"
    e([0xDB, 0xD1, 0x00, 0x00], 0, FPU, 0 << 11 | 471, 2 << 4 | 15, 0), // fcmovnbe ""
    e([0xDB, 0xD0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 471, 2 << 4 | 15, 45), // fcmovnbe "Xpfp"
    e([0xDB, 0xD0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 471, 2 << 4 | 15, 4), // fcmovnbe "fp"
    e([0xDB, 0xC9, 0x00, 0x00], 0, FPU, 0 << 11 | 472, 2 << 4 | 15, 0), // fcmovne ""
    e([0xDB, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 472, 2 << 4 | 15, 45), // fcmovne "Xpfp"
    e([0xDB, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 472, 2 << 4 | 15, 4), // fcmovne "fp"
    e([0xDB, 0xD9, 0x00, 0x00], 0, FPU, 0 << 11 | 473, 2 << 4 | 15, 0), // fcmovnu ""
    e([0xDB, 0xD8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 473, 2 << 4 | 15, 45), // fcmovnu "Xpfp"
    e([0xDB, 0xD8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 473, 2 << 4 | 15, 4), // fcmovnu "fp"
    e([0xDA, 0xD9, 0x00, 0x00], 0, FPU, 0 << 11 | 474, 2 << 4 | 15, 0), // fcmovu ""
    e([0xDA, 0xD8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 474, 2 << 4 | 15, 45), // fcmovu "Xpfp"
    e([0xDA, 0xD8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 474, 2 << 4 | 15, 4), // fcmovu "fp"
    e([0xD8, 0xD1, 0x00, 0x00], 0, FPU, 0 << 11 | 475, 2 << 4 | 15, 0), // fcom ""
    e([0xD8, 0xD0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 475, 2 << 4 | 15, 45), // fcom "Xpfp"
    e([0xD8, 0xD0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 475, 2 << 4 | 15, 4), // fcom "fp"
    e([0xD8, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 3 << 11 | 475, 1 << 4 | 2, 11), // fcom "md"
    e([0xDC, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 4 << 11 | 475, 1 << 4 | 2, 14), // fcom "mq"
    e([0xDB, 0xF1, 0x00, 0x00], 0, FPU, 0 << 11 | 476, 2 << 4 | 15, 0), // fcomi ""
    e([0xDB, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 476, 2 << 4 | 15, 45), // fcomi "Xpfp"
    e([0xDB, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 476, 2 << 4 | 15, 4), // fcomi "fp"
    e([0xDF, 0xF1, 0x00, 0x00], 0, FPU, 0 << 11 | 477, 2 << 4 | 15, 0), // fcomip ""
    e([0xDF, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 477, 2 << 4 | 15, 45), // fcomip "Xpfp"
    e([0xDF, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 477, 2 << 4 | 15, 4), // fcomip "fp"
    e([0xD8, 0xD9, 0x00, 0x00], 0, FPU, 0 << 11 | 478, 2 << 4 | 15, 0), // fcomp ""
    e([0xD8, 0xD8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 478, 2 << 4 | 15, 45), // fcomp "Xpfp"
    e([0xD8, 0xD8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 478, 2 << 4 | 15, 4), // fcomp "fp"
    e([0xD8, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 3 << 11 | 478, 1 << 4 | 3, 11), // fcomp "md"
    e([0xDC, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 4 << 11 | 478, 1 << 4 | 3, 14), // fcomp "mq"
    e([0xDE, 0xD9, 0x00, 0x00], 0, FPU, 0 << 11 | 479, 2 << 4 | 15, 0), // fcompp ""
    e([0xD9, 0xFF, 0x00, 0x00], 0, FPU, 0 << 11 | 480, 2 << 4 | 15, 0), // fcos ""
    e([0xD9, 0xF6, 0x00, 0x00], 0, FPU, 0 << 11 | 481, 2 << 4 | 15, 0), // fdecstp ""
    e([0x9B, 0xDB, 0xE1, 0x00], 0, FPU, 0 << 11 | 482, 3 << 4 | 15, 0), // fdisi ""
    e([0xDE, 0xF9, 0x00, 0x00], 0, FPU, 0 << 11 | 483, 2 << 4 | 15, 0), // fdiv ""
    e([0xD8, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 483, 2 << 4 | 15, 45), // fdiv "Xpfp"
    e([0xD8, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 483, 2 << 4 | 15, 4), // fdiv "fp"
    e([0xDC, 0xF8, 0x00, 0x00], SHORT_ARG, FPU, 3 << 11 | 483, 2 << 4 | 15, 53), // fdiv "fpXp"
    e([0xDC, 0xF8, 0x00, 0x00], SHORT_ARG, FPU, 4 << 11 | 483, 2 << 4 | 15, 53), // fdiv "fpXp"
    e([0xD8, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 5 << 11 | 483, 1 << 4 | 6, 11), // fdiv "md"
    e([0xDC, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 6 << 11 | 483, 1 << 4 | 6, 14), // fdiv "mq"
    e([0xDE, 0xF9, 0x00, 0x00], 0, FPU, 0 << 11 | 484, 2 << 4 | 15, 0), // fdivp ""
    e([0xDE, 0xF8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 484, 2 << 4 | 15, 4), // fdivp "fp"
    e([0xDE, 0xF8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 484, 2 << 4 | 15, 53), // fdivp "fpXp"
    e([0xDE, 0xF1, 0x00, 0x00], 0, FPU, 0 << 11 | 485, 2 << 4 | 15, 0), // fdivr ""
    e([0xD8, 0xF8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 485, 2 << 4 | 15, 45), // fdivr "Xpfp"
    e([0xD8, 0xF8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 485, 2 << 4 | 15, 4), // fdivr "fp"
    e([0xDC, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 3 << 11 | 485, 2 << 4 | 15, 53), // fdivr "fpXp"
    e([0xDC, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 4 << 11 | 485, 2 << 4 | 15, 53), // fdivr "fpXp"
    e([0xD8, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 5 << 11 | 485, 1 << 4 | 7, 11), // fdivr "md"
    e([0xDC, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 6 << 11 | 485, 1 << 4 | 7, 14), // fdivr "mq"
    e([0xDE, 0xF1, 0x00, 0x00], 0, FPU, 0 << 11 | 486, 2 << 4 | 15, 0), // fdivrp ""
    e([0xDE, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 486, 2 << 4 | 15, 4), // fdivrp "fp"
    e([0xDE, 0xF0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 486, 2 << 4 | 15, 53), // fdivrp "fpXp"
    e([0x0F, 0x0E, 0x00, 0x00], 0, TDNOW, 0 << 11 | 487, 2 << 4 | 15, 0), // femms ""
    e([0x9B, 0xDB, 0xE0, 0x00], 0, FPU, 0 << 11 | 488, 3 << 4 | 15, 0), // feni ""
    e([0xDD, 0xC1, 0x00, 0x00], 0, FPU, 0 << 11 | 489, 2 << 4 | 15, 0), // ffree ""
    e([0xDD, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 489, 2 << 4 | 15, 4), // ffree "fp"
    e([0xDA, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 490, 1 << 4 | 0, 11), // fiadd "md"
    e([0xDE, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 490, 1 << 4 | 0, 15), // fiadd "mw"
    e([0xDA, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 491, 1 << 4 | 2, 11), // ficom "md"
    e([0xDE, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 491, 1 << 4 | 2, 15), // ficom "mw"
    e([0xDA, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 492, 1 << 4 | 3, 11), // ficomp "md"
    e([0xDE, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 492, 1 << 4 | 3, 15), // ficomp "mw"
    e([0xDA, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 493, 1 << 4 | 6, 11), // fidiv "md"
    e([0xDE, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 493, 1 << 4 | 6, 15), // fidiv "mw"
    e([0xDA, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 494, 1 << 4 | 7, 11), // fidivr "md"
    e([0xDE, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 494, 1 << 4 | 7, 15), // fidivr "mw"
    e([0xDB, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 495, 1 << 4 | 0, 11), // fild "md"
    e([0xDF, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 1 << 11 | 495, 1 << 4 | 5, 14), // fild "mq"
    e([0xDF, 0x00, 0x00, 0x00], 0, FPU, 2 << 11 | 495, 1 << 4 | 0, 15), // fild "mw"
    e([0xDA, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 496, 1 << 4 | 1, 11), // fimul "md"
    e([0xDE, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 496, 1 << 4 | 1, 15), // fimul "mw"
    e([0xD9, 0xF7, 0x00, 0x00], 0, FPU, 0 << 11 | 497, 2 << 4 | 15, 0), // fincstp ""
    e([0x9B, 0xDB, 0xE3, 0x00], 0, FPU, 0 << 11 | 498, 3 << 4 | 15, 0), // finit ""
    e([0xDB, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 499, 1 << 4 | 2, 11), // fist "md"
    e([0xDF, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 499, 1 << 4 | 2, 15), // fist "mw"
    e([0xDB, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 500, 1 << 4 | 3, 11), // fistp "md"
    e([0xDF, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 1 << 11 | 500, 1 << 4 | 7, 14), // fistp "mq"
    e([0xDF, 0x00, 0x00, 0x00], 0, FPU, 2 << 11 | 500, 1 << 4 | 3, 15), // fistp "mw"
    e([0xDB, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 501, 1 << 4 | 1, 11), // fisttp "md"
    e([0xDD, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 1 << 11 | 501, 1 << 4 | 1, 14), // fisttp "mq"
    e([0xDF, 0x00, 0x00, 0x00], 0, FPU, 2 << 11 | 501, 1 << 4 | 1, 15), // fisttp "mw"
    e([0xDA, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 502, 1 << 4 | 4, 11), // fisub "md"
    e([0xDE, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 502, 1 << 4 | 4, 15), // fisub "mw"
    e([0xDA, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 0 << 11 | 503, 1 << 4 | 5, 11), // fisubr "md"
    e([0xDE, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 503, 1 << 4 | 5, 15), // fisubr "mw"
    e([0xD9, 0xC1, 0x00, 0x00], 0, FPU, 0 << 11 | 504, 2 << 4 | 15, 0), // fld ""
    e([0xD9, 0xC0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 504, 2 << 4 | 15, 4), // fld "fp"
    e([0xD9, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 2 << 11 | 504, 1 << 4 | 0, 11), // fld "md"
    e([0xDB, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 3 << 11 | 504, 1 << 4 | 5, 13), // fld "mp"
    e([0xDD, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 4 << 11 | 504, 1 << 4 | 0, 14), // fld "mq"
    e([0xD9, 0xE8, 0x00, 0x00], 0, FPU, 0 << 11 | 505, 2 << 4 | 15, 0), // fld1 ""
    e([0xD9, 0x00, 0x00, 0x00], 0, FPU, 0 << 11 | 506, 1 << 4 | 5, 15), // fldcw "mw"
    e([0xD9, 0x00, 0x00, 0x00], 0, FPU, 0 << 11 | 507, 1 << 4 | 4, 8), // fldenv "m1"
    e([0xD9, 0xEA, 0x00, 0x00], 0, FPU, 0 << 11 | 508, 2 << 4 | 15, 0), // fldl2e ""
    e([0xD9, 0xE9, 0x00, 0x00], 0, FPU, 0 << 11 | 509, 2 << 4 | 15, 0), // fldl2t ""
    e([0xD9, 0xEC, 0x00, 0x00], 0, FPU, 0 << 11 | 510, 2 << 4 | 15, 0), // fldlg2 ""
    e([0xD9, 0xED, 0x00, 0x00], 0, FPU, 0 << 11 | 511, 2 << 4 | 15, 0), // fldln2 ""
    e([0xD9, 0xEB, 0x00, 0x00], 0, FPU, 0 << 11 | 512, 2 << 4 | 15, 0), // fldpi ""
    e([0xD9, 0xEE, 0x00, 0x00], 0, FPU, 0 << 11 | 513, 2 << 4 | 15, 0), // fldz ""
    e([0xDE, 0xC9, 0x00, 0x00], 0, FPU, 0 << 11 | 514, 2 << 4 | 15, 0), // fmul ""
    e([0xD8, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 514, 2 << 4 | 15, 45), // fmul "Xpfp"
    e([0xD8, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 514, 2 << 4 | 15, 4), // fmul "fp"
    e([0xDC, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 3 << 11 | 514, 2 << 4 | 15, 53), // fmul "fpXp"
    e([0xDC, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 4 << 11 | 514, 2 << 4 | 15, 53), // fmul "fpXp"
    e([0xD8, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 5 << 11 | 514, 1 << 4 | 1, 11), // fmul "md"
    e([0xDC, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 6 << 11 | 514, 1 << 4 | 1, 14), // fmul "mq"
    e([0xDE, 0xC9, 0x00, 0x00], 0, FPU, 0 << 11 | 515, 2 << 4 | 15, 0), // fmulp ""
    e([0xDE, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 515, 2 << 4 | 15, 4), // fmulp "fp"
    e([0xDE, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 515, 2 << 4 | 15, 53), // fmulp "fpXp"
    e([0xDB, 0xE2, 0x00, 0x00], 0, FPU, 0 << 11 | 516, 2 << 4 | 15, 0), // fnclex ""
    e([0xDB, 0xE1, 0x00, 0x00], 0, FPU, 0 << 11 | 517, 2 << 4 | 15, 0), // fndisi ""
    e([0xDB, 0xE0, 0x00, 0x00], 0, FPU, 0 << 11 | 518, 2 << 4 | 15, 0), // fneni ""
    e([0xDB, 0xE3, 0x00, 0x00], 0, FPU, 0 << 11 | 519, 2 << 4 | 15, 0), // fninit ""
    e([0xD9, 0xD0, 0x00, 0x00], 0, FPU, 0 << 11 | 520, 2 << 4 | 15, 0), // fnop ""
    e([0xDD, 0x00, 0x00, 0x00], 0, FPU, 0 << 11 | 521, 1 << 4 | 6, 8), // fnsave "m1"
    e([0xD9, 0x00, 0x00, 0x00], 0, FPU, 0 << 11 | 522, 1 << 4 | 7, 15), // fnstcw "mw"
    e([0xD9, 0x00, 0x00, 0x00], 0, FPU, 0 << 11 | 523, 1 << 4 | 6, 8), // fnstenv "m1"
    e([0xDF, 0xE0, 0x00, 0x00], 0, FPU, 0 << 11 | 524, 2 << 4 | 15, 1), // fnstsw "Aw"
    e([0xDD, 0x00, 0x00, 0x00], 0, FPU, 1 << 11 | 524, 1 << 4 | 7, 15), // fnstsw "mw"
    e([0xD9, 0xF3, 0x00, 0x00], 0, FPU, 0 << 11 | 525, 2 << 4 | 15, 0), // fpatan ""
    e([0xD9, 0xF8, 0x00, 0x00], 0, FPU, 0 << 11 | 526, 2 << 4 | 15, 0), // fprem ""
    e([0xD9, 0xF5, 0x00, 0x00], 0, FPU, 0 << 11 | 527, 2 << 4 | 15, 0), // fprem1 ""
    e([0xD9, 0xF2, 0x00, 0x00], 0, FPU, 0 << 11 | 528, 2 << 4 | 15, 0), // fptan ""
    e([0xD9, 0xFC, 0x00, 0x00], 0, FPU, 0 << 11 | 529, 2 << 4 | 15, 0), // frndint ""
    e([0xDD, 0x00, 0x00, 0x00], 0, FPU, 0 << 11 | 530, 1 << 4 | 4, 8), // frstor "m1"
    e([0x9B, 0xDD, 0x00, 0x00], 0, FPU, 0 << 11 | 531, 2 << 4 | 6, 8), // fsave "m1"
    e([0xD9, 0xFD, 0x00, 0x00], 0, FPU, 0 << 11 | 532, 2 << 4 | 15, 0), // fscale ""
    e([0xDB, 0xE4, 0x00, 0x00], 0, FPU, 0 << 11 | 533, 2 << 4 | 15, 0), // fsetpm ""
    e([0xD9, 0xFE, 0x00, 0x00], 0, FPU, 0 << 11 | 534, 2 << 4 | 15, 0), // fsin ""
    e([0xD9, 0xFB, 0x00, 0x00], 0, FPU, 0 << 11 | 535, 2 << 4 | 15, 0), // fsincos ""
    e([0xD9, 0xFA, 0x00, 0x00], 0, FPU, 0 << 11 | 536, 2 << 4 | 15, 0), // fsqrt ""
    e([0xDD, 0xD1, 0x00, 0x00], 0, FPU, 0 << 11 | 537, 2 << 4 | 15, 0), // fst ""
    e([0xDD, 0xD0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 537, 2 << 4 | 15, 4), // fst "fp"
    e([0xD9, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 2 << 11 | 537, 1 << 4 | 2, 11), // fst "md"
    e([0xDD, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 3 << 11 | 537, 1 << 4 | 2, 14), // fst "mq"
    e([0x9B, 0xD9, 0x00, 0x00], 0, FPU, 0 << 11 | 538, 2 << 4 | 7, 15), // fstcw "mw"
    e([0x9B, 0xD9, 0x00, 0x00], 0, FPU, 0 << 11 | 539, 2 << 4 | 6, 8), // fstenv "m1"
    e([0xDD, 0xD9, 0x00, 0x00], 0, FPU, 0 << 11 | 540, 2 << 4 | 15, 0), // fstp ""
    e([0xDD, 0xD8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 540, 2 << 4 | 15, 4), // fstp "fp"
    e([0xD9, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 2 << 11 | 540, 1 << 4 | 3, 11), // fstp "md"
    e([0xDB, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 3 << 11 | 540, 1 << 4 | 7, 13), // fstp "mp"
    e([0xDD, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 4 << 11 | 540, 1 << 4 | 3, 14), // fstp "mq"
    e([0x9B, 0xDF, 0xE0, 0x00], 0, FPU, 0 << 11 | 541, 3 << 4 | 15, 1), // fstsw "Aw"
    e([0x9B, 0xDD, 0x00, 0x00], 0, FPU, 1 << 11 | 541, 2 << 4 | 7, 15), // fstsw "mw"
    e([0xDE, 0xE9, 0x00, 0x00], 0, FPU, 0 << 11 | 542, 2 << 4 | 15, 0), // fsub ""
    e([0xD8, 0xE0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 542, 2 << 4 | 15, 45), // fsub "Xpfp"
    e([0xD8, 0xE0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 542, 2 << 4 | 15, 4), // fsub "fp"
    e([0xDC, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 3 << 11 | 542, 2 << 4 | 15, 53), // fsub "fpXp"
    e([0xDC, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 4 << 11 | 542, 2 << 4 | 15, 53), // fsub "fpXp"
    e([0xD8, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 5 << 11 | 542, 1 << 4 | 4, 11), // fsub "md"
    e([0xDC, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 6 << 11 | 542, 1 << 4 | 4, 14), // fsub "mq"
    e([0xDE, 0xE9, 0x00, 0x00], 0, FPU, 0 << 11 | 543, 2 << 4 | 15, 0), // fsubp ""
    e([0xDE, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 543, 2 << 4 | 15, 4), // fsubp "fp"
    e([0xDE, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 543, 2 << 4 | 15, 53), // fsubp "fpXp"
    e([0xDE, 0xE1, 0x00, 0x00], 0, FPU, 0 << 11 | 544, 2 << 4 | 15, 0), // fsubr ""
    e([0xD8, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 544, 2 << 4 | 15, 45), // fsubr "Xpfp"
    e([0xD8, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 544, 2 << 4 | 15, 4), // fsubr "fp"
    e([0xDC, 0xE0, 0x00, 0x00], SHORT_ARG, FPU, 3 << 11 | 544, 2 << 4 | 15, 53), // fsubr "fpXp"
    e([0xDC, 0xE0, 0x00, 0x00], SHORT_ARG, FPU, 4 << 11 | 544, 2 << 4 | 15, 53), // fsubr "fpXp"
    e([0xD8, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 5 << 11 | 544, 1 << 4 | 5, 11), // fsubr "md"
    e([0xDC, 0x00, 0x00, 0x00], EXACT_SIZE, FPU, 6 << 11 | 544, 1 << 4 | 5, 14), // fsubr "mq"
    e([0xDE, 0xE1, 0x00, 0x00], 0, FPU, 0 << 11 | 545, 2 << 4 | 15, 0), // fsubrp ""
    e([0xDE, 0xE0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 545, 2 << 4 | 15, 4), // fsubrp "fp"
    e([0xDE, 0xE0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 545, 2 << 4 | 15, 53), // fsubrp "fpXp"
    e([0xD9, 0xE4, 0x00, 0x00], 0, FPU, 0 << 11 | 546, 2 << 4 | 15, 0), // ftst ""
    e([0xDD, 0xE1, 0x00, 0x00], 0, FPU, 0 << 11 | 547, 2 << 4 | 15, 0), // fucom ""
    e([0xDD, 0xE0, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 547, 2 << 4 | 15, 45), // fucom "Xpfp"
    e([0xDD, 0xE0, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 547, 2 << 4 | 15, 4), // fucom "fp"
    e([0xDB, 0xE9, 0x00, 0x00], 0, FPU, 0 << 11 | 548, 2 << 4 | 15, 0), // fucomi ""
    e([0xDB, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 548, 2 << 4 | 15, 45), // fucomi "Xpfp"
    e([0xDB, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 548, 2 << 4 | 15, 4), // fucomi "fp"
    e([0xDF, 0xE9, 0x00, 0x00], 0, FPU, 0 << 11 | 549, 2 << 4 | 15, 0), // fucomip ""
    e([0xDF, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 549, 2 << 4 | 15, 45), // fucomip "Xpfp"
    e([0xDF, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 549, 2 << 4 | 15, 4), // fucomip "fp"
    e([0xDD, 0xE9, 0x00, 0x00], 0, FPU, 0 << 11 | 550, 2 << 4 | 15, 0), // fucomp ""
    e([0xDD, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 550, 2 << 4 | 15, 45), // fucomp "Xpfp"
    e([0xDD, 0xE8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 550, 2 << 4 | 15, 4), // fucomp "fp"
    e([0xDA, 0xE9, 0x00, 0x00], 0, FPU, 0 << 11 | 551, 2 << 4 | 15, 0), // fucompp ""
    e([0x9B, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 552, 1 << 4 | 15, 0), // fwait ""
    e([0xD9, 0xE5, 0x00, 0x00], 0, FPU, 0 << 11 | 553, 2 << 4 | 15, 0), // fxam ""
    e([0xD9, 0xC9, 0x00, 0x00], 0, FPU, 0 << 11 | 554, 2 << 4 | 15, 0), // fxch ""
    e([0xD9, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 1 << 11 | 554, 2 << 4 | 15, 45), // fxch "Xpfp"
    e([0xD9, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 2 << 11 | 554, 2 << 4 | 15, 4), // fxch "fp"
    e([0xD9, 0xC8, 0x00, 0x00], SHORT_ARG, FPU, 3 << 11 | 554, 2 << 4 | 15, 53), // fxch "fpXp"
    e([0x0F, 0xAE, 0x00, 0x00], 0, FPU | SSE, 0 << 11 | 555, 2 << 4 | 1, 8), // fxrstor "m1"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW, FPU | SSE, 0 << 11 | 556, 2 << 4 | 1, 8), // fxrstor64 "m1"
    e([0x0F, 0xAE, 0x00, 0x00], 0, FPU | SSE, 0 << 11 | 557, 2 << 4 | 0, 8), // fxsave "m1"
    e([0x0F, 0xAE, 0x00, 0x00], WITH_REXW, FPU | SSE, 0 << 11 | 558, 2 << 4 | 0, 8), // fxsave64 "m1"
    e([0xD9, 0xF4, 0x00, 0x00], 0, FPU, 0 << 11 | 559, 2 << 4 | 15, 0), // fxtract ""
    e([0xD9, 0xF1, 0x00, 0x00], 0, FPU, 0 << 11 | 560, 2 << 4 | 15, 0), // fyl2x ""
    e([0xD9, 0xF9, 0x00, 0x00], 0, FPU, 0 << 11 | 561, 2 << 4 | 15, 0), // fyl2xp1 ""
    e([0x0F, 0x58, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 562, 2 << 4 | 15, 167), // addpd "yowo"
    e([0x0F, 0x58, 0x00, 0x00], 0, SSE, 0 << 11 | 563, 2 << 4 | 15, 167), // addps "yowo"
    e([0x0F, 0xD0, 0x00, 0x00], PREF_66, SSE3, 0 << 11 | 564, 2 << 4 | 15, 167), // addsubpd "yowo"
    e([0x0F, 0xD0, 0x00, 0x00], PREF_F2, SSE3, 0 << 11 | 565, 2 << 4 | 15, 167), // addsubps "yowo"
    e([0x0F, 0x55, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 566, 2 << 4 | 15, 167), // andnpd "yowo"
    e([0x0F, 0x55, 0x00, 0x00], 0, SSE, 0 << 11 | 567, 2 << 4 | 15, 167), // andnps "yowo"
    e([0x0F, 0x54, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 568, 2 << 4 | 15, 167), // andpd "yowo"
    e([0x0F, 0x54, 0x00, 0x00], 0, SSE, 0 << 11 | 569, 2 << 4 | 15, 167), // andps "yowo"
    e([0x0F, 0x3A, 0x0D, 0x00], PREF_66, SSE41, 0 << 11 | 570, 3 << 4 | 15, 209), // blendpd "yomqib"
    e([0x0F, 0x3A, 0x0D, 0x00], PREF_66, SSE41, 1 << 11 | 570, 3 << 4 | 15, 218), // blendpd "yoyoib"
    e([0x0F, 0x3A, 0x0C, 0x00], PREF_66, SSE41, 0 << 11 | 571, 3 << 4 | 15, 209), // blendps "yomqib"
    e([0x0F, 0x3A, 0x0C, 0x00], PREF_66, SSE41, 1 << 11 | 571, 3 << 4 | 15, 218), // blendps "yoyoib"
    e([0x0F, 0x38, 0x15, 0x00], PREF_66, SSE41, 0 << 11 | 572, 3 << 4 | 15, 162), // blendvpd "yomq"
    e([0x0F, 0x38, 0x15, 0x00], PREF_66, SSE41, 1 << 11 | 572, 3 << 4 | 15, 170), // blendvpd "yoyo"
    e([0x0F, 0x38, 0x14, 0x00], PREF_66, SSE41, 0 << 11 | 573, 3 << 4 | 15, 162), // blendvps "yomq"
    e([0x0F, 0x38, 0x14, 0x00], PREF_66, SSE41, 1 << 11 | 573, 3 << 4 | 15, 170), // blendvps "yoyo"
    e([0x0F, 0xC2, 0x00, 0x00], IMM_OP | PREF_66, SSE2, 0 << 11 | 574, 3 << 4 | 15, 167), // cmpeqpd "yowo"
    e([0x0F, 0xC2, 0x00, 0x00], IMM_OP, SSE, 0 << 11 | 575, 3 << 4 | 15, 167), // cmpeqps "yowo"
    e([0x0F, 0xC2, 0x02, 0x00], IMM_OP | PREF_66, SSE2, 0 << 11 | 576, 3 << 4 | 15, 167), // cmplepd "yowo"
    e([0x0F, 0xC2, 0x02, 0x00], IMM_OP, SSE, 0 << 11 | 577, 3 << 4 | 15, 167), // cmpleps "yowo"
    e([0x0F, 0xC2, 0x01, 0x00], IMM_OP | PREF_66, SSE2, 0 << 11 | 578, 3 << 4 | 15, 167), // cmpltpd "yowo"
    e([0x0F, 0xC2, 0x01, 0x00], IMM_OP, SSE, 0 << 11 | 579, 3 << 4 | 15, 167), // cmpltps "yowo"
    e([0x0F, 0xC2, 0x04, 0x00], IMM_OP | PREF_66, SSE2, 0 << 11 | 580, 3 << 4 | 15, 167), // cmpneqpd "yowo"
    e([0x0F, 0xC2, 0x04, 0x00], IMM_OP, SSE, 0 << 11 | 581, 3 << 4 | 15, 167), // cmpneqps "yowo"
    e([0x0F, 0xC2, 0x06, 0x00], IMM_OP | PREF_66, SSE2, 0 << 11 | 582, 3 << 4 | 15, 167), // cmpnlepd "yowo"
    e([0x0F, 0xC2, 0x06, 0x00], IMM_OP, SSE, 0 << 11 | 583, 3 << 4 | 15, 167), // cmpnleps "yowo"
    e([0x0F, 0xC2, 0x05, 0x00], IMM_OP | PREF_66, SSE2, 0 << 11 | 584, 3 << 4 | 15, 167), // cmpnltpd "yowo"
    e([0x0F, 0xC2, 0x05, 0x00], IMM_OP, SSE, 0 << 11 | 585, 3 << 4 | 15, 167), // cmpnltps "yowo"
    e([0x0F, 0xC2, 0x07, 0x00], IMM_OP | PREF_66, SSE2, 0 << 11 | 586, 3 << 4 | 15, 167), // cmpordpd "yowo"
    e([0x0F, 0xC2, 0x07, 0x00], IMM_OP, SSE, 0 << 11 | 587, 3 << 4 | 15, 167), // cmpordps "yowo"
    e([0x0F, 0xC2, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 588, 2 << 4 | 15, 216), // cmppd "yowoib"
    e([0x0F, 0xC2, 0x00, 0x00], 0, SSE, 0 << 11 | 589, 2 << 4 | 15, 207), // cmpps "yom1ib"
    e([0x0F, 0xC2, 0x00, 0x00], 0, SSE, 1 << 11 | 589, 2 << 4 | 15, 218), // cmpps "yoyoib"
    e([0x0F, 0xC2, 0x03, 0x00], IMM_OP | PREF_66, SSE2, 0 << 11 | 590, 3 << 4 | 15, 167), // cmpunordpd "yowo"
    e([0x0F, 0xC2, 0x03, 0x00], IMM_OP, SSE, 0 << 11 | 591, 3 << 4 | 15, 167), // cmpunordps "yowo"
    e([0x0F, 0xE6, 0x00, 0x00], PREF_F3, SSE2, 0 << 11 | 592, 2 << 4 | 15, 162), // cvtdq2pd "yomq"
    e([0x0F, 0xE6, 0x00, 0x00], PREF_F3, SSE2, 1 << 11 | 592, 2 << 4 | 15, 170), // cvtdq2pd "yoyo"
    e([0x0F, 0x5B, 0x00, 0x00], 0, SSE2, 0 << 11 | 593, 2 << 4 | 15, 167), // cvtdq2ps "yowo"
    e([0x0F, 0x5A, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 594, 2 << 4 | 15, 167), // cvtpd2ps "yowo"
    e([0x0F, 0x2A, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 595, 2 << 4 | 15, 164), // cvtpi2pd "youq"
    e([0x0F, 0x2A, 0x00, 0x00], 0, MMX | SSE, 0 << 11 | 596, 2 << 4 | 15, 164), // cvtpi2ps "youq"
    e([0x0F, 0x5A, 0x00, 0x00], 0, SSE2, 0 << 11 | 597, 2 << 4 | 15, 162), // cvtps2pd "yomq"
    e([0x0F, 0x5A, 0x00, 0x00], 0, SSE2, 1 << 11 | 597, 2 << 4 | 15, 170), // cvtps2pd "yoyo"
    e([0x0F, 0x5E, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 598, 2 << 4 | 15, 167), // divpd "yowo"
    e([0x0F, 0x5E, 0x00, 0x00], 0, SSE, 0 << 11 | 599, 2 << 4 | 15, 167), // divps "yowo"
    e([0x0F, 0x3A, 0x41, 0x00], PREF_66, SSE41, 0 << 11 | 600, 3 << 4 | 15, 209), // dppd "yomqib"
    e([0x0F, 0x3A, 0x41, 0x00], PREF_66, SSE41, 1 << 11 | 600, 3 << 4 | 15, 218), // dppd "yoyoib"
    e([0x0F, 0x3A, 0x40, 0x00], PREF_66, SSE41, 0 << 11 | 601, 3 << 4 | 15, 209), // dpps "yomqib"
    e([0x0F, 0x3A, 0x40, 0x00], PREF_66, SSE41, 1 << 11 | 601, 3 << 4 | 15, 218), // dpps "yoyoib"
    e([0x0F, 0x3A, 0x17, 0x00], WITH_REXW | PREF_66 | ENC_MR, SSE41, 0 << 11 | 602, 3 << 4 | 15, 184), // extractps "rqyoib"
    e([0x0F, 0x3A, 0x17, 0x00], PREF_66 | ENC_MR, SSE41, 1 << 11 | 602, 3 << 4 | 15, 187), // extractps "vdyoib"
    e([0x0F, 0x7C, 0x00, 0x00], PREF_66, SSE3, 0 << 11 | 603, 2 << 4 | 15, 167), // haddpd "yowo"
    e([0x0F, 0x7C, 0x00, 0x00], PREF_F2, SSE3, 0 << 11 | 604, 2 << 4 | 15, 167), // haddps "yowo"
    e([0x0F, 0x7D, 0x00, 0x00], PREF_66, SSE3, 0 << 11 | 605, 2 << 4 | 15, 167), // hsubpd "yowo"
    e([0x0F, 0x7D, 0x00, 0x00], PREF_F2, SSE3, 0 << 11 | 606, 2 << 4 | 15, 167), // hsubps "yowo"
    e([0x0F, 0x3A, 0x21, 0x00], PREF_66, SSE41, 0 << 11 | 607, 3 << 4 | 15, 208), // insertps "yomdib"
    e([0x0F, 0x3A, 0x21, 0x00], PREF_66, SSE41, 1 << 11 | 607, 3 << 4 | 15, 218), // insertps "yoyoib"
    e([0x0F, 0x5F, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 608, 2 << 4 | 15, 167), // maxpd "yowo"
    e([0x0F, 0x5F, 0x00, 0x00], 0, SSE, 0 << 11 | 609, 2 << 4 | 15, 167), // maxps "yowo"
    e([0x0F, 0x5D, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 610, 2 << 4 | 15, 167), // minpd "yowo"
    e([0x0F, 0x5D, 0x00, 0x00], 0, SSE, 0 << 11 | 611, 2 << 4 | 15, 167), // minps "yowo"
    e([0x0F, 0x59, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 612, 2 << 4 | 15, 167), // mulpd "yowo"
    e([0x0F, 0x59, 0x00, 0x00], 0, SSE, 0 << 11 | 613, 2 << 4 | 15, 167), // mulps "yowo"
    e([0x0F, 0x56, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 614, 2 << 4 | 15, 167), // orpd "yowo"
    e([0x0F, 0x56, 0x00, 0x00], 0, SSE, 0 << 11 | 615, 2 << 4 | 15, 167), // orps "yowo"
    e([0x0F, 0x53, 0x00, 0x00], 0, SSE, 0 << 11 | 616, 2 << 4 | 15, 167), // rcpps "yowo"
    e([0x0F, 0x3A, 0x09, 0x00], PREF_66, SSE41, 0 << 11 | 617, 3 << 4 | 15, 209), // roundpd "yomqib"
    e([0x0F, 0x3A, 0x09, 0x00], PREF_66, SSE41, 1 << 11 | 617, 3 << 4 | 15, 218), // roundpd "yoyoib"
    e([0x0F, 0x3A, 0x08, 0x00], PREF_66, SSE41, 0 << 11 | 618, 3 << 4 | 15, 209), // roundps "yomqib"
    e([0x0F, 0x3A, 0x08, 0x00], PREF_66, SSE41, 1 << 11 | 618, 3 << 4 | 15, 218), // roundps "yoyoib"
    e([0x0F, 0x52, 0x00, 0x00], 0, SSE, 0 << 11 | 619, 2 << 4 | 15, 167), // rsqrtps "yowo"
    e([0x0F, 0xC6, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 620, 2 << 4 | 15, 216), // shufpd "yowoib"
    e([0x0F, 0xC6, 0x00, 0x00], 0, SSE, 0 << 11 | 621, 2 << 4 | 15, 216), // shufps "yowoib"
    e([0x0F, 0x51, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 622, 2 << 4 | 15, 167), // sqrtpd "yowo"
    e([0x0F, 0x51, 0x00, 0x00], 0, SSE, 0 << 11 | 623, 2 << 4 | 15, 167), // sqrtps "yowo"
    e([0x0F, 0x5C, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 624, 2 << 4 | 15, 167), // subpd "yowo"
    e([0x0F, 0x5C, 0x00, 0x00], 0, SSE, 0 << 11 | 625, 2 << 4 | 15, 167), // subps "yowo"
    e([0x0F, 0x15, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 626, 2 << 4 | 15, 167), // unpckhpd "yowo"
    e([0x0F, 0x15, 0x00, 0x00], 0, SSE, 0 << 11 | 627, 2 << 4 | 15, 167), // unpckhps "yowo"
    e([0x0F, 0x14, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 628, 2 << 4 | 15, 167), // unpcklpd "yowo"
    e([0x0F, 0x14, 0x00, 0x00], 0, SSE, 0 << 11 | 629, 2 << 4 | 15, 167), // unpcklps "yowo"
    e([0x0F, 0x57, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 630, 2 << 4 | 15, 167), // xorpd "yowo"
    e([0x0F, 0x57, 0x00, 0x00], 0, SSE, 0 << 11 | 631, 2 << 4 | 15, 167), // xorps "yowo"
    e([0x0F, 0x38, 0x1C, 0x00], 0, MMX | SSSE3, 0 << 11 | 632, 3 << 4 | 15, 139), // pabsb "xquq"
    e([0x0F, 0x38, 0x1C, 0x00], PREF_66, SSSE3, 1 << 11 | 632, 3 << 4 | 15, 162), // pabsb "yomq"
    e([0x0F, 0x38, 0x1C, 0x00], PREF_66, SSSE3, 2 << 11 | 632, 3 << 4 | 15, 170), // pabsb "yoyo"
    e([0x0F, 0x38, 0x1E, 0x00], 0, MMX | SSSE3, 0 << 11 | 633, 3 << 4 | 15, 139), // pabsd "xquq"
    e([0x0F, 0x38, 0x1E, 0x00], PREF_66, SSSE3, 1 << 11 | 633, 3 << 4 | 15, 162), // pabsd "yomq"
    e([0x0F, 0x38, 0x1E, 0x00], PREF_66, SSSE3, 2 << 11 | 633, 3 << 4 | 15, 170), // pabsd "yoyo"
    e([0x0F, 0x38, 0x1D, 0x00], 0, MMX | SSSE3, 0 << 11 | 634, 3 << 4 | 15, 139), // pabsw "xquq"
    e([0x0F, 0x38, 0x1D, 0x00], PREF_66, SSSE3, 1 << 11 | 634, 3 << 4 | 15, 162), // pabsw "yomq"
    e([0x0F, 0x38, 0x1D, 0x00], PREF_66, SSSE3, 2 << 11 | 634, 3 << 4 | 15, 170), // pabsw "yoyo"
    e([0x0F, 0x6B, 0x00, 0x00], 0, MMX, 0 << 11 | 635, 2 << 4 | 15, 139), // packssdw "xquq"
    e([0x0F, 0x6B, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 635, 2 << 4 | 15, 167), // packssdw "yowo"
    e([0x0F, 0x63, 0x00, 0x00], 0, MMX, 0 << 11 | 636, 2 << 4 | 15, 139), // packsswb "xquq"
    e([0x0F, 0x63, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 636, 2 << 4 | 15, 167), // packsswb "yowo"
    e([0x0F, 0x38, 0x2B, 0x00], PREF_66, SSE41, 0 << 11 | 637, 3 << 4 | 15, 162), // packusdw "yomq"
    e([0x0F, 0x38, 0x2B, 0x00], PREF_66, SSE41, 1 << 11 | 637, 3 << 4 | 15, 170), // packusdw "yoyo"
    e([0x0F, 0x67, 0x00, 0x00], 0, MMX, 0 << 11 | 638, 2 << 4 | 15, 139), // packuswb "xquq"
    e([0x0F, 0x67, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 638, 2 << 4 | 15, 167), // packuswb "yowo"
    e([0x0F, 0xFC, 0x00, 0x00], 0, MMX, 0 << 11 | 639, 2 << 4 | 15, 139), // paddb "xquq"
    e([0x0F, 0xFC, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 639, 2 << 4 | 15, 167), // paddb "yowo"
    e([0x0F, 0xFE, 0x00, 0x00], 0, MMX, 0 << 11 | 640, 2 << 4 | 15, 139), // paddd "xquq"
    e([0x0F, 0xFE, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 640, 2 << 4 | 15, 167), // paddd "yowo"
    e([0x0F, 0xD4, 0x00, 0x00], 0, MMX, 0 << 11 | 641, 2 << 4 | 15, 139), // paddq "xquq"
    e([0x0F, 0xD4, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 641, 2 << 4 | 15, 167), // paddq "yowo"
    e([0x0F, 0xEC, 0x00, 0x00], 0, MMX, 0 << 11 | 642, 2 << 4 | 15, 139), // paddsb "xquq"
    e([0x0F, 0xEC, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 642, 2 << 4 | 15, 167), // paddsb "yowo"
    e([0x0F, 0x51, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 643, 2 << 4 | 15, 139), // paddsiw "xquq"
    e([0x0F, 0xED, 0x00, 0x00], 0, MMX, 0 << 11 | 644, 2 << 4 | 15, 139), // paddsw "xquq"
    e([0x0F, 0xED, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 644, 2 << 4 | 15, 167), // paddsw "yowo"
    e([0x0F, 0xDC, 0x00, 0x00], 0, MMX, 0 << 11 | 645, 2 << 4 | 15, 139), // paddusb "xquq"
    e([0x0F, 0xDC, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 645, 2 << 4 | 15, 167), // paddusb "yowo"
    e([0x0F, 0xDD, 0x00, 0x00], 0, MMX, 0 << 11 | 646, 2 << 4 | 15, 139), // paddusw "xquq"
    e([0x0F, 0xDD, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 646, 2 << 4 | 15, 167), // paddusw "yowo"
    e([0x0F, 0xFD, 0x00, 0x00], 0, MMX, 0 << 11 | 647, 2 << 4 | 15, 139), // paddw "xquq"
    e([0x0F, 0xFD, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 647, 2 << 4 | 15, 167), // paddw "yowo"
    e([0x0F, 0x3A, 0x0F, 0x00], 0, MMX | SSSE3, 0 << 11 | 648, 3 << 4 | 15, 193), // palignr "xquqib"
    e([0x0F, 0x3A, 0x0F, 0x00], PREF_66, SSSE3, 1 << 11 | 648, 3 << 4 | 15, 209), // palignr "yomqib"
    e([0x0F, 0x3A, 0x0F, 0x00], PREF_66, SSSE3, 2 << 11 | 648, 3 << 4 | 15, 218), // palignr "yoyoib"
    e([0x0F, 0xDB, 0x00, 0x00], 0, MMX, 0 << 11 | 649, 2 << 4 | 15, 139), // pand "xquq"
    e([0x0F, 0xDB, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 649, 2 << 4 | 15, 167), // pand "yowo"
    e([0x0F, 0xDF, 0x00, 0x00], 0, MMX, 0 << 11 | 650, 2 << 4 | 15, 139), // pandn "xquq"
    e([0x0F, 0xDF, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 650, 2 << 4 | 15, 167), // pandn "yowo"
    e([0x0F, 0x50, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 651, 2 << 4 | 15, 139), // paveb "xquq"
    e([0x0F, 0xE0, 0x00, 0x00], 0, MMX, 0 << 11 | 652, 2 << 4 | 15, 139), // pavgb "xquq"
    e([0x0F, 0xE0, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 652, 2 << 4 | 15, 167), // pavgb "yowo"
    e([0x0F, 0x0F, 0xBF, 0x00], IMM_OP, TDNOW, 0 << 11 | 653, 3 << 4 | 15, 139), // pavgusb "xquq"
    e([0x0F, 0xE3, 0x00, 0x00], 0, MMX, 0 << 11 | 654, 2 << 4 | 15, 139), // pavgw "xquq"
    e([0x0F, 0xE3, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 654, 2 << 4 | 15, 167), // pavgw "yowo"
    e([0x0F, 0x38, 0x10, 0x00], PREF_66, SSE41, 0 << 11 | 655, 3 << 4 | 15, 162), // pblendvb "yomq"
    e([0x0F, 0x38, 0x10, 0x00], PREF_66, SSE41, 1 << 11 | 655, 3 << 4 | 15, 170), // pblendvb "yoyo"
    e([0x0F, 0x3A, 0x0E, 0x00], PREF_66, SSE41, 0 << 11 | 656, 3 << 4 | 15, 209), // pblendw "yomqib"
    e([0x0F, 0x3A, 0x0E, 0x00], PREF_66, SSE41, 1 << 11 | 656, 3 << 4 | 15, 218), // pblendw "yoyoib"
    e([0x0F, 0x3A, 0x44, 0x11], IMM_OP | PREF_66, SSE, 0 << 11 | 657, 4 << 4 | 15, 167), // pclmulhqhqdq "yowo"
    e([0x0F, 0x3A, 0x44, 0x01], IMM_OP | PREF_66, SSE, 0 << 11 | 658, 4 << 4 | 15, 167), // pclmulhqlqdq "yowo"
    e([0x0F, 0x3A, 0x44, 0x10], IMM_OP | PREF_66, SSE, 0 << 11 | 659, 4 << 4 | 15, 167), // pclmullqhqdq "yowo"
    e([0x0F, 0x3A, 0x44, 0x00], IMM_OP | PREF_66, SSE, 0 << 11 | 660, 4 << 4 | 15, 167), // pclmullqlqdq "yowo"
    e([0x0F, 0x3A, 0x44, 0x00], PREF_66, SSE, 0 << 11 | 661, 3 << 4 | 15, 216), // pclmulqdq "yowoib"
    e([0x0F, 0x74, 0x00, 0x00], 0, MMX, 0 << 11 | 662, 2 << 4 | 15, 139), // pcmpeqb "xquq"
    e([0x0F, 0x74, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 662, 2 << 4 | 15, 167), // pcmpeqb "yowo"
    e([0x0F, 0x76, 0x00, 0x00], 0, MMX, 0 << 11 | 663, 2 << 4 | 15, 139), // pcmpeqd "xquq"
    e([0x0F, 0x76, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 663, 2 << 4 | 15, 167), // pcmpeqd "yowo"
    e([0x0F, 0x38, 0x29, 0x00], PREF_66, SSE41, 0 << 11 | 664, 3 << 4 | 15, 162), // pcmpeqq "yomq"
    e([0x0F, 0x38, 0x29, 0x00], PREF_66, SSE41, 1 << 11 | 664, 3 << 4 | 15, 170), // pcmpeqq "yoyo"
    e([0x0F, 0x75, 0x00, 0x00], 0, MMX, 0 << 11 | 665, 2 << 4 | 15, 139), // pcmpeqw "xquq"
    e([0x0F, 0x75, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 665, 2 << 4 | 15, 167), // pcmpeqw "yowo"
    e([0x0F, 0x3A, 0x61, 0x00], PREF_66, SSE42, 0 << 11 | 666, 3 << 4 | 15, 209), // pcmpestri "yomqib"
    e([0x0F, 0x3A, 0x61, 0x00], PREF_66, SSE42, 1 << 11 | 666, 3 << 4 | 15, 218), // pcmpestri "yoyoib"
    e([0x0F, 0x3A, 0x60, 0x00], PREF_66, SSE42, 0 << 11 | 667, 3 << 4 | 15, 209), // pcmpestrm "yomqib"
    e([0x0F, 0x3A, 0x60, 0x00], PREF_66, SSE42, 1 << 11 | 667, 3 << 4 | 15, 218), // pcmpestrm "yoyoib"
    e([0x0F, 0x64, 0x00, 0x00], 0, MMX, 0 << 11 | 668, 2 << 4 | 15, 139), // pcmpgtb "xquq"
    e([0x0F, 0x64, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 668, 2 << 4 | 15, 167), // pcmpgtb "yowo"
    e([0x0F, 0x66, 0x00, 0x00], 0, MMX, 0 << 11 | 669, 2 << 4 | 15, 139), // pcmpgtd "xquq"
    e([0x0F, 0x66, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 669, 2 << 4 | 15, 167), // pcmpgtd "yowo"
    e([0x0F, 0x38, 0x37, 0x00], PREF_66, SSE42, 0 << 11 | 670, 3 << 4 | 15, 162), // pcmpgtq "yomq"
    e([0x0F, 0x38, 0x37, 0x00], PREF_66, SSE42, 1 << 11 | 670, 3 << 4 | 15, 170), // pcmpgtq "yoyo"
    e([0x0F, 0x65, 0x00, 0x00], 0, MMX, 0 << 11 | 671, 2 << 4 | 15, 139), // pcmpgtw "xquq"
    e([0x0F, 0x65, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 671, 2 << 4 | 15, 167), // pcmpgtw "yowo"
    e([0x0F, 0x3A, 0x63, 0x00], PREF_66, SSE42, 0 << 11 | 672, 3 << 4 | 15, 209), // pcmpistri "yomqib"
    e([0x0F, 0x3A, 0x63, 0x00], PREF_66, SSE42, 1 << 11 | 672, 3 << 4 | 15, 218), // pcmpistri "yoyoib"
    e([0x0F, 0x3A, 0x62, 0x00], PREF_66, SSE42, 0 << 11 | 673, 3 << 4 | 15, 209), // pcmpistrm "yomqib"
    e([0x0F, 0x3A, 0x62, 0x00], PREF_66, SSE42, 1 << 11 | 673, 3 << 4 | 15, 218), // pcmpistrm "yoyoib"
    e([0x02, 0xF5, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2, BMI2, 0 << 11 | 674, 2 << 4 | 15, 177), // pdep "r0r0v0"
    e([0x0F, 0x54, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 675, 2 << 4 | 15, 138), // pdistib "xqmq"
    e([0x02, 0xF5, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F3, BMI2, 0 << 11 | 676, 2 << 4 | 15, 177), // pext "r0r0v0"
    e([0x0F, 0x3A, 0x14, 0x00], PREF_66 | ENC_MR, SSE41, 0 << 11 | 677, 3 << 4 | 15, 174), // pextrb "mbyoib"
    e([0x0F, 0x3A, 0x14, 0x00], PREF_66 | ENC_MR, SSE41, 1 << 11 | 677, 3 << 4 | 15, 183), // pextrb "rdyoib"
    e([0x0F, 0x3A, 0x14, 0x00], WITH_REXW | PREF_66 | ENC_MR, SSE41, 2 << 11 | 677, 3 << 4 | 15, 184), // pextrb "rqyoib"
    e([0x0F, 0x3A, 0x16, 0x00], PREF_66 | ENC_MR, SSE41, 0 << 11 | 678, 3 << 4 | 15, 187), // pextrd "vdyoib"
    e([0x0F, 0x3A, 0x16, 0x00], WITH_REXW | PREF_66 | ENC_MR, SSE41, 0 << 11 | 679, 3 << 4 | 15, 188), // pextrq "vqyoib"
    e([0x0F, 0x3A, 0x15, 0x00], PREF_66 | ENC_MR, SSE41, 0 << 11 | 680, 3 << 4 | 15, 176), // pextrw "mwyoib"
    e([0x0F, 0xC5, 0x00, 0x00], 0, MMX, 1 << 11 | 680, 2 << 4 | 15, 182), // pextrw "rdxqib"
    e([0x0F, 0xC5, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 680, 2 << 4 | 15, 183), // pextrw "rdyoib"
    e([0x0F, 0x3A, 0x15, 0x00], PREF_66 | ENC_MR, SSE41, 3 << 11 | 680, 3 << 4 | 15, 183), // pextrw "rdyoib"
    e([0x0F, 0x3A, 0x15, 0x00], WITH_REXW | PREF_66 | ENC_MR, SSE41, 4 << 11 | 680, 3 << 4 | 15, 184), // pextrw "rqyoib"
    e([0x0F, 0x0F, 0x1D, 0x00], IMM_OP, TDNOW, 0 << 11 | 681, 3 << 4 | 15, 139), // pf2id "xquq"
    e([0x0F, 0x0F, 0x1C, 0x00], IMM_OP, TDNOW, 0 << 11 | 682, 3 << 4 | 15, 139), // pf2iw "xquq"
    e([0x0F, 0x0F, 0xAE, 0x00], IMM_OP, TDNOW, 0 << 11 | 683, 3 << 4 | 15, 139), // pfacc "xquq"
    e([0x0F, 0x0F, 0x9E, 0x00], IMM_OP, TDNOW, 0 << 11 | 684, 3 << 4 | 15, 139), // pfadd "xquq"
    e([0x0F, 0x0F, 0xB0, 0x00], IMM_OP, TDNOW, 0 << 11 | 685, 3 << 4 | 15, 139), // pfcmpeq "xquq"
    e([0x0F, 0x0F, 0x90, 0x00], IMM_OP, TDNOW, 0 << 11 | 686, 3 << 4 | 15, 139), // pfcmpge "xquq"
    e([0x0F, 0x0F, 0xA0, 0x00], IMM_OP, TDNOW, 0 << 11 | 687, 3 << 4 | 15, 139), // pfcmpgt "xquq"
    e([0x0F, 0x0F, 0xA4, 0x00], IMM_OP, TDNOW, 0 << 11 | 688, 3 << 4 | 15, 139), // pfmax "xquq"
    e([0x0F, 0x0F, 0x94, 0x00], IMM_OP, TDNOW, 0 << 11 | 689, 3 << 4 | 15, 139), // pfmin "xquq"
    e([0x0F, 0x0F, 0xB4, 0x00], IMM_OP, TDNOW, 0 << 11 | 690, 3 << 4 | 15, 139), // pfmul "xquq"
    e([0x0F, 0x0F, 0x8A, 0x00], IMM_OP, TDNOW, 0 << 11 | 691, 3 << 4 | 15, 139), // pfnacc "xquq"
    e([0x0F, 0x0F, 0x8E, 0x00], IMM_OP, TDNOW, 0 << 11 | 692, 3 << 4 | 15, 139), // pfpnacc "xquq"
    e([0x0F, 0x0F, 0x96, 0x00], IMM_OP, TDNOW, 0 << 11 | 693, 3 << 4 | 15, 139), // pfrcp "xquq"
    e([0x0F, 0x0F, 0xA6, 0x00], IMM_OP, TDNOW, 0 << 11 | 694, 3 << 4 | 15, 139), // pfrcpit1 "xquq"
    e([0x0F, 0x0F, 0xB6, 0x00], IMM_OP, TDNOW, 0 << 11 | 695, 3 << 4 | 15, 139), // pfrcpit2 "xquq"
    e([0x0F, 0x0F, 0x86, 0x00], IMM_OP, TDNOW | CYRIX, 0 << 11 | 696, 3 << 4 | 15, 139), // pfrcpv "xquq"
    e([0x0F, 0x0F, 0xA7, 0x00], IMM_OP, TDNOW, 0 << 11 | 697, 3 << 4 | 15, 139), // pfrsqit1 "xquq"
    e([0x0F, 0x0F, 0x97, 0x00], IMM_OP, TDNOW, 0 << 11 | 698, 3 << 4 | 15, 139), // pfrsqrt "xquq"
    e([0x0F, 0x0F, 0x87, 0x00], IMM_OP, TDNOW | CYRIX, 0 << 11 | 699, 3 << 4 | 15, 139), // pfrsqrtv "xquq"
    e([0x0F, 0x0F, 0x9A, 0x00], IMM_OP, TDNOW, 0 << 11 | 700, 3 << 4 | 15, 139), // pfsub "xquq"
    e([0x0F, 0x0F, 0xAA, 0x00], IMM_OP, TDNOW, 0 << 11 | 701, 3 << 4 | 15, 139), // pfsubr "xquq"
    e([0x0F, 0x38, 0x02, 0x00], 0, MMX | SSSE3, 0 << 11 | 702, 3 << 4 | 15, 139), // phaddd "xquq"
    e([0x0F, 0x38, 0x02, 0x00], PREF_66, SSSE3, 1 << 11 | 702, 3 << 4 | 15, 162), // phaddd "yomq"
    e([0x0F, 0x38, 0x02, 0x00], PREF_66, SSSE3, 2 << 11 | 702, 3 << 4 | 15, 170), // phaddd "yoyo"
    e([0x0F, 0x38, 0x03, 0x00], 0, MMX | SSSE3, 0 << 11 | 703, 3 << 4 | 15, 139), // phaddsw "xquq"
    e([0x0F, 0x38, 0x03, 0x00], PREF_66, SSSE3, 1 << 11 | 703, 3 << 4 | 15, 162), // phaddsw "yomq"
    e([0x0F, 0x38, 0x03, 0x00], PREF_66, SSSE3, 2 << 11 | 703, 3 << 4 | 15, 170), // phaddsw "yoyo"
    e([0x0F, 0x38, 0x01, 0x00], 0, MMX | SSSE3, 0 << 11 | 704, 3 << 4 | 15, 139), // phaddw "xquq"
    e([0x0F, 0x38, 0x01, 0x00], PREF_66, SSSE3, 1 << 11 | 704, 3 << 4 | 15, 162), // phaddw "yomq"
    e([0x0F, 0x38, 0x01, 0x00], PREF_66, SSSE3, 2 << 11 | 704, 3 << 4 | 15, 170), // phaddw "yoyo"
    e([0x0F, 0x38, 0x41, 0x00], PREF_66, SSE41, 0 << 11 | 705, 3 << 4 | 15, 162), // phminposuw "yomq"
    e([0x0F, 0x38, 0x41, 0x00], PREF_66, SSE41, 1 << 11 | 705, 3 << 4 | 15, 170), // phminposuw "yoyo"
    e([0x0F, 0x38, 0x06, 0x00], 0, MMX | SSSE3, 0 << 11 | 706, 3 << 4 | 15, 139), // phsubd "xquq"
    e([0x0F, 0x38, 0x06, 0x00], PREF_66, SSSE3, 1 << 11 | 706, 3 << 4 | 15, 162), // phsubd "yomq"
    e([0x0F, 0x38, 0x06, 0x00], PREF_66, SSSE3, 2 << 11 | 706, 3 << 4 | 15, 170), // phsubd "yoyo"
    e([0x0F, 0x38, 0x07, 0x00], 0, MMX | SSSE3, 0 << 11 | 707, 3 << 4 | 15, 139), // phsubsw "xquq"
    e([0x0F, 0x38, 0x07, 0x00], PREF_66, SSSE3, 1 << 11 | 707, 3 << 4 | 15, 162), // phsubsw "yomq"
    e([0x0F, 0x38, 0x07, 0x00], PREF_66, SSSE3, 2 << 11 | 707, 3 << 4 | 15, 170), // phsubsw "yoyo"
    e([0x0F, 0x38, 0x05, 0x00], 0, MMX | SSSE3, 0 << 11 | 708, 3 << 4 | 15, 139), // phsubw "xquq"
    e([0x0F, 0x38, 0x05, 0x00], PREF_66, SSSE3, 1 << 11 | 708, 3 << 4 | 15, 162), // phsubw "yomq"
    e([0x0F, 0x38, 0x05, 0x00], PREF_66, SSSE3, 2 << 11 | 708, 3 << 4 | 15, 170), // phsubw "yoyo"
    e([0x0F, 0x0F, 0x0D, 0x00], IMM_OP, TDNOW, 0 << 11 | 709, 3 << 4 | 15, 139), // pi2fd "xquq"
    e([0x0F, 0x0F, 0x0C, 0x00], IMM_OP, TDNOW, 0 << 11 | 710, 3 << 4 | 15, 139), // pi2fw "xquq"
    e([0x0F, 0x3A, 0x20, 0x00], PREF_66, SSE41, 0 << 11 | 711, 3 << 4 | 15, 207), // pinsrb "yom1ib"
    e([0x0F, 0x3A, 0x20, 0x00], PREF_66, SSE41, 1 << 11 | 711, 3 << 4 | 15, 211), // pinsrb "yordib"
    e([0x0F, 0x3A, 0x20, 0x00], PREF_66, SSE41, 2 << 11 | 711, 3 << 4 | 15, 213), // pinsrb "yovbib"
    e([0x0F, 0x3A, 0x22, 0x00], PREF_66, SSE41, 0 << 11 | 712, 3 << 4 | 15, 207), // pinsrd "yom1ib"
    e([0x0F, 0x3A, 0x22, 0x00], PREF_66, SSE41, 1 << 11 | 712, 3 << 4 | 15, 214), // pinsrd "yovdib"
    e([0x0F, 0x3A, 0x22, 0x00], WITH_REXW | PREF_66, SSE41, 0 << 11 | 713, 3 << 4 | 15, 207), // pinsrq "yom1ib"
    e([0x0F, 0x3A, 0x22, 0x00], WITH_REXW | PREF_66, SSE41, 1 << 11 | 713, 3 << 4 | 15, 215), // pinsrq "yovqib"
    e([0x0F, 0xC4, 0x00, 0x00], 0, MMX, 0 << 11 | 714, 2 << 4 | 15, 191), // pinsrw "xqm1ib"
    e([0x0F, 0xC4, 0x00, 0x00], 0, MMX, 1 << 11 | 714, 2 << 4 | 15, 192), // pinsrw "xqrdib"
    e([0x0F, 0xC4, 0x00, 0x00], 0, MMX, 2 << 11 | 714, 2 << 4 | 15, 194), // pinsrw "xqvwib"
    e([0x0F, 0xC4, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 714, 2 << 4 | 15, 207), // pinsrw "yom1ib"
    e([0x0F, 0xC4, 0x00, 0x00], PREF_66, SSE2, 4 << 11 | 714, 2 << 4 | 15, 210), // pinsrw "yomwib"
    e([0x0F, 0xC4, 0x00, 0x00], PREF_66, SSE2, 5 << 11 | 714, 2 << 4 | 15, 211), // pinsrw "yordib"
    e([0x0F, 0xC4, 0x00, 0x00], PREF_66, SSE2, 6 << 11 | 714, 2 << 4 | 15, 212), // pinsrw "yorwib"
    e([0x0F, 0x5E, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 715, 2 << 4 | 15, 138), // pmachriw "xqmq"
    e([0x0F, 0x38, 0x04, 0x00], 0, MMX | SSSE3, 0 << 11 | 716, 3 << 4 | 15, 139), // pmaddubsw "xquq"
    e([0x0F, 0x38, 0x04, 0x00], PREF_66, SSSE3, 1 << 11 | 716, 3 << 4 | 15, 162), // pmaddubsw "yomq"
    e([0x0F, 0x38, 0x04, 0x00], PREF_66, SSSE3, 2 << 11 | 716, 3 << 4 | 15, 170), // pmaddubsw "yoyo"
    e([0x0F, 0xF5, 0x00, 0x00], 0, MMX, 0 << 11 | 717, 2 << 4 | 15, 139), // pmaddwd "xquq"
    e([0x0F, 0xF5, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 717, 2 << 4 | 15, 167), // pmaddwd "yowo"
    e([0x0F, 0x52, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 718, 2 << 4 | 15, 139), // pmagw "xquq"
    e([0x0F, 0x38, 0x3C, 0x00], PREF_66, SSE41, 0 << 11 | 719, 3 << 4 | 15, 162), // pmaxsb "yomq"
    e([0x0F, 0x38, 0x3C, 0x00], PREF_66, SSE41, 1 << 11 | 719, 3 << 4 | 15, 170), // pmaxsb "yoyo"
    e([0x0F, 0x38, 0x3D, 0x00], PREF_66, SSE41, 0 << 11 | 720, 3 << 4 | 15, 162), // pmaxsd "yomq"
    e([0x0F, 0x38, 0x3D, 0x00], PREF_66, SSE41, 1 << 11 | 720, 3 << 4 | 15, 170), // pmaxsd "yoyo"
    e([0x0F, 0xEE, 0x00, 0x00], 0, MMX, 0 << 11 | 721, 2 << 4 | 15, 139), // pmaxsw "xquq"
    e([0x0F, 0xEE, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 721, 2 << 4 | 15, 167), // pmaxsw "yowo"
    e([0x0F, 0xDE, 0x00, 0x00], 0, MMX, 0 << 11 | 722, 2 << 4 | 15, 139), // pmaxub "xquq"
    e([0x0F, 0xDE, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 722, 2 << 4 | 15, 167), // pmaxub "yowo"
    e([0x0F, 0x38, 0x3F, 0x00], PREF_66, SSE41, 0 << 11 | 723, 3 << 4 | 15, 162), // pmaxud "yomq"
    e([0x0F, 0x38, 0x3F, 0x00], PREF_66, SSE41, 1 << 11 | 723, 3 << 4 | 15, 170), // pmaxud "yoyo"
    e([0x0F, 0x38, 0x3E, 0x00], PREF_66, SSE41, 0 << 11 | 724, 3 << 4 | 15, 162), // pmaxuw "yomq"
    e([0x0F, 0x38, 0x3E, 0x00], PREF_66, SSE41, 1 << 11 | 724, 3 << 4 | 15, 170), // pmaxuw "yoyo"
    e([0x0F, 0x38, 0x38, 0x00], PREF_66, SSE41, 0 << 11 | 725, 3 << 4 | 15, 162), // pminsb "yomq"
    e([0x0F, 0x38, 0x38, 0x00], PREF_66, SSE41, 1 << 11 | 725, 3 << 4 | 15, 170), // pminsb "yoyo"
    e([0x0F, 0x38, 0x39, 0x00], PREF_66, SSE41, 0 << 11 | 726, 3 << 4 | 15, 162), // pminsd "yomq"
    e([0x0F, 0x38, 0x39, 0x00], PREF_66, SSE41, 1 << 11 | 726, 3 << 4 | 15, 170), // pminsd "yoyo"
    e([0x0F, 0xEA, 0x00, 0x00], 0, MMX, 0 << 11 | 727, 2 << 4 | 15, 139), // pminsw "xquq"
    e([0x0F, 0xEA, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 727, 2 << 4 | 15, 167), // pminsw "yowo"
    e([0x0F, 0xDA, 0x00, 0x00], 0, MMX, 0 << 11 | 728, 2 << 4 | 15, 139), // pminub "xquq"
    e([0x0F, 0xDA, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 728, 2 << 4 | 15, 167), // pminub "yowo"
    e([0x0F, 0x38, 0x3B, 0x00], PREF_66, SSE41, 0 << 11 | 729, 3 << 4 | 15, 162), // pminud "yomq"
    e([0x0F, 0x38, 0x3B, 0x00], PREF_66, SSE41, 1 << 11 | 729, 3 << 4 | 15, 170), // pminud "yoyo"
    e([0x0F, 0x38, 0x3A, 0x00], PREF_66, SSE41, 0 << 11 | 730, 3 << 4 | 15, 162), // pminuw "yomq"
    e([0x0F, 0x38, 0x3A, 0x00], PREF_66, SSE41, 1 << 11 | 730, 3 << 4 | 15, 170), // pminuw "yoyo"
    e([0x0F, 0xD7, 0x00, 0x00], 0, MMX, 0 << 11 | 731, 2 << 4 | 15, 105), // pmovmskb "rdxq"
    e([0x0F, 0xD7, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 731, 2 << 4 | 15, 106), // pmovmskb "rdyo"
    e([0x0F, 0x38, 0x21, 0x00], PREF_66, SSE41, 0 << 11 | 732, 3 << 4 | 15, 160), // pmovsxbd "yomd"
    e([0x0F, 0x38, 0x21, 0x00], PREF_66, SSE41, 1 << 11 | 732, 3 << 4 | 15, 170), // pmovsxbd "yoyo"
    e([0x0F, 0x38, 0x22, 0x00], PREF_66, SSE41, 0 << 11 | 733, 3 << 4 | 15, 163), // pmovsxbq "yomw"
    e([0x0F, 0x38, 0x22, 0x00], PREF_66, SSE41, 1 << 11 | 733, 3 << 4 | 15, 170), // pmovsxbq "yoyo"
    e([0x0F, 0x38, 0x20, 0x00], PREF_66, SSE41, 0 << 11 | 734, 3 << 4 | 15, 162), // pmovsxbw "yomq"
    e([0x0F, 0x38, 0x20, 0x00], PREF_66, SSE41, 1 << 11 | 734, 3 << 4 | 15, 170), // pmovsxbw "yoyo"
    e([0x0F, 0x38, 0x25, 0x00], PREF_66, SSE41, 0 << 11 | 735, 3 << 4 | 15, 162), // pmovsxdq "yomq"
    e([0x0F, 0x38, 0x25, 0x00], PREF_66, SSE41, 1 << 11 | 735, 3 << 4 | 15, 170), // pmovsxdq "yoyo"
    e([0x0F, 0x38, 0x23, 0x00], PREF_66, SSE41, 0 << 11 | 736, 3 << 4 | 15, 162), // pmovsxwd "yomq"
    e([0x0F, 0x38, 0x23, 0x00], PREF_66, SSE41, 1 << 11 | 736, 3 << 4 | 15, 170), // pmovsxwd "yoyo"
    e([0x0F, 0x38, 0x24, 0x00], PREF_66, SSE41, 0 << 11 | 737, 3 << 4 | 15, 160), // pmovsxwq "yomd"
    e([0x0F, 0x38, 0x24, 0x00], PREF_66, SSE41, 1 << 11 | 737, 3 << 4 | 15, 170), // pmovsxwq "yoyo"
    e([0x0F, 0x38, 0x31, 0x00], PREF_66, SSE41, 0 << 11 | 738, 3 << 4 | 15, 160), // pmovzxbd "yomd"
    e([0x0F, 0x38, 0x31, 0x00], PREF_66, SSE41, 1 << 11 | 738, 3 << 4 | 15, 170), // pmovzxbd "yoyo"
    e([0x0F, 0x38, 0x32, 0x00], PREF_66, SSE41, 0 << 11 | 739, 3 << 4 | 15, 163), // pmovzxbq "yomw"
    e([0x0F, 0x38, 0x32, 0x00], PREF_66, SSE41, 1 << 11 | 739, 3 << 4 | 15, 170), // pmovzxbq "yoyo"
    e([0x0F, 0x38, 0x30, 0x00], PREF_66, SSE41, 0 << 11 | 740, 3 << 4 | 15, 162), // pmovzxbw "yomq"
    e([0x0F, 0x38, 0x30, 0x00], PREF_66, SSE41, 1 << 11 | 740, 3 << 4 | 15, 170), // pmovzxbw "yoyo"
    e([0x0F, 0x38, 0x35, 0x00], PREF_66, SSE41, 0 << 11 | 741, 3 << 4 | 15, 162), // pmovzxdq "yomq"
    e([0x0F, 0x38, 0x35, 0x00], PREF_66, SSE41, 1 << 11 | 741, 3 << 4 | 15, 170), // pmovzxdq "yoyo"
    e([0x0F, 0x38, 0x33, 0x00], PREF_66, SSE41, 0 << 11 | 742, 3 << 4 | 15, 162), // pmovzxwd "yomq"
    e([0x0F, 0x38, 0x33, 0x00], PREF_66, SSE41, 1 << 11 | 742, 3 << 4 | 15, 170), // pmovzxwd "yoyo"
    e([0x0F, 0x38, 0x34, 0x00], PREF_66, SSE41, 0 << 11 | 743, 3 << 4 | 15, 160), // pmovzxwq "yomd"
    e([0x0F, 0x38, 0x34, 0x00], PREF_66, SSE41, 1 << 11 | 743, 3 << 4 | 15, 170), // pmovzxwq "yoyo"
    e([0x0F, 0x38, 0x28, 0x00], PREF_66, SSE41, 0 << 11 | 744, 3 << 4 | 15, 162), // pmuldq "yomq"
    e([0x0F, 0x38, 0x28, 0x00], PREF_66, SSE41, 1 << 11 | 744, 3 << 4 | 15, 170), // pmuldq "yoyo"
    e([0x0F, 0x5D, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 745, 2 << 4 | 15, 139), // pmulhriw "xquq"
    e([0x0F, 0x38, 0x0B, 0x00], 0, MMX | SSSE3, 0 << 11 | 746, 3 << 4 | 15, 139), // pmulhrsw "xquq"
    e([0x0F, 0x38, 0x0B, 0x00], PREF_66, SSSE3, 1 << 11 | 746, 3 << 4 | 15, 162), // pmulhrsw "yomq"
    e([0x0F, 0x38, 0x0B, 0x00], PREF_66, SSSE3, 2 << 11 | 746, 3 << 4 | 15, 170), // pmulhrsw "yoyo"
    e([0x0F, 0x0F, 0xB7, 0x00], IMM_OP, TDNOW, 0 << 11 | 747, 3 << 4 | 15, 139), // pmulhrwa "xquq"
    e([0x0F, 0x59, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 748, 2 << 4 | 15, 139), // pmulhrwc "xquq"
    e([0x0F, 0xE4, 0x00, 0x00], 0, MMX, 0 << 11 | 749, 2 << 4 | 15, 139), // pmulhuw "xquq"
    e([0x0F, 0xE4, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 749, 2 << 4 | 15, 167), // pmulhuw "yowo"
    e([0x0F, 0xE5, 0x00, 0x00], 0, MMX, 0 << 11 | 750, 2 << 4 | 15, 139), // pmulhw "xquq"
    e([0x0F, 0xE5, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 750, 2 << 4 | 15, 167), // pmulhw "yowo"
    e([0x0F, 0x38, 0x40, 0x00], PREF_66, SSE41, 0 << 11 | 751, 3 << 4 | 15, 162), // pmulld "yomq"
    e([0x0F, 0x38, 0x40, 0x00], PREF_66, SSE41, 1 << 11 | 751, 3 << 4 | 15, 170), // pmulld "yoyo"
    e([0x0F, 0xD5, 0x00, 0x00], 0, MMX, 0 << 11 | 752, 2 << 4 | 15, 139), // pmullw "xquq"
    e([0x0F, 0xD5, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 752, 2 << 4 | 15, 167), // pmullw "yowo"
    e([0x0F, 0xF4, 0x00, 0x00], 0, SSE2, 0 << 11 | 753, 2 << 4 | 15, 139), // pmuludq "xquq"
    e([0x0F, 0xF4, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 753, 2 << 4 | 15, 167), // pmuludq "yowo"
    e([0x0F, 0x5C, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 754, 2 << 4 | 15, 138), // pmvgezb "xqmq"
    e([0x0F, 0x5B, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 755, 2 << 4 | 15, 138), // pmvlzb "xqmq"
    e([0x0F, 0x5A, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 756, 2 << 4 | 15, 138), // pmvnzb "xqmq"
    e([0x0F, 0x58, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 757, 2 << 4 | 15, 138), // pmvzb "xqmq"
    e([0x0F, 0xEB, 0x00, 0x00], 0, MMX, 0 << 11 | 758, 2 << 4 | 15, 139), // por "xquq"
    e([0x0F, 0xEB, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 758, 2 << 4 | 15, 167), // por "yowo"
    e([0x0F, 0xF6, 0x00, 0x00], 0, MMX, 0 << 11 | 759, 2 << 4 | 15, 139), // psadbw "xquq"
    e([0x0F, 0xF6, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 759, 2 << 4 | 15, 167), // psadbw "yowo"
    e([0x0F, 0x38, 0x00, 0x00], 0, MMX | SSSE3, 0 << 11 | 760, 3 << 4 | 15, 139), // pshufb "xquq"
    e([0x0F, 0x38, 0x00, 0x00], PREF_66, SSSE3, 1 << 11 | 760, 3 << 4 | 15, 162), // pshufb "yomq"
    e([0x0F, 0x38, 0x00, 0x00], PREF_66, SSSE3, 2 << 11 | 760, 3 << 4 | 15, 170), // pshufb "yoyo"
    e([0x0F, 0x70, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 761, 2 << 4 | 15, 216), // pshufd "yowoib"
    e([0x0F, 0x70, 0x00, 0x00], PREF_F3, SSE2, 0 << 11 | 762, 2 << 4 | 15, 216), // pshufhw "yowoib"
    e([0x0F, 0x70, 0x00, 0x00], PREF_F2, SSE2, 0 << 11 | 763, 2 << 4 | 15, 216), // pshuflw "yowoib"
    e([0x0F, 0x70, 0x00, 0x00], 0, MMX, 0 << 11 | 764, 2 << 4 | 15, 193), // pshufw "xquqib"
    e([0x0F, 0x38, 0x08, 0x00], 0, MMX | SSSE3, 0 << 11 | 765, 3 << 4 | 15, 139), // psignb "xquq"
    e([0x0F, 0x38, 0x08, 0x00], PREF_66, SSSE3, 1 << 11 | 765, 3 << 4 | 15, 162), // psignb "yomq"
    e([0x0F, 0x38, 0x08, 0x00], PREF_66, SSSE3, 2 << 11 | 765, 3 << 4 | 15, 170), // psignb "yoyo"
    e([0x0F, 0x38, 0x0A, 0x00], 0, MMX | SSSE3, 0 << 11 | 766, 3 << 4 | 15, 139), // psignd "xquq"
    e([0x0F, 0x38, 0x0A, 0x00], PREF_66, SSSE3, 1 << 11 | 766, 3 << 4 | 15, 162), // psignd "yomq"
    e([0x0F, 0x38, 0x0A, 0x00], PREF_66, SSSE3, 2 << 11 | 766, 3 << 4 | 15, 170), // psignd "yoyo"
    e([0x0F, 0x38, 0x09, 0x00], 0, MMX | SSSE3, 0 << 11 | 767, 3 << 4 | 15, 139), // psignw "xquq"
    e([0x0F, 0x38, 0x09, 0x00], PREF_66, SSSE3, 1 << 11 | 767, 3 << 4 | 15, 162), // psignw "yomq"
    e([0x0F, 0x38, 0x09, 0x00], PREF_66, SSSE3, 2 << 11 | 767, 3 << 4 | 15, 170), // psignw "yoyo"
    e([0x0F, 0x72, 0x00, 0x00], 0, MMX, 0 << 11 | 768, 2 << 4 | 6, 137), // pslld "xqib"
    e([0x0F, 0xF2, 0x00, 0x00], 0, MMX, 1 << 11 | 768, 2 << 4 | 15, 139), // pslld "xquq"
    e([0x0F, 0x72, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 768, 2 << 4 | 6, 157), // pslld "yoib"
    e([0x0F, 0xF2, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 768, 2 << 4 | 15, 167), // pslld "yowo"
    e([0x0F, 0x73, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 769, 2 << 4 | 7, 157), // pslldq "yoib"
    e([0x0F, 0x73, 0x00, 0x00], 0, MMX, 0 << 11 | 770, 2 << 4 | 6, 137), // psllq "xqib"
    e([0x0F, 0xF3, 0x00, 0x00], 0, MMX, 1 << 11 | 770, 2 << 4 | 15, 139), // psllq "xquq"
    e([0x0F, 0x73, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 770, 2 << 4 | 6, 157), // psllq "yoib"
    e([0x0F, 0xF3, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 770, 2 << 4 | 15, 167), // psllq "yowo"
    e([0x0F, 0x71, 0x00, 0x00], 0, MMX, 0 << 11 | 771, 2 << 4 | 6, 137), // psllw "xqib"
    e([0x0F, 0xF1, 0x00, 0x00], 0, MMX, 1 << 11 | 771, 2 << 4 | 15, 139), // psllw "xquq"
    e([0x0F, 0x71, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 771, 2 << 4 | 6, 157), // psllw "yoib"
    e([0x0F, 0xF1, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 771, 2 << 4 | 15, 167), // psllw "yowo"
    e([0x0F, 0x72, 0x00, 0x00], 0, MMX, 0 << 11 | 772, 2 << 4 | 4, 137), // psrad "xqib"
    e([0x0F, 0xE2, 0x00, 0x00], 0, MMX, 1 << 11 | 772, 2 << 4 | 15, 139), // psrad "xquq"
    e([0x0F, 0x72, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 772, 2 << 4 | 4, 157), // psrad "yoib"
    e([0x0F, 0xE2, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 772, 2 << 4 | 15, 167), // psrad "yowo"
    e([0x0F, 0x71, 0x00, 0x00], 0, MMX, 0 << 11 | 773, 2 << 4 | 4, 137), // psraw "xqib"
    e([0x0F, 0xE1, 0x00, 0x00], 0, MMX, 1 << 11 | 773, 2 << 4 | 15, 139), // psraw "xquq"
    e([0x0F, 0x71, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 773, 2 << 4 | 4, 157), // psraw "yoib"
    e([0x0F, 0xE1, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 773, 2 << 4 | 15, 167), // psraw "yowo"
    e([0x0F, 0x72, 0x00, 0x00], 0, MMX, 0 << 11 | 774, 2 << 4 | 2, 137), // psrld "xqib"
    e([0x0F, 0xD2, 0x00, 0x00], 0, MMX, 1 << 11 | 774, 2 << 4 | 15, 139), // psrld "xquq"
    e([0x0F, 0x72, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 774, 2 << 4 | 2, 157), // psrld "yoib"
    e([0x0F, 0xD2, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 774, 2 << 4 | 15, 167), // psrld "yowo"
    e([0x0F, 0x73, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 775, 2 << 4 | 3, 157), // psrldq "yoib"
    e([0x0F, 0x73, 0x00, 0x00], 0, MMX, 0 << 11 | 776, 2 << 4 | 2, 137), // psrlq "xqib"
    e([0x0F, 0xD3, 0x00, 0x00], 0, MMX, 1 << 11 | 776, 2 << 4 | 15, 139), // psrlq "xquq"
    e([0x0F, 0x73, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 776, 2 << 4 | 2, 157), // psrlq "yoib"
    e([0x0F, 0xD3, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 776, 2 << 4 | 15, 167), // psrlq "yowo"
    e([0x0F, 0x71, 0x00, 0x00], 0, MMX, 0 << 11 | 777, 2 << 4 | 2, 137), // psrlw "xqib"
    e([0x0F, 0xD1, 0x00, 0x00], 0, MMX, 1 << 11 | 777, 2 << 4 | 15, 139), // psrlw "xquq"
    e([0x0F, 0x71, 0x00, 0x00], PREF_66, SSE2, 2 << 11 | 777, 2 << 4 | 2, 157), // psrlw "yoib"
    e([0x0F, 0xD1, 0x00, 0x00], PREF_66, SSE2, 3 << 11 | 777, 2 << 4 | 15, 167), // psrlw "yowo"
    e([0x0F, 0xF8, 0x00, 0x00], 0, MMX, 0 << 11 | 778, 2 << 4 | 15, 139), // psubb "xquq"
    e([0x0F, 0xF8, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 778, 2 << 4 | 15, 167), // psubb "yowo"
    e([0x0F, 0xFA, 0x00, 0x00], 0, MMX, 0 << 11 | 779, 2 << 4 | 15, 139), // psubd "xquq"
    e([0x0F, 0xFA, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 779, 2 << 4 | 15, 167), // psubd "yowo"
    e([0x0F, 0xFB, 0x00, 0x00], 0, SSE2, 0 << 11 | 780, 2 << 4 | 15, 139), // psubq "xquq"
    e([0x0F, 0xFB, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 780, 2 << 4 | 15, 167), // psubq "yowo"
    e([0x0F, 0xE8, 0x00, 0x00], 0, MMX, 0 << 11 | 781, 2 << 4 | 15, 139), // psubsb "xquq"
    e([0x0F, 0xE8, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 781, 2 << 4 | 15, 167), // psubsb "yowo"
    e([0x0F, 0x55, 0x00, 0x00], 0, MMX | CYRIX, 0 << 11 | 782, 2 << 4 | 15, 139), // psubsiw "xquq"
    e([0x0F, 0xE9, 0x00, 0x00], 0, MMX, 0 << 11 | 783, 2 << 4 | 15, 139), // psubsw "xquq"
    e([0x0F, 0xE9, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 783, 2 << 4 | 15, 167), // psubsw "yowo"
    e([0x0F, 0xD8, 0x00, 0x00], 0, MMX, 0 << 11 | 784, 2 << 4 | 15, 139), // psubusb "xquq"
    e([0x0F, 0xD8, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 784, 2 << 4 | 15, 167), // psubusb "yowo"
    e([0x0F, 0xD9, 0x00, 0x00], 0, MMX, 0 << 11 | 785, 2 << 4 | 15, 139), // psubusw "xquq"
    e([0x0F, 0xD9, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 785, 2 << 4 | 15, 167), // psubusw "yowo"
    e([0x0F, 0xF9, 0x00, 0x00], 0, MMX, 0 << 11 | 786, 2 << 4 | 15, 139), // psubw "xquq"
    e([0x0F, 0xF9, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 786, 2 << 4 | 15, 167), // psubw "yowo"
    e([0x0F, 0x0F, 0xBB, 0x00], IMM_OP, TDNOW, 0 << 11 | 787, 3 << 4 | 15, 139), // pswapd "xquq"
    e([0x0F, 0x38, 0x17, 0x00], PREF_66, SSE41, 0 << 11 | 788, 3 << 4 | 15, 162), // ptest "yomq"
    e([0x0F, 0x38, 0x17, 0x00], PREF_66, SSE41, 1 << 11 | 788, 3 << 4 | 15, 170), // ptest "yoyo"
    e([0x0F, 0x68, 0x00, 0x00], 0, MMX, 0 << 11 | 789, 2 << 4 | 15, 139), // punpckhbw "xquq"
    e([0x0F, 0x68, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 789, 2 << 4 | 15, 167), // punpckhbw "yowo"
    e([0x0F, 0x6A, 0x00, 0x00], 0, MMX, 0 << 11 | 790, 2 << 4 | 15, 139), // punpckhdq "xquq"
    e([0x0F, 0x6A, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 790, 2 << 4 | 15, 167), // punpckhdq "yowo"
    e([0x0F, 0x6D, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 791, 2 << 4 | 15, 167), // punpckhqdq "yowo"
    e([0x0F, 0x69, 0x00, 0x00], 0, MMX, 0 << 11 | 792, 2 << 4 | 15, 139), // punpckhwd "xquq"
    e([0x0F, 0x69, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 792, 2 << 4 | 15, 167), // punpckhwd "yowo"
    e([0x0F, 0x60, 0x00, 0x00], 0, MMX, 0 << 11 | 793, 2 << 4 | 15, 139), // punpcklbw "xquq"
    e([0x0F, 0x60, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 793, 2 << 4 | 15, 167), // punpcklbw "yowo"
    e([0x0F, 0x62, 0x00, 0x00], 0, MMX, 0 << 11 | 794, 2 << 4 | 15, 139), // punpckldq "xquq"
    e([0x0F, 0x62, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 794, 2 << 4 | 15, 167), // punpckldq "yowo"
    e([0x0F, 0x6C, 0x00, 0x00], PREF_66, SSE2, 0 << 11 | 795, 2 << 4 | 15, 167), // punpcklqdq "yowo"
    e([0x0F, 0x61, 0x00, 0x00], 0, MMX, 0 << 11 | 796, 2 << 4 | 15, 139), // punpcklwd "xquq"
    e([0x0F, 0x61, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 796, 2 << 4 | 15, 167), // punpcklwd "yowo"
    e([0x0F, 0xEF, 0x00, 0x00], 0, MMX, 0 << 11 | 797, 2 << 4 | 15, 139), // pxor "xquq"
    e([0x0F, 0xEF, 0x00, 0x00], PREF_66, SSE2, 1 << 11 | 797, 2 << 4 | 15, 167), // pxor "yowo"
    e([0x01, 0x58, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 798, 2 << 4 | 15, 201), // vaddpd "y0y0w0"
    e([0x01, 0x58, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 799, 2 << 4 | 15, 201), // vaddps "y0y0w0"
    e([0x01, 0x58, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 800, 2 << 4 | 15, 220), // vaddsd "yoyomq"
    e([0x01, 0x58, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 800, 2 << 4 | 15, 223), // vaddsd "yoyoyo"
    e([0x01, 0x58, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 801, 2 << 4 | 15, 219), // vaddss "yoyomd"
    e([0x01, 0x58, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 801, 2 << 4 | 15, 223), // vaddss "yoyoyo"
    e([0x01, 0xD0, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 802, 2 << 4 | 15, 201), // vaddsubpd "y0y0w0"
    e([0x01, 0xD0, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F2, AVX, 0 << 11 | 803, 2 << 4 | 15, 201), // vaddsubps "y0y0w0"
    e([0x02, 0xDE, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 804, 2 << 4 | 15, 222), // vaesdec "yoyowo"
    e([0x02, 0xDF, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 805, 2 << 4 | 15, 222), // vaesdeclast "yoyowo"
    e([0x02, 0xDC, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 806, 2 << 4 | 15, 222), // vaesenc "yoyowo"
    e([0x02, 0xDD, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 807, 2 << 4 | 15, 222), // vaesenclast "yoyowo"
    e([0x02, 0xDB, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 808, 2 << 4 | 15, 167), // vaesimc "yowo"
    e([0x03, 0xDF, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 809, 2 << 4 | 15, 216), // vaeskeygenassist "yowoib"
    e([0x01, 0x55, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 810, 2 << 4 | 15, 201), // vandnpd "y0y0w0"
    e([0x01, 0x55, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 811, 2 << 4 | 15, 201), // vandnps "y0y0w0"
    e([0x01, 0x54, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 812, 2 << 4 | 15, 201), // vandpd "y0y0w0"
    e([0x01, 0x54, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 813, 2 << 4 | 15, 201), // vandps "y0y0w0"
    e([0x03, 0x0D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 814, 2 << 4 | 15, 224), // vblendpd "y0y0w0ib"
    e([0x03, 0x0C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 815, 2 << 4 | 15, 224), // vblendps "y0y0w0ib"
    e([0x03, 0x4B, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 816, 2 << 4 | 15, 225), // vblendvpd "y0y0w0y0"
    e([0x03, 0x4A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 817, 2 << 4 | 15, 225), // vblendvps "y0y0w0y0"
    e([0x02, 0x1A, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 818, 2 << 4 | 15, 153), // vbroadcastf128 "yhmo"
    e([0x02, 0x5A, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX2, 0 << 11 | 819, 2 << 4 | 15, 153), // vbroadcasti128 "yhmo"
    e([0x02, 0x19, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 820, 2 << 4 | 15, 154), // vbroadcastsd "yhmq"
    e([0x02, 0x19, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX, 1 << 11 | 820, 2 << 4 | 15, 156), // vbroadcastsd "yhyo"
    e([0x02, 0x18, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 821, 2 << 4 | 15, 147), // vbroadcastss "y0md"
    e([0x02, 0x18, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 821, 2 << 4 | 15, 151), // vbroadcastss "y0yo"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | IMM_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 822, 3 << 4 | 15, 201), // vcmpeqpd "y0y0w0"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 823, 3 << 4 | 15, 201), // vcmpeqps "y0y0w0"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 824, 3 << 4 | 15, 220), // vcmpeqsd "yoyomq"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 824, 3 << 4 | 15, 223), // vcmpeqsd "yoyoyo"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 825, 3 << 4 | 15, 220), // vcmpeqss "yoyomq"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 825, 3 << 4 | 15, 223), // vcmpeqss "yoyoyo"
    e([0x01, 0xC2, 0x0B, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 826, 3 << 4 | 15, 204), // vcmpfalsepd "yhyhwh"
    e([0x01, 0xC2, 0x0B, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 826, 3 << 4 | 15, 222), // vcmpfalsepd "yoyowo"
    e([0x01, 0xC2, 0x0B, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 827, 3 << 4 | 15, 201), // vcmpfalseps "y0y0w0"
    e([0x01, 0xC2, 0x0B, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 828, 3 << 4 | 15, 220), // vcmpfalsesd "yoyomq"
    e([0x01, 0xC2, 0x0B, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 828, 3 << 4 | 15, 223), // vcmpfalsesd "yoyoyo"
    e([0x01, 0xC2, 0x0B, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 829, 3 << 4 | 15, 220), // vcmpfalsess "yoyomq"
    e([0x01, 0xC2, 0x0B, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 829, 3 << 4 | 15, 223), // vcmpfalsess "yoyoyo"
    e([0x01, 0xC2, 0x0D, 0x00], VEX_OP | IMM_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 830, 3 << 4 | 15, 201), // vcmpgepd "y0y0w0"
    e([0x01, 0xC2, 0x0D, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 831, 3 << 4 | 15, 201), // vcmpgeps "y0y0w0"
    e([0x01, 0xC2, 0x0D, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 832, 3 << 4 | 15, 220), // vcmpgesd "yoyomq"
    e([0x01, 0xC2, 0x0D, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 832, 3 << 4 | 15, 223), // vcmpgesd "yoyoyo"
    e([0x01, 0xC2, 0x0D, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 833, 3 << 4 | 15, 220), // vcmpgess "yoyomq"
    e([0x01, 0xC2, 0x0D, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 833, 3 << 4 | 15, 223), // vcmpgess "yoyoyo"
    e([0x01, 0xC2, 0x0E, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 834, 3 << 4 | 15, 204), // vcmpgtpd "yhyhwh"
    e([0x01, 0xC2, 0x0E, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 834, 3 << 4 | 15, 222), // vcmpgtpd "yoyowo"
    e([0x01, 0xC2, 0x0E, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 835, 3 << 4 | 15, 201), // vcmpgtps "y0y0w0"
    e([0x01, 0xC2, 0x0E, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 836, 3 << 4 | 15, 220), // vcmpgtsd "yoyomq"
    e([0x01, 0xC2, 0x0E, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 836, 3 << 4 | 15, 223), // vcmpgtsd "yoyoyo"
    e([0x01, 0xC2, 0x0E, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 837, 3 << 4 | 15, 220), // vcmpgtss "yoyomq"
    e([0x01, 0xC2, 0x0E, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 837, 3 << 4 | 15, 223), // vcmpgtss "yoyoyo"
    e([0x01, 0xC2, 0x02, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 838, 3 << 4 | 15, 204), // vcmplepd "yhyhwh"
    e([0x01, 0xC2, 0x02, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 838, 3 << 4 | 15, 222), // vcmplepd "yoyowo"
    e([0x01, 0xC2, 0x02, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 839, 3 << 4 | 15, 201), // vcmpleps "y0y0w0"
    e([0x01, 0xC2, 0x02, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 840, 3 << 4 | 15, 220), // vcmplesd "yoyomq"
    e([0x01, 0xC2, 0x02, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 840, 3 << 4 | 15, 223), // vcmplesd "yoyoyo"
    e([0x01, 0xC2, 0x02, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 841, 3 << 4 | 15, 220), // vcmpless "yoyomq"
    e([0x01, 0xC2, 0x02, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 841, 3 << 4 | 15, 223), // vcmpless "yoyoyo"
    e([0x01, 0xC2, 0x01, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 842, 3 << 4 | 15, 204), // vcmpltpd "yhyhwh"
    e([0x01, 0xC2, 0x01, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 842, 3 << 4 | 15, 222), // vcmpltpd "yoyowo"
    e([0x01, 0xC2, 0x01, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 843, 3 << 4 | 15, 201), // vcmpltps "y0y0w0"
    e([0x01, 0xC2, 0x01, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 844, 3 << 4 | 15, 220), // vcmpltsd "yoyomq"
    e([0x01, 0xC2, 0x01, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 844, 3 << 4 | 15, 223), // vcmpltsd "yoyoyo"
    e([0x01, 0xC2, 0x01, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 845, 3 << 4 | 15, 220), // vcmpltss "yoyomq"
    e([0x01, 0xC2, 0x01, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 845, 3 << 4 | 15, 223), // vcmpltss "yoyoyo"
    e([0x01, 0xC2, 0x04, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 846, 3 << 4 | 15, 204), // vcmpneqpd "yhyhwh"
    e([0x01, 0xC2, 0x04, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 846, 3 << 4 | 15, 222), // vcmpneqpd "yoyowo"
    e([0x01, 0xC2, 0x04, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 847, 3 << 4 | 15, 201), // vcmpneqps "y0y0w0"
    e([0x01, 0xC2, 0x04, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 848, 3 << 4 | 15, 220), // vcmpneqsd "yoyomq"
    e([0x01, 0xC2, 0x04, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 848, 3 << 4 | 15, 223), // vcmpneqsd "yoyoyo"
    e([0x01, 0xC2, 0x04, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 849, 3 << 4 | 15, 220), // vcmpneqss "yoyomq"
    e([0x01, 0xC2, 0x04, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 849, 3 << 4 | 15, 223), // vcmpneqss "yoyoyo"
    e([0x01, 0xC2, 0x09, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 850, 3 << 4 | 15, 204), // vcmpngepd "yhyhwh"
    e([0x01, 0xC2, 0x09, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 850, 3 << 4 | 15, 222), // vcmpngepd "yoyowo"
    e([0x01, 0xC2, 0x09, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 851, 3 << 4 | 15, 201), // vcmpngeps "y0y0w0"
    e([0x01, 0xC2, 0x09, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 852, 3 << 4 | 15, 220), // vcmpngesd "yoyomq"
    e([0x01, 0xC2, 0x09, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 852, 3 << 4 | 15, 223), // vcmpngesd "yoyoyo"
    e([0x01, 0xC2, 0x09, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 853, 3 << 4 | 15, 220), // vcmpngess "yoyomq"
    e([0x01, 0xC2, 0x09, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 853, 3 << 4 | 15, 223), // vcmpngess "yoyoyo"
    e([0x01, 0xC2, 0x0A, 0x00], VEX_OP | IMM_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 854, 3 << 4 | 15, 201), // vcmpngtpd "y0y0w0"
    e([0x01, 0xC2, 0x0A, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 855, 3 << 4 | 15, 201), // vcmpngtps "y0y0w0"
    e([0x01, 0xC2, 0x0A, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 856, 3 << 4 | 15, 220), // vcmpngtsd "yoyomq"
    e([0x01, 0xC2, 0x0A, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 856, 3 << 4 | 15, 223), // vcmpngtsd "yoyoyo"
    e([0x01, 0xC2, 0x0A, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 857, 3 << 4 | 15, 220), // vcmpngtss "yoyomq"
    e([0x01, 0xC2, 0x0A, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 857, 3 << 4 | 15, 223), // vcmpngtss "yoyoyo"
    e([0x01, 0xC2, 0x06, 0x00], VEX_OP | IMM_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 858, 3 << 4 | 15, 201), // vcmpnlepd "y0y0w0"
    e([0x01, 0xC2, 0x06, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 859, 3 << 4 | 15, 201), // vcmpnleps "y0y0w0"
    e([0x01, 0xC2, 0x06, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 860, 3 << 4 | 15, 220), // vcmpnlesd "yoyomq"
    e([0x01, 0xC2, 0x06, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 860, 3 << 4 | 15, 223), // vcmpnlesd "yoyoyo"
    e([0x01, 0xC2, 0x06, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 861, 3 << 4 | 15, 220), // vcmpnless "yoyomq"
    e([0x01, 0xC2, 0x06, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 861, 3 << 4 | 15, 223), // vcmpnless "yoyoyo"
    e([0x01, 0xC2, 0x05, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 862, 3 << 4 | 15, 204), // vcmpnltpd "yhyhwh"
    e([0x01, 0xC2, 0x05, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 862, 3 << 4 | 15, 222), // vcmpnltpd "yoyowo"
    e([0x01, 0xC2, 0x05, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 863, 3 << 4 | 15, 201), // vcmpnltps "y0y0w0"
    e([0x01, 0xC2, 0x05, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 864, 3 << 4 | 15, 220), // vcmpnltsd "yoyomq"
    e([0x01, 0xC2, 0x05, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 864, 3 << 4 | 15, 223), // vcmpnltsd "yoyoyo"
    e([0x01, 0xC2, 0x05, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 865, 3 << 4 | 15, 220), // vcmpnltss "yoyomq"
    e([0x01, 0xC2, 0x05, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 865, 3 << 4 | 15, 223), // vcmpnltss "yoyoyo"
    e([0x01, 0xC2, 0x07, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 866, 3 << 4 | 15, 204), // vcmpordpd "yhyhwh"
    e([0x01, 0xC2, 0x07, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 866, 3 << 4 | 15, 222), // vcmpordpd "yoyowo"
    e([0x01, 0xC2, 0x07, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 867, 3 << 4 | 15, 201), // vcmpordps "y0y0w0"
    e([0x01, 0xC2, 0x07, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 868, 3 << 4 | 15, 220), // vcmpordsd "yoyomq"
    e([0x01, 0xC2, 0x07, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 868, 3 << 4 | 15, 223), // vcmpordsd "yoyoyo"
    e([0x01, 0xC2, 0x07, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 869, 3 << 4 | 15, 220), // vcmpordss "yoyomq"
    e([0x01, 0xC2, 0x07, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 869, 3 << 4 | 15, 223), // vcmpordss "yoyoyo"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 870, 2 << 4 | 15, 224), // vcmppd "y0y0w0ib"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | AUTO_VEXL | ENC_MR, AVX, 0 << 11 | 871, 2 << 4 | 15, 224), // vcmpps "y0y0w0ib"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 872, 2 << 4 | 15, 232), // vcmpsd "yoyomqib"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 872, 2 << 4 | 15, 241), // vcmpsd "yoyoyoib"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 873, 2 << 4 | 15, 232), // vcmpss "yoyomqib"
    e([0x01, 0xC2, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 873, 2 << 4 | 15, 241), // vcmpss "yoyoyoib"
    e([0x01, 0xC2, 0x0F, 0x00], VEX_OP | IMM_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 874, 3 << 4 | 15, 201), // vcmptruepd "y0y0w0"
    e([0x01, 0xC2, 0x0F, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 875, 3 << 4 | 15, 201), // vcmptrueps "y0y0w0"
    e([0x01, 0xC2, 0x0F, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 876, 3 << 4 | 15, 220), // vcmptruesd "yoyomq"
    e([0x01, 0xC2, 0x0F, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 876, 3 << 4 | 15, 223), // vcmptruesd "yoyoyo"
    e([0x01, 0xC2, 0x0F, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 877, 3 << 4 | 15, 220), // vcmptruess "yoyomq"
    e([0x01, 0xC2, 0x0F, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 877, 3 << 4 | 15, 223), // vcmptruess "yoyoyo"
    e([0x01, 0xC2, 0x03, 0x00], VEX_OP | IMM_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 878, 3 << 4 | 15, 204), // vcmpunordpd "yhyhwh"
    e([0x01, 0xC2, 0x03, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 1 << 11 | 878, 3 << 4 | 15, 222), // vcmpunordpd "yoyowo"
    e([0x01, 0xC2, 0x03, 0x00], VEX_OP | IMM_OP | AUTO_VEXL, AVX, 0 << 11 | 879, 3 << 4 | 15, 201), // vcmpunordps "y0y0w0"
    e([0x01, 0xC2, 0x03, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 0 << 11 | 880, 3 << 4 | 15, 220), // vcmpunordsd "yoyomq"
    e([0x01, 0xC2, 0x03, 0x00], VEX_OP | IMM_OP | PREF_F2, AVX, 1 << 11 | 880, 3 << 4 | 15, 223), // vcmpunordsd "yoyoyo"
    e([0x01, 0xC2, 0x03, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 0 << 11 | 881, 3 << 4 | 15, 220), // vcmpunordss "yoyomq"
    e([0x01, 0xC2, 0x03, 0x00], VEX_OP | IMM_OP | PREF_F3, AVX, 1 << 11 | 881, 3 << 4 | 15, 223), // vcmpunordss "yoyoyo"
    e([0x01, 0x2F, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 882, 2 << 4 | 15, 162), // vcomisd "yomq"
    e([0x01, 0x2F, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 882, 2 << 4 | 15, 170), // vcomisd "yoyo"
    e([0x01, 0x2F, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 883, 2 << 4 | 15, 160), // vcomiss "yomd"
    e([0x01, 0x2F, 0x00, 0x00], VEX_OP, AVX, 1 << 11 | 883, 2 << 4 | 15, 170), // vcomiss "yoyo"
    e([0x01, 0xE6, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 884, 2 << 4 | 15, 162), // vcvtdq2pd "yomq"
    e([0x01, 0xE6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F3, AVX, 1 << 11 | 884, 2 << 4 | 15, 150), // vcvtdq2pd "y0wo"
    e([0x01, 0x5B, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 885, 2 << 4 | 15, 149), // vcvtdq2ps "y0w0"
    e([0x01, 0xE6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F2, AVX, 0 << 11 | 886, 2 << 4 | 15, 159), // vcvtpd2dq "yom0"
    e([0x01, 0xE6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F2, AVX, 1 << 11 | 886, 2 << 4 | 15, 169), // vcvtpd2dq "yoy0"
    e([0x01, 0x5A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 887, 2 << 4 | 15, 159), // vcvtpd2ps "yom0"
    e([0x01, 0x5A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 887, 2 << 4 | 15, 169), // vcvtpd2ps "yoy0"
    e([0x02, 0x13, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 888, 2 << 4 | 15, 162), // vcvtph2ps "yomq"
    e([0x02, 0x13, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 888, 2 << 4 | 15, 150), // vcvtph2ps "y0wo"
    e([0x01, 0x5B, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 889, 2 << 4 | 15, 149), // vcvtps2dq "y0w0"
    e([0x01, 0x5A, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 890, 2 << 4 | 15, 162), // vcvtps2pd "yomq"
    e([0x01, 0x5A, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 1 << 11 | 890, 2 << 4 | 15, 150), // vcvtps2pd "y0wo"
    e([0x03, 0x1D, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 0 << 11 | 891, 2 << 4 | 15, 175), // vcvtps2ph "mqyoib"
    e([0x03, 0x1D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 1 << 11 | 891, 2 << 4 | 15, 189), // vcvtps2ph "woy0ib"
    e([0x01, 0x2D, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2, AVX, 0 << 11 | 892, 2 << 4 | 15, 85), // vcvtsd2si "r0mq"
    e([0x01, 0x2D, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2, AVX, 1 << 11 | 892, 2 << 4 | 15, 93), // vcvtsd2si "r0yo"
    e([0x01, 0x5A, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 893, 2 << 4 | 15, 220), // vcvtsd2ss "yoyomq"
    e([0x01, 0x5A, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 893, 2 << 4 | 15, 223), // vcvtsd2ss "yoyoyo"
    e([0x01, 0x2A, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2, AVX, 0 << 11 | 894, 2 << 4 | 15, 221), // vcvtsi2sd "yoyov0"
    e([0x01, 0x2A, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F3, AVX, 0 << 11 | 895, 2 << 4 | 15, 221), // vcvtsi2ss "yoyov0"
    e([0x01, 0x5A, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 896, 2 << 4 | 15, 219), // vcvtss2sd "yoyomd"
    e([0x01, 0x5A, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 896, 2 << 4 | 15, 223), // vcvtss2sd "yoyoyo"
    e([0x01, 0x2D, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F3, AVX, 0 << 11 | 897, 2 << 4 | 15, 84), // vcvtss2si "r0md"
    e([0x01, 0x2D, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F3, AVX, 1 << 11 | 897, 2 << 4 | 15, 93), // vcvtss2si "r0yo"
    e([0x01, 0xE6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 898, 2 << 4 | 15, 159), // vcvttpd2dq "yom0"
    e([0x01, 0xE6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 898, 2 << 4 | 15, 169), // vcvttpd2dq "yoy0"
    e([0x01, 0x5B, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F3, AVX, 0 << 11 | 899, 2 << 4 | 15, 149), // vcvttps2dq "y0w0"
    e([0x01, 0x2C, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2, AVX, 0 << 11 | 900, 2 << 4 | 15, 85), // vcvttsd2si "r0mq"
    e([0x01, 0x2C, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F2, AVX, 1 << 11 | 900, 2 << 4 | 15, 93), // vcvttsd2si "r0yo"
    e([0x01, 0x2C, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F3, AVX, 0 << 11 | 901, 2 << 4 | 15, 84), // vcvttss2si "r0md"
    e([0x01, 0x2C, 0x00, 0x00], VEX_OP | AUTO_REXW | PREF_F3, AVX, 1 << 11 | 901, 2 << 4 | 15, 93), // vcvttss2si "r0yo"
    e([0x01, 0x5E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 902, 2 << 4 | 15, 201), // vdivpd "y0y0w0"
    e([0x01, 0x5E, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 903, 2 << 4 | 15, 201), // vdivps "y0y0w0"
    e([0x01, 0x5E, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 904, 2 << 4 | 15, 220), // vdivsd "yoyomq"
    e([0x01, 0x5E, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 904, 2 << 4 | 15, 223), // vdivsd "yoyoyo"
    e([0x01, 0x5E, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 905, 2 << 4 | 15, 219), // vdivss "yoyomd"
    e([0x01, 0x5E, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 905, 2 << 4 | 15, 223), // vdivss "yoyoyo"
    e([0x03, 0x41, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 906, 2 << 4 | 15, 239), // vdppd "yoyowoib"
    e([0x03, 0x40, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 907, 2 << 4 | 15, 224), // vdpps "y0y0w0ib"
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 908, 2 << 4 | 4, 8), // verr "m1"
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 908, 2 << 4 | 4, 22), // verr "rw"
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 0 << 11 | 909, 2 << 4 | 5, 8), // verw "m1"
    e([0x0F, 0x00, 0x00, 0x00], 0, 0, 1 << 11 | 909, 2 << 4 | 5, 22), // verw "rw"
    e([0x03, 0x19, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 910, 2 << 4 | 15, 190), // vextractf128 "woyhib"
    e([0x03, 0x39, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 911, 2 << 4 | 15, 190), // vextracti128 "woyhib"
    e([0x03, 0x17, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 0 << 11 | 912, 2 << 4 | 15, 187), // vextractps "vdyoib"
    e([0x02, 0xA8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 913, 2 << 4 | 15, 201), // vfmadd123pd "y0y0w0"
    e([0x02, 0xA8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 914, 2 << 4 | 15, 201), // vfmadd123ps "y0y0w0"
    e([0x02, 0xA9, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 915, 2 << 4 | 15, 220), // vfmadd123sd "yoyomq"
    e([0x02, 0xA9, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 915, 2 << 4 | 15, 223), // vfmadd123sd "yoyoyo"
    e([0x02, 0xA9, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 916, 2 << 4 | 15, 219), // vfmadd123ss "yoyomd"
    e([0x02, 0xA9, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 916, 2 << 4 | 15, 223), // vfmadd123ss "yoyoyo"
    e([0x02, 0x98, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 917, 2 << 4 | 15, 201), // vfmadd132pd "y0y0w0"
    e([0x02, 0x98, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 918, 2 << 4 | 15, 201), // vfmadd132ps "y0y0w0"
    e([0x02, 0x99, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 919, 2 << 4 | 15, 220), // vfmadd132sd "yoyomq"
    e([0x02, 0x99, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 919, 2 << 4 | 15, 223), // vfmadd132sd "yoyoyo"
    e([0x02, 0x99, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 920, 2 << 4 | 15, 219), // vfmadd132ss "yoyomd"
    e([0x02, 0x99, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 920, 2 << 4 | 15, 223), // vfmadd132ss "yoyoyo"
    e([0x02, 0xA8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 921, 2 << 4 | 15, 201), // vfmadd213pd "y0y0w0"
    e([0x02, 0xA8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 922, 2 << 4 | 15, 201), // vfmadd213ps "y0y0w0"
    e([0x02, 0xA9, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 923, 2 << 4 | 15, 220), // vfmadd213sd "yoyomq"
    e([0x02, 0xA9, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 923, 2 << 4 | 15, 223), // vfmadd213sd "yoyoyo"
    e([0x02, 0xA9, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 924, 2 << 4 | 15, 219), // vfmadd213ss "yoyomd"
    e([0x02, 0xA9, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 924, 2 << 4 | 15, 223), // vfmadd213ss "yoyoyo"
    e([0x02, 0xB8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 925, 2 << 4 | 15, 201), // vfmadd231pd "y0y0w0"
    e([0x02, 0xB8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 926, 2 << 4 | 15, 201), // vfmadd231ps "y0y0w0"
    e([0x02, 0xB9, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 927, 2 << 4 | 15, 220), // vfmadd231sd "yoyomq"
    e([0x02, 0xB9, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 927, 2 << 4 | 15, 223), // vfmadd231sd "yoyoyo"
    e([0x02, 0xB9, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 928, 2 << 4 | 15, 219), // vfmadd231ss "yoyomd"
    e([0x02, 0xB9, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 928, 2 << 4 | 15, 223), // vfmadd231ss "yoyoyo"
    e([0x02, 0x98, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 929, 2 << 4 | 15, 201), // vfmadd312pd "y0y0w0"
    e([0x02, 0x98, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 930, 2 << 4 | 15, 201), // vfmadd312ps "y0y0w0"
    e([0x02, 0x99, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 931, 2 << 4 | 15, 220), // vfmadd312sd "yoyomq"
    e([0x02, 0x99, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 931, 2 << 4 | 15, 223), // vfmadd312sd "yoyoyo"
    e([0x02, 0x99, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 932, 2 << 4 | 15, 219), // vfmadd312ss "yoyomd"
    e([0x02, 0x99, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 932, 2 << 4 | 15, 223), // vfmadd312ss "yoyoyo"
    e([0x02, 0xB8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 933, 2 << 4 | 15, 201), // vfmadd321pd "y0y0w0"
    e([0x02, 0xB8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 934, 2 << 4 | 15, 201), // vfmadd321ps "y0y0w0"
    e([0x02, 0xB9, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 935, 2 << 4 | 15, 220), // vfmadd321sd "yoyomq"
    e([0x02, 0xB9, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 935, 2 << 4 | 15, 223), // vfmadd321sd "yoyoyo"
    e([0x02, 0xB9, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 936, 2 << 4 | 15, 219), // vfmadd321ss "yoyomd"
    e([0x02, 0xB9, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 936, 2 << 4 | 15, 223), // vfmadd321ss "yoyoyo"
    e([0x03, 0x69, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 937, 2 << 4 | 15, 226), // vfmaddpd "y0y0y0w0"
    e([0x03, 0x69, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 937, 2 << 4 | 15, 225), // vfmaddpd "y0y0w0y0"
    e([0x03, 0x68, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 938, 2 << 4 | 15, 226), // vfmaddps "y0y0y0w0"
    e([0x03, 0x68, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 938, 2 << 4 | 15, 225), // vfmaddps "y0y0w0y0"
    e([0x03, 0x6B, 0x00, 0x00], VEX_OP | PREF_66, SSE5 | AMD, 0 << 11 | 939, 2 << 4 | 15, 233), // vfmaddsd "yoyomqyo"
    e([0x03, 0x6B, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 1 << 11 | 939, 2 << 4 | 15, 243), // vfmaddsd "yoyoyomq"
    e([0x03, 0x6B, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 2 << 11 | 939, 2 << 4 | 15, 245), // vfmaddsd "yoyoyoyo"
    e([0x03, 0x6A, 0x00, 0x00], VEX_OP | PREF_66, SSE5 | AMD, 0 << 11 | 940, 2 << 4 | 15, 231), // vfmaddss "yoyomdyo"
    e([0x03, 0x6A, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 1 << 11 | 940, 2 << 4 | 15, 242), // vfmaddss "yoyoyomd"
    e([0x03, 0x6A, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 2 << 11 | 940, 2 << 4 | 15, 245), // vfmaddss "yoyoyoyo"
    e([0x02, 0xA6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 941, 2 << 4 | 15, 201), // vfmaddsub123pd "y0y0w0"
    e([0x02, 0xA6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 942, 2 << 4 | 15, 201), // vfmaddsub123ps "y0y0w0"
    e([0x02, 0x96, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 943, 2 << 4 | 15, 201), // vfmaddsub132pd "y0y0w0"
    e([0x02, 0x96, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 944, 2 << 4 | 15, 201), // vfmaddsub132ps "y0y0w0"
    e([0x02, 0xA6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 945, 2 << 4 | 15, 201), // vfmaddsub213pd "y0y0w0"
    e([0x02, 0xA6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 946, 2 << 4 | 15, 201), // vfmaddsub213ps "y0y0w0"
    e([0x02, 0xB6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 947, 2 << 4 | 15, 201), // vfmaddsub231pd "y0y0w0"
    e([0x02, 0xB6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 948, 2 << 4 | 15, 201), // vfmaddsub231ps "y0y0w0"
    e([0x02, 0x96, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 949, 2 << 4 | 15, 201), // vfmaddsub312pd "y0y0w0"
    e([0x02, 0x96, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 950, 2 << 4 | 15, 201), // vfmaddsub312ps "y0y0w0"
    e([0x02, 0xB6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 951, 2 << 4 | 15, 201), // vfmaddsub321pd "y0y0w0"
    e([0x02, 0xB6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 952, 2 << 4 | 15, 201), // vfmaddsub321ps "y0y0w0"
    e([0x03, 0x5D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 953, 2 << 4 | 15, 226), // vfmaddsubpd "y0y0y0w0"
    e([0x03, 0x5D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 953, 2 << 4 | 15, 225), // vfmaddsubpd "y0y0w0y0"
    e([0x03, 0x5C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 954, 2 << 4 | 15, 226), // vfmaddsubps "y0y0y0w0"
    e([0x03, 0x5C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 954, 2 << 4 | 15, 225), // vfmaddsubps "y0y0w0y0"
    e([0x02, 0xAA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 955, 2 << 4 | 15, 201), // vfmsub123pd "y0y0w0"
    e([0x02, 0xAA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 956, 2 << 4 | 15, 201), // vfmsub123ps "y0y0w0"
    e([0x02, 0xAB, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 957, 2 << 4 | 15, 220), // vfmsub123sd "yoyomq"
    e([0x02, 0xAB, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 957, 2 << 4 | 15, 223), // vfmsub123sd "yoyoyo"
    e([0x02, 0xAB, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 958, 2 << 4 | 15, 219), // vfmsub123ss "yoyomd"
    e([0x02, 0xAB, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 958, 2 << 4 | 15, 223), // vfmsub123ss "yoyoyo"
    e([0x02, 0x9A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 959, 2 << 4 | 15, 201), // vfmsub132pd "y0y0w0"
    e([0x02, 0x9A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 960, 2 << 4 | 15, 201), // vfmsub132ps "y0y0w0"
    e([0x02, 0x9B, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 961, 2 << 4 | 15, 220), // vfmsub132sd "yoyomq"
    e([0x02, 0x9B, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 961, 2 << 4 | 15, 223), // vfmsub132sd "yoyoyo"
    e([0x02, 0x9B, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 962, 2 << 4 | 15, 219), // vfmsub132ss "yoyomd"
    e([0x02, 0x9B, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 962, 2 << 4 | 15, 223), // vfmsub132ss "yoyoyo"
    e([0x02, 0xAA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 963, 2 << 4 | 15, 201), // vfmsub213pd "y0y0w0"
    e([0x02, 0xAA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 964, 2 << 4 | 15, 201), // vfmsub213ps "y0y0w0"
    e([0x02, 0xAB, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 965, 2 << 4 | 15, 220), // vfmsub213sd "yoyomq"
    e([0x02, 0xAB, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 965, 2 << 4 | 15, 223), // vfmsub213sd "yoyoyo"
    e([0x02, 0xAB, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 966, 2 << 4 | 15, 219), // vfmsub213ss "yoyomd"
    e([0x02, 0xAB, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 966, 2 << 4 | 15, 223), // vfmsub213ss "yoyoyo"
    e([0x02, 0xBA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 967, 2 << 4 | 15, 201), // vfmsub231pd "y0y0w0"
    e([0x02, 0xBA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 968, 2 << 4 | 15, 201), // vfmsub231ps "y0y0w0"
    e([0x02, 0xBB, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 969, 2 << 4 | 15, 220), // vfmsub231sd "yoyomq"
    e([0x02, 0xBB, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 969, 2 << 4 | 15, 223), // vfmsub231sd "yoyoyo"
    e([0x02, 0xBB, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 970, 2 << 4 | 15, 219), // vfmsub231ss "yoyomd"
    e([0x02, 0xBB, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 970, 2 << 4 | 15, 223), // vfmsub231ss "yoyoyo"
    e([0x02, 0x9A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 971, 2 << 4 | 15, 201), // vfmsub312pd "y0y0w0"
    e([0x02, 0x9A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 972, 2 << 4 | 15, 201), // vfmsub312ps "y0y0w0"
    e([0x02, 0x9B, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 973, 2 << 4 | 15, 220), // vfmsub312sd "yoyomq"
    e([0x02, 0x9B, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 973, 2 << 4 | 15, 223), // vfmsub312sd "yoyoyo"
    e([0x02, 0x9B, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 974, 2 << 4 | 15, 219), // vfmsub312ss "yoyomd"
    e([0x02, 0x9B, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 974, 2 << 4 | 15, 223), // vfmsub312ss "yoyoyo"
    e([0x02, 0xBA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 975, 2 << 4 | 15, 201), // vfmsub321pd "y0y0w0"
    e([0x02, 0xBA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 976, 2 << 4 | 15, 201), // vfmsub321ps "y0y0w0"
    e([0x02, 0xBB, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 977, 2 << 4 | 15, 220), // vfmsub321sd "yoyomq"
    e([0x02, 0xBB, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 977, 2 << 4 | 15, 223), // vfmsub321sd "yoyoyo"
    e([0x02, 0xBB, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 978, 2 << 4 | 15, 219), // vfmsub321ss "yoyomd"
    e([0x02, 0xBB, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 978, 2 << 4 | 15, 223), // vfmsub321ss "yoyoyo"
    e([0x02, 0xA7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 979, 2 << 4 | 15, 201), // vfmsubadd123pd "y0y0w0"
    e([0x02, 0xA7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 980, 2 << 4 | 15, 201), // vfmsubadd123ps "y0y0w0"
    e([0x02, 0x97, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 981, 2 << 4 | 15, 201), // vfmsubadd132pd "y0y0w0"
    e([0x02, 0x97, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 982, 2 << 4 | 15, 201), // vfmsubadd132ps "y0y0w0"
    e([0x02, 0xA7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 983, 2 << 4 | 15, 201), // vfmsubadd213pd "y0y0w0"
    e([0x02, 0xA7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 984, 2 << 4 | 15, 201), // vfmsubadd213ps "y0y0w0"
    e([0x02, 0xB7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 985, 2 << 4 | 15, 201), // vfmsubadd231pd "y0y0w0"
    e([0x02, 0xB7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 986, 2 << 4 | 15, 201), // vfmsubadd231ps "y0y0w0"
    e([0x02, 0x97, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 987, 2 << 4 | 15, 201), // vfmsubadd312pd "y0y0w0"
    e([0x02, 0x97, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 988, 2 << 4 | 15, 201), // vfmsubadd312ps "y0y0w0"
    e([0x02, 0xB7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 989, 2 << 4 | 15, 201), // vfmsubadd321pd "y0y0w0"
    e([0x02, 0xB7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 990, 2 << 4 | 15, 201), // vfmsubadd321ps "y0y0w0"
    e([0x03, 0x5F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 991, 2 << 4 | 15, 226), // vfmsubaddpd "y0y0y0w0"
    e([0x03, 0x5F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 991, 2 << 4 | 15, 225), // vfmsubaddpd "y0y0w0y0"
    e([0x03, 0x5E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 992, 2 << 4 | 15, 226), // vfmsubaddps "y0y0y0w0"
    e([0x03, 0x5E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 992, 2 << 4 | 15, 225), // vfmsubaddps "y0y0w0y0"
    e([0x03, 0x6D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 993, 2 << 4 | 15, 226), // vfmsubpd "y0y0y0w0"
    e([0x03, 0x6D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 993, 2 << 4 | 15, 225), // vfmsubpd "y0y0w0y0"
    e([0x03, 0x6C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 994, 2 << 4 | 15, 226), // vfmsubps "y0y0y0w0"
    e([0x03, 0x6C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 994, 2 << 4 | 15, 225), // vfmsubps "y0y0w0y0"
    e([0x03, 0x6F, 0x00, 0x00], VEX_OP | PREF_66, SSE5 | AMD, 0 << 11 | 995, 2 << 4 | 15, 233), // vfmsubsd "yoyomqyo"
    e([0x03, 0x6F, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 1 << 11 | 995, 2 << 4 | 15, 243), // vfmsubsd "yoyoyomq"
    e([0x03, 0x6F, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 2 << 11 | 995, 2 << 4 | 15, 245), // vfmsubsd "yoyoyoyo"
    e([0x03, 0x6E, 0x00, 0x00], VEX_OP | PREF_66, SSE5 | AMD, 0 << 11 | 996, 2 << 4 | 15, 231), // vfmsubss "yoyomdyo"
    e([0x03, 0x6E, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 1 << 11 | 996, 2 << 4 | 15, 242), // vfmsubss "yoyoyomd"
    e([0x03, 0x6E, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 2 << 11 | 996, 2 << 4 | 15, 245), // vfmsubss "yoyoyoyo"
    e([0x02, 0xAC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 997, 2 << 4 | 15, 201), // vfnmadd123pd "y0y0w0"
    e([0x02, 0xAC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 998, 2 << 4 | 15, 201), // vfnmadd123ps "y0y0w0"
    e([0x02, 0xAD, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 999, 2 << 4 | 15, 220), // vfnmadd123sd "yoyomq"
    e([0x02, 0xAD, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 999, 2 << 4 | 15, 223), // vfnmadd123sd "yoyoyo"
    e([0x02, 0xAD, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1000, 2 << 4 | 15, 219), // vfnmadd123ss "yoyomd"
    e([0x02, 0xAD, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1000, 2 << 4 | 15, 223), // vfnmadd123ss "yoyoyo"
    e([0x02, 0x9C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1001, 2 << 4 | 15, 201), // vfnmadd132pd "y0y0w0"
    e([0x02, 0x9C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1002, 2 << 4 | 15, 201), // vfnmadd132ps "y0y0w0"
    e([0x02, 0x9D, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1003, 2 << 4 | 15, 220), // vfnmadd132sd "yoyomq"
    e([0x02, 0x9D, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1003, 2 << 4 | 15, 223), // vfnmadd132sd "yoyoyo"
    e([0x02, 0x9D, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1004, 2 << 4 | 15, 219), // vfnmadd132ss "yoyomd"
    e([0x02, 0x9D, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1004, 2 << 4 | 15, 223), // vfnmadd132ss "yoyoyo"
    e([0x02, 0xAC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1005, 2 << 4 | 15, 201), // vfnmadd213pd "y0y0w0"
    e([0x02, 0xAC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1006, 2 << 4 | 15, 201), // vfnmadd213ps "y0y0w0"
    e([0x02, 0xAD, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1007, 2 << 4 | 15, 220), // vfnmadd213sd "yoyomq"
    e([0x02, 0xAD, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1007, 2 << 4 | 15, 223), // vfnmadd213sd "yoyoyo"
    e([0x02, 0xAD, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1008, 2 << 4 | 15, 219), // vfnmadd213ss "yoyomd"
    e([0x02, 0xAD, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1008, 2 << 4 | 15, 223), // vfnmadd213ss "yoyoyo"
    e([0x02, 0xBC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1009, 2 << 4 | 15, 201), // vfnmadd231pd "y0y0w0"
    e([0x02, 0xBC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1010, 2 << 4 | 15, 201), // vfnmadd231ps "y0y0w0"
    e([0x02, 0xBD, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1011, 2 << 4 | 15, 220), // vfnmadd231sd "yoyomq"
    e([0x02, 0xBD, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1011, 2 << 4 | 15, 223), // vfnmadd231sd "yoyoyo"
    e([0x02, 0xBD, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1012, 2 << 4 | 15, 219), // vfnmadd231ss "yoyomd"
    e([0x02, 0xBD, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1012, 2 << 4 | 15, 223), // vfnmadd231ss "yoyoyo"
    e([0x02, 0x9C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1013, 2 << 4 | 15, 201), // vfnmadd312pd "y0y0w0"
    e([0x02, 0x9C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1014, 2 << 4 | 15, 201), // vfnmadd312ps "y0y0w0"
    e([0x02, 0x9D, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1015, 2 << 4 | 15, 220), // vfnmadd312sd "yoyomq"
    e([0x02, 0x9D, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1015, 2 << 4 | 15, 223), // vfnmadd312sd "yoyoyo"
    e([0x02, 0x9D, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1016, 2 << 4 | 15, 219), // vfnmadd312ss "yoyomd"
    e([0x02, 0x9D, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1016, 2 << 4 | 15, 223), // vfnmadd312ss "yoyoyo"
    e([0x02, 0xBC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1017, 2 << 4 | 15, 201), // vfnmadd321pd "y0y0w0"
    e([0x02, 0xBC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1018, 2 << 4 | 15, 201), // vfnmadd321ps "y0y0w0"
    e([0x02, 0xBD, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1019, 2 << 4 | 15, 220), // vfnmadd321sd "yoyomq"
    e([0x02, 0xBD, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1019, 2 << 4 | 15, 223), // vfnmadd321sd "yoyoyo"
    e([0x02, 0xBD, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1020, 2 << 4 | 15, 219), // vfnmadd321ss "yoyomd"
    e([0x02, 0xBD, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1020, 2 << 4 | 15, 223), // vfnmadd321ss "yoyoyo"
    e([0x03, 0x79, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 1021, 2 << 4 | 15, 226), // vfnmaddpd "y0y0y0w0"
    e([0x03, 0x79, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 1021, 2 << 4 | 15, 225), // vfnmaddpd "y0y0w0y0"
    e([0x03, 0x78, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 1022, 2 << 4 | 15, 226), // vfnmaddps "y0y0y0w0"
    e([0x03, 0x78, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 1022, 2 << 4 | 15, 225), // vfnmaddps "y0y0w0y0"
    e([0x03, 0x7B, 0x00, 0x00], VEX_OP | PREF_66, SSE5 | AMD, 0 << 11 | 1023, 2 << 4 | 15, 233), // vfnmaddsd "yoyomqyo"
    e([0x03, 0x7B, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 1 << 11 | 1023, 2 << 4 | 15, 243), // vfnmaddsd "yoyoyomq"
    e([0x03, 0x7B, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 2 << 11 | 1023, 2 << 4 | 15, 245), // vfnmaddsd "yoyoyoyo"
    e([0x03, 0x7A, 0x00, 0x00], VEX_OP | PREF_66, SSE5 | AMD, 0 << 11 | 1024, 2 << 4 | 15, 231), // vfnmaddss "yoyomdyo"
    e([0x03, 0x7A, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 1 << 11 | 1024, 2 << 4 | 15, 242), // vfnmaddss "yoyoyomd"
    e([0x03, 0x7A, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 2 << 11 | 1024, 2 << 4 | 15, 245), // vfnmaddss "yoyoyoyo"
    e([0x02, 0xAE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1025, 2 << 4 | 15, 201), // vfnmsub123pd "y0y0w0"
    e([0x02, 0xAE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1026, 2 << 4 | 15, 201), // vfnmsub123ps "y0y0w0"
    e([0x02, 0xAF, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1027, 2 << 4 | 15, 220), // vfnmsub123sd "yoyomq"
    e([0x02, 0xAF, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1027, 2 << 4 | 15, 223), // vfnmsub123sd "yoyoyo"
    e([0x02, 0xAF, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1028, 2 << 4 | 15, 219), // vfnmsub123ss "yoyomd"
    e([0x02, 0xAF, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1028, 2 << 4 | 15, 223), // vfnmsub123ss "yoyoyo"
    e([0x02, 0x9E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1029, 2 << 4 | 15, 201), // vfnmsub132pd "y0y0w0"
    e([0x02, 0x9E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1030, 2 << 4 | 15, 201), // vfnmsub132ps "y0y0w0"
    e([0x02, 0x9F, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1031, 2 << 4 | 15, 220), // vfnmsub132sd "yoyomq"
    e([0x02, 0x9F, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1031, 2 << 4 | 15, 223), // vfnmsub132sd "yoyoyo"
    e([0x02, 0x9F, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1032, 2 << 4 | 15, 219), // vfnmsub132ss "yoyomd"
    e([0x02, 0x9F, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1032, 2 << 4 | 15, 223), // vfnmsub132ss "yoyoyo"
    e([0x02, 0xAE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1033, 2 << 4 | 15, 201), // vfnmsub213pd "y0y0w0"
    e([0x02, 0xAE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1034, 2 << 4 | 15, 201), // vfnmsub213ps "y0y0w0"
    e([0x02, 0xAF, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1035, 2 << 4 | 15, 220), // vfnmsub213sd "yoyomq"
    e([0x02, 0xAF, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1035, 2 << 4 | 15, 223), // vfnmsub213sd "yoyoyo"
    e([0x02, 0xAF, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1036, 2 << 4 | 15, 219), // vfnmsub213ss "yoyomd"
    e([0x02, 0xAF, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1036, 2 << 4 | 15, 223), // vfnmsub213ss "yoyoyo"
    e([0x02, 0xBE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1037, 2 << 4 | 15, 201), // vfnmsub231pd "y0y0w0"
    e([0x02, 0xBE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1038, 2 << 4 | 15, 201), // vfnmsub231ps "y0y0w0"
    e([0x02, 0xBF, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1039, 2 << 4 | 15, 220), // vfnmsub231sd "yoyomq"
    e([0x02, 0xBF, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1039, 2 << 4 | 15, 223), // vfnmsub231sd "yoyoyo"
    e([0x02, 0xBF, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1040, 2 << 4 | 15, 219), // vfnmsub231ss "yoyomd"
    e([0x02, 0xBF, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1040, 2 << 4 | 15, 223), // vfnmsub231ss "yoyoyo"
    e([0x02, 0x9E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1041, 2 << 4 | 15, 201), // vfnmsub312pd "y0y0w0"
    e([0x02, 0x9E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1042, 2 << 4 | 15, 201), // vfnmsub312ps "y0y0w0"
    e([0x02, 0x9F, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1043, 2 << 4 | 15, 220), // vfnmsub312sd "yoyomq"
    e([0x02, 0x9F, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1043, 2 << 4 | 15, 223), // vfnmsub312sd "yoyoyo"
    e([0x02, 0x9F, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1044, 2 << 4 | 15, 219), // vfnmsub312ss "yoyomd"
    e([0x02, 0x9F, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1044, 2 << 4 | 15, 223), // vfnmsub312ss "yoyoyo"
    e([0x02, 0xBE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1045, 2 << 4 | 15, 201), // vfnmsub321pd "y0y0w0"
    e([0x02, 0xBE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, FMA, 0 << 11 | 1046, 2 << 4 | 15, 201), // vfnmsub321ps "y0y0w0"
    e([0x02, 0xBF, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 0 << 11 | 1047, 2 << 4 | 15, 220), // vfnmsub321sd "yoyomq"
    e([0x02, 0xBF, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, FMA, 1 << 11 | 1047, 2 << 4 | 15, 223), // vfnmsub321sd "yoyoyo"
    e([0x02, 0xBF, 0x00, 0x00], VEX_OP | PREF_66, FMA, 0 << 11 | 1048, 2 << 4 | 15, 219), // vfnmsub321ss "yoyomd"
    e([0x02, 0xBF, 0x00, 0x00], VEX_OP | PREF_66, FMA, 1 << 11 | 1048, 2 << 4 | 15, 223), // vfnmsub321ss "yoyoyo"
    e([0x03, 0x7D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 1049, 2 << 4 | 15, 226), // vfnmsubpd "y0y0y0w0"
    e([0x03, 0x7D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 1049, 2 << 4 | 15, 225), // vfnmsubpd "y0y0w0y0"
    e([0x03, 0x7C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 0 << 11 | 1050, 2 << 4 | 15, 226), // vfnmsubps "y0y0y0w0"
    e([0x03, 0x7C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, SSE5 | AMD, 1 << 11 | 1050, 2 << 4 | 15, 225), // vfnmsubps "y0y0w0y0"
    e([0x03, 0x7F, 0x00, 0x00], VEX_OP | PREF_66, SSE5 | AMD, 0 << 11 | 1051, 2 << 4 | 15, 233), // vfnmsubsd "yoyomqyo"
    e([0x03, 0x7F, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 1 << 11 | 1051, 2 << 4 | 15, 243), // vfnmsubsd "yoyoyomq"
    e([0x03, 0x7F, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 2 << 11 | 1051, 2 << 4 | 15, 245), // vfnmsubsd "yoyoyoyo"
    e([0x03, 0x7E, 0x00, 0x00], VEX_OP | PREF_66, SSE5 | AMD, 0 << 11 | 1052, 2 << 4 | 15, 231), // vfnmsubss "yoyomdyo"
    e([0x03, 0x7E, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 1 << 11 | 1052, 2 << 4 | 15, 242), // vfnmsubss "yoyoyomd"
    e([0x03, 0x7E, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, SSE5 | AMD, 2 << 11 | 1052, 2 << 4 | 15, 245), // vfnmsubss "yoyoyoyo"
    e([0x09, 0x81, 0x00, 0x00], XOP_OP | AUTO_VEXL, SSE5 | AMD, 0 << 11 | 1053, 2 << 4 | 15, 149), // vfrczpd "y0w0"
    e([0x09, 0x80, 0x00, 0x00], XOP_OP | AUTO_VEXL, SSE5 | AMD, 0 << 11 | 1054, 2 << 4 | 15, 149), // vfrczps "y0w0"
    e([0x09, 0x83, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1055, 2 << 4 | 15, 162), // vfrczsd "yomq"
    e([0x09, 0x83, 0x00, 0x00], XOP_OP, SSE5 | AMD, 1 << 11 | 1055, 2 << 4 | 15, 170), // vfrczsd "yoyo"
    e([0x09, 0x82, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1056, 2 << 4 | 15, 160), // vfrczss "yomd"
    e([0x09, 0x82, 0x00, 0x00], XOP_OP, SSE5 | AMD, 1 << 11 | 1056, 2 << 4 | 15, 170), // vfrczss "yoyo"
    e([0x02, 0x92, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1057, 2 << 4 | 15, 197), // vgatherdpd "y0loy0"
    e([0x02, 0x92, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1058, 2 << 4 | 15, 195), // vgatherdps "y0k0y0"
    e([0x02, 0x93, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1059, 2 << 4 | 15, 196), // vgatherqpd "y0l0y0"
    e([0x02, 0x93, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1060, 2 << 4 | 15, 206), // vgatherqps "yok0yo"
    e([0x01, 0x7C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1061, 2 << 4 | 15, 201), // vhaddpd "y0y0w0"
    e([0x01, 0x7C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F2, AVX, 0 << 11 | 1062, 2 << 4 | 15, 201), // vhaddps "y0y0w0"
    e([0x01, 0x7D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1063, 2 << 4 | 15, 201), // vhsubpd "y0y0w0"
    e([0x01, 0x7D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F2, AVX, 0 << 11 | 1064, 2 << 4 | 15, 201), // vhsubps "y0y0w0"
    e([0x03, 0x18, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 1065, 2 << 4 | 15, 228), // vinsertf128 "yhyhwoib"
    e([0x03, 0x38, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX2, 0 << 11 | 1066, 2 << 4 | 15, 228), // vinserti128 "yhyhwoib"
    e([0x03, 0x21, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1067, 2 << 4 | 15, 230), // vinsertps "yoyomdib"
    e([0x03, 0x21, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1067, 2 << 4 | 15, 241), // vinsertps "yoyoyoib"
    e([0x01, 0xF0, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F2, AVX, 0 << 11 | 1068, 2 << 4 | 15, 145), // vlddqu "y0m0"
    e([0x01, 0xAE, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 1069, 2 << 4 | 2, 11), // vldmxcsr "md"
    e([0x01, 0xF0, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_F2, AVX, 0 << 11 | 1070, 2 << 4 | 15, 152), // vldqqu "yhmh"
    e([0x01, 0xF7, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1071, 2 << 4 | 15, 170), // vmaskmovdqu "yoyo"
    e([0x02, 0x2F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1072, 2 << 4 | 15, 173), // vmaskmovpd "m0y0y0"
    e([0x02, 0x2D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1072, 2 << 4 | 15, 200), // vmaskmovpd "y0y0m0"
    e([0x02, 0x2E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1073, 2 << 4 | 15, 173), // vmaskmovps "m0y0y0"
    e([0x02, 0x2C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1073, 2 << 4 | 15, 200), // vmaskmovps "y0y0m0"
    e([0x01, 0x5F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1074, 2 << 4 | 15, 201), // vmaxpd "y0y0w0"
    e([0x01, 0x5F, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1075, 2 << 4 | 15, 201), // vmaxps "y0y0w0"
    e([0x01, 0x5F, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 1076, 2 << 4 | 15, 220), // vmaxsd "yoyomq"
    e([0x01, 0x5F, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 1076, 2 << 4 | 15, 223), // vmaxsd "yoyoyo"
    e([0x01, 0x5F, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 1077, 2 << 4 | 15, 219), // vmaxss "yoyomd"
    e([0x01, 0x5F, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1077, 2 << 4 | 15, 223), // vmaxss "yoyoyo"
    e([0x0F, 0x01, 0xC1, 0x00], 0, VMX, 0 << 11 | 1078, 3 << 4 | 15, 0), // vmcall ""
    e([0x0F, 0xC7, 0x00, 0x00], PREF_66, VMX, 0 << 11 | 1079, 2 << 4 | 6, 8), // vmclear "m1"
    e([0x0F, 0x01, 0xD4, 0x00], 0, VMX, 0 << 11 | 1080, 3 << 4 | 15, 0), // vmfunc ""
    e([0x01, 0x5D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1081, 2 << 4 | 15, 201), // vminpd "y0y0w0"
    e([0x01, 0x5D, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1082, 2 << 4 | 15, 201), // vminps "y0y0w0"
    e([0x01, 0x5D, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 1083, 2 << 4 | 15, 220), // vminsd "yoyomq"
    e([0x01, 0x5D, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 1083, 2 << 4 | 15, 223), // vminsd "yoyoyo"
    e([0x01, 0x5D, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 1084, 2 << 4 | 15, 219), // vminss "yoyomd"
    e([0x01, 0x5D, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1084, 2 << 4 | 15, 223), // vminss "yoyoyo"
    e([0x0F, 0x01, 0xC2, 0x00], 0, VMX, 0 << 11 | 1085, 3 << 4 | 15, 0), // vmlaunch ""
    e([0x0F, 0x01, 0xDA, 0x00], 0, VMX | AMD, 0 << 11 | 1086, 3 << 4 | 15, 0), // vmload ""
    e([0x0F, 0x01, 0xD9, 0x00], 0, VMX | AMD, 0 << 11 | 1087, 3 << 4 | 15, 0), // vmmcall ""
    e([0x01, 0x28, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1088, 2 << 4 | 15, 149), // vmovapd "y0w0"
    e([0x01, 0x29, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66 | ENC_MR, AVX, 1 << 11 | 1088, 2 << 4 | 15, 135), // vmovapd "whyh"
    e([0x01, 0x29, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 2 << 11 | 1088, 2 << 4 | 15, 136), // vmovapd "woyo"
    e([0x01, 0x28, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1089, 2 << 4 | 15, 149), // vmovaps "y0w0"
    e([0x01, 0x29, 0x00, 0x00], VEX_OP | WITH_VEXL | ENC_MR, AVX, 1 << 11 | 1089, 2 << 4 | 15, 135), // vmovaps "whyh"
    e([0x01, 0x29, 0x00, 0x00], VEX_OP | ENC_MR, AVX, 2 << 11 | 1089, 2 << 4 | 15, 136), // vmovaps "woyo"
    e([0x01, 0x6E, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1090, 2 << 4 | 15, 165), // vmovd "yovd"
    e([0x01, 0x7E, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 1 << 11 | 1090, 2 << 4 | 15, 131), // vmovd "vdyo"
    e([0x01, 0x12, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F2, AVX, 0 << 11 | 1091, 2 << 4 | 15, 149), // vmovddup "y0w0"
    e([0x01, 0x12, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 1091, 2 << 4 | 15, 162), // vmovddup "yomq"
    e([0x01, 0x6F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1092, 2 << 4 | 15, 149), // vmovdqa "y0w0"
    e([0x01, 0x7F, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66 | ENC_MR, AVX, 1 << 11 | 1092, 2 << 4 | 15, 135), // vmovdqa "whyh"
    e([0x01, 0x7F, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 2 << 11 | 1092, 2 << 4 | 15, 136), // vmovdqa "woyo"
    e([0x01, 0x6F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F3, AVX, 0 << 11 | 1093, 2 << 4 | 15, 149), // vmovdqu "y0w0"
    e([0x01, 0x7F, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_F3 | ENC_MR, AVX, 1 << 11 | 1093, 2 << 4 | 15, 135), // vmovdqu "whyh"
    e([0x01, 0x7F, 0x00, 0x00], VEX_OP | PREF_F3 | ENC_MR, AVX, 2 << 11 | 1093, 2 << 4 | 15, 136), // vmovdqu "woyo"
    e([0x01, 0x12, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 1094, 2 << 4 | 15, 223), // vmovhlps "yoyoyo"
    e([0x01, 0x17, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 0 << 11 | 1095, 2 << 4 | 15, 77), // vmovhpd "mqyo"
    e([0x01, 0x16, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1095, 2 << 4 | 15, 220), // vmovhpd "yoyomq"
    e([0x01, 0x17, 0x00, 0x00], VEX_OP | ENC_MR, AVX, 0 << 11 | 1096, 2 << 4 | 15, 77), // vmovhps "mqyo"
    e([0x01, 0x16, 0x00, 0x00], VEX_OP, AVX, 1 << 11 | 1096, 2 << 4 | 15, 220), // vmovhps "yoyomq"
    e([0x01, 0x16, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 1097, 2 << 4 | 15, 223), // vmovlhps "yoyoyo"
    e([0x01, 0x13, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 0 << 11 | 1098, 2 << 4 | 15, 77), // vmovlpd "mqyo"
    e([0x01, 0x12, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1098, 2 << 4 | 15, 220), // vmovlpd "yoyomq"
    e([0x01, 0x13, 0x00, 0x00], VEX_OP | ENC_MR, AVX, 0 << 11 | 1099, 2 << 4 | 15, 77), // vmovlps "mqyo"
    e([0x01, 0x12, 0x00, 0x00], VEX_OP, AVX, 1 << 11 | 1099, 2 << 4 | 15, 220), // vmovlps "yoyomq"
    e([0x01, 0x50, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1100, 2 << 4 | 15, 92), // vmovmskpd "r0y0"
    e([0x01, 0x50, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 1101, 2 << 4 | 15, 92), // vmovmskps "r0y0"
    e([0x01, 0xE7, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 1102, 2 << 4 | 15, 67), // vmovntdq "m0y0"
    e([0x02, 0x2A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1103, 2 << 4 | 15, 145), // vmovntdqa "y0m0"
    e([0x01, 0x2B, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 1104, 2 << 4 | 15, 67), // vmovntpd "m0y0"
    e([0x01, 0x2B, 0x00, 0x00], VEX_OP | AUTO_VEXL | ENC_MR, AVX, 0 << 11 | 1105, 2 << 4 | 15, 67), // vmovntps "m0y0"
    e([0x01, 0xE7, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 1106, 2 << 4 | 15, 72), // vmovntqq "mhyh"
    e([0x01, 0xD6, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 0 << 11 | 1107, 2 << 4 | 15, 77), // vmovq "mqyo"
    e([0x01, 0x7E, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1107, 2 << 4 | 15, 162), // vmovq "yomq"
    e([0x01, 0x6E, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, AVX, 2 << 11 | 1107, 2 << 4 | 15, 166), // vmovq "yovq"
    e([0x01, 0x7E, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 3 << 11 | 1107, 2 << 4 | 15, 170), // vmovq "yoyo"
    e([0x01, 0xD6, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 4 << 11 | 1107, 2 << 4 | 15, 170), // vmovq "yoyo"
    e([0x01, 0x7E, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66 | ENC_MR, AVX, 5 << 11 | 1107, 2 << 4 | 15, 134), // vmovq "vqyo"
    e([0x01, 0x6F, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 1108, 2 << 4 | 15, 155), // vmovqqa "yhwh"
    e([0x01, 0x7F, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66 | ENC_MR, AVX, 1 << 11 | 1108, 2 << 4 | 15, 135), // vmovqqa "whyh"
    e([0x01, 0x6F, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_F3, AVX, 0 << 11 | 1109, 2 << 4 | 15, 155), // vmovqqu "yhwh"
    e([0x01, 0x7F, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_F3 | ENC_MR, AVX, 1 << 11 | 1109, 2 << 4 | 15, 135), // vmovqqu "whyh"
    e([0x01, 0x11, 0x00, 0x00], VEX_OP | PREF_F2 | ENC_MR, AVX, 0 << 11 | 1110, 2 << 4 | 15, 77), // vmovsd "mqyo"
    e([0x01, 0x10, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 1110, 2 << 4 | 15, 162), // vmovsd "yomq"
    e([0x01, 0x10, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 2 << 11 | 1110, 2 << 4 | 15, 223), // vmovsd "yoyoyo"
    e([0x01, 0x11, 0x00, 0x00], VEX_OP | PREF_F2 | ENC_VM, AVX, 3 << 11 | 1110, 2 << 4 | 15, 223), // vmovsd "yoyoyo"
    e([0x01, 0x16, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F3, AVX, 0 << 11 | 1111, 2 << 4 | 15, 149), // vmovshdup "y0w0"
    e([0x01, 0x12, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F3, AVX, 0 << 11 | 1112, 2 << 4 | 15, 149), // vmovsldup "y0w0"
    e([0x01, 0x11, 0x00, 0x00], VEX_OP | PREF_F3 | ENC_MR, AVX, 0 << 11 | 1113, 2 << 4 | 15, 71), // vmovss "mdyo"
    e([0x01, 0x10, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1113, 2 << 4 | 15, 160), // vmovss "yomd"
    e([0x01, 0x10, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 2 << 11 | 1113, 2 << 4 | 15, 223), // vmovss "yoyoyo"
    e([0x01, 0x11, 0x00, 0x00], VEX_OP | PREF_F3 | ENC_VM, AVX, 3 << 11 | 1113, 2 << 4 | 15, 223), // vmovss "yoyoyo"
    e([0x01, 0x10, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1114, 2 << 4 | 15, 149), // vmovupd "y0w0"
    e([0x01, 0x11, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66 | ENC_MR, AVX, 1 << 11 | 1114, 2 << 4 | 15, 135), // vmovupd "whyh"
    e([0x01, 0x11, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 2 << 11 | 1114, 2 << 4 | 15, 136), // vmovupd "woyo"
    e([0x01, 0x10, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1115, 2 << 4 | 15, 149), // vmovups "y0w0"
    e([0x01, 0x11, 0x00, 0x00], VEX_OP | WITH_VEXL | ENC_MR, AVX, 1 << 11 | 1115, 2 << 4 | 15, 135), // vmovups "whyh"
    e([0x01, 0x11, 0x00, 0x00], VEX_OP | ENC_MR, AVX, 2 << 11 | 1115, 2 << 4 | 15, 136), // vmovups "woyo"
    e([0x03, 0x42, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 1116, 2 << 4 | 15, 224), // vmpsadbw "y0y0w0ib"
    e([0x0F, 0xC7, 0x00, 0x00], 0, VMX, 0 << 11 | 1117, 2 << 4 | 6, 8), // vmptrld "m1"
    e([0x0F, 0xC7, 0x00, 0x00], 0, VMX, 0 << 11 | 1118, 2 << 4 | 7, 8), // vmptrst "m1"
    e([0x0F, 0x78, 0x00, 0x00], ENC_MR, VMX, 0 << 11 | 1119, 2 << 4 | 15, 132), // vmread "vqrq"
    e([0x0F, 0x01, 0xC3, 0x00], 0, VMX, 0 << 11 | 1120, 3 << 4 | 15, 0), // vmresume ""
    e([0x0F, 0x01, 0xD8, 0x00], 0, VMX | AMD, 0 << 11 | 1121, 3 << 4 | 15, 0), // vmrun ""
    e([0x0F, 0x01, 0xDB, 0x00], 0, VMX | AMD, 0 << 11 | 1122, 3 << 4 | 15, 0), // vmsave ""
    e([0x01, 0x59, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1123, 2 << 4 | 15, 201), // vmulpd "y0y0w0"
    e([0x01, 0x59, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1124, 2 << 4 | 15, 201), // vmulps "y0y0w0"
    e([0x01, 0x59, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 1125, 2 << 4 | 15, 220), // vmulsd "yoyomq"
    e([0x01, 0x59, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 1125, 2 << 4 | 15, 223), // vmulsd "yoyoyo"
    e([0x01, 0x59, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 1126, 2 << 4 | 15, 219), // vmulss "yoyomd"
    e([0x01, 0x59, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1126, 2 << 4 | 15, 223), // vmulss "yoyoyo"
    e([0x0F, 0x79, 0x00, 0x00], 0, VMX, 0 << 11 | 1127, 2 << 4 | 15, 115), // vmwrite "rqvq"
    e([0x0F, 0x01, 0xC4, 0x00], 0, VMX, 0 << 11 | 1128, 3 << 4 | 15, 0), // vmxoff ""
    e([0x0F, 0xC7, 0x00, 0x00], PREF_F3, VMX, 0 << 11 | 1129, 2 << 4 | 6, 8), // vmxon "m1"
    e([0x01, 0x56, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1130, 2 << 4 | 15, 201), // vorpd "y0y0w0"
    e([0x01, 0x56, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1131, 2 << 4 | 15, 201), // vorps "y0y0w0"
    e([0x02, 0x1C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1132, 2 << 4 | 15, 149), // vpabsb "y0w0"
    e([0x02, 0x1E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1133, 2 << 4 | 15, 149), // vpabsd "y0w0"
    e([0x02, 0x1D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1134, 2 << 4 | 15, 149), // vpabsw "y0w0"
    e([0x01, 0x6B, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1135, 2 << 4 | 15, 201), // vpackssdw "y0y0w0"
    e([0x01, 0x63, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1136, 2 << 4 | 15, 201), // vpacksswb "y0y0w0"
    e([0x02, 0x2B, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1137, 2 << 4 | 15, 201), // vpackusdw "y0y0w0"
    e([0x01, 0x67, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1138, 2 << 4 | 15, 201), // vpackuswb "y0y0w0"
    e([0x01, 0xFC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1139, 2 << 4 | 15, 201), // vpaddb "y0y0w0"
    e([0x01, 0xFE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1140, 2 << 4 | 15, 201), // vpaddd "y0y0w0"
    e([0x01, 0xD4, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1141, 2 << 4 | 15, 201), // vpaddq "y0y0w0"
    e([0x01, 0xEC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1142, 2 << 4 | 15, 201), // vpaddsb "y0y0w0"
    e([0x01, 0xED, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1143, 2 << 4 | 15, 201), // vpaddsw "y0y0w0"
    e([0x01, 0xDC, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1144, 2 << 4 | 15, 201), // vpaddusb "y0y0w0"
    e([0x01, 0xDD, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1145, 2 << 4 | 15, 201), // vpaddusw "y0y0w0"
    e([0x01, 0xFD, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1146, 2 << 4 | 15, 201), // vpaddw "y0y0w0"
    e([0x03, 0x0F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 1147, 2 << 4 | 15, 224), // vpalignr "y0y0w0ib"
    e([0x01, 0xDB, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1148, 2 << 4 | 15, 201), // vpand "y0y0w0"
    e([0x01, 0xDF, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1149, 2 << 4 | 15, 201), // vpandn "y0y0w0"
    e([0x01, 0xE0, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1150, 2 << 4 | 15, 201), // vpavgb "y0y0w0"
    e([0x01, 0xE3, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1151, 2 << 4 | 15, 201), // vpavgw "y0y0w0"
    e([0x03, 0x02, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1152, 2 << 4 | 15, 224), // vpblendd "y0y0w0ib"
    e([0x03, 0x4C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1153, 2 << 4 | 15, 225), // vpblendvb "y0y0w0y0"
    e([0x03, 0x0E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 1154, 2 << 4 | 15, 224), // vpblendw "y0y0w0ib"
    e([0x02, 0x78, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 0 << 11 | 1155, 2 << 4 | 15, 146), // vpbroadcastb "y0mb"
    e([0x02, 0x78, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 1 << 11 | 1155, 2 << 4 | 15, 151), // vpbroadcastb "y0yo"
    e([0x02, 0x58, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 0 << 11 | 1156, 2 << 4 | 15, 147), // vpbroadcastd "y0md"
    e([0x02, 0x58, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 1 << 11 | 1156, 2 << 4 | 15, 151), // vpbroadcastd "y0yo"
    e([0x02, 0x59, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX2, 0 << 11 | 1157, 2 << 4 | 15, 154), // vpbroadcastq "yhmq"
    e([0x02, 0x59, 0x00, 0x00], VEX_OP | PREF_66, AVX2, 1 << 11 | 1157, 2 << 4 | 15, 162), // vpbroadcastq "yomq"
    e([0x02, 0x59, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 2 << 11 | 1157, 2 << 4 | 15, 151), // vpbroadcastq "y0yo"
    e([0x02, 0x79, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 0 << 11 | 1158, 2 << 4 | 15, 148), // vpbroadcastw "y0mw"
    e([0x02, 0x79, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 1 << 11 | 1158, 2 << 4 | 15, 151), // vpbroadcastw "y0yo"
    e([0x03, 0x44, 0x11, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 0 << 11 | 1159, 3 << 4 | 15, 222), // vpclmulhqhqdq "yoyowo"
    e([0x03, 0x44, 0x01, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 0 << 11 | 1160, 3 << 4 | 15, 222), // vpclmulhqlqdq "yoyowo"
    e([0x03, 0x44, 0x10, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 0 << 11 | 1161, 3 << 4 | 15, 222), // vpclmullqhqdq "yoyowo"
    e([0x03, 0x44, 0x00, 0x00], VEX_OP | IMM_OP | PREF_66, AVX, 0 << 11 | 1162, 3 << 4 | 15, 222), // vpclmullqlqdq "yoyowo"
    e([0x03, 0x44, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1163, 2 << 4 | 15, 239), // vpclmulqdq "yoyowoib"
    e([0x08, 0xA2, 0x00, 0x00], XOP_OP | AUTO_VEXL, SSE5 | AMD, 0 << 11 | 1164, 2 << 4 | 15, 225), // vpcmov "y0y0w0y0"
    e([0x08, 0xA2, 0x00, 0x00], XOP_OP | AUTO_VEXL, SSE5 | AMD, 1 << 11 | 1164, 2 << 4 | 15, 226), // vpcmov "y0y0y0w0"
    e([0x01, 0x74, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1165, 2 << 4 | 15, 201), // vpcmpeqb "y0y0w0"
    e([0x01, 0x76, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1166, 2 << 4 | 15, 201), // vpcmpeqd "y0y0w0"
    e([0x02, 0x29, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1167, 2 << 4 | 15, 201), // vpcmpeqq "y0y0w0"
    e([0x01, 0x75, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1168, 2 << 4 | 15, 201), // vpcmpeqw "y0y0w0"
    e([0x03, 0x61, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1169, 2 << 4 | 15, 216), // vpcmpestri "yowoib"
    e([0x03, 0x60, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1170, 2 << 4 | 15, 216), // vpcmpestrm "yowoib"
    e([0x01, 0x64, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1171, 2 << 4 | 15, 201), // vpcmpgtb "y0y0w0"
    e([0x01, 0x66, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1172, 2 << 4 | 15, 201), // vpcmpgtd "y0y0w0"
    e([0x02, 0x37, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1173, 2 << 4 | 15, 201), // vpcmpgtq "y0y0w0"
    e([0x01, 0x65, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1174, 2 << 4 | 15, 201), // vpcmpgtw "y0y0w0"
    e([0x03, 0x63, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1175, 2 << 4 | 15, 216), // vpcmpistri "yowoib"
    e([0x03, 0x62, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1176, 2 << 4 | 15, 216), // vpcmpistrm "yowoib"
    e([0x08, 0xCC, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1177, 2 << 4 | 15, 239), // vpcomb "yoyowoib"
    e([0x08, 0xCE, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1178, 2 << 4 | 15, 239), // vpcomd "yoyowoib"
    e([0x08, 0xCF, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1179, 2 << 4 | 15, 239), // vpcomq "yoyowoib"
    e([0x08, 0xEC, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1180, 2 << 4 | 15, 239), // vpcomub "yoyowoib"
    e([0x08, 0xEE, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1181, 2 << 4 | 15, 239), // vpcomud "yoyowoib"
    e([0x08, 0xEF, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1182, 2 << 4 | 15, 239), // vpcomuq "yoyowoib"
    e([0x08, 0xED, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1183, 2 << 4 | 15, 239), // vpcomuw "yoyowoib"
    e([0x08, 0xCD, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1184, 2 << 4 | 15, 239), // vpcomw "yoyowoib"
    e([0x03, 0x06, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX, 0 << 11 | 1185, 2 << 4 | 15, 227), // vperm2f128 "yhyhwhib"
    e([0x03, 0x46, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX2, 0 << 11 | 1186, 2 << 4 | 15, 227), // vperm2i128 "yhyhwhib"
    e([0x02, 0x36, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX2, 0 << 11 | 1187, 2 << 4 | 15, 204), // vpermd "yhyhwh"
    e([0x02, 0x0D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1188, 2 << 4 | 15, 201), // vpermilpd "y0y0w0"
    e([0x03, 0x05, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1188, 2 << 4 | 15, 198), // vpermilpd "y0w0ib"
    e([0x02, 0x0C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1189, 2 << 4 | 15, 201), // vpermilps "y0y0w0"
    e([0x03, 0x04, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1189, 2 << 4 | 15, 198), // vpermilps "y0w0ib"
    e([0x03, 0x01, 0x00, 0x00], VEX_OP | WITH_REXW | WITH_VEXL | PREF_66, AVX2, 0 << 11 | 1190, 2 << 4 | 15, 203), // vpermpd "yhwhib"
    e([0x02, 0x16, 0x00, 0x00], VEX_OP | WITH_VEXL | PREF_66, AVX2, 0 << 11 | 1191, 2 << 4 | 15, 204), // vpermps "yhyhwh"
    e([0x03, 0x00, 0x00, 0x00], VEX_OP | WITH_REXW | WITH_VEXL | PREF_66, AVX2, 0 << 11 | 1192, 2 << 4 | 15, 203), // vpermq "yhwhib"
    e([0x03, 0x14, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 0 << 11 | 1193, 2 << 4 | 15, 174), // vpextrb "mbyoib"
    e([0x03, 0x14, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 1 << 11 | 1193, 2 << 4 | 15, 183), // vpextrb "rdyoib"
    e([0x03, 0x14, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 2 << 11 | 1193, 2 << 4 | 15, 184), // vpextrb "rqyoib"
    e([0x03, 0x16, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 0 << 11 | 1194, 2 << 4 | 15, 184), // vpextrd "rqyoib"
    e([0x03, 0x16, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 1 << 11 | 1194, 2 << 4 | 15, 187), // vpextrd "vdyoib"
    e([0x03, 0x16, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66 | ENC_MR, AVX, 0 << 11 | 1195, 2 << 4 | 15, 188), // vpextrq "vqyoib"
    e([0x03, 0x15, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 0 << 11 | 1196, 2 << 4 | 15, 176), // vpextrw "mwyoib"
    e([0x01, 0xC5, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1196, 2 << 4 | 15, 183), // vpextrw "rdyoib"
    e([0x03, 0x15, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 2 << 11 | 1196, 2 << 4 | 15, 183), // vpextrw "rdyoib"
    e([0x01, 0xC5, 0x00, 0x00], VEX_OP | PREF_66, AVX, 3 << 11 | 1196, 2 << 4 | 15, 184), // vpextrw "rqyoib"
    e([0x03, 0x15, 0x00, 0x00], VEX_OP | PREF_66 | ENC_MR, AVX, 4 << 11 | 1196, 2 << 4 | 15, 184), // vpextrw "rqyoib"
    e([0x02, 0x90, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1197, 2 << 4 | 15, 195), // vpgatherdd "y0k0y0"
    e([0x02, 0x90, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1198, 2 << 4 | 15, 197), // vpgatherdq "y0loy0"
    e([0x02, 0x91, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1199, 2 << 4 | 15, 206), // vpgatherqd "yok0yo"
    e([0x02, 0x91, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX2, 0 << 11 | 1200, 2 << 4 | 15, 196), // vpgatherqq "y0l0y0"
    e([0x09, 0xC2, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1201, 2 << 4 | 15, 167), // vphaddbd "yowo"
    e([0x09, 0xC3, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1202, 2 << 4 | 15, 167), // vphaddbq "yowo"
    e([0x09, 0xC1, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1203, 2 << 4 | 15, 167), // vphaddbw "yowo"
    e([0x02, 0x02, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1204, 2 << 4 | 15, 201), // vphaddd "y0y0w0"
    e([0x09, 0xCB, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1205, 2 << 4 | 15, 167), // vphadddq "yowo"
    e([0x02, 0x03, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1206, 2 << 4 | 15, 201), // vphaddsw "y0y0w0"
    e([0x09, 0xD2, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1207, 2 << 4 | 15, 167), // vphaddubd "yowo"
    e([0x09, 0xD3, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1208, 2 << 4 | 15, 167), // vphaddubq "yowo"
    e([0x09, 0xD1, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1209, 2 << 4 | 15, 167), // vphaddubw "yowo"
    e([0x09, 0xDB, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1210, 2 << 4 | 15, 167), // vphaddudq "yowo"
    e([0x09, 0xD6, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1211, 2 << 4 | 15, 167), // vphadduwd "yowo"
    e([0x09, 0xD7, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1212, 2 << 4 | 15, 167), // vphadduwq "yowo"
    e([0x02, 0x01, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1213, 2 << 4 | 15, 201), // vphaddw "y0y0w0"
    e([0x09, 0xC6, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1214, 2 << 4 | 15, 167), // vphaddwd "yowo"
    e([0x09, 0xC7, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1215, 2 << 4 | 15, 167), // vphaddwq "yowo"
    e([0x02, 0x41, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1216, 2 << 4 | 15, 167), // vphminposuw "yowo"
    e([0x09, 0xE1, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1217, 2 << 4 | 15, 167), // vphsubbw "yowo"
    e([0x02, 0x06, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1218, 2 << 4 | 15, 201), // vphsubd "y0y0w0"
    e([0x09, 0xE3, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1219, 2 << 4 | 15, 167), // vphsubdq "yowo"
    e([0x02, 0x07, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1220, 2 << 4 | 15, 201), // vphsubsw "y0y0w0"
    e([0x02, 0x05, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1221, 2 << 4 | 15, 201), // vphsubw "y0y0w0"
    e([0x09, 0xE2, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1222, 2 << 4 | 15, 167), // vphsubwd "yowo"
    e([0x03, 0x20, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1223, 2 << 4 | 15, 234), // vpinsrb "yoyordib"
    e([0x03, 0x20, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1223, 2 << 4 | 15, 235), // vpinsrb "yoyovbib"
    e([0x03, 0x22, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1224, 2 << 4 | 15, 236), // vpinsrd "yoyovdib"
    e([0x03, 0x22, 0x00, 0x00], VEX_OP | WITH_REXW | PREF_66, AVX, 0 << 11 | 1225, 2 << 4 | 15, 237), // vpinsrq "yoyovqib"
    e([0x01, 0xC4, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1226, 2 << 4 | 15, 234), // vpinsrw "yoyordib"
    e([0x01, 0xC4, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1226, 2 << 4 | 15, 238), // vpinsrw "yoyovwib"
    e([0x08, 0x9E, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1227, 2 << 4 | 15, 240), // vpmacsdd "yoyowoyo"
    e([0x08, 0x9F, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1228, 2 << 4 | 15, 240), // vpmacsdqh "yoyowoyo"
    e([0x08, 0x97, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1229, 2 << 4 | 15, 240), // vpmacsdql "yoyowoyo"
    e([0x08, 0x8E, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1230, 2 << 4 | 15, 240), // vpmacssdd "yoyowoyo"
    e([0x08, 0x8F, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1231, 2 << 4 | 15, 240), // vpmacssdqh "yoyowoyo"
    e([0x08, 0x87, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1232, 2 << 4 | 15, 240), // vpmacssdql "yoyowoyo"
    e([0x08, 0x86, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1233, 2 << 4 | 15, 240), // vpmacsswd "yoyowoyo"
    e([0x08, 0x85, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1234, 2 << 4 | 15, 240), // vpmacssww "yoyowoyo"
    e([0x08, 0x96, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1235, 2 << 4 | 15, 240), // vpmacswd "yoyowoyo"
    e([0x08, 0x95, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1236, 2 << 4 | 15, 240), // vpmacsww "yoyowoyo"
    e([0x08, 0xA6, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1237, 2 << 4 | 15, 240), // vpmadcsswd "yoyowoyo"
    e([0x08, 0xB6, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1238, 2 << 4 | 15, 240), // vpmadcswd "yoyowoyo"
    e([0x02, 0x04, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1239, 2 << 4 | 15, 201), // vpmaddubsw "y0y0w0"
    e([0x01, 0xF5, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1240, 2 << 4 | 15, 201), // vpmaddwd "y0y0w0"
    e([0x02, 0x8E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX2, 0 << 11 | 1241, 2 << 4 | 15, 173), // vpmaskmovd "m0y0y0"
    e([0x02, 0x8C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 1 << 11 | 1241, 2 << 4 | 15, 200), // vpmaskmovd "y0y0m0"
    e([0x02, 0x8E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX2, 0 << 11 | 1242, 2 << 4 | 15, 173), // vpmaskmovq "m0y0y0"
    e([0x02, 0x8C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 1 << 11 | 1242, 2 << 4 | 15, 200), // vpmaskmovq "y0y0m0"
    e([0x02, 0x3C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1243, 2 << 4 | 15, 201), // vpmaxsb "y0y0w0"
    e([0x02, 0x3D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1244, 2 << 4 | 15, 201), // vpmaxsd "y0y0w0"
    e([0x01, 0xEE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1245, 2 << 4 | 15, 201), // vpmaxsw "y0y0w0"
    e([0x01, 0xDE, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1246, 2 << 4 | 15, 201), // vpmaxub "y0y0w0"
    e([0x02, 0x3F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1247, 2 << 4 | 15, 201), // vpmaxud "y0y0w0"
    e([0x02, 0x3E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1248, 2 << 4 | 15, 201), // vpmaxuw "y0y0w0"
    e([0x02, 0x38, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1249, 2 << 4 | 15, 201), // vpminsb "y0y0w0"
    e([0x02, 0x39, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1250, 2 << 4 | 15, 201), // vpminsd "y0y0w0"
    e([0x01, 0xEA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1251, 2 << 4 | 15, 201), // vpminsw "y0y0w0"
    e([0x01, 0xDA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1252, 2 << 4 | 15, 201), // vpminub "y0y0w0"
    e([0x02, 0x3B, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1253, 2 << 4 | 15, 201), // vpminud "y0y0w0"
    e([0x02, 0x3A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1254, 2 << 4 | 15, 201), // vpminuw "y0y0w0"
    e([0x01, 0xD7, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1255, 2 << 4 | 15, 92), // vpmovmskb "r0y0"
    e([0x02, 0x21, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1256, 2 << 4 | 15, 160), // vpmovsxbd "yomd"
    e([0x02, 0x21, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1256, 2 << 4 | 15, 151), // vpmovsxbd "y0yo"
    e([0x02, 0x22, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1257, 2 << 4 | 15, 148), // vpmovsxbq "y0mw"
    e([0x02, 0x22, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1257, 2 << 4 | 15, 151), // vpmovsxbq "y0yo"
    e([0x02, 0x20, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1258, 2 << 4 | 15, 162), // vpmovsxbw "yomq"
    e([0x02, 0x20, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1258, 2 << 4 | 15, 150), // vpmovsxbw "y0wo"
    e([0x02, 0x25, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1259, 2 << 4 | 15, 162), // vpmovsxdq "yomq"
    e([0x02, 0x25, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1259, 2 << 4 | 15, 150), // vpmovsxdq "y0wo"
    e([0x02, 0x23, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1260, 2 << 4 | 15, 162), // vpmovsxwd "yomq"
    e([0x02, 0x23, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1260, 2 << 4 | 15, 150), // vpmovsxwd "y0wo"
    e([0x02, 0x24, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1261, 2 << 4 | 15, 160), // vpmovsxwq "yomd"
    e([0x02, 0x24, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1261, 2 << 4 | 15, 151), // vpmovsxwq "y0yo"
    e([0x02, 0x31, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1262, 2 << 4 | 15, 160), // vpmovzxbd "yomd"
    e([0x02, 0x31, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1262, 2 << 4 | 15, 151), // vpmovzxbd "y0yo"
    e([0x02, 0x32, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1263, 2 << 4 | 15, 148), // vpmovzxbq "y0mw"
    e([0x02, 0x32, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1263, 2 << 4 | 15, 151), // vpmovzxbq "y0yo"
    e([0x02, 0x30, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1264, 2 << 4 | 15, 162), // vpmovzxbw "yomq"
    e([0x02, 0x30, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1264, 2 << 4 | 15, 150), // vpmovzxbw "y0wo"
    e([0x02, 0x35, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1265, 2 << 4 | 15, 162), // vpmovzxdq "yomq"
    e([0x02, 0x35, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1265, 2 << 4 | 15, 150), // vpmovzxdq "y0wo"
    e([0x02, 0x33, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1266, 2 << 4 | 15, 162), // vpmovzxwd "yomq"
    e([0x02, 0x33, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1266, 2 << 4 | 15, 150), // vpmovzxwd "y0wo"
    e([0x02, 0x34, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1267, 2 << 4 | 15, 160), // vpmovzxwq "yomd"
    e([0x02, 0x34, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1267, 2 << 4 | 15, 151), // vpmovzxwq "y0yo"
    e([0x02, 0x28, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1268, 2 << 4 | 15, 201), // vpmuldq "y0y0w0"
    e([0x02, 0x0B, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1269, 2 << 4 | 15, 201), // vpmulhrsw "y0y0w0"
    e([0x01, 0xE4, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1270, 2 << 4 | 15, 201), // vpmulhuw "y0y0w0"
    e([0x01, 0xE5, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1271, 2 << 4 | 15, 201), // vpmulhw "y0y0w0"
    e([0x02, 0x40, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1272, 2 << 4 | 15, 201), // vpmulld "y0y0w0"
    e([0x01, 0xD5, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1273, 2 << 4 | 15, 201), // vpmullw "y0y0w0"
    e([0x01, 0xF4, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1274, 2 << 4 | 15, 201), // vpmuludq "y0y0w0"
    e([0x01, 0xEB, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1275, 2 << 4 | 15, 201), // vpor "y0y0w0"
    e([0x08, 0xA3, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1276, 2 << 4 | 15, 240), // vpperm "yoyowoyo"
    e([0x08, 0xA3, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1276, 2 << 4 | 15, 244), // vpperm "yoyoyowo"
    e([0x08, 0xC0, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1277, 2 << 4 | 15, 216), // vprotb "yowoib"
    e([0x09, 0x90, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 1 << 11 | 1277, 2 << 4 | 15, 217), // vprotb "yowoyo"
    e([0x09, 0x90, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 2 << 11 | 1277, 2 << 4 | 15, 222), // vprotb "yoyowo"
    e([0x08, 0xC2, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1278, 2 << 4 | 15, 216), // vprotd "yowoib"
    e([0x09, 0x92, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 1 << 11 | 1278, 2 << 4 | 15, 217), // vprotd "yowoyo"
    e([0x09, 0x92, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 2 << 11 | 1278, 2 << 4 | 15, 222), // vprotd "yoyowo"
    e([0x08, 0xC3, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1279, 2 << 4 | 15, 216), // vprotq "yowoib"
    e([0x09, 0x93, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 1 << 11 | 1279, 2 << 4 | 15, 217), // vprotq "yowoyo"
    e([0x09, 0x93, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 2 << 11 | 1279, 2 << 4 | 15, 222), // vprotq "yoyowo"
    e([0x08, 0xC1, 0x00, 0x00], XOP_OP, SSE5 | AMD, 0 << 11 | 1280, 2 << 4 | 15, 216), // vprotw "yowoib"
    e([0x09, 0x91, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 1 << 11 | 1280, 2 << 4 | 15, 217), // vprotw "yowoyo"
    e([0x09, 0x91, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 2 << 11 | 1280, 2 << 4 | 15, 222), // vprotw "yoyowo"
    e([0x01, 0xF6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1281, 2 << 4 | 15, 201), // vpsadbw "y0y0w0"
    e([0x09, 0x98, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 0 << 11 | 1282, 2 << 4 | 15, 217), // vpshab "yowoyo"
    e([0x09, 0x98, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1282, 2 << 4 | 15, 222), // vpshab "yoyowo"
    e([0x09, 0x9A, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 0 << 11 | 1283, 2 << 4 | 15, 217), // vpshad "yowoyo"
    e([0x09, 0x9A, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1283, 2 << 4 | 15, 222), // vpshad "yoyowo"
    e([0x09, 0x9B, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 0 << 11 | 1284, 2 << 4 | 15, 217), // vpshaq "yowoyo"
    e([0x09, 0x9B, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1284, 2 << 4 | 15, 222), // vpshaq "yoyowo"
    e([0x09, 0x99, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 0 << 11 | 1285, 2 << 4 | 15, 217), // vpshaw "yowoyo"
    e([0x09, 0x99, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1285, 2 << 4 | 15, 222), // vpshaw "yoyowo"
    e([0x09, 0x94, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 0 << 11 | 1286, 2 << 4 | 15, 217), // vpshlb "yowoyo"
    e([0x09, 0x94, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1286, 2 << 4 | 15, 222), // vpshlb "yoyowo"
    e([0x09, 0x96, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 0 << 11 | 1287, 2 << 4 | 15, 217), // vpshld "yowoyo"
    e([0x09, 0x96, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1287, 2 << 4 | 15, 222), // vpshld "yoyowo"
    e([0x09, 0x97, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 0 << 11 | 1288, 2 << 4 | 15, 217), // vpshlq "yowoyo"
    e([0x09, 0x97, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1288, 2 << 4 | 15, 222), // vpshlq "yoyowo"
    e([0x09, 0x95, 0x00, 0x00], XOP_OP | ENC_MR, SSE5 | AMD, 0 << 11 | 1289, 2 << 4 | 15, 217), // vpshlw "yowoyo"
    e([0x09, 0x95, 0x00, 0x00], XOP_OP | WITH_REXW, SSE5 | AMD, 1 << 11 | 1289, 2 << 4 | 15, 222), // vpshlw "yoyowo"
    e([0x02, 0x00, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1290, 2 << 4 | 15, 201), // vpshufb "y0y0w0"
    e([0x01, 0x70, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1291, 2 << 4 | 15, 198), // vpshufd "y0w0ib"
    e([0x01, 0x70, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F3, AVX, 0 << 11 | 1292, 2 << 4 | 15, 198), // vpshufhw "y0w0ib"
    e([0x01, 0x70, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_F2, AVX, 0 << 11 | 1293, 2 << 4 | 15, 198), // vpshuflw "y0w0ib"
    e([0x02, 0x08, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1294, 2 << 4 | 15, 201), // vpsignb "y0y0w0"
    e([0x02, 0x0A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1295, 2 << 4 | 15, 201), // vpsignd "y0y0w0"
    e([0x02, 0x09, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1296, 2 << 4 | 15, 201), // vpsignw "y0y0w0"
    e([0x01, 0x72, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1297, 2 << 4 | 6, 199), // vpslld "y0y0ib"
    e([0x01, 0xF2, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1297, 2 << 4 | 15, 202), // vpslld "y0y0wo"
    e([0x01, 0x73, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1298, 2 << 4 | 7, 199), // vpslldq "y0y0ib"
    e([0x01, 0x73, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1299, 2 << 4 | 6, 199), // vpsllq "y0y0ib"
    e([0x01, 0xF3, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1299, 2 << 4 | 15, 202), // vpsllq "y0y0wo"
    e([0x02, 0x47, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 0 << 11 | 1300, 2 << 4 | 15, 201), // vpsllvd "y0y0w0"
    e([0x02, 0x47, 0x00, 0x00], VEX_OP | AUTO_VEXL | WITH_REXW | PREF_66, AVX2, 0 << 11 | 1301, 2 << 4 | 15, 201), // vpsllvq "y0y0w0"
    e([0x01, 0x71, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1302, 2 << 4 | 6, 199), // vpsllw "y0y0ib"
    e([0x01, 0xF1, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1302, 2 << 4 | 15, 202), // vpsllw "y0y0wo"
    e([0x01, 0x72, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1303, 2 << 4 | 4, 199), // vpsrad "y0y0ib"
    e([0x01, 0xE2, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1303, 2 << 4 | 15, 202), // vpsrad "y0y0wo"
    e([0x02, 0x46, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 0 << 11 | 1304, 2 << 4 | 15, 201), // vpsravd "y0y0w0"
    e([0x01, 0x71, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1305, 2 << 4 | 4, 199), // vpsraw "y0y0ib"
    e([0x01, 0xE1, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1305, 2 << 4 | 15, 202), // vpsraw "y0y0wo"
    e([0x01, 0x72, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1306, 2 << 4 | 2, 199), // vpsrld "y0y0ib"
    e([0x01, 0xD2, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1306, 2 << 4 | 15, 202), // vpsrld "y0y0wo"
    e([0x01, 0x73, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1307, 2 << 4 | 3, 199), // vpsrldq "y0y0ib"
    e([0x01, 0x73, 0x00, 0x00], VEX_OP | PREF_66 | ENC_VM, AVX, 0 << 11 | 1308, 2 << 4 | 2, 199), // vpsrlq "y0y0ib"
    e([0x01, 0xD3, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1308, 2 << 4 | 15, 202), // vpsrlq "y0y0wo"
    e([0x02, 0x45, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX2, 0 << 11 | 1309, 2 << 4 | 15, 201), // vpsrlvd "y0y0w0"
    e([0x02, 0x45, 0x00, 0x00], VEX_OP | AUTO_VEXL | WITH_REXW | PREF_66, AVX2, 0 << 11 | 1310, 2 << 4 | 15, 201), // vpsrlvq "y0y0w0"
    e([0x01, 0x71, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_VM, AVX, 0 << 11 | 1311, 2 << 4 | 2, 199), // vpsrlw "y0y0ib"
    e([0x01, 0xD1, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 1 << 11 | 1311, 2 << 4 | 15, 202), // vpsrlw "y0y0wo"
    e([0x01, 0xF8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1312, 2 << 4 | 15, 201), // vpsubb "y0y0w0"
    e([0x01, 0xFA, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1313, 2 << 4 | 15, 201), // vpsubd "y0y0w0"
    e([0x01, 0xFB, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1314, 2 << 4 | 15, 201), // vpsubq "y0y0w0"
    e([0x01, 0xE8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1315, 2 << 4 | 15, 201), // vpsubsb "y0y0w0"
    e([0x01, 0xE9, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1316, 2 << 4 | 15, 201), // vpsubsw "y0y0w0"
    e([0x01, 0xD8, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1317, 2 << 4 | 15, 201), // vpsubusb "y0y0w0"
    e([0x01, 0xD9, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1318, 2 << 4 | 15, 201), // vpsubusw "y0y0w0"
    e([0x01, 0xF9, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1319, 2 << 4 | 15, 201), // vpsubw "y0y0w0"
    e([0x02, 0x17, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1320, 2 << 4 | 15, 149), // vptest "y0w0"
    e([0x01, 0x68, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1321, 2 << 4 | 15, 201), // vpunpckhbw "y0y0w0"
    e([0x01, 0x6A, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1322, 2 << 4 | 15, 201), // vpunpckhdq "y0y0w0"
    e([0x01, 0x6D, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1323, 2 << 4 | 15, 201), // vpunpckhqdq "y0y0w0"
    e([0x01, 0x69, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1324, 2 << 4 | 15, 201), // vpunpckhwd "y0y0w0"
    e([0x01, 0x60, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1325, 2 << 4 | 15, 201), // vpunpcklbw "y0y0w0"
    e([0x01, 0x62, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1326, 2 << 4 | 15, 201), // vpunpckldq "y0y0w0"
    e([0x01, 0x6C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1327, 2 << 4 | 15, 201), // vpunpcklqdq "y0y0w0"
    e([0x01, 0x61, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1328, 2 << 4 | 15, 201), // vpunpcklwd "y0y0w0"
    e([0x01, 0xEF, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1329, 2 << 4 | 15, 201), // vpxor "y0y0w0"
    e([0x01, 0x53, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1330, 2 << 4 | 15, 149), // vrcpps "y0w0"
    e([0x01, 0x53, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 1331, 2 << 4 | 15, 219), // vrcpss "yoyomd"
    e([0x01, 0x53, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1331, 2 << 4 | 15, 223), // vrcpss "yoyoyo"
    e([0x03, 0x09, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1332, 2 << 4 | 15, 198), // vroundpd "y0w0ib"
    e([0x03, 0x08, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1333, 2 << 4 | 15, 198), // vroundps "y0w0ib"
    e([0x03, 0x0B, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1334, 2 << 4 | 15, 232), // vroundsd "yoyomqib"
    e([0x03, 0x0B, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1334, 2 << 4 | 15, 241), // vroundsd "yoyoyoib"
    e([0x03, 0x0A, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1335, 2 << 4 | 15, 230), // vroundss "yoyomdib"
    e([0x03, 0x0A, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1335, 2 << 4 | 15, 241), // vroundss "yoyoyoib"
    e([0x01, 0x52, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1336, 2 << 4 | 15, 149), // vrsqrtps "y0w0"
    e([0x01, 0x52, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 1337, 2 << 4 | 15, 219), // vrsqrtss "yoyomd"
    e([0x01, 0x52, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1337, 2 << 4 | 15, 223), // vrsqrtss "yoyoyo"
    e([0x01, 0xC6, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66 | ENC_MR, AVX, 0 << 11 | 1338, 2 << 4 | 15, 224), // vshufpd "y0y0w0ib"
    e([0x01, 0xC6, 0x00, 0x00], VEX_OP | AUTO_VEXL | ENC_MR, AVX, 0 << 11 | 1339, 2 << 4 | 15, 224), // vshufps "y0y0w0ib"
    e([0x01, 0x51, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1340, 2 << 4 | 15, 149), // vsqrtpd "y0w0"
    e([0x01, 0x51, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1341, 2 << 4 | 15, 149), // vsqrtps "y0w0"
    e([0x01, 0x51, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 1342, 2 << 4 | 15, 220), // vsqrtsd "yoyomq"
    e([0x01, 0x51, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 1342, 2 << 4 | 15, 223), // vsqrtsd "yoyoyo"
    e([0x01, 0x51, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 1343, 2 << 4 | 15, 219), // vsqrtss "yoyomd"
    e([0x01, 0x51, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1343, 2 << 4 | 15, 223), // vsqrtss "yoyoyo"
    e([0x01, 0xAE, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 1344, 2 << 4 | 3, 11), // vstmxcsr "md"
    e([0x01, 0x5C, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1345, 2 << 4 | 15, 201), // vsubpd "y0y0w0"
    e([0x01, 0x5C, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1346, 2 << 4 | 15, 201), // vsubps "y0y0w0"
    e([0x01, 0x5C, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 0 << 11 | 1347, 2 << 4 | 15, 220), // vsubsd "yoyomq"
    e([0x01, 0x5C, 0x00, 0x00], VEX_OP | PREF_F2, AVX, 1 << 11 | 1347, 2 << 4 | 15, 223), // vsubsd "yoyoyo"
    e([0x01, 0x5C, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 0 << 11 | 1348, 2 << 4 | 15, 219), // vsubss "yoyomd"
    e([0x01, 0x5C, 0x00, 0x00], VEX_OP | PREF_F3, AVX, 1 << 11 | 1348, 2 << 4 | 15, 223), // vsubss "yoyoyo"
    e([0x02, 0x0F, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1349, 2 << 4 | 15, 149), // vtestpd "y0w0"
    e([0x02, 0x0E, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1350, 2 << 4 | 15, 149), // vtestps "y0w0"
    e([0x01, 0x2E, 0x00, 0x00], VEX_OP | PREF_66, AVX, 0 << 11 | 1351, 2 << 4 | 15, 162), // vucomisd "yomq"
    e([0x01, 0x2E, 0x00, 0x00], VEX_OP | PREF_66, AVX, 1 << 11 | 1351, 2 << 4 | 15, 170), // vucomisd "yoyo"
    e([0x01, 0x2E, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 1352, 2 << 4 | 15, 160), // vucomiss "yomd"
    e([0x01, 0x2E, 0x00, 0x00], VEX_OP, AVX, 1 << 11 | 1352, 2 << 4 | 15, 170), // vucomiss "yoyo"
    e([0x01, 0x15, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1353, 2 << 4 | 15, 201), // vunpckhpd "y0y0w0"
    e([0x01, 0x15, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1354, 2 << 4 | 15, 201), // vunpckhps "y0y0w0"
    e([0x01, 0x14, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1355, 2 << 4 | 15, 201), // vunpcklpd "y0y0w0"
    e([0x01, 0x14, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1356, 2 << 4 | 15, 201), // vunpcklps "y0y0w0"
    e([0x01, 0x57, 0x00, 0x00], VEX_OP | AUTO_VEXL | PREF_66, AVX, 0 << 11 | 1357, 2 << 4 | 15, 201), // vxorpd "y0y0w0"
    e([0x01, 0x57, 0x00, 0x00], VEX_OP | AUTO_VEXL, AVX, 0 << 11 | 1358, 2 << 4 | 15, 201), // vxorps "y0y0w0"
    e([0x01, 0x77, 0x00, 0x00], VEX_OP | WITH_VEXL, AVX, 0 << 11 | 1359, 2 << 4 | 15, 0), // vzeroall ""
    e([0x01, 0x77, 0x00, 0x00], VEX_OP, AVX, 0 << 11 | 1360, 2 << 4 | 15, 0), // vzeroupper ""
];
