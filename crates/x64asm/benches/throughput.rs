//! Performance benchmarks for `x64asm`.
//!
//! Measures:
//! - Single instruction encoding latency
//! - Multi-instruction block throughput
//! - Label-heavy workloads with a finalize pass
//! - Standalone matcher throughput
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use x64asm::mnemonics::{ADD, AND, JMP, MOV, OR, SUB, VADDPS, VGATHERDPS, XOR};
use x64asm::reg::*;
use x64asm::{Assembler, Imm, InstMatcher, Mem};

// ─── Single-Instruction Latency ──────────────────────────────────────────────

fn bench_single_instruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_instruction");
    let mut asm = Assembler::with_capacity(64);

    group.bench_function("mov_reg_imm", |b| {
        b.iter(|| {
            asm.reset(None);
            asm.ri(MOV, black_box(RAX), black_box(Imm::I32(0x1234))).unwrap();
            black_box(asm.code());
        })
    });

    group.bench_function("add_reg_reg", |b| {
        b.iter(|| {
            asm.reset(None);
            asm.rr(ADD, black_box(RAX), black_box(RBX)).unwrap();
            black_box(asm.code());
        })
    });

    group.bench_function("mov_mem_sib_disp", |b| {
        let mem = Mem::base(RAX).index(RCX, 8).disp32(0x10);
        b.iter(|| {
            asm.reset(None);
            asm.mr(MOV, black_box(mem), black_box(RDX)).unwrap();
            black_box(asm.code());
        })
    });

    group.bench_function("vaddps_vex", |b| {
        b.iter(|| {
            asm.reset(None);
            asm.inst(VADDPS, &[YMM0.into(), YMM1.into(), YMM2.into()])
                .unwrap();
            black_box(asm.code());
        })
    });

    group.bench_function("vgatherdps_vsib", |b| {
        let mem = Mem::base(RDX).index(XMM1, 4);
        b.iter(|| {
            asm.reset(None);
            asm.inst(VGATHERDPS, &[XMM0.into(), mem.into(), XMM2.into()])
                .unwrap();
            black_box(asm.code());
        })
    });

    group.finish();
}

// ─── Multi-Instruction Throughput ─────────────────────────────────────────────

fn emit_block(asm: &mut Assembler, n: usize) {
    for i in 0..n {
        match i % 6 {
            0 => asm.rr(MOV, RAX, RBX).unwrap(),
            1 => asm.rr(ADD, RCX, RDX).unwrap(),
            2 => asm.rr(SUB, RSI, RDI).unwrap(),
            3 => asm.rr(XOR, R8, R9).unwrap(),
            4 => asm.rr(AND, R10, R11).unwrap(),
            _ => asm.rr(OR, R12, R13).unwrap(),
        }
    }
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    for n in [100usize, 1000, 5000] {
        let mut asm = Assembler::with_capacity(n * 4);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("{n}_insn"), |b| {
            b.iter(|| {
                asm.reset(None);
                emit_block(&mut asm, n);
                black_box(asm.code());
            })
        });
    }

    group.finish();
}

// ─── Label-Heavy Workloads ────────────────────────────────────────────────────

fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("labels");

    for n in [50usize, 200, 500] {
        let mut asm = Assembler::with_capacity(n * 8);
        group.bench_function(format!("{n}_labels"), |b| {
            b.iter(|| {
                asm.reset(None);
                let mut labels = Vec::with_capacity(n);
                for _ in 0..n {
                    labels.push(asm.new_label());
                    asm.nop(1);
                }
                for i in 0..n.min(50) {
                    let target = labels[(i + n / 2) % n];
                    asm.inst(JMP, &[target.rel32().into()]).unwrap();
                }
                asm.finalize().unwrap();
                black_box(asm.code());
            })
        });
    }

    group.finish();
}

// ─── Standalone Matcher ───────────────────────────────────────────────────────

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");
    let mut matcher = InstMatcher::new();

    group.bench_function("match_add_rr", |b| {
        b.iter(|| {
            matcher
                .match_inst(ADD, &[black_box(RAX).into(), black_box(RBX).into()])
                .unwrap();
            black_box(matcher.encoding_index());
        })
    });

    group.bench_function("all_matches_add_rr", |b| {
        b.iter(|| {
            let found = matcher
                .all_matches(ADD, &[black_box(RAX).into(), black_box(RBX).into()])
                .unwrap();
            black_box(found.len());
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_instruction,
    bench_throughput,
    bench_labels,
    bench_matcher,
);
criterion_main!(benches);
