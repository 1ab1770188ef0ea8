//! Assemble a small function body and print it as hex.
//!
//! The emitted code follows the System V AMD64 calling convention: it sums
//! the first two integer arguments (RDI, RSI), doubling the result in a
//! short loop to show label references.
//!
//! Run with: `cargo run --example function_body`

use x64asm::mnemonics::{ADD, CMP, JNZ, MOV, RET, SUB};
use x64asm::reg::{RAX, RCX, RDI, RSI};
use x64asm::{Assembler, Imm};

fn main() -> Result<(), x64asm::AsmError> {
    let mut asm = Assembler::with_capacity(64);

    asm.rr(MOV, RAX, RDI)?; // rax = a
    asm.rr(ADD, RAX, RSI)?; // rax += b
    asm.ri(MOV, RCX, Imm::I32(4))?; // loop counter

    let top = asm.new_label();
    asm.rr(ADD, RAX, RAX)?; // rax *= 2
    asm.ri(SUB, RCX, Imm::I8(1))?;
    asm.ri(CMP, RCX, Imm::I8(0))?;
    asm.inst(JNZ, &[top.rel8().into()])?;

    asm.inst(RET, &[])?;
    asm.finalize()?;

    for (i, byte) in asm.code().iter().enumerate() {
        if i > 0 && i % 16 == 0 {
            println!();
        }
        print!("{byte:02x} ");
    }
    println!();
    Ok(())
}
