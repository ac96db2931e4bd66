//! Bytecode VM for the tape language: compiles source bytes to a flat
//! instruction stream and executes it against a fixed-size tape.
//!
//! - `opcode`: the instruction set shared by compiler and VM
//! - `program`: compiled instruction stream with source spans
//! - `compiler`: run-length coalescing scanner and bracket resolver
//! - `tape`: bounds-checked 30000-cell memory
//! - `io`: byte-at-a-time stream helpers
//! - `config`: execution settings
//! - `vm`: the dispatch loop
//! - `disassembler`: debug listing of a program

pub mod compiler;
pub mod config;
pub mod disassembler;
pub mod io;
pub mod opcode;
pub mod program;
pub mod tape;
#[allow(clippy::module_inception)]
pub mod vm;

pub use compiler::Compiler;
pub use config::{EofBehavior, VmConfig};
pub use disassembler::disassemble;
pub use opcode::Op;
pub use program::Program;
pub use tape::{Tape, TAPE_SIZE};
pub use vm::{execute, Vm, VmState};
