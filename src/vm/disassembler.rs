//! Program disassembler for debug output.

use super::opcode::Op;
use super::program::Program;

/// Disassemble a program to a human-readable string.
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    out.push_str(&format!("== program ({} instructions) ==\n", program.len()));

    for (offset, op) in program.iter().enumerate() {
        let span = program.span_at(offset);
        let location = if offset > 0 && program.span_at(offset - 1).line == span.line {
            format!("{:>4} |  ", "")
        } else {
            format!("{:>4}:{:<3}", span.line, span.column)
        };
        out.push_str(&format!("{:04} {} ", offset, location));
        disassemble_op(*op, &mut out);
        out.push('\n');
    }
    out
}

fn disassemble_op(op: Op, out: &mut String) {
    match op {
        Op::Add(n) | Op::Sub(n) | Op::MoveRight(n) | Op::MoveLeft(n) => {
            out.push_str(&format!("{:<16}{:>5}", op.mnemonic(), n));
        }
        Op::JumpIfZero(target) | Op::JumpIfNonZero(target) => {
            out.push_str(&format!("{:<16}-> {:04}", op.mnemonic(), target));
        }
        Op::Output | Op::Input | Op::Halt => out.push_str(op.mnemonic()),
    }
}
