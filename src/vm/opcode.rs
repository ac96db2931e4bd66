//! Instruction set for the tape VM.

/// A single compiled instruction.
///
/// Arithmetic and move instructions carry the length of the source run they
/// were collapsed from (always at least 1). Jump instructions carry an
/// absolute index into the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // --- Cell arithmetic ---
    /// Add `n` to the current cell, wrapping modulo 256.
    Add(usize),
    /// Subtract `n` from the current cell, wrapping modulo 256.
    Sub(usize),

    // --- Data pointer ---
    /// Move the data pointer `n` cells right.
    MoveRight(usize),
    /// Move the data pointer `n` cells left.
    MoveLeft(usize),

    // --- I/O ---
    /// Write the current cell as one byte.
    Output,
    /// Read one byte into the current cell.
    Input,

    // --- Control flow ---
    /// Jump to the target if the current cell is zero.
    JumpIfZero(usize),
    /// Jump to the target if the current cell is non-zero.
    JumpIfNonZero(usize),
    /// Stop execution.
    Halt,
}

impl Op {
    /// Map a run-length eligible source byte to its instruction.
    pub fn from_run(byte: u8, count: usize) -> Option<Op> {
        match byte {
            b'+' => Some(Op::Add(count)),
            b'-' => Some(Op::Sub(count)),
            b'>' => Some(Op::MoveRight(count)),
            b'<' => Some(Op::MoveLeft(count)),
            _ => None,
        }
    }

    /// Whether this instruction is a conditional jump.
    pub fn is_jump(self) -> bool {
        matches!(self, Op::JumpIfZero(_) | Op::JumpIfNonZero(_))
    }

    /// Upper-case mnemonic used by the disassembler.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Add(_) => "ADD",
            Op::Sub(_) => "SUB",
            Op::MoveRight(_) => "MOVE_RIGHT",
            Op::MoveLeft(_) => "MOVE_LEFT",
            Op::Output => "OUTPUT",
            Op::Input => "INPUT",
            Op::JumpIfZero(_) => "JUMP_IF_ZERO",
            Op::JumpIfNonZero(_) => "JUMP_IF_NONZERO",
            Op::Halt => "HALT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_run() {
        assert_eq!(Op::from_run(b'+', 3), Some(Op::Add(3)));
        assert_eq!(Op::from_run(b'-', 1), Some(Op::Sub(1)));
        assert_eq!(Op::from_run(b'>', 2), Some(Op::MoveRight(2)));
        assert_eq!(Op::from_run(b'<', 5), Some(Op::MoveLeft(5)));
        assert_eq!(Op::from_run(b'.', 1), None);
        assert_eq!(Op::from_run(b'[', 1), None);
    }

    #[test]
    fn test_is_jump() {
        assert!(Op::JumpIfZero(0).is_jump());
        assert!(Op::JumpIfNonZero(0).is_jump());
        assert!(!Op::Halt.is_jump());
        assert!(!Op::Add(1).is_jump());
    }
}
