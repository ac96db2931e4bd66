//! Compiled program: instruction stream plus source spans.

use std::ops::Index;

use super::opcode::Op;
use crate::span::Span;

/// An ordered instruction sequence, terminated by a single `Halt` once compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The instructions.
    pub code: Vec<Op>,
    /// Source spans, parallel to `code`.
    pub spans: Vec<Span>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            code: Vec::new(),
            spans: Vec::new(),
        }
    }

    /// Emit an instruction and record its span. Returns the instruction's index.
    pub fn emit(&mut self, op: Op, span: Span) -> usize {
        let offset = self.code.len();
        self.code.push(op);
        self.spans.push(span);
        offset
    }

    /// Get the current offset (next instruction index).
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<Op> {
        self.code.get(offset).copied()
    }

    /// Span of the instruction at `offset`, or a default span past the end.
    pub fn span_at(&self, offset: usize) -> Span {
        self.spans.get(offset).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.code.iter()
    }

    /// Point the `JumpIfZero` at `offset` one past the instruction about to be emitted.
    pub fn patch_jump(&mut self, offset: usize) {
        let target = self.code.len() + 1;
        match &mut self.code[offset] {
            Op::JumpIfZero(slot) => *slot = target,
            other => panic!(
                "Tried to patch non-jump instruction {:?} at offset {}",
                other, offset
            ),
        }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Program {
    type Output = Op;

    fn index(&self, offset: usize) -> &Op {
        &self.code[offset]
    }
}
