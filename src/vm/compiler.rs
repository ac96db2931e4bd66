//! Source-to-bytecode compiler.
//!
//! Single pass over the source bytes. Runs of identical `+`, `-`, `>` and `<`
//! collapse into one instruction carrying the run length. Brackets are
//! resolved with a stack of pending `[` offsets: each `]` patches its `[` to
//! jump past the `]`, and itself jumps back to just after the `[`.
//! Every other byte is a comment.

use tracing::debug;

use crate::error::CompileError;
use crate::span::Span;

use super::opcode::Op;
use super::program::Program;

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;

/// The compiler: scans source bytes and emits a `Program`.
pub struct Compiler<'a> {
    /// Raw source text.
    source: &'a [u8],
    /// Offset of the next unread byte.
    current: usize,
    line: usize,
    column: usize,
    /// The program being built.
    program: Program,
    /// Offsets (and spans) of `JumpIfZero` instructions awaiting their `]`.
    loop_stack: Vec<(usize, Span)>,
}

impl<'a> Compiler<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 1,
            program: Program::new(),
            loop_stack: Vec::new(),
        }
    }

    /// Compile a full source text.
    pub fn compile(source: &[u8]) -> CompileResult<Program> {
        Compiler::new(source).compile_all()
    }

    fn compile_all(mut self) -> CompileResult<Program> {
        while let Some(byte) = self.peek() {
            match byte {
                b'+' | b'-' | b'>' | b'<' => self.compile_run(byte),
                b'.' => self.compile_single(Op::Output),
                b',' => self.compile_single(Op::Input),
                b'[' => self.open_loop(),
                b']' => self.close_loop()?,
                _ => {
                    self.advance();
                }
            }
        }

        let end = Span::new(self.current, self.current, self.line, self.column);
        self.program.emit(Op::Halt, end);

        // The earliest `[` still open is the one reported.
        if let Some(&(_, span)) = self.loop_stack.first() {
            return Err(CompileError::unmatched_open(span));
        }

        debug!(
            source_bytes = self.source.len(),
            instructions = self.program.len(),
            "compiled program"
        );
        Ok(self.program)
    }

    // --- Token handlers ---

    /// Collapse the maximal run of `byte` starting here into one instruction.
    fn compile_run(&mut self, byte: u8) {
        let (start, line, column) = (self.current, self.line, self.column);
        let mut count = 0;
        while self.peek() == Some(byte) {
            self.advance();
            count += 1;
        }
        let span = Span::new(start, self.current, line, column);
        if let Some(op) = Op::from_run(byte, count) {
            self.program.emit(op, span);
        }
    }

    fn compile_single(&mut self, op: Op) {
        let span = self.single_span();
        self.advance();
        self.program.emit(op, span);
    }

    fn open_loop(&mut self) {
        let span = self.single_span();
        self.advance();
        // Target is patched when the matching `]` is reached.
        let offset = self.program.emit(Op::JumpIfZero(0), span);
        self.loop_stack.push((offset, span));
    }

    fn close_loop(&mut self) -> CompileResult<()> {
        let span = self.single_span();
        self.advance();
        let (open, _) = self
            .loop_stack
            .pop()
            .ok_or_else(|| CompileError::unmatched_close(span))?;
        self.program.patch_jump(open);
        self.program.emit(Op::JumpIfNonZero(open + 1), span);
        Ok(())
    }

    // --- Scanner helpers ---

    fn peek(&self) -> Option<u8> {
        self.source.get(self.current).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.current += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    fn single_span(&self) -> Span {
        Span::new(self.current, self.current + 1, self.line, self.column)
    }
}
