//! bfvm: a compiler and bytecode VM for the eight-operator tape language.
//!
//! This is the library root that exports all modules.
//!
//! # Pipeline
//!
//! Source bytes are compiled into a flat [`vm::Program`] (runs of `+ - > <`
//! collapsed, brackets resolved to absolute jump targets), which the
//! [`vm::Vm`] then executes against a 30000-cell tape.

pub mod error;
pub mod span;
pub mod vm;

use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use error::{BfError, CompileError, RuntimeError};
use vm::{Compiler, Program, Vm, VmConfig};

/// Options for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print the program listing before executing it.
    pub disassemble: bool,
    pub vm: VmConfig,
}

/// Compile source bytes to a program without executing.
pub fn compile(source: &[u8]) -> Result<Program, CompileError> {
    Compiler::compile(source)
}

/// Disassemble a compiled program to a string.
pub fn disassemble(program: &Program) -> String {
    vm::disassemble(program)
}

/// Run a program on stdin/stdout with the default options.
pub fn run(source: &[u8]) -> Result<(), BfError> {
    run_with_options(source, &RunOptions::default())
}

/// Run a program on stdin/stdout.
pub fn run_with_options(source: &[u8], options: &RunOptions) -> Result<(), BfError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    run_with_io(source, options, &mut input, &mut output)
}

/// Run a program against arbitrary byte streams.
pub fn run_with_io<R, W>(
    source: &[u8],
    options: &RunOptions,
    input: &mut R,
    output: &mut W,
) -> Result<(), BfError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let program = compile(source)?;

    if options.disassemble {
        output
            .write_all(disassemble(&program).as_bytes())
            .and_then(|_| output.write_all(b"---\n"))
            .map_err(|e| RuntimeError::io(e, span::Span::default()))?;
    }

    let mut vm = Vm::new(options.vm);
    vm.execute(&program, input, output)?;
    Ok(())
}

/// Read a source file into memory.
pub fn read_source(path: &Path) -> Result<Vec<u8>, BfError> {
    std::fs::read(path).map_err(|source| BfError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Run a program from a file path on stdin/stdout.
pub fn run_file(path: &Path, options: &RunOptions) -> Result<(), BfError> {
    let source = read_source(path)?;
    run_with_options(&source, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_io_disassembles_first() {
        let options = RunOptions {
            disassemble: true,
            ..RunOptions::default()
        };
        let mut input: &[u8] = b"";
        let mut output = Vec::new();
        run_with_io(b"+.", &options, &mut input, &mut output).expect("run error");
        let text = String::from_utf8_lossy(&output);
        assert!(text.starts_with("== program (3 instructions) =="));
        assert!(output.ends_with(b"---\n\x01"));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.b")).unwrap_err();
        assert!(matches!(err, BfError::Read { .. }));
        assert!(err.to_string().contains("definitely/not/here.b"));
    }
}
