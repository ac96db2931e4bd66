//! The tape virtual machine: dispatch loop and execution state.

use std::io::{Read, Write};

use tracing::{debug, warn};

use crate::error::RuntimeError;

use super::config::{EofBehavior, VmConfig};
use super::io::{read_byte, write_byte};
use super::opcode::Op;
use super::program::Program;
use super::tape::Tape;

/// Result type for VM operations.
pub type VmResult<T> = Result<T, RuntimeError>;

/// Whether the VM can execute further instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmState {
    Running,
    Halted,
}

/// The tape VM.
pub struct Vm {
    /// Memory tape.
    tape: Tape,
    /// Index of the next instruction.
    ip: usize,
    /// Index of the current cell. Always within the tape.
    data_pointer: usize,
    state: VmState,
    /// Instructions executed so far (`Halt` excluded).
    steps: u64,
    config: VmConfig,
}

impl Vm {
    pub fn new(config: VmConfig) -> Self {
        Self {
            tape: Tape::new(),
            ip: 0,
            data_pointer: 0,
            state: VmState::Running,
            steps: 0,
            config,
        }
    }

    /// Run `program` from a zeroed tape until it halts or fails.
    ///
    /// Any state left by an earlier run is discarded first. Output is flushed
    /// on the way out in both cases, so bytes written before a runtime error
    /// still reach the sink.
    pub fn execute<R, W>(&mut self, program: &Program, input: &mut R, output: &mut W) -> VmResult<()>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.reset();
        debug!(instructions = program.len(), "starting execution");

        let result = self.run(program, input, output);
        let flushed = output
            .flush()
            .map_err(|e| RuntimeError::io(e, program.span_at(self.ip)));

        match result.and(flushed) {
            Ok(()) => {
                debug!(steps = self.steps, "program halted");
                Ok(())
            }
            Err(err) => {
                warn!(steps = self.steps, ip = self.ip, error = %err, "execution aborted");
                Err(err)
            }
        }
    }

    fn run<R, W>(&mut self, program: &Program, input: &mut R, output: &mut W) -> VmResult<()>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        while self.step(program, input, output)? == VmState::Running {}
        Ok(())
    }

    /// Execute exactly one instruction and report the resulting state.
    ///
    /// Any error leaves the VM halted.
    pub fn step<R, W>(&mut self, program: &Program, input: &mut R, output: &mut W) -> VmResult<VmState>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        if self.state == VmState::Halted {
            return Ok(VmState::Halted);
        }

        let op = match program.get(self.ip) {
            Some(Op::Halt) | None => {
                self.state = VmState::Halted;
                return Ok(VmState::Halted);
            }
            Some(op) => op,
        };

        if let Err(err) = self.dispatch(op, program, input, output) {
            self.state = VmState::Halted;
            return Err(err);
        }
        Ok(self.state)
    }

    fn dispatch<R, W>(&mut self, op: Op, program: &Program, input: &mut R, output: &mut W) -> VmResult<()>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let span = program.span_at(self.ip);

        if let Some(limit) = self.config.max_steps {
            if self.steps >= limit {
                return Err(RuntimeError::step_limit(limit, span));
            }
        }
        self.steps += 1;

        match op {
            Op::Add(n) => {
                self.tape.add(self.data_pointer, n);
                self.ip += 1;
            }
            Op::Sub(n) => {
                self.tape.sub(self.data_pointer, n);
                self.ip += 1;
            }
            Op::MoveRight(n) => {
                self.data_pointer = self.tape.move_right(self.data_pointer, n, span)?;
                self.ip += 1;
            }
            Op::MoveLeft(n) => {
                self.data_pointer = self.tape.move_left(self.data_pointer, n, span)?;
                self.ip += 1;
            }
            Op::Output => {
                write_byte(output, self.tape.get(self.data_pointer))
                    .map_err(|e| RuntimeError::io(e, span))?;
                self.ip += 1;
            }
            Op::Input => {
                // Prompts written so far must be visible before blocking.
                output.flush().map_err(|e| RuntimeError::io(e, span))?;
                match read_byte(input).map_err(|e| RuntimeError::io(e, span))? {
                    Some(byte) => self.tape.set(self.data_pointer, byte),
                    None => match self.config.eof {
                        EofBehavior::Zero => self.tape.set(self.data_pointer, 0),
                        EofBehavior::AllOnes => self.tape.set(self.data_pointer, 255),
                        EofBehavior::Unchanged => {}
                    },
                }
                self.ip += 1;
            }
            Op::JumpIfZero(target) => {
                if self.tape.get(self.data_pointer) == 0 {
                    self.ip = target;
                } else {
                    self.ip += 1;
                }
            }
            Op::JumpIfNonZero(target) => {
                if self.tape.get(self.data_pointer) != 0 {
                    self.ip = target;
                } else {
                    self.ip += 1;
                }
            }
            Op::Halt => self.state = VmState::Halted,
        }
        Ok(())
    }

    /// Return to the initial state: zeroed tape, both pointers at 0, running.
    pub fn reset(&mut self) {
        self.tape = Tape::new();
        self.ip = 0;
        self.data_pointer = 0;
        self.state = VmState::Running;
        self.steps = 0;
    }

    /// Value of the cell under the data pointer.
    pub fn current_cell(&self) -> u8 {
        self.tape.get(self.data_pointer)
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn data_pointer(&self) -> usize {
        self.data_pointer
    }

    pub fn state(&self) -> VmState {
        self.state
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &VmConfig {
        &self.config
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new(VmConfig::default())
    }
}

/// Execute a program on a fresh VM with the default configuration.
pub fn execute<R, W>(program: &Program, input: &mut R, output: &mut W) -> VmResult<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    Vm::default().execute(program, input, output)
}
