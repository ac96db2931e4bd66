//! The VM's memory tape.

use crate::error::RuntimeError;
use crate::span::Span;

/// Number of cells on the tape.
pub const TAPE_SIZE: usize = 30000;

/// A fixed-size array of wrapping 8-bit cells, zero-initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Box<[u8]>,
}

impl Tape {
    pub fn new() -> Self {
        Self {
            cells: vec![0; TAPE_SIZE].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value of the cell at `pointer`.
    ///
    /// The VM only ever holds in-range pointers, so indexing is direct.
    pub fn get(&self, pointer: usize) -> u8 {
        self.cells[pointer]
    }

    pub fn set(&mut self, pointer: usize, value: u8) {
        self.cells[pointer] = value;
    }

    pub fn add(&mut self, pointer: usize, n: usize) {
        let cell = &mut self.cells[pointer];
        *cell = cell.wrapping_add((n % 256) as u8);
    }

    pub fn sub(&mut self, pointer: usize, n: usize) {
        let cell = &mut self.cells[pointer];
        *cell = cell.wrapping_sub((n % 256) as u8);
    }

    /// Pointer `n` cells to the right, or `TapeBounds` past the last cell.
    pub fn move_right(&self, pointer: usize, n: usize, span: Span) -> Result<usize, RuntimeError> {
        match pointer.checked_add(n) {
            Some(moved) if moved < self.len() => Ok(moved),
            _ => Err(RuntimeError::tape_bounds(
                pointer as i64 + n as i64,
                self.len(),
                span,
            )),
        }
    }

    /// Pointer `n` cells to the left, or `TapeBounds` below zero.
    pub fn move_left(&self, pointer: usize, n: usize, span: Span) -> Result<usize, RuntimeError> {
        pointer
            .checked_sub(n)
            .ok_or_else(|| RuntimeError::tape_bounds(pointer as i64 - n as i64, self.len(), span))
    }

    /// Read-only view of all cells.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
