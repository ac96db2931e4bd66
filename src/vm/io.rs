//! Byte-at-a-time I/O over `std::io` streams.

use std::io::{self, ErrorKind, Read, Write};

/// Read a single byte. `Ok(None)` means end of stream.
pub fn read_byte<R: Read + ?Sized>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Write a single byte.
pub fn write_byte<W: Write + ?Sized>(output: &mut W, byte: u8) -> io::Result<()> {
    output.write_all(&[byte])
}
