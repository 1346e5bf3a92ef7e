//! UART serial communication abstractions
//!
//! Provides the transmit trait chip-specific HALs implement, plus the
//! console wrapper the firmware prints human-readable text through.

use core::fmt;

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Line-oriented text console over a UART
///
/// Implements [`core::fmt::Write`] so `write!`/`writeln!` work directly.
/// Bare `\n` line endings are expanded to `\r\n` for serial terminals,
/// and the transmitter is flushed after every completed line.
pub struct SerialConsole<T> {
    tx: T,
}

impl<T: UartTx> SerialConsole<T> {
    /// Wrap a UART transmitter
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    /// Give back the underlying transmitter
    pub fn release(self) -> T {
        self.tx
    }
}

impl<T: UartTx> fmt::Write for SerialConsole<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                self.tx.write_blocking(b"\r\n").map_err(|_| fmt::Error)?;
                self.tx.flush().map_err(|_| fmt::Error)?;
            }
            if !line.is_empty() {
                self.tx
                    .write_blocking(line.as_bytes())
                    .map_err(|_| fmt::Error)?;
            }
        }
        Ok(())
    }
}
