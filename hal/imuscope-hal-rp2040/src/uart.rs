//! Blocking UART transmitter for the serial console

use embassy_rp::uart::{Blocking, Error, UartTx};

/// Console transmitter on one of the RP2040 UARTs
pub struct Rp2040UartTx<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> Rp2040UartTx<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl<'d> imuscope_hal::UartTx for Rp2040UartTx<'d> {
    type Error = Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.tx.blocking_flush()
    }
}
