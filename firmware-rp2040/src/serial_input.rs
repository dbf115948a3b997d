//! Byte-stream input source over any async reader.
//!
//! On the Pico this wraps the receive half of a `BufferedUart`; the UART's
//! ring buffer keeps filling while the main loop dispatches, so a read
//! cancelled by `select` never loses bytes.
//!
//! # Pins
//!
//! Uses UART1 at 921600 baud, 8N1:
//! - GPIO 4: TX
//! - GPIO 5: RX

use embedded_io_async::{Error as _, ErrorKind, Read};
use link_core::{InputError, InputSource, Port};

/// Convert reader errors to [`InputError`].
#[inline]
fn io_error_to_input_error(kind: ErrorKind) -> InputError {
    match kind {
        ErrorKind::InvalidData => InputError::Framing,
        ErrorKind::NotConnected | ErrorKind::ConnectionReset => InputError::Disconnected,
        _ => InputError::Io,
    }
}

/// Raw link bytes for one [`Port`].
pub struct SerialInput<R> {
    rx: R,
    port: Port,
}

impl<R: Read> SerialInput<R> {
    /// Create an input source feeding the decoder of `port`.
    #[must_use]
    pub fn new(rx: R, port: Port) -> Self {
        Self { rx, port }
    }
}

impl<R: Read> InputSource for SerialInput<R> {
    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, InputError> {
        match self.rx.read(buf).await {
            Ok(0) => Err(InputError::Disconnected),
            Ok(len) => Ok(len),
            Err(e) => Err(io_error_to_input_error(e.kind())),
        }
    }

    fn port(&self) -> Port {
        self.port
    }
}
