//! Serial link to USB HID receiver for RP2040.
//!
//! This crate provides the embedded side of the HID receiver: the flash,
//! UART and USB adapters that plug into [`link_core`].
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Loads the config record from flash and picks the active profile
//! 2. Enumerates as the USB HID device of that profile, plus a vendor
//!    config interface
//! 3. Decodes SLIP frames from UART and forwards each packet's report to
//!    the host
//!
//! A packet for a different profile is persisted and the board resets so
//! it can enumerate again with the new descriptor.
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | UART1 TX | 4    | Serial transmit (unused) |
//! | UART1 RX | 5    | Serial receive (921600 baud, 8N1) |
//!
//! # Architecture
//!
//! Up to three tasks run on the Embassy executor:
//!
//! - **USB Task**: Runs the USB device stack
//! - **Output Report Task**: Drains host-to-device reports on profiles
//!   with an OUT endpoint (Horipad, Stadia)
//! - **Main loop**: Waits on UART bytes, queued feature reports and a 1 ms
//!   tick, then feeds the [`Receiver`](link_core::Receiver) and drains its
//!   report queue
//!
//! USB control requests run in interrupt context. They read a published
//! snapshot of the config record and hand writes to the main loop through
//! [`config_interface::FEATURE_WRITES`].
//!
//! # Modules
//!
//! - [`descriptors`]: HID report descriptors per profile
//! - [`flash`]: Config sector driver ([`RpConfigFlash`])
//! - [`serial_input`]: UART input source ([`SerialInput`])
//! - [`usb_output`]: USB HID output ([`UsbHidOutput`])
//! - [`config_interface`]: Feature report handling for the config record
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)

#![no_std]

pub use link_core::{
    ConfigFlash, ConfigStore, Dispatcher, Flow, InputError, InputSource, LoadSource, OutputError,
    Port, Receiver, ReportSink,
};
pub use link_proto::Profile;

pub mod config_interface;
pub mod descriptors;
pub mod flash;
pub mod serial_input;
pub mod usb_output;

pub use config_interface::{
    apply_feature_write, configure_config_interface, publish_config, ConfigRequestHandler,
    FeatureWrite, FEATURE_WRITES,
};
pub use flash::RpConfigFlash;
pub use serial_input::SerialInput;
pub use usb_output::{
    configure_report_interface, discard_output_reports, ProfileReader, ProfileRequestHandler,
    UsbHidOutput, UsbStateHandler, USB_READY,
};
