//! USB HID report output for the active profile.

use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{
    HidReader, HidReaderWriter, HidWriter, ReportId, RequestHandler, State,
};
use embassy_usb::control::OutResponse;
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Handler};
use link_core::{OutgoingReport, OutputError, ReportSink};
use link_proto::{Profile, MAX_REPORT_LEN};
use portable_atomic::{AtomicBool, Ordering};

use crate::descriptors;

/// Largest report on the wire: report id byte plus payload.
pub const REPORT_BUF_LEN: usize = MAX_REPORT_LEN + 1;

/// Largest host-to-device report on the OUT endpoint.
pub const OUT_REPORT_LEN: usize = 64;

/// Host-to-device half of the profile interface, present on profiles with
/// an OUT endpoint.
pub type ProfileReader<'d> = HidReader<'d, Driver<'d, USB>, OUT_REPORT_LEN>;

/// Set while the device is configured by the host and not suspended.
pub static USB_READY: AtomicBool = AtomicBool::new(false);

/// Tracks enumeration and suspend events into [`USB_READY`].
#[derive(Default)]
pub struct UsbStateHandler {
    configured: bool,
    suspended: bool,
}

impl UsbStateHandler {
    /// Create a handler for a device that has not enumerated yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            configured: false,
            suspended: false,
        }
    }

    fn publish(&self) {
        USB_READY.store(self.configured && !self.suspended, Ordering::Release);
    }
}

impl Handler for UsbStateHandler {
    fn enabled(&mut self, enabled: bool) {
        if !enabled {
            self.configured = false;
            self.suspended = false;
        }
        self.publish();
    }

    fn reset(&mut self) {
        self.configured = false;
        self.publish();
    }

    fn configured(&mut self, configured: bool) {
        defmt::info!("USB configured: {}", configured);
        self.configured = configured;
        self.publish();
    }

    fn suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
        self.publish();
    }
}

/// USB HID report output.
///
/// Wraps the embassy-usb HID writer of the profile interface.
pub struct UsbHidOutput<'d> {
    writer: HidWriter<'d, Driver<'d, USB>, REPORT_BUF_LEN>,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(writer: HidWriter<'d, Driver<'d, USB>, REPORT_BUF_LEN>) -> Self {
        Self { writer }
    }
}

impl ReportSink for UsbHidOutput<'_> {
    fn is_ready(&self) -> bool {
        USB_READY.load(Ordering::Acquire)
    }

    async fn send(&mut self, report: &OutgoingReport) -> Result<(), OutputError> {
        let mut buf = [0u8; REPORT_BUF_LEN];
        let len = report.write_wire(&mut buf).ok_or(OutputError::Io)?;
        self.writer.write(&buf[..len]).await.map_err(|e| match e {
            EndpointError::Disabled => OutputError::NotReady,
            EndpointError::BufferOverflow => OutputError::Io,
        })
    }
}

/// HID request handler for the profile interface.
///
/// Output reports (keyboard LEDs, rumble) are accepted and discarded.
pub struct ProfileRequestHandler;

impl RequestHandler for ProfileRequestHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, id: ReportId, data: &[u8]) -> OutResponse {
        defmt::trace!("ignoring host report {:?} ({} bytes)", id, data.len());
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Drain the OUT endpoint so the host never sees it stall.
pub async fn discard_output_reports(reader: ProfileReader<'_>) -> ! {
    reader.run(false, &mut ProfileRequestHandler).await
}

/// Add the profile's HID interface to the USB builder.
///
/// Returns the HID writer for use by the application, and the reader for
/// profiles with an OUT endpoint.
pub fn configure_report_interface<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
    handler: &'d mut ProfileRequestHandler,
    profile: Profile,
) -> (
    HidWriter<'d, Driver<'d, USB>, REPORT_BUF_LEN>,
    Option<ProfileReader<'d>>,
) {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: descriptors::report_descriptor(profile),
        request_handler: Some(handler),
        poll_ms: 1,
        max_packet_size: 64,
        hid_subclass: descriptors::hid_subclass(profile),
        hid_boot_protocol: descriptors::boot_protocol(profile),
    };

    if profile.has_out_endpoint() {
        let (reader, writer) =
            HidReaderWriter::<_, OUT_REPORT_LEN, REPORT_BUF_LEN>::new(builder, state, config)
                .split();
        (writer, Some(reader))
    } else {
        (HidWriter::new(builder, state, config), None)
    }
}
