//! Vendor HID interface for reading and writing the config record.
//!
//! Control requests are answered from USB interrupt context, which cannot
//! touch flash or the receiver. GET_REPORT is served from a snapshot the
//! main loop keeps current; SET_REPORT is queued for the main loop.

use core::cell::Cell;

use defmt::{info, warn};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_usb::class::hid::{HidBootProtocol, HidSubclass, HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::Builder;
use heapless::Vec;
use link_core::{ConfigFlash, FeatureOutcome, Receiver, ReportSink};
use link_proto::{Command, RECORD_SIZE};

use crate::descriptors;

/// A SET_REPORT waiting for the main loop.
pub struct FeatureWrite {
    /// Feature report id.
    pub report_id: u8,
    /// Report body, without the report id byte.
    pub data: Vec<u8, RECORD_SIZE>,
}

/// SET_REPORTs from the host, consumed by the main loop.
pub static FEATURE_WRITES: Channel<CriticalSectionRawMutex, FeatureWrite, 2> = Channel::new();

/// Redacted config record returned by GET_REPORT.
static CONFIG_SNAPSHOT: Mutex<CriticalSectionRawMutex, Cell<[u8; RECORD_SIZE]>> =
    Mutex::new(Cell::new([0; RECORD_SIZE]));

/// Make `report` the answer to the next GET_REPORT.
pub fn publish_config(report: [u8; RECORD_SIZE]) {
    CONFIG_SNAPSHOT.lock(|snapshot| snapshot.set(report));
}

/// Apply one queued SET_REPORT to the receiver.
pub fn apply_feature_write<F: ConfigFlash, S: ReportSink>(
    receiver: &mut Receiver<F, S>,
    write: &FeatureWrite,
) {
    match receiver.handle_feature_report(write.report_id, &write.data) {
        FeatureOutcome::ConfigWritten => publish_config(receiver.config_report()),
        FeatureOutcome::Command(Command::PairNewDevice) => {
            info!("pairing requested; this board has no Bluetooth radio");
        }
        FeatureOutcome::Command(Command::ForgetAllDevices) => {
            info!("forget-all requested; this board has no Bluetooth radio");
        }
        FeatureOutcome::Rejected => {}
    }
}

/// HID request handler for the config interface.
pub struct ConfigRequestHandler;

impl RequestHandler for ConfigRequestHandler {
    /// Every GET on this interface answers with the redacted config
    /// record, whatever report id the host asked for.
    fn get_report(&mut self, id: ReportId, buf: &mut [u8]) -> Option<usize> {
        let report_id = match id {
            ReportId::In(id) | ReportId::Out(id) | ReportId::Feature(id) => id,
        };
        let out = buf.get_mut(..RECORD_SIZE + 1)?;
        out[0] = report_id;
        out[1..].copy_from_slice(&CONFIG_SNAPSHOT.lock(Cell::get));
        Some(RECORD_SIZE + 1)
    }

    fn set_report(&mut self, id: ReportId, data: &[u8]) -> OutResponse {
        let ReportId::Feature(report_id) = id else {
            return OutResponse::Rejected;
        };

        // The data stage starts with the report id.
        let body = match data.split_first() {
            Some((&first, rest)) if first == report_id && rest.len() == RECORD_SIZE => rest,
            _ => data,
        };
        let Ok(data) = Vec::from_slice(body) else {
            warn!("feature report {} too long ({} bytes)", report_id, body.len());
            return OutResponse::Rejected;
        };

        match FEATURE_WRITES.try_send(FeatureWrite { report_id, data }) {
            Ok(()) => OutResponse::Accepted,
            Err(_) => {
                warn!("feature report {} dropped, previous one still pending", report_id);
                OutResponse::Rejected
            }
        }
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Add the config interface to the USB builder.
pub fn configure_config_interface<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
    handler: &'d mut ConfigRequestHandler,
) -> HidWriter<'d, Driver<'d, USB>, 8> {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: descriptors::CONFIG,
        request_handler: Some(handler),
        poll_ms: 1,
        max_packet_size: 8,
        hid_subclass: HidSubclass::No,
        hid_boot_protocol: HidBootProtocol::None,
    };

    HidWriter::new(builder, state, config)
}
