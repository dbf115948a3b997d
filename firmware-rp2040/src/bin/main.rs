#![no_std]
#![no_main]

use defmt::{debug, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_rp::bind_interrupts;
use embassy_rp::flash::Flash;
use embassy_rp::peripherals::{UART1, USB};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig};
use embassy_rp::usb::Driver;
use embassy_time::{Duration, Ticker, Timer};
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use hid_receiver_rp2040::{
    apply_feature_write, configure_config_interface, configure_report_interface,
    discard_output_reports, publish_config, ConfigRequestHandler, ConfigStore, Dispatcher, Flow, InputSource,
    Port, ProfileReader, ProfileRequestHandler, Receiver, RpConfigFlash, SerialInput,
    UsbHidOutput, UsbStateHandler, FEATURE_WRITES,
};
use link_core::receiver::INPUT_CHUNK_SIZE;
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// UART ring buffers.
static UART_TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static UART_RX_BUF: StaticCell<[u8; 1024]> = StaticCell::new();

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 128]> = StaticCell::new();

/// HID state.
static REPORT_HID_STATE: StaticCell<State> = StaticCell::new();
static CONFIG_HID_STATE: StaticCell<State> = StaticCell::new();

static USB_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();
static PROFILE_HANDLER: StaticCell<ProfileRequestHandler> = StaticCell::new();
static CONFIG_HANDLER: StaticCell<ConfigRequestHandler> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("HID receiver starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Config ---
    let store = ConfigStore::load(RpConfigFlash::new(Flash::new_blocking(p.FLASH)));
    let profile = store.profile();
    info!(
        "config from {}: profile {}, flags {=u8:#x}",
        store.source(),
        profile,
        store.record().flags.0
    );
    publish_config(store.config_report());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 921_600;

    let uart = BufferedUart::new(
        p.UART1,
        p.PIN_4, // TX
        p.PIN_5, // RX
        Irqs,
        UART_TX_BUF.init([0; 16]),
        UART_RX_BUF.init([0; 1024]),
        uart_config,
    );
    let (_tx, rx) = uart.split();
    let mut serial = SerialInput::new(rx, Port::Serial);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let (vid, pid) = profile.usb_ids();
    let mut usb_config = UsbConfig::new(vid, pid);
    usb_config.manufacturer = Some("Open HID Receiver");
    usb_config.product = Some("Serial HID Receiver");
    usb_config.serial_number = Some("001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        MSOS_DESCRIPTOR.init([0; 256]),
        CONTROL_BUF.init([0; 128]),
    );
    builder.handler(USB_HANDLER.init(UsbStateHandler::new()));

    let (report_writer, report_reader) = configure_report_interface(
        &mut builder,
        REPORT_HID_STATE.init(State::new()),
        PROFILE_HANDLER.init(ProfileRequestHandler),
        profile,
    );
    let _config_writer = configure_config_interface(
        &mut builder,
        CONFIG_HID_STATE.init(State::new()),
        CONFIG_HANDLER.init(ConfigRequestHandler),
    );

    let usb_device = builder.build();
    spawner.spawn(usb_task(usb_device).unwrap());
    if let Some(reader) = report_reader {
        spawner.spawn(output_report_task(reader).unwrap());
    }

    let sink = UsbHidOutput::new(report_writer);
    let mut receiver = Receiver::new(Dispatcher::new(store, sink));

    info!("HID receiver initialized as {}, waiting for frames...", profile);

    let mut ticker = Ticker::every(Duration::from_millis(1));
    let mut buf = [0u8; INPUT_CHUNK_SIZE];

    loop {
        // Only the waits race; bytes are handled after select3 returns.
        let event = select3(serial.receive(&mut buf), FEATURE_WRITES.receive(), ticker.next()).await;

        let flow = match event {
            Either3::First(Ok(len)) => receiver.on_bytes(serial.port(), &buf[..len]).await,
            Either3::First(Err(e)) => {
                warn!("UART input error: {:?}", e);
                Flow::Continue
            }
            Either3::Second(write) => {
                apply_feature_write(&mut receiver, &write);
                Flow::Continue
            }
            Either3::Third(()) => Flow::Continue,
        };

        if let Flow::Restart(next) = flow {
            info!("profile changed to {}, restarting", next);
            // Let the log drain before the reset.
            Timer::after_millis(50).await;
            cortex_m::peripheral::SCB::sys_reset();
        }

        if let Err(e) = receiver.service_queue().await {
            debug!("queued report not sent: {:?}", e);
        }
    }
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Output report task - drains host-to-device reports on the OUT endpoint.
#[embassy_executor::task]
async fn output_report_task(reader: ProfileReader<'static>) {
    discard_output_reports(reader).await
}
