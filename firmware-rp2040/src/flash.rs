//! Config region driver on the RP2040's QSPI flash.
//!
//! The region is one 4 KiB sector, 16 KiB below the end of flash, away
//! from the program image.

use embassy_rp::flash::{Blocking, Error as FlashError, Flash};
use embassy_rp::peripherals::FLASH;
use link_core::{ConfigFlash, FLASH_PAGE_SIZE, FLASH_SECTOR_SIZE};

/// Size of the Pico's flash chip.
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Start of the config sector, relative to the start of flash.
pub const CONFIG_OFFSET: u32 = (FLASH_SIZE - 16 * 1024) as u32;

/// [`ConfigFlash`] over the blocking embassy-rp flash driver.
pub struct RpConfigFlash<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
}

impl<'d> RpConfigFlash<'d> {
    /// Wrap the flash driver.
    #[must_use]
    pub fn new(flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>) -> Self {
        Self { flash }
    }
}

impl ConfigFlash for RpConfigFlash<'_> {
    type Error = FlashError;

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.flash.blocking_read(CONFIG_OFFSET, buf)
    }

    fn erase(&mut self) -> Result<(), Self::Error> {
        self.flash
            .blocking_erase(CONFIG_OFFSET, CONFIG_OFFSET + FLASH_SECTOR_SIZE as u32)
    }

    fn program(&mut self, page: &[u8; FLASH_PAGE_SIZE]) -> Result<(), Self::Error> {
        self.flash.blocking_write(CONFIG_OFFSET, page)
    }
}
