//! Export of booked meetings as a spreadsheet.
//!
//! The whole booking list is written at once into an xlsx workbook holding a
//! single "Booked Meetings" sheet with a `date`, `time`, `email` header row.

use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::info;

use crate::domain::models::Booking;
use crate::error::BookingError;

pub const EXPORT_FILENAME: &str = "booked_meetings.xlsx";
pub const EXPORT_SHEET_NAME: &str = "Booked Meetings";
pub const EXPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HEADER: [&str; 3] = ["date", "time", "email"];

/// A rendered export ready to be sent as a download
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub row_count: usize,
}

impl From<XlsxError> for BookingError {
    fn from(err: XlsxError) -> Self {
        BookingError::Export(err.to_string())
    }
}

#[derive(Clone, Default)]
pub struct ExportService {}

impl ExportService {
    pub fn new() -> Self {
        Self {}
    }

    pub fn export_bookings(&self, bookings: &[Booking]) -> Result<ExportedFile, BookingError> {
        info!("📄 EXPORT: Exporting {} booked meetings", bookings.len());

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(EXPORT_SHEET_NAME)?;

        for (col, title) in (0u16..).zip(HEADER) {
            sheet.write_string(0, col, title)?;
        }

        for (row, booking) in (1u32..).zip(bookings) {
            sheet.write_string(row, 0, booking.date.to_string())?;
            sheet.write_string(row, 1, booking.time.as_str())?;
            sheet.write_string(row, 2, booking.email.as_str())?;
        }

        let content = workbook.save_to_buffer()?;

        info!("✅ EXPORT: Wrote {} bytes", content.len());
        Ok(ExportedFile {
            filename: EXPORT_FILENAME.to_string(),
            content_type: EXPORT_CONTENT_TYPE.to_string(),
            content,
            row_count: bookings.len(),
        })
    }
}
