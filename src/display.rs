//! Human-readable display formatting for console tables.
//!
//! Both helpers degrade to a placeholder instead of failing: missing input is a
//! normal state for freshly created log rows, not an error.

// crates.io
use time::{
	OffsetDateTime, PrimitiveDateTime,
	format_description::{BorrowedFormatItem, well_known::Rfc3339},
	macros::format_description,
};

/// Placeholder rendered for values the backend did not supply.
pub const PLACEHOLDER: &str = "-";
/// Marker rendered when a non-empty input defeats every known date shape.
pub const INVALID_DATE: &str = "invalid date";

/// Wire and display shape of console timestamps.
const TABLE_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Epoch values at or above this magnitude are read as milliseconds.
const EPOCH_MILLIS_FLOOR: i64 = 100_000_000_000;

/// Renders a date-like value as `YYYY-MM-DD HH:MM:SS`.
///
/// Missing or blank input yields [`PLACEHOLDER`]. Non-empty input is handed to
/// the parser cascade (RFC 3339, the table shape above, integer Unix epochs in
/// seconds or milliseconds); whatever survives none of them renders as
/// [`INVALID_DATE`] with no further validation.
pub fn timestamp(value: Option<&str>) -> String {
	let Some(raw) = value else { return PLACEHOLDER.into() };
	let raw = raw.trim();

	if raw.is_empty() {
		return PLACEHOLDER.into();
	}

	parse_timestamp(raw).map_or_else(|| INVALID_DATE.into(), render_timestamp)
}

/// Renders a millisecond duration to two decimal places with a `ms` suffix.
///
/// Missing input yields [`PLACEHOLDER`].
pub fn millis(value: Option<f64>) -> String {
	value.map_or_else(|| PLACEHOLDER.into(), |ms| format!("{ms:.2} ms"))
}

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc3339) {
		return Some(moment);
	}
	if let Ok(naive) = PrimitiveDateTime::parse(raw, TABLE_FORMAT) {
		return Some(naive.assume_utc());
	}
	if let Ok(epoch) = raw.parse::<i64>() {
		let moment = if epoch.abs() >= EPOCH_MILLIS_FLOOR {
			OffsetDateTime::from_unix_timestamp_nanos(i128::from(epoch) * 1_000_000)
		} else {
			OffsetDateTime::from_unix_timestamp(epoch)
		};

		return moment.ok();
	}

	None
}

fn render_timestamp(moment: OffsetDateTime) -> String {
	moment.format(TABLE_FORMAT).unwrap_or_else(|_| INVALID_DATE.into())
}
