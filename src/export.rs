//! CSV export assembly for console tables.
//!
//! Records are serialized field-by-field in their document order, wrapped into a
//! byte-order-marked, percent-encoded `data:` URI, and handed to the UI bridge as
//! exactly one download. The transient-element mechanics of an actual browser
//! download belong to the bridge implementation, not to this module.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value};
// self
use crate::ext::BrowserBridge;

/// One exported row: field name to value, iterated in document order.
pub type Record = Map<String, Value>;

/// UTF-8 byte-order mark prefixed so spreadsheet imports detect the encoding.
const BOM: char = '\u{feff}';

/// Characters kept verbatim by `encodeURIComponent`; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Serializes records to CSV text: one line per record, every field
/// double-quoted with internal quotes escaped by doubling.
pub fn csv_lines(records: &[Record]) -> String {
	records.iter().map(csv_line).collect::<Vec<_>>().join("\n")
}

/// Builds the downloadable payload: the CSV text behind a byte-order mark.
pub fn csv_payload(records: &[Record]) -> String {
	format!("{BOM}{}", csv_lines(records))
}

/// Wraps the payload into a percent-encoded `data:text/csv` URI.
pub fn csv_data_uri(records: &[Record]) -> String {
	format!("data:text/csv;charset=utf-8,{}", utf8_percent_encode(&csv_payload(records), COMPONENT))
}

/// Serializes the records and triggers exactly one download under `filename`.
pub fn download_csv<B>(bridge: &B, records: &[Record], filename: &str)
where
	B: ?Sized + BrowserBridge,
{
	bridge.download(filename, &csv_data_uri(records));
}

fn csv_line(record: &Record) -> String {
	record.values().map(csv_field).collect::<Vec<_>>().join(",")
}

fn csv_field(value: &Value) -> String {
	format!("\"{}\"", render_scalar(value).replace('"', "\"\""))
}

/// Strings export verbatim, null as the empty field, everything else through its
/// JSON display form.
fn render_scalar(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::ext::{RecordingBridge, UiEvent};

	fn records(rows: Value) -> Vec<Record> {
		rows.as_array()
			.expect("Export fixture should be a JSON array.")
			.iter()
			.map(|row| row.as_object().expect("Export fixture rows should be objects.").clone())
			.collect()
	}

	#[test]
	fn fields_are_quoted_and_internal_quotes_doubled() {
		let rows = records(json!([{"a": "1", "b": "x\"y"}, {"a": "2", "b": "z"}]));

		assert_eq!(csv_lines(&rows), "\"1\",\"x\"\"y\"\n\"2\",\"z\"");
	}

	#[test]
	fn payload_is_byte_order_marked_and_uri_percent_encoded() {
		let rows = records(json!([{"a": "1", "b": "x\"y"}, {"a": "2", "b": "z"}]));

		assert!(csv_payload(&rows).starts_with('\u{feff}'));
		assert_eq!(
			csv_data_uri(&rows),
			"data:text/csv;charset=utf-8,%EF%BB%BF%221%22%2C%22x%22%22y%22%0A%222%22%2C%22z%22",
		);
	}

	#[test]
	fn fields_follow_document_order_not_alphabetical_order() {
		let rows = records(json!([{"z": "last-key", "a": "first-key"}]));

		assert_eq!(csv_lines(&rows), "\"last-key\",\"first-key\"");
	}

	#[test]
	fn scalars_and_nulls_render_as_plain_fields() {
		let rows = records(json!([{"count": 42, "ratio": 0.5, "ok": true, "note": null}]));

		assert_eq!(csv_lines(&rows), "\"42\",\"0.5\",\"true\",\"\"");
	}

	#[test]
	fn export_triggers_exactly_one_download_with_the_given_filename() {
		let bridge = RecordingBridge::default();
		let rows = records(json!([{"a": "1", "b": "x\"y"}, {"a": "2", "b": "z"}]));

		download_csv(&bridge, &rows, "request_logs.csv");

		let events = bridge.events();

		assert_eq!(events.len(), 1);

		let UiEvent::Downloaded { filename, href } = &events[0] else {
			panic!("Export should record a download event.");
		};

		assert_eq!(filename, "request_logs.csv");
		assert!(href.starts_with("data:text/csv;charset=utf-8,%EF%BB%BF"));
	}

	#[test]
	fn empty_exports_still_carry_the_byte_order_mark() {
		assert_eq!(csv_payload(&[]), "\u{feff}");
		assert_eq!(csv_data_uri(&[]), "data:text/csv;charset=utf-8,%EF%BB%BF");
	}
}
