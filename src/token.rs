//! CSRF token discovery from served page markup.
//!
//! The console backend embeds the per-session token in a named `<meta>` tag.
//! [`scan_meta_token`] extracts it without pulling in an HTML parser, and
//! [`TokenSlot`] caches the result so the request hook can read it on every
//! dispatch. Absence of the tag is a valid, non-exceptional outcome.

// self
use crate::_prelude::*;

/// Extracts the `content` attribute of the first `<meta name="...">` tag matching
/// `meta_name`, or the empty string when no such tag (or attribute) exists.
///
/// Attribute order within the tag does not matter; single- and double-quoted
/// values are both accepted. The match on `meta_name` is exact.
pub fn scan_meta_token(document: &str, meta_name: &str) -> String {
	let lower = document.to_ascii_lowercase();
	let mut from = 0;

	while let Some(found) = lower[from..].find("<meta") {
		let start = from + found;
		let rest = &document[start + "<meta".len()..];

		// `<metadata>` and friends are not meta tags.
		if !rest.starts_with(|c: char| c.is_ascii_whitespace()) {
			from = start + "<meta".len();

			continue;
		}

		let Some(end) = rest.find('>') else { break };
		let tag = &rest[..end];

		if attribute(tag, "name").is_some_and(|value| value == meta_name) {
			return attribute(tag, "content").unwrap_or_default().to_owned();
		}

		from = start + "<meta".len() + end + 1;
	}

	String::new()
}

/// Finds the value of `name` inside a tag body, honoring quoting and ignoring case
/// in the attribute name.
fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
	let lower = tag.to_ascii_lowercase();
	let mut from = 0;

	while let Some(found) = lower[from..].find(name) {
		let at = from + found;
		let boundary =
			tag[..at].chars().next_back().is_none_or(|c| c.is_ascii_whitespace() || c == '/');

		from = at + name.len();

		if !boundary {
			continue;
		}

		let rest = tag[at + name.len()..].trim_start();
		let Some(rest) = rest.strip_prefix('=') else { continue };
		let rest = rest.trim_start();

		return Some(match rest.chars().next() {
			Some(quote @ ('"' | '\'')) => {
				let value = &rest[1..];

				value.find(quote).map_or(value, |close| &value[..close])
			},
			_ => rest.split_ascii_whitespace().next().unwrap_or_default(),
		});
	}

	None
}

/// Thread-safe cell caching the most recently scanned token.
///
/// The session stores into the slot when it adopts served markup and the request
/// hook reads from it on every dispatch; clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct TokenSlot(Arc<Mutex<Option<String>>>);
impl TokenSlot {
	/// Caches a freshly scanned token; an empty value clears the slot instead.
	pub fn store(&self, token: impl Into<String>) {
		let token = token.into();

		*self.0.lock() = if token.is_empty() { None } else { Some(token) };
	}

	/// Returns a clone of the cached token, if any.
	pub fn read(&self) -> Option<String> {
		self.0.lock().clone()
	}

	/// Drops the cached token.
	pub fn clear(&self) {
		*self.0.lock() = None;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
	<meta charset="utf-8">
	<meta name="csrf-token" content="IjRmZDQ.aBcD-eF">
	<title>Console</title>
</head>
<body></body>
</html>"#;

	#[test]
	fn scan_finds_the_named_meta_tag() {
		assert_eq!(scan_meta_token(PAGE, "csrf-token"), "IjRmZDQ.aBcD-eF");
	}

	#[test]
	fn scan_accepts_reversed_attribute_order_and_single_quotes() {
		let page = "<meta content='tok-1' name='csrf-token'>";

		assert_eq!(scan_meta_token(page, "csrf-token"), "tok-1");
	}

	#[test]
	fn scan_ignores_case_of_tag_and_attribute_names() {
		let page = r#"<META NAME="csrf-token" CONTENT="tok-2">"#;

		assert_eq!(scan_meta_token(page, "csrf-token"), "tok-2");
	}

	#[test]
	fn absence_is_the_empty_string() {
		assert_eq!(scan_meta_token(PAGE, "api-token"), "");
		assert_eq!(scan_meta_token("<p>no metadata here</p>", "csrf-token"), "");
		assert_eq!(scan_meta_token("", "csrf-token"), "");
	}

	#[test]
	fn missing_content_attribute_is_the_empty_string() {
		assert_eq!(scan_meta_token(r#"<meta name="csrf-token">"#, "csrf-token"), "");
	}

	#[test]
	fn metadata_tags_are_not_meta_tags() {
		let page = r#"<metadata name="csrf-token" content="nope"></metadata>"#;

		assert_eq!(scan_meta_token(page, "csrf-token"), "");
	}

	#[test]
	fn first_matching_tag_wins() {
		let page = r#"<meta name="csrf-token" content="first"><meta name="csrf-token" content="second">"#;

		assert_eq!(scan_meta_token(page, "csrf-token"), "first");
	}

	#[test]
	fn slot_shares_state_across_clones() {
		let slot = TokenSlot::default();
		let view = slot.clone();

		slot.store("tok-3");

		assert_eq!(view.read().as_deref(), Some("tok-3"));

		view.clear();

		assert_eq!(slot.read(), None);
	}

	#[test]
	fn storing_an_empty_token_clears_the_slot() {
		let slot = TokenSlot::default();

		slot.store("tok-4");
		slot.store("");

		assert_eq!(slot.read(), None);
	}
}
