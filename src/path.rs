//! Dotted property paths.
//!
//! `with`/`without` overrides address properties by path: a plain key for a
//! top-level property, or dot-separated segments for a nested one
//! (`"address.city"`). The applier walks objects segment by segment,
//! allocating intermediate objects on assignment and silently ignoring
//! removals of paths that do not exist.

use crate::value::{ObjectValue, Value};

/// A parsed dotted property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
	segments: Vec<String>,
}

impl PropertyPath {
	/// Parses a path, splitting on `.` and discarding empty segments.
	pub fn parse(path: &str) -> Self {
		let segments = path
			.split('.')
			.filter(|segment| !segment.is_empty())
			.map(str::to_string)
			.collect();
		Self { segments }
	}

	/// Returns the path segments in order.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Returns true if the path has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Sets the addressed leaf to `value`, allocating missing intermediate
	/// objects. An intermediate that exists but is not an object is replaced
	/// by a fresh object.
	pub fn set(&self, target: &mut ObjectValue, value: Value) {
		set_in(target, &self.segments, value);
	}

	/// Removes the addressed leaf. Missing paths are a no-op.
	pub fn remove(&self, target: &mut ObjectValue) {
		remove_in(target, &self.segments);
	}
}

impl From<&str> for PropertyPath {
	fn from(path: &str) -> Self {
		Self::parse(path)
	}
}

fn set_in(object: &mut ObjectValue, segments: &[String], value: Value) {
	match segments {
		[] => {}
		[leaf] => {
			object.insert(leaf.clone(), value);
		}
		[head, rest @ ..] => {
			if !matches!(object.get(head), Some(Value::Object(_))) {
				object.insert(head.clone(), Value::Object(ObjectValue::new()));
			}
			if let Some(Value::Object(inner)) = object.get_mut(head) {
				set_in(inner, rest, value);
			}
		}
	}
}

fn remove_in(object: &mut ObjectValue, segments: &[String]) {
	match segments {
		[] => {}
		[leaf] => {
			object.remove(leaf);
		}
		[head, rest @ ..] => {
			if let Some(Value::Object(inner)) = object.get_mut(head) {
				remove_in(inner, rest);
			}
		}
	}
}
