use std::fmt;

use serde::{Deserialize, Serialize};

/// The two corpora this system searches. The authoritative list lives in the
/// relational store; this enum is the closed set the search pipeline dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LawCode {
	#[serde(rename = "CIVIL_CODE")]
	Civil,
	#[serde(rename = "CRIMINAL_CODE")]
	Criminal,
}
impl LawCode {
	pub const ALL: [Self; 2] = [Self::Civil, Self::Criminal];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Civil => "CIVIL_CODE",
			Self::Criminal => "CRIMINAL_CODE",
		}
	}

	pub fn name_ko(self) -> &'static str {
		match self {
			Self::Civil => "민법",
			Self::Criminal => "형법",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"CIVIL_CODE" => Some(Self::Civil),
			"CRIMINAL_CODE" => Some(Self::Criminal),
			_ => None,
		}
	}
}
impl fmt::Display for LawCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
