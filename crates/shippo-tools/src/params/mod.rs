//! Typed tool inputs.
//!
//! Each tool decodes its arguments into one of these structs; the same struct drives the
//! advertised JSON Schema. Create/update inputs serialize back into the request body, so
//! absent optional fields are skipped rather than sent as `null`.

mod account;
mod fulfillment;
mod international;
mod shipping;

pub use account::*;
pub use fulfillment::*;
pub use international::*;
pub use shipping::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use shippo_client::ListParams;

/// How a tool renders its successful result: `json` for the pretty-printed remote
/// response, `markdown` for a human-oriented summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// The `format` argument shared by every tool.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub(crate) struct FormatArg {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
pub struct Paging {
    /// Number of results per page (1-100).
    #[schemars(range(min = 1, max = 100))]
    pub results: Option<u32>,
    /// Page number, starting at 1.
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
}

impl From<Paging> for ListParams {
    fn from(value: Paging) -> Self {
        ListParams::new(value.results, value.page)
    }
}

/// Tool that takes no arguments beyond `format`.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
pub struct NoArgs {}

/// A decimal quantity, accepted either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Decimal {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DistanceUnit {
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "yd")]
    Yards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum MassUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lb")]
    Pounds,
    #[serde(rename = "oz")]
    Ounces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LabelFileType {
    #[serde(rename = "PNG")]
    Png,
    #[serde(rename = "PNG_2.3x7.5")]
    Png2x7,
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "PDF_2.3x7.5")]
    Pdf2x7,
    #[serde(rename = "PDF_4x6")]
    Pdf4x6,
    #[serde(rename = "PDF_4x8")]
    Pdf4x8,
    #[serde(rename = "PDF_A4")]
    PdfA4,
    #[serde(rename = "PDF_A5")]
    PdfA5,
    #[serde(rename = "PDF_A6")]
    PdfA6,
    #[serde(rename = "ZPLII")]
    Zplii,
}

#[cfg(test)]
mod tests {
    use super::{Decimal, DistanceUnit, FormatArg, LabelFileType, OutputFormat, Paging};
    use serde_json::json;
    use shippo_client::ListParams;

    #[test]
    fn format_defaults_to_markdown() {
        let f: FormatArg = serde_json::from_value(json!({"results": 3})).expect("decode");
        assert_eq!(f.format, OutputFormat::Markdown);
        let f: FormatArg = serde_json::from_value(json!({"format": "json"})).expect("decode");
        assert_eq!(f.format, OutputFormat::Json);
    }

    #[test]
    fn unit_tokens_match_remote_spelling() {
        assert_eq!(serde_json::to_value(DistanceUnit::Inches).expect("ser"), json!("in"));
        assert_eq!(
            serde_json::to_value(LabelFileType::Pdf4x6).expect("ser"),
            json!("PDF_4x6")
        );
        assert!(serde_json::from_value::<DistanceUnit>(json!("parsec")).is_err());
    }

    #[test]
    fn decimals_keep_their_original_encoding() {
        let n: Decimal = serde_json::from_value(json!(10)).expect("number");
        let s: Decimal = serde_json::from_value(json!("10.5")).expect("string");
        assert_eq!(serde_json::to_value(&n).expect("ser"), json!(10));
        assert_eq!(serde_json::to_value(&s).expect("ser"), json!("10.5"));
    }

    #[test]
    fn paging_converts_to_list_params() {
        let p = Paging {
            results: Some(25),
            page: None,
        };
        assert_eq!(ListParams::from(p), ListParams::new(Some(25), None));
    }
}
