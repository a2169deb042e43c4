//! Plan document access
//!
//! Documents are handled as untyped JSON so that each plan is validated
//! only when it is reached. Earlier plans can therefore be printed before a
//! later malformed one is detected.

use serde_json::Value;

use crate::{Error, Result};

/// Parse the raw input text as a JSON document
pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Borrow the `plans` sequence from a parsed document
pub fn plans(doc: &Value) -> Result<&[Value]> {
    let object = doc.as_object().ok_or(Error::WrongType {
        field: "document",
        expected: "an object",
        plan: None,
    })?;

    let plans = object.get("plans").ok_or(Error::MissingKey {
        key: "plans",
        plan: None,
    })?;

    plans.as_array().map(Vec::as_slice).ok_or(Error::WrongType {
        field: "plans",
        expected: "an array",
        plan: None,
    })
}

/// The fields printed for one plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLine {
    /// 1-based position in the input
    pub position: usize,
    pub flight_class: String,
    /// Fee in its natural textual form ("450", "450.5")
    pub flight_fee: String,
    /// First entry of `highlights`
    pub highlight: String,
}

impl PlanLine {
    /// Extract the summary fields of the plan at `position`
    ///
    /// Fields are read in output order: class, fee, then first highlight.
    pub fn from_value(position: usize, value: &Value) -> Result<Self> {
        let plan = as_plan(position, value)?;

        let flight_class = required(plan, "flightClass", position)?
            .as_str()
            .ok_or(Error::WrongType {
                field: "flightClass",
                expected: "a string",
                plan: Some(position),
            })?
            .to_string();

        let flight_fee = render_scalar(required(plan, "flightFee", position)?).ok_or(
            Error::WrongType {
                field: "flightFee",
                expected: "a number or string",
                plan: Some(position),
            },
        )?;

        let highlights = required(plan, "highlights", position)?
            .as_array()
            .ok_or(Error::WrongType {
                field: "highlights",
                expected: "an array",
                plan: Some(position),
            })?;
        let highlight = highlights
            .first()
            .ok_or(Error::EmptyHighlights { plan: position })?
            .as_str()
            .ok_or(Error::WrongType {
                field: "highlights",
                expected: "an array of strings",
                plan: Some(position),
            })?
            .to_string();

        Ok(Self {
            position,
            flight_class,
            flight_fee,
            highlight,
        })
    }

    /// Render the summary line, fees prefixed with `currency`
    pub fn render(&self, currency: &str) -> String {
        format!(
            "Plan {} ({}): Flight Fee = {}{}, Highlight = {}",
            self.position, self.flight_class, currency, self.flight_fee, self.highlight
        )
    }
}

/// Optional cost and stay details of a plan
///
/// Every field is best-effort: absent or oddly shaped values are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanBreakdown {
    pub medical_fee: Option<String>,
    pub hotel_fee: Option<String>,
    pub total_amount: Option<String>,
    pub hotel_name: Option<String>,
    pub hotel_stars: Option<String>,
    pub duration: Option<String>,
}

impl PlanBreakdown {
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(render_scalar);

        Self {
            medical_fee: field("medicalFee"),
            hotel_fee: field("hotelFee"),
            total_amount: field("totalAmount"),
            hotel_name: field("hotelName"),
            hotel_stars: field("hotelStars"),
            duration: field("duration"),
        }
    }

    /// Render the indented detail lines, in a fixed order
    pub fn render(&self, currency: &str) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(fee) = &self.medical_fee {
            lines.push(format!("  Medical Fee = {}{}", currency, fee));
        }
        if let Some(fee) = &self.hotel_fee {
            lines.push(format!("  Hotel Fee = {}{}", currency, fee));
        }
        if let Some(total) = &self.total_amount {
            lines.push(format!("  Total = {}{}", currency, total));
        }
        match (&self.hotel_name, &self.hotel_stars) {
            (Some(name), Some(stars)) => lines.push(format!("  Hotel = {} ({}*)", name, stars)),
            (Some(name), None) => lines.push(format!("  Hotel = {}", name)),
            _ => {}
        }
        if let Some(duration) = &self.duration {
            lines.push(format!("  Duration = {}", duration));
        }

        lines
    }
}

fn as_plan(position: usize, value: &Value) -> Result<&serde_json::Map<String, Value>> {
    value.as_object().ok_or(Error::WrongType {
        field: "plan",
        expected: "an object",
        plan: Some(position),
    })
}

fn required<'a>(
    plan: &'a serde_json::Map<String, Value>,
    key: &'static str,
    position: usize,
) -> Result<&'a Value> {
    plan.get(key).ok_or(Error::MissingKey {
        key,
        plan: Some(position),
    })
}

/// Natural textual form of a number or string; `None` for anything else
fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
