//! Fee report formatting and printing

use std::io::{Read, Write};

use serde_json::Value;

use crate::config::Config;
use crate::plan::{self, PlanBreakdown, PlanLine};
use crate::Result;

/// A fee summary over the plans of one document
pub struct FeeReport<'a> {
    plans: &'a [Value],
    config: &'a Config,
    breakdown: bool,
}

impl<'a> FeeReport<'a> {
    /// Create a report over a parsed document
    ///
    /// Fails before anything is written if the document has no usable
    /// `plans` sequence.
    pub fn new(doc: &'a Value, config: &'a Config) -> Result<Self> {
        let plans = plan::plans(doc)?;
        tracing::debug!(plans = plans.len(), "Loaded plans document");

        Ok(Self {
            plans,
            config,
            breakdown: false,
        })
    }

    /// Also print cost and stay details under each plan
    pub fn with_breakdown(mut self, breakdown: bool) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// The header line, e.g. `=== Beijing->New York Flight Fees ===`
    pub fn header(&self) -> String {
        format!(
            "=== {}->{} Flight Fees ===",
            self.config.route.origin, self.config.route.destination
        )
    }

    /// Write the header and one line per plan
    ///
    /// Each plan is validated only when reached, and every line is flushed
    /// as soon as it is written, so a failing plan leaves the preceding
    /// output in place. Returns the number of plan lines written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        let currency = &self.config.output.currency_symbol;

        writeln!(out, "{}", self.header())?;
        out.flush()?;

        for (i, value) in self.plans.iter().enumerate() {
            let line = PlanLine::from_value(i + 1, value)?;
            tracing::debug!(position = line.position, class = %line.flight_class, "Formatted plan");

            writeln!(out, "{}", line.render(currency))?;
            if self.breakdown {
                for detail in PlanBreakdown::from_value(value).render(currency) {
                    writeln!(out, "{}", detail)?;
                }
            }
            out.flush()?;
        }

        Ok(self.plans.len())
    }
}

/// Read a whole document from `input` and write its fee report to `out`
pub fn summarize<R: Read, W: Write>(
    mut input: R,
    out: &mut W,
    config: &Config,
    breakdown: bool,
) -> Result<usize> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    tracing::debug!(bytes = text.len(), "Read input");

    let doc = plan::parse_document(&text)?;
    FeeReport::new(&doc, config)?
        .with_breakdown(breakdown)
        .write_to(out)
}
