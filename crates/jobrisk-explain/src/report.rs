//! Presentation of a scored submission.

use crate::aggregate::FactorContribution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the bar column in the ASCII rendering.
const BAR_WIDTH: usize = 24;

/// A scored submission ready for presentation: the calibrated probability
/// and the ordered per-variable contribution breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionReport {
    /// Predicted probability of unemployment, in `[0, 1]`.
    pub probability: f64,

    /// Bias (base-rate) term of the decomposition, in log-odds units.
    pub bias: f64,

    /// Per-variable contributions, sorted ascending (most risk-decreasing
    /// first, most risk-increasing last).
    pub factors: Vec<FactorContribution>,
}

impl AttributionReport {
    /// Create a report from scoring output.
    pub const fn new(probability: f64, bias: f64, factors: Vec<FactorContribution>) -> Self {
        Self {
            probability,
            bias,
            factors,
        }
    }

    /// The probability formatted as a percentage.
    pub fn risk_percentage(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }

    fn bar(&self, contribution: f64) -> String {
        let max = self
            .factors
            .iter()
            .map(|f| f.contribution.abs())
            .fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return String::new();
        }
        let length = ((contribution.abs() / max) * BAR_WIDTH as f64).round() as usize;
        let glyph = if contribution < 0.0 { '-' } else { '+' };
        std::iter::repeat_n(glyph, length).collect()
    }

    /// Format as an ASCII table with a horizontal bar chart for terminal
    /// display. Bars pointing `+` increase the predicted risk, `-` decrease
    /// it; bar length is relative to the strongest factor.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nUnemployment Risk Assessment\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!("Predicted risk: {}\n", self.risk_percentage()));
        output.push('\n');

        output.push_str(&format!(
            "{:<28} {:>12}  {}\n",
            "Factor", "Contribution", "Effect"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for factor in &self.factors {
            output.push_str(&format!(
                "{:<28} {:>+12.4}  {}\n",
                factor.label,
                factor.contribution,
                self.bar(factor.contribution)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!("{:<28} {:>+12.4}\n", "Baseline (bias)", self.bias));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(
            "Positive contributions increase the predicted risk, negative ones\n\
             decrease it. Values are in log-odds units.\n",
        );

        output
    }

    /// Format as Markdown for documentation or web display.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Unemployment Risk Assessment\n\n");
        output.push_str(&format!(
            "**Predicted risk:** {}\n\n",
            self.risk_percentage()
        ));

        output.push_str("| Factor | Contribution |\n");
        output.push_str("|--------|-------------:|\n");
        for factor in &self.factors {
            output.push_str(&format!(
                "| {} | {:+.4} |\n",
                factor.label, factor.contribution
            ));
        }
        output.push_str(&format!("| _Baseline (bias)_ | {:+.4} |\n", self.bias));

        output.push('\n');
        output.push_str(
            "Positive contributions increase the predicted risk, negative ones \
             decrease it.\n",
        );

        output
    }
}

impl fmt::Display for AttributionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Predicted risk: {}", self.risk_percentage())?;
        for factor in &self.factors {
            writeln!(f, "  {factor}")?;
        }
        Ok(())
    }
}
