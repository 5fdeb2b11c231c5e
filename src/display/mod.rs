use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use num_traits::{Float, ToPrimitive};

use crate::infer::{BootstrapRun, PermutationRun};

fn fmt_value<F: Float + Display>(value: F) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}

impl<F> PermutationRun<F>
where
    F: Float + Display + ToPrimitive,
{
    /// Render the run as a summary table.
    pub fn display(&self) -> String {
        let p = self.p_value.to_f64().unwrap_or(f64::NAN);
        let verdict = if p < 0.001 {
            "🔴 Very strong evidence against H₀"
        } else if p < 0.05 {
            "🟠 Evidence against H₀"
        } else if p < 0.10 {
            "🟡 Weak evidence against H₀"
        } else {
            "🟢 Consistent with H₀"
        };

        let mut title_table = Table::new();
        title_table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .add_row(vec![Cell::new("One-Sided Permutation Test")
                .set_alignment(CellAlignment::Center)]);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Metric").set_alignment(CellAlignment::Center),
                Cell::new("Value").set_alignment(CellAlignment::Center),
                Cell::new("Notes").set_alignment(CellAlignment::Center),
            ]);

        table
            .add_row(vec![
                Cell::new("Observed statistic"),
                Cell::new(fmt_value(self.observed)).set_alignment(CellAlignment::Right),
                Cell::new("empirical reference"),
            ])
            .add_row(vec![
                Cell::new("p-value"),
                Cell::new(if p < 0.0001 && p > 0.0 {
                    "< 0.0001".to_string()
                } else {
                    fmt_value(self.p_value)
                })
                .set_alignment(CellAlignment::Right),
                Cell::new(verdict),
            ])
            .add_row(vec![
                Cell::new("Null spread"),
                Cell::new(format!(
                    "[{}, {}]",
                    fmt_value(self.null_interval.lower),
                    fmt_value(self.null_interval.upper)
                ))
                .set_alignment(CellAlignment::Right),
                Cell::new("percentiles of the null distribution, not a CI"),
            ])
            .add_row(vec![
                Cell::new("Replicates"),
                Cell::new(self.replicates.len()).set_alignment(CellAlignment::Right),
                Cell::new("permutations drawn"),
            ]);

        format!("{title_table}\n{table}")
    }
}

impl<F> Display for PermutationRun<F>
where
    F: Float + Display + ToPrimitive,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl<F> BootstrapRun<F>
where
    F: Float + Display,
{
    /// Render the run as a summary table.
    pub fn display(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Metric").set_alignment(CellAlignment::Center),
                Cell::new("Value").set_alignment(CellAlignment::Center),
            ]);

        let level = self
            .interval
            .confidence
            .map_or_else(|| "interval".to_string(), |c| format!("{:.0}% interval", c * 100.0));

        table
            .add_row(vec![
                Cell::new(level),
                Cell::new(format!(
                    "[{}, {}]",
                    fmt_value(self.interval.lower),
                    fmt_value(self.interval.upper)
                ))
                .set_alignment(CellAlignment::Right),
            ])
            .add_row(vec![
                Cell::new("Replicates"),
                Cell::new(self.replicates.len()).set_alignment(CellAlignment::Right),
            ]);

        format!("{table}")
    }
}

impl<F> Display for BootstrapRun<F>
where
    F: Float + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
