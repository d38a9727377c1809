//! Terminal rendering for selector simulations, picker options and config.

use console::style;
use product_list_commerce::{Modality, PickerOption, ProductListConfig};

use crate::commands::simulate::StepReport;

const STEP_WIDTHS: [usize; 5] = [14, 12, 8, 6, 6];
const STEP_HEADINGS: [&str; 5] = ["STEP", "MODALITY", "DISPLAY", "FOCUS", "COMMIT"];

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print the step table of a simulation and the modality it ended in.
    pub fn simulation(&self, reports: &[StepReport], modality: Modality) {
        println!("\n{}", style("Quantity selector").bold().underlined());
        println!("  {}: {}", style("modality").dim(), modality_badge(modality));
        println!("  {}", pad_row(&STEP_HEADINGS));
        for report in reports {
            println!("  {}", step_row(report));
        }
    }

    /// Print the picker labels for a ceiling.
    pub fn picker_options(&self, max_value: u32, options: &[PickerOption]) {
        println!(
            "\n{}",
            style(format!("Picker options (ceiling {})", max_value))
                .bold()
                .underlined()
        );
        println!("{} {}", style("ℹ").blue(), option_labels(options));
    }

    /// Print the settings a config file resolves to.
    pub fn config_summary(&self, path: &str, config: &ProductListConfig) {
        println!("{} {} is valid", style("✓").green(), path);
        for (key, value) in config_rows(config) {
            println!("  {}: {}", style(key).dim(), value);
        }
    }
}

/// Colored modality name.
pub fn modality_badge(modality: Modality) -> String {
    match modality {
        Modality::Enumerated => style(modality.as_str()).cyan().to_string(),
        Modality::FreeText => style(modality.as_str()).magenta().to_string(),
    }
}

/// One simulation step as a padded table row.
pub fn step_row(report: &StepReport) -> String {
    let display = format!("{:?}", report.display_text);
    let committed = report
        .committed
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());
    pad_row(&[
        &report.step,
        report.modality.as_str(),
        &display,
        if report.focused { "yes" } else { "no" },
        &committed,
    ])
}

/// Picker labels in order, e.g. `0 1 2 ... 9 10+`.
pub fn option_labels(options: &[PickerOption]) -> String {
    options
        .iter()
        .map(|o| o.label.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn config_rows(config: &ProductListConfig) -> Vec<(&'static str, String)> {
    let manual_price = if config.manual_price.enabled {
        "enabled"
    } else {
        "disabled"
    };
    vec![
        ("manual price", manual_price.to_string()),
        ("currency", config.manual_price.currency.code().to_string()),
        ("css namespace", config.css_namespace.clone()),
        ("message overrides", config.messages.len().to_string()),
        ("log level", config.logging.level.clone()),
    ]
}

fn pad_row(cols: &[&str]) -> String {
    cols.iter()
        .zip(STEP_WIDTHS.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
