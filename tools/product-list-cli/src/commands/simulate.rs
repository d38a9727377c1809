//! Replay scripted interactions against the quantity selector.

use anyhow::Result;
use product_list_commerce::quantity::normalize;
use product_list_commerce::{Modality, QuantityEvent, QuantityState};
use product_list_observability::WidgetLogger;
use serde::Serialize;

use super::SimulateArgs;
use crate::context::Context;
use crate::script::{parse_script, ScriptStep};

/// Selector state after one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: String,
    pub modality: Modality,
    pub display_text: String,
    pub focused: bool,
    /// Value emitted through the change callback, if any.
    pub committed: Option<u32>,
    /// Owner's committed value after the step.
    pub value: u32,
    pub max_value: u32,
}

/// A mounted selector together with an owner that accepts every commit.
pub struct Simulation {
    state: QuantityState,
    value: u32,
    max_value: u32,
    disabled: bool,
    logger: WidgetLogger,
}

impl Simulation {
    pub fn new(value: u32, max_value: u32, disabled: bool, logger: WidgetLogger) -> Self {
        let mut state = QuantityState::mount(value, max_value);
        state.reconcile(value, max_value);
        Self {
            state,
            value,
            max_value,
            disabled,
            logger,
        }
    }

    /// Apply one step, then re-render the way the widget would.
    pub fn step(&mut self, step: &ScriptStep) -> StepReport {
        let mut committed = None;

        match step {
            ScriptStep::Event(event) if !self.disabled => {
                committed = self.state.apply(event, self.max_value);
                if let Some(new_value) = committed {
                    self.logger
                        .debug_builder("quantity committed")
                        .field_i64("value", i64::from(new_value))
                        .field("modality", self.state.modality().as_str())
                        .emit();
                    self.value = new_value;
                }
            }
            // Focus tracking still follows the element while disabled.
            ScriptStep::Event(QuantityEvent::Focus) => self.state.focus(),
            ScriptStep::Event(QuantityEvent::Blur) => self.state.release_focus(),
            ScriptStep::Event(_) => self.logger.debug("interaction ignored while disabled"),
            ScriptStep::Render { value, max_value } => {
                self.value = value.unwrap_or(self.value);
                self.max_value = max_value.unwrap_or(self.max_value);
            }
        }

        if self.state.reconcile(self.value, self.max_value) {
            self.logger
                .trace_builder("display resynchronized")
                .field_i64("value", i64::from(normalize(self.value, self.max_value)))
                .emit();
        }

        StepReport {
            step: step.to_string(),
            modality: self.state.modality(),
            display_text: self.state.display_text().to_string(),
            focused: self.state.is_focused(),
            committed,
            value: self.value,
            max_value: self.max_value,
        }
    }

    pub fn state(&self) -> &QuantityState {
        &self.state
    }
}

/// Run the simulate command.
pub fn run(args: SimulateArgs, ctx: &Context) -> Result<()> {
    let steps = parse_script(args.steps.as_slice())?;
    let logger = WidgetLogger::from_settings("quantity-selector", &ctx.config.logging);
    let mut simulation = Simulation::new(args.value, args.max, args.disabled, logger);

    ctx.output.debug(&format!(
        "mounted with value {} and ceiling {}",
        args.value, args.max
    ));

    let reports: Vec<StepReport> = steps.iter().map(|step| simulation.step(step)).collect();

    if ctx.output.is_json() {
        ctx.output.json(&reports);
        return Ok(());
    }

    ctx.output.simulation(&reports, simulation.state().modality());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;

    fn run_script(value: u32, max_value: u32, script: &[&str]) -> Vec<StepReport> {
        let mut simulation =
            Simulation::new(value, max_value, false, WidgetLogger::new("quantity-selector"));
        parse_script(script)
            .unwrap()
            .iter()
            .map(|step| simulation.step(step))
            .collect()
    }

    #[test]
    fn test_select_ten_plus() {
        let reports = run_script(3, 20, &["select:10"]);
        assert_eq!(reports[0].committed, Some(10));
        assert_eq!(reports[0].modality, Modality::FreeText);
        assert_eq!(reports[0].display_text, "10");
    }

    #[test]
    fn test_garbage_then_blur() {
        let reports = run_script(3, 20, &["focus", "input:abc", "blur"]);
        assert_eq!(reports[1].display_text, "");
        assert_eq!(reports[1].committed, None);
        assert_eq!(reports[2].committed, Some(1));
        assert_eq!(reports[2].display_text, "1");
        assert_eq!(reports[2].value, 1);
    }

    #[test]
    fn test_focus_keeps_typed_text_across_renders() {
        let reports = run_script(12, 20, &["focus", "input:7", "render"]);
        assert_eq!(reports[2].display_text, "7");
        assert_eq!(reports[2].value, 12);
    }

    #[test]
    fn test_external_change_resyncs() {
        let reports = run_script(3, 20, &["render:15"]);
        assert_eq!(reports[0].modality, Modality::FreeText);
        assert_eq!(reports[0].display_text, "15");
    }

    #[test]
    fn test_ceiling_drop_clamps() {
        let reports = run_script(8, 20, &["render:8:4"]);
        assert_eq!(reports[0].display_text, "4");
        assert_eq!(reports[0].value, 8);
    }

    #[test]
    fn test_disabled_ignores_events() {
        let mut simulation = Simulation::new(3, 20, true, WidgetLogger::new("quantity-selector"));
        let report = simulation.step(&"select:10".parse().unwrap());
        assert_eq!(report.committed, None);
        assert_eq!(report.modality, Modality::Enumerated);
        assert_eq!(report.display_text, "3");
    }

    #[test]
    fn test_disabled_while_focused_releases_focus() {
        let mut simulation =
            Simulation::new(12, 20, false, WidgetLogger::new("quantity-selector"));
        simulation.step(&"focus".parse().unwrap());
        simulation.step(&"input:7".parse().unwrap());
        simulation.disabled = true;

        let report = simulation.step(&"blur".parse().unwrap());
        assert_eq!(report.committed, None);
        assert!(!report.focused);
        assert_eq!(report.display_text, "12");

        let report = simulation.step(&"render:5".parse().unwrap());
        assert_eq!(report.display_text, "5");
    }
}
