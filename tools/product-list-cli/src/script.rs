//! Scripted selector interactions.
//!
//! A script is a list of steps such as `focus input:12 blur render:3`.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use product_list_commerce::QuantityEvent;

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// A user interaction.
    Event(QuantityEvent),
    /// The owner re-renders, optionally with a new value and ceiling.
    Render {
        value: Option<u32>,
        max_value: Option<u32>,
    },
}

impl FromStr for ScriptStep {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let step = match (name, arg) {
            ("select", Some(raw)) => ScriptStep::Event(QuantityEvent::Select(raw.to_string())),
            ("input", Some(raw)) => ScriptStep::Event(QuantityEvent::Input(raw.to_string())),
            ("select" | "input", None) => bail!("Step `{}` needs text, e.g. `{}:12`", name, name),
            ("focus", None) => ScriptStep::Event(QuantityEvent::Focus),
            ("blur", None) => ScriptStep::Event(QuantityEvent::Blur),
            ("render", None) => ScriptStep::Render {
                value: None,
                max_value: None,
            },
            ("render", Some(args)) => {
                let (value, max_value) = match args.split_once(':') {
                    Some((value, max_value)) => (value, Some(max_value)),
                    None => (args, None),
                };
                ScriptStep::Render {
                    value: Some(parse_number(value)?),
                    max_value: max_value.map(parse_number).transpose()?,
                }
            }
            _ => return Err(anyhow!("Unknown step: {}", s)),
        };

        Ok(step)
    }
}

fn parse_number(raw: &str) -> Result<u32> {
    raw.parse()
        .with_context(|| format!("Invalid number in render step: {:?}", raw))
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Event(QuantityEvent::Select(raw)) => write!(f, "select:{}", raw),
            ScriptStep::Event(QuantityEvent::Input(raw)) => write!(f, "input:{}", raw),
            ScriptStep::Event(QuantityEvent::Focus) => write!(f, "focus"),
            ScriptStep::Event(QuantityEvent::Blur) => write!(f, "blur"),
            ScriptStep::Render { value, max_value } => {
                write!(f, "render")?;
                if let Some(value) = value {
                    write!(f, ":{}", value)?;
                }
                if let Some(max_value) = max_value {
                    write!(f, ":{}", max_value)?;
                }
                Ok(())
            }
        }
    }
}

/// Parse every step of a script.
pub fn parse_script<S: AsRef<str>>(steps: &[S]) -> Result<Vec<ScriptStep>> {
    steps.iter().map(|step| step.as_ref().parse()).collect()
}
