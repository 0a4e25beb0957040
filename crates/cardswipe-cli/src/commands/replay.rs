use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cardswipe_core::carousel::{HeadlessSurface, ScrollSurface};
use cardswipe_core::{AppConfig, Carousel, Deck, Outcome};

/// Event script driven through a headless carousel
#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default = "default_viewport_width")]
    viewport_width: f64,
    events: Vec<ScriptEvent>,
}

fn default_viewport_width() -> f64 {
    400.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ScriptEvent {
    TouchStart {
        x: f64,
        #[serde(default)]
        y: f64,
    },
    TouchEnd {
        x: f64,
        #[serde(default)]
        y: f64,
    },
    /// `target` is the raw indicator attribute and may be missing or malformed
    Indicator {
        #[serde(default)]
        target: Option<Value>,
    },
    Resize {
        width: f64,
    },
    Orientation {
        width: f64,
    },
}

/// State after one replayed event
#[derive(Debug, Serialize)]
struct Step {
    event: ScriptEvent,
    #[serde(flatten)]
    outcome: Outcome,
    selected: usize,
    scroll_left: f64,
}

pub fn run(config: &AppConfig, deck: Deck, script_path: &Path, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(script_path)
        .with_context(|| format!("reading {}", script_path.display()))?;
    let script: Script = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", script_path.display()))?;

    let steps = replay(config, deck, &script)?;
    for (i, step) in steps.iter().enumerate() {
        if json {
            println!("{}", serde_json::to_string(step)?);
        } else {
            println!(
                "#{:<3} {:<40} {} | card {} | scroll {}",
                i + 1,
                describe(&step.event),
                step.outcome,
                step.selected,
                step.scroll_left
            );
        }
    }
    Ok(())
}

fn replay(config: &AppConfig, deck: Deck, script: &Script) -> Result<Vec<Step>> {
    let mut carousel = Carousel::new(deck, config.carousel.clone(), script.viewport_width)?;
    carousel.mount(HeadlessSurface::new());

    let steps = script
        .events
        .iter()
        .map(|event| {
            let outcome = match event {
                ScriptEvent::TouchStart { x, .. } => carousel.on_touch_start(*x),
                ScriptEvent::TouchEnd { x, .. } => carousel.on_touch_end(*x),
                ScriptEvent::Indicator { target } => {
                    let raw = target.as_ref().and_then(attribute_text);
                    carousel.on_indicator_attribute(raw.as_deref())
                }
                ScriptEvent::Resize { width } => carousel.on_viewport_width_change(*width),
                ScriptEvent::Orientation { width } => carousel.on_orientation_change(*width),
            };
            Step {
                event: event.clone(),
                outcome,
                selected: carousel.selected(),
                scroll_left: carousel
                    .surface()
                    .map(|s| s.scroll_left())
                    .unwrap_or_default(),
            }
        })
        .collect();

    Ok(steps)
}

/// Indicator attributes arrive as text. JSON numbers with no fractional
/// part (`2`, `2.0`) read as that index; anything else keeps its text form
/// and goes through the usual coercion.
fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(whole), _) => Some(whole.to_string()),
            (None, Some(f)) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                Some((f as u64).to_string())
            }
            _ => Some(n.to_string()),
        },
        _ => None,
    }
}

fn describe(event: &ScriptEvent) -> String {
    match event {
        ScriptEvent::TouchStart { x, y } => format!("touch start ({}, {})", x, y),
        ScriptEvent::TouchEnd { x, y } => format!("touch end ({}, {})", x, y),
        ScriptEvent::Indicator { target } => match target {
            Some(v) => format!("indicator {}", v),
            None => "indicator (no target)".to_string(),
        },
        ScriptEvent::Resize { width } => format!("resize to {}", width),
        ScriptEvent::Orientation { width } => format!("orientation change at {}", width),
    }
}
