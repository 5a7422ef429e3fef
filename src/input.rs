//! Numeric input fields for the three Cartesian components
//!
//! A [`NumberField`] behaves like a spin box: it holds a value, moves by a
//! fixed step and displays itself with a fixed number of decimals. There is
//! no range restriction. [`PointInput`] groups the x, y and z fields and
//! understands the small command language of the interactive session:
//!
//! | command        | effect                        |
//! |----------------|-------------------------------|
//! | `x 1.5`, `x=1.5` | set one component           |
//! | `y+`, `z-`     | step one component up or down |
//! | `1 2 3`        | set all three components      |
//! | `reset`        | restore the defaults          |

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{COMPONENT_STEP, DEFAULT_COMPONENT, INPUT_DECIMALS};
use crate::coordinates::Cartesian3;
use crate::{CoordError, Result};

lazy_static! {
    static ref SET_COMPONENT: Regex =
        Regex::new(r"^(?i)([xyz])\s*(?:=|\s)\s*(\S+)$").expect("valid set pattern");
    static ref STEP_COMPONENT: Regex =
        Regex::new(r"^(?i)([xyz])\s*([+-])$").expect("valid step pattern");
}

/// A single numeric input with a step and a display precision
#[derive(Debug, Clone, PartialEq)]
pub struct NumberField {
    pub label: String,
    pub value: f64,
    pub step: f64,
    pub decimals: usize,
}

impl NumberField {
    /// Field with the default value, step and precision
    pub fn new(label: &str) -> Self {
        NumberField {
            label: label.to_string(),
            value: DEFAULT_COMPONENT,
            step: COMPONENT_STEP,
            decimals: INPUT_DECIMALS,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }

    pub fn increment(&mut self) {
        self.value += self.step;
    }

    pub fn decrement(&mut self) {
        self.value -= self.step;
    }

    /// Value formatted with the field's precision, e.g. `1.00`
    pub fn display(&self) -> String {
        format!("{:.*}", self.decimals, self.value)
    }
}

/// The three Cartesian input fields
#[derive(Debug, Clone, PartialEq)]
pub struct PointInput {
    pub x: NumberField,
    pub y: NumberField,
    pub z: NumberField,
}

impl Default for PointInput {
    fn default() -> Self {
        PointInput {
            x: NumberField::new("x"),
            y: NumberField::new("y"),
            z: NumberField::new("z"),
        }
    }
}

impl PointInput {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        PointInput {
            x: NumberField::new("x").with_value(x),
            y: NumberField::new("y").with_value(y),
            z: NumberField::new("z").with_value(z),
        }
    }

    pub fn point(&self) -> Cartesian3 {
        Cartesian3::new(self.x.value, self.y.value, self.z.value)
    }

    /// `x = 1.00, y = 1.00, z = 1.00`
    pub fn summary(&self) -> String {
        [&self.x, &self.y, &self.z]
            .iter()
            .map(|f| format!("{} = {}", f.label, f.display()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut NumberField> {
        match name.to_ascii_lowercase().as_str() {
            "x" => Ok(&mut self.x),
            "y" => Ok(&mut self.y),
            "z" => Ok(&mut self.z),
            other => Err(CoordError::InvalidInput(format!(
                "unknown component '{}'",
                other
            ))),
        }
    }

    /// Applies one session command, leaving the fields untouched on error
    pub fn apply(&mut self, command: &str) -> Result<()> {
        let command = command.trim();

        if command.eq_ignore_ascii_case("reset") {
            *self = PointInput::default();
            return Ok(());
        }

        if let Some(caps) = STEP_COMPONENT.captures(command) {
            let field = self.field_mut(&caps[1])?;
            if &caps[2] == "+" {
                field.increment();
            } else {
                field.decrement();
            }
            return Ok(());
        }

        if let Some(caps) = SET_COMPONENT.captures(command) {
            let value = parse_component(&caps[2])?;
            self.field_mut(&caps[1])?.set(value);
            return Ok(());
        }

        let parts: Vec<&str> = command.split_whitespace().collect();
        if parts.len() == 3 {
            let x = parse_component(parts[0])?;
            let y = parse_component(parts[1])?;
            let z = parse_component(parts[2])?;
            self.x.set(x);
            self.y.set(y);
            self.z.set(z);
            return Ok(());
        }

        Err(CoordError::InvalidInput(format!(
            "unrecognized command '{}'",
            command
        )))
    }
}

/// Parses a finite real number
fn parse_component(text: &str) -> Result<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| CoordError::InvalidInput(format!("'{}' is not a number", text)))?;
    if !value.is_finite() {
        return Err(CoordError::InvalidInput(format!(
            "'{}' is not a finite number",
            text
        )));
    }
    Ok(value)
}
