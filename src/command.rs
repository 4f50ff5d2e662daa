//! Line-oriented scene commands.
//!
//! One command per line; blank lines and `#` comments are ignored:
//!
//! ```text
//! sections 3
//! wall RAL:9010 0
//! furniture #355070
//! template scandi_light
//! harmony ral
//! light off
//! ```

use crate::error::{PaletteError, Result};
use crate::scene::{SceneSnapshot, Studio, Target};
use std::str::FromStr;
use tracing::debug;

/// A single scene operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply a hex value or catalog code to a wall section or the furniture.
    Apply {
        target: Target,
        value: String,
        section: Option<usize>,
    },
    /// Set the number of visible wall sections.
    Sections(i64),
    /// Make a wall section active.
    Select(usize),
    /// Apply a designer template.
    Template(String),
    /// Regenerate suggestions, synthetic or from a catalog.
    Harmony { catalog: Option<String> },
    Light(bool),
    Temperature(i64),
    Brightness(i64),
}

fn parse_number<T: FromStr>(value: Option<&str>, what: &str) -> std::result::Result<T, String> {
    let value = value.ok_or_else(|| format!("missing {}", what))?;
    value
        .parse()
        .map_err(|_| format!("invalid {} '{}'", what, value))
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or("empty command")?.to_lowercase();

        let command = match keyword.as_str() {
            "wall" | "furniture" => {
                let target: Target = keyword.parse()?;
                let value = tokens
                    .next()
                    .ok_or_else(|| format!("missing color for {}", target))?
                    .to_string();
                let section = match (target, tokens.next()) {
                    (Target::Wall, Some(s)) => Some(parse_number(Some(s), "section")?),
                    (Target::Furniture, Some(extra)) => {
                        return Err(format!("unexpected argument '{}'", extra));
                    }
                    (_, None) => None,
                };
                Command::Apply {
                    target,
                    value,
                    section,
                }
            }
            "sections" => Command::Sections(parse_number(tokens.next(), "section count")?),
            "select" => Command::Select(parse_number(tokens.next(), "section")?),
            "template" => Command::Template(
                tokens
                    .next()
                    .ok_or("missing template key")?
                    .to_string(),
            ),
            "harmony" => Command::Harmony {
                catalog: tokens.next().map(str::to_string),
            },
            "light" => match tokens.next().map(str::to_lowercase).as_deref() {
                Some("on") => Command::Light(true),
                Some("off") => Command::Light(false),
                other => return Err(format!("expected on/off, got {:?}", other.unwrap_or(""))),
            },
            "temperature" => Command::Temperature(parse_number(tokens.next(), "temperature")?),
            "brightness" => Command::Brightness(parse_number(tokens.next(), "brightness")?),
            other => return Err(format!("unknown command '{}'", other)),
        };

        if let Some(extra) = tokens.next() {
            return Err(format!("unexpected argument '{}'", extra));
        }
        Ok(command)
    }
}

/// Parse a script into commands, reporting the first bad line.
pub fn parse_script(content: &str) -> Result<Vec<(usize, Command)>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            line.parse::<Command>()
                .map(|cmd| (line_no, cmd))
                .map_err(|message| PaletteError::InvalidCommand {
                    line: line_no,
                    message,
                })
        })
        .collect()
}

impl Studio {
    /// Run one command against the session.
    pub fn execute(&mut self, command: &Command) -> Result<SceneSnapshot> {
        debug!("Executing {:?}", command);
        match command {
            Command::Apply {
                target,
                value,
                section,
            } => self.apply_color(*target, value, *section),
            Command::Sections(n) => Ok(self.set_section_count(*n)),
            Command::Select(i) => Ok(self.select_section(*i)),
            Command::Template(key) => self.apply_template(key),
            Command::Harmony { catalog: None } => Ok(self.generate_harmony()),
            Command::Harmony {
                catalog: Some(name),
            } => self.generate_catalog_harmony(name),
            Command::Light(on) => Ok(self.set_light_on(*on)),
            Command::Temperature(t) => Ok(self.set_temperature(*t)),
            Command::Brightness(b) => Ok(self.set_brightness(*b)),
        }
    }

    /// Run a whole script, stopping at the first failing command.
    pub fn run_script(&mut self, content: &str) -> Result<SceneSnapshot> {
        let commands = parse_script(content)?;
        for (line_no, command) in &commands {
            self.execute(command).map_err(|e| match e {
                PaletteError::InvalidCommand { .. } => e,
                other => PaletteError::InvalidCommand {
                    line: *line_no,
                    message: other.to_string(),
                },
            })?;
        }
        Ok(self.snapshot())
    }
}
