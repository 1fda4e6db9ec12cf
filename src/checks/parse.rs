//! Reading agent output back into sections.

use log::debug;
use serde_json::Value;

use crate::client::empty_response;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSection {
    pub name: String,
    pub piggyback: Option<String>,
    pub payload: Value,
}

/// Decode the first line of a section as JSON; anything else yields `{}`.
pub fn parse_json_section(lines: &[&str]) -> Value {
    lines
        .first()
        .and_then(|line| serde_json::from_str(line).ok())
        .unwrap_or_else(empty_response)
}

fn piggyback_header(line: &str) -> Option<&str> {
    line.strip_prefix("<<<<")?.strip_suffix(">>>>")
}

fn section_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix("<<<")?.strip_suffix(">>>")?;
    Some(inner.split(':').next().unwrap_or(inner))
}

type OpenSection<'a> = (String, Option<String>, Vec<&'a str>);

fn flush(current: &mut Option<OpenSection<'_>>, sections: &mut Vec<ParsedSection>) {
    if let Some((name, piggyback, lines)) = current.take() {
        sections.push(ParsedSection {
            name,
            piggyback,
            payload: parse_json_section(&lines),
        });
    }
}

pub fn parse_agent_output(text: &str) -> Vec<ParsedSection> {
    let mut sections = Vec::new();
    let mut piggyback: Option<String> = None;
    let mut current: Option<OpenSection<'_>> = None;

    for line in text.lines() {
        if let Some(target) = piggyback_header(line) {
            flush(&mut current, &mut sections);
            piggyback = (!target.is_empty()).then(|| target.to_string());
        } else if let Some(name) = section_header(line) {
            flush(&mut current, &mut sections);
            current = Some((name.to_string(), piggyback.clone(), Vec::new()));
        } else if let Some((_, _, lines)) = current.as_mut() {
            lines.push(line);
        } else {
            debug!("Skipping line outside of any section: {}", line);
        }
    }
    flush(&mut current, &mut sections);

    sections
}
