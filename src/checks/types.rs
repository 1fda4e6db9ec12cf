use serde::{Deserialize, Serialize};

/// Monitoring state of a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum State {
    Ok,
    Warn,
    Crit,
    Unknown,
}

impl State {
    /// CRIT outranks UNKNOWN, which outranks WARN.
    fn severity(self) -> u8 {
        match self {
            State::Ok => 0,
            State::Warn => 1,
            State::Unknown => 2,
            State::Crit => 3,
        }
    }

    pub fn worst(self, other: State) -> State {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            State::Ok => "OK",
            State::Warn => "WARN",
            State::Crit => "CRIT",
            State::Unknown => "UNKNOWN",
        }
    }
}

impl From<State> for u8 {
    fn from(state: State) -> u8 {
        match state {
            State::Ok => 0,
            State::Warn => 1,
            State::Crit => 2,
            State::Unknown => 3,
        }
    }
}

impl TryFrom<u8> for State {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(State::Ok),
            1 => Ok(State::Warn),
            2 => Ok(State::Crit),
            3 => Ok(State::Unknown),
            other => Err(format!("invalid monitoring state {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub state: State,
    /// Shown in the service summary line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Shown only in the service details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl CheckResult {
    pub fn summary(state: State, text: impl Into<String>) -> Self {
        Self {
            state,
            summary: Some(text.into()),
            notice: None,
        }
    }

    pub fn notice(state: State, text: impl Into<String>) -> Self {
        Self {
            state,
            summary: None,
            notice: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub item: Option<String>,
}

impl Service {
    pub fn single() -> Self {
        Self { item: None }
    }

    pub fn item(item: impl Into<String>) -> Self {
        Self {
            item: Some(item.into()),
        }
    }
}

/// Everything one check run yields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckOutput {
    pub results: Vec<CheckResult>,
    pub metrics: Vec<Metric>,
}

impl CheckOutput {
    pub fn summary(&mut self, state: State, text: impl Into<String>) {
        self.results.push(CheckResult::summary(state, text));
    }

    pub fn notice(&mut self, state: State, text: impl Into<String>) {
        self.results.push(CheckResult::notice(state, text));
    }

    pub fn metric(&mut self, name: impl Into<String>, value: f64) {
        self.metrics.push(Metric {
            name: name.into(),
            value,
        });
    }

    pub fn state(&self) -> State {
        self.results
            .iter()
            .fold(State::Ok, |acc, result| acc.worst(result.state))
    }

    pub fn summaries(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter_map(|r| r.summary.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_state() {
        assert_eq!(State::Ok.worst(State::Warn), State::Warn);
        assert_eq!(State::Crit.worst(State::Unknown), State::Crit);
        assert_eq!(State::Warn.worst(State::Unknown), State::Unknown);
    }

    #[test]
    fn test_output_state() {
        let mut output = CheckOutput::default();
        assert_eq!(output.state(), State::Ok);
        output.summary(State::Ok, "fine");
        output.notice(State::Warn, "hmm");
        assert_eq!(output.state(), State::Warn);
        assert_eq!(output.summaries(), vec!["fine"]);
    }

    #[test]
    fn test_state_from_number() {
        assert_eq!(State::try_from(1u8), Ok(State::Warn));
        assert!(State::try_from(7u8).is_err());
        assert_eq!(u8::from(State::Crit), 2);
    }
}
