/// Result of a single check: produced once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn new(name: &str, verdict: Verdict) -> Self {
        Self {
            name: name.to_string(),
            passed: verdict.passed,
            message: verdict.message,
        }
    }

    pub fn failed(name: &str, message: impl Into<String>) -> Self {
        Self::new(name, Verdict::fail(message))
    }
}

/// Pass/fail decision a check reaches about one response, before the driver
/// attaches the registered check name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub message: String,
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Outcomes of one run in registration order, with the aggregate derived once.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub outcomes: Vec<CheckOutcome>,
    pub passed_count: usize,
    pub total_count: usize,
    pub overall_success: bool,
}

impl RunResult {
    pub fn from_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        let passed_count = outcomes.iter().filter(|o| o.passed).count();
        let total_count = outcomes.len();
        Self {
            outcomes,
            passed_count,
            total_count,
            overall_success: passed_count == total_count,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.total_count - self.passed_count
    }

    /// Process exit status for this run: 0 when every check passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.overall_success { 0 } else { 1 }
    }
}
