//! Outcome accumulation and the end-of-run report

use colored::Colorize;

/// Result of a single test
#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    pub name: String,
    pub passed: bool,
    /// Set iff the test failed
    pub error: Option<String>,
}

impl TestOutcome {
    pub fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            error: None,
        }
    }

    pub fn fail(name: &str, error: String) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            error: Some(error),
        }
    }
}

/// All outcomes of a run, in execution order
///
/// Owned by the driver; nothing else mutates it.
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<TestOutcome>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: TestOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed() > 0 {
            1
        } else {
            0
        }
    }

    /// Render the summary block printed after the last test
    pub fn render(&self, colored: bool) -> String {
        let mut out = format!("\n{}\n", "─".repeat(50));

        let passed = format!("{} passed", self.passed());
        let failed = format!("{} failed", self.failed());
        if colored {
            let failed = if self.failed() > 0 {
                failed.red().bold()
            } else {
                failed.normal()
            };
            out.push_str(&format!("Results: {}, {}\n", passed.green(), failed));
        } else {
            out.push_str(&format!("Results: {}, {}\n", passed, failed));
        }

        if self.failed() > 0 {
            out.push_str("\nFailures:\n\n");
            for failure in self.failures() {
                let error = failure.error.as_deref().unwrap_or_default();
                out.push_str(&format!("  {}:\n", failure.name));
                out.push_str(&format!("    {}\n\n", error.replace('\n', "\n    ")));
            }
        }
        out
    }

    /// Print the summary to stdout
    pub fn print(&self) {
        print!("{}", self.render(true));
    }
}
