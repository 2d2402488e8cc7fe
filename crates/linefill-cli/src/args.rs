use std::fmt;
use std::path::PathBuf;

use linefill_engine::{RunConfig, DEFAULT_OUTPUT_PATH};

/// Positional command line: `<stroke> <color> [output]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub stroke: PathBuf,
    pub color: PathBuf,
    pub output: PathBuf,
}

/// Wrong number of arguments. Displays as the usage line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    program: String,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Usage: {} <stroke> <color> [output={DEFAULT_OUTPUT_PATH}]", self.program)
    }
}

impl std::error::Error for UsageError {}

impl CliArgs {
    /// Parses a full argv, program name first.
    pub fn parse<I>(argv: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_else(|| "linefill".to_string());
        let rest: Vec<String> = argv.collect();

        let (stroke, color, output) = match rest.as_slice() {
            [stroke, color] => (stroke, color, DEFAULT_OUTPUT_PATH),
            [stroke, color, output] => (stroke, color, output.as_str()),
            _ => return Err(UsageError { program }),
        };

        Ok(Self {
            stroke: PathBuf::from(stroke),
            color: PathBuf::from(color),
            output: PathBuf::from(output),
        })
    }

    pub fn into_run_config(self) -> RunConfig {
        RunConfig::new(self.stroke, self.color).with_output(self.output)
    }
}
