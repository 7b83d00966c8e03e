use std::collections::HashSet;
use std::path::PathBuf;
use crate::models::conversion::ConversionOutcome;

#[derive(Clone, Debug)]
pub struct BatchJob {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub output_format: String,
    pub input_format_filter: Option<HashSet<String>>,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<ConversionOutcome>,
    pub skipped: usize,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }
}
