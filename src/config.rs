pub const DEFAULT_INPUT_PATH: &str = "predictions.log";
pub const DEFAULT_OUTPUT_PATH: &str = "current_inputs.csv";

/// Configuration for record extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Substring that marks a line as carrying a record
    pub marker: String,
    /// Text after which the mapping literal starts
    pub literal_prefix: String,
    /// Text before which the mapping literal ends
    pub terminator: String,
    /// Explicit column order; `None` takes the first record's keys
    pub keys: Option<Vec<String>>,
    pub debug: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            marker: "Input:".to_string(),
            literal_prefix: "Input: ".to_string(),
            terminator: ", Prediction:".to_string(),
            keys: None,
            debug: false,
        }
    }
}

impl ExtractorConfig {
    /// Use `marker` both for line selection and, followed by a space, as the
    /// literal prefix.
    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = marker.to_string();
        self.literal_prefix = format!("{} ", marker);
        self
    }
}
