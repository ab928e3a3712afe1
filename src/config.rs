//! Configuration for the extractors.

/// Tuning knobs for table and positional extraction.
///
/// Defaults match the fixed layout of the policy documents this library was
/// written for: a three-column table whose first row is the header, and the
/// Portuguese "not contracted" placeholders for missing values.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// 1-based row index treated as the header and skipped.
    pub header_row: u32,
    /// Lowercase description labels that mark a repeated header row.
    pub header_labels: Vec<String>,
    /// Vertical tolerance (page-height fraction) for same-row matching in
    /// the positional fallback.
    pub row_tolerance: f32,
    /// Limit value used when the fallback finds no value to the right.
    pub default_limit: String,
    /// Premium value used when the fallback finds only one value.
    pub default_premium: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractConfig {
    /// Create a configuration with the stock policy-table defaults.
    pub fn new() -> Self {
        Self {
            header_row: 1,
            header_labels: vec!["descrição".to_string(), "descricao".to_string()],
            row_tolerance: 0.01,
            default_limit: "Não contratada".to_string(),
            default_premium: "R$ 0,00".to_string(),
        }
    }

    /// Override the header row index.
    pub fn with_header_row(mut self, row: u32) -> Self {
        self.header_row = row;
        self
    }

    /// Override the header description labels (matched lowercase).
    pub fn with_header_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Override the same-row vertical tolerance.
    pub fn with_row_tolerance(mut self, tolerance: f32) -> Self {
        self.row_tolerance = tolerance;
        self
    }

    /// Whether a description cell repeats the header.
    pub(crate) fn is_header_label(&self, description: &str) -> bool {
        let lower = description.to_lowercase();
        self.header_labels.iter().any(|label| *label == lower)
    }
}
