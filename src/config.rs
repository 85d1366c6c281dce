use crate::parsers::recode::TargetEncoding;

/// Default minimum length (in characters) for a token to enter the frequency table
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 5;

/// Default trailing moving-average window, in days
pub const DEFAULT_SMOOTHING_WINDOW: usize = 7;

/// Default number of ranked words reported
pub const DEFAULT_TOP_N_WORDS: usize = 20;

/// Parameters consumed by the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub minimum_token_length: usize,
    pub smoothing_window: usize,
    pub top_n_words: usize,
    pub encoding: TargetEncoding,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            minimum_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            top_n_words: DEFAULT_TOP_N_WORDS,
            encoding: TargetEncoding::Utf8,
        }
    }
}
