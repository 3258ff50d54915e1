pub const DEFAULT_DATA_DIRECTORY: &str = "data";
pub const DEFAULT_FILE_NAME: &str = "bets.txt";

/// Where the bets file lives, as chosen at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_directory: String,
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_directory: DEFAULT_DATA_DIRECTORY.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl StoreConfig {
    /// Build from the interactive answers, falling back to defaults for empty ones
    pub fn from_answers(directory: &str, file: &str) -> Self {
        let defaults = Self::default();
        Self {
            data_directory: non_empty(directory).unwrap_or(defaults.data_directory),
            file_name: non_empty(file).unwrap_or(defaults.file_name),
        }
    }
}

fn non_empty(answer: &str) -> Option<String> {
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}
