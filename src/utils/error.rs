use thiserror::Error;

#[derive(Error, Debug)]
pub enum AidError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::de::DeError),

    #[error("Malformed contribution percentage in project '{project}': '{entry}'")]
    MalformedPercentage { project: String, entry: String },

    #[error("Malformed amount in '{project}': '{value}'")]
    MalformedAmount { project: String, value: String },

    #[error("Malformed record in {source_name}: {message}")]
    MalformedRecord {
        source_name: String,
        message: String,
    },

    #[error("Unsupported source file: {path}")]
    UnsupportedSource { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 輸入檔案無法解析或內容不合法
    Input,
    /// 金額、百分比等資料格式錯誤
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AidError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AidError::IoError(_) => ErrorCategory::System,
            AidError::CsvError(_)
            | AidError::XmlError(_)
            | AidError::MalformedRecord { .. }
            | AidError::UnsupportedSource { .. } => ErrorCategory::Input,
            AidError::SerializationError(_)
            | AidError::MalformedPercentage { .. }
            | AidError::MalformedAmount { .. } => ErrorCategory::Data,
            AidError::ConfigError { .. }
            | AidError::ConfigValidationError { .. }
            | AidError::InvalidConfigValueError { .. }
            | AidError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the input data: {}", self),
            ErrorCategory::Data => format!("The input data contains an invalid value: {}", self),
            ErrorCategory::Config => format!("The configuration is invalid: {}", self),
            ErrorCategory::System => format!("A system error occurred: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AidError::MalformedPercentage { .. } => {
                "Country entries must end with a percentage such as '(45,5%)'"
            }
            AidError::MalformedAmount { .. } => {
                "Transaction and subsidy amounts must be plain numbers"
            }
            AidError::UnsupportedSource { .. } => "Use .xml or .json project sources",
            AidError::MalformedRecord { .. } | AidError::XmlError(_) => {
                "Check that every <project> has its fields and a <transactions> list"
            }
            AidError::CsvError(_) => "Check the CSV header row and delimiters",
            AidError::IoError(_) => "Check that the files exist and the output directory is writable",
            AidError::SerializationError(_) => "Check the JSON project file",
            AidError::ConfigError { .. }
            | AidError::ConfigValidationError { .. }
            | AidError::InvalidConfigValueError { .. }
            | AidError::MissingConfigError { .. } => "Review the command line flags or the TOML report config",
        }
    }
}

pub type Result<T> = std::result::Result<T, AidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_errors_are_high_severity() {
        let err = AidError::MalformedAmount {
            project: "Water".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = AidError::MissingConfigError {
            field: "sources".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("sources"));
    }
}
