use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Content service returned {status} for '{resource}'")]
    UpstreamStatus { resource: String, status: u16 },

    #[error("Malformed response for '{resource}': {message}")]
    MalformedBody { resource: String, message: String },

    #[error("Could not normalize '{resource}': {message}")]
    NormalizeError { resource: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ContentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContentError::HttpError(_) => ErrorCategory::Network,
            ContentError::UpstreamStatus { .. } => ErrorCategory::Upstream,
            ContentError::MalformedBody { .. }
            | ContentError::NormalizeError { .. } => ErrorCategory::Data,
            ContentError::ConfigError { .. }
            | ContentError::ConfigValidationError { .. }
            | ContentError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ContentError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 上游失敗會被降級為空內容，不影響回應
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContentError::HttpError(e) if e.is_timeout() => {
                "Content service is slow to respond; check its health or raise request_timeout_secs"
            }
            ContentError::HttpError(_) => {
                "Check that the content service is running and STRAPI_API_URL points at it"
            }
            ContentError::UpstreamStatus { .. } => {
                "Check the collection exists and its public read permission is enabled"
            }
            ContentError::MalformedBody { .. } => {
                "Content service returned an unexpected body; verify the API version"
            }
            ContentError::NormalizeError { .. } => {
                "A list collection returned a single record; check the collection type in the CMS"
            }
            ContentError::ConfigError { .. }
            | ContentError::ConfigValidationError { .. }
            | ContentError::InvalidConfigValueError { .. } => {
                "Review command-line flags, environment variables and the config file"
            }
            ContentError::IoError(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => "無法連線到內容服務".to_string(),
            ErrorCategory::Upstream => format!("內容服務回應錯誤: {}", self),
            ErrorCategory::Data => format!("內容格式不符: {}", self),
            ErrorCategory::Configuration => format!("設定錯誤: {}", self),
            ErrorCategory::System => format!("系統錯誤: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_failures_are_low_severity() {
        let err = ContentError::UpstreamStatus {
            resource: "hero-slides".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Upstream);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.to_string().contains("hero-slides"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = ContentError::ConfigError {
            message: "content.base_url is not set".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("設定錯誤"));
    }
}
