use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

impl SupabaseError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SupabaseError::HttpError(e) if e.is_connect() => {
                "Could not reach the Supabase server".to_string()
            }
            SupabaseError::HttpError(e) if e.is_timeout() => {
                "The Supabase server did not answer in time".to_string()
            }
            SupabaseError::HttpError(_) => "The request to Supabase failed".to_string(),
            SupabaseError::SerializationError(_) => {
                "Supabase returned a response that could not be decoded".to_string()
            }
            SupabaseError::IoError(_) => "Could not read a local file".to_string(),
            SupabaseError::UrlError(_) => "SUPABASE_URL is not a valid URL".to_string(),
            SupabaseError::TomlError(_) => "The config file is not valid TOML".to_string(),
            SupabaseError::ConfigError { message } => message.clone(),
            SupabaseError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            SupabaseError::MissingConfigError { field } => format!("{} is not set", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SupabaseError::HttpError(_) => "Check the network and the project URL",
            SupabaseError::SerializationError(_) => {
                "Make sure the URL points at the project root, not at /rest/v1"
            }
            SupabaseError::IoError(_) => "Check the file path and its permissions",
            SupabaseError::UrlError(_) | SupabaseError::InvalidConfigValueError { .. } => {
                "Set SUPABASE_URL to something like https://<project>.supabase.co"
            }
            SupabaseError::TomlError(_) => "Fix the syntax of the config file",
            SupabaseError::ConfigError { .. } | SupabaseError::MissingConfigError { .. } => {
                "Export SUPABASE_URL and SUPABASE_ANON_KEY (or SUPABASE_SERVICE_ROLE_KEY)"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SupabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_message() {
        let err = SupabaseError::MissingConfigError {
            field: "SUPABASE_URL".to_string(),
        };
        assert_eq!(err.to_string(), "Missing configuration: SUPABASE_URL");
        assert_eq!(err.user_friendly_message(), "SUPABASE_URL is not set");
        assert!(err.recovery_suggestion().contains("SUPABASE_ANON_KEY"));
    }

    #[test]
    fn test_url_error_from_parse() {
        let err: SupabaseError = url::Url::parse("").unwrap_err().into();
        assert!(matches!(err, SupabaseError::UrlError(_)));
        assert!(err.to_string().starts_with("Invalid URL"));
    }
}
