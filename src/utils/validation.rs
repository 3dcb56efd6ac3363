use crate::utils::error::{Result, SupabaseError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SupabaseError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SupabaseError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SupabaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// API key 不應出現在錯誤訊息裡，所以 value 一律遮蔽
pub fn validate_api_key(field_name: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(SupabaseError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    if key.trim().is_empty() || key.chars().any(char::is_whitespace) {
        return Err(SupabaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "<redacted>".to_string(),
            reason: "API key must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SupabaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("SUPABASE_URL", "https://abc.supabase.co").is_ok());
        assert!(validate_url("SUPABASE_URL", "http://localhost:54321").is_ok());
        assert!(validate_url("SUPABASE_URL", "invalid-url").is_err());
        assert!(validate_url("SUPABASE_URL", "ftp://example.com").is_err());
        assert!(matches!(
            validate_url("SUPABASE_URL", ""),
            Err(SupabaseError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_api_key_redacts_value() {
        assert!(validate_api_key("SUPABASE_ANON_KEY", "eyJhbGciOi.abc.def").is_ok());
        assert!(matches!(
            validate_api_key("SUPABASE_ANON_KEY", ""),
            Err(SupabaseError::MissingConfigError { .. })
        ));

        match validate_api_key("SUPABASE_ANON_KEY", "secret key") {
            Err(SupabaseError::InvalidConfigValueError { value, .. }) => {
                assert_eq!(value, "<redacted>");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("table", "profiles").is_ok());
        assert!(validate_non_empty_string("table", "   ").is_err());
    }
}
