use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:8081";
const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_MASTODON_INSTANCE: &str = "https://mastodon.social";
const DEFAULT_EMAIL_FROM: &str = "Vibe Analytics <noreply@vibeanalytics.dev>";

/// Where one-time passcodes get delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBackend {
    /// Write the code to the application log. Used for local development.
    Log,
    /// Send through the Resend HTTP API.
    Resend { api_key: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_callback_url: String,
    pub google_auth_url: String,
    pub google_token_url: String,

    /// Analyses fall back to canned data when unset.
    pub groq_api_key: Option<String>,
    pub groq_model: String,

    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,

    pub mastodon_instance: String,

    pub email_backend: EmailBackend,
    pub email_from: String,
    /// Echo freshly issued OTPs in API responses.
    pub otp_in_response: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let port = match get("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let otp_in_response = match get("OTP_IN_RESPONSE") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "OTP_IN_RESPONSE".to_string(),
                value,
            })?,
            None => false,
        };

        let email_backend = match get("EMAIL_PROVIDER").as_deref().map(str::trim) {
            None | Some("log") => EmailBackend::Log,
            Some("resend") => EmailBackend::Resend {
                api_key: required("RESEND_API_KEY")?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "EMAIL_PROVIDER".to_string(),
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            frontend_url: get("FRONTEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_callback_url: required("GOOGLE_CALLBACK_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            groq_api_key: get("GROQ_API_KEY"),
            groq_model: get("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            razorpay_key_id: required("RAZORPAY_KEY_ID")?,
            razorpay_key_secret: required("RAZORPAY_KEY_SECRET")?,
            mastodon_instance: get("MASTODON_INSTANCE")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_MASTODON_INSTANCE.to_string()),
            email_backend,
            email_from: get("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
            otp_in_response,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Configuration pointing every outbound integration at nothing.
    ///
    /// No Groq key, log-only email and an unroutable Mastodon instance.
    pub(crate) fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            google_client_id: "client-id".to_string(),
            google_client_secret: "client-secret".to_string(),
            google_callback_url: "http://localhost:5000/api/auth/google/callback".to_string(),
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            groq_api_key: None,
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            razorpay_key_id: "rzp_test_key".to_string(),
            razorpay_key_secret: "rzp_secret".to_string(),
            mastodon_instance: "http://127.0.0.1:9".to_string(),
            email_backend: EmailBackend::Log,
            email_from: DEFAULT_EMAIL_FROM.to_string(),
            otp_in_response: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "postgres://localhost/vibe"),
            ("GOOGLE_CLIENT_ID", "client-id"),
            ("GOOGLE_CLIENT_SECRET", "client-secret"),
            ("GOOGLE_CALLBACK_URL", "http://localhost:5000/api/auth/google/callback"),
            ("RAZORPAY_KEY_ID", "rzp_test_key"),
            ("RAZORPAY_KEY_SECRET", "rzp_secret"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Config, ConfigError> {
        Config::from_lookup(|name| vars.get(name).map(|value| value.to_string()))
    }

    /// Expected: Ok with every optional setting at its default
    #[test]
    fn applies_defaults() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.frontend_url, "http://localhost:8081");
        assert_eq!(config.groq_api_key, None);
        assert_eq!(config.groq_model, "llama-3.3-70b-versatile");
        assert_eq!(config.mastodon_instance, "https://mastodon.social");
        assert_eq!(config.email_backend, EmailBackend::Log);
        assert!(!config.otp_in_response);
    }

    /// Expected: Err(MissingEnvVar) naming the absent variable
    #[test]
    fn reports_missing_variable_by_name() {
        let mut vars = base_vars();
        vars.remove("RAZORPAY_KEY_SECRET");

        match load(&vars) {
            Err(ConfigError::MissingEnvVar(name)) => assert_eq!(name, "RAZORPAY_KEY_SECRET"),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    /// Expected: Err(InvalidEnvVar) for a non-numeric port
    #[test]
    fn rejects_unparseable_port() {
        let mut vars = base_vars();
        vars.insert("PORT", "eighty");

        assert!(matches!(
            load(&vars),
            Err(ConfigError::InvalidEnvVar { name, .. }) if name == "PORT"
        ));
    }

    /// Expected: Err(MissingEnvVar) when resend is chosen without a key
    #[test]
    fn resend_requires_api_key() {
        let mut vars = base_vars();
        vars.insert("EMAIL_PROVIDER", "resend");
        assert!(matches!(load(&vars), Err(ConfigError::MissingEnvVar(_))));

        vars.insert("RESEND_API_KEY", "re_123");
        let config = load(&vars).unwrap();
        assert_eq!(
            config.email_backend,
            EmailBackend::Resend {
                api_key: "re_123".to_string()
            }
        );
    }

    /// Expected: trailing slashes are trimmed and flags parsed
    #[test]
    fn normalises_urls_and_flags() {
        let mut vars = base_vars();
        vars.insert("FRONTEND_URL", "https://app.example.com/");
        vars.insert("OTP_IN_RESPONSE", "true");

        let config = load(&vars).unwrap();
        assert_eq!(config.frontend_url, "https://app.example.com");
        assert!(config.otp_in_response);
    }
}
