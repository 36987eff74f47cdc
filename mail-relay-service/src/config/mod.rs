use secrecy::Secret;
use service_core::config::{self as core_config, get_env, get_env_flag, get_env_u16};
use service_core::error::AppError;

#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    pub common: core_config::Config,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// STARTTLS on a plaintext connection.
    pub use_tls: bool,
    /// Implicit TLS from the first byte. Takes precedence over `use_tls`.
    pub use_ssl: bool,
    /// Authenticates against the relay and doubles as the sender address.
    pub username: String,
    pub password: Secret<String>,
}

impl MailRelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = core_config::is_production();

        Ok(MailRelayConfig {
            common: common_config,
            smtp: SmtpConfig {
                host: get_env("MAIL_SERVER", Some("smtp.gmail.com"), is_prod)?,
                port: get_env_u16("MAIL_PORT", 587, is_prod)?,
                use_tls: get_env_flag("MAIL_USE_TLS", true, is_prod)?,
                use_ssl: get_env_flag("MAIL_USE_SSL", false, is_prod)?,
                username: get_env("MAIL_USERNAME", Some(""), is_prod)?,
                password: Secret::new(get_env("MAIL_PASSWORD", Some(""), is_prod)?),
            },
        })
    }
}
