use std::env;

/// Runtime configuration. Built once in `main` and handed to the app as
/// `web::Data<EnvConfig>`; handlers never reach for a global.
#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    /// Shared secret for signing and verifying account tokens.
    pub secret_key: String,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub from_address: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            secret_key: Self::get_env("SECRET_KEY"),
            mail: MailConfig {
                api_key: Self::get_env("RESEND_KEY"),
                endpoint: env::var("RESEND_ENDPOINT")
                    .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
                from_address: Self::get_env("MAIL_FROM"),
            },
        }
    }
}
