use crate::config::MailConfig;
use crate::types::mail::SendEmail;
use log::{debug, error};
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};

/// Where reset-password mails point. Static link, not bound to a user.
pub const RESET_PASSWORD_LINK: &str = "http://127.0.0.1:4200/reset-password";

pub fn reset_password_email(from: &str, to: &str) -> SendEmail {
    SendEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: "Reset your account password".to_string(),
        text: format!(
            "Please click this link to reset your account password: {}",
            RESET_PASSWORD_LINK
        ),
    }
}

pub async fn send_email(config: &MailConfig, email: SendEmail) -> Result<String, String> {
    let payload =
        serde_json::to_string(&email).map_err(|e| format!("serialize email failed: {e}"))?;

    debug!("[mail] -> POST {}", config.endpoint);

    let client: Client = ClientBuilder::new()
        .user_agent("account-auth/1.0 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let t0 = Instant::now();
    let res = client
        .post(&config.endpoint)
        .bearer_auth(&config.api_key)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| format!("read body failed: {e}"))?;

    debug!(
        "[mail] <- status: {status} in {} ms",
        t0.elapsed().as_millis()
    );

    if status.is_success() {
        Ok(body)
    } else {
        error!("[mail] delivery failed: HTTP {status}: {body}");
        Err(format!("Resend API error: HTTP {status}: {body}"))
    }
}
