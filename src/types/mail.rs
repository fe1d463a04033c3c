use serde::Serialize;

/// Outbound mail payload, shaped for the Resend API. Only the fields this
/// service populates; the API tolerates the rest being absent.
#[derive(Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}
