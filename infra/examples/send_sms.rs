//! Example: deliver a one-time code and hand the session over to the app
//!
//! Reads `SMS_*` and `CONTINUATION_TOKEN_*` variables (or a `.env` file).
//! Set `SMS_SIMULATION=true` to log instead of calling a gateway.
//!
//! Run with: cargo run --example send_sms -- +4915112345678

use ca_core::services::ContinuationTokenService;
use ca_core::ResumeOutcome;
use ca_infra::sms::create_sms_sender;
use ca_infra::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ca_infra::load_config();
    init_tracing(&config.logging)?;

    let phone = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "15112345678".to_string());

    let sender = create_sms_sender(&config.gateway)?;
    println!("Sending through the '{}' provider", sender.provider_name());
    sender.send(&phone, "Your login code: 481516").await;

    // The browser session continues on the phone once the code is confirmed.
    let tokens = ContinuationTokenService::from_settings(&config.token)?;
    let issued = tokens.issue_default("user-42", "browser-session-7", "web-login")?;
    println!("Continuation token: {}", issued.signed);

    match tokens.resume(&issued.signed, Some("user-42")) {
        ResumeOutcome::Resumed(token) => {
            println!("Resumed session {}", token.originating_session_id())
        }
        ResumeOutcome::Expired => println!("Token expired"),
        ResumeOutcome::Rejected(reason) => println!("Token rejected: {:?}", reason),
    }

    Ok(())
}
