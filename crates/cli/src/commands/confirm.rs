use clg_core::Result;
use clg_utils::ConfirmationRequest;
use std::time::Duration;

pub fn execute(
    prompt: String,
    negative: String,
    warning: Option<String>,
    force: bool,
    timeout: u64,
) -> Result<()> {
    let mut request = ConfirmationRequest::new(prompt)
        .negative_message(negative)
        .force(force)
        .timeout(Duration::from_secs(timeout));
    if let Some(warning) = warning {
        request = request.warning(warning);
    }

    request.ask()?;
    tracing::debug!("confirmation granted");
    Ok(())
}
