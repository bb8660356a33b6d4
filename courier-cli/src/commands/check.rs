//! `courier check` - validate a message without sending it.

use super::{build_message, read_files};
use crate::error::{CliError, CliResult};
use crate::{MessageArgs, info, success, warn};
use courier_webhooks::validate_send;

pub async fn run(args: &MessageArgs, verbose: bool) -> CliResult<()> {
    let message = build_message(args)?;
    let files = read_files(args).await?;

    let violations = validate_send(&message, &files);
    if !violations.is_empty() {
        for violation in &violations {
            warn(&violation.message);
        }
        return Err(CliError::Invalid(violations.len()));
    }

    success(&format!(
        "Message is valid ({} embed(s), {} file(s))",
        message.embeds().len(),
        files.len()
    ));
    if verbose {
        info("Payload:");
        println!("{}", message.to_json_pretty()?);
    }

    Ok(())
}
