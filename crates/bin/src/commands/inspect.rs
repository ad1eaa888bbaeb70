//! Inspect command - decodes an assertion and reports its claims.

use persona::{ExpirationPolicy, parse_assertion};

use super::resolve_assertion;
use crate::cli::InspectArgs;
use crate::output::{OutputFormat, print_fields};

/// Run the inspect command
pub fn run(args: &InspectArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let assertion = resolve_assertion(&args.assertion)?;
    let claims = parse_assertion(&assertion)?;
    let expired = ExpirationPolicy::default().is_expired(&claims);

    match format {
        OutputFormat::Human => print_fields(&[
            ("Email", claims.email.clone()),
            ("Origin", claims.origin.clone()),
            ("Expiration", claims.expiration.to_rfc3339()),
            ("Expired", expired.to_string()),
        ]),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "email": claims.email,
                "origin": claims.origin,
                "exp": claims.expiration_millis(),
                "expiration": claims.expiration.to_rfc3339(),
                "expired": expired,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
