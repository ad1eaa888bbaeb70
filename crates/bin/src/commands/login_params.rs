//! Login-params command - registers assertions and prints what a cookie login
//! for the site would post.

use persona::{AssertionRegistry, Authorizer, PersonaAuthorizer};
use tracing::info;

use super::resolve_assertion;
use crate::cli::LoginParamsArgs;
use crate::output::{OutputFormat, print_fields};

/// Run the login-params command
pub fn run(
    args: &LoginParamsArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = AssertionRegistry::new();
    for arg in &args.assertions {
        let assertion = resolve_assertion(arg)?;
        let email = registry.register(&assertion)?;
        info!(%email, "Registered assertion");
    }

    let authorizer = PersonaAuthorizer::new(args.email.clone(), registry)
        .with_skip_expiration_check(args.skip_expiration_check);
    let params = authorizer
        .login_parameters_for_site(&args.site)
        .ok_or_else(|| {
            format!(
                "No usable assertion for {} at {}",
                authorizer.email_address(),
                args.site
            )
        })?;
    let path = authorizer.login_path_for_site(&args.site);

    match format {
        OutputFormat::Human => {
            let mut fields = vec![
                ("Cookie login", authorizer.uses_cookie_based_login().to_string()),
                ("Login path", path),
            ];
            let mut keys: Vec<&String> = params.keys().collect();
            keys.sort();
            for key in keys {
                fields.push((key.as_str(), params[key].clone()));
            }
            print_fields(&fields);
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "cookie_login": authorizer.uses_cookie_based_login(),
                "path": path,
                "parameters": params,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
