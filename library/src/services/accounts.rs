use crate::services::capabilities::{EmailSender, SecurityCodeGenerator};
use crate::services::ServiceError;
use log::{debug, info};

pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

/// Single `@`, non-empty local part, and a dotted domain that neither starts nor ends with the dot.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.find('.') {
        Some(first_dot) => first_dot > 0 && false == domain.ends_with('.'),
        None => false,
    }
}

pub async fn sign_up<M: EmailSender>(mailer: &M, email: &str) -> Result<bool, ServiceError> {
    if false == is_valid_email(email) {
        debug!("rejected sign up for {email:?}");
        return Ok(false);
    }

    mailer.send_email(email, WELCOME_MESSAGE).await?;
    info!("signed up {email}");
    Ok(true)
}

pub async fn login<G, M>(codes: &G, mailer: &M, email: &str) -> Result<(), ServiceError>
where
    G: SecurityCodeGenerator,
    M: EmailSender,
{
    let code = codes.generate_code();
    mailer.send_email(email, &code.to_string()).await
}
