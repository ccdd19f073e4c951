//! Verification and password reset messages

use atrium_core::{OutgoingMail, TOKEN_VALIDITY_HOURS};
use html_escape::{encode_double_quoted_attribute, encode_text};

fn link_mail(
    to: &str,
    subject: String,
    app_name: &str,
    intro: &str,
    link: &str,
    action: &str,
) -> OutgoingMail {
    let html = format!(
        "<p>{intro}</p>\
         <p><a href=\"{href}\">{action}</a></p>\
         <p>This link expires in {TOKEN_VALIDITY_HOURS} hours. \
         If you did not request it, you can ignore this email.</p>\
         <p>{app}</p>",
        intro = encode_text(intro),
        href = encode_double_quoted_attribute(link),
        action = encode_text(action),
        app = encode_text(app_name),
    );

    OutgoingMail {
        to: to.to_string(),
        subject,
        html,
    }
}

/// Message asking the recipient to confirm `to` as their address
pub fn verification_mail(app_name: &str, base_url: &str, to: &str, token: &str) -> OutgoingMail {
    let link = format!("{base_url}/auth/verify-email?token={token}");
    link_mail(
        to,
        format!("{app_name}: verify your email address"),
        app_name,
        "Please confirm your email address by opening the link below.",
        &link,
        "Verify email address",
    )
}

/// Message carrying a password reset link
pub fn password_reset_mail(app_name: &str, base_url: &str, to: &str, token: &str) -> OutgoingMail {
    let link = format!("{base_url}/auth/reset-password?token={token}");
    link_mail(
        to,
        format!("{app_name}: reset your password"),
        app_name,
        "Someone asked to reset the password of your account.",
        &link,
        "Choose a new password",
    )
}
