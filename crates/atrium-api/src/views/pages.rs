//! Full pages rendered for GET requests

use atrium_service::CurrentUserResponse;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::fragments::{error_alert, profile_section, success_alert};
use super::layout::{layout, PageContext};

pub fn home(ctx: &PageContext) -> String {
    let greeting = ctx
        .user
        .as_ref()
        .map(|user| format!("<p>Logged in as <strong>{}</strong>.</p>", text(&user.username)))
        .unwrap_or_default();

    let body = format!(
        r##"{greeting}
<form hx-post="/hello" hx-target="#hello-result" hx-swap="innerHTML">
<label for="name">Name</label>
<input id="name" name="name" type="text" required>
<button type="submit">Say hello</button>
</form>
<div id="hello-result"></div>"##
    );
    layout(ctx, "Welcome", &body)
}

pub fn signup(ctx: &PageContext) -> String {
    let login_link = if ctx.auth.login_enabled() {
        r#"<p>Already have an account? <a href="/auth/login">Log in</a></p>"#
    } else {
        ""
    };

    let body = format!(
        r#"<form id="signup-form" hx-post="/auth/signup" hx-target="this" hx-swap="outerHTML">
<label for="username">Username</label>
<input id="username" name="username" type="text" required minlength="3" maxlength="20">
<label for="email">Email</label>
<input id="email" name="email" type="email" required>
<label for="password">Password</label>
<input id="password" name="password" type="password" required minlength="8">
<label for="password_confirm">Confirm password</label>
<input id="password_confirm" name="password_confirm" type="password" required minlength="8">
<button type="submit">Sign up</button>
</form>
{login_link}"#
    );
    layout(ctx, "Sign up", &body)
}

pub fn login(ctx: &PageContext) -> String {
    let mut links = Vec::new();
    if ctx.auth.reset_password_enabled() {
        links.push(r#"<a href="/auth/forget-password">Forgot your password?</a>"#);
    }
    if ctx.auth.registration_enabled() {
        links.push(r#"<a href="/auth/signup">Create an account</a>"#);
    }

    let body = format!(
        r#"<form id="login-form" hx-post="/auth/login" hx-target="this" hx-swap="outerHTML">
<label for="email">Email</label>
<input id="email" name="email" type="email" required>
<label for="password">Password</label>
<input id="password" name="password" type="password" required>
<button type="submit">Log in</button>
</form>
<p>{}</p>"#,
        links.join(" | ")
    );
    layout(ctx, "Log in", &body)
}

pub fn forget_password(ctx: &PageContext) -> String {
    let body = r#"<form id="forget-password-form" hx-post="/auth/forget-password" hx-target="this" hx-swap="outerHTML">
<label for="email">Email</label>
<input id="email" name="email" type="email" required>
<button type="submit">Send reset link</button>
</form>"#;
    layout(ctx, "Forgot password", body)
}

/// New-password form for a checked token, or the reason it was refused
pub fn reset_password(ctx: &PageContext, token: Result<&str, &str>) -> String {
    let body = match token {
        Ok(token) => format!(
            r#"<form id="reset-password-form" hx-post="/auth/reset-password" hx-target="this" hx-swap="outerHTML">
<input type="hidden" name="token" value="{}">
<label for="password">New password</label>
<input id="password" name="password" type="password" required minlength="8">
<label for="password_confirm">Confirm new password</label>
<input id="password_confirm" name="password_confirm" type="password" required minlength="8">
<button type="submit">Set password</button>
</form>"#,
            attr(token)
        ),
        Err(reason) => format!(
            r#"{}
<p><a href="/auth/forget-password">Request a new link</a></p>"#,
            error_alert(&[reason.to_string()])
        ),
    };
    layout(ctx, "Reset password", &body)
}

/// Outcome of following a verification link
pub fn verify_email(ctx: &PageContext, outcome: Result<&CurrentUserResponse, &str>) -> String {
    let body = match outcome {
        Ok(user) => {
            let next = if ctx.user.is_some() {
                r#"<p><a href="/profile/edit">Back to your profile</a></p>"#
            } else if ctx.auth.login_enabled() {
                r#"<p><a href="/auth/login">Log in</a></p>"#
            } else {
                ""
            };
            format!(
                "{}\n{next}",
                success_alert(&format!("Thanks! {} is now verified.", user.email))
            )
        }
        Err(reason) => error_alert(&[reason.to_string()]),
    };
    layout(ctx, "Verify email", &body)
}

pub fn profile(ctx: &PageContext, user: &CurrentUserResponse) -> String {
    let body = format!(
        r#"<section id="profile">{}</section>"#,
        profile_section(user, ctx.auth.avatar_enabled(), None)
    );
    layout(ctx, "Edit profile", &body)
}
