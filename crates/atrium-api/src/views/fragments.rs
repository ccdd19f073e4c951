//! HTML fragments returned to htmx requests

use atrium_service::CurrentUserResponse;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// Alert listing one or more error messages
pub fn error_alert(messages: &[String]) -> String {
    let lines: String = messages
        .iter()
        .map(|message| format!("<p>{}</p>", text(message)))
        .collect();
    format!(r#"<div class="alert alert-error" role="alert">{lines}</div>"#)
}

/// Informational alert
pub fn success_alert(message: &str) -> String {
    format!(
        r#"<div class="alert alert-success" role="status"><p>{}</p></div>"#,
        text(message)
    )
}

pub fn hello(name: &str) -> String {
    format!("<div>Hello, {}</div>", text(name))
}

pub fn verification_sent(email: &str) -> String {
    format!(
        r#"<div class="alert alert-success" role="status">
<p>Almost done! We sent a verification link to <strong>{}</strong>.</p>
<p>Open it within 24 hours to activate your account.</p>
</div>"#,
        text(email)
    )
}

pub fn account_created(user: &CurrentUserResponse, login_enabled: bool) -> String {
    let next = if login_enabled {
        r#"<p><a href="/auth/login">Log in</a></p>"#
    } else {
        ""
    };
    format!(
        r#"<div class="alert alert-success" role="status">
<p>Welcome, {}! Your account has been created.</p>
{next}
</div>"#,
        text(&user.username)
    )
}

pub fn login_success(user: &CurrentUserResponse) -> String {
    success_alert(&format!("Welcome back, {}!", user.username))
}

pub fn reset_requested() -> String {
    success_alert("If an account exists for that email, a link to reset your password is on its way.")
}

pub fn password_updated() -> String {
    r#"<div class="alert alert-success" role="status">
<p>Your password has been updated.</p>
<p><a href="/auth/login">Log in</a></p>
</div>"#
        .to_string()
}

/// Avatar image or initial placeholder
pub fn avatar(user: &CurrentUserResponse) -> String {
    match &user.avatar_url {
        Some(url) => format!(
            r#"<img class="avatar" src="{}" alt="{}" width="96" height="96">"#,
            attr(url),
            attr(&user.username)
        ),
        None => {
            let initial = user
                .username
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            format!(
                r#"<span class="avatar avatar-placeholder">{}</span>"#,
                text(&initial)
            )
        }
    }
}

/// Profile card and edit form; replaced as a whole after each update
pub fn profile_section(
    user: &CurrentUserResponse,
    avatar_enabled: bool,
    notice: Option<&str>,
) -> String {
    let notice = notice.map(success_alert).unwrap_or_default();
    let pending = user
        .pending_email
        .as_deref()
        .map(|email| {
            format!(
                r#"<p class="hint">Waiting for confirmation of <strong>{}</strong>.</p>"#,
                text(email)
            )
        })
        .unwrap_or_default();
    let avatar_field = if avatar_enabled {
        r#"<label for="avatar">Avatar</label>
<input id="avatar" name="avatar" type="file" accept="image/png,image/jpeg,image/gif,image/webp">"#
    } else {
        ""
    };

    format!(
        r##"{notice}
<div class="profile-card">
{avatar}
<div>
<p class="profile-name">{username}</p>
<p class="profile-email">{email}</p>
{pending}
</div>
</div>
<form id="profile-form" hx-post="/profile/edit" hx-encoding="multipart/form-data" hx-target="#profile" hx-swap="innerHTML">
<label for="username">Username</label>
<input id="username" name="username" type="text" value="{username_value}" required minlength="3" maxlength="20">
<label for="email">Email</label>
<input id="email" name="email" type="email" value="{email_value}" required>
{avatar_field}
<button type="submit">Save</button>
</form>"##,
        avatar = avatar(user),
        username = text(&user.username),
        email = text(&user.email),
        username_value = attr(&user.username),
        email_value = attr(&user.email),
    )
}
