//! Shared page layout

use atrium_common::{AppConfig, AuthConfig};
use atrium_service::CurrentUserResponse;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// htmx response handling: swap 4xx bodies so error fragments reach `#errors`
const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"[4]..","swap":true,"error":false},{"code":"[5]..","swap":true,"error":true}]}"#;

const HTMX_SCRIPT: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Themes selectable from the switcher; the empty value follows the system
pub const THEMES: [&str; 3] = ["system", "light", "dark"];

/// Everything the layout needs to know about the visitor and the app
#[derive(Debug, Clone)]
pub struct PageContext {
    pub app_name: String,
    pub user: Option<CurrentUserResponse>,
    /// `light`, `dark`, or empty for the system preference
    pub theme: String,
    pub theme_switcher: bool,
    pub sidebar: bool,
    pub auth: AuthConfig,
}

impl PageContext {
    pub fn new(config: &AppConfig, user: Option<CurrentUserResponse>, theme: Option<String>) -> Self {
        Self {
            app_name: config.app.name.clone(),
            user,
            theme: theme.unwrap_or_else(|| config.theme.standard_theme.clone()),
            theme_switcher: config.theme.enable_theme_switcher,
            sidebar: config.theme.enable_sidebar,
            auth: config.auth,
        }
    }
}

fn nav_links(ctx: &PageContext) -> String {
    let mut links = vec![r#"<a href="/">Home</a>"#.to_string()];

    match &ctx.user {
        Some(user) => {
            if ctx.auth.enable_auth {
                links.push(format!(
                    r#"<a href="/profile/edit">{}</a>"#,
                    text(&user.username)
                ));
            }
            if ctx.auth.login_enabled() {
                links.push(r#"<a href="/auth/logout">Log out</a>"#.to_string());
            }
        }
        None => {
            if ctx.auth.login_enabled() {
                links.push(r#"<a href="/auth/login">Log in</a>"#.to_string());
            }
            if ctx.auth.registration_enabled() {
                links.push(r#"<a href="/auth/signup">Sign up</a>"#.to_string());
            }
        }
    }

    links.join("\n")
}

fn theme_switcher(ctx: &PageContext) -> String {
    if !ctx.theme_switcher {
        return String::new();
    }

    let current = if ctx.theme.is_empty() { "system" } else { ctx.theme.as_str() };
    let options: String = THEMES
        .iter()
        .map(|theme| {
            let selected = if *theme == current { " selected" } else { "" };
            format!(r#"<option value="{theme}"{selected}>{theme}</option>"#)
        })
        .collect();

    format!(
        r#"<form class="theme-switcher" hx-post="/theme" hx-trigger="change">
<label for="theme">Theme</label>
<select id="theme" name="theme">{options}</select>
</form>"#
    )
}

/// Wrap `body` in the full HTML document
pub fn layout(ctx: &PageContext, title: &str, body: &str) -> String {
    let nav = nav_links(ctx);
    let switcher = theme_switcher(ctx);
    let navigation = if ctx.sidebar {
        format!(r#"<aside class="sidebar"><nav>{nav}</nav>{switcher}</aside>"#)
    } else {
        format!(r#"<header class="topbar"><nav>{nav}</nav>{switcher}</header>"#)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="htmx-config" content="{htmx_config}">
<title>{title} | {app}</title>
<link rel="stylesheet" href="/assets/css/styles.css">
<script src="{HTMX_SCRIPT}"></script>
</head>
<body class="{body_class}">
{navigation}
<main>
<h1>{title}</h1>
<div id="errors" aria-live="polite"></div>
{body}
</main>
<script>
document.addEventListener("clearErrors", function () {{
  document.getElementById("errors").innerHTML = "";
}});
</script>
</body>
</html>"#,
        theme = attr(&ctx.theme),
        htmx_config = attr(HTMX_CONFIG),
        title = text(title),
        app = text(&ctx.app_name),
        body_class = if ctx.sidebar { "with-sidebar" } else { "with-topbar" },
    )
}
