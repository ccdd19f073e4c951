//! Home page, hello form, and JSON greeting

use atrium_service::HelloRequest;
use axum::{response::Html, Form, Json};
use serde::Serialize;

use crate::extractors::{OptionalSessionUser, Page};
use crate::response::Fragment;
use crate::views::{self, pages};

/// GET /
pub async fn home(Page(ctx): Page) -> Html<String> {
    Html(pages::home(&ctx))
}

/// POST /hello
pub async fn hello(Form(request): Form<HelloRequest>) -> Fragment {
    Fragment(views::hello(request.name.trim()))
}

/// Body of `GET /api`
#[derive(Debug, Serialize)]
pub struct HelloWorld {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// GET /api
pub async fn hello_world(OptionalSessionUser(user): OptionalSessionUser) -> Json<HelloWorld> {
    Json(HelloWorld {
        message: "Hello World",
        user_id: user.map(|user| user.id.to_string()),
    })
}
