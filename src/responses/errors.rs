use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};
use tracing::error;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML error page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Страница не найдена".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        // Internals stay in the server log.
        other => {
            error!("request failed: {other}");
            "Внутренняя ошибка сервера".to_string()
        }
    };

    let page = html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                title { "Ошибка " (status) }
                link rel="stylesheet" href="/static/landing/css/main.css";
            }
            body class="error-page" {
                h1 { "Ошибка " (status) }
                p { (message) }
                p { a href="/" { "← На главную" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
