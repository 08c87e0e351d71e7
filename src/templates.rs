use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use page_templates::{HeadPage, SumPage};
use thiserror::Error;
use tracing::error;

pub type PageResult = Result<Html<String>, PageError>;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

pub fn head_page(number1: i64, number2: i64) -> PageResult {
    let page = HeadPage { number1, number2 };
    Ok(Html(page.render()?))
}

pub fn sum_page(value1: i64, value2: i64) -> PageResult {
    let page = SumPage::new(value1, value2);
    Ok(Html(page.render()?))
}
