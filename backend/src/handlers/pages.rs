use axum::{
    extract::State,
    http::{
        header::{CACHE_CONTROL, COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, Uri,
    },
    response::{Html, IntoResponse, Response},
};

use crate::{
    error::AppError,
    models::{Appearance, PageData, LOGIN_COMPONENT, WELCOME_COMPONENT},
    state::AppState,
    templates::ShellDocument,
    utils::cookies::{
        build_clear_cookie, extract_cookie_value, extract_decoded_cookie, APPEARANCE_COOKIE_NAME,
        ROOT_COOKIE_PATH, STATUS_COOKIE_NAME,
    },
};

pub async fn welcome(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    render_page(&state, &headers, &uri, WELCOME_COMPONENT)
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    render_page(&state, &headers, &uri, LOGIN_COMPONENT)
}

/// Renders the bootstrap document for `component`, consuming the status flash.
pub fn render_page(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
    component: &str,
) -> Result<Response, AppError> {
    let cookies = cookie_header(headers);
    let appearance =
        Appearance::from_cookie(extract_cookie_value(&cookies, APPEARANCE_COOKIE_NAME).as_deref());
    let status = extract_decoded_cookie(&cookies, STATUS_COOKIE_NAME);
    let had_flash = status.is_some();

    let config = &state.config;
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let page = PageData::new(component, url, &config.app_name, status);
    let page_json = page.to_json()?;
    let lang = config.html_lang();

    let body = ShellDocument {
        lang: &lang,
        appearance,
        title: &config.app_name,
        entry: &config.app_entry,
        page_json: &page_json,
    }
    .render();

    tracing::debug!(
        component,
        appearance = appearance.as_str(),
        flash = had_flash,
        "rendering shell"
    );

    let mut response = Html(body).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    if had_flash {
        let clear = build_clear_cookie(STATUS_COOKIE_NAME, ROOT_COOKIE_PATH, state.cookie_options());
        let value = HeaderValue::from_str(&clear)
            .map_err(|err| AppError::InternalServerError(err.into()))?;
        response_headers.append(SET_COOKIE, value);
    }
    Ok(response)
}

/// All `Cookie` headers joined; HTTP/2 clients may split them.
fn cookie_header(headers: &HeaderMap) -> String {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ")
}
