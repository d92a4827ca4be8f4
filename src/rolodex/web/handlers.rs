use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::pages;
use super::AppState;
use crate::commands::{CmdResult, ContactInput};
use crate::error::RolodexError;
use crate::model::Stats;

#[derive(Debug, Deserialize, Default)]
pub struct IndexParams {
    #[serde(default)]
    pub search: String,
    pub flash: Option<String>,
    pub level: Option<String>,
}

/// Raw POST body of the add and edit forms.
#[derive(Debug, Deserialize, Default)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl From<ContactForm> for ContactInput {
    fn from(form: ContactForm) -> Self {
        ContactInput::new(form.name, form.phone, form.email, form.address)
    }
}

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Html<String> {
    info!(search = %params.search, "GET /");
    let api = state.lock_api();

    let loaded = api
        .search_contacts(&params.search)
        .and_then(|found| api.stats().map(|s| (found.listed, s.stats.unwrap_or_default())));

    let (contacts, stats, flash) = match loaded {
        Ok((mut listed, stats)) => {
            listed.sort_by_key(|c| c.name.to_lowercase());
            let flash = params
                .flash
                .as_deref()
                .map(|m| (params.level.as_deref().unwrap_or("success"), m.to_string()));
            (listed, stats, flash)
        }
        Err(e) => (Vec::new(), Stats::default(), Some(("error", e.to_string()))),
    };

    let flash = flash.as_ref().map(|(level, message)| (*level, message.as_str()));
    Html(pages::index_page(&contacts, &params.search, stats, flash))
}

pub async fn add_form() -> Html<String> {
    Html(pages::contact_form_page(
        "Add Contact",
        "/add",
        &ContactInput::default(),
        None,
    ))
}

pub async fn add_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, Html<String>> {
    info!(name = %form.name, "POST /add");
    let input = ContactInput::from(form);
    let mut api = state.lock_api();

    match api.add_contact(&input) {
        Ok(result) => Ok(flash_redirect(&success_message(&result), "success")),
        Err(e) => Err(Html(pages::contact_form_page(
            "Add Contact",
            "/add",
            &input,
            Some(&e.to_string()),
        ))),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, Redirect> {
    info!(name = %name, "GET /edit");
    let api = state.lock_api();

    match api.get_contact(&name) {
        Ok(contact) => {
            let action = format!("/edit/{}", pages::encode_segment(&contact.name));
            let values = ContactInput::new(
                contact.name,
                contact.phone,
                contact.email,
                contact.address,
            );
            Ok(Html(pages::contact_form_page(
                "Edit Contact",
                &action,
                &values,
                None,
            )))
        }
        Err(_) => Err(flash_redirect("Contact not found", "error")),
    }
}

pub async fn edit_submit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, Html<String>> {
    info!(name = %name, "POST /edit");
    let input = ContactInput::from(form);
    let mut api = state.lock_api();

    match api.update_contact(&name, &input) {
        Ok(result) => Ok(flash_redirect(&success_message(&result), "success")),
        Err(RolodexError::ContactNotFound(_)) => Ok(flash_redirect("Contact not found", "error")),
        Err(e) => {
            let action = format!("/edit/{}", pages::encode_segment(&name));
            Err(Html(pages::contact_form_page(
                "Edit Contact",
                &action,
                &input,
                Some(&e.to_string()),
            )))
        }
    }
}

pub async fn delete_submit(State(state): State<AppState>, Path(name): Path<String>) -> Redirect {
    info!(name = %name, "POST /delete");
    let mut api = state.lock_api();

    match api.delete_contact(&name) {
        Ok(result) => flash_redirect(&success_message(&result), "success"),
        Err(e) => flash_redirect(&e.to_string(), "error"),
    }
}

pub async fn api_contacts(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Json<Value>, (StatusCode, String)> {
    info!(search = %params.search, "GET /api/contacts");
    let api = state.lock_api();
    let result = api
        .search_contacts(&params.search)
        .map_err(internal_error)?;
    Ok(Json(json!(result.listed)))
}

pub async fn api_stats(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, String)> {
    info!("GET /api/stats");
    let api = state.lock_api();
    let result = api.stats().map_err(internal_error)?;
    Ok(Json(json!(result.stats.unwrap_or_default())))
}

fn flash_redirect(message: &str, level: &str) -> Redirect {
    Redirect::to(&format!(
        "/?flash={}&level={}",
        pages::encode_query(message),
        level
    ))
}

fn success_message(result: &CmdResult) -> String {
    result
        .messages
        .first()
        .map(|m| m.content.clone())
        .unwrap_or_default()
}

fn internal_error(e: RolodexError) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
