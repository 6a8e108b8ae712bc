use std::sync::Arc;

use axum::extract::multipart::Field;
use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::{header, StatusCode};
use axum::response::Json;
use serde_json::{json, Value};

use super::{ApiError, AppState};
use crate::images::ImageUpload;
use crate::models::{Card, CardDraft};
use crate::validate;

/// GET /api/cards
///
/// List every stored card.
pub async fn list_cards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Card>>, ApiError> {
    let cards = state.store.list().await?;
    Ok(Json(cards))
}

/// POST /api/cards
///
/// Create a card. Accepts a JSON body, or multipart/form-data with the
/// card fields as text parts plus an optional binary `imgFile` part.
/// Pipeline: attach upload, validate, insert; a failure at any step
/// returns before storage is touched.
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    req: Request,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    let (draft, upload) = read_submission(req).await?;
    let draft = state.images.attach(draft, upload).await?;
    let card = validate::validate_new(&draft)?;
    let card = state.store.insert(card).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// PUT /api/cards/:id
///
/// Update a card with merge semantics: only fields present (and non-empty)
/// in the body overwrite stored values. Same body shapes as create.
pub async fn update_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    req: Request,
) -> Result<Json<Card>, ApiError> {
    let (draft, upload) = read_submission(req).await?;
    let draft = state.images.attach(draft, upload).await?;
    validate::validate_patch(&draft)?;
    let card = state.store.update(&id, draft).await?;
    Ok(Json(card))
}

/// DELETE /api/cards/:id
pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete(&id).await?;
    Ok(Json(json!({ "deleted": id })))
}

// ---------------------------------------------------------------------------
// Body extraction
// ---------------------------------------------------------------------------

/// Pull a card payload (and optional image upload) out of the request,
/// whichever of the two supported body encodings it uses.
async fn read_submission(req: Request) -> Result<(CardDraft, Option<ImageUpload>), ApiError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {e}")))?;
        read_multipart(multipart).await
    } else {
        let Json(draft) = Json::<CardDraft>::from_request(req, &())
            .await
            .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {e}")))?;
        Ok((draft, None))
    }
}

async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(CardDraft, Option<ImageUpload>), ApiError> {
    let mut draft = CardDraft::default();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "imgFile" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("invalid upload data: {e}")))?
                    .to_vec();
                upload = Some(ImageUpload {
                    file_name,
                    content_type,
                    data,
                });
            }
            "name" => draft.name = Some(text(field).await?),
            "cardType" => draft.card_type = Some(text(field).await?),
            "rarity" => draft.rarity = Some(text(field).await?),
            "description" => draft.description = Some(text(field).await?),
            "attack" => draft.attack = Some(parse_stat("attack", &text(field).await?)?),
            "defense" => draft.defense = Some(parse_stat("defense", &text(field).await?)?),
            "abilities" => push_abilities(&mut draft, &text(field).await?),
            "img_name" => draft.img_name = Some(text(field).await?),
            // Unknown form fields are ignored, matching the JSON path.
            _ => {}
        }
    }

    Ok((draft, upload))
}

async fn text(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart field: {e}")))
}

fn parse_stat(field: &str, raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("{field}: must be an integer")))
}

/// Abilities arrive either as one JSON array string or as repeated
/// `abilities` fields; both mark the field as present, even when empty.
fn push_abilities(draft: &mut CardDraft, raw: &str) {
    let abilities = draft.abilities.get_or_insert_with(Vec::new);
    if raw.is_empty() {
        return;
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(entries) => abilities.extend(entries),
        Err(_) => abilities.push(raw.to_string()),
    }
}
