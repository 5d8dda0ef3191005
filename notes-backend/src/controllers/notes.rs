//! Notes REST API — CRUD over the notes directory.
//!
//! Bodies are plain text except for the listing (JSON) and the `/write`
//! form submission. Every store error is mapped to a response here.

use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::notes::NoteError;
use crate::AppState;

/// Largest note text accepted by `PUT /notes/{name}` and `POST /write`
pub const MAX_NOTE_BYTES: usize = 8 * 1024 * 1024;

fn plain(mut builder: actix_web::HttpResponseBuilder, body: impl Into<String>) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(body.into())
}

fn error_response(err: NoteError) -> HttpResponse {
    match &err {
        NoteError::NotFound(_) => plain(HttpResponse::NotFound(), "Note not found"),
        NoteError::Conflict(_) => plain(HttpResponse::BadRequest(), "Note already exists"),
        NoteError::InvalidName(_) => plain(HttpResponse::BadRequest(), err.to_string()),
        NoteError::Io(e) => {
            log::error!("[NOTES] Filesystem error: {}", e);
            plain(HttpResponse::InternalServerError(), "Internal server error")
        }
    }
}

// --- List notes ---

/// Every note with its full text, in directory order
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.note_store.list_all().await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => error_response(e),
    }
}

// --- Read note ---

async fn read_note(data: web::Data<AppState>, name: web::Path<String>) -> impl Responder {
    let store = &data.note_store;
    let path = match store.resolve(&name) {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };

    match store.read(&path).await {
        Ok(text) => plain(HttpResponse::Ok(), text),
        Err(e) => error_response(e),
    }
}

// --- Update note ---

async fn update_note(
    data: web::Data<AppState>,
    name: web::Path<String>,
    body: String,
) -> impl Responder {
    let store = &data.note_store;
    let path = match store.resolve(&name) {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };

    match store.update(&path, &body).await {
        Ok(()) => plain(HttpResponse::Ok(), "Note updated"),
        Err(e) => error_response(e),
    }
}

// --- Delete note ---

async fn delete_note(data: web::Data<AppState>, name: web::Path<String>) -> impl Responder {
    let store = &data.note_store;
    let path = match store.resolve(&name) {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };

    match store.delete(&path).await {
        Ok(()) => plain(HttpResponse::Ok(), "Deleted"),
        Err(e) => error_response(e),
    }
}

// --- Create note ---

#[derive(Debug, Deserialize)]
struct WriteNoteForm {
    note_name: Option<String>,
    /// Missing text creates an empty note
    note: Option<String>,
}

/// Create a note from a form submission
async fn write_note(data: web::Data<AppState>, form: web::Form<WriteNoteForm>) -> impl Responder {
    let form = form.into_inner();

    let name = match form.note_name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return plain(HttpResponse::BadRequest(), "note_name is required"),
    };
    let text = form.note.unwrap_or_default();

    match data.note_store.create(&name, &text).await {
        Ok(_) => plain(HttpResponse::Created(), "Created"),
        Err(e) => error_response(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_NOTE_BYTES))
        .app_data(web::FormConfig::default().limit(MAX_NOTE_BYTES));
    cfg.service(
        web::scope("/notes")
            .route("", web::get().to(list_notes))
            .route("/{name}", web::get().to(read_note))
            .route("/{name}", web::put().to(update_note))
            .route("/{name}", web::delete().to(delete_note)),
    );
    cfg.service(web::resource("/write").route(web::post().to(write_note)));
}
