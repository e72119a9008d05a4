use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dal::{job_db, round_db};
use crate::routes::tracker_route::redirect_to_tracker;

#[derive(Deserialize)]
struct AddRoundForm {
    name: String,
}

#[post("/jobs/{id}/rounds")]
async fn add_round(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    form: web::Form<AddRoundForm>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path) else {
        return redirect_to_tracker("Invalid job id.");
    };
    let name = form.name.trim();
    if name.is_empty() {
        return redirect_to_tracker("Round name cannot be empty.");
    }

    match round_db::insert_round(&pool, id, name).await {
        Ok(()) => redirect_to_tracker(&format!("Added round {}.", name)),
        Err(e) => {
            log::error!("Failed to add round: {:?}", e);
            redirect_to_tracker(&format!("Failed to add round: {}", e))
        }
    }
}

#[derive(Deserialize)]
struct SetRoundForm {
    completed: String,
}

#[post("/jobs/{id}/rounds/{round_id}")]
async fn set_round(
    pool: web::Data<PgPool>,
    path: web::Path<(String, String)>,
    form: web::Form<SetRoundForm>,
) -> HttpResponse {
    let (_, round_id) = path.into_inner();
    let Ok(round_id) = Uuid::parse_str(&round_id) else {
        return redirect_to_tracker("Invalid round id.");
    };
    let completed = form.completed == "true";

    match round_db::set_round_completed(&pool, round_id, completed).await {
        Ok(()) => redirect_to_tracker(if completed {
            "Round marked complete."
        } else {
            "Round reopened."
        }),
        Err(e) => {
            log::error!("Failed to update round: {:?}", e);
            redirect_to_tracker(&format!("Failed to update round: {}", e))
        }
    }
}

#[derive(Deserialize)]
struct NotesForm {
    completion_notes: String,
}

#[post("/jobs/{id}/notes")]
async fn set_notes(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    form: web::Form<NotesForm>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path) else {
        return redirect_to_tracker("Invalid job id.");
    };

    match job_db::update_notes(&pool, id, form.completion_notes.trim()).await {
        Ok(()) => redirect_to_tracker("Notes saved."),
        Err(e) => {
            log::error!("Failed to save notes: {:?}", e);
            redirect_to_tracker(&format!("Failed to save notes: {}", e))
        }
    }
}
