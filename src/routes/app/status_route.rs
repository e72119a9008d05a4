use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dal::job_db;
use crate::domain::job::JobStatus;
use crate::routes::tracker_route::redirect_to_tracker;

#[derive(Deserialize)]
struct SetStatusForm {
    status: String,
}

#[post("/jobs/{id}/status")]
async fn set_status(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    form: web::Form<SetStatusForm>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path) else {
        return redirect_to_tracker("Invalid job id.");
    };
    let Some(status) = JobStatus::from_slug(&form.status) else {
        return redirect_to_tracker("Unknown status.");
    };

    match job_db::update_status(&pool, id, status).await {
        Ok(()) => redirect_to_tracker(&format!("Status set to {}.", status.as_str())),
        Err(e) => {
            log::error!("Status update failed: {:?}", e);
            redirect_to_tracker(&format!("Status update failed: {}", e))
        }
    }
}
