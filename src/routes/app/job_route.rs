use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dal::job_db;
use crate::domain::job::NewJob;
use crate::routes::tracker_route::redirect_to_tracker;
use crate::services::OpenaiClient;

#[derive(Deserialize)]
struct AddJobForm {
    posting: String,
}

#[post("/jobs")]
async fn add_job(
    pool: web::Data<PgPool>,
    openai_client: web::Data<OpenaiClient>,
    form: web::Form<AddJobForm>,
) -> HttpResponse {
    if form.posting.trim().is_empty() {
        return redirect_to_tracker("Please paste the job posting text first.");
    }

    let details = match openai_client.extract_job_details(&form.posting).await {
        Ok(details) => details,
        Err(e) => {
            log::error!("Error extracting details: {:?}", e);
            return redirect_to_tracker(&format!("Failed to parse job details: {}", e));
        }
    };

    let job = NewJob::from_extracted(&details);
    if job.company_name.is_empty() {
        return redirect_to_tracker(
            "The extracted details had no company name. Please check the input text.",
        );
    }

    // Check-then-insert; single-user deployment, so the race is accepted
    match job_db::company_exists(&pool, &job.company_name).await {
        Ok(true) => {
            return redirect_to_tracker(&format!("{} is already in the tracker!", job.company_name))
        }
        Ok(false) => {}
        Err(e) => {
            log::error!("Duplicate check failed: {:?}", e);
            return redirect_to_tracker(&format!("Failed to check for duplicates: {}", e));
        }
    }

    match job_db::insert_job(&pool, &job).await {
        Ok(_) => redirect_to_tracker(&format!("Added {}!", job.company_name)),
        Err(e) => {
            log::error!("Failed to add job: {:?}", e);
            redirect_to_tracker(&format!("Failed to add job: {}", e))
        }
    }
}

#[post("/jobs/{id}/delete")]
async fn delete_job(pool: web::Data<PgPool>, path: web::Path<String>) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path) else {
        return redirect_to_tracker("Invalid job id.");
    };

    match job_db::delete_job(&pool, id).await {
        Ok(Some(company)) => redirect_to_tracker(&format!("Deleted {}!", company)),
        Ok(None) => redirect_to_tracker("That job was already removed."),
        Err(e) => {
            log::error!("Delete failed: {:?}", e);
            redirect_to_tracker(&format!("Delete failed: {}", e))
        }
    }
}
