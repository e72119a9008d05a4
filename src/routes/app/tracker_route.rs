use std::collections::HashMap;

use actix_web::{get, http::header, web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use sqlx::PgPool;
use url::Url;
use uuid::Uuid;

use crate::dal::{job_db, round_db};
use crate::domain::deadline::{deadline_color, display_date};
use crate::domain::job::JobStatus;

pub struct RoundView {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

pub struct JobCard {
    pub id: String,
    pub company_name: String,
    pub offer_type: String,
    pub stipend: String,
    pub ctc: String,
    pub eligibility: String,
    pub branches: String,
    pub role: String,
    pub recruitment_process: String,
    pub deadline_display: String,
    pub deadline_color: String,
    pub form_link: Option<String>,
    pub poc_name: String,
    pub poc_phone: String,
    pub status: String,
    pub completion_notes: String,
    pub date_added: String,
    pub rounds: Vec<RoundView>,
    pub pending_delete: bool,
}

#[derive(Template)]
#[template(path = "tracker.html")]
struct TrackerTemplate {
    jobs: Vec<JobCard>,
    filter: String,
    notice: Option<String>,
}

#[derive(Deserialize)]
struct TrackerQuery {
    status: Option<String>,
    confirm_delete: Option<String>,
    notice: Option<String>,
}

#[get("/tracker")]
async fn tracker(pool: web::Data<PgPool>, query: web::Query<TrackerQuery>) -> HttpResponse {
    let filter = query.status.clone().unwrap_or_else(|| "all".to_string());
    let status_filter = JobStatus::from_slug(&filter);
    let mut notice = query.notice.clone();

    let rows = match job_db::list_jobs(&pool, status_filter).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Error reading jobs: {:?}", e);
            notice = Some(format!("Error reading jobs: {}", e));
            vec![]
        }
    };

    let job_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let mut rounds_by_job: HashMap<Uuid, Vec<RoundView>> = HashMap::new();
    match round_db::rounds_for_jobs(&pool, &job_ids).await {
        Ok(rounds) => {
            for round in rounds {
                rounds_by_job.entry(round.job_id).or_default().push(RoundView {
                    id: round.id.to_string(),
                    name: round.name,
                    completed: round.completed,
                });
            }
        }
        Err(e) => log::error!("Error reading rounds: {:?}", e),
    }

    let jobs = rows
        .into_iter()
        .map(|row| {
            let deadline_display = display_date(&row.application_deadline);
            let color = deadline_color(&deadline_display).to_string();
            let form_link = Url::parse(&row.form_link)
                .is_ok()
                .then(|| row.form_link.clone());
            let pending_delete = query.confirm_delete.as_deref() == Some(row.id.to_string().as_str());

            JobCard {
                id: row.id.to_string(),
                company_name: row.company_name,
                offer_type: row.offer_type,
                stipend: row.stipend,
                ctc: row.ctc,
                eligibility: row.eligibility,
                branches: row.branches,
                role: row.role,
                recruitment_process: row.recruitment_process,
                deadline_display,
                deadline_color: color,
                form_link,
                poc_name: row.poc_name,
                poc_phone: row.poc_phone,
                status: row.status,
                completion_notes: row.completion_notes,
                date_added: row.date_added.format("%d-%m-%Y").to_string(),
                rounds: rounds_by_job.remove(&row.id).unwrap_or_default(),
                pending_delete,
            }
        })
        .collect();

    HttpResponse::Ok().body(
        TrackerTemplate {
            jobs,
            filter,
            notice,
        }
        .render()
        .unwrap(),
    )
}

/// Every form post lands back on the tracker with its outcome in the
/// `notice` query parameter.
pub fn redirect_to_tracker(notice: &str) -> HttpResponse {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("notice", notice)
        .finish();
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/app/tracker?{}", query)))
        .finish()
}
