use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::dal::job_db;
use crate::domain::legacy::{migrate_legacy, LegacyJobRecord};
use crate::routes::tracker_route::redirect_to_tracker;

#[derive(Deserialize)]
struct ImportForm {
    payload: String,
}

/// Imports a JSON array exported from the old tracker (two-boolean status
/// schema). Each record is migrated to the canonical schema; companies
/// already tracked are skipped.
#[post("/import")]
async fn import_legacy(pool: web::Data<PgPool>, form: web::Form<ImportForm>) -> HttpResponse {
    let records: Vec<LegacyJobRecord> = match serde_json::from_str(&form.payload) {
        Ok(records) => records,
        Err(e) => return redirect_to_tracker(&format!("Could not parse legacy export: {}", e)),
    };

    let mut inserted = 0;
    let mut skipped = 0;
    for record in records {
        let job = migrate_legacy(record);
        if job.company_name.is_empty() {
            skipped += 1;
            continue;
        }

        match job_db::company_exists(&pool, &job.company_name).await {
            Ok(true) => {
                skipped += 1;
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("Import duplicate check failed: {:?}", e);
                return redirect_to_tracker(&format!("Import stopped: {}", e));
            }
        }

        if let Err(e) = job_db::insert_job(&pool, &job).await {
            log::error!("Failed to import {}: {:?}", job.company_name, e);
            return redirect_to_tracker(&format!(
                "Import stopped at {}: {}",
                job.company_name, e
            ));
        }
        inserted += 1;
    }

    redirect_to_tracker(&format!(
        "Imported {} jobs, skipped {} already tracked or empty.",
        inserted, skipped
    ))
}
