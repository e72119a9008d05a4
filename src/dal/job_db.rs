use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::job::{JobStatus, NewJob};

#[derive(Debug, sqlx::FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub company_name: String,
    pub offer_type: String,
    pub stipend: String,
    pub ctc: String,
    pub eligibility: String,
    pub branches: String,
    pub role: String,
    pub recruitment_process: String,
    pub application_deadline: String,
    pub form_link: String,
    pub poc_name: String,
    pub poc_phone: String,
    pub status: String,
    pub completion_notes: String,
    pub date_added: DateTime<Utc>,
}

pub async fn insert_job(pool: &PgPool, job: &NewJob) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        insert into job
            (id, company_name, offer_type, stipend, ctc, eligibility, branches, role,
             recruitment_process, application_deadline, form_link, poc_name, poc_phone,
             status, completion_notes, date_added)
        values
            ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, now())
        "#,
    )
    .bind(id)
    .bind(&job.company_name)
    .bind(&job.offer_type)
    .bind(&job.stipend)
    .bind(&job.ctc)
    .bind(&job.eligibility)
    .bind(&job.branches)
    .bind(&job.role)
    .bind(&job.recruitment_process)
    .bind(&job.application_deadline)
    .bind(&job.form_link)
    .bind(&job.poc_name)
    .bind(&job.poc_phone)
    .bind(job.status.as_str())
    .bind(&job.completion_notes)
    .execute(pool)
    .await?;

    Ok(id)
}

pub async fn list_jobs(
    pool: &PgPool,
    status: Option<JobStatus>,
) -> Result<Vec<JobRow>, sqlx::Error> {
    match status {
        Some(status) => {
            sqlx::query_as::<_, JobRow>(
                r#"
                select
                    id, company_name, offer_type, stipend, ctc, eligibility, branches,
                    role, recruitment_process, application_deadline, form_link,
                    poc_name, poc_phone, status, completion_notes, date_added
                from
                    job
                where
                    status = $1
                order by
                    date_added desc
                "#,
            )
            .bind(status.as_str())
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, JobRow>(
                r#"
                select
                    id, company_name, offer_type, stipend, ctc, eligibility, branches,
                    role, recruitment_process, application_deadline, form_link,
                    poc_name, poc_phone, status, completion_notes, date_added
                from
                    job
                order by
                    date_added desc
                "#,
            )
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn company_exists(pool: &PgPool, company_name: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        select exists(select 1 from job where company_name = $1)
        "#,
    )
    .bind(company_name)
    .fetch_one(pool)
    .await
}

pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: JobStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        update job set status = $2 where id = $1
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn update_notes(pool: &PgPool, id: Uuid, notes: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        update job set completion_notes = $2 where id = $1
        "#,
    )
    .bind(id)
    .bind(notes)
    .execute(pool)
    .await?;

    Ok(())
}

/// Deletes one record and reports the company name it belonged to, or None
/// when the id was already gone.
pub async fn delete_job(pool: &PgPool, id: Uuid) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        delete from job where id = $1 returning company_name
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
