use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct RoundRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub position: i32,
    pub name: String,
    pub completed: bool,
}

pub async fn insert_round(pool: &PgPool, job_id: Uuid, name: &str) -> Result<(), sqlx::Error> {
    let next_position = sqlx::query_scalar::<_, i32>(
        r#"
        select coalesce(max(position), 0) + 1 from round where job_id = $1
        "#,
    )
    .bind(job_id)
    .fetch_one(pool)
    .await?;

    sqlx::query(
        r#"
        insert into round
            (id, job_id, position, name, completed)
        values
            ($1, $2, $3, $4, false)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(job_id)
    .bind(next_position)
    .bind(name)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn set_round_completed(
    pool: &PgPool,
    round_id: Uuid,
    completed: bool,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        update round set completed = $2 where id = $1
        "#,
    )
    .bind(round_id)
    .bind(completed)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn rounds_for_jobs(
    pool: &PgPool,
    job_ids: &[Uuid],
) -> Result<Vec<RoundRow>, sqlx::Error> {
    sqlx::query_as::<_, RoundRow>(
        r#"
        select
            id, job_id, position, name, completed
        from
            round
        where
            job_id = any($1)
        order by
            job_id, position
        "#,
    )
    .bind(job_ids)
    .fetch_all(pool)
    .await
}
