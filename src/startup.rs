use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use crate::{
    routes::{default_route, import_route, job_route, round_route, status_route, tracker_route},
    services::OpenaiClient,
};

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    openai_client: OpenaiClient,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    let openai_client = web::Data::new(openai_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::default)
            .service(
                web::scope("/app")
                    .service(tracker_route::tracker)
                    .service(job_route::add_job)
                    .service(job_route::delete_job)
                    .service(status_route::set_status)
                    .service(round_route::add_round)
                    .service(round_route::set_round)
                    .service(round_route::set_notes)
                    .service(import_route::import_legacy),
            )
            .app_data(db_pool.clone())
            .app_data(openai_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
