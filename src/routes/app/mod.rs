pub mod import_route;
pub mod job_route;
pub mod round_route;
pub mod status_route;
pub mod tracker_route;
