use crate::{
    api::{attendance, dashboard, department, employee, report},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let check_limiter = Arc::new(build_limiter(config.rate_check_per_min));
    let read_limiter = Arc::new(build_limiter(config.rate_read_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/attendance")
                    .service(
                        web::resource("/check-in")
                            .wrap(check_limiter.clone())
                            .route(web::post().to(attendance::check_in)),
                    )
                    .service(
                        web::resource("/check-out")
                            .wrap(check_limiter.clone())
                            .route(web::put().to(attendance::check_out)),
                    )
                    .service(
                        web::resource("")
                            .wrap(read_limiter.clone())
                            .route(web::get().to(attendance::list_records)),
                    ),
            )
            .service(
                web::scope("/employees")
                    .wrap(read_limiter.clone())
                    .service(web::resource("").route(web::get().to(employee::list_employees)))
                    .service(
                        web::resource("/{employee_id}/metrics")
                            .route(web::get().to(employee::employee_metrics)),
                    ),
            )
            .service(
                web::scope("/dashboard")
                    .wrap(read_limiter.clone())
                    .service(web::resource("").route(web::get().to(dashboard::dashboard)))
                    .service(web::resource("/trend").route(web::get().to(dashboard::trend))),
            )
            .service(
                web::scope("/departments").wrap(read_limiter.clone()).service(
                    web::resource("/metrics")
                        .route(web::get().to(department::department_metrics)),
                ),
            )
            .service(
                web::scope("/reports").wrap(read_limiter).service(
                    web::resource("/attendance")
                        .route(web::get().to(report::attendance_report)),
                ),
            ),
    );
}
