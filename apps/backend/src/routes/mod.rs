use actix_web::web;

pub mod books;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes)
        .configure(books::configure_routes);
}
