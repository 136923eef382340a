use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{greeting::Greeter, routes};

pub fn run(listener: TcpListener, greeter: web::Data<Greeter>) -> Server {
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(greeter.clone())
            .route("/health_check", web::get().to(routes::health_check))
            .route("/api/hello", web::get().to(routes::hello))
    })
    .listen(listener)
    .expect("failed to bind web port.")
    .run()
}
