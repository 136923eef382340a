use std::net::TcpListener;

use actix_web::web;
use hello_service::{greeting::Greeter, telemetry};

#[tokio::main]
async fn main() {
    // 遥测初始化
    telemetry::init_subscriber("hello-service");

    let config = hello_service::config::get_config();
    let listener =
        TcpListener::bind(config.web.server_address()).expect("failed to bind web port.");
    let greeter = web::Data::new(Greeter::from_config(&config));

    let _ = hello_service::run(listener, greeter).await;
}
