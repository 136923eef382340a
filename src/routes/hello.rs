use actix_web::{web, HttpResponse, Responder};

use crate::greeting::Greeter;

#[derive(serde::Deserialize)]
pub struct GreetingQuery {
    name: Option<String>,
}

#[derive(serde::Serialize)]
pub struct GreetingResponse {
    message: String,
}

pub async fn hello(
    query: web::Query<GreetingQuery>,
    greeter: web::Data<Greeter>,
) -> impl Responder {
    let message = greeter.greet(query.name.as_deref());
    HttpResponse::Ok().json(GreetingResponse { message })
}
