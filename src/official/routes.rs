//! Official roster endpoints.

use actix_web::{web, HttpResponse, Responder};

use crate::official::models::{CreateOfficialRequest, Official};
use crate::state::{AppState, OFFICIALS_OBJECT};
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/officials",
    tag = "Officials",
    responses(
        (status = 200, description = "The official roster", body = Vec<Official>)
    )
)]
pub async fn list_officials(state: web::Data<AppState>) -> impl Responder {
    let officials: Vec<Official> = state.get_object(OFFICIALS_OBJECT).await;
    HttpResponse::Ok().json(officials)
}

#[utoipa::path(
    post,
    path = "/api/officials",
    tag = "Officials",
    request_body = CreateOfficialRequest,
    responses(
        (status = 200, description = "Official created", body = Official)
    )
)]
pub async fn create_official(
    state: web::Data<AppState>,
    item: web::Json<CreateOfficialRequest>,
) -> impl Responder {
    let item = item.into_inner();
    let created = state
        .modify_object(OFFICIALS_OBJECT, |officials: &mut Vec<Official>| {
            let new_id = officials.iter().map(|o| o.id).max().unwrap_or(0) + 1;
            let official = Official {
                id: new_id,
                name: item.name,
                role: item.role,
                section: item.section,
                contact: item.contact,
                zone: item.zone,
                term_start: item.term_start,
                term_end: item.term_end,
            };
            officials.push(official.clone());
            official
        })
        .await;
    match created {
        Ok(official) => HttpResponse::Ok().json(official),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/officials/{id}",
    tag = "Officials",
    params(
        ("id" = i64, Path, description = "Official ID")
    ),
    responses(
        (status = 200, description = "Official deleted"),
        (status = 404, description = "Official not found", body = ErrorResponse)
    )
)]
pub async fn delete_official(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    let removed = state
        .update_object(OFFICIALS_OBJECT, |officials: &mut Vec<Official>| {
            let initial_len = officials.len();
            officials.retain(|o| o.id != id);
            (officials.len() < initial_len).then_some(())
        })
        .await;
    match removed {
        Ok(Some(())) => HttpResponse::Ok().finish(),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::not_found("Official not found")),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/officials")
            .route(web::get().to(list_officials))
            .route(web::post().to(create_official)),
    )
    .service(web::resource("/officials/{id}").route(web::delete().to(delete_official)));
}
