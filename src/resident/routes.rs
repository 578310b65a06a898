//! Resident CRUD endpoints.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::resident::models::{CreateResidentRequest, Resident, UpdateResidentRequest};
use crate::state::{AppState, RESIDENTS_OBJECT};
use crate::{search, ErrorResponse};

#[derive(Deserialize, ToSchema)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/residents",
    tag = "Residents",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive literal search")
    ),
    responses(
        (status = 200, description = "All residents, filtered by the query", body = Vec<Resident>)
    )
)]
pub async fn list_residents(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let residents: Vec<Resident> = state.get_object(RESIDENTS_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_residents(&residents, q),
        None => residents,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/residents",
    tag = "Residents",
    request_body = CreateResidentRequest,
    responses(
        (status = 200, description = "Resident created", body = Resident)
    )
)]
pub async fn create_resident(
    state: web::Data<AppState>,
    item: web::Json<CreateResidentRequest>,
) -> impl Responder {
    let item = item.into_inner();
    let created = state
        .modify_object(RESIDENTS_OBJECT, |residents: &mut Vec<Resident>| {
            let new_id = residents.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            let resident = Resident {
                id: new_id,
                first_name: item.first_name,
                middle_name: item.middle_name,
                last_name: item.last_name,
                suffix: item.suffix,
                civil_status: item.civil_status,
                gender: item.gender,
                nationality: item.nationality,
                religion: item.religion,
                occupation: item.occupation,
                zone: item.zone,
                barangay: item.barangay,
                town: item.town,
                province: item.province,
                status: item.status,
                birthplace: item.birthplace,
                educational_attainment: item.educational_attainment,
                birthday: item.birthday,
                is_voter: item.is_voter,
                is_pwd: item.is_pwd,
                is_senior: item.is_senior,
                is_solo: item.is_solo,
                avg_income: item.avg_income,
                mobile_number: item.mobile_number,
            };
            residents.push(resident.clone());
            resident
        })
        .await;
    match created {
        Ok(resident) => HttpResponse::Ok().json(resident),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/residents/{id}",
    tag = "Residents",
    params(
        ("id" = i64, Path, description = "Resident ID")
    ),
    request_body = UpdateResidentRequest,
    responses(
        (status = 200, description = "Resident updated", body = Resident),
        (status = 404, description = "Resident not found", body = ErrorResponse)
    )
)]
pub async fn update_resident(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    item: web::Json<UpdateResidentRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let patch = item.into_inner();
    let updated = state
        .update_object(RESIDENTS_OBJECT, |residents: &mut Vec<Resident>| {
            let resident = residents.iter_mut().find(|r| r.id == id)?;
            resident.apply_patch(patch);
            Some(resident.clone())
        })
        .await;
    match updated {
        Ok(Some(resident)) => HttpResponse::Ok().json(resident),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::not_found("Resident not found")),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/residents")
            .route(web::get().to(list_residents))
            .route(web::post().to(create_resident)),
    )
    .service(web::resource("/residents/{id}").route(web::patch().to(update_resident)));
}
