//! Household endpoints, including the role vocabulary listing.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::household::models::{
    validate_members, CreateHouseholdRequest, Household, UpdateHouseholdRequest,
};
use crate::household::roles::HouseholdRole;
use crate::state::{AppState, HOUSEHOLDS_OBJECT};
use crate::{search, ErrorResponse};

#[derive(Deserialize, ToSchema)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// One entry of the household-role vocabulary.
#[derive(Serialize, ToSchema)]
pub struct RoleEntry {
    pub role: HouseholdRole,
    pub label: &'static str,
    pub definition: &'static str,
    pub icon: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/households",
    tag = "Households",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive literal search")
    ),
    responses(
        (status = 200, description = "All households, filtered by the query", body = Vec<Household>)
    )
)]
pub async fn list_households(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let households: Vec<Household> = state.get_object(HOUSEHOLDS_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_households(&households, q),
        None => households,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    get,
    path = "/api/households/roles",
    tag = "Households",
    responses(
        (status = 200, description = "The full kinship role vocabulary", body = Vec<RoleEntry>)
    )
)]
pub async fn list_roles() -> impl Responder {
    let roles: Vec<RoleEntry> = HouseholdRole::ALL
        .iter()
        .map(|role| RoleEntry {
            role: *role,
            label: role.label(),
            definition: role.definition(),
            icon: role.icon(),
        })
        .collect();
    HttpResponse::Ok().json(roles)
}

#[utoipa::path(
    post,
    path = "/api/households",
    tag = "Households",
    request_body = CreateHouseholdRequest,
    responses(
        (status = 200, description = "Household created", body = Household),
        (status = 400, description = "More than one Head member", body = ErrorResponse)
    )
)]
pub async fn create_household(
    state: web::Data<AppState>,
    item: web::Json<CreateHouseholdRequest>,
) -> impl Responder {
    let item = item.into_inner();
    if let Err(e) = validate_members(&item.members) {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&e));
    }

    let created = state
        .modify_object(HOUSEHOLDS_OBJECT, |households: &mut Vec<Household>| {
            let new_id = households.iter().map(|h| h.id).max().unwrap_or(0) + 1;
            let household = Household {
                id: new_id,
                household_number: item.household_number,
                household_type: item.household_type,
                head: item.head,
                zone: item.zone,
                date_of_residency: item.date_of_residency,
                status: item.status,
                members: item.members,
            };
            households.push(household.clone());
            household
        })
        .await;
    match created {
        Ok(household) => HttpResponse::Ok().json(household),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/households/{id}",
    tag = "Households",
    params(
        ("id" = i64, Path, description = "Household ID")
    ),
    request_body = UpdateHouseholdRequest,
    responses(
        (status = 200, description = "Household updated", body = Household),
        (status = 400, description = "More than one Head member", body = ErrorResponse),
        (status = 404, description = "Household not found", body = ErrorResponse)
    )
)]
pub async fn update_household(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    item: web::Json<UpdateHouseholdRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let item = item.into_inner();
    if let Some(members) = &item.members {
        if let Err(e) = validate_members(members) {
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&e));
        }
    }

    let updated = state
        .update_object(HOUSEHOLDS_OBJECT, |households: &mut Vec<Household>| {
            let household = households.iter_mut().find(|h| h.id == id)?;
            household.apply_patch(item);
            Some(household.clone())
        })
        .await;
    match updated {
        Ok(Some(household)) => HttpResponse::Ok().json(household),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::not_found("Household not found")),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/households")
            .route(web::get().to(list_households))
            .route(web::post().to(create_household)),
    )
    .service(web::resource("/households/roles").route(web::get().to(list_roles)))
    .service(web::resource("/households/{id}").route(web::patch().to(update_household)));
}
