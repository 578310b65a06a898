//! Barangay settings endpoints.

use actix_web::{web, HttpResponse, Responder};

use crate::settings::models::{Settings, UpdateSettingsRequest};
use crate::state::{AppState, SETTINGS_OBJECT};
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "The configured jurisdiction identity", body = Settings)
    )
)]
pub async fn get_settings(state: web::Data<AppState>) -> impl Responder {
    let settings: Settings = state.get_object(SETTINGS_OBJECT).await;
    HttpResponse::Ok().json(settings)
}

#[utoipa::path(
    put,
    path = "/api/settings",
    tag = "Settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = Settings)
    )
)]
pub async fn update_settings(
    state: web::Data<AppState>,
    item: web::Json<UpdateSettingsRequest>,
) -> impl Responder {
    let item = item.into_inner();
    let merged = state
        .modify_object(SETTINGS_OBJECT, |settings: &mut Settings| {
            if let Some(v) = item.barangay {
                settings.barangay = v;
            }
            if let Some(v) = item.municipality {
                settings.municipality = v;
            }
            if let Some(v) = item.province {
                settings.province = v;
            }
            if let Some(v) = item.phone_number {
                settings.phone_number = v;
            }
            if let Some(v) = item.email {
                settings.email = v;
            }
            if let Some(v) = item.barangay_seal {
                settings.barangay_seal = Some(v);
            }
            if let Some(v) = item.municipal_seal {
                settings.municipal_seal = Some(v);
            }
            settings.clone()
        })
        .await;
    match merged {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/settings")
            .route(web::get().to(get_settings))
            .route(web::put().to(update_settings)),
    );
}
