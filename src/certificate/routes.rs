//! Issued-certificate record endpoints.
//!
//! These persist the audit trail of what was generated; the PDF itself is
//! produced by the document routes and never stored.

use actix_web::{web, HttpResponse, Responder};
use chrono::Local;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::certificate::models::{Certificate, CertificateView, CreateCertificateRequest};
use crate::state::{AppState, CERTIFICATES_OBJECT};
use crate::{search, ErrorResponse};

#[derive(Deserialize, ToSchema)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/certificates",
    tag = "Certificates",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive literal search")
    ),
    responses(
        (status = 200, description = "Issued certificates with derived expiry and status", body = Vec<CertificateView>)
    )
)]
pub async fn list_certificates(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let certificates: Vec<Certificate> = state.get_object(CERTIFICATES_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_certificates(&certificates, q),
        None => certificates,
    };

    let today = Local::now().date_naive();
    let views: Vec<CertificateView> = filtered
        .into_iter()
        .map(|record| CertificateView::from_record(record, today))
        .collect();
    HttpResponse::Ok().json(views)
}

#[utoipa::path(
    post,
    path = "/api/certificates",
    tag = "Certificates",
    request_body = CreateCertificateRequest,
    responses(
        (status = 200, description = "Certificate record saved", body = Certificate)
    )
)]
pub async fn create_certificate(
    state: web::Data<AppState>,
    item: web::Json<CreateCertificateRequest>,
) -> impl Responder {
    let item = item.into_inner();
    let record = Certificate {
        id: Uuid::new_v4(),
        resident_id: item.resident_id,
        resident_name: item.resident_name,
        certificate_type: item.certificate_type,
        issued_date: item.issued_date,
        amount: item.amount,
        purpose: item.purpose,
        civil_status: item.civil_status,
        age: item.age,
        ownership_text: item.ownership_text,
        business_name: item.business_name,
        child_count: item.child_count,
    };

    let saved = state
        .modify_object(CERTIFICATES_OBJECT, |certificates: &mut Vec<Certificate>| {
            certificates.push(record.clone());
            record
        })
        .await;
    match saved {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/certificates")
            .route(web::get().to(list_certificates))
            .route(web::post().to(create_certificate)),
    );
}
