//! HTTP surface of the document subsystem.

use actix_web::{web, HttpResponse, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::state::{
    AppState, BLOTTERS_OBJECT, CERTIFICATES_OBJECT, EVENTS_OBJECT, EXPENSES_OBJECT,
    GOV_DOCS_OBJECT, HOUSEHOLDS_OBJECT, INCOMES_OBJECT, LOGBOOK_OBJECT,
    PROGRAMS_PROJECTS_OBJECT, YOUTH_OBJECT,
};
use crate::{search, ErrorResponse};

use super::ledgers::{self, LedgerDocument, LedgerKind};
use super::registry::{self, CertificateKind};
use super::{resolver, summons, DocumentError, TypstRenderEngine};
use crate::ledger::models::Blotter;

#[derive(Serialize, ToSchema)]
pub struct DocumentTypeEntry {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Deserialize, ToSchema)]
pub struct LedgerQuery {
    /// Search filter applied to the records before printing.
    #[serde(default)]
    pub q: Option<String>,
}

fn document_error_response(err: DocumentError) -> HttpResponse {
    match &err {
        DocumentError::UnknownKind(_) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found(&err.to_string()))
        }
        e if e.is_client_error() => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()))
        }
        _ => {
            log::error!("document rendering failed: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Document rendering failed"))
        }
    }
}

fn pdf_response(filename: &str, pdf: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(pdf)
}

#[utoipa::path(
    get,
    path = "/api/documents/types",
    tag = "Documents",
    responses(
        (status = 200, description = "All certificate types", body = Vec<DocumentTypeEntry>)
    )
)]
pub async fn list_certificate_types() -> impl Responder {
    let types: Vec<DocumentTypeEntry> = CertificateKind::ALL
        .iter()
        .map(|kind| DocumentTypeEntry {
            key: kind.key(),
            label: kind.type_label(),
        })
        .collect();
    HttpResponse::Ok().json(types)
}

#[utoipa::path(
    get,
    path = "/api/documents/ledgers/types",
    tag = "Documents",
    responses(
        (status = 200, description = "All printable ledgers", body = Vec<DocumentTypeEntry>)
    )
)]
pub async fn list_ledger_types() -> impl Responder {
    let types: Vec<DocumentTypeEntry> = LedgerKind::ALL
        .iter()
        .map(|kind| DocumentTypeEntry {
            key: kind.key(),
            label: kind.title(),
        })
        .collect();
    HttpResponse::Ok().json(types)
}

/// The fixed purpose choices plus the sentinel that unlocks free text.
#[derive(Serialize, ToSchema)]
pub struct PurposeOptions {
    pub options: Vec<&'static str>,
    pub custom_sentinel: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/documents/purposes",
    tag = "Documents",
    responses(
        (status = 200, description = "Purpose choices offered on certificate forms", body = PurposeOptions)
    )
)]
pub async fn list_purpose_options() -> impl Responder {
    HttpResponse::Ok().json(PurposeOptions {
        options: resolver::PURPOSE_OPTIONS.to_vec(),
        custom_sentinel: resolver::CUSTOM_PURPOSE,
    })
}

#[utoipa::path(
    post,
    path = "/api/documents/blotters/{id}/summons",
    tag = "Documents",
    params(
        ("id" = i64, Path, description = "Blotter case number")
    ),
    responses(
        (status = 200, description = "Rendered summons PDF", content_type = "application/pdf"),
        (status = 404, description = "Unknown blotter case", body = ErrorResponse)
    )
)]
pub async fn render_blotter_summons(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();
    let blotters: Vec<Blotter> = state.get_object(BLOTTERS_OBJECT).await;
    let Some(blotter) = blotters.iter().find(|b| b.id == id) else {
        return HttpResponse::NotFound().json(ErrorResponse::not_found("Blotter not found"));
    };

    let ctx = state.document_context().await;
    let doc = summons::render(&ctx, blotter);

    let compiled = web::block(move || {
        TypstRenderEngine::render(
            "blotter-summons.typ",
            &doc.source,
            &doc.assets,
            &doc.output_name,
            None,
        )
    })
    .await;

    match compiled {
        Ok(Ok(doc)) => pdf_response(&doc.filename, doc.pdf),
        Ok(Err(err)) => document_error_response(err),
        Err(e) => {
            log::error!("render worker failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Document rendering failed"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/documents/certificates/{key}",
    tag = "Documents",
    params(
        ("key" = String, Path, description = "Certificate type key, e.g. brgy-clearance")
    ),
    responses(
        (status = 200, description = "Rendered PDF", content_type = "application/pdf"),
        (status = 400, description = "Invalid form payload", body = ErrorResponse),
        (status = 404, description = "Unknown certificate type", body = ErrorResponse)
    )
)]
pub async fn render_certificate(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<Value>,
) -> impl Responder {
    let key = path.into_inner();
    let Some(kind) = CertificateKind::from_key(&key) else {
        return document_error_response(DocumentError::UnknownKind(key));
    };

    let ctx = state.document_context().await;
    let rendered = match registry::render(kind, &ctx, form.into_inner()) {
        Ok(rendered) => rendered,
        Err(err) => return document_error_response(err),
    };

    // Compilation shells out to the Typst CLI; keep it off the executor.
    let compiled = web::block(move || {
        TypstRenderEngine::render(
            &kind.template_filename(),
            &rendered.source,
            &rendered.assets,
            &rendered.output_name,
            None,
        )
    })
    .await;

    match compiled {
        Ok(Ok(doc)) => pdf_response(&doc.filename, doc.pdf),
        Ok(Err(err)) => document_error_response(err),
        Err(e) => {
            log::error!("render worker failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Document rendering failed"))
        }
    }
}

async fn assemble_ledger(
    state: &web::Data<AppState>,
    kind: LedgerKind,
    query: Option<&str>,
) -> LedgerDocument {
    let settings = state.document_context().await.settings;
    let q = query.unwrap_or_default();
    let filter = query.map(str::trim).filter(|f| !f.is_empty());

    match kind {
        LedgerKind::Residents => {
            let ctx = state.document_context().await;
            let records = search::search_residents(&ctx.residents, q);
            ledgers::resident::render(&settings, &records, filter)
        }
        LedgerKind::Households => {
            let records: Vec<_> = state.get_object(HOUSEHOLDS_OBJECT).await;
            let records = search::search_households(&records, q);
            ledgers::household::render(&settings, &records, filter)
        }
        LedgerKind::Blotters => {
            let records: Vec<_> = state.get_object(BLOTTERS_OBJECT).await;
            let records = search::search_blotters(&records, q);
            ledgers::blotter::render(&settings, &records, filter)
        }
        LedgerKind::Certificates => {
            let records: Vec<_> = state.get_object(CERTIFICATES_OBJECT).await;
            let records = search::search_certificates(&records, q);
            ledgers::certificate::render(&settings, &records, Local::now().date_naive(), filter)
        }
        LedgerKind::Incomes => {
            let records: Vec<_> = state.get_object(INCOMES_OBJECT).await;
            let records = search::search_incomes(&records, q);
            ledgers::finance::render_incomes(&settings, &records, filter)
        }
        LedgerKind::Expenses => {
            let records: Vec<_> = state.get_object(EXPENSES_OBJECT).await;
            let records = search::search_expenses(&records, q);
            ledgers::finance::render_expenses(&settings, &records, filter)
        }
        LedgerKind::Events => {
            let records: Vec<_> = state.get_object(EVENTS_OBJECT).await;
            let records = search::search_events(&records, q);
            ledgers::event::render(&settings, &records, filter)
        }
        LedgerKind::Youth => {
            let records: Vec<_> = state.get_object(YOUTH_OBJECT).await;
            let records = search::search_youth(&records, q);
            ledgers::youth::render(&settings, &records, filter)
        }
        LedgerKind::GovDocs => {
            let records: Vec<_> = state.get_object(GOV_DOCS_OBJECT).await;
            let records = search::search_gov_docs(&records, q);
            ledgers::gov_doc::render(&settings, &records, filter)
        }
        LedgerKind::ProgramsProjects => {
            let records: Vec<_> = state.get_object(PROGRAMS_PROJECTS_OBJECT).await;
            let records = search::search_programs_projects(&records, q);
            ledgers::program_project::render(&settings, &records, filter)
        }
        LedgerKind::Logbook => {
            let records: Vec<_> = state.get_object(LOGBOOK_OBJECT).await;
            let records = search::search_logbook(&records, q);
            ledgers::logbook::render(&settings, &records, filter)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/documents/ledgers/{key}",
    tag = "Documents",
    params(
        ("key" = String, Path, description = "Ledger key, e.g. blotters"),
        ("q" = Option<String>, Query, description = "Search filter applied before printing")
    ),
    responses(
        (status = 200, description = "Rendered PDF", content_type = "application/pdf"),
        (status = 404, description = "Unknown ledger", body = ErrorResponse)
    )
)]
pub async fn render_ledger(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LedgerQuery>,
) -> impl Responder {
    let key = path.into_inner();
    let Some(kind) = LedgerKind::from_key(&key) else {
        return HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "unknown ledger '{}'",
            key
        )));
    };

    let doc = assemble_ledger(&state, kind, query.q.as_deref()).await;
    let template_filename = format!("{}.typ", kind.key());

    let compiled = web::block(move || {
        TypstRenderEngine::render(
            &template_filename,
            &doc.source,
            &doc.assets,
            &doc.output_name,
            None,
        )
    })
    .await;

    match compiled {
        Ok(Ok(doc)) => pdf_response(&doc.filename, doc.pdf),
        Ok(Err(err)) => document_error_response(err),
        Err(e) => {
            log::error!("render worker failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Document rendering failed"))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/documents/types").route(web::get().to(list_certificate_types)),
    )
    .service(web::resource("/documents/purposes").route(web::get().to(list_purpose_options)))
    .service(
        web::resource("/documents/blotters/{id}/summons")
            .route(web::post().to(render_blotter_summons)),
    )
    .service(
        web::resource("/documents/ledgers/types").route(web::get().to(list_ledger_types)),
    )
    .service(
        web::resource("/documents/ledgers/{key}").route(web::post().to(render_ledger)),
    )
    .service(
        web::resource("/documents/certificates/{key}").route(web::post().to(render_certificate)),
    );
}
