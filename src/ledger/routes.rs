//! Ledger record endpoints.
//!
//! Eight flat record collections share the same list/create shape. The
//! POST body is the record itself; the server assigns the id, so whatever
//! id the client sends is ignored.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::ledger::models::{
    Blotter, Event, Expense, GovDoc, Income, LogbookEntry, ProgramProject, Youth,
};
use crate::state::{
    AppState, BLOTTERS_OBJECT, EVENTS_OBJECT, EXPENSES_OBJECT, GOV_DOCS_OBJECT, INCOMES_OBJECT,
    LOGBOOK_OBJECT, PROGRAMS_PROJECTS_OBJECT, YOUTH_OBJECT,
};
use crate::{search, ErrorResponse};

#[derive(Deserialize, ToSchema)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

#[utoipa::path(
    get,
    path = "/api/blotters",
    tag = "Ledgers",
    params(("q" = Option<String>, Query, description = "Case-insensitive literal search")),
    responses((status = 200, description = "Blotter records", body = Vec<Blotter>))
)]
pub async fn list_blotters(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<Blotter> = state.get_object(BLOTTERS_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_blotters(&records, q),
        None => records,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/blotters",
    tag = "Ledgers",
    request_body = Blotter,
    responses((status = 200, description = "Blotter recorded", body = Blotter))
)]
pub async fn create_blotter(
    state: web::Data<AppState>,
    item: web::Json<Blotter>,
) -> impl Responder {
    let mut record = item.into_inner();
    let created = state
        .modify_object(BLOTTERS_OBJECT, |records: &mut Vec<Blotter>| {
            record.id = next_id(records.iter().map(|r| r.id));
            records.push(record.clone());
            record
        })
        .await;
    match created {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/incomes",
    tag = "Ledgers",
    params(("q" = Option<String>, Query, description = "Case-insensitive literal search")),
    responses((status = 200, description = "Income records", body = Vec<Income>))
)]
pub async fn list_incomes(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<Income> = state.get_object(INCOMES_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_incomes(&records, q),
        None => records,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/incomes",
    tag = "Ledgers",
    request_body = Income,
    responses((status = 200, description = "Income recorded", body = Income))
)]
pub async fn create_income(state: web::Data<AppState>, item: web::Json<Income>) -> impl Responder {
    let mut record = item.into_inner();
    let created = state
        .modify_object(INCOMES_OBJECT, |records: &mut Vec<Income>| {
            record.id = next_id(records.iter().map(|r| r.id));
            records.push(record.clone());
            record
        })
        .await;
    match created {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Ledgers",
    params(("q" = Option<String>, Query, description = "Case-insensitive literal search")),
    responses((status = 200, description = "Expense records", body = Vec<Expense>))
)]
pub async fn list_expenses(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<Expense> = state.get_object(EXPENSES_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_expenses(&records, q),
        None => records,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Ledgers",
    request_body = Expense,
    responses((status = 200, description = "Expense recorded", body = Expense))
)]
pub async fn create_expense(
    state: web::Data<AppState>,
    item: web::Json<Expense>,
) -> impl Responder {
    let mut record = item.into_inner();
    let created = state
        .modify_object(EXPENSES_OBJECT, |records: &mut Vec<Expense>| {
            record.id = next_id(records.iter().map(|r| r.id));
            records.push(record.clone());
            record
        })
        .await;
    match created {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Ledgers",
    params(("q" = Option<String>, Query, description = "Case-insensitive literal search")),
    responses((status = 200, description = "Event records", body = Vec<Event>))
)]
pub async fn list_events(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<Event> = state.get_object(EVENTS_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_events(&records, q),
        None => records,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Ledgers",
    request_body = Event,
    responses((status = 200, description = "Event recorded", body = Event))
)]
pub async fn create_event(state: web::Data<AppState>, item: web::Json<Event>) -> impl Responder {
    let mut record = item.into_inner();
    let created = state
        .modify_object(EVENTS_OBJECT, |records: &mut Vec<Event>| {
            record.id = next_id(records.iter().map(|r| r.id));
            records.push(record.clone());
            record
        })
        .await;
    match created {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/youth",
    tag = "Ledgers",
    params(("q" = Option<String>, Query, description = "Case-insensitive literal search")),
    responses((status = 200, description = "Youth profiles", body = Vec<Youth>))
)]
pub async fn list_youth(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<Youth> = state.get_object(YOUTH_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_youth(&records, q),
        None => records,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/youth",
    tag = "Ledgers",
    request_body = Youth,
    responses((status = 200, description = "Youth profile recorded", body = Youth))
)]
pub async fn create_youth(state: web::Data<AppState>, item: web::Json<Youth>) -> impl Responder {
    let mut record = item.into_inner();
    let created = state
        .modify_object(YOUTH_OBJECT, |records: &mut Vec<Youth>| {
            record.id = next_id(records.iter().map(|r| r.id));
            records.push(record.clone());
            record
        })
        .await;
    match created {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/gov-docs",
    tag = "Ledgers",
    params(("q" = Option<String>, Query, description = "Case-insensitive literal search")),
    responses((status = 200, description = "Executive orders, resolutions and ordinances", body = Vec<GovDoc>))
)]
pub async fn list_gov_docs(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<GovDoc> = state.get_object(GOV_DOCS_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_gov_docs(&records, q),
        None => records,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/gov-docs",
    tag = "Ledgers",
    request_body = GovDoc,
    responses((status = 200, description = "Document recorded", body = GovDoc))
)]
pub async fn create_gov_doc(state: web::Data<AppState>, item: web::Json<GovDoc>) -> impl Responder {
    let mut record = item.into_inner();
    let created = state
        .modify_object(GOV_DOCS_OBJECT, |records: &mut Vec<GovDoc>| {
            record.id = next_id(records.iter().map(|r| r.id));
            records.push(record.clone());
            record
        })
        .await;
    match created {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/programs-projects",
    tag = "Ledgers",
    params(("q" = Option<String>, Query, description = "Case-insensitive literal search")),
    responses((status = 200, description = "Programs and projects", body = Vec<ProgramProject>))
)]
pub async fn list_programs_projects(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<ProgramProject> = state.get_object(PROGRAMS_PROJECTS_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_programs_projects(&records, q),
        None => records,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/programs-projects",
    tag = "Ledgers",
    request_body = ProgramProject,
    responses((status = 200, description = "Program or project recorded", body = ProgramProject))
)]
pub async fn create_program_project(
    state: web::Data<AppState>,
    item: web::Json<ProgramProject>,
) -> impl Responder {
    let mut record = item.into_inner();
    let created = state
        .modify_object(PROGRAMS_PROJECTS_OBJECT, |records: &mut Vec<ProgramProject>| {
            record.id = next_id(records.iter().map(|r| r.id));
            records.push(record.clone());
            record
        })
        .await;
    match created {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/logbook",
    tag = "Ledgers",
    params(("q" = Option<String>, Query, description = "Case-insensitive literal search")),
    responses((status = 200, description = "Attendance logbook entries", body = Vec<LogbookEntry>))
)]
pub async fn list_logbook(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<LogbookEntry> = state.get_object(LOGBOOK_OBJECT).await;
    let filtered = match query.q.as_deref() {
        Some(q) => search::search_logbook(&records, q),
        None => records,
    };
    HttpResponse::Ok().json(filtered)
}

#[utoipa::path(
    post,
    path = "/api/logbook",
    tag = "Ledgers",
    request_body = LogbookEntry,
    responses((status = 200, description = "Logbook entry recorded", body = LogbookEntry))
)]
pub async fn create_logbook_entry(
    state: web::Data<AppState>,
    item: web::Json<LogbookEntry>,
) -> impl Responder {
    let mut record = item.into_inner();
    let created = state
        .modify_object(LOGBOOK_OBJECT, |records: &mut Vec<LogbookEntry>| {
            record.id = next_id(records.iter().map(|r| r.id));
            records.push(record.clone());
            record
        })
        .await;
    match created {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e)),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/blotters")
            .route(web::get().to(list_blotters))
            .route(web::post().to(create_blotter)),
    )
    .service(
        web::resource("/incomes")
            .route(web::get().to(list_incomes))
            .route(web::post().to(create_income)),
    )
    .service(
        web::resource("/expenses")
            .route(web::get().to(list_expenses))
            .route(web::post().to(create_expense)),
    )
    .service(
        web::resource("/events")
            .route(web::get().to(list_events))
            .route(web::post().to(create_event)),
    )
    .service(
        web::resource("/youth")
            .route(web::get().to(list_youth))
            .route(web::post().to(create_youth)),
    )
    .service(
        web::resource("/gov-docs")
            .route(web::get().to(list_gov_docs))
            .route(web::post().to(create_gov_doc)),
    )
    .service(
        web::resource("/programs-projects")
            .route(web::get().to(list_programs_projects))
            .route(web::post().to(create_program_project)),
    )
    .service(
        web::resource("/logbook")
            .route(web::get().to(list_logbook))
            .route(web::post().to(create_logbook_entry)),
    );
}
