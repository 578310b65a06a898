use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod certificate;
pub mod documents;
pub mod household;
pub mod ledger;
pub mod official;
pub mod resident;
pub mod search;
pub mod settings;
pub mod state;
pub mod storage;

pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

/// Listen address from `BIND_ADDR`, defaulting to all interfaces on 8080.
fn bind_address() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string())
}

pub async fn run() -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::documents::routes::list_certificate_types,
            crate::documents::routes::list_ledger_types,
            crate::documents::routes::list_purpose_options,
            crate::documents::routes::render_certificate,
            crate::documents::routes::render_ledger,
            crate::documents::routes::render_blotter_summons,
            crate::resident::routes::list_residents,
            crate::resident::routes::create_resident,
            crate::resident::routes::update_resident,
            crate::household::routes::list_households,
            crate::household::routes::list_roles,
            crate::household::routes::create_household,
            crate::household::routes::update_household,
            crate::official::routes::list_officials,
            crate::official::routes::create_official,
            crate::official::routes::delete_official,
            crate::settings::routes::get_settings,
            crate::settings::routes::update_settings,
            crate::certificate::routes::list_certificates,
            crate::certificate::routes::create_certificate,
            crate::ledger::routes::list_blotters,
            crate::ledger::routes::create_blotter,
            crate::ledger::routes::list_incomes,
            crate::ledger::routes::create_income,
            crate::ledger::routes::list_expenses,
            crate::ledger::routes::create_expense,
            crate::ledger::routes::list_events,
            crate::ledger::routes::create_event,
            crate::ledger::routes::list_youth,
            crate::ledger::routes::create_youth,
            crate::ledger::routes::list_gov_docs,
            crate::ledger::routes::create_gov_doc,
            crate::ledger::routes::list_programs_projects,
            crate::ledger::routes::create_program_project,
            crate::ledger::routes::list_logbook,
            crate::ledger::routes::create_logbook_entry
        ),
        components(
            schemas(
                documents::routes::DocumentTypeEntry,
                documents::routes::PurposeOptions,
                resident::models::Resident,
                resident::models::CreateResidentRequest,
                resident::models::UpdateResidentRequest,
                resident::models::ResidentStatus,
                household::models::Household,
                household::models::HouseholdMember,
                household::models::CreateHouseholdRequest,
                household::models::UpdateHouseholdRequest,
                household::roles::HouseholdRole,
                household::routes::RoleEntry,
                official::models::Official,
                official::models::CreateOfficialRequest,
                settings::models::Settings,
                settings::models::UpdateSettingsRequest,
                certificate::models::Certificate,
                certificate::models::CreateCertificateRequest,
                certificate::models::CertificateView,
                ledger::models::Blotter,
                ledger::models::Income,
                ledger::models::Expense,
                ledger::models::Event,
                ledger::models::Youth,
                ledger::models::GovDoc,
                ledger::models::ProgramProject,
                ledger::models::LogbookEntry,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Documents", description = "Certificate and ledger PDF generation."),
            (name = "Residents", description = "Resident registry endpoints."),
            (name = "Households", description = "Household registry endpoints."),
            (name = "Officials", description = "Official roster endpoints."),
            (name = "Settings", description = "Barangay identity settings."),
            (name = "Certificates", description = "Issued-certificate records."),
            (name = "Ledgers", description = "Flat record collections.")
        ),
        servers(
            (url = "http://127.0.0.1:8080", description = "Local server")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok();
    let app_state = web::Data::new(AppState::new());

    let prometheus = PrometheusMetricsBuilder::new("barangay_registry_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    let bind_addr = bind_address();
    log::info!("Starting server at http://{}", bind_addr);

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .configure(documents::routes::config)
                    .configure(resident::routes::config)
                    .configure(household::routes::config)
                    .configure(official::routes::config)
                    .configure(settings::routes::config)
                    .configure(certificate::routes::config)
                    .configure(ledger::routes::config),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .backlog(8192)
    .max_connections(25000)
    .bind(bind_addr)?
    .run()
    .await
}
