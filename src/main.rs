#[actix_web::main]
async fn main() -> std::io::Result<()> {
    barangay_registry_server::run().await
}
