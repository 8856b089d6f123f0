//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use cps_admin::config::{AppConfig, AppState};

#[tokio::main]
async fn main() {
    // Nível de log vem de RUST_LOG (padrão: info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::from_env();

    // .expect() é bom aqui: se o estado falhar, a aplicação não deve iniciar.
    let app_state = AppState::new(&config).expect("Falha ao inicializar o estado da aplicação.");

    let app = cps_admin::app(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener.local_addr().expect("Endereço local indisponível")
    );
    tracing::info!("📚 Swagger UI em /swagger-ui");
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
