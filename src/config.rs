// src/config.rs

use std::{env, path::PathBuf, sync::Arc};

use crate::{
    db::{seed, FileStorage, KeyValueStore},
    handlers::entities::{shared, SharedManager},
    models::{client::Client, license::License, product::Product, subscription::Subscription},
    services::{DashboardService, EntityManager, SessionService},
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SESSION_STORE_PATH: &str = ".cps-admin/local-storage.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub session_store_path: PathBuf,
}

impl AppConfig {
    /// Carrega o `.env` (se existir) e lê as variáveis do processo.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, default: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            bind_addr: read("BIND_ADDR", DEFAULT_BIND_ADDR),
            session_store_path: PathBuf::from(read("SESSION_STORE_PATH", DEFAULT_SESSION_STORE_PATH)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: SessionService,
    pub dashboard_service: DashboardService,
    // Um gerenciador por página de CRUD, todos começando com os dados de exemplo
    pub clients: SharedManager<Client>,
    pub products: SharedManager<Product>,
    pub subscriptions: SharedManager<Subscription>,
    pub licenses: SharedManager<License>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let storage = FileStorage::open(&config.session_store_path)?;
        tracing::info!("✅ Armazenamento da sessão em {}", storage.path().display());

        Self::with_storage(Arc::new(storage))
    }

    /// Monta o estado sobre qualquer armazenamento (os testes usam `MemoryStorage`).
    pub fn with_storage(storage: Arc<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let session = SessionService::new(storage)?;

        Ok(Self {
            session,
            dashboard_service: DashboardService::new(),
            clients: shared(EntityManager::seeded(seed::clients())),
            products: shared(EntityManager::seeded(seed::products())),
            subscriptions: shared(EntityManager::seeded(seed::subscriptions())),
            licenses: shared(EntityManager::seeded(seed::licenses())),
        })
    }
}
