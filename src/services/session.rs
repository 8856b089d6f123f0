// src/services/session.rs

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{common::error::AppError, db::KeyValueStore};

// Chave e valor gravados no armazenamento local
pub const SESSION_KEY: &str = "isAuthenticated";
pub const AUTHENTICATED_VALUE: &str = "true";

/// Sessão local: um único flag de "autenticado", sem verificação de credenciais.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    authenticated: Arc<AtomicBool>,
}

impl SessionService {
    /// Lê o flag uma única vez, na inicialização.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let stored = store.get(SESSION_KEY)?;
        let authenticated = stored.as_deref() == Some(AUTHENTICATED_VALUE);

        tracing::info!("Sessão restaurada: autenticado = {}", authenticated);

        Ok(Self {
            store,
            authenticated: Arc::new(AtomicBool::new(authenticated)),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    pub async fn login(&self) -> Result<(), AppError> {
        let store = self.store.clone();
        run_blocking(move || store.set(SESSION_KEY, AUTHENTICATED_VALUE)).await?;
        self.authenticated.store(true, Ordering::SeqCst);
        tracing::info!("🔓 Login efetuado");
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        let store = self.store.clone();
        run_blocking(move || store.remove(SESSION_KEY)).await?;
        self.authenticated.store(false, Ordering::SeqCst);
        tracing::info!("🔒 Logout efetuado");
        Ok(())
    }
}

// O armazenamento pode ir ao disco: fora das threads do runtime
async fn run_blocking<T, F>(operation: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|e| AppError::InternalServerError(e.into()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{FileStorage, MemoryStorage};

    #[test]
    fn only_the_literal_true_counts_as_authenticated() {
        for (value, expected) in [("true", true), ("TRUE", false), ("1", false), ("", false)] {
            let store = Arc::new(MemoryStorage::default());
            store.set(SESSION_KEY, value).unwrap();
            let session = SessionService::new(store).unwrap();
            assert_eq!(session.is_authenticated(), expected, "stored value {value:?}");
        }

        let session = SessionService::new(Arc::new(MemoryStorage::default())).unwrap();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn login_and_logout_write_back_to_storage() {
        let store = Arc::new(MemoryStorage::default());
        let session = SessionService::new(store.clone()).unwrap();

        session.login().await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("true"));

        // Uma nova sessão sobre o mesmo armazenamento já nasce autenticada
        assert!(SessionService::new(store.clone()).unwrap().is_authenticated());

        session.logout().await.unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn file_backed_session_round_trips_off_the_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStorage::open(dir.path().join("local-storage.json")).unwrap());
        let session = SessionService::new(store.clone()).unwrap();

        session.login().await.unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("true"));

        session.logout().await.unwrap();
        assert!(!SessionService::new(store).unwrap().is_authenticated());
    }
}
