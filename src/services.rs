// src/services.rs

pub mod dashboard_service;
pub mod entity_manager;
pub mod navigation;
pub mod session;

pub use dashboard_service::DashboardService;
pub use entity_manager::{Dialog, EntityManager, ManagerView, Mutation};
pub use session::SessionService;
