pub mod client;
pub mod dashboard;
pub mod entity;
pub mod license;
pub mod notice;
pub mod page;
pub mod product;
pub mod session;
pub mod subscription;
