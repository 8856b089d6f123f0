// src/handlers.rs

pub mod auth;
pub mod dashboard;
pub mod entities;
pub mod pages;
