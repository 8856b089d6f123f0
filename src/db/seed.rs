// src/db/seed.rs

// Registros de exemplo carregados na inicialização.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    client::Client, license::License, product::Product, subscription::Subscription,
};

pub fn clients() -> Vec<Client> {
    vec![
        client(1, "CL001", "Tech Solutions Inc", "TechSol", true),
        client(2, "CL002", "Digital Innovations Ltd", "DigInno", true),
        client(3, "CL003", "Future Systems Corp", "FutureSys", false),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "DataGPT", "2.1.0", "DGPT", "DGPT-001", "AI-powered data analysis and insights platform", true),
        product(2, "Testament", "1.5.2", "TEST", "TEST-002", "Document management and testing framework", true),
        product(3, "CheckMate", "3.0.1", "CHKM", "CHKM-003", "Quality assurance and validation system", true),
        product(4, "HRMS", "4.2.0", "HRMS", "HRMS-004", "Human Resource Management System", false),
    ]
}

pub fn subscriptions() -> Vec<Subscription> {
    vec![
        subscription("SUB001", "Basic Plan", Decimal::new(9999, 2), 10, true),
        subscription("SUB002", "Premium Plan", Decimal::new(19999, 2), 50, true),
        subscription("SUB003", "Enterprise Plan", Decimal::new(49999, 2), 100, false),
    ]
}

pub fn licenses() -> Vec<License> {
    vec![
        License {
            client_subscription_id: 1,
            client_comp_code: "CLI001".into(),
            subscription_id: "SUB001".into(),
            main_app_id: "APP001".into(),
            max_allowed_users: 50,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            form_12a_no: "12A001".into(),
            form_80g_no: "80G001".into(),
            form_end_point: "/api/v1/endpoint1".into(),
            is_active: true,
        },
        License {
            client_subscription_id: 2,
            client_comp_code: "CLI002".into(),
            subscription_id: "SUB002".into(),
            main_app_id: "APP002".into(),
            max_allowed_users: 25,
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            form_12a_no: "12A002".into(),
            form_80g_no: "80G002".into(),
            form_end_point: "/api/v1/endpoint2".into(),
            is_active: false,
        },
    ]
}

fn client(id: u64, code: &str, name: &str, short_name: &str, is_active: bool) -> Client {
    Client {
        client_comp_id: id,
        client_comp_code: code.into(),
        client_comp_name: name.into(),
        client_comp_short_name: short_name.into(),
        is_active,
    }
}

fn product(
    id: u64,
    name: &str,
    version: &str,
    code: &str,
    model_no: &str,
    desc: &str,
    is_active: bool,
) -> Product {
    Product {
        main_app_id: id,
        main_app_name: name.into(),
        main_app_version: version.into(),
        main_app_code: code.into(),
        main_app_model_no: model_no.into(),
        main_app_desc: desc.into(),
        is_active,
    }
}

// Todos os planos de exemplo duram um ano
fn subscription(id: &str, name: &str, price: Decimal, max_users: u32, is_active: bool) -> Subscription {
    Subscription {
        subscription_id: id.into(),
        subscription_name: name.into(),
        subscription_price: price,
        duration_days: 365,
        max_allowed_users: max_users,
        is_active,
    }
}
