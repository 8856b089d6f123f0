// src/models/license.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    common::{
        coerce::{self, lenient},
        error::AppError,
    },
    models::{
        entity::{Entity, FormInput, IdSequence},
        notice::DeleteWording,
    },
};

// Licença de um cliente para uma aplicação dentro de um plano.
// client_comp_code / subscription_id / main_app_id são texto livre, sem
// vínculo com as outras coleções.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct License {
    #[schema(example = 1)]
    pub client_subscription_id: u64,

    #[schema(example = "CLI001")]
    pub client_comp_code: String,

    #[schema(example = "SUB001")]
    pub subscription_id: String,

    #[schema(example = "APP001")]
    pub main_app_id: String,

    #[schema(example = 50)]
    pub max_allowed_users: u32,

    #[schema(value_type = Option<String>, format = Date, example = "2024-01-01")]
    pub start_date: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date, example = "2024-12-31")]
    pub end_date: Option<NaiveDate>,

    #[schema(example = "12A001")]
    pub form_12a_no: String,

    #[schema(example = "80G001")]
    pub form_80g_no: String,

    #[schema(example = "/api/v1/endpoint1")]
    pub form_end_point: String,

    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LicenseDraft {
    pub client_comp_code: String,
    pub subscription_id: String,
    pub main_app_id: String,

    #[serde(deserialize_with = "lenient::u32")]
    pub max_allowed_users: u32,

    #[serde(deserialize_with = "lenient::date")]
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,

    #[serde(deserialize_with = "lenient::date")]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,

    pub form_12a_no: String,
    pub form_80g_no: String,
    pub form_end_point: String,
    pub is_active: bool,
}

impl Default for LicenseDraft {
    fn default() -> Self {
        Self {
            client_comp_code: String::new(),
            subscription_id: String::new(),
            main_app_id: String::new(),
            max_allowed_users: 0,
            start_date: None,
            end_date: None,
            form_12a_no: String::new(),
            form_80g_no: String::new(),
            form_end_point: String::new(),
            is_active: true,
        }
    }
}

impl FormInput for LicenseDraft {
    const FIELDS: &'static [&'static str] = &[
        "client_comp_code",
        "subscription_id",
        "main_app_id",
        "max_allowed_users",
        "start_date",
        "end_date",
        "form_12a_no",
        "form_80g_no",
        "form_end_point",
        "is_active",
    ];

    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), AppError> {
        match field {
            "client_comp_code" => self.client_comp_code = raw.to_string(),
            "subscription_id" => self.subscription_id = raw.to_string(),
            "main_app_id" => self.main_app_id = raw.to_string(),
            "max_allowed_users" => self.max_allowed_users = coerce::parse_int_or_zero(raw),
            "start_date" => self.start_date = coerce::parse_date(raw),
            "end_date" => self.end_date = coerce::parse_date(raw),
            "form_12a_no" => self.form_12a_no = raw.to_string(),
            "form_80g_no" => self.form_80g_no = raw.to_string(),
            "form_end_point" => self.form_end_point = raw.to_string(),
            "is_active" => self.is_active = coerce::parse_flag(raw),
            _ => {
                return Err(AppError::UnknownField {
                    entity: License::LABEL,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl Entity for License {
    type Key = u64;
    type Draft = LicenseDraft;

    const LABEL: &'static str = "License";

    const DELETE_WORDING: DeleteWording = DeleteWording::Emphatic;

    fn key(&self) -> &u64 {
        &self.client_subscription_id
    }

    fn display_name(&self) -> &str {
        &self.client_comp_code
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_comp_code.as_str(),
            self.subscription_id.as_str(),
            self.main_app_id.as_str(),
        ]
    }

    fn to_draft(&self) -> LicenseDraft {
        LicenseDraft {
            client_comp_code: self.client_comp_code.clone(),
            subscription_id: self.subscription_id.clone(),
            main_app_id: self.main_app_id.clone(),
            max_allowed_users: self.max_allowed_users,
            start_date: self.start_date,
            end_date: self.end_date,
            form_12a_no: self.form_12a_no.clone(),
            form_80g_no: self.form_80g_no.clone(),
            form_end_point: self.form_end_point.clone(),
            is_active: self.is_active,
        }
    }

    fn from_draft(key: u64, draft: LicenseDraft) -> Self {
        Self {
            client_subscription_id: key,
            client_comp_code: draft.client_comp_code,
            subscription_id: draft.subscription_id,
            main_app_id: draft.main_app_id,
            max_allowed_users: draft.max_allowed_users,
            start_date: draft.start_date,
            end_date: draft.end_date,
            form_12a_no: draft.form_12a_no,
            form_80g_no: draft.form_80g_no,
            form_end_point: draft.form_end_point,
            is_active: draft.is_active,
        }
    }

    fn apply_draft(&mut self, draft: LicenseDraft) {
        *self = Self::from_draft(self.client_subscription_id, draft);
    }

    fn allocate_key(_draft: &LicenseDraft, ids: &mut IdSequence) -> Result<u64, AppError> {
        Ok(ids.next_id())
    }

    fn sequence_hint(&self) -> Option<u64> {
        Some(self.client_subscription_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_come_from_form_text() {
        let mut draft = LicenseDraft::default();
        draft.set_field("start_date", "2024-03-01").unwrap();
        draft.set_field("end_date", "next year").unwrap();

        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(draft.end_date, None);
    }

    #[test]
    fn unknown_field_is_reported() {
        let mut draft = LicenseDraft::default();
        let err = draft.set_field("client_subscription_id", "7").unwrap_err();
        assert!(matches!(err, AppError::UnknownField { entity: "License", .. }));
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let draft = LicenseDraft {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        let license = License::from_draft(3, draft);
        let json = serde_json::to_value(&license).unwrap();

        assert_eq!(json["start_date"], "2024-01-01");
        assert!(json["end_date"].is_null());
        assert_eq!(json["client_subscription_id"], 3);
    }
}
