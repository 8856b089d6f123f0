// src/models/product.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    common::{coerce, error::AppError},
    models::entity::{Entity, FormInput, IdSequence},
};

// Produto de software (aplicação principal)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub main_app_id: u64,

    #[schema(example = "DataGPT")]
    pub main_app_name: String,

    #[schema(example = "2.1.0")]
    pub main_app_version: String,

    #[schema(example = "DGPT")]
    pub main_app_code: String,

    #[schema(example = "DGPT-001")]
    pub main_app_model_no: String,

    #[schema(example = "AI-powered data analysis and insights platform")]
    pub main_app_desc: String,

    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductDraft {
    pub main_app_name: String,
    pub main_app_version: String,
    pub main_app_code: String,
    pub main_app_model_no: String,
    pub main_app_desc: String,
    pub is_active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            main_app_name: String::new(),
            main_app_version: String::new(),
            main_app_code: String::new(),
            main_app_model_no: String::new(),
            main_app_desc: String::new(),
            is_active: true,
        }
    }
}

impl FormInput for ProductDraft {
    const FIELDS: &'static [&'static str] = &[
        "main_app_name",
        "main_app_code",
        "main_app_version",
        "main_app_model_no",
        "main_app_desc",
        "is_active",
    ];

    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), AppError> {
        match field {
            "main_app_name" => self.main_app_name = raw.to_string(),
            "main_app_version" => self.main_app_version = raw.to_string(),
            "main_app_code" => self.main_app_code = raw.to_string(),
            "main_app_model_no" => self.main_app_model_no = raw.to_string(),
            "main_app_desc" => self.main_app_desc = raw.to_string(),
            "is_active" => self.is_active = coerce::parse_flag(raw),
            _ => {
                return Err(AppError::UnknownField {
                    entity: Product::LABEL,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl Entity for Product {
    type Key = u64;
    type Draft = ProductDraft;

    const LABEL: &'static str = "Product";

    fn key(&self) -> &u64 {
        &self.main_app_id
    }

    fn display_name(&self) -> &str {
        &self.main_app_name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.main_app_name.as_str(),
            self.main_app_code.as_str(),
            self.main_app_model_no.as_str(),
        ]
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            main_app_name: self.main_app_name.clone(),
            main_app_version: self.main_app_version.clone(),
            main_app_code: self.main_app_code.clone(),
            main_app_model_no: self.main_app_model_no.clone(),
            main_app_desc: self.main_app_desc.clone(),
            is_active: self.is_active,
        }
    }

    fn from_draft(key: u64, draft: ProductDraft) -> Self {
        Self {
            main_app_id: key,
            main_app_name: draft.main_app_name,
            main_app_version: draft.main_app_version,
            main_app_code: draft.main_app_code,
            main_app_model_no: draft.main_app_model_no,
            main_app_desc: draft.main_app_desc,
            is_active: draft.is_active,
        }
    }

    fn apply_draft(&mut self, draft: ProductDraft) {
        *self = Self::from_draft(self.main_app_id, draft);
    }

    fn allocate_key(_draft: &ProductDraft, ids: &mut IdSequence) -> Result<u64, AppError> {
        Ok(ids.next_id())
    }

    fn sequence_hint(&self) -> Option<u64> {
        Some(self.main_app_id)
    }
}
