// src/models/client.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    common::{coerce, error::AppError},
    models::entity::{Entity, FormInput, IdSequence},
};

// Empresa cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Client {
    #[schema(example = 1)]
    pub client_comp_id: u64,

    #[schema(example = "CL001")]
    pub client_comp_code: String,

    #[schema(example = "Tech Solutions Inc")]
    pub client_comp_name: String,

    #[schema(example = "TechSol")]
    pub client_comp_short_name: String,

    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClientDraft {
    pub client_comp_code: String,
    pub client_comp_name: String,
    pub client_comp_short_name: String,
    pub is_active: bool,
}

impl Default for ClientDraft {
    fn default() -> Self {
        Self {
            client_comp_code: String::new(),
            client_comp_name: String::new(),
            client_comp_short_name: String::new(),
            is_active: true,
        }
    }
}

impl FormInput for ClientDraft {
    const FIELDS: &'static [&'static str] = &[
        "client_comp_code",
        "client_comp_name",
        "client_comp_short_name",
        "is_active",
    ];

    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), AppError> {
        match field {
            "client_comp_code" => self.client_comp_code = raw.to_string(),
            "client_comp_name" => self.client_comp_name = raw.to_string(),
            "client_comp_short_name" => self.client_comp_short_name = raw.to_string(),
            "is_active" => self.is_active = coerce::parse_flag(raw),
            _ => {
                return Err(AppError::UnknownField {
                    entity: Client::LABEL,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl Entity for Client {
    type Key = u64;
    type Draft = ClientDraft;

    const LABEL: &'static str = "Client";

    fn key(&self) -> &u64 {
        &self.client_comp_id
    }

    fn display_name(&self) -> &str {
        &self.client_comp_name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_comp_name.as_str(),
            self.client_comp_code.as_str(),
            self.client_comp_short_name.as_str(),
        ]
    }

    fn to_draft(&self) -> ClientDraft {
        ClientDraft {
            client_comp_code: self.client_comp_code.clone(),
            client_comp_name: self.client_comp_name.clone(),
            client_comp_short_name: self.client_comp_short_name.clone(),
            is_active: self.is_active,
        }
    }

    fn from_draft(key: u64, draft: ClientDraft) -> Self {
        Self {
            client_comp_id: key,
            client_comp_code: draft.client_comp_code,
            client_comp_name: draft.client_comp_name,
            client_comp_short_name: draft.client_comp_short_name,
            is_active: draft.is_active,
        }
    }

    fn apply_draft(&mut self, draft: ClientDraft) {
        self.client_comp_code = draft.client_comp_code;
        self.client_comp_name = draft.client_comp_name;
        self.client_comp_short_name = draft.client_comp_short_name;
        self.is_active = draft.is_active;
    }

    fn allocate_key(_draft: &ClientDraft, ids: &mut IdSequence) -> Result<u64, AppError> {
        Ok(ids.next_id())
    }

    fn sequence_hint(&self) -> Option<u64> {
        Some(self.client_comp_id)
    }
}
