// src/models/subscription.rs

use rust_decimal::Decimal;
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

// Plano de assinatura. A chave é informada pelo usuário no cadastro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Subscription {
    #[schema(example = "SUB001")]
    pub subscription_id: String,

    #[schema(example = "Basic Plan")]
    pub subscription_name: String,

    #[schema(value_type = f64, example = 99.99)]
    pub subscription_price: Decimal,

    #[schema(example = 365)]
    pub duration_days: u32,

    #[schema(example = 10)]
    pub max_allowed_users: u32,

    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubscriptionDraft {
    // Ignorado na edição: a chave não muda depois de criada
    pub subscription_id: String,
    pub subscription_name: String,

    #[serde(deserialize_with = "lenient::decimal")]
    #[schema(value_type = f64)]
    pub subscription_price: Decimal,

    #[serde(deserialize_with = "lenient::u32")]
    pub duration_days: u32,

    #[serde(deserialize_with = "lenient::u32")]
    pub max_allowed_users: u32,

    pub is_active: bool,
}

impl Default for SubscriptionDraft {
    fn default() -> Self {
        Self {
            subscription_id: String::new(),
            subscription_name: String::new(),
            subscription_price: Decimal::ZERO,
            duration_days: 0,
            max_allowed_users: 0,
            is_active: true,
        }
    }
}

impl FormInput for SubscriptionDraft {
    const FIELDS: &'static [&'static str] = &[
        "subscription_id",
        "subscription_name",
        "subscription_price",
        "duration_days",
        "max_allowed_users",
        "is_active",
    ];

    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), AppError> {
        match field {
            "subscription_id" => self.subscription_id = raw.to_string(),
            "subscription_name" => self.subscription_name = raw.to_string(),
            "subscription_price" => self.subscription_price = coerce::parse_decimal_or_zero(raw),
            "duration_days" => self.duration_days = coerce::parse_int_or_zero(raw),
            "max_allowed_users" => self.max_allowed_users = coerce::parse_int_or_zero(raw),
            "is_active" => self.is_active = coerce::parse_flag(raw),
            _ => {
                return Err(AppError::UnknownField {
                    entity: Subscription::LABEL,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl Entity for Subscription {
    type Key = String;
    type Draft = SubscriptionDraft;

    const LABEL: &'static str = "Subscription";

    const DELETE_WORDING: DeleteWording = DeleteWording::Emphatic;

    fn key(&self) -> &String {
        &self.subscription_id
    }

    fn display_name(&self) -> &str {
        &self.subscription_name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.subscription_name.as_str(), self.subscription_id.as_str()]
    }

    fn to_draft(&self) -> SubscriptionDraft {
        SubscriptionDraft {
            subscription_id: self.subscription_id.clone(),
            subscription_name: self.subscription_name.clone(),
            subscription_price: self.subscription_price,
            duration_days: self.duration_days,
            max_allowed_users: self.max_allowed_users,
            is_active: self.is_active,
        }
    }

    fn from_draft(key: String, draft: SubscriptionDraft) -> Self {
        Self {
            subscription_id: key,
            subscription_name: draft.subscription_name,
            subscription_price: draft.subscription_price,
            duration_days: draft.duration_days,
            max_allowed_users: draft.max_allowed_users,
            is_active: draft.is_active,
        }
    }

    fn apply_draft(&mut self, draft: SubscriptionDraft) {
        self.subscription_name = draft.subscription_name;
        self.subscription_price = draft.subscription_price;
        self.duration_days = draft.duration_days;
        self.max_allowed_users = draft.max_allowed_users;
        self.is_active = draft.is_active;
    }

    fn allocate_key(draft: &SubscriptionDraft, _ids: &mut IdSequence) -> Result<String, AppError> {
        let key = draft.subscription_id.trim();
        if key.is_empty() {
            return Err(AppError::MissingKey { entity: Self::LABEL });
        }
        Ok(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_input_coerces_numbers() {
        let mut draft = SubscriptionDraft::default();
        draft.set_field("subscription_price", "149.50").unwrap();
        draft.set_field("duration_days", "thirty").unwrap();
        draft.set_field("max_allowed_users", "20 seats").unwrap();

        assert_eq!(draft.subscription_price, Decimal::new(14950, 2));
        assert_eq!(draft.duration_days, 0);
        assert_eq!(draft.max_allowed_users, 20);
    }

    #[test]
    fn editing_never_touches_the_key() {
        let mut plan = Subscription::from_draft(
            "SUB009".to_string(),
            SubscriptionDraft { subscription_name: "Trial".into(), ..Default::default() },
        );
        let mut draft = plan.to_draft();
        draft.subscription_id = "SUB999".into();
        draft.subscription_name = "Trial Extended".into();
        plan.apply_draft(draft);

        assert_eq!(plan.subscription_id, "SUB009");
        assert_eq!(plan.subscription_name, "Trial Extended");
    }

    #[test]
    fn blank_key_is_rejected() {
        let draft = SubscriptionDraft { subscription_id: "   ".into(), ..Default::default() };
        let err = Subscription::allocate_key(&draft, &mut IdSequence::starting_at(1)).unwrap_err();
        assert!(matches!(err, AppError::MissingKey { entity: "Subscription" }));
    }
}
