// src/models/notice.rs

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

// Notificação exibida ao usuário depois de uma alteração (toast)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Notice {
    #[schema(example = "Client Created")]
    pub title: String,

    #[schema(example = "New client has been created successfully.")]
    pub description: String,

    pub variant: NoticeVariant,
}

impl Notice {
    pub fn created(label: &str) -> Self {
        Self {
            title: format!("{label} Created"),
            description: format!("New {} has been created successfully.", label.to_lowercase()),
            variant: NoticeVariant::Default,
        }
    }

    pub fn updated(label: &str) -> Self {
        Self {
            title: format!("{label} Updated"),
            description: format!("{label} has been updated successfully."),
            variant: NoticeVariant::Default,
        }
    }

    pub fn deleted(label: &str) -> Self {
        Self {
            title: format!("{label} Deleted"),
            description: format!("{label} has been deleted successfully."),
            variant: NoticeVariant::Destructive,
        }
    }
}

/// Texto do diálogo de exclusão: Clients e Products usam o curto,
/// Subscriptions e Licenses o enfático.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteWording {
    Standard,
    Emphatic,
}

// Diálogo de confirmação antes de excluir um registro
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeletePrompt {
    #[schema(example = "Are you sure?")]
    pub title: String,

    pub description: String,

    // Chave do registro selecionado, já formatada
    #[schema(example = "1")]
    pub target: String,
}

impl DeletePrompt {
    pub fn new(label: &str, target: String, display_name: &str, wording: DeleteWording) -> Self {
        let label = label.to_lowercase();
        let (title, description) = match wording {
            DeleteWording::Standard => (
                "Are you sure?",
                format!(
                    "This will permanently delete the {label} \"{display_name}\". This action cannot be undone."
                ),
            ),
            DeleteWording::Emphatic => (
                "Are you absolutely sure?",
                format!(
                    "This action cannot be undone. This will permanently delete the {label} \"{display_name}\" and remove all its data."
                ),
            ),
        };

        Self { title: title.to_string(), description, target }
    }
}
