// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
}

// 1. Cards do topo
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    #[schema(example = "Total Clients")]
    pub title: &'static str,
    #[schema(example = "156")]
    pub value: &'static str,
    #[schema(example = "+12 from last month")]
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ActivityStatus {
    Active,
    Trial,
    Expired,
}

// Cor do badge de status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Destructive,
}

impl ActivityStatus {
    pub fn tone(self) -> Tone {
        match self {
            ActivityStatus::Active => Tone::Success,
            ActivityStatus::Trial => Tone::Warning,
            ActivityStatus::Expired => Tone::Destructive,
        }
    }
}

// 2. Atividade recente de clientes
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    #[schema(example = "TechCorp Solutions")]
    pub name: &'static str,
    #[schema(example = "DataGPT")]
    pub product: &'static str,
    #[schema(example = "Professional")]
    pub plan: &'static str,
    pub status: ActivityStatus,
    pub tone: Tone,
    #[schema(example = "2024-12-15")]
    pub expiry: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub heading: &'static str,
    pub welcome: &'static str,
    pub stats: Vec<StatCard>,
    pub recent_activity: Vec<RecentActivity>,
}
