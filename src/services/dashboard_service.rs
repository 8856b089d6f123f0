// src/services/dashboard_service.rs

use crate::models::dashboard::{
    ActivityStatus, DashboardSummary, RecentActivity, StatCard, Trend,
};

// Painel apenas de apresentação: números fixos, sem cálculo sobre as coleções.
#[derive(Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_summary(&self) -> DashboardSummary {
        DashboardSummary {
            heading: "Dashboard",
            welcome: "Welcome to CPS Client Management System",
            stats: vec![
                StatCard {
                    title: "Total Clients",
                    value: "156",
                    change: "+12 from last month",
                    trend: Trend::Up,
                },
                StatCard {
                    title: "Active Products",
                    value: "4",
                    change: "DataGPT, Testament, Checkmate, HRMS",
                    trend: Trend::Stable,
                },
                StatCard {
                    title: "Active Licenses",
                    value: "298",
                    change: "+23 from last month",
                    trend: Trend::Up,
                },
                StatCard {
                    title: "Revenue Growth",
                    value: "+15.2%",
                    change: "Compared to last quarter",
                    trend: Trend::Up,
                },
            ],
            recent_activity: vec![
                activity("TechCorp Solutions", "DataGPT", "Professional", ActivityStatus::Active, "2024-12-15"),
                activity("Global Industries", "HRMS", "Basic", ActivityStatus::Active, "2024-11-30"),
                activity("StartupXYZ", "Testament", "Demo", ActivityStatus::Trial, "2024-09-15"),
                activity("Enterprise Ltd", "Checkmate", "Professional", ActivityStatus::Active, "2025-01-20"),
                activity("Business Inc", "DataGPT", "Basic", ActivityStatus::Expired, "2024-08-10"),
            ],
        }
    }
}

fn activity(
    name: &'static str,
    product: &'static str,
    plan: &'static str,
    status: ActivityStatus,
    expiry: &'static str,
) -> RecentActivity {
    RecentActivity { name, product, plan, status, tone: status.tone(), expiry }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::Tone;

    #[test]
    fn summary_is_the_fixed_sample() {
        let summary = DashboardService::new().get_summary();
        assert_eq!(summary.stats.len(), 4);
        assert_eq!(summary.stats[0].value, "156");
        assert_eq!(summary.recent_activity.len(), 5);
    }

    #[test]
    fn status_tones() {
        let summary = DashboardService::new().get_summary();
        let tones: Vec<_> = summary.recent_activity.iter().map(|a| a.tone).collect();
        assert_eq!(
            tones,
            [Tone::Success, Tone::Success, Tone::Warning, Tone::Success, Tone::Destructive]
        );
    }
}
