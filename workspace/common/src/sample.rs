//! Built-in placeholder content: sample reports for the offline data
//! source, and the static social and activity feeds.

use crate::report::{Report, ReportStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct SocialPost {
    pub user: &'static str,
    pub text: &'static str,
}

impl SocialPost {
    /// Avatar letter: first character of the handle
    pub fn avatar(&self) -> String {
        self.user.chars().next().map(String::from).unwrap_or_default()
    }
}

pub fn social_posts() -> Vec<SocialPost> {
    vec![
        SocialPost {
            user: "@coastal_watch",
            text: "Huge waves observed at Marina Beach 🌊 #Chennai",
        },
        SocialPost {
            user: "@fisherman_alert",
            text: "Storm surge flooding in Mumbai suburbs ⚠️",
        },
        SocialPost {
            user: "@kerala_updates",
            text: "Fishermen advised not to venture into the sea 🚤",
        },
    ]
}

pub fn activity_feed() -> Vec<&'static str> {
    vec![
        "14:20 - Tsunami alert issued near Chennai 🚨",
        "13:50 - Storm surge detected in Mumbai ⚡",
        "13:10 - High waves reported in Kerala 🌊",
    ]
}

/// Alerts behind the notification bell
pub fn notifications() -> Vec<&'static str> {
    vec!["Tsunami", "Storm Surge", "High Waves"]
}

fn sample(
    id: i64,
    hazard_type: &str,
    severity: &str,
    location: &str,
    datetime: &str,
    description: &str,
    status: ReportStatus,
) -> Report {
    Report {
        id,
        hazard_type: hazard_type.to_string(),
        severity: severity.to_string(),
        location: location.to_string(),
        datetime: datetime.to_string(),
        description: description.to_string(),
        contact_name: String::new(),
        contact_phone: String::new(),
        status,
        media: Vec::new(),
    }
}

pub fn sample_reports() -> Vec<Report> {
    vec![
        sample(
            1,
            "tsunami",
            "critical",
            "13.0827, 80.2707",
            "2025-09-10T14:20",
            "Tsunami alert issued near Chennai",
            ReportStatus::Verified,
        ),
        sample(
            2,
            "storm",
            "high",
            "19.0760, 72.8777",
            "2025-09-10T13:50",
            "Storm surge flooding in Mumbai suburbs",
            ReportStatus::Verified,
        ),
        sample(
            3,
            "waves",
            "medium",
            "9.9312, 76.2673",
            "2025-09-10T13:10",
            "High waves reported along the Kerala coast",
            ReportStatus::Pending,
        ),
        sample(
            4,
            "flooding",
            "high",
            "22.5726, 88.3639",
            "2025-09-10T12:40",
            "Low-lying areas flooded after heavy rain",
            ReportStatus::Pending,
        ),
        sample(
            5,
            "waves",
            "low",
            "Marina Beach",
            "2025-09-10T11:05",
            "Rough sea near the lighthouse",
            ReportStatus::Pending,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_is_first_character() {
        let posts = social_posts();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].avatar(), "@");
        assert_eq!(SocialPost { user: "", text: "" }.avatar(), "");
    }

    #[test]
    fn test_sample_reports_have_unique_ids() {
        let reports = sample_reports();
        let mut ids: Vec<i64> = reports.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), reports.len());
        assert!(reports.iter().any(|r| r.coordinates().is_none()));
    }
}
