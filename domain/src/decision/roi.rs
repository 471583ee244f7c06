//! Rough return-on-investment estimate attached to each decision
//!
//! Profiles are picked by keywords in the proposal title; the first matching
//! profile wins and anything unmatched gets the default profile.

use serde::{Deserialize, Serialize};

/// Estimated economics of a proposal.
///
/// # Example
///
/// ```
/// use council_domain::decision::RoiEstimate;
///
/// let roi = RoiEstimate::for_title("Cloud cost dashboard");
/// assert_eq!(roi.estimated_cost, 30_000);
/// assert_eq!(roi.roi_percentage, 233.3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub estimated_cost: u32,
    pub projected_revenue: u32,
    /// `(revenue - cost) / cost * 100`, one decimal
    pub roi_percentage: f64,
    pub development_time_weeks: u32,
    pub market_size: String,
    pub competition_level: String,
    pub monetization_strategy: String,
    pub assumptions: Vec<String>,
}

struct Profile {
    /// Multi-word keys match as substrings, single words as whole words.
    keywords: &'static [&'static str],
    cost: u32,
    revenue: u32,
    weeks: u32,
    market: &'static str,
    competition: &'static str,
    monetization: &'static str,
}

const PROFILES: &[Profile] = &[
    Profile {
        keywords: &["ai", "artificial intelligence"],
        cost: 25_000,
        revenue: 80_000,
        weeks: 12,
        market: "Large - startups",
        competition: "Medium - growing market",
        monetization: "Monthly subscription $200-500",
    },
    Profile {
        keywords: &["talent", "recruiting", "hiring"],
        cost: 20_000,
        revenue: 60_000,
        weeks: 10,
        market: "Medium - HR departments",
        competition: "High - established solutions",
        monetization: "Monthly subscription $100-300",
    },
    Profile {
        keywords: &["e-commerce", "ecommerce", "store", "shop"],
        cost: 18_000,
        revenue: 70_000,
        weeks: 8,
        market: "Very large - online retail",
        competition: "Very high - Shopify, WooCommerce",
        monetization: "2-3% commission plus monthly subscription",
    },
    Profile {
        keywords: &["cloud"],
        cost: 30_000,
        revenue: 100_000,
        weeks: 16,
        market: "Large - developers and DevOps",
        competition: "High - AWS, Azure, GCP",
        monetization: "Open source plus paid services",
    },
    Profile {
        keywords: &["security", "cybersecurity"],
        cost: 35_000,
        revenue: 120_000,
        weeks: 18,
        market: "Large - companies and governments",
        competition: "Medium - specialist market",
        monetization: "Annual license $5000-20000",
    },
    Profile {
        keywords: &["no-code", "no code"],
        cost: 22_000,
        revenue: 85_000,
        weeks: 14,
        market: "Large - small businesses",
        competition: "High - Bubble, Webflow",
        monetization: "Monthly subscription $50-200",
    },
    Profile {
        keywords: &["library"],
        cost: 8_000,
        revenue: 25_000,
        weeks: 6,
        market: "Large - software developers",
        competition: "Medium - specialist libraries",
        monetization: "Open source plus commercial support",
    },
    Profile {
        keywords: &["debugger", "debugging", "ide"],
        cost: 15_000,
        revenue: 45_000,
        weeks: 8,
        market: "Medium - developers",
        competition: "High - existing IDE tooling",
        monetization: "Monthly subscription $20-50",
    },
    Profile {
        keywords: &["code sharing", "snippet"],
        cost: 12_000,
        revenue: 35_000,
        weeks: 6,
        market: "Large - developer community",
        competition: "High - GitHub Gist, CodePen",
        monetization: "Ads plus premium accounts",
    },
    Profile {
        keywords: &["project management", "planner"],
        cost: 20_000,
        revenue: 65_000,
        weeks: 10,
        market: "Large - project managers",
        competition: "Very high - Jira, Asana",
        monetization: "Monthly $30-100 per user",
    },
    Profile {
        keywords: &["distributed", "remote team"],
        cost: 18_000,
        revenue: 55_000,
        weeks: 9,
        market: "Medium - distributed companies",
        competition: "Medium - new tools",
        monetization: "Monthly $15-40 per user",
    },
    Profile {
        keywords: &["digital marketing"],
        cost: 25_000,
        revenue: 75_000,
        weeks: 12,
        market: "Large - companies and marketing agencies",
        competition: "High - HubSpot, Mailchimp",
        monetization: "Monthly subscription $100-500",
    },
    Profile {
        keywords: &["social media"],
        cost: 15_000,
        revenue: 50_000,
        weeks: 8,
        market: "Large - influencers and brands",
        competition: "High - Hootsuite, Buffer",
        monetization: "Monthly subscription $30-150",
    },
    Profile {
        keywords: &["crm", "customer relationship"],
        cost: 22_000,
        revenue: 70_000,
        weeks: 11,
        market: "Large - sales teams",
        competition: "Very high - Salesforce, HubSpot",
        monetization: "Monthly $50-200 per user",
    },
];

const DEFAULT_PROFILE: Profile = Profile {
    keywords: &[],
    cost: 15_000,
    revenue: 50_000,
    weeks: 8,
    market: "Medium",
    competition: "Medium",
    monetization: "Monthly subscription",
};

const ASSUMPTIONS: [&str; 4] = [
    "Estimates are based on comparable products in the market",
    "Includes core development and launch marketing costs",
    "Assumes a team of 3-5 developers",
    "Return expected within 12-18 months",
];

impl Profile {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| {
            if k.contains(' ') {
                lowered.contains(k)
            } else {
                lowered
                    .split(|c: char| !c.is_alphanumeric() && c != '-')
                    .any(|w| w == *k)
            }
        })
    }
}

impl RoiEstimate {
    /// Estimate from the proposal title.
    pub fn for_title(title: &str) -> Self {
        let lowered = title.to_lowercase();
        let profile = PROFILES
            .iter()
            .find(|p| p.matches(&lowered))
            .unwrap_or(&DEFAULT_PROFILE);

        Self {
            estimated_cost: profile.cost,
            projected_revenue: profile.revenue,
            roi_percentage: roi_percentage(profile.cost, profile.revenue),
            development_time_weeks: profile.weeks,
            market_size: profile.market.to_string(),
            competition_level: profile.competition.to_string(),
            monetization_strategy: profile.monetization.to_string(),
            assumptions: ASSUMPTIONS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Percentage return rounded to one decimal; zero when there is no cost.
pub fn roi_percentage(cost: u32, revenue: u32) -> f64 {
    if cost == 0 {
        return 0.0;
    }
    let cost = f64::from(cost);
    let raw = (f64::from(revenue) - cost) / cost * 100.0;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_title_gets_default_profile() {
        let roi = RoiEstimate::for_title("Team Knowledge Hub");
        assert_eq!(roi.estimated_cost, 15_000);
        assert_eq!(roi.projected_revenue, 50_000);
        assert_eq!(roi.development_time_weeks, 8);
        assert_eq!(roi.market_size, "Medium");
        assert_eq!(roi.roi_percentage, 233.3);
        assert_eq!(roi.assumptions.len(), 4);
    }

    #[test]
    fn test_keyword_table() {
        let cases = [
            ("AI tutor", 25_000),
            ("Hiring pipeline", 20_000),
            ("Craft store builder", 18_000),
            ("Cloud cost dashboard", 30_000),
            ("Security scanner", 35_000),
            ("No-code form builder", 22_000),
            ("Snippet Library", 8_000),
            ("Lightweight IDE", 15_000),
            ("Code sharing hub", 12_000),
            ("Sprint Planner", 20_000),
            ("Social media scheduler", 15_000),
            ("CRM for freelancers", 22_000),
        ];
        for (title, cost) in cases {
            assert_eq!(RoiEstimate::for_title(title).estimated_cost, cost, "{title}");
        }
    }

    #[test]
    fn test_single_words_match_whole_words_only() {
        // "api" must not hit the "ai" profile, nor "shopping" the "shop" one
        assert_eq!(RoiEstimate::for_title("Deploy Check API").estimated_cost, 15_000);
        assert_eq!(RoiEstimate::for_title("Shopping list").estimated_cost, 15_000);
    }

    #[test]
    fn test_first_matching_profile_wins() {
        let roi = RoiEstimate::for_title("AI security assistant");
        assert_eq!(roi.estimated_cost, 25_000);
        assert_eq!(roi.roi_percentage, 220.0);
    }

    #[test]
    fn test_roi_formula() {
        assert_eq!(roi_percentage(8_000, 25_000), 212.5);
        assert_eq!(roi_percentage(35_000, 120_000), 242.9);
        assert_eq!(roi_percentage(10_000, 5_000), -50.0);
        assert_eq!(roi_percentage(0, 5_000), 0.0);
    }
}
