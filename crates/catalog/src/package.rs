use serde::{Deserialize, Serialize};

use axisphere_core::Money;

/// The packages sold on the pricing page.
///
/// The catalog is a process-wide constant: prices and feature lists are
/// static data and immutable at runtime. Feature order is display-significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    AiStarter,
    AiGrowth,
    AiEnterprise,
}

/// A catalog price: either a fixed standard price or contact-for-pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum PackagePrice {
    Fixed(Money),
    ContactUs,
}

const AI_STARTER_FEATURES: &[&str] = &[
    "20 AI-generated social media posts per month",
    "2 AI-optimized blog articles (800–1200 words each)",
    "AI-driven content calendar and scheduling",
    "Basic AI copywriting for ads and emails",
    "Campaign strategy development and setup",
    "AI-personalized email marketing (up to 1,000 subscribers)",
    "Rule-based chatbot for website (FAQ automation up to 50 questions)",
    "Monthly AI-generated performance reports",
    "Monthly 2-hour AI strategy consultation",
    "Email support during business hours",
];

const AI_GROWTH_FEATURES: &[&str] = &[
    "50 AI-generated social media posts per month",
    "8 AI-optimized blog articles with SEO analysis",
    "Dynamic content personalization for different audience segments",
    "Comprehensive campaign strategy across Google, Facebook, LinkedIn",
    "Advanced audience modeling and targeting",
    "Automated bid optimization and budget allocation",
    "AI-personalized campaigns (up to 5,000 subscribers)",
    "Natural language processing chatbot capabilities",
    "Appointment booking and scheduling integrations",
    "E-commerce support and product recommendations",
    "Multi-language support (2 languages)",
    "Weekly strategy sessions with AI specialists",
];

const AI_ENTERPRISE_FEATURES: &[&str] = &[
    "100+ AI-generated social media posts per month",
    "15 AI-optimized long-form content pieces with advanced SEO",
    "AI-powered customer journey optimization",
    "Advanced predictive analytics and forecasting",
    "Custom AI model training for your brand voice",
    "Advanced NLP chatbot with voice",
    "Integration with enterprise CRM and marketing automation",
    "Multi-language support (5+ languages)",
    "Dedicated AI account manager",
    "24/7 priority support with 1-hour response time",
    "Quarterly business reviews and strategy optimization",
];

impl Package {
    /// All packages, in pricing-page order.
    pub const ALL: [Package; 3] = [
        Package::AiStarter,
        Package::AiGrowth,
        Package::AiEnterprise,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Package::AiStarter => "AI Starter Package",
            Package::AiGrowth => "AI Growth Package",
            Package::AiEnterprise => "AI Enterprise Package",
        }
    }

    /// Resolve a package from its display name (e.g. a `?package=` query
    /// value). A miss is not an error here; callers apply their own default.
    pub fn from_display_name(name: &str) -> Option<Package> {
        Package::ALL
            .into_iter()
            .find(|p| p.display_name() == name)
    }

    pub fn price(&self) -> PackagePrice {
        match self {
            Package::AiStarter => PackagePrice::Fixed(Money::from_rupees(30_000)),
            Package::AiGrowth => PackagePrice::Fixed(Money::from_rupees(75_000)),
            Package::AiEnterprise => PackagePrice::ContactUs,
        }
    }

    /// Ordered feature list shown on the pricing page and the scope selector.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Package::AiStarter => AI_STARTER_FEATURES,
            Package::AiGrowth => AI_GROWTH_FEATURES,
            Package::AiEnterprise => AI_ENTERPRISE_FEATURES,
        }
    }

    /// Default charged amount pre-filled on the invoice form: the standard
    /// price, or zero for contact-for-pricing packages.
    pub fn default_charge(&self) -> Money {
        match self.price() {
            PackagePrice::Fixed(amount) => amount,
            PackagePrice::ContactUs => Money::ZERO,
        }
    }
}

impl Default for Package {
    /// The invoice route's fallback when the selector is absent or unknown.
    fn default() -> Self {
        Package::AiStarter
    }
}

impl core::fmt::Display for Package {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_round_trip() {
        for package in Package::ALL {
            assert_eq!(
                Package::from_display_name(package.display_name()),
                Some(package)
            );
        }
    }

    #[test]
    fn unknown_name_misses() {
        assert_eq!(Package::from_display_name("AI Mega Package"), None);
        assert_eq!(Package::from_display_name(""), None);
    }

    #[test]
    fn catalog_prices_match_the_pricing_page() {
        assert_eq!(
            Package::AiStarter.price(),
            PackagePrice::Fixed(Money::from_rupees(30_000))
        );
        assert_eq!(
            Package::AiGrowth.price(),
            PackagePrice::Fixed(Money::from_rupees(75_000))
        );
        assert_eq!(Package::AiEnterprise.price(), PackagePrice::ContactUs);
    }

    #[test]
    fn contact_pricing_defaults_to_zero_charge() {
        assert_eq!(Package::AiEnterprise.default_charge(), Money::ZERO);
        assert_eq!(
            Package::AiGrowth.default_charge(),
            Money::from_rupees(75_000)
        );
    }

    #[test]
    fn every_package_has_an_ordered_feature_list() {
        for package in Package::ALL {
            let features = package.features();
            assert!(!features.is_empty());
            // Order is display-significant; the first entry is the headline
            // volume item on every tier.
            assert!(features[0].contains("social media posts"));
        }
    }
}
