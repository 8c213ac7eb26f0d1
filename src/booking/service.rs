// ABOUTME: Service catalog model with icon derivation and the offline fallback catalog

use serde::{Deserialize, Serialize};

/// Display icon attached to a service card. Mirrors the studio's icon
/// classes; services that arrive without one get an icon derived from
/// their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceIcon {
    #[serde(rename = "fas fa-meditation")]
    Meditation,
    #[serde(rename = "fas fa-lotus")]
    Lotus,
    #[serde(rename = "fas fa-hands")]
    Hands,
    #[serde(rename = "fas fa-spa")]
    Spa,
    #[serde(rename = "fas fa-heart")]
    Heart,
}

impl ServiceIcon {
    pub fn class(&self) -> &'static str {
        match self {
            ServiceIcon::Meditation => "fas fa-meditation",
            ServiceIcon::Lotus => "fas fa-lotus",
            ServiceIcon::Hands => "fas fa-hands",
            ServiceIcon::Spa => "fas fa-spa",
            ServiceIcon::Heart => "fas fa-heart",
        }
    }

    /// Terminal glyph used on service cards and summary rows.
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Meditation => "🧘",
            ServiceIcon::Lotus => "🌸",
            ServiceIcon::Hands => "👐",
            ServiceIcon::Spa => "💆",
            ServiceIcon::Heart => "💚",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "fas fa-meditation" => Some(ServiceIcon::Meditation),
            "fas fa-lotus" => Some(ServiceIcon::Lotus),
            "fas fa-hands" => Some(ServiceIcon::Hands),
            "fas fa-spa" => Some(ServiceIcon::Spa),
            "fas fa-heart" => Some(ServiceIcon::Heart),
            _ => None,
        }
    }

    /// Derive an icon from the service name. Checks are ordered and
    /// case-insensitive; names matching nothing get the heart.
    pub fn for_service_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("yoga") {
            ServiceIcon::Meditation
        } else if name.contains("meditation") {
            ServiceIcon::Lotus
        } else if name.contains("reiki") {
            ServiceIcon::Hands
        } else if name.contains("massage") {
            ServiceIcon::Spa
        } else {
            ServiceIcon::Heart
        }
    }

    /// Resolve the icon for a service: honor a recognized class string,
    /// otherwise fall back to name derivation.
    pub fn resolve(class: Option<&str>, name: &str) -> Self {
        class
            .and_then(Self::from_class)
            .unwrap_or_else(|| Self::for_service_name(name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub duration_min: i64,
    pub price: f64,
    pub icon: ServiceIcon,
}

impl Service {
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    pub fn duration_label(&self) -> String {
        format!("{} minutes", self.duration_min)
    }
}

/// Whole-dollar prices drop the cents, everything else keeps two places.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

/// Catalog used when the backend cannot be reached. The studio's four
/// core offerings, same ids the backend seeds.
pub fn fallback_catalog() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            name: "Yoga Session".to_string(),
            description: "Relaxing yoga session to restore balance and flexibility".to_string(),
            duration_min: 60,
            price: 75.0,
            icon: ServiceIcon::Meditation,
        },
        Service {
            id: 2,
            name: "Guided Meditation".to_string(),
            description: "Deep meditation practice for mental clarity and peace".to_string(),
            duration_min: 45,
            price: 50.0,
            icon: ServiceIcon::Lotus,
        },
        Service {
            id: 3,
            name: "Reiki Healing".to_string(),
            description: "Energy healing session for physical and emotional wellness".to_string(),
            duration_min: 60,
            price: 90.0,
            icon: ServiceIcon::Hands,
        },
        Service {
            id: 4,
            name: "Holistic Massage".to_string(),
            description: "Therapeutic massage combining multiple healing techniques".to_string(),
            duration_min: 90,
            price: 120.0,
            icon: ServiceIcon::Spa,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_derives_icon_from_name_keywords() {
        assert_eq!(
            ServiceIcon::for_service_name("Morning Yoga"),
            ServiceIcon::Meditation
        );
        assert_eq!(
            ServiceIcon::for_service_name("Guided Meditation"),
            ServiceIcon::Lotus
        );
        assert_eq!(
            ServiceIcon::for_service_name("Reiki Healing"),
            ServiceIcon::Hands
        );
        assert_eq!(
            ServiceIcon::for_service_name("Holistic Massage"),
            ServiceIcon::Spa
        );
        assert_eq!(
            ServiceIcon::for_service_name("Sound Bath"),
            ServiceIcon::Heart
        );
    }

    #[test]
    fn test_name_derivation_ignores_case() {
        assert_eq!(
            ServiceIcon::for_service_name("YOGA FLOW"),
            ServiceIcon::Meditation
        );
        assert_eq!(
            ServiceIcon::for_service_name("deep MEDITATION retreat"),
            ServiceIcon::Lotus
        );
    }

    #[test]
    fn test_recognized_class_wins_over_name() {
        assert_eq!(
            ServiceIcon::resolve(Some("fas fa-spa"), "Yoga Session"),
            ServiceIcon::Spa
        );
    }

    #[test]
    fn test_unknown_class_falls_back_to_name_derivation() {
        assert_eq!(
            ServiceIcon::resolve(Some("fas fa-unknown"), "Reiki Healing"),
            ServiceIcon::Hands
        );
        assert_eq!(
            ServiceIcon::resolve(None, "Holistic Massage"),
            ServiceIcon::Spa
        );
    }

    #[test]
    fn test_fallback_catalog_matches_studio_offerings() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(catalog[0].name, "Yoga Session");
        assert_eq!(catalog[0].duration_min, 60);
        assert_eq!(catalog[0].price, 75.0);
        assert_eq!(catalog[1].name, "Guided Meditation");
        assert_eq!(catalog[1].duration_min, 45);
        assert_eq!(catalog[2].name, "Reiki Healing");
        assert_eq!(catalog[2].price, 90.0);
        assert_eq!(catalog[3].name, "Holistic Massage");
        assert_eq!(catalog[3].duration_min, 90);
        assert_eq!(catalog[3].icon, ServiceIcon::Spa);
    }

    #[test]
    fn test_formats_whole_and_fractional_prices() {
        assert_eq!(format_price(75.0), "$75");
        assert_eq!(format_price(120.0), "$120");
        assert_eq!(format_price(75.5), "$75.50");
    }
}
