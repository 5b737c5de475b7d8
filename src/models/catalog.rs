//! Static reference tables: installation sites, system archetypes and the
//! component brands offered in quotations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

// ─── Locations ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Bangalore,
    Mumbai,
    Delhi,
    Chennai,
    Hyderabad,
    Pune,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::Bangalore,
        Location::Mumbai,
        Location::Delhi,
        Location::Chennai,
        Location::Hyderabad,
        Location::Pune,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Location::Bangalore => "bangalore",
            Location::Mumbai => "mumbai",
            Location::Delhi => "delhi",
            Location::Chennai => "chennai",
            Location::Hyderabad => "hyderabad",
            Location::Pune => "pune",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Location::Bangalore => "Bangalore",
            Location::Mumbai => "Mumbai",
            Location::Delhi => "Delhi",
            Location::Chennai => "Chennai",
            Location::Hyderabad => "Hyderabad",
            Location::Pune => "Pune",
        }
    }

    /// Average peak-equivalent sun hours per day
    pub fn sun_hours(self) -> f64 {
        match self {
            Location::Bangalore => 5.2,
            Location::Mumbai => 5.5,
            Location::Delhi => 5.1,
            Location::Chennai => 5.8,
            Location::Hyderabad => 5.3,
            Location::Pune => 5.4,
        }
    }
}

impl FromStr for Location {
    type Err = AppError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|loc| loc.key() == key)
            .ok_or_else(|| AppError::NotFound(format!("location '{key}'")))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─── System archetypes ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SystemArchetype {
    GridTie,
    Hybrid,
    OffGrid,
}

impl SystemArchetype {
    pub const ALL: [SystemArchetype; 3] = [
        SystemArchetype::GridTie,
        SystemArchetype::Hybrid,
        SystemArchetype::OffGrid,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SystemArchetype::GridTie => "grid-tie",
            SystemArchetype::Hybrid => "hybrid",
            SystemArchetype::OffGrid => "off-grid",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SystemArchetype::GridTie => "Grid-Tie System",
            SystemArchetype::Hybrid => "Hybrid System",
            SystemArchetype::OffGrid => "Off-Grid System",
        }
    }

    /// Installed cost per kW, including batteries where the topology needs them
    pub fn cost_per_kw(self) -> u64 {
        match self {
            SystemArchetype::GridTie => 65_000,
            SystemArchetype::Hybrid => 85_000,
            SystemArchetype::OffGrid => 105_000,
        }
    }

    /// Relative cost tier against grid-tie, for display
    pub fn multiplier(self) -> f64 {
        match self {
            SystemArchetype::GridTie => 1.0,
            SystemArchetype::Hybrid => 1.3,
            SystemArchetype::OffGrid => 1.6,
        }
    }
}

impl FromStr for SystemArchetype {
    type Err = AppError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        SystemArchetype::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| AppError::NotFound(format!("system archetype '{key}'")))
    }
}

impl fmt::Display for SystemArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─── Component brands ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentClass {
    /// Priced per watt
    Panel,
    /// Priced per inverter unit
    Inverter,
    /// Priced per kW
    Wiring,
}

impl ComponentClass {
    fn brands(self) -> &'static [BrandSpec] {
        match self {
            ComponentClass::Panel => PANEL_BRANDS,
            ComponentClass::Inverter => INVERTER_BRANDS,
            ComponentClass::Wiring => WIRING_BRANDS,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            ComponentClass::Panel => "panel",
            ComponentClass::Inverter => "inverter",
            ComponentClass::Wiring => "wiring",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BrandSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// Unit price in whole currency units; the unit depends on the component class
    pub unit_price: u64,
    pub warranty_years: u32,
}

const fn brand(key: &'static str, label: &'static str, unit_price: u64, warranty_years: u32) -> BrandSpec {
    BrandSpec { key, label, unit_price, warranty_years }
}

pub const PANEL_BRANDS: &[BrandSpec] = &[
    brand("tata",     "Tata Solar",     25, 25),
    brand("adani",    "Adani Solar",    28, 25),
    brand("vikram",   "Vikram Solar",   24, 25),
    brand("waaree",   "Waaree Solar",   26, 25),
    brand("luminous", "Luminous Solar", 27, 25),
];

pub const INVERTER_BRANDS: &[BrandSpec] = &[
    brand("luminous", "Luminous", 15_000, 5),
    brand("microtek", "Microtek", 14_000, 3),
    brand("sukam",    "Sukam",    16_000, 5),
    brand("exide",    "Exide",    15_500, 4),
    brand("delta",    "Delta",    18_000, 5),
];

pub const WIRING_BRANDS: &[BrandSpec] = &[
    brand("polycab", "Polycab", 2_000, 10),
    brand("havells", "Havells", 2_200, 10),
    brand("finolex", "Finolex", 1_800, 8),
    brand("kei",     "KEI",     2_100, 10),
];

/// Look up a brand by its exact key within one component class.
pub fn find_brand(class: ComponentClass, key: &str) -> Result<&'static BrandSpec, AppError> {
    class
        .brands()
        .iter()
        .find(|b| b.key == key)
        .ok_or_else(|| AppError::NotFound(format!("{} brand '{key}'", class.noun())))
}

// ─── API views ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub sun_hours: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArchetypeInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub cost_per_kw: u64,
    pub multiplier: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub locations: Vec<LocationInfo>,
    pub archetypes: Vec<ArchetypeInfo>,
    #[schema(value_type = Vec<BrandSpec>)]
    pub panel_brands: &'static [BrandSpec],
    #[schema(value_type = Vec<BrandSpec>)]
    pub inverter_brands: &'static [BrandSpec],
    #[schema(value_type = Vec<BrandSpec>)]
    pub wiring_brands: &'static [BrandSpec],
}

impl CatalogResponse {
    pub fn build() -> Self {
        Self {
            locations: Location::ALL
                .into_iter()
                .map(|l| LocationInfo { key: l.key(), label: l.label(), sun_hours: l.sun_hours() })
                .collect(),
            archetypes: SystemArchetype::ALL
                .into_iter()
                .map(|a| ArchetypeInfo {
                    key: a.key(),
                    label: a.label(),
                    cost_per_kw: a.cost_per_kw(),
                    multiplier: a.multiplier(),
                })
                .collect(),
            panel_brands: PANEL_BRANDS,
            inverter_brands: INVERTER_BRANDS,
            wiring_brands: WIRING_BRANDS,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    #[schema(value_type = Vec<String>)]
    pub features: &'static [&'static str],
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        title: "Residential Solar",
        description: "Complete rooftop solar solutions for homes with grid-tie and off-grid options.",
        features: &["Rooftop Installation", "Net Metering", "Battery Backup", "Monitoring System"],
    },
    ServiceOffering {
        title: "Commercial Solar",
        description: "Scalable solar energy systems for offices, schools, and commercial buildings.",
        features: &["Large Scale Systems", "Cost Optimization", "Tax Benefits", "Maintenance"],
    },
    ServiceOffering {
        title: "Industrial Solar",
        description: "High-capacity solar installations for manufacturing and industrial facilities.",
        features: &["Mega Watt Systems", "Grid Integration", "Power Purchase", "Performance"],
    },
    ServiceOffering {
        title: "Installation & Maintenance",
        description: "Professional installation and ongoing maintenance services for all solar systems.",
        features: &["Expert Installation", "24/7 Support", "Regular Maintenance", "Warranty"],
    },
    ServiceOffering {
        title: "System Monitoring",
        description: "Advanced monitoring solutions to track performance and optimize efficiency.",
        features: &["Real-time Monitoring", "Performance Analytics", "Alert System", "Mobile App"],
    },
    ServiceOffering {
        title: "Energy Storage",
        description: "Battery storage solutions for energy independence and backup power.",
        features: &["Lithium Batteries", "Backup Power", "Load Management", "Grid Support"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_keys_round_trip() {
        for loc in Location::ALL {
            assert_eq!(loc.key().parse::<Location>().unwrap(), loc);
        }
        assert_eq!("chennai".parse::<Location>().unwrap().sun_hours(), 5.8);
    }

    #[test]
    fn test_unknown_location_is_not_found() {
        let err = "kolkata".parse::<Location>().unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_archetype_keys_are_kebab_case() {
        assert_eq!("off-grid".parse::<SystemArchetype>().unwrap(), SystemArchetype::OffGrid);
        assert!("off_grid".parse::<SystemArchetype>().is_err());
        assert_eq!(SystemArchetype::Hybrid.cost_per_kw(), 85_000);
    }

    #[test]
    fn test_brand_lookup_is_scoped_by_class() {
        assert_eq!(find_brand(ComponentClass::Panel, "luminous").unwrap().unit_price, 27);
        assert_eq!(find_brand(ComponentClass::Inverter, "luminous").unwrap().unit_price, 15_000);
        let err = find_brand(ComponentClass::Wiring, "luminous").unwrap_err();
        assert_eq!(err.to_string(), "Not found: wiring brand 'luminous'");
    }

    #[test]
    fn test_catalog_response_lists_every_entry() {
        let catalog = CatalogResponse::build();
        assert_eq!(catalog.locations.len(), 6);
        assert_eq!(catalog.archetypes.len(), 3);
        assert_eq!(catalog.panel_brands.len(), 5);
        assert_eq!(catalog.inverter_brands.len(), 5);
        assert_eq!(catalog.wiring_brands.len(), 4);
    }
}
