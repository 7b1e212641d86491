//! Factory statistics from the decompressed body.
//!
//! No entity graph is decoded. Buildings and vehicles are counted by
//! scanning the body as text for class-name tokens and matching them
//! against the static [`tables`].
//!
//! # Counting methods
//!
//! - [`CountingMethod::References`] (default): every building leaves two
//!   `Build_` references in the stream and every vehicle four `BP_`
//!   references, so the raw token counts are divided accordingly. A vehicle
//!   class that was seen at all is reported at least once.
//! - [`CountingMethod::Instances`]: distinct `PersistentLevel.<class>_C_<id>`
//!   references are counted once each, with no divisor.
//!
//! Both are approximations.
//!
//! # Example
//!
//! ```
//! use sav_stats::stats::{CategoryTallies, CountingMethod};
//!
//! let body = b"Build_ConstructorMk1 Build_ConstructorMk1_C BP_Truck_C";
//! let tallies = CategoryTallies::count(body, CountingMethod::References);
//!
//! assert_eq!(tallies.machines.get("Constructor"), Some(&1));
//! assert_eq!(tallies.vehicles.get("Truck"), Some(&1));
//! ```

pub mod instances;
pub mod tables;
pub mod tokens;

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

pub use tables::{Category, CategoryTable, TableEntry, BUILDING_TABLES, VEHICLES};
pub use tokens::{TokenCounts, BLUEPRINT_PREFIX, BUILD_PREFIX};

use crate::header::SaveHeader;

/// References left in the body by each placed building.
pub const BUILDING_REFERENCE_DIVISOR: usize = 2;

/// References left in the body by each vehicle.
pub const VEHICLE_REFERENCE_DIVISOR: usize = 4;

/// Display name to count, sorted by display name.
pub type Tally = BTreeMap<String, usize>;

/// How building and vehicle counts are derived from the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CountingMethod {
    /// Token frequencies divided by the per-object reference count.
    #[default]
    #[value(alias = "refs")]
    References,

    /// Distinct placed-instance references.
    Instances,
}

impl fmt::Display for CountingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountingMethod::References => f.write_str("references"),
            CountingMethod::Instances => f.write_str("instances"),
        }
    }
}

/// Per-category counts. Only strictly positive counts are recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTallies {
    /// Production machines.
    pub machines: Tally,
    /// Resource extractors.
    pub extractors: Tally,
    /// Power generators.
    pub generators: Tally,
    /// Belts, lifts and pipes.
    pub logistics: Tally,
    /// Containers and buffers.
    pub storage: Tally,
    /// Power distribution.
    pub power: Tally,
    /// Stations and rails.
    pub transport: Tally,
    /// Vehicles.
    pub vehicles: Tally,
    /// Special buildings.
    pub other: Tally,
}

impl CategoryTallies {
    /// Counts buildings and vehicles in a decompressed body.
    #[must_use]
    pub fn count(body: &[u8], method: CountingMethod) -> Self {
        match method {
            CountingMethod::References => Self::from_references(
                &TokenCounts::scan(body, BUILD_PREFIX),
                &TokenCounts::scan(body, BLUEPRINT_PREFIX),
            ),
            CountingMethod::Instances => {
                Self::from_instances(&instances::count_unique_instances(body))
            }
        }
    }

    /// Derives tallies from `Build_` and `BP_` token frequencies.
    ///
    /// A building is counted as (`key` + `key_C`) / 2. A vehicle is counted
    /// as the sum of every `BP_` token starting with its key, divided by 4
    /// and raised to 1 if any token matched.
    #[must_use]
    pub fn from_references(build_tokens: &TokenCounts, blueprint_tokens: &TokenCounts) -> Self {
        let mut tallies = Self::default();

        for table in BUILDING_TABLES {
            let tally = tallies.get_mut(table.category);
            for entry in table.entries {
                let references = build_tokens.get_with_class_suffix(entry.key);
                let count = references / BUILDING_REFERENCE_DIVISOR;
                if count > 0 {
                    tally.insert(entry.display_name.to_string(), count);
                }
            }
        }

        for entry in VEHICLES.entries {
            let references = blueprint_tokens.prefix_sum(entry.key);
            if references > 0 {
                let count = (references / VEHICLE_REFERENCE_DIVISOR).max(1);
                tallies
                    .vehicles
                    .insert(entry.display_name.to_string(), count);
            }
        }

        tallies
    }

    /// Derives tallies from unique instance counts keyed by base class.
    ///
    /// Buildings match their table key exactly; vehicles match by prefix.
    #[must_use]
    pub fn from_instances<S: std::hash::BuildHasher>(
        instances: &std::collections::HashMap<String, usize, S>,
    ) -> Self {
        let mut tallies = Self::default();

        for table in BUILDING_TABLES {
            let tally = tallies.get_mut(table.category);
            for entry in table.entries {
                if let Some(&count) = instances.get(entry.key) {
                    if count > 0 {
                        tally.insert(entry.display_name.to_string(), count);
                    }
                }
            }
        }

        for entry in VEHICLES.entries {
            let count: usize = instances
                .iter()
                .filter(|(class, _)| class.starts_with(entry.key))
                .map(|(_, &n)| n)
                .sum();
            if count > 0 {
                tallies
                    .vehicles
                    .insert(entry.display_name.to_string(), count);
            }
        }

        tallies
    }

    /// Returns the tally for a category.
    #[must_use]
    pub fn get(&self, category: Category) -> &Tally {
        match category {
            Category::Machines => &self.machines,
            Category::Extractors => &self.extractors,
            Category::Generators => &self.generators,
            Category::Logistics => &self.logistics,
            Category::Storage => &self.storage,
            Category::Power => &self.power,
            Category::Transport => &self.transport,
            Category::Vehicles => &self.vehicles,
            Category::Other => &self.other,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Tally {
        match category {
            Category::Machines => &mut self.machines,
            Category::Extractors => &mut self.extractors,
            Category::Generators => &mut self.generators,
            Category::Logistics => &mut self.logistics,
            Category::Storage => &mut self.storage,
            Category::Power => &mut self.power,
            Category::Transport => &mut self.transport,
            Category::Vehicles => &mut self.vehicles,
            Category::Other => &mut self.other,
        }
    }

    /// Returns the sum of a category's counts.
    #[must_use]
    pub fn total(&self, category: Category) -> usize {
        self.get(category).values().sum()
    }

    /// Returns the sum over every category except vehicles.
    #[must_use]
    pub fn total_buildings(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| c.is_building())
            .map(|&c| self.total(c))
            .sum()
    }
}

/// The statistics record written as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryStats {
    /// The decoded save header.
    pub header: SaveHeader,
    /// Production machines by display name.
    pub machines: Tally,
    /// Sum of `machines`.
    pub total_machines: usize,
    /// Extractors by display name.
    pub extractors: Tally,
    /// Sum of `extractors`.
    pub total_extractors: usize,
    /// Generators by display name.
    pub generators: Tally,
    /// Sum of `generators`.
    pub total_generators: usize,
    /// Logistics by display name.
    pub logistics: Tally,
    /// Storage by display name.
    pub storage: Tally,
    /// Power distribution by display name.
    pub power: Tally,
    /// Transport buildings by display name.
    pub transport: Tally,
    /// Vehicles by display name.
    pub vehicles: Tally,
    /// Sum of `vehicles`.
    pub total_vehicles: usize,
    /// Other buildings by display name.
    pub other: Tally,
    /// Sum of every building category (vehicles excluded).
    pub total_buildings: usize,
}

impl FactoryStats {
    /// Combines a header with category tallies, computing the totals.
    #[must_use]
    pub fn new(header: SaveHeader, tallies: CategoryTallies) -> Self {
        let total_machines = tallies.total(Category::Machines);
        let total_extractors = tallies.total(Category::Extractors);
        let total_generators = tallies.total(Category::Generators);
        let total_vehicles = tallies.total(Category::Vehicles);
        let total_buildings = tallies.total_buildings();

        let CategoryTallies {
            machines,
            extractors,
            generators,
            logistics,
            storage,
            power,
            transport,
            vehicles,
            other,
        } = tallies;

        FactoryStats {
            header,
            machines,
            total_machines,
            extractors,
            total_extractors,
            generators,
            total_generators,
            logistics,
            storage,
            power,
            transport,
            vehicles,
            total_vehicles,
            other,
            total_buildings,
        }
    }

    /// Returns a one-line summary such as
    /// `"120 total buildings (40 machines, 12 extractors, 8 generators)"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} total buildings ({} machines, {} extractors, {} generators), {} vehicles",
            self.total_buildings,
            self.total_machines,
            self.total_extractors,
            self.total_generators,
            self.total_vehicles
        )
    }
}
