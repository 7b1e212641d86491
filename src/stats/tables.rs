//! Static category lookup tables.
//!
//! Each table maps an internal class name to the name shown in the output.
//! Building tables are matched exactly against `Build_` tokens (with and
//! without the `_C` suffix). The vehicle table is matched by prefix against
//! `BP_` tokens.

use std::fmt;

/// A building or vehicle classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Production machines.
    Machines,
    /// Resource extractors.
    Extractors,
    /// Power generators.
    Generators,
    /// Belts, lifts, pipes and their attachments.
    Logistics,
    /// Storage containers and fluid buffers.
    Storage,
    /// Power distribution.
    Power,
    /// Stations and rails.
    Transport,
    /// Vehicles.
    Vehicles,
    /// Everything else.
    Other,
}

impl Category {
    /// Every category, in output order.
    pub const ALL: [Category; 9] = [
        Category::Machines,
        Category::Extractors,
        Category::Generators,
        Category::Logistics,
        Category::Storage,
        Category::Power,
        Category::Transport,
        Category::Vehicles,
        Category::Other,
    ];

    /// Returns the lowercase name used as the output key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Machines => "machines",
            Category::Extractors => "extractors",
            Category::Generators => "generators",
            Category::Logistics => "logistics",
            Category::Storage => "storage",
            Category::Power => "power",
            Category::Transport => "transport",
            Category::Vehicles => "vehicles",
            Category::Other => "other",
        }
    }

    /// Returns whether this category counts towards the building total.
    #[must_use]
    pub const fn is_building(&self) -> bool {
        !matches!(self, Category::Vehicles)
    }

    /// Returns the lookup table for this category.
    #[must_use]
    pub fn table(&self) -> &'static CategoryTable {
        match self {
            Category::Machines => &MACHINES,
            Category::Extractors => &EXTRACTORS,
            Category::Generators => &GENERATORS,
            Category::Logistics => &LOGISTICS,
            Category::Storage => &STORAGE,
            Category::Power => &POWER,
            Category::Transport => &TRANSPORT,
            Category::Vehicles => &VEHICLES,
            Category::Other => &OTHER,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One class name and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Internal class name, e.g. `Build_ConstructorMk1`.
    pub key: &'static str,
    /// Human-readable name, e.g. `Constructor`.
    pub display_name: &'static str,
}

const fn entry(key: &'static str, display_name: &'static str) -> TableEntry {
    TableEntry { key, display_name }
}

/// The entries belonging to one category.
#[derive(Debug)]
pub struct CategoryTable {
    /// The category these entries count towards.
    pub category: Category,
    /// Class name to display name entries.
    pub entries: &'static [TableEntry],
}

impl CategoryTable {
    /// Looks up the display name for an exact class name.
    #[must_use]
    pub fn display_name(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.display_name)
    }
}

/// Production machines.
pub static MACHINES: CategoryTable = CategoryTable {
    category: Category::Machines,
    entries: &[
        entry("Build_ConstructorMk1", "Constructor"),
        entry("Build_SmelterMk1", "Smelter"),
        entry("Build_FoundryMk1", "Foundry"),
        entry("Build_AssemblerMk1", "Assembler"),
        entry("Build_ManufacturerMk1", "Manufacturer"),
        entry("Build_OilRefinery", "Refinery"),
        entry("Build_Packager", "Packager"),
        entry("Build_Blender", "Blender"),
        entry("Build_HadronCollider", "Particle Accelerator"),
        entry("Build_QuantumEncoder", "Quantum Encoder"),
        entry("Build_Converter", "Converter"),
    ],
};

/// Resource extractors.
pub static EXTRACTORS: CategoryTable = CategoryTable {
    category: Category::Extractors,
    entries: &[
        entry("Build_MinerMk1", "Miner Mk.1"),
        entry("Build_MinerMk2", "Miner Mk.2"),
        entry("Build_MinerMk3", "Miner Mk.3"),
        entry("Build_WaterPump", "Water Extractor"),
        entry("Build_OilPump", "Oil Extractor"),
        entry("Build_FrackingExtractor", "Resource Well Extractor"),
        entry("Build_FrackingSmasher", "Resource Well Pressurizer"),
    ],
};

/// Power generators.
pub static GENERATORS: CategoryTable = CategoryTable {
    category: Category::Generators,
    entries: &[
        entry("Build_GeneratorBiomass", "Biomass Burner"),
        entry("Build_GeneratorCoal", "Coal Generator"),
        entry("Build_GeneratorFuel", "Fuel Generator"),
        entry("Build_GeneratorNuclear", "Nuclear Power Plant"),
        entry("Build_GeneratorGeoThermal", "Geothermal Generator"),
    ],
};

/// Belts, lifts, pipes and attachments.
pub static LOGISTICS: CategoryTable = CategoryTable {
    category: Category::Logistics,
    entries: &[
        entry("Build_ConveyorBeltMk1", "Conveyor Belt Mk.1"),
        entry("Build_ConveyorBeltMk2", "Conveyor Belt Mk.2"),
        entry("Build_ConveyorBeltMk3", "Conveyor Belt Mk.3"),
        entry("Build_ConveyorBeltMk4", "Conveyor Belt Mk.4"),
        entry("Build_ConveyorBeltMk5", "Conveyor Belt Mk.5"),
        entry("Build_ConveyorBeltMk6", "Conveyor Belt Mk.6"),
        entry("Build_ConveyorLiftMk1", "Conveyor Lift Mk.1"),
        entry("Build_ConveyorLiftMk2", "Conveyor Lift Mk.2"),
        entry("Build_ConveyorLiftMk3", "Conveyor Lift Mk.3"),
        entry("Build_ConveyorLiftMk4", "Conveyor Lift Mk.4"),
        entry("Build_ConveyorLiftMk5", "Conveyor Lift Mk.5"),
        entry("Build_ConveyorLiftMk6", "Conveyor Lift Mk.6"),
        entry("Build_ConveyorAttachmentSplitter", "Splitter"),
        entry("Build_ConveyorAttachmentMerger", "Merger"),
        entry("Build_ConveyorPole", "Conveyor Pole"),
        entry("Build_Pipeline", "Pipeline"),
        entry("Build_PipelineSupport", "Pipeline Support"),
        entry("Build_PipelinePump", "Pipeline Pump Mk.1"),
        entry("Build_PipelinePumpMk2", "Pipeline Pump Mk.2"),
        entry("Build_PipelineJunction_Cross", "Pipeline Junction Cross"),
        entry("Build_Valve", "Valve"),
    ],
};

/// Storage containers and fluid buffers.
pub static STORAGE: CategoryTable = CategoryTable {
    category: Category::Storage,
    entries: &[
        entry("Build_StorageContainerMk1", "Storage Container"),
        entry("Build_StorageContainerMk2", "Industrial Storage Container"),
        entry("Build_IndustrialTank", "Industrial Fluid Buffer"),
        entry("Build_PipeStorageTank", "Fluid Buffer"),
    ],
};

/// Power distribution.
pub static POWER: CategoryTable = CategoryTable {
    category: Category::Power,
    entries: &[
        entry("Build_PowerLine", "Power Line"),
        entry("Build_PowerPoleMk1", "Power Pole Mk.1"),
        entry("Build_PowerPoleMk2", "Power Pole Mk.2"),
        entry("Build_PowerPoleMk3", "Power Pole Mk.3"),
        entry("Build_PowerStorage", "Power Storage"),
        entry("Build_PowerSwitch", "Power Switch"),
        entry("Build_PriorityPowerSwitch", "Priority Power Switch"),
    ],
};

/// Stations and rails.
pub static TRANSPORT: CategoryTable = CategoryTable {
    category: Category::Transport,
    entries: &[
        entry("Build_TrainStation", "Train Station"),
        entry("Build_RailroadTrack", "Railway"),
        entry("Build_TrainDockingStation", "Freight Platform"),
        entry("Build_DroneStation", "Drone Port"),
        entry("Build_TruckStation", "Truck Station"),
    ],
};

/// Vehicles. Keys are matched as prefixes of `BP_` tokens.
pub static VEHICLES: CategoryTable = CategoryTable {
    category: Category::Vehicles,
    entries: &[
        entry("BP_Tractor", "Tractor"),
        entry("BP_Truck", "Truck"),
        entry("BP_Explorer", "Explorer"),
        entry("BP_Locomotive", "Locomotive"),
        entry("BP_FreightWagon", "Freight Car"),
        entry("Testa_BP_WB", "Cyber Wagon"),
        entry("BP_Golfcart", "Factory Cart"),
        entry("BP_DroneTransport", "Drone"),
    ],
};

/// Special buildings.
pub static OTHER: CategoryTable = CategoryTable {
    category: Category::Other,
    entries: &[
        entry("Build_SpaceElevator", "Space Elevator"),
        entry("Build_HubTerminal", "HUB"),
        entry("Build_WorkBench", "Craft Bench"),
        entry("Build_Workshop", "Equipment Workshop"),
        entry("Build_RadarTower", "Radar Tower"),
        entry("Build_ResourceSink", "AWESOME Sink"),
        entry("Build_ResourceSinkShop", "AWESOME Shop"),
    ],
};

/// The eight building tables, in output order.
pub static BUILDING_TABLES: [&CategoryTable; 8] = [
    &MACHINES,
    &EXTRACTORS,
    &GENERATORS,
    &LOGISTICS,
    &STORAGE,
    &POWER,
    &TRANSPORT,
    &OTHER,
];
