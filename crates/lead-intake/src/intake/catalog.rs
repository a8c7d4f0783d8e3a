//! Fixed enumerations rendered by the lead forms.

pub const PLUMBING_SERVICES: &[&str] = &[
    "Leak Detection & Repair",
    "Water Heater Repair",
    "Water Heater Installation",
    "Tankless Water Heater",
    "Sump Pump Service",
    "Toilet Repair",
    "Faucet & Fixture Repair",
    "Gas Line Service",
    "Repiping",
    "Other Plumbing",
];

pub const DRAIN_ISSUES: &[&str] = &[
    "Clogged Drain",
    "Sewer Backup",
    "Slow Drains",
    "Sewer Line Camera Inspection",
    "Hydro Jetting",
    "Sewer Line Repair",
    "Tree Roots in Line",
    "Other Drain Issue",
];

pub const WATERPROOFING_SERVICES: &[&str] = &[
    "Basement Waterproofing",
    "Foundation Crack Repair",
    "Interior Drain Tile",
    "Exterior Excavation",
    "Crawl Space Encapsulation",
    "Sump Pump Installation",
    "Free Inspection",
];

pub const GENERAL_SERVICES: &[&str] = &[
    "Plumbing",
    "Drain & Sewer",
    "Waterproofing",
    "Water Damage Restoration",
    "Emergency Service",
    "Other",
];

pub const EMERGENCY_PROBLEMS: &[&str] = &[
    "Burst Pipe",
    "Flooded Basement",
    "Sewer Backup",
    "No Hot Water",
    "Gas Smell",
    "Other Emergency",
];

pub const URGENCY_LEVELS: &[&str] = &[
    "Emergency - ASAP",
    "Within 24 hours",
    "This week",
    "Flexible",
];

pub const TIME_WINDOWS: &[&str] = &[
    "Morning (8am - 12pm)",
    "Afternoon (12pm - 4pm)",
    "Evening (4pm - 7pm)",
];

pub const EMERGENCY_SERVICE_TYPE: &str = "Emergency Service";
