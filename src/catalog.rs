//! Fixed enumeration tables the asset factory samples from.

pub const INSTITUTIONS: [&str; 20] = [
    "KENYATTA UNIVERSITY",
    "UNIVERSITY OF NAIROBI",
    "JOMO KENYATTA UNIVERSITY OF AGRICULTURE AND TECHNOLOGY",
    "MOI UNIVERSITY",
    "EGERTON UNIVERSITY",
    "MASENO UNIVERSITY",
    "KENYATTA UNIVERSITY OF AGRICULTURE AND TECHNOLOGY",
    "UNIVERSITY OF ELDORET",
    "MULTIMEDIA UNIVERSITY OF KENYA",
    "TECHNICAL UNIVERSITY OF KENYA",
    "KENYA METHODIST UNIVERSITY",
    "CATHOLIC UNIVERSITY OF EASTERN AFRICA",
    "UNITED STATES INTERNATIONAL UNIVERSITY",
    "STRATHMORE UNIVERSITY",
    "DAYSTAR UNIVERSITY",
    "AFRICA NAZARENE UNIVERSITY",
    "SCOTT THEOLOGICAL COLLEGE",
    "GREAT LAKES UNIVERSITY OF KISUMU",
    "KABARAK UNIVERSITY",
    "MOUNT KENYA UNIVERSITY",
];

pub const DEPARTMENTS: [&str; 20] = [
    "ICT",
    "INFORMATION TECHNOLOGY",
    "COMPUTER SCIENCE",
    "ENGINEERING",
    "BUSINESS ADMINISTRATION",
    "ACCOUNTING",
    "FINANCE",
    "HUMAN RESOURCES",
    "MARKETING",
    "SALES",
    "OPERATIONS",
    "RESEARCH",
    "DEVELOPMENT",
    "QUALITY ASSURANCE",
    "CUSTOMER SERVICE",
    "ADMINISTRATION",
    "FACILITIES",
    "SECURITY",
    "MAINTENANCE",
    "LOGISTICS",
];

pub const ASSET_TYPES: [&str; 20] = [
    "LAPTOP",
    "DESKTOP",
    "PRINTER",
    "SCANNER",
    "PROJECTOR",
    "TELEVISION",
    "AIR CONDITIONER",
    "FURNITURE",
    "VEHICLE",
    "GENERATOR",
    "UPS",
    "NETWORK EQUIPMENT",
    "SOFTWARE",
    "LICENSE",
    "BOOKS",
    "LABORATORY EQUIPMENT",
    "MEDICAL EQUIPMENT",
    "SPORTS EQUIPMENT",
    "MUSICAL INSTRUMENTS",
    "OFFICE SUPPLIES",
];

pub const MANUFACTURERS: [&str; 20] = [
    "DELL",
    "HP",
    "LENOVO",
    "APPLE",
    "SAMSUNG",
    "LG",
    "CANON",
    "EPSON",
    "BROTHER",
    "MICROSOFT",
    "CISCO",
    "INTEL",
    "AMD",
    "WESTERN DIGITAL",
    "SEAGATE",
    "KINGSTON",
    "LOGITECH",
    "PHILIPS",
    "PANASONIC",
    "SONY",
];

pub const LOCATIONS: [&str; 20] = [
    "MAIN CAMPUS",
    "NORTH CAMPUS",
    "SOUTH CAMPUS",
    "EAST CAMPUS",
    "WEST CAMPUS",
    "ADMINISTRATION BLOCK",
    "LIBRARY",
    "LABORATORY",
    "COMPUTER LAB",
    "LECTURE HALL",
    "STAFF ROOM",
    "STUDENT CENTER",
    "CAFETERIA",
    "GYMNASIUM",
    "AUDITORIUM",
    "RESEARCH CENTER",
    "INNOVATION HUB",
    "BUSINESS SCHOOL",
    "ENGINEERING BLOCK",
    "SCIENCE BUILDING",
];

pub const STATUSES: [&str; 4] = ["Active", "Inactive", "Under Maintenance", "Retired"];

/// Reduced tables used by the bulk-import profile.
pub mod bulk {
    pub const ASSET_TYPES: [&str; 3] = ["LAPTOP", "DESKTOP", "PRINTER"];

    pub const INSTITUTIONS: [&str; 3] = [
        "KENYATTA UNIVERSITY",
        "UNIVERSITY OF NAIROBI",
        "JOMO KENYATTA UNIVERSITY",
    ];

    pub const DEPARTMENTS: [&str; 3] = ["ICT", "ENGINEERING", "BUSINESS"];

    pub const MANUFACTURERS: [&str; 3] = ["DELL", "HP", "LENOVO"];

    pub const FUNCTIONAL_AREA: &str = "Bulk Import";
    pub const LOCATION: &str = "BULK IMPORT";
    pub const STATUS: &str = "Active";
    pub const MODEL_PREFIX: &str = "BULK-";
    pub const SERIAL_PREFIX: &str = "BULK";
}
