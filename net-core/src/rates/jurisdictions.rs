//! The fixed list of jurisdictions a closing can be located in.

/// Every county in the state, in alphabetical order.
pub const JURISDICTIONS: [&str; 92] = [
    "Adams",
    "Allen",
    "Bartholomew",
    "Benton",
    "Blackford",
    "Boone",
    "Brown",
    "Carroll",
    "Cass",
    "Clark",
    "Clay",
    "Clinton",
    "Crawford",
    "Daviess",
    "Dearborn",
    "Decatur",
    "DeKalb",
    "Delaware",
    "Dubois",
    "Elkhart",
    "Fayette",
    "Floyd",
    "Fountain",
    "Franklin",
    "Fulton",
    "Gibson",
    "Grant",
    "Greene",
    "Hamilton",
    "Hancock",
    "Harrison",
    "Hendricks",
    "Henry",
    "Howard",
    "Huntington",
    "Jackson",
    "Jasper",
    "Jay",
    "Jefferson",
    "Jennings",
    "Johnson",
    "Knox",
    "Kosciusko",
    "LaGrange",
    "Lake",
    "LaPorte",
    "Lawrence",
    "Madison",
    "Marion",
    "Marshall",
    "Martin",
    "Miami",
    "Monroe",
    "Montgomery",
    "Morgan",
    "Newton",
    "Noble",
    "Ohio",
    "Orange",
    "Owen",
    "Parke",
    "Perry",
    "Pike",
    "Porter",
    "Posey",
    "Pulaski",
    "Putnam",
    "Randolph",
    "Ripley",
    "Rush",
    "Scott",
    "Shelby",
    "Spencer",
    "St. Joseph",
    "Starke",
    "Steuben",
    "Sullivan",
    "Switzerland",
    "Tippecanoe",
    "Tipton",
    "Union",
    "Vanderburgh",
    "Vermillion",
    "Vigo",
    "Wabash",
    "Warren",
    "Warrick",
    "Washington",
    "Wayne",
    "Wells",
    "White",
    "Whitley",
];

/// A jurisdiction from [`JURISDICTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jurisdiction(&'static str);

impl Jurisdiction {
    /// Finds a jurisdiction by name, ignoring case and surrounding
    /// whitespace.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        JURISDICTIONS
            .iter()
            .find(|name| name.eq_ignore_ascii_case(key))
            .map(|name| Self(*name))
    }

    /// Canonical spelling, e.g. `"DeKalb"`.
    pub fn name(&self) -> &'static str {
        self.0
    }

    /// Every jurisdiction, in [`JURISDICTIONS`] order.
    pub fn all() -> impl Iterator<Item = Self> {
        JURISDICTIONS.iter().map(|name| Self(*name))
    }
}

/// `true` when `key` names a jurisdiction in [`JURISDICTIONS`].
pub fn is_known(key: &str) -> bool {
    Jurisdiction::parse(key).is_some()
}
