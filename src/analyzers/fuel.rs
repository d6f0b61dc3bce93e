//! Static fuel classification.

/// Label used for a plant whose fuel is not known.
pub const UNKNOWN_FUEL: &str = "Unknown";

/// Fuels whose capacity counts as low-carbon. Includes nuclear.
static GREEN_FUELS: &[&str] = &["Solar", "Wind", "Hydro", "Nuclear", "Geothermal", "Biomass"];

/// Green fuels minus nuclear.
static RENEWABLE_FUELS: &[&str] = &["Solar", "Wind", "Hydro", "Geothermal", "Biomass"];

/// Returns true if `fuel` is in the green set. Labels are case-sensitive.
pub fn is_green(fuel: &str) -> bool {
    GREEN_FUELS.contains(&fuel)
}

/// Returns true if `fuel` is in the renewable set. Labels are case-sensitive.
pub fn is_renewable(fuel: &str) -> bool {
    RENEWABLE_FUELS.contains(&fuel)
}
