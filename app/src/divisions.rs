use std::collections::HashMap;
use std::sync::LazyLock;

pub const UNKNOWN_DIVISION: &str = "Unknown";

pub static DIVISION_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("1", "Chattogram"),
        ("2", "Rajshahi"),
        ("3", "Khulna"),
        ("4", "Rangpur"),
        ("5", "Barishal"),
        ("6", "Dhaka"),
        ("7", "Sylhet"),
        ("8", "Mymensingh"),
    ])
});

/// Unmapped ids fall back to [`UNKNOWN_DIVISION`].
pub fn division_label(division_id: &str) -> &'static str {
    DIVISION_NAMES
        .get(division_id)
        .copied()
        .unwrap_or(UNKNOWN_DIVISION)
}
