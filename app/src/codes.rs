//! Three-character station codes derived from district names.
//!
//! Each strategy is tried in turn and the first candidate missing from the
//! used set wins:
//!
//! 1. first three characters of the cleaned name (`Dhaka` -> `DHA`)
//! 2. first letter plus the next two consonants (`Dhamrai` -> `DHM`)
//! 3. the step 1 prefix with a counter spliced over its tail (`DH2`, `DH3`, ...)

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

pub const CODE_LEN: usize = 3;

#[allow(clippy::expect_used)]
static ADMIN_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\s+(?:Sadar|District))+\s*$").expect("Invalid suffix regex")
});

/// Strips trailing administrative qualifiers (`Sadar`, `District`).
pub fn clean_name(name: &str) -> String {
    ADMIN_SUFFIX_REGEX.replace(name, "").trim().to_string()
}

/// Derives a code for `name` that is not in `used_codes`.
///
/// The set is only read. Callers must insert the returned code before the
/// next call, otherwise uniqueness is lost; [`assign_codes`] does exactly that.
pub fn derive_code(name: &str, used_codes: &HashSet<String>) -> String {
    let cleaned = clean_name(name);
    let prefix = prefix_code(&cleaned);

    if !used_codes.contains(&prefix) {
        return prefix;
    }

    if let Some(alt) = consonant_code(&cleaned).filter(|alt| !used_codes.contains(alt)) {
        debug!("Code {} taken, using consonant code {} for {}", prefix, alt, name);
        return alt;
    }

    let mut counter: u32 = 2;
    loop {
        let candidate = numbered_code(&prefix, counter);
        if !used_codes.contains(&candidate) {
            debug!("Code {} taken, using numbered code {} for {}", prefix, candidate, name);
            return candidate;
        }
        counter = counter.wrapping_add(1);
    }
}

/// Assigns codes to `names` in iteration order.
///
/// Order matters: on a collision the earlier name keeps the natural prefix.
pub fn assign_codes<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let (codes, _used) = names.into_iter().fold(
        (Vec::new(), HashSet::new()),
        |(mut codes, mut used): (Vec<String>, HashSet<String>), name| {
            let code = derive_code(name, &used);
            used.insert(code.clone());
            codes.push(code);
            (codes, used)
        },
    );
    codes
}

fn prefix_code(cleaned: &str) -> String {
    cleaned
        .chars()
        .take(CODE_LEN)
        .collect::<String>()
        .to_uppercase()
}

fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

fn consonant_code(cleaned: &str) -> Option<String> {
    let mut chars = cleaned.chars().skip_while(|c| !c.is_alphabetic());
    let first = chars.next()?;
    let rest: Vec<char> = chars.filter(|c| is_consonant(*c)).take(CODE_LEN - 1).collect();

    if rest.len() < CODE_LEN - 1 {
        return None;
    }

    Some(
        std::iter::once(first)
            .chain(rest)
            .collect::<String>()
            .to_uppercase(),
    )
}

fn numbered_code(prefix: &str, counter: u32) -> String {
    let digits = counter.to_string();
    let keep = CODE_LEN.saturating_sub(digits.chars().count());
    prefix
        .chars()
        .take(keep)
        .chain(digits.chars())
        .take(CODE_LEN)
        .collect()
}
