use bech32_text::{HrpRegistry, ResolvedHrp, Variant};
use std::fmt;

/// Error when a preset is not found
#[derive(Debug)]
pub struct PresetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl fmt::Display for PresetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: hrp preset '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            writeln!(f, "hint: did you mean '{}'?", suggestion)?;
        }
        write!(f, "      run `bech32-text config list` to see all presets")
    }
}

impl std::error::Error for PresetNotFoundError {}

/// Pick the hrp and variant for `encode`.
///
/// Priority: literal hrp argument, then `--preset`, then the configured
/// `default_preset`.
pub fn resolve_encode_hrp(
    config: &HrpRegistry,
    hrp: Option<&str>,
    preset: Option<&str>,
    variant: Option<Variant>,
) -> Result<ResolvedHrp, Box<dyn std::error::Error>> {
    if let Some(hrp) = hrp {
        return Ok(ResolvedHrp {
            hrp: hrp.to_string(),
            variant: variant.unwrap_or(config.settings.variant()),
        });
    }

    let name = preset
        .or(config.settings.default_preset.as_deref())
        .ok_or("error: no human-readable part given and no default_preset configured")?;

    if config.get_preset(name).is_none() {
        let available: Vec<String> = config.hrps.keys().cloned().collect();
        return Err(Box::new(PresetNotFoundError {
            name: name.to_string(),
            suggestion: find_closest_preset(name, &available),
        }));
    }

    Ok(config.resolve_hrp(name, variant))
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching preset name
fn find_closest_preset(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };
    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
