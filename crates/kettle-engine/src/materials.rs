//! Stock material assignments, family classification, and merging of
//! externally supplied suggestions over the defaults.

use kettle_types::{MaterialAssignment, PartKey};

/// Broad material families the mass model knows densities for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialFamily {
    Stainless,
    Nylon,
    Phenolic,
    Silicone,
    Epdm,
    Generic,
}

impl MaterialFamily {
    /// Classify a free-form material name. Checks run in priority
    /// order, so "Stainless handle + silicone sleeve" stays stainless.
    pub fn classify(name: &str) -> MaterialFamily {
        let text = name.to_lowercase();
        if ["stainless", "304", "316", "430"]
            .iter()
            .any(|token| text.contains(token))
        {
            MaterialFamily::Stainless
        } else if text.contains("nylon") {
            MaterialFamily::Nylon
        } else if text.contains("bakelite") || text.contains("phenolic") {
            MaterialFamily::Phenolic
        } else if text.contains("silicone") {
            MaterialFamily::Silicone
        } else if text.contains("epdm") {
            MaterialFamily::Epdm
        } else {
            MaterialFamily::Generic
        }
    }

    /// Bulk density for mass estimates, in g/cm³.
    pub fn density_g_per_cm3(&self) -> f64 {
        match self {
            MaterialFamily::Stainless => 7.9,
            MaterialFamily::Nylon => 1.35,
            MaterialFamily::Phenolic => 1.3,
            MaterialFamily::Silicone => 1.15,
            MaterialFamily::Epdm => 0.95,
            MaterialFamily::Generic => 1.1,
        }
    }
}

fn assignment(
    part: PartKey,
    recommended: &str,
    alternatives: [&str; 2],
    confidence: f64,
    notes: &str,
) -> MaterialAssignment {
    MaterialAssignment {
        part_key: part.as_str().to_string(),
        part_name: part.display_name().to_string(),
        recommended: recommended.to_string(),
        alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
        selected: Some(recommended.to_string()),
        confidence,
        notes: notes.to_string(),
    }
}

/// The stock assignment list, in materials-panel order. Recommendation
/// doubles as the initial selection for every part.
pub fn default_materials() -> Vec<MaterialAssignment> {
    vec![
        assignment(
            PartKey::BodyShell,
            "Stainless Steel 304 (0.9 mm)",
            ["Stainless Steel 316L (0.9 mm)", "Stainless Steel 430 (1.0 mm)"],
            0.86,
            "Deep draw + spin formed shell.",
        ),
        assignment(
            PartKey::CurvedHead,
            "Stainless Steel 304 (0.9 mm)",
            ["Stainless Steel 316L (0.9 mm)", "Stainless Steel 430 (1.0 mm)"],
            0.82,
            "Curved lip and neck transition.",
        ),
        assignment(
            PartKey::Handle,
            "Glass-filled Nylon 66, heat-resistant",
            ["Bakelite / Phenolic resin", "Stainless handle + silicone sleeve"],
            0.61,
            "Thermal isolation and grip safety.",
        ),
        assignment(
            PartKey::InsertFilter,
            "Stainless Steel 304 + 80 mesh screen",
            ["Stainless Steel 316L + 100 mesh screen", "Perforated stainless disc"],
            0.79,
            "Leaf control during pour.",
        ),
        assignment(
            PartKey::Gasket,
            "Food-grade Silicone (Shore A 50-60)",
            ["EPDM food-grade", "Fluorosilicone (premium)"],
            0.66,
            "Upper/lower section seal.",
        ),
        assignment(
            PartKey::BaseCap,
            "Stainless Steel 304 (1.0 mm)",
            ["Stainless Steel 430 (1.0 mm)", "Stainless Steel 316L (1.0 mm)"],
            0.75,
            "Base reinforcement.",
        ),
    ]
}

/// Merge external suggestions over the defaults.
///
/// Field-by-field: a non-empty suggestion value wins, otherwise the
/// default stands. Part names always come from the defaults so external
/// labeling cannot rename canonical parts. Suggestions for parts
/// outside the canonical six pass through verbatim, and defaults the
/// suggestions never mentioned are appended at the end.
pub fn merge_materials(suggestions: &[MaterialAssignment]) -> Vec<MaterialAssignment> {
    let defaults = default_materials();
    if suggestions.is_empty() {
        return defaults;
    }

    let mut merged = Vec::with_capacity(defaults.len().max(suggestions.len()));
    let mut seen: Vec<&str> = Vec::with_capacity(suggestions.len());
    for suggestion in suggestions {
        seen.push(suggestion.part_key.as_str());
        let Some(base) = defaults.iter().find(|d| d.part_key == suggestion.part_key) else {
            merged.push(suggestion.clone());
            continue;
        };

        let recommended = if suggestion.recommended.is_empty() {
            base.recommended.clone()
        } else {
            suggestion.recommended.clone()
        };
        let alternatives = if suggestion.alternatives.is_empty() {
            base.alternatives.clone()
        } else {
            suggestion.alternatives.clone()
        };
        let selected = [
            suggestion.selected.as_deref(),
            Some(suggestion.recommended.as_str()),
            base.selected.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .map(str::to_string);
        let confidence = if suggestion.confidence.is_finite() {
            suggestion.confidence
        } else {
            base.confidence
        };
        let notes = if suggestion.notes.is_empty() {
            base.notes.clone()
        } else {
            suggestion.notes.clone()
        };

        merged.push(MaterialAssignment {
            part_key: base.part_key.clone(),
            part_name: base.part_name.clone(),
            recommended,
            alternatives,
            selected,
            confidence,
            notes,
        });
    }

    for base in defaults {
        if !seen.iter().any(|key| *key == base.part_key) {
            merged.push(base);
        }
    }
    merged
}
