use serde::{Deserialize, Serialize};

/// The six structural parts every blueprint carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKey {
    BodyShell,
    CurvedHead,
    InsertFilter,
    Handle,
    Gasket,
    BaseCap,
}

impl PartKey {
    /// All parts, in BOM order.
    pub const ALL: [PartKey; 6] = [
        PartKey::BodyShell,
        PartKey::CurvedHead,
        PartKey::InsertFilter,
        PartKey::Handle,
        PartKey::Gasket,
        PartKey::BaseCap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartKey::BodyShell => "body_shell",
            PartKey::CurvedHead => "curved_head",
            PartKey::InsertFilter => "insert_filter",
            PartKey::Handle => "handle",
            PartKey::Gasket => "gasket",
            PartKey::BaseCap => "base_cap",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartKey::BodyShell => "Lower vessel body shell",
            PartKey::CurvedHead => "Curved upper head / funnel section",
            PartKey::InsertFilter => "Center insert / filter collar",
            PartKey::Handle => "External handle",
            PartKey::Gasket => "Sealing ring / gasket",
            PartKey::BaseCap => "Bottom cap / base ring",
        }
    }

    /// Parse a wire key. Returns `None` for part keys outside the
    /// canonical six (external suggestions may carry extras).
    pub fn parse(key: &str) -> Option<PartKey> {
        PartKey::ALL.iter().copied().find(|p| p.as_str() == key)
    }
}

/// A material choice for one part.
///
/// `part_key` stays a free string: analysis suggestions are allowed to
/// name parts outside the canonical set and the merge keeps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAssignment {
    pub part_key: String,
    pub part_name: String,
    /// Best material pick for this part.
    pub recommended: String,
    /// Acceptable substitutes, best first.
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// User override; falls back to `recommended` when absent.
    #[serde(default)]
    pub selected: Option<String>,
    /// Suggestion confidence in [0, 1].
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub notes: String,
}

impl MaterialAssignment {
    /// The material name the BOM should price: selection if present,
    /// otherwise the recommendation.
    pub fn effective_material(&self) -> &str {
        match self.selected.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.recommended,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_key_wire_names_round_trip() {
        for part in PartKey::ALL.iter() {
            let json = serde_json::to_string(part).unwrap();
            assert_eq!(json, format!("\"{}\"", part.as_str()));
            let back: PartKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *part);
            assert_eq!(PartKey::parse(part.as_str()), Some(*part));
        }
        assert_eq!(PartKey::parse("spout"), None);
    }

    #[test]
    fn effective_material_prefers_selection() {
        let mut m = MaterialAssignment {
            part_key: "gasket".into(),
            part_name: "Sealing ring / gasket".into(),
            recommended: "Food-grade Silicone (Shore A 50-60)".into(),
            alternatives: vec!["EPDM food-grade".into()],
            selected: None,
            confidence: 0.66,
            notes: String::new(),
        };
        assert_eq!(m.effective_material(), "Food-grade Silicone (Shore A 50-60)");
        m.selected = Some("EPDM food-grade".into());
        assert_eq!(m.effective_material(), "EPDM food-grade");
        m.selected = Some("  ".into());
        assert_eq!(m.effective_material(), "Food-grade Silicone (Shore A 50-60)");
    }
}
