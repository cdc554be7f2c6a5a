use serde::{Deserialize, Serialize};

/// A named render-material preset: hex colors plus PBR scalars for the
/// primary shell, the accent (head/base) surfaces, and the handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PalettePreset {
    pub key: &'static str,
    pub primary_color: &'static str,
    pub accent_color: &'static str,
    pub handle_color: &'static str,
    pub gasket_color: &'static str,
    pub metalness: f64,
    pub roughness: f64,
    pub accent_metalness: f64,
    pub accent_roughness: f64,
    pub handle_metalness: f64,
    pub handle_roughness: f64,
}

pub const PALETTE_PRESETS: [PalettePreset; 7] = [
    PalettePreset {
        key: "stainless-brushed",
        primary_color: "#c9d0d4",
        accent_color: "#9ca9af",
        handle_color: "#14181c",
        gasket_color: "#214b3f",
        metalness: 0.86,
        roughness: 0.22,
        accent_metalness: 0.78,
        accent_roughness: 0.35,
        handle_metalness: 0.12,
        handle_roughness: 0.86,
    },
    PalettePreset {
        key: "stainless-polished",
        primary_color: "#d8dee1",
        accent_color: "#b9c5ca",
        handle_color: "#1f2328",
        gasket_color: "#1f4d40",
        metalness: 0.95,
        roughness: 0.12,
        accent_metalness: 0.88,
        accent_roughness: 0.2,
        handle_metalness: 0.16,
        handle_roughness: 0.72,
    },
    PalettePreset {
        key: "stainless-dark",
        primary_color: "#7f8f97",
        accent_color: "#697980",
        handle_color: "#111418",
        gasket_color: "#1a4338",
        metalness: 0.8,
        roughness: 0.42,
        accent_metalness: 0.75,
        accent_roughness: 0.5,
        handle_metalness: 0.08,
        handle_roughness: 0.9,
    },
    PalettePreset {
        key: "copper",
        primary_color: "#bc7846",
        accent_color: "#9c5e34",
        handle_color: "#20242a",
        gasket_color: "#4d3528",
        metalness: 0.92,
        roughness: 0.24,
        accent_metalness: 0.85,
        accent_roughness: 0.3,
        handle_metalness: 0.18,
        handle_roughness: 0.76,
    },
    PalettePreset {
        key: "ceramic-white",
        primary_color: "#f1f4f6",
        accent_color: "#dfe5e8",
        handle_color: "#30353b",
        gasket_color: "#8f9ca5",
        metalness: 0.08,
        roughness: 0.56,
        accent_metalness: 0.08,
        accent_roughness: 0.64,
        handle_metalness: 0.1,
        handle_roughness: 0.82,
    },
    PalettePreset {
        key: "matte-black",
        primary_color: "#242a2f",
        accent_color: "#1a1f24",
        handle_color: "#171b20",
        gasket_color: "#2b343a",
        metalness: 0.14,
        roughness: 0.86,
        accent_metalness: 0.12,
        accent_roughness: 0.9,
        handle_metalness: 0.08,
        handle_roughness: 0.92,
    },
    PalettePreset {
        key: "anodized-blue",
        primary_color: "#3e6f8f",
        accent_color: "#2f566e",
        handle_color: "#16232e",
        gasket_color: "#2c3f4a",
        metalness: 0.65,
        roughness: 0.32,
        accent_metalness: 0.6,
        accent_roughness: 0.4,
        handle_metalness: 0.12,
        handle_roughness: 0.84,
    },
];

/// Look up a preset by key, falling back to brushed stainless.
pub fn preset_by_key(key: &str) -> &'static PalettePreset {
    PALETTE_PRESETS
        .iter()
        .find(|p| p.key == key)
        .unwrap_or(&PALETTE_PRESETS[0])
}

/// The user-adjustable render style: a preset choice plus overrides.
/// `preset` may be "custom", meaning the primary color and PBR scalars
/// are free-standing and the accent is derived by darkening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialStyle {
    pub preset: String,
    pub primary_color: String,
    pub metalness: f64,
    pub roughness: f64,
}

impl Default for MaterialStyle {
    fn default() -> Self {
        MaterialStyle {
            preset: "custom".to_string(),
            primary_color: "#c9d0d4".to_string(),
            metalness: 0.0,
            roughness: 0.22,
        }
    }
}

/// Fully resolved per-surface render parameters, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPalette {
    pub primary_color: String,
    pub accent_color: String,
    pub handle_color: String,
    pub gasket_color: String,
    pub metalness: f64,
    pub roughness: f64,
    pub accent_metalness: f64,
    pub accent_roughness: f64,
    pub handle_metalness: f64,
    pub handle_roughness: f64,
}

fn clamp01(value: f64) -> f64 {
    value.min(1.0).max(0.0)
}

/// Validate a `#rrggbb` string, lowercased; anything else yields the
/// fallback.
pub fn normalize_hex(value: &str, fallback: &str) -> String {
    let raw = value.trim();
    let body = raw.strip_prefix('#').unwrap_or(raw);
    if body.len() == 6 && body.chars().all(|c| c.is_ascii_hexdigit()) {
        format!("#{}", body.to_ascii_lowercase())
    } else {
        fallback.to_string()
    }
}

/// Scale a hex color's channels by `multiplier` (held to [0.2, 1.6],
/// channels saturate at 255).
pub fn shade_hex(hex: &str, multiplier: f64) -> String {
    let color = normalize_hex(hex, "#c9d0d4");
    let factor = multiplier.min(1.6).max(0.2);
    let channel = |offset: usize| -> u8 {
        let raw = u8::from_str_radix(&color[offset..offset + 2], 16).unwrap_or(0);
        (f64::from(raw) * factor).round().min(255.0) as u8
    };
    format!("#{:02x}{:02x}{:02x}", channel(1), channel(3), channel(5))
}

/// Resolve a style into concrete per-surface parameters.
///
/// Custom styles derive the accent color by darkening the primary;
/// preset styles take their accent verbatim. Handle and gasket colors
/// always come from the preset table (brushed stainless for "custom").
pub fn resolve_palette(style: &MaterialStyle) -> ResolvedPalette {
    let preset = preset_by_key(&style.preset);
    let primary_color = normalize_hex(&style.primary_color, preset.primary_color);
    let derived_accent = shade_hex(&primary_color, 0.79);
    let accent_color = if style.preset == "custom" {
        derived_accent
    } else {
        normalize_hex(preset.accent_color, &derived_accent)
    };
    ResolvedPalette {
        primary_color,
        accent_color,
        handle_color: normalize_hex(preset.handle_color, "#14181c"),
        gasket_color: normalize_hex(preset.gasket_color, "#214b3f"),
        metalness: clamp01(style.metalness),
        roughness: clamp01(style.roughness),
        accent_metalness: clamp01(preset.accent_metalness),
        accent_roughness: clamp01(preset.accent_roughness),
        handle_metalness: clamp01(preset.handle_metalness),
        handle_roughness: clamp01(preset.handle_roughness),
    }
}
