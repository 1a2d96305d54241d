//! Display settings — the sibling root persisted next to the resume record.
//! Not scored or merged into; carried here because persistence treats it as an
//! independent blob with its own debounced commits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resume section identifiers, used for ordering, enablement, and progress.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Volunteer,
    Awards,
    /// The advisory assistant panel. Always enabled, always counts complete.
    Assistant,
}

/// Canonical section order used for fresh settings.
pub const DEFAULT_SECTION_ORDER: [Section; 11] = [
    Section::Personal,
    Section::Summary,
    Section::Experience,
    Section::Education,
    Section::Skills,
    Section::Projects,
    Section::Certifications,
    Section::Languages,
    Section::Volunteer,
    Section::Awards,
    Section::Assistant,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    pub template: String,
    pub font_family: String,
    pub font_size: u8,
    pub line_spacing: f32,
    pub margin_scale: f32,
    pub section_order: Vec<Section>,
    pub enabled_sections: BTreeMap<Section, bool>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            template: "modern".to_string(),
            font_family: "Inter".to_string(),
            font_size: 11,
            line_spacing: 1.15,
            margin_scale: 1.0,
            section_order: DEFAULT_SECTION_ORDER.to_vec(),
            enabled_sections: DEFAULT_SECTION_ORDER.iter().map(|s| (*s, true)).collect(),
        }
    }
}

impl DisplaySettings {
    /// Returns the enabled sections in display order. Sections missing from the
    /// enablement map count as enabled; the assistant section cannot be
    /// disabled.
    pub fn enabled(&self) -> Vec<Section> {
        let mut enabled: Vec<Section> = self
            .section_order
            .iter()
            .copied()
            .filter(|s| {
                *s == Section::Assistant
                    || self.enabled_sections.get(s).copied().unwrap_or(true)
            })
            .collect();
        if !enabled.contains(&Section::Assistant) {
            enabled.push(Section::Assistant);
        }
        enabled
    }
}
