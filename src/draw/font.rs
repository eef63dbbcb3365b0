//! Font descriptor for annotation text.

/// Font configuration for measurement labels.
///
/// Converted to a Pango description string at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace")
    pub family: String,
    /// Font weight ("normal", "bold", "light" or numeric 100-900)
    pub weight: String,
    /// Font style ("normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans", "normal", "normal")
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, weight: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
        }
    }

    /// Converts this descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size", omitting normal style/weight.
    /// Example: "Sans 12" or "Monospace Italic Bold 14"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));
        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
