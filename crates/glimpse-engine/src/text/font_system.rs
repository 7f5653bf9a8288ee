use std::fmt;
use std::path::{Path, PathBuf};

/// Error returned by [`FontSystem::load_font`] and [`FontSystem::load_first_available`].
#[derive(Debug, Clone)]
pub enum FontLoadError {
    /// The bytes could not be parsed as a TrueType/OpenType font.
    Parse(String),
    /// None of the candidate paths could be read.
    NotFound(Vec<PathBuf>),
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Parse(msg) => write!(f, "font load error: {msg}"),
            FontLoadError::NotFound(paths) => {
                write!(f, "no font found; tried {} path(s)", paths.len())
            }
        }
    }
}

impl std::error::Error for FontLoadError {}

/// Common locations of a sans-serif font on desktop systems.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The text renderer borrows the system
/// each frame so new glyphs can be rasterized on demand.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Loads the first candidate path that can be read and parsed.
    pub fn load_first_available<P: AsRef<Path>>(
        &mut self,
        candidates: &[P],
    ) -> Result<FontId, FontLoadError> {
        for path in candidates {
            let path = path.as_ref();
            let Ok(bytes) = std::fs::read(path) else { continue };
            match self.load_font(&bytes) {
                Ok(id) => {
                    log::debug!("loaded overlay font {}", path.display());
                    return Ok(id);
                }
                Err(e) => log::debug!("skipping {}: {e}", path.display()),
            }
        }
        Err(FontLoadError::NotFound(
            candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        ))
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Distance between baselines of consecutive lines at `size` px.
    ///
    /// Falls back to `1.2 * size` when the font has no horizontal metrics.
    pub fn line_height(&self, id: FontId, size: f32) -> f32 {
        self.get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map(|m| m.new_line_size)
            .unwrap_or(size * 1.2)
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let mut fs = FontSystem::new();
        assert!(matches!(fs.load_font(b"not a font"), Err(FontLoadError::Parse(_))));
        assert!(fs.is_empty());
    }

    #[test]
    fn missing_candidates_report_not_found() {
        let mut fs = FontSystem::new();
        let err = fs
            .load_first_available(&["/definitely/not/here.ttf", "/nor/here.otf"])
            .unwrap_err();
        match err {
            FontLoadError::NotFound(paths) => assert_eq!(paths.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_font_line_height_falls_back() {
        let fs = FontSystem::new();
        assert!((fs.line_height(FontId(3), 10.0) - 12.0).abs() < 1e-6);
    }
}
