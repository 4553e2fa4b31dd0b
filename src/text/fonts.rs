use std::{collections::HashMap, path::Path};

use crate::foundation::{
    core::Rgba8,
    error::{WireframeError, WireframeResult},
};

/// Font request: pixel size plus weight. Also the cache key of [`FontBook`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    /// Em size in pixels.
    pub size_px: u16,
    /// Bold weight when `true`, regular otherwise.
    pub bold: bool,
}

impl FontSpec {
    /// Regular weight at `size_px`.
    pub const fn regular(size_px: u16) -> Self {
        Self {
            size_px,
            bold: false,
        }
    }

    /// Bold weight at `size_px`.
    pub const fn bold(size_px: u16) -> Self {
        Self {
            size_px,
            bold: true,
        }
    }

    pub fn size_f32(self) -> f32 {
        f32::from(self.size_px)
    }
}

/// A resolved font: either a loaded face or the built-in bitmap fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontHandle {
    /// Index into the book's loaded faces.
    Face { face: usize, spec: FontSpec },
    /// No face could be loaded; text is drawn with the 5x7 bitmap font.
    Builtin(FontSpec),
}

impl FontHandle {
    pub fn spec(self) -> FontSpec {
        match self {
            Self::Face { spec, .. } | Self::Builtin(spec) => spec,
        }
    }

    pub fn is_builtin(self) -> bool {
        matches!(self, Self::Builtin(_))
    }
}

/// Glyphs ready to be filled, positioned relative to the text's top-left corner.
#[derive(Clone, Debug)]
pub struct ShapedText {
    pub font: vello_cpu::peniko::FontData,
    pub size_px: f32,
    pub glyphs: Vec<vello_cpu::Glyph>,
    pub width: f64,
}

struct LoadedFace {
    family: String,
    data: vello_cpu::peniko::FontData,
    // One context per face so Parley can only ever resolve to this face's glyph ids.
    font_ctx: parley::FontContext,
}

/// Families tried in order before falling back to any available face.
const PREFERRED_FAMILIES: [&str; 4] = ["Helvetica", "Arial", "DejaVu Sans", "Liberation Sans"];

/// Per-run font resolver and cache.
///
/// Each [`FontSpec`] is resolved once; the underlying face is looked up once per weight. Lookup
/// failures are logged and degrade to [`FontHandle::Builtin`], never to an error.
pub struct FontBook {
    db: usvg::fontdb::Database,
    faces: Vec<LoadedFace>,
    face_by_weight: HashMap<bool, Option<usize>>,
    handles: HashMap<FontSpec, FontHandle>,
    layout_ctx: parley::LayoutContext<Rgba8>,
}

impl FontBook {
    /// Book backed by the system font database.
    pub fn system() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self::with_database(db)
    }

    /// Book with no faces at all: every handle resolves to the built-in bitmap font.
    pub fn builtin_only() -> Self {
        Self::with_database(usvg::fontdb::Database::new())
    }

    fn with_database(db: usvg::fontdb::Database) -> Self {
        Self {
            db,
            faces: Vec::new(),
            face_by_weight: HashMap::new(),
            handles: HashMap::new(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Add every `.ttf`/`.otf`/`.ttc` file in `dir`. Missing directories are ignored.
    pub fn load_fonts_from_dir(&mut self, dir: &Path) {
        let Ok(rd) = std::fs::read_dir(dir) else {
            return;
        };

        for entry in rd.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext = ext.to_ascii_lowercase();
            if ext != "ttf" && ext != "otf" && ext != "ttc" {
                continue;
            }
            if let Err(err) = self.db.load_font_file(&path) {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable font file");
            }
        }
        // Newly added faces may beat an earlier fallback.
        self.face_by_weight.clear();
        self.handles.clear();
    }

    /// Resolve `spec` to a handle, loading the face on first use.
    pub fn resolve(&mut self, spec: FontSpec) -> FontHandle {
        if let Some(handle) = self.handles.get(&spec) {
            return *handle;
        }

        let face = match self.face_by_weight.get(&spec.bold) {
            Some(slot) => *slot,
            None => {
                let slot = match self.load_face(spec.bold) {
                    Ok(idx) => {
                        tracing::debug!(
                            family = %self.faces[idx].family,
                            bold = spec.bold,
                            "resolved font face"
                        );
                        Some(idx)
                    }
                    Err(err) => {
                        tracing::warn!(bold = spec.bold, %err, "falling back to built-in font");
                        None
                    }
                };
                self.face_by_weight.insert(spec.bold, slot);
                slot
            }
        };

        let handle = match face {
            Some(face) => FontHandle::Face { face, spec },
            None => FontHandle::Builtin(spec),
        };
        self.handles.insert(spec, handle);
        handle
    }

    /// Family name of the face behind `handle`, if it is not the built-in font.
    pub fn family_name(&self, handle: FontHandle) -> Option<&str> {
        match handle {
            FontHandle::Face { face, .. } => self.faces.get(face).map(|f| f.family.as_str()),
            FontHandle::Builtin(_) => None,
        }
    }

    /// Shape a single line of text.
    ///
    /// Returns `None` for built-in handles and when the face lacks a glyph for any character in
    /// `text`, so callers draw and measure the whole string with the bitmap font instead.
    pub fn shape(&mut self, handle: FontHandle, text: &str) -> Option<ShapedText> {
        let FontHandle::Face { face, spec } = handle else {
            return None;
        };
        let loaded = self.faces.get_mut(face)?;
        let family = loaded.family.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut loaded.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(spec.size_f32()));
        if spec.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        builder.push_default(parley::style::StyleProperty::Brush(Rgba8::default()));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                for g in run.positioned_glyphs() {
                    if g.id == 0 {
                        tracing::debug!(
                            family = %loaded.family,
                            text,
                            "face lacks a glyph, using bitmap font"
                        );
                        return None;
                    }
                    glyphs.push(vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                }
            }
        }

        Some(ShapedText {
            font: loaded.data.clone(),
            size_px: spec.size_f32(),
            glyphs,
            width: f64::from(layout.width()),
        })
    }

    /// Advance width of `text` in pixels.
    pub fn measure(&mut self, handle: FontHandle, text: &str) -> f64 {
        match self.shape(handle, text) {
            Some(shaped) => shaped.width,
            None => super::bitmap::advance(text, f64::from(handle.spec().size_px)),
        }
    }

    fn load_face(&mut self, bold: bool) -> WireframeResult<usize> {
        use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

        let mut families: Vec<Family<'_>> =
            PREFERRED_FAMILIES.iter().map(|&n| Family::Name(n)).collect();
        families.push(Family::SansSerif);

        let query = Query {
            families: &families,
            weight: if bold { Weight::BOLD } else { Weight::NORMAL },
            stretch: Stretch::Normal,
            style: Style::Normal,
        };

        let id = self
            .db
            .query(&query)
            .or_else(|| self.db.faces().next().map(|f| f.id))
            .ok_or_else(|| WireframeError::render("font database has no faces"))?;

        let (bytes, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| WireframeError::render("font face data could not be read"))?;

        let mut font_ctx = parley::FontContext::default();
        let registered = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = registered
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| WireframeError::render("no font families registered from face data"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| WireframeError::render("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index);
        self.faces.push(LoadedFace {
            family,
            data,
            font_ctx,
        });
        Ok(self.faces.len() - 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
