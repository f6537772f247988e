// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/fonts.rs
//
// Font roles, face resolution and the built-in fallback.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ab_glyph::{FontVec, PxScale};
use image::{GrayImage, Luma};
use imageproc::drawing::{draw_text_mut, text_size};

use super::builtin_font::BitmapFace;
use crate::constant::{BUNDLED_FONT_DIR, FONT_FILE_NAMES};

// ============================================================================
// Roles
// ============================================================================

/// Logical text roles on the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    SectionLabel,
    MainInfo,
    BodyInfo,
    Website,
    Phone,
    FinePrint,
}

impl FontRole {
    pub const ALL: [FontRole; 7] = [
        Self::Title,
        Self::SectionLabel,
        Self::MainInfo,
        Self::BodyInfo,
        Self::Website,
        Self::Phone,
        Self::FinePrint,
    ];

    /// Pixel size of the role on the 300 DPI canvas.
    #[must_use]
    pub fn pixel_size(self) -> f32 {
        match self {
            Self::Title => 42.0,
            Self::SectionLabel => 30.0,
            Self::MainInfo => 35.0,
            Self::BodyInfo => 36.0,
            Self::Website => 24.0,
            Self::Phone => 22.0,
            Self::FinePrint => 18.0,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// Faces
// ============================================================================

/// A concrete face at a fixed size.
#[derive(Clone)]
pub enum Face {
    Outline { font: Arc<FontVec>, scale: PxScale },
    Bitmap(BitmapFace),
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline { scale, .. } => write!(f, "Face::Outline({}px)", scale.y),
            Self::Bitmap(face) => write!(f, "Face::Bitmap(x{})", face.scale()),
        }
    }
}

impl Face {
    /// Width and height of already-shaped `text` in pixels.
    #[must_use]
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            Self::Outline { font, scale } => text_size(*scale, &**font, text),
            Self::Bitmap(face) => face.measure(text),
        }
    }

    /// Draw already-shaped `text` with its top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &mut GrayImage, x: i32, y: i32, color: Luma<u8>, text: &str) {
        match self {
            Self::Outline { font, scale } => {
                draw_text_mut(canvas, color, x, y, *scale, &**font, text);
            }
            Self::Bitmap(face) => face.draw(canvas, x, y, color, text),
        }
    }
}

/// Where the faces of a [`FontSet`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    /// No usable font file; the bitmap face cannot draw Persian glyphs.
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "built-in bitmap font (degraded: no Persian glyphs)"),
        }
    }
}

/// One face per role.
#[derive(Debug, Clone)]
pub struct FontSet {
    faces: [Face; 7],
    source: FontSource,
}

impl FontSet {
    /// Every role backed by the same outline font at its own size.
    #[must_use]
    pub fn from_font(font: FontVec, path: PathBuf) -> Self {
        let font = Arc::new(font);
        Self {
            faces: FontRole::ALL.map(|role| Face::Outline {
                font: Arc::clone(&font),
                scale: PxScale::from(role.pixel_size()),
            }),
            source: FontSource::File(path),
        }
    }

    /// Every role backed by the bitmap face.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            faces: FontRole::ALL.map(|role| Face::Bitmap(BitmapFace::for_pixel_size(role.pixel_size()))),
            source: FontSource::Builtin,
        }
    }

    #[must_use]
    pub fn face(&self, role: FontRole) -> &Face {
        &self.faces[role.index()]
    }

    #[must_use]
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.source == FontSource::Builtin
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Where a candidate font file is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontOrigin {
    /// Given explicitly on the command line.
    Explicit,
    /// Shipped next to the executable or in the working directory.
    Bundled,
    /// Installed system-wide or per user.
    System,
}

impl fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Explicit => "explicit",
            Self::Bundled => "bundled",
            Self::System => "system",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidate {
    pub path: PathBuf,
    pub origin: FontOrigin,
}

/// Ordered list of font files; the first existing one wins.
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    candidates: Vec<FontCandidate>,
}

impl FontResolver {
    /// Use exactly `candidates`, in order.
    #[must_use]
    pub fn with_candidates(candidates: Vec<FontCandidate>) -> Self {
        Self { candidates }
    }

    /// Explicit path first, then bundled directories, then system font directories.
    #[must_use]
    pub fn standard(explicit: Option<&Path>) -> Self {
        let mut candidates = Vec::new();

        if let Some(path) = explicit {
            candidates.push(FontCandidate {
                path: path.to_path_buf(),
                origin: FontOrigin::Explicit,
            });
        }

        for (dirs, origin) in [
            (bundled_dirs(), FontOrigin::Bundled),
            (system_dirs(), FontOrigin::System),
        ] {
            for name in FONT_FILE_NAMES {
                for dir in &dirs {
                    candidates.push(FontCandidate {
                        path: dir.join(name),
                        origin,
                    });
                }
            }
        }

        Self { candidates }
    }

    #[must_use]
    pub fn candidates(&self) -> &[FontCandidate] {
        &self.candidates
    }

    /// First candidate that exists on disk.
    #[must_use]
    pub fn resolve(&self) -> Option<&FontCandidate> {
        self.candidates.iter().find(|c| c.path.is_file())
    }

    /// Load the resolved font, or fall back to the built-in face.
    ///
    /// A resolved file that fails to parse also yields the built-in face.
    #[must_use]
    pub fn load(&self) -> FontSet {
        let Some(candidate) = self.resolve() else {
            log::info!("No Persian font found; using the built-in bitmap font");
            return FontSet::builtin();
        };

        let parsed = std::fs::read(&candidate.path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| FontVec::try_from_vec(bytes).map_err(|e| e.to_string()));

        match parsed {
            Ok(font) => {
                log::info!("Using {} font {}", candidate.origin, candidate.path.display());
                FontSet::from_font(font, candidate.path.clone())
            }
            Err(e) => {
                log::warn!(
                    "Font {} unusable ({e}); using the built-in bitmap font",
                    candidate.path.display()
                );
                FontSet::builtin()
            }
        }
    }
}

fn bundled_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join(BUNDLED_FONT_DIR));
        dirs.push(exe_dir);
    }
    dirs.push(PathBuf::from(BUNDLED_FONT_DIR));
    dirs.push(PathBuf::from("."));
    dirs
}

fn system_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = dirs::font_dir().into_iter().collect();
    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join(".fonts"));
    }
    dirs.extend(
        [
            "/usr/share/fonts/truetype/vazir",
            "/usr/share/fonts/truetype",
            "/usr/share/fonts",
            "/usr/local/share/fonts",
            "/Library/Fonts",
            "C:\\Windows\\Fonts",
        ]
        .into_iter()
        .map(PathBuf::from),
    );
    dirs
}
