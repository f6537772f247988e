// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/mod.rs
//
// Shipping label composition: records, fonts, layout, drawing and export.

pub mod builtin_font;
pub mod compose;
pub mod draw;
pub mod export;
pub mod fonts;
pub mod layout;
pub mod record;
pub mod shaping;
pub mod wrap;

pub use compose::compose_label;
pub use export::export_label_with;
pub use fonts::{FontResolver, FontSet};
pub use layout::LabelLayout;
pub use record::AddressRecord;
