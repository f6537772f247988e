// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Raster loading, cropping, PDF pages and file output.

pub mod crop;
pub mod file;
pub mod page;
pub mod raster;
