// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: image documents, address labels and their errors.

pub mod document;
pub mod error;
pub mod label;
