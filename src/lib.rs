// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Photo cropping to a fixed physical size and Persian shipping label composition.

pub mod app;
pub mod cli;
pub mod config;
pub mod constant;
pub mod domain;

pub use app::run;
pub use domain::error::{DocResult, LabelkitError, ValidationError};
