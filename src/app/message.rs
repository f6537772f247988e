// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Command outcomes and how they are reported on stdout.

use std::path::PathBuf;

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Files written, in write order.
    Saved(Vec<PathBuf>),
    /// A preview was written here and handed to the system viewer.
    Previewed(PathBuf),
    /// Nothing was done and no error is reported.
    Cancelled,
}

impl Outcome {
    /// Lines printed for the user, one per artifact.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Saved(paths) => paths.iter().map(|p| p.display().to_string()).collect(),
            Self::Previewed(path) => vec![format!("preview:{}", path.display())],
            Self::Cancelled => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let saved = Outcome::Saved(vec![PathBuf::from("a.png"), PathBuf::from("a.pdf")]);
        assert_eq!(saved.lines(), vec!["a.png", "a.pdf"]);
        assert_eq!(
            Outcome::Previewed(PathBuf::from("p.png")).lines(),
            vec!["preview:p.png"]
        );
        assert!(Outcome::Cancelled.lines().is_empty());
    }
}
