//! src/app/source.rs
//!
//! Ouverture de la source de lignes (fichier ou entrée standard).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Chemin spécial : lire l’entrée standard.
pub const ENTREE_STANDARD: &str = "-";

#[derive(Debug, Error)]
pub enum ErreurSource {
    #[error("fichier {} introuvable !", .0.display())]
    Introuvable(PathBuf),

    /// Ouverture refusée, ou lecture interrompue (E/S, UTF-8 invalide).
    #[error("{0}")]
    Lecture(#[from] io::Error),
}

pub fn ouvrir(chemin: &Path) -> Result<Box<dyn BufRead>, ErreurSource> {
    if chemin.as_os_str() == ENTREE_STANDARD {
        return Ok(Box::new(io::stdin().lock()));
    }
    if !chemin.exists() {
        return Err(ErreurSource::Introuvable(chemin.to_path_buf()));
    }
    let f = File::open(chemin)?;
    Ok(Box::new(BufReader::new(f)))
}
