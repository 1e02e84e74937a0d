//! src/app/config.rs
//!
//! Configuration de l’exécution (ligne de commande).

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Fichier lu quand aucun chemin n’est donné.
pub const FICHIER_DEFAUT: &str = "input01.txt";

/// Évalue des expressions rationnelles exactes, une par ligne.
#[derive(Debug, Clone, Parser)]
#[command(name = "calculatrice-lignes", version, about)]
pub struct Config {
    /// Fichier d’expressions (une par ligne) ; « - » pour l’entrée standard.
    #[arg(value_name = "FICHIER", default_value = FICHIER_DEFAUT)]
    pub fichier: PathBuf,

    /// Journaux plus bavards sur stderr (-v, -vv, -vvv). RUST_LOG a priorité.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbeux: u8,
}
