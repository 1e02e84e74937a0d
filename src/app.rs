// src/app.rs
//
// Calculatrice lignes : module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (config, source, traitement)
// - Relier source -> traitement -> sortie
// - Afficher les diagnostics de source (fichier absent / illisible)
//
// Important:
// - Aucune erreur de source n’est fatale : on affiche une ligne et on termine.
// - Seul un échec d’ÉCRITURE sur la sortie remonte en erreur.

pub mod config;
pub mod source;
pub mod traitement;

// Ré-export pratique : `use crate::app::Config;`
pub use config::Config;

use std::io::Write;

use anyhow::Context;
use tracing::{info, warn};

use source::ErreurSource;
use traitement::{traiter_lignes, ErreurTraitement};

/// Préfixe du diagnostic « fichier absent ».
const PREFIXE_SOURCE: &str = "Erreur";

/// Préfixe du diagnostic « lecture impossible ».
const PREFIXE_LECTURE: &str = "Erreur de lecture du fichier";

pub fn executer<W: Write>(config: &Config, sortie: &mut W) -> anyhow::Result<()> {
    let lecteur = match source::ouvrir(&config.fichier) {
        Ok(l) => l,
        Err(e) => return signaler(sortie, &e),
    };

    match traiter_lignes(lecteur, sortie) {
        Ok(bilan) => {
            info!(
                lignes = bilan.lignes,
                resultats = bilan.resultats,
                erreurs = bilan.erreurs,
                "traitement terminé"
            );
            Ok(())
        }
        Err(ErreurTraitement::Source(e)) => signaler(sortie, &e),
        Err(e @ ErreurTraitement::Ecriture(_)) => Err(e.into()),
    }
}

fn signaler<W: Write>(sortie: &mut W, e: &ErreurSource) -> anyhow::Result<()> {
    warn!(erreur = %e, "source indisponible");
    let prefixe = match e {
        ErreurSource::Introuvable(_) => PREFIXE_SOURCE,
        ErreurSource::Lecture(_) => PREFIXE_LECTURE,
    };
    writeln!(sortie, "{prefixe} : {e}").context("écriture du diagnostic")?;
    Ok(())
}
