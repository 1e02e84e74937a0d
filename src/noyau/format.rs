// src/noyau/format.rs

use num_bigint::BigInt;
use num_traits::One;

use super::jetons::Jeton;

/// n/d -> "n" si d == 1, sinon "n/d". Pas de rendu décimal.
pub fn format_rat(n: &BigInt, d: &BigInt) -> String {
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Format utilitaire (journaux) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Nombre(t) | Jeton::NonReconnu(t) => t.clone(),
            Jeton::Operateur(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
