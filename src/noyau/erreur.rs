// src/noyau/erreur.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErreurNoyau>;

/// Erreurs du noyau (rationnels, analyse, évaluation RPN).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Dénominateur nul à la construction, ou diviseur de numérateur nul.
    #[error("le dénominateur ne peut pas être nul")]
    DivisionParZero,

    #[error("nombre invalide : '{0}'")]
    Analyse(String),

    #[error("{0}")]
    ExpressionInvalide(MotifInvalide),
}

/// Motif d’une expression invalide (ce qui est affiché à l’utilisateur).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MotifInvalide {
    #[error("nombre d’opérandes incorrect pour l’opération")]
    Operandes,

    #[error("tentative de division par zéro")]
    DivisionParZero,

    #[error("expression invalide")]
    PileFinale,

    #[error("jeton inattendu en RPN : '{0}'")]
    JetonInattendu(String),
}

impl From<MotifInvalide> for ErreurNoyau {
    fn from(m: MotifInvalide) -> Self {
        ErreurNoyau::ExpressionInvalide(m)
    }
}
