// src/noyau/jetons.rs
//
// Découpage d’une ligne en jetons + classification.
//
// Règle « nombre » (frontière exacte, quirks compris) :
// - sans les '/', le reste est non vide et uniquement des chiffres ASCII
// - ET, s’il y a un '/', chaque morceau séparé par '/' est non vide et numérique
//
// Donc : "12/", "/3", "1//2", "-3" ne sont PAS des nombres ;
//        "1/2/3" EST un nombre (l’analyse du rationnel échouera plus loin).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operateur::Plus),
            "-" => Some(Operateur::Moins),
            "*" => Some(Operateur::Fois),
            "/" => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// + - => 1 ; * / => 2. Tous associatifs à gauche.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Texte brut du littéral ("12" ou "3/4"), analysé à l’évaluation.
    Nombre(String),
    Operateur(Operateur),
    // Parenthèses comprises : ignorées par le shunting-yard.
    NonReconnu(String),
}

// Chiffres ASCII seulement : "٣" et les autres chiffres Unicode sont refusés.
fn tout_chiffres(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn est_nombre(texte: &str) -> bool {
    let sans_barres: String = texte.chars().filter(|&c| c != '/').collect();
    if !tout_chiffres(&sans_barres) {
        return false;
    }
    !texte.contains('/') || texte.split('/').all(tout_chiffres)
}

pub fn classer(texte: &str) -> Jeton {
    if est_nombre(texte) {
        return Jeton::Nombre(texte.to_string());
    }
    match Operateur::depuis_symbole(texte) {
        Some(op) => Jeton::Operateur(op),
        None => Jeton::NonReconnu(texte.to_string()),
    }
}

/// Découpe sur les blancs (pas de guillemets, pas d’échappement).
pub fn decouper(ligne: &str) -> Vec<Jeton> {
    ligne.split_whitespace().map(classer).collect()
}
