// src/noyau/rationnel.rs
//
// Rationnel exact, toujours réduit.
// Invariants (garantis à la construction) :
// - dénominateur > 0
// - pgcd(|n|, d) == 1
//
// Chaque opération renvoie une NOUVELLE valeur (aucune mutation).

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::{ErreurNoyau, Result};
use super::format::format_rat;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rationnel {
    // BigRational::new réduit et rend le dénominateur positif.
    valeur: BigRational,
}

/// Opérande d’une opération binaire : rationnel ou entier brut.
/// L’entier est promu en `k/1` à l’entrée de chaque opération.
#[derive(Clone, Debug)]
pub enum Operande {
    Rat(Rationnel),
    Entier(BigInt),
}

impl Operande {
    pub fn promouvoir(self) -> Rationnel {
        match self {
            Operande::Rat(r) => r,
            Operande::Entier(k) => Rationnel::entier(k),
        }
    }
}

impl From<Rationnel> for Operande {
    fn from(r: Rationnel) -> Self {
        Operande::Rat(r)
    }
}

impl From<&Rationnel> for Operande {
    fn from(r: &Rationnel) -> Self {
        Operande::Rat(r.clone())
    }
}

impl From<BigInt> for Operande {
    fn from(k: BigInt) -> Self {
        Operande::Entier(k)
    }
}

impl From<i64> for Operande {
    fn from(k: i64) -> Self {
        Operande::Entier(BigInt::from(k))
    }
}

impl Rationnel {
    /// make(n, d) : refuse d == 0 (avant toute réduction), puis réduit.
    pub fn new(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Result<Self> {
        let d = d.into();
        if d.is_zero() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        Ok(Self::reduit(n.into(), d))
    }

    pub fn entier(n: impl Into<BigInt>) -> Self {
        Self {
            valeur: BigRational::from_integer(n.into()),
        }
    }

    // d != 0 garanti par l’appelant.
    fn reduit(n: BigInt, d: BigInt) -> Self {
        Self {
            valeur: BigRational::new(n, d),
        }
    }

    pub fn numer(&self) -> &BigInt {
        self.valeur.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.valeur.denom()
    }

    pub fn est_entier(&self) -> bool {
        self.denom().is_one()
    }

    pub fn est_zero(&self) -> bool {
        self.numer().is_zero()
    }

    /// a/b + c/d = (ad + cb) / bd
    pub fn additionner(&self, autre: impl Into<Operande>) -> Self {
        let o = autre.into().promouvoir();
        let n = self.numer() * o.denom() + o.numer() * self.denom();
        let d = self.denom() * o.denom();
        Self::reduit(n, d)
    }

    /// a/b - c/d = (ad - cb) / bd
    pub fn soustraire(&self, autre: impl Into<Operande>) -> Self {
        let o = autre.into().promouvoir();
        let n = self.numer() * o.denom() - o.numer() * self.denom();
        let d = self.denom() * o.denom();
        Self::reduit(n, d)
    }

    /// a/b * c/d = ac / bd
    pub fn multiplier(&self, autre: impl Into<Operande>) -> Self {
        let o = autre.into().promouvoir();
        let n = self.numer() * o.numer();
        let d = self.denom() * o.denom();
        Self::reduit(n, d)
    }

    /// a/b ÷ c/d = ad / bc ; échoue si c == 0.
    pub fn diviser(&self, autre: impl Into<Operande>) -> Result<Self> {
        let o = autre.into().promouvoir();
        if o.est_zero() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        let n = self.numer() * o.denom();
        let d = self.denom() * o.numer();
        Ok(Self::reduit(n, d))
    }
}

impl FromStr for Rationnel {
    type Err = ErreurNoyau;

    /// "a/b" ou "a" (dénominateur 1 par défaut).
    fn from_str(s: &str) -> Result<Self> {
        let entier = |t: &str| {
            BigInt::from_str(t).map_err(|_| ErreurNoyau::Analyse(s.to_string()))
        };

        if s.contains('/') {
            let parts: Vec<&str> = s.split('/').collect();
            if parts.len() != 2 {
                return Err(ErreurNoyau::Analyse(s.to_string()));
            }
            let n = entier(parts[0])?;
            let d = entier(parts[1])?;
            Rationnel::new(n, d)
        } else {
            Ok(Rationnel::entier(entier(s)?))
        }
    }
}

impl fmt::Display for Rationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rat(self.numer(), self.denom()))
    }
}
