// src/noyau/jetons.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::Erreur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Chiffres tels que lus : la conversion numérique attend l’évaluation.
    Num(String),
    Op(Operateur),

    LPar,
    RPar,
}

/// Jeton d’un seul caractère (opérateur ou parenthèse).
fn symbole_seul(c: char) -> Option<Tok> {
    match c {
        '(' => Some(Tok::LPar),
        ')' => Some(Tok::RPar),
        _ => Operateur::depuis_char(c).map(Tok::Op),
    }
}

/// Alphabet fixe : 0-9 + - * / ( ) et l’espace. Rien d’autre (pas de chiffres Unicode).
fn dans_alphabet(c: char) -> bool {
    c.is_ascii_digit() || c == ' ' || symbole_seul(c).is_some()
}

/// Tokenize une chaîne en jetons.
///
/// - les chiffres consécutifs forment un seul `Num` ("123" -> un jeton)
/// - les espaces sont ignorés, y compris entre deux chiffres ("1 2" -> "12")
/// - un seul caractère hors alphabet => `InvalidExpression`, sans résultat partiel
pub fn tokenize(s: &str) -> Result<Vec<Tok>, Erreur> {
    if !s.chars().all(dans_alphabet) {
        return Err(Erreur::InvalidExpression);
    }

    let mut out = Vec::new();
    let mut nombre = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            nombre.push(c);
            continue;
        }
        if c == ' ' {
            continue;
        }

        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }
        out.push(symbole_seul(c).ok_or(Erreur::InvalidExpression)?);
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    Ok(out)
}

/// Forme texte d’UN jeton : "42", "+", "(" ...
impl FromStr for Tok {
    type Err = Erreur;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Tok::Num(s.to_string()));
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => symbole_seul(c).ok_or(Erreur::InvalidExpression),
            _ => Err(Erreur::InvalidExpression),
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(chiffres) => f.write_str(chiffres),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
