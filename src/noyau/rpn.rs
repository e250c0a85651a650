// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> postfixe (RPN)
//
// Règles:
// - Num : sortie directe
// - '(' : empilée
// - ')' : dépile vers la sortie jusqu’à '(' (qui est jetée, jamais sortie)
//         pile vidée sans trouver '(' => IncorrectParens
// - opérateur : dépile tant que rang(op) <= rang(sommet), puis empile
//         (égalité => on dépile : 7 - 2 - 1 se lit (7 - 2) - 1)
// - fin : une '(' encore sur la pile => IncorrectParens, sinon on vide la pile

use super::erreur::Erreur;
use super::jetons::{Operateur, Tok};

const RANG_PARENTHESE: u8 = 10;

fn rang(op: Operateur) -> u8 {
    match op {
        Operateur::Star | Operateur::Slash => 30,
        Operateur::Plus | Operateur::Minus => 20,
    }
}

/// Contenu possible de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum SurPile {
    Op(Operateur),
    LPar,
}

impl SurPile {
    fn rang(self) -> u8 {
        match self {
            SurPile::Op(op) => rang(op),
            SurPile::LPar => RANG_PARENTHESE,
        }
    }
}

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [(, 1, +, 2, ), *, 4, +, 3]
///   rpn:    [1, 2, +, 4, *, 3, +]
pub fn to_postfix(tokens: Vec<Tok>) -> Result<Vec<Tok>, Erreur> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<SurPile> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(SurPile::LPar),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(SurPile::Op(op)) => out.push(Tok::Op(op)),
                    Some(SurPile::LPar) => break,
                    None => return Err(Erreur::IncorrectParens),
                }
            },

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    if rang(op) > top.rang() {
                        break;
                    }
                    // '(' a le rang le plus bas : jamais dépilée ici
                    let SurPile::Op(t) = top else { break };
                    ops.pop();
                    out.push(Tok::Op(t));
                }
                ops.push(SurPile::Op(op));
            }
        }
    }

    // vide la pile ops (sommet d’abord)
    while let Some(s) = ops.pop() {
        match s {
            SurPile::Op(op) => out.push(Tok::Op(op)),
            SurPile::LPar => return Err(Erreur::IncorrectParens),
        }
    }

    Ok(out)
}
