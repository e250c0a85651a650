// src/noyau/erreur.rs
//
// Les trois seules erreurs du noyau.
// Le texte (Display) est le message montré tel quel à l’utilisateur.

/// Erreur terminale d’un appel `evaluate` (pas de reprise, pas de résultat partiel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Erreur {
    /// Caractère hors alphabet (lexer), opérandes manquants ou en trop (évaluateur).
    #[error("Invalid expression")]
    InvalidExpression,

    /// `)` sans `(` correspondante, ou `(` jamais fermée (convertisseur).
    #[error("Incorrect parens")]
    IncorrectParens,

    /// Diviseur exactement égal à 0 (évaluateur).
    #[error("Zero division")]
    ZeroDivision,
}
