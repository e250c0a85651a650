//! Tests par étape : jetons, shunting-yard, pile.
//!
//! Chaque étape est appelée seule, avec des suites de jetons écrites en texte
//! ("7 - 2 * 3" découpé sur les espaces).

use super::erreur::Erreur;
use super::jetons::{format_tokens, tokenize, Operateur, Tok};
use super::pile::{evaluate_postfix, evaluate_postfix_trace};
use super::rpn::to_postfix;

fn jetons(texte: &str) -> Vec<Tok> {
    texte
        .split(' ')
        .map(|t| t.parse().unwrap_or_else(|e| panic!("jeton {t:?}: {e}")))
        .collect()
}

fn num(s: &str) -> Tok {
    Tok::Num(s.to_string())
}

/* ------------------------ Jetons ------------------------ */

#[test]
fn jetons_chiffres_simples() {
    let attendu = jetons("( 1 + 2 ) * 4 + 3");
    assert_eq!(tokenize("(1 + 2) * 4 + 3"), Ok(attendu));
}

#[test]
fn jetons_multi_chiffres() {
    let t = tokenize("(1 + 22) * 444 + 3333").unwrap();
    assert_eq!(format_tokens(&t), "( 1 + 22 ) * 444 + 3333");
    assert_eq!(tokenize("123"), Ok(vec![num("123")]));
}

#[test]
fn jetons_espacement_libre() {
    assert_eq!(tokenize("(  1+    2)  *3"), tokenize("(1+2)*3"));
    assert_eq!(
        tokenize("(1+2)*3"),
        Ok(vec![
            Tok::LPar,
            num("1"),
            Tok::Op(Operateur::Plus),
            num("2"),
            Tok::RPar,
            Tok::Op(Operateur::Star),
            num("3"),
        ])
    );
}

#[test]
fn jetons_espace_ne_coupe_pas_un_nombre() {
    assert_eq!(tokenize("1 2 3"), Ok(vec![num("123")]));
    assert_eq!(tokenize(" 4 0 + 2 "), tokenize("40+2"));
}

#[test]
fn jetons_vide_ou_espaces() {
    assert_eq!(tokenize(""), Ok(vec![]));
    assert_eq!(tokenize("    "), Ok(vec![]));
}

#[test]
fn jetons_caractere_hors_alphabet() {
    assert_eq!(tokenize("1 a 2 # 3 - 4 / 2"), Err(Erreur::InvalidExpression));

    // peu importe la position
    for s in ["x1+2", "1+2x", "1+x+2", "1.5", "2^3", "1\t+2", "٣+1", "1 + 2\n"] {
        assert_eq!(tokenize(s), Err(Erreur::InvalidExpression), "s={s:?}");
    }
}

#[test]
fn jeton_depuis_texte() {
    assert_eq!("42".parse::<Tok>(), Ok(num("42")));
    assert_eq!("/".parse::<Tok>(), Ok(Tok::Op(Operateur::Slash)));
    assert_eq!(")".parse::<Tok>(), Ok(Tok::RPar));

    for s in ["", " ", "++", "4 2", "a", "-1"] {
        assert_eq!(s.parse::<Tok>(), Err(Erreur::InvalidExpression), "s={s:?}");
    }
}

/* ------------------------ Shunting-yard ------------------------ */

#[test]
fn rpn_sans_parentheses() {
    assert_eq!(to_postfix(jetons("7 - 2 * 3")), Ok(jetons("7 2 3 * -")));
}

#[test]
fn rpn_avec_parentheses() {
    assert_eq!(
        to_postfix(jetons("( 1 + 2 ) * 4 + 3")),
        Ok(jetons("1 2 + 4 * 3 +"))
    );
}

#[test]
fn rpn_associativite_gauche() {
    // égalité de rang => on dépile avant d’empiler
    assert_eq!(to_postfix(jetons("8 - 4 - 2")), Ok(jetons("8 4 - 2 -")));
    assert_eq!(to_postfix(jetons("8 / 4 * 2")), Ok(jetons("8 4 / 2 *")));
}

#[test]
fn rpn_parentheses_imbriquees() {
    assert_eq!(
        to_postfix(jetons("( ( 1 + 2 ) * ( 3 - 4 ) ) / 5")),
        Ok(jetons("1 2 + 3 4 - * 5 /"))
    );
}

#[test]
fn rpn_parentheses_incorrectes() {
    assert_eq!(
        to_postfix(jetons("1 + 2 ) * 4 + 3")),
        Err(Erreur::IncorrectParens)
    );
    assert_eq!(
        to_postfix(jetons("( 1 + 2 * 4 + 3")),
        Err(Erreur::IncorrectParens)
    );
    assert_eq!(to_postfix(jetons(")")), Err(Erreur::IncorrectParens));
    assert_eq!(to_postfix(jetons("( ( 1 )")), Err(Erreur::IncorrectParens));
}

#[test]
fn rpn_ne_valide_pas_les_operandes() {
    // le manque d’opérandes est l’affaire de la pile, pas du convertisseur
    assert_eq!(to_postfix(jetons("1 +")), Ok(jetons("1 +")));
    assert_eq!(to_postfix(jetons("( )")), Ok(vec![]));
    assert_eq!(to_postfix(vec![]), Ok(vec![]));
}

/* ------------------------ Pile ------------------------ */

#[test]
fn pile_division_par_zero() {
    assert_eq!(evaluate_postfix(jetons("1 0 /")), Err(Erreur::ZeroDivision));
    assert_eq!(evaluate_postfix(jetons("1 2 2 - /")), Err(Erreur::ZeroDivision));
}

#[test]
fn pile_zero_divise() {
    assert_eq!(evaluate_postfix(jetons("0 5 /")), Ok(0.0));
}

#[test]
fn pile_operandes_manquants_ou_en_trop() {
    assert_eq!(evaluate_postfix(jetons("1 +")), Err(Erreur::InvalidExpression));
    assert_eq!(evaluate_postfix(jetons("+")), Err(Erreur::InvalidExpression));
    assert_eq!(
        evaluate_postfix(jetons("1 2 3 +")),
        Err(Erreur::InvalidExpression)
    );
    assert_eq!(evaluate_postfix(vec![]), Err(Erreur::InvalidExpression));
}

#[test]
fn pile_ordre_des_operandes() {
    // premier dépilé = droite
    assert_eq!(evaluate_postfix(jetons("7 2 -")), Ok(5.0));
    assert_eq!(evaluate_postfix(jetons("3 2 /")), Ok(1.5));
    assert_eq!(evaluate_postfix(jetons("7 2 3 * -")), Ok(1.0));
}

#[test]
fn pile_parenthese_refusee() {
    assert_eq!(evaluate_postfix(jetons("1 2 ( +")), Err(Erreur::InvalidExpression));
    assert_eq!(evaluate_postfix(jetons("1 )")), Err(Erreur::InvalidExpression));
}

#[test]
fn pile_litteral_tres_long() {
    let grand = format!("1{}", "0".repeat(400));
    let v = evaluate_postfix(vec![Tok::Num(grand)]).unwrap();
    assert!(v.is_infinite() && v > 0.0);

    // 2^53 + 1 n’est pas représentable : arrondi au double le plus proche
    assert_eq!(
        evaluate_postfix(jetons("9007199254740993")),
        Ok(9007199254740992.0)
    );
}

#[test]
fn pile_trace() {
    let mut etapes = Vec::new();
    let v = evaluate_postfix_trace(jetons("1 2 + 4 * 3 +"), &mut etapes);

    assert_eq!(v, Ok(15.0));
    assert_eq!(etapes, vec!["1 + 2 = 3", "3 * 4 = 12", "12 + 3 = 15"]);
}
