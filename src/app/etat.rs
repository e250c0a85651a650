//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_rpn::noyau::Demarche;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct DemarcheUi {
    pub jetons: String,
    pub rpn: String,
    pub etapes: String,
}

/// Démarche du noyau mise en forme pour l’affichage (une opération par ligne).
impl From<Demarche> for DemarcheUi {
    fn from(d: Demarche) -> Self {
        Self {
            jetons: d.jetons,
            rpn: d.rpn,
            etapes: d.etapes.join("\n"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,     // dernière valeur affichée
    pub erreur: String,       // message d’erreur (si l’évaluation échoue)
    pub resultat_dispo: bool, // false au démarrage / après CLR

    // --- démarche (panneau d’explication) ---
    pub demarche: DemarcheUi,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            resultat_dispo: false,
            demarche: DemarcheUi::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.demarche = DemarcheUi::default();
        self.focus_entree = true;
    }

    /// Dépose une erreur.
    ///
    /// On CONSERVE le dernier résultat (pas d’écran effacé sur une faute de frappe),
    /// mais la démarche, elle, ne correspond plus à rien : on l’efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = DemarcheUi::default();
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: DemarcheUi) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.resultat_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui l’entourent).
    pub fn backspace_entree(&mut self) {
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.entree.pop();
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.focus_entree = true;
    }
}
