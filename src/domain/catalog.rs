//! The step catalog
//!
//! Every presenter renders the same five steps. The catalog is compiled in and
//! never mutated; presenters only hold indices or ids into it.

use std::fmt;

use color_eyre::eyre::{ensure, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::glyph::Icon;
use super::motion::Motif;

/// Identifier of a step, dense and 1-based in catalog order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct StepId(pub u8);

impl StepId {
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed palette assigned to steps, darkest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorScheme {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
    Quinary,
}

impl ColorScheme {
    /// Start and end color of the header gradient
    pub const fn gradient(self) -> (Color, Color) {
        match self {
            ColorScheme::Primary => (rgb(0x000435), rgb(0x4A1A5C)),
            ColorScheme::Secondary => (rgb(0x4A1A5C), rgb(0x7B2D8E)),
            ColorScheme::Tertiary => (rgb(0x7B2D8E), rgb(0xA640B0)),
            ColorScheme::Quaternary => (rgb(0xA640B0), rgb(0xC966D2)),
            ColorScheme::Quinary => (rgb(0xC966D2), rgb(0xCF9FFF)),
        }
    }

    pub const fn border(self) -> Color {
        self.gradient().0
    }

    /// Foreground used on top of the gradient
    pub const fn text(self) -> Color {
        match self {
            ColorScheme::Quinary => rgb(0x000435),
            _ => Color::White,
        }
    }
}

/// Short titled blurb attached to a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub title: &'static str,
    pub body: &'static str,
    pub background: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub color_scheme: ColorScheme,
    pub icon: Icon,
    pub motif: Motif,
    /// Tint of the skin layer this step acts on, if any
    pub skin_tint: Option<Color>,
    pub details: &'static [DetailCard],
}

impl Step {
    /// First word of the title, used on compact buttons
    pub fn short_title(&self) -> &'static str {
        self.title.split(' ').next().unwrap_or(self.title)
    }
}

/// Ordered, immutable view over a list of steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    steps: &'static [Step],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&STEPS)
    }
}

impl Catalog {
    pub const fn new(steps: &'static [Step]) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&'static Step> {
        self.steps.first()
    }

    pub fn get(&self, id: StepId) -> Option<&'static Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn index_of(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&'static Step> {
        self.steps.get(index)
    }

    pub fn ids(&self) -> impl Iterator<Item = StepId> + 'static {
        self.steps.iter().map(|step| step.id)
    }

    pub fn contains(&self, id: StepId) -> bool {
        self.index_of(id).is_some()
    }

    /// Check the structural invariants every presenter relies on.
    pub fn verify(&self) -> Result<()> {
        ensure!(!self.steps.is_empty(), "catalog has no steps");
        for (index, step) in self.steps.iter().enumerate() {
            let expected = index + 1;
            ensure!(
                usize::from(step.id.get()) == expected,
                "step at position {index} has id {} (expected {expected})",
                step.id
            );
            ensure!(
                !step.title.trim().is_empty(),
                "step {} has an empty title",
                step.id
            );
            ensure!(
                (2..=3).contains(&step.details.len()),
                "step {} has {} detail cards",
                step.id,
                step.details.len()
            );
            for detail in step.details {
                ensure!(
                    !detail.title.trim().is_empty() && !detail.body.trim().is_empty(),
                    "step {} has a detail card with empty text",
                    step.id
                );
            }
        }
        Ok(())
    }
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub static STEPS: [Step; 5] = [
    Step {
        id: StepId(1),
        title: "ACTION MÉCANIQUE",
        subtitle: "Micro-perforations de l'épiderme et du derme",
        description: "La première étape consiste à créer des micro-canaux contrôlés dans la peau à l'aide d'aiguilles fines stérilisées.",
        color_scheme: ColorScheme::Primary,
        icon: Icon::Zap,
        motif: Motif::Needle,
        skin_tint: Some(rgb(0xFCE7F3)),
        details: &[
            DetailCard {
                title: "Le processus",
                body: "Création de micro-canaux dans la peau à l'aide d'aiguilles fines",
                background: rgb(0xBFE4E4),
            },
            DetailCard {
                title: "Profondeur",
                body: "Variable selon la zone traitée (0.5mm à 2.5mm)",
                background: rgb(0xA7C7E7),
            },
        ],
    },
    Step {
        id: StepId(2),
        title: "RÉACTION DE LA PEAU",
        subtitle: "Auto-réparation naturelle",
        description: "La peau déclenche immédiatement son processus naturel de guérison et de régénération.",
        color_scheme: ColorScheme::Secondary,
        icon: Icon::RefreshCw,
        motif: Motif::Collagen,
        skin_tint: Some(rgb(0xDDD6FE)),
        details: &[
            DetailCard {
                title: "Stimulation du collagène et de l'élastine",
                body: "Déclenche la production naturelle de collagène et d'élastine pour réparer les micro-lésions",
                background: rgb(0xF9D2D9),
            },
            DetailCard {
                title: "Activation du renouvellement cellulaire",
                body: "Accélère le processus de régénération de la peau pour une meilleure texture",
                background: rgb(0xFFA4B6),
            },
        ],
    },
    Step {
        id: StepId(3),
        title: "ABSORPTION DES ACTIFS",
        subtitle: "Pénétration optimale du sérum",
        description: "Les micro-canaux créés permettent une absorption exceptionnelle des principes actifs.",
        color_scheme: ColorScheme::Tertiary,
        icon: Icon::Droplets,
        motif: Motif::Serum,
        skin_tint: Some(rgb(0xCCFBF1)),
        details: &[
            DetailCard {
                title: "Pénétration profonde du sérum adapté à la peau",
                body: "Les micro-canaux permettent une absorption jusqu'à 80% plus efficace des principes actifs",
                background: rgb(0xC3B1E1),
            },
            DetailCard {
                title: "Actions ciblées selon le besoin",
                body: "Sérums spécifiques pour l'acné, les tâches, l'hydratation, etc.",
                background: rgb(0xF9D2D9),
            },
        ],
    },
    Step {
        id: StepId(4),
        title: "RÉSULTATS PROGRESSIFS",
        subtitle: "Amélioration visible de la peau",
        description: "Les effets se manifestent progressivement avec une amélioration continue de la qualité de la peau.",
        color_scheme: ColorScheme::Quaternary,
        icon: Icon::Sparkles,
        motif: Motif::Result,
        skin_tint: Some(rgb(0xFEF3C7)),
        details: &[
            DetailCard {
                title: "Teint plus lumineux et homogène",
                body: "Amélioration visible de la texture et de l'éclat de la peau",
                background: rgb(0xBFE4E4),
            },
            DetailCard {
                title: "Diminution des imperfections",
                body: "Réduction de l'acné, des tâches et des pores dilatés",
                background: rgb(0xA7C7E7),
            },
        ],
    },
    Step {
        id: StepId(5),
        title: "LUMINOTHÉRAPIE",
        subtitle: "Option complémentaire en fin de soin",
        description: "La luminothérapie peut être ajoutée pour optimiser les résultats selon les besoins spécifiques.",
        color_scheme: ColorScheme::Quinary,
        icon: Icon::Lightbulb,
        motif: Motif::Light,
        skin_tint: None,
        details: &[
            DetailCard {
                title: "Cicatrices et collagène",
                body: "Lumière rouge (630-660nm) pour stimuler davantage la production de collagène",
                background: rgb(0xC3B1E1),
            },
            DetailCard {
                title: "Acné",
                body: "Lumière bleue (415-430nm) pour ses propriétés antibactériennes",
                background: rgb(0xBFE4E4),
            },
            DetailCard {
                title: "Tâches pigmentaires",
                body: "Lumière jaune (585-595nm) pour réduire l'hyperpigmentation",
                background: rgb(0xFFA4B6),
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static BROKEN_ORDER: [Step; 1] = [Step {
        id: StepId(2),
        title: "ORPHAN",
        subtitle: "",
        description: "",
        color_scheme: ColorScheme::Primary,
        icon: Icon::Zap,
        motif: Motif::Needle,
        skin_tint: None,
        details: &[
            DetailCard {
                title: "a",
                body: "b",
                background: Color::White,
            },
            DetailCard {
                title: "c",
                body: "d",
                background: Color::White,
            },
        ],
    }];

    static SINGLE_DETAIL: [Step; 1] = [Step {
        id: StepId(1),
        title: "LONELY",
        subtitle: "",
        description: "",
        color_scheme: ColorScheme::Primary,
        icon: Icon::Zap,
        motif: Motif::Needle,
        skin_tint: None,
        details: &[DetailCard {
            title: "only",
            body: "one",
            background: Color::White,
        }],
    }];

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.verify().is_ok());
    }

    #[test]
    fn test_ids_are_dense_and_ordered() {
        let ids: Vec<u8> = Catalog::default().ids().map(StepId::get).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_only_light_therapy_has_three_details() {
        for step in Catalog::default().steps() {
            let expected = if step.motif == Motif::Light { 3 } else { 2 };
            assert_eq!(step.details.len(), expected, "step {}", step.id);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get(StepId(3)).map(|s| s.title), Some("ABSORPTION DES ACTIFS"));
        assert_eq!(catalog.index_of(StepId(5)), Some(4));
        assert!(catalog.get(StepId(6)).is_none());
        assert!(!catalog.contains(StepId(0)));
    }

    #[test]
    fn test_short_title() {
        let catalog = Catalog::default();
        let shorts: Vec<&str> = catalog.steps().iter().map(Step::short_title).collect();
        assert_eq!(
            shorts,
            vec!["ACTION", "RÉACTION", "ABSORPTION", "RÉSULTATS", "LUMINOTHÉRAPIE"]
        );
    }

    #[test]
    fn test_verify_rejects_gap_in_ids() {
        let err = Catalog::new(&BROKEN_ORDER).verify().unwrap_err();
        assert!(err.to_string().contains("expected 1"));
    }

    #[test]
    fn test_verify_rejects_single_detail() {
        let err = Catalog::new(&SINGLE_DETAIL).verify().unwrap_err();
        assert!(err.to_string().contains("1 detail cards"));
    }

    #[test]
    fn test_quinary_uses_dark_text() {
        assert_eq!(ColorScheme::Quinary.text(), Color::Rgb(0x00, 0x04, 0x35));
        assert_eq!(ColorScheme::Primary.text(), Color::White);
        assert_eq!(ColorScheme::Tertiary.border(), Color::Rgb(0x7B, 0x2D, 0x8E));
    }
}
