use std::collections::BTreeMap;
use std::sync::LazyLock;

use laudo_core::category::{Category, ScaleId};
use laudo_core::models::ComparisonState;
use laudo_core::option::{CatalogKey, CatalogOption};

use crate::{CategoryInfo, Scale};

/// BI-RADS®: Breast Imaging Reporting and Data System, mammography
/// lexicon. Categories 0–6; the case category is the most severe finding.
pub struct Birads;

/// Category contributed by architectural distortion when present.
pub const DISTORTION_CATEGORY: Category = Category(4);

/// How a nodule's comparison with a prior exam adjusts its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionRule {
    /// Stable for at least the sufficient follow-up and scored at most
    /// `ceiling`: downgraded to `becomes`.
    StableLongTerm { ceiling: u8, becomes: u8 },
    /// The comparison reports `state`: raised to at least `floor`.
    Floor { state: ComparisonState, floor: u8 },
}

/// Evaluated in order; the first matching rule applies.
pub const NODULE_EVOLUTION: &[EvolutionRule] = &[
    EvolutionRule::StableLongTerm {
        ceiling: 3,
        becomes: 2,
    },
    EvolutionRule::Floor {
        state: ComparisonState::Grew,
        floor: 4,
    },
    EvolutionRule::Floor {
        state: ComparisonState::New,
        floor: 4,
    },
];

const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        category: 0,
        risk_label: "inconclusivo, necessita avaliação adicional",
        recommendation: "Recomenda-se avaliação adicional com incidências complementares e/ou ultrassonografia, ou comparação com exames anteriores.",
    },
    CategoryInfo {
        category: 1,
        risk_label: "negativo",
        recommendation: "Recomenda-se controle mamográfico de rotina, de acordo com a faixa etária.",
    },
    CategoryInfo {
        category: 2,
        risk_label: "achado benigno",
        recommendation: "Recomenda-se controle mamográfico de rotina, de acordo com a faixa etária.",
    },
    CategoryInfo {
        category: 3,
        risk_label: "achado provavelmente benigno",
        recommendation: "Recomenda-se controle mamográfico em curto intervalo (6 meses).",
    },
    CategoryInfo {
        category: 4,
        risk_label: "achado suspeito",
        recommendation: "Recomenda-se prosseguimento da investigação com estudo histopatológico.",
    },
    CategoryInfo {
        category: 5,
        risk_label: "achado altamente sugestivo de malignidade",
        recommendation: "Recomenda-se estudo histopatológico e conduta apropriada.",
    },
    CategoryInfo {
        category: 6,
        risk_label: "malignidade comprovada por biópsia",
        recommendation: "Recomenda-se conduta terapêutica apropriada, quando clinicamente indicada.",
    },
];

const KEYS: &[CatalogKey] = &[
    CatalogKey::Indication,
    CatalogKey::Laterality,
    CatalogKey::BreastLocation,
    CatalogKey::Comparison,
    CatalogKey::Density,
    CatalogKey::NoduleShape,
    CatalogKey::Margins,
    CatalogKey::NoduleDensity,
    CatalogKey::CalcificationMorphology,
    CatalogKey::Distribution,
    CatalogKey::Asymmetry,
    CatalogKey::LymphNode,
];

impl Scale for Birads {
    fn id(&self) -> ScaleId {
        ScaleId::Birads
    }

    fn name(&self) -> &str {
        "BI-RADS®"
    }

    fn exam_title(&self) -> &str {
        "Mamografia digital"
    }

    fn records_technique(&self) -> bool {
        false
    }

    fn categories(&self) -> &[CategoryInfo] {
        CATEGORIES
    }

    fn catalog_keys(&self) -> &[CatalogKey] {
        KEYS
    }

    fn fallback_options(&self, key: CatalogKey) -> &[CatalogOption] {
        static OPTIONS: LazyLock<BTreeMap<CatalogKey, Vec<CatalogOption>>> =
            LazyLock::new(|| {
                let mut options = BTreeMap::new();

                options.insert(
                    CatalogKey::Indication,
                    vec![
                        CatalogOption::new("screening", "Rastreamento", 1),
                        CatalogOption::new("diagnostic", "Avaliação diagnóstica", 1),
                        CatalogOption::new("palpable_lump", "Nódulo palpável", 1)
                            .with_laterality(),
                        CatalogOption::new("nipple_discharge", "Descarga papilar", 1)
                            .with_laterality(),
                        CatalogOption::new("short_interval", "Controle de achado provavelmente benigno", 1)
                            .with_months(),
                        CatalogOption::new("post_treatment", "Controle pós-tratamento", 1)
                            .with_months(),
                    ],
                );

                options.insert(
                    CatalogKey::Laterality,
                    vec![
                        CatalogOption::new("right", "na mama direita", 1),
                        CatalogOption::new("left", "na mama esquerda", 1),
                        CatalogOption::new("bilateral", "em ambas as mamas", 1),
                    ],
                );

                options.insert(
                    CatalogKey::BreastLocation,
                    vec![
                        CatalogOption::new("uoq", "no quadrante superolateral", 1),
                        CatalogOption::new("uiq", "no quadrante superomedial", 1),
                        CatalogOption::new("loq", "no quadrante inferolateral", 1),
                        CatalogOption::new("liq", "no quadrante inferomedial", 1),
                        CatalogOption::new("upper", "na união dos quadrantes superiores", 1),
                        CatalogOption::new("lower", "na união dos quadrantes inferiores", 1),
                        CatalogOption::new("retroareolar", "na região retroareolar", 1),
                        CatalogOption::new("axillary_tail", "no prolongamento axilar", 1),
                    ],
                );

                options.insert(
                    CatalogKey::Comparison,
                    vec![
                        CatalogOption::new("none", "Sem exames anteriores disponíveis para comparação", 1),
                        CatalogOption::new("compared", "Comparado com exame anterior", 1),
                    ],
                );

                options.insert(
                    CatalogKey::Density,
                    vec![
                        CatalogOption::new("a", "predominantemente adiposas", 1).with_weight(1),
                        CatalogOption::new("b", "com densidades fibroglandulares esparsas", 1)
                            .with_weight(2),
                        CatalogOption::new("c", "heterogeneamente densas, o que pode ocultar pequenos nódulos", 1)
                            .with_weight(3),
                        CatalogOption::new("d", "extremamente densas, o que reduz a sensibilidade da mamografia", 1)
                            .with_weight(4),
                    ],
                );

                options.insert(
                    CatalogKey::NoduleShape,
                    vec![
                        CatalogOption::new("oval", "oval", 3).with_weight(1),
                        CatalogOption::new("round", "redonda", 3).with_weight(1),
                        CatalogOption::new("irregular", "irregular", 4).with_weight(3),
                    ],
                );

                options.insert(
                    CatalogKey::Margins,
                    vec![
                        CatalogOption::new("circumscribed", "circunscritas", 3).with_weight(1),
                        CatalogOption::new("obscured", "obscurecidas", 3).with_weight(2),
                        CatalogOption::new("microlobulated", "microlobuladas", 4).with_weight(3),
                        CatalogOption::new("indistinct", "indistintas", 4).with_weight(3),
                        CatalogOption::new("spiculated", "espiculadas", 5).with_weight(5),
                    ],
                );

                options.insert(
                    CatalogKey::NoduleDensity,
                    vec![
                        CatalogOption::new("fat", "com conteúdo adiposo", 2),
                        CatalogOption::new("low", "de baixa densidade", 3),
                        CatalogOption::new("equal", "isodenso", 3),
                        CatalogOption::new("high", "de alta densidade", 4).with_weight(2),
                    ],
                );

                options.insert(
                    CatalogKey::CalcificationMorphology,
                    vec![
                        CatalogOption::new("typically_benign", "tipicamente benignas", 2),
                        CatalogOption::new("vascular", "vasculares", 2),
                        CatalogOption::new("coarse", "grosseiras", 2),
                        CatalogOption::new("amorphous", "amorfas", 4).with_weight(2),
                        CatalogOption::new("coarse_heterogeneous", "grosseiras heterogêneas", 4)
                            .with_weight(2),
                        CatalogOption::new("fine_pleomorphic", "finas pleomórficas", 4)
                            .with_weight(4),
                        CatalogOption::new("fine_linear", "finas lineares ou lineares ramificadas", 5)
                            .with_weight(5),
                    ],
                );

                options.insert(
                    CatalogKey::Distribution,
                    vec![
                        CatalogOption::new("diffuse", "difusa", 2),
                        CatalogOption::new("regional", "regional", 2),
                        CatalogOption::new("grouped", "agrupada", 2),
                        CatalogOption::new("linear", "linear", 4).with_weight(3),
                        CatalogOption::new("segmental", "segmentar", 4).with_weight(3),
                    ],
                );

                options.insert(
                    CatalogKey::Asymmetry,
                    vec![
                        CatalogOption::new("asymmetry", "assimetria", 3).with_laterality(),
                        CatalogOption::new("global", "assimetria global", 2).with_laterality(),
                        CatalogOption::new("focal", "assimetria focal", 3)
                            .with_laterality()
                            .with_weight(1),
                        CatalogOption::new("developing", "assimetria em desenvolvimento", 4)
                            .with_laterality()
                            .with_weight(2),
                    ],
                );

                options.insert(
                    CatalogKey::LymphNode,
                    vec![
                        CatalogOption::new("intramammary", "linfonodo intramamário de aspecto habitual", 2)
                            .with_laterality(),
                        CatalogOption::new("axillary_normal", "linfonodos axilares de aspecto habitual", 1)
                            .with_laterality(),
                        CatalogOption::new("axillary_suspicious", "linfonodomegalia axilar de aspecto suspeito", 4)
                            .with_laterality()
                            .with_weight(2),
                    ],
                );

                options
            });

        OPTIONS.get(&key).map(Vec::as_slice).unwrap_or_default()
    }
}
