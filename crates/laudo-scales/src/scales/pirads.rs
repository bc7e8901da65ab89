use std::collections::BTreeMap;
use std::sync::LazyLock;

use laudo_core::category::ScaleId;
use laudo_core::option::{CatalogKey, CatalogOption};

use crate::{CategoryInfo, Scale};

/// PI-RADS®: Prostate Imaging Reporting and Data System.
/// Categories 1–5; the case category is the index lesion's score.
pub struct Pirads;

const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        category: 1,
        risk_label: "muito baixa probabilidade de câncer clinicamente significativo",
        recommendation: "Não há indicação de biópsia com base nos achados de imagem. Seguimento clínico e laboratorial.",
    },
    CategoryInfo {
        category: 2,
        risk_label: "baixa probabilidade de câncer clinicamente significativo",
        recommendation: "Não há indicação de biópsia com base nos achados de imagem. Seguimento clínico e laboratorial.",
    },
    CategoryInfo {
        category: 3,
        risk_label: "probabilidade intermediária de câncer clinicamente significativo",
        recommendation: "Considerar biópsia de acordo com o contexto clínico e a densidade do PSA.",
    },
    CategoryInfo {
        category: 4,
        risk_label: "alta probabilidade de câncer clinicamente significativo",
        recommendation: "Recomenda-se biópsia dirigida da lesão índice.",
    },
    CategoryInfo {
        category: 5,
        risk_label: "muito alta probabilidade de câncer clinicamente significativo",
        recommendation: "Recomenda-se biópsia dirigida da lesão índice e estadiamento conforme indicação clínica.",
    },
];

const KEYS: &[CatalogKey] = &[
    CatalogKey::Indication,
    CatalogKey::Laterality,
    CatalogKey::Comparison,
    CatalogKey::Zone,
    CatalogKey::Sector,
    CatalogKey::SeminalVesicles,
    CatalogKey::LymphNode,
    CatalogKey::Bone,
];

impl Scale for Pirads {
    fn id(&self) -> ScaleId {
        ScaleId::Pirads
    }

    fn name(&self) -> &str {
        "PI-RADS®"
    }

    fn exam_title(&self) -> &str {
        "Ressonância magnética multiparamétrica da próstata"
    }

    fn records_technique(&self) -> bool {
        true
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
                        CatalogOption::new("elevated_psa", "Elevação do PSA", 1),
                        CatalogOption::new("abnormal_dre", "Toque retal alterado", 1)
                            .with_laterality(),
                        CatalogOption::new("prior_negative_biopsy", "Biópsia prévia negativa", 1)
                            .with_months(),
                        CatalogOption::new("active_surveillance", "Vigilância ativa", 1)
                            .with_months(),
                        CatalogOption::new("staging", "Estadiamento de neoplasia", 1),
                        CatalogOption::new("post_treatment", "Suspeita de recidiva pós-tratamento", 1)
                            .with_months(),
                    ],
                );

                options.insert(
                    CatalogKey::Laterality,
                    vec![
                        CatalogOption::new("right", "à direita", 1),
                        CatalogOption::new("left", "à esquerda", 1),
                        CatalogOption::new("bilateral", "bilateralmente", 1),
                        CatalogOption::new("midline", "na linha média", 1),
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
                    CatalogKey::Zone,
                    vec![
                        CatalogOption::new("peripheral", "na zona periférica", 1),
                        CatalogOption::new("transition", "na zona de transição", 1),
                        CatalogOption::new("central", "na zona central", 1),
                        CatalogOption::new("anterior_stroma", "no estroma fibromuscular anterior", 1),
                    ],
                );

                options.insert(
                    CatalogKey::Sector,
                    vec![
                        CatalogOption::new("base", "no terço basal", 1),
                        CatalogOption::new("mid", "no terço médio", 1),
                        CatalogOption::new("apex", "no ápice", 1),
                    ],
                );

                options.insert(
                    CatalogKey::SeminalVesicles,
                    vec![
                        CatalogOption::new("normal", "de aspecto habitual", 1),
                        CatalogOption::new("hemorrhage", "com conteúdo hemorrágico", 1),
                        CatalogOption::new("invasion", "com sinais de invasão neoplásica", 1)
                            .with_weight(3),
                    ],
                );

                options.insert(
                    CatalogKey::LymphNode,
                    vec![
                        CatalogOption::new("absent", "sem linfonodomegalias", 1),
                        CatalogOption::new("suspicious", "linfonodomegalias de aspecto suspeito", 1)
                            .with_weight(3),
                    ],
                );

                options.insert(
                    CatalogKey::Bone,
                    vec![
                        CatalogOption::new("absent", "sem lesões suspeitas", 1),
                        CatalogOption::new("suspicious", "lesões de aspecto suspeito", 1)
                            .with_weight(3),
                    ],
                );

                options
            });

        OPTIONS.get(&key).map(Vec::as_slice).unwrap_or_default()
    }
}
