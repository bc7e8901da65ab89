//! One generator per report section.
//!
//! Every generator is a pure function of the case, its classification and
//! the report context. Unset fields are skipped; whether an absent finding
//! group is stated or left out is decided by [`absence`].

use laudo_core::category::{Category, ScaleId};
use laudo_core::error::CoreError;
use laudo_core::measurements::{self, format_date, format_locale_number};
use laudo_core::models::{
    BreastFindings, Case, ComparisonState, ContrastUptake, Lesion, NoteFlag, Nodule,
    PriorComparison, ProstateFindings,
};
use laudo_core::option::CatalogKey;
use laudo_scales::classify::{
    CategorySource, Classification, Driver, ReportContext, lesion_scores, nodule_category,
};
use laudo_scales::error::ScoringError;
use laudo_scales::scale_for;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Indication,
    Technique,
    Findings,
    Comparison,
    Impression,
    Recommendation,
    Notes,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Indication,
        SectionKind::Technique,
        SectionKind::Findings,
        SectionKind::Comparison,
        SectionKind::Impression,
        SectionKind::Recommendation,
        SectionKind::Notes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Indication => "Indicação",
            SectionKind::Technique => "Técnica",
            SectionKind::Findings => "Achados",
            SectionKind::Comparison => "Comparação",
            SectionKind::Impression => "Impressão diagnóstica",
            SectionKind::Recommendation => "Recomendação",
            SectionKind::Notes => "Observações",
        }
    }

    /// Body text of this section; empty when there is nothing to say.
    pub fn generate(
        self,
        case: &Case,
        classification: &Classification,
        ctx: &ReportContext<'_>,
    ) -> String {
        match self {
            SectionKind::Indication => indication(case, classification, ctx),
            SectionKind::Technique => technique(case, classification, ctx),
            SectionKind::Findings => findings(case, classification, ctx),
            SectionKind::Comparison => comparison(case, classification, ctx),
            SectionKind::Impression => impression(case, classification, ctx),
            SectionKind::Recommendation => recommendation(case, classification, ctx),
            SectionKind::Notes => notes(case, classification, ctx),
        }
    }
}

/// Finding groups with an absence policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingGroup {
    Density,
    Nodules,
    Calcifications,
    Distortion,
    Asymmetry,
    AxillaryLymphNodes,
    Lesions,
    SeminalVesicles,
    PelvicLymphNodes,
    Bone,
}

/// What the findings section says about a group with nothing recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    State(&'static str),
    Omit,
}

pub fn absence(group: FindingGroup) -> Absence {
    match group {
        FindingGroup::Density | FindingGroup::Asymmetry => Absence::Omit,
        FindingGroup::Nodules => Absence::State("Não foram caracterizados nódulos."),
        FindingGroup::Calcifications => Absence::State("Não há calcificações suspeitas."),
        FindingGroup::Distortion => Absence::State("Não há distorção arquitetural."),
        FindingGroup::AxillaryLymphNodes => Absence::State("Não há linfonodomegalias axilares."),
        FindingGroup::Lesions => {
            Absence::State("Não foram identificadas lesões focais suspeitas.")
        }
        FindingGroup::SeminalVesicles => {
            Absence::State("Vesículas seminais sem alterações significativas.")
        }
        FindingGroup::PelvicLymphNodes => Absence::State("Não há linfonodomegalias pélvicas."),
        FindingGroup::Bone => {
            Absence::State("Não há lesões ósseas suspeitas no campo de visão.")
        }
    }
}

fn push_absence(lines: &mut Vec<String>, group: FindingGroup) {
    if let Absence::State(text) = absence(group) {
        lines.push(text.to_string());
    }
}

pub fn indication(case: &Case, _: &Classification, ctx: &ReportContext<'_>) -> String {
    let scale = case.scale();
    let indication = &case.indication;
    let mut lines = Vec::new();

    if let Some(mut clause) = ctx.label(scale, CatalogKey::Indication, indication.kind.as_deref()) {
        if let Some(option) =
            ctx.lookup(scale, CatalogKey::Indication, indication.kind.as_deref())
        {
            if option.uses_laterality
                && let Some(side) =
                    ctx.label(scale, CatalogKey::Laterality, indication.side.as_deref())
            {
                clause.push(' ');
                clause.push_str(&side);
            }
            if option.uses_months
                && let Some(months) = indication.months
            {
                clause.push_str(&format!(" há {}", months_phrase(months)));
            }
        }
        lines.push(sentence(&clause));
    }

    if let Some(reason) = non_empty(indication.reason.as_deref()) {
        lines.push(sentence(&format!("Informação clínica: {reason}")));
    }

    let organ = organ(scale);
    if indication.family_history {
        lines.push(format!("Antecedente familiar de neoplasia {organ}."));
    }
    if indication.personal_history {
        lines.push(format!("Antecedente pessoal de neoplasia {organ}."));
    }

    let surgeries = prior_surgeries(case);
    if !surgeries.is_empty() {
        lines.push(sentence(&format!("Antecedente cirúrgico: {}", surgeries.join(", "))));
    }

    if indication.proven_malignancy {
        lines.push(format!("Neoplasia {organ} comprovada por biópsia."));
    }

    if let Some(psa) = indication.psa.filter(|psa| *psa > 0.0) {
        lines.push(format!("PSA total: {} ng/mL.", format_locale_number(psa, 2)));
    }

    lines.join("\n")
}

fn organ(scale: ScaleId) -> &'static str {
    match scale {
        ScaleId::Birads => "de mama",
        ScaleId::Pirads => "de próstata",
    }
}

fn prior_surgeries(case: &Case) -> Vec<&'static str> {
    let surgery = &case.indication.prior_surgery;
    let mut list = Vec::new();
    match case.scale() {
        ScaleId::Birads => {
            if surgery.right_mastectomy {
                list.push("mastectomia direita");
            }
            if surgery.left_mastectomy {
                list.push("mastectomia esquerda");
            }
            if surgery.right_conservative {
                list.push("cirurgia conservadora na mama direita");
            }
            if surgery.left_conservative {
                list.push("cirurgia conservadora na mama esquerda");
            }
            if surgery.implants {
                list.push("implantes mamários");
            }
        }
        ScaleId::Pirads => {
            if surgery.transurethral_resection {
                list.push("ressecção transuretral da próstata");
            }
        }
    }
    list
}

pub fn technique(case: &Case, _: &Classification, _: &ReportContext<'_>) -> String {
    let Some(prostate) = case.prostate() else {
        return String::new();
    };
    let technique = &prostate.technique;

    let equipment = match technique
        .field_strength
        .as_deref()
        .map(measurements::parse_locale_number)
        .filter(|tesla| *tesla > 0.0)
    {
        Some(tesla) => format!("em equipamento de {} T", format_locale_number(tesla, 1)),
        None => "em equipamento de ressonância magnética".to_string(),
    };
    let coil = if technique.endorectal_coil {
        "bobina de superfície e bobina endorretal"
    } else {
        "bobina de superfície"
    };

    let mut text = format!(
        "Exame realizado {equipment}, com {coil}, incluindo sequências ponderadas em T2 nos planos axial, sagital e coronal e sequências de difusão (DWI) com mapa de ADC"
    );
    if technique.contrast {
        text.push_str(", complementado por estudo dinâmico após a administração endovenosa do meio de contraste paramagnético (DCE).");
    } else {
        text.push_str(". Não foi administrado meio de contraste endovenoso.");
    }
    text
}

pub fn findings(case: &Case, _: &Classification, ctx: &ReportContext<'_>) -> String {
    let lines = match (case.breast(), case.prostate()) {
        (Some(breast), _) => breast_findings(breast, ctx),
        (_, Some(prostate)) => prostate_findings(case, prostate, ctx),
        (None, None) => Vec::new(),
    };
    lines.join("\n")
}

fn breast_findings(findings: &BreastFindings, ctx: &ReportContext<'_>) -> Vec<String> {
    let scale = ScaleId::Birads;
    let mut lines = Vec::new();

    if findings.technically_inadequate {
        lines.push("Exame tecnicamente insatisfatório, o que limita a avaliação.".to_string());
    }

    match ctx.label(scale, CatalogKey::Density, findings.density.as_deref()) {
        Some(density) => lines.push(sentence(&format!("Mamas {density}"))),
        None => push_absence(&mut lines, FindingGroup::Density),
    }

    if findings.nodules.is_empty() {
        push_absence(&mut lines, FindingGroup::Nodules);
    }
    for (index, nodule) in findings.nodules.iter().enumerate() {
        lines.push(nodule_line(index, nodule, ctx));
    }

    let calcifications = &findings.calcifications;
    if calcifications.present {
        let morphology = ctx.label(
            scale,
            CatalogKey::CalcificationMorphology,
            calcifications.morphology.as_deref(),
        );
        let distribution = ctx.label(
            scale,
            CatalogKey::Distribution,
            calcifications.distribution.as_deref(),
        );
        let mut text = match &morphology {
            Some(morphology) => format!("Calcificações {morphology}"),
            None => "Calcificações".to_string(),
        };
        if let Some(distribution) = &distribution {
            text.push_str(&format!(", com distribuição {distribution}"));
        }
        if morphology.is_none() && distribution.is_none() {
            text.push_str(" presentes");
        }
        if let Some(side) = ctx.label(scale, CatalogKey::Laterality, calcifications.side.as_deref())
        {
            text.push_str(&format!(", {side}"));
        }
        lines.push(sentence(&text));
    } else {
        push_absence(&mut lines, FindingGroup::Calcifications);
    }

    let distortion = &findings.distortion;
    if distortion.present {
        let place = place(
            ctx.label(scale, CatalogKey::Laterality, distortion.side.as_deref()),
            ctx.label(scale, CatalogKey::BreastLocation, distortion.location.as_deref()),
        );
        lines.push(sentence(&join_nonempty("Distorção arquitetural", place)));
    } else {
        push_absence(&mut lines, FindingGroup::Distortion);
    }

    let asymmetry = &findings.asymmetry;
    if asymmetry.present {
        let option = ctx.lookup(scale, CatalogKey::Asymmetry, asymmetry.kind.as_deref());
        let kind = ctx
            .label(scale, CatalogKey::Asymmetry, asymmetry.kind.as_deref())
            .unwrap_or_else(|| "assimetria".to_string());
        let with_side = option.as_ref().is_none_or(|option| option.uses_laterality);
        let side = with_side
            .then(|| ctx.label(scale, CatalogKey::Laterality, asymmetry.side.as_deref()))
            .flatten();
        lines.push(sentence(&capitalize(&join_nonempty(&kind, side))));
    } else {
        push_absence(&mut lines, FindingGroup::Asymmetry);
    }

    let lymph_nodes = &findings.lymph_nodes;
    if lymph_nodes.present {
        let option = ctx.lookup(scale, CatalogKey::LymphNode, lymph_nodes.kind.as_deref());
        let kind = ctx
            .label(scale, CatalogKey::LymphNode, lymph_nodes.kind.as_deref())
            .unwrap_or_else(|| "linfonodos axilares".to_string());
        let with_side = option.as_ref().is_none_or(|option| option.uses_laterality);
        let side = with_side
            .then(|| ctx.label(scale, CatalogKey::Laterality, lymph_nodes.side.as_deref()))
            .flatten();
        lines.push(sentence(&capitalize(&join_nonempty(&kind, side))));
    } else {
        push_absence(&mut lines, FindingGroup::AxillaryLymphNodes);
    }

    lines
}

fn nodule_line(index: usize, nodule: &Nodule, ctx: &ReportContext<'_>) -> String {
    let scale = ScaleId::Birads;
    let mut parts = Vec::new();
    if let Some(shape) = ctx.label(scale, CatalogKey::NoduleShape, nodule.shape.as_deref()) {
        parts.push(format!("forma {shape}"));
    }
    if let Some(margins) = ctx.label(scale, CatalogKey::Margins, nodule.margins.as_deref()) {
        parts.push(format!("margens {margins}"));
    }
    if let Some(density) = ctx.label(scale, CatalogKey::NoduleDensity, nodule.density.as_deref())
    {
        parts.push(density);
    }
    if let Some(place) = place(
        ctx.label(scale, CatalogKey::Laterality, nodule.side.as_deref()),
        ctx.label(scale, CatalogKey::BreastLocation, nodule.location.as_deref()),
    ) {
        parts.push(format!("localizado {place}"));
    }
    if let Some(size) = nodule.size.describe() {
        parts.push(format!("medindo {size}"));
    }

    let mut text = format!("Nódulo {}", index + 1);
    if !parts.is_empty() {
        text.push_str(": ");
        text.push_str(&parts.join(", "));
    }
    text.push('.');
    if let Some(category) = nodule_category(nodule, ctx) {
        text.push_str(&format!(
            " Categoria {}.",
            scale_for(scale).category_code(category)
        ));
    }
    text
}

fn prostate_findings(
    case: &Case,
    findings: &ProstateFindings,
    ctx: &ReportContext<'_>,
) -> Vec<String> {
    let scale = ScaleId::Pirads;
    let mut lines = Vec::new();

    if let Some(size) = findings.gland.describe() {
        let volume = findings.gland_volume();
        let mut text = format!("Próstata com dimensões de {size}");
        if volume > 0.0 {
            text.push_str(&format!(
                ", com volume estimado em {} cm³",
                format_locale_number(volume, 1)
            ));
        }
        lines.push(sentence(&text));

        if let Some(psa) = case.indication.psa
            && psa > 0.0
            && volume > 0.0
        {
            lines.push(format!(
                "Densidade do PSA: {} ng/mL/cm³.",
                format_locale_number(measurements::density(psa, volume), 2)
            ));
        }
    }

    if findings.lesions.is_empty() {
        push_absence(&mut lines, FindingGroup::Lesions);
    }
    let scores = lesion_scores(findings, ctx);
    for (index, (lesion, score)) in findings.lesions.iter().zip(scores).enumerate() {
        lines.push(lesion_line(index, lesion, score, ctx));
    }

    match ctx.label(scale, CatalogKey::SeminalVesicles, findings.seminal_vesicles.as_deref()) {
        Some(label) => lines.push(sentence(&format!("Vesículas seminais {label}"))),
        None => push_absence(&mut lines, FindingGroup::SeminalVesicles),
    }
    match ctx.label(scale, CatalogKey::LymphNode, findings.lymph_nodes.as_deref()) {
        Some(label) => lines.push(sentence(&format!("Linfonodos pélvicos: {label}"))),
        None => push_absence(&mut lines, FindingGroup::PelvicLymphNodes),
    }
    match ctx.label(scale, CatalogKey::Bone, findings.bone.as_deref()) {
        Some(label) => lines.push(sentence(&format!("Estruturas ósseas: {label}"))),
        None => push_absence(&mut lines, FindingGroup::Bone),
    }

    lines
}

fn lesion_line(
    index: usize,
    lesion: &Lesion,
    score: Result<Category, ScoringError>,
    ctx: &ReportContext<'_>,
) -> String {
    let scale = ScaleId::Pirads;
    let location: Vec<String> = [
        ctx.label(scale, CatalogKey::Zone, lesion.zone.as_deref()),
        ctx.label(scale, CatalogKey::Sector, lesion.sector.as_deref()),
        ctx.label(scale, CatalogKey::Laterality, lesion.side.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut text = format!("Lesão {}", index + 1);
    if !location.is_empty() {
        text.push(' ');
        text.push_str(&location.join(", "));
    }
    if let Some(size) = lesion.size.describe() {
        text.push_str(&format!(", medindo {size}"));
    }
    text.push('.');

    let mut scores = Vec::new();
    if let Some(t2) = lesion.t2 {
        scores.push(format!("T2 {t2}"));
    }
    if let Some(dwi) = lesion.dwi {
        scores.push(format!("DWI {dwi}"));
    }
    match lesion.dce {
        ContrastUptake::Positive => scores.push("DCE positivo".to_string()),
        ContrastUptake::Negative => scores.push("DCE negativo".to_string()),
        ContrastUptake::NotAssessed => {}
    }
    if !scores.is_empty() {
        text.push_str(&format!(" Escores: {}.", scores.join(", ")));
    }

    match score {
        Ok(category) => text.push_str(&format!(
            " Categoria {}.",
            scale_for(scale).category_code(category)
        )),
        Err(ScoringError::OutOfRangeScore { sequence, value }) => {
            tracing::debug!(lesion = index, %sequence, value, "out of range score in narrative");
            text.push_str(" Escore fora do intervalo válido (1 a 5).");
        }
        Err(_) => {}
    }
    text
}

pub fn comparison(case: &Case, _: &Classification, ctx: &ReportContext<'_>) -> String {
    let scale = case.scale();
    let mut lines = Vec::new();

    let label = ctx.label(scale, CatalogKey::Comparison, case.comparison.kind.as_deref());
    let dated = non_empty(case.comparison.prior_date.as_deref()).and_then(|raw| {
        dated(ctx, raw)
            .inspect_err(|error| tracing::debug!(%error, "omitting comparison date"))
            .ok()
    });
    match (label, dated) {
        (Some(label), Some((date, months))) => lines.push(format!(
            "{label} de {date} (há {}).",
            months_phrase(months)
        )),
        (Some(label), None) => lines.push(sentence(&label)),
        (None, Some((date, months))) => lines.push(format!(
            "Comparado com exame de {date} (há {}).",
            months_phrase(months)
        )),
        (None, None) => {}
    }

    if let Some(breast) = case.breast() {
        for (index, nodule) in breast.nodules.iter().enumerate() {
            lines.extend(entity_comparison("Nódulo", index, &nodule.prior, ctx));
        }
    }
    if let Some(prostate) = case.prostate() {
        for (index, lesion) in prostate.lesions.iter().enumerate() {
            lines.extend(entity_comparison("Lesão", index, &lesion.prior, ctx));
        }
    }

    lines.join("\n")
}

fn dated(ctx: &ReportContext<'_>, raw: &str) -> Result<(String, u32), CoreError> {
    let date = measurements::parse_date(raw)?;
    let months = ctx.follow_up_months(raw)?;
    Ok((format_date(date), months))
}

fn entity_comparison(
    noun: &str,
    index: usize,
    prior: &PriorComparison,
    ctx: &ReportContext<'_>,
) -> Option<String> {
    let state = prior.active_state()?;
    let phrase = match state {
        ComparisonState::Stable => "sem alterações",
        ComparisonState::Grew => "aumento das dimensões",
        ComparisonState::Shrank => "redução das dimensões",
        ComparisonState::New => "achado novo",
    };
    let number = index + 1;

    let Some(raw) = non_empty(prior.prior_date.as_deref()) else {
        return Some(format!("{noun} {number}: {phrase} em relação ao exame anterior."));
    };
    match dated(ctx, raw) {
        Ok((date, months)) => {
            let follow_up = if ctx.is_sufficient(months) {
                "seguimento suficiente"
            } else {
                "seguimento insuficiente"
            };
            Some(format!(
                "{noun} {number}: {phrase} em relação ao exame de {date}, há {} ({follow_up}).",
                months_phrase(months)
            ))
        }
        Err(error) => {
            tracing::debug!(entity = number, %error, "omitting entity comparison");
            None
        }
    }
}

pub fn impression(case: &Case, classification: &Classification, ctx: &ReportContext<'_>) -> String {
    let scale = scale_for(classification.scale);
    let category = classification.category;
    let mut lines = vec![format!(
        "{} categoria {}: {}.",
        scale.name(),
        category,
        scale.risk_label(category)
    )];

    match classification.source {
        CategorySource::Computed => {
            if let Some(driver) = classification.driver
                && let Some(description) = describe_driver(case, driver, ctx)
            {
                let lead = match driver {
                    Driver::Lesion(_) => "Lesão índice",
                    _ => "Achado determinante",
                };
                lines.push(format!("{lead}: {description}."));
            }
        }
        CategorySource::ManualOverride => lines.push(format!(
            "Categoria atribuída manualmente (categoria calculada: {}).",
            classification.computed
        )),
        CategorySource::ProvenMalignancy => {
            lines.push("Neoplasia maligna comprovada por biópsia.".to_string());
        }
        CategorySource::TechnicallyInadequate => {
            lines.push("Exame tecnicamente insatisfatório para conclusão diagnóstica.".to_string());
        }
    }

    lines.join("\n")
}

fn describe_driver(case: &Case, driver: Driver, ctx: &ReportContext<'_>) -> Option<String> {
    let scale = case.scale();
    let side = |value: Option<&str>| ctx.label(scale, CatalogKey::Laterality, value);

    if let Driver::Lesion(index) = driver {
        let lesion = case.prostate()?.lesions.get(index)?;
        let zone = ctx.label(scale, CatalogKey::Zone, lesion.zone.as_deref());
        let place = [zone, side(lesion.side.as_deref())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        return Some(join_nonempty(&format!("lesão {}", index + 1), Some(place)));
    }

    let breast = case.breast()?;
    let text = match driver {
        Driver::Density => format!(
            "mamas {}",
            ctx.label(scale, CatalogKey::Density, breast.density.as_deref())?
        ),
        Driver::Nodule(index) => {
            let nodule = breast.nodules.get(index)?;
            join_nonempty(&format!("nódulo {}", index + 1), side(nodule.side.as_deref()))
        }
        Driver::Calcifications => {
            let calcifications = &breast.calcifications;
            let morphology = ctx.label(
                scale,
                CatalogKey::CalcificationMorphology,
                calcifications.morphology.as_deref(),
            );
            let head = join_nonempty("calcificações", morphology);
            join_nonempty(&head, side(calcifications.side.as_deref()))
        }
        Driver::Distortion => {
            join_nonempty("distorção arquitetural", side(breast.distortion.side.as_deref()))
        }
        Driver::Asymmetry => {
            let kind = ctx
                .label(scale, CatalogKey::Asymmetry, breast.asymmetry.kind.as_deref())
                .unwrap_or_else(|| "assimetria".to_string());
            join_nonempty(&kind, side(breast.asymmetry.side.as_deref()))
        }
        Driver::LymphNodes => {
            let kind = ctx
                .label(scale, CatalogKey::LymphNode, breast.lymph_nodes.kind.as_deref())
                .unwrap_or_else(|| "linfonodos axilares".to_string());
            join_nonempty(&kind, side(breast.lymph_nodes.side.as_deref()))
        }
        Driver::Lesion(_) => return None,
    };
    Some(text)
}

/// The manual recommendation when set, otherwise the table text for the
/// computed category. A manual category never changes the recommendation.
pub fn recommendation(case: &Case, classification: &Classification, _: &ReportContext<'_>) -> String {
    if let Some(text) = case.recommendation_override.effective() {
        return text.to_string();
    }
    scale_for(classification.scale)
        .recommendation(classification.computed)
        .to_string()
}

/// Boilerplate sentences toggled by [`NoteFlag`]; `None` applies to every
/// scale.
const NOTE_CLAUSES: &[(NoteFlag, Option<ScaleId>, &str)] = &[
    (
        NoteFlag::DenseBreastUltrasound,
        Some(ScaleId::Birads),
        "Mamas densas reduzem a sensibilidade da mamografia; a complementação com ultrassonografia pode ser considerada.",
    ),
    (
        NoteFlag::ClinicalCorrelation,
        None,
        "Sugere-se correlação com os dados clínicos.",
    ),
    (
        NoteFlag::RequestPriorExams,
        None,
        "Sugere-se a apresentação de exames anteriores para comparação.",
    ),
    (
        NoteFlag::TargetedBiopsy,
        Some(ScaleId::Pirads),
        "Caso indicada, a biópsia pode ser dirigida por fusão de imagens de ressonância magnética e ultrassonografia.",
    ),
];

pub fn notes(case: &Case, _: &Classification, _: &ReportContext<'_>) -> String {
    let scale = case.scale();
    let mut lines: Vec<String> = NOTE_CLAUSES
        .iter()
        .filter(|(flag, only, _)| {
            case.notes.is_set(*flag) && only.is_none_or(|only| only == scale)
        })
        .map(|(_, _, text)| text.to_string())
        .collect();

    if let Some(text) = non_empty(case.notes.text.as_deref()) {
        lines.push(text.to_string());
    }
    lines.join("\n")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn months_phrase(months: u32) -> String {
    if months == 1 {
        "1 mês".to_string()
    } else {
        format!("{months} meses")
    }
}

fn place(side: Option<String>, location: Option<String>) -> Option<String> {
    match (side, location) {
        (Some(side), Some(location)) => Some(format!("{side}, {location}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

fn join_nonempty(head: &str, tail: Option<String>) -> String {
    match tail.filter(|t| !t.is_empty()) {
        Some(tail) => format!("{head} {tail}"),
        None => head.to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalized and terminated with a period.
fn sentence(text: &str) -> String {
    let mut text = capitalize(text.trim());
    if !text.is_empty() && !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}
