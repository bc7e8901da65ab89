//! Report assembly: the ordered list of sections per scale, and the two
//! output formats the host editor accepts.

use laudo_core::category::ScaleId;
use laudo_core::models::Case;
use laudo_scales::classify::{ReportContext, classify};
use laudo_scales::scale_for;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::render::render_html;
use crate::sections::SectionKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    PlainText,
    Html,
}

/// A generated section with a non-empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub title: &'static str,
    pub body: String,
}

pub const SUMMARY_SECTIONS: &[SectionKind] = &[
    SectionKind::Findings,
    SectionKind::Impression,
    SectionKind::Recommendation,
];

/// Full-report order. Technique is only part of scales that record one.
pub fn section_order(scale: ScaleId) -> Vec<SectionKind> {
    let records_technique = scale_for(scale).records_technique();
    SectionKind::ALL
        .into_iter()
        .filter(|kind| *kind != SectionKind::Technique || records_technique)
        .collect()
}

/// Generate `kinds` in order, dropping sections with nothing to say.
pub fn render_sections(
    case: &Case,
    ctx: &ReportContext<'_>,
    kinds: &[SectionKind],
) -> Vec<RenderedSection> {
    let classification = classify(case, ctx);
    kinds
        .iter()
        .filter_map(|kind| {
            let body = sanitize(kind.generate(case, &classification, ctx).trim());
            (!body.is_empty()).then(|| RenderedSection {
                kind: *kind,
                title: kind.title(),
                body,
            })
        })
        .collect()
}

/// Findings, impression and recommendation only.
pub fn assemble_summary(
    case: &Case,
    ctx: &ReportContext<'_>,
    format: ReportFormat,
) -> Result<String, ExportError> {
    assemble(case, ctx, SUMMARY_SECTIONS, None, format)
}

/// Every section of the case's scale, under the exam title.
pub fn assemble_full_report(
    case: &Case,
    ctx: &ReportContext<'_>,
    format: ReportFormat,
) -> Result<String, ExportError> {
    let scale = scale_for(case.scale());
    assemble(
        case,
        ctx,
        &section_order(scale.id()),
        Some(scale.exam_title()),
        format,
    )
}

fn assemble(
    case: &Case,
    ctx: &ReportContext<'_>,
    kinds: &[SectionKind],
    heading: Option<&str>,
    format: ReportFormat,
) -> Result<String, ExportError> {
    let sections = render_sections(case, ctx, kinds);
    tracing::debug!(
        case_id = %case.id,
        scale = %case.scale(),
        sections = sections.len(),
        ?format,
        "assembling report"
    );
    match format {
        ReportFormat::PlainText => Ok(render_plain(heading, &sections)),
        ReportFormat::Html => render_html(heading, &sections),
    }
}

/// Upper-cased heading, then each section as an upper-cased title line
/// and its body. Blocks are separated by a blank line.
pub fn render_plain(heading: Option<&str>, sections: &[RenderedSection]) -> String {
    heading
        .map(str::to_uppercase)
        .into_iter()
        .chain(
            sections
                .iter()
                .map(|section| format!("{}:\n{}", section.title.to_uppercase(), section.body)),
        )
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Drop control characters other than line breaks.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}
