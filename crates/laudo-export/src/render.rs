use serde::Serialize;
use tera::{Context, Tera};

use crate::assemble::RenderedSection;
use crate::error::ExportError;

/// The `.html` suffix turns on tera's autoescaping, so free text typed by
/// the user can never inject markup.
pub const REPORT_TEMPLATE_NAME: &str = "report.html";

pub const REPORT_TEMPLATE: &str = "{% if heading %}<h3>{{ heading }}</h3>
{% endif %}{% for section in sections %}<h3>{{ section.title }}</h3>
{% for paragraph in section.paragraphs %}<p>{% for line in paragraph %}{{ line }}{% if not loop.last %}<br>{% endif %}{% endfor %}</p>
{% endfor %}{% endfor %}";

#[derive(Debug, Serialize)]
struct HtmlSection<'a> {
    title: &'a str,
    paragraphs: Vec<Vec<&'a str>>,
}

#[derive(Debug, Serialize)]
struct HtmlReport<'a> {
    heading: Option<&'a str>,
    sections: Vec<HtmlSection<'a>>,
}

/// Render sections as a minimal HTML fragment: the heading and each
/// section title as `<h3>`, one `<p>` per paragraph, `<br>` between lines.
pub fn render_html(
    heading: Option<&str>,
    sections: &[RenderedSection],
) -> Result<String, ExportError> {
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, heading, sections)
}

/// Render a tera template with the heading and sections as its context.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    heading: Option<&str>,
    sections: &[RenderedSection],
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let report = HtmlReport {
        heading,
        sections: sections
            .iter()
            .map(|section| HtmlSection {
                title: section.title,
                paragraphs: section
                    .body
                    .split("\n\n")
                    .map(|paragraph| {
                        paragraph
                            .lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .collect::<Vec<_>>()
                    })
                    .filter(|lines| !lines.is_empty())
                    .collect(),
            })
            .collect(),
    };

    let value = serde_json::to_value(&report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered.trim().to_string())
}
