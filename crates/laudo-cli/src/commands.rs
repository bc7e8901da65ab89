use std::io::Read;
use std::path::Path;

use eyre::{Result, eyre};
use jiff::civil::Date;
use laudo_core::category::ScaleId;
use laudo_core::measurements;
use laudo_core::models::Case;
use laudo_export::assemble::{ReportFormat, assemble_full_report, assemble_summary};
use laudo_scales::catalog::{FallbackCatalog, LayeredCatalog, OptionCatalog};
use laudo_scales::classify::{ReportContext, Settings, classify};
use laudo_scales::scoring::Guideline;

use crate::cli::CaseArgs;
use crate::config::LaudoConfig;

/// Catalog, reference date and settings for one run.
pub struct Session {
    catalog: Box<dyn OptionCatalog>,
    today: Date,
    settings: Settings,
}

impl Session {
    /// Resolve the run's inputs; flags win over the config.
    pub fn open(config: &LaudoConfig, args: &CaseArgs) -> Result<Self> {
        let catalog_path = args.catalog.as_deref().or(config.catalog_path.as_deref());
        Ok(Self {
            catalog: load_catalog(catalog_path)?,
            today: reference_date(args.today.as_deref())?,
            settings: settings(config, args.guideline.as_deref())?,
        })
    }

    pub fn context(&self) -> ReportContext<'_> {
        ReportContext::new(self.catalog.as_ref(), self.today).with_settings(self.settings)
    }
}

pub fn load_catalog(path: Option<&Path>) -> Result<Box<dyn OptionCatalog>> {
    let Some(path) = path else {
        return Ok(Box::new(FallbackCatalog));
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre!("failed to read catalog at {}: {e}", path.display()))?;
    let catalog = LayeredCatalog::from_json(&json)?;
    tracing::info!(path = %path.display(), lists = catalog.live_len(), "loaded live catalog");
    Ok(Box::new(catalog))
}

pub fn settings(config: &LaudoConfig, guideline: Option<&str>) -> Result<Settings> {
    let version = guideline.unwrap_or(&config.pirads_guideline);
    let guideline = Guideline::by_version(version)
        .ok_or_else(|| eyre!("unknown PI-RADS guideline version: {version}"))?;
    Ok(Settings {
        guideline,
        sufficient_follow_up_months: config.sufficient_follow_up_months,
    })
}

pub fn reference_date(flag: Option<&str>) -> Result<Date> {
    match flag {
        Some(text) => Ok(measurements::parse_date(text)?),
        None => Ok(jiff::Zoned::now().date()),
    }
}

/// Read a case from `path`, or from stdin.
pub fn read_case(path: Option<&Path>) -> Result<Case> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| eyre!("failed to read case at {}: {e}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(Case::from_json(&json)?)
}

pub fn classify_case(case: &Case, session: &Session) -> Result<String> {
    let classification = classify(case, &session.context());
    tracing::info!(
        case_id = %case.id,
        scale = %classification.scale,
        category = %classification.category,
        "case classified"
    );
    Ok(serde_json::to_string_pretty(&classification)?)
}

pub fn report_case(
    case: &Case,
    session: &Session,
    summary: bool,
    format: ReportFormat,
) -> Result<String> {
    let ctx = session.context();
    let report = if summary {
        assemble_summary(case, &ctx, format)?
    } else {
        assemble_full_report(case, &ctx, format)?
    };
    Ok(report)
}

pub fn list_options(catalog: &dyn OptionCatalog, scale: &str, key: &str) -> Result<String> {
    let scale: ScaleId = serde_json::from_value(serde_json::Value::String(scale.to_string()))
        .map_err(|_| eyre!("unknown scale: {scale}"))?;
    let options = catalog.get_options(scale, key);
    if options.is_empty() {
        return Err(eyre!("no options for key {key} on {scale}"));
    }
    Ok(serde_json::to_string_pretty(&options)?)
}
