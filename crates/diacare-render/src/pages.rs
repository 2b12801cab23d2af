use serde::Serialize;
use tera::Tera;
use uuid::Uuid;

use diacare_core::models::diabetes_type::DiabetesType;
use diacare_core::recommendation::{BloodSugarBand, Recommendation};

use crate::error::RenderError;
use crate::render::{load_templates, render_template};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("register.html", include_str!("../templates/register.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
    ("report.html", include_str!("../templates/report.html")),
];

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct DashboardView {
    user_id: Option<Uuid>,
}

#[derive(Serialize)]
struct ReportView<'a> {
    report: ReportBody<'a>,
}

#[derive(Serialize)]
struct ReportBody<'a> {
    diabetes_type: &'a str,
    blood_sugar: String,
    band: Option<BloodSugarBand>,
    medications: &'a [String],
    recommendation: &'a str,
}

/// Every page the app serves, parsed once at startup.
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn load() -> Result<Self, RenderError> {
        let tera = load_templates(TEMPLATES)?;
        tracing::debug!(count = TEMPLATES.len(), "page templates loaded");
        Ok(Self { tera })
    }

    pub fn register(&self) -> Result<String, RenderError> {
        render_template(&self.tera, "register.html", &Empty {})
    }

    pub fn login(&self) -> Result<String, RenderError> {
        render_template(&self.tera, "login.html", &Empty {})
    }

    /// Health-data form. The person id, when known, is carried into the
    /// form action so the submission can be attributed.
    pub fn dashboard(&self, user_id: Option<Uuid>) -> Result<String, RenderError> {
        render_template(&self.tera, "dashboard.html", &DashboardView { user_id })
    }

    pub fn report(&self, recommendation: &Recommendation) -> Result<String, RenderError> {
        let band = matches!(recommendation.diabetes_type, DiabetesType::Type2)
            .then(|| BloodSugarBand::classify(recommendation.blood_sugar));

        let view = ReportView {
            report: ReportBody {
                diabetes_type: recommendation.diabetes_type.label(),
                blood_sugar: format_reading(recommendation.blood_sugar),
                band,
                medications: &recommendation.medications,
                recommendation: &recommendation.advisory,
            },
        };
        render_template(&self.tera, "report.html", &view)
    }
}

/// Whole readings print without a trailing `.0`.
pub fn format_reading(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
