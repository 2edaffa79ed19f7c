//! HTML page rendering: the embedded Tera template with autoescaping on.

use serde::Serialize;
use sunrise_core::{embed_url, MorningReport};
use tera::{Context, Tera};

const PAGE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

/// Submitted values echoed back into the form.
#[derive(Debug, Clone, Copy)]
pub struct FormValues<'a> {
    pub feeling: &'a str,
    pub tone: &'a str,
}

/// What the results block shows.
#[derive(Debug, Serialize)]
struct ResultView<'a> {
    motivation: &'a str,
    /// Built from a validated 11-character id, so emitted unescaped.
    embed_url: Option<String>,
    image_url: Option<&'a str>,
    debug: Option<String>,
}

impl<'a> ResultView<'a> {
    fn new(report: &'a MorningReport, debug: bool) -> Self {
        Self {
            motivation: report.motivation.text(),
            embed_url: report.video_id.as_deref().map(embed_url),
            image_url: report.image_url.as_deref(),
            debug: debug.then(|| {
                format!("persona: {} · polarity: {:.3}", report.persona, report.polarity)
            }),
        }
    }
}

/// Full page. With no report only the form is shown (empty unless `values` is set).
pub fn render_page(
    values: Option<FormValues<'_>>,
    report: Option<&MorningReport>,
    debug: bool,
) -> Result<String, tera::Error> {
    let FormValues { feeling, tone } = values.unwrap_or(FormValues { feeling: "", tone: "" });

    let mut ctx = Context::new();
    ctx.insert("feeling", feeling);
    ctx.insert("tone", tone);
    ctx.insert("result", &report.map(|r| ResultView::new(r, debug)));
    Tera::one_off(PAGE, &ctx, true)
}
