//! PDF strategy: print rendered HTML with a fresh headless Chromium.
//!
//! Every [`PdfBuffer::convert`] call launches its own browser and drops it
//! afterwards; nothing is pooled. The page is printed as soon as its DOM has
//! been parsed, without waiting for images or external stylesheets.
//!
//! # Page geometry
//!
//! | Setting     | Default                      |
//! |-------------|------------------------------|
//! | paper       | A4, 8.27in × 11.7in          |
//! | margins     | 100px top/bottom, 50px left/right (96px per inch) |
//! | backgrounds | printed                      |

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};

use crate::buffer::BufferGenerator;
use crate::error::{browser_err, ExportError};

/// CSS pixels per inch, as Chromium uses when printing.
pub const CSS_PX_PER_INCH: f64 = 96.0;

pub const A4_WIDTH_IN: f64 = 8.27;
pub const A4_HEIGHT_IN: f64 = 11.7;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Page margins in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 100.0,
            right: 50.0,
            bottom: 100.0,
            left: 50.0,
        }
    }
}

/// How the headless browser is started.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Chromium/Chrome executable; auto-detected when `None`.
    pub executable: Option<PathBuf>,
    /// Run with Chromium's sandbox (disable inside some containers).
    pub sandbox: bool,
    /// How long the browser may sit idle before it is considered hung.
    pub idle_timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            executable: None,
            sandbox: true,
            idle_timeout: Duration::from_secs(30),
        }
    }
}

impl BrowserConfig {
    fn launch_options(&self) -> Result<LaunchOptions<'static>, ExportError> {
        LaunchOptions::default_builder()
            .headless(true)
            .sandbox(self.sandbox)
            .path(self.executable.clone())
            .idle_browser_timeout(self.idle_timeout)
            .build()
            .map_err(|e| ExportError::Launch(e.to_string()))
    }
}

/// Everything [`PdfBuffer`] needs to print a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub paper_width_in: f64,
    pub paper_height_in: f64,
    pub margins: Margins,
    pub print_background: bool,
    pub browser: BrowserConfig,
}

impl Default for PdfOptions {
    fn default() -> Self {
        PdfOptions {
            paper_width_in: A4_WIDTH_IN,
            paper_height_in: A4_HEIGHT_IN,
            margins: Margins::default(),
            print_background: true,
            browser: BrowserConfig::default(),
        }
    }
}

impl PdfOptions {
    /// Chromium print settings; all lengths in inches.
    pub fn print_options(&self) -> PrintToPdfOptions {
        PrintToPdfOptions {
            print_background: Some(self.print_background),
            paper_width: Some(self.paper_width_in),
            paper_height: Some(self.paper_height_in),
            margin_top: Some(px_to_in(self.margins.top)),
            margin_bottom: Some(px_to_in(self.margins.bottom)),
            margin_left: Some(px_to_in(self.margins.left)),
            margin_right: Some(px_to_in(self.margins.right)),
            ..Default::default()
        }
    }
}

fn px_to_in(px: f64) -> f64 {
    px / CSS_PX_PER_INCH
}

// ---------------------------------------------------------------------------
// Page content
// ---------------------------------------------------------------------------

/// Replace the current document with `html`.
fn set_content_script(html: &str) -> Result<String, ExportError> {
    let literal = serde_json::to_string(html)?;
    Ok(format!(
        "document.open(); document.write({literal}); document.close(); true"
    ))
}

/// Resolves once the DOM is parsed; subresources are not awaited.
const DOM_READY_SCRIPT: &str = "new Promise(resolve => { \
    if (document.readyState !== 'loading') { resolve(true); } \
    else { document.addEventListener('DOMContentLoaded', () => resolve(true), { once: true }); } \
})";

// ---------------------------------------------------------------------------
// PdfBuffer
// ---------------------------------------------------------------------------

/// Prints HTML to PDF bytes with headless Chromium.
#[derive(Debug, Clone, Default)]
pub struct PdfBuffer {
    options: PdfOptions,
}

impl PdfBuffer {
    pub fn new(options: PdfOptions) -> Self {
        PdfBuffer { options }
    }

    pub fn options(&self) -> &PdfOptions {
        &self.options
    }
}

#[async_trait]
impl BufferGenerator for PdfBuffer {
    async fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let script = set_content_script(html)?;
        let options = self.options.clone();
        tokio::task::spawn_blocking(move || print_pdf(&script, &options)).await?
    }
}

fn print_pdf(set_content: &str, options: &PdfOptions) -> Result<Vec<u8>, ExportError> {
    let launch = options.browser.launch_options()?;
    tracing::debug!(
        executable = ?options.browser.executable,
        sandbox = options.browser.sandbox,
        "launching headless browser"
    );
    let browser = Browser::new(launch).map_err(|e| ExportError::Launch(format!("{e:#}")))?;

    let tab = browser.new_tab().map_err(browser_err)?;
    tab.navigate_to("about:blank")
        .map_err(browser_err)?
        .wait_until_navigated()
        .map_err(browser_err)?;
    tab.evaluate(set_content, false).map_err(browser_err)?;
    tab.evaluate(DOM_READY_SCRIPT, true).map_err(browser_err)?;

    let pdf = tab
        .print_to_pdf(Some(options.print_options()))
        .map_err(browser_err)?;
    tracing::debug!(bytes = pdf.len(), "printed pdf");
    Ok(pdf)
}
