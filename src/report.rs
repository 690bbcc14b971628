//! Plain-text rendering of a comparison report.
//!
//! Used by the command-line mode. Protein strings are wrapped with
//! `textwrap`; the frequency chart is drawn as horizontal stacked bars.

use std::fmt::Write;

use textwrap::Options;

use crate::compare::{FrequencyComparison, PositionalComparison};
use crate::pipeline::{ComparisonReport, ComparisonResult, TranslatedInput};
use crate::ui::chart::stack_heights;
use crate::ui::glyphs::{self, Glyphs};

/// Layout settings for [`render_report`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Maximum line width for wrapped protein sequences
    pub width: usize,
    /// Maximum bar length in the frequency chart
    pub chart_width: usize,
    pub glyphs: Glyphs,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            width: 80,
            chart_width: 40,
            glyphs: glyphs::ascii(),
        }
    }
}

/// Renders the whole report as text.
pub fn render_report(report: &ComparisonReport, options: &ReportOptions) -> String {
    let mut out = String::new();
    render_protein(&mut out, "Protein 1", &report.first, options);
    render_protein(&mut out, "Protein 2", &report.second, options);
    out.push('\n');
    match &report.result {
        ComparisonResult::Frequency(cmp) => render_frequency(&mut out, cmp, options),
        ComparisonResult::Positional(cmp) => render_positional(&mut out, cmp),
    }
    out
}

fn render_protein(out: &mut String, title: &str, input: &TranslatedInput, options: &ReportOptions) {
    let _ = write!(out, "{} ({} bases", title, input.bases);
    if input.dropped > 0 {
        let _ = write!(out, ", {} trailing dropped", input.dropped);
    }
    let _ = writeln!(out, "):");

    let spaced = input
        .protein
        .iter()
        .map(|aa| aa.three_letter())
        .collect::<Vec<_>>()
        .join(" ");
    let wrap_options = Options::new(options.width.max(8))
        .initial_indent("  ")
        .subsequent_indent("  ");
    for line in textwrap::wrap(&spaced, wrap_options) {
        let _ = writeln!(out, "{}", line);
    }
}

fn render_frequency(out: &mut String, cmp: &FrequencyComparison, options: &ReportOptions) {
    let glyphs = options.glyphs;
    let _ = writeln!(
        out,
        "Amino acid composition (first {}, second {})",
        glyphs.bar_first, glyphs.bar_second
    );

    let max = cmp.max_stacked();
    let extent = options.chart_width.min(max);
    for (aa, first, second) in cmp.rows() {
        let (lower, upper) = stack_heights(first, second, max, extent);
        let bar = format!(
            "{}{}",
            glyphs.bar_first.repeat(lower),
            glyphs.bar_second.repeat(upper)
        );
        let pad = extent.saturating_sub(lower + upper);
        let _ = writeln!(
            out,
            "  {:<7} {}{} {:>4} {:>4}",
            aa.three_letter(),
            bar,
            " ".repeat(pad),
            first,
            second
        );
    }

    let (a, b) = cmp.totals();
    let _ = writeln!(out, "  {}", glyphs.h_separator.repeat(8 + extent + 10));
    let _ = writeln!(out, "  {:<7} {} {:>4} {:>4}", "Total", " ".repeat(extent), a, b);
}

fn render_positional(out: &mut String, cmp: &PositionalComparison) {
    let _ = writeln!(out, "Matches:    {}", cmp.matches);
    let _ = writeln!(out, "Mismatches: {} (policy: {})", cmp.mismatches, cmp.policy.label());
    if cmp.unpaired > 0 {
        let _ = writeln!(out, "Unpaired:   {}", cmp.unpaired);
    }
    let _ = writeln!(
        out,
        "Identity:   {:.1}% over {} positions",
        cmp.identity(),
        cmp.compared
    );
}
