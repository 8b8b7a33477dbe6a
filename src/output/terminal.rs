//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::analysis::{AnalysisReport, Validation};
use crate::statistics::GroupStatistics;
use crate::types::{Matrix2, Vector2};

/// Format an `AnalysisReport` for human-readable terminal output.
///
/// One box per group with true vs sample parameters, then the overlap
/// calibration and tallies, then the validation checks.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&"STATISTICAL SUMMARY".bold().to_string()));
    output.push_str(&format_box_line(&format!(
        "Population: {} points ({} groups x {})",
        report.dataset.len(),
        report.statistics.len(),
        report.points_per_component
    )));
    output.push_str(&format_box_line(&format!("Seed: {}", report.config.seed)));

    for stat in &report.statistics {
        output.push_str(&format_box_separator());
        output.push_str(&format_group(stat));
    }

    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(&"OVERLAP ANALYSIS".bold().to_string()));

    let overlap = &report.overlap;
    output.push_str(&format_box_line(&format!(
        "Reference point: {}",
        format_vector(&overlap.reference_point)
    )));
    output.push_str(&format_box_line(&format!(
        "Reference min density: {:.6e}",
        overlap.reference_min_density
    )));
    output.push_str(&format_box_line(&format!(
        "Threshold ({:.0}%): {:.6e}",
        overlap.threshold_fraction * 100.0,
        overlap.threshold
    )));
    output.push_str(&format_box_line(&format!(
        "In overlap region: {} / {} ({:.2}%)",
        overlap.overlap_count,
        report.dataset.len(),
        overlap.overlap_percent()
    )));
    for g in &overlap.per_group_overlap {
        output.push_str(&format_box_line(&format!(
            "  {}: {} points ({:.2}%)",
            g.label,
            g.count,
            g.fraction * 100.0
        )));
    }
    if let Some(area) = report.geometry.overlap_hull_area {
        output.push_str(&format_box_line(&format!("Overlap hull area: {:.4}", area)));
    }

    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(&"VALIDATION".bold().to_string()));
    for line in format_validation(report) {
        output.push_str(&format_box_line(&line));
    }
    output.push_str(&format_box_bottom());

    output.push_str(&format!(
        "\n{}\n",
        format!("Completed in {:.3} s", report.elapsed.as_secs_f64())
            .dimmed()
            .italic()
    ));

    output
}

fn format_group(stat: &GroupStatistics) -> String {
    let mut out = String::new();
    out.push_str(&format_box_line(&format!(
        "{} ({} points)",
        stat.label.to_string().bold(),
        stat.count
    )));
    out.push_str(&format_box_line(&format!(
        "  Mean    true {}  sample {}",
        format_vector(&stat.true_mean),
        format_vector(&stat.empirical_mean)
    )));
    out.push_str(&format_box_line(&format!(
        "  Std X   true {:.4}  sample {:.4}",
        stat.true_std[0], stat.empirical_std[0]
    )));
    out.push_str(&format_box_line(&format!(
        "  Std Y   true {:.4}  sample {:.4}",
        stat.true_std[1], stat.empirical_std[1]
    )));
    let (row0, row1) = format_matrix(&stat.empirical_covariance);
    out.push_str(&format_box_line(&format!("  Cov     {}", row0)));
    out.push_str(&format_box_line(&format!("          {}", row1)));
    out
}

fn format_validation(report: &AnalysisReport) -> Vec<String> {
    let Validation {
        overlap_in_band,
        equal_group_sizes,
        within_time_budget,
    } = report.validation;
    let (lo, hi) = report.config.target_overlap_band;

    vec![
        check_line(
            within_time_budget,
            &format!(
                "Performance: {:.3}s (budget {:.0}s)",
                report.elapsed.as_secs_f64(),
                report.config.time_budget.as_secs_f64()
            ),
        ),
        check_line(
            overlap_in_band,
            &format!(
                "Overlap range: {:.2}% (target {:.0}-{:.0}%)",
                report.overlap.overlap_percent(),
                lo * 100.0,
                hi * 100.0
            ),
        ),
        check_line(
            equal_group_sizes,
            &format!(
                "Equal distribution: {} points per group",
                report.points_per_component
            ),
        ),
    ]
}

fn check_line(passed: bool, text: &str) -> String {
    if passed {
        format!("{} {}", "[PASS]".green().bold(), text)
    } else {
        format!("{} {}", "[WARN]".yellow().bold(), text)
    }
}

/// `[x, y]` with four decimals.
pub(crate) fn format_vector(v: &Vector2) -> String {
    format!("[{:7.4}, {:7.4}]", v[0], v[1])
}

fn format_matrix(m: &Matrix2) -> (String, String) {
    (
        format!("[{:7.4}, {:7.4}]", m[(0, 0)], m[(0, 1)]),
        format!("[{:7.4}, {:7.4}]", m[(1, 0)], m[(1, 1)]),
    )
}

// Box drawing helpers

const BOX_WIDTH: usize = 64;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = (BOX_WIDTH - 2).saturating_sub(visible_len);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OverlapAnalysis;

    #[test]
    fn test_format_report_sections() {
        let report = OverlapAnalysis::new().population(600).seed(1).run().unwrap();
        let output = strip_ansi_codes(&format_report(&report));

        assert!(output.contains("STATISTICAL SUMMARY"));
        assert!(output.contains("OVERLAP ANALYSIS"));
        assert!(output.contains("Group 1 (200 points)"));
        assert!(output.contains("Group 3 (200 points)"));
        assert!(output.contains("Threshold (20%)"));
        assert!(output.contains("Equal distribution: 200 points per group"));
        assert!(output.contains("[PASS] Equal distribution"));
        assert!(output.contains("Overlap hull area:"));
    }

    #[test]
    fn test_box_lines_have_equal_width() {
        let report = OverlapAnalysis::new().population(300).run().unwrap();
        let output = strip_ansi_codes(&format_report(&report));
        for line in output.lines().filter(|l| l.starts_with('\u{2502}')) {
            assert_eq!(line.chars().count(), BOX_WIDTH + 2, "line {:?}", line);
        }
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector(&Vector2::new(2.0, -1.5)), "[ 2.0000, -1.5000]");
    }
}
