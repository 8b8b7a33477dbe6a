//! CSV export of classified points and per-group summaries.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::analysis::AnalysisReport;
use crate::dataset::LabeledPointSet;
use crate::error::{Error, Result};
use crate::overlap::OverlapResult;

/// Write one row per point: `index,x,y,label,min_density,overlap`.
///
/// `overlap` must have been computed from `dataset`.
pub fn write_points<W: Write>(
    writer: &mut W,
    dataset: &LabeledPointSet,
    overlap: &OverlapResult,
) -> io::Result<()> {
    writeln!(writer, "index,x,y,label,min_density,overlap")?;

    let rows = dataset
        .iter()
        .zip(overlap.min_densities.iter().zip(&overlap.per_point_overlap));
    for (i, ((p, label), (density, in_overlap))) in rows.enumerate() {
        writeln!(
            writer,
            "{},{:.6},{:.6},{},{:.6e},{}",
            i,
            p[0],
            p[1],
            escape_field(label.as_str()),
            density,
            in_overlap
        )?;
    }
    Ok(())
}

/// Write one row per group with empirical vs true statistics and overlap tallies.
pub fn write_group_summary<W: Write>(writer: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(
        writer,
        "label,count,true_mean_x,true_mean_y,sample_mean_x,sample_mean_y,true_std_x,true_std_y,sample_std_x,sample_std_y,sample_cov_xx,sample_cov_xy,sample_cov_yy,overlap_count,overlap_fraction"
    )?;

    for stat in &report.statistics {
        let (overlap_count, overlap_fraction) = report
            .overlap
            .group(&stat.label)
            .map(|g| (g.count, g.fraction))
            .unwrap_or((0, 0.0));
        writeln!(
            writer,
            "{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{},{:.6}",
            escape_field(stat.label.as_str()),
            stat.count,
            stat.true_mean[0],
            stat.true_mean[1],
            stat.empirical_mean[0],
            stat.empirical_mean[1],
            stat.true_std[0],
            stat.true_std[1],
            stat.empirical_std[0],
            stat.empirical_std[1],
            stat.empirical_covariance[(0, 0)],
            stat.empirical_covariance[(0, 1)],
            stat.empirical_covariance[(1, 1)],
            overlap_count,
            overlap_fraction,
        )?;
    }
    Ok(())
}

/// Write the per-point CSV to `path`.
pub fn write_points_csv(report: &AnalysisReport, path: &Path) -> Result<()> {
    write_file(path, |w| write_points(w, &report.dataset, &report.overlap))
}

/// Write the group summary CSV to `path`.
pub fn write_group_summary_csv(report: &AnalysisReport, path: &Path) -> Result<()> {
    write_file(path, |w| write_group_summary(w, report))
}

/// Quote a field containing a separator, quote or line break, doubling
/// embedded quotes.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let context = || format!("writing {}", path.display());
    let file = File::create(path).map_err(|e| Error::io(context(), e))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer).map_err(|e| Error::io(context(), e))?;
    writer.flush().map_err(|e| Error::io(context(), e))
}
