//! Launch angle range figures: `phi0_min` (solid) and `phi0_max` (dashed) against the swept ratio.

use std::fs;
use std::path::Path;

use anyhow::anyhow;
use csv::ReaderBuilder;
use launch_angle_calculator::sweep::Sweep;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

#[derive(Debug, Clone)]
pub struct Row {
    pub swept_value: f64,
    pub phi0_min: f64,
    pub phi0_max: f64,
}

/// Feasible rows of one sweep plus the fixed parameters shown in the caption.
#[derive(Debug, Clone)]
pub struct Table {
    pub axis: String,
    pub fixed_value: f64,
    pub tol_alpha: f64,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn from_sweep(sweep: &Sweep) -> Self {
        Self {
            axis: sweep.axis.label().to_string(),
            fixed_value: sweep.axis.fixed_value(),
            tol_alpha: sweep.tol_alpha,
            rows: sweep
                .feasible_points()
                .map(|p| Row {
                    swept_value: p.swept_value,
                    phi0_min: p.phi0_min,
                    phi0_max: p.phi0_max,
                })
                .collect(),
        }
    }
}

/// Read a sweep CSV, resolving columns by header name and dropping infeasible rows.
pub fn read_table(path: &Path) -> anyhow::Result<Table> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("CSV missing '{}' column", name))
    };
    let axis_idx = column("axis")?;
    let fixed_idx = column("fixed_value")?;
    let swept_idx = column("swept_value")?;
    let tol_idx = column("tol_alpha")?;
    let min_idx = column("phi0_min_rad")?;
    let max_idx = column("phi0_max_rad")?;
    let feasible_idx = column("feasible")?;

    let mut table = Table {
        axis: String::new(),
        fixed_value: f64::NAN,
        tol_alpha: f64::NAN,
        rows: Vec::new(),
    };
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let r = rec?;
        let number = |idx: usize| r.get(idx).unwrap_or("").parse::<f64>().unwrap_or(f64::NAN);
        if table.axis.is_empty() {
            table.axis = r.get(axis_idx).unwrap_or("").to_string();
            table.fixed_value = number(fixed_idx);
            table.tol_alpha = number(tol_idx);
        }
        let feasible = r
            .get(feasible_idx)
            .unwrap_or("false")
            .eq_ignore_ascii_case("true");
        let row = Row {
            swept_value: number(swept_idx),
            phi0_min: number(min_idx),
            phi0_max: number(max_idx),
        };
        if feasible
            && row.swept_value.is_finite()
            && row.phi0_min.is_finite()
            && row.phi0_max.is_finite()
        {
            table.rows.push(row);
        } else {
            skipped += 1;
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} infeasible rows from {}", path.display());
    }
    Ok(table)
}

/// Render `table` to a PNG at `output`, creating parent directories as needed.
pub fn render(
    table: &Table,
    output: &Path,
    size: (u32, u32),
    title: Option<&str>,
) -> anyhow::Result<()> {
    if table.rows.is_empty() {
        return Err(anyhow!("No feasible sweep points to plot"));
    }

    let (x_min, x_max) = span(table.rows.iter().map(|r| r.swept_value));
    let (_, y_top) = span(table.rows.iter().map(|r| r.phi0_max.max(r.phi0_min)));
    let (x_min, x_max) = if (x_max - x_min).abs() < f64::EPSILON {
        (x_min - 0.5, x_max + 0.5)
    } else {
        (x_min, x_max)
    };
    let y_max = (y_top * 1.05).max(0.1);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = output
        .to_str()
        .ok_or_else(|| anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, size).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let (swept_label, caption) = axis_labels(table);
    let caption = title.map(str::to_string).unwrap_or(caption);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, caption_font)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(swept_label)
        .y_desc("φ0 (rad)")
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&|v| format!("{v:.3}"))
        .y_label_formatter(&|v| format!("{v:.2}"))
        .draw()?;

    let solid = BLACK.stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            table.rows.iter().map(|r| (r.swept_value, r.phi0_min)),
            solid,
        ))?
        .label("(φ0) min")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], solid));

    chart
        .draw_series(DashedLineSeries::new(
            table.rows.iter().map(|r| (r.swept_value, r.phi0_max)),
            10,
            6,
            solid,
        ))?
        .label("(φ0) max")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], solid));

    chart
        .configure_series_labels()
        .label_font(label_font.clone())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    log::info!(
        "rendered {} points to {}",
        table.rows.len(),
        output.display()
    );
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn axis_labels(table: &Table) -> (String, String) {
    match table.axis.to_lowercase().as_str() {
        "altitude" => (
            "α".to_string(),
            format!(
                "ve/v0 = {}, tol_α = {}",
                table.fixed_value, table.tol_alpha
            ),
        ),
        "velocity" => (
            "ve/v0".to_string(),
            format!("α = {}, tol_α = {}", table.fixed_value, table.tol_alpha),
        ),
        other => (other.to_string(), "Launch angle range".to_string()),
    }
}
