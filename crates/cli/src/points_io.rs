use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use samestats::Point;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Read a point CSV.
///
/// Accepts 2 columns, or 3 with a leading row index (dropped). The first row
/// is either data or a header whose labels are exactly `x` and `y` in any
/// order; a `y,x` header swaps the columns.
pub fn read_point_csv(path: &Path) -> Result<Vec<Point>> {
    let df = CsvReadOptions::default()
        .with_has_header(false)
        // every column as text; parsing and header detection happen below
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("opening {}", path.display()))?
        .finish()
        .with_context(|| format!("parsing {}", path.display()))?;

    let (ix, iy) = match df.width() {
        2 => (0, 1),
        3 => (1, 2),
        n => bail!("{}: expected 2 or 3 columns, found {n}", path.display()),
    };
    let col = |i: usize| -> Result<Vec<Option<String>>> {
        let s = df
            .select_at_idx(i)
            .ok_or_else(|| anyhow!("missing column {i}"))?;
        Ok(s.str()?.into_iter().map(|v| v.map(str::to_string)).collect())
    };
    let xs = col(ix)?;
    let ys = col(iy)?;
    parse_rows(&xs, &ys).with_context(|| format!("reading {}", path.display()))
}

fn parse_rows(xs: &[Option<String>], ys: &[Option<String>]) -> Result<Vec<Point>> {
    let Some((first_x, first_y)) = xs.first().zip(ys.first()) else {
        bail!("no rows");
    };
    let cell = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or("").to_string();
    let (fx, fy) = (cell(first_x), cell(first_y));

    let numeric = fx.parse::<f64>().is_ok() && fy.parse::<f64>().is_ok();
    let (skip, swap) = if numeric {
        (0, false)
    } else {
        match (fx.as_str(), fy.as_str()) {
            ("x", "y") => (1, false),
            ("y", "x") => (1, true),
            _ => bail!("first row is neither numeric nor an x,y header: {fx:?}, {fy:?}"),
        }
    };

    let mut out = Vec::with_capacity(xs.len().saturating_sub(skip));
    for (row, (a, b)) in xs.iter().zip(ys.iter()).enumerate().skip(skip) {
        let parse = |v: &Option<String>| -> Result<f64> {
            let s = cell(v);
            let f: f64 = s
                .parse()
                .with_context(|| format!("row {}: not a number: {s:?}", row + 1))?;
            if !f.is_finite() {
                bail!("row {}: non-finite value {s:?}", row + 1);
            }
            Ok(f)
        };
        let (a, b) = (parse(a)?, parse(b)?);
        out.push(if swap { Point::new(b, a) } else { Point::new(a, b) });
    }
    if out.is_empty() {
        bail!("no data rows");
    }
    Ok(out)
}

/// Resolve a dataset name: append `.csv` when the extension differs and
/// resolve relative paths against `source_home`.
pub fn resolve_source(name: &str, source_home: &Path) -> Result<PathBuf> {
    let mut path = PathBuf::from(name);
    if path.extension().map_or(true, |e| e != "csv") {
        let mut file_name = path
            .file_name()
            .map(|s| s.to_os_string())
            .ok_or_else(|| anyhow!("invalid source name {name:?}"))?;
        file_name.push(".csv");
        path.set_file_name(file_name);
    }
    if !path.is_absolute() {
        path = source_home.join(path);
    }
    if !path.is_file() {
        bail!(
            "source dataset not found ({name}, expanded to {})",
            path.display()
        );
    }
    Ok(path)
}

/// Write `x,y` columns with a header row.
pub fn write_point_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
