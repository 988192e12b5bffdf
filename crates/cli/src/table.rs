//! Device tables through polars: one row per placed device.
//!
//! Columns: `id`, `label`, `area`, `x`, `y`, `radius`, `power` (null when the
//! job carried no power value). The format follows the output extension.

use anyhow::{bail, Context, Result};
use hexcover::Placement;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => Ok(Self::Parquet),
            _ => bail!(
                "unsupported table extension for {} (expected .csv or .parquet)",
                path.display()
            ),
        }
    }
}

/// Area index of every device, recovered from the per-area device counts.
fn area_of_devices(placement: &Placement) -> Vec<u32> {
    let mut out = Vec::with_capacity(placement.devices.len());
    for (k, area) in placement.areas.iter().enumerate() {
        out.extend(std::iter::repeat(k as u32).take(area.device_count));
    }
    out.resize(placement.devices.len(), placement.areas.len() as u32);
    out
}

pub fn devices_frame(placement: &Placement) -> Result<DataFrame> {
    let devices = &placement.devices;
    let df = df!(
        "id" => devices.iter().map(|d| d.id.0 as u64).collect::<Vec<_>>(),
        "label" => devices.iter().map(|d| d.id.to_string()).collect::<Vec<_>>(),
        "area" => area_of_devices(placement),
        "x" => devices.iter().map(|d| d.pos.x).collect::<Vec<_>>(),
        "y" => devices.iter().map(|d| d.pos.y).collect::<Vec<_>>(),
        "radius" => devices.iter().map(|d| d.radius).collect::<Vec<_>>(),
        "power" => devices.iter().map(|d| d.power).collect::<Vec<Option<f64>>>()
    )?;
    Ok(df)
}

/// Write the device table of `placement` to `out`; returns the row count.
pub fn write_devices(placement: &Placement, out: &Path) -> Result<usize> {
    let format = TableFormat::from_path(out)?;
    let mut df = devices_frame(placement)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating table dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        TableFormat::Csv => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing csv {}", out.display()))?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file)
                .finish(&mut df)
                .with_context(|| format!("writing parquet {}", out.display()))?;
        }
    }
    tracing::info!(rows = df.height(), out = %out.display(), ?format, "device table written");
    Ok(df.height())
}
