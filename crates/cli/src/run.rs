use anyhow::{Context, Result};
use samestats::dest::{lookup, DESTINATION_NAMES};
use samestats::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::points_io::{read_point_csv, resolve_source, write_point_csv};
use crate::provenance::Provenance;

/// Parameters of one source → target run.
#[derive(Clone, Debug)]
pub struct RunArgs {
    pub source: String,
    pub target: String,
    pub n_iter: usize,
    pub n_frames: usize,
    pub error_precision: u32,
    pub source_home: PathBuf,
    pub output_home: PathBuf,
    pub seed: Option<u64>,
    pub ramp: RampMode,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct StatsRecord {
    pub x_mean: f64,
    pub y_mean: f64,
    pub x_sd: f64,
    pub y_sd: f64,
    pub corr: f64,
}

impl From<DfStats> for StatsRecord {
    fn from(s: DfStats) -> Self {
        Self {
            x_mean: s.x_mean,
            y_mean: s.y_mean,
            x_sd: s.x_sd,
            y_sd: s.y_sd,
            corr: s.corr,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub iterations: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub initial_stats: StatsRecord,
    pub final_stats: StatsRecord,
    pub snapshots: usize,
}

/// Writes `<output>/data/{source}-{target}-data-{frame:05}-iter-{iter:08}.csv`.
pub struct SnapshotSaver {
    data_dir: PathBuf,
    transform_name: String,
    written: Vec<PathBuf>,
}

impl SnapshotSaver {
    pub fn new(output_home: &Path, source_name: &str, target_name: &str) -> Result<Self> {
        let data_dir = output_home.join("data");
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("creating {}", data_dir.display()))?;
        Ok(Self {
            data_dir,
            transform_name: format!("{source_name}-{target_name}"),
            written: Vec::new(),
        })
    }

    pub fn transform_name(&self) -> &str {
        &self.transform_name
    }

    fn file_name(&self, frame: usize, iter: usize) -> String {
        format!("{}-data-{frame:05}-iter-{iter:08}.csv", self.transform_name)
    }

    pub fn save(&mut self, frame: usize, iter: usize, points: &[Point]) -> Result<()> {
        let path = self.data_dir.join(self.file_name(frame, iter));
        write_point_csv(&path, points)?;
        self.written.push(path);
        Ok(())
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Load, transform with checkpoints, write snapshots and provenance.
pub fn do_single_run(args: &RunArgs) -> Result<RunSummary> {
    let source_path = resolve_source(&args.source, &args.source_home)?;
    let source = read_point_csv(&source_path)?;
    let target = lookup(&args.target)
        .with_context(|| format!("known destinations: {}", DESTINATION_NAMES.join(", ")))?;

    let seed = args.seed.unwrap_or_else(default_seed);
    let cfg = TransformCfg {
        total_iters: args.n_iter,
        n_error_trunc: args.error_precision,
        ..TransformCfg::default()
    };
    let schedule = FrameSchedule::new(args.n_iter, args.n_frames, args.ramp)?;
    let mut transform = Transformation::with_seed(source, target, cfg, seed)?;
    let initial_stats = transform.stats();

    let source_name = source_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.source.clone());
    let mut saver = SnapshotSaver::new(&args.output_home, &source_name, &args.target)?;
    tracing::info!(
        source = %source_path.display(),
        target = %args.target,
        points = transform.state().len(),
        n_iter = args.n_iter,
        frames = schedule.len(),
        precision = args.error_precision,
        seed,
        "run"
    );

    run_checkpointed(&mut transform, &schedule, |c| -> Result<()> {
        saver.save(c.frame, c.iter, c.state)?;
        tracing::info!(
            frame = c.frame,
            iter = c.iter,
            temperature = c.temperature,
            accepted = c.accepted,
            rejected = c.rejected,
            x_mean = c.stats.x_mean,
            y_mean = c.stats.y_mean,
            x_sd = c.stats.x_sd,
            y_sd = c.stats.y_sd,
            corr = c.stats.corr,
            "checkpoint"
        );
        Ok(())
    })?;

    let summary = RunSummary {
        seed,
        iterations: transform.cur_iter(),
        accepted: transform.accepted(),
        rejected: transform.rejected(),
        initial_stats: initial_stats.into(),
        final_stats: transform.stats().into(),
        snapshots: saver.written().len(),
    };

    let mut prov = Provenance::new(json!({
        "source": source_path.to_string_lossy(),
        "target": args.target,
        "n_iter": args.n_iter,
        "n_frames": args.n_frames,
        "error_precision": args.error_precision,
        "ramp_in": args.ramp.ramp_in,
        "ramp_out": args.ramp.ramp_out,
        "summary": serde_json::to_value(&summary)?,
    }));
    for p in saver.written() {
        prov.record_output(p.clone());
    }
    let prov_path = prov.write(&args.output_home, saver.transform_name())?;
    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        snapshots = summary.snapshots,
        provenance = %prov_path.display(),
        "done"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn seed_dataset(home: &Path) {
        fs::create_dir_all(home).unwrap();
        let mut body = String::from("x,y\n");
        for i in 0..30 {
            let x = 20.0 + (i * 7 % 60) as f64;
            let y = 25.0 + (i * 13 % 50) as f64;
            body.push_str(&format!("{x},{y}\n"));
        }
        fs::write(home.join("blob.csv"), body).unwrap();
    }

    fn args(home: &Path, out: &Path, target: &str) -> RunArgs {
        RunArgs {
            source: "blob".into(),
            target: target.into(),
            n_iter: 400,
            n_frames: 4,
            error_precision: 2,
            source_home: home.to_path_buf(),
            output_home: out.to_path_buf(),
            seed: Some(5),
            ramp: RampMode::default(),
        }
    }

    #[test]
    fn snapshot_names_are_zero_padded() {
        let dir = tempdir().unwrap();
        let saver = SnapshotSaver::new(dir.path(), "dino", "star").unwrap();
        assert_eq!(
            saver.file_name(3, 1250),
            "dino-star-data-00003-iter-00001250.csv"
        );
    }

    #[test]
    fn full_run_writes_snapshots_and_provenance() {
        let dir = tempdir().unwrap();
        let home = dir.path().join("seed");
        let out = dir.path().join("results");
        seed_dataset(&home);
        let summary = do_single_run(&args(&home, &out, "x")).unwrap();
        assert_eq!(summary.iterations, 400);
        assert_eq!(summary.accepted + summary.rejected, 400);
        assert_eq!(summary.snapshots, 4);
        assert!(out.join("data").join("blob-x-data-00000-iter-00000000.csv").is_file());
        assert!(out.join("data").join("blob-x-data-00003-iter-00000300.csv").is_file());
        assert!(out.join("blob-x.provenance.json").is_file());
        let init = summary.initial_stats;
        let fin = summary.final_stats;
        let round2 = |v: f64| (v * 100.0).round_ties_even();
        assert_eq!(round2(init.x_mean), round2(fin.x_mean));
        assert_eq!(round2(init.corr), round2(fin.corr));
    }

    #[test]
    fn unknown_destination_is_reported() {
        let dir = tempdir().unwrap();
        let home = dir.path().join("seed");
        seed_dataset(&home);
        let err = do_single_run(&args(&home, &dir.path().join("out"), "heart")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("destination not found: heart"), "{msg}");
    }
}
