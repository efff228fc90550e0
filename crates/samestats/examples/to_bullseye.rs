//! Pull a random blob onto the bullseye and print the statistics at each
//! checkpoint; they agree to two decimals throughout.
//!
//! Usage:
//!   cargo run -p samestats --example to_bullseye -- [dest-name]

use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use samestats::prelude::*;

fn main() {
    let name = std::env::args().nth(1).unwrap_or_else(|| "bullseye".to_string());
    let dest = match lookup_destination(&name) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}; known: {}", DESTINATION_NAMES.join(", "));
            return;
        }
    };
    let mut rng = StdRng::seed_from_u64(2017);
    let source: Vec<Point> = (0..142)
        .map(|_| Vector2::new(rng.gen_range(30.0..75.0), rng.gen_range(25.0..70.0)))
        .collect();
    let cfg = TransformCfg {
        total_iters: 50_000,
        ..TransformCfg::default()
    };
    let mut t = Transformation::with_seed(source, dest, cfg, 1).unwrap();
    let schedule = FrameSchedule::new(cfg.total_iters, 5, RampMode::default()).unwrap();
    let res: Result<(), PerturbError> = run_checkpointed(&mut t, &schedule, |c| {
        let s = c.stats.to_array();
        println!(
            "frame {} iter {:>6} temp {:.3}: {}",
            c.frame,
            c.iter,
            c.temperature,
            DfStats::LABELS
                .iter()
                .zip(s.iter())
                .map(|(l, v)| format!("{l}={v:.4}"))
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(())
    });
    res.unwrap();
    println!("accepted {} / rejected {}", t.accepted(), t.rejected());
}
