use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};

use crate::search::{path::ShortestPathTestCase, PathFinding};

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Average time `pathfinder` needs to answer one of `test_cases`. Returns
/// `Duration::ZERO` for no test cases.
pub fn benchmark(pathfinder: &dyn PathFinding, test_cases: &[ShortestPathTestCase]) -> Duration {
    if test_cases.is_empty() {
        return Duration::ZERO;
    }

    let durations: Vec<_> = test_cases
        .iter()
        .progress_with(get_progressbar_long_jobs(
            "Benchmarking",
            test_cases.len() as u64,
        ))
        .map(|test_case| {
            let start = Instant::now();
            let _distance = pathfinder.shortest_path_distance(&test_case.request);
            start.elapsed()
        })
        .collect();

    durations.iter().sum::<Duration>() / durations.len() as u32
}
