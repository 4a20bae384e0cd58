use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};

use crate::graphs::path::{PathFinding, ShortestPathRequest};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {human_pos}/{human_len} {eta_precise} ")
    {
        bar.set_style(style);
    }
    bar
}

/// Average duration of a query over all `requests`. Failed queries count too.
pub fn benchmark(path_finder: &dyn PathFinding, requests: &[ShortestPathRequest]) -> Duration {
    if requests.is_empty() {
        return Duration::ZERO;
    }

    let start = Instant::now();
    for request in requests
        .iter()
        .progress_with(get_progressbar("Benchmarking", requests.len() as u64))
    {
        std::hint::black_box(path_finder.shortest_path(request));
    }
    start.elapsed() / requests.len() as u32
}
