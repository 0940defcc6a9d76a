use crate::checks::{CheckInfo, FileCheckContext};
use crate::fetch::Fetcher;
use crate::types::config::Settings;
use crate::types::report::{CheckResult, Status};
use std::thread;

pub const INFO: CheckInfo = CheckInfo::new("llms-txt", "LLMs.txt");

/// Phrases that betray a soft 404 served with a 200 status.
const NOT_FOUND_PHRASES: [&str; 3] = ["404 not found", "page not found", "cannot be found"];

pub fn not_found() -> CheckResult {
    INFO.result(
        Status::Fail,
        0,
        "No llms.txt file found",
        "Add an llms.txt file to define AI usage permissions",
    )
}

/// Plain-text body long enough to hold guidance and not an HTML error page.
pub fn is_llms_content(body: &str) -> bool {
    if body.len() <= 10 || body.contains("<!DOCTYPE") || body.contains("<html") || body.contains("<HTML") {
        return false;
    }
    let lowered = body.to_lowercase();
    !NOT_FOUND_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

fn probe(context: &FileCheckContext, fetcher: &dyn Fetcher, filename: &str) -> bool {
    let url = format!("{}/{}", context.base_url, filename);
    match fetcher.get(&url) {
        Ok(response) => response.is_ok() && is_llms_content(&response.body),
        Err(err) => {
            tracing::debug!(%url, error = %err, "llms.txt variant unreachable");
            false
        }
    }
}

/// Probes every filename variant concurrently; the first qualifying one in declared order wins.
pub fn run(context: &FileCheckContext, fetcher: &dyn Fetcher, settings: &Settings) -> CheckResult {
    let found = thread::scope(|scope| {
        let probes = settings
            .llms_variants
            .iter()
            .map(|filename| {
                let handle = scope.spawn(move || probe(context, fetcher, filename));
                (filename, handle)
            })
            .collect::<Vec<_>>();

        probes
            .into_iter()
            .filter_map(|(filename, handle)| match handle.join() {
                Ok(true) => Some(filename),
                _ => None,
            })
            .next()
    });

    match found {
        Some(filename) => INFO.result(
            Status::Pass,
            100,
            format!("{filename} file found with AI usage guidelines"),
            "Great! You have defined AI usage permissions",
        ),
        None => not_found(),
    }
}
