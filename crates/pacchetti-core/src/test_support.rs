use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::{Map, Value, json};

use crate::fetch::PackageFetcher;
use pacchetti_config::JsonConfig;

/// Registry where package `name` lives at `https://example.com/<name>.git`.
pub fn registry(graph: &[(&str, &[&str])]) -> JsonConfig {
    let mut packages = Map::new();
    for (name, deps) in graph {
        packages.insert(
            (*name).to_string(),
            json!({
                "repo": format!("https://example.com/{name}.git"),
                "version": "v1.0.0",
                "dependencies": deps,
            }),
        );
    }
    let roots: Vec<&str> = graph.first().map(|(name, _)| *name).into_iter().collect();
    JsonConfig::from_value(json!({ "dependencies": roots, "packages": Value::Object(packages) }))
}

/// Fetcher that writes a stub checkout and records every call.
#[derive(Default)]
pub struct RecordingFetcher {
    pub calls: Mutex<Vec<(String, String, PathBuf)>>,
    pub failing_repos: HashSet<String>,
    pub delay: Duration,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl RecordingFetcher {
    pub fn failing(repo: &str) -> Self {
        Self {
            failing_repos: HashSet::from([repo.to_string()]),
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }

    pub fn fetched_repos(&self) -> Vec<String> {
        let mut repos: Vec<String> = self
            .calls
            .lock()
            .map(|calls| calls.iter().map(|(repo, _, _)| repo.clone()).collect())
            .unwrap_or_default();
        repos.sort();
        repos
    }
}

impl PackageFetcher for RecordingFetcher {
    fn fetch(&self, repo: &str, version: &str, dest: &Path) -> anyhow::Result<()> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Ok(mut calls) = self.calls.lock() {
            calls.push((repo.to_string(), version.to_string(), dest.to_path_buf()));
        }
        std::thread::sleep(self.delay);

        let result = if self.failing_repos.contains(repo) {
            Err(anyhow::anyhow!("remote ref {version} not found"))
        } else {
            fs::create_dir_all(dest.join("src"))
                .map_err(anyhow::Error::from)
                .and_then(|()| {
                    fs::write(dest.join("src").join("Main.purs"), "module Main where\n")
                        .map_err(anyhow::Error::from)
                })
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
