//! Run storage API.

use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};
use sndr_sim::TimeSeries;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id).join("manifest.json").exists()
    }

    pub fn save_run(&self, manifest: &RunManifest, series: &TimeSeries) -> ResultsResult<PathBuf> {
        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(run_dir.join("manifest.json"), manifest_json)?;

        let mut csv = String::from("step,time_s,sup,cupric,theta,eta\n");
        let dt = manifest.params.dt;
        for i in 0..series.len() {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                i,
                i as f64 * dt,
                series.sup[i],
                series.cupric[i],
                series.theta[i],
                series.eta[i],
            ));
        }
        fs::write(run_dir.join("timeseries.csv"), csv)?;

        Ok(run_dir)
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let manifest_path = self.run_dir(run_id).join("manifest.json");
        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }
        let content = fs::read_to_string(manifest_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn timeseries_path(&self, run_id: &str) -> ResultsResult<PathBuf> {
        let path = self.run_dir(run_id).join("timeseries.csv");
        if !path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }
        Ok(path)
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }
}
