use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::{
    collections::BTreeMap as Map,
    env,
    fs::File,
    path::{Path, PathBuf},
};

const TASK_FILE_NAMES: [&str; 2] = ["dockrun.yml", "dockrun.yaml"];

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TasksFile {
    #[serde(default)]
    pub tasks: Map<String, Task>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Task {
    pub reference: String,

    pub description: Option<String>,
}

impl TasksFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TasksFile> {
        let file = File::open(path.as_ref())?;
        let tasks = serde_yaml::from_reader(file)?;
        Ok(tasks)
    }

    pub fn task(&self, name: &str) -> Result<&Task> {
        self.tasks
            .get(name)
            .ok_or_else(|| anyhow!("unknown task: {:?}", name))
    }
}

pub fn find_tasks_file<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    for path in path.as_ref().ancestors() {
        for file_name in TASK_FILE_NAMES.iter() {
            let tasks_file_path = path.join(file_name);
            if tasks_file_path.exists() {
                return Some(tasks_file_path);
            }
        }
    }

    None
}

/// Uses the explicit path if given, otherwise searches upwards from the
/// current directory.
pub fn locate(file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file);
    }

    let current_dir = env::current_dir()?;
    find_tasks_file(current_dir).ok_or_else(|| {
        anyhow!("Couldn't find a dockrun.yml file in the current working directory or any of its parents.")
    })
}
