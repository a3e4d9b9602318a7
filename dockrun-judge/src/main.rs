use anyhow::{anyhow, Result};
use log::info;
use std::{
    io::{self, stdout, BufRead, Write},
    path::PathBuf,
    process,
};
use structopt::StructOpt;

use dockrun::{judge, parse, RunCommand};
use tasks::TasksFile;

mod output;
mod tasks;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dockrun-judge",
    about = "Checks docker run commands against a reference command."
)]
enum Opt {
    /// Parses a docker run command and prints the options it sets.
    Show {
        command: String,

        #[structopt(long)]
        /// Print the parsed command as JSON.
        json: bool,
    },
    /// Judges candidate commands against a reference command.
    ///
    /// Without a candidate argument every non-empty line of stdin is judged.
    Check {
        #[structopt(short, long, required_unless = "task", conflicts_with = "task")]
        /// The expected command.
        reference: Option<String>,

        #[structopt(short, long)]
        /// Take the expected command from this task of the task file.
        task: Option<String>,

        #[structopt(short, long, parse(from_os_str))]
        /// Task file to use instead of searching for dockrun.yml.
        file: Option<PathBuf>,

        candidate: Option<String>,
    },
    /// Lists the tasks in the task file and checks that their references parse.
    Tasks {
        #[structopt(short, long, parse(from_os_str))]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init_custom_env("LOG");

    let opt = Opt::from_args();

    let mut stdout = stdout();

    match opt {
        Opt::Show { command, json } => {
            let command = match parse(&command) {
                Ok(command) => command,
                Err(err) => {
                    output::error(&mut stdout, &err)?;
                    process::exit(1);
                }
            };

            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&command)?)?;
            } else {
                output::report(&mut stdout, &command)?;
            }
        }
        Opt::Check {
            reference,
            task,
            file,
            candidate,
        } => {
            let reference = match (reference, task) {
                (Some(reference), _) => reference,
                (None, Some(task)) => {
                    let tasks_file_path = tasks::locate(file)?;
                    info!("found task file {:?}", tasks_file_path);

                    let tasks = TasksFile::load(&tasks_file_path)?;
                    tasks.task(&task)?.reference.clone()
                }
                (None, None) => return Err(anyhow!("either --reference or --task is required")),
            };

            let reference = parse(&reference)
                .map_err(|err| anyhow!("the reference command is invalid: {}", err))?;
            info!("parsed reference {:?}", reference);

            match candidate {
                Some(candidate) => {
                    if !check_line(&mut stdout, &reference, &candidate)? {
                        process::exit(1);
                    }
                }
                None => {
                    let stdin = io::stdin();
                    for line in stdin.lock().lines() {
                        let line = line?;
                        if line.trim().is_empty() {
                            continue;
                        }
                        check_line(&mut stdout, &reference, &line)?;
                    }
                }
            }
        }
        Opt::Tasks { file } => {
            let tasks_file_path = tasks::locate(file)?;
            info!("found task file {:?}", tasks_file_path);

            let tasks = TasksFile::load(&tasks_file_path)?;
            let verdicts = tasks
                .tasks
                .into_iter()
                .map(|(name, task)| {
                    let verdict = parse(&task.reference).map(|_| ());
                    (name, task.description, verdict)
                })
                .collect::<Vec<_>>();

            output::task_lines(&mut stdout, &verdicts)?;

            let invalid = verdicts
                .iter()
                .filter(|(_, _, verdict)| verdict.is_err())
                .count();
            if invalid > 0 {
                return Err(anyhow!("{} task reference(s) failed to parse", invalid));
            }
        }
    }

    Ok(())
}

/// Parses and judges one candidate line, printing the verdict. Returns
/// whether the candidate was accepted.
fn check_line(stdout: &mut impl Write, reference: &RunCommand, line: &str) -> Result<bool> {
    let candidate = match parse(line) {
        Ok(candidate) => candidate,
        Err(err) => {
            output::error(stdout, &err)?;
            return Ok(false);
        }
    };

    match judge(reference, &candidate) {
        None => {
            output::pass(stdout)?;
            Ok(true)
        }
        Some(mismatch) => {
            info!("candidate {:?} differs: {:?}", candidate, mismatch);
            output::fail(stdout, &mismatch)?;
            Ok(false)
        }
    }
}
