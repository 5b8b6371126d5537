//! File persistence: the whole list is rewritten after every mutation
//! and read once at startup. A crash mid-write can corrupt the file;
//! that risk is inherited and out of scope here.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::codec;
use crate::error::{Error, Result};
use crate::model::TaskList;

const DEFAULT_DIR_NAME: &str = ".taskline";
const DEFAULT_FILE_NAME: &str = "tasks.txt";

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    /// Creates storage under `base_dir`, or `~/.taskline` when none is
    /// given. Ensures the directory exists.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or_else(|| {
                    Error::Storage(io::Error::new(
                        io::ErrorKind::NotFound,
                        "could not determine home directory",
                    ))
                })?
                .join(DEFAULT_DIR_NAME),
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);
        Ok(Storage { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Overwrites the file with one encoded record per task.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        for task in tasks.tasks() {
            writeln!(writer, "{}", codec::encode(task))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Loads the persisted list. A missing file is an empty list; a
    /// malformed record is skipped with a warning rather than aborting
    /// the whole load. An unreadable file propagates as an error.
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            return Ok(TaskList::new());
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let mut tasks = TaskList::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode(&line) {
                Ok(task) => tasks.add(task),
                Err(err) => warn!("skipping malformed record: {err}"),
            }
        }
        Ok(tasks)
    }
}
