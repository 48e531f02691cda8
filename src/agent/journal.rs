//! Append-only text log of accepted decisions.
//!
//! Each record dumps the index maps, both weight tensors, the observed
//! percept, the chosen action, and the path taken. The format is for human
//! inspection, not machine parsing.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::agent::memory::ClipGraph;
use crate::agent::percept::Clip;
use crate::agent::walk::Walk;

/// An append-only diagnostic sink backed by a text file.
#[derive(Debug)]
pub struct DecisionJournal {
    path: PathBuf,
    file: File,
}

impl DecisionJournal {
    /// Opens (or creates) the journal at `path` in append mode.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    /// Appends one decision record.
    pub fn record(
        &mut self,
        graph: &ClipGraph,
        percept: &Clip,
        action: &str,
        walk: &Walk,
    ) -> std::io::Result<()> {
        writeln!(self.file, "--- decision ---")?;
        writeln!(self.file, "percept: {percept}")?;
        writeln!(self.file, "action: {action}")?;
        writeln!(self.file, "path: {:?}", walk.path())?;

        writeln!(self.file, "clips:")?;
        for (index, clip) in graph.clips().iter().enumerate() {
            writeln!(self.file, "  {index}: {clip}")?;
        }
        writeln!(self.file, "actions:")?;
        for (index, label) in graph.actions().iter().enumerate() {
            writeln!(self.file, "  {index}: {label}")?;
        }

        writeln!(self.file, "clip-clip weights:")?;
        for index in 0..graph.clip_count() {
            writeln!(self.file, "  {:?}", graph.clip_row(index))?;
        }
        writeln!(self.file, "clip-action weights:")?;
        for index in 0..graph.clip_count() {
            writeln!(self.file, "  {:?}", graph.action_row(index))?;
        }
        self.file.flush()
    }

    /// Truncates the journal, discarding all previous records.
    pub fn clear(&mut self) -> std::io::Result<()> {
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        Ok(())
    }

    /// The path this journal writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_journal_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("projective_sim_journal_{tag}_{}", std::process::id()))
    }

    #[test]
    fn test_record_appends_text() {
        let path = temp_journal_path("record");
        let mut journal = DecisionJournal::open(&path).unwrap();
        journal.clear().unwrap();

        let mut graph = ClipGraph::new(&["+", "-"]);
        let percept = Clip::symbol("happy");
        graph.ensure_clip(&percept);
        let walk = Walk {
            clips: vec![0],
            action: 1,
        };

        journal.record(&graph, &percept, "-", &walk).unwrap();
        journal.record(&graph, &percept, "-", &walk).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("--- decision ---").count(), 2);
        assert!(text.contains("percept: (happy)"));
        assert!(text.contains("path: [0, 1]"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_clear_truncates() {
        let path = temp_journal_path("clear");
        let mut journal = DecisionJournal::open(&path).unwrap();

        let mut graph = ClipGraph::new(&["+"]);
        let percept = Clip::symbol("sad");
        graph.ensure_clip(&percept);
        let walk = Walk {
            clips: vec![0],
            action: 0,
        };
        journal.record(&graph, &percept, "+", &walk).unwrap();
        journal.clear().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.is_empty());
        std::fs::remove_file(&path).ok();
    }
}
