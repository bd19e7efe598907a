//! Line input for the wizard: a rustyline editor or a fixed script.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::warn;

/// One read from a [`LineSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D or end of input
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> LineInput;
}

/// Interactive terminal input with history
pub struct EditorLineSource {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl EditorLineSource {
    pub fn new() -> rustyline::Result<Self> {
        let mut editor = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("finruimte").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineSource for EditorLineSource {
    fn read_line(&mut self, prompt: &str) -> LineInput {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                LineInput::Line(line)
            }
            Err(ReadlineError::Interrupted) => LineInput::Interrupted,
            Err(ReadlineError::Eof) => LineInput::Eof,
            Err(err) => {
                warn!("Readline error: {:?}", err);
                LineInput::Eof
            }
        }
    }
}

impl Drop for EditorLineSource {
    fn drop(&mut self) {
        // Save history
        if let Some(ref path) = self.history_path {
            let _ = self.editor.save_history(path);
        }
    }
}

/// Pre-recorded input; yields [`LineInput::Eof`] once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> LineInput {
        self.prompts.push(prompt.to_string());
        match self.lines.pop_front() {
            Some(line) => LineInput::Line(line),
            None => LineInput::Eof,
        }
    }
}
