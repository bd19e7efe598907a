//! REPL (Read-Eval-Print Loop) for the interactive questionnaire

use super::line_source::{LineInput, LineSource};
use super::questions::{Question, questions_for};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use finruimte_application::{WizardSession, WizardStep};
use finruimte_domain::{ActionKey, OutputFormat};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Back,
    Restart,
    Quit,
}

/// What a read produced once help and unknown commands are handled
enum Input {
    Text(String),
    Nav(Nav),
}

/// Interactive wizard on top of a [`WizardSession`]
pub struct WizardRepl {
    session: WizardSession,
    format: OutputFormat,
}

impl WizardRepl {
    pub fn new(session: WizardSession) -> Self {
        Self {
            session,
            format: OutputFormat::Full,
        }
    }

    /// Set how the result is rendered
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Run until the user quits or input ends
    pub fn run<L: LineSource, W: Write>(&mut self, lines: &mut L, out: &mut W) -> io::Result<()> {
        self.print_welcome(out)?;

        loop {
            let flow = match self.session.step() {
                WizardStep::Start => self.start_step(lines, out)?,
                WizardStep::Scope | WizardStep::Finance | WizardStep::Goal => {
                    self.question_step(lines, out)?
                }
                WizardStep::Review => self.review_step(lines, out)?,
                WizardStep::Result => self.result_step(lines, out)?,
            };

            if flow == Flow::Quit {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
        }
    }

    fn print_welcome<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "╭─────────────────────────────────────────────╮")?;
        writeln!(out, "│       finruimte - financing headroom        │")?;
        writeln!(out, "╰─────────────────────────────────────────────╯")?;
        writeln!(out)?;
        Self::print_help(out)
    }

    fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "Commands:")?;
        writeln!(out, "  /back, /b          - Go to the previous step")?;
        writeln!(out, "  /restart, /r       - Clear all answers and start over")?;
        writeln!(out, "  /help, /h, /?      - Show this help")?;
        writeln!(out, "  /quit, /exit, /q   - Leave the wizard")?;
        writeln!(out)
    }

    fn start_step<L: LineSource, W: Write>(
        &mut self,
        lines: &mut L,
        out: &mut W,
    ) -> io::Result<Flow> {
        writeln!(
            out,
            "Seven short questions give an indicative range of the financing your\n\
             business might obtain. No offer, no advice, no credit check."
        )?;

        match Self::read(lines, out, "Press Enter to begin> ")? {
            Input::Text(_) => {
                self.advance(out)?;
                Ok(Flow::Continue)
            }
            Input::Nav(nav) => self.navigate(nav, out),
        }
    }

    fn question_step<L: LineSource, W: Write>(
        &mut self,
        lines: &mut L,
        out: &mut W,
    ) -> io::Result<Flow> {
        let step = self.session.step();
        self.print_step_header(out)?;

        for question in questions_for(step) {
            if let Some(flow) = self.ask(question, lines, out)? {
                return Ok(flow);
            }
        }

        self.advance(out)?;
        Ok(Flow::Continue)
    }

    /// Ask one question until it holds an answer. `Some` when the user
    /// navigated away instead.
    fn ask<L: LineSource, W: Write>(
        &mut self,
        question: &Question,
        lines: &mut L,
        out: &mut W,
    ) -> io::Result<Option<Flow>> {
        writeln!(out, "\n{}", question.prompt.bold())?;
        for (i, (token, label)) in (question.choices)().iter().enumerate() {
            writeln!(out, "  {}. {} {}", i + 1, label, format!("({})", token).dimmed())?;
        }

        loop {
            let current = question.current(self.session.answers());
            let prompt = match current {
                Some(label) => format!("[{}]> ", label),
                None => "> ".to_string(),
            };

            match Self::read(lines, out, &prompt)? {
                Input::Nav(nav) => return self.navigate(nav, out).map(Some),
                Input::Text(text) if text.is_empty() => {
                    // Enter keeps an earlier answer
                    if current.is_some() {
                        return Ok(None);
                    }
                    writeln!(out, "{}", "Please pick one of the options.".yellow())?;
                }
                Input::Text(text) => match question.answer(self.session.answers_mut(), &text) {
                    Ok(()) => return Ok(None),
                    Err(e) => writeln!(out, "{} {}", "Invalid:".red().bold(), e)?,
                },
            }
        }
    }

    fn review_step<L: LineSource, W: Write>(
        &mut self,
        lines: &mut L,
        out: &mut W,
    ) -> io::Result<Flow> {
        self.print_step_header(out)?;
        write!(out, "{}", ConsoleFormatter::format_review(self.session.answers()))?;
        writeln!(out)?;

        loop {
            match Self::read(lines, out, "Submit these answers? [Y/n] ")? {
                Input::Nav(nav) => return self.navigate(nav, out),
                Input::Text(text) => match text.to_lowercase().as_str() {
                    "" | "y" | "yes" | "j" | "ja" | "submit" => return self.submit(out),
                    "n" | "no" | "nee" => return self.navigate(Nav::Back, out),
                    _ => writeln!(out, "Answer yes to submit or no to go back.")?,
                },
            }
        }
    }

    fn submit<W: Write>(&mut self, out: &mut W) -> io::Result<Flow> {
        let format = self.format;
        match self.session.submit() {
            Ok(estimate) => {
                writeln!(out)?;
                writeln!(out, "{}", ConsoleFormatter.render(estimate, format))?;
            }
            Err(e) => writeln!(out, "{}", e.to_string().red())?,
        }
        Ok(Flow::Continue)
    }

    fn result_step<L: LineSource, W: Write>(
        &mut self,
        lines: &mut L,
        out: &mut W,
    ) -> io::Result<Flow> {
        let Some(estimate) = self.session.estimate() else {
            self.session.restart();
            return Ok(Flow::Continue);
        };
        let actions = estimate.outcome.suggested_next_actions.clone();

        writeln!(out, "{}", "What would you like to do next?".bold())?;
        for (i, action) in actions.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, action.label)?;
        }
        writeln!(
            out,
            "{}",
            "Pick a number, /restart to start over, or press Enter to finish.".dimmed()
        )?;

        loop {
            let text = match Self::read(lines, out, "next> ")? {
                Input::Nav(nav) => return self.navigate(nav, out),
                Input::Text(text) if text.is_empty() => return Ok(Flow::Quit),
                Input::Text(text) => text,
            };

            let key = match text.parse::<usize>() {
                Ok(n) if (1..=actions.len()).contains(&n) => Ok(actions[n - 1].action_key),
                _ => text.parse::<ActionKey>().map_err(|e| e.to_string()),
            };
            let recorded = key.and_then(|key| {
                self.session
                    .record_action(key)
                    .map(|()| key)
                    .map_err(|e| e.to_string())
            });

            match recorded {
                Ok(key) => {
                    if let Some(action) = actions.iter().find(|a| a.action_key == key) {
                        writeln!(
                            out,
                            "{} {}",
                            format!("{}:", action.label).green().bold(),
                            action.note
                        )?;
                    }
                }
                Err(e) => writeln!(out, "{}", e.yellow())?,
            }
        }
    }

    fn advance<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if let Err(e) = self.session.next() {
            writeln!(out, "{}", e.to_string().yellow())?;
        }
        Ok(())
    }

    fn navigate<W: Write>(&mut self, nav: Nav, out: &mut W) -> io::Result<Flow> {
        match nav {
            Nav::Back => {
                if let Err(e) = self.session.back() {
                    writeln!(out, "{}", e.to_string().yellow())?;
                }
            }
            Nav::Restart => {
                self.session.restart();
                writeln!(out, "{}", "All answers cleared.".dimmed())?;
            }
            Nav::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn print_step_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let (position, total) = self.session.progress();
        let title = match self.session.step() {
            WizardStep::Scope => "Your business",
            WizardStep::Finance => "Finances",
            WizardStep::Goal => "Your financing need",
            WizardStep::Review => "Review",
            WizardStep::Start | WizardStep::Result => return Ok(()),
        };
        writeln!(
            out,
            "\n{} {}",
            format!("[{}/{}]", position, total).dimmed(),
            title.cyan().bold()
        )
    }

    /// Read a line, handling `/help` and unknown commands in place.
    fn read<L: LineSource, W: Write>(lines: &mut L, out: &mut W, prompt: &str) -> io::Result<Input> {
        loop {
            let line = match lines.read_line(prompt) {
                LineInput::Line(line) => line,
                LineInput::Interrupted => {
                    writeln!(out, "^C (type /quit to leave)")?;
                    continue;
                }
                LineInput::Eof => return Ok(Input::Nav(Nav::Quit)),
            };

            let line = line.trim();
            let Some(command) = line.strip_prefix('/') else {
                return Ok(Input::Text(line.to_string()));
            };

            match command.trim() {
                "back" | "b" => return Ok(Input::Nav(Nav::Back)),
                "restart" | "r" => return Ok(Input::Nav(Nav::Restart)),
                "quit" | "exit" | "q" => return Ok(Input::Nav(Nav::Quit)),
                "help" | "h" | "?" => Self::print_help(out)?,
                other => {
                    writeln!(out, "Unknown command: /{}", other)?;
                    writeln!(out, "Type /help for available commands")?;
                }
            }
        }
    }
}
