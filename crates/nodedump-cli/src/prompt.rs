//! Interactive acquisition of a decode request over line-based I/O.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use log::debug;
use nodedump_core::{Degree, NodeKind, NodeRequest};

pub const KIND_QUESTION: &str = "Leaf? y/n ";
pub const DEGREE_QUESTION: &str = "degree: ";
pub const DATA_QUESTION: &str = "data: ";
pub const KIND_RETRY_MESSAGE: &str = "Answer with Y or N";

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for node kind, degree and data, in that order.
    pub fn read_request(&mut self) -> Result<NodeRequest> {
        let kind = self.ask_kind()?;
        let degree = self.ask_degree()?;
        let data = self.ask(DATA_QUESTION)?;
        Ok(NodeRequest { kind, degree, data })
    }

    /// Re-ask until the answer is one of `y`, `Y`, `n`, `N`.
    pub fn ask_kind(&mut self) -> Result<NodeKind> {
        loop {
            let answer = self.ask(KIND_QUESTION)?;
            if let Some(kind) = NodeKind::from_answer(&answer) {
                return Ok(kind);
            }
            debug!("rejected node kind answer {answer:?}");
            writeln!(self.output, "{KIND_RETRY_MESSAGE}").context("Failed to write prompt")?;
        }
    }

    pub fn ask_degree(&mut self) -> Result<Degree> {
        let answer = self.ask(DEGREE_QUESTION)?;
        answer
            .parse::<Degree>()
            .context("degree must be an integer")
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;
        if read == 0 {
            bail!("standard input closed while waiting for '{}'", question.trim_end());
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
