//! Line-oriented driver for [`AssessmentSession`].
//!
//! Each input line becomes at most one event. Rejected events are reported
//! and the prompt is shown again.

use std::io::{BufRead, Write};

use eyre::Result;

use carematch_instruments::scoring::{AnswerOption, ScoreResult};
use carematch_instruments::session::{AssessmentSession, Event, Step};

/// What a line of input asks for in a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    /// Accept the result shown on the results screen.
    Submit,
    Quit,
    Unknown,
}

pub fn parse_input(line: &str, step: Step) -> Input {
    let line = line.trim().to_ascii_lowercase();
    if line == "q" {
        return Input::Quit;
    }

    match step {
        Step::ModeSelection => match line.as_str() {
            "" | "s" => Input::Event(Event::Start),
            "b" => Input::Quit,
            _ => Input::Unknown,
        },
        Step::Testing { .. } => match line.as_str() {
            "" | "n" => Input::Event(Event::Next),
            "p" => Input::Event(Event::Previous),
            "b" => Input::Event(Event::Back),
            other => match other.parse::<u8>() {
                Ok(weight) => Input::Event(Event::Select(weight)),
                Err(_) => Input::Unknown,
            },
        },
        Step::Results => match line.as_str() {
            "s" => Input::Submit,
            "r" => Input::Event(Event::Restart),
            "b" => Input::Event(Event::Back),
            _ => Input::Unknown,
        },
    }
}

/// Drive `session` from `input` until the respondent accepts a result
/// (`Some`) or quits (`None`). End of input counts as quitting.
pub fn run_test<R: BufRead, W: Write>(
    session: &mut AssessmentSession,
    input: &mut R,
    output: &mut W,
) -> Result<Option<ScoreResult>> {
    render(session, output)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let event = match parse_input(&line, session.step()) {
            Input::Quit => return Ok(None),
            Input::Submit => return Ok(Some(session.result()?)),
            Input::Unknown => {
                writeln!(output, "Unrecognised input: {}", line.trim())?;
                render_hint(session.step(), output)?;
                continue;
            }
            Input::Event(event) => event,
        };

        match session.handle(event) {
            Ok(_) => render(session, output)?,
            Err(e) => {
                writeln!(output, "{e}")?;
                render_hint(session.step(), output)?;
            }
        }
    }
}

fn render<W: Write>(session: &AssessmentSession, output: &mut W) -> Result<()> {
    let instrument = session.instrument();
    match session.step() {
        Step::ModeSelection => {
            writeln!(output, "\n{}", instrument.name())?;
            writeln!(output, "{} questions.", instrument.question_count())?;
        }
        Step::Testing { cursor } => {
            let Some(item) = session.current_item() else {
                return Ok(());
            };
            writeln!(
                output,
                "\nQuestion {} of {}: {}",
                cursor + 1,
                instrument.question_count(),
                instrument.prompt()
            )?;
            writeln!(output, "  {}", item.text)?;
            let chosen = session.current_answer();
            for option in AnswerOption::ALL {
                let mark = if chosen == Some(option) { '*' } else { ' ' };
                writeln!(output, " {mark}[{}] {}", option.weight(), option.label())?;
            }
        }
        Step::Results => {
            writeln!(output)?;
            write!(output, "{}", instrument.summary_text(session.answers())?)?;
        }
    }
    render_hint(session.step(), output)
}

fn render_hint<W: Write>(step: Step, output: &mut W) -> Result<()> {
    let hint = match step {
        Step::ModeSelection => "[enter] start  [q] quit",
        Step::Testing { .. } => "[0-3] answer  [enter] next  [p] previous  [b] back  [q] quit",
        Step::Results => "[s] submit  [r] restart  [b] back  [q] quit",
    };
    writeln!(output, "{hint}")?;
    Ok(())
}
