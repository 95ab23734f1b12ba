use std::fmt;
use std::io::{self, Stdout, Write};
use std::time::Instant;

use crate::math::quadrature::monitor::integrationmonitor::{
    IntegrationCommand,
    IntegrationMonitor,
    IterationState
};

/// Prints a progress table, one row every `log_every` iterations.
pub struct LogMonitor<W: Write> {
    writer: W,
    log_every: usize,
    start_time: Instant,
    last_state: Option<IterationState>,
}

impl LogMonitor<Stdout> {
    pub fn stdout(log_every: usize) -> LogMonitor<Stdout> {
        LogMonitor::new(io::stdout(), log_every)
    }
}

impl<W: Write> LogMonitor<W> {
    /// `log_every == 0` is treated as 1.
    pub fn new(writer: W, log_every: usize) -> LogMonitor<W> {
        LogMonitor {
            writer,
            log_every: log_every.max(1),
            start_time: Instant::now(),
            last_state: None,
        }
    }

    pub fn log_every(&self) -> usize {
        self.log_every
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    // Write errors are ignored.
    fn print_header(&mut self, a: f64, b: f64, tolerance: f64) {
        let _ = writeln!(self.writer, "Integrating over [{}, {}] with tolerance {:e}", a, b, tolerance);
        let _ = writeln!(
            self.writer,
            "{:<9} | {:<9} | {:<24} | {:<12} | {:<10} | {:<12} | {:<24}",
            "Elapsed", "Iteration", "Estimate", "Change", "Panels", "Evaluations", "Span"
        );
        let _ = writeln!(self.writer, "{}", "-".repeat(117));
    }

    fn log_line(&mut self, state: &IterationState) {
        let elapsed_field = format!("{:.3}s", self.start_time.elapsed().as_secs_f32());
        let change_field = format!("{:.3e}", state.change());
        let span_field = match state.span() {
            Some((lo, hi)) => format!("[{:.3e}, {:.3e}]", lo, hi),
            None => "-".to_string(),
        };
        let _ = writeln!(
            self.writer,
            "{:<9} | {:<9} | {:<24} | {:<12} | {:<10} | {:<12} | {:<24}",
            elapsed_field,
            state.iteration(),
            state.refined(),
            change_field,
            state.panels(),
            state.evaluations(),
            span_field
        );
    }
}

impl<W: Write> fmt::Display for LogMonitor<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogMonitor(log_every: {})", self.log_every)
    }
}

impl<W: Write> IntegrationMonitor for LogMonitor<W> {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_integration(&mut self, a: f64, b: f64, tolerance: f64) {
        self.start_time = Instant::now();
        self.last_state = None;
        self.print_header(a, b, tolerance);
    }

    fn on_iteration(&mut self, state: &IterationState) {
        if state.iteration() % self.log_every == 0 {
            self.log_line(state);
        }
        self.last_state = Some(state.clone());
    }

    fn on_exit_integration(&mut self) {
        let _ = writeln!(self.writer, "{}", "-".repeat(117));
        match self.last_state.take() {
            Some(state) => {
                let _ = writeln!(
                    self.writer,
                    "Integration finished after {} iterations: {}",
                    state.iteration(),
                    state.refined()
                );
            }
            None => {
                let _ = writeln!(self.writer, "Integration finished without refinement.");
            }
        }
        let _ = self.writer.flush();
    }

    fn integration_command(&self) -> IntegrationCommand {
        IntegrationCommand::Continue
    }
}
