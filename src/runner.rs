//! Timed execution of external commands
//!
//! The runner is the seam between the sweep drivers and the operating
//! system: production code uses [`ProcessRunner`], tests substitute a stub.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::engine::Invocation;

/// Runs one invocation to completion and reports its wall-clock time.
pub trait Runner {
    /// Timing covers spawn through exit synchronization. Spawn failure and
    /// non-zero exit are absorbed into the sample: a sweep never aborts on
    /// one bad run.
    fn run(&mut self, invocation: &Invocation) -> Duration;
}

/// Real subprocess execution with standard streams discarded.
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Duration {
        let start = Instant::now();

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        if let Ok(mut child) = command.spawn() {
            if let Some(payload) = &invocation.stdin {
                if let Some(mut pipe) = child.stdin.take() {
                    let _ = pipe.write_all(payload.as_bytes());
                    // pipe drops here, closing the child's stdin
                }
            }
            let _ = child.wait();
        }

        start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(program: &str, args: &[&str], stdin: Option<&str>) -> Invocation {
        Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin: stdin.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_missing_program_still_yields_a_timing() {
        let mut runner = ProcessRunner;
        let elapsed = runner.run(&invocation("./no-such-binary-here", &[], None));

        assert!(elapsed.as_secs_f64() >= 0.0);
    }

    #[test]
    fn test_stdin_payload_delivered_and_pipe_closed() {
        // cat exits only once its stdin is closed, so completion proves the
        // payload was written and the pipe dropped.
        let mut runner = ProcessRunner;
        let elapsed = runner.run(&invocation("cat", &[], Some("hello\nworld\n")));

        assert!(elapsed.as_secs_f64() >= 0.0);
    }

    #[test]
    fn test_child_output_is_discarded() {
        let mut runner = ProcessRunner;
        let elapsed = runner.run(&invocation("echo", &["noise"], None));

        assert!(elapsed.as_secs_f64() >= 0.0);
    }
}
