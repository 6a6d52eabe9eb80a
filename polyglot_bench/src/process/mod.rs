//!
//! The external process plumbing.
//!


use std::io::Read;
use std::process::Child;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

/// The interval between child liveness polls while a deadline is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

///
/// The outcome of one captured subprocess run.
///
#[derive(Debug)]
pub struct Captured {
    /// The wall-clock time between spawn and exit.
    pub elapsed: Duration,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
    /// The exit code, with Unix signal deaths mapped to `-N`.
    pub exit_code: i32,
    /// Whether the process was killed after exceeding the deadline.
    pub timed_out: bool,
}

///
/// Runs the command to completion, capturing its output streams.
///
/// The child's standard streams are piped and drained on separate threads, so
/// a chatty child cannot deadlock on a full pipe; the child itself is awaited
/// synchronously on the calling thread. With a deadline given, an overrunning
/// child is killed and reported with `timed_out` set.
///
pub fn run_captured(command: &mut Command, timeout: Option<Duration>) -> anyhow::Result<Captured> {
    let executable = command.get_program().to_string_lossy().into_owned();

    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let start = Instant::now();
    let mut child = command
        .spawn()
        .map_err(|error| anyhow::anyhow!("{executable} subprocess spawning error: {error:?}"))?;

    let stdout = child.stdout.take().map(spawn_reader);
    let stderr = child.stderr.take().map(spawn_reader);

    let (status, timed_out) = wait_with_deadline(&mut child, start, timeout)
        .map_err(|error| anyhow::anyhow!("{executable} subprocess waiting error: {error:?}"))?;
    let elapsed = start.elapsed();

    let stdout = stdout.map(collect_reader).unwrap_or_default();
    let stderr = stderr.map(collect_reader).unwrap_or_default();

    Ok(Captured {
        elapsed,
        stdout,
        stderr,
        exit_code: exit_code(status),
        timed_out,
    })
}

///
/// Runs the command with all standard streams silenced, bounded by a deadline.
///
/// Returns whether the process exited cleanly within the deadline.
///
pub fn run_silenced(command: &mut Command, timeout: Duration) -> anyhow::Result<bool> {
    let executable = command.get_program().to_string_lossy().into_owned();

    command.stdin(Stdio::null());
    command.stdout(Stdio::null());
    command.stderr(Stdio::null());

    let start = Instant::now();
    let mut child = command
        .spawn()
        .map_err(|error| anyhow::anyhow!("{executable} subprocess spawning error: {error:?}"))?;
    let (status, timed_out) = wait_with_deadline(&mut child, start, Some(timeout))
        .map_err(|error| anyhow::anyhow!("{executable} subprocess waiting error: {error:?}"))?;

    Ok(!timed_out && status.success())
}

///
/// Maps an exit status to the reported exit code.
///
/// On Unix, a process killed by signal N terminates without a code and is
/// reported as `-N`.
///
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

///
/// Renders the command line for logging.
///
pub fn format_command(command: &Command) -> String {
    let mut rendered = command.get_program().to_string_lossy().into_owned();
    for argument in command.get_args() {
        rendered.push(' ');
        rendered.push_str(argument.to_string_lossy().as_ref());
    }
    rendered
}

///
/// Waits for the child, killing it once the deadline passes.
///
fn wait_with_deadline(
    child: &mut Child,
    start: Instant,
    timeout: Option<Duration>,
) -> std::io::Result<(ExitStatus, bool)> {
    let Some(limit) = timeout else {
        return child.wait().map(|status| (status, false));
    };
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status, false));
        }
        if start.elapsed() >= limit {
            let _ = child.kill();
            return child.wait().map(|status| (status, true));
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

///
/// Drains one output stream on its own thread.
///
fn spawn_reader<R>(mut stream: R) -> JoinHandle<Vec<u8>>
where
    R: Read + Send + 'static,
{
    std::thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = stream.read_to_end(&mut buffer);
        buffer
    })
}

///
/// Joins a reader thread into lossy UTF-8 text.
///
fn collect_reader(handle: JoinHandle<Vec<u8>>) -> String {
    let buffer = handle.join().unwrap_or_default();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}
