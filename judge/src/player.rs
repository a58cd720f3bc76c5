use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde::{Deserialize, Serialize};
use teeko::Request;
use tracing::{debug, trace};

use crate::recording::Recorder;

/// How to start a bot, loaded from a JSON file like
/// `{"nick": "minimax", "cmd": ["target/release/minimax_bot", "--depth", "2"]}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    /// The executable followed by its arguments.
    pub cmd: Vec<String>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: PlayerConfig = serde_json::from_str(&contents)?;
        if config.cmd.is_empty() {
            anyhow::bail!("Player config '{}' has an empty command", path.display());
        }
        Ok(config)
    }
}

/// Something the judge can send requests to.
pub trait Contestant {
    fn name(&self) -> &str;

    /// Sends a request and waits for the response.
    ///
    /// Errors are communication failures: the contestant could not be
    /// reached, or its response could not be parsed as a `T`.
    fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        recorder: &mut Option<Recorder>,
        req: &Request,
    ) -> anyhow::Result<T>;
}

/// A bot running as a child process, talking JSON lines over stdin/stdout.
pub struct Player {
    pub name: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    // Should always be empty before and after perform_request().
    buf: String,
}

impl Player {
    pub fn new(name: &str, cmd: &[String]) -> anyhow::Result<Self> {
        let Some((executable_path, args)) = cmd.split_first() else {
            anyhow::bail!("No command given for player {}", name);
        };
        let mut child = Command::new(executable_path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            anyhow::bail!("Could not access stdin/stdout of player {}", name);
        };

        Ok(Self {
            name: String::from(name),
            child,
            stdin,
            stdout: BufReader::new(stdout),
            buf: String::new(),
        })
    }

    pub fn from_config(config: &PlayerConfig) -> anyhow::Result<Self> {
        Self::new(&config.nick, &config.cmd)
    }

    /// Tells the bot to shut down and waits for it to exit.
    pub fn bye(mut self) -> anyhow::Result<()> {
        let mut req_json = serde_json::to_string(&Request::Bye)?;
        req_json.push('\n');
        self.stdin.write_all(req_json.as_bytes())?;
        self.stdin.flush()?;
        let status = self.child.wait()?;
        debug!(player = &self.name, %status, "Player exited");
        Ok(())
    }
}

impl Contestant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        recorder: &mut Option<Recorder>,
        req: &Request,
    ) -> anyhow::Result<T> {
        let mut req_json = serde_json::to_string(req)?;
        trace!(name: "Sending request", player = &self.name, request = %req_json);
        req_json.push('\n');
        self.stdin.write_all(req_json.as_bytes())?;
        self.stdin.flush()?;
        self.buf.clear();
        if self.stdout.read_line(&mut self.buf)? == 0 {
            anyhow::bail!("Player {} closed its stdout", self.name);
        }
        let serialized_response = self.buf.trim_end();
        let response = serde_json::from_str::<T>(serialized_response)?;
        trace!(name: "Received response", player = &self.name, response = %serialized_response);

        if let Some(recorder) = recorder {
            req_json.pop();
            recorder.store_request(&self.name, req_json, String::from(serialized_response));
        }
        self.buf.clear();
        Ok(response)
    }
}
