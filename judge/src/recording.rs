use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes the requests and responses of each game to
/// `game_000001.json`, `game_000002.json`, ... in a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    requests: Vec<RequestToPlayer>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            requests: Vec::new(),
        })
    }

    /// `request` and `response` must each be a single JSON value.
    pub fn store_request(&mut self, player: &str, request: String, response: String) {
        self.requests.push(RequestToPlayer {
            player: String::from(player),
            request,
            response,
        });
    }

    // The stored request and response are already JSON, so they are written
    // as they are instead of being serialized again as strings.
    pub fn write_game_recording(&mut self) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        write!(writer, "[")?;
        for (idx, req) in std::mem::take(&mut self.requests).into_iter().enumerate() {
            if idx > 0 {
                write!(writer, ",")?;
            }
            write!(
                writer,
                "\n  {{\n    \"player\": {},\n    \"request\": {},\n    \"response\": {}\n  }}",
                serde_json::to_string(&req.player)?,
                req.request,
                req.response
            )?;
        }
        write!(writer, "\n]")?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

/// One entry of a game recording.
pub struct RequestToPlayer {
    pub player: String,
    pub request: String,
    pub response: String,
}
