use teeko::{Board, DiagonalWeighting, Engine, EngineConfig, Move, Piece};
use teeko_bot_utils::Bot;

use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Number of plies searched before boards are scored heuristically
    #[arg(long, default_value_t = 1)]
    depth: u32,

    /// Count pieces on diagonal lines twice when scoring boards
    #[arg(long)]
    doubled_diagonals: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

/// Plays the moves chosen by the minimax [`Engine`].
struct MinimaxBot {
    config: EngineConfig,
    engine: Option<Engine>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let config = EngineConfig {
        depth_cutoff: args.depth,
        diagonal_weighting: if args.doubled_diagonals {
            DiagonalWeighting::Doubled
        } else {
            DiagonalWeighting::Single
        },
    };
    info!(?config, "Starting minimax bot");
    MinimaxBot {
        config,
        engine: None,
    }
    .run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

impl Bot for MinimaxBot {
    fn new_game(&mut self, piece: Piece) {
        self.engine = Some(Engine::new(piece, self.config));
    }

    fn play_turn(&mut self, board: Board) -> anyhow::Result<Move> {
        let Some(engine) = &self.engine else {
            anyhow::bail!("Asked to play a turn before a game was started");
        };
        engine
            .decide_move(&board)
            .ok_or_else(|| anyhow::anyhow!("{} has no legal move", engine.piece()))
    }
}
