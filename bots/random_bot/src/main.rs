use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use teeko::{generate_successors, winning_piece, Board, Move, Piece};
use teeko_bot_utils::Bot;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "Starting random bot");
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng, piece: None }.run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(Targets::new().with_default(level))
        .init();
}

/// Plays a uniformly random legal move.
struct RandomBot {
    rng: StdRng,
    piece: Option<Piece>,
}

impl Bot for RandomBot {
    fn new_game(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    fn play_turn(&mut self, board: Board) -> anyhow::Result<Move> {
        let Some(piece) = self.piece else {
            anyhow::bail!("Asked to play a turn before a game was started");
        };
        debug_assert!(winning_piece(&board).is_none());
        let moves = generate_successors(&board, piece);
        let mv = *moves
            .choose(&mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("{} has no legal move", piece))?;
        debug!(?mv, candidates = moves.len(), "Picked move");
        Ok(mv)
    }
}
