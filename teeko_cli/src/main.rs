mod notation;
mod session;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use teeko::{DiagonalWeighting, Engine, EngineConfig, Piece};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::session::{play, SessionEnd};

/// Play Teeko against the minimax engine.
///
/// Cells are written as a column letter and a row digit, e.g. B3. In the
/// drop phase, enter the cell to drop a piece on. In the move phase, enter
/// the piece to move followed by the cell to move it to, e.g. B3 C4.
#[derive(Parser)]
struct Args {
    /// The piece the engine plays. Chosen randomly if not given.
    #[arg(long)]
    piece: Option<PieceArg>,

    /// RNG seed for choosing the engine's piece
    #[arg(long)]
    seed: Option<u64>,

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

#[derive(Clone, Copy, ValueEnum)]
enum PieceArg {
    Black,
    Red,
}

impl From<PieceArg> for Piece {
    fn from(piece: PieceArg) -> Piece {
        match piece {
            PieceArg::Black => Piece::Black,
            PieceArg::Red => Piece::Red,
        }
    }
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
    let engine = match args.piece {
        Some(piece) => Engine::new(piece.into(), config),
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(seed);
            Engine::with_random_piece(&mut StdRng::seed_from_u64(seed), config)
        }
    };

    let end = play(&engine, std::io::stdin().lock(), std::io::stdout().lock())?;
    info!(?end, "Session ended");
    if let SessionEnd::Won { winner } = end {
        if winner == engine.piece() {
            println!("Better luck next time.");
        } else {
            println!("Congratulations!");
        }
    }
    Ok(())
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
