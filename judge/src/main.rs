use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use judge::{play_game, GameResult, Player, PlayerConfig, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// How many games each pair of players plays
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// After this many turns without a winner, a game is a tie
    #[arg(long, default_value_t = 200)]
    max_turns: usize,

    /// Stop a matchup as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Record the game's interactions as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

/// Results of the games between two players, indexed by player.
#[derive(Debug, Default, PartialEq, Eq)]
struct MatchScore {
    wins: [usize; 2],
    illegal_moves: [usize; 2],
    ties: usize,
}

impl MatchScore {
    fn num_games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.ties
    }

    /// Counts an illegal move as a win for the other player.
    fn add(&mut self, result: &GameResult) {
        match *result {
            GameResult::WonByPlayer { player_idx } => self.wins[player_idx] += 1,
            GameResult::Tie => self.ties += 1,
            GameResult::IllegalMoveByPlayer { player_idx, .. } => {
                self.wins[1 - player_idx] += 1;
                self.illegal_moves[player_idx] += 1;
            }
        }
    }

    fn percentages(&self) -> [f32; 3] {
        let num_games = self.num_games().max(1) as f32;
        [
            self.wins[0] as f32 / num_games * 100.0,
            self.wins[1] as f32 / num_games * 100.0,
            self.ties as f32 / num_games * 100.0,
        ]
    }

    fn summary(&self, names: [&str; 2]) -> String {
        let mut summary = String::from("End result:");
        for idx in 0..2 {
            summary += &format!("\n- {} wins by {}", self.wins[idx], names[idx]);
            let illegal = self.illegal_moves[1 - idx];
            if illegal > 0 {
                summary += &format!(" ({} through illegal moves by {})", illegal, names[1 - idx]);
            }
        }
        summary += &format!("\n- {} ties", self.ties);
        summary
    }
}

fn play_matchup(
    player_1: &mut Player,
    player_2: &mut Player,
    args: &Args,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let mut match_score = MatchScore::default();

    for game_idx in 0..args.num_games {
        let result = play_game(rng, player_1, player_2, args.max_turns, recorder)?;
        match &result {
            GameResult::WonByPlayer { player_idx } => {
                let winner = [&player_1.name, &player_2.name][*player_idx];
                debug!(%winner, game_idx, "Game won");
            }
            GameResult::Tie => debug!(game_idx, "Tie"),
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                let player = [&player_1.name, &player_2.name][*player_idx];
                warn!(%player, game_idx, %err, "Illegal move by player");
            }
        }
        match_score.add(&result);
        if args.stop_on_illegal_move && matches!(result, GameResult::IllegalMoveByPlayer { .. }) {
            break;
        }
    }

    eprintln!("{}", match_score.summary([&player_1.name, &player_2.name]));
    Ok(match_score)
}

// prints an upper triangular matrix of the results of the tournament
fn print_tournament_results(
    player_configs: &[PlayerConfig],
    match_results: &HashMap<(usize, usize), MatchScore>,
) {
    println!("\nTournament results (p1 win %, p2 win %, tie %):\n");
    print!(" {:19} |", "p1 ↓           p2 →");
    for config in player_configs.iter().rev() {
        print!(" {:19} |", config.nick);
    }
    println!();
    for (i, config) in player_configs.iter().enumerate() {
        println!("{}", "---------------------|".repeat(player_configs.len() - i + 1));
        print!(" {:19} |", config.nick);
        for j in (0..player_configs.len()).rev() {
            if i >= j {
                print!("    ");
            } else if let Some(score) = match_results.get(&(i, j)) {
                let [win_1, win_2, tie] = score.percentages();
                print!("{:5.1}% {:5.1}% {:5.1}% |", win_1, win_2, tie);
            } else {
                print!(" {:19} |", "N/A");
            }
        }
        println!();
    }
    println!("---------------------|");
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = match &args.record_games_to_directory {
        Some(dir_path) => Some(Recorder::new(dir_path.clone())?),
        None => None,
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<anyhow::Result<Vec<PlayerConfig>>>()?;

    let mut match_results = HashMap::new();
    for (i1, i2) in (0..player_configs.len()).tuple_combinations() {
        let mut player_1 = Player::from_config(&player_configs[i1])?;
        let mut player_2 = Player::from_config(&player_configs[i2])?;
        info!(
            player_1 = %player_1.name,
            player_2 = %player_2.name,
            "Starting matchup"
        );

        let match_score = play_matchup(&mut player_1, &mut player_2, &args, &mut rng, &mut recorder)?;
        player_1.bye()?;
        player_2.bye()?;

        match_results.insert((i1, i2), match_score);
    }

    if player_configs.len() > 2 {
        print_tournament_results(&player_configs, &match_results);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use teeko::IllegalMove;

    use super::*;

    #[test]
    fn illegal_moves_count_for_the_opponent() {
        let mut score = MatchScore::default();
        score.add(&GameResult::WonByPlayer { player_idx: 0 });
        score.add(&GameResult::Tie);
        score.add(&GameResult::IllegalMoveByPlayer {
            player_idx: 0,
            err: IllegalMove::RelocationInDropPhase,
        });
        assert_eq!(
            score,
            MatchScore {
                wins: [1, 1],
                illegal_moves: [1, 0],
                ties: 1,
            }
        );
        assert_eq!(score.num_games(), 3);
        assert_eq!(
            score.summary(["alice", "bob"]),
            "End result:\n\
             - 1 wins by alice\n\
             - 1 wins by bob (1 through illegal moves by alice)\n\
             - 1 ties"
        );
    }

    #[test]
    fn percentages_of_an_empty_match() {
        assert_eq!(MatchScore::default().percentages(), [0.0, 0.0, 0.0]);
    }
}
