use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vanishing_tictactoe::controller::human_player;
use vanishing_tictactoe::{GameController, GameResult};

/// Tic-tac-toe where the oldest piece vanishes after six placements
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Play against the bot (you are X)
    #[arg(long)]
    bot: bool,

    /// Seed for the bot's random moves
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_cell(line: &str) -> anyhow::Result<usize> {
    let index: usize = line.trim().parse().context("expected a cell number 0-8")?;
    if index > 8 {
        bail!("cell {} is off the board", index);
    }
    Ok(index)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = GameController::with_rng(cli.bot, rng);
    if let Some(player) = human_player(cli.bot) {
        println!("You play {}.", player);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}", game.board());
        println!("{}", game.status());

        if game.result() != GameResult::InProgress {
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            match lines.next().transpose()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    game.play_again();
                    continue;
                }
                _ => break,
            }
        }

        if let Some(cell) = game.state().next_to_vanish() {
            println!("Cell {} vanishes on the next move.", cell);
        }
        print!("Cell (0-8): ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let index = match parse_cell(&line) {
            Ok(index) => index,
            Err(err) => {
                println!("{:#}", err);
                continue;
            }
        };

        match game.player_move(index) {
            Some(outcome) => {
                if let Some(reply) = outcome.reply {
                    println!("Bot takes {}.", reply.index);
                }
            }
            None => println!("Cell {} is taken.", index),
        }
    }

    Ok(())
}
