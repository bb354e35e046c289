use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use eight_puzzle::board::{TileGrid, BLANK};
use eight_puzzle::score::Placeholder;
use env_logger::Env;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, IsTerminal};

/// Score an 8-puzzle board.
///
/// Boards are read left to right, top to bottom: `123456780` is
///
///   |1|2|3|
///   |4|5|6|
///   |7|8|0|
#[derive(Debug, Parser)]
#[command(author, version, about, verbatim_doc_comment)]
struct Cli {
    /// Nine tiles, e.g. 123456780 (0 is the blank)
    board: Option<String>,
    /// Use a random arrangement instead of BOARD
    #[arg(long, conflicts_with = "board")]
    random: bool,
    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

fn render(grid: &TileGrid, styled: bool) -> Result<String> {
    let mut out = String::new();
    grid.write_boxed(&mut out, |tile| match (styled, tile) {
        (false, _) => tile.to_string(),
        (true, BLANK) => tile.to_string().dark_grey().to_string(),
        (true, _) => tile.to_string().bold().to_string(),
    })?;
    Ok(out)
}

/// The board named on the command line, or `None` if there isn't one.
fn board(cli: &Cli) -> Result<Option<TileGrid>> {
    if let Some(tiles) = &cli.board {
        let parsed: TileGrid = tiles
            .parse()
            .with_context(|| format!("invalid board {tiles:?}"))?;
        return Ok(Some(TileGrid::new(*parsed.tiles(), &Placeholder)));
    }
    if !cli.random {
        return Ok(None);
    }
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(Some(TileGrid::shuffled(&mut rng, &Placeholder)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let Some(grid) = board(&cli)? else {
        eprintln!("Enter board when executing.");
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    debug!("tiles {:?}", grid.tiles());
    info!("scored board, h = {}", grid.h());
    println!("{}", render(&grid, io::stdout().is_terminal())?);
    println!("h: {}", grid.h());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{board, render, Cli};
    use eight_puzzle::board::TileGrid;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("eight-puzzle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_accepts_board_or_random() {
        let parsed = cli(&["123456780"]);
        assert_eq!(parsed.board.as_deref(), Some("123456780"));
        assert!(!parsed.random);

        let parsed = cli(&["--random", "--seed", "3"]);
        assert!(parsed.random);
        assert_eq!(parsed.seed, Some(3));

        assert!(Cli::try_parse_from(["eight-puzzle", "123456780", "--random"]).is_err());
        assert!(Cli::try_parse_from(["eight-puzzle", "--seed", "3"]).is_err());
    }

    #[test]
    fn no_board_means_usage() {
        assert!(board(&cli(&[])).unwrap().is_none());
    }

    #[test]
    fn short_board_is_an_error() {
        let err = board(&cli(&["12345678"])).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("invalid board \"12345678\""), "{chain}");
        assert!(chain.contains("expected 9 tiles"), "{chain}");
    }

    #[test]
    fn board_argument_is_scored() {
        let grid = board(&cli(&["123456780"])).unwrap().unwrap();
        assert_eq!(grid.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(grid.h(), 0);
    }

    #[test]
    fn seeded_random_is_repeatable() {
        let first = board(&cli(&["--random", "--seed", "3"])).unwrap().unwrap();
        let second = board(&cli(&["--random", "--seed", "3"])).unwrap().unwrap();
        assert_eq!(first.tiles(), second.tiles());
        assert!(first.blank_position().is_some());
    }

    #[test]
    fn plain_render_matches_display() {
        let grid: TileGrid = "123456780".parse().unwrap();
        let out = render(&grid, false).unwrap();
        assert_eq!(out, grid.to_string());
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn styled_render_keeps_layout() {
        let grid: TileGrid = "123456780".parse().unwrap();
        let out = render(&grid, true).unwrap();
        assert!(out.starts_with("+-----+\n"));
        assert!(out.ends_with("+-----+"));
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains('\x1b'));
    }
}
