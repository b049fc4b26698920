use chromachess::controller::{CommandError, GameController, render};
use chromachess::engine::search::{Difficulty, SearchLimits};
use chromachess::game::{Color, GameState};
use chromachess::utils::{GUICommand, HELP};
use clap::Parser;
use std::path::Path;

#[derive(Parser)]
#[command(name = "chromachess")]
#[command(about = "Four-player chess where a pawn's role follows the color of its square", long_about = None)]
struct Cli {
    /// How often the computer passes over its best move
    #[arg(short, long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,

    /// Thinking time per computer move in milliseconds
    #[arg(short, long)]
    movetime: Option<u64>,

    /// Maximum search depth per computer move
    #[arg(long)]
    depth: Option<usize>,

    /// Players taking part, as letters of red, green, yellow and blue
    #[arg(short, long, default_value = "rgyb")]
    players: String,

    /// Let the computer play every side and print the game
    #[arg(long)]
    self_play: bool,

    /// Stop a self-play game after this many moves
    #[arg(long, default_value_t = 200)]
    max_moves: usize,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut controller = GameController::new();
    controller.difficulty = cli.difficulty;
    controller.limits = SearchLimits {
        max_depth: cli.depth,
        max_time_ms: cli.movetime.or(SearchLimits::default().max_time_ms),
    };

    let players = match GameController::parse_players(&cli.players) {
        Ok(players) => players,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if cli.self_play {
        if let Err(e) = self_play(&mut controller, &players, cli.max_moves) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    println!("chromachess {} ({}), type 'help' for commands", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));

    while let Some(command) = GUICommand::receive() {
        if command == GUICommand::Quit {
            break;
        }

        if let Err(e) = handle(&mut controller, command, &players) {
            log::warn!("command failed: {}", e);
            println!("error: {}", e);
        }
    }
}

fn handle(controller: &mut GameController, command: GUICommand, players: &[Color]) -> Result<(), CommandError> {
    match command {
        GUICommand::NewGame(letters) => {
            let players = match letters {
                Some(letters) => GameController::parse_players(&letters)?,
                None => players.to_vec(),
            };
            print!("{}", render(controller.new_game(&players)?, &[]));
        }
        GUICommand::Show => print!("{}", controller.print()?),
        GUICommand::Moves(pawn) => {
            let moves = controller.get_pawn_moves(&pawn)?;
            print!("{}", controller.print_with_moves(&pawn)?);
            println!(
                "moves: {}",
                moves.iter().map(|m| m.unparse()).collect::<Vec<_>>().join(" ")
            );
        }
        GUICommand::Move(pawn, square) => print!("{}", render(controller.try_move_piece(&pawn, &square)?, &[])),
        GUICommand::Go => {
            let state = *controller.computer_move()?;
            if let Some(report) = controller.last_report() {
                println!("{} played ({})", report.player, report);
            }
            print!("{}", render(&state, &[]));
        }
        GUICommand::Undo => print!("{}", render(controller.undo()?, &[])),
        GUICommand::Eval => {
            let (score, report) = controller.evaluate()?;
            println!("static: {}", format_score(&score));
            if let Some(report) = report {
                println!("search: {}", report);
                println!("best:   {}", format_score(&report.best().score));
            }
        }
        GUICommand::Perft(depth) => {
            let depth = depth
                .parse::<usize>()
                .map_err(|_| chromachess::game::GameError::Parse(depth.clone()))?;
            println!("nodes: {}", controller.perft(depth)?);
        }
        GUICommand::Save(path) => {
            controller.save(Path::new(&path))?;
            println!("saved to {}", path);
        }
        GUICommand::Load(path) => print!("{}", render(controller.load(Path::new(&path))?, &[])),
        GUICommand::SetOption(name, value) => controller.set_option(&name, &value)?,
        GUICommand::Help => println!("{}", HELP),
        GUICommand::Quit => {}
        GUICommand::Invalid(input) => {
            if !input.is_empty() {
                println!("unknown command '{}', type 'help'", input);
            }
        }
    }

    Ok(())
}

fn format_score(score: &[f32]) -> String {
    use strum::IntoEnumIterator;

    Color::iter()
        .map(|color| format!("{} {:.3}", color, score[color as usize]))
        .collect::<Vec<_>>()
        .join(", ")
}

fn self_play(controller: &mut GameController, players: &[Color], max_moves: usize) -> Result<(), CommandError> {
    controller.new_game(players)?;
    print!("{}", controller.print()?);

    for ply in 1..=max_moves {
        let state: GameState = *controller.computer_move()?;

        if let Some(report) = controller.last_report() {
            println!("move {}: {} ({})", ply, report.player, report);
        }
        print!("{}", render(&state, &[]));

        if state.is_game_over() {
            return Ok(());
        }
    }

    println!("no winner after {} moves", max_moves);
    Ok(())
}
