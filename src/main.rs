use std::io::{self, BufRead, Write};

use chess_core::board::{Bitboard, OptionsError, Square};
use clap::Parser;
use chess_core::{Chess, Color, GameOptions, PieceFactory, PieceRequest, TurnSequencer};

/// Pieces are drawn from the board itself, so the console needs no objects.
struct ConsolePieces;

impl PieceFactory for ConsolePieces {
    type Piece = ();

    fn piece_for_player(&mut self, request: PieceRequest) {
        let PieceRequest {
            player,
            color,
            piece,
            ..
        } = request;
        log::trace!("{color} {piece} for player {player}");
    }
}

struct ConsoleTurns {
    to_move: Color,
    turn: u32,
}

impl TurnSequencer for ConsoleTurns {
    fn current_player(&self) -> Color {
        self.to_move
    }

    fn end_turn(&mut self) {
        self.to_move = self.to_move.opponent();
        self.turn += 1;
    }
}

#[derive(Parser)]
#[command(name = "chess_core")]
#[command(about = "Console play for chess_core", long_about = None)]
struct Cli {
    /// Initial placement, row 0 first
    #[arg(long, value_name = "FEN")]
    fen: Option<String>,
    /// 64-digit state string loaded after setup
    #[arg(long, value_name = "DIGITS")]
    state: Option<String>,
}

impl Cli {
    fn options(&self) -> Result<GameOptions, OptionsError> {
        let mut options = GameOptions::new();
        if let Some(fen) = &self.fen {
            options = options.with_fen(fen.clone());
        }
        options.validate()?;
        Ok(options)
    }
}

fn print_targets(chess: &Chess<ConsolePieces>, from: Square) {
    let board = chess.board();
    match board.piece_at(from) {
        Some((color, piece)) => {
            let targets: Bitboard = board.targets_for(piece, from, color);
            let names: Vec<String> = targets.iter().map(|sq| sq.to_string()).collect();
            println!("{color} {piece} on {from}: {}", names.join(" "));
        }
        None => println!("{from} is empty"),
    }
}

fn handle(line: &str, chess: &mut Chess<ConsolePieces>, turns: &mut ConsoleTurns) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => {}
        ["quit"] | ["exit"] => return false,
        ["board"] => println!("{}", chess.board()),
        ["fen"] => println!("{}", chess.board().to_fen()),
        ["state"] => println!("{}", chess.state_string()),
        ["load", state] => match chess.set_state_string(state) {
            Ok(()) => println!("{}", chess.board()),
            Err(e) => println!("error: {e}"),
        },
        ["moves", sq] => match sq.parse::<Square>() {
            Ok(from) => print_targets(chess, from),
            Err(e) => println!("error: {e}"),
        },
        [from, to] => match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(from), Ok(to)) => {
                if !chess.can_bit_move_from(&from, &*turns) {
                    println!("nothing of {}'s to move on {from}", turns.current_player());
                    return true;
                }
                match chess.try_move(&from, &to, turns) {
                    Ok(captured) => {
                        if let Some((color, piece)) = captured.as_pair() {
                            println!("captured {color} {piece}");
                        }
                        println!("{}", chess.board());
                    }
                    Err(e) => println!("error: {e}"),
                }
            }
            (Err(e), _) | (_, Err(e)) => println!("error: {e}"),
        },
        _ => println!(
            "commands: <from> <to> | moves <sq> | board | fen | state | load <state> | quit"
        ),
    }
    true
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = match cli.options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let mut chess = Chess::new(ConsolePieces, options);
    if let Err(e) = chess.set_up_board() {
        eprintln!("error: {e}");
        std::process::exit(2);
    }
    if let Some(state) = &cli.state {
        if let Err(e) = chess.set_state_string(state) {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }

    let mut turns = ConsoleTurns {
        to_move: Color::White,
        turn: 1,
    };
    println!("{}", chess.board());

    let stdin = io::stdin();
    loop {
        print!("{} ({}) > ", turns.to_move, turns.turn);
        if let Err(e) = io::stdout().flush() {
            log::warn!("stdout flush failed: {e}");
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if !handle(line.trim(), &mut chess, &mut turns) {
            break;
        }
    }
}
