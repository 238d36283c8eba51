use tictactoe_minimax::{
    game_state::Player, Action, GameState, Minimax, MinimaxError, SearchConfig, Utility,
};

// Subtraction game: take 1 or 2 stones; whoever takes the last stone wins.
// The player to move loses exactly when the pile is a multiple of three.
#[derive(Clone, Debug)]
struct Pile {
    stones: usize,
    first_to_move: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Take(usize);

impl Action for Take {}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Side(bool);

impl Player for Side {
    fn is_maximizer(&self) -> bool {
        self.0
    }
}

impl GameState for Pile {
    type Action = Take;
    type Player = Side;

    fn get_legal_actions(&self) -> Vec<Self::Action> {
        (1..=self.stones.min(2)).map(Take).collect()
    }

    fn apply_action(&self, action: &Self::Action) -> tictactoe_minimax::Result<Self> {
        if action.0 == 0 || action.0 > 2 || action.0 > self.stones {
            return Err(MinimaxError::InvalidMove {
                row: 0,
                col: action.0,
            });
        }
        Ok(Pile {
            stones: self.stones - action.0,
            first_to_move: !self.first_to_move,
        })
    }

    fn is_terminal(&self) -> bool {
        self.stones == 0
    }

    fn get_utility(&self) -> Utility {
        if !self.is_terminal() {
            return 0;
        }
        // The previous mover took the last stone.
        if self.first_to_move {
            -1
        } else {
            1
        }
    }

    fn get_current_player(&self) -> Option<Self::Player> {
        if self.is_terminal() {
            None
        } else {
            Some(Side(self.first_to_move))
        }
    }
}

fn pile(stones: usize) -> Pile {
    Pile {
        stones,
        first_to_move: true,
    }
}

#[test]
fn test_generic_values() {
    for stones in 1..=12 {
        let mut search = Minimax::new(SearchConfig::exhaustive());
        let expected = if stones % 3 == 0 { -1 } else { 1 };
        assert_eq!(search.max_value(&pile(stones)).unwrap(), expected, "{} stones", stones);
    }
}

#[test]
fn test_generic_best_move_leaves_multiple_of_three() {
    for stones in [1, 2, 4, 5, 7, 8, 10, 11] {
        let mut search = Minimax::new(SearchConfig::default());
        let Take(taken) = search.best_move(&pile(stones)).unwrap();
        assert_eq!((stones - taken) % 3, 0, "{} stones", stones);
    }
}

#[test]
fn test_generic_pruning_matches_exhaustive() {
    for stones in 1..=15 {
        let state = pile(stones);
        let mut exhaustive = Minimax::new(SearchConfig::exhaustive());
        let mut pruned = Minimax::new(SearchConfig::default());

        assert_eq!(
            pruned.best_move(&state).unwrap(),
            exhaustive.best_move(&state).unwrap()
        );
        assert_eq!(
            pruned.max_value(&state).unwrap(),
            exhaustive.max_value(&state).unwrap()
        );
    }
}

#[test]
fn test_states_without_key_are_never_cached() {
    let mut search = Minimax::new(SearchConfig::exhaustive().with_transpositions(true));
    search.max_value(&pile(10)).unwrap();
    assert_eq!(search.get_statistics().transposition_hits, 0);
}

#[test]
fn test_generic_terminal_state() {
    let mut search = Minimax::new(SearchConfig::default());
    assert!(matches!(
        search.best_move(&pile(0)),
        Err(MinimaxError::NoLegalMoves)
    ));
    assert_eq!(search.min_value(&pile(0)).unwrap(), -1);
}

#[test]
fn test_generic_play_out() {
    let mut search = Minimax::new(SearchConfig::default());
    let (end, trace) = search.play_out(&pile(7)).unwrap();

    assert!(end.is_terminal());
    assert_eq!(trace.iter().map(|Take(n)| n).sum::<usize>(), 7);
    // The first player wins from a non-multiple of three.
    assert_eq!(end.get_utility(), 1);
}
