use anyhow::Result;

use puzzler::puzzle::{GridPuzzle, LadderPuzzle, Puzzle, PuzzleState, WordList};
use puzzler::solve::{hint_by_breadth, hint_by_depth, solve, solve_all, Hint, DEFAULT_HINT_DEPTH};

fn grid(rows: &str) -> Result<Puzzle> {
    Ok(GridPuzzle::parse(rows)?.into())
}

fn ladder(start: &str, target: &str, words: &[&str]) -> Result<Puzzle> {
    let words = WordList::new(words.iter().map(|w| w.to_string()));
    Ok(LadderPuzzle::new(start, target, words)?.into())
}

#[test]
fn grid_with_one_empty_cell_solves_in_one_move() -> Result<()> {
    let puzzle = grid(
        "ABCD\n\
         CDAB\n\
         BADC\n\
         DCB.",
    )?;
    assert_eq!(1, puzzle.extensions().len());
    let solution = solve(&puzzle).expect("puzzle is solvable");
    assert!(solution.is_solved());
    assert!(solution.same_state(&grid("ABCD\nCDAB\nBADC\nDCBA")?));
    Ok(())
}

#[test]
fn grid_solves_by_backtracking() -> Result<()> {
    // the text front end's starter board
    let puzzle = grid(
        "...A\n\
         D.B.\n\
         C...\n\
         .B.D",
    )?;
    let solution = solve(&puzzle).expect("puzzle is solvable");
    assert!(solution.is_solved());
    Ok(())
}

#[test]
fn solve_agrees_with_solve_all() -> Result<()> {
    let solvable = grid("...A\nD.B.\nC...\n.B.D")?;
    let solutions = solve_all(&solvable);
    assert!(!solutions.is_empty());
    assert!(solutions.iter().all(PuzzleState::is_solved));
    let first = solve(&solvable).expect("puzzle is solvable");
    assert!(first.same_state(&solutions[0]));

    // first empty cell has no candidates, so there is no way forward
    let unsolvable = grid("ABC.\n...D\n....\n....")?;
    assert!(solve(&unsolvable).is_none());
    assert!(solve_all(&unsolvable).is_empty());
    Ok(())
}

#[test]
fn full_but_invalid_grid_is_a_dead_end_not_a_solution() -> Result<()> {
    // every cell filled, but column 1 repeats D
    let puzzle = grid("ABCD\nCDAB\nBDAC\nDCBA")?;
    assert!(!puzzle.is_solved());
    assert!(puzzle.extensions().is_empty());
    assert!(solve(&puzzle).is_none());
    assert!(solve_all(&puzzle).is_empty());
    assert_eq!(Hint::NoExtensions, hint_by_depth(&puzzle, DEFAULT_HINT_DEPTH));
    Ok(())
}

#[test]
fn solved_grid_solves_to_itself() -> Result<()> {
    let puzzle = grid("ABCD\nCDAB\nBADC\nDCBA")?;
    let solution = solve(&puzzle).expect("already solved");
    assert!(solution.same_state(&puzzle));
    assert_eq!(vec![puzzle.to_string()],
        solve_all(&puzzle).iter().map(Puzzle::to_string).collect::<Vec<_>>());
    assert_eq!(Hint::AlreadySolved, hint_by_depth(&puzzle, DEFAULT_HINT_DEPTH));
    assert_eq!(Hint::AlreadySolved, hint_by_breadth(&puzzle));
    Ok(())
}

#[test]
fn hint_by_depth_suggests_a_winning_move() -> Result<()> {
    let puzzle = grid("ABCD\nCDAB\nBA..\nDC..")?;
    let hint = hint_by_depth(&puzzle, DEFAULT_HINT_DEPTH);
    assert_eq!(Some("(2, 2) -> D"), hint.as_move());
    // the suggestion is a legal move
    assert!(puzzle.apply_move(hint.as_move().unwrap()).is_ok());
    Ok(())
}

#[test]
fn hint_by_depth_respects_the_bound() -> Result<()> {
    // four empty cells remain, so no solution lies within fewer moves
    let puzzle = grid("ABCD\nCDAB\nBA..\nDC..")?;
    assert_eq!(Hint::NoExtensions, hint_by_depth(&puzzle, 1));
    assert_eq!(Hint::NoExtensions, hint_by_depth(&puzzle, 3));
    assert_eq!(Some("(2, 2) -> D"), hint_by_depth(&puzzle, 4).as_move());
    Ok(())
}

#[test]
fn ladder_solves_along_a_shortest_chain() -> Result<()> {
    let puzzle = ladder("hit", "cot", &["hot", "hit", "hat", "cat", "cot"])?;
    let solution = solve(&puzzle).expect("puzzle is solvable");
    assert!(solution.is_solved());
    let chain = match &solution {
        Puzzle::Ladder(ladder) => ladder.chain().to_vec(),
        _ => unreachable!(),
    };
    assert_eq!(vec!["hit", "hot", "cot"], chain);
    Ok(())
}

#[test]
fn ladder_hint_takes_the_first_step_of_a_shortest_path() -> Result<()> {
    // hit -> hot -> cot beats hit -> hat -> cat -> cot
    let puzzle = ladder("hit", "cot", &["hot", "hit", "hat", "cat", "cot"])?;
    assert_eq!(Some("hot"), hint_by_breadth(&puzzle).as_move());
    Ok(())
}

#[test]
fn ladder_with_no_path_has_no_hint() -> Result<()> {
    let puzzle = ladder("hit", "cot", &["hit", "hat", "cot"])?;
    // hat is a dead end: cot differs from it in two positions
    assert_eq!(Hint::NoExtensions, hint_by_breadth(&puzzle));
    assert!(solve(&puzzle).is_none());
    assert!(solve_all(&puzzle).is_empty());
    Ok(())
}

#[test]
fn ladder_solve_all_enumerates_every_chain() -> Result<()> {
    let puzzle = ladder("hit", "cot", &["hot", "hit", "hat", "cat", "cot"])?;
    let solutions = solve_all(&puzzle);
    assert!(solutions.iter().all(PuzzleState::is_solved));
    let chains: Vec<Vec<String>> = solutions
        .iter()
        .map(|s| match s {
            Puzzle::Ladder(ladder) => ladder.chain().to_vec(),
            _ => unreachable!(),
        })
        .collect();
    assert!(chains.contains(&vec![
        "hit".to_string(),
        "hot".to_string(),
        "cot".to_string()
    ]));
    assert!(chains.contains(&vec![
        "hit".to_string(),
        "hat".to_string(),
        "cat".to_string(),
        "cot".to_string()
    ]));
    Ok(())
}

#[test]
fn round_trip_describe_then_apply() -> Result<()> {
    for puzzle in vec![
        grid("...A\nD.B.\nC...\n.B.D")?,
        ladder("hit", "cot", &["hot", "hit", "hat", "cat", "cot"])?,
    ] {
        for extension in puzzle.extensions() {
            let text = puzzle.describe_move(&extension);
            let reached = puzzle.apply_move(&text)?;
            assert!(reached.same_state(&extension));
        }
    }
    Ok(())
}

#[test]
fn hint_display_matches_the_prompt_strings() {
    assert_eq!("Already at a solution!", Hint::AlreadySolved.to_string());
    assert_eq!("No possible extensions!", Hint::NoExtensions.to_string());
    assert_eq!("hot", Hint::Move("hot".to_string()).to_string());
}
