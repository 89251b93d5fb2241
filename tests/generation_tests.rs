mod common;

use common::{lcg, occurrences};
use rstest::rstest;
use wordforge::grapheme;
use wordforge::random::FnSource;
use wordforge::{generate, generate_seeded, generate_with, GeneratorOptions, PuzzleGenerator, WordForgeError};

fn assert_well_formed(puzzle: &wordforge::Puzzle, size: usize) {
    assert_eq!(puzzle.grid.size(), size);
    assert_eq!(puzzle.grid.blank_count(), 0, "Grid has unfilled cells:\n{}", puzzle.grid);

    for wp in &puzzle.word_positions {
        assert_eq!(wp.positions.len(), grapheme::count(&wp.word));
        for p in &wp.positions {
            assert!(p.row < size && p.col < size, "{:?} out of bounds", p);
        }
    }
    for word in &puzzle.words {
        assert_eq!(
            occurrences(&puzzle.grid, word),
            1,
            "'{}' must occur exactly once in:\n{}",
            word,
            puzzle.grid
        );
    }
}

#[test]
fn test_end_to_end_hi_bye() {
    let mut rng = FnSource(lcg(2024));
    let puzzle = generate_with(&["HI", "BYE"], 5, false, &mut rng).expect("puzzle");

    assert_eq!(puzzle.words, vec!["HI", "BYE"]);
    assert_eq!(puzzle.word_positions.len(), 2);
    assert_well_formed(&puzzle, 5);
}

#[test]
fn test_positions_spell_the_word() {
    let puzzle = generate_seeded(&["ROCKET", "MOON", "STAR"], 8, true, 99).expect("puzzle");

    for wp in &puzzle.word_positions {
        let written: Vec<&str> = wp.positions.iter().map(|&p| puzzle.grid.get(p)).collect();
        let mut graphemes = grapheme::segment(&wp.word);
        if written != graphemes {
            // Backward placements are recorded in write order.
            graphemes.reverse();
        }
        assert_eq!(written, graphemes, "cells of '{}' do not spell it", wp.word);
    }
}

#[test]
fn test_positions_are_collinear_and_contiguous() {
    let puzzle = generate_seeded(&["PYTHON", "RUST", "GO"], 8, true, 7).expect("puzzle");

    for wp in &puzzle.word_positions {
        if wp.positions.len() < 2 {
            continue;
        }
        let dr = wp.positions[1].row as isize - wp.positions[0].row as isize;
        let dc = wp.positions[1].col as isize - wp.positions[0].col as isize;
        assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
        for pair in wp.positions.windows(2) {
            assert_eq!(pair[1].row as isize - pair[0].row as isize, dr);
            assert_eq!(pair[1].col as isize - pair[0].col as isize, dc);
        }
    }
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_uniqueness_holds_in_all_eight_directions(#[case] allow_backwards: bool) {
    let words = ["APPLE", "BANANA", "CHERRY", "KIWI", "LEMON"];
    let puzzle = generate_seeded(&words, 10, allow_backwards, 42).expect("puzzle");
    assert_well_formed(&puzzle, 10);
}

#[test]
fn test_forward_only_uses_forward_rays() {
    let puzzle = generate_seeded(&["WORD", "SEARCH"], 8, false, 3).expect("puzzle");
    for wp in &puzzle.word_positions {
        let first = wp.positions[0];
        let last = *wp.positions.last().unwrap();
        // Forward rays only ever move right or straight down.
        assert!(last.col > first.col || (last.col == first.col && last.row > first.row));
    }
}

#[test]
fn test_determinism_with_fixed_source() {
    let words = ["TIGER", "LION", "ZEBRA", "OKAPI"];

    let mut a = FnSource(lcg(77));
    let mut b = FnSource(lcg(77));
    let first = generate_with(&words, 9, true, &mut a).expect("puzzle a");
    let second = generate_with(&words, 9, true, &mut b).expect("puzzle b");

    assert_eq!(first.grid, second.grid);
    assert_eq!(first.word_positions, second.word_positions);
}

#[test]
fn test_determinism_with_seed() {
    let words = ["ALPHA", "BETA", "GAMMA"];
    let first = generate_seeded(&words, 7, true, 12345).unwrap();
    let second = generate_seeded(&words, 7, true, 12345).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case(vec![], 5)]
#[case(vec!["ABCDEFGHIJ"], 5)]
#[case(vec!["   ", "\t"], 5)]
#[case(vec!["A B C D E F"], 5)]
fn test_no_valid_words(#[case] words: Vec<&str>, #[case] size: usize) {
    let err = generate(&words, size, false).unwrap_err();
    assert!(matches!(err, WordForgeError::NoValidWords));
}

#[test]
fn test_oversized_words_are_dropped_not_fatal() {
    let puzzle = generate_seeded(&["ABCDEFGHIJ", "CAT"], 5, false, 1).expect("puzzle");
    assert_eq!(puzzle.words, vec!["CAT"]);
    assert_eq!(puzzle.word_positions.len(), 1);
}

#[test]
fn test_whitespace_is_stripped_before_placement() {
    let puzzle = generate_seeded(&["  ice cream "], 9, false, 5).expect("puzzle");
    assert_eq!(puzzle.words, vec!["icecream"]);
    assert_eq!(puzzle.word_positions[0].positions.len(), 8);
}

#[test]
fn test_emoji_are_atomic_cells() {
    let words = ["🫶🏻❤️", "💌💓"];
    let puzzle = generate_seeded(&words, 5, false, 8).expect("puzzle");

    let allowed = ["🫶🏻", "❤️", "💌", "💓"];
    for row in puzzle.grid.rows() {
        for cell in row {
            assert!(allowed.contains(&cell.as_str()), "unexpected cell {:?}", cell);
            assert_eq!(grapheme::count(cell), 1);
        }
    }
    for wp in &puzzle.word_positions {
        assert_eq!(wp.positions.len(), 2);
    }
    assert_well_formed(&puzzle, 5);
}

#[test]
fn test_decoys_come_from_input_graphemes() {
    let puzzle = generate_seeded(&["DOG", "CAT"], 6, false, 21).expect("puzzle");
    for row in puzzle.grid.rows() {
        for cell in row {
            assert!("DOGCAT".contains(cell.as_str()));
        }
    }
}

#[test]
fn test_exhaustion_reports_attempts() {
    let gen = PuzzleGenerator::new(GeneratorOptions {
        grid_size: 2,
        max_attempts: 3,
        ..Default::default()
    });
    let mut rng = fastrand::Rng::with_seed(9);
    let err = gen.generate(&["AB", "BA", "AA", "BB"], &mut rng).unwrap_err();
    assert!(matches!(err, WordForgeError::GenerationExhausted { attempts: 3 }));
    assert!(err.to_string().contains("Unable to generate a valid puzzle"));
}
