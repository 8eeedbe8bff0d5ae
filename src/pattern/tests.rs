// src/pattern/tests.rs

use super::*;
use crate::color::{parse_css_color, NamedColor, Rgb};
use test_log::test;

// --- Test Helpers ---

/// A valid pattern cycling through every palette digit.
fn cycling_pattern() -> String {
    (0..CELL_COUNT)
        .map(|i| char::from(b'0' + (i % 9) as u8))
        .collect()
}

fn all_ones() -> String {
    "1".repeat(CELL_COUNT)
}

// --- Decode ---

#[test]
fn it_should_decode_each_digit_into_its_cell() {
    let pattern = cycling_pattern();
    let grid = decode(Some(&pattern));
    for (i, c) in pattern.chars().enumerate() {
        assert_eq!(
            grid.get(i).map(u8::from),
            c.to_digit(10).map(|d| d as u8),
            "cell {i}"
        );
    }
}

#[test]
fn it_should_round_trip_a_valid_pattern() {
    let pattern = cycling_pattern();
    assert_eq!(encode(&decode(Some(&pattern))), pattern);

    let eights = "8".repeat(CELL_COUNT);
    assert_eq!(encode(&decode(Some(&eights))), eights);
}

#[test]
fn it_should_fall_back_to_default_on_wrong_length() {
    let short = "2".repeat(CELL_COUNT - 1);
    let long = "2".repeat(CELL_COUNT + 1);
    assert_eq!(decode(Some(&short)), Grid::default());
    assert_eq!(decode(Some(&long)), Grid::default());
    assert_eq!(decode(Some("")), Grid::default());
    assert_eq!(
        validate(&short),
        Err(PatternError::WrongLength {
            expected: CELL_COUNT,
            actual: CELL_COUNT - 1
        })
    );
}

#[test]
fn it_should_fall_back_to_default_on_invalid_characters() {
    let mut nine = cycling_pattern();
    nine.replace_range(10..11, "9");
    assert_eq!(decode(Some(&nine)), Grid::default());
    assert_eq!(
        validate(&nine),
        Err(PatternError::InvalidCharacter {
            position: 10,
            found: '9'
        })
    );

    let mut letter = cycling_pattern();
    letter.replace_range(0..1, "a");
    assert_eq!(decode(Some(&letter)), Grid::default());

    let mut minus = cycling_pattern();
    minus.replace_range(143..144, "-");
    assert_eq!(decode(Some(&minus)), Grid::default());
}

#[test]
fn it_should_count_multibyte_characters_as_single_cells() {
    // 144 chars but more than 144 bytes.
    let mut wide = "1".repeat(CELL_COUNT - 1);
    wide.push('٣');
    assert_eq!(
        validate(&wide),
        Err(PatternError::InvalidCharacter {
            position: CELL_COUNT - 1,
            found: '٣'
        })
    );
    assert_eq!(decode(Some(&wide)), Grid::default());
}

#[test]
fn it_should_fall_back_to_default_on_absent_input() {
    assert_eq!(decode(None), Grid::default());
}

// --- Encode ---

#[test]
fn it_should_encode_the_default_grid_as_all_ones() {
    assert_eq!(encode(&Grid::default()), all_ones());
}

#[test]
fn it_should_change_only_the_painted_position() {
    let before = cycling_pattern();
    let mut grid = decode(Some(&before));
    let purple = ColorIndex::new(7).unwrap();
    grid.set(40, purple).unwrap();

    let after = encode(&grid);
    assert_eq!(after.len(), CELL_COUNT);
    for (i, (b, a)) in before.chars().zip(after.chars()).enumerate() {
        if i == 40 {
            assert_eq!(a, '7');
        } else {
            assert_eq!(a, b, "position {i} changed");
        }
    }
}

#[test]
fn it_should_reject_out_of_range_cell_positions() {
    let mut grid = Grid::default();
    assert_eq!(
        grid.set(CELL_COUNT, ColorIndex::BLACK),
        Err(PatternError::CellOutOfRange {
            position: CELL_COUNT,
            cells: CELL_COUNT
        })
    );
    assert_eq!(grid, Grid::default());
}

// --- Encoding raw colors ---

#[test]
fn it_should_encode_colors_in_mixed_representations() {
    let palette = Palette::standard();
    let mut colors = Grid::default().colors(&palette);
    colors[0] = Color::Named(NamedColor::Black);
    colors[1] = parse_css_color("rgb(255, 0, 0)").unwrap();
    colors[2] = parse_css_color("#FFA500").unwrap();
    colors[3] = Color::Rgb(Rgb::new(255, 192, 203));

    let encoded = encode_colors(&palette, &colors).unwrap();
    assert_eq!(&encoded[..4], "0238");
    assert_eq!(&encoded[4..], &all_ones()[4..]);
}

#[test]
fn it_should_report_the_position_of_a_color_outside_the_palette() {
    let palette = Palette::standard();
    let mut colors = Grid::default().colors(&palette);
    colors[17] = Color::Rgb(Rgb::new(10, 20, 30));

    assert_eq!(
        encode_colors(&palette, &colors),
        Err(PatternError::IndexNotFound {
            position: 17,
            color: "rgb(10, 20, 30)".to_string()
        })
    );
}

#[test]
fn it_should_reject_color_sequences_of_the_wrong_length() {
    let palette = Palette::standard();
    let colors = vec![Color::Named(NamedColor::White); CELL_COUNT - 1];
    assert_eq!(
        encode_colors(&palette, &colors),
        Err(PatternError::WrongLength {
            expected: CELL_COUNT,
            actual: CELL_COUNT - 1
        })
    );
}

#[test]
fn it_should_agree_with_encode_for_palette_colors() {
    let palette = Palette::standard();
    let grid = decode(Some(&cycling_pattern()));
    assert_eq!(encode_colors(&palette, &grid.colors(&palette)).unwrap(), encode(&grid));
}
