use cube_core::{Color, Cube};
use itertools::Itertools;
use owo_colors::{AnsiColors, DynColors, OwoColorize};

fn terminal_color(color: Color) -> DynColors {
    match color {
        Color::White => DynColors::Ansi(AnsiColors::BrightWhite),
        Color::Red => DynColors::Ansi(AnsiColors::Red),
        Color::Green => DynColors::Ansi(AnsiColors::Green),
        Color::Yellow => DynColors::Ansi(AnsiColors::BrightYellow),
        // The 16 ANSI colors have no orange
        Color::Orange => DynColors::Rgb(255, 165, 0),
        Color::Blue => DynColors::Ansi(AnsiColors::Blue),
    }
}

/// The debug dump of `cube`, optionally with each facelet drawn in its color.
pub fn dump(cube: &Cube, colored: bool) -> String {
    if !colored {
        return cube.to_string();
    }

    let faces = cube
        .faces()
        .map(|grid| {
            grid.iter()
                .map(|row| {
                    row.iter()
                        .map(|&color| {
                            color
                                .symbol()
                                .color(terminal_color(color))
                                .bold()
                                .to_string()
                        })
                        .join(" ")
                })
                .join("\n")
        })
        .join("\n\n");
    format!("{faces}\n")
}
