//! Colour helper commands.
//!
//! Results go to stdout one colour per line so they can be pasted into a
//! palette file.

use clap::{Args, Subcommand};

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{interpolate_colours, Colour};

/// Colour helpers
#[derive(Args, Debug)]
pub struct ColourArgs {
    #[command(subcommand)]
    pub action: ColourAction,
}

#[derive(Subcommand, Debug)]
pub enum ColourAction {
    /// Evenly spaced colours from one colour to another, inclusive
    Interpolate {
        from: Colour,
        to: Colour,
        /// Number of colours to produce
        #[arg(long, short, default_value = "5")]
        steps: usize,
    },

    /// Move each channel toward white by a percentage of full scale
    Lighten {
        colour: Colour,
        /// Percentage (negative darkens)
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },

    /// Complement each channel
    Invert { colour: Colour },
}

pub fn run(args: ColourArgs, printer: &Printer) -> Result<()> {
    let colours = evaluate(&args.action)?;
    if let ColourAction::Interpolate { from, to, .. } = &args.action {
        printer.info(
            "Interpolated",
            &format!("{} from {} to {}", plural(colours.len(), "colour", "colours"), from, to),
        );
    }
    for colour in colours {
        println!("{}", colour);
    }
    Ok(())
}

/// Compute the colours an action asks for.
pub fn evaluate(action: &ColourAction) -> Result<Vec<Colour>> {
    match action {
        ColourAction::Interpolate { from, to, steps } => interpolate_colours(*steps, *from, *to),
        ColourAction::Lighten { colour, percent } => Ok(vec![colour.lighten(*percent)]),
        ColourAction::Invert { colour } => Ok(vec![colour.invert()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(argv: &[&str]) -> ColourAction {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Colour(args) => args.action,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_interpolate() {
        let action = parse(&["shapesmith", "colour", "interpolate", "#000", "#FFFFFF", "-s", "3"]);
        assert_eq!(
            evaluate(&action).unwrap(),
            vec![Colour::BLACK, Colour::rgb(0x80, 0x80, 0x80), Colour::WHITE]
        );
    }

    #[test]
    fn test_lighten_accepts_negative_percent() {
        let action = parse(&["shapesmith", "colour", "lighten", "#808080", "-10"]);
        assert_eq!(evaluate(&action).unwrap(), vec![Colour::rgb(0x66, 0x66, 0x66)]);
    }

    #[test]
    fn test_invert() {
        let action = parse(&["shapesmith", "colour", "invert", "123456"]);
        assert_eq!(evaluate(&action).unwrap(), vec![Colour::rgb(0xED, 0xCB, 0xA9)]);
    }

    #[test]
    fn test_bad_colour_rejected_by_parser() {
        assert!(Cli::try_parse_from(["shapesmith", "colour", "invert", "#GG0000"]).is_err());
    }

    #[test]
    fn test_zero_steps_is_error() {
        let action = ColourAction::Interpolate {
            from: Colour::BLACK,
            to: Colour::WHITE,
            steps: 0,
        };
        assert!(evaluate(&action).is_err());
    }
}
