//! Week selection

use anyhow::{bail, Result};
use sleeper_fetcher::NflState;
use std::io::{BufRead, Write};

/// The week Sleeper currently reports. Week 0 (the offseason) is rejected like
/// any other week below 1.
pub fn current_week(state: &NflState) -> Result<u32> {
    if state.week == 0 {
        bail!(
            "Sleeper reports week 0 for the {} {} season; pass --week to choose a week",
            state.season,
            state.season_type
        );
    }
    Ok(state.week)
}

/// Ask for a week number until a valid one is entered.
///
/// Weeks start at 1. End of input is an error.
pub fn prompt_for_week<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32> {
    let mut line = String::new();
    loop {
        write!(output, "Enter the week number for the recap: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("No week number entered");
        }

        match line.trim().parse::<u32>() {
            Ok(week) if week > 0 => return Ok(week),
            _ => writeln!(output, "Invalid input. Please enter a number.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_number() {
        let mut input = Cursor::new("seven\n\n-2\n0\n 7 \n");
        let mut output = Vec::new();

        let week = prompt_for_week(&mut input, &mut output).unwrap();

        assert_eq!(week, 7);
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Enter the week number for the recap: ").count(), 5);
        assert_eq!(transcript.matches("Invalid input. Please enter a number.").count(), 4);
    }

    #[test]
    fn test_current_week_rejects_offseason() {
        let state = |week| NflState {
            week,
            season: "2025".to_string(),
            season_type: "off".to_string(),
        };

        assert_eq!(current_week(&state(11)).unwrap(), 11);
        let err = current_week(&state(0)).unwrap_err();
        assert!(err.to_string().contains("week 0"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut input = Cursor::new("abc\n");
        let mut output = Vec::new();

        assert!(prompt_for_week(&mut input, &mut output).is_err());
    }
}
