//! Text form of a dice set, e.g. `Fire=2d8 #ff0000/#ffffff`.
//!
//! ```text
//! [name=][count]d<sides>[ #dice[/#number]]
//! ```

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_till1, take_while_m_n},
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, map_res, opt},
    sequence::{delimited, pair, preceded, terminated},
};

use crate::{
    color::Color,
    config::DiceSetConfig,
    rules::bounds::{DICE_COUNT, SIDES},
};

struct SetSpec<'a> {
    name: Option<&'a str>,
    dice_count: Option<&'a str>,
    sides: &'a str,
    dice_color: Option<Color>,
    number_color: Option<Color>,
}

pub fn parse_set(input: &str) -> anyhow::Result<DiceSetConfig> {
    let spec = match all_consuming(delimited(space0, set_spec, space0)).parse(input) {
        Ok((_, spec)) => spec,
        Err(_) => anyhow::bail!("Failed to parse dice set {input:?}, expected e.g. Name=3d6"),
    };

    let dice_count = match spec.dice_count {
        Some(text) => DICE_COUNT.parse(text)?,
        None => DICE_COUNT.lower,
    };
    let sides = SIDES.parse(spec.sides)?;
    let config = DiceSetConfig::new(spec.name.map(str::trim).unwrap_or_default(), dice_count, sides)?;

    Ok(config.with_colors(
        spec.dice_color.unwrap_or(Color::WHITE),
        spec.number_color.unwrap_or(Color::BLACK),
    ))
}

fn set_spec(input: &str) -> IResult<&str, SetSpec<'_>> {
    let (input, (name, dice_count, sides, colors)) = (
        opt(terminated(take_till1(|c| c == '='), char('='))),
        opt(digit1),
        preceded(alt((char('d'), char('D'))), digit1),
        opt(preceded(space1, pair(color, opt(preceded(char('/'), color))))),
    )
        .parse(input)?;

    let (dice_color, number_color) = match colors {
        Some((dice, number)) => (Some(dice), number),
        None => (None, None),
    };

    Ok((
        input,
        SetSpec {
            name,
            dice_count,
            sides,
            dice_color,
            number_color,
        },
    ))
}

fn color(input: &str) -> IResult<&str, Color> {
    map_res(
        preceded(
            char('#'),
            take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit()),
        ),
        |hex: &str| hex.parse::<Color>(),
    )
    .parse(input)
}
