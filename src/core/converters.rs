use crate::domain::ports::Converter;
use crate::utils::error::{LambdaError, Result};

/// Parses a decimal integer, keeping the offending input on failure.
pub fn parse_int(from: &str) -> Result<i32> {
    from.parse::<i32>().map_err(|source| LambdaError::ParseError {
        input: from.to_string(),
        source,
    })
}

/// Runs `input` through any integer-parsing converter.
pub fn convert_to_int<'a, C>(converter: &C, input: &'a str) -> Result<i32>
where
    C: Converter<&'a str, Result<i32>> + ?Sized,
{
    converter.convert(input)
}
