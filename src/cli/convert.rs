use super::prompt::Prompter;
use super::ui;
use crate::core::converter;
use crate::core::{ConversionError, CurrencyCode, CurrencyRateProvider};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

pub const BANNER: &str = "Currency converter.";
pub const FROM_PROMPT: &str = "Enter the currency to convert from (e.g. USD)";
pub const TO_PROMPT: &str = "Enter the currency to convert to (e.g. EUR)";
pub const AMOUNT_PROMPT: &str = "Enter the amount to convert";

/// Parses a user-supplied amount, ignoring surrounding whitespace.
pub fn parse_amount(input: &str) -> Result<f64, ConversionError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidAmount(input.to_string()))
}

/// Renders a successful conversion, e.g. `100.0 USD = 92.00 EUR`.
pub fn format_conversion(
    amount: f64,
    from: &CurrencyCode,
    converted: f64,
    to: &CurrencyCode,
) -> String {
    // Debug keeps the decimal point on whole numbers
    format!("{amount:?} {from} = {converted:.2} {to}")
}

async fn convert_input(
    provider: &dyn CurrencyRateProvider,
    amount_input: &str,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<String, ConversionError> {
    let amount = parse_amount(amount_input)?;
    let converted = converter::convert(provider, amount, from, to).await?;
    Ok(format_conversion(amount, from, converted, to))
}

/// Runs one interactive conversion.
///
/// Conversion errors are written to `out` and the session still succeeds; only
/// prompt and output failures are returned as errors.
pub async fn run_session<P, W>(
    prompter: &mut P,
    out: &mut W,
    provider: &dyn CurrencyRateProvider,
) -> Result<()>
where
    P: Prompter,
    W: Write,
{
    writeln!(out, "{}", ui::style_text(BANNER, ui::StyleType::Title))?;

    let from = CurrencyCode::new(&prompter.prompt(FROM_PROMPT)?);
    let to = CurrencyCode::new(&prompter.prompt(TO_PROMPT)?);
    let amount_input = prompter.prompt(AMOUNT_PROMPT)?;

    match convert_input(provider, &amount_input, &from, &to).await {
        Ok(line) => writeln!(out, "{line}")?,
        Err(e) => {
            debug!(error = ?e, "Conversion failed");
            writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?;
        }
    }
    out.flush()?;
    Ok(())
}
