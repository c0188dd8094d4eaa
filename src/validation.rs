use chrono::{Datelike, Local, NaiveDate};

use crate::domain::payment::PostPaymentRequest;
use crate::error::PaymentError;

const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];
const MAX_EXPIRY_YEARS_AHEAD: i32 = 6;

/// Validates an inbound payment request against today's date. Pure, no I/O.
pub fn validate_payment_request(request: &PostPaymentRequest) -> Result<(), PaymentError> {
    validate_payment_request_at(request, Local::now().date_naive())
}

/// Rules run in a fixed order; the first violation decides the reported
/// reason. `today` is injectable so the date-sensitive rules are testable.
pub fn validate_payment_request_at(
    request: &PostPaymentRequest,
    today: NaiveDate,
) -> Result<(), PaymentError> {
    validate_card_number(&request.card_number)?;
    validate_expiry_month(request.expiry_month)?;
    validate_expiry_year(request.expiry_year, today)?;
    validate_expiry_date(request.expiry_month, request.expiry_year, today)?;
    validate_currency(&request.currency)?;
    validate_cvv(request.cvv)?;
    validate_amount(request.amount)?;
    Ok(())
}

fn invalid(reason: &str) -> PaymentError {
    PaymentError::Validation(reason.to_string())
}

fn validate_card_number(card_number: &str) -> Result<(), PaymentError> {
    let all_digits = !card_number.is_empty() && card_number.chars().all(|c| c.is_ascii_digit());
    if card_number.len() < 14 || card_number.len() > 19 || !all_digits {
        return Err(invalid(
            "Card number must be a numeric string between 14 and 19 digits long",
        ));
    }
    Ok(())
}

fn validate_expiry_month(expiry_month: i32) -> Result<(), PaymentError> {
    if !(1..=12).contains(&expiry_month) {
        return Err(invalid("Expiry month must be between 1 and 12"));
    }
    Ok(())
}

fn validate_expiry_year(expiry_year: i32, today: NaiveDate) -> Result<(), PaymentError> {
    let current_year = today.year();
    if expiry_year < current_year || expiry_year > current_year + MAX_EXPIRY_YEARS_AHEAD {
        return Err(invalid("Invalid expiry year"));
    }
    Ok(())
}

/// The expiry date is built from the card's month/year and today's
/// day-of-month, so the boundary for the current month shifts with the
/// calendar day. An unconstructible date (the 31st against a 30-day expiry
/// month) fails the same rule.
fn validate_expiry_date(
    expiry_month: i32,
    expiry_year: i32,
    today: NaiveDate,
) -> Result<(), PaymentError> {
    match NaiveDate::from_ymd_opt(expiry_year, expiry_month as u32, today.day()) {
        Some(expiry) if expiry >= today => Ok(()),
        _ => Err(invalid("Expiry date cannot be in the past")),
    }
}

fn validate_currency(currency: &str) -> Result<(), PaymentError> {
    if currency.trim().is_empty() {
        return Err(invalid("Currency is required"));
    }
    if !SUPPORTED_CURRENCIES.contains(&currency) {
        return Err(invalid(
            "Invalid currency. Supported currencies: USD, EUR, GBP",
        ));
    }
    Ok(())
}

fn validate_cvv(cvv: i32) -> Result<(), PaymentError> {
    if !(100..=9999).contains(&cvv) {
        return Err(invalid("CVV must be a 3 or 4-digit number"));
    }
    Ok(())
}

fn validate_amount(amount: i64) -> Result<(), PaymentError> {
    if amount <= 0 {
        return Err(invalid("Invalid amount"));
    }
    Ok(())
}
