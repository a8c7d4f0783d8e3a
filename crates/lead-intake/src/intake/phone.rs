pub const PHONE_DIGITS: usize = 10;

pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// Reformat as the visitor types: `(330`, `(330) 555`, `(330) 555-1234`.
pub fn format_phone(raw: &str) -> String {
    let digits: String = phone_digits(raw).chars().take(PHONE_DIGITS).collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

pub fn is_valid_phone(raw: &str) -> bool {
    phone_digits(raw).len() >= PHONE_DIGITS
}
