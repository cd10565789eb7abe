use serde::{Deserialize, Serialize};

/// Locale preset used by the built-in number formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    #[default]
    EnUs,
    EsEs,
}

impl LabelLocale {
    const fn separators(self) -> (char, char, usize) {
        // (grouping, decimal, minimum integer digits before grouping applies)
        match self {
            Self::EnUs => (',', '.', 4),
            Self::EsEs => ('.', ',', 5),
        }
    }
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a tick value the way default titles are shown: up to three
/// fraction digits, trailing zeros trimmed, thousands grouped.
#[must_use]
pub fn format_locale_number(value: f64, locale: LabelLocale) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let (group_separator, decimal_separator, min_grouping_digits) = locale.separators();

    let mut text = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        text.push('-');
    }
    text.push_str(&group_digits(integer, group_separator, min_grouping_digits));
    if !fraction.is_empty() {
        text.push(decimal_separator);
        text.push_str(fraction);
    }
    text
}

fn group_digits(integer: &str, separator: char, min_grouping_digits: usize) -> String {
    if integer.len() < min_grouping_digits {
        return integer.to_owned();
    }
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{LabelLocale, format_locale_number};

    #[test]
    fn en_us_groups_thousands_and_trims_fraction() {
        assert_eq!(format_locale_number(0.0, LabelLocale::EnUs), "0");
        assert_eq!(format_locale_number(1234.5, LabelLocale::EnUs), "1,234.5");
        assert_eq!(format_locale_number(-1_000_000.0, LabelLocale::EnUs), "-1,000,000");
        assert_eq!(format_locale_number(0.30000000000000004, LabelLocale::EnUs), "0.3");
        assert_eq!(format_locale_number(2.0 / 3.0, LabelLocale::EnUs), "0.667");
    }

    #[test]
    fn es_es_swaps_separators_and_skips_four_digit_grouping() {
        assert_eq!(format_locale_number(1234.5, LabelLocale::EsEs), "1234,5");
        assert_eq!(format_locale_number(12345.25, LabelLocale::EsEs), "12.345,25");
    }

    #[test]
    fn negative_values_rounding_to_zero_drop_the_sign() {
        assert_eq!(format_locale_number(-0.0001, LabelLocale::EnUs), "0");
    }
}
