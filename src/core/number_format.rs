//! Spreadsheet-style number masks used by data labels and stack totals.
//!
//! Supported subset: up to three `;`-separated sections
//! (positive;negative;zero), `#`/`0`/`?` digit placeholders, `,` grouping,
//! trailing `,` thousands scaling, `.` decimals, `%` scaling, quoted and
//! backslash-escaped literals. Color directives must be removed with
//! [`strip_colors`] first; any other bracketed directive is ignored.

use rust_decimal::Decimal;
use smallvec::SmallVec;

const PERCENT_SIGNIFICANT_DIGITS: u32 = 14;
// Exponents whose 14-digit mantissa still fits in a `Decimal`.
const DECIMAL_MIN_EXPONENT: i32 = -14;
const DECIMAL_MAX_EXPONENT: i32 = 14;

const NAMED_COLORS: [&str; 8] = [
    "black", "blue", "cyan", "green", "magenta", "red", "white", "yellow",
];

/// Removes color directives such as `[red]`, `[color=ff0000]` or
/// `[backgroundColor=#fff]` from a number mask.
#[must_use]
pub fn strip_colors(format: &str) -> String {
    let mut stripped = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(open) = rest.find('[') {
        let Some(close_offset) = rest[open..].find(']') else {
            break;
        };
        let close = open + close_offset;
        let directive = rest[open + 1..close].to_ascii_lowercase();
        stripped.push_str(&rest[..open]);
        if !is_color_directive(&directive) {
            stripped.push_str(&rest[open..=close]);
        }
        rest = &rest[close + 1..];
    }

    stripped.push_str(rest);
    stripped
}

fn is_color_directive(directive: &str) -> bool {
    NAMED_COLORS.contains(&directive)
        || directive.starts_with("color=")
        || directive.starts_with("backgroundcolor=")
        || directive
            .strip_prefix("color")
            .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
}

/// Formats `value` with a spreadsheet-style mask.
///
/// An empty or `General` mask renders the shortest decimal form of the value.
#[must_use]
pub fn format_number(value: f64, format: &str) -> String {
    if !value.is_finite() {
        return plain_number(value);
    }

    let sections = split_sections(format);
    let non_empty = sections.iter().any(|section| !section.trim().is_empty());
    if !non_empty || format.trim().eq_ignore_ascii_case("general") {
        return plain_number(value);
    }

    let (section, explicit_sign) = if value < 0.0 && sections.len() >= 2 {
        (sections[1], true)
    } else if value == 0.0 && sections.len() >= 3 {
        (sections[2], true)
    } else {
        (sections[0], false)
    };

    let mask = NumberMask::parse(section);
    let digits = mask.render(value.abs());
    let is_zero = !digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && !explicit_sign && !is_zero {
        "-"
    } else {
        ""
    };

    format!("{}{sign}{digits}{}", mask.prefix, mask.suffix)
}

/// Shortest decimal rendering without exponent notation.
#[must_use]
pub fn plain_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Renders a ratio as a percentage rounded to 14 significant digits.
///
/// Ties at the last digit round half-to-even; trailing zeros are dropped, so
/// `0.07` renders as `7%` instead of exposing binary noise. The result never
/// uses exponent notation, however large or small the ratio.
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    let scaled = ratio * 100.0;
    if !scaled.is_finite() || scaled == 0.0 {
        return format!("{}%", plain_number(scaled));
    }

    let precision = PERCENT_SIGNIFICANT_DIGITS as usize - 1;
    let scientific = format!("{:.*e}", precision, scaled);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{}%", plain_number(scaled));
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{}%", plain_number(scaled));
    };

    let text = if (DECIMAL_MIN_EXPONENT..=DECIMAL_MAX_EXPONENT).contains(&exponent) {
        Decimal::from_scientific(&scientific)
            .map(|decimal| decimal.normalize().to_string())
            .unwrap_or_else(|_| expand_scientific(mantissa, exponent))
    } else {
        expand_scientific(mantissa, exponent)
    };
    format!("{text}%")
}

// Places the mantissa digits around the decimal point without an exponent.
fn expand_scientific(mantissa: &str, exponent: i32) -> String {
    let (sign, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = unsigned.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    if digits.is_empty() {
        return "0".to_owned();
    }

    let integer_len = exponent + 1;
    let body = if integer_len <= 0 {
        let zeros = "0".repeat(integer_len.unsigned_abs() as usize);
        format!("0.{zeros}{digits}")
    } else {
        let integer_len = integer_len as usize;
        if integer_len >= digits.len() {
            format!("{digits}{}", "0".repeat(integer_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..integer_len], &digits[integer_len..])
        }
    };
    format!("{sign}{body}")
}

fn split_sections(format: &str) -> SmallVec<[&str; 3]> {
    let mut sections = SmallVec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut in_brackets = false;
    let mut escaped = false;

    for (idx, ch) in format.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if !in_quotes => escaped = true,
            '"' if !in_brackets => in_quotes = !in_quotes,
            '[' if !in_quotes => in_brackets = true,
            ']' if !in_quotes => in_brackets = false,
            ';' if !in_quotes && !in_brackets => {
                sections.push(&format[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    sections.push(&format[start..]);
    sections
}

#[derive(Debug, Default)]
struct NumberMask {
    prefix: String,
    suffix: String,
    has_digits: bool,
    min_integer_digits: usize,
    min_decimals: usize,
    max_decimals: usize,
    grouping: bool,
    thousands_scale: i32,
    percent_scale: i32,
}

impl NumberMask {
    fn parse(section: &str) -> Self {
        let mut mask = Self::default();
        let mut in_pattern = false;
        let mut pattern_done = false;
        let mut in_decimals = false;
        let mut pending_commas = 0;
        let mut chars = section.chars();

        while let Some(ch) = chars.next() {
            let literal = match ch {
                '#' | '0' | '?' if !pattern_done => {
                    in_pattern = true;
                    mask.has_digits = true;
                    if pending_commas > 0 {
                        mask.grouping = true;
                        pending_commas = 0;
                    }
                    if in_decimals {
                        mask.max_decimals += 1;
                        if ch == '0' {
                            mask.min_decimals = mask.max_decimals;
                        }
                    } else if ch == '0' {
                        mask.min_integer_digits += 1;
                    }
                    None
                }
                ',' if in_pattern && !pattern_done => {
                    if in_decimals {
                        mask.thousands_scale += 1;
                    } else {
                        pending_commas += 1;
                    }
                    None
                }
                '.' if !pattern_done && !in_decimals => {
                    in_pattern = true;
                    in_decimals = true;
                    mask.thousands_scale += pending_commas;
                    pending_commas = 0;
                    None
                }
                '"' => {
                    let mut quoted = String::new();
                    for next in chars.by_ref() {
                        if next == '"' {
                            break;
                        }
                        quoted.push(next);
                    }
                    Some(quoted)
                }
                '\\' => chars.next().map(String::from),
                '[' => {
                    for next in chars.by_ref() {
                        if next == ']' {
                            break;
                        }
                    }
                    None
                }
                '_' | '*' => {
                    chars.next();
                    None
                }
                other => {
                    if other == '%' {
                        mask.percent_scale += 1;
                    }
                    Some(String::from(other))
                }
            };

            if let Some(text) = literal {
                if in_pattern {
                    pattern_done = true;
                    mask.suffix.push_str(&text);
                } else {
                    mask.prefix.push_str(&text);
                }
            }
        }

        mask.thousands_scale += pending_commas;
        mask
    }

    fn render(&self, magnitude: f64) -> String {
        if !self.has_digits {
            return String::new();
        }
        let scaled =
            magnitude * 100f64.powi(self.percent_scale) / 1000f64.powi(self.thousands_scale);
        let fixed = format!("{scaled:.prec$}", prec = self.max_decimals);
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut fraction = fraction.to_owned();
        while fraction.len() > self.min_decimals && fraction.ends_with('0') {
            fraction.pop();
        }

        let integer = if integer == "0" && self.min_integer_digits == 0 {
            String::new()
        } else if integer.len() < self.min_integer_digits {
            format!("{integer:0>width$}", width = self.min_integer_digits)
        } else {
            integer.to_owned()
        };
        let integer = if self.grouping {
            group_thousands(&integer)
        } else {
            integer
        };

        if fraction.is_empty() {
            if integer.is_empty() && self.max_decimals == 0 {
                "0".to_owned()
            } else {
                integer
            }
        } else {
            format!("{integer}.{fraction}")
        }
    }
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
