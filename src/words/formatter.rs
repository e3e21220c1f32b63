// ============================================================================
// Integer-to-English Formatter
// Renders unsigned integers as capitalized English phrases
// ============================================================================

/// Scale names for each group of three digits, most significant first.
/// The final empty name is the ones group. Seven groups cover all of u64.
const GROUP_NAMES: [&str; 7] = [
    "quintillion",
    "quadrillion",
    "trillion",
    "billion",
    "million",
    "thousand",
    "",
];

const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Converts an unsigned integer to its English spelling with a leading
/// capital, e.g. `1121` becomes `"One thousand one hundred twenty-one"`.
///
/// Groups of three digits are rendered independently and joined with
/// their scale names; zero groups are skipped entirely, so there is no
/// "and" and no zero filler ("One thousand one", not "One thousand and
/// one").
pub fn to_words(value: u64) -> String {
    if value == 0 {
        return "Zero".to_string();
    }

    // Split into groups of three, least significant last
    let mut groups = [0u16; GROUP_NAMES.len()];
    let mut remaining = value;
    for slot in groups.iter_mut().rev() {
        *slot = (remaining % 1000) as u16;
        remaining /= 1000;
    }

    let mut parts: Vec<String> = Vec::new();
    for (&group, name) in groups.iter().zip(GROUP_NAMES) {
        if group == 0 {
            continue;
        }
        let spoken = three_digits_to_words(group);
        if name.is_empty() {
            parts.push(spoken);
        } else {
            parts.push(format!("{spoken} {name}"));
        }
    }

    capitalize_first(&parts.join(" "))
}

/// Uppercases the first ASCII character, leaving the rest untouched.
pub(crate) fn capitalize_first(phrase: &str) -> String {
    let mut out = phrase.to_string();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

fn three_digits_to_words(group: u16) -> String {
    debug_assert!(group < 1000);
    let hundreds = group / 100;
    let below = group % 100;

    let mut spoken = String::new();
    if hundreds != 0 {
        spoken.push_str(ONES[hundreds as usize]);
        spoken.push_str(" hundred");
        if below != 0 {
            spoken.push(' ');
        }
    }
    if below != 0 {
        spoken.push_str(&two_digits_to_words(below));
    }
    spoken
}

fn two_digits_to_words(below: u16) -> String {
    debug_assert!(0 < below && below < 100);
    let tens = (below / 10) as usize;
    let ones = (below % 10) as usize;
    match (tens, ones) {
        (0, _) => ONES[ones].to_string(),
        (1, _) => TEENS[ones].to_string(),
        (_, 0) => TENS[tens].to_string(),
        _ => format!("{}-{}", TENS[tens], ONES[ones]),
    }
}
