use crate::model::PersonalInfo;

use super::compile_pattern;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE_PATTERN: &str = r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";
const CITY_PATTERN: &str = r"([A-Z][a-z]+(?: [A-Z][a-z]+)?),\s*(?:[A-Z]{2}|\w+)";
const STATE_ZIP_PATTERN: &str = r"([A-Z]{2})\s*(\d{5})";
const STREET_ADDRESS_PATTERN: &str = r"(?i)\d+\s+\w+\s+(?:St|Ave|Rd|Blvd|Ln|Dr)";
const URL_PATTERN: &str = r"(?i)https?://(?:www\.)?[a-zA-Z0-9][a-zA-Z0-9.-]*\.com(?:/\S*)?";

/// Extracts contact details from the header lines. Every sub-extraction is
/// independent; a field that cannot be found stays at its default.
pub(crate) fn extract_personal_info(header_lines: &[String]) -> PersonalInfo {
    let text = header_lines.join(" ");
    let mut info = PersonalInfo::default();

    if let Some(email) = first_match(EMAIL_PATTERN, &text) {
        info.email = email;
    }

    if let Some(phone) = first_match(PHONE_PATTERN, &text) {
        info.phone = phone;
    }

    apply_city_state_zip(&text, &mut info);

    info.address = find_street_address(header_lines);
    info.full_name = detect_full_name(header_lines);
    apply_links(header_lines, &mut info);

    info
}

fn first_match(pattern: &str, text: &str) -> Option<String> {
    let regex = compile_pattern(pattern)?;
    regex.find(text).map(|found| found.as_str().trim().to_string())
}

fn apply_city_state_zip(text: &str, info: &mut PersonalInfo) {
    let Some(city_regex) = compile_pattern(CITY_PATTERN) else {
        return;
    };
    let Some(captures) = city_regex.captures(text) else {
        return;
    };
    let Some(city) = captures.get(1) else {
        return;
    };

    info.city = city.as_str().trim().to_string();

    // State and zip are only trusted when they appear after the city match.
    let remainder = &text[city.end()..];
    let Some(state_zip_regex) = compile_pattern(STATE_ZIP_PATTERN) else {
        return;
    };
    if let Some(captures) = state_zip_regex.captures(remainder) {
        info.state = captures
            .get(1)
            .map(|value| value.as_str().to_string())
            .unwrap_or_default();
        info.zip_code = captures.get(2).map(|value| value.as_str().to_string());
    }
}

fn find_street_address(header_lines: &[String]) -> Option<String> {
    let regex = compile_pattern(STREET_ADDRESS_PATTERN)?;
    header_lines
        .iter()
        .find(|line| regex.is_match(line))
        .map(|line| line.trim().to_string())
}

// A fully upper-case line near the top that is not an email address, link,
// or phone number is the best name candidate. Falls back to line 0 verbatim.
fn detect_full_name(header_lines: &[String]) -> String {
    header_lines
        .iter()
        .take(5)
        .find(|line| is_upper_case_name_line(line))
        .or_else(|| header_lines.first())
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

fn is_upper_case_name_line(line: &str) -> bool {
    line == line.to_uppercase()
        && !line.contains('@')
        && !line.contains("http")
        && !line.starts_with(|character: char| character.is_ascii_digit())
}

fn apply_links(header_lines: &[String], info: &mut PersonalInfo) {
    let Some(url_regex) = compile_pattern(URL_PATTERN) else {
        return;
    };

    for line in header_lines {
        let Some(found) = url_regex.find(line) else {
            continue;
        };
        let url = found.as_str().to_string();
        let lowered = url.to_lowercase();

        if lowered.contains("linkedin.com") {
            if info.linked_in.is_none() {
                info.linked_in = Some(url);
            }
        } else if lowered.contains("github.com") {
            if info.github.is_none() {
                info.github = Some(url);
            }
        } else if info.website.is_none() {
            info.website = Some(url);
        }
    }
}
