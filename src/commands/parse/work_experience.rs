use regex::Regex;

use crate::model::JobEntry;

use super::compile_pattern;

// A date range is the segmentation anchor: resumes rarely label experience
// entries, but almost every entry carries one. Start accepts Month Year,
// bare year, or M/YYYY; end additionally accepts "present".
const DATE_RANGE_PATTERN: &str = r"(?i)((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*\d{4}|\d{4}|\d{1,2}/\d{4})\s*-\s*((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*\d{4}|\d{4}|\d{1,2}/\d{4}|present)";

pub(super) fn date_range_regex() -> Option<Regex> {
    compile_pattern(DATE_RANGE_PATTERN)
}

/// Segments the experience lines into job entries, anchored on date ranges.
/// Accumulator states: no open job / one open job plus pending lines. A new
/// anchor pops the preceding pending line as the company, flushes the open
/// job, and opens the next one.
pub(crate) fn extract_work_experience(lines: &[String]) -> Vec<JobEntry> {
    let Some(date_range) = date_range_regex() else {
        return Vec::new();
    };

    let mut accumulator = JobAccumulator::default();

    for line in lines {
        let Some(captures) = date_range.captures(line) else {
            accumulator.buffer_line(line);
            continue;
        };

        let company = accumulator.take_company_candidate(&date_range);
        accumulator.flush();

        let anchor_start = captures
            .get(0)
            .map(|matched| matched.start())
            .unwrap_or(0);
        let start_date = captures
            .get(1)
            .map(|value| value.as_str().trim().to_string())
            .unwrap_or_default();
        let end_date = captures
            .get(2)
            .map(|value| value.as_str().trim().to_string())
            .unwrap_or_default();
        let current = end_date.eq_ignore_ascii_case("present");

        accumulator.open(JobEntry {
            company,
            position: position_before_anchor(line, anchor_start),
            start_date,
            end_date,
            description: String::new(),
            current,
        });
    }

    let jobs = accumulator.finish();

    if jobs.is_empty() {
        return fallback_single_entry(lines, &date_range);
    }

    jobs
}

#[derive(Default)]
struct JobAccumulator {
    open_job: Option<JobEntry>,
    pending_lines: Vec<String>,
    completed: Vec<JobEntry>,
}

impl JobAccumulator {
    fn buffer_line(&mut self, line: &str) {
        self.pending_lines.push(line.to_string());
    }

    // The line immediately before an anchor names the company of the entry
    // the anchor opens, so it is removed from the pending buffer before the
    // flush can claim it as description text.
    fn take_company_candidate(&mut self, date_range: &Regex) -> String {
        let usable = self
            .pending_lines
            .last()
            .is_some_and(|candidate| !candidate.is_empty() && !date_range.is_match(candidate));

        if usable {
            self.pending_lines.pop().unwrap_or_default()
        } else {
            String::new()
        }
    }

    // Closes the open job, joining the pending lines into its description.
    // With no open job the pending lines have nothing to attach to and are
    // discarded.
    fn flush(&mut self) {
        if let Some(mut job) = self.open_job.take() {
            job.description = self.pending_lines.join("\n").trim().to_string();
            self.completed.push(job);
        }
        self.pending_lines.clear();
    }

    fn open(&mut self, job: JobEntry) {
        self.open_job = Some(job);
    }

    fn finish(mut self) -> Vec<JobEntry> {
        self.flush();
        self.completed
    }
}

fn position_before_anchor(line: &str, anchor_start: usize) -> String {
    let prefix = line[..anchor_start].trim();
    let position = match prefix.split_once('|') {
        Some((before_pipe, _)) => before_pipe.trim(),
        None => prefix,
    };
    position.to_string()
}

// Minimal second attempt when no anchor line was found: assume line 0 is the
// company and line 1 carries the position and dates.
pub(super) fn fallback_single_entry(lines: &[String], date_range: &Regex) -> Vec<JobEntry> {
    if lines.len() < 3 {
        return Vec::new();
    }

    let Some(captures) = date_range.captures(&lines[1]) else {
        return Vec::new();
    };

    let anchor_start = captures
        .get(0)
        .map(|matched| matched.start())
        .unwrap_or(0);
    let start_date = captures
        .get(1)
        .map(|value| value.as_str().trim().to_string())
        .unwrap_or_default();
    let end_date = captures
        .get(2)
        .map(|value| value.as_str().trim().to_string())
        .unwrap_or_default();
    let current = end_date.eq_ignore_ascii_case("present");

    let mut position = position_before_anchor(&lines[1], anchor_start);
    if position.is_empty() {
        position = "N/A".to_string();
    }

    vec![JobEntry {
        company: lines[0].trim().to_string(),
        position,
        start_date,
        end_date,
        description: lines[2..].join("\n").trim().to_string(),
        current,
    }]
}
