mod convert;
mod state;

pub use convert::{parse_count, parse_date};
pub use state::{Column, State};

use regex::Regex;

use crate::country::CountryTable;
use crate::record::OutbreakRecord;

/// First line of the events table; everything before it is prologue.
const TABLE_START: &str = "All events currently being monitored by WHO AFRO";

/// Header cells as the text extractor emits them, one per line. Long
/// headings wrap in the source table, so some entries are fragments.
const HEADER_CELLS: [&str; 11] = [
    "Country",
    "Event",
    "Grade",
    "Date notified",
    "Start of",
    "End of",
    "Total cases",
    "Cases",
    "Deaths",
    "CFR",
    "New Events",
];

/// Country cells whose first word is not a dictionary start token.
const COUNTRY_LINE_OVERRIDES: [&str; 2] = ["West and", "South Sudan"];

const FOOTER_HEADING: &str = "Health Emergency Information and Risk Assessment";
const END_MARKER: &str = "†Grading is an internal WHO process";

/// Table cells never run this long; anything longer is note text.
const MAX_CELL_CHARS: usize = 100;

/// Result of a parse pass over one bulletin's text.
#[derive(Debug)]
pub struct ParseOutput {
    /// Records in bulletin order.
    pub records: Vec<OutbreakRecord>,
    /// Field tokens seen before any record had opened, and dropped.
    pub stray_tokens: usize,
}

/// Line-oriented state machine over `pdftotext` output.
///
/// The extractor emits one table cell per line with blank lines
/// between cells, so a blank line walks the parser to the next column
/// while recognizable lines (country names, percentages, header cells,
/// footer boilerplate) re-anchor it.
pub struct BulletinParser<'a> {
    countries: &'a CountryTable,
    cfr_pattern: Regex,
    state: State,
    in_prologue: bool,
}

impl<'a> BulletinParser<'a> {
    #[must_use]
    pub fn new(countries: &'a CountryTable) -> Self {
        Self {
            countries,
            cfr_pattern: Regex::new(r"^\d+(?:[.,]\d+)?\s*%$").expect("CFR pattern to compile"),
            state: State::Prologue,
            in_prologue: true,
        }
    }

    pub fn parse(mut self, text: &str) -> ParseOutput {
        let mut records: Vec<RawRecord> = Vec::new();
        let mut stray_tokens = 0usize;
        let mut previous: Option<State> = None;

        for line in text.lines() {
            let token = self.classify(line);
            let state = self.state;

            let State::Field(column) = state else {
                previous = Some(state);
                continue;
            };

            // A country cell reached from any other state opens a new
            // record; consecutive country lines are one wrapped cell.
            if column == Column::Country && previous != Some(state) {
                records.push(RawRecord::default());
            }
            previous = Some(state);

            match records.last_mut() {
                Some(record) => record.append(column, token),
                None => {
                    if !token.is_empty() {
                        stray_tokens += 1;
                    }
                }
            }
        }

        if stray_tokens > 0 {
            tracing::warn!(stray_tokens, "dropped tokens outside any record");
        }

        ParseOutput {
            records: records
                .into_iter()
                .map(|raw| raw.finalize(self.countries))
                .collect(),
            stray_tokens,
        }
    }

    /// Classify one line, updating the parser state, and return the
    /// token it contributes (empty for discarded lines).
    fn classify<'t>(&mut self, line: &'t str) -> &'t str {
        let line = line.trim();

        if line.is_empty() {
            self.state = self.state.advance();
            return "";
        }
        if self.state == State::End {
            return "";
        }
        if line.starts_with(TABLE_START) || line == "Country" {
            self.state = State::Header;
            self.in_prologue = false;
            return "";
        }
        if self.in_prologue {
            return "";
        }

        if self.countries.is_country_line(line) || COUNTRY_LINE_OVERRIDES.contains(&line) {
            self.state = State::Field(Column::Country);
        }
        if self.cfr_pattern.is_match(line) {
            self.state = State::Field(Column::Cfr);
        }
        if HEADER_CELLS.contains(&line) {
            self.state = State::Header;
        }
        if line.chars().count() > MAX_CELL_CHARS {
            self.state = State::Field(Column::Notes);
        }
        if line.starts_with("Go to") || line == FOOTER_HEADING {
            self.state = State::Footer;
        }
        if line.starts_with(END_MARKER) {
            self.state = State::End;
        }

        line
    }
}

/// Parse one bulletin's extracted text into records.
#[must_use]
pub fn parse_bulletin(text: &str, countries: &CountryTable) -> Vec<OutbreakRecord> {
    BulletinParser::new(countries).parse(text).records
}

/// Per-column token accumulator for one record.
#[derive(Debug, Default)]
struct RawRecord {
    country: String,
    event: String,
    grade: String,
    date_notified: String,
    date_start: String,
    date_end: String,
    cases_total: String,
    cases_confirmed: String,
    deaths: String,
    cfr: String,
    notes: String,
}

impl RawRecord {
    fn append(&mut self, column: Column, token: &str) {
        let field = match column {
            Column::Country => &mut self.country,
            Column::Event => &mut self.event,
            Column::Grade => &mut self.grade,
            Column::DateNotified => &mut self.date_notified,
            Column::DateStart => &mut self.date_start,
            Column::DateEnd => &mut self.date_end,
            Column::CasesTotal => &mut self.cases_total,
            Column::CasesConfirmed => &mut self.cases_confirmed,
            Column::Deaths => &mut self.deaths,
            Column::Cfr => &mut self.cfr,
            Column::Notes => &mut self.notes,
        };
        if !field.is_empty() && !token.is_empty() {
            field.push(' ');
        }
        field.push_str(token);
    }

    fn finalize(self, countries: &CountryTable) -> OutbreakRecord {
        let country = self.country.trim().to_string();
        OutbreakRecord {
            iso3: countries.iso3(&country).map(str::to_string),
            country,
            event: self.event.trim().to_string(),
            grade: self.grade.trim().to_string(),
            date_notified: parse_date(&self.date_notified),
            date_start: parse_date(&self.date_start),
            date_end: parse_date(&self.date_end),
            cases_total: parse_count(&self.cases_total),
            cases_confirmed: parse_count(&self.cases_confirmed),
            deaths: parse_count(&self.deaths),
            cfr: self.cfr.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }
}
