//! Turns comma separated weather text into [`Reading`]s.
//!
//! The format is one observation per line with eight fields in fixed order:
//! `Region,Country,State,City,Month,Day,Year,AvgTemperature`. There is no quoting and
//! no escaping. The first line is a header and is always discarded.

use crate::ingest::diagnostics::DiagnosticSink;
use crate::ingest::error::{IngestError, MalformedRow, RowIssue};
use crate::types::reading::{Reading, MISSING_TEMPERATURE};
use serde::Serialize;
use std::io::BufRead;
use std::str::FromStr;

/// Number of fields every data line must have.
pub const FIELD_COUNT: usize = 8;

/// Line counts gathered while building a [`crate::WeatherDataset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Physical lines read, header and blank lines included.
    pub lines_read: usize,
    /// Lines that became readings.
    pub rows_accepted: usize,
    /// Lines reported to the diagnostic sink and dropped.
    pub rows_skipped: usize,
}

/// Parses one data line (without its line terminator) into a [`Reading`].
///
/// Text fields are kept exactly as split. A temperature equal to
/// [`MISSING_TEMPERATURE`] becomes `None`.
///
/// # Examples
///
/// ```
/// use global_weather::parse_line;
///
/// let reading = parse_line("Region2,Country2,,City2,2,16,2021,-99.0").unwrap();
/// assert_eq!(reading.state, "");
/// assert_eq!(reading.avg_temperature, None);
/// ```
pub fn parse_line(line: &str) -> Result<Reading, RowIssue> {
    let fields: Vec<&str> = line.split(',').collect();
    let &[region, country, state, city, month, day, year, avg_temperature] = fields.as_slice()
    else {
        return Err(RowIssue::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };

    let month = parse_integer("month", month)?;
    let day = parse_integer("day", day)?;
    let year = parse_integer("year", year)?;
    let temperature: f64 = avg_temperature
        .trim()
        .parse()
        .map_err(|_| RowIssue::InvalidTemperature(avg_temperature.to_string()))?;

    Ok(Reading {
        region: region.to_string(),
        country: country.to_string(),
        state: state.to_string(),
        city: city.to_string(),
        month,
        day,
        year,
        avg_temperature: (temperature != MISSING_TEMPERATURE).then_some(temperature),
    })
}

fn parse_integer<T: FromStr>(field: &'static str, value: &str) -> Result<T, RowIssue> {
    value.parse().map_err(|_| RowIssue::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

/// Reads every data line of `reader`, in order, reporting rejected lines to `sink`.
///
/// Only an I/O failure of the reader itself is an error.
pub(crate) fn read_readings<R: BufRead>(
    mut reader: R,
    sink: &mut dyn DiagnosticSink,
) -> Result<(Vec<Reading>, LoadReport), IngestError> {
    let mut readings = Vec::new();
    let mut report = LoadReport::default();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(IngestError::Read)?;
        if bytes_read == 0 {
            break;
        }
        report.lines_read += 1;

        // header
        if report.lines_read == 1 {
            continue;
        }

        let line = strip_line_terminator(&buffer);
        if line.is_empty() {
            continue;
        }

        let parsed = std::str::from_utf8(line)
            .map_err(|_| RowIssue::InvalidUtf8)
            .and_then(parse_line);
        match parsed {
            Ok(reading) => readings.push(reading),
            Err(issue) => {
                report.rows_skipped += 1;
                sink.malformed_row(&MalformedRow {
                    line_number: report.lines_read,
                    line: String::from_utf8_lossy(line).into_owned(),
                    issue,
                });
            }
        }
    }

    report.rows_accepted = readings.len();
    Ok((readings, report))
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    const HEADER: &str = "Region,Country,State,City,Month,Day,Year,AvgTemperature\n";

    fn read(data: &str) -> Result<(Vec<Reading>, LoadReport, Vec<MalformedRow>), IngestError> {
        let mut rejected = Vec::new();
        let (readings, report) = read_readings(data.as_bytes(), &mut rejected)?;
        Ok((readings, report, rejected))
    }

    #[test]
    fn test_parse_line_fields() {
        let reading = parse_line("Region1,Country1,State1,City1,1,15,2020,15.0").unwrap();
        assert_eq!(reading.region, "Region1");
        assert_eq!(reading.country, "Country1");
        assert_eq!(reading.state, "State1");
        assert_eq!(reading.city, "City1");
        assert_eq!((reading.month, reading.day, reading.year), (1, 15, 2020));
        assert_eq!(reading.avg_temperature, Some(15.0));
    }

    #[test]
    fn test_parse_line_keeps_text_untrimmed() {
        let reading = parse_line(" Europe , France,,Paris ,1,1,1995, 3.5 ").unwrap();
        assert_eq!(reading.region, " Europe ");
        assert_eq!(reading.country, " France");
        assert_eq!(reading.city, "Paris ");
        assert_eq!(reading.avg_temperature, Some(3.5));
    }

    #[test]
    fn test_parse_line_maps_sentinel_to_missing() {
        let reading = parse_line("R,C,S,T,2,16,2021,-99").unwrap();
        assert_eq!(reading.avg_temperature, None);
    }

    #[test]
    fn test_parse_line_rejects_wrong_field_count() {
        assert_eq!(
            parse_line("R,C,S,T,1,1,2000"),
            Err(RowIssue::FieldCount {
                expected: 8,
                found: 7
            })
        );
        assert_eq!(
            parse_line("R,C,S,T,1,1,2000,1.0,extra"),
            Err(RowIssue::FieldCount {
                expected: 8,
                found: 9
            })
        );
    }

    #[test]
    fn test_parse_line_rejects_bad_numbers() {
        assert_eq!(
            parse_line("R,C,S,T,Jan,1,2000,1.0"),
            Err(RowIssue::InvalidInteger {
                field: "month",
                value: "Jan".to_string()
            })
        );
        assert_eq!(
            parse_line("R,C,S,T,1, 1,2000,1.0"),
            Err(RowIssue::InvalidInteger {
                field: "day",
                value: " 1".to_string()
            })
        );
        assert_eq!(
            parse_line("R,C,S,T,1,1,20x0,1.0"),
            Err(RowIssue::InvalidInteger {
                field: "year",
                value: "20x0".to_string()
            })
        );
        assert_eq!(
            parse_line("R,C,S,T,1,1,2000,warm"),
            Err(RowIssue::InvalidTemperature("warm".to_string()))
        );
    }

    #[test]
    fn test_read_skips_header_and_keeps_order() -> Result<(), Box<dyn std::error::Error>> {
        let data = format!(
            "{HEADER}Region1,Country1,State1,City1,1,15,2020,15.0\nRegion2,Country2,,City2,2,16,2021,-99.0\n"
        );
        let (readings, report, rejected) = read(&data)?;

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].city, "City1");
        assert_eq!(readings[1].city, "City2");
        assert!(rejected.is_empty());
        assert_eq!(
            report,
            LoadReport {
                lines_read: 3,
                rows_accepted: 2,
                rows_skipped: 0
            }
        );
        Ok(())
    }

    #[test]
    fn test_read_discards_header_even_if_it_looks_like_data() -> Result<(), Box<dyn std::error::Error>>
    {
        let data = "R,C,S,T,1,1,2000,1.0\nR,C,S,T,1,2,2000,2.0";
        let (readings, _, _) = read(data)?;

        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].day, 2);
        Ok(())
    }

    #[test]
    fn test_read_reports_and_skips_malformed_lines() -> Result<(), Box<dyn std::error::Error>> {
        let data = format!("{HEADER}R,C,S,T,1,1,2000,1.0\nR,C,S,T,1,x,2000,1.0\nR,C,S\nR,C,S,T,1,3,2000,3.0\n");
        let (readings, report, rejected) = read(&data)?;

        assert_eq!(readings.len(), 2);
        assert_eq!(report.rows_skipped, 2);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].line_number, 3);
        assert_eq!(rejected[0].line, "R,C,S,T,1,x,2000,1.0");
        assert_eq!(rejected[1].line_number, 4);
        assert_eq!(
            rejected[1].to_string(),
            "Error parsing line 4 (expected 8 fields, found 3): R,C,S"
        );
        Ok(())
    }

    #[test]
    fn test_read_handles_crlf_and_blank_lines() -> Result<(), Box<dyn std::error::Error>> {
        let data = format!("{HEADER}R,C,S,T,1,1,2000,1.0\r\n\r\n\nR,C,S,T,1,2,2000,2.5\r\n");
        let (readings, report, rejected) = read(&data)?;

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].avg_temperature, Some(2.5));
        assert!(rejected.is_empty());
        assert_eq!(report.lines_read, 5);
        Ok(())
    }

    #[test]
    fn test_read_rejects_invalid_utf8() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = HEADER.as_bytes().to_vec();
        data.extend_from_slice(b"R,C,S,\xFF\xFE,1,1,2000,1.0\n");
        let mut rejected = Vec::new();
        let (readings, _) = read_readings(data.as_slice(), &mut rejected)?;

        assert!(readings.is_empty());
        assert_eq!(rejected[0].issue, RowIssue::InvalidUtf8);
        Ok(())
    }

    #[test]
    fn test_read_empty_and_header_only() -> Result<(), Box<dyn std::error::Error>> {
        assert!(read("")?.0.is_empty());
        assert!(read(HEADER)?.0.is_empty());
        Ok(())
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk went away"))
        }
    }

    #[test]
    fn test_read_surfaces_io_failure() {
        let reader = io::BufReader::new(FailingReader);
        let mut rejected = Vec::new();
        let result = read_readings(reader, &mut rejected);
        assert!(matches!(result, Err(IngestError::Read(_))));
    }
}
