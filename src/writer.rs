use tbl::{AccountReport, Result};

use csv::Writer;

/// Serializes the account reports as CSV, header included
pub fn write_reports(reports: &[AccountReport]) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    for report in reports.iter() {
        log::debug!("Serializing report: {report:?}");
        writer.serialize(report)?;
    }

    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}
