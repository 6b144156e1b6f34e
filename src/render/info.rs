use super::refs::{ObjectReferences, RefType};
use pdf_writer::{Date as PDate, Pdf, Ref, TextStr};

/// Writes the document information dictionary for a frame: its title, the
/// crate that made it, and when.
pub(crate) fn write_info(title: &str, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
    let id = refs.get(RefType::Info);
    let mut info = writer.document_info(id);

    if !title.is_empty() {
        info.title(TextStr(title));
    }
    info.creator(TextStr(concat!(
        env!("CARGO_PKG_NAME"),
        " v",
        env!("CARGO_PKG_VERSION")
    )));

    use chrono::prelude::*;
    let now = Local::now();
    let offset = now.offset().fix();
    let offset_hours = offset.local_minus_utc() / (60 * 60);
    let offset_minutes = ((offset.local_minus_utc() - (offset_hours * (60 * 60))) / 60).abs();
    let date = PDate::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8);
    info.creation_date(date);

    id
}
